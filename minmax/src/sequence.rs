//! Generate input sequences.

use crate::Error;
use rand::Rng;

/// Parameters for [generate].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Number of elements to draw.
    pub length: usize,
    /// Smallest value that may be drawn.
    pub lower: i32,
    /// One past the largest value that may be drawn.
    pub upper: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: 100_000,
            lower: -10_000,
            upper: 10_000,
        }
    }
}

impl Config {
    /// Ensures `[lower, upper)` contains at least one value.
    pub fn validate(&self) -> Result<(), Error> {
        if self.lower >= self.upper {
            return Err(Error::InvalidBounds {
                lower: self.lower,
                upper: self.upper,
            });
        }
        Ok(())
    }
}

/// Draws `config.length` values independently and uniformly from `[config.lower, config.upper)`.
///
/// The caller owns `rng`, so seeding it makes the output reproducible.
pub fn generate<R: Rng>(rng: &mut R, config: &Config) -> Result<Vec<i32>, Error> {
    config.validate()?;
    Ok((0..config.length)
        .map(|_| rng.gen_range(config.lower..config.upper))
        .collect())
}
