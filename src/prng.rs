//! Seedable pseudo-random number generation for weight initialization.

use std::f64::consts::PI;

/// Pseudo-random number generator that may optionally be seeded.
///
/// A seeded generator produces a deterministic sequence by mixing the seed
/// through a sine step and advancing it by one per draw, so two generators
/// constructed with the same seed reproduce identical sequences. An unseeded
/// generator draws from the thread-local uniform source of the `rand` crate.
///
/// This generator is only used for weight initialization and makes no claim
/// of statistical quality.
#[derive(Debug, Clone)]
pub struct Prng {
    seed: Option<f64>,
}

impl Prng {
    /// Creates a new generator, optionally seeded for deterministic results.
    ///
    /// A seed that is an exact multiple of pi would make the first draw
    /// degenerate (`sin(seed) == 0`), so such seeds are nudged before use.
    pub fn new(seed: Option<f64>) -> Self {
        let seed = seed.map(|s| if s % PI == 0.0 { s + 0.1 } else { s });
        Self { seed }
    }

    /// Returns the next random floating-point number in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        match &mut self.seed {
            Some(seed) => {
                // take the fractional part of the scaled sine of the seed
                let mut digits = seed.sin() * 1e5;
                digits -= digits.floor();
                *seed += 1.0;
                digits
            }
            None => rand::random::<f64>(),
        }
    }

    /// Returns a random floating-point number between `min` (inclusive) and
    /// `max` (exclusive).
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        self.next_f64() * (max - min) + min
    }

    /// Returns a random integer between `min` and `max`, both inclusive.
    pub fn uniform_int(&mut self, min: i64, max: i64) -> i64 {
        (self.next_f64() * (max - min + 1) as f64).floor() as i64 + min
    }
}
