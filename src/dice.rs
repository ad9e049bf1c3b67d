use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::DiceError;

/// Number of sides on a die built with `Die::default()`
pub const DEFAULT_SIDES: u32 = 6;

/// Upper bound on the number of rolls made in one call
pub const MAX_ROLLS: u32 = 10_000;

/// A die with a fixed number of sides
///
/// The side count is validated once at construction, so every `Die` can be
/// rolled without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die {
    sides: u32,
}

/// The outcome of a single roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    /// Number of sides on the die that was rolled
    pub sides: u32,
    /// The face that came up, between 1 and `sides`
    pub value: u32,
}

impl Default for Die {
    fn default() -> Self {
        Self {
            sides: DEFAULT_SIDES,
        }
    }
}

impl Die {
    /// Creates a die with the given number of sides
    ///
    /// ### Errors
    ///
    /// Returns `DiceError::InvalidSides` when `sides` is less than 1 and
    /// `DiceError::TooManySides` when it does not fit in a `u32`.
    pub fn new(sides: i64) -> Result<Self, DiceError> {
        if sides < 1 {
            return Err(DiceError::InvalidSides(sides));
        }
        let sides = u32::try_from(sides).map_err(|_| DiceError::TooManySides {
            sides,
            max: u32::MAX,
        })?;
        Ok(Self { sides })
    }

    /// Returns the number of sides
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Rolls the die using the thread-local CSPRNG
    pub fn roll(&self) -> u32 {
        self.roll_with(&mut rand::rng())
    }

    /// Rolls the die, drawing randomness from `rng`
    pub fn roll_with<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        let value = rng.random_range(1..=self.sides);
        debug!(sides = self.sides, value, "rolled die");
        value
    }

    /// Rolls the die `count` times
    pub fn roll_many(&self, count: usize) -> Vec<u32> {
        let mut rng = rand::rng();
        (0..count).map(|_| self.roll_with(&mut rng)).collect()
    }

    /// Rolls the die once and records the outcome alongside the side count
    pub fn throw(&self) -> Roll {
        Roll {
            sides: self.sides,
            value: self.roll(),
        }
    }

    /// Rolls the die `count` times, recording each outcome
    ///
    /// ### Errors
    ///
    /// Returns `DiceError::TooManyRolls` when `count` exceeds `MAX_ROLLS`.
    pub fn throw_many(&self, count: u32) -> Result<Vec<Roll>, DiceError> {
        if count > MAX_ROLLS {
            return Err(DiceError::TooManyRolls {
                count,
                max: MAX_ROLLS,
            });
        }
        Ok(self
            .roll_many(count as usize)
            .into_iter()
            .map(|value| Roll {
                sides: self.sides,
                value,
            })
            .collect())
    }
}

/// Rolls a single die with `sides` sides
pub fn roll(sides: i64) -> Result<u32, DiceError> {
    Ok(Die::new(sides)?.roll())
}
