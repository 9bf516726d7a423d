//! Option exercise styles.
//!
//! An exercise style defines *when* an option can be exercised. The lattice
//! model only distinguishes exercise-at-expiry from exercise-at-any-node, so
//! no exercise dates are carried here; maturity lives on the model itself.

use std::fmt;

/// Style of exercise right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseType {
    /// Can only be exercised at expiry.
    European,
    /// Can be exercised at any time up to expiry.
    American,
}

impl ExerciseType {
    /// `true` if the holder may exercise before expiry.
    pub fn allows_early_exercise(self) -> bool {
        matches!(self, ExerciseType::American)
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseType::European => write!(f, "European"),
            ExerciseType::American => write!(f, "American"),
        }
    }
}
