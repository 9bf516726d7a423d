//! # lp-instruments
//!
//! Vanilla-option vocabulary: call/put types, exercise styles, and the
//! payoff hierarchy.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Option exercise styles.
pub mod exercise;

/// Option payoff hierarchy.
pub mod payoff;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use exercise::ExerciseType;
pub use payoff::{OptionType, Payoff, PlainVanillaPayoff};
