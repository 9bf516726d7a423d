//! # lp-methods
//!
//! Numerical methods: the recombining binomial price lattice and the
//! backward-induction valuation pass.
//!
//! # Modules
//!
//! * [`lattice`] — triangular price lattice, CRR-style tree construction,
//!   risk-neutral probability, backward induction

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Lattice methods: price lattice, tree builder, backward induction.
pub mod lattice;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use lattice::binomial_tree::{
    build_price_lattice, down_factor, risk_neutral_probability, up_factor,
};
pub use lattice::{value_option, PriceLattice};
