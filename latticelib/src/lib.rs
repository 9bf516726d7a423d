//! # latticelib
//!
//! Vanilla option pricing on recombining binomial lattices.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `lp-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! latticelib = "0.1"
//! ```
//!
//! ```rust
//! use latticelib::pricingengines::BinomialTreeModel;
//!
//! // S₀ = 229, K = 230, 21 trading days of a 361-day year,
//! // r = 4.38 %, σ = 22.6 %, 100 lattice steps.
//! let model = BinomialTreeModel::new(229.0, 230.0, 21.0 / 361.0, 0.0438, 0.226, 100);
//! let call = model.calculate_call().unwrap();
//! let put = model.calculate_put().unwrap();
//! assert!(call > 0.0 && put > 0.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use lp_core as core;

/// Option vocabulary: payoffs and exercise styles.
pub use lp_instruments as instruments;

/// Lattice construction and backward-induction valuation.
pub use lp_methods as methods;

/// Pricing models.
pub use lp_pricingengines as pricingengines;
