//! # lp-pricingengines
//!
//! Pricing models built on the lattice machinery of `lp-methods`.
//!
//! * [`BinomialTreeModel`] — vanilla American/European call and put pricing
//!   on a cached Cox-Ross-Rubinstein lattice

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Binomial-tree pricing model for vanilla options.
pub mod binomial_tree_model;

pub use binomial_tree_model::{binomial_call_price, binomial_put_price, BinomialTreeModel};
