//! Lattice methods for option pricing.
//!
//! # Overview
//!
//! * [`PriceLattice`] — triangular container of node prices, level `i`
//!   holding exactly `i + 1` nodes
//! * [`binomial_tree`] — CRR-style recombining tree construction and the
//!   risk-neutral transition probability
//! * [`value_option`] — backward-induction valuation over a private copy
//!   of a price lattice

pub mod binomial_tree;

use lp_core::{ensure, errors::Result, Rate, Real, Size, Time, Volatility};

// ─── PriceLattice ─────────────────────────────────────────────────────────────

/// A recombining binomial price lattice.
///
/// The lattice has `steps + 1` levels, with level `i` holding `i + 1`
/// node prices. Node `(i, j)` carries the price after `i − j` up-moves and
/// `j` down-moves, so node 0 is the all-up-moves node of its level.
///
/// The same triangular shape doubles as the value lattice produced by
/// [`value_option`], where each entry holds an option value instead of an
/// underlying price.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceLattice {
    levels: Vec<Vec<Real>>,
}

impl PriceLattice {
    /// The degenerate single-node lattice `[[price]]`.
    pub fn single(price: Real) -> Self {
        Self {
            levels: vec![vec![price]],
        }
    }

    /// Build a lattice from raw levels, enforcing the triangular shape.
    pub fn from_levels(levels: Vec<Vec<Real>>) -> Result<Self> {
        ensure!(!levels.is_empty(), "a lattice has at least one level");
        for (i, level) in levels.iter().enumerate() {
            ensure!(
                level.len() == i + 1,
                "level {i} holds {} nodes, expected {}",
                level.len(),
                i + 1
            );
        }
        Ok(Self { levels })
    }

    /// Number of time steps (= levels − 1).
    pub fn steps(&self) -> Size {
        self.levels.len() - 1
    }

    /// Number of nodes at level `i` (always `i + 1`).
    pub fn size(&self, i: Size) -> Size {
        i + 1
    }

    /// Value at node `(i, j)`.
    ///
    /// # Panics
    /// Panics if the indices lie outside the lattice.
    pub fn value(&self, i: Size, j: Size) -> Real {
        self.levels[i][j]
    }

    /// All nodes of level `i`.
    pub fn level(&self, i: Size) -> &[Real] {
        &self.levels[i]
    }

    /// The level-0/node-0 value.
    pub fn root(&self) -> Real {
        self.levels[0][0]
    }
}

// ─── Backward-induction valuation ─────────────────────────────────────────────

/// Value an option by backward induction over a binomial price lattice.
///
/// The stored price lattice is never mutated: the pass operates on a fresh
/// triangular copy, overwrites it in place from the terminal level down to
/// level 0, and returns the fully overwritten structure. The root of the
/// returned lattice is the contract's present value.
///
/// * Terminal nodes take the raw payoff of their pre-valuation price.
/// * Interior nodes take
///   `exp(−r·Δt) · [p · v(i+1, j) + (1−p) · v(i+1, j+1)]`, compared
///   against the immediate exercise payoff when `early_exercise` is set.
///
/// A single-level lattice degenerates to the immediate payoff with no
/// discounting; the induction loop does not run and the probability
/// formula is never evaluated.
///
/// # Errors
/// Propagates the domain error of [`binomial_tree::risk_neutral_probability`]
/// when the up and down factors coincide (zero volatility with a positive
/// step count).
pub fn value_option(
    prices: &PriceLattice,
    payoff: &dyn Fn(Real) -> Real,
    rate: Rate,
    volatility: Volatility,
    dt: Time,
    early_exercise: bool,
) -> Result<PriceLattice> {
    let n = prices.steps();
    let mut values = prices.clone();

    // Terminal level: intrinsic payoff.
    for j in 0..values.size(n) {
        values.levels[n][j] = payoff(prices.value(n, j));
    }
    if n == 0 {
        return Ok(values);
    }

    let p = binomial_tree::risk_neutral_probability(rate, volatility, dt)?;
    let discount = (-rate * dt).exp();

    // Children at level i+1 are always finished before their parents.
    for i in (0..n).rev() {
        for j in 0..values.size(i) {
            let hold = discount
                * (p * values.levels[i + 1][j] + (1.0 - p) * values.levels[i + 1][j + 1]);
            values.levels[i][j] = if early_exercise {
                hold.max(payoff(prices.value(i, j)))
            } else {
                hold
            };
        }
    }

    Ok(values)
}

// ─── Tests ────────────────────────────────────────────────────────────────────
