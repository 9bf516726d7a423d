//! Recombining binomial tree construction.
//!
//! Cox-Ross-Rubinstein parameterisation: `u = exp(σ √Δt)`, `d = 1/u`, so an
//! up move followed by a down move lands on the same price as down-then-up
//! and the tree recombines into a triangular lattice.

use lp_core::{errors::Result, Error, Rate, Real, Size, Time, Volatility};

use super::PriceLattice;

/// Up factor `u = exp(σ · √Δt)`.
pub fn up_factor(volatility: Volatility, dt: Time) -> Real {
    (volatility * dt.sqrt()).exp()
}

/// Down factor `d = 1/u`.
pub fn down_factor(volatility: Volatility, dt: Time) -> Real {
    1.0 / up_factor(volatility, dt)
}

/// Risk-neutral transition probability `p = (exp(r·Δt) − d) / (u − d)`.
///
/// Recomputed from the parameters on each call; cheap enough that caching
/// would buy nothing.
///
/// # Errors
/// Returns [`Error::Domain`] when the up and down factors coincide, which
/// happens exactly at zero volatility, or when `dt` is not finite (a
/// zero-step model has no defined time increment). The formula would
/// otherwise hand a NaN to the valuation pass.
pub fn risk_neutral_probability(rate: Rate, volatility: Volatility, dt: Time) -> Result<Real> {
    if !dt.is_finite() {
        return Err(Error::Domain(format!(
            "risk-neutral probability requires a finite time step (dt {dt})"
        )));
    }
    let up = up_factor(volatility, dt);
    let down = 1.0 / up;
    if up <= down {
        return Err(Error::Domain(format!(
            "risk-neutral probability is undefined for coinciding up/down factors \
             (volatility {volatility}, dt {dt})"
        )));
    }
    Ok(((rate * dt).exp() - down) / (up - down))
}

/// Build the recombining price lattice for `steps` time steps.
///
/// Level 0 is `[initial_price]`; each further level is produced by walking
/// the previous one. The up-branch only yields a new node at the top of a
/// level — every other up-child coincides with the previous node's
/// down-child — so the down factor is applied to every node and the up
/// factor to the first node only, giving exactly `i + 1` nodes at level `i`.
///
/// Deterministic and pure; `steps < 1` short-circuits to the single-node
/// lattice without touching the factors.
pub fn build_price_lattice(
    initial_price: Real,
    volatility: Volatility,
    dt: Time,
    steps: Size,
) -> PriceLattice {
    let mut levels = vec![vec![initial_price]];
    if steps < 1 {
        return PriceLattice { levels };
    }

    let up = up_factor(volatility, dt);
    let down = 1.0 / up;

    for i in 1..=steps {
        let previous = &levels[i - 1];
        let mut level = Vec::with_capacity(i + 1);
        for (index, &price) in previous.iter().enumerate() {
            if index == 0 {
                level.push(price * up);
            }
            level.push(price * down);
        }
        levels.push(level);
    }

    PriceLattice { levels }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
