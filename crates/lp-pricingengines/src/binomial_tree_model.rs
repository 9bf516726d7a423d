//! Binomial-tree pricing model for vanilla options.
//!
//! Prices a vanilla call or put on a recombining Cox-Ross-Rubinstein
//! lattice, with American (early exercise at every node) or European
//! (exercise at expiry only) style.
//!
//! The model owns the six contract/market parameters immutably and builds
//! the underlying price lattice once, on first use. Every valuation call
//! rolls back over its own private copy of that lattice, so repeated or
//! parallel call/put valuations never observe each other's intermediate
//! overwrites.

use std::sync::OnceLock;

use lp_core::{errors::Result, Rate, Real, Size, Time, Volatility};
use lp_instruments::{ExerciseType, OptionType, Payoff, PlainVanillaPayoff};
use lp_methods::lattice::{self, binomial_tree, PriceLattice};

/// Vanilla option pricing model on a binomial lattice.
///
/// Construction stores the parameters without validation; the contract
/// assumes the caller has already checked that prices, maturity, and step
/// count are sensible. The one failure mode the model itself surfaces is
/// the degenerate zero-volatility parameterisation, where the risk-neutral
/// probability formula has no value (see
/// [`binomial_tree::risk_neutral_probability`]).
#[derive(Debug)]
pub struct BinomialTreeModel {
    initial_price: Real,
    strike_price: Real,
    time_to_expiration: Time,
    risk_free_rate: Rate,
    volatility: Volatility,
    number_of_steps: Size,
    time_step: Time,
    lattice: OnceLock<PriceLattice>,
}

impl BinomialTreeModel {
    /// Create a model for the given contract and market parameters.
    ///
    /// `time_to_expiration` is in years, `risk_free_rate` continuously
    /// compounded, `volatility` annualised. The per-step time increment
    /// `Δt = T / N` is fixed for the model's lifetime.
    pub fn new(
        initial_price: Real,
        strike_price: Real,
        time_to_expiration: Time,
        risk_free_rate: Rate,
        volatility: Volatility,
        number_of_steps: Size,
    ) -> Self {
        Self {
            initial_price,
            strike_price,
            time_to_expiration,
            risk_free_rate,
            volatility,
            number_of_steps,
            time_step: time_to_expiration / number_of_steps as Real,
            lattice: OnceLock::new(),
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Current price of the underlying.
    pub fn initial_price(&self) -> Real {
        self.initial_price
    }

    /// Contract strike.
    pub fn strike_price(&self) -> Real {
        self.strike_price
    }

    /// Horizon in years.
    pub fn time_to_expiration(&self) -> Time {
        self.time_to_expiration
    }

    /// Continuously-compounded annual risk-free rate.
    pub fn risk_free_rate(&self) -> Rate {
        self.risk_free_rate
    }

    /// Annualised volatility.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }

    /// Lattice depth.
    pub fn number_of_steps(&self) -> Size {
        self.number_of_steps
    }

    /// Time increment per step, `Δt = T / N`.
    pub fn time_step(&self) -> Time {
        self.time_step
    }

    // ── Valuation ────────────────────────────────────────────────────────

    /// American call value at the root of the lattice.
    pub fn calculate_call(&self) -> Result<Real> {
        self.npv(OptionType::Call, ExerciseType::American)
    }

    /// American put value at the root of the lattice.
    pub fn calculate_put(&self) -> Result<Real> {
        self.npv(OptionType::Put, ExerciseType::American)
    }

    /// Present value for an arbitrary option type and exercise style.
    pub fn npv(&self, option_type: OptionType, exercise: ExerciseType) -> Result<Real> {
        Ok(self.option_values(option_type, exercise)?.root())
    }

    /// The full value lattice for the given contract, shape-identical to
    /// the price lattice but holding option values at every node.
    pub fn option_values(
        &self,
        option_type: OptionType,
        exercise: ExerciseType,
    ) -> Result<PriceLattice> {
        let payoff = PlainVanillaPayoff::new(option_type, self.strike_price);
        lattice::value_option(
            self.price_lattice(),
            &|s| payoff.value(s),
            self.risk_free_rate,
            self.volatility,
            self.time_step,
            exercise.allows_early_exercise(),
        )
    }

    // ── Lattice ──────────────────────────────────────────────────────────

    /// The cached price lattice, built on first use.
    ///
    /// The cache is immutable once built; valuation passes copy it rather
    /// than write into it, so concurrent readers are safe.
    pub fn price_lattice(&self) -> &PriceLattice {
        self.lattice.get_or_init(|| {
            binomial_tree::build_price_lattice(
                self.initial_price,
                self.volatility,
                self.time_step,
                self.number_of_steps,
            )
        })
    }

    /// Risk-neutral transition probability for this model's parameters.
    ///
    /// A zero-step model has no transitions and an undefined `Δt`, so the
    /// formula surfaces a domain error rather than a NaN.
    pub fn risk_neutral_probability(&self) -> Result<Real> {
        binomial_tree::risk_neutral_probability(
            self.risk_free_rate,
            self.volatility,
            self.time_step,
        )
    }
}

// ─── Free-function conveniences ───────────────────────────────────────────────

/// American binomial call price.
///
/// One-shot wrapper around [`BinomialTreeModel`] for callers that do not
/// need to keep the lattice around.
pub fn binomial_call_price(
    initial_price: Real,
    strike_price: Real,
    time_to_expiration: Time,
    risk_free_rate: Rate,
    volatility: Volatility,
    number_of_steps: Size,
) -> Result<Real> {
    BinomialTreeModel::new(
        initial_price,
        strike_price,
        time_to_expiration,
        risk_free_rate,
        volatility,
        number_of_steps,
    )
    .calculate_call()
}

/// American binomial put price.
pub fn binomial_put_price(
    initial_price: Real,
    strike_price: Real,
    time_to_expiration: Time,
    risk_free_rate: Rate,
    volatility: Volatility,
    number_of_steps: Size,
) -> Result<Real> {
    BinomialTreeModel::new(
        initial_price,
        strike_price,
        time_to_expiration,
        risk_free_rate,
        volatility,
        number_of_steps,
    )
    .calculate_put()
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use lp_core::Error;

    /// The worked example the model was originally checked against:
    /// S₀=229, K=230, T=21/361, r=4.38 %, σ=22.6 %, 100 steps.
    fn reference_model() -> BinomialTreeModel {
        BinomialTreeModel::new(229.0, 230.0, 21.0 / 361.0, 0.0438, 0.226, 100)
    }

    #[test]
    fn reference_scenario_prices_are_finite_and_positive() {
        let model = reference_model();
        let call = model.calculate_call().unwrap();
        let put = model.calculate_put().unwrap();
        assert!(call.is_finite() && call > 0.0, "call = {call}");
        assert!(put.is_finite() && put > 0.0, "put = {put}");
    }

    #[test]
    fn valuation_is_a_pure_function_of_the_inputs() {
        // Same inputs, fresh instances: bit-for-bit identical results.
        let first = reference_model().calculate_call().unwrap();
        let second = reference_model().calculate_call().unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn repeated_calls_on_one_instance_are_idempotent() {
        let model = reference_model();
        let call_a = model.calculate_call().unwrap();
        let put = model.calculate_put().unwrap();
        let call_b = model.calculate_call().unwrap();
        assert_eq!(call_a.to_bits(), call_b.to_bits());
        assert!(put > 0.0);
        // The cached lattice is untouched by the valuation passes.
        assert_eq!(model.price_lattice().root(), 229.0);
    }

    #[test]
    fn zero_steps_degenerates_to_immediate_payoff() {
        let model = BinomialTreeModel::new(229.0, 230.0, 21.0 / 361.0, 0.0438, 0.226, 0);
        assert_eq!(model.price_lattice().level(0), &[229.0]);
        assert_eq!(model.price_lattice().steps(), 0);
        // Call is out of the money, put pays K − S₀, no discounting.
        assert_eq!(model.calculate_call().unwrap(), 0.0);
        assert_eq!(model.calculate_put().unwrap(), 1.0);
        // No transitions exist, so the probability is undefined — loudly.
        assert!(matches!(
            model.risk_neutral_probability().unwrap_err(),
            Error::Domain(_)
        ));
    }

    #[test]
    fn zero_volatility_with_positive_steps_is_a_domain_error() {
        let model = BinomialTreeModel::new(100.0, 100.0, 1.0, 0.05, 0.0, 10);
        assert!(matches!(
            model.calculate_call().unwrap_err(),
            Error::Domain(_)
        ));
        assert!(matches!(
            model.risk_neutral_probability().unwrap_err(),
            Error::Domain(_)
        ));
    }

    #[test]
    fn american_geq_european() {
        let model = reference_model();
        for option_type in [OptionType::Call, OptionType::Put] {
            let american = model.npv(option_type, ExerciseType::American).unwrap();
            let european = model.npv(option_type, ExerciseType::European).unwrap();
            assert!(
                american >= european - 1e-10,
                "{option_type}: American {american:.6} < European {european:.6}"
            );
        }
    }

    #[test]
    fn free_functions_match_the_model() {
        let model = reference_model();
        let call = binomial_call_price(229.0, 230.0, 21.0 / 361.0, 0.0438, 0.226, 100).unwrap();
        let put = binomial_put_price(229.0, 230.0, 21.0 / 361.0, 0.0438, 0.226, 100).unwrap();
        assert_eq!(call.to_bits(), model.calculate_call().unwrap().to_bits());
        assert_eq!(put.to_bits(), model.calculate_put().unwrap().to_bits());
    }
}
