//! Façade-level tests: the library exercised only through the re-exported
//! module paths an application would use.

use approx::assert_abs_diff_eq;
use latticelib::core::Real;
use latticelib::instruments::{ExerciseType, OptionType};
use latticelib::methods::lattice::binomial_tree;
use latticelib::pricingengines::{binomial_put_price, BinomialTreeModel};

#[test]
fn reference_scenario_satisfies_parity_through_the_facade() {
    let model = BinomialTreeModel::new(229.0, 230.0, 21.0 / 361.0, 0.0438, 0.226, 100);
    let call = model.npv(OptionType::Call, ExerciseType::European).unwrap();
    let put = model.npv(OptionType::Put, ExerciseType::European).unwrap();
    let forward: Real = 229.0 - 230.0 * (-0.0438_f64 * 21.0 / 361.0).exp();
    assert_abs_diff_eq!(call - put, forward, epsilon = 1e-6);
}

#[test]
fn factors_are_reachable_and_reciprocal_through_the_facade() {
    let dt = 21.0 / 361.0 / 100.0;
    let u = binomial_tree::up_factor(0.226, dt);
    let d = binomial_tree::down_factor(0.226, dt);
    assert_abs_diff_eq!(u * d, 1.0, epsilon = 1e-15);
}

#[test]
fn one_shot_pricing_matches_the_model() {
    let model = BinomialTreeModel::new(229.0, 230.0, 21.0 / 361.0, 0.0438, 0.226, 100);
    let one_shot = binomial_put_price(229.0, 230.0, 21.0 / 361.0, 0.0438, 0.226, 100).unwrap();
    assert_abs_diff_eq!(one_shot, model.calculate_put().unwrap(), epsilon = 0.0);
}
