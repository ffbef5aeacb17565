//! Property-based tests for the grip requirement.
//!
//! Run with: cargo test --test properties

use gripper_core::physics::{compute, GripRequirementInput};
use gripper_core::types::*;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Valid input with a strictly positive friction coefficient.
fn arb_input() -> impl Strategy<Value = GripRequirementInput> {
    (
        0.0..50.0f64,     // mass kg
        0.0..20.0f64,     // gravity m/s²
        -30.0..30.0f64,   // vertical acceleration m/s²
        1.0..5.0f64,      // safety factor
        1u32..=4,         // contacts
        0.01..1.5f64,     // μ
        any::<bool>(),    // moment
        -100.0..100.0f64, // offset mm
        0.0..50.0f64,     // arm mm
    )
        .prop_map(|(m, g, a, sf, n, mu, moment, e, r)| {
            let mut input = GripRequirementInput::new(Mass::new::<kilogram>(m), n, mu)
                .with_gravity(Acceleration::new::<meter_per_second_squared>(g))
                .with_vertical_acceleration(Acceleration::new::<meter_per_second_squared>(a))
                .with_safety_factor(sf)
                .with_moment(Length::new::<millimeter>(e), Length::new::<millimeter>(r));
            input.consider_moment = moment;
            input
        })
}

fn required(input: &GripRequirementInput) -> f64 {
    compute(input).unwrap().required_force_per_contact.get::<newton>()
}

// =============================================================================
// Property Tests: Result invariants
// =============================================================================

proptest! {
    /// Effective load is never negative and nothing is NaN.
    #[test]
    fn load_non_negative_and_no_nan(input in arb_input()) {
        let result = compute(&input).unwrap();

        prop_assert!(result.effective_load.get::<newton>() >= 0.0);
        prop_assert!(!result.effective_load.get::<newton>().is_nan());
        prop_assert!(!result.translational_force_per_contact.get::<newton>().is_nan());
        prop_assert!(!result.rotational_force_per_contact.get::<newton>().is_nan());
        prop_assert!(!result.total_required_force.get::<newton>().is_nan());
    }

    /// With positive friction the total is exactly the per-contact force times n.
    #[test]
    fn total_is_per_contact_times_contacts(input in arb_input()) {
        let result = compute(&input).unwrap();
        let per_contact = result.required_force_per_contact.get::<newton>();
        let total = result.total_required_force.get::<newton>();

        prop_assert!(per_contact >= 0.0);
        prop_assert_eq!(total, per_contact * input.contact_count as f64);
    }

    /// The governing requirement is the larger of the two.
    #[test]
    fn required_is_max_of_requirements(input in arb_input()) {
        let result = compute(&input).unwrap();
        let transl = result.translational_force_per_contact.get::<newton>();
        let rot = result.rotational_force_per_contact.get::<newton>();

        prop_assert_eq!(result.required_force_per_contact.get::<newton>(), transl.max(rot));
    }

    /// Without the moment, geometry has no influence.
    #[test]
    fn moment_off_means_no_rotation(input in arb_input(), e in -500.0..500.0f64, r in 0.0..50.0f64) {
        let mut input = input;
        input.consider_moment = false;
        input.com_offset = Length::new::<millimeter>(e);
        input.friction_arm = Length::new::<millimeter>(r);

        let result = compute(&input).unwrap();
        prop_assert_eq!(result.rotational_force_per_contact.get::<newton>(), 0.0);
    }

    /// Zero friction has no finite solution.
    #[test]
    fn zero_friction_is_infinite(input in arb_input()) {
        let result = compute(&input.with_friction_coefficient(0.0)).unwrap();

        prop_assert_eq!(result.translational_force_per_contact.get::<newton>(), f64::INFINITY);
        prop_assert_eq!(result.required_force_per_contact.get::<newton>(), f64::INFINITY);
        prop_assert!(!result.is_satisfiable());
    }

    /// Identical inputs give identical results.
    #[test]
    fn compute_is_deterministic(input in arb_input()) {
        prop_assert_eq!(compute(&input).unwrap(), compute(&input).unwrap());
    }
}

// =============================================================================
// Property Tests: Monotonicity
// =============================================================================

proptest! {
    #[test]
    fn safety_factor_never_decreases_requirement(input in arb_input(), extra in 0.0..5.0f64) {
        let more = input.clone().with_safety_factor(input.safety_factor + extra);
        prop_assert!(required(&more) >= required(&input));
    }

    #[test]
    fn mass_never_decreases_requirement(input in arb_input(), extra in 0.0..50.0f64) {
        let mut more = input.clone();
        more.mass = input.mass + Mass::new::<kilogram>(extra);
        prop_assert!(required(&more) >= required(&input));
    }

    /// Holds across zero: a negative offset never governs.
    #[test]
    fn offset_never_decreases_requirement(input in arb_input(), extra in 0.0..100.0f64) {
        let mut input = input;
        input.consider_moment = true;
        let mut more = input.clone();
        more.com_offset = input.com_offset + Length::new::<millimeter>(extra);
        prop_assert!(required(&more) >= required(&input));
    }

    #[test]
    fn friction_never_increases_requirement(input in arb_input(), extra in 0.0..1.0f64) {
        let more = input.clone().with_friction_coefficient(input.friction_coefficient + extra);
        prop_assert!(required(&more) <= required(&input));
    }

    #[test]
    fn contacts_never_increase_requirement(input in arb_input(), extra in 0u32..4) {
        let mut more = input.clone();
        more.contact_count = input.contact_count + extra;
        prop_assert!(required(&more) <= required(&input));
    }
}

// =============================================================================
// Reference scenarios
// =============================================================================

fn scenario_a() -> GripRequirementInput {
    GripRequirementInput::new(Mass::new::<kilogram>(2.0), 2, 0.15)
        .with_gravity(Acceleration::new::<meter_per_second_squared>(9.81))
        .with_vertical_acceleration(Acceleration::new::<meter_per_second_squared>(0.0))
        .with_safety_factor(2.0)
        .without_moment()
}

#[test]
fn scenario_a_translation_only() {
    let result = compute(&scenario_a()).unwrap();

    assert!((result.effective_load.get::<newton>() - 19.62).abs() < 1e-9);
    assert!((result.translational_force_per_contact.get::<newton>() - 130.8).abs() < 1e-9);
    assert!((result.total_required_force.get::<newton>() - 261.6).abs() < 1e-9);
}

#[test]
fn scenario_b_rotation_binds() {
    let input = scenario_a().with_moment(Length::new::<millimeter>(20.0), Length::new::<millimeter>(10.0));
    let result = compute(&input).unwrap();

    let rot = result.rotational_force_per_contact.get::<newton>();
    assert!((rot - 261.6).abs() < 1e-9);
    assert!(rot > result.translational_force_per_contact.get::<newton>());
    assert_eq!(result.required_force_per_contact.get::<newton>(), rot);
}

#[test]
fn scenario_c_zero_friction() {
    let result = compute(&scenario_a().with_friction_coefficient(0.0)).unwrap();

    assert_eq!(result.translational_force_per_contact.get::<newton>(), f64::INFINITY);
    assert_eq!(result.required_force_per_contact.get::<newton>(), f64::INFINITY);
}

#[test]
fn huge_finite_inputs_never_yield_nan() {
    // m·g overflows f64 even though both are finite
    let input = GripRequirementInput::new(Mass::new::<kilogram>(1e300), 2, 0.15)
        .with_gravity(Acceleration::new::<meter_per_second_squared>(1e10))
        .with_moment(Length::new::<millimeter>(0.0), Length::new::<millimeter>(10.0));

    match compute(&input) {
        Ok(result) => assert!(!result.rotational_force_per_contact.get::<newton>().is_nan()),
        Err(err) => assert!(matches!(err, gripper_core::GripError::LoadOverflow(_))),
    }
}
