//! Algebraic properties of the cost engine over randomized valid inputs.

use proptest::prelude::*;
use rebarkit_core::{compute_cost, BendShape, PricingInputs, RebarSpec, VAT_RATE};

fn arb_shape() -> impl Strategy<Value = BendShape> {
    let dim = 0.0..5_000.0f64;
    prop_oneof![
        (dim.clone(), dim.clone(), dim.clone()).prop_map(|(width, height, overlap_length)| {
            BendShape::Rectangle {
                width,
                height,
                overlap_length,
            }
        }),
        (dim.clone(), dim.clone()).prop_map(|(arm1_length, arm2_length)| BendShape::LBar {
            arm1_length,
            arm2_length,
        }),
        (dim.clone(), dim.clone(), dim).prop_map(|(arm1_length, width, arm3_length)| {
            BendShape::UBar {
                arm1_length,
                width,
                arm3_length,
            }
        }),
    ]
}

fn arb_spec() -> impl Strategy<Value = RebarSpec> {
    (4u32..40, 0.01..5.0f64, 0.1..50.0f64)
        .prop_map(|(d, w, p)| RebarSpec::new(d, w, p))
}

proptest! {
    #[test]
    fn length_matches_closed_form(shape in arb_shape(), spec in arb_spec()) {
        let result = compute_cost(&shape, &spec, &PricingInputs::new(0.0, 1)).unwrap();
        let expected = match shape {
            BendShape::Rectangle { width, height, overlap_length } => {
                (2.0 * width + 2.0 * height + overlap_length) / 100.0
            }
            BendShape::LBar { arm1_length, arm2_length } => (arm1_length + arm2_length) / 100.0,
            BendShape::UBar { arm1_length, width, arm3_length } => {
                (arm1_length + width + arm3_length) / 100.0
            }
        };
        prop_assert!((result.length_m - expected).abs() < 1e-9);
    }

    #[test]
    fn margin_and_vat_are_multiplicative(
        shape in arb_shape(),
        spec in arb_spec(),
        margin_step in 0u32..=20,
    ) {
        let margin = f64::from(margin_step * 5);
        let result = compute_cost(&shape, &spec, &PricingInputs::new(margin, 1)).unwrap();

        let tol = 1e-9 * (1.0 + result.net_cost.abs());
        prop_assert!((result.net_with_margin - result.net_cost * (1.0 + margin / 100.0)).abs() < tol);
        prop_assert!((result.gross_cost - result.net_with_margin * (1.0 + VAT_RATE)).abs() < tol);
    }

    #[test]
    fn totals_are_linear_in_quantity(
        shape in arb_shape(),
        spec in arb_spec(),
        quantity in 1u32..1_000,
    ) {
        let result = compute_cost(&shape, &spec, &PricingInputs::new(10.0, quantity)).unwrap();
        let q = f64::from(quantity);

        let tol = 1e-9 * (1.0 + result.total_gross_cost.abs());
        prop_assert!((result.total_weight_kg - result.weight_kg * q).abs() < tol);
        prop_assert!((result.total_net_cost - result.net_cost * q).abs() < tol);
        prop_assert!((result.total_gross_cost - result.gross_cost * q).abs() < tol);
    }

    #[test]
    fn deterministic_for_identical_inputs(shape in arb_shape(), spec in arb_spec()) {
        let pricing = PricingInputs::new(25.0, 7);
        let a = compute_cost(&shape, &spec, &pricing).unwrap();
        let b = compute_cost(&shape, &spec, &pricing).unwrap();
        prop_assert_eq!(a, b);
    }
}
