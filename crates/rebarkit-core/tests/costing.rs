use rebarkit_core::{
    compute_cost, compute_cost_with_catalog, BendShape, PricingInputs, RebarCatalog, RebarSpec,
};

const EPS: f64 = 1e-9;

#[test]
fn test_rectangle_worked_example() {
    // Rectangle 20x20 cm with a 5 cm splice, Φ6 bar, 10% margin, one piece.
    let shape = BendShape::Rectangle {
        width: 20.0,
        height: 20.0,
        overlap_length: 5.0,
    };
    let rebar = RebarSpec::new(6, 0.222, 2.84);
    let pricing = PricingInputs::new(10.0, 1);

    let result = compute_cost(&shape, &rebar, &pricing).unwrap();

    assert!((result.length_m - 0.85).abs() < EPS);
    assert!((result.weight_kg - 0.1887).abs() < EPS);
    assert!((result.net_cost - 0.535908).abs() < EPS);
    assert!((result.margin_amount - 0.0535908).abs() < EPS);
    assert!((result.net_with_margin - 0.5894988).abs() < EPS);
    assert!((result.gross_cost - 0.5894988 * 1.23).abs() < EPS);

    // One piece: totals match the per-unit figures.
    assert!((result.total_weight_kg - result.weight_kg).abs() < EPS);
    assert!((result.total_gross_cost - result.gross_cost).abs() < EPS);
}

#[test]
fn test_l_shape_worked_example() {
    // L shape 20+20 cm, Φ8 bar, three pieces.
    let shape = BendShape::LBar {
        arm1_length: 20.0,
        arm2_length: 20.0,
    };
    let catalog = RebarCatalog::standard();
    let pricing = PricingInputs::new(0.0, 3);

    let result = compute_cost_with_catalog(&shape, &catalog, 8, &pricing).unwrap();

    assert!((result.length_m - 0.40).abs() < EPS);
    assert!((result.weight_kg - 0.158).abs() < EPS);
    assert!((result.total_weight_kg - 0.474).abs() < EPS);
}

#[test]
fn test_totals_scale_with_quantity() {
    let shape = BendShape::UBar {
        arm1_length: 30.0,
        width: 15.0,
        arm3_length: 30.0,
    };
    let rebar = RebarSpec::new(12, 0.888, 2.84);

    for quantity in [1u32, 5, 100] {
        let pricing = PricingInputs::new(15.0, quantity);
        let result = compute_cost(&shape, &rebar, &pricing).unwrap();
        let q = f64::from(quantity);

        assert!((result.total_weight_kg - result.weight_kg * q).abs() < EPS);
        assert!((result.total_net_cost - result.net_cost * q).abs() < EPS);
        assert!((result.total_margin_amount - result.margin_amount * q).abs() < EPS);
        assert!((result.total_net_with_margin - result.net_with_margin * q).abs() < EPS);
        assert!((result.total_gross_cost - result.gross_cost * q).abs() < EPS);
    }
}

#[test]
fn test_vat_amount_helpers() {
    let shape = BendShape::default();
    let rebar = RebarSpec::new(6, 0.222, 2.84);
    let pricing = PricingInputs::new(10.0, 4);

    let result = compute_cost(&shape, &rebar, &pricing).unwrap();
    assert!((result.vat_amount() - result.net_with_margin * 0.23).abs() < EPS);
    assert!((result.total_vat_amount() - result.vat_amount() * 4.0).abs() < 1e-8);
}

#[test]
fn test_updated_catalog_price_feeds_through() {
    let shape = BendShape::LBar {
        arm1_length: 50.0,
        arm2_length: 50.0,
    };
    let catalog = RebarCatalog::standard().with_price(8, 3.00).unwrap();
    let pricing = PricingInputs::new(0.0, 1);

    let result = compute_cost_with_catalog(&shape, &catalog, 8, &pricing).unwrap();
    assert!((result.net_cost - 0.395 * 3.00).abs() < EPS);
}
