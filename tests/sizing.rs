use en13480_toolbox::sizing::{
    bend_min_thickness, reducer_min_thickness, straight_pipe_min_thickness, BendInput,
    FormulaKind, SizingError, SizingInput, Verdict,
};

fn base_input() -> SizingInput {
    SizingInput {
        pressure_mpa: 1.0,
        joint_factor: 1.0,
        corrosion_allowance_mm: 1.0,
        outer_diameter_mm: 168.3,
        nominal_thickness_mm: 7.1,
        allowable_stress_mpa: 150.0,
    }
}

#[test]
fn thin_wall_scenario_passes() {
    let res = straight_pipe_min_thickness(base_input()).expect("sizing");
    assert_eq!(res.formula, FormulaKind::ThinWall);
    assert!((res.inner_diameter_mm - 154.1).abs() < 1e-9);
    assert!((res.diameter_ratio - 1.092).abs() < 1e-3);
    assert!((res.e_min_mm - 168.3 / 301.0).abs() < 1e-12);
    assert!((res.e_total_mm - (168.3 / 301.0 + 1.0)).abs() < 1e-12);
    assert_eq!(res.verdict, Verdict::Pass);
    assert_eq!(res.deficit_mm, 0.0);
}

#[test]
fn thick_wall_uses_lame_formula() {
    let res = straight_pipe_min_thickness(SizingInput {
        pressure_mpa: 10.0,
        corrosion_allowance_mm: 0.0,
        outer_diameter_mm: 100.0,
        nominal_thickness_mm: 25.0,
        ..base_input()
    })
    .expect("sizing");
    assert_eq!(res.formula, FormulaKind::Lame);
    let expected = 50.0 * (1.0 - (140.0f64 / 160.0).sqrt());
    assert!((res.e_min_mm - expected).abs() < 1e-12);
    assert_eq!(res.verdict, Verdict::Pass);
}

#[test]
fn thin_and_thick_formulas_agree_at_regime_boundary() {
    // D_o/D_i = 1.7 정확히 경계. P ≪ f·z 이면 두 공식은 경계에서 일치해야 한다.
    let thin = straight_pipe_min_thickness(SizingInput {
        corrosion_allowance_mm: 0.0,
        outer_diameter_mm: 170.0,
        nominal_thickness_mm: 35.0,
        ..base_input()
    })
    .expect("thin");
    assert_eq!(thin.formula, FormulaKind::ThinWall);
    assert!((thin.diameter_ratio - 1.7).abs() < 1e-12);

    let thick = straight_pipe_min_thickness(SizingInput {
        corrosion_allowance_mm: 0.0,
        outer_diameter_mm: 170.0,
        nominal_thickness_mm: 35.01,
        ..base_input()
    })
    .expect("thick");
    assert_eq!(thick.formula, FormulaKind::Lame);

    assert!((thin.e_min_mm - thick.e_min_mm).abs() < 1e-3);
}

#[test]
fn undersized_pipe_fails_with_deficit() {
    let res = straight_pipe_min_thickness(SizingInput {
        pressure_mpa: 10.0,
        nominal_thickness_mm: 5.0,
        ..base_input()
    })
    .expect("sizing");
    assert_eq!(res.verdict, Verdict::Fail);
    assert!((res.deficit_mm - (res.e_total_mm - 5.0)).abs() < 1e-12);
    assert!(res.deficit_mm > 0.0);
}

#[test]
fn degenerate_geometry_is_an_error() {
    let err = straight_pipe_min_thickness(SizingInput {
        outer_diameter_mm: 100.0,
        nominal_thickness_mm: 50.0,
        ..base_input()
    })
    .unwrap_err();
    assert!(matches!(err, SizingError::DegenerateGeometry { .. }));
}

#[test]
fn negative_radicand_is_an_error() {
    // f·z = 20 MPa ≤ P = 30 MPa
    let err = straight_pipe_min_thickness(SizingInput {
        pressure_mpa: 30.0,
        joint_factor: 0.4,
        allowable_stress_mpa: 50.0,
        outer_diameter_mm: 100.0,
        nominal_thickness_mm: 25.0,
        ..base_input()
    })
    .unwrap_err();
    assert!(matches!(err, SizingError::NegativeRadicand { .. }));
}

#[test]
fn repeated_calls_are_bit_identical() {
    let a = straight_pipe_min_thickness(base_input()).expect("a");
    let b = straight_pipe_min_thickness(base_input()).expect("b");
    assert_eq!(a.e_min_mm.to_bits(), b.e_min_mm.to_bits());
    assert_eq!(a.e_total_mm.to_bits(), b.e_total_mm.to_bits());
}

#[test]
fn bend_tight_radius_falls_back_to_straight() {
    let res = bend_min_thickness(
        2.0,
        BendInput {
            bend_radius_mm: 50.0,
            outer_diameter_mm: 100.0,
            nominal_thickness_mm: 7.0,
            corrosion_allowance_mm: 1.0,
        },
    );
    assert!(res.tight_radius_fallback);
    assert_eq!(res.e_intrados_mm, 2.0);
    assert_eq!(res.e_extrados_mm, 2.0);
    assert!((res.e_total_mm - 3.0).abs() < 1e-12);
}

#[test]
fn bend_intrados_governs() {
    // R/D_o = 2.0 → 내측 (1.75/1.5)배, 외측 (2.25/2.5)배
    let res = bend_min_thickness(
        1.2,
        BendInput {
            bend_radius_mm: 200.0,
            outer_diameter_mm: 100.0,
            nominal_thickness_mm: 5.0,
            corrosion_allowance_mm: 0.5,
        },
    );
    assert!(!res.tight_radius_fallback);
    assert!((res.e_intrados_mm - 1.2 * 1.75 / 1.5).abs() < 1e-12);
    assert!((res.e_extrados_mm - 1.2 * 2.25 / 2.5).abs() < 1e-12);
    assert!(res.e_intrados_mm > res.e_extrados_mm);
    assert!((res.e_total_mm - (res.e_intrados_mm + 0.5)).abs() < 1e-12);
    assert_eq!(res.verdict, Verdict::Pass);
    assert!(!res.buckling_advisory);
}

#[test]
fn bend_low_shape_factor_raises_buckling_advisory() {
    let res = bend_min_thickness(
        1.0,
        BendInput {
            bend_radius_mm: 10.0,
            outer_diameter_mm: 20.0,
            nominal_thickness_mm: 20.0,
            corrosion_allowance_mm: 0.0,
        },
    );
    assert!(res.shape_factor < 0.9);
    assert!(res.buckling_advisory);
}

#[test]
fn reducer_takes_max_of_both_ends() {
    let large = base_input();
    let small = SizingInput {
        outer_diameter_mm: 114.3,
        nominal_thickness_mm: 6.3,
        ..base_input()
    };
    let res = reducer_min_thickness(large, small, 15.0).expect("reducer");
    assert!(res.e_min_large_mm > res.e_min_small_mm);
    assert!((res.e_min_mm - res.e_min_large_mm).abs() < 1e-12);
    assert!((res.e_total_mm - (res.e_min_mm + 1.0)).abs() < 1e-12);
    assert!(!res.cone_angle_advisory);
    assert_eq!(res.verdict, Verdict::Pass);
}

#[test]
fn reducer_flags_steep_cone_angle() {
    let res = reducer_min_thickness(base_input(), base_input(), 25.0).expect("reducer");
    assert!(res.cone_angle_advisory);
}

#[test]
fn rejects_out_of_domain_inputs() {
    // z=0이면 박육 공식 분모가 P만 남아 e_min = D_o가 되어 버린다
    let err = straight_pipe_min_thickness(SizingInput {
        joint_factor: 0.0,
        ..base_input()
    })
    .unwrap_err();
    assert!(matches!(err, SizingError::InvalidInput { field: "z", .. }));

    let err = straight_pipe_min_thickness(SizingInput {
        pressure_mpa: -5.0,
        ..base_input()
    })
    .unwrap_err();
    assert!(matches!(err, SizingError::InvalidInput { field: "P", .. }));

    let err = straight_pipe_min_thickness(SizingInput {
        corrosion_allowance_mm: -1.0,
        ..base_input()
    })
    .unwrap_err();
    assert!(matches!(err, SizingError::InvalidInput { field: "c", .. }));

    let err = straight_pipe_min_thickness(SizingInput {
        outer_diameter_mm: 0.0,
        ..base_input()
    })
    .unwrap_err();
    assert!(matches!(err, SizingError::InvalidInput { field: "D_o", .. }));

    let err = straight_pipe_min_thickness(SizingInput {
        joint_factor: f64::NAN,
        ..base_input()
    })
    .unwrap_err();
    assert!(matches!(err, SizingError::InvalidInput { field: "z", .. }));
}
