use en13480_toolbox::test_pressure::{test_pressure, TestPressureError};

#[test]
fn stress_ratio_term_governs() {
    let res = test_pressure(1.0, 100.0, 150.0).expect("test pressure");
    assert!((res.by_stress_ratio_mpa - 1.875).abs() < 1e-12);
    assert!((res.by_fixed_factor_mpa - 1.43).abs() < 1e-12);
    assert!((res.test_pressure_mpa - 1.875).abs() < 1e-12);
}

#[test]
fn fixed_factor_governs_when_test_stress_is_not_higher() {
    let res = test_pressure(2.0, 150.0, 150.0).expect("test pressure");
    assert!((res.by_stress_ratio_mpa - 2.5).abs() < 1e-12);
    assert!((res.test_pressure_mpa - 2.86).abs() < 1e-12);
}

#[test]
fn non_positive_design_stress_is_an_error() {
    let err = test_pressure(1.0, 0.0, 150.0).unwrap_err();
    assert!(matches!(
        err,
        TestPressureError::NonPositiveDesignStress { .. }
    ));
}
