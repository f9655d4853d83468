use en13480_toolbox::material_db::{self, MaterialDbError};

#[test]
fn interpolates_between_tabulated_points() {
    // 20°C=150, 100°C=143 → 60°C는 선형 중간값
    let v = material_db::allowable_stress("P235GH", 60.0).expect("lookup");
    assert!(!v.extrapolated);
    assert!((v.stress_mpa - 146.5).abs() < 1e-9);
    assert!(v.stress_mpa < 150.0 && v.stress_mpa > 143.0);
}

#[test]
fn returns_exact_value_at_tabulated_point() {
    let v = material_db::allowable_stress("1.4301", 300.0).expect("lookup");
    assert!(!v.extrapolated);
    assert!((v.stress_mpa - 85.0).abs() < 1e-9);
}

#[test]
fn clamps_above_table_range_and_flags_it() {
    let v = material_db::allowable_stress("P235GH", 400.0).expect("lookup");
    assert!(v.extrapolated);
    assert!((v.stress_mpa - 104.0).abs() < 1e-9);
    assert!((v.source_temp_c - 300.0).abs() < 1e-9);
}

#[test]
fn clamps_below_table_range_and_flags_it() {
    let v = material_db::allowable_stress("16Mo3", -10.0).expect("lookup");
    assert!(v.extrapolated);
    assert!((v.stress_mpa - 180.0).abs() < 1e-9);
}

#[test]
fn custom_material_rejects_table_lookup() {
    let err = material_db::allowable_stress("OTHER", 100.0).unwrap_err();
    assert!(matches!(err, MaterialDbError::CustomMaterial(_)));
}

#[test]
fn unknown_material_is_an_error() {
    let err = material_db::allowable_stress("X42", 100.0).unwrap_err();
    assert!(matches!(err, MaterialDbError::UnknownMaterial(_)));
}

#[test]
fn lookup_is_case_insensitive() {
    let v = material_db::allowable_stress("p235gh", 20.0).expect("lookup");
    assert!((v.stress_mpa - 150.0).abs() < 1e-9);
}

#[test]
fn table_edge_temperatures_are_not_flagged() {
    // 테이블 양 끝 온도는 범위 안이다. 클램프 플래그가 서면 안 된다.
    let low = material_db::allowable_stress("P235GH", 20.0).expect("lookup");
    assert!(!low.extrapolated);
    assert!((low.stress_mpa - 150.0).abs() < 1e-9);

    let high = material_db::allowable_stress("P235GH", 300.0).expect("lookup");
    assert!(!high.extrapolated);
    assert!((high.stress_mpa - 104.0).abs() < 1e-9);
}
