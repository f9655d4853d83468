use en13480_toolbox::branch::{
    available_area, check_reinforcement, required_area, tee_required_area_approx,
    unreinforced_check, AreaVerdict, BranchError, ExcessLayer, Pad,
};

#[test]
fn required_area_perpendicular_branch() {
    // β=90° → 계수 (2 - sin 90°) = 1, d_eff = d_i
    let a = required_area(7.1, 50.3, 90.0).expect("area");
    assert!((a - 7.1 * 50.3).abs() < 1e-9);
}

#[test]
fn required_area_oblique_matches_closed_form() {
    let t_s = 7.1;
    let d_i = 50.3;
    let beta = 45.0f64;
    let a = required_area(t_s, d_i, beta).expect("area");
    let expected =
        d_i / (90.0 - beta).to_radians().cos() * t_s * (2.0 - beta.to_radians().sin());
    assert!((a - expected).abs() < 1e-9);
    // 경사 분기는 수직보다 넓은 면적을 요구한다
    let perpendicular = required_area(t_s, d_i, 90.0).expect("area");
    assert!(a > perpendicular);
}

#[test]
fn required_area_rejects_degenerate_angle() {
    let err = required_area(7.1, 50.3, 0.0).unwrap_err();
    assert!(matches!(err, BranchError::DegenerateAngle { .. }));
}

#[test]
fn available_area_ignores_negative_excess() {
    let shell = ExcessLayer {
        outer_diameter_mm: 168.3,
        nominal_thickness_mm: 5.0,
        required_thickness_mm: 6.0,
    };
    let branch = ExcessLayer {
        outer_diameter_mm: 60.3,
        nominal_thickness_mm: 4.0,
        required_thickness_mm: 5.0,
    };
    let res = available_area(shell, branch, None);
    assert_eq!(res.total_mm2, 0.0);
}

#[test]
fn pad_is_clamped_to_shell_envelope() {
    let shell = ExcessLayer {
        outer_diameter_mm: 168.3,
        nominal_thickness_mm: 7.1,
        required_thickness_mm: 6.1,
    };
    let branch = ExcessLayer {
        outer_diameter_mm: 60.3,
        nominal_thickness_mm: 5.0,
        required_thickness_mm: 5.0,
    };
    // 한계 길이보다 긴 패드, 셸보다 두꺼운 패드는 잘려서만 인정된다
    let res = available_area(
        shell,
        branch,
        Some(Pad {
            length_mm: 1e4,
            thickness_mm: 50.0,
        }),
    );
    let excess_t = 7.1 - 6.1;
    let ls = 2.5 * (168.3f64 * excess_t).sqrt();
    assert!((res.limit_length_shell_mm - ls).abs() < 1e-9);
    assert!((res.pad_mm2 - ls * 7.1).abs() < 1e-9);
}

#[test]
fn insufficient_reinforcement_reports_exact_deficit() {
    // 셸 여유를 아주 작게 잡아 가용 면적이 요구 면적에 못 미치게 한다
    let shell = ExcessLayer {
        outer_diameter_mm: 168.3,
        nominal_thickness_mm: 7.1,
        required_thickness_mm: 7.0,
    };
    let branch = ExcessLayer {
        outer_diameter_mm: 60.3,
        nominal_thickness_mm: 5.0,
        required_thickness_mm: 5.0,
    };
    let res = check_reinforcement(shell, branch, None, 90.0).expect("check");
    let expected_req = 7.1 * (60.3 - 2.0 * 5.0);
    assert!((res.required_mm2 - expected_req).abs() < 1e-9);
    assert_eq!(res.verdict, AreaVerdict::Insufficient);
    assert_eq!(res.deficit_mm2, res.required_mm2 - res.available.total_mm2);
}

#[test]
fn check_reinforcement_rejects_degenerate_branch_geometry() {
    let shell = ExcessLayer {
        outer_diameter_mm: 168.3,
        nominal_thickness_mm: 7.1,
        required_thickness_mm: 6.0,
    };
    let branch = ExcessLayer {
        outer_diameter_mm: 60.3,
        nominal_thickness_mm: 40.0,
        required_thickness_mm: 5.0,
    };
    let err = check_reinforcement(shell, branch, None, 90.0).unwrap_err();
    assert!(matches!(err, BranchError::DegenerateGeometry { .. }));
}

#[test]
fn unreinforced_heuristic_accepts_small_perpendicular_branch() {
    let c = unreinforced_check(60.3, 168.3, 90.0);
    assert!(c.diameter_ratio < 0.5);
    assert!(c.likely_acceptable);
}

#[test]
fn unreinforced_heuristic_rejects_large_or_shallow_branch() {
    assert!(!unreinforced_check(120.0, 168.3, 90.0).likely_acceptable);
    assert!(!unreinforced_check(60.3, 168.3, 30.0).likely_acceptable);
}

#[test]
fn tee_area_is_simple_product() {
    assert!((tee_required_area_approx(7.1, 60.3) - 2.5 * 7.1 * 60.3).abs() < 1e-9);
}

#[test]
fn required_area_rejects_angle_outside_range() {
    // 음수 각도는 d_eff와 A_req를 음수로 만들어 판정을 뒤집는다
    let err = required_area(7.1, 50.3, -45.0).unwrap_err();
    assert!(matches!(err, BranchError::AngleOutOfRange { .. }));
    let err = required_area(7.1, 50.3, 120.0).unwrap_err();
    assert!(matches!(err, BranchError::AngleOutOfRange { .. }));
}
