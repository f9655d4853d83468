/// 티(tee) 분기 요구 면적 근사 (EN 13480-3 8.5 기반).
/// A_req ≈ 2.5 · t_s · d_o. 선별용 근사치이며 상세 검토를 대체하지 않는다.
pub fn tee_required_area_approx(shell_thickness_mm: f64, branch_outer_diameter_mm: f64) -> f64 {
    2.5 * shell_thickness_mm * branch_outer_diameter_mm
}
