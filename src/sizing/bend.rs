use crate::sizing::straight_pipe::Verdict;

/// 벤드 내측/외측 두께 보정 (EN 13480-3 6.2).
/// 굽힘 반경비 r_d = R/D_o 가 너무 작으면 보정식이 무의미하므로
/// 직관 e_min을 그대로 쓰는 보수적 폴백을 적용한다.

/// 보정식이 적용 가능한 최소 굽힘 반경비 R/D_o.
pub const BEND_RADIUS_RATIO_MIN: f64 = 0.5;

/// 이 값보다 형상계수 λ가 작으면 좌굴 검토(6.3.3)를 권고한다.
pub const BUCKLING_SHAPE_FACTOR_MIN: f64 = 0.9;

/// 벤드 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct BendInput {
    /// 굽힘 반경 R [mm]
    pub bend_radius_mm: f64,
    /// 벤드 외경 D_o [mm]
    pub outer_diameter_mm: f64,
    /// 벤드 공칭 두께 t_nom [mm]
    pub nominal_thickness_mm: f64,
    /// 부식/마모 여유 c [mm]
    pub corrosion_allowance_mm: f64,
}

/// 벤드 계산 결과.
#[derive(Debug, Clone, Copy)]
pub struct BendResult {
    /// 굽힘 반경비 R/D_o
    pub radius_ratio: f64,
    /// 내측(intrados) 최소 두께 [mm]
    pub e_intrados_mm: f64,
    /// 외측(extrados) 최소 두께 [mm]
    pub e_extrados_mm: f64,
    /// 지배 두께 + 부식여유 [mm]
    pub e_total_mm: f64,
    pub verdict: Verdict,
    /// 불합격 시 부족량 [mm]. 합격이면 0이다.
    pub deficit_mm: f64,
    /// true면 R/D_o ≤ 0.5라서 직관 e_min을 그대로 사용했다 (보정 아님).
    pub tight_radius_fallback: bool,
    /// 형상계수 λ = D_o·R / t_nom²
    pub shape_factor: f64,
    /// true면 λ가 작아 좌굴 검토가 필요하다.
    pub buckling_advisory: bool,
}

/// 직관 e_min에 벤드 내측/외측 보정을 적용하고 벤드 공칭 두께 대비 판정한다.
pub fn bend_min_thickness(straight_e_min_mm: f64, input: BendInput) -> BendResult {
    let r_d = input.bend_radius_mm / input.outer_diameter_mm;
    let (e_int, e_ext, fallback) = if r_d <= BEND_RADIUS_RATIO_MIN {
        (straight_e_min_mm, straight_e_min_mm, true)
    } else {
        let e_int = straight_e_min_mm * (r_d - 0.25) / (r_d - 0.5);
        let e_ext = straight_e_min_mm * (r_d + 0.25) / (r_d + 0.5);
        (e_int, e_ext, false)
    };

    let e_total = e_int.max(e_ext) + input.corrosion_allowance_mm;
    let (verdict, deficit) = if e_total <= input.nominal_thickness_mm {
        (Verdict::Pass, 0.0)
    } else {
        (Verdict::Fail, e_total - input.nominal_thickness_mm)
    };

    let shape_factor = input.outer_diameter_mm * input.bend_radius_mm
        / (input.nominal_thickness_mm * input.nominal_thickness_mm);

    BendResult {
        radius_ratio: r_d,
        e_intrados_mm: e_int,
        e_extrados_mm: e_ext,
        e_total_mm: e_total,
        verdict,
        deficit_mm: deficit,
        tight_radius_fallback: fallback,
        shape_factor,
        buckling_advisory: shape_factor < BUCKLING_SHAPE_FACTOR_MIN,
    }
}
