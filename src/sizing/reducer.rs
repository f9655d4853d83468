use crate::sizing::straight_pipe::{
    straight_pipe_min_thickness, SizingError, SizingInput, Verdict,
};

/// 콘센트릭 리듀서 최소 두께 (EN 13480-3 6.4).
/// 양 끝단을 각각 직관 공식으로 계산해 큰 쪽을 채택한다.

/// 이 값보다 콘 반각 α가 크면 추가 보강 검토(6.5.3)를 권고한다.
pub const CONE_HALF_ANGLE_ADVISORY_DEG: f64 = 20.0;

/// 리듀서 계산 결과.
#[derive(Debug, Clone, Copy)]
pub struct ReducerResult {
    /// 큰 끝단의 e_min [mm]
    pub e_min_large_mm: f64,
    /// 작은 끝단의 e_min [mm]
    pub e_min_small_mm: f64,
    /// 지배 e_min = max(양 끝단) [mm]
    pub e_min_mm: f64,
    /// 부식여유 포함 요구 두께 [mm]
    pub e_total_mm: f64,
    pub verdict: Verdict,
    /// 불합격 시 부족량 [mm]. 합격이면 0이다.
    pub deficit_mm: f64,
    /// true면 콘 반각이 커서 추가 보강 검토가 필요하다.
    pub cone_angle_advisory: bool,
}

/// 리듀서 양 끝단 최소 두께를 계산한다.
/// 판정은 두 끝단 공칭 두께 중 작은 값을 기준으로 한다.
pub fn reducer_min_thickness(
    large_end: SizingInput,
    small_end: SizingInput,
    cone_half_angle_deg: f64,
) -> Result<ReducerResult, SizingError> {
    let large = straight_pipe_min_thickness(large_end)?;
    let small = straight_pipe_min_thickness(small_end)?;

    let e_min = large.e_min_mm.max(small.e_min_mm);
    let e_total = e_min + large_end.corrosion_allowance_mm;
    let governing_nominal = large_end
        .nominal_thickness_mm
        .min(small_end.nominal_thickness_mm);
    let (verdict, deficit) = if e_total <= governing_nominal {
        (Verdict::Pass, 0.0)
    } else {
        (Verdict::Fail, e_total - governing_nominal)
    };

    Ok(ReducerResult {
        e_min_large_mm: large.e_min_mm,
        e_min_small_mm: small.e_min_mm,
        e_min_mm: e_min,
        e_total_mm: e_total,
        verdict,
        deficit_mm: deficit,
        cone_angle_advisory: cone_half_angle_deg > CONE_HALF_ANGLE_ADVISORY_DEG,
    })
}
