/// 직관/헤더 최소 두께 계산 (EN 13480-3 6.1).
/// 외경/내경 비가 1.7 이하면 박육 공식, 초과하면 Lamé 후육 공식을 적용한다.

/// 박육/후육 공식 전환 기준이 되는 외경/내경 비.
pub const THIN_WALL_DIAMETER_RATIO_MAX: f64 = 1.7;

/// 직관 최소 두께 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct SizingInput {
    /// 설계압력 P [MPa]
    pub pressure_mpa: f64,
    /// 용접 이음 계수 z [0.4~1.0]
    pub joint_factor: f64,
    /// 부식/마모 여유 c [mm]
    pub corrosion_allowance_mm: f64,
    /// 외경 D_o [mm]
    pub outer_diameter_mm: f64,
    /// 공칭 두께 t_nom [mm]
    pub nominal_thickness_mm: f64,
    /// 허용응력 f [MPa]
    pub allowable_stress_mpa: f64,
}

/// 적용된 두께 공식 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormulaKind {
    ThinWall,
    Lame,
}

impl FormulaKind {
    pub fn tag(self) -> &'static str {
        match self {
            FormulaKind::ThinWall => "thin-wall",
            FormulaKind::Lame => "lame",
        }
    }
}

/// 공칭 두께 대비 합격/불합격 판정.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

/// 직관 최소 두께 계산 결과.
#[derive(Debug, Clone, Copy)]
pub struct SizingResult {
    pub inner_diameter_mm: f64,
    /// 외경/내경 비 D_o / D_i
    pub diameter_ratio: f64,
    pub formula: FormulaKind,
    /// 부식여유 제외 최소 두께 e_min [mm]
    pub e_min_mm: f64,
    /// 부식여유 포함 요구 두께 e_total [mm]
    pub e_total_mm: f64,
    pub verdict: Verdict,
    /// 불합격 시 부족량 e_total - t_nom [mm]. 합격이면 0이다.
    pub deficit_mm: f64,
}

/// 두께 계산 오류를 표현한다.
#[derive(Debug)]
pub enum SizingError {
    /// 입력값이 허용 범위를 벗어난 경우
    InvalidInput { field: &'static str, value: f64 },
    /// 내경이 0 이하가 되는 기하 (t_nom ≥ D_o/2)
    DegenerateGeometry {
        outer_diameter_mm: f64,
        nominal_thickness_mm: f64,
    },
    /// 후육 공식의 근호 안이 0 이하 (f·z ≤ P, 물리적으로 불가능한 조합)
    NegativeRadicand {
        stress_times_joint_mpa: f64,
        pressure_mpa: f64,
    },
}

impl std::fmt::Display for SizingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizingError::InvalidInput { field, value } => {
                write!(f, "입력값이 허용 범위를 벗어났습니다: {field} = {value}")
            }
            SizingError::DegenerateGeometry {
                outer_diameter_mm,
                nominal_thickness_mm,
            } => write!(
                f,
                "내경이 0 이하입니다: D_o={outer_diameter_mm} mm, t_nom={nominal_thickness_mm} mm"
            ),
            SizingError::NegativeRadicand {
                stress_times_joint_mpa,
                pressure_mpa,
            } => write!(
                f,
                "후육 공식을 적용할 수 없습니다: f·z={stress_times_joint_mpa} MPa ≤ P={pressure_mpa} MPa"
            ),
        }
    }
}

impl std::error::Error for SizingError {}

/// 직관 최소 두께를 계산하고 공칭 두께 대비 판정한다.
/// 입력은 P ≥ 0, z ∈ [0.4, 1.0], c ≥ 0, D_o > 0, t_nom > 0, f > 0 이어야 한다.
pub fn straight_pipe_min_thickness(input: SizingInput) -> Result<SizingResult, SizingError> {
    validate_input(&input)?;
    let d_o = input.outer_diameter_mm;
    let d_i = d_o - 2.0 * input.nominal_thickness_mm;
    if d_i <= 0.0 {
        return Err(SizingError::DegenerateGeometry {
            outer_diameter_mm: d_o,
            nominal_thickness_mm: input.nominal_thickness_mm,
        });
    }
    let ratio = d_o / d_i;
    let p = input.pressure_mpa;
    let fz = input.allowable_stress_mpa * input.joint_factor;

    let (formula, e_min) = if ratio <= THIN_WALL_DIAMETER_RATIO_MAX {
        // 박육 공식 (6.1-1): e = P·D_o / (2·f·z + P)
        (FormulaKind::ThinWall, p * d_o / (2.0 * fz + p))
    } else {
        // 후육 Lamé 공식 (6.1-3): e = D_o/2 · (1 - sqrt((f·z - P)/(f·z + P)))
        if fz <= p {
            return Err(SizingError::NegativeRadicand {
                stress_times_joint_mpa: fz,
                pressure_mpa: p,
            });
        }
        let radicand = (fz - p) / (fz + p);
        (FormulaKind::Lame, d_o / 2.0 * (1.0 - radicand.sqrt()))
    };

    let e_total = e_min + input.corrosion_allowance_mm;
    let (verdict, deficit) = if e_total <= input.nominal_thickness_mm {
        (Verdict::Pass, 0.0)
    } else {
        (Verdict::Fail, e_total - input.nominal_thickness_mm)
    };

    Ok(SizingResult {
        inner_diameter_mm: d_i,
        diameter_ratio: ratio,
        formula,
        e_min_mm: e_min,
        e_total_mm: e_total,
        verdict,
        deficit_mm: deficit,
    })
}

/// 부정 조건으로 검사해 NaN도 함께 걸러낸다.
fn validate_input(input: &SizingInput) -> Result<(), SizingError> {
    if !(input.pressure_mpa >= 0.0) {
        return Err(SizingError::InvalidInput {
            field: "P",
            value: input.pressure_mpa,
        });
    }
    if !(input.joint_factor >= 0.4 && input.joint_factor <= 1.0) {
        return Err(SizingError::InvalidInput {
            field: "z",
            value: input.joint_factor,
        });
    }
    if !(input.corrosion_allowance_mm >= 0.0) {
        return Err(SizingError::InvalidInput {
            field: "c",
            value: input.corrosion_allowance_mm,
        });
    }
    if !(input.outer_diameter_mm > 0.0) {
        return Err(SizingError::InvalidInput {
            field: "D_o",
            value: input.outer_diameter_mm,
        });
    }
    if !(input.nominal_thickness_mm > 0.0) {
        return Err(SizingError::InvalidInput {
            field: "t_nom",
            value: input.nominal_thickness_mm,
        });
    }
    if !(input.allowable_stress_mpa > 0.0) {
        return Err(SizingError::InvalidInput {
            field: "f",
            value: input.allowable_stress_mpa,
        });
    }
    Ok(())
}
