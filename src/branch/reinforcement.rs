/// 분기 연결부 보강 면적 계산 (EN 13480-3 8.4 근사식).
/// 요구 면적과 가용 면적(셸 여유 + 분기 여유 + 패드)을 비교한다.
/// 근사식이므로 결과는 표준 원문으로 검증해야 한다.

/// 여유 두께를 셸을 따라 인정할 수 있는 한계 길이 계수 (ls = 2.5·sqrt(D·excess)).
pub const LIMIT_LENGTH_FACTOR: f64 = 2.5;

/// 무보강 검토 휴리스틱: 분기/셸 외경비 상한.
pub const UNREINFORCED_DIAMETER_RATIO_MAX: f64 = 0.5;

/// 무보강 검토 휴리스틱: 분기 각도 하한 [°].
pub const UNREINFORCED_ANGLE_MIN_DEG: f64 = 45.0;

/// 분기 보강 계산 오류를 표현한다.
#[derive(Debug)]
pub enum BranchError {
    /// 분기 각도가 [0°, 90°] 범위 밖인 경우
    AngleOutOfRange { branch_angle_deg: f64 },
    /// 분기 축이 셸 면에 누운 각도 (β ≈ 0°). 유효 직경 공식이 정의되지 않는다.
    DegenerateAngle { branch_angle_deg: f64 },
    /// 분기관 내경이 0 이하가 되는 기하
    DegenerateGeometry {
        outer_diameter_mm: f64,
        nominal_thickness_mm: f64,
    },
}

impl std::fmt::Display for BranchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BranchError::AngleOutOfRange { branch_angle_deg } => write!(
                f,
                "분기 각도 β={branch_angle_deg}°는 허용 범위(0~90°)를 벗어났습니다."
            ),
            BranchError::DegenerateAngle { branch_angle_deg } => write!(
                f,
                "분기 각도 β={branch_angle_deg}°에서는 유효 직경이 정의되지 않습니다. 수직(90°)으로 취급하세요."
            ),
            BranchError::DegenerateGeometry {
                outer_diameter_mm,
                nominal_thickness_mm,
            } => write!(
                f,
                "분기관 내경이 0 이하입니다: d_o={outer_diameter_mm} mm, t_nom={nominal_thickness_mm} mm"
            ),
        }
    }
}

impl std::error::Error for BranchError {}

/// 여유 면적을 제공하는 부재(셸 또는 분기관) 하나의 입력.
#[derive(Debug, Clone, Copy)]
pub struct ExcessLayer {
    /// 부재 외경 [mm] (셸이면 D_o, 분기관이면 d_o)
    pub outer_diameter_mm: f64,
    /// 공칭 두께 [mm]
    pub nominal_thickness_mm: f64,
    /// 해당 부재의 요구 두께 e_total (부식여유 포함) [mm]
    pub required_thickness_mm: f64,
}

/// 보강 패드 치수.
#[derive(Debug, Clone, Copy)]
pub struct Pad {
    pub length_mm: f64,
    pub thickness_mm: f64,
}

/// 가용 면적 계산 내역.
#[derive(Debug, Clone, Copy)]
pub struct AvailableArea {
    /// 셸 쪽 한계 길이 ls [mm]
    pub limit_length_shell_mm: f64,
    /// 분기관 쪽 한계 길이 [mm]
    pub limit_length_branch_mm: f64,
    pub excess_shell_mm2: f64,
    pub excess_branch_mm2: f64,
    /// 클램프 적용 후 패드 면적 [mm²]
    pub pad_mm2: f64,
    pub total_mm2: f64,
}

/// 가용 면적 대비 요구 면적 판정.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaVerdict {
    Sufficient,
    Insufficient,
}

/// 보강 면적 검토 결과.
#[derive(Debug, Clone, Copy)]
pub struct ReinforcementResult {
    pub required_mm2: f64,
    pub available: AvailableArea,
    pub verdict: AreaVerdict,
    /// 부족 시 부족 면적 [mm²]. 충분하면 0이다.
    pub deficit_mm2: f64,
}

/// 무보강 가능성 휴리스틱 결과. 계산된 면적 판정이 아니라 참고용 선별 기준이다.
#[derive(Debug, Clone, Copy)]
pub struct UnreinforcedCheck {
    /// 분기/셸 외경비 d_o / D_o
    pub diameter_ratio: f64,
    /// true면 무보강으로 허용될 가능성이 높다 (8.4.2 검토 권고).
    pub likely_acceptable: bool,
}

/// 요구 보강 면적을 계산한다 (8.4.3 근사식).
/// 분기 각도 β는 셸 표면에서 잰 값이다 (90° = 수직 분기).
/// A_req = d_eff · t_s · (2 - sin β), 경사 분기는 d_eff = d_i / cos(90° - β).
pub fn required_area(
    shell_thickness_mm: f64,
    branch_inner_diameter_mm: f64,
    branch_angle_deg: f64,
) -> Result<f64, BranchError> {
    if !(branch_angle_deg >= 0.0 && branch_angle_deg <= 90.0) {
        return Err(BranchError::AngleOutOfRange { branch_angle_deg });
    }
    let oblique = branch_angle_deg < 90.0;
    let d_eff = if oblique {
        let from_normal = (90.0 - branch_angle_deg).to_radians();
        let cos = from_normal.cos();
        if cos.abs() < 1e-12 {
            return Err(BranchError::DegenerateAngle { branch_angle_deg });
        }
        branch_inner_diameter_mm / cos
    } else {
        branch_inner_diameter_mm
    };
    let factor = 2.0 - branch_angle_deg.to_radians().sin();
    Ok(d_eff * shell_thickness_mm * factor)
}

/// 가용 보강 면적을 계산한다.
/// 패드 길이는 셸 한계 길이, 패드 두께는 셸 공칭 두께를 넘겨 인정하지 않는다.
pub fn available_area(shell: ExcessLayer, branch: ExcessLayer, pad: Option<Pad>) -> AvailableArea {
    let branch_cap = LIMIT_LENGTH_FACTOR * branch.outer_diameter_mm;

    let excess_t_shell = (shell.nominal_thickness_mm - shell.required_thickness_mm).max(0.0);
    let ls_shell = LIMIT_LENGTH_FACTOR * (shell.outer_diameter_mm * excess_t_shell).sqrt();
    let excess_shell = excess_t_shell * ls_shell.min(branch_cap);

    let excess_t_branch = (branch.nominal_thickness_mm - branch.required_thickness_mm).max(0.0);
    let ls_branch = LIMIT_LENGTH_FACTOR * (branch.outer_diameter_mm * excess_t_branch).sqrt();
    let excess_branch = excess_t_branch * ls_branch.min(branch_cap);

    let pad_mm2 = match pad {
        Some(p) => {
            let length = p.length_mm.min(ls_shell);
            let thickness = p.thickness_mm.min(shell.nominal_thickness_mm);
            length.max(0.0) * thickness.max(0.0)
        }
        None => 0.0,
    };

    AvailableArea {
        limit_length_shell_mm: ls_shell,
        limit_length_branch_mm: ls_branch,
        excess_shell_mm2: excess_shell,
        excess_branch_mm2: excess_branch,
        pad_mm2,
        total_mm2: excess_shell + excess_branch + pad_mm2,
    }
}

/// 요구/가용 면적을 함께 계산해 판정한다.
/// 분기관 내경은 d_o - 2·t_nom 으로 구한다.
pub fn check_reinforcement(
    shell: ExcessLayer,
    branch: ExcessLayer,
    pad: Option<Pad>,
    branch_angle_deg: f64,
) -> Result<ReinforcementResult, BranchError> {
    let d_i = branch.outer_diameter_mm - 2.0 * branch.nominal_thickness_mm;
    if d_i <= 0.0 {
        return Err(BranchError::DegenerateGeometry {
            outer_diameter_mm: branch.outer_diameter_mm,
            nominal_thickness_mm: branch.nominal_thickness_mm,
        });
    }
    let required = required_area(shell.nominal_thickness_mm, d_i, branch_angle_deg)?;
    let available = available_area(shell, branch, pad);
    let (verdict, deficit) = if available.total_mm2 >= required {
        (AreaVerdict::Sufficient, 0.0)
    } else {
        (AreaVerdict::Insufficient, required - available.total_mm2)
    };
    Ok(ReinforcementResult {
        required_mm2: required,
        available,
        verdict,
        deficit_mm2: deficit,
    })
}

/// 무보강 분기 가능성을 선별한다 (휴리스틱, 8.4.2 검토 권고용).
pub fn unreinforced_check(
    branch_outer_diameter_mm: f64,
    shell_outer_diameter_mm: f64,
    branch_angle_deg: f64,
) -> UnreinforcedCheck {
    let ratio = branch_outer_diameter_mm / shell_outer_diameter_mm;
    UnreinforcedCheck {
        diameter_ratio: ratio,
        likely_acceptable: ratio <= UNREINFORCED_DIAMETER_RATIO_MAX
            && branch_angle_deg >= UNREINFORCED_ANGLE_MIN_DEG,
    }
}
