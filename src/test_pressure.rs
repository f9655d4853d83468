/// 수압시험 압력 계산 (EN 13480-3).
/// P_test = max(1.25·P·(f_test/f_design), 1.43·P).

/// 응력비 항 계수.
pub const STRESS_RATIO_FACTOR: f64 = 1.25;

/// 고정 하한 항 계수.
pub const MINIMUM_FACTOR: f64 = 1.43;

/// 시험압력 계산 오류를 표현한다.
#[derive(Debug)]
pub enum TestPressureError {
    /// 설계 허용응력이 0 이하라 응력비를 계산할 수 없다
    NonPositiveDesignStress { stress_mpa: f64 },
}

impl std::fmt::Display for TestPressureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestPressureError::NonPositiveDesignStress { stress_mpa } => write!(
                f,
                "설계 허용응력이 0 이하입니다: f_design={stress_mpa} MPa"
            ),
        }
    }
}

impl std::error::Error for TestPressureError {}

/// 시험압력 계산 결과. 두 후보 항과 지배값을 함께 담는다.
#[derive(Debug, Clone, Copy)]
pub struct TestPressureResult {
    /// 1.25·P·(f_test/f_design) [MPa]
    pub by_stress_ratio_mpa: f64,
    /// 1.43·P [MPa]
    pub by_fixed_factor_mpa: f64,
    /// 지배 시험압력 [MPa]
    pub test_pressure_mpa: f64,
}

/// 설계압력과 설계/시험 온도의 허용응력으로 시험압력을 계산한다.
pub fn test_pressure(
    design_pressure_mpa: f64,
    f_design_mpa: f64,
    f_test_mpa: f64,
) -> Result<TestPressureResult, TestPressureError> {
    if f_design_mpa <= 0.0 {
        return Err(TestPressureError::NonPositiveDesignStress {
            stress_mpa: f_design_mpa,
        });
    }
    let by_ratio = STRESS_RATIO_FACTOR * design_pressure_mpa * (f_test_mpa / f_design_mpa);
    let by_fixed = MINIMUM_FACTOR * design_pressure_mpa;
    Ok(TestPressureResult {
        by_stress_ratio_mpa: by_ratio,
        by_fixed_factor_mpa: by_fixed,
        test_pressure_mpa: by_ratio.max(by_fixed),
    })
}
