/// EN 13480-2 재질별 온도-허용응력 테이블과 선형 보간을 제공한다.
/// 값은 참고용 근사치이며 설계 시 최신 표준 원문으로 검증해야 한다.

#[derive(Debug, Clone, Copy)]
pub struct TempPoint {
    pub temp_c: f64,
    pub stress_mpa: f64,
}

impl TempPoint {
    pub const fn new(temp_c: f64, stress_mpa: f64) -> Self {
        Self { temp_c, stress_mpa }
    }
}

#[derive(Debug)]
pub struct MaterialData {
    pub code: &'static str,
    pub name: &'static str,
    pub notes: &'static str,
    /// true면 테이블이 없는 사용자 지정 재질이다. 허용응력은 호출자가 직접 입력해야 한다.
    pub custom: bool,
    pub allowable: &'static [TempPoint],
}

/// 보간/클램프 결과.
#[derive(Debug, Clone, Copy)]
pub struct StressValue {
    pub stress_mpa: f64,
    pub source_temp_c: f64,
    /// true면 테이블 범위 밖이라 가장자리 값으로 클램프됨을 의미한다.
    pub extrapolated: bool,
}

/// 재질 조회 오류를 표현한다.
#[derive(Debug)]
pub enum MaterialDbError {
    /// 카탈로그에 없는 재질 코드
    UnknownMaterial(String),
    /// 사용자 지정 재질은 테이블 조회가 불가능하다
    CustomMaterial(&'static str),
    /// 곡선에 점이 하나도 없는 경우 (카탈로그 불변식상 도달 불가, 방어용)
    EmptyCurve(&'static str),
}

impl std::fmt::Display for MaterialDbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialDbError::UnknownMaterial(code) => {
                write!(f, "알 수 없는 재질입니다: {code}")
            }
            MaterialDbError::CustomMaterial(code) => write!(
                f,
                "사용자 지정 재질({code})은 테이블 조회가 불가능합니다. 허용응력을 직접 입력하세요."
            ),
            MaterialDbError::EmptyCurve(code) => {
                write!(f, "재질 {code}의 허용응력 테이블이 비어 있습니다.")
            }
        }
    }
}

impl std::error::Error for MaterialDbError {}

pub fn materials() -> &'static [MaterialData] {
    MATERIALS
}

pub fn find_material(code: &str) -> Option<&'static MaterialData> {
    MATERIALS
        .iter()
        .find(|m| m.code.eq_ignore_ascii_case(code) || m.name.eq_ignore_ascii_case(code))
}

/// 재질 코드와 온도로 허용응력을 조회한다.
pub fn allowable_stress(code: &str, temp_c: f64) -> Result<StressValue, MaterialDbError> {
    let mat =
        find_material(code).ok_or_else(|| MaterialDbError::UnknownMaterial(code.to_string()))?;
    stress_at(mat, temp_c)
}

/// 이미 찾아둔 재질 엔트리에서 허용응력을 조회한다.
pub fn stress_at(mat: &'static MaterialData, temp_c: f64) -> Result<StressValue, MaterialDbError> {
    if mat.custom {
        return Err(MaterialDbError::CustomMaterial(mat.code));
    }
    interpolate(mat.allowable, temp_c).ok_or(MaterialDbError::EmptyCurve(mat.code))
}

/// 테이블 범위 안은 구간별 선형 보간, 범위 밖은 가장자리 값으로 클램프한다.
/// 범위 밖은 오류가 아니라 `extrapolated` 플래그로만 알린다.
fn interpolate(points: &[TempPoint], temp_c: f64) -> Option<StressValue> {
    if points.is_empty() {
        return None;
    }
    if points.len() == 1 {
        let p = points[0];
        return Some(StressValue {
            stress_mpa: p.stress_mpa,
            source_temp_c: p.temp_c,
            extrapolated: (temp_c - p.temp_c).abs() > f64::EPSILON,
        });
    }
    if temp_c < points[0].temp_c {
        let p = points[0];
        return Some(StressValue {
            stress_mpa: p.stress_mpa,
            source_temp_c: p.temp_c,
            extrapolated: true,
        });
    }
    if temp_c > points[points.len() - 1].temp_c {
        let p = points[points.len() - 1];
        return Some(StressValue {
            stress_mpa: p.stress_mpa,
            source_temp_c: p.temp_c,
            extrapolated: true,
        });
    }
    for win in points.windows(2) {
        let a = win[0];
        let b = win[1];
        if temp_c >= a.temp_c && temp_c <= b.temp_c {
            let frac = (temp_c - a.temp_c) / (b.temp_c - a.temp_c);
            let val = a.stress_mpa + frac * (b.stress_mpa - a.stress_mpa);
            return Some(StressValue {
                stress_mpa: val,
                source_temp_c: temp_c,
                extrapolated: false,
            });
        }
    }
    None
}

const MATERIALS: &[MaterialData] = &[
    MaterialData {
        code: "P235GH",
        name: "P235GH",
        notes: "탄소강; EN 13480-2 테이블 참고 근사치",
        custom: false,
        allowable: &[
            tp(20.0, 150.0),
            tp(100.0, 143.0),
            tp(150.0, 135.0),
            tp(200.0, 127.0),
            tp(250.0, 117.0),
            tp(300.0, 104.0),
        ],
    },
    MaterialData {
        code: "P265GH",
        name: "P265GH",
        notes: "탄소강; EN 13480-2 테이블 참고 근사치",
        custom: false,
        allowable: &[
            tp(20.0, 170.0),
            tp(100.0, 162.0),
            tp(150.0, 153.0),
            tp(200.0, 144.0),
            tp(250.0, 133.0),
            tp(300.0, 118.0),
        ],
    },
    MaterialData {
        code: "16Mo3",
        name: "16Mo3",
        notes: "Mo 합금강; 고온용 참고치",
        custom: false,
        allowable: &[
            tp(20.0, 180.0),
            tp(100.0, 174.0),
            tp(200.0, 160.0),
            tp(300.0, 140.0),
            tp(400.0, 113.0),
            tp(450.0, 98.0),
            tp(500.0, 80.0),
        ],
    },
    MaterialData {
        code: "13CrMo4-5",
        name: "13CrMo4-5",
        notes: "Cr-Mo 합금강; 고온용 참고치",
        custom: false,
        allowable: &[
            tp(20.0, 170.0),
            tp(100.0, 164.0),
            tp(200.0, 151.0),
            tp(300.0, 132.0),
            tp(400.0, 106.0),
            tp(500.0, 70.0),
        ],
    },
    MaterialData {
        code: "1.4301",
        name: "1.4301 (X5CrNi18-10)",
        notes: "오스테나이트계 스테인리스; 참고용",
        custom: false,
        allowable: &[
            tp(20.0, 127.0),
            tp(100.0, 109.0),
            tp(200.0, 96.0),
            tp(300.0, 85.0),
            tp(400.0, 78.0),
            tp(500.0, 72.0),
            tp(550.0, 70.0),
        ],
    },
    MaterialData {
        code: "1.4404",
        name: "1.4404 (X2CrNiMo17-12-2)",
        notes: "오스테나이트계 스테인리스 Mo; 참고용",
        custom: false,
        allowable: &[
            tp(20.0, 133.0),
            tp(100.0, 114.0),
            tp(200.0, 100.0),
            tp(300.0, 89.0),
            tp(400.0, 81.0),
            tp(500.0, 75.0),
            tp(550.0, 73.0),
        ],
    },
    MaterialData {
        code: "1.4571",
        name: "1.4571 (X6CrNiMoTi17-12-2)",
        notes: "오스테나이트계 스테인리스 Ti 안정화; 참고용",
        custom: false,
        allowable: &[
            tp(20.0, 133.0),
            tp(100.0, 114.0),
            tp(200.0, 100.0),
            tp(300.0, 89.0),
            tp(400.0, 81.0),
            tp(500.0, 75.0),
            tp(550.0, 73.0),
        ],
    },
    MaterialData {
        code: "OTHER",
        name: "기타 (직접 입력)",
        notes: "테이블 없음; 허용응력을 직접 입력",
        custom: true,
        allowable: &[tp(20.0, 100.0)],
    },
];

const fn tp(temp_c: f64, stress_mpa: f64) -> TempPoint {
    TempPoint::new(temp_c, stress_mpa)
}

// NOTE:
// - Allowable stress values are approximate, adapted from typical EN 13480-2 tables for reference.
// - Out-of-range temperatures are clamped to the edge value; always verify against the standard itself.
