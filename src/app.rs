use std::path::Path;

use crate::branch::BranchError;
use crate::config::{Config, ConfigError};
use crate::material_db::MaterialDbError;
use crate::report::Report;
use crate::sizing::SizingError;
use crate::test_pressure::TestPressureError;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 재질 조회 오류
    Material(MaterialDbError),
    /// 두께 계산 오류
    Sizing(SizingError),
    /// 분기 보강 계산 오류
    Branch(BranchError),
    /// 시험압력 계산 오류
    TestPressure(TestPressureError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Material(e) => write!(f, "재질 오류: {e}"),
            AppError::Sizing(e) => write!(f, "두께 계산 오류: {e}"),
            AppError::Branch(e) => write!(f, "분기 보강 오류: {e}"),
            AppError::TestPressure(e) => write!(f, "시험압력 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<MaterialDbError> for AppError {
    fn from(value: MaterialDbError) -> Self {
        AppError::Material(value)
    }
}

impl From<SizingError> for AppError {
    fn from(value: SizingError) -> Self {
        AppError::Sizing(value)
    }
}

impl From<BranchError> for AppError {
    fn from(value: BranchError) -> Self {
        AppError::Branch(value)
    }
}

impl From<TestPressureError> for AppError {
    fn from(value: TestPressureError) -> Self {
        AppError::TestPressure(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
/// 세션 동안의 계산 요약을 모았다가 종료 시 CSV 저장을 제안한다.
pub fn run(config: &mut Config, config_path: &Path) -> Result<(), AppError> {
    let mut report = Report::new();
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::StraightPipe => ui_cli::handle_straight_pipe(config, &mut report)?,
            MenuChoice::Fittings => ui_cli::handle_fittings(config, &mut report)?,
            MenuChoice::BranchReinforcement => ui_cli::handle_branch(config, &mut report)?,
            MenuChoice::TestPressure => ui_cli::handle_test_pressure(&mut report)?,
            MenuChoice::Materials => ui_cli::handle_materials()?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save(config_path)?;
            }
            MenuChoice::Exit => {
                ui_cli::offer_csv_export(&report, config)?;
                config.save(config_path)?;
                println!("종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
