use clap::Parser;

use en13480_toolbox::{app, config};

/// EN 13480-3 배관 두께/분기 보강 계산 CLI.
#[derive(Debug, Parser)]
#[command(
    name = "en13480_toolbox",
    version,
    about = "EN 13480-3 pipe wall thickness & branch reinforcement calculator"
)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = "config.toml")]
    config: std::path::PathBuf,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default(&cli.config)?;
    app::run(&mut cfg, &cli.config)?;
    Ok(())
}
