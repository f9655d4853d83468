use std::io::{self, Write};

use crate::app::AppError;
use crate::branch::{self, ExcessLayer, Pad};
use crate::config::Config;
use crate::material_db::{self, MaterialData};
use crate::report::Report;
use crate::sizing::{self, BendInput, SizingInput, Verdict};
use crate::test_pressure;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    StraightPipe,
    Fittings,
    BranchReinforcement,
    TestPressure,
    Materials,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== EN 13480-3 Piping Toolbox ===");
    println!("1) 직관 / 헤더 두께");
    println!("2) 피팅 (벤드/리듀서/티)");
    println!("3) 분기 보강");
    println!("4) 수압시험 압력");
    println!("5) 재질 테이블");
    println!("6) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::StraightPipe),
            "2" => return Ok(MenuChoice::Fittings),
            "3" => return Ok(MenuChoice::BranchReinforcement),
            "4" => return Ok(MenuChoice::TestPressure),
            "5" => return Ok(MenuChoice::Materials),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 직관/헤더 두께 메뉴를 처리한다.
pub fn handle_straight_pipe(cfg: &Config, report: &mut Report) -> Result<(), AppError> {
    println!("\n-- 직관 / 헤더 --");
    let mat = select_material()?;
    let (temp, f) = stress_for(mat, "설계온도")?;
    let p = read_f64_in("설계압력 P [MPa]: ", 0.0, f64::INFINITY)?;
    let z = read_f64_or_in("이음 계수 z", cfg.default_joint_factor, 0.4, 1.0)?;
    let c = read_f64_or_in(
        "부식/마모 여유 c [mm]",
        cfg.default_corrosion_allowance_mm,
        0.0,
        f64::INFINITY,
    )?;
    let d_o = read_f64_positive("외경 D_o [mm]: ")?;
    let t_nom = read_f64_positive("공칭 두께 t_nom [mm]: ")?;

    let res = sizing::straight_pipe_min_thickness(SizingInput {
        pressure_mpa: p,
        joint_factor: z,
        corrosion_allowance_mm: c,
        outer_diameter_mm: d_o,
        nominal_thickness_mm: t_nom,
        allowable_stress_mpa: f,
    })?;

    println!(
        "적용 공식: {} (D_o/D_i = {:.3})",
        res.formula.tag(),
        res.diameter_ratio
    );
    println!(
        "e_min = {:.2} mm, e_total(여유 포함) = {:.2} mm",
        res.e_min_mm, res.e_total_mm
    );
    print_verdict(res.verdict, res.deficit_mm, "mm");

    report.push("재질", mat.name);
    report.push("설계압력 P", format!("{p:.2} MPa"));
    report.push("설계온도", format!("{temp}°C"));
    report.push("f_design", format!("{f:.1} MPa"));
    report.push("직관 D_o", format!("{d_o} mm"));
    report.push("직관 t_nom", format!("{t_nom} mm"));
    report.push("직관 적용 공식", res.formula.tag());
    report.push("직관 e_min", format!("{:.2} mm", res.e_min_mm));
    report.push("직관 e_total", format!("{:.2} mm", res.e_total_mm));
    report.push("직관 판정", verdict_label(res.verdict));
    Ok(())
}

/// 피팅 메뉴를 처리한다.
pub fn handle_fittings(cfg: &Config, report: &mut Report) -> Result<(), AppError> {
    println!("\n-- 피팅 --");
    println!("1) 벤드  2) 리듀서  3) 티(근사)");
    let sel = read_line("선택: ")?;
    match sel.trim() {
        "1" => handle_bend(cfg, report),
        "2" => handle_reducer(cfg, report),
        "3" => handle_tee(report),
        _ => {
            println!("잘못된 선택입니다.");
            Ok(())
        }
    }
}

fn handle_bend(cfg: &Config, report: &mut Report) -> Result<(), AppError> {
    let mat = select_material()?;
    let (_temp, f) = stress_for(mat, "설계온도")?;
    let p = read_f64_in("설계압력 P [MPa]: ", 0.0, f64::INFINITY)?;
    let z = read_f64_or_in("이음 계수 z", cfg.default_joint_factor, 0.4, 1.0)?;
    let c = read_f64_or_in(
        "부식/마모 여유 c [mm]",
        cfg.default_corrosion_allowance_mm,
        0.0,
        f64::INFINITY,
    )?;
    let d_o = read_f64_positive("벤드 외경 D_o [mm]: ")?;
    let t_nom = read_f64_positive("벤드 공칭 두께 t_nom [mm]: ")?;
    let r = read_f64_positive("굽힘 반경 R [mm]: ")?;

    let straight = sizing::straight_pipe_min_thickness(SizingInput {
        pressure_mpa: p,
        joint_factor: z,
        corrosion_allowance_mm: c,
        outer_diameter_mm: d_o,
        nominal_thickness_mm: t_nom,
        allowable_stress_mpa: f,
    })?;
    let res = sizing::bend_min_thickness(
        straight.e_min_mm,
        BendInput {
            bend_radius_mm: r,
            outer_diameter_mm: d_o,
            nominal_thickness_mm: t_nom,
            corrosion_allowance_mm: c,
        },
    );

    if res.tight_radius_fallback {
        println!("주의: R/D_o ≤ 0.5라서 보정 없이 직관 e_min을 그대로 사용했습니다.");
    }
    println!(
        "e_intrados = {:.2} mm, e_extrados = {:.2} mm (R/D_o = {:.2})",
        res.e_intrados_mm, res.e_extrados_mm, res.radius_ratio
    );
    println!("e_total(여유 포함) = {:.2} mm", res.e_total_mm);
    print_verdict(res.verdict, res.deficit_mm, "mm");
    if res.buckling_advisory {
        println!(
            "주의: 형상계수 λ = {:.2} < 0.9 - 좌굴 검토(6.3.3)가 필요합니다.",
            res.shape_factor
        );
    }

    report.push("벤드 R", format!("{r} mm"));
    report.push("벤드 e_intrados", format!("{:.2} mm", res.e_intrados_mm));
    report.push("벤드 e_extrados", format!("{:.2} mm", res.e_extrados_mm));
    report.push("벤드 e_total", format!("{:.2} mm", res.e_total_mm));
    report.push("벤드 판정", verdict_label(res.verdict));
    Ok(())
}

fn handle_reducer(cfg: &Config, report: &mut Report) -> Result<(), AppError> {
    let mat = select_material()?;
    let (_temp, f) = stress_for(mat, "설계온도")?;
    let p = read_f64_in("설계압력 P [MPa]: ", 0.0, f64::INFINITY)?;
    let z = read_f64_or_in("이음 계수 z", cfg.default_joint_factor, 0.4, 1.0)?;
    let c = read_f64_or_in(
        "부식/마모 여유 c [mm]",
        cfg.default_corrosion_allowance_mm,
        0.0,
        f64::INFINITY,
    )?;
    let d_large = read_f64_positive("큰 끝단 외경 D_o [mm]: ")?;
    let t_large = read_f64_positive("큰 끝단 공칭 두께 [mm]: ")?;
    let d_small = read_f64_positive("작은 끝단 외경 d_o [mm]: ")?;
    let t_small = read_f64_positive("작은 끝단 공칭 두께 [mm]: ")?;
    let alpha = read_f64_in("콘 반각 α [°]: ", 0.0, 90.0)?;

    let large = SizingInput {
        pressure_mpa: p,
        joint_factor: z,
        corrosion_allowance_mm: c,
        outer_diameter_mm: d_large,
        nominal_thickness_mm: t_large,
        allowable_stress_mpa: f,
    };
    let small = SizingInput {
        outer_diameter_mm: d_small,
        nominal_thickness_mm: t_small,
        ..large
    };
    let res = sizing::reducer_min_thickness(large, small, alpha)?;

    println!(
        "e_min 큰 끝단 = {:.2} mm, 작은 끝단 = {:.2} mm",
        res.e_min_large_mm, res.e_min_small_mm
    );
    println!("지배 e_total(여유 포함) = {:.2} mm", res.e_total_mm);
    print_verdict(res.verdict, res.deficit_mm, "mm");
    if res.cone_angle_advisory {
        println!("주의: 콘 반각 α > 20° - 추가 보강 검토(6.5.3)가 필요할 수 있습니다.");
    }

    report.push("리듀서 D_o (대/소)", format!("{d_large}/{d_small} mm"));
    report.push("리듀서 e_total", format!("{:.2} mm", res.e_total_mm));
    report.push("리듀서 판정", verdict_label(res.verdict));
    Ok(())
}

fn handle_tee(report: &mut Report) -> Result<(), AppError> {
    let t_s = read_f64_positive("셸(헤더) 공칭 두께 t_s [mm]: ")?;
    let d_o = read_f64_positive("분기 외경 d_o [mm]: ")?;
    let area = branch::tee_required_area_approx(t_s, d_o);
    println!("요구 면적 A_req ≈ {area:.1} mm² (8.5 근사, 상세 검토 필요)");
    report.push("티 A_req (근사)", format!("{area:.1} mm²"));
    Ok(())
}

/// 분기 보강 메뉴를 처리한다.
pub fn handle_branch(cfg: &Config, report: &mut Report) -> Result<(), AppError> {
    println!("\n-- 분기 보강 --");
    let mat = select_material()?;
    let (_temp, f) = stress_for(mat, "설계온도")?;
    let p = read_f64_in("설계압력 P [MPa]: ", 0.0, f64::INFINITY)?;
    let z = read_f64_or_in("이음 계수 z", cfg.default_joint_factor, 0.4, 1.0)?;
    let c = read_f64_or_in(
        "부식/마모 여유 c [mm]",
        cfg.default_corrosion_allowance_mm,
        0.0,
        f64::INFINITY,
    )?;
    let shell_d = read_f64_positive("셸 외경 D_o [mm]: ")?;
    let shell_t = read_f64_positive("셸 공칭 두께 t_s [mm]: ")?;
    let branch_d = read_f64_positive("분기 외경 d_o [mm]: ")?;
    let branch_t = read_f64_positive("분기 공칭 두께 t_b [mm]: ")?;
    let beta = read_f64_or_in("분기 각도 β [°] (90 = 수직)", 90.0, 0.0, 90.0)?;

    let advisory = branch::unreinforced_check(branch_d, shell_d, beta);
    if advisory.likely_acceptable {
        println!(
            "참고: d_o/D_o = {:.2} ≤ 0.5, β ≥ 45° - 무보강 허용 가능성이 높습니다 (8.4.2 확인). 아래는 계산 판정과 별개의 선별 결과입니다.",
            advisory.diameter_ratio
        );
    } else {
        println!(
            "참고: 무보강 선별 기준을 만족하지 않습니다 (d_o/D_o = {:.2}, β = {beta}°). 보강 검토가 필요합니다.",
            advisory.diameter_ratio
        );
    }

    let shell_req = sizing::straight_pipe_min_thickness(SizingInput {
        pressure_mpa: p,
        joint_factor: z,
        corrosion_allowance_mm: c,
        outer_diameter_mm: shell_d,
        nominal_thickness_mm: shell_t,
        allowable_stress_mpa: f,
    })?;
    let branch_req = sizing::straight_pipe_min_thickness(SizingInput {
        pressure_mpa: p,
        joint_factor: z,
        corrosion_allowance_mm: c,
        outer_diameter_mm: branch_d,
        nominal_thickness_mm: branch_t,
        allowable_stress_mpa: f,
    })?;

    let pad = if read_yes_no("보강 패드를 사용합니까? (y/n): ")? {
        Some(Pad {
            length_mm: read_f64_positive("패드 길이 [mm]: ")?,
            thickness_mm: read_f64_positive("패드 두께 [mm]: ")?,
        })
    } else {
        None
    };

    let res = branch::check_reinforcement(
        ExcessLayer {
            outer_diameter_mm: shell_d,
            nominal_thickness_mm: shell_t,
            required_thickness_mm: shell_req.e_total_mm,
        },
        ExcessLayer {
            outer_diameter_mm: branch_d,
            nominal_thickness_mm: branch_t,
            required_thickness_mm: branch_req.e_total_mm,
        },
        pad,
        beta,
    )?;

    println!("A_req = {:.1} mm²", res.required_mm2);
    println!(
        "A_avail = {:.1} mm² (셸 {:.1} + 분기 {:.1} + 패드 {:.1})",
        res.available.total_mm2,
        res.available.excess_shell_mm2,
        res.available.excess_branch_mm2,
        res.available.pad_mm2
    );
    match res.verdict {
        branch::AreaVerdict::Sufficient => println!("판정: 보강 충분"),
        branch::AreaVerdict::Insufficient => {
            println!("판정: 보강 부족 - {:.1} mm² 부족", res.deficit_mm2)
        }
    }

    report.push("분기 d_o", format!("{branch_d} mm"));
    report.push("분기 각도 β", format!("{beta}°"));
    report.push("A_req", format!("{:.1} mm²", res.required_mm2));
    report.push("A_avail", format!("{:.1} mm²", res.available.total_mm2));
    report.push(
        "분기 판정",
        match res.verdict {
            branch::AreaVerdict::Sufficient => "보강 충분",
            branch::AreaVerdict::Insufficient => "보강 부족",
        },
    );
    Ok(())
}

/// 수압시험 압력 메뉴를 처리한다.
pub fn handle_test_pressure(report: &mut Report) -> Result<(), AppError> {
    println!("\n-- 수압시험 압력 --");
    let mat = select_material()?;
    let p = read_f64_in("설계압력 P [MPa]: ", 0.0, f64::INFINITY)?;
    let (t_design, f_design) = stress_for(mat, "설계온도")?;
    let (t_test, f_test) = stress_for(mat, "시험온도")?;

    let res = test_pressure::test_pressure(p, f_design, f_test)?;
    println!(
        "P_test = {:.2} MPa (응력비 항 {:.2}, 1.43·P 항 {:.2} 중 큰 값)",
        res.test_pressure_mpa, res.by_stress_ratio_mpa, res.by_fixed_factor_mpa
    );

    report.push("시험 재질", mat.name);
    report.push("설계온도", format!("{t_design}°C"));
    report.push("f_design", format!("{f_design:.1} MPa"));
    report.push("시험온도", format!("{t_test}°C"));
    report.push("f_test", format!("{f_test:.1} MPa"));
    report.push("P_test", format!("{:.2} MPa", res.test_pressure_mpa));
    Ok(())
}

/// 재질 테이블을 출력한다.
pub fn handle_materials() -> Result<(), AppError> {
    println!("\n-- 재질 테이블 (EN 13480-2 참고치) --");
    for m in material_db::materials() {
        println!("{} - {} ({})", m.code, m.name, m.notes);
        if m.custom {
            continue;
        }
        for p in m.allowable {
            println!("  {:>5.0}°C : {:>5.1} MPa", p.temp_c, p.stress_mpa);
        }
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 저장은 호출자가 한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!(
        "현재: z 기본값 {}, c 기본값 {} mm, CSV 경로 {}",
        cfg.default_joint_factor, cfg.default_corrosion_allowance_mm, cfg.csv_export_path
    );
    cfg.default_joint_factor = read_f64_or_in("z 기본값", cfg.default_joint_factor, 0.4, 1.0)?;
    cfg.default_corrosion_allowance_mm = read_f64_or_in(
        "c 기본값 [mm]",
        cfg.default_corrosion_allowance_mm,
        0.0,
        f64::INFINITY,
    )?;
    let path = read_line(&format!("CSV 경로 (기본 {}): ", cfg.csv_export_path))?;
    if !path.trim().is_empty() {
        cfg.csv_export_path = path.trim().to_string();
    }
    Ok(())
}

/// 요약이 비어 있지 않으면 화면에 표로 보여주고 CSV 저장을 제안한다.
pub fn offer_csv_export(report: &Report, cfg: &Config) -> Result<(), AppError> {
    if report.is_empty() {
        return Ok(());
    }
    println!("\n-- 요약 --");
    for row in report.rows() {
        println!("{:<20} {}", row.parameter, row.value);
    }
    if read_yes_no(&format!(
        "요약을 {}에 CSV로 저장합니까? (y/n): ",
        cfg.csv_export_path
    ))? {
        std::fs::write(&cfg.csv_export_path, report.to_csv())?;
        println!("저장했습니다: {}", cfg.csv_export_path);
    }
    Ok(())
}

fn select_material() -> Result<&'static MaterialData, AppError> {
    println!("재질 선택:");
    for (i, m) in material_db::materials().iter().enumerate() {
        println!("{}) {}", i + 1, m.name);
    }
    loop {
        let sel = read_line("재질 번호: ")?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if n >= 1 && n <= material_db::materials().len() {
                return Ok(&material_db::materials()[n - 1]);
            }
        }
        println!("잘못된 입력입니다. 다시 선택하세요.");
    }
}

/// 지정한 온도의 허용응력을 구한다. 사용자 지정 재질은 직접 입력받고,
/// 테이블 범위 밖이면 클램프 경고를 출력한다. (온도, f) 쌍을 반환한다.
fn stress_for(mat: &'static MaterialData, label: &str) -> Result<(f64, f64), AppError> {
    let temp = read_f64(&format!("{label} [°C]: "))?;
    if mat.custom {
        let f = read_f64_positive(&format!("{label}에서의 허용응력 f [MPa]: "))?;
        return Ok((temp, f));
    }
    let value = material_db::stress_at(mat, temp)?;
    if value.extrapolated {
        println!(
            "주의: {temp}°C는 테이블 범위 밖입니다. {}°C 값 {:.1} MPa로 클램프했습니다. EN 13480-2로 검증하세요.",
            value.source_temp_c, value.stress_mpa
        );
    }
    println!("허용응력 f({temp}°C) = {:.1} MPa", value.stress_mpa);
    Ok((temp, value.stress_mpa))
}

fn verdict_label(v: Verdict) -> &'static str {
    match v {
        Verdict::Pass => "합격",
        Verdict::Fail => "불합격",
    }
}

fn print_verdict(v: Verdict, deficit: f64, unit: &str) {
    match v {
        Verdict::Pass => println!("판정: 합격 (e_total ≤ t_nom)"),
        Verdict::Fail => println!("판정: 불합격 - {deficit:.2} {unit} 부족"),
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let line = read_line(prompt)?;
        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

/// 허용 범위를 벗어나면 다시 입력받는다.
fn read_f64_in(prompt: &str, min: f64, max: f64) -> Result<f64, AppError> {
    loop {
        let v = read_f64(prompt)?;
        if v >= min && v <= max {
            return Ok(v);
        }
        if max.is_finite() {
            println!("{min}~{max} 범위의 값을 입력하세요.");
        } else {
            println!("{min} 이상의 값을 입력하세요.");
        }
    }
}

/// 0보다 큰 값만 받는다 (치수 입력용).
fn read_f64_positive(prompt: &str) -> Result<f64, AppError> {
    loop {
        let v = read_f64(prompt)?;
        if v > 0.0 {
            return Ok(v);
        }
        println!("0보다 큰 값을 입력하세요.");
    }
}

/// 빈 입력이면 기본값을 쓰고, 허용 범위를 벗어나면 다시 입력받는다.
fn read_f64_or_in(label: &str, default: f64, min: f64, max: f64) -> Result<f64, AppError> {
    loop {
        let line = read_line(&format!("{label} (기본 {default}): "))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v >= min && v <= max => return Ok(v),
            Ok(_) => {
                if max.is_finite() {
                    println!("{min}~{max} 범위의 값을 입력하세요.");
                } else {
                    println!("{min} 이상의 값을 입력하세요.");
                }
            }
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

fn read_yes_no(prompt: &str) -> Result<bool, AppError> {
    let line = read_line(prompt)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes" | "예"))
}
