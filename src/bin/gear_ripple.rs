use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{anyhow, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use gear_ripple::core::types::{CurveKind, FlankSide};
use gear_ripple::{AnalysisConfig, GearReport, MeasurementDocument, RippleAnalyzer};

fn main() {
    env_logger::init();

    let matches = build_cli().get_matches();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let result = dispatch(&matches, &mut stdout.lock(), &mut stderr.lock());

    if let Err(e) = result {
        eprintln!("❌ 오류: {:#}", e);
        process::exit(1);
    }
}

/// analyze/spectrum 가 함께 쓰는 분석 설정 인자
fn config_args() -> [Arg; 3] {
    [
        Arg::new("config")
            .long("config")
            .short('c')
            .value_name("FILE")
            .value_parser(value_parser!(PathBuf))
            .help("분석 설정 JSON"),
        Arg::new("num-components")
            .long("num-components")
            .short('n')
            .value_name("COUNT")
            .value_parser(value_parser!(usize))
            .help("추출할 분량 수"),
        Arg::new("max-order")
            .long("max-order")
            .value_name("ORDER")
            .value_parser(value_parser!(usize))
            .help("최대 차수 (기본: 잇수 × 5)"),
    ]
}

fn input_arg() -> Arg {
    Arg::new("input")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("측정 문서(JSON) 경로")
}

fn build_cli() -> Command {
    Command::new("gear-ripple")
        .version(env!("CARGO_PKG_VERSION"))
        .about("기어 치형/치향 파형 분석 CLI")
        .subcommand_required(true)
        .subcommand(
            Command::new("analyze")
                .about("네 방향 분석 후 JSON 보고서 출력")
                .arg(input_arg())
                .args(config_args())
                .arg(
                    Arg::new("parallel")
                        .long("parallel")
                        .action(ArgAction::SetTrue)
                        .help("네 방향을 병렬로 분석"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("FILE")
                        .value_parser(value_parser!(PathBuf))
                        .help("보고서 저장 경로 (없으면 표준 출력에 JSON 만)"),
                ),
        )
        .subcommand(
            Command::new("spectrum")
                .about("한 방향의 스펙트럼 분량 출력")
                .arg(input_arg())
                .args(config_args())
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .short('k')
                        .value_parser(value_parser!(String))
                        .default_value("profile")
                        .help("profile 또는 lead"),
                )
                .arg(
                    Arg::new("side")
                        .long("side")
                        .short('s')
                        .value_parser(value_parser!(String))
                        .default_value("left")
                        .help("left 또는 right"),
                )
                .arg(
                    Arg::new("top")
                        .long("top")
                        .value_parser(value_parser!(usize))
                        .default_value("10")
                        .help("출력할 분량 수"),
                ),
        )
}

fn dispatch(matches: &ArgMatches, out: &mut dyn Write, status: &mut dyn Write) -> Result<()> {
    match matches.subcommand() {
        Some(("analyze", sub)) => handle_analyze(sub, out, status),
        Some(("spectrum", sub)) => handle_spectrum(sub, out),
        _ => Err(anyhow!("알 수 없는 명령")),
    }
}

fn input_path(matches: &ArgMatches) -> Result<&PathBuf> {
    matches
        .get_one::<PathBuf>("input")
        .ok_or_else(|| anyhow!("입력 경로가 필요함"))
}

fn load_measurement(path: &Path) -> Result<gear_ripple::GearMeasurement> {
    let document = MeasurementDocument::from_json_file(path)
        .with_context(|| format!("측정 문서 읽기 실패: {}", path.display()))?;
    Ok(document.into_measurement()?)
}

fn load_config(matches: &ArgMatches) -> Result<AnalysisConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => AnalysisConfig::from_json_file(path)
            .with_context(|| format!("설정 읽기 실패: {}", path.display()))?,
        None => AnalysisConfig::default(),
    };

    // 명령행 인자가 설정 파일보다 우선
    if let Some(&n) = matches.get_one::<usize>("num-components") {
        config.num_components = n;
    }
    if let Some(&order) = matches.get_one::<usize>("max-order") {
        config.max_order = Some(order);
    }
    if matches!(matches.try_get_one::<bool>("parallel"), Ok(Some(true))) {
        config.parallel = true;
    }
    config.validate()?;
    Ok(config)
}

/// 요약 표는 `status` 로, JSON 보고서는 파일 또는 `out` 으로 보낸다
fn handle_analyze(matches: &ArgMatches, out: &mut dyn Write, status: &mut dyn Write) -> Result<()> {
    let input = input_path(matches)?;
    let config = load_config(matches)?;
    let measurement = load_measurement(input)?;

    writeln!(status, "⚙️ 파형 분석 시작: {}", input.display())?;
    writeln!(status, "   잇수: {}", measurement.gear.teeth_count())?;
    writeln!(status, "   모듈: {}", measurement.gear.module())?;
    writeln!(status, "   분량 수: {}", config.num_components)?;

    let report = GearReport::build(&measurement, config);
    writeln!(status, "   최대 차수: {}", report.max_order)?;

    writeln!(status, "\n📊 === 방향별 결과 ===")?;
    writeln!(status, "{:<8} {:<6} {:>6} {:>12} {:>12} {:>10}", "종류", "치면", "고차", "진폭 합", "RMS", "F")?;
    for flank in report.flanks.iter() {
        writeln!(
            status,
            "{:<8} {:<6} {:>6} {:>12.4} {:>12.4} {:>10.4}",
            flank.kind.as_str(),
            flank.side.as_str(),
            flank.result.high_order_waves.len(),
            flank.result.high_order_amplitude,
            flank.result.high_order_rms,
            flank.deviation.total,
        )?;
    }
    writeln!(status, "\n피치 Fr: 좌 {:.4} / 우 {:.4}", report.pitch_left.runout, report.pitch_right.runout)?;

    match matches.get_one::<PathBuf>("output") {
        Some(path) => {
            report.write_json(path)?;
            writeln!(status, "\n✅ 보고서 저장: {}", path.display())?;
        }
        None => writeln!(out, "{}", report.to_json_string()?)?,
    }
    Ok(())
}

fn handle_spectrum(matches: &ArgMatches, out: &mut dyn Write) -> Result<()> {
    let input = input_path(matches)?;
    let kind: CurveKind = matches
        .get_one::<String>("kind")
        .map(String::as_str)
        .unwrap_or("profile")
        .parse()
        .map_err(|e: String| anyhow!(e))?;
    let side: FlankSide = matches
        .get_one::<String>("side")
        .map(String::as_str)
        .unwrap_or("left")
        .parse()
        .map_err(|e: String| anyhow!(e))?;
    let top = matches.get_one::<usize>("top").copied().unwrap_or(10);

    let mut config = load_config(matches)?;
    config.num_components = config.num_components.max(top);

    let measurement = load_measurement(input)?;
    let analyzer = RippleAnalyzer::from_measurement(&measurement, config);
    let result = analyzer.analyze(kind, side, measurement.curves(kind, side));

    writeln!(out, "🔍 {} {} 스펙트럼 (최대 차수 {})", kind, side, analyzer.max_order())?;
    writeln!(out, "{:>4} {:>10} {:>12} {:>10} {:>4}", "#", "차수", "진폭", "위상", "고차")?;
    for (i, c) in result.spectrum_components.iter().take(top).enumerate() {
        let high = if c.order >= measurement.gear.teeth_count() as f64 { "✓" } else { "" };
        writeln!(out, "{:>4} {:>10.0} {:>12.5} {:>10.4} {:>4}", i + 1, c.order, c.amplitude, c.phase, high)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 20 치 평기어, 치향 좌측에 60 차 파형
    fn write_measurement(dir: &Path) -> PathBuf {
        let pitch = 18.0_f64;
        let mut lead_left = serde_json::Map::new();
        for tooth in 1..=20u32 {
            let base = (tooth - 1) as f64 * pitch;
            let samples: Vec<f64> = (0..81)
                .map(|i| (60.0 * (base + 0.9 * pitch * i as f64 / 80.0)).to_radians().cos())
                .collect();
            lead_left.insert(
                tooth.to_string(),
                serde_json::json!([{ "position": 60.0, "samples": samples }]),
            );
        }
        let document = serde_json::json!({
            "gear": { "module": 3.0, "teeth_count": 20 },
            "profile_range": { "meas_start": 56.5, "meas_end": 63.0, "eval_start": 57.0, "eval_end": 62.5 },
            "lead_range": { "meas_start": 0.0, "meas_end": 40.0, "eval_start": 0.0, "eval_end": 40.0 },
            "lead": { "left": lead_left }
        });
        let path = dir.join("measurement.json");
        std::fs::write(&path, document.to_string()).unwrap();
        path
    }

    fn run(args: &[&str]) -> (String, String) {
        let matches = build_cli().try_get_matches_from(args.iter().copied()).unwrap();
        let (mut out, mut status) = (Vec::new(), Vec::new());
        dispatch(&matches, &mut out, &mut status).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(status).unwrap())
    }

    #[test]
    fn test_analyze_stdout_is_pure_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_measurement(dir.path());

        let (out, status) = run(&["gear-ripple", "analyze", input.to_str().unwrap()]);
        let report: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(report["gear"]["teeth_count"], 20);
        assert!(status.contains("방향별 결과"));
        assert!(!out.contains("방향별 결과"));
    }

    #[test]
    fn test_analyze_with_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_measurement(dir.path());
        let output = dir.path().join("report.json");

        let (out, status) = run(&[
            "gear-ripple",
            "analyze",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]);
        assert!(out.is_empty());
        assert!(status.contains("보고서 저장"));
        assert!(output.exists());
    }

    #[test]
    fn test_spectrum_honors_max_order() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_measurement(dir.path());

        let (out, _) = run(&[
            "gear-ripple",
            "spectrum",
            input.to_str().unwrap(),
            "--kind",
            "lead",
            "--max-order",
            "40",
        ]);
        assert!(out.contains("최대 차수 40"));
    }

    #[test]
    fn test_spectrum_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_measurement(dir.path());
        let config = dir.path().join("config.json");
        std::fs::write(&config, r#"{ "max_order": 75 }"#).unwrap();

        let (out, _) = run(&[
            "gear-ripple",
            "spectrum",
            input.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ]);
        assert!(out.contains("최대 차수 75"));
    }
}
