// tests/integration/cli_run.rs

use std::io::Write;

use clap::Parser;
use critpath::cli::CliArgs;
use critpath::config::loader::default_project_path;
use critpath::errors::CritpathError;
use critpath::logging::resolve_level;
use critpath::run;
use critpath::types::{CriticalPathMode, OutputFormat};
use tempfile::NamedTempFile;

fn run_to_string(argv: &[&str]) -> anyhow::Result<String> {
    let args = CliArgs::try_parse_from(argv.iter().copied())?;
    let mut out: Vec<u8> = Vec::new();
    run(&args, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn defaults_parse() {
    let args = CliArgs::try_parse_from(["critpath"]).unwrap();
    assert_eq!(args.project, default_project_path());
    assert_eq!(args.project.to_str(), Some("Critpath.toml"));
    assert!(!args.demo);
    assert_eq!(args.format, OutputFormat::Table);
    assert!(args.critical_path.is_none());
    assert!(args.output.is_none());
}

#[test]
fn demo_and_project_conflict() {
    assert!(CliArgs::try_parse_from(["critpath", "--demo", "--project", "x.toml"]).is_err());
}

#[test]
fn demo_table_output() {
    let out = run_to_string(&["critpath", "--demo"]).unwrap();
    assert!(out.contains("Project duration: 44"));
    assert!(out.contains("Critical path: A -> N -> C -> E -> F -> J -> L -> B"));
}

#[test]
fn demo_json_output_with_chain_override() {
    let out = run_to_string(&[
        "critpath",
        "--demo",
        "--format",
        "json",
        "--critical-path",
        "chain",
    ])
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["project_duration"], 44);
    assert_eq!(value["critical_path"].as_array().unwrap().len(), 8);
}

#[test]
fn critical_path_flag_parses_both_modes() {
    let args = CliArgs::try_parse_from(["critpath", "--critical-path", "all-zero-slack"]).unwrap();
    assert_eq!(args.critical_path, Some(CriticalPathMode::AllZeroSlack));
}

#[test]
fn dry_run_prints_records_without_times() {
    let out = run_to_string(&["critpath", "--demo", "--dry-run"]).unwrap();
    assert!(out.starts_with("critpath dry-run"));
    assert!(out.contains("tasks (14):"));
    assert!(out.contains("  - J (duration 8)"));
    assert!(out.contains("      after: F, I"));
    assert!(!out.contains("Project duration"));
}

#[test]
fn output_flag_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo.dot");
    let path_str = path.to_str().unwrap();

    let out = run_to_string(&["critpath", "--demo", "--format", "dot", "--output", path_str]).unwrap();
    assert!(out.is_empty());

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("digraph"));
}

#[test]
fn cyclic_project_fails_with_cycle_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[[task]]
id = "A"
duration = 1
after = "B"

[[task]]
id = "B"
duration = 1
after = "A"
"#
    )
    .unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let err = run_to_string(&["critpath", "--project", &path]).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CritpathError>(),
        Some(CritpathError::CycleDetected { .. })
    ));
    assert_eq!(
        format!("{err:#}"),
        "computation could not complete: cycle involving A -> B -> A"
    );
}

#[test]
fn missing_project_file_mentions_path() {
    let err = run_to_string(&["critpath", "--project", "/definitely/not/here.toml"]).unwrap_err();
    assert!(format!("{err:#}").contains("/definitely/not/here.toml"));
}

#[test]
fn log_level_precedence() {
    use critpath::cli::LogLevel;

    assert_eq!(resolve_level(Some(LogLevel::Debug), Some("error")), tracing::Level::DEBUG);
    assert_eq!(resolve_level(None, Some("warn")), tracing::Level::WARN);
    assert_eq!(resolve_level(None, Some("bogus")), tracing::Level::INFO);
    assert_eq!(resolve_level(None, None), tracing::Level::INFO);
}
