use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn temp_workdir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("salesgen_cli_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp workdir");
    dir
}

fn salesgen(workdir: &PathBuf, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_salesgen"))
        .current_dir(workdir)
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("run salesgen")
}

#[test]
fn no_arguments_without_directories_fails() {
    let workdir = temp_workdir("missing_dirs");
    let output = salesgen(&workdir, &[]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("structured"), "stderr: {stderr}");
}

#[test]
fn no_arguments_with_directories_writes_default_dataset() {
    let workdir = temp_workdir("defaults");
    fs::create_dir_all(workdir.join("data/structured")).expect("structured dir");
    fs::create_dir_all(workdir.join("data/unstructured")).expect("unstructured dir");

    let output = salesgen(&workdir, &[]);
    assert!(output.status.success(), "{output:?}");

    let csv = fs::read_to_string(workdir.join("data/structured/daily_sales.csv"))
        .expect("read csv");
    assert_eq!(csv.lines().count(), 1001);

    let pages = fs::read_dir(workdir.join("data/unstructured"))
        .expect("list pages")
        .count();
    assert_eq!(pages, 10);
}

#[test]
fn seeded_generate_then_verify_succeeds() {
    let workdir = temp_workdir("verify");
    let generate = salesgen(
        &workdir,
        &[
            "generate",
            "--rows",
            "40",
            "--seed",
            "17",
            "--create-dirs",
            "--report",
            "report.json",
        ],
    );
    assert!(generate.status.success(), "{generate:?}");
    assert!(workdir.join("report.json").is_file());

    let verify = salesgen(&workdir, &["verify", "--rows", "40"]);
    assert!(verify.status.success(), "{verify:?}");

    let wrong_count = salesgen(&workdir, &["verify", "--rows", "41"]);
    assert!(!wrong_count.status.success());
}

#[test]
fn settings_file_supplies_seed_and_rows() {
    let workdir = temp_workdir("settings");
    fs::write(
        workdir.join("salesgen.toml"),
        "[generate]\nrows = 12\nseed = 5\nbase_dir = \"out\"\n",
    )
    .expect("write settings");

    let first = salesgen(&workdir, &["generate", "--create-dirs"]);
    assert!(first.status.success(), "{first:?}");
    let csv_a = fs::read(workdir.join("out/structured/daily_sales.csv")).expect("read csv");
    assert_eq!(String::from_utf8_lossy(&csv_a).lines().count(), 13);

    let second = salesgen(&workdir, &["generate"]);
    assert!(second.status.success(), "{second:?}");
    let csv_b = fs::read(workdir.join("out/structured/daily_sales.csv")).expect("read csv");
    assert_eq!(csv_a, csv_b);
}

#[test]
fn missing_explicit_config_is_an_error() {
    let workdir = temp_workdir("missing_config");
    let output = salesgen(&workdir, &["--config", "nope.toml", "generate"]);
    assert!(!output.status.success());
}
