use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const GREETING: &str = "title: Greeting\nAlice->Bob: hello\nBob-->Alice: hi\n";

fn source_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write fixture");
    file
}

#[test]
fn render_defaults_to_svg_on_stdout() {
    let fixture = source_file(GREETING);
    let mut cmd = cargo_bin_cmd!("seqd");
    cmd.arg("render").arg(fixture.path());

    let output_pred =
        predicate::str::starts_with("<svg").and(predicate::str::contains(">Greeting</text>"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn render_respects_the_to_flag() {
    let fixture = source_file(GREETING);
    let mut cmd = cargo_bin_cmd!("seqd");
    cmd.arg("render").arg(fixture.path()).arg("--to").arg("ascii");

    let output_pred =
        predicate::str::contains("| Alice |").and(predicate::str::contains("Greeting"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn render_reads_stdin_for_dash() {
    let mut cmd = cargo_bin_cmd!("seqd");
    cmd.arg("render").arg("-").arg("--to").arg("json");
    cmd.write_stdin("Alice->Bob: hello");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"Alice\""));
}

#[test]
fn render_writes_output_file() {
    let fixture = source_file(GREETING);
    let out_dir = tempfile::tempdir().expect("temp dir");
    let out_path = out_dir.path().join("diagram.svg");

    let mut cmd = cargo_bin_cmd!("seqd");
    cmd.arg("render")
        .arg(fixture.path())
        .arg("--output")
        .arg(&out_path);

    cmd.assert().success().stdout(predicate::str::is_empty());
    let written = std::fs::read_to_string(&out_path).expect("output file");
    assert!(written.starts_with("<svg"));
}

#[test]
fn render_rejects_unknown_format() {
    let fixture = source_file(GREETING);
    let mut cmd = cargo_bin_cmd!("seqd");
    cmd.arg("render").arg(fixture.path()).arg("--to").arg("pdf");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Format not found: pdf"));
}

#[test]
fn render_config_file_changes_default_format() {
    let fixture = source_file(GREETING);
    let config = source_file("[render]\nformat = \"ascii\"\n");

    let mut cmd = cargo_bin_cmd!("seqd");
    cmd.arg("render")
        .arg(fixture.path())
        .arg("--config")
        .arg(config.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("| Alice |"));
}

#[test]
fn check_summarizes_a_valid_diagram() {
    let fixture = source_file(GREETING);
    let mut cmd = cargo_bin_cmd!("seqd");
    cmd.arg("check").arg(fixture.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2 actors, 2 statements"));
}

#[test]
fn check_reports_parse_errors_with_context() {
    let fixture = source_file("Alice->Bob: hi\nthis is not a statement\n");
    let mut cmd = cargo_bin_cmd!("seqd");
    cmd.arg("check").arg(fixture.path());

    let stderr_pred = predicate::str::contains("line 2")
        .and(predicate::str::contains(">>   2 | this is not a statement"));

    cmd.assert().failure().stderr(stderr_pred);
}

#[test]
fn formats_lists_every_builtin() {
    let mut cmd = cargo_bin_cmd!("seqd");
    cmd.arg("formats");

    let output_pred = predicate::str::contains("svg (.svg)")
        .and(predicate::str::contains("ascii (.txt)"))
        .and(predicate::str::contains("json (.json)"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn missing_input_file_fails_cleanly() {
    let mut cmd = cargo_bin_cmd!("seqd");
    cmd.arg("render").arg("does-not-exist.seqd");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.seqd"));
}
