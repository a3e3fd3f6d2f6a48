//! Integration tests for the arasas CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE_VERTICAL: &str = "verb\tذهب\tM1\n\
noun\tالولد\tS2.2 T3\n\
prep\tإلى\tZ99\n\
noun\tالمدرسة\tP1 H1\n\
punc\t.\tPUNC\n\
\n\
verb\tقرأ\tZ99\n\
noun\tكتابا\tQ4.1";

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

/// `arasas annotate` wired to the fixture resources
fn annotate_cmd(input: &str) -> Command {
    let mut cmd = Command::cargo_bin("arasas").unwrap();
    cmd.env_remove("ARASAS_DATA_DIR")
        .arg("annotate")
        .arg(fixture_path(input))
        .arg("--lexicon")
        .arg(fixture_path("lexicon.usas"))
        .arg("--data-dir")
        .arg(fixture_path("data"))
        .arg("--quiet");
    cmd
}

#[test]
fn test_annotate_vertical_to_stdout() {
    annotate_cmd("sample.txt")
        .assert()
        .success()
        .stdout(format!("{SAMPLE_VERTICAL}\n"));
}

#[test]
fn test_annotate_horizontal() {
    annotate_cmd("sample.txt")
        .arg("--output-format")
        .arg("horizontal")
        .assert()
        .success()
        .stdout("ذهب_M1 الولد_S2.2 إلى_Z99 المدرسة_P1 ._PUNC قرأ_Z99 كتابا_Q4.1\n");
}

#[test]
fn test_annotate_xml_full_tags() {
    annotate_cmd("sample.txt")
        .arg("-f")
        .arg("xml")
        .arg("--xml-full-tags")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<w id="1.2" pos="noun" sem="S2.2 T3">الولد</w>"#,
        ))
        .stdout(predicate::str::contains(
            r#"<w id="2.2" pos="noun" sem="Q4.1">كتابا</w>"#,
        ));
}

#[test]
fn test_comment_lines_are_not_annotated() {
    annotate_cmd("sample.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("تعليق").not());
}

#[test]
fn test_xml_input_markup_is_stripped() {
    annotate_cmd("sample.xml")
        .assert()
        .success()
        .stdout(predicate::str::contains("noun\tالولد\tS2.2 T3"))
        .stdout(predicate::str::contains("doc").not());
}

#[test]
fn test_log_appended_on_stdout() {
    let output = annotate_cmd("sample.txt").arg("--log").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let (text, log) = stdout.split_once("\n\n{").unwrap();
    assert_eq!(text, SAMPLE_VERTICAL);
    assert!(log.starts_with("\n    \"tokens\": 7,"));

    let json: serde_json::Value =
        serde_json::from_str(&format!("{{{}", log.trim_end())).unwrap();
    assert_eq!(json["tokens"], 7);
    assert_eq!(json["tokens_untagged"], 2);
    assert_eq!(json["tokens_punctuation"], 1);
    assert_eq!(json["sentences"], 2);
}

#[test]
fn test_output_file_prepends_log() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    annotate_cmd("sample.txt")
        .arg("--output-file")
        .arg(&output_file)
        .arg("--log")
        .assert()
        .success()
        .stdout("");

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.starts_with("{\n    \"tokens\": 7,"));
    assert!(content.ends_with(&format!("}}\n\n{SAMPLE_VERTICAL}")));
}

#[test]
fn test_output_file_without_log() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    annotate_cmd("sample.txt")
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output_file).unwrap(), SAMPLE_VERTICAL);
}

#[test]
fn test_config_file() {
    let mut cmd = Command::cargo_bin("arasas").unwrap();
    cmd.env_remove("ARASAS_DATA_DIR")
        .arg("annotate")
        .arg(fixture_path("sample.txt"))
        .arg("--config")
        .arg(fixture_path("config.toml"))
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<w id="1.4" pos="noun" sem="P1 H1">المدرسة</w>"#,
        ));
}

#[test]
fn test_data_dir_from_environment() {
    let mut cmd = Command::cargo_bin("arasas").unwrap();
    cmd.env("ARASAS_DATA_DIR", fixture_path("data"))
        .arg("annotate")
        .arg(fixture_path("sample.txt"))
        .arg("--lexicon")
        .arg(fixture_path("lexicon.usas"))
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("verb\tذهب\tM1"));
}

#[test]
fn test_missing_input_file() {
    annotate_cmd("nonexistent.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_missing_lexicon_file() {
    let mut cmd = Command::cargo_bin("arasas").unwrap();
    cmd.env_remove("ARASAS_DATA_DIR")
        .arg("annotate")
        .arg(fixture_path("sample.txt"))
        .arg("--lexicon")
        .arg(fixture_path("nonexistent.usas"))
        .arg("--data-dir")
        .arg(fixture_path("data"));

    cmd.assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("nonexistent.usas"));
}

#[test]
fn test_missing_morphology_database() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("arasas").unwrap();
    cmd.env_remove("ARASAS_DATA_DIR")
        .arg("annotate")
        .arg(fixture_path("sample.txt"))
        .arg("--lexicon")
        .arg(fixture_path("lexicon.usas"))
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("-q");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("morphology-db"));
}

#[test]
fn test_malformed_lexicon_fails() {
    let mut cmd = Command::cargo_bin("arasas").unwrap();
    cmd.env_remove("ARASAS_DATA_DIR")
        .arg("annotate")
        .arg(fixture_path("sample.txt"))
        .arg("--lexicon")
        .arg(fixture_path("malformed.usas"))
        .arg("--data-dir")
        .arg(fixture_path("data"))
        .arg("-q");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("malformed lexicon line 2"));
}

#[test]
fn test_invalid_output_format() {
    annotate_cmd("sample.txt")
        .arg("--output-format")
        .arg("json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("arasas").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("annotate"));
}

#[test]
fn test_list_formats() {
    let mut cmd = Command::cargo_bin("arasas").unwrap();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("vertical"))
        .stdout(predicate::str::contains("horizontal"))
        .stdout(predicate::str::contains("xml"));
}

#[test]
fn test_validate_lexicon() {
    let mut cmd = Command::cargo_bin("arasas").unwrap();
    cmd.arg("validate")
        .arg("--lexicon")
        .arg(fixture_path("lexicon.usas"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Entries: 5"));
}

#[test]
fn test_validate_malformed_lexicon() {
    let mut cmd = Command::cargo_bin("arasas").unwrap();
    cmd.arg("validate")
        .arg("--lexicon")
        .arg(fixture_path("malformed.usas"));

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Lexicon is invalid"));
}

#[test]
fn test_validate_requires_a_target() {
    let mut cmd = Command::cargo_bin("arasas").unwrap();
    cmd.arg("validate");

    cmd.assert().failure();
}

#[test]
fn test_generate_config() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("arasas.toml");

    let mut cmd = Command::cargo_bin("arasas").unwrap();
    cmd.arg("generate-config").arg("--output").arg(&output);

    cmd.assert().success();
    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("[resources]"));
    assert!(content.contains("format = \"vertical\""));
}
