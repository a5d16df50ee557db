use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn termbars() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("termbars"))
}

#[test]
fn examples_render_both_charts() {
    termbars()
        .args(["examples", "--width", "80", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fruits example"))
        .stdout(predicate::str::contains("Population example"))
        .stdout(predicate::str::contains("Mexico City"))
        .stdout(predicate::str::contains("37977000"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn doc_reads_json_documents() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    let data = dir.path().join("data.json");
    fs::write(&config, r#"{"title": "Fruit", "percwidth": 50, "showvalues": true}"#).unwrap();
    fs::write(
        &data,
        r#"[{"label": "apples", "value": 3}, {"label": "pears", "value": 1.5}]"#,
    )
    .unwrap();

    termbars()
        .args(["doc", "--width", "40", "--no-color", "--config"])
        .arg(&config)
        .arg("--data")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Fruit\napples █"))
        .stdout(predicate::str::contains(" 1.5\n"));
}

#[test]
fn doc_reads_toml_without_config() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data.toml");
    fs::write(&data, "[[entries]]\nlabel = \"a\"\nvalue = 2\n").unwrap();

    termbars()
        .args(["doc", "--width", "12", "--no-color", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stdout("a ██████████\n");
}

#[test]
fn doc_reports_out_of_range_percwidth() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    let data = dir.path().join("data.json");
    fs::write(&config, r#"{"percwidth": 150}"#).unwrap();
    fs::write(&data, "[]").unwrap();

    termbars()
        .arg("doc")
        .arg("--config")
        .arg(&config)
        .arg("--data")
        .arg(&data)
        .assert()
        .failure()
        .stderr(predicate::str::contains("percwidth must be in 1..=100, got 150"));
}

#[test]
fn doc_reports_malformed_data() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data.json");
    fs::write(&data, "[{").unwrap();

    termbars()
        .arg("doc")
        .arg("--data")
        .arg(&data)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed JSON data document"));
}

#[test]
fn doc_reports_missing_file() {
    termbars()
        .args(["doc", "--data", "definitely/not/here.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read definitely/not/here.json"));
}

#[test]
fn csv_from_stdin() {
    termbars()
        .args(["csv", "-", "--width", "12", "--no-color", "--title", "T", "-v"])
        .write_stdin("label,value\na,4\nb,-2\n")
        .assert()
        .success()
        .stdout("T\na ███████ 4\nb ░░░░ -2\n");
}

#[test]
fn csv_rejects_bad_percwidth() {
    termbars()
        .args(["csv", "-", "--percwidth", "0"])
        .write_stdin("a,1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("percwidth"));
}

#[test]
fn csv_reports_bad_row() {
    termbars()
        .args(["csv", "-"])
        .write_stdin("a,1\nb,x\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: invalid value 'x'"));
}

#[test]
fn colors_lists_palette() {
    termbars()
        .arg("colors")
        .assert()
        .success()
        .stdout(predicate::str::contains("red"))
        .stdout(predicate::str::contains("white"));
}
