use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Run chc isolated from any config on the host
fn chc(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("chc").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config"))
        .env_remove("CHC_LOG");
    cmd
}

#[test]
fn test_piped_batch_to_snake() {
    let dir = TempDir::new().unwrap();
    chc(&dir)
        .args(["-c", "snake"])
        .write_stdin("fooBar this-is-a-test  snake_case\n\tClassName")
        .assert()
        .success()
        .stdout("foo_bar\nthis_is_a_test\nsnake_case\nclass_name\n");
}

#[test]
fn test_default_case_is_snake() {
    let dir = TempDir::new().unwrap();
    chc(&dir)
        .write_stdin("HTTPServer getHTTPResponse")
        .assert()
        .success()
        .stdout("http_server\nget_http_response\n");
}

#[test]
fn test_each_case_alias() {
    let dir = TempDir::new().unwrap();
    for (case, want) in [
        ("u", "FOO_BAR\n"),
        ("camel", "fooBar\n"),
        ("P", "FooBar\n"),
        ("lisp", "foo-bar\n"),
    ] {
        chc(&dir)
            .args(["--case", case])
            .write_stdin("foo_bar")
            .assert()
            .success()
            .stdout(want);
    }
}

#[test]
fn test_unknown_case_falls_back_to_snake() {
    let dir = TempDir::new().unwrap();
    chc(&dir)
        .args(["-c", "xyz"])
        .write_stdin("FooBar")
        .assert()
        .success()
        .stdout("foo_bar\n");
}

#[test]
fn test_piped_input_ignores_word_arguments() {
    let dir = TempDir::new().unwrap();
    chc(&dir)
        .args(["-c", "u", "ignoredWord"])
        .write_stdin("fooBar")
        .assert()
        .success()
        .stdout("FOO_BAR\n");
}

#[test]
fn test_json_format() {
    let dir = TempDir::new().unwrap();
    chc(&dir)
        .args(["-c", "c", "-o", "json"])
        .write_stdin("foo_bar BAZ_QUX")
        .assert()
        .success()
        .stdout(concat!(
            "{\"input\":\"foo_bar\",\"output\":\"fooBar\"}\n",
            "{\"input\":\"BAZ_QUX\",\"output\":\"bazQux\"}\n",
        ));
}

#[test]
fn test_invalid_utf8_input_keeps_converting() {
    let dir = TempDir::new().unwrap();
    chc(&dir)
        .write_stdin(&b"fooBar caf\xe9Name bazQux"[..])
        .assert()
        .success()
        .stdout("foo_bar\ncaf\u{fffd}_name\nbaz_qux\n");
}

#[test]
fn test_detect_mode() {
    let dir = TempDir::new().unwrap();
    chc(&dir)
        .arg("--detect")
        .write_stdin("foo FOO fooBar FooBar foo-bar")
        .assert()
        .success()
        .stdout("foo\tsnake\nFOO\tupper\nfooBar\tcamel\nFooBar\tpascal\nfoo-bar\tlisp\n");
}

#[test]
fn test_local_config_sets_default_case() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".chc.toml"), "case = \"pascal\"\n").unwrap();

    chc(&dir)
        .write_stdin("foo_bar")
        .assert()
        .success()
        .stdout("FooBar\n");

    chc(&dir)
        .args(["-c", "lisp"])
        .write_stdin("foo_bar")
        .assert()
        .success()
        .stdout("foo-bar\n");
}

#[test]
fn test_broken_config_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".chc.toml"), "case = \n").unwrap();

    chc(&dir)
        .write_stdin("foo_bar")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_invalid_format_is_rejected() {
    let dir = TempDir::new().unwrap();
    chc(&dir)
        .args(["-o", "yaml"])
        .write_stdin("foo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}

#[test]
fn test_help_lists_case_aliases() {
    let dir = TempDir::new().unwrap();
    chc(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("s[nake]").and(predicate::str::contains("l[isp]")));
}

#[test]
fn test_completion_script() {
    let dir = TempDir::new().unwrap();
    chc(&dir)
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chc"));
}
