use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::error::Error;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary, isolated from the
// caller's SCR_* settings.
fn scr_cmd() -> Command {
    let mut cmd = Command::cargo_bin("scr").expect("Failed to find scr binary");
    cmd.env_remove("SCR_LOG_LEVEL")
        .env_remove("SCR_LOG_DIR")
        .env_remove("SCR_PATH");
    cmd
}

#[test]
fn test_version_normalizes_segments() {
    scr_cmd()
        .args(["version", "1.02.x.3", "4..5"])
        .assert()
        .success()
        .stdout("1.2.3\n4.5\n");
}

#[test]
fn test_version_parts_as_json() {
    scr_cmd()
        .args(["version", "--parts", "10.0.7"])
        .assert()
        .success()
        .stdout("[10,0,7]\n");
}

#[test]
fn test_names_list_splits_on_commas_and_whitespace() {
    scr_cmd()
        .args(["names", "alpha, beta  gamma,,"])
        .assert()
        .success()
        .stdout("alpha\nbeta\ngamma\n");
}

#[test]
fn test_names_from_file() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let list = dir.path().join("names.txt");
    fs::write(&list, "one\ntwo, three\n")?;

    scr_cmd()
        .arg("names")
        .arg(format!("@{}", list.display()))
        .assert()
        .success()
        .stdout("one\ntwo\nthree\n");
    Ok(())
}

#[test]
fn test_names_from_missing_file_is_param_error() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let missing = dir.path().join("nope.txt");

    scr_cmd()
        .arg("names")
        .arg(format!("@{}", missing.display()))
        .assert()
        .code(2)
        .stderr(contains("scr: NamesListOrFile: not a readable file:"));
    Ok(())
}

#[test]
fn test_check_readable_abs_dir_echoes_input() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let path = dir.path().to_str().ok_or("non-utf8 temp path")?;

    scr_cmd()
        .args(["check", "readable-abs-dir", path])
        .assert()
        .success()
        .stdout(format!("{path}\n"));
    Ok(())
}

#[test]
fn test_check_possible_file_on_directory_fails_with_status_2() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    scr_cmd()
        .args(["check", "possible-file"])
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(contains("scr: PossibleFile: exists but not a file:"));
    Ok(())
}

#[test]
fn test_check_possible_file_with_missing_parent() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let target = dir.path().join("absent").join("out.txt");

    scr_cmd()
        .args(["--debug", "check", "possible-file"])
        .arg(&target)
        .assert()
        .code(2)
        .stderr(contains("not a directory:"));
    Ok(())
}

#[test]
fn test_resolve_unknown_placeholder_fails() {
    scr_cmd()
        .args(["resolve", "{{bogus}}/x"])
        .assert()
        .code(2)
        .stderr(contains("unknown placeholder: 'bogus'"));
}

#[cfg(unix)]
#[test]
fn test_resolve_home_prefix() -> Result<(), Box<dyn Error>> {
    let home = tempdir()?;

    scr_cmd()
        .env("HOME", home.path())
        .args(["resolve", "~/notes.txt"])
        .assert()
        .success()
        .stdout(format!("{}\n", home.path().join("notes.txt").display()));
    Ok(())
}

#[test]
fn test_resolve_log_placeholder_uses_release_root() {
    scr_cmd()
        .args(["resolve", "{{log}}/sub/file.log"])
        .assert()
        .success()
        .stdout(contains("log").and(predicate::str::ends_with("sub/file.log\n")));
}

#[test]
fn test_dirs_json_names_the_program() {
    scr_cmd()
        .args(["dirs", "--json"])
        .assert()
        .success()
        .stdout(contains("\"prog_name\": \"scr\""));
}

#[test]
fn test_log_dir_is_created_and_written() -> Result<(), Box<dyn Error>> {
    let root = tempdir()?;
    let log_dir = root.path().join("logs");

    scr_cmd()
        .args(["--log-level", "info", "--log-name", "run", "--log-dir"])
        .arg(&log_dir)
        .args(["version", "2.0"])
        .assert()
        .success();

    let contents = fs::read_to_string(log_dir.join("run.log"))?;
    assert!(contents.contains(" INFO    scr "), "unexpected log contents: {contents}");
    Ok(())
}

#[test]
fn test_log_dir_from_environment() -> Result<(), Box<dyn Error>> {
    let root = tempdir()?;
    let log_dir = root.path().join("env-logs");

    scr_cmd()
        .env("SCR_LOG_LEVEL", "DEBUG")
        .env("SCR_LOG_DIR", &log_dir)
        .args(["names", "a"])
        .assert()
        .success();

    assert!(log_dir.join("scr.log").is_file());
    Ok(())
}

#[test]
fn test_unknown_log_level_is_param_error() {
    scr_cmd()
        .args(["--log-level", "verbose", "version", "1"])
        .assert()
        .code(2)
        .stderr(contains("unknown log level: 'VERBOSE'"));
}

#[test]
fn test_missing_subcommand_fails() {
    scr_cmd().assert().failure();
}

// A binary started through a PATH lookup sees a bare argv[0]; the release
// root must still come from where the binary actually lives.
#[cfg(unix)]
#[test]
fn test_path_lookup_bootstraps_from_binary_location() -> Result<(), Box<dyn Error>> {
    let release = tempdir()?;
    let root = release.path().canonicalize()?;
    let bin = root.join("bin");
    fs::create_dir(&bin)?;
    fs::create_dir(root.join("lib"))?;
    fs::copy(assert_cmd::cargo::cargo_bin("scr"), bin.join("scr"))?;

    let elsewhere = tempdir()?;
    let path = std::env::join_paths([bin.as_path(), Path::new("/usr/bin"), Path::new("/bin")])?;

    let output = Command::new("scr")
        .env("PATH", path)
        .env_remove("SCR_LOG_LEVEL")
        .env_remove("SCR_LOG_DIR")
        .env_remove("SCR_PATH")
        .current_dir(elsewhere.path())
        .arg("dirs")
        .output()?;
    assert!(output.status.success(), "scr dirs failed: {output:?}");

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains(&format!("bin: {}\n", bin.display())), "{stdout}");
    assert!(stdout.contains(&format!("rel: {}\n", root.display())), "{stdout}");
    assert!(stdout.contains(&format!("path: {}\n", root.join("lib").display())), "{stdout}");
    Ok(())
}
