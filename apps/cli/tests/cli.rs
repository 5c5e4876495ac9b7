use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn tkit() -> Command {
    let mut cmd = Command::cargo_bin("tkit").expect("tkit binary is built");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn slug_prints_to_stdout() {
    tkit()
        .args(["slug", "Über die Brücke!"])
        .assert()
        .success()
        .stdout("ueber-die-bruecke\n");
}

#[test]
fn slug_with_custom_separator() {
    tkit().args(["slug", "Hello World", "-s", "_"]).assert().success().stdout("hello_world\n");
}

#[test]
fn words_and_limit_use_default_suffix() {
    tkit().args(["words", "one two three", "-w", "2"]).assert().success().stdout("one two...\n");
    tkit().args(["limit", "Taylor Otwell", "-l", "6"]).assert().success().stdout("Taylor...\n");
    tkit()
        .args(["limit-exact", "Taylor Otwell", "-l", "6", "--end", "…"])
        .assert()
        .success()
        .stdout("Taylo…\n");
}

#[test]
fn segments_one_per_line() {
    tkit().args(["segments", "/admin/users/42/"]).assert().success().stdout("admin\nusers\n42\n");
}

#[test]
fn segments_accept_leading_hyphen() {
    tkit().args(["segments", "-a/b"]).assert().success().stdout("-a\nb\n");
}

#[test]
fn slug_separator_survives_second_pass() {
    tkit().args(["slug", "hello–world", "-s", "–"]).assert().success().stdout("hello–world\n");
}

#[test]
fn wildcard_sets_exit_code() {
    tkit().args(["is", "admin/*", "admin/users"]).assert().success().stdout("true\n");
    tkit().args(["is", "admin/*", "blog/users"]).assert().code(1).stdout("false\n");
}

#[test]
fn random_respects_length_and_pool() {
    tkit()
        .args(["random", "24", "--type", "alpha"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[A-Za-z]{24}\n$").expect("valid regex"));
}

#[test]
fn random_rejects_unknown_type() {
    tkit()
        .args(["random", "8", "--type", "hex"])
        .assert()
        .failure()
        .stdout("")
        .stderr(
            predicate::str::contains("Invalid random string type")
                .and(predicate::str::contains("hex")),
        );
}

#[test]
fn encoding_flag_switches_to_bytes() {
    tkit().args(["length", "Ñandú"]).assert().success().stdout("5\n");
    tkit().args(["--encoding", "ascii", "length", "Ñandú"]).assert().success().stdout("7\n");
}

#[test]
fn encoding_from_environment() {
    tkit()
        .env("TKIT__TEXT__ENCODING", "latin1")
        .args(["upper", "straße"])
        .assert()
        .success()
        .stdout("STRAßE\n");
}

#[test]
fn config_file_replaces_transliteration() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("tkit.toml");
    fs::write(
        &path,
        r#"
[text]
encoding = "utf-8"

[[text.transliteration]]
pattern = "ß"
replacement = "ss"

[log]
level = "warn"
"#,
    )?;

    // Only the configured rule applies; "ü" is dropped instead of becoming "ue".
    tkit()
        .arg("--config")
        .arg(&path)
        .args(["ascii", "Grüße"])
        .assert()
        .success()
        .stdout("Grsse\n");
    Ok(())
}

#[test]
fn missing_config_file_fails() {
    tkit()
        .args(["--config", "/definitely/not/here/tkit.toml", "length", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}

#[test]
fn invalid_encoding_in_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("tkit.toml");
    fs::write(&path, "[text]\nencoding = \"ebcdic\"\n")?;

    tkit()
        .arg("--config")
        .arg(&path)
        .args(["length", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
    Ok(())
}
