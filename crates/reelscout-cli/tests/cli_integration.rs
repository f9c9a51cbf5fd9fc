use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture that sets up a temporary reelscout data directory
struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl TestFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".reelscout");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    /// Run reelscout with this fixture's data directory
    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("reelscout").expect("Failed to find reelscout binary");
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    fn write_favorites(&self, content: &str) {
        std::fs::write(self.data_dir.join("favorites.json"), content)
            .expect("Failed to seed favorites");
    }
}

#[test]
fn help_lists_subcommands() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("favorites"));
}

#[test]
fn favorites_with_empty_store_prints_hint() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorites yet."));
}

#[test]
fn favorites_lists_seeded_identifiers_in_order() {
    let fixture = TestFixture::new();
    fixture.write_favorites(r#"["tt0096895","tt0103776"]"#);

    let output = fixture.command().arg("favorites").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let ids: Vec<&str> = stdout.lines().collect();
    assert_eq!(ids, vec!["tt0096895", "tt0103776"]);
}

#[test]
fn favorites_json_format_round_trips() {
    let fixture = TestFixture::new();
    fixture.write_favorites(r#"["tt0096895","tt0103776"]"#);

    let output = fixture
        .command()
        .arg("--format")
        .arg("json")
        .arg("favorites")
        .output()
        .unwrap();
    assert!(output.status.success());

    let ids: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(ids, vec!["tt0096895".to_string(), "tt0103776".to_string()]);
}

#[test]
fn malformed_favorites_entry_reads_as_empty() {
    let fixture = TestFixture::new();
    fixture.write_favorites("{definitely not json");

    fixture
        .command()
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorites yet."));
}

#[test]
fn search_rejects_unknown_flags() {
    let fixture = TestFixture::new();
    fixture
        .command()
        .arg("search")
        .arg("--no-such-flag")
        .assert()
        .failure();
}
