/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI
/// invocation to output, using `assert_cmd` and `tempfile` for isolated test
/// environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Write a config file at the specified path.
fn write_config(path: &std::path::Path, content: &str) {
    fs::write(path, content).unwrap();
}

/// Runs the binary and extracts `m` from "Compressed n bytes to m bytes"
fn compressed_len(dir: &TempDir, args: &[&str]) -> usize {
    let output = cargo_bin_cmd!("sbom-test-app")
        .current_dir(dir.path())
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let line = stdout
        .lines()
        .find(|line| line.starts_with("Compressed "))
        .unwrap();
    line.trim_end_matches(" bytes")
        .rsplit(' ')
        .next()
        .unwrap()
        .parse()
        .unwrap()
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_input() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("sbom-test-app.config.yml"),
            "input: \"from discovered config\"\n",
        );

        cargo_bin_cmd!("sbom-test-app")
            .current_dir(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Processing data: from discovered config",
            ));
    }

    #[test]
    fn test_auto_discovery_applies_compression_level() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("sbom-test-app.config.yml"),
            &format!("compression_level: 0\ninput: \"{}\"\n", "a".repeat(64)),
        );

        // Stored blocks keep every input byte
        assert!(compressed_len(&dir, &[]) > 64);
    }

    #[test]
    fn test_invalid_discovered_config_is_application_error() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("sbom-test-app.config.yml"),
            "compression_level: 42\n",
        );

        cargo_bin_cmd!("sbom-test-app")
            .current_dir(dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains(
                "compression_level must be between 0 and 9",
            ));
    }
}

// ============================================================================
// Explicit --config Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, "input: \"explicit\"\n");

        cargo_bin_cmd!("sbom-test-app")
            .current_dir(dir.path())
            .args(["--config", config_path.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Processing data: explicit"));
    }

    #[test]
    fn test_explicit_config_wins_over_discovery() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("sbom-test-app.config.yml"),
            "input: \"discovered\"\n",
        );
        let config_path = dir.path().join("other.yml");
        write_config(&config_path, "input: \"explicit\"\n");

        cargo_bin_cmd!("sbom-test-app")
            .current_dir(dir.path())
            .args(["-c", config_path.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Processing data: explicit"))
            .stdout(predicate::str::contains("discovered").not());
    }

    #[test]
    fn test_malformed_config_is_application_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        write_config(&config_path, "invalid: yaml: [[[broken");

        cargo_bin_cmd!("sbom-test-app")
            .current_dir(dir.path())
            .args(["-c", config_path.to_str().unwrap()])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_fields_do_not_fail_the_run() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("extra.yml");
        write_config(&config_path, "input: \"ok\"\nretries: 3\n");

        cargo_bin_cmd!("sbom-test-app")
            .current_dir(dir.path())
            .args(["-c", config_path.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Processing data: ok"));
    }
}

// ============================================================================
// CLI Override Tests
// ============================================================================

mod cli_override_tests {
    use super::*;

    #[test]
    fn test_cli_input_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("sbom-test-app.config.yml"),
            "input: \"from config\"\n",
        );

        cargo_bin_cmd!("sbom-test-app")
            .current_dir(dir.path())
            .args(["-i", "from cli"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Processing data: from cli"));
    }

    #[test]
    fn test_cli_level_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("sbom-test-app.config.yml"),
            &format!("compression_level: 9\ninput: \"{}\"\n", "a".repeat(64)),
        );

        assert!(compressed_len(&dir, &[]) < 64);
        assert!(compressed_len(&dir, &["-l", "0"]) > 64);
    }
}
