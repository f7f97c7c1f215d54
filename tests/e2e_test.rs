/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/snapcraft.yaml")
}

/// Copies the fixture manifest into `dir` so config discovery can be exercised
fn copy_fixture(dir: &Path) -> PathBuf {
    let manifest = dir.join("snapcraft.yaml");
    fs::copy(fixture_path(), &manifest).unwrap();
    manifest
}

fn run_to_json(args: &[&str]) -> serde_json::Value {
    let output = cargo_bin_cmd!("snapcraft-sbom")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

fn component_names(bom: &serde_json::Value) -> Vec<String> {
    bom["components"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("snapcraft-sbom")
            .arg(fixture_path())
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("snapcraft-sbom")
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(
                "Convert a Snapcraft YAML file to SBOM format (JSON).",
            ));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("snapcraft-sbom")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("snapcraft-sbom")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 1: Application error - manifest does not exist
    #[test]
    fn test_exit_code_application_error_missing_manifest() {
        cargo_bin_cmd!("snapcraft-sbom")
            .arg("/nonexistent/path/snapcraft.yaml")
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("snapcraft manifest not found"));
    }

    /// Exit code 1: Application error - manifest is not valid YAML
    #[test]
    fn test_exit_code_application_error_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("snapcraft.yaml");
        fs::write(&manifest, "parts: [[[broken").unwrap();

        cargo_bin_cmd!("snapcraft-sbom")
            .arg(&manifest)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to parse snapcraft manifest"));
    }

    /// Exit code 1: Application error - invalid exclusion pattern
    #[test]
    fn test_exit_code_application_error_invalid_pattern() {
        cargo_bin_cmd!("snapcraft-sbom")
            .arg(fixture_path())
            .args(["-e", "*"])
            .assert()
            .code(1);
    }
}

#[test]
fn test_e2e_stdout_cyclonedx() {
    let bom = run_to_json(&[fixture_path().to_str().unwrap()]);

    assert_eq!(bom["bomFormat"], "CycloneDX");
    assert_eq!(bom["specVersion"], "1.6");
    assert_eq!(bom["version"], 1);
    assert!(bom["serialNumber"]
        .as_str()
        .unwrap()
        .starts_with("urn:uuid:"));
    assert_eq!(bom["metadata"]["tools"][0]["name"], "snapcraft-sbom");
    assert_eq!(
        bom["metadata"]["tools"][0]["version"],
        env!("CARGO_PKG_VERSION")
    );
    assert_eq!(bom["metadata"]["component"]["name"], "example-app");
}

#[test]
fn test_e2e_components() {
    let bom = run_to_json(&[fixture_path().to_str().unwrap()]);

    assert_eq!(
        component_names(&bom),
        vec![
            "lib-alpha",
            "lib-beta",
            "lib-gamma",
            "lib-delta",
            "lib-epsilon",
            "tool-zeta"
        ]
    );

    let alpha = &bom["components"][0];
    assert_eq!(alpha["type"], "library");
    assert_eq!(alpha["bom-ref"], "part:lib-alpha");
    assert_eq!(alpha["version"], "2.4.8");
    assert_eq!(alpha["externalReferences"][0]["type"], "vcs");
    assert_eq!(
        alpha["externalReferences"][0]["url"],
        "https://github.com/example/lib-alpha.git"
    );
    assert_eq!(bom["components"][4]["version"], "5.6.7");
}

#[test]
fn test_e2e_stdout_contains_only_json() {
    cargo_bin_cmd!("snapcraft-sbom")
        .arg(fixture_path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::ends_with("}\n"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_e2e_output_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("sbom.json");

    cargo_bin_cmd!("snapcraft-sbom")
        .arg(fixture_path())
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let bom: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(bom["components"].as_array().unwrap().len(), 6);
}

#[test]
fn test_e2e_verbose_reports_to_stderr() {
    cargo_bin_cmd!("snapcraft-sbom")
        .arg(fixture_path())
        .arg("-v")
        .assert()
        .success()
        .stderr(predicate::str::contains("Processing:"))
        .stderr(predicate::str::contains("Output: stdout"))
        .stderr(predicate::str::contains("Snap name: example-app"))
        .stderr(predicate::str::contains("Found 6 parts with source:"))
        .stderr(predicate::str::contains("Part: lib-gamma"))
        .stderr(predicate::str::contains("  Version: n7.2.3 (source-branch)"))
        .stderr(predicate::str::contains("  Version: abc1234 (source-commit)"))
        .stderr(predicate::str::contains("Added 6 components to SBOM"))
        .stderr(predicate::str::contains("✓ SBOM generated successfully!"));
}

#[test]
fn test_e2e_exclude_flag() {
    let bom = run_to_json(&[fixture_path().to_str().unwrap(), "-e", "lib-*"]);
    assert_eq!(component_names(&bom), vec!["tool-zeta"]);
}

#[test]
fn test_e2e_exclude_unmatched_warns() {
    cargo_bin_cmd!("snapcraft-sbom")
        .arg(fixture_path())
        .args(["-e", "no-such-part"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Exclude pattern 'no-such-part' did not match any parts",
        ));
}

#[test]
fn test_e2e_config_discovered_next_to_manifest() {
    let dir = TempDir::new().unwrap();
    let manifest = copy_fixture(dir.path());
    fs::write(
        dir.path().join("snapcraft-sbom.config.yml"),
        "supplier: ACME Corp\nexclude_parts:\n  - tool-zeta\n",
    )
    .unwrap();

    let bom = run_to_json(&[manifest.to_str().unwrap()]);

    assert_eq!(bom["metadata"]["supplier"]["name"], "ACME Corp");
    assert_eq!(bom["metadata"]["tools"][0]["vendor"], "ACME Corp");
    assert!(!component_names(&bom).contains(&"tool-zeta".to_string()));
}

#[test]
fn test_e2e_config_merged_with_cli_exclusions() {
    let dir = TempDir::new().unwrap();
    let manifest = copy_fixture(dir.path());
    let config = dir.path().join("custom.yml");
    fs::write(&config, "exclude_parts:\n  - tool-zeta\n").unwrap();

    let bom = run_to_json(&[
        manifest.to_str().unwrap(),
        "-c",
        config.to_str().unwrap(),
        "-e",
        "lib-a*",
    ]);

    assert_eq!(
        component_names(&bom),
        vec!["lib-beta", "lib-gamma", "lib-delta", "lib-epsilon"]
    );
    assert_eq!(bom["metadata"]["supplier"]["name"], "Unknown");
}

#[test]
fn test_e2e_config_unknown_field_warns() {
    let dir = TempDir::new().unwrap();
    let manifest = copy_fixture(dir.path());
    fs::write(
        dir.path().join("snapcraft-sbom.config.yml"),
        "format: spdx\n",
    )
    .unwrap();

    cargo_bin_cmd!("snapcraft-sbom")
        .arg(&manifest)
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown config field 'format'"));
}

#[test]
fn test_e2e_explicit_config_missing() {
    cargo_bin_cmd!("snapcraft-sbom")
        .arg(fixture_path())
        .args(["-c", "/nonexistent/config.yml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read config file"));
}
