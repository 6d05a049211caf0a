//! End-to-end tests of the `slicer` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MANIFEST: &str = r#"
[[projects]]
root = "ExpenseTracker.ClientShared"
kind = "ClientShared"
namespace = "ExpenseTracker.ClientShared"

[[projects]]
root = "ExpenseTracker.Server.DataServices"
kind = "ServerSideServices"
namespace = "ExpenseTracker.Server.DataServices"

[[projects]]
root = "ExpenseTracker.Server.Controllers"
kind = "Controllers"
namespace = "ExpenseTracker.Server.Controllers"
"#;

/// A solution directory with a manifest, isolated from the user's config.
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("slicer.toml"), MANIFEST).unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn manifest(&self) -> PathBuf {
        self.path().join("slicer.toml")
    }

    fn slicer(&self) -> Command {
        let mut cmd = Command::cargo_bin("slicer").unwrap();
        cmd.current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env("HOME", self.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    fn generate_invoice(&self, extra: &[&str]) -> assert_cmd::assert::Assert {
        self.slicer()
            .args([
                "generate", "-p", "Invoice", "-m", "Invoices", "-k", "guid", "--listing", "--form",
                "--output-format", "plain",
            ])
            .args(extra)
            .assert()
    }

    fn expected_files(&self) -> Vec<PathBuf> {
        [
            "ExpenseTracker.ClientShared/Features/Invoices/InvoiceListingClientDataService.cs",
            "ExpenseTracker.ClientShared/Features/Invoices/InvoiceFormClientDataService.cs",
            "ExpenseTracker.Server.DataServices/Features/Invoices/InvoiceListingServerDataService.cs",
            "ExpenseTracker.Server.DataServices/Features/Invoices/InvoiceFormServerDataService.cs",
            "ExpenseTracker.Server.Controllers/Controllers/Invoices/InvoiceListingController.cs",
            "ExpenseTracker.Server.Controllers/Controllers/Invoices/InvoiceFormController.cs",
        ]
        .iter()
        .map(|rel| self.path().join(rel))
        .collect()
    }
}

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("slicer")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("remove"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    Command::cargo_bin("slicer")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn generate_writes_the_invoice_slice() {
    let ws = Workspace::new();

    ws.generate_invoice(&[])
        .success()
        .stdout(predicate::str::contains("InvoiceListingController.cs"))
        .stdout(predicate::str::contains("6 file(s) written, 0 skipped"))
        .stdout(predicate::str::contains("Route=\"invoices\""));

    for path in ws.expected_files() {
        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("__"), "token left in {}", path.display());
    }
    let controller = fs::read_to_string(&ws.expected_files()[4]).unwrap();
    assert!(controller.contains("InvoiceListingController"));
}

#[test]
fn dry_run_writes_nothing() {
    let ws = Workspace::new();

    ws.generate_invoice(&["--dry-run"])
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("6 file(s) planned"));

    assert!(ws.expected_files().iter().all(|p| !p.exists()));
}

#[test]
fn existing_files_are_skipped_by_default() {
    let ws = Workspace::new();
    let existing = &ws.expected_files()[1];
    fs::create_dir_all(existing.parent().unwrap()).unwrap();
    fs::write(existing, "// mine").unwrap();

    ws.generate_invoice(&[])
        .success()
        .stdout(predicate::str::contains("5 file(s) written, 1 skipped"));

    assert_eq!(fs::read_to_string(existing).unwrap(), "// mine");
}

#[test]
fn overwrite_replaces_existing_files() {
    let ws = Workspace::new();
    let existing = &ws.expected_files()[1];
    fs::create_dir_all(existing.parent().unwrap()).unwrap();
    fs::write(existing, "// mine").unwrap();

    ws.generate_invoice(&["--overwrite", "--yes"])
        .success()
        .stdout(predicate::str::contains("6 file(s) written, 0 skipped"));

    assert!(fs::read_to_string(existing).unwrap().contains("InvoiceFormClientDataService"));
}

#[test]
fn json_report_is_parseable() {
    let ws = Workspace::new();

    let out = ws
        .slicer()
        .args([
            "generate", "-p", "Invoice", "-k", "guid", "--output-format", "json",
        ])
        .output()
        .unwrap();
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["applied"], true);
    assert_eq!(report["written"].as_array().unwrap().len(), 6);
    assert_eq!(report["feature"]["module_namespace"], "Invoices");
    assert_eq!(report["navigation"]["status"], "manual_action_required");
    assert_eq!(report["navigation"]["route"], "invoices");
    assert!(report["run_id"].is_string());
}

#[test]
fn unsupported_key_type_is_a_user_error() {
    let ws = Workspace::new();

    ws.slicer()
        .args(["generate", "-p", "Invoice", "-k", "decimal", "--listing"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("decimal"));

    assert!(ws.expected_files().iter().all(|p| !p.exists()));
}

#[test]
fn invalid_prefix_is_a_user_error() {
    let ws = Workspace::new();

    ws.slicer()
        .args(["generate", "-p", "class", "--listing"])
        .assert()
        .code(2);
}

#[test]
fn missing_manifest_is_not_found() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("slicer")
        .unwrap()
        .current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env("HOME", dir.path())
        .args(["generate", "-p", "Invoice", "--listing"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("--manifest"));
}

#[test]
fn remove_deletes_the_slice() {
    let ws = Workspace::new();
    ws.generate_invoice(&[]).success();

    ws.slicer()
        .args([
            "remove", "-p", "Invoice", "-m", "Invoices", "-k", "guid", "--listing", "--form",
            "--yes", "--output-format", "plain",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("6 file(s) removed"))
        .stdout(predicate::str::contains("Remove route 'invoices'"));

    assert!(ws.expected_files().iter().all(|p| !p.exists()));
}

#[test]
fn feature_can_come_from_the_manifest() {
    let ws = Workspace::new();
    let manifest = format!(
        "[feature]\ncomponent_prefix = \"Category\"\nprimary_key_type = \"int\"\nlisting = true\n{MANIFEST}"
    );
    fs::write(ws.manifest(), manifest).unwrap();

    ws.slicer()
        .args(["generate", "--output-format", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 file(s) written"));

    assert!(
        ws.path()
            .join("ExpenseTracker.Server.Controllers/Controllers/Categories/CategoryListingController.cs")
            .is_file()
    );
}

#[test]
fn custom_template_directory() {
    let ws = Workspace::new();
    let template = ws
        .path()
        .join("tpl/ClientShared/Listing/Features/__moduleNamespace__/__ComponentPrefix__Grid.cs");
    fs::create_dir_all(template.parent().unwrap()).unwrap();
    fs::write(&template, "namespace __projectNamespace__;\nclass __ComponentPrefix__Grid {}\n").unwrap();

    ws.generate_invoice(&["--templates", "tpl"])
        .success()
        .stdout(predicate::str::contains("1 file(s) written"));

    let generated = ws
        .path()
        .join("ExpenseTracker.ClientShared/Features/Invoices/InvoiceGrid.cs");
    assert_eq!(
        fs::read_to_string(generated).unwrap(),
        "namespace ExpenseTracker.ClientShared;\nclass InvoiceGrid {}\n"
    );
}

#[test]
fn list_formats() {
    let ws = Workspace::new();

    ws.slicer()
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("store_path,kind,category,destination"));

    let out = ws
        .slicer()
        .args(["list", "--kind", "controllers", "--format", "list"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.lines().all(|l| l.starts_with("Controllers/")));
}

#[test]
fn init_then_config_roundtrip() {
    let ws = Workspace::new();
    let config = ws.path().join("conf/slicer.toml");
    let config_arg = config.to_str().unwrap();

    ws.slicer()
        .args(["-c", config_arg, "init"])
        .assert()
        .success();
    assert!(config.is_file());

    ws.slicer()
        .args(["-c", config_arg, "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    ws.slicer()
        .args(["-c", config_arg, "config", "set", "generation.primary_key_type", "int"])
        .assert()
        .success();

    ws.slicer()
        .args(["-c", config_arg, "config", "get", "generation.primary_key_type"])
        .assert()
        .success()
        .stdout(predicate::str::contains("generation.primary_key_type = int"));

    ws.slicer()
        .args(["-c", config_arg, "config", "set", "generation.collision", "sometimes"])
        .assert()
        .code(2);
}

#[test]
fn environment_overrides_config() {
    let ws = Workspace::new();

    ws.slicer()
        .env("SLICER_GENERATION__PRIMARY_KEY_TYPE", "long")
        .args(["config", "get", "generation.primary_key_type"])
        .assert()
        .success()
        .stdout(predicate::str::contains("= long"));
}

#[test]
fn explicit_missing_config_is_a_configuration_error() {
    let ws = Workspace::new();

    ws.slicer()
        .args(["-c", "nope.toml", "list"])
        .assert()
        .code(4);
}

#[test]
fn completions_for_bash() {
    Command::cargo_bin("slicer")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("slicer"));
}

#[test]
fn log_file_receives_events() {
    let ws = Workspace::new();
    let log = ws.path().join("logs/slicer.log");

    ws.generate_invoice(&["-v", "--log-file", log.to_str().unwrap()])
        .success();

    let text = fs::read_to_string(&log).unwrap();
    assert!(text.contains("Manual navigation update required"));
}

#[test]
fn dry_run_does_not_log_navigation_as_done() {
    let ws = Workspace::new();
    let log = ws.path().join("logs/dry.log");

    ws.generate_invoice(&["--dry-run", "-v", "--log-file", log.to_str().unwrap()])
        .success()
        .stdout(predicate::str::contains("Route=\"invoices\""));

    let text = fs::read_to_string(&log).unwrap();
    assert!(text.contains("Dry run, nothing written"));
    assert!(!text.contains("Manual navigation update required"));
}
