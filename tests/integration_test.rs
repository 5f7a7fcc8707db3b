use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const FRAMEWORK: &str = "Microsoft.VCLibs.140.00_14.0.33519.0_x64__8wekyb3d8bbwe";
const CALCULATOR: &str = "Microsoft.WindowsCalculator_11.2502.2.0_x64__8wekyb3d8bbwe";
const PHOTOS: &str = "Microsoft.Windows.Photos_2025.11010.5001.0_x64__8wekyb3d8bbwe";
const PINNED: &str = "Microsoft.WindowsStore_22504.1401.2.0_x64__8wekyb3d8bbwe";

/// A small but realistic inventory: a framework required by two apps,
/// one free-standing app, and one non-removable package.
fn dump_json(install_root: &str) -> String {
    format!(
        r#"[
  {{
    "PackageFullName": "{FRAMEWORK}",
    "Name": "Microsoft.VCLibs.140.00",
    "IsFramework": true,
    "NonRemovable": false,
    "InstallLocation": null,
    "Dependencies": null
  }},
  {{
    "PackageFullName": "{CALCULATOR}",
    "Name": "Microsoft.WindowsCalculator",
    "IsFramework": false,
    "NonRemovable": false,
    "InstallLocation": "{install_root}/calculator",
    "Dependencies": [{{"PackageFullName": "{FRAMEWORK}"}}]
  }},
  {{
    "PackageFullName": "{PHOTOS}",
    "Name": "Microsoft.Windows.Photos",
    "IsFramework": false,
    "NonRemovable": false,
    "InstallLocation": null,
    "Dependencies": [{{"PackageFullName": "{FRAMEWORK}"}}]
  }},
  {{
    "PackageFullName": "{PINNED}",
    "Name": "Microsoft.WindowsStore",
    "IsFramework": false,
    "NonRemovable": true,
    "InstallLocation": null,
    "Dependencies": null
  }}
]"#
    )
}

struct Fixture {
    #[allow(dead_code)]
    dir: TempDir,
    dump: PathBuf,
    overrides: PathBuf,
}

/// Write the dump (and a manifest for the calculator package) into a
/// tempdir. The overrides path points into the tempdir so the user's
/// real configuration never leaks into a test run.
fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let install_root = dir.path().join("apps");
    let calc_dir = install_root.join("calculator");
    std::fs::create_dir_all(&calc_dir).unwrap();
    std::fs::write(
        calc_dir.join("AppxManifest.xml"),
        "<Package><Properties><DisplayName>Windows Calculator</DisplayName></Properties></Package>",
    )
    .unwrap();

    let dump = dir.path().join("packages.json");
    std::fs::write(&dump, dump_json(install_root.to_str().unwrap())).unwrap();

    let overrides = dir.path().join("overrides.json");
    Fixture {
        dir,
        dump,
        overrides,
    }
}

fn appxsweep(fixture: &Fixture) -> Command {
    let mut cmd = Command::cargo_bin("appxsweep").unwrap();
    cmd.arg("--input")
        .arg(&fixture.dump)
        .arg("--overrides")
        .arg(&fixture.overrides);
    cmd
}

#[test]
fn test_list_reports_verdicts() {
    let fixture = fixture();

    appxsweep(&fixture)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::is_match(format!("{FRAMEWORK}\\s+required\\b")).unwrap())
        .stdout(predicate::str::contains("(required by 2)"))
        .stdout(predicate::str::contains("removable"))
        .stdout(predicate::str::contains("4 package(s), 3 removable"));
}

#[test]
fn test_list_resolves_manifest_display_name() {
    let fixture = fixture();

    appxsweep(&fixture)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Windows Calculator"));
}

#[test]
fn test_list_hide_frameworks() {
    let fixture = fixture();

    appxsweep(&fixture)
        .args(["list", "--hide-frameworks"])
        .assert()
        .success()
        .stdout(predicate::str::contains(FRAMEWORK).not())
        .stdout(predicate::str::contains("3 package(s)"));
}

#[test]
fn test_list_name_filter_is_case_insensitive() {
    let fixture = fixture();

    appxsweep(&fixture)
        .args(["list", "--filter", "CALCULATOR"])
        .assert()
        .success()
        .stdout(predicate::str::contains(CALCULATOR))
        .stdout(predicate::str::contains(PHOTOS).not());
}

#[test]
fn test_list_no_matches() {
    let fixture = fixture();

    appxsweep(&fixture)
        .args(["list", "--filter", "no-such-package"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No packages to show."));
}

#[test]
fn test_show_required_package() {
    let fixture = fixture();

    appxsweep(&fixture)
        .args(["show", FRAMEWORK])
        .assert()
        .success()
        .stdout(predicate::str::contains("Framework: yes"))
        .stdout(predicate::str::contains("Removable: no"))
        .stdout(predicate::str::contains("Required for:"))
        .stdout(predicate::str::contains(CALCULATOR))
        .stdout(predicate::str::contains(PHOTOS));
}

#[test]
fn test_show_unknown_package_fails() {
    let fixture = fixture();

    appxsweep(&fixture)
        .args(["show", "No.Such.Package_1.0_x64__abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not installed"));
}

#[test]
fn test_remove_dry_run_prints_plan() {
    let fixture = fixture();

    appxsweep(&fixture)
        .args(["remove", "--dry-run", CALCULATOR])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Removal Plan ==="))
        .stdout(predicate::str::contains(CALCULATOR))
        .stdout(predicate::str::contains("Dry run, nothing removed."));
}

#[test]
fn test_remove_required_package_is_refused() {
    let fixture = fixture();

    appxsweep(&fixture)
        .args(["remove", "--dry-run", FRAMEWORK])
        .assert()
        .failure()
        .stderr(predicate::str::contains("still required by"))
        .stderr(predicate::str::contains(CALCULATOR));
}

#[test]
fn test_remove_non_removable_package_is_refused() {
    let fixture = fixture();

    appxsweep(&fixture)
        .args(["remove", "--dry-run", PINNED])
        .assert()
        .failure()
        .stderr(predicate::str::contains("marked non-removable"));
}

#[test]
fn test_remove_all_dry_run_honors_hide_filters() {
    let fixture = fixture();

    appxsweep(&fixture)
        .args([
            "remove",
            "--all",
            "--dry-run",
            "--hide-frameworks",
            "--hide-non-removable",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(CALCULATOR))
        .stdout(predicate::str::contains(PHOTOS))
        .stdout(predicate::str::contains(PINNED).not())
        .stdout(predicate::str::contains(FRAMEWORK).not());
}

#[test]
fn test_override_pins_otherwise_removable_package() {
    let fixture = fixture();
    std::fs::write(
        &fixture.overrides,
        format!(r#"{{"{CALCULATOR}": ["{PHOTOS}"]}}"#),
    )
    .unwrap();

    appxsweep(&fixture)
        .args(["show", CALCULATOR])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removable: no"))
        .stdout(predicate::str::contains(PHOTOS));

    appxsweep(&fixture)
        .args(["remove", "--dry-run", CALCULATOR])
        .assert()
        .failure()
        .stderr(predicate::str::contains("still required by"));
}

#[test]
fn test_override_naming_missing_package_is_ignored() {
    let fixture = fixture();
    std::fs::write(
        &fixture.overrides,
        format!(r#"{{"{CALCULATOR}": ["Not.Installed_1.0_x64__abc"]}}"#),
    )
    .unwrap();

    appxsweep(&fixture)
        .args(["show", CALCULATOR])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removable: yes"));
}

#[test]
fn test_malformed_overrides_file_fails() {
    let fixture = fixture();
    std::fs::write(&fixture.overrides, "{broken").unwrap();

    appxsweep(&fixture)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed overrides file"));
}

#[test]
fn test_malformed_dump_fails() {
    let fixture = fixture();
    std::fs::write(&fixture.dump, "not json at all").unwrap();

    appxsweep(&fixture)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed package enumeration JSON"));
}

#[test]
fn test_input_via_environment() {
    let fixture = fixture();

    Command::cargo_bin("appxsweep")
        .unwrap()
        .env("APPXSWEEP_INPUT", &fixture.dump)
        .arg("--overrides")
        .arg(&fixture.overrides)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(CALCULATOR));
}

#[test]
fn test_dependency_known_only_by_reference() {
    let fixture = fixture();
    std::fs::write(
        &fixture.dump,
        r#"[{"PackageFullName": "App_1.0_x64__abc", "Name": "App",
             "Dependencies": [{"PackageFullName": "Ghost_1.0_x64__abc"}]}]"#,
    )
    .unwrap();

    appxsweep(&fixture)
        .args(["show", "Ghost_1.0_x64__abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: (unknown)"))
        .stdout(predicate::str::contains("Removable: no"))
        .stdout(predicate::str::contains("App_1.0_x64__abc"));
}
