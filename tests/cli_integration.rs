//! CLI integration tests for vercat.
//!
//! Each test writes a catalog into a temporary project and runs the binary
//! from inside it.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

const LIBS: &str = r#"
[versions]
kotlin = "1.9.21"
spring-boot = "3.2.0"
test-containers = "1.19.3"
mysql = { strictly = "[8.0, 9.0[", prefer = "8.2.0" }

[libraries]
h2 = "com.h2database:h2:2.2.224"
jackson-kotlin = { module = "com.fasterxml.jackson.module:jackson-module-kotlin" }
mysql-connector = { module = "com.mysql:mysql-connector-j", version.ref = "mysql" }
spring-boot-starter-web = { module = "org.springframework.boot:spring-boot-starter-web", version.ref = "spring-boot" }
spring-boot-starter-data-jpa = { module = "org.springframework.boot:spring-boot-starter-data-jpa" }
test-containers-mysql = { module = "org.testcontainers:mysql", version.ref = "test-containers" }
test-containers-junit-jupiter = { module = "org.testcontainers:junit-jupiter", version.ref = "test-containers" }

[bundles]
testcontainers-mysql = ["test-containers-junit-jupiter", "test-containers-mysql"]

[plugins]
kotlin-jvm = { id = "org.jetbrains.kotlin.jvm", version.ref = "kotlin" }
spring-boot = { id = "org.springframework.boot", version.ref = "spring-boot" }
"#;

/// Get the vercat binary command, isolated from the user's environment.
fn vercat(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("vercat").unwrap();
    cmd.current_dir(dir)
        .env_remove("VERCAT_CATALOG")
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .arg("--no-color");
    cmd
}

/// Create a project with `gradle/libs.versions.toml`.
fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("gradle")).unwrap();
    fs::write(tmp.path().join("gradle/libs.versions.toml"), LIBS).unwrap();
    tmp
}

// ============================================================================
// vercat get
// ============================================================================

#[test]
fn test_get_library_with_version_ref() {
    let tmp = project();

    vercat(tmp.path())
        .args(["get", "library", "spring.boot.starter.web"])
        .assert()
        .success()
        .stdout("org.springframework.boot:spring-boot-starter-web:3.2.0\n");
}

#[test]
fn test_get_accepts_raw_alias_spelling() {
    let tmp = project();

    vercat(tmp.path())
        .args(["get", "lib", "spring-boot-starter-data_jpa"])
        .assert()
        .success()
        .stdout("org.springframework.boot:spring-boot-starter-data-jpa\n");
}

#[test]
fn test_get_from_nested_directory() {
    let tmp = project();
    let nested = tmp.path().join("service/src/main");
    fs::create_dir_all(&nested).unwrap();

    vercat(&nested)
        .args(["get", "library", "h2"])
        .assert()
        .success()
        .stdout("com.h2database:h2:2.2.224\n");
}

#[test]
fn test_get_version() {
    let tmp = project();

    vercat(tmp.path())
        .args(["get", "version", "kotlin"])
        .assert()
        .success()
        .stdout("1.9.21\n");
}

#[test]
fn test_get_rich_version_shows_constraint() {
    let tmp = project();

    vercat(tmp.path())
        .args(["get", "version", "mysql"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strictly [8.0, 9.0["))
        .stdout(predicate::str::contains("prefer 8.2.0"));
}

#[test]
fn test_get_bundle_in_declaration_order() {
    let tmp = project();

    vercat(tmp.path())
        .args(["get", "bundle", "testcontainers.mysql"])
        .assert()
        .success()
        .stdout("org.testcontainers:junit-jupiter:1.19.3\norg.testcontainers:mysql:1.19.3\n");
}

#[test]
fn test_get_plugin() {
    let tmp = project();

    vercat(tmp.path())
        .args(["get", "plugin", "kotlin.jvm"])
        .assert()
        .success()
        .stdout("org.jetbrains.kotlin.jvm:1.9.21\n");
}

#[test]
fn test_get_library_json() {
    let tmp = project();

    vercat(tmp.path())
        .args(["get", "library", "h2", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"com.h2database\""))
        .stdout(predicate::str::contains("2.2.224"));
}

#[test]
fn test_get_missing_key_suggests_neighbours() {
    let tmp = project();

    vercat(tmp.path())
        .args(["get", "library", "spring.boot.starter.webflux"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in catalog `libs`"))
        .stderr(predicate::str::contains("did you mean"))
        .stderr(predicate::str::contains("spring.boot.starter.web"));
}

#[test]
fn test_get_group_is_not_an_entry() {
    let tmp = project();

    vercat(tmp.path())
        .args(["get", "library", "spring.boot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_plugins_block_library_warns_but_succeeds() {
    let tmp = project();

    vercat(tmp.path())
        .args(["get", "library", "h2", "--plugins-block"])
        .assert()
        .success()
        .stdout("com.h2database:h2:2.2.224\n")
        .stderr(predicate::str::contains("This is deprecated"));
}

#[test]
fn test_plugins_block_plugin_is_silent() {
    let tmp = project();

    vercat(tmp.path())
        .args(["get", "plugin", "spring.boot", "--plugins-block"])
        .assert()
        .success()
        .stderr(predicate::str::contains("deprecated").not());
}

#[test]
fn test_plugins_block_version_is_silent() {
    let tmp = project();

    vercat(tmp.path())
        .args(["get", "version", "kotlin", "--plugins-block"])
        .assert()
        .success()
        .stdout("1.9.21\n")
        .stderr(predicate::str::contains("deprecated").not());

    vercat(tmp.path())
        .args(["get", "version", "ktor", "--plugins-block"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("version `ktor` not found"));
}

// ============================================================================
// catalog selection
// ============================================================================

#[test]
fn test_explicit_catalog_path() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("tools.versions.toml"),
        "[versions]\nktlint = \"1.0.1\"\n",
    )
    .unwrap();

    vercat(tmp.path())
        .args(["--catalog", "tools.versions.toml", "get", "version", "ktlint"])
        .assert()
        .success()
        .stdout("1.0.1\n");
}

#[test]
fn test_named_catalog() {
    let tmp = project();
    fs::write(
        tmp.path().join("gradle/tools.versions.toml"),
        "[versions]\nktlint = \"1.0.1\"\n",
    )
    .unwrap();

    vercat(tmp.path())
        .args(["--name", "tools", "get", "version", "ktlint"])
        .assert()
        .success()
        .stdout("1.0.1\n");

    vercat(tmp.path())
        .args(["--name", "build", "get", "version", "ktlint"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("available: libs, tools"));
}

#[test]
fn test_project_config_changes_catalog_dir() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("deps")).unwrap();
    fs::write(tmp.path().join("deps/libs.versions.toml"), LIBS).unwrap();
    fs::create_dir_all(tmp.path().join(".vercat")).unwrap();
    fs::write(
        tmp.path().join(".vercat/config.toml"),
        "[catalog]\ndir = \"deps\"\n",
    )
    .unwrap();

    vercat(tmp.path())
        .args(["get", "version", "spring-boot"])
        .assert()
        .success()
        .stdout("3.2.0\n");
}

#[test]
fn test_config_color_applies_to_errors() {
    let tmp = project();
    fs::create_dir_all(tmp.path().join(".vercat")).unwrap();
    fs::write(
        tmp.path().join(".vercat/config.toml"),
        "[output]\ncolor = true\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("vercat").unwrap();
    cmd.current_dir(tmp.path())
        .env_remove("VERCAT_CATALOG")
        .env("HOME", tmp.path())
        .env("XDG_CONFIG_HOME", tmp.path().join(".config"))
        .args(["get", "library", "ktor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\x1b[1;31merror\x1b[0m"));

    vercat(tmp.path())
        .args(["get", "library", "ktor"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: library `ktor` not found"));
}

#[test]
fn test_no_catalog_dir() {
    let tmp = TempDir::new().unwrap();

    vercat(tmp.path())
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not find `gradle`"));
}

// ============================================================================
// vercat list / tree
// ============================================================================

#[test]
fn test_list_plugins() {
    let tmp = project();

    vercat(tmp.path())
        .args(["list", "--kind", "plugin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kotlin.jvm"))
        .stdout(predicate::str::contains("org.springframework.boot:3.2.0"))
        .stdout(predicate::str::contains("h2").not());
}

#[test]
fn test_list_json() {
    let tmp = project();

    let output = vercat(tmp.path())
        .args(["list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 4 + 7 + 1 + 2);
    assert!(rows
        .iter()
        .any(|row| row["alias"] == "spring.boot.starter.web" && row["version_ref"] == "spring.boot"));
}

#[test]
fn test_tree_libraries() {
    let tmp = project();

    vercat(tmp.path())
        .args(["tree", "--kind", "library"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("libs.libraries\n"))
        .stdout(predicate::str::contains("starter"))
        .stdout(predicate::str::contains("└── "));
}

// ============================================================================
// vercat check
// ============================================================================

#[test]
fn test_check_valid() {
    let tmp = project();

    vercat(tmp.path())
        .args(["check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 versions, 7 libraries, 1 bundles, 2 plugins"));
}

#[test]
fn test_check_reports_undefined_version_ref() {
    let tmp = project();
    fs::write(
        tmp.path().join("gradle/broken.versions.toml"),
        "[libraries]\nh2 = { module = \"com.h2database:h2\", version.ref = \"h2\" }\n",
    )
    .unwrap();

    vercat(tmp.path())
        .args(["check"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("libs"))
        .stderr(predicate::str::contains("catalog `broken` is invalid"))
        .stderr(predicate::str::contains("references undefined version `h2`"))
        .stderr(predicate::str::contains("1 of 2 catalog(s) failed validation"));
}

#[test]
fn test_check_warns_on_empty_catalog() {
    let tmp = project();
    fs::write(tmp.path().join("gradle/empty.versions.toml"), "").unwrap();

    vercat(tmp.path())
        .args(["check"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: catalog `empty` declares no entries"));
}

#[test]
fn test_check_rejects_duplicate_normalized_alias() {
    let tmp = project();
    fs::write(
        tmp.path().join("gradle/libs.versions.toml"),
        "[versions]\nspring-boot = \"3.2.0\"\nspring_boot = \"3.1.0\"\n",
    )
    .unwrap();

    vercat(tmp.path())
        .args(["check", "--json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"status\": \"invalid\""))
        .stdout(predicate::str::contains("duplicate version alias"));
}

// ============================================================================
// vercat completions
// ============================================================================

#[test]
fn test_completions_bash() {
    let tmp = TempDir::new().unwrap();

    vercat(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vercat"));
}
