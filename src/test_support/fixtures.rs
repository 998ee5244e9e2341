//! Catalog fixtures.

use std::path::{Path, PathBuf};

use crate::core::Catalog;

/// A `libs.versions.toml` for a Spring Boot + Kotlin service.
pub const LIBS_VERSIONS_TOML: &str = r#"
[metadata]
format.version = "1.1"

[versions]
assertj = "3.24.2"
junit = "5.9.3"
kotlin = "1.9.21"
redisson = "3.25.2"
fixture-monkey = "1.0.13"
ktlint-plugin = "11.6.1"
spring-boot = "3.2.0"
spring-mockk = "4.0.2"
spring-cloud-dependencies = "2023.0.0"
spring-io-dependency-management = "1.1.0"
test-containers = "1.19.3"

[libraries]
assertj = { group = "org.assertj", name = "assertj-core", version.ref = "assertj" }
h2 = "com.h2database:h2:2.2.224"
fixture-monkey-starter-kotlin = { module = "com.navercorp.fixturemonkey:fixture-monkey-starter-kotlin", version.ref = "fixture-monkey" }
jackson-kotlin = { module = "com.fasterxml.jackson.module:jackson-module-kotlin" }
micrometer-registry-prometheus = { module = "io.micrometer:micrometer-registry-prometheus" }
micrometer-tracing-bridge-brave = { module = "io.micrometer:micrometer-tracing-bridge-brave" }
mysql-connector = { module = "com.mysql:mysql-connector-j" }
spring-context = { module = "org.springframework:spring-context" }
spring-mockk = { module = "com.ninja-squad:springmockk", version.ref = "spring-mockk" }
spring-boot-dependencies = { module = "org.springframework.boot:spring-boot-dependencies", version.ref = "spring-boot" }
spring-boot-testcontainers = { module = "org.springframework.boot:spring-boot-testcontainers" }
spring-boot-configuration-processor = { module = "org.springframework.boot:spring-boot-configuration-processor" }
spring-boot-starter-actuator = { module = "org.springframework.boot:spring-boot-starter-actuator" }
spring-boot-starter-test = { module = "org.springframework.boot:spring-boot-starter-test" }
spring-boot-starter-web = { module = "org.springframework.boot:spring-boot-starter-web", version.ref = "spring-boot" }
spring-boot-starter-data-jpa = { module = "org.springframework.boot:spring-boot-starter-data-jpa" }
spring-cloud-dependencies = { module = "org.springframework.cloud:spring-cloud-dependencies", version.ref = "spring-cloud-dependencies" }
test-containers-mysql = { module = "org.testcontainers:mysql", version.ref = "test-containers" }
test-containers-junit-jupiter = { module = "org.testcontainers:junit-jupiter", version.ref = "test-containers" }

[bundles]
testcontainers-mysql = ["test-containers-junit-jupiter", "test-containers-mysql", "mysql-connector"]

[plugins]
ktlint = "org.jlleitschuh.gradle.ktlint:12.0.3"
kotlin-jpa = { id = "org.jetbrains.kotlin.plugin.jpa", version.ref = "kotlin" }
kotlin-jvm = { id = "org.jetbrains.kotlin.jvm", version.ref = "kotlin" }
kotlin-kapt = { id = "org.jetbrains.kotlin.kapt", version.ref = "kotlin" }
kotlin-spring = { id = "org.jetbrains.kotlin.plugin.spring", version.ref = "kotlin" }
spring-boot = { id = "org.springframework.boot", version.ref = "spring-boot" }
spring-dependency-management = { id = "io.spring.dependency-management", version.ref = "spring-io-dependency-management" }
"#;

/// The fixture document parsed as catalog `libs`.
pub fn fixture_catalog() -> Catalog {
    Catalog::parse(LIBS_VERSIONS_TOML, "libs").expect("fixture catalog is valid")
}

/// Write the fixture document to `<root>/gradle/libs.versions.toml`.
pub fn write_fixture_catalog(root: &Path) -> PathBuf {
    let dir = root.join("gradle");
    std::fs::create_dir_all(&dir).expect("create gradle dir");
    let path = dir.join("libs.versions.toml");
    std::fs::write(&path, LIBS_VERSIONS_TOML).expect("write fixture catalog");
    path
}
