//! Table-driven tests for mapping-file loading and template bootstrap.

mod common;

use std::path::Path;

use chanmap::{load_mapping, ConfigError, ConfigFormat, MappingDocument};
use common::MappingFileBuilder;
use tempfile::TempDir;

/// A single mapping-file loading test case.
struct LoadTestCase {
    /// Test case name for identification.
    name: &'static str,
    /// File name the mapping is written under.
    file_name: &'static str,
    /// File content; `None` leaves the file missing.
    content: Option<&'static str>,
    /// Whether loading should succeed.
    should_succeed: bool,
    /// Expected error substring (when `should_succeed` is false).
    expected_error: Option<&'static str>,
}

const LOAD_TESTS: &[LoadTestCase] = &[
    LoadTestCase {
        name: "valid_minimal",
        file_name: "mapping.json",
        content: Some(r#"{ "lectures": { "field": { "channel": { "a": "b" } } } }"#),
        should_succeed: true,
        expected_error: None,
    },
    LoadTestCase {
        name: "valid_full_category",
        file_name: "mapping.json",
        content: Some(
            r#"{
                "lectures": {
                    "home": "/srv/lectures",
                    "temp": "/tmp/lectures",
                    "field": {
                        "channel": { "MIT OpenCourseWare": "OCW - MIT" },
                        "uploader": { "someone": "Someone Else" }
                    }
                },
                "uncategorized": { "field": { "channel": {} } }
            }"#,
        ),
        should_succeed: true,
        expected_error: None,
    },
    LoadTestCase {
        name: "missing_file_bootstraps_template",
        file_name: "fresh.json",
        content: None,
        should_succeed: true,
        expected_error: None,
    },
    LoadTestCase {
        name: "malformed_json",
        file_name: "mapping.json",
        content: Some("{ broken"),
        should_succeed: false,
        expected_error: Some("Failed to parse mapping file"),
    },
    LoadTestCase {
        name: "root_is_not_an_object",
        file_name: "mapping.json",
        content: Some("[1, 2, 3]"),
        should_succeed: false,
        expected_error: Some("Failed to parse mapping file"),
    },
    LoadTestCase {
        name: "unsupported_extension",
        file_name: "mapping.toml",
        content: Some("lectures = {}"),
        should_succeed: false,
        expected_error: Some("Unsupported mapping file type"),
    },
    LoadTestCase {
        name: "no_extension",
        file_name: "mapping",
        content: Some("{}"),
        should_succeed: false,
        expected_error: Some("Unsupported mapping file type"),
    },
];

#[test]
fn test_load_cases() {
    for case in LOAD_TESTS {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(case.file_name);
        if let Some(content) = case.content {
            std::fs::write(&path, content).unwrap();
        }

        let result = load_mapping(&path.to_string_lossy());
        match (&result, case.should_succeed) {
            (Ok(_), true) => {}
            (Err(error), false) => {
                if let Some(expected) = case.expected_error {
                    let message = error.to_string();
                    assert!(
                        message.contains(expected),
                        "case '{}': error '{message}' does not mention '{expected}'",
                        case.name
                    );
                }
            }
            (Ok(_), false) => panic!("case '{}' unexpectedly succeeded", case.name),
            (Err(error), true) => panic!("case '{}' unexpectedly failed: {error}", case.name),
        }
    }
}

#[test]
fn test_bootstrap_writes_the_starter_template() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("maps/channels.json");

    let loaded = load_mapping(&path.to_string_lossy()).unwrap();
    assert!(loaded.created_template);
    assert_eq!(loaded.path, path);
    assert_eq!(loaded.document, MappingDocument::template());

    // Reloading reads the same document back without another bootstrap
    let reloaded = load_mapping(&path.to_string_lossy()).unwrap();
    assert!(!reloaded.created_template);
    assert_eq!(reloaded.document, loaded.document);
}

#[test]
fn test_category_order_survives_loading() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mapping.json");
    std::fs::write(
        &path,
        r#"{ "zeta": {}, "alpha": {}, "middle": { "field": { "channel": { "a": "b" } } } }"#,
    )
    .unwrap();

    let loaded = load_mapping(&path.to_string_lossy()).unwrap();
    let names: Vec<&String> = loaded.document.categories.keys().collect();
    assert_eq!(names, vec!["zeta", "alpha", "middle"]);
}

#[test]
fn test_written_document_loads_back_identically() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mapping.json");

    let builder = MappingFileBuilder::new()
        .channel_mapping("lectures", "MIT OpenCourseWare", "OCW - MIT")
        .home("lectures", Path::new("/srv/lectures"))
        .temp("lectures", Path::new("/tmp/lectures"));
    builder.write(&path, ConfigFormat::Json);

    let loaded = load_mapping(&path.to_string_lossy()).unwrap();
    assert_eq!(&loaded.document, builder.document());
}

#[test]
fn test_empty_config_path_is_rejected() {
    assert!(matches!(
        load_mapping(""),
        Err(ConfigError::UnsupportedExtension { .. })
    ));
}

#[cfg(feature = "yaml")]
mod yaml {
    use super::*;

    #[test]
    fn test_yaml_mapping_loads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mapping.yaml");
        std::fs::write(
            &path,
            "lectures:\n  home: /srv/lectures\n  field:\n    channel:\n      a: b\n",
        )
        .unwrap();

        let loaded = load_mapping(&path.to_string_lossy()).unwrap();
        assert_eq!(loaded.document.categories["lectures"].field["channel"]["a"], "b");
    }

    #[test]
    fn test_yaml_bootstrap_round_trips_the_template() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mapping.yml");

        let loaded = load_mapping(&path.to_string_lossy()).unwrap();
        assert!(loaded.created_template);
        assert_eq!(loaded.document, MappingDocument::template());

        let on_disk = std::fs::read_to_string(&path).unwrap();
        let decoded = ConfigFormat::Yaml.decode(&on_disk, &path).unwrap();
        assert_eq!(decoded, MappingDocument::template());
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mapping.yaml");
        std::fs::write(&path, "lectures: [unclosed").unwrap();

        assert!(matches!(
            load_mapping(&path.to_string_lossy()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
