//! Boot-time loading of a schema set from a configuration directory.

mod common;

use contentfold::{validate_document, DocumentValidator, Document, SchemaRegistry};
use serde_json::json;
use std::fs;
use std::path::Path;

fn write_file(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

const EVENT_BANNER: &str = r#"{
    "name": "eventBanner",
    "title": "Event Banner",
    "fields": [
        {"name": "showBanner", "type": "boolean", "initial_value": true},
        {
            "name": "headline",
            "type": "string",
            "rules": [{"rule": "required"}, {"rule": "max", "value": 80}]
        },
        {
            "name": "eventType",
            "type": "string",
            "initial_value": "openHouse",
            "rules": [{"rule": "one_of", "values": ["openHouse", "tournament"]}]
        },
        {
            "name": "signupLink",
            "type": "url",
            "rules": [
                {"rule": "required"},
                {"rule": "uri", "schemes": ["http", "https"], "allow_relative": true}
            ]
        },
        {
            "name": "bracketUrl",
            "type": "url",
            "hidden": {"when": "field_not_equals", "path": "eventType", "value": "tournament"},
            "rules": [{
                "rule": "required_when",
                "condition": {"when": "field_equals", "path": "eventType", "value": "tournament"},
                "message": "Tournaments need a bracket link"
            }]
        }
    ],
    "preview": {"select": {"title": "headline"}}
}"#;

#[test]
fn loaded_definitions_drive_validation() {
    common::init_logging();
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "event_banner.json", EVENT_BANNER);

    let registry = SchemaRegistry::new();
    let report = contentfold::load_schemas_from_dir(dir.path(), &registry).unwrap();
    assert_eq!(report.loaded, vec!["eventBanner"]);
    assert!(report.failed.is_empty());

    let schema = registry.get("eventBanner").unwrap();

    // Open house: the bracket link is hidden and not required.
    let doc = json!({"headline": "Open House", "signupLink": "/open-house"});
    assert!(validate_document(&schema, &doc).is_empty());

    // Tournament: it becomes both visible and required.
    let doc = json!({
        "headline": "Spring Tournament",
        "eventType": "tournament",
        "signupLink": "/tournament"
    });
    let failures = validate_document(&schema, &doc);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].path, "bracketUrl");
    assert_eq!(failures[0].message, "Tournaments need a bracket link");

    // The javascript: scheme never passes the uri rule.
    let doc = json!({
        "headline": "Open House",
        "signupLink": "javascript:alert(1)"
    });
    let failures = validate_document(&schema, &doc);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].path, "signupLink");
}

#[test]
fn loaded_schemas_validate_documents_end_to_end() {
    common::init_logging();
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "event_banner.json", EVENT_BANNER);

    let registry = SchemaRegistry::new();
    contentfold::load_schemas_from_dir(dir.path(), &registry).unwrap();

    let schema = registry.get("eventBanner").unwrap();
    let mut doc = Document::new(&schema);
    // Seeded from the JSON definition's initial values.
    assert_eq!(doc.get("showBanner"), Some(&json!(true)));
    assert_eq!(doc.get("eventType"), Some(&json!("openHouse")));

    doc.set("headline", json!("New Fencer Orientation")).unwrap();
    doc.set("signupLink", json!("/orientation")).unwrap();

    let validator = DocumentValidator::new(&registry);
    assert!(validator.check(&mut doc).unwrap().is_empty());
    doc.publish().unwrap();
}

#[test]
fn bad_files_are_reported_and_skipped() {
    common::init_logging();
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "event_banner.json", EVENT_BANNER);
    write_file(
        dir.path(),
        "broken.json",
        r#"{"name": "broken", "fields": [{"name": "x", "type": "hologram"}]}"#,
    );

    let registry = SchemaRegistry::new();
    let report = contentfold::load_schemas_from_dir(dir.path(), &registry).unwrap();

    assert_eq!(report.loaded, vec!["eventBanner"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "broken.json");
    assert!(!registry.contains("broken"));
}
