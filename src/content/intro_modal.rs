//! The free-introductory-class modal dialog.

use chrono::DateTime;
use serde_json::json;

use crate::schema::preview::{PreviewResult, PreviewSpec};
use crate::schema::types::{RuleSet, Schema, SchemaError, SchemaField};

pub fn free_intro_class() -> Result<Schema, SchemaError> {
    let schema = Schema::new("freeIntroClass")
        .with_title("Free Introductory Class Modal")
        .with_fields(vec![
            SchemaField::string("title")
                .with_title("Modal Title")
                .with_description(
                    "Main title for the modal (e.g., \"Join us for our Free Introductory Class\")",
                )
                .with_initial(json!("Join us for our Open House"))
                .with_rules(RuleSet::new().required()),
            SchemaField::datetime("classDate")
                .with_title("Class Date")
                .with_description("Date and time of the free introductory class")
                .with_rules(RuleSet::new().required()),
            SchemaField::text("description")
                .with_title("Description")
                .with_description("Description text for the modal")
                .with_initial(json!(
                    "Learn about fencing, see a demonstration, and try some of the moves yourself!"
                ))
                .with_rules(RuleSet::new().required()),
            SchemaField::string("ctaText")
                .with_title("Call to Action Text")
                .with_description("Text for the action button (e.g., \"Reserve Your Spot!\")")
                .with_initial(json!("Register Now!"))
                .with_rules(RuleSet::new().required()),
            SchemaField::url("ctaLink")
                .with_title("Call to Action Link")
                .with_description("URL for the registration or more info page")
                .with_initial(json!("/open-house"))
                .with_rules(RuleSet::new().required().uri(&["http", "https"], true)),
            SchemaField::boolean("showModal")
                .with_title("Show Modal")
                .with_description("Toggle to show/hide the modal")
                .with_initial(json!(true)),
            SchemaField::number("delaySeconds")
                .with_title("Delay (seconds)")
                .with_description("Delay in seconds before showing the modal")
                .with_initial(json!(5))
                .with_rules(RuleSet::new().required().min(0.0).max(60.0)),
        ])?
        .with_preview(
            PreviewSpec::new()
                .select("title", "title")
                .select("classDate", "classDate")
                .select("showModal", "showModal")
                .prepare(|values| {
                    let formatted = values
                        .str("classDate")
                        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
                        .map(|date| date.format("%B %-d, %Y").to_string())
                        .unwrap_or_else(|| "No date set".to_string());
                    let active = match values.get("showModal").and_then(|v| v.as_bool()) {
                        Some(true) => "Active",
                        _ => "Inactive",
                    };
                    PreviewResult {
                        title: values.str("title").map(str::to_string),
                        subtitle: Some(format!("{formatted} - {active}")),
                        media: None,
                    }
                }),
        );
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::schema::preview::project;
    use crate::schema::validator::validate_document;
    use serde_json::json;

    #[test]
    fn seeded_draft_only_needs_a_class_date() {
        let schema = free_intro_class().unwrap();
        let mut doc = Document::new(&schema);

        let failures = validate_document(&schema, doc.data());
        let paths: Vec<_> = failures.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["classDate"]);

        doc.set("classDate", json!("2026-06-01T17:30:00Z")).unwrap();
        assert!(validate_document(&schema, doc.data()).is_empty());
    }

    #[test]
    fn delay_is_bounded() {
        let schema = free_intro_class().unwrap();
        let mut doc = Document::new(&schema);
        doc.set("classDate", json!("2026-06-01T17:30:00Z")).unwrap();
        doc.set("delaySeconds", json!(61)).unwrap();

        let failures = validate_document(&schema, doc.data());
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].path, "delaySeconds");
    }

    #[test]
    fn preview_derives_date_and_active_state() {
        let schema = free_intro_class().unwrap();
        let doc = json!({
            "title": "Join us for our Open House",
            "classDate": "2026-06-01T17:30:00Z",
            "showModal": true
        });

        let preview = project(&schema, &doc);
        assert_eq!(preview.title.as_deref(), Some("Join us for our Open House"));
        assert_eq!(preview.subtitle.as_deref(), Some("June 1, 2026 - Active"));
    }

    #[test]
    fn preview_falls_back_without_a_date() {
        let schema = free_intro_class().unwrap();
        let preview = project(&schema, &json!({"showModal": false}));
        assert_eq!(
            preview.title.as_deref(),
            Some("Free Introductory Class Modal")
        );
        assert_eq!(preview.subtitle.as_deref(), Some("No date set - Inactive"));
    }
}
