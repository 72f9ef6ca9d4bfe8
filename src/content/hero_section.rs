//! The landing-page hero section.
//!
//! One hero per page, fetched by slug. Two editorial flavors share the
//! schema: the standard hero (background image, secondary button) and the
//! summer-camp hero (background video, camp dates). Fields specific to one
//! flavor are hidden for the other, and their requiredness follows the
//! `heroType` selector.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;

use crate::schema::preview::{PreviewResult, PreviewSpec};
use crate::schema::types::{Condition, RuleSet, Schema, SchemaError, SchemaField};

/// Absolute http(s) URL, relative path or `#anchor` link.
static CTA_LINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(/\S*)|(https?://\S+)|(#[A-Za-z0-9\-_]+)").expect("CTA link pattern compiles")
});

fn summer_camp() -> Condition {
    Condition::field_equals("heroType", json!("summerCamp"))
}

fn not_summer_camp() -> Condition {
    Condition::field_not_equals("heroType", json!("summerCamp"))
}

pub fn hero_section() -> Result<Schema, SchemaError> {
    let schema = Schema::new("heroSection")
        .with_title("Hero Section")
        .with_fields(vec![
            // Fetched by slug, one hero per page.
            SchemaField::slug("slug")
                .with_title("Section ID (slug)")
                .with_rules(RuleSet::new().required()),
            SchemaField::string("heroType")
                .with_title("Hero Type")
                .with_initial(json!("standard"))
                .with_rules(
                    RuleSet::new()
                        .required()
                        .one_of(vec![json!("standard"), json!("summerCamp")]),
                ),
            SchemaField::object(
                "title",
                vec![
                    SchemaField::string("first")
                        .with_title("Line 1")
                        .with_rules(RuleSet::new().required()),
                    SchemaField::string("second")
                        .with_title("Line 2 (highlighted)")
                        .with_rules(RuleSet::new().required()),
                    SchemaField::string("third")
                        .with_title("Line 3")
                        .with_rules(RuleSet::new().required()),
                ],
            )
            .with_title("Heading (3-part)")
            .with_rules(RuleSet::new().required()),
            SchemaField::string("tagline")
                .with_title("Tagline")
                .with_rules(RuleSet::new().max(120.0)),
            SchemaField::text("description")
                .with_title("Description")
                .with_rules(RuleSet::new().max(500.0)),
            SchemaField::object(
                "campDates",
                vec![
                    SchemaField::object(
                        "camp1",
                        vec![
                            SchemaField::string("title")
                                .with_title("Camp Title")
                                .with_initial(json!("SUMMER CAMP I")),
                            SchemaField::string("dates")
                                .with_title("Dates")
                                .with_rules(RuleSet::new().required()),
                        ],
                    )
                    .with_title("Summer Camp I"),
                    SchemaField::object(
                        "camp2",
                        vec![
                            SchemaField::string("title")
                                .with_title("Camp Title")
                                .with_initial(json!("SUMMER CAMP II")),
                            SchemaField::string("dates")
                                .with_title("Dates")
                                .with_rules(RuleSet::new().required()),
                        ],
                    )
                    .with_title("Summer Camp II"),
                ],
            )
            .with_title("Camp Dates")
            .hidden_when(not_summer_camp())
            .with_rules(
                RuleSet::new()
                    .required_when(summer_camp())
                    .error("Camp dates are required for summer camp heroes"),
            ),
            SchemaField::image("background")
                .with_title("Background Image (desktop)")
                .with_asset_fields(vec![SchemaField::string("alt")
                    .with_title("Alt text")
                    .with_rules(
                        RuleSet::new()
                            .required_when(not_summer_camp())
                            .error("Alt text is required for standard heroes"),
                    )])
                .hidden_when(summer_camp())
                .with_rules(
                    RuleSet::new()
                        .required_when(not_summer_camp())
                        .error("Background image is required for standard heroes"),
                ),
            SchemaField::image("backgroundMobile")
                .with_title("Background Image (mobile, optional)")
                .with_asset_fields(vec![
                    SchemaField::string("alt").with_title("Alt text")
                ])
                .hidden_when(summer_camp()),
            SchemaField::file("backgroundVideo")
                .with_title("Background Video")
                .hidden_when(not_summer_camp())
                .with_rules(
                    RuleSet::new()
                        .required_when(summer_camp())
                        .error("Background video is required for summer camp heroes"),
                ),
            SchemaField::object(
                "primaryCta",
                vec![
                    SchemaField::string("text")
                        .with_title("Label")
                        .with_rules(RuleSet::new().required()),
                    SchemaField::string("url")
                        .with_title("URL")
                        .with_rules(
                            RuleSet::new()
                                .required()
                                .matches(&CTA_LINK_PATTERN)
                                .error(
                                    "Enter a valid URL, relative path starting with /, \
                                     or anchor link starting with #",
                                ),
                        ),
                    SchemaField::boolean("newTab")
                        .with_title("Open in new tab")
                        .with_initial(json!(true)),
                    SchemaField::string("actionType")
                        .with_title("Action Type")
                        .with_initial(json!("navigate"))
                        .with_rules(
                            RuleSet::new().one_of(vec![json!("navigate"), json!("scroll")]),
                        )
                        .hidden_when(not_summer_camp()),
                ],
            )
            .with_title("Primary Button")
            .with_rules(RuleSet::new().required()),
            SchemaField::object(
                "secondaryCta",
                vec![
                    SchemaField::string("text")
                        .with_title("Label")
                        .with_rules(
                            RuleSet::new()
                                .required_when(not_summer_camp())
                                .error("Label is required for standard heroes"),
                        ),
                    SchemaField::string("action")
                        .with_title("Action")
                        .with_description("\"scroll:#id\" or URL")
                        .with_rules(
                            RuleSet::new()
                                .required_when(not_summer_camp())
                                .error("Action is required for standard heroes"),
                        ),
                ],
            )
            .with_title("Secondary Button")
            .hidden_when(summer_camp())
            .with_rules(
                RuleSet::new()
                    .required_when(not_summer_camp())
                    .error("Secondary button is required for standard heroes"),
            ),
        ])?
        .with_preview(
            PreviewSpec::new()
                .select("title", "title.first")
                .select("media", "background")
                .select("heroType", "heroType")
                .prepare(|values| {
                    let label = match values.str("heroType") {
                        Some("summerCamp") => "Summer Camp Hero",
                        _ => "Hero",
                    };
                    PreviewResult {
                        title: values.str("title").map(|t| format!("{label} – {t}")),
                        subtitle: None,
                        media: values.get("media").cloned(),
                    }
                }),
        );
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::preview::project;
    use crate::schema::validator::validate_document;
    use serde_json::{json, Value};

    fn standard_hero() -> Value {
        json!({
            "slug": {"current": "landing-hero"},
            "heroType": "standard",
            "title": {"first": "MASTER", "second": "THE BLADE", "third": "MASTER YOURSELF"},
            "background": {"asset": "image-abc123", "alt": "Fencers mid-bout"},
            "primaryCta": {"text": "Book a Class", "url": "/book", "newTab": true},
            "secondaryCta": {"text": "Learn More", "action": "scroll:#about"}
        })
    }

    #[test]
    fn complete_standard_hero_is_valid() {
        let schema = hero_section().unwrap();
        assert!(validate_document(&schema, &standard_hero()).is_empty());
    }

    #[test]
    fn summer_camp_hero_does_not_need_a_background() {
        let schema = hero_section().unwrap();
        let doc = json!({
            "slug": {"current": "camp-hero"},
            "heroType": "summerCamp",
            "title": {"first": "SUMMER", "second": "CAMP", "third": "2026"},
            "campDates": {
                "camp1": {"title": "SUMMER CAMP I", "dates": "June 9-13"},
                "camp2": {"title": "SUMMER CAMP II", "dates": "July 14-18"}
            },
            "backgroundVideo": {"asset": "file-video123"},
            "primaryCta": {"text": "Register", "url": "#register", "actionType": "scroll"}
        });

        let failures = validate_document(&schema, &doc);
        assert!(
            failures.iter().all(|f| !f.path.starts_with("background")),
            "background must not be required for summer camp heroes: {failures:?}"
        );
        assert!(failures.is_empty(), "unexpected failures: {failures:?}");
    }

    #[test]
    fn standard_hero_requires_background_and_secondary_cta() {
        let schema = hero_section().unwrap();
        let mut doc = standard_hero();
        doc.as_object_mut().unwrap().remove("background");
        doc.as_object_mut().unwrap().remove("secondaryCta");

        let failures = validate_document(&schema, &doc);
        let paths: Vec<_> = failures.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["background", "secondaryCta"]);
        assert_eq!(
            failures[0].message,
            "Background image is required for standard heroes"
        );
    }

    #[test]
    fn summer_camp_hero_requires_video_and_camp_dates() {
        let schema = hero_section().unwrap();
        let doc = json!({
            "slug": {"current": "camp-hero"},
            "heroType": "summerCamp",
            "title": {"first": "SUMMER", "second": "CAMP", "third": "2026"},
            "primaryCta": {"text": "Register", "url": "#register"}
        });

        let failures = validate_document(&schema, &doc);
        let paths: Vec<_> = failures.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["campDates", "backgroundVideo"]);
    }

    #[test]
    fn cta_url_accepts_paths_anchors_and_http() {
        let schema = hero_section().unwrap();
        for url in ["/book", "#register", "https://tfa.example.com/book", "HTTP://X.COM/Y"] {
            let mut doc = standard_hero();
            doc["primaryCta"]["url"] = json!(url);
            assert!(
                validate_document(&schema, &doc).is_empty(),
                "expected '{url}' to pass"
            );
        }

        for url in ["javascript:alert(1)", "book-now", "scroll to top"] {
            let mut doc = standard_hero();
            doc["primaryCta"]["url"] = json!(url);
            let failures = validate_document(&schema, &doc);
            assert_eq!(failures.len(), 1, "expected '{url}' to fail");
            assert_eq!(failures[0].path, "primaryCta.url");
        }
    }

    #[test]
    fn missing_alt_text_fails_standard_heroes_only() {
        let schema = hero_section().unwrap();
        let mut doc = standard_hero();
        doc["background"] = json!({"asset": "image-abc123"});

        let failures = validate_document(&schema, &doc);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].path, "background.alt");
        assert_eq!(failures[0].message, "Alt text is required for standard heroes");
    }

    #[test]
    fn preview_labels_hero_flavors() {
        let schema = hero_section().unwrap();

        let preview = project(&schema, &standard_hero());
        assert_eq!(preview.title.as_deref(), Some("Hero – MASTER"));
        assert!(preview.media.is_some());

        let camp = json!({"heroType": "summerCamp", "title": {"first": "SUMMER"}});
        let preview = project(&schema, &camp);
        assert_eq!(preview.title.as_deref(), Some("Summer Camp Hero – SUMMER"));
    }
}
