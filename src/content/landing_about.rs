//! The landing-page about section.

use serde_json::json;

use crate::schema::preview::{PreviewResult, PreviewSpec};
use crate::schema::types::field::{FieldVariant, ObjectField, ScalarField, ScalarKind};
use crate::schema::types::{RuleResult, RuleSet, Schema, SchemaError, SchemaField};

fn paragraph_element() -> FieldVariant {
    FieldVariant::Object(ObjectField::new(vec![
        SchemaField::text("text")
            .with_title("Paragraph Text")
            .with_rules(RuleSet::new().required()),
        SchemaField::array(
            "emphasis",
            FieldVariant::Scalar(ScalarField::new(ScalarKind::String)),
        )
        .with_title("Emphasis Words/Phrases")
        .with_description(
            "Words or phrases to be emphasized with accent styling (e.g., \"sword fighting\")",
        ),
        SchemaField::boolean("isLarge")
            .with_title("Large Text")
            .with_description("Make this paragraph larger than others")
            .with_initial(json!(false)),
        SchemaField::number("animationDelay")
            .with_title("Animation Delay (ms)")
            .with_description("Delay for fade-in animation")
            .with_initial(json!(0)),
    ]))
}

pub fn landing_page_about() -> Result<Schema, SchemaError> {
    let schema = Schema::new("landingPageAbout")
        .with_title("Landing Page About Section")
        .with_fields(vec![
            SchemaField::object(
                "sectionHeader",
                vec![
                    SchemaField::string("label")
                        .with_title("Section Label")
                        .with_description(
                            "Small text above the main heading (e.g., \"OUR PHILOSOPHY\")",
                        )
                        .with_rules(RuleSet::new().required().max(50.0)),
                    SchemaField::object(
                        "mainHeading",
                        vec![
                            SchemaField::string("regularText")
                                .with_title("Regular Text")
                                .with_description("The non-highlighted part of the heading")
                                .with_rules(RuleSet::new().required()),
                            SchemaField::string("highlightedText")
                                .with_title("Highlighted Text")
                                .with_description(
                                    "The emphasized part of the heading (will be styled with accent color)",
                                )
                                .with_rules(RuleSet::new().required()),
                        ],
                    )
                    .with_title("Main Heading"),
                ],
            )
            .with_title("Section Header"),
            SchemaField::array("contentParagraphs", paragraph_element())
                .with_title("Content Paragraphs")
                .with_rules(RuleSet::new().min(1.0).max(5.0)),
            SchemaField::object(
                "blockquote",
                vec![
                    SchemaField::text("quote")
                        .with_title("Quote Text")
                        .with_rules(RuleSet::new().required()),
                    SchemaField::string("attribution")
                        .with_title("Attribution")
                        .with_description(
                            "Source or context of the quote (e.g., \"COACHING PHILOSOPHY\")",
                        )
                        .with_rules(RuleSet::new().required()),
                    SchemaField::string("icon")
                        .with_title("Icon")
                        .with_initial(json!("arrow-up"))
                        .with_rules(RuleSet::new().one_of(vec![
                            json!("arrow-up"),
                            json!("star"),
                            json!("trophy"),
                            json!("target"),
                            json!("sword"),
                        ])),
                ],
            )
            .with_title("Featured Quote"),
            SchemaField::object(
                "callToAction",
                vec![
                    SchemaField::string("buttonText")
                        .with_title("Button Text")
                        .with_rules(RuleSet::new().required().max(50.0)),
                    SchemaField::url("buttonUrl")
                        .with_title("Button URL")
                        .with_rules(RuleSet::new().required().uri(&["http", "https"], false)),
                    SchemaField::string("description")
                        .with_title("Description Text")
                        .with_description("Small text below the button")
                        .with_rules(RuleSet::new().max(100.0)),
                ],
            )
            .with_title("Call to Action"),
            SchemaField::object(
                "video",
                vec![
                    SchemaField::file("videoFile").with_title("Video File"),
                    SchemaField::url("videoUrl")
                        .with_title("Video URL")
                        .with_description("Alternative to uploading - use external video URL")
                        .with_rules(RuleSet::new().uri(&["http", "https"], false)),
                    SchemaField::image("posterImage")
                        .with_title("Poster Image")
                        .with_asset_fields(vec![SchemaField::string("alt")
                            .with_title("Alt Text")
                            .with_rules(RuleSet::new().required())]),
                    SchemaField::string("videoDescription")
                        .with_title("Video Description")
                        .with_description("Text overlay on the video")
                        .with_rules(RuleSet::new().required()),
                    SchemaField::string("videoLabel")
                        .with_title("Video Label")
                        .with_description("Small label for the video (e.g., \"INTRO VIDEO\")")
                        .with_rules(RuleSet::new().required()),
                    SchemaField::boolean("autoplay")
                        .with_title("Autoplay")
                        .with_initial(json!(true)),
                    SchemaField::boolean("muted")
                        .with_title("Muted")
                        .with_initial(json!(true)),
                    SchemaField::boolean("loop")
                        .with_title("Loop")
                        .with_initial(json!(true)),
                    SchemaField::boolean("showControls")
                        .with_title("Show Controls")
                        .with_initial(json!(true)),
                ],
            )
            .with_title("Featured Video")
            .with_rules(RuleSet::new().custom(|value, _ctx| {
                let has_file = value
                    .and_then(|v| v.get("videoFile"))
                    .is_some_and(|v| !v.is_null());
                let has_url = value
                    .and_then(|v| v.get("videoUrl"))
                    .is_some_and(|v| !v.is_null());
                if has_file || has_url {
                    RuleResult::Pass
                } else {
                    RuleResult::fail("Either upload a video file or provide a video URL")
                }
            })),
            SchemaField::object(
                "statsWidget",
                vec![
                    SchemaField::string("number")
                        .with_title("Number")
                        .with_rules(RuleSet::new().required()),
                    SchemaField::string("label")
                        .with_title("Label")
                        .with_rules(RuleSet::new().required()),
                    SchemaField::boolean("isVisible")
                        .with_title("Show Stats Widget")
                        .with_initial(json!(true)),
                ],
            )
            .with_title("Stats Widget")
            .with_description("Floating stats badge that appears on video hover"),
            SchemaField::object(
                "seo",
                vec![
                    SchemaField::string("title")
                        .with_title("SEO Title")
                        .with_rules(RuleSet::new().max(60.0)),
                    SchemaField::text("description")
                        .with_title("SEO Description")
                        .with_rules(RuleSet::new().max(160.0)),
                ],
            )
            .with_title("SEO Settings"),
        ])?
        .with_preview(
            PreviewSpec::new()
                .select("title", "sectionHeader.mainHeading.regularText")
                .select("subtitle", "sectionHeader.label")
                .select("media", "video.posterImage")
                .prepare(|values| PreviewResult {
                    title: Some(
                        values
                            .str("title")
                            .unwrap_or("Landing Page About")
                            .to_string(),
                    ),
                    subtitle: Some(
                        values.str("subtitle").unwrap_or("About section").to_string(),
                    ),
                    media: values.get("media").cloned(),
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

    fn paragraph(text: &str) -> Value {
        json!({"text": text, "isLarge": false, "animationDelay": 0})
    }

    fn complete_section() -> Value {
        json!({
            "sectionHeader": {
                "label": "OUR PHILOSOPHY",
                "mainHeading": {"regularText": "More than", "highlightedText": "sword fighting"}
            },
            "contentParagraphs": [paragraph("Fencing builds character.")],
            "blockquote": {
                "quote": "Slow is smooth, smooth is fast.",
                "attribution": "COACHING PHILOSOPHY",
                "icon": "arrow-up"
            },
            "callToAction": {
                "buttonText": "Visit Us",
                "buttonUrl": "https://tfa.example.com/visit"
            },
            "video": {
                "videoUrl": "https://cdn.example.com/intro.mp4",
                "posterImage": {"asset": "image-poster1", "alt": "Coach demonstrating a lunge"},
                "videoDescription": "Watch a class in action",
                "videoLabel": "INTRO VIDEO"
            },
            "statsWidget": {"number": "200+", "label": "Active Students"}
        })
    }

    #[test]
    fn complete_section_is_valid() {
        let schema = landing_page_about().unwrap();
        let failures = validate_document(&schema, &complete_section());
        assert!(failures.is_empty(), "unexpected failures: {failures:?}");
    }

    #[test]
    fn paragraph_count_is_bounded() {
        let schema = landing_page_about().unwrap();
        let mut doc = complete_section();
        doc["contentParagraphs"] = json!([
            paragraph("1"), paragraph("2"), paragraph("3"),
            paragraph("4"), paragraph("5"), paragraph("6")
        ]);

        let failures = validate_document(&schema, &doc);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].path, "contentParagraphs");
        assert_eq!(failures[0].message, "Must have at most 5 entries");
    }

    #[test]
    fn paragraphs_need_text() {
        let schema = landing_page_about().unwrap();
        let mut doc = complete_section();
        doc["contentParagraphs"] = json!([paragraph("ok"), {"isLarge": true}]);

        let failures = validate_document(&schema, &doc);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].path, "contentParagraphs[1].text");
    }

    #[test]
    fn video_needs_a_file_or_a_url() {
        let schema = landing_page_about().unwrap();
        let mut doc = complete_section();
        doc["video"] = json!({
            "posterImage": {"asset": "image-poster1", "alt": "alt"},
            "videoDescription": "desc",
            "videoLabel": "LABEL"
        });

        let failures = validate_document(&schema, &doc);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].path, "video");
        assert_eq!(
            failures[0].message,
            "Either upload a video file or provide a video URL"
        );
    }

    #[test]
    fn preview_falls_back_to_static_labels() {
        let schema = landing_page_about().unwrap();

        let preview = project(&schema, &complete_section());
        assert_eq!(preview.title.as_deref(), Some("More than"));
        assert_eq!(preview.subtitle.as_deref(), Some("OUR PHILOSOPHY"));
        assert!(preview.media.is_some());

        let preview = project(&schema, &json!({}));
        assert_eq!(preview.title.as_deref(), Some("Landing Page About"));
        assert_eq!(preview.subtitle.as_deref(), Some("About section"));
        assert_eq!(preview.media, None);
    }
}
