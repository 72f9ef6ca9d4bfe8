//! The informational banner shown across the top of the website.

use serde_json::json;

use crate::schema::types::{RuleSet, Schema, SchemaError, SchemaField};

pub fn info_banner() -> Result<Schema, SchemaError> {
    Schema::new("infoBanner")
        .with_title("Info Banner")
        .with_fields(vec![
            SchemaField::boolean("showBanner")
                .with_title("Show Banner")
                .with_description("Toggle the display of the InfoBanner on the website.")
                .with_initial(json!(true)),
            SchemaField::string("orientationTitle")
                .with_title("Orientation Title")
                .with_description("Heading text for the orientation banner")
                .with_initial(json!("NEXT NEW FENCER ORIENTATION"))
                .with_rules(RuleSet::new().required()),
            SchemaField::string("orientationDate")
                .with_title("Orientation Date")
                .with_description("The orientation date to be shown in the banner")
                .with_rules(RuleSet::new().required()),
            SchemaField::string("ctaText")
                .with_title("CTA Text")
                .with_description("Text for the call-to-action button")
                .with_initial(json!("SECURE YOUR SPOT")),
            SchemaField::url("ctaLink")
                .with_title("CTA Link")
                .with_description("Link for the call-to-action button")
                .with_rules(RuleSet::new().required().uri(&["http", "https"], false)),
        ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::schema::validator::validate_document;
    use serde_json::json;

    #[test]
    fn new_banners_start_with_defaults() {
        let schema = info_banner().unwrap();
        let doc = Document::new(&schema);
        assert_eq!(doc.get("showBanner"), Some(&json!(true)));
        assert_eq!(
            doc.get("orientationTitle"),
            Some(&json!("NEXT NEW FENCER ORIENTATION"))
        );
    }

    #[test]
    fn cta_link_requires_an_http_scheme() {
        let schema = info_banner().unwrap();
        let base = json!({
            "orientationTitle": "NEXT NEW FENCER ORIENTATION",
            "orientationDate": "June 7th, 6pm"
        });

        let mut doc = base.clone();
        doc["ctaLink"] = json!("javascript:alert(1)");
        let failures = validate_document(&schema, &doc);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].path, "ctaLink");

        let mut doc = base;
        doc["ctaLink"] = json!("https://example.com/orientation");
        assert!(validate_document(&schema, &doc).is_empty());
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let schema = info_banner().unwrap();
        let failures = validate_document(&schema, &json!({}));
        let paths: Vec<_> = failures.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["orientationTitle", "orientationDate", "ctaLink"]);
    }
}
