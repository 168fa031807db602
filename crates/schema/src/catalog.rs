//! The salon resource catalog
//!
//! One schema per admin section of the marketing site. Field sets follow
//! the persisted shapes of the site backend; where the source material
//! carried two conflicting shapes for one concept (the showcase service
//! card vs. the structured catalog entry) they are kept as two distinct
//! resources.

use crate::field::FieldSpec;
use crate::resource::ResourceSchema;
use crate::rules::ValidationRule;

/// Hero banner of the landing page.
pub fn banner() -> ResourceSchema {
    ResourceSchema::new("banner", "banner", "banners", "/api/banners")
        .with_field(
            FieldSpec::text("heading")
                .required()
                .with_rule(ValidationRule::MaxLen(120))
                .with_placeholder("Beauty Salon for Women"),
        )
        .with_field(
            FieldSpec::text("subheading")
                .with_rule(ValidationRule::MaxLen(200))
                .with_placeholder("Experience luxury beauty treatments tailored for you"),
        )
        .with_field(
            FieldSpec::text("cta_button_text")
                .required()
                .with_label("CTA Button Text")
                .with_rule(ValidationRule::MaxLen(40)),
        )
        .with_field(
            FieldSpec::text("cta_button_link")
                .required()
                .with_label("CTA Button Link")
                .with_rule(ValidationRule::Url),
        )
        .with_field(
            FieldSpec::text("hero_image")
                .required()
                .with_rule(ValidationRule::Url)
                .with_placeholder("/images/hero.jpg"),
        )
        .with_field(
            FieldSpec::text("hero_image_alt")
                .with_rule(ValidationRule::MaxLen(120))
                .with_help("Alternative text for screen readers"),
        )
}

/// Showcase service card (image, title, display price, blurb).
pub fn service() -> ResourceSchema {
    ResourceSchema::new("service", "service", "services", "/api/services")
        .with_field(
            FieldSpec::text("title")
                .required()
                .with_rule(ValidationRule::MaxLen(80)),
        )
        .with_field(
            FieldSpec::text("price")
                .required()
                .with_rule(ValidationRule::MaxLen(20))
                .with_help("Display price, e.g. \"$20\""),
        )
        .with_field(
            FieldSpec::text("image")
                .required()
                .with_rule(ValidationRule::Url),
        )
        .with_field(
            FieldSpec::long_text("description")
                .required()
                .with_rule(ValidationRule::MaxLen(400))
                .hidden_in_list(),
        )
}

/// Structured catalog entry with numeric price and duration.
pub fn service_item() -> ResourceSchema {
    ResourceSchema::new("service_item", "service item", "service items", "/api/service-items")
        .with_field(
            FieldSpec::text("name")
                .required()
                .with_rule(ValidationRule::MaxLen(100)),
        )
        .with_field(
            FieldSpec::long_text("description")
                .with_rule(ValidationRule::MaxLen(400))
                .hidden_in_list(),
        )
        .with_field(
            FieldSpec::integer("duration")
                .required()
                .with_rule(ValidationRule::Min(5.0))
                .with_rule(ValidationRule::Max(480.0))
                .with_help("Duration in minutes"),
        )
        .with_field(
            FieldSpec::number("price")
                .required()
                .with_rule(ValidationRule::Min(0.0)),
        )
        .with_field(
            FieldSpec::text("category")
                .required()
                .with_rule(ValidationRule::MaxLen(50)),
        )
        .with_field(FieldSpec::text("image_url").with_rule(ValidationRule::Url))
        .with_field(FieldSpec::boolean("is_active").with_default(true))
        .with_display_sort("price", true)
}

/// Customer testimonial.
pub fn testimonial() -> ResourceSchema {
    ResourceSchema::new("testimonial", "testimonial", "testimonials", "/api/testimonials")
        .with_field(
            FieldSpec::text("author_name")
                .required()
                .with_rule(ValidationRule::MaxLen(100)),
        )
        .with_field(FieldSpec::text("author_title").with_rule(ValidationRule::MaxLen(100)))
        .with_field(
            FieldSpec::long_text("content")
                .required()
                .with_rule(ValidationRule::MaxLen(1000))
                .hidden_in_list(),
        )
        .with_field(
            FieldSpec::integer("rating")
                .with_rule(ValidationRule::Min(1.0))
                .with_rule(ValidationRule::Max(5.0)),
        )
        .with_field(FieldSpec::boolean("is_featured"))
        .with_field(FieldSpec::boolean("is_approved"))
}

/// Navigation bar entry.
pub fn navbar_item() -> ResourceSchema {
    ResourceSchema::new("navbar_item", "navbar item", "navbar items", "/api/navbar-items")
        .with_field(
            FieldSpec::text("name")
                .required()
                .with_rule(ValidationRule::MaxLen(100)),
        )
        .with_field(
            FieldSpec::integer("display_order")
                .required()
                .with_rule(ValidationRule::Min(0.0)),
        )
        .with_field(
            FieldSpec::text("url")
                .with_rule(ValidationRule::Url)
                .with_rule(ValidationRule::MaxLen(255)),
        )
        .with_field(
            FieldSpec::text("icon_class")
                .with_rule(ValidationRule::MaxLen(50))
                .hidden_in_list(),
        )
        .with_field(FieldSpec::boolean("is_active").with_default(true))
        .with_field(FieldSpec::boolean("is_external"))
        .with_display_sort("display_order", true)
}

/// Advertising statistics strip (happy customers / years / branches).
pub fn advertise() -> ResourceSchema {
    ResourceSchema::new("advertise", "advertise entry", "advertise entries", "/api/advertises")
        .with_field(
            FieldSpec::integer("happy_customers")
                .required()
                .with_rule(ValidationRule::Min(0.0)),
        )
        .with_field(
            FieldSpec::integer("years_experience")
                .required()
                .with_rule(ValidationRule::Min(0.0)),
        )
        .with_field(
            FieldSpec::integer("branches")
                .required()
                .with_rule(ValidationRule::Min(0.0)),
        )
}

/// Contact book entry.
pub fn contact() -> ResourceSchema {
    ResourceSchema::new("contact", "contact", "contacts", "/api/contacts")
        .with_field(
            FieldSpec::text("first_name")
                .required()
                .with_rule(ValidationRule::MaxLen(50)),
        )
        .with_field(FieldSpec::text("last_name").with_rule(ValidationRule::MaxLen(50)))
        .with_field(
            FieldSpec::text("email")
                .required()
                .with_rule(ValidationRule::Email)
                .with_rule(ValidationRule::MaxLen(100)),
        )
        .with_field(
            FieldSpec::text("phone_number")
                .with_rule(ValidationRule::MaxLen(20)),
        )
        .with_field(FieldSpec::boolean("is_active"))
        .with_field(FieldSpec::boolean("is_verified"))
}

/// Stored login credential record.
pub fn login() -> ResourceSchema {
    ResourceSchema::new("login", "login", "logins", "/api/logins")
        .with_field(
            FieldSpec::text("email")
                .required()
                .with_rule(ValidationRule::Email),
        )
        .with_field(
            FieldSpec::text("password")
                .required()
                .secret()
                .with_rule(ValidationRule::MinLen(8)),
        )
}

/// Stored registration record with password confirmation.
pub fn register() -> ResourceSchema {
    ResourceSchema::new("register", "registration", "registrations", "/api/registers")
        .with_field(
            FieldSpec::text("email")
                .required()
                .with_rule(ValidationRule::Email),
        )
        .with_field(
            FieldSpec::text("password")
                .required()
                .secret()
                .with_rule(ValidationRule::MinLen(8)),
        )
        .with_field(
            FieldSpec::text("confirm_password")
                .required()
                .secret()
                .with_rule(ValidationRule::matches("password", "passwords must match")),
        )
}

/// Every resource schema, in sidebar order.
pub fn all() -> Vec<ResourceSchema> {
    vec![
        banner(),
        service(),
        service_item(),
        testimonial(),
        navbar_item(),
        advertise(),
        contact(),
        login(),
        register(),
    ]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use salon_core::Record;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_nine_resources() {
        assert_eq!(all().len(), 9);
    }

    #[test]
    fn test_keys_and_paths_are_unique() {
        let schemas = all();
        let keys: HashSet<_> = schemas.iter().map(|s| s.key.as_str()).collect();
        let paths: HashSet<_> = schemas.iter().map(|s| s.base_path.as_str()).collect();
        assert_eq!(keys.len(), schemas.len());
        assert_eq!(paths.len(), schemas.len());
    }

    #[test]
    fn test_every_schema_has_fields_and_api_path() {
        for schema in all() {
            assert!(!schema.fields.is_empty(), "{} has no fields", schema.key);
            assert!(
                schema.base_path.starts_with("/api/"),
                "{} path {} is not under /api/",
                schema.key,
                schema.base_path
            );
        }
    }

    #[test]
    fn test_credential_schemas_mask_passwords() {
        assert_eq!(login().secret_fields(), vec!["password"]);
        assert_eq!(
            register().secret_fields(),
            vec!["password", "confirm_password"]
        );
        // Nothing else in the catalog is secret.
        for schema in [banner(), service(), testimonial(), contact()] {
            assert!(schema.secret_fields().is_empty(), "{}", schema.key);
        }
    }

    #[test]
    fn test_service_and_service_item_are_distinct() {
        let card = service();
        let item = service_item();
        assert_ne!(card.base_path, item.base_path);
        // The card's price is display text; the catalog entry's is numeric.
        assert!(card.field("price").unwrap().field_type.is_textual());
        assert!(item.field("price").unwrap().field_type.is_numeric());
    }

    #[test]
    fn test_service_items_sort_by_price_for_display() {
        let hint = service_item().display_sort.unwrap();
        assert_eq!(hint.field, "price");
        assert!(hint.ascending);
    }

    #[test]
    fn test_banner_rejects_blank_heading() {
        let schema = banner();
        let mut draft = schema.empty_draft();
        draft.set("cta_button_text", "Get an Appointment");
        draft.set("cta_button_link", "/appointments");
        draft.set("hero_image", "/images/hero.jpg");

        let report = schema.validate_draft(&draft);
        assert_eq!(report.error_for("heading"), Some("Heading is required"));
    }

    #[test]
    fn test_register_requires_matching_passwords() {
        let schema = register();
        let draft = Record::new()
            .with("email", "owner@salon.com")
            .with("password", "rosewater1")
            .with("confirm_password", "rosewater2");

        let report = schema.validate_draft(&draft);
        assert_eq!(
            report.error_for("confirm_password"),
            Some("passwords must match")
        );
    }

    #[test]
    fn test_advertise_accepts_valid_stats() {
        let schema = advertise();
        let draft = Record::new()
            .with("happy_customers", 1200)
            .with("years_experience", 15)
            .with("branches", 3);
        assert!(schema.validate_draft(&draft).is_valid());

        let negative = Record::new()
            .with("happy_customers", -1)
            .with("years_experience", 15)
            .with("branches", 3);
        assert!(schema.validate_draft(&negative).has_errors());
    }

    #[test]
    fn test_navbar_defaults_active() {
        let draft = navbar_item().empty_draft();
        assert_eq!(draft.get_bool("is_active"), Some(true));
        assert_eq!(draft.get_bool("is_external"), Some(false));
    }
}
