//! Per-resource pages
//!
//! Thin instantiations of [`ResourcePanel`], one per admin section. Each
//! page supplies its schema and a blurb; everything else is the shared
//! lifecycle.

use dioxus::prelude::*;

use salon_schema::catalog;

use crate::pages::resource::ResourcePanel;

/// Hero banner management.
#[component]
pub fn BannerPage() -> Element {
    rsx! {
        ResourcePanel {
            schema: catalog::banner(),
            description: Some(
                "The hero banner at the top of the landing page: heading, call to action and hero image.".to_string(),
            ),
        }
    }
}

/// Showcase service cards.
#[component]
pub fn ServicePage() -> Element {
    rsx! {
        ResourcePanel {
            schema: catalog::service(),
            description: Some(
                "Cards of the \"Our Awesome Services\" grid. The price here is display text, e.g. \"$20\".".to_string(),
            ),
        }
    }
}

/// Structured service catalog.
#[component]
pub fn ServiceItemPage() -> Element {
    rsx! {
        ResourcePanel {
            schema: catalog::service_item(),
            description: Some(
                "Structured catalog entries with numeric price and duration. Listed cheapest first.".to_string(),
            ),
        }
    }
}

/// Customer testimonials.
#[component]
pub fn TestimonialPage() -> Element {
    rsx! {
        ResourcePanel {
            schema: catalog::testimonial(),
            description: Some(
                "Customer quotes. Only approved testimonials appear on the site.".to_string(),
            ),
        }
    }
}

/// Navigation bar entries.
#[component]
pub fn NavbarItemPage() -> Element {
    rsx! {
        ResourcePanel {
            schema: catalog::navbar_item(),
            description: Some(
                "Entries of the site navigation bar, ordered by display order.".to_string(),
            ),
        }
    }
}

/// Advertising statistics.
#[component]
pub fn AdvertisePage() -> Element {
    rsx! {
        ResourcePanel {
            schema: catalog::advertise(),
            description: Some(
                "The statistics strip: happy customers, years of experience, branches.".to_string(),
            ),
        }
    }
}

/// Contact book.
#[component]
pub fn ContactPage() -> Element {
    rsx! {
        ResourcePanel {
            schema: catalog::contact(),
            description: Some("Contact book of the salon.".to_string()),
        }
    }
}

/// Stored login records.
#[component]
pub fn LoginPage() -> Element {
    rsx! {
        ResourcePanel {
            schema: catalog::login(),
            description: Some(
                "Stored login credential records. Passwords never display.".to_string(),
            ),
        }
    }
}

/// Stored registration records.
#[component]
pub fn RegisterPage() -> Element {
    rsx! {
        ResourcePanel {
            schema: catalog::register(),
            description: Some(
                "Stored registration records. Passwords never display.".to_string(),
            ),
        }
    }
}
