//! Salon Admin Console
//!
//! Desktop admin frontend for the beauty salon marketing site.
//!
//! This is the main entry point for the Dioxus Desktop application.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Initialize logging
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .pretty()
        .init();

    tracing::info!("starting salon admin console");

    // Launch the Dioxus desktop application
    salon_ui::launch();
}
