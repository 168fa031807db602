//! Pages of the admin console

pub mod dashboard;
pub mod resource;
pub mod resources;
pub mod sign_in;

// Re-exports for convenience
pub use dashboard::DashboardPage;
pub use resource::{ResourcePanel, ResourcePanelProps};
pub use resources::{
    AdvertisePage, BannerPage, ContactPage, LoginPage, NavbarItemPage, RegisterPage,
    ServiceItemPage, ServicePage, TestimonialPage,
};
pub use sign_in::SignInPage;
