//! Application shell state
//!
//! Navigation and session state for the admin console. Everything that one
//! resource page owns (collection, selection, request status) lives in that
//! page's own `PageModel`; the shell only knows which section is active and
//! who is signed in.

use dioxus::prelude::*;

use salon_client::{ApiClient, Session};
use salon_schema::{ResourceSchema, catalog};

// ============================================================================
// Section Navigation
// ============================================================================

/// Sections of the admin console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Overview landing page.
    #[default]
    Dashboard,
    /// Hero banner management.
    Banner,
    /// Showcase service cards.
    Service,
    /// Structured service catalog.
    ServiceItem,
    /// Customer testimonials.
    Testimonial,
    /// Navigation bar entries.
    NavbarItem,
    /// Advertising statistics.
    Advertise,
    /// Contact book.
    Contact,
    /// Stored login records.
    Login,
    /// Stored registration records.
    Register,
    /// Session sign-in form.
    SignIn,
}

impl Section {
    /// The nine resource sections, in sidebar order.
    pub fn resources() -> &'static [Section] {
        &[
            Section::Banner,
            Section::Service,
            Section::ServiceItem,
            Section::Testimonial,
            Section::NavbarItem,
            Section::Advertise,
            Section::Contact,
            Section::Login,
            Section::Register,
        ]
    }

    /// Display name for navigation.
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Banner => "Banners",
            Section::Service => "Services",
            Section::ServiceItem => "Service Catalog",
            Section::Testimonial => "Testimonials",
            Section::NavbarItem => "Navbar",
            Section::Advertise => "Advertising Stats",
            Section::Contact => "Contacts",
            Section::Login => "Logins",
            Section::Register => "Registrations",
            Section::SignIn => "Sign In",
        }
    }

    /// Icon for navigation.
    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "🏠",
            Section::Banner => "🖼️",
            Section::Service => "💅",
            Section::ServiceItem => "📋",
            Section::Testimonial => "💬",
            Section::NavbarItem => "🧭",
            Section::Advertise => "📈",
            Section::Contact => "📇",
            Section::Login => "🔑",
            Section::Register => "📝",
            Section::SignIn => "🔐",
        }
    }

    /// The resource schema this section manages, if it is a resource
    /// section.
    pub fn schema(&self) -> Option<ResourceSchema> {
        match self {
            Section::Banner => Some(catalog::banner()),
            Section::Service => Some(catalog::service()),
            Section::ServiceItem => Some(catalog::service_item()),
            Section::Testimonial => Some(catalog::testimonial()),
            Section::NavbarItem => Some(catalog::navbar_item()),
            Section::Advertise => Some(catalog::advertise()),
            Section::Contact => Some(catalog::contact()),
            Section::Login => Some(catalog::login()),
            Section::Register => Some(catalog::register()),
            Section::Dashboard | Section::SignIn => None,
        }
    }

    /// One-line description for dashboard cards.
    pub fn description(&self) -> &'static str {
        match self {
            Section::Dashboard => "Overview of the marketing site content.",
            Section::Banner => "Hero banner shown at the top of the landing page.",
            Section::Service => "Showcase cards for the services grid.",
            Section::ServiceItem => "Structured catalog entries with price and duration.",
            Section::Testimonial => "Customer quotes shown on the site.",
            Section::NavbarItem => "Entries of the site navigation bar.",
            Section::Advertise => "Happy customers, years of experience, branches.",
            Section::Contact => "Contact book of the salon.",
            Section::Login => "Stored login credential records.",
            Section::Register => "Stored registration records.",
            Section::SignIn => "Sign in to the admin console.",
        }
    }
}

// ============================================================================
// Shell State
// ============================================================================

/// Top-level UI state: active section and session.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellState {
    /// Currently active section.
    pub active_section: Section,
    /// The signed-in session, if any.
    pub session: Option<Session>,
    /// Backend base URL.
    pub base_url: String,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            active_section: Section::Dashboard,
            session: None,
            base_url: salon_client::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ShellState {
    /// Create the initial shell state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigate to a section.
    pub fn navigate(&mut self, section: Section) {
        self.active_section = section;
    }

    /// Store a session after a successful sign-in.
    pub fn sign_in(&mut self, session: Session) {
        tracing::info!(user = %session.user.email, "signed in");
        self.session = Some(session);
    }

    /// Drop the session.
    pub fn sign_out(&mut self) {
        self.session = None;
    }

    /// Whether a session is active.
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Email of the signed-in user, if any.
    pub fn user_email(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user.email.as_str())
    }

    /// Build an API client for the current base URL and session. With a
    /// session present, every request carries the bearer token.
    pub fn api_client(&self) -> ApiClient {
        let client = ApiClient::new().with_base_url(self.base_url.clone());
        match &self.session {
            Some(session) => client.with_token(session.token.clone()),
            None => client,
        }
    }
}

// ============================================================================
// Global State
// ============================================================================

/// Global shell state signal.
pub static SHELL_STATE: GlobalSignal<ShellState> = Signal::global(ShellState::new);

/// Build an API client from the current shell state.
pub fn shell_api_client() -> ApiClient {
    SHELL_STATE.read().api_client()
}

// ============================================================================
// Tests
// ============================================================================
