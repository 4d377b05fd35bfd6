// =============================================================================
// Connect-U Web - Global Application State
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. Header State
// 3. App State
// 4. Header Bootstrap
// =============================================================================

use leptos::prelude::*;

use crate::api::{ApiClient, HttpTransport, Profile};
use crate::config::AppConfig;

// -----------------------------------------------------------------------------
// 2. Header State
// -----------------------------------------------------------------------------

/// What the authenticated header shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberHeader {
    pub full_name: String,
    pub avatar_url: String,
}

impl From<&Profile> for MemberHeader {
    fn from(profile: &Profile) -> Self {
        Self {
            full_name: profile.full_name.clone(),
            avatar_url: profile.avatar_url(),
        }
    }
}

/// Which header variant to render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HeaderState {
    /// Token present, own profile still loading.
    #[default]
    Loading,
    Guest,
    Member(MemberHeader),
    /// The profile fetch failed and the session was dropped.
    SignedOut,
}

// -----------------------------------------------------------------------------
// 3. App State
// -----------------------------------------------------------------------------

/// Global application state provided via Leptos context.
#[derive(Clone, Debug)]
pub struct AppState {
    /// API client; owns the session handle.
    pub client: ApiClient,

    /// Header variant.
    pub header: RwSignal<HeaderState>,

    /// Whether the filter dialog is visible.
    pub filter_modal_open: RwSignal<bool>,
}

impl AppState {
    /// Create a new app state instance.
    pub fn new() -> Self {
        let config = AppConfig::from_env();
        let client = ApiClient::new(config.api_url);

        let initial = if client.session().is_authenticated() {
            HeaderState::Loading
        } else {
            HeaderState::Guest
        };

        Self {
            client,
            header: RwSignal::new(initial),
            filter_modal_open: RwSignal::new(false),
        }
    }

    pub fn open_filters(&self) {
        self.filter_modal_open.set(true);
    }

    pub fn close_filters(&self) {
        self.filter_modal_open.set(false);
    }

    /// Drop the session and go to the login page.
    pub fn logout(&self) {
        self.header.set(HeaderState::SignedOut);
        self.client.session().logout();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// 4. Header Bootstrap
// -----------------------------------------------------------------------------

/// Decide the header variant for this page load.
///
/// Without a token no request is made. With one, the caller's profile is
/// fetched; any failure logs the session out.
pub async fn resolve_header<T: HttpTransport>(client: &ApiClient<T>) -> HeaderState {
    if !client.session().is_authenticated() {
        return HeaderState::Guest;
    }

    match client.get_my_profile().await {
        Ok(profile) => HeaderState::Member(MemberHeader::from(&profile)),
        Err(e) => {
            log::error!("Failed to render navigation: {}", e);
            client.session().logout();
            HeaderState::SignedOut
        }
    }
}
