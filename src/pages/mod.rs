// =============================================================================
// Connect-U Web - Page Components
// =============================================================================
// Table of Contents:
// 1. Pages
// 2. Route Table
// =============================================================================

pub mod feed;
pub mod login;
pub mod not_found;

use crate::config::{HOME_PATH, LOGIN_PATH};

// -----------------------------------------------------------------------------
// 2. Route Table
// -----------------------------------------------------------------------------

/// Routed pages. Anything else falls back to the 404 page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Feed,
    Login,
}

impl Page {
    /// Map a pathname to a page. A trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            Some(Page::Feed)
        } else if trimmed == LOGIN_PATH {
            Some(Page::Login)
        } else {
            None
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Feed => HOME_PATH,
            Page::Login => LOGIN_PATH,
        }
    }
}
