// =============================================================================
// Connect-U Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// 3. Router Configuration
// =============================================================================

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::SiteNav;
use crate::pages::{feed::FeedPage, login::LoginPage, not_found::NotFoundPage};
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing. The header sits above every page.
#[component]
pub fn App() -> impl IntoView {
    // Provide global app state
    provide_context(AppState::new());

    // -------------------------------------------------------------------------
    // 3. Router Configuration
    // -------------------------------------------------------------------------
    view! {
        <Router>
            <div class="app-shell">
                <SiteNav />
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=FeedPage />
                    <Route path=path!("/login") view=LoginPage />
                </Routes>
            </div>
        </Router>
    }
}
