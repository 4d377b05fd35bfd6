// =============================================================================
// Connect-U Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Loading Spinner
// 2. Error Display
// =============================================================================

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. Loading Spinner
// -----------------------------------------------------------------------------

/// Block loading spinner.
#[component]
pub fn LoadingSpinner(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class="spinner"></div>
            {message.map(|m| view! { <p class="loading-message">{m}</p> })}
        </div>
    }
}

/// Inline loading indicator.
#[component]
pub fn InlineLoader() -> impl IntoView {
    view! {
        <span class="spinner-small"></span>
    }
}

// -----------------------------------------------------------------------------
// 2. Error Display
// -----------------------------------------------------------------------------

/// Error message display.
#[component]
pub fn ErrorDisplay(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error-display" role="alert">
            <span class="error-message">{message}</span>
        </div>
    }
}
