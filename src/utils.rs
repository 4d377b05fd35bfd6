// =============================================================================
// Connect-U Web - DOM Utilities
// =============================================================================

/// Navigate to a new URL (full page reload).
pub fn navigate_to(url: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.location().set_href(url).is_err() {
                log::error!("Navigation to {} was refused", url);
            }
        }
        None => log::error!("No window object available"),
    }
}
