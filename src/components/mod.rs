// =============================================================================
// Connect-U Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Navigation
// 2. Feed Components
// 3. Common Components
// =============================================================================

pub mod common;
pub mod filter_modal;
pub mod nav;
pub mod profile_card;

pub use common::{ErrorDisplay, InlineLoader, LoadingSpinner};
pub use filter_modal::FilterModal;
pub use nav::SiteNav;
pub use profile_card::ProfileCard;
