// =============================================================================
// Connect-U Web - Filter Modal
// =============================================================================

use leptos::prelude::*;

use crate::state::AppState;

/// Feed filter dialog. Opens from the header search button; closes from the
/// close button or a click on the backdrop.
#[component]
pub fn FilterModal() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let open = app_state.filter_modal_open;
    let backdrop_state = app_state.clone();
    let close_state = app_state;

    view! {
        <div
            id="filter-modal"
            class=move || if open.get() { "modal visible" } else { "modal" }
            on:click=move |_| backdrop_state.close_filters()
        >
            // Clicks inside the dialog must not reach the backdrop.
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <button
                    type="button"
                    class="modal-close-btn"
                    aria-label="Close"
                    on:click=move |_| close_state.close_filters()
                >
                    "✕"
                </button>
                <h2 class="modal-title">"Filters"</h2>
                <p class="modal-note">"Search filters are not available yet."</p>
            </div>
        </div>
    }
}
