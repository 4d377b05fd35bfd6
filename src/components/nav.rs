// =============================================================================
// Connect-U Web - Site Navigation
// =============================================================================
// Header shown on every page. Guests get a sign-in link; members get their
// avatar plus search and logout buttons.
// =============================================================================

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;

use crate::components::InlineLoader;
use crate::pages::Page;
use crate::state::{resolve_header, AppState, HeaderState};

/// Navigation bar. Resolves the header variant once on mount.
#[component]
pub fn SiteNav() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let header = app_state.header;
    let location = use_location();
    let current_page = Memo::new(move |_| Page::from_path(&location.pathname.get()));

    if header.get_untracked() == HeaderState::Loading {
        let client = app_state.client.clone();
        spawn_local(async move {
            header.set(resolve_header(&client).await);
        });
    }

    view! {
        <nav class="site-nav">
            <a
                href=Page::Feed.path()
                class="nav-logo"
                class:active=move || current_page.get() == Some(Page::Feed)
            >
                "Connect-U"
            </a>

            <div id="nav-right" class="nav-right">
                {move || {
                    let app_state = expect_context::<AppState>();

                    match header.get() {
                        HeaderState::Member(member) => {
                            let logout_state = app_state.clone();
                            let filter_state = app_state;

                            view! {
                                <div class="user-nav">
                                    <img
                                        class="user-avatar"
                                        src=member.avatar_url
                                        alt=member.full_name.clone()
                                        title=member.full_name
                                    />
                                    <button
                                        id="search-btn"
                                        class="nav-btn"
                                        on:click=move |_| filter_state.open_filters()
                                    >
                                        "Search"
                                    </button>
                                    <button
                                        id="logout-btn"
                                        class="nav-btn logout"
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            logout_state.logout();
                                        }
                                    >
                                        "Log Out"
                                    </button>
                                </div>
                            }.into_any()
                        }
                        HeaderState::Loading => view! { <InlineLoader /> }.into_any(),
                        HeaderState::Guest | HeaderState::SignedOut => view! {
                            <div class="guest-nav">
                                <a
                                    href=Page::Login.path()
                                    class="nav-cta"
                                    class:active=move || current_page.get() == Some(Page::Login)
                                >
                                    "Sign In"
                                </a>
                            </div>
                        }.into_any(),
                    }
                }}
            </div>
        </nav>
    }
}
