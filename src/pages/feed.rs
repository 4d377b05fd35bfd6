// =============================================================================
// Connect-U Web - Feed Page
// =============================================================================
// One candidate card at a time; like/dislike advances to the next one.
// =============================================================================

use std::collections::VecDeque;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, ApiError, HttpTransport, Profile, ProfileFilters, Reaction, ReactionReceipt};
use crate::components::{ErrorDisplay, FilterModal, LoadingSpinner, ProfileCard};
use crate::state::AppState;

/// Profiles waiting to be shown, front first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedQueue {
    profiles: VecDeque<Profile>,
}

impl FeedQueue {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: profiles.into(),
        }
    }

    /// Card on screen.
    pub fn current(&self) -> Option<&Profile> {
        self.profiles.front()
    }

    /// Drop the card on screen and return it.
    pub fn advance(&mut self) -> Option<Profile> {
        self.profiles.pop_front()
    }

    /// Drop `reacted` if it is still the card on screen. A stale completion
    /// for a card that already left leaves the queue alone.
    pub fn finish(&mut self, reacted: &Profile) -> bool {
        if self.current() != Some(reacted) {
            return false;
        }
        self.advance();
        true
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Fetch a fresh batch of candidates.
pub async fn load_feed<T: HttpTransport>(
    client: &ApiClient<T>,
    filters: &ProfileFilters,
) -> Result<FeedQueue, ApiError> {
    let profiles = client.get_profiles(filters).await?;
    log::debug!("Loaded {} profiles", profiles.len());
    Ok(FeedQueue::new(profiles))
}

/// React to `profile`, addressed to its owning user.
pub async fn react_to<T: HttpTransport>(
    client: &ApiClient<T>,
    profile: &Profile,
    reaction: Reaction,
) -> Result<ReactionReceipt, ApiError> {
    let to_user_id = profile
        .user_id()
        .ok_or_else(|| ApiError::InvalidRequest("profile has no user id".to_string()))?;

    client.send_reaction(to_user_id, reaction).await
}

/// Feed page.
#[component]
pub fn FeedPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let queue = RwSignal::new(FeedQueue::default());
    let is_loading = RwSignal::new(true);
    let error_message = RwSignal::new(Option::<String>::None);
    let match_notice = RwSignal::new(Option::<String>::None);
    let in_flight = RwSignal::new(false);

    let load = {
        let client = app_state.client.clone();
        move || {
            let client = client.clone();
            is_loading.set(true);
            error_message.set(None);

            spawn_local(async move {
                match load_feed(&client, &ProfileFilters::default()).await {
                    Ok(fresh) => queue.set(fresh),
                    // Already logged out and redirected.
                    Err(ApiError::SessionExpired) => {}
                    Err(e) => error_message.set(Some(e.to_string())),
                }
                is_loading.set(false);
            });
        }
    };

    // Fetch on mount
    load();

    let on_react = {
        let client = app_state.client.clone();
        let load = load.clone();
        Callback::new(move |reaction: Reaction| {
            if in_flight.get_untracked() {
                return;
            }
            let Some(profile) = queue.with_untracked(|q| q.current().cloned()) else {
                return;
            };
            let client = client.clone();
            let load = load.clone();
            in_flight.set(true);

            spawn_local(async move {
                let result = react_to(&client, &profile, reaction).await;
                in_flight.set(false);

                match result {
                    Ok(receipt) => {
                        match_notice.set(receipt.is_match.then(|| {
                            format!("It's a match! You can now chat with {}.", profile.full_name)
                        }));
                        queue.update(|q| {
                            q.finish(&profile);
                        });
                        if queue.with_untracked(FeedQueue::is_empty) {
                            load();
                        }
                    }
                    Err(e) => {
                        log::warn!("Reaction failed: {}", e);
                        error_message.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    view! {
        <div class="page page-feed">
            <main id="profile-card-container" class="profile-card-container">
                {move || match_notice.get().map(|notice| view! {
                    <div class="match-notice">{notice}</div>
                })}

                {move || error_message.get().map(|message| view! {
                    <ErrorDisplay message=message />
                })}

                {move || {
                    if is_loading.get() {
                        return view! { <LoadingSpinner message="Finding people for you..." /> }.into_any();
                    }

                    match queue.with(|q| q.current().cloned()) {
                        Some(profile) => view! {
                            <ProfileCard profile=profile on_react=on_react busy=in_flight />
                        }.into_any(),
                        None => view! {
                            <p class="feed-empty">"No new profiles right now. Check back later."</p>
                        }.into_any(),
                    }
                }}
            </main>

            <FilterModal />
        </div>
    }
}
