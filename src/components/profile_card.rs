// =============================================================================
// Connect-U Web - Profile Card
// =============================================================================

use leptos::prelude::*;

use crate::api::{InterestRef, Profile, Reaction};

/// Secondary line under the name, e.g. "29 · Kazan · Looking".
pub fn profile_subtitle(profile: &Profile) -> Option<String> {
    let parts: Vec<String> = [
        profile.age.map(|age| age.to_string()),
        profile.city.clone().filter(|city| !city.trim().is_empty()),
        profile.status.map(|status| status.label().to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" · "))
    }
}

/// One candidate with like/dislike actions. Both buttons are disabled while
/// `busy` is set.
#[component]
pub fn ProfileCard(
    profile: Profile,
    on_react: Callback<Reaction>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let avatar_url = profile.avatar_url();
    let subtitle = profile_subtitle(&profile);
    let interests: Vec<String> = profile
        .interests
        .iter()
        .filter_map(InterestRef::name)
        .map(str::to_string)
        .collect();
    let Profile { full_name, bio, .. } = profile;
    let photo_alt = full_name.clone();

    view! {
        <article class="profile-card">
            <img class="profile-photo" src=avatar_url alt=photo_alt />

            <div class="profile-info">
                <h2 class="profile-name">{full_name}</h2>
                {subtitle.map(|s| view! { <p class="profile-meta">{s}</p> })}
                {bio.map(|bio| view! { <p class="profile-bio">{bio}</p> })}
                <ul class="profile-interests">
                    {interests
                        .into_iter()
                        .map(|name| view! { <li class="interest-tag">{name}</li> })
                        .collect_view()}
                </ul>
            </div>

            <div class="profile-actions">
                <button
                    type="button"
                    class="btn btn-dislike"
                    disabled=move || busy.get()
                    on:click=move |_| on_react.run(Reaction::Dislike)
                >
                    "Dislike"
                </button>
                <button
                    type="button"
                    class="btn btn-like"
                    disabled=move || busy.get()
                    on:click=move |_| on_react.run(Reaction::Like)
                >
                    "Like"
                </button>
            </div>
        </article>
    }
}
