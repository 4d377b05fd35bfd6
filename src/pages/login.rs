// =============================================================================
// Connect-U Web - Login Page
// =============================================================================

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, ApiError, HttpTransport};
use crate::config::HOME_PATH;
use crate::state::AppState;

/// Exchange credentials, persist the tokens, and go home.
///
/// On failure nothing is stored and no navigation happens.
pub async fn submit_login<T: HttpTransport>(
    client: &ApiClient<T>,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let tokens = client.login(email, password).await?;
    client.session().save(&tokens);
    log::info!("Signed in, redirecting home");
    client.session().redirect(HOME_PATH);
    Ok(())
}

/// Sign-in page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        loading.set(true);

        let client = app_state.client.clone();
        let email_val = email.get_untracked();
        let password_val = password.get_untracked();

        spawn_local(async move {
            let result = submit_login(&client, &email_val, &password_val).await;
            loading.set(false);

            if let Err(e) = result {
                error.set(e.to_string());
            }
        });
    };

    view! {
        <div class="page page-login">
            <div class="login-card">
                <h1 class="login-title">"Sign In"</h1>

                <form id="login-form" class="login-form" on:submit=on_submit>
                    <div class="form-field">
                        <label class="form-label" for="email">"Email"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            class="form-input"
                            placeholder="you@example.com"
                            required=true
                            prop:value=move || email.get()
                            on:input=move |e| email.set(event_target_value(&e))
                        />
                    </div>

                    <div class="form-field">
                        <label class="form-label" for="password">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            class="form-input"
                            placeholder="••••••••"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |e| password.set(event_target_value(&e))
                        />
                    </div>

                    <p id="error-message" class="form-error">{move || error.get()}</p>

                    <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                        {move || if loading.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
