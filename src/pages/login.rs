//! Login page with the demo credential flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entry point of the auth gate: a successful login establishes the session
//! and navigates to the destination preserved in the `from` query parameter
//! (default dashboard). Only one hard-coded credential pair authenticates.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::mock;
use crate::state::session::SessionState;
use crate::util::auth::redirect_target;

/// Lightweight shape check matching the UI validation: something before the
/// `@`, something after, and a dot somewhere in the domain.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Validate the form before the simulated call goes out.
fn validate_credentials_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please fill in all fields");
    }
    if !is_plausible_email(email) {
        return Err("Please enter a valid email address");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_credentials_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        error.set(String::new());
        busy.set(true);

        let destination = redirect_target(query.get_untracked().get("from").as_deref());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match mock::login(&email_value, &password_value).await {
                Ok(auth) => {
                    session.update(|s| s.establish(auth.user, auth.token));
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&destination);
                    }
                }
                Err(e) => {
                    error.set(e.to_string());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, destination);
        }
    };

    view! {
        <div class="auth-page">
            <a class="auth-page__back" href="/">
                "← Back to Home"
            </a>

            <div class="auth-card">
                <header class="auth-card__header">
                    <h1>"Welcome Back"</h1>
                    <p>"Sign in to your Rwanda Land Registry account"</p>
                </header>

                <div class="auth-card__body">
                    <Show when=move || !error.get().is_empty()>
                        <div class="alert alert--error">
                            <p class="alert__title">"Authentication Failed"</p>
                            <p>{move || error.get()}</p>
                        </div>
                    </Show>

                    <div class="alert alert--info">
                        <p class="alert__title">"Demo Credentials"</p>
                        <p>
                            "Email: " <code>{mock::DEMO_EMAIL}</code> " | Password: "
                            <code>{mock::DEMO_PASSWORD}</code>
                        </p>
                    </div>

                    <form class="auth-form" on:submit=on_submit>
                        <label class="auth-form__label">
                            "Email Address *"
                            <input
                                class="auth-form__input"
                                type="email"
                                placeholder="Enter your email address"
                                prop:value=move || email.get()
                                on:input=move |ev| {
                                    email.set(event_target_value(&ev));
                                    error.set(String::new());
                                }
                                disabled=move || busy.get()
                            />
                        </label>

                        <label class="auth-form__label">
                            "Password *"
                            <div class="auth-form__password">
                                <input
                                    class="auth-form__input"
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    placeholder="Enter your password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| {
                                        password.set(event_target_value(&ev));
                                        error.set(String::new());
                                    }
                                    disabled=move || busy.get()
                                />
                                <button
                                    class="auth-form__reveal"
                                    type="button"
                                    on:click=move |_| show_password.update(|v| *v = !*v)
                                    disabled=move || busy.get()
                                >
                                    {move || if show_password.get() { "Hide" } else { "Show" }}
                                </button>
                            </div>
                        </label>

                        <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Signing In..." } else { "Sign In to Account" }}
                        </button>
                    </form>

                    <p class="auth-card__alt">
                        "New to the platform? " <a href="/register">"Create new account"</a>
                    </p>
                </div>
            </div>

            <p class="auth-page__footer">"© 2024 Rwanda Land Registry System. All rights reserved."</p>
        </div>
    }
}
