//! Registration page with role selection and a live password strength meter.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::net::types::{NewAccount, Role};
use crate::util::password;

/// Role choices shown as a radio group: `(role, description)`.
fn role_options() -> [(Role, &'static str); 3] {
    [
        (Role::Citizen, "Individual land owner or buyer"),
        (Role::Official, "Rwanda Land Authority staff"),
        (Role::Notary, "Legal professional for land transactions"),
    ]
}

/// Gate submission on the confirmation and strength rules.
fn validate_registration(pass: &str, confirm: &str, score: u8) -> Result<(), &'static str> {
    if pass != confirm {
        return Err("Passwords do not match");
    }
    if !password::meets_minimum(score) {
        return Err("Please use a stronger password");
    }
    Ok(())
}

/// Width of the strength meter fill, as a CSS percentage string.
fn meter_width(score: u8) -> String {
    format!("{}%", u32::from(score.min(5)) * 20)
}

fn meter_class(score: u8) -> &'static str {
    match score {
        0 => "strength-meter__fill",
        1 => "strength-meter__fill strength-meter__fill--weak",
        2 => "strength-meter__fill strength-meter__fill--fair",
        3 => "strength-meter__fill strength-meter__fill--good",
        4 => "strength-meter__fill strength-meter__fill--strong",
        _ => "strength-meter__fill strength-meter__fill--very-strong",
    }
}

fn label_class(score: u8) -> &'static str {
    if score <= 2 {
        "strength-label strength-label--weak"
    } else if score == 3 {
        "strength-label strength-label--fair"
    } else {
        "strength-label strength-label--strong"
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Citizen);
    let pass = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let show_pass = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let score = Memo::new(move |_| password::strength(&pass.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        if let Err(message) = validate_registration(&pass.get(), &confirm.get(), score.get()) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);

        let account = NewAccount {
            name: name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: pass.get(),
            role: role.get(),
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::mock::register(&account).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
                Err(_) => {
                    error.set("Registration failed. Please try again.".to_owned());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = account;
        }
    };

    let role_radio = move |(option, description): (Role, &'static str)| {
        let selected = move || role.get() == option;
        view! {
            <label class="role-option" class:role-option--selected=selected>
                <input
                    type="radio"
                    name="role"
                    value=option.as_key()
                    prop:checked=selected
                    on:change=move |_| role.set(option)
                />
                <span class="role-option__label">{option.label()}</span>
                <span class="role-option__description">{description}</span>
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <a class="auth-page__back" href="/">
                "← Back to Home"
            </a>

            <div class="auth-card">
                <header class="auth-card__header">
                    <h1>"Join Rwanda Land Registry"</h1>
                    <p>"Create your account to manage land records"</p>
                </header>

                <div class="auth-card__body">
                    <Show when=move || !error.get().is_empty()>
                        <div class="alert alert--error">
                            <p>{move || error.get()}</p>
                        </div>
                    </Show>

                    <form class="auth-form" on:submit=on_submit>
                        <label class="auth-form__label">
                            "Full Name *"
                            <input
                                class="auth-form__input"
                                type="text"
                                placeholder="Enter your full name"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>

                        <label class="auth-form__label">
                            "Email Address *"
                            <input
                                class="auth-form__input"
                                type="email"
                                placeholder="Enter your email address"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>

                        <fieldset class="auth-form__roles">
                            <legend>"Account Type *"</legend>
                            {role_options().into_iter().map(role_radio).collect_view()}
                        </fieldset>

                        <label class="auth-form__label">
                            "Password *"
                            <div class="auth-form__password">
                                <input
                                    class="auth-form__input"
                                    type=move || if show_pass.get() { "text" } else { "password" }
                                    placeholder="Create a strong password"
                                    prop:value=move || pass.get()
                                    on:input=move |ev| pass.set(event_target_value(&ev))
                                />
                                <button
                                    class="auth-form__reveal"
                                    type="button"
                                    on:click=move |_| show_pass.update(|v| *v = !*v)
                                >
                                    {move || if show_pass.get() { "Hide" } else { "Show" }}
                                </button>
                            </div>
                        </label>

                        <Show when=move || !pass.get().is_empty()>
                            <div class="strength-meter">
                                <div class="strength-meter__row">
                                    <span>"Password strength:"</span>
                                    <span class=move || label_class(score.get())>
                                        {move || password::label(score.get())}
                                    </span>
                                </div>
                                <div class="strength-meter__track">
                                    <div
                                        class=move || meter_class(score.get())
                                        style:width=move || meter_width(score.get())
                                    ></div>
                                </div>
                            </div>
                        </Show>

                        <label class="auth-form__label">
                            "Confirm Password *"
                            <input
                                class="auth-form__input"
                                type="password"
                                placeholder="Confirm your password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </label>

                        <Show when=move || !confirm.get().is_empty()>
                            <p class="auth-form__match">
                                {move || {
                                    if pass.get() == confirm.get() {
                                        "Passwords match"
                                    } else {
                                        "Passwords don't match"
                                    }
                                }}
                            </p>
                        </Show>

                        <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Creating Account..." } else { "Create Account" }}
                        </button>
                    </form>

                    <p class="auth-card__alt">
                        "Already have an account? " <a href="/login">"Sign in here"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
