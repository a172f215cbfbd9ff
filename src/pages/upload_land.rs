//! Land-upload page: register a new parcel with a supporting document.
//!
//! The submission is simulated; a success message shows briefly before the
//! page returns to the dashboard.

#[cfg(test)]
#[path = "upload_land_test.rs"]
mod upload_land_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::NewLandRecord;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

const SUCCESS_MESSAGE: &str = "Land record uploaded successfully! It will be verified soon.";
const FAILURE_MESSAGE: &str = "Failed to upload land record. Please try again.";

/// Milliseconds the success message stays up before returning to the
/// dashboard.
const REDIRECT_DELAY_MS: u64 = 2000;

/// Validate the form into a submission payload.
fn validate_upload(
    title_number: &str,
    location: &str,
    area: &str,
    document_name: &str,
) -> Result<NewLandRecord, &'static str> {
    let title_number = title_number.trim();
    let location = location.trim();
    let area = area.trim();
    let document_name = document_name.trim();
    if title_number.is_empty() || location.is_empty() || area.is_empty() || document_name.is_empty()
    {
        return Err("Please fill in all fields");
    }
    match area.parse::<u64>() {
        Ok(value) if value >= 1 => {}
        _ => return Err("Enter a valid area in square meters"),
    }
    Ok(NewLandRecord {
        title_number: title_number.to_owned(),
        location: location.to_owned(),
        area: area.to_owned(),
        document_name: Some(document_name.to_owned()),
    })
}

#[component]
pub fn UploadLandPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let pathname = use_location().pathname;
    install_unauth_redirect(session, pathname, use_navigate());

    let title_number = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let area = RwSignal::new(String::new());
    let document_name = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let reset_form = move || {
        title_number.set(String::new());
        location.set(String::new());
        area.set(String::new());
        document_name.set(String::new());
    };

    let on_document_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let name = input
                .files()
                .and_then(|files| files.get(0))
                .map(|file| file.name())
                .unwrap_or_default();
            document_name.set(name);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        success.set(String::new());
        error.set(String::new());

        let submission = match validate_upload(
            &title_number.get(),
            &location.get(),
            &area.get(),
            &document_name.get(),
        ) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::mock::upload_land(&submission).await {
                Ok(()) => {
                    success.set(SUCCESS_MESSAGE.to_owned());
                    reset_form();
                    gloo_timers::future::sleep(std::time::Duration::from_millis(REDIRECT_DELAY_MS))
                        .await;
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/dashboard");
                    }
                }
                Err(_) => {
                    error.set(FAILURE_MESSAGE.to_owned());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = submission;
        }
    };

    view! {
        <div class="upload-page">
            <header class="upload-page__header">
                <a class="upload-page__back" href="/dashboard">
                    "← Back to Dashboard"
                </a>
                <h1>"Register New Land"</h1>
                <p>
                    "Fill in the land details to register a new property record in the Rwanda \
                     Land Registry"
                </p>
            </header>

            <div class="upload-card">
                <Show when=move || !success.get().is_empty()>
                    <div class="alert alert--success">
                        <p>{move || success.get()}</p>
                        <p class="alert__hint">"Redirecting to dashboard..."</p>
                    </div>
                </Show>

                <Show when=move || !error.get().is_empty()>
                    <div class="alert alert--error">
                        <p>{move || error.get()}</p>
                    </div>
                </Show>

                <form class="upload-form" on:submit=on_submit>
                    <label class="upload-form__label">
                        "Title Number *"
                        <input
                            class="upload-form__input"
                            type="text"
                            placeholder="e.g., TL001234"
                            prop:value=move || title_number.get()
                            on:input=move |ev| title_number.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="upload-form__label">
                        "Location *"
                        <input
                            class="upload-form__input"
                            type="text"
                            placeholder="e.g., Kigali, Nyarugenge District"
                            prop:value=move || location.get()
                            on:input=move |ev| location.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="upload-form__label">
                        "Land Area (m²) *"
                        <input
                            class="upload-form__input"
                            type="number"
                            min="1"
                            placeholder="Enter area in square meters"
                            prop:value=move || area.get()
                            on:input=move |ev| area.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="upload-form__label upload-form__label--file">
                        "Land Document *"
                        <input type="file" accept=".pdf,.jpg,.jpeg,.png,.doc,.docx" on:change=on_document_change/>
                        <span class="upload-form__file-name">
                            {move || {
                                let name = document_name.get();
                                if name.is_empty() { "Click to upload document".to_owned() } else { name }
                            }}
                        </span>
                        <span class="upload-form__file-hint">"PDF, JPG, PNG, DOC (Max 10MB)"</span>
                    </label>

                    <div class="upload-form__actions">
                        <a class="btn" href="/dashboard">
                            "Cancel"
                        </a>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Uploading..." } else { "Register Land" }}
                        </button>
                    </div>
                </form>

                <div class="alert alert--info upload-card__note">
                    <p class="alert__title">"Important Information"</p>
                    <p>
                        "All land records undergo verification by Rwanda Land Authority. You \
                         will be notified once your registration is approved."
                    </p>
                </div>
            </div>
        </div>
    }
}
