//! Modal presenting the full detail of one land record.
//!
//! DESIGN
//! ======
//! Search results carry a slimmer projection than the owner dashboard, so
//! every descriptive field renders through a dash fallback instead of
//! hiding its row.

#[cfg(test)]
#[path = "land_details_modal_test.rs"]
mod land_details_modal_test;

use leptos::prelude::*;

use crate::net::types::LandRecord;
use crate::util::dates;

/// Render an optional descriptive field, falling back to an em-dash.
fn detail(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => "—".to_owned(),
    }
}

fn status_text(verified: bool) -> &'static str {
    if verified { "Verified" } else { "Pending Verification" }
}

/// Full-screen modal with the complete record.
#[component]
pub fn LandDetailsModal(land: LandRecord, on_close: Callback<()>) -> impl IntoView {
    let registered = dates::format_long(&land.created_at);
    let updated = dates::format_long(&land.last_updated);

    let on_print = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.print();
            }
        }
    };

    let document_url = land.document_url.clone();
    let on_download = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(url) = document_url.as_deref() {
                log::info!("download requested: {url}");
            }
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message("Document download started!");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &document_url;
        }
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <header class="modal__header">
                    <div>
                        <h2>"Land Record Details"</h2>
                        <p class="modal__subtitle">
                            {land.title_number.clone()} " · " {land.location.clone()}
                        </p>
                    </div>
                    <span class="modal__status">{status_text(land.verified)}</span>
                    <button class="modal__close" on:click=move |_| on_close.run(()) aria-label="Close">
                        "✕"
                    </button>
                </header>

                <div class="modal__body">
                    <section class="modal__section">
                        <h4>"Basic Information"</h4>
                        <dl>
                            <div class="modal__row">
                                <dt>"Owner"</dt>
                                <dd>{land.owner_name.clone()}</dd>
                            </div>
                            <div class="modal__row">
                                <dt>"Area"</dt>
                                <dd>{format!("{} m²", land.area)}</dd>
                            </div>
                            <div class="modal__row">
                                <dt>"Registered"</dt>
                                <dd>{registered}</dd>
                            </div>
                            <div class="modal__row">
                                <dt>"Last Updated"</dt>
                                <dd>{updated}</dd>
                            </div>
                            <div class="modal__row">
                                <dt>"Estimated Value"</dt>
                                <dd>{land.estimated_value.clone()}</dd>
                            </div>
                        </dl>
                    </section>

                    <section class="modal__section">
                        <h4>"Land Details"</h4>
                        <dl>
                            <div class="modal__row">
                                <dt>"Land Use"</dt>
                                <dd>{detail(land.land_use.as_deref())}</dd>
                            </div>
                            <div class="modal__row">
                                <dt>"Soil Type"</dt>
                                <dd>{detail(land.soil_type.as_deref())}</dd>
                            </div>
                            <div class="modal__row">
                                <dt>"Zoning"</dt>
                                <dd>{detail(land.zoning.as_deref())}</dd>
                            </div>
                        </dl>
                    </section>

                    <section class="modal__section">
                        <h4>"Location"</h4>
                        <dl>
                            <div class="modal__row">
                                <dt>"Coordinates"</dt>
                                <dd>{detail(land.coordinates.as_deref())}</dd>
                            </div>
                            <div class="modal__row">
                                <dt>"Boundaries"</dt>
                                <dd>{detail(land.boundaries.as_deref())}</dd>
                            </div>
                        </dl>
                    </section>

                    <section class="modal__section">
                        <h4>"Registration"</h4>
                        <dl>
                            <div class="modal__row">
                                <dt>"Registered By"</dt>
                                <dd>{detail(land.registered_by.as_deref())}</dd>
                            </div>
                            <div class="modal__row">
                                <dt>"Document"</dt>
                                <dd>{detail(land.document_url.as_deref())}</dd>
                            </div>
                        </dl>
                    </section>
                </div>

                <footer class="modal__actions">
                    <button class="btn" on:click=on_download>
                        "Download Document"
                    </button>
                    <button class="btn" on:click=on_print>
                        "Print"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </footer>
            </div>
        </div>
    }
}
