//! Land-records search page with verification filtering and result stats.
//!
//! DESIGN
//! ======
//! The search itself is a simulated remote query; filtering and the stats
//! row are client-side derivations from `state::lands`, recomputed whenever
//! the results or the filter selection change.

#[cfg(test)]
#[path = "land_search_test.rs"]
mod land_search_test;

use leptos::prelude::*;

use crate::components::land_card::LandCard;
use crate::components::land_details_modal::LandDetailsModal;
use crate::net::types::LandRecord;
use crate::state::lands::{VerificationFilter, apply_filter, record_stats};

/// A search needs a non-empty trimmed term.
fn validate_search_term(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Header line under "Search Results".
fn results_summary(shown: usize, filter: VerificationFilter, total: usize) -> String {
    let noun = if shown == 1 { "record" } else { "records" };
    if filter == VerificationFilter::All {
        format!("{shown} {noun} found")
    } else {
        format!("{shown} {noun} found ({total} total)")
    }
}

/// Empty-state copy once a search has run.
fn no_results_message() -> &'static str {
    "No land records match your search criteria. Try adjusting your search terms or filters."
}

#[component]
pub fn LandSearchPage() -> impl IntoView {
    let term = RwSignal::new(String::new());
    let filter = RwSignal::new(VerificationFilter::All);
    let results = RwSignal::new(Vec::<LandRecord>::new());
    let loading = RwSignal::new(false);
    let searched = RwSignal::new(false);
    let selected = RwSignal::new(None::<LandRecord>);

    let filtered = Memo::new(move |_| apply_filter(&results.get(), filter.get()));
    let stats = Memo::new(move |_| record_stats(&results.get()));

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(query) = validate_search_term(&term.get()) else {
            return;
        };
        if loading.get() {
            return;
        }
        loading.set(true);
        searched.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            results.set(crate::net::mock::search_lands(&query).await);
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
        }
    };

    let on_clear = move |_| {
        term.set(String::new());
        results.set(Vec::new());
        searched.set(false);
    };

    let on_view_details = Callback::new(move |land: LandRecord| selected.set(Some(land)));
    let on_close = Callback::new(move |()| selected.set(None));

    view! {
        <div class="search-page">
            <header class="search-page__header">
                <h1>"Land Records Search"</h1>
                <p>"Search and verify land records in the Rwanda Land Registry database"</p>
            </header>

            <section class="search-form-card">
                <h2>"Search Criteria"</h2>
                <p>"Enter title number, location, or owner name to search land records"</p>

                <form class="search-form" on:submit=on_search>
                    <input
                        class="search-form__input"
                        type="text"
                        placeholder="Enter title number, location, or owner name..."
                        prop:value=move || term.get()
                        on:input=move |ev| term.set(event_target_value(&ev))
                    />

                    <select
                        class="search-form__filter"
                        on:change=move |ev| {
                            filter.set(VerificationFilter::from_key(&event_target_value(&ev)));
                        }
                        prop:value=move || filter.get().as_key().to_owned()
                    >
                        <option value="all">"All Records"</option>
                        <option value="verified">"Verified Only"</option>
                        <option value="unverified">"Unverified Only"</option>
                    </select>

                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || loading.get() || validate_search_term(&term.get()).is_none()
                    >
                        {move || if loading.get() { "Searching..." } else { "Search" }}
                    </button>

                    <Show when=move || searched.get() || !term.get().is_empty()>
                        <button class="btn" type="button" on:click=on_clear>
                            "Clear"
                        </button>
                    </Show>
                </form>
            </section>

            <Show
                when=move || searched.get()
                fallback=move || {
                    view! {
                        <section class="search-intro">
                            <h2>"Rwanda Land Registry Search"</h2>
                            <p>
                                "Access comprehensive land records information. Search by title \
                                 number, location, or owner name to verify property details and \
                                 ownership history."
                            </p>
                            <div class="search-intro__modes">
                                <div class="search-mode">
                                    <h3>"Title Search"</h3>
                                    <p>"Search by official title number for precise results"</p>
                                </div>
                                <div class="search-mode">
                                    <h3>"Location Search"</h3>
                                    <p>"Find records by district, sector, or property location"</p>
                                </div>
                                <div class="search-mode">
                                    <h3>"Owner Search"</h3>
                                    <p>"Search by property owner name or ID number"</p>
                                </div>
                            </div>
                        </section>
                    }
                }
            >
                <section class="search-results">
                    <header class="search-results__header">
                        <div>
                            <h2>"Search Results"</h2>
                            <p>
                                {move || results_summary(filtered.get().len(), filter.get(), stats.get().total)}
                            </p>
                        </div>
                        <Show when=move || !results.get().is_empty()>
                            <div class="search-results__stats">
                                <div class="search-results__stat">
                                    <span class="search-results__stat-value">{move || stats.get().total}</span>
                                    <span>"Total"</span>
                                </div>
                                <div class="search-results__stat">
                                    <span class="search-results__stat-value">{move || stats.get().verified}</span>
                                    <span>"Verified"</span>
                                </div>
                                <div class="search-results__stat">
                                    <span class="search-results__stat-value">{move || stats.get().unverified}</span>
                                    <span>"Pending"</span>
                                </div>
                            </div>
                        </Show>
                    </header>

                    <Show
                        when=move || !loading.get()
                        fallback=move || {
                            view! {
                                <div class="search-results__loading">
                                    <p>"Searching Database"</p>
                                </div>
                            }
                        }
                    >
                        <Show
                            when=move || !filtered.get().is_empty()
                            fallback=move || {
                                view! {
                                    <div class="search-results__empty">
                                        <h3>"No Records Found"</h3>
                                        <p>{no_results_message()}</p>
                                        <div class="search-results__empty-actions">
                                            <button class="btn btn--primary" on:click=on_clear>
                                                "Clear Search"
                                            </button>
                                            <button
                                                class="btn"
                                                on:click=move |_| filter.set(VerificationFilter::All)
                                            >
                                                "Show All Records"
                                            </button>
                                        </div>
                                    </div>
                                }
                            }
                        >
                            <div class="search-results__grid">
                                {move || {
                                    filtered
                                        .get()
                                        .into_iter()
                                        .map(|land| {
                                            view! { <LandCard land=land on_view_details=on_view_details/> }
                                        })
                                        .collect_view()
                                }}
                            </div>
                        </Show>
                    </Show>
                </section>
            </Show>

            {move || {
                selected
                    .get()
                    .map(|land| view! { <LandDetailsModal land=land on_close=on_close/> })
            }}
        </div>
    }
}
