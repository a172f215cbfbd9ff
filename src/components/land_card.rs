//! Reusable card for land records in dashboard and search grids.

#[cfg(test)]
#[path = "land_card_test.rs"]
mod land_card_test;

use leptos::prelude::*;

use crate::net::types::LandRecord;
use crate::util::dates;

/// Badge label for a record's verification state.
fn badge_label(verified: bool) -> &'static str {
    if verified { "Verified" } else { "Pending" }
}

fn badge_class(verified: bool) -> &'static str {
    if verified { "badge badge--verified" } else { "badge badge--pending" }
}

/// A card summarizing one land record.
#[component]
pub fn LandCard(land: LandRecord, on_view_details: Callback<LandRecord>) -> impl IntoView {
    let registered = dates::format_short(&land.created_at);
    let land_for_details = land.clone();

    view! {
        <div class="land-card">
            <div class="land-card__header">
                <div>
                    <h3 class="land-card__title">{land.title_number.clone()}</h3>
                    <p class="land-card__location">{land.location.clone()}</p>
                </div>
                <span class=badge_class(land.verified)>{badge_label(land.verified)}</span>
            </div>
            <dl class="land-card__details">
                <div class="land-card__row">
                    <dt>"Owner"</dt>
                    <dd>{land.owner_name.clone()}</dd>
                </div>
                <div class="land-card__row">
                    <dt>"Area"</dt>
                    <dd>{format!("{} m²", land.area)}</dd>
                </div>
                <div class="land-card__row">
                    <dt>"Registered"</dt>
                    <dd>{registered}</dd>
                </div>
            </dl>
            <button
                class="btn btn--primary land-card__action"
                on:click=move |_| on_view_details.run(land_for_details.clone())
            >
                "View Details"
            </button>
        </div>
    }
}
