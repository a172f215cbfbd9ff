//! Dashboard page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the signed-in user's parcel portfolio with aggregate stat tiles,
//! quick-action links, and a details modal. Redirects to the login flow when
//! no session is present.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::land_card::LandCard;
use crate::components::land_details_modal::LandDetailsModal;
use crate::net::types::LandRecord;
use crate::state::lands::{PortfolioStats, RecordStats, portfolio_stats, record_stats};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::currency::format_rwf;
use crate::util::dates;

/// Copy for the recent-activity tile.
fn recent_activity_line(count: usize) -> String {
    format!("{count} new records this week")
}

/// Copy for the average-area tile.
fn average_area_line(average: i64) -> String {
    format!("{average} m² average property size")
}

/// Property counter next to the records heading.
fn property_count_line(total: usize) -> String {
    if total == 1 {
        "1 Property".to_owned()
    } else {
        format!("{total} Properties")
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let pathname = use_location().pathname;
    install_unauth_redirect(session, pathname, use_navigate());

    let lands = RwSignal::new(Vec::<LandRecord>::new());
    let loading = RwSignal::new(true);
    let selected = RwSignal::new(None::<LandRecord>);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            lands.set(crate::net::mock::my_lands().await);
            loading.set(false);
        });
    });

    let counts = Memo::new(move |_| record_stats(&lands.get()));
    let portfolio = Memo::new(move |_| portfolio_stats(&lands.get(), dates::today()));

    let on_view_details = Callback::new(move |land: LandRecord| selected.set(Some(land)));
    let on_close = Callback::new(move |()| selected.set(None));

    let welcome = move || {
        session
            .get()
            .user
            .map(|user| format!("Welcome back, {}!", user.name))
            .unwrap_or_default()
    };

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>
                            {move || {
                                if session.get().loading { "Loading..." } else { "Redirecting to login..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>{welcome}</h1>
                    <p>"Here's your property portfolio overview"</p>
                </header>

                <div class="stat-tiles">
                    <div class="stat-tile stat-tile--properties">
                        <p class="stat-tile__label">"Total Properties"</p>
                        <p class="stat-tile__value">{move || counts.get().total}</p>
                        <p class="stat-tile__hint">"Active portfolio"</p>
                    </div>
                    <div class="stat-tile stat-tile--verified">
                        <p class="stat-tile__label">"Verified"</p>
                        <p class="stat-tile__value">{move || counts.get().verified}</p>
                        <p class="stat-tile__hint">"Officially certified"</p>
                    </div>
                    <div class="stat-tile stat-tile--pending">
                        <p class="stat-tile__label">"Pending"</p>
                        <p class="stat-tile__value">{move || counts.get().unverified}</p>
                        <p class="stat-tile__hint">"Under review"</p>
                    </div>
                    <div class="stat-tile stat-tile--value">
                        <p class="stat-tile__label">"Portfolio Value"</p>
                        <p class="stat-tile__value">{move || format_rwf(portfolio.get().total_value)}</p>
                        <p class="stat-tile__hint">"Total estimated value"</p>
                    </div>
                </div>

                <section class="quick-actions">
                    <h2>"Quick Actions"</h2>
                    <div class="quick-actions__grid">
                        <a class="quick-action" href="/upload">
                            <span class="quick-action__title">"Register Land"</span>
                            <span class="quick-action__hint">"Add new property to registry"</span>
                        </a>
                        <a class="quick-action" href="/search">
                            <span class="quick-action__title">"Search Records"</span>
                            <span class="quick-action__hint">"Find land information"</span>
                        </a>
                        <a class="quick-action" href="/transactions">
                            <span class="quick-action__title">"Transactions"</span>
                            <span class="quick-action__hint">"View all activities"</span>
                        </a>
                    </div>
                </section>

                <section class="records">
                    <header class="records__header">
                        <h2>"Your Land Records"</h2>
                        <span class="records__count">
                            {move || property_count_line(counts.get().total)}
                        </span>
                        <a class="btn btn--primary" href="/upload">
                            "+ Add New Record"
                        </a>
                    </header>

                    <Show
                        when=move || !loading.get()
                        fallback=move || {
                            view! {
                                <div class="records__loading">
                                    <p>"Loading Your Portfolio"</p>
                                </div>
                            }
                        }
                    >
                        <Show
                            when=move || !lands.get().is_empty()
                            fallback=move || {
                                view! {
                                    <div class="records__empty">
                                        <h3>"No Land Records Yet"</h3>
                                        <p>
                                            "Start building your property portfolio by registering \
                                             your first land record."
                                        </p>
                                        <a class="btn btn--primary" href="/upload">
                                            "Register First Property"
                                        </a>
                                    </div>
                                }
                            }
                        >
                            <div class="records__grid">
                                {move || {
                                    lands
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

                <div class="info-tiles">
                    <div class="info-tile">
                        <h3>"Recent Activity"</h3>
                        <p>{move || recent_activity_line(portfolio.get().recent_activity)}</p>
                        <p class="info-tile__hint">"Keep your portfolio updated regularly"</p>
                    </div>
                    <div class="info-tile">
                        <h3>"Average Area"</h3>
                        <p>{move || average_area_line(portfolio.get().average_area)}</p>
                        <p class="info-tile__hint">"Across your entire portfolio"</p>
                    </div>
                </div>

                {move || {
                    selected
                        .get()
                        .map(|land| view! { <LandDetailsModal land=land on_close=on_close/> })
                }}
            </div>
        </Show>
    }
}
