//! Transaction-history page: status filter chips over a table.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::{Transaction, TransactionKind, TransactionStatus};
use crate::state::session::SessionState;
use crate::state::transactions::{StatusFilter, apply_status_filter, status_summary};
use crate::util::auth::install_unauth_redirect;
use crate::util::dates;

fn kind_icon(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Registration => "📝",
        TransactionKind::Transfer => "🔄",
        TransactionKind::Verification => "✅",
    }
}

fn status_badge_class(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Completed => "badge badge--completed",
        TransactionStatus::Pending => "badge badge--pending",
        TransactionStatus::Rejected => "badge badge--rejected",
    }
}

/// "Showing N of M transactions" line above the table.
fn showing_line(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} transactions")
}

/// Footer line under the table.
fn displaying_line(shown: usize) -> String {
    let noun = if shown == 1 { "transaction" } else { "transactions" };
    format!("Displaying {shown} {noun}")
}

/// Empty-state copy, specialized to the active filter.
fn empty_message(filter: StatusFilter) -> String {
    if filter == StatusFilter::All {
        "You don't have any transactions yet.".to_owned()
    } else {
        format!("No {} transactions found.", filter.as_key())
    }
}

#[component]
pub fn TransactionHistoryPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let pathname = use_location().pathname;
    install_unauth_redirect(session, pathname, use_navigate());

    let transactions = RwSignal::new(Vec::<Transaction>::new());
    let loading = RwSignal::new(true);
    let filter = RwSignal::new(StatusFilter::All);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            transactions.set(crate::net::mock::transactions().await);
            loading.set(false);
        });
    });

    let filtered = Memo::new(move |_| apply_status_filter(&transactions.get(), filter.get()));
    let summary = Memo::new(move |_| status_summary(&transactions.get()));

    let chip = move |option: StatusFilter| {
        let active = move || filter.get() == option;
        view! {
            <button
                class="filter-chip"
                class:filter-chip--active=active
                on:click=move |_| filter.set(option)
            >
                {option.as_key()}
            </button>
        }
    };

    let row = move |tx: Transaction| {
        view! {
            <tr>
                <td>
                    <span class="tx__icon">{kind_icon(tx.kind)}</span>
                    <div class="tx__kind">
                        <span>{tx.kind.label()}</span>
                        <span class="tx__id">{format!("ID: #{}", tx.id)}</span>
                    </div>
                </td>
                <td class="tx__title">{tx.land_title}</td>
                <td>
                    <div>{format!("From: {}", tx.from_party)}</div>
                    <div>{format!("To: {}", tx.to_party)}</div>
                </td>
                <td>{tx.amount}</td>
                <td>{dates::format_short(&tx.date)}</td>
                <td>
                    <span class=status_badge_class(tx.status)>{tx.status.label()}</span>
                </td>
            </tr>
        }
    };

    view! {
        <div class="transactions-page">
            <header class="transactions-page__header">
                <h1>"Transaction History"</h1>
                <p>"View all your land-related transactions and their status"</p>
            </header>

            <div class="transactions-page__filters">
                <span>"Filter by status:"</span>
                {StatusFilter::ALL.into_iter().map(chip).collect_view()}
                <span class="transactions-page__showing">
                    {move || showing_line(filtered.get().len(), transactions.get().len())}
                </span>
            </div>

            <Show
                when=move || !loading.get()
                fallback=move || {
                    view! {
                        <div class="transactions-page__loading">
                            <p>"Loading transactions..."</p>
                        </div>
                    }
                }
            >
                <div class="transactions-table-card">
                    <table class="transactions-table">
                        <thead>
                            <tr>
                                <th>"Transaction"</th>
                                <th>"Land Title"</th>
                                <th>"Parties"</th>
                                <th>"Amount"</th>
                                <th>"Date"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || filtered.get().into_iter().map(row).collect_view()}
                        </tbody>
                    </table>

                    <Show when=move || filtered.get().is_empty()>
                        <div class="transactions-table-card__empty">
                            <p>"No transactions found"</p>
                            <p>{move || empty_message(filter.get())}</p>
                        </div>
                    </Show>

                    <Show when=move || !filtered.get().is_empty()>
                        <footer class="transactions-table-card__summary">
                            <span>{move || displaying_line(filtered.get().len())}</span>
                            <span class="summary summary--completed">
                                {move || format!("Completed: {}", summary.get().completed)}
                            </span>
                            <span class="summary summary--pending">
                                {move || format!("Pending: {}", summary.get().pending)}
                            </span>
                            <span class="summary summary--rejected">
                                {move || format!("Rejected: {}", summary.get().rejected)}
                            </span>
                        </footer>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
