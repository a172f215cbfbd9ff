//! Top navigation bar with route links, notifications, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered above the routed page. Navigation items only appear for a
//! signed-in user; logout tears the session down and returns to the login
//! flow.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::notification_panel::NotificationPanel;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// Navigation items, in display order: `(path, label)`.
fn nav_items() -> [(&'static str, &'static str); 4] {
    [
        ("/dashboard", "Dashboard"),
        ("/upload", "Upload"),
        ("/search", "Search"),
        ("/transactions", "Transactions"),
    ]
}

/// Whether a nav item should render as the active route. The dashboard also
/// owns the root path.
fn is_active(current: &str, path: &str) -> bool {
    current == path || (path == "/dashboard" && current == "/")
}

/// First word of a display name, for the greeting.
fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    let on_logout = move |_| {
        session.update(SessionState::clear);
        ui.update(|u| {
            u.notifications_open = false;
            u.mobile_menu_open = false;
        });
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    let greeting = move || {
        session
            .get()
            .user
            .map(|user| first_name(&user.name).to_owned())
            .unwrap_or_default()
    };

    let link = move |path: &'static str, label: &'static str| {
        let active = move || is_active(&pathname.get(), path);
        view! {
            <a class="navbar__link" class:navbar__link--active=active href=path>
                {label}
            </a>
        }
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                <span class="navbar__logo">"RLR"</span>
                <span class="navbar__brand-name">"Rwanda Land Registry"</span>
            </a>

            <Show when=move || session.get().is_authenticated()>
                <div class="navbar__links" class:navbar__links--open=move || ui.get().mobile_menu_open>
                    {nav_items().into_iter().map(|(path, label)| link(path, label)).collect_view()}
                </div>

                <div class="navbar__actions">
                    <button
                        class="navbar__bell"
                        on:click=move |_| ui.update(|u| u.notifications_open = !u.notifications_open)
                        aria-label="Notifications"
                    >
                        "🔔"
                    </button>
                    <Show when=move || ui.get().notifications_open>
                        <NotificationPanel/>
                    </Show>

                    <button
                        class="navbar__dark-toggle"
                        on:click=move |_| {
                            let next = crate::util::dark_mode::toggle(ui.get().dark_mode);
                            ui.update(|u| u.dark_mode = next);
                        }
                        title="Toggle dark mode"
                    >
                        {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                    </button>

                    <span class="navbar__greeting">"Hi, " {greeting}</span>

                    <button class="btn navbar__logout" on:click=on_logout>
                        "Logout"
                    </button>

                    <button
                        class="navbar__menu-toggle"
                        on:click=move |_| ui.update(|u| u.mobile_menu_open = !u.mobile_menu_open)
                        aria-label="Menu"
                    >
                        "☰"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
