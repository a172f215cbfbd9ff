//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    dashboard::DashboardPage, land_search::LandSearchPage, login::LoginPage,
    register::RegisterPage, transactions::TransactionHistoryPage, upload_land::UploadLandPage,
};
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Session state at mount: restored from browser storage when present.
fn initial_session() -> SessionState {
    match crate::state::session::restore() {
        Some((user, token)) => SessionState { user: Some(user), token: Some(token), loading: false },
        None => SessionState { user: None, token: None, loading: false },
    }
}

fn initial_ui() -> UiState {
    UiState { dark_mode: crate::util::dark_mode::read_preference(), ..UiState::default() }
}

/// Root application component.
///
/// Provides the session and UI contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(initial_session());
    let ui = RwSignal::new(initial_ui());
    provide_context(session);
    provide_context(ui);

    Effect::new(move || {
        crate::util::dark_mode::apply(ui.get().dark_mode);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/land-registry.css"/>
        <Title text="Rwanda Land Registry"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("search") view=LandSearchPage/>
                    <Route path=StaticSegment("transactions") view=TransactionHistoryPage/>
                    <Route path=StaticSegment("upload") view=UploadLandPage/>
                </Routes>
            </main>
        </Router>
    }
}
