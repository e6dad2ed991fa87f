//! Application Shell
//!
//! Router wiring, the authenticated-route guard, and the subscription
//! that turns transport-level 401 events into navigation.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::path;

use crate::api;
use crate::pages::{
    CreateCrisisPage, CrisisDetailsPage, DashboardPage, LoginPage, NgoListPage, ResourceListPage,
};
use crate::session;

/// Renders its children only for an authenticated session; otherwise a
/// redirect to the login route. Evaluated at render/navigation time; a
/// token going stale between renders is caught by the 401 path instead.
#[component]
fn Protected(children: ChildrenFn) -> impl IntoView {
    view! {
        <Show
            when=|| session::is_authenticated()
            fallback=|| view! { <Redirect path="/login"/> }
        >
            {children()}
        </Show>
    }
}

/// Registers the transport's unauthorized handler once the router exists,
/// so a 401 anywhere forces navigation back to the login view. The
/// session itself is already cleared by the transport at that point.
#[component]
fn UnauthorizedRedirect() -> impl IntoView {
    let navigate = use_navigate();
    api::set_unauthorized_handler(move || navigate("/login", Default::default()));
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <UnauthorizedRedirect/>
            <main class="app">
                <Routes fallback=|| view! { <Redirect path="/"/> }>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route
                        path=path!("/")
                        view=|| view! { <Protected><DashboardPage/></Protected> }
                    />
                    <Route
                        path=path!("/create-crisis")
                        view=|| view! { <Protected><CreateCrisisPage/></Protected> }
                    />
                    <Route
                        path=path!("/crisis/:id")
                        view=|| view! { <Protected><CrisisDetailsPage/></Protected> }
                    />
                    <Route
                        path=path!("/ngos")
                        view=|| view! { <Protected><NgoListPage/></Protected> }
                    />
                    <Route
                        path=path!("/resources")
                        view=|| view! { <Protected><ResourceListPage/></Protected> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
