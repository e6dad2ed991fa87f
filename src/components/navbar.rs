//! Navbar Component
//!
//! Top navigation bar: brand, section links with active highlighting,
//! current dispatcher, logout.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::api;
use crate::session;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/create-crisis", "New Crisis"),
    ("/ngos", "NGOs"),
    ("/resources", "Resources"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let navigate = use_navigate();
    let pathname = use_location().pathname;
    let user = session::current_user();

    let user_name = user
        .as_ref()
        .and_then(|u| u.full_name.clone())
        .unwrap_or_else(|| "User".to_string());
    let user_role = user.as_ref().and_then(|u| u.role.clone()).unwrap_or_default();

    let on_logout = {
        let navigate = navigate.clone();
        move |_| {
            api::logout();
            navigate("/login", Default::default());
        }
    };

    view! {
        <nav class="navbar">
            <div
                class="navbar-brand"
                on:click={
                    let navigate = navigate.clone();
                    move |_| navigate("/", Default::default())
                }
            >
                <h2>"Crisis Matcher"</h2>
            </div>

            <div class="navbar-menu">
                {NAV_LINKS
                    .iter()
                    .map(|(path, label)| {
                        let navigate = navigate.clone();
                        let path = *path;
                        let item_class = move || {
                            if pathname.get() == path { "nav-item active" } else { "nav-item" }
                        };
                        view! {
                            <button class=item_class on:click=move |_| navigate(path, Default::default())>
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="navbar-user">
                <span class="user-name">{user_name}</span>
                <span class="user-role">{user_role}</span>
                <button class="btn-logout" on:click=on_logout>"Logout"</button>
            </div>
        </nav>
    }
}
