//! NGO Directory Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::Navbar;
use crate::models::Ngo;

#[component]
pub fn NgoListPage() -> impl IntoView {
    let (ngos, set_ngos) = signal(Vec::<Ngo>::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api::list_ngos().await {
            Ok(resp) if resp.success => set_ngos.set(resp.data.unwrap_or_default()),
            Ok(resp) => web_sys::console::warn_1(
                &format!("ngo list rejected: {}", resp.message.unwrap_or_default()).into(),
            ),
            Err(err) => web_sys::console::warn_1(&format!("ngo list failed: {err}").into()),
        }
        set_loading.set(false);
    });

    view! {
        <div>
            <Navbar/>
            <div class="directory-content">
                <h1>"NGO Directory"</h1>
                {move || {
                    if loading.get() {
                        view! { <div class="loading">"Loading..."</div> }.into_any()
                    } else if ngos.with(|list| list.is_empty()) {
                        view! { <div class="empty-state">"No NGOs registered"</div> }.into_any()
                    } else {
                        view! {
                            <div class="directory-grid">
                                <For
                                    each=move || ngos.get()
                                    key=|ngo| ngo.id
                                    children=|ngo: Ngo| {
                                        let location = match (&ngo.city, &ngo.state) {
                                            (Some(city), Some(state)) => format!("{city}, {state}"),
                                            (Some(city), None) => city.clone(),
                                            (None, Some(state)) => state.clone(),
                                            (None, None) => "N/A".to_string(),
                                        };
                                        view! {
                                            <div class="directory-card">
                                                <h3>{ngo.ngo_name.clone()}</h3>
                                                <p>
                                                    <strong>"Darpan ID: "</strong>
                                                    {ngo
                                                        .darpan_id
                                                        .clone()
                                                        .unwrap_or_else(|| "N/A".to_string())}
                                                </p>
                                                <p>
                                                    <strong>"Location: "</strong>
                                                    {location}
                                                </p>
                                                <p>
                                                    <strong>"Sectors: "</strong>
                                                    {if ngo.sectors.is_empty() {
                                                        "N/A".to_string()
                                                    } else {
                                                        ngo.sectors.join(", ")
                                                    }}
                                                </p>
                                                <p>
                                                    <strong>"Contact: "</strong>
                                                    {ngo.phone.clone().unwrap_or_else(|| "N/A".to_string())}
                                                </p>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}
