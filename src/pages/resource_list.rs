//! Resource Directory Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::Navbar;
use crate::models::ResourceRecord;

#[component]
pub fn ResourceListPage() -> impl IntoView {
    let (resources, set_resources) = signal(Vec::<ResourceRecord>::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api::list_resources().await {
            Ok(resp) if resp.success => set_resources.set(resp.data.unwrap_or_default()),
            Ok(resp) => web_sys::console::warn_1(
                &format!("resource list rejected: {}", resp.message.unwrap_or_default()).into(),
            ),
            Err(err) => web_sys::console::warn_1(&format!("resource list failed: {err}").into()),
        }
        set_loading.set(false);
    });

    view! {
        <div>
            <Navbar/>
            <div class="directory-content">
                <h1>"Available Resources"</h1>
                {move || {
                    if loading.get() {
                        view! { <div class="loading">"Loading..."</div> }.into_any()
                    } else if resources.with(|list| list.is_empty()) {
                        view! { <div class="empty-state">"No resources available"</div> }
                            .into_any()
                    } else {
                        view! {
                            <div class="directory-grid">
                                <For
                                    each=move || resources.get()
                                    key=|resource| resource.id
                                    children=|resource: ResourceRecord| {
                                        let available = resource
                                            .quantity_available
                                            .map(|q| {
                                                format!(
                                                    "{q} {}",
                                                    resource.unit.clone().unwrap_or_default(),
                                                )
                                            })
                                            .unwrap_or_else(|| "N/A".to_string());
                                        let location = match (
                                            &resource.location_city,
                                            &resource.location_state,
                                        ) {
                                            (Some(city), Some(state)) => format!("{city}, {state}"),
                                            (Some(city), None) => city.clone(),
                                            (None, Some(state)) => state.clone(),
                                            (None, None) => "N/A".to_string(),
                                        };
                                        view! {
                                            <div class="directory-card">
                                                <h3>{resource.resource_name.clone()}</h3>
                                                <p>
                                                    <strong>"NGO: "</strong>
                                                    {resource
                                                        .ngo_name
                                                        .clone()
                                                        .unwrap_or_else(|| "N/A".to_string())}
                                                </p>
                                                <p>
                                                    <strong>"Type: "</strong>
                                                    {resource
                                                        .resource_type
                                                        .clone()
                                                        .unwrap_or_else(|| "N/A".to_string())}
                                                </p>
                                                <p>
                                                    <strong>"Available: "</strong>
                                                    {available}
                                                </p>
                                                <p>
                                                    <strong>"Location: "</strong>
                                                    {location}
                                                </p>
                                                <p>
                                                    <strong>"Contact: "</strong>
                                                    {resource
                                                        .contact_phone
                                                        .clone()
                                                        .unwrap_or_else(|| "N/A".to_string())}
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
