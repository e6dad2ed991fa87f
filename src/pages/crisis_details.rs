//! Crisis Details Page
//!
//! Single-record view fetched by route id, with the matched resources and
//! a status-change control.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api;
use crate::components::Navbar;
use crate::models::{CrisisRequest, CrisisStatus, ResourceMatch};

#[component]
pub fn CrisisDetailsPage() -> impl IntoView {
    let navigate = use_navigate();
    let params = use_params_map();
    let (crisis, set_crisis) = signal(None::<CrisisRequest>);
    let (matches, set_matches) = signal(Vec::<ResourceMatch>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let id = params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()));
        let Some(id) = id else {
            set_loading.set(false);
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::get_crisis(id).await {
                Ok(resp) if resp.success => {
                    if let Some(detail) = resp.data {
                        set_crisis.set(Some(detail.crisis_request));
                        set_matches.set(detail.matches);
                    }
                }
                Ok(resp) => web_sys::console::warn_1(
                    &format!("crisis fetch rejected: {}", resp.message.unwrap_or_default())
                        .into(),
                ),
                Err(err) => {
                    web_sys::console::warn_1(&format!("crisis fetch failed: {err}").into())
                }
            }
            set_loading.set(false);
        });
    });

    let on_status_change = move |ev: web_sys::Event| {
        let Some(new_status) = CrisisStatus::from_str(&event_target_value(&ev)) else {
            return;
        };
        let Some(id) = crisis.with(|c| c.as_ref().map(|c| c.id)) else {
            return;
        };
        spawn_local(async move {
            match api::update_crisis_status(id, new_status).await {
                Ok(resp) if resp.success => {
                    if let Some(updated) = resp.data {
                        set_crisis.set(Some(updated));
                    }
                }
                Ok(resp) => web_sys::console::warn_1(
                    &format!("status update rejected: {}", resp.message.unwrap_or_default())
                        .into(),
                ),
                Err(err) => {
                    web_sys::console::warn_1(&format!("status update failed: {err}").into())
                }
            }
        });
    };

    view! {
        <div>
            <Navbar/>
            <div class="details-content">
                <button
                    class="btn-secondary"
                    on:click=move |_| navigate("/", Default::default())
                >
                    "Back"
                </button>

                {move || {
                    if loading.get() {
                        view! { <div class="loading">"Loading..."</div> }.into_any()
                    } else if let Some(record) = crisis.get() {
                        let current_status = record.status;
                        view! {
                            <h1>{format!("Crisis Request #{}", record.id)}</h1>
                            <div class="details-card">
                                <p>
                                    <strong>"Message: "</strong>
                                    {format!("\"{}\"", record.original_message)}
                                </p>
                                <p>
                                    <strong>"Status: "</strong>
                                    <span class=format!("status-badge {}", record.status.css_class())>
                                        {record.status.label()}
                                    </span>
                                    <select class="status-select" on:change=on_status_change>
                                        {CrisisStatus::ALL
                                            .iter()
                                            .map(|&status| {
                                                view! {
                                                    <option
                                                        value=status.as_str()
                                                        selected=status == current_status
                                                    >
                                                        {status.label()}
                                                    </option>
                                                }
                                            })
                                            .collect_view()}
                                    </select>
                                </p>
                                <p>
                                    <strong>"Urgency: "</strong>
                                    {format!(
                                        "{} ({}/10)",
                                        record.urgency_level.label(),
                                        record.urgency_score,
                                    )}
                                </p>
                                <p>
                                    <strong>"Need: "</strong>
                                    {record.need_type.clone().unwrap_or_else(|| "N/A".to_string())}
                                </p>
                                <p>
                                    <strong>"Location: "</strong>
                                    {record
                                        .location_text
                                        .clone()
                                        .unwrap_or_else(|| "N/A".to_string())}
                                </p>
                                {record.created_at_display().map(|created| view! {
                                    <p>
                                        <strong>"Created: "</strong>
                                        {created}
                                    </p>
                                })}
                            </div>

                            <h2>{format!("Matched Resources ({})", matches.with(|m| m.len()))}</h2>
                            <For
                                each=move || matches.get()
                                key=|m| (m.ngo_name.clone(), m.resource_name.clone())
                                children=|m: ResourceMatch| {
                                    view! {
                                        <div class="match-card">
                                            <h3>{m.ngo_name.clone()}</h3>
                                            <p>
                                                <strong>"Resource: "</strong>
                                                {m.resource_name.clone()}
                                            </p>
                                            <p>
                                                <strong>"Score: "</strong>
                                                {format!("{}%", m.match_score)}
                                            </p>
                                            {m.distance_km.map(|km| view! {
                                                <p>
                                                    <strong>"Distance: "</strong>
                                                    {format!("{km:.1} km")}
                                                </p>
                                            })}
                                        </div>
                                    }
                                }
                            />
                        }
                        .into_any()
                    } else {
                        view! { <div class="empty-state">"Crisis not found"</div> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
