//! Dashboard Page
//!
//! Filterable list of crisis requests. Any filter change or a manual
//! refresh triggers one full refetch; there is no pagination.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::Navbar;
use crate::models::{CrisisFilter, CrisisRequest};

const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("", "All Status"),
    ("pending", "Pending"),
    ("matched", "Matched"),
    ("dispatched", "Dispatched"),
    ("completed", "Completed"),
    ("cancelled", "Cancelled"),
];

const URGENCY_OPTIONS: &[(&str, &str)] = &[
    ("", "All Urgency"),
    ("critical", "Critical"),
    ("high", "High"),
    ("medium", "Medium"),
    ("low", "Low"),
];

const NEED_OPTIONS: &[(&str, &str)] = &[
    ("", "All Types"),
    ("medical", "Medical"),
    ("food", "Food"),
    ("water", "Water"),
    ("shelter", "Shelter"),
    ("blankets", "Blankets"),
    ("rescue", "Rescue"),
];

fn filter_select(
    options: &'static [(&'static str, &'static str)],
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <select
            prop:value=move || value.get()
            on:change=move |ev| set_value.set(event_target_value(&ev))
        >
            {options
                .iter()
                .map(|(option_value, label)| {
                    let option_value = *option_value;
                    view! {
                        <option value=option_value selected=move || value.get() == option_value>
                            {*label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let navigate = use_navigate();
    let (crises, set_crises) = signal(Vec::<CrisisRequest>::new());
    let (loading, set_loading) = signal(true);
    let (status_filter, set_status_filter) = signal(String::new());
    let (urgency_filter, set_urgency_filter) = signal(String::new());
    let (need_filter, set_need_filter) = signal(String::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // One refetch per filter change or manual refresh.
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let filter = CrisisFilter {
            status: status_filter.get(),
            urgency_level: urgency_filter.get(),
            need_type: need_filter.get(),
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::list_crises(&filter).await {
                Ok(resp) if resp.success => set_crises.set(resp.data.unwrap_or_default()),
                Ok(resp) => web_sys::console::warn_1(
                    &format!("crisis list rejected: {}", resp.message.unwrap_or_default()).into(),
                ),
                Err(err) => {
                    web_sys::console::warn_1(&format!("crisis list failed: {err}").into())
                }
            }
            set_loading.set(false);
        });
    });

    let nav_create = navigate.clone();
    let nav_create_empty = navigate.clone();

    view! {
        <div class="dashboard">
            <Navbar/>

            <div class="dashboard-content">
                <div class="dashboard-header">
                    <h1>"Crisis Dashboard"</h1>
                    <button
                        class="btn-primary"
                        on:click=move |_| nav_create("/create-crisis", Default::default())
                    >
                        "+ New Crisis Request"
                    </button>
                </div>

                <div class="filters">
                    {filter_select(STATUS_OPTIONS, status_filter, set_status_filter)}
                    {filter_select(URGENCY_OPTIONS, urgency_filter, set_urgency_filter)}
                    {filter_select(NEED_OPTIONS, need_filter, set_need_filter)}
                    <button
                        class="btn-secondary"
                        on:click=move |_| set_reload_trigger.update(|v| *v += 1)
                    >
                        "Refresh"
                    </button>
                </div>

                {move || {
                    if loading.get() {
                        view! { <div class="loading">"Loading crises..."</div> }.into_any()
                    } else if crises.with(|list| list.is_empty()) {
                        let navigate = nav_create_empty.clone();
                        view! {
                            <div class="empty-state">
                                <p>"No crisis requests found"</p>
                                <button
                                    class="btn-primary"
                                    on:click=move |_| navigate("/create-crisis", Default::default())
                                >
                                    "Create First Crisis Request"
                                </button>
                            </div>
                        }
                        .into_any()
                    } else {
                        let navigate = navigate.clone();
                        view! {
                            <div class="crisis-list">
                                <For
                                    each=move || crises.get()
                                    key=|crisis| crisis.id
                                    children=move |crisis: CrisisRequest| {
                                        let navigate = navigate.clone();
                                        let id = crisis.id;
                                        let quantity = crisis.quantity.map(|q| {
                                            format!(
                                                "{q} {}",
                                                crisis
                                                    .quantity_unit
                                                    .clone()
                                                    .unwrap_or_else(|| "units".to_string()),
                                            )
                                        });
                                        view! {
                                            <div
                                                class="crisis-card"
                                                on:click=move |_| navigate(
                                                    &format!("/crisis/{id}"),
                                                    Default::default(),
                                                )
                                            >
                                                <div class="crisis-header">
                                                    <div class="crisis-meta">
                                                        <span class=format!(
                                                            "urgency-badge {}",
                                                            crisis.urgency_level.css_class(),
                                                        )>
                                                            {format!(
                                                                "{} ({}/10)",
                                                                crisis.urgency_level.label(),
                                                                crisis.urgency_score,
                                                            )}
                                                        </span>
                                                        <span class=format!(
                                                            "status-badge {}",
                                                            crisis.status.css_class(),
                                                        )>
                                                            {crisis.status.label()}
                                                        </span>
                                                    </div>
                                                    <span class="crisis-id">{format!("ID: {id}")}</span>
                                                </div>

                                                <div class="crisis-message">
                                                    {format!("\"{}\"", crisis.original_message)}
                                                </div>

                                                <div class="crisis-details">
                                                    <div class="detail-item">
                                                        <strong>"Need: "</strong>
                                                        {crisis
                                                            .need_type
                                                            .clone()
                                                            .unwrap_or_else(|| "N/A".to_string())}
                                                    </div>
                                                    {quantity.map(|q| view! {
                                                        <div class="detail-item">
                                                            <strong>"Quantity: "</strong>
                                                            {q}
                                                        </div>
                                                    })}
                                                    <div class="detail-item">
                                                        <strong>"Location: "</strong>
                                                        {crisis
                                                            .location_text
                                                            .clone()
                                                            .unwrap_or_else(|| "Not specified".to_string())}
                                                    </div>
                                                    {crisis.created_at_display().map(|created| view! {
                                                        <div class="detail-item">
                                                            <strong>"Created: "</strong>
                                                            {created}
                                                        </div>
                                                    })}
                                                </div>

                                                <div class="crisis-footer">
                                                    <span class="created-by">
                                                        {format!(
                                                            "By: {}",
                                                            crisis
                                                                .created_by_name
                                                                .clone()
                                                                .unwrap_or_else(|| "System".to_string()),
                                                        )}
                                                    </span>
                                                    <span class="btn-link">"View Details"</span>
                                                </div>
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
