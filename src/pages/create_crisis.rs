//! Create Crisis Page
//!
//! Free-text submission form. idle -> processing -> success | error; the
//! form locks while the backend extracts entities, scores urgency, and
//! matches resources, then a read-only result panel replaces it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::{self, NewCrisisArgs};
use crate::components::{Navbar, UrgencyBreakdownView};
use crate::models::CrisisCreated;

const FALLBACK_ERROR: &str = "Failed to process crisis request";

/// Static convenience texts; they only pre-fill the message field.
const EXAMPLE_MESSAGES: &[&str] = &[
    "Need 50 blankets urgently in Jayanagar area, temperature dropping fast",
    "EMERGENCY! Doctor needed at MG Road metro station - heart attack patient",
    "100 families stranded in Yelahanka without food or water for 2 days",
    "Building collapsed in Indiranagar, need rescue team and ambulances NOW",
];

const MESSAGE_SOURCES: &[(&str, &str)] = &[
    ("Manual", "Manual Entry"),
    ("SMS", "SMS"),
    ("WhatsApp", "WhatsApp"),
    ("Twitter", "Twitter"),
    ("Facebook", "Facebook"),
    ("Phone", "Phone Call"),
];

#[component]
pub fn CreateCrisisPage() -> impl IntoView {
    let navigate = use_navigate();
    let (message, set_message) = signal(String::new());
    let (source, set_source) = signal(String::from("Manual"));
    let (processing, set_processing) = signal(false);
    let (result, set_result) = signal(None::<CrisisCreated>);
    let (error, set_error) = signal(None::<String>);

    let form_locked = move || processing.get() || result.with(|r| r.is_some());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = message.get();
        if text.trim().is_empty() {
            set_error.set(Some("Please enter a crisis message".to_string()));
            return;
        }
        let source_value = source.get();

        set_processing.set(true);
        set_error.set(None);
        set_result.set(None);
        spawn_local(async move {
            let args = NewCrisisArgs {
                original_message: text.trim(),
                message_source: &source_value,
            };
            match api::create_crisis(&args).await {
                Ok(resp) if resp.success && resp.data.is_some() => set_result.set(resp.data),
                Ok(resp) => {
                    set_error.set(Some(
                        resp.message.unwrap_or_else(|| FALLBACK_ERROR.to_string()),
                    ));
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("crisis submission failed: {err}").into());
                    set_error.set(Some(FALLBACK_ERROR.to_string()));
                }
            }
            set_processing.set(false);
        });
    };

    let nav_cancel = navigate.clone();
    let nav_result = navigate;

    view! {
        <div class="create-crisis">
            <Navbar/>

            <div class="create-crisis-content">
                <h1>"Create Crisis Request"</h1>
                <p class="subtitle">
                    "The backend extracts entities, scores urgency, and matches resources automatically"
                </p>

                <form class="crisis-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="original_message">"Crisis Message *"</label>
                        <textarea
                            id="original_message"
                            rows="5"
                            placeholder="Enter the crisis message here (e.g., 'Need 50 blankets urgently in Jayanagar area')"
                            prop:value=move || message.get()
                            on:input=move |ev| {
                                set_message.set(event_target_value(&ev));
                                set_error.set(None);
                            }
                            disabled=form_locked
                        ></textarea>
                    </div>

                    <div class="form-group">
                        <label for="message_source">"Message Source"</label>
                        <select
                            id="message_source"
                            prop:value=move || source.get()
                            on:change=move |ev| set_source.set(event_target_value(&ev))
                            disabled=form_locked
                        >
                            {MESSAGE_SOURCES
                                .iter()
                                .map(|(value, label)| {
                                    let value = *value;
                                    view! {
                                        <option value=value selected=move || source.get() == value>
                                            {*label}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    {move || error.get().map(|msg| view! { <div class="error-message">{msg}</div> })}

                    {move || {
                        result
                            .with(|r| r.is_none())
                            .then(|| {
                                let navigate = nav_cancel.clone();
                                view! {
                                    <div class="button-group">
                                        <button
                                            type="submit"
                                            class="btn-primary"
                                            disabled=move || processing.get()
                                        >
                                            {move || {
                                                if processing.get() {
                                                    "Processing..."
                                                } else {
                                                    "Process Crisis Request"
                                                }
                                            }}
                                        </button>
                                        <button
                                            type="button"
                                            class="btn-secondary"
                                            disabled=move || processing.get()
                                            on:click=move |_| navigate("/", Default::default())
                                        >
                                            "Cancel"
                                        </button>
                                    </div>

                                    <div class="examples-section">
                                        <h3>"Example Crisis Messages"</h3>
                                        {EXAMPLE_MESSAGES
                                            .iter()
                                            .map(|example| {
                                                let example = *example;
                                                view! {
                                                    <button
                                                        type="button"
                                                        class="example-button"
                                                        disabled=move || processing.get()
                                                        on:click=move |_| set_message.set(example.to_string())
                                                    >
                                                        {example}
                                                    </button>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                            })
                    }}
                </form>

                <Show when=move || processing.get()>
                    <div class="processing-indicator">
                        <div class="spinner"></div>
                        <p>"Analyzing the crisis message..."</p>
                        <p class="processing-detail">
                            "Extracting entities, calculating urgency, matching resources..."
                        </p>
                    </div>
                </Show>

                {move || {
                    result
                        .get()
                        .map(|created| {
                            let navigate = nav_result.clone();
                            result_panel(created, navigate, move || {
                                set_message.set(String::new());
                                set_source.set("Manual".to_string());
                                set_result.set(None);
                                set_error.set(None);
                            })
                        })
                }}
            </div>
        </div>
    }
}

fn result_panel(
    created: CrisisCreated,
    navigate: impl Fn(&str, leptos_router::NavigateOptions) + Clone + 'static,
    reset: impl Fn() + Copy + 'static,
) -> impl IntoView {
    let crisis_id = created.crisis_request.id;
    let entities = created.extracted_entities.clone();

    let quantity = entities
        .quantity
        .map(|q| {
            format!(
                "{q} {}",
                entities.quantity_unit.clone().unwrap_or_else(|| "units".to_string()),
            )
        })
        .unwrap_or_else(|| "Not specified".to_string());
    let matches_found = created
        .database_stats
        .as_ref()
        .map(|stats| stats.total_matches_found)
        .unwrap_or(0);
    let processing_time = created
        .processing_time_ms
        .map(|ms| format!("{ms}ms"))
        .unwrap_or_else(|| "N/A".to_string());

    let top_matches = (!created.matches.is_empty()).then(|| {
        let cards = created
            .matches
            .iter()
            .take(3)
            .enumerate()
            .map(|(rank, m)| {
                view! {
                    <div class="match-card">
                        <div class="match-header">
                            <h4>{format!("#{} {}", rank + 1, m.ngo_name)}</h4>
                            <span class="match-score">{format!("{}% Match", m.match_score)}</span>
                        </div>
                        <div class="match-details">
                            <p>
                                <strong>"Resource: "</strong>
                                {m.resource_name.clone()}
                            </p>
                            <p>
                                <strong>"Available: "</strong>
                                {format!(
                                    "{} {}",
                                    m.quantity_available.unwrap_or(0.0),
                                    m.unit.clone().unwrap_or_default(),
                                )}
                            </p>
                            <p>
                                <strong>"Location: "</strong>
                                {format!(
                                    "{} ({:.1} km away)",
                                    m.location.clone().unwrap_or_else(|| "N/A".to_string()),
                                    m.distance_km.unwrap_or(0.0),
                                )}
                            </p>
                            <p>
                                <strong>"Contact: "</strong>
                                {m.contact_phone.clone().unwrap_or_else(|| "N/A".to_string())}
                            </p>
                        </div>
                        {m.reasoning.clone().map(|why| view! {
                            <div class="match-reasoning">
                                <strong>"Why this match: "</strong>
                                <p>{why}</p>
                            </div>
                        })}
                    </div>
                }
            })
            .collect_view();
        let found = created.matches.len();
        view! {
            <div class="matches-section">
                <h3>{format!("Live Database Matches ({found} found)")}</h3>
                <p class="matches-subtitle">
                    "Found in real time in the NGO registry database"
                </p>
                {cards}
            </div>
        }
    });

    view! {
        <div class="result-section">
            <h2>"Crisis Request Created"</h2>

            <UrgencyBreakdownView report=entities.clone()/>

            <div class="result-card">
                <h3>"Extracted Information"</h3>
                <div class="result-grid">
                    <div class="result-item">
                        <strong>"Request ID: "</strong>
                        <span>{crisis_id}</span>
                    </div>
                    <div class="result-item">
                        <strong>"Need Type: "</strong>
                        <span>
                            {entities.need_type.clone().unwrap_or_else(|| "Not detected".to_string())}
                        </span>
                    </div>
                    <div class="result-item">
                        <strong>"Quantity: "</strong>
                        <span>{quantity}</span>
                    </div>
                    <div class="result-item">
                        <strong>"Location: "</strong>
                        <span>
                            {entities
                                .location_text
                                .clone()
                                .unwrap_or_else(|| "Not detected".to_string())}
                        </span>
                    </div>
                    <div class="result-item">
                        <strong>"Processing Time: "</strong>
                        <span>{processing_time}</span>
                    </div>
                    <div class="result-item">
                        <strong>"Database Search: "</strong>
                        <span>{format!("{matches_found} resources found")}</span>
                    </div>
                </div>
            </div>

            {top_matches}

            <div class="button-group">
                <button
                    class="btn-primary"
                    on:click={
                        let navigate = navigate.clone();
                        move |_| navigate(&format!("/crisis/{crisis_id}"), Default::default())
                    }
                >
                    "View Full Details"
                </button>
                <button class="btn-secondary" on:click=move |_| reset()>
                    "Create Another Request"
                </button>
                <button
                    class="btn-secondary"
                    on:click=move |_| navigate("/", Default::default())
                >
                    "Back to Dashboard"
                </button>
            </div>
        </div>
    }
}
