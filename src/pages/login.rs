//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;

const DEMO_EMAIL: &str = "dispatcher@crisis-matcher.org";
const DEMO_PASSWORD: &str = "dispatcher123";

#[component]
pub fn LoginPage() -> impl IntoView {
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get();
        let password_value = password.get();
        if email_value.trim().is_empty() || password_value.is_empty() {
            set_error.set(Some("Please enter your email and password".to_string()));
            return;
        }

        set_loading.set(true);
        set_error.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(email_value.trim(), &password_value).await {
                Ok(resp) if resp.success => {
                    navigate("/", Default::default());
                }
                Ok(resp) => {
                    set_error.set(Some(
                        resp.message.unwrap_or_else(|| "Login failed".to_string()),
                    ));
                    set_loading.set(false);
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("login failed: {err}").into());
                    set_error.set(Some("Login failed. Please try again.".to_string()));
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-header">
                    <h1>"Crisis Matcher"</h1>
                    <p>"Emergency Response System"</p>
                </div>

                <form class="login-form" on:submit=on_submit>
                    {move || error.get().map(|msg| view! { <div class="error-message">{msg}</div> })}

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                set_email.set(event_target_value(&ev));
                                set_error.set(None);
                            }
                            disabled=move || loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                set_password.set(event_target_value(&ev));
                                set_error.set(None);
                            }
                            disabled=move || loading.get()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || loading.get()>
                        {move || if loading.get() { "Logging in..." } else { "Login" }}
                    </button>

                    <button
                        type="button"
                        class="btn-secondary"
                        disabled=move || loading.get()
                        on:click=move |_| {
                            set_email.set(DEMO_EMAIL.to_string());
                            set_password.set(DEMO_PASSWORD.to_string());
                        }
                    >
                        "Load Demo Credentials"
                    </button>
                </form>

                <div class="login-footer">
                    <p>{format!("Demo account: {DEMO_EMAIL} / {DEMO_PASSWORD}")}</p>
                </div>
            </div>
        </div>
    }
}
