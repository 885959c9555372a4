//! Login Page
//!
//! Credential form; exchanges email and password for an access token and
//! commits it to the session store.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::session::use_session;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        set_error.set(None);
        set_submitting.set(true);

        let email = email.get();
        let password = password.get();
        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&email, &password).await {
                Ok(response) => {
                    session.login(response.access_token, None);
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    set_error.set(Some("Invalid credentials".to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto px-6 py-16">
            <h1 class="text-3xl font-bold mb-6">"Login"</h1>

            <form on:submit=on_submit class="space-y-4">
                <input
                    type="email"
                    placeholder="Email"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    class="w-full bg-gray-800 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-green-500 focus:outline-none"
                />
                <input
                    type="password"
                    placeholder="Password"
                    required=true
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    class="w-full bg-gray-800 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-green-500 focus:outline-none"
                />

                {move || error.get().map(|message| view! {
                    <p class="text-red-400 text-sm">{message}</p>
                })}

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-green-600 hover:bg-green-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                           transition-colors"
                >
                    {move || if submitting.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
