//! Login screen.

use leptos::*;
use leptos_router::Redirect;

use warden_auth::{AuthPhase, Credentials};

use crate::frontend::app::Console;

#[component]
pub fn LoginPage() -> impl IntoView {
    let console = expect_context::<Console>();
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(Option::<String>::None);
    let submitting = create_rw_signal(false);

    let submit = {
        let console = console.clone();
        move || {
            if submitting.get_untracked() {
                return;
            }
            submitting.set(true);
            error.set(None);

            let console = console.clone();
            let credentials = Credentials {
                username: username.get_untracked(),
                password: password.get_untracked(),
            };
            spawn_local(async move {
                // A rejection carries the backend's message; the form stays
                // up and shows it inline.
                if let Err(err) = console.auth.login(&credentials).await {
                    error.set(Some(err.to_string()));
                }
                console.sync_phase();
                submitting.set(false);
            });
        }
    };

    view! {
        // An already-signed-in visit to /login goes straight to the console.
        {move || (console.phase.get() == AuthPhase::Authenticated).then(|| {
            view! { <Redirect path="/"/> }
        })}
        <div class="login">
            <h1>"Warden Management Console"</h1>
            <form on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }>
                <label for="username">"Username"</label>
                <input
                    type="text"
                    id="username"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <label for="password">"Password"</label>
                <input
                    type="password"
                    id="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                {move || error.get().map(|message| view! {
                    <p class="form-error">{message}</p>
                })}
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in…" } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
