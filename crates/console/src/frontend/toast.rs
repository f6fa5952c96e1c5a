//! Transient notifications and the gateway event wiring.

use std::time::Duration;

use leptos::*;

use warden_auth::AuthPhase;
use warden_client::{GatewayEvents, Notice, NoticeLevel};

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

/// Shared toast queue. `Copy` because it is only signal handles.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<(u64, Notice)>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| items.push((id, notice)));

        let items = self.items;
        set_timeout(
            move || items.update(|items| items.retain(|(entry, _)| *entry != id)),
            TOAST_LIFETIME,
        );
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(Notice::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Notice::error(message));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "toast toast-info",
        NoticeLevel::Success => "toast toast-success",
        NoticeLevel::Warning => "toast toast-warn",
        NoticeLevel::Error => "toast toast-error",
    }
}

/// Renders the toast queue in a fixed overlay.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    view! {
        <div class="toast-host">
            <For
                each=move || toasts.items.get()
                key=|(id, _)| *id
                children=|(_, notice)| {
                    view! {
                        <div class=level_class(notice.level)>{notice.message}</div>
                    }
                }
            />
        </div>
    }
}

/// Gateway side effects routed into the UI: failures become toasts, an
/// expired session flips the auth phase so the router lands on the login
/// screen.
pub struct ConsoleEvents {
    pub toasts: Toasts,
    pub phase: RwSignal<AuthPhase>,
}

impl GatewayEvents for ConsoleEvents {
    fn notify(&self, notice: Notice) {
        self.toasts.push(notice);
    }

    fn session_expired(&self) {
        tracing::warn!("session expired; returning to login");
        self.phase.set(AuthPhase::Unauthenticated);
    }
}
