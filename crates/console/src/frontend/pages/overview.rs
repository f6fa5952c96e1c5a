//! Dashboard overview: fleet stats tiles and backend health.

use std::time::Duration;

use leptos::*;

use warden_auth::Permission;

use crate::frontend::app::Console;
use crate::frontend::components::{Spinner, StatCard};
use crate::frontend::polling::use_polling;

const REFRESH_PERIOD: Duration = Duration::from_secs(30);

#[component]
pub fn OverviewPage() -> impl IntoView {
    let console = expect_context::<Console>();
    let version = create_rw_signal(0u32);
    use_polling(REFRESH_PERIOD, move || version.update(|v| *v += 1));

    let health = {
        let api = console.api.clone();
        create_resource(move || version.get(), move |_| {
            let api = api.clone();
            async move { api.health().await }
        })
    };

    // Each stats block is only fetched when the role can see its section;
    // a forbidden fetch would just toast an error on every poll.
    let user_stats = console.auth.can(Permission::ManageUsers).then(|| {
        let api = console.api.clone();
        create_resource(move || version.get(), move |_| {
            let api = api.clone();
            async move { api.user_stats().await }
        })
    });
    let client_stats = console.auth.can(Permission::ManageClients).then(|| {
        let api = console.api.clone();
        create_resource(move || version.get(), move |_| {
            let api = api.clone();
            async move { api.client_stats().await }
        })
    });
    let task_stats = console.auth.can(Permission::ExecuteTasks).then(|| {
        let api = console.api.clone();
        create_resource(move || version.get(), move |_| {
            let api = api.clone();
            async move { api.task_stats().await }
        })
    });
    let audit_stats = console.auth.can(Permission::ViewAuditLogs).then(|| {
        let api = console.api.clone();
        create_resource(move || version.get(), move |_| {
            let api = api.clone();
            async move { api.audit_stats().await }
        })
    });

    view! {
        <section class="overview">
            <h2>"Overview"</h2>
            <div class="health">
                {move || match health.get() {
                    None => view! { <Spinner/> }.into_view(),
                    Some(Ok(status)) => {
                        let line = match &status.version {
                            Some(version) => format!("Backend {} (v{version})", status.status),
                            None => format!("Backend {}", status.status),
                        };
                        let class = if status.is_healthy() {
                            "health-line"
                        } else {
                            "health-line health-down"
                        };
                        view! { <p class=class>{line}</p> }.into_view()
                    }
                    Some(Err(_)) => view! {
                        <p class="health-line health-down">"Backend unreachable"</p>
                    }
                    .into_view(),
                }}
            </div>
            <div class="stat-grid">
                {user_stats.map(|stats| view! {
                    {move || stats.get().and_then(Result::ok).map(|s| view! {
                        <StatCard label="Users" value=s.total.to_string()/>
                        <StatCard label="Active users" value=s.active.to_string()/>
                    })}
                })}
                {client_stats.map(|stats| view! {
                    {move || stats.get().and_then(Result::ok).map(|s| view! {
                        <StatCard label="Clients" value=s.total.to_string()/>
                        <StatCard label="Online" value=s.online.to_string()/>
                        <StatCard label="Offline" value=s.offline.to_string()/>
                    })}
                })}
                {task_stats.map(|stats| view! {
                    {move || stats.get().and_then(Result::ok).map(|s| view! {
                        <StatCard label="Tasks pending" value=s.pending.to_string()/>
                        <StatCard label="Tasks running" value=s.running.to_string()/>
                        <StatCard label="Tasks failed" value=s.failed.to_string()/>
                    })}
                })}
                {audit_stats.map(|stats| view! {
                    {move || stats.get().and_then(Result::ok).map(|s| view! {
                        <StatCard label="Audit events" value=s.total_events.to_string()/>
                        <StatCard label="Critical events" value=s.critical.to_string()/>
                    })}
                })}
            </div>
        </section>
    }
}
