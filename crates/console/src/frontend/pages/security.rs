//! Security alert feed.
//!
//! The feed is computed by the backend from audit heuristics and is
//! read-only here.

use std::time::Duration;

use leptos::*;

use warden_auth::Permission;

use crate::format::{severity_badge, timestamp};
use crate::frontend::app::Console;
use crate::frontend::components::{Badge, Spinner};
use crate::frontend::guard::RequirePermission;
use crate::frontend::polling::use_polling;

const REFRESH_PERIOD: Duration = Duration::from_secs(60);

#[component]
pub fn SecurityPage() -> impl IntoView {
    view! {
        <RequirePermission permission=Permission::ViewAuditLogs>
            <AlertFeed/>
        </RequirePermission>
    }
}

#[component]
fn AlertFeed() -> impl IntoView {
    let console = expect_context::<Console>();
    let version = create_rw_signal(0u32);
    use_polling(REFRESH_PERIOD, move || version.update(|v| *v += 1));

    let alerts = {
        let api = console.api.clone();
        create_resource(move || version.get(), move |_| {
            let api = api.clone();
            async move { api.security_alerts().await }
        })
    };

    view! {
        <section class="security">
            <header class="page-header">
                <h2>"Security alerts"</h2>
            </header>
            {move || match alerts.get() {
                None => view! { <Spinner/> }.into_view(),
                Some(Err(err)) => view! { <p class="error">{err.to_string()}</p> }.into_view(),
                Some(Ok(alerts)) if alerts.is_empty() => {
                    view! { <p class="empty">"No active alerts."</p> }.into_view()
                }
                Some(Ok(alerts)) => view! {
                    <ul class="alert-feed">
                        {alerts.into_iter().map(|alert| view! {
                            <li class="alert">
                                <Badge
                                    class=severity_badge(alert.severity)
                                    label=alert.severity.to_string()
                                />
                                <span class="alert-rule">{alert.rule}</span>
                                <span class="alert-time">{timestamp(alert.triggered_at)}</span>
                                <p class="alert-description">{alert.description}</p>
                                {alert.username.map(|username| view! {
                                    <span class="alert-user">{format!("user: {username}")}</span>
                                })}
                                {alert.source_ip.map(|ip| view! {
                                    <span class="alert-ip">{format!("source: {ip}")}</span>
                                })}
                            </li>
                        }).collect_view()}
                    </ul>
                }
                .into_view(),
            }}
        </section>
    }
}
