//! Audit trail with filters and CSV export.

use chrono::{NaiveDate, Utc};
use leptos::*;

use warden_auth::Permission;
use warden_client::{AuditFilter, audit_export_filename};
use warden_core::Severity;

use crate::format::{severity_badge, timestamp};
use crate::frontend::app::Console;
use crate::frontend::components::{Badge, Paginator, Spinner};
use crate::frontend::download::download_csv;
use crate::frontend::guard::RequirePermission;
use crate::paging::Pager;

#[component]
pub fn AuditPage() -> impl IntoView {
    view! {
        <RequirePermission permission=Permission::ViewAuditLogs>
            <AuditTable/>
        </RequirePermission>
    }
}

fn parse_day_start(value: &str) -> Option<chrono::DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

fn parse_day_end(value: &str) -> Option<chrono::DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(23, 59, 59)?.and_utc())
}

fn parse_severity(value: &str) -> Option<Severity> {
    match value {
        "info" => Some(Severity::Info),
        "warning" => Some(Severity::Warning),
        "critical" => Some(Severity::Critical),
        _ => None,
    }
}

fn non_empty(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

#[component]
fn AuditTable() -> impl IntoView {
    let console = expect_context::<Console>();
    let pager = create_rw_signal(Pager::new());
    let filter = create_rw_signal(AuditFilter::default());
    let can_export = console.auth.can(Permission::ExportData);

    let logs = {
        let api = console.api.clone();
        create_resource(
            move || (pager.get().request(), filter.get()),
            move |(request, filter)| {
                let api = api.clone();
                async move { api.list_audit_logs(request, &filter).await }
            },
        )
    };
    create_effect(move |_| {
        if let Some(Ok(page)) = logs.get() {
            pager.update(|p| p.saw_total(page.total_count));
        }
    });

    let export = {
        let console = console.clone();
        move |_| {
            let console = console.clone();
            let filter = filter.get_untracked();
            spawn_local(async move {
                if let Ok(bytes) = console.api.export_audit_csv(&filter).await {
                    let filename = audit_export_filename(Utc::now().date_naive());
                    if download_csv(&bytes, &filename).is_ok() {
                        console.toasts.success(format!("Exported {filename}"));
                    } else {
                        console.toasts.error("The download could not be started.");
                    }
                }
            });
        }
    };

    view! {
        <section class="audit">
            <header class="page-header">
                <h2>"Audit log"</h2>
                {can_export.then(move || view! {
                    <button on:click=export>"Export CSV"</button>
                })}
            </header>
            <div class="filters">
                <label>"Severity"</label>
                <select on:change=move |ev| {
                    let severity = parse_severity(&event_target_value(&ev));
                    filter.update(|f| f.severity = severity);
                    pager.update(|p| p.page = 1);
                }>
                    <option value="">"All"</option>
                    <option value="info">"Info"</option>
                    <option value="warning">"Warning"</option>
                    <option value="critical">"Critical"</option>
                </select>
                <label>"Category"</label>
                <input type="text" on:change=move |ev| {
                    filter.update(|f| f.category = non_empty(event_target_value(&ev)));
                    pager.update(|p| p.page = 1);
                }/>
                <label>"Username"</label>
                <input type="text" on:change=move |ev| {
                    filter.update(|f| f.username = non_empty(event_target_value(&ev)));
                    pager.update(|p| p.page = 1);
                }/>
                <label>"From"</label>
                <input type="date" on:change=move |ev| {
                    filter.update(|f| f.start_date = parse_day_start(&event_target_value(&ev)));
                    pager.update(|p| p.page = 1);
                }/>
                <label>"To"</label>
                <input type="date" on:change=move |ev| {
                    filter.update(|f| f.end_date = parse_day_end(&event_target_value(&ev)));
                    pager.update(|p| p.page = 1);
                }/>
            </div>
            {move || match logs.get() {
                None => view! { <Spinner/> }.into_view(),
                Some(Err(err)) => view! { <p class="error">{err.to_string()}</p> }.into_view(),
                Some(Ok(page)) if page.items.is_empty() => {
                    view! { <p class="empty">"No events match the current filters."</p> }
                        .into_view()
                }
                Some(Ok(page)) => view! {
                    <table>
                        <thead>
                            <tr>
                                <th>"Time"</th>
                                <th>"Severity"</th>
                                <th>"User"</th>
                                <th>"Action"</th>
                                <th>"Category"</th>
                                <th>"Resource"</th>
                                <th>"IP"</th>
                                <th>"Detail"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {page.items.into_iter().map(|log| view! {
                                <tr>
                                    <td>{timestamp(log.timestamp)}</td>
                                    <td>
                                        <Badge
                                            class=severity_badge(log.severity)
                                            label=log.severity.to_string()
                                        />
                                    </td>
                                    <td>{log.username}</td>
                                    <td>{log.action}</td>
                                    <td>{log.category}</td>
                                    <td>{log.resource}</td>
                                    <td>{log.ip_address.unwrap_or_else(|| {
                                        crate::format::EMPTY_FIELD.to_string()
                                    })}</td>
                                    <td>{log.detail.unwrap_or_default()}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }
                .into_view(),
            }}
            <Paginator pager=pager/>
        </section>
    }
}
