//! Managed client fleet.

use leptos::*;

use warden_auth::Permission;
use warden_client::UpdateClient;
use warden_core::ManagedClient;

use crate::format::{client_badge, timestamp};
use crate::frontend::app::Console;
use crate::frontend::components::{Badge, Modal, Paginator, Spinner};
use crate::frontend::guard::RequirePermission;
use crate::paging::Pager;
use crate::sort::SortState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClientColumn {
    Hostname,
    Status,
    LastSeen,
}

fn compare(key: ClientColumn, a: &ManagedClient, b: &ManagedClient) -> std::cmp::Ordering {
    match key {
        ClientColumn::Hostname => a.hostname.cmp(&b.hostname),
        ClientColumn::Status => a.status.as_str().cmp(b.status.as_str()),
        ClientColumn::LastSeen => a.last_seen.cmp(&b.last_seen),
    }
}

fn last_seen_label(client: &ManagedClient) -> String {
    match client.last_seen {
        Some(at) => crate::format::ago(at, chrono::Utc::now()),
        None => "never".to_string(),
    }
}

#[component]
pub fn ClientsPage() -> impl IntoView {
    view! {
        <RequirePermission permission=Permission::ManageClients>
            <ClientsTable/>
        </RequirePermission>
    }
}

#[component]
fn ClientsTable() -> impl IntoView {
    let console = expect_context::<Console>();
    let pager = create_rw_signal(Pager::new());
    let version = create_rw_signal(0u32);
    let sort = create_rw_signal(SortState::<ClientColumn>::unsorted());
    let editing = create_rw_signal(Option::<ManagedClient>::None);

    let clients = {
        let api = console.api.clone();
        create_resource(
            move || (pager.get().request(), version.get()),
            move |(request, _)| {
                let api = api.clone();
                async move { api.list_clients(request).await }
            },
        )
    };
    create_effect(move |_| {
        if let Some(Ok(page)) = clients.get() {
            pager.update(|p| p.saw_total(page.total_count));
        }
    });
    let refetch = move || version.update(|v| *v += 1);

    let header = move |label: &'static str, key: ClientColumn| {
        view! {
            <th on:click=move |_| sort.update(|s| s.toggle(key))>
                {move || format!("{label}{}", sort.get().indicator(key))}
            </th>
        }
    };

    view! {
        <section class="clients">
            <header class="page-header">
                <h2>"Clients"</h2>
            </header>
            {move || match clients.get() {
                None => view! { <Spinner/> }.into_view(),
                Some(Err(err)) => view! { <p class="error">{err.to_string()}</p> }.into_view(),
                Some(Ok(page)) => {
                    let mut rows = page.items;
                    sort.get().apply(&mut rows, compare);
                    view! {
                        <table>
                            <thead>
                                <tr>
                                    {header("Hostname", ClientColumn::Hostname)}
                                    <th>"OS"</th>
                                    <th>"Agent"</th>
                                    {header("Status", ClientColumn::Status)}
                                    <th>"IP address"</th>
                                    <th>"Tags"</th>
                                    {header("Last seen", ClientColumn::LastSeen)}
                                    <th>"Enrolled"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|client| {
                                    let edit_target = client.clone();
                                    view! {
                                        <tr>
                                            <td>{client.hostname.clone()}</td>
                                            <td>{client.os_version.clone()}</td>
                                            <td>{client.agent_version.clone()}</td>
                                            <td>
                                                <Badge
                                                    class=client_badge(client.status)
                                                    label=client.status.to_string()
                                                />
                                            </td>
                                            <td>{client.ip_address.clone().unwrap_or_else(|| {
                                                crate::format::EMPTY_FIELD.to_string()
                                            })}</td>
                                            <td>{client.tags.join(", ")}</td>
                                            <td>{last_seen_label(&client)}</td>
                                            <td>{timestamp(client.enrolled_at)}</td>
                                            <td>
                                                <button on:click=move |_| {
                                                    editing.set(Some(edit_target.clone()))
                                                }>"Edit"</button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_view()
                }
            }}
            <Paginator pager=pager/>
            {move || editing.get().map(|client| view! {
                <EditClientModal
                    client=client
                    on_done=Callback::new(move |changed| {
                        editing.set(None);
                        if changed {
                            refetch();
                        }
                    })
                />
            })}
        </section>
    }
}

/// Metadata edit only; enrollment and status belong to the agent.
#[component]
fn EditClientModal(client: ManagedClient, on_done: Callback<bool>) -> impl IntoView {
    let console = expect_context::<Console>();
    let hostname = create_rw_signal(client.hostname.clone());
    let tags = create_rw_signal(client.tags.join(", "));
    let form_error = create_rw_signal(Option::<String>::None);
    let submitting = create_rw_signal(false);
    let id = client.id;

    let submit = {
        let console = console.clone();
        move || {
            if submitting.get_untracked() {
                return;
            }
            submitting.set(true);
            form_error.set(None);

            let console = console.clone();
            let parsed_tags: Vec<String> = tags
                .get_untracked()
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
            let update = UpdateClient {
                hostname: Some(hostname.get_untracked()),
                tags: Some(parsed_tags),
            };
            spawn_local(async move {
                match console.api.update_client(id, &update).await {
                    Ok(updated) => {
                        console.toasts.success(format!("Updated {}", updated.hostname));
                        on_done.call(true);
                    }
                    Err(err) => form_error.set(Some(err.to_string())),
                }
                submitting.set(false);
            });
        }
    };

    view! {
        <Modal
            title=format!("Edit {}", client.hostname)
            on_close=Callback::new(move |()| on_done.call(false))
        >
            <form on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }>
                <label>"Hostname"</label>
                <input
                    type="text"
                    prop:value=move || hostname.get()
                    on:input=move |ev| hostname.set(event_target_value(&ev))
                />
                <label>"Tags (comma separated)"</label>
                <input
                    type="text"
                    prop:value=move || tags.get()
                    on:input=move |ev| tags.set(event_target_value(&ev))
                />
                {move || form_error.get().map(|message| view! {
                    <p class="form-error">{message}</p>
                })}
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Saving…" } else { "Save" }}
                </button>
            </form>
        </Modal>
    }
}
