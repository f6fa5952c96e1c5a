//! Task dispatch and tracking.

use std::str::FromStr;
use std::time::Duration;

use leptos::*;

use warden_auth::Permission;
use warden_client::NewTask;
use warden_core::{ClientId, PageRequest, Task};

use crate::format::{task_badge, timestamp, timestamp_opt};
use crate::frontend::app::Console;
use crate::frontend::components::{Badge, Modal, Paginator, Spinner};
use crate::frontend::guard::RequirePermission;
use crate::frontend::polling::use_polling;
use crate::paging::Pager;

/// Task state moves on the backend; keep the listing current.
const REFRESH_PERIOD: Duration = Duration::from_secs(15);

#[component]
pub fn TasksPage() -> impl IntoView {
    view! {
        <RequirePermission permission=Permission::ExecuteTasks>
            <TasksTable/>
        </RequirePermission>
    }
}

#[component]
fn TasksTable() -> impl IntoView {
    let console = expect_context::<Console>();
    let pager = create_rw_signal(Pager::new());
    let version = create_rw_signal(0u32);
    let creating = create_rw_signal(false);

    use_polling(REFRESH_PERIOD, move || version.update(|v| *v += 1));

    let tasks = {
        let api = console.api.clone();
        create_resource(
            move || (pager.get().request(), version.get()),
            move |(request, _)| {
                let api = api.clone();
                async move { api.list_tasks(request).await }
            },
        )
    };
    create_effect(move |_| {
        if let Some(Ok(page)) = tasks.get() {
            pager.update(|p| p.saw_total(page.total_count));
        }
    });
    let refetch = move || version.update(|v| *v += 1);

    let cancel = {
        let console = console.clone();
        move |task: Task| {
            let console = console.clone();
            spawn_local(async move {
                if console.api.cancel_task(task.id).await.is_ok() {
                    console.toasts.success("Cancellation requested");
                    refetch();
                }
            });
        }
    };

    view! {
        <section class="tasks">
            <header class="page-header">
                <h2>"Tasks"</h2>
                <button on:click=move |_| creating.set(true)>"New task"</button>
            </header>
            {move || match tasks.get() {
                None => view! { <Spinner/> }.into_view(),
                Some(Err(err)) => view! { <p class="error">{err.to_string()}</p> }.into_view(),
                Some(Ok(page)) => {
                    let cancel = cancel.clone();
                    view! {
                        <table>
                            <thead>
                                <tr>
                                    <th>"Command"</th>
                                    <th>"Client"</th>
                                    <th>"Status"</th>
                                    <th>"Created by"</th>
                                    <th>"Created"</th>
                                    <th>"Finished"</th>
                                    <th>"Result"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {page.items.into_iter().map(|task| {
                                    let cancel = cancel.clone();
                                    let cancel_target = task.clone();
                                    view! {
                                        <tr>
                                            <td class="command">{task.command.clone()}</td>
                                            <td>{task.client_id.to_string()}</td>
                                            <td>
                                                <Badge
                                                    class=task_badge(task.status)
                                                    label=task.status.to_string()
                                                />
                                            </td>
                                            <td>{task.created_by.clone()}</td>
                                            <td>{timestamp(task.created_at)}</td>
                                            <td>{timestamp_opt(task.finished_at)}</td>
                                            <td>{result_cell(&task)}</td>
                                            <td>
                                                {task.status.is_cancellable().then(|| view! {
                                                    <button
                                                        class="danger"
                                                        on:click=move |_| {
                                                            cancel(cancel_target.clone())
                                                        }
                                                    >
                                                        "Cancel"
                                                    </button>
                                                })}
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
            {move || creating.get().then(|| view! {
                <CreateTaskModal
                    on_done=Callback::new(move |created| {
                        creating.set(false);
                        if created {
                            refetch();
                        }
                    })
                />
            })}
        </section>
    }
}

fn result_cell(task: &Task) -> impl IntoView {
    let exit = task
        .exit_code
        .map(|code| format!("exit {code}"))
        .unwrap_or_else(|| crate::format::EMPTY_FIELD.to_string());
    let output = task.output.clone().filter(|o| !o.is_empty());
    view! {
        <span>{exit}</span>
        {output.map(|output| view! {
            <details>
                <summary>"Output"</summary>
                <pre>{output}</pre>
            </details>
        })}
    }
}

/// Dispatch form. The client list is fetched once for the dropdown.
#[component]
fn CreateTaskModal(on_done: Callback<bool>) -> impl IntoView {
    let console = expect_context::<Console>();
    let client_id = create_rw_signal(Option::<ClientId>::None);
    let command = create_rw_signal(String::new());
    let timeout = create_rw_signal(String::new());
    let form_error = create_rw_signal(Option::<String>::None);
    let submitting = create_rw_signal(false);

    let clients = {
        let api = console.api.clone();
        create_resource(
            || (),
            move |()| {
                let api = api.clone();
                async move { api.list_clients(PageRequest::new(1, 100)).await }
            },
        )
    };

    let submit = {
        let console = console.clone();
        move || {
            if submitting.get_untracked() {
                return;
            }
            let Some(client) = client_id.get_untracked() else {
                form_error.set(Some("pick a client".to_string()));
                return;
            };
            submitting.set(true);
            form_error.set(None);

            let console = console.clone();
            let task = NewTask {
                client_id: client,
                command: command.get_untracked(),
                timeout_secs: timeout.get_untracked().trim().parse().ok(),
            };
            spawn_local(async move {
                match console.api.create_task(&task).await {
                    Ok(_) => {
                        console.toasts.success("Task dispatched");
                        on_done.call(true);
                    }
                    Err(err) => form_error.set(Some(err.to_string())),
                }
                submitting.set(false);
            });
        }
    };

    view! {
        <Modal title="New task" on_close=Callback::new(move |()| on_done.call(false))>
            <form on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }>
                <label>"Client"</label>
                <select on:change=move |ev| {
                    client_id.set(ClientId::from_str(&event_target_value(&ev)).ok());
                }>
                    <option value="">"Select a client…"</option>
                    {move || clients.get().and_then(Result::ok).map(|page| {
                        page.items.into_iter().map(|client| {
                            view! {
                                <option value=client.id.to_string()>
                                    {client.hostname}
                                </option>
                            }
                        }).collect_view()
                    })}
                </select>
                <label>"Command"</label>
                <textarea
                    prop:value=move || command.get()
                    on:input=move |ev| command.set(event_target_value(&ev))
                ></textarea>
                <label>"Timeout (seconds, optional)"</label>
                <input
                    type="number"
                    prop:value=move || timeout.get()
                    on:input=move |ev| timeout.set(event_target_value(&ev))
                />
                {move || form_error.get().map(|message| view! {
                    <p class="form-error">{message}</p>
                })}
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Dispatching…" } else { "Dispatch" }}
                </button>
            </form>
        </Modal>
    }
}
