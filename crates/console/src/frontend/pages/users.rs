//! User administration.

use std::str::FromStr;

use leptos::*;

use warden_auth::{Permission, Role, UserAccount};
use warden_client::{NewUser, UpdateUser};

use crate::format::{role_label, timestamp, timestamp_opt, user_badge};
use crate::frontend::app::Console;
use crate::frontend::components::{Badge, Modal, Paginator, Spinner};
use crate::frontend::guard::RequirePermission;
use crate::paging::Pager;
use crate::sort::SortState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UserColumn {
    Username,
    Role,
    LastLogin,
    Created,
}

fn compare(key: UserColumn, a: &UserAccount, b: &UserAccount) -> std::cmp::Ordering {
    match key {
        UserColumn::Username => a.username.cmp(&b.username),
        UserColumn::Role => a.role.as_str().cmp(b.role.as_str()),
        UserColumn::LastLogin => a.last_login.cmp(&b.last_login),
        UserColumn::Created => a.created_at.cmp(&b.created_at),
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <RequirePermission permission=Permission::ManageUsers>
            <UsersTable/>
        </RequirePermission>
    }
}

#[component]
fn UsersTable() -> impl IntoView {
    let console = expect_context::<Console>();
    let pager = create_rw_signal(Pager::new());
    let version = create_rw_signal(0u32);
    let sort = create_rw_signal(SortState::<UserColumn>::unsorted());
    let creating = create_rw_signal(false);
    let editing = create_rw_signal(Option::<UserAccount>::None);

    let users = {
        let api = console.api.clone();
        create_resource(
            move || (pager.get().request(), version.get()),
            move |(request, _)| {
                let api = api.clone();
                async move { api.list_users(request).await }
            },
        )
    };
    create_effect(move |_| {
        if let Some(Ok(page)) = users.get() {
            pager.update(|p| p.saw_total(page.total_count));
        }
    });
    let refetch = move || version.update(|v| *v += 1);

    let delete = {
        let console = console.clone();
        move |user: UserAccount| {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message(&format!("Delete user \"{}\"?", user.username))
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let console = console.clone();
            spawn_local(async move {
                if console.api.delete_user(user.id).await.is_ok() {
                    console.toasts.success(format!("Deleted {}", user.username));
                    refetch();
                }
            });
        }
    };

    let header = move |label: &'static str, key: UserColumn| {
        view! {
            <th on:click=move |_| sort.update(|s| s.toggle(key))>
                {move || format!("{label}{}", sort.get().indicator(key))}
            </th>
        }
    };

    view! {
        <section class="users">
            <header class="page-header">
                <h2>"Users"</h2>
                <button on:click=move |_| creating.set(true)>"New user"</button>
            </header>
            {move || match users.get() {
                None => view! { <Spinner/> }.into_view(),
                Some(Err(err)) => view! { <p class="error">{err.to_string()}</p> }.into_view(),
                Some(Ok(page)) => {
                    let mut rows = page.items;
                    sort.get().apply(&mut rows, compare);
                    let delete = delete.clone();
                    view! {
                        <table>
                            <thead>
                                <tr>
                                    {header("Username", UserColumn::Username)}
                                    <th>"Full name"</th>
                                    {header("Role", UserColumn::Role)}
                                    <th>"Status"</th>
                                    {header("Last login", UserColumn::LastLogin)}
                                    {header("Created", UserColumn::Created)}
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter().map(|user| {
                                    let delete = delete.clone();
                                    let edit_target = user.clone();
                                    let delete_target = user.clone();
                                    view! {
                                        <tr>
                                            <td>{user.username.clone()}</td>
                                            <td>{user.full_name.clone()}</td>
                                            <td>{role_label(user.role)}</td>
                                            <td>
                                                <Badge
                                                    class=user_badge(user.status)
                                                    label=user.status.to_string()
                                                />
                                            </td>
                                            <td>{timestamp_opt(user.last_login)}</td>
                                            <td>{timestamp(user.created_at)}</td>
                                            <td>
                                                <button on:click=move |_| {
                                                    editing.set(Some(edit_target.clone()))
                                                }>"Edit"</button>
                                                <button
                                                    class="danger"
                                                    on:click=move |_| delete(delete_target.clone())
                                                >
                                                    "Delete"
                                                </button>
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
                <CreateUserModal
                    on_done=Callback::new(move |created| {
                        creating.set(false);
                        if created {
                            refetch();
                        }
                    })
                />
            })}
            {move || editing.get().map(|user| view! {
                <EditUserModal
                    user=user
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

fn role_options(selected: Role) -> impl IntoView {
    Role::ALL
        .into_iter()
        .map(|role| {
            view! {
                <option value=role.as_str() selected=role == selected>
                    {role_label(role)}
                </option>
            }
        })
        .collect_view()
}

/// New-user form. `on_done(true)` means a user was created.
#[component]
fn CreateUserModal(on_done: Callback<bool>) -> impl IntoView {
    let console = expect_context::<Console>();
    let username = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let full_name = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let role = create_rw_signal(Role::Technician);
    let form_error = create_rw_signal(Option::<String>::None);
    let submitting = create_rw_signal(false);

    let submit = {
        let console = console.clone();
        move || {
            if submitting.get_untracked() {
                return;
            }
            submitting.set(true);
            form_error.set(None);

            let console = console.clone();
            let user = NewUser {
                username: username.get_untracked(),
                email: email.get_untracked(),
                full_name: full_name.get_untracked(),
                password: password.get_untracked(),
                role: role.get_untracked(),
            };
            spawn_local(async move {
                match console.api.create_user(&user).await {
                    Ok(created) => {
                        console.toasts.success(format!("Created {}", created.username));
                        on_done.call(true);
                    }
                    // Keep the modal open so the input is not lost.
                    Err(err) => form_error.set(Some(err.to_string())),
                }
                submitting.set(false);
            });
        }
    };

    view! {
        <Modal title="New user" on_close=Callback::new(move |()| on_done.call(false))>
            <form on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }>
                <label>"Username"</label>
                <input
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <label>"Email"</label>
                <input
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <label>"Full name"</label>
                <input
                    type="text"
                    prop:value=move || full_name.get()
                    on:input=move |ev| full_name.set(event_target_value(&ev))
                />
                <label>"Password"</label>
                <input
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <label>"Role"</label>
                <select on:change=move |ev| {
                    if let Ok(parsed) = Role::from_str(&event_target_value(&ev)) {
                        role.set(parsed);
                    }
                }>
                    {role_options(Role::Technician)}
                </select>
                {move || form_error.get().map(|message| view! {
                    <p class="form-error">{message}</p>
                })}
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating…" } else { "Create" }}
                </button>
            </form>
        </Modal>
    }
}

/// Edit form. `on_done(true)` means the user record changed.
#[component]
fn EditUserModal(user: UserAccount, on_done: Callback<bool>) -> impl IntoView {
    let console = expect_context::<Console>();
    let email = create_rw_signal(user.email.clone());
    let full_name = create_rw_signal(user.full_name.clone());
    let role = create_rw_signal(user.role);
    let is_active = create_rw_signal(user.is_active);
    let form_error = create_rw_signal(Option::<String>::None);
    let submitting = create_rw_signal(false);
    let id = user.id;
    let initial_role = user.role;

    let submit = {
        let console = console.clone();
        move || {
            if submitting.get_untracked() {
                return;
            }
            submitting.set(true);
            form_error.set(None);

            let console = console.clone();
            let update = UpdateUser {
                email: Some(email.get_untracked()),
                full_name: Some(full_name.get_untracked()),
                role: Some(role.get_untracked()),
                is_active: Some(is_active.get_untracked()),
            };
            spawn_local(async move {
                match console.api.update_user(id, &update).await {
                    Ok(updated) => {
                        console.toasts.success(format!("Updated {}", updated.username));
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
            title=format!("Edit {}", user.username)
            on_close=Callback::new(move |()| on_done.call(false))
        >
            <form on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }>
                <label>"Email"</label>
                <input
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <label>"Full name"</label>
                <input
                    type="text"
                    prop:value=move || full_name.get()
                    on:input=move |ev| full_name.set(event_target_value(&ev))
                />
                <label>"Role"</label>
                <select on:change=move |ev| {
                    if let Ok(parsed) = Role::from_str(&event_target_value(&ev)) {
                        role.set(parsed);
                    }
                }>
                    {role_options(initial_role)}
                </select>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || is_active.get()
                        on:change=move |ev| is_active.set(event_target_checked(&ev))
                    />
                    "Active"
                </label>
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
