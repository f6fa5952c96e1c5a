//! Application shell: shared context, routing, sidebar.

use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use warden_auth::{AuthContext, AuthPhase, Permission, Session};
use warden_client::ApiClient;
use warden_core::{ApiError, ConsoleConfig};

use crate::format::role_label;
use crate::frontend::cookie_store::BrowserCookieStore;
use crate::frontend::guard::RequireAuth;
use crate::frontend::pages::audit::AuditPage;
use crate::frontend::pages::clients::ClientsPage;
use crate::frontend::pages::login::LoginPage;
use crate::frontend::pages::overview::OverviewPage;
use crate::frontend::pages::security::SecurityPage;
use crate::frontend::pages::tasks::TasksPage;
use crate::frontend::pages::users::UsersPage;
use crate::frontend::toast::{ConsoleEvents, ToastHost, Toasts};

/// Everything a page needs, provided once as Leptos context.
///
/// `phase` mirrors the auth context's phase as a signal so the router can
/// react to login, logout, and session expiry.
#[derive(Clone)]
pub struct Console {
    pub api: ApiClient,
    pub auth: AuthContext<ApiClient>,
    pub phase: RwSignal<AuthPhase>,
    pub toasts: Toasts,
}

impl Console {
    fn build() -> Result<Self, ApiError> {
        let config = ConsoleConfig::default();
        let session = Session::new(Rc::new(BrowserCookieStore));
        let toasts = Toasts::new();
        let phase = create_rw_signal(AuthPhase::Unknown);
        let events = Rc::new(ConsoleEvents { toasts, phase });

        let api = ApiClient::new(&config, session.clone(), events)?;
        let auth = AuthContext::new(api.clone(), session);
        Ok(Self {
            api,
            auth,
            phase,
            toasts,
        })
    }

    /// Copy the auth context's phase into the reactive mirror. Call after
    /// any await on an auth operation.
    pub fn sync_phase(&self) {
        self.phase.set(self.auth.phase());
    }
}

#[component]
pub fn App() -> impl IntoView {
    let console = match Console::build() {
        Ok(console) => console,
        Err(err) => {
            tracing::error!(error = %err, "failed to construct the api gateway");
            return view! { <p class="fatal">"The console failed to start."</p> }.into_view();
        }
    };
    provide_context(console.toasts);
    provide_context(console.clone());

    // Restore a persisted session before any guarded route renders.
    {
        let console = console.clone();
        spawn_local(async move {
            console.auth.bootstrap().await;
            console.sync_phase();
        });
    }

    view! {
        <Router>
            <ToastHost/>
            <Routes>
                <Route path="/login" view=LoginPage/>
                <Route path="/" view=Shell>
                    <Route path="" view=OverviewPage/>
                    <Route path="users" view=UsersPage/>
                    <Route path="clients" view=ClientsPage/>
                    <Route path="tasks" view=TasksPage/>
                    <Route path="audit" view=AuditPage/>
                    <Route path="security" view=SecurityPage/>
                </Route>
            </Routes>
        </Router>
    }
    .into_view()
}

/// Authenticated layout: sidebar plus the routed page.
#[component]
fn Shell() -> impl IntoView {
    view! {
        <RequireAuth>
            <div class="layout">
                <Sidebar/>
                <main class="content">
                    <Outlet/>
                </main>
            </div>
        </RequireAuth>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let console = expect_context::<Console>();
    let logout = {
        let console = console.clone();
        move |_| {
            let console = console.clone();
            spawn_local(async move {
                console.auth.logout().await;
                console.sync_phase();
            });
        }
    };

    view! {
        <nav class="sidebar">
            <h1 class="brand">"Warden"</h1>
            {
                let console = console.clone();
                move || {
                    // The link set follows the session.
                    let _ = console.phase.get();
                    let auth = console.auth.clone();
                    view! {
                        <div class="whoami">
                            {auth.user().map(|u| {
                                view! {
                                    <span class="username">{u.username}</span>
                                    <span class="role">{role_label(u.role)}</span>
                                }
                            })}
                        </div>
                        <ul class="nav">
                            <li><A href="/">"Overview"</A></li>
                            {auth.can(Permission::ManageUsers).then(|| view! {
                                <li><A href="/users">"Users"</A></li>
                            })}
                            {auth.can(Permission::ManageClients).then(|| view! {
                                <li><A href="/clients">"Clients"</A></li>
                            })}
                            {auth.can(Permission::ExecuteTasks).then(|| view! {
                                <li><A href="/tasks">"Tasks"</A></li>
                            })}
                            {auth.can(Permission::ViewAuditLogs).then(|| view! {
                                <li><A href="/audit">"Audit log"</A></li>
                                <li><A href="/security">"Security"</A></li>
                            })}
                        </ul>
                    }
                }
            }
            <button class="logout" on:click=logout>"Sign out"</button>
        </nav>
    }
}
