//! Auth context: session lifecycle and permission predicates.
//!
//! The context is a small state machine:
//!
//! ```text
//! Unknown ──bootstrap──▶ Authenticated ◀──login── Unauthenticated
//!    │                        │                        ▲
//!    └──────(no/bad token)────┴──logout / 401 ─────────┘
//! ```
//!
//! `Unknown` is entered exactly once, at startup, while the persisted token
//! is being validated. The two terminal phases flip back and forth through
//! explicit login/logout (or session invalidation).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use warden_core::ApiResult;

use crate::permissions::Permission;
use crate::role::Role;
use crate::session::Session;
use crate::user::UserAccount;

/// Where the console stands with respect to authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    /// Startup check in progress; render a loading state, nothing protected.
    Unknown,
    /// Token validated and user loaded.
    Authenticated,
    /// No valid session.
    Unauthenticated,
}

/// Login form payload for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Response of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub user: UserAccount,
}

/// Network seam for the auth endpoints.
///
/// Implemented by the API gateway; tests substitute a scripted mock.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse>;
    async fn logout(&self) -> ApiResult<()>;
    async fn current_user(&self) -> ApiResult<UserAccount>;
    async fn validate_session(&self) -> ApiResult<()>;
}

/// Explicitly passed auth handle.
///
/// Cloning yields another handle onto the same state; there is no hidden
/// process-wide singleton.
#[derive(Clone)]
pub struct AuthContext<B: AuthBackend> {
    backend: B,
    session: Session,
    user: Rc<RefCell<Option<UserAccount>>>,
    phase: Rc<Cell<AuthPhase>>,
}

impl<B: AuthBackend> AuthContext<B> {
    pub fn new(backend: B, session: Session) -> Self {
        Self {
            backend,
            session,
            user: Rc::new(RefCell::new(None)),
            phase: Rc::new(Cell::new(AuthPhase::Unknown)),
        }
    }

    pub fn phase(&self) -> AuthPhase {
        self.phase.get()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current user record, if loaded.
    pub fn user(&self) -> Option<UserAccount> {
        self.user.borrow().clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.borrow().as_ref().map(|u| u.role)
    }

    /// Invariant: authenticated ⇔ token present ∧ user present.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_present() && self.user.borrow().is_some()
    }

    /// Whether the current user holds `permission`. False when logged out.
    pub fn can(&self, permission: Permission) -> bool {
        self.role().is_some_and(|role| role.grants(permission))
    }

    pub fn can_manage_users(&self) -> bool {
        self.can(Permission::ManageUsers)
    }

    pub fn can_manage_clients(&self) -> bool {
        self.can(Permission::ManageClients)
    }

    pub fn can_execute_tasks(&self) -> bool {
        self.can(Permission::ExecuteTasks)
    }

    pub fn can_view_audit_logs(&self) -> bool {
        self.can(Permission::ViewAuditLogs)
    }

    pub fn can_export_data(&self) -> bool {
        self.can(Permission::ExportData)
    }

    /// Startup transition out of `Unknown`.
    ///
    /// With a persisted token: validate it, then load the current user. Any
    /// failure clears the session — a token that does not validate is dead,
    /// not a transient error.
    pub async fn bootstrap(&self) -> AuthPhase {
        if !self.session.is_present() {
            self.enter_unauthenticated();
            return self.phase();
        }

        let outcome = async {
            self.backend.validate_session().await?;
            self.backend.current_user().await
        }
        .await;

        match outcome {
            Ok(user) => self.enter_authenticated(user),
            Err(err) => {
                tracing::debug!(error = %err, "persisted session did not validate");
                self.enter_unauthenticated();
            }
        }
        self.phase()
    }

    /// Exchange credentials for a session.
    ///
    /// On failure the error carries the backend's message and the state stays
    /// `Unauthenticated`, so the login form can surface it and remain visible.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<()> {
        match self.backend.login(credentials).await {
            Ok(response) => {
                self.session.save(&response.access_token);
                self.enter_authenticated(response.user);
                tracing::info!(username = %credentials.username, "login succeeded");
                Ok(())
            }
            Err(err) => {
                self.enter_unauthenticated();
                tracing::warn!(username = %credentials.username, error = %err, "login failed");
                Err(err)
            }
        }
    }

    /// End the session. The backend call is best-effort; local state is
    /// cleared unconditionally.
    pub async fn logout(&self) {
        if let Err(err) = self.backend.logout().await {
            tracing::debug!(error = %err, "backend logout failed; clearing locally anyway");
        }
        self.enter_unauthenticated();
    }

    /// Re-fetch the current user. A refresh failure is treated as session
    /// invalidation, not a transient error.
    pub async fn refresh(&self) {
        if !self.session.is_present() {
            self.enter_unauthenticated();
            return;
        }
        match self.backend.current_user().await {
            Ok(user) => self.enter_authenticated(user),
            Err(err) => {
                tracing::debug!(error = %err, "refresh failed; invalidating session");
                self.enter_unauthenticated();
            }
        }
    }

    fn enter_authenticated(&self, user: UserAccount) {
        *self.user.borrow_mut() = Some(user);
        self.phase.set(AuthPhase::Authenticated);
    }

    fn enter_unauthenticated(&self) {
        self.session.clear();
        *self.user.borrow_mut() = None;
        self.phase.set(AuthPhase::Unauthenticated);
    }
}
