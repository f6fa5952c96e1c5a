//! Route guards.

use leptos::*;
use leptos_router::Redirect;

use warden_auth::{AuthPhase, Permission};

use crate::access::{SectionAccess, section_access};
use crate::frontend::app::Console;
use crate::frontend::components::Spinner;

/// Renders its children only for an authenticated session.
///
/// While the startup check runs the guard shows a spinner; once the phase
/// settles on unauthenticated it redirects to the login screen and renders
/// nothing protected.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let console = expect_context::<Console>();
    view! {
        {move || match console.phase.get() {
            AuthPhase::Unknown => view! { <Spinner/> }.into_view(),
            AuthPhase::Unauthenticated => view! { <Redirect path="/login"/> }.into_view(),
            AuthPhase::Authenticated => children().into_view(),
        }}
    }
}

/// Renders its children only when the current role holds `permission`;
/// otherwise shows an access-denied notice and fetches nothing. The section
/// component (and its resources) is only constructed on a granted decision.
#[component]
pub fn RequirePermission(permission: Permission, children: ChildrenFn) -> impl IntoView {
    let console = expect_context::<Console>();
    view! {
        {move || {
            match section_access(console.phase.get(), console.auth.role(), permission) {
                SectionAccess::Pending => view! { <Spinner/> }.into_view(),
                SectionAccess::SignIn => view! { <Redirect path="/login"/> }.into_view(),
                SectionAccess::Granted => children().into_view(),
                SectionAccess::Denied => view! {
                    <div class="access-denied">
                        <h2>"Access denied"</h2>
                        <p>"Your role does not include access to this section."</p>
                    </div>
                }
                .into_view(),
            }
        }}
    }
}
