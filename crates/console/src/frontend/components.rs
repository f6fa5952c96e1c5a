//! Small shared UI pieces.

use leptos::*;

use crate::paging::Pager;

#[component]
pub fn Spinner() -> impl IntoView {
    view! { <div class="spinner" role="status">"Loading…"</div> }
}

/// Status pill. `class` comes from the `format` helpers.
#[component]
pub fn Badge(class: &'static str, #[prop(into)] label: String) -> impl IntoView {
    view! { <span class=format!("badge {class}")>{label}</span> }
}

/// Modal dialog. The backdrop click and the close button both fire
/// `on_close`; the caller owns the open/closed state.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.call(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <header class="modal-header">
                    <h3>{title}</h3>
                    <button class="modal-close" on:click=move |_| on_close.call(())>
                        "✕"
                    </button>
                </header>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}

/// Prev/next pagination controls driven by a shared [`Pager`] signal.
#[component]
pub fn Paginator(pager: RwSignal<Pager>) -> impl IntoView {
    view! {
        <div class="paginator">
            <button
                disabled=move || !pager.get().has_prev()
                on:click=move |_| pager.update(|p| p.prev())
            >
                "Previous"
            </button>
            <span class="paginator-label">{move || pager.get().label()}</span>
            <button
                disabled=move || !pager.get().has_next()
                on:click=move |_| pager.update(|p| p.next())
            >
                "Next"
            </button>
        </div>
    }
}

/// Single stat tile used on the overview page.
#[component]
pub fn StatCard(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}
