use crate::shared::icons::icon;
use contracts::shared::view_state::Pager;
use leptos::prelude::*;

/// PaginationControls component - Prev / Next with a "Page x of y" label
///
/// Pages are 1-based; `pager` carries the page after clamping.
#[component]
pub fn PaginationControls(
    /// Current position of the pager
    #[prop(into)]
    pager: Signal<Pager>,

    /// Callback for the Prev button
    on_prev: Callback<()>,

    /// Callback for the Next button
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if pager.get().has_prev() {
                        on_prev.run(());
                    }
                }
                disabled=move || !pager.get().has_prev()
                title="Previous page"
            >
                {icon("chevron-left")}
                " Prev"
            </button>
            <span class="pagination-info">{move || pager.get().page_label()}</span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if pager.get().has_next() {
                        on_next.run(());
                    }
                }
                disabled=move || !pager.get().has_next()
                title="Next page"
            >
                "Next "
                {icon("chevron-right")}
            </button>
        </div>
    }
}
