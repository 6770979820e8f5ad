mod state;

use self::state::{create_state, selected_item};
use crate::domain::a001_rental::api::fetch_rentals;
use crate::domain::a001_rental::ui::details::RentalDetails;
use crate::layout::global_context::use_site;
use crate::shared::catalog_load::CatalogLoad;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::rotating_card::RotatingCard;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_rental::RentalItem;
use contracts::shared::format::format_price;
use contracts::shared::view_state::{category_options, compute_view, CatalogView, SortMode};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn RentalList() -> impl IntoView {
    let site = use_site();
    let state = create_state();
    let catalog = RwSignal::new(CatalogLoad::<RentalItem>::Loading);

    let page_size = site.page_size;
    let (configured, period_ms) = site.with_config(|c| {
        (c.rentals.categories.clone(), c.timers.card_rotation_ms)
    });

    spawn_local(async move {
        let result = fetch_rentals(site).await;
        catalog.set(CatalogLoad::from_result(result, "rentals"));
    });

    // None while loading or when the feed is unavailable
    let page = Memo::new(move |_| {
        catalog.with(|c| match c {
            CatalogLoad::Ready(items) => Some(state.with(|s| compute_view(items, &s.view, page_size))),
            _ => None,
        })
    });

    // Настроенные категории плюс те, что встретились в листе
    let categories = Memo::new(move |_| {
        catalog.with(|c| match c {
            CatalogLoad::Ready(items) => category_options(&configured, items),
            _ => category_options::<RentalItem>(&configured, &[]),
        })
    });

    let pager = Signal::derive(move || {
        page.with(|p| p.as_ref().map(CatalogView::pager).unwrap_or_default())
    });

    let active_category = move || state.with(|s| s.view.active_category.clone());
    let select_category = move |category: String| {
        state.update(|s| s.update_view(|v| v.with_category(category)));
    };

    let category_chips = move || {
        categories
            .get()
            .into_iter()
            .map(|category| {
                let label = category.clone();
                let value = category.clone();
                view! {
                    <button
                        class="filter-btn"
                        class:active=move || active_category() == category
                        on:click=move |_| select_category(value.clone())
                    >
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    let category_select = move || {
        categories
            .get()
            .into_iter()
            .map(|category| {
                let value = category.clone();
                view! { <option value=value>{category}</option> }
            })
            .collect_view()
    };

    let body = move || {
        if catalog.with(CatalogLoad::is_loading) {
            return view! {
                <div class="catalog-status">
                    <Spinner />
                </div>
            }
            .into_any();
        }

        let Some(current) = page.get() else {
            return view! { <p class="catalog-status error">"Unable to load rentals."</p> }.into_any();
        };

        if current.is_empty() {
            return view! { <p class="catalog-status">"No rentals match your search."</p> }.into_any();
        }

        let cards = current
            .items
            .into_iter()
            .map(|item| {
                let name = item.name.clone();
                let category = item.category.clone();
                let price = format_price(item.price);
                let images = item.images.clone();
                let open = Callback::new(move |_| {
                    let item = item.clone();
                    state.update(|s| s.selected = Some(item));
                });
                view! {
                    <RotatingCard
                        images=images
                        alt=name.clone()
                        class="rental-card"
                        image_class="card-image"
                        period_ms=period_ms
                        on_click=open
                    >
                        <div class="card-body">
                            <h3 class="card-title">{name}</h3>
                            <p class="card-category">{category}</p>
                            <p class="card-price">{price}</p>
                        </div>
                    </RotatingCard>
                }
            })
            .collect_view();

        view! {
            <div class="catalog-grid">{cards}</div>
            <PaginationControls
                pager=pager
                on_prev=Callback::new(move |_| {
                    let at = pager.get_untracked();
                    state.update(|s| s.update_view(|v| at.prev(v)));
                })
                on_next=Callback::new(move |_| {
                    let at = pager.get_untracked();
                    state.update(|s| s.update_view(|v| at.next(v)));
                })
            />
        }
        .into_any()
    };

    let selected = selected_item(state);
    let modal = move || {
        selected.get().map(|item| {
            let title = item.name.clone();
            view! {
                <Modal
                    title=title
                    on_close=Callback::new(move |_| state.update(|s| s.selected = None))
                >
                    <RentalDetails item=item />
                </Modal>
            }
        })
    };

    view! {
        <section class="catalog rentals">
            <div class="catalog-filters">
                <div class="filter-chips">{category_chips}</div>
                <select
                    class="category-select"
                    prop:value=active_category
                    on:change=move |ev| select_category(event_target_value(&ev))
                >
                    {category_select}
                </select>
                <label class="search-box">
                    {icon("search")}
                    <input
                        type="search"
                        placeholder="Search rentals"
                        prop:value=move || state.with(|s| s.view.search_term.clone())
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            state.update(|s| s.update_view(|v| v.with_search(term)));
                        }
                    />
                </label>
                <select
                    class="sort-select"
                    prop:value=move || state.with(|s| s.view.sort_mode.as_value())
                    on:change=move |ev| {
                        let mode = SortMode::from_value(&event_target_value(&ev));
                        state.update(|s| s.update_view(|v| v.with_sort(mode)));
                    }
                >
                    {SortMode::ALL
                        .into_iter()
                        .map(|mode| view! { <option value=mode.as_value()>{mode.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            {body}
            {modal}
        </section>
    }
}
