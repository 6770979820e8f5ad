use crate::domain::a003_event::api::fetch_events;
use crate::layout::global_context::use_site;
use crate::shared::catalog_load::CatalogLoad;
use crate::shared::components::event_carousel::EventCarousel;
use contracts::domain::a003_event::EventItem;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Events as alternating rows: text on one side, carousel on the other
#[component]
pub fn EventList() -> impl IntoView {
    let site = use_site();
    let catalog = RwSignal::new(CatalogLoad::<EventItem>::Loading);
    let period_ms = site.with_config(|c| c.timers.event_carousel_ms);

    spawn_local(async move {
        let result = fetch_events(site).await;
        catalog.set(CatalogLoad::from_result(result, "events"));
    });

    move || match catalog.get() {
        CatalogLoad::Loading => view! {
            <div class="catalog-status">
                <Spinner />
            </div>
        }
        .into_any(),
        CatalogLoad::Unavailable => {
            view! { <p class="catalog-status error">"Unable to load events."</p> }.into_any()
        }
        CatalogLoad::Ready(events) => view! {
            <div class="event-rows">
                {events
                    .into_iter()
                    .enumerate()
                    .map(|(i, event)| {
                        let EventItem { name, description, images } = event;
                        let alt = name.clone();
                        view! {
                            <div class="event-row" class:reverse=i % 2 == 1>
                                <div class="event-text">
                                    <h3>{name}</h3>
                                    {description.map(|d| view! { <p>{d}</p> })}
                                </div>
                                <EventCarousel images=images alt=alt period_ms=period_ms />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}
