use crate::domain::a002_photo_service::api::fetch_photo_services;
use crate::layout::global_context::use_site;
use crate::shared::catalog_load::CatalogLoad;
use crate::shared::components::rotating_card::RotatingCard;
use contracts::domain::a002_photo_service::PhotoService;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn PhotoServiceList() -> impl IntoView {
    let site = use_site();
    let catalog = RwSignal::new(CatalogLoad::<PhotoService>::Loading);
    let period_ms = site.with_config(|c| c.timers.card_rotation_ms);

    spawn_local(async move {
        let result = fetch_photo_services(site).await;
        catalog.set(CatalogLoad::from_result(result, "photography services"));
    });

    move || match catalog.get() {
        CatalogLoad::Loading => view! {
            <div class="catalog-status">
                <Spinner />
            </div>
        }
        .into_any(),
        CatalogLoad::Unavailable => {
            view! { <p class="catalog-status error">"Unable to load photography services."</p> }
                .into_any()
        }
        CatalogLoad::Ready(services) => view! {
            <div class="catalog-grid photography">
                {services
                    .into_iter()
                    .map(|service| {
                        let price_line = service.price_line();
                        let alt = service.name.clone();
                        let PhotoService { name, tagline, images, .. } = service;
                        view! {
                            <RotatingCard
                                images=images
                                alt=alt
                                class="service-card"
                                image_class="card-image"
                                period_ms=period_ms
                            >
                                <div class="card-body">
                                    <h3 class="card-title">{name}</h3>
                                    {tagline.map(|t| view! { <p class="card-tagline">{t}</p> })}
                                    {price_line.map(|p| view! { <p class="card-price">{p}</p> })}
                                </div>
                            </RotatingCard>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}
