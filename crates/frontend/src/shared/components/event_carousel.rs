use contracts::shared::rotation::next_carousel_index;
use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// Autoplaying slideshow over every image; the active one gets `show`.
#[component]
pub fn EventCarousel(images: Vec<String>, #[prop(into)] alt: String, period_ms: u32) -> impl IntoView {
    let len = images.len();
    let active = RwSignal::new(0usize);

    let timer: StoredValue<Option<Interval>, LocalStorage> = StoredValue::new_local(None);
    if len > 1 {
        timer.set_value(Some(Interval::new(period_ms, move || {
            active.update(|i| *i = next_carousel_index(*i, len));
        })));
    }
    on_cleanup(move || {
        let _ = timer.try_update_value(|t| *t = None);
    });

    view! {
        <div class="carousel">
            {images
                .into_iter()
                .enumerate()
                .map(|(i, src)| {
                    let alt = alt.clone();
                    view! {
                        <img
                            class="carousel-image"
                            class:show=move || active.get() == i
                            src=src
                            alt=alt
                            loading="lazy"
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
