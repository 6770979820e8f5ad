use crate::layout::global_context::use_site;
use contracts::domain::a001_rental::RentalItem;
use contracts::shared::format::format_price;
use contracts::system::inquiry::Inquirable;
use leptos::prelude::*;
use thaw::*;

const NO_DESCRIPTION: &str = "No description available.";

/// Содержимое модального окна позиции: галерея и кнопка добавления в запрос
#[component]
pub fn RentalDetails(item: RentalItem) -> impl IntoView {
    let site = use_site();
    let entry = item.inquiry_entry();
    let sku = entry.sku.clone();

    let images = StoredValue::new(item.images.clone());
    let active = RwSignal::new(0usize);

    let in_cart = Memo::new(move |_| {
        site.cart_revision.track();
        site.cart().contains(&sku)
    });

    let add_to_inquiry = move |_: leptos::ev::MouseEvent| {
        let added = site.cart().add(entry.clone());
        // позицию могла добавить другая вкладка
        site.notify_cart_changed();
        site.toast.show(if added {
            "Added to inquiry"
        } else {
            "Already in inquiry"
        });
    };

    let main_src = move || images.with_value(|imgs| imgs.get(active.get()).cloned().unwrap_or_default());
    let alt = item.name.clone();

    let thumbnails = item
        .images
        .iter()
        .enumerate()
        .map(|(i, src)| {
            view! {
                <img
                    class="thumbnail"
                    class:active=move || active.get() == i
                    src=src.clone()
                    alt=format!("{} photo {}", item.name, i + 1)
                    on:click=move |_| active.set(i)
                />
            }
        })
        .collect_view();

    view! {
        <div class="rental-details">
            <div class="gallery">
                <img class="main-image" src=main_src alt=alt />
                <div class="thumbnails">{thumbnails}</div>
            </div>
            <div class="details-info">
                <p class="card-category">{item.category.clone()}</p>
                <p class="card-price">{format_price(item.price)}</p>
                <p class="description">
                    {item.description.clone().unwrap_or_else(|| NO_DESCRIPTION.to_string())}
                </p>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || in_cart.get())
                    on_click=add_to_inquiry
                >
                    {move || if in_cart.get() { "Already in Inquiry" } else { "Add to Inquiry" }}
                </Button>
            </div>
        </div>
    }
}
