use super::api::post_inquiry;
use crate::layout::global_context::use_site;
use crate::shared::icons::icon;
use contracts::usecases::u501_contact_inquiry::{
    finish_submission, full_summary, inquiry_listing, prepare_submission, ContactForm, FormStatus,
    RequiredField, DELIVERY, INQUIRY_TYPES, NO_ITEMS, PICKUP,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Поле ввода для обязательного текстового поля формы
fn required_input(
    form: RwSignal<ContactForm>,
    status: RwSignal<FormStatus>,
    field: RequiredField,
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-group">
            <span class="form-label">{field.label()}</span>
            <input
                type=input_type
                name=field.field_name()
                required=true
                class:input-error=move || status.with(|s| s.is_invalid(field))
                prop:value=move || form.with(|f| f.value(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| *f.value_mut(field) = value);
                }
            />
        </label>
    }
}

#[component]
pub fn ContactInquiry() -> impl IntoView {
    let site = use_site();
    let form = RwSignal::new(ContactForm::default());
    let status = RwSignal::new(FormStatus::Idle);

    let (endpoint, form_name) =
        site.with_config(|c| (c.contact.endpoint.clone(), c.contact.form_name.clone()));
    let endpoint = StoredValue::new(endpoint);
    let form_name = StoredValue::new(form_name);

    // Перечитывается при каждом изменении корзины
    let entries = Memo::new(move |_| {
        site.cart_revision.track();
        site.cart().list()
    });

    let listing = Memo::new(move |_| entries.with(|e| inquiry_listing(e)));
    let summary = move || form.with(|f| listing.with(|l| full_summary(f, l)));

    let remove_entry = move |sku: String| {
        if site.cart().remove(&sku) {
            log::debug!("Removed {} from inquiry", sku);
        }
        site.notify_cart_changed();
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.with(|s| *s == FormStatus::Sending) {
            return;
        }

        let prepared = form.with(|f| {
            entries.with(|e| form_name.with_value(|name| prepare_submission(f, e, name)))
        });
        let submission = match prepared {
            Ok(submission) => submission,
            Err(e) => {
                log::debug!("Contact form not sent: {}", e);
                status.set(FormStatus::Invalid(e.fields().to_vec()));
                return;
            }
        };

        status.set(FormStatus::Sending);
        spawn_local(async move {
            let endpoint = endpoint.get_value();
            let result = post_inquiry(&endpoint, &submission).await;
            let cart = site.cart();
            let mut next = form.get_untracked();
            let outcome = finish_submission(result, &mut next, &cart);
            if outcome == FormStatus::Sent {
                form.set(next);
                site.notify_cart_changed();
            }
            status.set(outcome);
        });
    };

    let cart_rows = move || {
        let list = entries.get();
        if list.is_empty() {
            return view! { <p class="inquiry-empty">{NO_ITEMS}</p> }.into_any();
        }
        list.into_iter()
            .map(|entry| {
                let sku = entry.sku.clone();
                let alt = entry.name.clone();
                view! {
                    <div class="inquiry-row">
                        <img class="inquiry-thumb" src=entry.image alt=alt />
                        <span class="inquiry-item-name">{entry.name}</span>
                        <span class="inquiry-item-category">{entry.category}</span>
                        <button
                            type="button"
                            class="inquiry-remove-btn"
                            aria-label="Remove"
                            on:click=move |_| remove_entry(sku.clone())
                        >
                            {icon("x")}
                        </button>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    let banner = move || match status.get() {
        FormStatus::Idle | FormStatus::Sending => None,
        FormStatus::Invalid(_) => Some(
            view! { <div class="form-banner error" role="alert">"Please fill in all required fields."</div> }
                .into_any(),
        ),
        FormStatus::Sent => Some(
            view! { <div class="form-banner success" role="status">"Thank you! Your inquiry has been sent."</div> }
                .into_any(),
        ),
        FormStatus::Failed(message) => {
            Some(view! { <div class="form-banner error" role="alert">{message}</div> }.into_any())
        }
    };

    view! {
        <section class="contact-inquiry">
            <div class="inquiry-cart">
                <h3>"Your Inquiry"</h3>
                {cart_rows}
            </div>

            <form class="contact-form" name=move || form_name.get_value() novalidate=true on:submit=on_submit>
                {banner}
                <div class="form-row">
                    {required_input(form, status, RequiredField::FirstName, "text")}
                    {required_input(form, status, RequiredField::LastName, "text")}
                </div>
                <div class="form-row">
                    {required_input(form, status, RequiredField::Email, "email")}
                    {required_input(form, status, RequiredField::Phone, "tel")}
                </div>

                <label class="form-group">
                    <span class="form-label">{RequiredField::InquiryType.label()}</span>
                    <select
                        name="inquiry_type"
                        class:input-error=move || status.with(|s| s.is_invalid(RequiredField::InquiryType))
                        prop:value=move || form.with(|f| f.inquiry_type.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.inquiry_type = value);
                        }
                    >
                        <option value="">"Select one"</option>
                        {INQUIRY_TYPES
                            .into_iter()
                            .map(|t| view! { <option value=t>{t}</option> })
                            .collect_view()}
                    </select>
                </label>

                <label class="form-group">
                    <span class="form-label">"Event date"</span>
                    <input
                        type="date"
                        name="event_date"
                        prop:value=move || form.with(|f| f.event_date.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.event_date = value);
                        }
                    />
                </label>

                <label class="form-group">
                    <span class="form-label">"Pickup or delivery"</span>
                    <select
                        name="fulfillment"
                        prop:value=move || form.with(|f| f.fulfillment.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.fulfillment = value);
                        }
                    >
                        <option value="">"Not sure yet"</option>
                        <option value=PICKUP>{PICKUP}</option>
                        <option value=DELIVERY>{DELIVERY}</option>
                    </select>
                </label>

                <Show when=move || form.with(ContactForm::wants_delivery)>
                    <label class="form-group">
                        <span class="form-label">"Delivery address"</span>
                        <input
                            type="text"
                            name="delivery_address"
                            prop:value=move || form.with(|f| f.delivery_address.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.delivery_address = value);
                            }
                        />
                    </label>
                </Show>

                <label class="form-group">
                    <span class="form-label">{RequiredField::Message.label()}</span>
                    <textarea
                        name="message"
                        rows="5"
                        class:input-error=move || status.with(|s| s.is_invalid(RequiredField::Message))
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.message = value);
                        }
                    ></textarea>
                </label>

                <input type="hidden" name="inquiry_items" prop:value=move || listing.get() />
                <input type="hidden" name="summary" prop:value=summary />

                <Button
                    appearance=ButtonAppearance::Primary
                    button_type=ButtonType::Submit
                    disabled=Signal::derive(move || status.with(|s| *s == FormStatus::Sending))
                >
                    {move || if status.with(|s| *s == FormStatus::Sending) { "Sending..." } else { "Send Inquiry" }}
                </Button>
            </form>
        </section>
    }
}
