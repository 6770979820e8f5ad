use super::form::ContactForm;
use crate::domain::common::FALLBACK_CATEGORY;
use crate::shared::format::format_price;
use crate::system::inquiry::InquiryEntry;
use chrono::NaiveDate;

/// Текст для пустой корзины
pub const NO_ITEMS: &str = "No rental items added.";

const NOT_PROVIDED: &str = "Not provided";
const PRICE_NOT_LISTED: &str = "Price not listed";

/// Одна строка на позицию: `name (category) – price`
pub fn inquiry_listing(entries: &[InquiryEntry]) -> String {
    if entries.is_empty() {
        return NO_ITEMS.to_string();
    }

    entries
        .iter()
        .map(|e| {
            let category = if e.category.trim().is_empty() {
                FALLBACK_CATEGORY
            } else {
                e.category.as_str()
            };
            let price = match format_price(e.price) {
                p if p.is_empty() => PRICE_NOT_LISTED.to_string(),
                p => p,
            };
            format!("{} ({}) – {}", e.name, category, price)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Дата из `<input type="date">` в виде "June 7, 2026"; прочий текст как есть
fn format_event_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return NOT_PROVIDED.to_string();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Полный текст заявки для скрытого поля `summary`
pub fn full_summary(form: &ContactForm, listing: &str) -> String {
    let mut lines = vec![
        format!(
            "Name: {} {}",
            form.first_name.trim(),
            form.last_name.trim()
        ),
        format!("Email: {}", form.email.trim()),
        format!("Phone: {}", form.phone.trim()),
        format!("Inquiry type: {}", form.inquiry_type.trim()),
        format!("Event date: {}", format_event_date(&form.event_date)),
    ];

    if !form.fulfillment.trim().is_empty() {
        lines.push(format!("Fulfillment: {}", form.fulfillment.trim()));
    }
    if form.wants_delivery() {
        let address = form.delivery_address.trim();
        lines.push(format!(
            "Delivery address: {}",
            if address.is_empty() { NOT_PROVIDED } else { address }
        ));
    }

    lines.push(String::new());
    lines.push("Message:".to_string());
    lines.push(form.message.trim().to_string());
    lines.push(String::new());
    lines.push("Inquiry items:".to_string());
    lines.push(listing.to_string());

    lines.join("\n")
}
