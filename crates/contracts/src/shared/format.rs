//! Форматирование цен для карточек, модального окна и текста заявки

/// Цена аренды в сутки: дробные цены меньше доллара с центами, остальные округляются.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p.is_finite() && p < 1.0 => format!("${:.2} / day", p),
        Some(p) if p.is_finite() => format!("${} / day", p.round() as i64),
        _ => String::new(),
    }
}

/// Plain dollar amount without the per-day suffix
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${}", amount as i64)
    } else {
        format!("${:.2}", amount)
    }
}

/// "Starting at $250 / 2 hr" для фотоуслуг
pub fn format_starting_at(price: Option<f64>, duration: Option<&str>) -> Option<String> {
    let price_text = price.map(format_amount).unwrap_or_default();
    match duration.map(str::trim).filter(|d| !d.is_empty()) {
        Some(d) => Some(format!("Starting at {} / {} hr", price_text, d)),
        None if price.is_some() => Some(format!("Starting at {}", price_text)),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(25.0)), "$25 / day");
        assert_eq!(format_price(Some(0.5)), "$0.50 / day");
        assert_eq!(format_price(Some(12.5)), "$13 / day");
        assert_eq!(format_price(None), "");
        assert_eq!(format_price(Some(f64::NAN)), "");
    }

    #[test]
    fn test_format_starting_at() {
        assert_eq!(
            format_starting_at(Some(250.0), Some("2")).as_deref(),
            Some("Starting at $250 / 2 hr")
        );
        assert_eq!(
            format_starting_at(Some(99.5), None).as_deref(),
            Some("Starting at $99.50")
        );
        assert_eq!(format_starting_at(None, Some(" ")), None);
    }
}
