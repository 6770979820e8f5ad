/// Категория для строк без заполненной категории
pub const FALLBACK_CATEGORY: &str = "Other";

/// Нормализация категории: `&` → `and`, обрезка пробелов.
pub fn normalize_category(raw: Option<&str>) -> String {
    let normalized = raw.unwrap_or_default().replace('&', "and");
    let normalized = normalized.trim();
    if normalized.is_empty() {
        FALLBACK_CATEGORY.to_string()
    } else {
        normalized.to_string()
    }
}
