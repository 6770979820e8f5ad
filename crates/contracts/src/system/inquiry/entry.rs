use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Позиция в корзине запроса. Идентичность задаёт `sku`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "StoredEntry")]
pub struct InquiryEntry {
    pub sku: String,
    pub name: String,
    pub category: String,
    /// Обложка позиции
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Запись каталога, которую можно добавить в запрос
pub trait Inquirable {
    fn inquiry_entry(&self) -> InquiryEntry;
}

/// Sku из названия: каждая серия пробельных символов заменяется на `_`.
pub fn derive_sku(name: &str) -> String {
    let mut sku = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                sku.push('_');
            }
            in_space = true;
        } else {
            sku.push(ch);
            in_space = false;
        }
    }
    sku
}

/// Stored shape, lenient about older site versions that persisted the whole
/// catalog item (`images` array, no `sku`, price as text).
#[derive(Deserialize)]
struct StoredEntry {
    #[serde(default)]
    sku: Option<String>,
    name: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    images: Vec<String>,
    #[serde(default)]
    price: Option<Value>,
}

impl From<StoredEntry> for InquiryEntry {
    fn from(stored: StoredEntry) -> Self {
        let sku = stored
            .sku
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| derive_sku(&stored.name));
        let image = stored
            .image
            .filter(|s| !s.is_empty())
            .or_else(|| stored.images.into_iter().next())
            .unwrap_or_default();
        let price = match stored.price {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
        .filter(|p: &f64| p.is_finite() && *p != 0.0);

        Self {
            sku,
            name: stored.name,
            category: stored.category.unwrap_or_default(),
            image,
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_sku() {
        assert_eq!(derive_sku("Gold Charger Plate"), "Gold_Charger_Plate");
        assert_eq!(derive_sku("Arch \t  Backdrop"), "Arch_Backdrop");
        assert_eq!(derive_sku("Tent"), "Tent");
        assert_eq!(derive_sku(""), "");
    }

    #[test]
    fn test_legacy_item_shape() {
        let entry: InquiryEntry = serde_json::from_str(
            r#"{"name":"Tent","category":"Decor and Display","price":"25","description":"","images":["t1.JPG","t2.JPG"]}"#,
        )
        .unwrap();
        assert_eq!(entry.sku, "Tent");
        assert_eq!(entry.image, "t1.JPG");
        assert_eq!(entry.price, Some(25.0));
    }

    #[test]
    fn test_round_trip_omits_missing_price() {
        let entry = InquiryEntry {
            sku: "Chair".to_string(),
            name: "Chair".to_string(),
            category: "Dining Accessories".to_string(),
            image: "c.JPG".to_string(),
            price: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("price"));
        assert_eq!(serde_json::from_str::<InquiryEntry>(&json).unwrap(), entry);
    }
}
