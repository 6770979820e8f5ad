use super::entry::InquiryEntry;
use super::storage::CartStorage;
use serde_json::Value;
use std::collections::HashSet;

/// Корзина запроса поверх хранилища.
///
/// Каждое изменение перезаписывает список целиком. Между вкладками нет
/// синхронизации: побеждает последняя запись.
pub struct InquiryCart<S> {
    storage: S,
    key: String,
}

impl<S: CartStorage> InquiryCart<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Сохранённые позиции; отсутствие записи или испорченный JSON дают пустой список
    pub fn list(&self) -> Vec<InquiryEntry> {
        let Some(raw) = self.storage.read(&self.key) else {
            return Vec::new();
        };
        if raw.trim().is_empty() {
            return Vec::new();
        }

        let values = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(values) => values,
            Err(e) => {
                log::warn!("Stored inquiry list is unreadable, treating as empty: {}", e);
                return Vec::new();
            }
        };

        let mut seen = HashSet::new();
        values
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<InquiryEntry>(value) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("Skipping malformed inquiry entry: {}", e);
                    None
                }
            })
            .filter(|entry| seen.insert(entry.sku.clone()))
            .collect()
    }

    pub fn contains(&self, sku: &str) -> bool {
        self.list().iter().any(|e| e.sku == sku)
    }

    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    /// Добавить позицию. Возвращает `false`, если позиция с таким sku уже есть.
    pub fn add(&self, entry: InquiryEntry) -> bool {
        let mut list = self.list();
        if list.iter().any(|e| e.sku == entry.sku) {
            return false;
        }
        list.push(entry);
        self.save(&list);
        true
    }

    /// Удалить позицию по sku. Отсутствующий sku не считается ошибкой.
    pub fn remove(&self, sku: &str) -> bool {
        let mut list = self.list();
        let before = list.len();
        list.retain(|e| e.sku != sku);
        self.save(&list);
        list.len() < before
    }

    pub fn clear(&self) {
        self.save(&[]);
    }

    fn save(&self, list: &[InquiryEntry]) {
        match serde_json::to_string(list) {
            Ok(json) => self.storage.write(&self.key, &json),
            Err(e) => log::warn!("Failed to serialize inquiry list: {}", e),
        }
    }
}
