/// Состояние загрузки каталога из листа.
///
/// Отрисовка позиций начинается только с `Ready`, т.е. когда каталог собран
/// целиком.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogLoad<T> {
    Loading,
    Ready(Vec<T>),
    Unavailable,
}

impl<T> CatalogLoad<T> {
    pub fn from_result<E: std::fmt::Display>(result: Result<Vec<T>, E>, what: &str) -> Self {
        match result {
            Ok(items) => CatalogLoad::Ready(items),
            Err(e) => {
                log::error!("Error loading {}: {}", what, e);
                CatalogLoad::Unavailable
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogLoad::Loading)
    }
}
