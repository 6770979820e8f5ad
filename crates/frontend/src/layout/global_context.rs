use crate::layout::toast::ToastService;
use crate::shared::storage::BrowserStorage;
use contracts::shared::config::SiteConfig;
use contracts::system::inquiry::InquiryCart;
use leptos::prelude::*;

/// Context shared by every view mounted on the page
#[derive(Clone, Copy)]
pub struct SiteContext {
    config: StoredValue<SiteConfig>,
    /// Размер страницы каталога, выбранный при загрузке страницы
    pub page_size: usize,
    /// Увеличивается при каждом изменении корзины запроса
    pub cart_revision: RwSignal<u64>,
    pub toast: ToastService,
}

impl SiteContext {
    pub fn new(config: SiteConfig, page_size: usize) -> Self {
        let toast = ToastService::new(config.timers.toast_ms);
        Self {
            config: StoredValue::new(config),
            page_size,
            cart_revision: RwSignal::new(0),
            toast,
        }
    }

    pub fn with_config<R>(&self, f: impl FnOnce(&SiteConfig) -> R) -> R {
        self.config.with_value(f)
    }

    pub fn cart(&self) -> InquiryCart<BrowserStorage> {
        let key = self.with_config(|c| c.inquiry.storage_key.clone());
        InquiryCart::new(BrowserStorage, key)
    }

    pub fn notify_cart_changed(&self) {
        self.cart_revision.update(|r| *r += 1);
    }
}

pub fn use_site() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext not provided in context")
}
