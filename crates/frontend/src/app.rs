use crate::domain::a001_rental::ui::list::RentalList;
use crate::domain::a002_photo_service::ui::list::PhotoServiceList;
use crate::domain::a003_event::ui::list::EventList;
use crate::layout::global_context::SiteContext;
use crate::layout::toast::ToastHost;
use crate::shared::viewport::session_page_size;
use crate::usecases::u501_contact_inquiry::view::ContactInquiry;
use contracts::shared::config::SiteConfig;
use leptos::prelude::*;
use thaw::ConfigProvider;
use wasm_bindgen::JsCast;

/// Ids of the containers the static page shells expose
pub const RENTALS_ROOT: &str = "rentals-root";
pub const PHOTOGRAPHY_ROOT: &str = "photography-root";
pub const EVENTS_ROOT: &str = "events-root";
pub const CONTACT_ROOT: &str = "contact-root";

/// Mount every feature whose container exists on the current page.
///
/// Page size is decided here, once per page load; resizing the window later
/// does not change it.
pub fn mount_features(config: SiteConfig) {
    let page_size = session_page_size(&config.paging);

    mount_feature(RENTALS_ROOT, &config, page_size, || view! { <RentalList /> });
    mount_feature(PHOTOGRAPHY_ROOT, &config, page_size, || view! { <PhotoServiceList /> });
    mount_feature(EVENTS_ROOT, &config, page_size, || view! { <EventList /> });
    mount_feature(CONTACT_ROOT, &config, page_size, || view! { <ContactInquiry /> });
}

fn mount_feature<F, V>(id: &str, config: &SiteConfig, page_size: usize, feature: F)
where
    F: FnOnce() -> V + Send + 'static,
    V: IntoView + Send + 'static,
{
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    let Some(element) = element else {
        log::debug!("#{} not present on this page, feature disabled", id);
        return;
    };

    let config = config.clone();
    leptos::mount::mount_to(element, move || {
        provide_context(SiteContext::new(config, page_size));
        view! {
            <ConfigProvider>
                {feature()}
                <ToastHost />
            </ConfigProvider>
        }
    })
    .forget();
}
