use crate::layout::global_context::SiteContext;
use crate::shared::api_utils::fetch_text;
use contracts::domain::a001_rental::{load_rentals, RentalItem};

/// Загрузить и собрать каталог аренды
pub async fn fetch_rentals(site: SiteContext) -> Result<Vec<RentalItem>, String> {
    let (url, rentals) = site.with_config(|c| (c.feeds.rentals.clone(), c.rentals.clone()));
    let text = fetch_text(&url).await?;
    load_rentals(&text, &rentals.columns, &rentals.images).map_err(|e| e.to_string())
}
