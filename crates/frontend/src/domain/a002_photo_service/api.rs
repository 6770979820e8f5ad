use crate::layout::global_context::SiteContext;
use crate::shared::api_utils::fetch_text;
use contracts::domain::a002_photo_service::{load_photo_services, PhotoService};

pub async fn fetch_photo_services(site: SiteContext) -> Result<Vec<PhotoService>, String> {
    let (url, photography) =
        site.with_config(|c| (c.feeds.photography.clone(), c.photography.clone()));
    let text = fetch_text(&url).await?;
    load_photo_services(&text, &photography.columns, &photography.images).map_err(|e| e.to_string())
}
