use crate::layout::global_context::SiteContext;
use crate::shared::api_utils::fetch_text;
use contracts::domain::a003_event::{load_events, EventItem};

pub async fn fetch_events(site: SiteContext) -> Result<Vec<EventItem>, String> {
    let (url, events) = site.with_config(|c| (c.feeds.events.clone(), c.events.clone()));
    let text = fetch_text(&url).await?;
    load_events(&text, &events.columns, &events.images).map_err(|e| e.to_string())
}
