use crate::domain::common::{group_rows, CatalogRecord, GroupingLayout, ImagePath};
use crate::shared::feed::{parse_feed, FeedError, FeedRow};
use serde::{Deserialize, Serialize};

/// Позиции колонок листа мероприятий; первая строка листа содержит заголовки
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EventColumns {
    pub name: usize,
    pub description: usize,
    pub photo: usize,
    pub skip_rows: usize,
}

impl Default for EventColumns {
    fn default() -> Self {
        Self {
            name: 0,
            description: 1,
            photo: 2,
            skip_rows: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventItem {
    pub name: String,
    pub description: Option<String>,
    pub images: Vec<String>,
}

impl CatalogRecord for EventItem {
    fn images(&self) -> &[String] {
        &self.images
    }

    fn images_mut(&mut self) -> &mut Vec<String> {
        &mut self.images
    }
}

pub fn build_events(rows: &[FeedRow], columns: &EventColumns, images: &ImagePath) -> Vec<EventItem> {
    let layout = GroupingLayout {
        name: columns.name,
        photo: columns.photo,
        skip_rows: columns.skip_rows,
    };
    group_rows(rows, layout, images, |name, row| EventItem {
        name: name.to_string(),
        description: row.text(columns.description),
        images: Vec::new(),
    })
}

pub fn load_events(
    text: &str,
    columns: &EventColumns,
    images: &ImagePath,
) -> Result<Vec<EventItem>, FeedError> {
    let document = parse_feed(text)?;
    let events = build_events(&document.table.rows, columns, images);
    log::info!("Built {} event(s)", events.len());
    Ok(events)
}
