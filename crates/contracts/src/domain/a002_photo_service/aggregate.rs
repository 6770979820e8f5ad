use crate::domain::common::{group_rows, price_cell, CatalogRecord, GroupingLayout, ImagePath};
use crate::shared::feed::{parse_feed, FeedError, FeedRow};
use crate::shared::format::format_starting_at;
use serde::{Deserialize, Serialize};

/// Позиции колонок листа фотоуслуг
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PhotoServiceColumns {
    pub name: usize,
    pub tagline: usize,
    pub duration: usize,
    pub price: usize,
    pub photo: usize,
}

impl Default for PhotoServiceColumns {
    fn default() -> Self {
        Self {
            name: 0,
            tagline: 2,
            duration: 3,
            price: 5,
            photo: 6,
        }
    }
}

/// Фотоуслуга (пакет съёмки)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhotoService {
    pub name: String,
    pub tagline: Option<String>,
    /// Длительность в часах, как записана в листе
    pub duration: Option<String>,
    pub price: Option<f64>,
    pub images: Vec<String>,
}

impl PhotoService {
    pub fn price_line(&self) -> Option<String> {
        format_starting_at(self.price, self.duration.as_deref())
    }
}

impl CatalogRecord for PhotoService {
    fn images(&self) -> &[String] {
        &self.images
    }

    fn images_mut(&mut self) -> &mut Vec<String> {
        &mut self.images
    }
}

pub fn build_photo_services(
    rows: &[FeedRow],
    columns: &PhotoServiceColumns,
    images: &ImagePath,
) -> Vec<PhotoService> {
    let layout = GroupingLayout {
        name: columns.name,
        photo: columns.photo,
        skip_rows: 0,
    };
    group_rows(rows, layout, images, |name, row| PhotoService {
        name: name.to_string(),
        tagline: row.text(columns.tagline),
        duration: row.text(columns.duration),
        price: price_cell(row, columns.price),
        images: Vec::new(),
    })
}

pub fn load_photo_services(
    text: &str,
    columns: &PhotoServiceColumns,
    images: &ImagePath,
) -> Result<Vec<PhotoService>, FeedError> {
    let document = parse_feed(text)?;
    let services = build_photo_services(&document.table.rows, columns, images);
    log::info!("Built {} photography service(s)", services.len());
    Ok(services)
}
