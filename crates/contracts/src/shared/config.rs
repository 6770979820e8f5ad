//! Site configuration
//!
//! Every value has a built-in default; a TOML document only needs to carry
//! the keys it overrides. The frontend looks for an inline
//! `<script type="application/toml" id="site-config">` in the page shell and
//! falls back to the defaults.

use crate::domain::a001_rental::RentalColumns;
use crate::domain::a002_photo_service::PhotoServiceColumns;
use crate::domain::a003_event::EventColumns;
use crate::domain::common::ImagePath;
use crate::shared::view_state::PagePresets;
use anyhow::Context;
use serde::Deserialize;

const SHEET_BASE: &str =
    "https://docs.google.com/spreadsheets/d/1rcfJdQcWe4X3pP4EH4-0OaGooQiFTMBoyglDH2H9UGU/gviz/tq?tqx=out:json";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub feeds: FeedsConfig,
    pub rentals: RentalsConfig,
    pub photography: PhotographyConfig,
    pub events: EventsConfig,
    pub paging: PagePresets,
    pub timers: TimersConfig,
    pub inquiry: InquiryConfig,
    pub contact: ContactConfig,
}

/// URL-адреса листов таблицы (GViz JSON)
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FeedsConfig {
    pub rentals: String,
    pub photography: String,
    pub events: String,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            rentals: format!("{}&gid=0", SHEET_BASE),
            photography: format!("{}&gid=1097452701", SHEET_BASE),
            events: format!("{}&gid=1019661179", SHEET_BASE),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RentalsConfig {
    pub images: ImagePath,
    pub columns: RentalColumns,
    /// Порядок категорий в фильтре (уже нормализованные названия)
    pub categories: Vec<String>,
}

impl Default for RentalsConfig {
    fn default() -> Self {
        Self {
            images: ImagePath::new("assets/images/rentals", "JPG"),
            columns: RentalColumns::default(),
            categories: [
                "Backdrops and Stands",
                "Board Games",
                "Bridal and Party Wear",
                "Decor and Display",
                "Dining Accessories",
                "Setup and Tools",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhotographyConfig {
    pub images: ImagePath,
    pub columns: PhotoServiceColumns,
}

impl Default for PhotographyConfig {
    fn default() -> Self {
        Self {
            images: ImagePath::new("assets/images/photography", "JPG"),
            columns: PhotoServiceColumns::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EventsConfig {
    pub images: ImagePath,
    pub columns: EventColumns,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            images: ImagePath::new("assets/images/events", "JPG"),
            columns: EventColumns::default(),
        }
    }
}

/// Длительности таймеров, мс
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TimersConfig {
    pub card_rotation_ms: u32,
    pub event_carousel_ms: u32,
    pub toast_ms: u32,
}

impl Default for TimersConfig {
    fn default() -> Self {
        Self {
            card_rotation_ms: 10_000,
            event_carousel_ms: 5_000,
            toast_ms: 1_600,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InquiryConfig {
    pub storage_key: String,
}

impl Default for InquiryConfig {
    fn default() -> Self {
        Self {
            storage_key: "inquiryItems".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ContactConfig {
    /// Form backend endpoint; the hosting site accepts posts on its own root
    pub endpoint: String,
    pub form_name: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: "/".to_string(),
            form_name: "contact".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).context("invalid site configuration")
    }
}

/// Load configuration
///
/// Search order:
/// 1. Inline TOML supplied by the page shell
/// 2. Built-in defaults
pub fn load_config(inline: Option<&str>) -> SiteConfig {
    match inline.map(str::trim).filter(|s| !s.is_empty()) {
        Some(contents) => match SiteConfig::from_toml(contents) {
            Ok(config) => {
                log::info!("Loaded inline site configuration");
                config
            }
            Err(e) => {
                log::error!("{:#}; using built-in defaults", e);
                SiteConfig::default()
            }
        },
        None => {
            log::info!("Using built-in site configuration");
            SiteConfig::default()
        }
    }
}
