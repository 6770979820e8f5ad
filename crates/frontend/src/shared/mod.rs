pub mod api_utils;
pub mod catalog_load;
pub mod components;
pub mod config;
pub mod icons;
pub mod modal;
pub mod storage;
pub mod viewport;
