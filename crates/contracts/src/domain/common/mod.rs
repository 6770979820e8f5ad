//! Common types and helpers for all catalog aggregates

pub mod catalog_builder;
pub mod category;

// Re-exports
pub use catalog_builder::{group_rows, price_cell, CatalogRecord, GroupingLayout, ImagePath};
pub use category::{normalize_category, FALLBACK_CATEGORY};
