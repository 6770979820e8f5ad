use crate::domain::common::{
    group_rows, normalize_category, price_cell, CatalogRecord, GroupingLayout, ImagePath,
};
use crate::shared::feed::{parse_feed, FeedError, FeedRow};
use crate::shared::view_state::Listable;
use crate::system::inquiry::{derive_sku, Inquirable, InquiryEntry};
use serde::{Deserialize, Serialize};

// ============================================================================
// Columns
// ============================================================================

/// Позиции колонок листа аренды
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RentalColumns {
    pub name: usize,
    pub category: usize,
    pub description: usize,
    pub price: usize,
    pub photo: usize,
}

impl Default for RentalColumns {
    fn default() -> Self {
        Self {
            name: 1,
            category: 2,
            description: 3,
            price: 5,
            photo: 6,
        }
    }
}

impl RentalColumns {
    fn layout(&self) -> GroupingLayout {
        GroupingLayout {
            name: self.name,
            photo: self.photo,
            skip_rows: 0,
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Позиция каталога аренды
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RentalItem {
    pub name: String,
    pub category: String,
    /// Цена за сутки
    pub price: Option<f64>,
    pub description: Option<String>,
    pub images: Vec<String>,
}

impl RentalItem {
    pub fn cover(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

impl CatalogRecord for RentalItem {
    fn images(&self) -> &[String] {
        &self.images
    }

    fn images_mut(&mut self) -> &mut Vec<String> {
        &mut self.images
    }
}

impl Listable for RentalItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn price(&self) -> Option<f64> {
        self.price
    }
}

impl Inquirable for RentalItem {
    fn inquiry_entry(&self) -> InquiryEntry {
        InquiryEntry {
            sku: derive_sku(&self.name),
            name: self.name.clone(),
            category: self.category.clone(),
            image: self.cover().unwrap_or_default().to_string(),
            price: self.price,
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

pub fn build_rentals(rows: &[FeedRow], columns: &RentalColumns, images: &ImagePath) -> Vec<RentalItem> {
    group_rows(rows, columns.layout(), images, |name, row| RentalItem {
        name: name.to_string(),
        category: normalize_category(row.text(columns.category).as_deref()),
        price: price_cell(row, columns.price),
        description: row.text(columns.description),
        images: Vec::new(),
    })
}

pub fn load_rentals(
    text: &str,
    columns: &RentalColumns,
    images: &ImagePath,
) -> Result<Vec<RentalItem>, FeedError> {
    let document = parse_feed(text)?;
    let items = build_rentals(&document.table.rows, columns, images);
    log::info!(
        "Built {} rental item(s) from {} row(s)",
        items.len(),
        document.table.rows.len()
    );
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"/*O_o*/
google.visualization.Query.setResponse({"status":"ok","table":{"rows":[
  {"c":[{"v":1},{"v":"Tent"},{"v":"Decor & Display"},{"v":"White canopy"},null,{"v":25},{"v":"tent1"}]},
  {"c":[null,null,null,null,null,null,{"v":"tent2"}]},
  {"c":[{"v":2},{"v":"Chair"},{"v":"Dining Accessories"},null,null,{"v":0.5},{"v":"chair1"}]}
]}});"#;

    fn images() -> ImagePath {
        ImagePath::new("assets/images/rentals", "JPG")
    }

    #[test]
    fn test_tent_and_chair() {
        let items = load_rentals(FEED, &RentalColumns::default(), &images()).unwrap();
        assert_eq!(items.len(), 2);

        let tent = &items[0];
        assert_eq!(tent.name, "Tent");
        assert_eq!(tent.category, "Decor and Display");
        assert_eq!(tent.price, Some(25.0));
        assert_eq!(tent.description.as_deref(), Some("White canopy"));
        assert_eq!(
            tent.images,
            vec![
                "assets/images/rentals/tent1.JPG",
                "assets/images/rentals/tent2.JPG"
            ]
        );

        let chair = &items[1];
        assert_eq!(chair.name, "Chair");
        assert_eq!(chair.category, "Dining Accessories");
        assert_eq!(chair.price, Some(0.5));
        assert_eq!(chair.description, None);
        assert_eq!(chair.images, vec!["assets/images/rentals/chair1.JPG"]);
    }

    #[test]
    fn test_zero_price_and_missing_category() {
        let rows = parse_feed(
            r#"{"table":{"rows":[{"c":[null,{"v":"Lamp"},null,null,null,{"v":0},{"v":"lamp"}]}]}}"#,
        )
        .unwrap()
        .table
        .rows;
        let items = build_rentals(&rows, &RentalColumns::default(), &images());
        assert_eq!(items[0].category, "Other");
        assert_eq!(items[0].price, None);
    }

    #[test]
    fn test_inquiry_entry() {
        let item = RentalItem {
            name: "Gold  Charger Plate".to_string(),
            category: "Dining Accessories".to_string(),
            price: Some(1.0),
            description: None,
            images: vec!["a.JPG".to_string(), "b.JPG".to_string()],
        };
        let entry = item.inquiry_entry();
        assert_eq!(entry.sku, "Gold_Charger_Plate");
        assert_eq!(entry.image, "a.JPG");
        assert_eq!(entry.price, Some(1.0));
    }

    #[test]
    fn test_unavailable_feed() {
        assert!(load_rentals("Service Unavailable", &RentalColumns::default(), &images()).is_err());
    }
}
