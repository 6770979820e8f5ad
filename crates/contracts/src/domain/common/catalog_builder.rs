//! Сборка записей каталога из строк листа.
//!
//! Одна запись каталога занимает несколько строк: строка с названием
//! открывает запись, следующие строки с пустым названием только добавляют
//! фотографии к последней открытой записи.

use crate::shared::feed::FeedRow;
use serde::Deserialize;
use std::collections::HashMap;

/// Запись каталога, к которой можно добавлять фотографии
pub trait CatalogRecord {
    fn images(&self) -> &[String];
    fn images_mut(&mut self) -> &mut Vec<String>;
}

/// Позиции колонок, управляющих группировкой строк
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingLayout {
    pub name: usize,
    pub photo: usize,
    /// Сколько строк в начале листа пропустить (строка заголовков)
    pub skip_rows: usize,
}

/// Каталог и расширение файлов с фотографиями
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ImagePath {
    pub base: String,
    pub extension: String,
}

impl Default for ImagePath {
    fn default() -> Self {
        Self::new("assets/images", "JPG")
    }
}

impl ImagePath {
    pub fn new(base: &str, extension: &str) -> Self {
        Self {
            base: base.to_string(),
            extension: extension.to_string(),
        }
    }

    pub fn url(&self, file: &str) -> String {
        format!(
            "{}/{}.{}",
            self.base.trim_end_matches('/'),
            file.trim(),
            self.extension
        )
    }
}

/// Цена 0 в листе означает «не указана»
pub fn price_cell(row: &FeedRow, index: usize) -> Option<f64> {
    row.number(index).filter(|p| p.is_finite() && *p != 0.0)
}

/// Group feed rows into records, in first-seen order.
///
/// `make` is called once per distinct name, with the row that introduced it.
/// A name seen again continues the existing record instead of creating a
/// second one. Rows before the first name are ignored, and records that end
/// up without a single photo are dropped.
pub fn group_rows<T, F>(
    rows: &[FeedRow],
    layout: GroupingLayout,
    images: &ImagePath,
    mut make: F,
) -> Vec<T>
where
    T: CatalogRecord,
    F: FnMut(&str, &FeedRow) -> T,
{
    let mut records: Vec<T> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();
    let mut current: Option<usize> = None;

    for row in rows.iter().skip(layout.skip_rows) {
        if let Some(name) = row.text(layout.name) {
            let idx = match index_by_name.get(&name) {
                Some(&idx) => idx,
                None => {
                    records.push(make(&name, row));
                    let idx = records.len() - 1;
                    index_by_name.insert(name, idx);
                    idx
                }
            };
            current = Some(idx);
        }

        let Some(idx) = current else {
            continue;
        };

        if let Some(photo) = row.text(layout.photo) {
            records[idx].images_mut().push(images.url(&photo));
        }
    }

    let total = records.len();
    records.retain(|r| !r.images().is_empty());
    if records.len() < total {
        log::debug!(
            "Dropped {} catalog record(s) without photos",
            total - records.len()
        );
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::feed::parse_feed;

    #[derive(Debug)]
    struct Named {
        name: String,
        images: Vec<String>,
    }

    impl CatalogRecord for Named {
        fn images(&self) -> &[String] {
            &self.images
        }

        fn images_mut(&mut self) -> &mut Vec<String> {
            &mut self.images
        }
    }

    const LAYOUT: GroupingLayout = GroupingLayout {
        name: 0,
        photo: 1,
        skip_rows: 0,
    };

    fn rows(json: &str) -> Vec<FeedRow> {
        parse_feed(json).unwrap().table.rows
    }

    fn build(rows: &[FeedRow], layout: GroupingLayout) -> Vec<Named> {
        group_rows(rows, layout, &ImagePath::new("img/", "JPG"), |name, _| Named {
            name: name.to_string(),
            images: Vec::new(),
        })
    }

    #[test]
    fn test_rows_before_first_name_are_skipped() {
        let rows = rows(
            r#"{"table":{"rows":[
                {"c":[null,{"v":"orphan"}]},
                {"c":[{"v":""},{"v":"orphan2"}]},
                {"c":[{"v":"A"},{"v":"a1"}]}
            ]}}"#,
        );
        let records = build(&rows, LAYOUT);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].images, vec!["img/a1.JPG"]);
    }

    #[test]
    fn test_repeated_name_reuses_record() {
        let rows = rows(
            r#"{"table":{"rows":[
                {"c":[{"v":"A"},{"v":"a1"}]},
                {"c":[{"v":"B"},{"v":"b1"}]},
                {"c":[{"v":"A"},{"v":"a2"}]},
                {"c":[null,{"v":"a3"}]}
            ]}}"#,
        );
        let records = build(&rows, LAYOUT);
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(records[0].images, vec!["img/a1.JPG", "img/a2.JPG", "img/a3.JPG"]);
    }

    #[test]
    fn test_records_without_photos_are_dropped() {
        let rows = rows(
            r#"{"table":{"rows":[
                {"c":[{"v":"A"}]},
                {"c":[{"v":"B"},{"v":" b1 "}]},
                {"c":[{"v":"C"},{"v":"  "}]}
            ]}}"#,
        );
        let records = build(&rows, LAYOUT);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "B");
        assert_eq!(records[0].images, vec!["img/b1.JPG"]);
        assert!(records.iter().all(|r| !r.images.is_empty()));
    }

    #[test]
    fn test_header_rows_skipped() {
        let rows = rows(
            r#"{"table":{"rows":[
                {"c":[{"v":"Name"},{"v":"Photo"}]},
                {"c":[{"v":"A"},{"v":"a1"}]}
            ]}}"#,
        );
        let layout = GroupingLayout {
            skip_rows: 1,
            ..LAYOUT
        };
        let records = build(&rows, layout);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "A");
    }

    #[test]
    fn test_empty_feed() {
        assert!(build(&[], LAYOUT).is_empty());
    }
}
