//! Фильтрация, сортировка и постраничный вывод каталога.
//!
//! `ViewState` хранит явное состояние страницы каталога. Обработчики событий
//! получают текущее значение и возвращают новое, а `compute_view` строит
//! срез для отрисовки без скрытого изменяемого состояния.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Значение фильтра категорий, которое пропускает все позиции
pub const ALL_CATEGORIES: &str = "All";

/// Поля позиции, по которым работают фильтры и сортировка
pub trait Listable {
    fn name(&self) -> &str;
    fn category(&self) -> &str;
    fn price(&self) -> Option<f64>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    #[default]
    None,
    PriceAscending,
    PriceDescending,
    Name,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::None,
        SortMode::PriceAscending,
        SortMode::PriceDescending,
        SortMode::Name,
    ];

    /// Значение `<option value=...>` в списке сортировки
    pub fn as_value(&self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::PriceAscending => "low",
            SortMode::PriceDescending => "high",
            SortMode::Name => "name",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::None => "Sort by",
            SortMode::PriceAscending => "Price: Low to High",
            SortMode::PriceDescending => "Price: High to Low",
            SortMode::Name => "Name (A–Z)",
        }
    }

    /// Неизвестные значения дают `SortMode::None`
    pub fn from_value(value: &str) -> Self {
        match value {
            "low" => SortMode::PriceAscending,
            "high" => SortMode::PriceDescending,
            "name" => SortMode::Name,
            _ => SortMode::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub active_category: String,
    pub search_term: String,
    pub sort_mode: SortMode,
    /// Номер страницы, начиная с 1
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_category: ALL_CATEGORIES.to_string(),
            search_term: String::new(),
            sort_mode: SortMode::None,
            current_page: 1,
        }
    }
}

impl ViewState {
    pub fn with_category(self, category: impl Into<String>) -> Self {
        Self {
            active_category: category.into(),
            current_page: 1,
            ..self
        }
    }

    pub fn with_search(self, term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            current_page: 1,
            ..self
        }
    }

    pub fn with_sort(self, sort_mode: SortMode) -> Self {
        Self {
            sort_mode,
            current_page: 1,
            ..self
        }
    }

    pub fn with_page(self, page: usize) -> Self {
        Self {
            current_page: page.max(1),
            ..self
        }
    }

    pub fn next_page(self) -> Self {
        let page = self.current_page + 1;
        self.with_page(page)
    }

    pub fn prev_page(self) -> Self {
        let page = self.current_page.saturating_sub(1);
        self.with_page(page)
    }
}

/// Результат `compute_view`: позиции текущей страницы и сведения для пагинатора
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView<T> {
    pub items: Vec<T>,
    /// Фактическая страница после ограничения диапазоном
    pub page: usize,
    pub total_pages: usize,
    /// Количество позиций после фильтров
    pub total_count: usize,
}

impl<T> CatalogView<T> {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    pub fn pager(&self) -> Pager {
        Pager {
            page: self.page,
            total_pages: self.total_pages,
        }
    }
}

/// Положение пагинатора: страница уже ограничена диапазоном `1..=total_pages`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: usize,
    pub total_pages: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 1,
        }
    }
}

impl Pager {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }

    /// Переход со страницы, которую видит посетитель, а не с сохранённой
    pub fn prev(&self, state: ViewState) -> ViewState {
        if self.has_prev() {
            state.with_page(self.page).prev_page()
        } else {
            state
        }
    }

    pub fn next(&self, state: ViewState) -> ViewState {
        if self.has_next() {
            state.with_page(self.page).next_page()
        } else {
            state
        }
    }
}

fn compare_price(a: Option<f64>, b: Option<f64>) -> Ordering {
    a.unwrap_or(0.0).total_cmp(&b.unwrap_or(0.0))
}

/// Case-folded comparison with a byte-order tie-break, so "apple" sorts
/// next to "Apple" rather than after "Zebra".
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

pub fn compute_view<T>(all: &[T], state: &ViewState, page_size: usize) -> CatalogView<T>
where
    T: Listable + Clone,
{
    let page_size = page_size.max(1);
    let term = state.search_term.trim().to_lowercase();

    let mut items: Vec<&T> = all
        .iter()
        .filter(|item| {
            state.active_category == ALL_CATEGORIES || item.category() == state.active_category
        })
        .filter(|item| term.is_empty() || item.name().to_lowercase().contains(&term))
        .collect();

    // sort_by стабильна: равные элементы сохраняют порядок листа
    match state.sort_mode {
        SortMode::None => {}
        SortMode::PriceAscending => items.sort_by(|a, b| compare_price(a.price(), b.price())),
        SortMode::PriceDescending => items.sort_by(|a, b| compare_price(b.price(), a.price())),
        SortMode::Name => items.sort_by(|a, b| compare_names(a.name(), b.name())),
    }

    let total_count = items.len();
    let total_pages = total_count.div_ceil(page_size).max(1);
    let page = state.current_page.clamp(1, total_pages);

    let items = items
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect();

    CatalogView {
        items,
        page,
        total_pages,
        total_count,
    }
}

/// Размер страницы для узких и широких экранов
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PagePresets {
    pub narrow: usize,
    pub wide: usize,
    /// Ширина окна (px), начиная с которой экран считается широким
    pub breakpoint: u32,
}

impl Default for PagePresets {
    fn default() -> Self {
        Self {
            narrow: 10,
            wide: 15,
            breakpoint: 600,
        }
    }
}

impl PagePresets {
    pub fn page_size_for_width(&self, width: f64) -> usize {
        if width < f64::from(self.breakpoint) {
            self.narrow
        } else {
            self.wide
        }
    }
}

/// Пункты фильтра: "All", категории из настроек, затем категории из данных,
/// которых нет в настройках (в порядке первого появления).
pub fn category_options<T: Listable>(configured: &[String], items: &[T]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(ALL_CATEGORIES);

    let from_data = items.iter().map(|item| item.category());
    for category in configured.iter().map(String::as_str).chain(from_data) {
        if seen.insert(category) {
            options.push(category.to_string());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: String,
        category: String,
        price: Option<f64>,
    }

    impl Listable for Item {
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

    fn item(name: &str, category: &str, price: Option<f64>) -> Item {
        Item {
            name: name.to_string(),
            category: category.to_string(),
            price,
        }
    }

    fn twenty() -> Vec<Item> {
        // цены 20, 19, ..., 1 (обратный порядок относительно сортировки)
        (0..20)
            .map(|i| item(&format!("Item {:02}", i), "Decor and Display", Some(20.0 - i as f64)))
            .collect()
    }

    fn names(view: &CatalogView<Item>) -> Vec<&str> {
        view.items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_price_ascending_two_pages() {
        let all = twenty();
        let state = ViewState::default().with_sort(SortMode::PriceAscending);

        let first = compute_view(&all, &state, 15);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.items.len(), 15);
        let prices: Vec<f64> = first.items.iter().map(|i| i.price.unwrap()).collect();
        assert_eq!(prices, (1..=15).map(f64::from).collect::<Vec<_>>());

        let second = compute_view(&all, &state.clone().next_page(), 15);
        assert_eq!(second.page, 2);
        let prices: Vec<f64> = second.items.iter().map(|i| i.price.unwrap()).collect();
        assert_eq!(prices, vec![16.0, 17.0, 18.0, 19.0, 20.0]);
        assert!(second.pager().has_prev());
        assert!(!second.pager().has_next());
    }

    #[test]
    fn test_pages_are_disjoint_and_exhaustive() {
        let all = twenty();
        for page_size in 1..=21 {
            let state = ViewState::default();
            let total_pages = compute_view(&all, &state, page_size).total_pages;
            let mut collected = Vec::new();
            for p in 1..=total_pages {
                let view = compute_view(&all, &state.clone().with_page(p), page_size);
                assert!(view.items.len() <= page_size);
                collected.extend(view.items);
            }
            assert_eq!(collected, all);
        }
    }

    #[test]
    fn test_compute_view_is_pure() {
        let all = twenty();
        let state = ViewState::default()
            .with_search("item 1")
            .with_sort(SortMode::Name);
        assert_eq!(compute_view(&all, &state, 4), compute_view(&all, &state, 4));
    }

    #[test]
    fn test_category_and_search_filters() {
        let all = vec![
            item("Gold Chair", "Dining Accessories", Some(2.0)),
            item("Arch Backdrop", "Backdrops and Stands", Some(40.0)),
            item("Chair Sash", "Decor and Display", None),
        ];

        let state = ViewState::default().with_category("Dining Accessories");
        assert_eq!(names(&compute_view(&all, &state, 15)), vec!["Gold Chair"]);

        let state = ViewState::default().with_search("  CHAIR ");
        assert_eq!(
            names(&compute_view(&all, &state, 15)),
            vec!["Gold Chair", "Chair Sash"]
        );

        let state = ViewState::default().with_category("Board Games");
        let view = compute_view(&all, &state, 15);
        assert!(view.is_empty());
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.page, 1);
    }

    #[test]
    fn test_missing_price_sorts_as_zero() {
        let all = vec![
            item("B", "x", Some(5.0)),
            item("A", "x", None),
            item("C", "x", Some(0.5)),
        ];
        let asc = compute_view(&all, &ViewState::default().with_sort(SortMode::PriceAscending), 15);
        assert_eq!(names(&asc), vec!["A", "C", "B"]);
        let desc = compute_view(&all, &ViewState::default().with_sort(SortMode::PriceDescending), 15);
        assert_eq!(names(&desc), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let all = vec![
            item("zebra print runner", "x", None),
            item("Apple crate", "x", None),
            item("apple basket", "x", None),
        ];
        let view = compute_view(&all, &ViewState::default().with_sort(SortMode::Name), 15);
        assert_eq!(
            names(&view),
            vec!["apple basket", "Apple crate", "zebra print runner"]
        );
    }

    #[test]
    fn test_page_is_clamped() {
        let all = twenty();
        let view = compute_view(&all, &ViewState::default().with_page(99), 15);
        assert_eq!(view.page, 2);
        assert_eq!(view.items.len(), 5);
        assert_eq!(view.pager().page_label(), "Page 2 of 2");
    }

    #[test]
    fn test_pager_steps_from_clamped_page() {
        let all = twenty();
        let state = ViewState::default().with_page(99);
        let pager = compute_view(&all, &state, 15).pager();

        let back = pager.prev(state.clone());
        assert_eq!(back.current_page, 1);
        assert_eq!(compute_view(&all, &back, 15).page, 1);

        // на последней странице «вперёд» ничего не меняет
        assert_eq!(pager.next(state.clone()), state);

        let first = compute_view(&all, &ViewState::default(), 15).pager();
        assert!(!first.has_prev());
        assert_eq!(first.prev(ViewState::default()), ViewState::default());
        assert_eq!(first.next(ViewState::default()).current_page, 2);
        assert_eq!(first.page_label(), "Page 1 of 2");
    }

    #[test]
    fn test_state_transitions_reset_page() {
        let state = ViewState::default().with_page(3);
        assert_eq!(state.clone().with_category("Board Games").current_page, 1);
        assert_eq!(state.clone().with_search("x").current_page, 1);
        assert_eq!(state.clone().with_sort(SortMode::Name).current_page, 1);
        assert_eq!(state.clone().prev_page().current_page, 2);
        assert_eq!(ViewState::default().prev_page().current_page, 1);
    }

    #[test]
    fn test_sort_mode_values() {
        for mode in SortMode::ALL {
            assert_eq!(SortMode::from_value(mode.as_value()), mode);
        }
        assert_eq!(SortMode::from_value("bogus"), SortMode::None);
    }

    #[test]
    fn test_page_presets() {
        let presets = PagePresets::default();
        assert_eq!(presets.page_size_for_width(375.0), 10);
        assert_eq!(presets.page_size_for_width(600.0), 15);
        assert_eq!(presets.page_size_for_width(1440.0), 15);
    }

    #[test]
    fn test_category_options() {
        let configured = vec!["Board Games".to_string(), "Decor and Display".to_string()];
        let none: Vec<Item> = Vec::new();
        assert_eq!(
            category_options(&configured, &none),
            vec!["All", "Board Games", "Decor and Display"]
        );
    }

    #[test]
    fn test_category_options_include_unlisted_categories() {
        let configured = vec!["Board Games".to_string()];
        let all = vec![
            item("Lantern", "Other", None),
            item("Chess", "Board Games", Some(5.0)),
            item("Fog Machine", "Effects", Some(30.0)),
            item("Crate", "Other", None),
        ];
        let options = category_options(&configured, &all);
        assert_eq!(options, vec!["All", "Board Games", "Other", "Effects"]);

        // каждую позицию можно найти через её категорию
        for it in &all {
            let state = ViewState::default().with_category(it.category.clone());
            assert!(compute_view(&all, &state, 15)
                .items
                .iter()
                .any(|found| found.name == it.name));
        }
    }
}
