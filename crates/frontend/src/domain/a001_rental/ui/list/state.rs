use contracts::domain::a001_rental::RentalItem;
use contracts::shared::view_state::ViewState;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct RentalListState {
    // category, search, sort, page
    pub view: ViewState,

    // item shown in the details modal
    pub selected: Option<RentalItem>,
}

impl RentalListState {
    pub fn update_view(&mut self, f: impl FnOnce(ViewState) -> ViewState) {
        self.view = f(std::mem::take(&mut self.view));
    }
}

pub fn create_state() -> RwSignal<RentalListState> {
    RwSignal::new(RentalListState::default())
}

/// Выбранная позиция; изменения фильтров и страниц её не затрагивают
pub fn selected_item(state: RwSignal<RentalListState>) -> Memo<Option<RentalItem>> {
    Memo::new(move |_| state.with(|s| s.selected.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::view_state::SortMode;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn tent() -> RentalItem {
        RentalItem {
            name: "Tent".to_string(),
            category: "Decor and Display".to_string(),
            price: Some(25.0),
            description: None,
            images: vec!["tent1.JPG".to_string(), "tent2.JPG".to_string()],
        }
    }

    #[test]
    fn test_update_view_keeps_selection() {
        let mut state = RentalListState {
            selected: Some(tent()),
            ..Default::default()
        };
        state.update_view(|v| v.with_page(3));
        state.update_view(|v| v.with_sort(SortMode::Name));

        assert_eq!(state.view.current_page, 1);
        assert_eq!(state.view.sort_mode, SortMode::Name);
        assert!(state.selected.is_some());
    }

    #[test]
    fn test_selection_survives_view_changes() {
        let owner = Owner::new();
        owner.set();

        let state = create_state();
        let selected = selected_item(state);

        // счётчик пересборок того, что зависит от выбранной позиции
        let rebuilds = Arc::new(AtomicUsize::new(0));
        let modal = {
            let rebuilds = Arc::clone(&rebuilds);
            Memo::new(move |_| {
                rebuilds.fetch_add(1, Ordering::SeqCst);
                selected.get().map(|item| item.name)
            })
        };

        state.update(|s| s.selected = Some(tent()));
        assert_eq!(modal.get().as_deref(), Some("Tent"));
        assert_eq!(rebuilds.load(Ordering::SeqCst), 1);

        state.update(|s| s.update_view(|v| v.with_search("tent")));
        state.update(|s| s.update_view(|v| v.with_page(2)));
        assert_eq!(modal.get().as_deref(), Some("Tent"));
        assert_eq!(rebuilds.load(Ordering::SeqCst), 1);

        state.update(|s| s.selected = None);
        assert_eq!(modal.get(), None);
        assert_eq!(rebuilds.load(Ordering::SeqCst), 2);
    }
}
