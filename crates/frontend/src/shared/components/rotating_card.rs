//! Card whose image cycles while the pointer is over it.

use contracts::shared::rotation::{first_hover_index, next_rotation_index, rotates};
use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// Таймер вращения карточки. Сброс таймера (`Interval`) останавливает его.
struct RotationHandle<H: 'static = Interval> {
    timer: StoredValue<Option<H>, LocalStorage>,
}

impl<H: 'static> Clone for RotationHandle<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: 'static> Copy for RotationHandle<H> {}

impl<H: 'static> RotationHandle<H> {
    fn new() -> Self {
        Self {
            timer: StoredValue::new_local(None),
        }
    }

    fn is_running(&self) -> bool {
        self.timer.with_value(Option::is_some)
    }

    /// Запускает таймер, если он ещё не запущен. `make` вызывается только
    /// при запуске; возвращает, был ли таймер запущен.
    fn start_with(&self, make: impl FnOnce() -> H) -> bool {
        if self.is_running() {
            return false;
        }
        self.timer.set_value(Some(make()));
        true
    }

    fn stop(&self) {
        let _ = self.timer.try_update_value(|t| *t = None);
    }
}

#[component]
pub fn RotatingCard(
    images: Vec<String>,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] image_class: String,
    period_ms: u32,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let len = images.len();
    let images = StoredValue::new(images);
    let index = RwSignal::new(0usize);
    let handle: RotationHandle = RotationHandle::new();

    let on_enter = move |_| {
        if !rotates(len) {
            return;
        }
        handle.start_with(|| {
            index.set(first_hover_index(len));
            Interval::new(period_ms, move || {
                index.update(|i| *i = next_rotation_index(*i, len));
            })
        });
    };

    let on_leave = move |_| {
        handle.stop();
        index.set(0);
    };

    on_cleanup(move || handle.stop());

    let src = move || images.with_value(|imgs| imgs.get(index.get()).cloned().unwrap_or_default());
    let card_class = if class.is_empty() {
        "card".to_string()
    } else {
        format!("card {}", class)
    };

    view! {
        <div
            class=card_class
            class:clickable=on_click.is_some()
            on:mouseenter=on_enter
            on:mouseleave=on_leave
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <img class=image_class src=src alt=alt loading="lazy" />
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Таймер-заглушка: считает, сколько раз его остановили (сбросили)
    struct Ticker(Rc<Cell<usize>>);

    impl Drop for Ticker {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_second_hover_does_not_stack_timers() {
        let owner = Owner::new();
        owner.set();

        let stopped = Rc::new(Cell::new(0));
        let started = Cell::new(0);
        let handle: RotationHandle<Ticker> = RotationHandle::new();

        let make = || {
            started.set(started.get() + 1);
            Ticker(Rc::clone(&stopped))
        };
        assert!(handle.start_with(make));
        assert!(!handle.start_with(make));
        assert!(handle.is_running());
        assert_eq!(started.get(), 1);
        assert_eq!(stopped.get(), 0);
    }

    #[test]
    fn test_hover_exit_cancels_timer() {
        let owner = Owner::new();
        owner.set();

        let stopped = Rc::new(Cell::new(0));
        let handle: RotationHandle<Ticker> = RotationHandle::new();

        handle.start_with(|| Ticker(Rc::clone(&stopped)));
        handle.stop();
        assert!(!handle.is_running());
        assert_eq!(stopped.get(), 1);

        // повторная остановка ничего не делает, новое наведение запускает заново
        handle.stop();
        assert_eq!(stopped.get(), 1);
        assert!(handle.start_with(|| Ticker(Rc::clone(&stopped))));
        handle.stop();
        assert_eq!(stopped.get(), 2);
    }
}
