use crate::layout::global_context::use_site;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Короткое уведомление внизу экрана.
///
/// Один таймер на сервис: новое уведомление заменяет предыдущее, а его
/// таймер отменяется вместе со старым `Timeout`.
#[derive(Clone, Copy)]
pub struct ToastService {
    message: RwSignal<Option<String>>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
    duration_ms: u32,
}

impl ToastService {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            message: RwSignal::new(None),
            timer: StoredValue::new_local(None),
            duration_ms,
        }
    }

    pub fn show(&self, text: impl Into<String>) {
        self.message.set(Some(text.into()));

        let message = self.message;
        let timeout = Timeout::new(self.duration_ms, move || message.set(None));
        self.timer.update_value(|t| *t = Some(timeout));
    }

    pub fn message(&self) -> Option<String> {
        self.message.get()
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = use_site().toast;

    on_cleanup(move || {
        let _ = toast.timer.try_update_value(|t| *t = None);
    });

    view! {
        {move || toast.message().map(|text| view! {
            <div class="toast show" role="status" aria-live="polite">{text}</div>
        })}
    }
}
