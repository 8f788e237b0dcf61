use dioxus::prelude::*;

use coach_core::model::NotificationKind;
use coach_core::time::Clock;

use crate::vm::{TOAST_TTL_MS, Toast, ToastQueue};

/// Shared handle for raising toasts from any view.
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: Signal<ToastQueue>,
    clock: Clock,
}

impl Notifier {
    /// Creates the notifier backing a page. Must run inside a component
    /// scope (typically via `use_context_provider`).
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            queue: Signal::new(ToastQueue::new()),
            clock,
        }
    }

    /// Shows a toast and schedules its removal after `TOAST_TTL_MS`.
    /// Concurrent calls stack independent toasts; a scheduled removal
    /// cannot be cancelled.
    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) {
        let mut queue = self.queue;
        let clock = self.clock;
        queue.write().push(message, kind, clock.now());
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
            queue.write().prune_expired(clock.now());
        });
    }

    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.read().toasts().to_vec()
    }
}

/// Fixed-position stack the toasts render into.
#[component]
pub fn ToastHost() -> Element {
    let notifier = use_context::<Notifier>();
    let toasts = notifier.toasts();

    rsx! {
        div { class: "notification-stack",
            for toast in toasts {
                div {
                    key: "{toast.id()}",
                    class: "notification {toast.kind().css_class()}",
                    "{toast.message()}"
                }
            }
        }
    }
}
