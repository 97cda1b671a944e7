//! Toast stack backed by a reactive [`ToastQueue`].

use std::time::Duration;

use card_core::notify::{Notice, NoticeKind, Notifier, ToastPosition};
use card_core::toast::{Toast, ToastId, ToastQueue};
use leptos::prelude::*;

/// Notifier that shows notices in a [`ToastStack`] and dismisses them on a timer.
#[derive(Debug, Clone, Copy)]
pub struct ToastHub {
    queue: RwSignal<ToastQueue>,
}

impl Default for ToastHub {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastHub {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new()),
        }
    }

    /// Put a hub in context for every card below the current owner.
    pub fn provide() -> Self {
        let hub = Self::new();
        provide_context(hub);
        hub
    }

    /// The hub in context, if any.
    pub fn from_context() -> Option<Self> {
        use_context::<Self>()
    }

    pub fn dismiss(&self, id: ToastId) {
        // The hub may already be disposed when a timer fires.
        let _ = self.queue.try_update(|q| q.dismiss(id));
    }

    pub fn toasts_at(&self, position: ToastPosition) -> Vec<Toast> {
        self.queue
            .try_with(|q| q.at(position).cloned().collect())
            .unwrap_or_default()
    }
}

impl Notifier for ToastHub {
    fn notify(&self, notice: Notice) {
        let auto_close = notice.auto_close;
        // Deadlines are enforced by the timer below, not by `expire`.
        let Some(id) = self.queue.try_update(|q| q.push(notice, Duration::ZERO)) else {
            return;
        };
        let hub = *self;
        set_timeout(move || hub.dismiss(id), auto_close);
    }
}

/// Provides a [`ToastHub`] to its children and renders the stack after them.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    ToastHub::provide();

    view! {
        {children()}
        <ToastStack/>
    }
}

/// Fixed overlay showing every live toast, one column per anchor.
#[component]
pub fn ToastStack() -> impl IntoView {
    let hub = ToastHub::from_context().unwrap_or_else(ToastHub::provide);

    ToastPosition::ALL
        .into_iter()
        .map(move |position| {
            view! {
                <div class=container_classes(position) data-position=position.as_str()>
                    <For
                        each=move || hub.toasts_at(position)
                        key=|toast: &Toast| toast.id
                        children=move |toast: Toast| {
                            let id = toast.id;
                            view! {
                                <div
                                    class=toast_classes(toast.notice.kind)
                                    role="status"
                                    on:click=move |_| hub.dismiss(id)
                                >
                                    {toast.notice.message}
                                </div>
                            }
                        }
                    />
                </div>
            }
        })
        .collect_view()
}

/// Placement classes for the column at `position`.
pub fn container_classes(position: ToastPosition) -> &'static str {
    match position {
        ToastPosition::TopLeft => "fixed z-50 flex flex-col gap-2 top-4 left-4",
        ToastPosition::TopRight => "fixed z-50 flex flex-col gap-2 top-4 right-4",
        ToastPosition::TopCenter => "fixed z-50 flex flex-col gap-2 top-4 left-1/2 -translate-x-1/2",
        ToastPosition::BottomLeft => "fixed z-50 flex flex-col-reverse gap-2 bottom-4 left-4",
        ToastPosition::BottomRight => "fixed z-50 flex flex-col-reverse gap-2 bottom-4 right-4",
        ToastPosition::BottomCenter => {
            "fixed z-50 flex flex-col-reverse gap-2 bottom-4 left-1/2 -translate-x-1/2"
        }
    }
}

/// Colour classes for a toast of `kind`.
pub fn toast_classes(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "rounded-md shadow px-4 py-3 text-sm cursor-pointer bg-white border-l-4 border-green-500",
        NoticeKind::Info => "rounded-md shadow px-4 py-3 text-sm cursor-pointer bg-white border-l-4 border-blue-500",
        NoticeKind::Warning => "rounded-md shadow px-4 py-3 text-sm cursor-pointer bg-white border-l-4 border-yellow-500",
        NoticeKind::Error => "rounded-md shadow px-4 py-3 text-sm cursor-pointer bg-white border-l-4 border-red-500",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_columns_grow_upward() {
        for position in ToastPosition::ALL {
            let classes = container_classes(position);
            assert!(classes.starts_with("fixed"));
            assert_eq!(
                classes.contains("flex-col-reverse"),
                position.as_str().starts_with("bottom")
            );
        }
    }

    #[test]
    fn test_success_toast_is_green() {
        assert!(toast_classes(NoticeKind::Success).contains("border-green-500"));
        assert!(toast_classes(NoticeKind::Error).contains("border-red-500"));
    }
}
