//! Transient notifications.
//!
//! A [`Toaster`] is provided once at the app root; any component can grab
//! it with [`use_toaster`] and push a [`Notification`]. Toasts dismiss
//! themselves after [`TOAST_DURATION_MS`] or on click.

use gloo_timers::callback::Timeout;
use leptos::*;
use portal_core::Notification;

use crate::{MAX_TOASTS, TOAST_DURATION_MS};

/// A notification on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Add a toast, dropping the oldest ones past `limit`. Returns its id.
    pub fn push(&mut self, notification: Notification, limit: usize) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notification });
        if self.toasts.len() > limit {
            let excess = self.toasts.len() - limit;
            self.toasts.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Handle to the app-wide toast queue.
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
}

impl Toaster {
    fn new() -> Self {
        Self {
            queue: create_rw_signal(ToastQueue::default()),
        }
    }

    /// Show a notification and schedule its dismissal.
    pub fn toast(&self, notification: Notification) {
        log::info!("🔔 {}: {}", notification.title, notification.description);

        let mut id = 0;
        self.queue
            .update(|queue| id = queue.push(notification, MAX_TOASTS));

        let queue = self.queue;
        Timeout::new(TOAST_DURATION_MS, move || {
            queue.update(|q| q.dismiss(id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

/// Create the toaster and put it in context. Call once, at the root.
pub fn provide_toaster() -> Toaster {
    let toaster = Toaster::new();
    provide_context(toaster);
    toaster
}

/// The toaster provided by [`provide_toaster`].
pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Renders the toasts in a fixed corner of the viewport.
#[component]
pub fn ToastViewport(toaster: Toaster) -> impl IntoView {
    let queue = toaster.queue;

    view! {
        <ol class="toast-viewport">
            <For
                each=move || queue.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class_name = format!("toast {}", toast.notification.severity.css_class());
                    view! {
                        <li class=class_name role="status" on:click=move |_| toaster.dismiss(id)>
                            <div class="toast-title">{toast.notification.title}</div>
                            <div class="toast-description">{toast.notification.description}</div>
                        </li>
                    }
                }
            />
        </ol>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(Notification::submitted(), 3);
        let b = queue.push(Notification::submission_failed(), 3);
        assert!(b > a);
        assert_eq!(queue.toasts().len(), 2);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notification::validation_failed(), 2);
        queue.push(Notification::custom_category_missing(), 2);
        queue.push(Notification::submitted(), 2);

        let ids: Vec<u64> = queue.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 2);
        assert!(!ids.contains(&first));
        assert_eq!(queue.toasts()[1].notification, Notification::submitted());
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::default();
        let id = queue.push(Notification::submitted(), 3);
        queue.dismiss(id);
        assert!(queue.is_empty());
        // unknown ids are ignored
        queue.dismiss(42);
        assert!(queue.is_empty());
    }
}
