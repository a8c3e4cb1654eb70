use crate::render::DetailView;
use leptos::prelude::*;
use leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub fading: bool,
}

/// Visible toasts, oldest first.
///
/// Operations on an id that is already gone are no-ops returning `false`:
/// removal timers can fire after the user closed the toast by hand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            fading: false,
        });
        id
    }

    pub fn begin_fade(&mut self, id: u64) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.fading = true;
                true
            }
            None => false,
        }
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn is_fading(&self, id: u64) -> bool {
        self.toasts.iter().any(|t| t.id == id && t.fading)
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Toasts plus the details overlay, shared through app context.
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<ToastQueue>,
    modal: RwSignal<Option<DetailView>>,
    /// Pending fade/removal timer per toast.
    timers: StoredValue<BTreeMap<u64, TimeoutHandle>>,
    visible: Duration,
    fade: Duration,
}

impl Notifier {
    pub fn new(visible_ms: u32, fade_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            modal: RwSignal::new(None),
            timers: StoredValue::new(BTreeMap::new()),
            visible: Duration::from_millis(visible_ms.into()),
            fade: Duration::from_millis(fade_ms.into()),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }

    pub fn is_fading(&self, id: u64) -> bool {
        self.queue.with(|q| q.is_fading(id))
    }

    pub fn show_toast(&self, message: impl Into<String>, kind: ToastKind) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(message, kind));

        let this = *self;
        self.schedule(id, self.visible, move || {
            this.queue.update(|q| {
                q.begin_fade(id);
            });
            this.schedule(id, this.fade, move || this.remove(id));
        });
    }

    /// Closes a toast now and cancels its pending timer.
    pub fn dismiss(&self, id: u64) {
        if let Some(handle) = self.timers.try_update_value(|t| t.remove(&id)).flatten() {
            handle.clear();
        }
        self.remove(id);
    }

    fn remove(&self, id: u64) {
        self.timers.update_value(|t| {
            t.remove(&id);
        });
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    fn schedule(&self, id: u64, delay: Duration, f: impl FnOnce() + 'static) {
        match set_timeout_with_handle(f, delay) {
            Ok(handle) => self.timers.update_value(|t| {
                t.insert(id, handle);
            }),
            // Without a timer the toast stays until closed by hand.
            Err(e) => leptos::logging::warn!("[notify] cannot schedule toast removal: {e:?}"),
        }
    }

    pub fn open_modal(&self, details: DetailView) {
        self.modal.set(Some(details));
    }

    pub fn close_modal(&self) {
        self.modal.set(None);
    }

    pub fn modal(&self) -> Option<DetailView> {
        self.modal.get()
    }

    pub fn modal_open(&self) -> bool {
        self.modal.with(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_queue_push_assigns_increasing_ids() {
        let mut q = ToastQueue::default();
        let a = q.push("first", ToastKind::Success);
        let b = q.push("second", ToastKind::Error);
        assert!(b > a);
        assert_eq!(q.toasts().len(), 2);
        assert_eq!(q.toasts()[1].kind, ToastKind::Error);
    }

    #[test]
    fn test_toast_fade_then_dismiss() {
        let mut q = ToastQueue::default();
        let id = q.push("Saved", ToastKind::Success);

        assert!(!q.is_fading(id));
        assert!(q.begin_fade(id));
        assert!(q.is_fading(id));

        assert!(q.dismiss(id));
        assert!(q.toasts().is_empty());
    }

    #[test]
    fn test_late_timer_on_removed_toast_is_noop() {
        let mut q = ToastQueue::default();
        let gone = q.push("closed by hand", ToastKind::Success);
        let kept = q.push("still here", ToastKind::Success);
        q.dismiss(gone);

        assert!(!q.begin_fade(gone));
        assert!(!q.dismiss(gone));
        assert_eq!(q.toasts().len(), 1);
        assert_eq!(q.toasts()[0].id, kept);
    }
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn pending_timers(notifier: &Notifier) -> usize {
        notifier.timers.with_value(|t| t.len())
    }

    #[wasm_bindgen_test]
    async fn test_toast_fades_then_is_removed() {
        let owner = Owner::new();
        let notifier = owner.with(|| Notifier::new(60, 60));

        notifier.show_toast("Event registered successfully.", ToastKind::Success);
        let id = notifier.toasts()[0].id;
        assert!(!notifier.is_fading(id));
        assert_eq!(pending_timers(&notifier), 1);

        // Past the visible period, inside the fade.
        TimeoutFuture::new(90).await;
        assert!(notifier.is_fading(id));
        assert_eq!(notifier.toasts().len(), 1);

        // Past visible + fade.
        TimeoutFuture::new(150).await;
        assert!(notifier.toasts().is_empty());
        assert_eq!(pending_timers(&notifier), 0);
    }

    #[wasm_bindgen_test]
    async fn test_dismiss_cancels_pending_timer() {
        let owner = Owner::new();
        let notifier = owner.with(|| Notifier::new(40, 40));

        notifier.show_toast("Already registered.", ToastKind::Error);
        let id = notifier.toasts()[0].id;
        notifier.dismiss(id);
        assert!(notifier.toasts().is_empty());
        assert_eq!(pending_timers(&notifier), 0);

        // A later toast is untouched once the cancelled deadlines pass.
        notifier.show_toast("Joined club successfully.", ToastKind::Success);
        TimeoutFuture::new(20).await;
        assert_eq!(notifier.toasts().len(), 1);
        assert!(!notifier.toasts()[0].fading);
    }
}
