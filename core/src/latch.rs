//! Single-flight submitting flag.
//!
//! A [`Latch`] is held for the duration of one remote insert. Acquiring
//! it while it is already held fails instead of waiting, so a second
//! click on the submit button is dropped rather than queued. Release
//! happens when the [`LatchGuard`] is dropped, which also covers early
//! returns and panics inside the guarded section.

use std::cell::Cell;
use std::fmt;

/// Boolean latch scoped to one form instance.
#[derive(Default)]
pub struct Latch {
    held: Cell<bool>,
    listener: Option<Box<dyn Fn(bool)>>,
}

impl Latch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `f` with the new state every time the latch is taken or released.
    ///
    /// The frontend uses this to drive the disabled state of the button.
    pub fn with_listener(mut self, f: impl Fn(bool) + 'static) -> Self {
        self.listener = Some(Box::new(f));
        self
    }

    pub fn is_held(&self) -> bool {
        self.held.get()
    }

    /// Take the latch, or `None` if someone already holds it.
    pub fn try_acquire(&self) -> Option<LatchGuard<'_>> {
        if self.held.replace(true) {
            return None;
        }
        self.notify(true);
        Some(LatchGuard { latch: self })
    }

    fn release(&self) {
        self.held.set(false);
        self.notify(false);
    }

    fn notify(&self, held: bool) {
        if let Some(listener) = &self.listener {
            listener(held);
        }
    }
}

impl fmt::Debug for Latch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Latch")
            .field("held", &self.held.get())
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

/// Proof of holding the latch. Releases on drop.
#[must_use = "the latch is released as soon as the guard is dropped"]
pub struct LatchGuard<'a> {
    latch: &'a Latch,
}

impl Drop for LatchGuard<'_> {
    fn drop(&mut self) {
        self.latch.release();
    }
}
