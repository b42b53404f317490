//! The capabilities the controller needs from its host.
//!
//! The browser implementation lives in `web`; tests use an in-memory fake.

use crate::config::RevealOptions;
use crate::shortcuts::KeyInput;

/// Handler for key-down events. Returns `true` to suppress the browser default.
pub type KeyHandler = Box<dyn FnMut(&KeyInput) -> bool>;
/// Handler for pointer-down events; receives whether the pointer hit the palette.
pub type PointerHandler = Box<dyn FnMut(PointerInput)>;
/// Handler for scroll events; receives the current vertical offset in pixels.
pub type ScrollHandler = Box<dyn FnMut(f64)>;
/// Handler for in-document anchor clicks; receives the target id without `#`.
pub type AnchorHandler = Box<dyn FnMut(&str)>;
/// Handler for visibility changes; receives the region and whether it intersects.
pub type VisibilityHandler<R> = Box<dyn FnMut(&R, bool)>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerInput {
    pub inside_palette: bool,
}

pub trait Environment {
    /// Handle to a region observed for the reveal animation.
    type Region: 'static;

    fn register_key_listener(&self, handler: KeyHandler) -> Subscription;
    fn register_pointer_listener(&self, handler: PointerHandler) -> Subscription;
    fn register_scroll_listener(&self, handler: ScrollHandler) -> Subscription;
    fn register_visibility_listener(
        &self,
        options: RevealOptions,
        handler: VisibilityHandler<Self::Region>,
    ) -> Subscription;
    /// The adapter prevents the default jump before calling `handler`.
    fn register_anchor_listener(&self, handler: AnchorHandler) -> Subscription;

    fn scroll_to_region(&self, region_id: &str);
    fn focus_element(&self, element_id: &str);
    fn scroll_offset(&self) -> f64;
    fn set_nav_elevated(&self, elevated: bool);
    fn reveal(&self, region: &Self::Region);
    fn notify(&self, message: &str);
}

/// Disposer returned by every listener registration.
///
/// The teardown runs exactly once: on [`Subscription::dispose`] or on drop.
#[must_use = "dropping a Subscription immediately removes the listener"]
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// A subscription with nothing to tear down, for registrations that failed.
    pub fn inert() -> Self {
        Self { teardown: None }
    }

    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}
