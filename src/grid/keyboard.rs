//! Document-level keyboard wiring for the grid.
//!
//! The listener is registered when the grid is created and removed when the
//! subscription guard is dropped, so a discarded grid never leaves a stale
//! handler on the document.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::KeyboardEvent;

/// Whether a keystroke toggles the search interface (Ctrl+F / Cmd+F).
pub(crate) fn is_search_toggle(key: &str, ctrl_or_meta: bool) -> bool {
    ctrl_or_meta && key.eq_ignore_ascii_case("f")
}

/// Owns a `keydown` listener on the document; removing it is tied to the
/// guard's lifetime.
#[cfg(target_arch = "wasm32")]
pub(crate) struct KeySubscription {
    closure: Closure<dyn FnMut(KeyboardEvent)>,
}

#[cfg(target_arch = "wasm32")]
impl KeySubscription {
    /// Register `handler` for document keydown events. Returns `None` when
    /// there is no document to attach to.
    pub(crate) fn new(handler: Box<dyn FnMut(KeyboardEvent)>) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let closure = Closure::wrap(handler);
        document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { closure })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for KeySubscription {
    fn drop(&mut self) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document.remove_event_listener_with_callback(
                "keydown",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
