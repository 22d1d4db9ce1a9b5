#![forbid(unsafe_code)]

//! The contract between a widget and the view dispatcher hosting it.

use lcdmenu_core::InputEvent;
use lcdmenu_render::Canvas;

/// A drawable, input-handling surface that can be shown and hidden.
///
/// Every method takes `&self`: views are shared handles whose state lives
/// behind their own lock, so the host can draw from one thread while input
/// and timers arrive on others.
pub trait View: Send + Sync {
    /// Redraw the whole view.
    fn draw(&self, canvas: &mut dyn Canvas);

    /// Handle one input event. Returns whether it was consumed.
    fn input(&self, event: InputEvent) -> bool;

    /// The view became visible.
    fn enter(&self) {}

    /// The view stopped being visible.
    fn exit(&self) {}
}
