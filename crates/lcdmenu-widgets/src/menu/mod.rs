#![forbid(unsafe_code)]

//! Selectable icon menu for a 128x64 display.
//!
//! A [`Menu`] owns an ordered list of labeled, icon-bearing items and one
//! selection. It renders in whichever [`MenuStyle`] its [`StyleSource`]
//! reports at draw time, turns direction keys into selection moves, and
//! calls the selected item's callback on OK.
//!
//! # Concurrency
//!
//! All state sits behind a single model lock. Input, the scroll timer and
//! drawing each hold it only long enough to mutate or snapshot the model:
//! drawing renders from a [`MenuSnapshot`] after the lock is released, and
//! activation callbacks run unlocked, so a callback may call back into the
//! menu freely.
//!
//! # Example
//!
//! ```
//! use lcdmenu_core::{InputEvent, InputKey, MenuStyle};
//! use lcdmenu_render::RecordingCanvas;
//! use lcdmenu_widgets::menu::Menu;
//! use lcdmenu_widgets::View;
//!
//! let menu = Menu::with_style(0, MenuStyle::List);
//! menu.add_item("Clock", None, 1, None);
//! menu.add_item("Sub-GHz", None, 2, None);
//!
//! let view = menu.view();
//! assert!(view.input(InputEvent::short(InputKey::Down)));
//! assert_eq!(menu.selected(), 1);
//!
//! let mut canvas = RecordingCanvas::new();
//! view.draw(&mut canvas);
//! assert!(canvas.texts().any(|t| t == "Sub-GHz"));
//! ```

mod item;
mod model;
pub mod navigation;
pub mod render;

pub use item::{Label, MenuCallback, MenuItem, grid_label, short_label};
pub use model::{ItemSnapshot, MenuSnapshot};
pub use navigation::{Cursor, Direction};

use std::borrow::Cow;
use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use lcdmenu_core::{Icon, InputEvent, InputKey, InputKind, MenuStyle, SharedStyle, StyleSource};
use lcdmenu_render::Canvas;

use crate::timer::PeriodicTimer;
use crate::view::View;
use model::MenuModel;

/// Period of the label-scroll and icon-animation timer.
pub const SCROLL_PERIOD: Duration = Duration::from_millis(333);

type RedrawHook = Arc<dyn Fn() + Send + Sync>;

struct MenuInner {
    model: Mutex<MenuModel>,
    style: Box<dyn StyleSource>,
    timer: Mutex<PeriodicTimer>,
    redraw: Mutex<Option<RedrawHook>>,
}

impl MenuInner {
    fn model(&self) -> MutexGuard<'_, MenuModel> {
        self.model.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn timer(&self) -> MutexGuard<'_, PeriodicTimer> {
        self.timer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Signal the host that the model changed. Never called under the
    /// model lock.
    fn request_redraw(&self) {
        let hook = self
            .redraw
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(hook) = hook {
            hook();
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let style = self.style.menu_style();
        let snapshot = self.model().snapshot();
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Menu",
            style = style.name(),
            items = snapshot.items.len(),
            position = snapshot.position
        )
        .entered();
        render::render(canvas, &snapshot, style);
    }

    fn input(&self, event: InputEvent) -> bool {
        let consumed = match (event.kind, event.key) {
            (InputKind::Short | InputKind::Repeat, key) if key.is_direction() => {
                if let Some(direction) = Direction::from_key(key) {
                    let style = self.style.menu_style();
                    self.model().navigate(style, direction);
                }
                true
            }
            (InputKind::Short, InputKey::Ok) => {
                self.activate();
                true
            }
            _ => false,
        };
        if consumed {
            self.request_redraw();
        }
        consumed
    }

    fn activate(&self) {
        let activation = self.model().activation();
        if let Some((callback, index)) = activation {
            tracing::debug!(index, "menu item activated");
            callback(index);
        }
    }

    fn tick(&self) {
        self.model().tick(SCROLL_PERIOD);
        tracing::trace!("menu scroll tick");
        self.request_redraw();
    }

    fn exit(&self) {
        self.model().exit();
        self.timer().stop();
    }
}

fn enter(inner: &Arc<MenuInner>) {
    inner.model().enter();
    let weak = Arc::downgrade(inner);
    inner.timer().start(SCROLL_PERIOD, move || {
        let Some(inner) = weak.upgrade() else {
            return ControlFlow::Break(());
        };
        inner.tick();
        ControlFlow::Continue(())
    });
    inner.request_redraw();
}

/// The menu widget.
///
/// Dropping the menu resets it and stops its timer; [`MenuView`] handles
/// that outlive it see an empty menu.
pub struct Menu {
    inner: Arc<MenuInner>,
}

impl std::fmt::Debug for Menu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let model = self.inner.model();
        f.debug_struct("Menu")
            .field("items", &model.len())
            .field("position", &model.position())
            .field("style", &self.inner.style.menu_style())
            .finish()
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu {
    /// Create an empty menu whose style follows `LCDMENU_STYLE`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_position(0)
    }

    /// Create an empty menu that will select `position` once it exists.
    ///
    /// Until then the selection follows the last item added.
    #[must_use]
    pub fn with_position(position: usize) -> Self {
        Self::with_style(position, SharedStyle::from_env())
    }

    /// Create an empty menu reading its layout style from `style`.
    #[must_use]
    pub fn with_style(position: usize, style: impl StyleSource + 'static) -> Self {
        Self {
            inner: Arc::new(MenuInner {
                model: Mutex::new(MenuModel::with_position(position)),
                style: Box::new(style),
                timer: Mutex::new(PeriodicTimer::new()),
                redraw: Mutex::new(None),
            }),
        }
    }

    /// Append an item. Without an icon the fallback animation is used.
    pub fn add_item(
        &self,
        label: impl Into<Cow<'static, str>>,
        icon: Option<&'static Icon>,
        external_index: u32,
        callback: Option<MenuCallback>,
    ) {
        let item = MenuItem::new(label, icon, external_index, callback);
        tracing::debug!(label = item.label(), external_index, "menu item added");
        let style = self.inner.style.menu_style();
        self.inner.model().push(item, style);
        self.inner.request_redraw();
    }

    /// Append an item whose activation runs `action`.
    pub fn add_action<F>(
        &self,
        label: impl Into<Cow<'static, str>>,
        icon: Option<&'static Icon>,
        external_index: u32,
        action: F,
    ) where
        F: Fn(u32) + Send + Sync + 'static,
    {
        self.add_item(label, icon, external_index, Some(Arc::new(action)));
    }

    /// Remove every item and select position zero.
    pub fn reset(&self) {
        let removed = {
            let mut model = self.inner.model();
            let removed = model.len();
            model.reset();
            removed
        };
        tracing::debug!(removed, "menu reset");
        self.inner.request_redraw();
    }

    /// Select `index` if it names an item; otherwise do nothing.
    ///
    /// The viewport is re-seated so the new selection is on screen.
    pub fn set_selected_item(&self, index: usize) {
        let style = self.inner.style.menu_style();
        let changed = self.inner.model().select(index, style);
        if changed {
            tracing::debug!(index, "menu selection set");
            self.inner.request_redraw();
        }
    }

    /// A shareable handle for the view dispatcher.
    #[must_use]
    pub fn view(&self) -> MenuView {
        MenuView {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Install the host's redraw signal, replacing any previous one.
    ///
    /// Called without the model lock held after every consumed input,
    /// every timer tick and every model mutation.
    pub fn set_redraw_hook<F>(&self, hook: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        *self
            .inner
            .redraw
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(hook));
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.model().len()
    }

    /// Whether the menu has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Selected position.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.inner.model().position()
    }

    /// Timer ticks since the selection last changed or the menu was entered.
    #[must_use]
    pub fn scroll_counter(&self) -> usize {
        self.inner.model().scroll_counter()
    }

    /// First visible item in windowed layouts.
    #[must_use]
    pub fn viewport_offset(&self) -> usize {
        self.inner.model().viewport_offset()
    }

    /// External index of the item at `position`.
    #[must_use]
    pub fn external_index_at(&self, position: usize) -> Option<u32> {
        self.inner
            .model()
            .item(position)
            .map(MenuItem::external_index)
    }

    /// Number of icon animations currently playing.
    #[must_use]
    pub fn running_animations(&self) -> usize {
        self.inner.model().running_animations()
    }

    /// Layout style in effect right now.
    #[must_use]
    pub fn style(&self) -> MenuStyle {
        self.inner.style.menu_style()
    }

    /// Drawable copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> MenuSnapshot {
        self.inner.model().snapshot()
    }
}

impl Drop for Menu {
    fn drop(&mut self) {
        self.inner.model().reset();
        self.inner.timer().stop();
    }
}

/// Cloneable [`View`] handle onto a [`Menu`].
#[derive(Clone)]
pub struct MenuView {
    inner: Arc<MenuInner>,
}

impl std::fmt::Debug for MenuView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuView").finish_non_exhaustive()
    }
}

impl View for MenuView {
    fn draw(&self, canvas: &mut dyn Canvas) {
        self.inner.draw(canvas);
    }

    fn input(&self, event: InputEvent) -> bool {
        self.inner.input(event)
    }

    fn enter(&self) {
        enter(&self.inner);
    }

    fn exit(&self) {
        self.inner.exit();
    }
}
