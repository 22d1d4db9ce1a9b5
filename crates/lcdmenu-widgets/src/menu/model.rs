#![forbid(unsafe_code)]

//! Lock-protected menu state and the snapshots drawn from it.

use std::time::Duration;

use lcdmenu_core::{IconAnimation, MenuStyle};

use super::item::{Label, MenuCallback, MenuItem};
use super::navigation::{self, Cursor, Direction};

/// Everything guarded by the menu's model lock.
#[derive(Debug, Default)]
pub(crate) struct MenuModel {
    items: Vec<MenuItem>,
    position: usize,
    /// Start position not yet reachable because too few items exist.
    requested: Option<usize>,
    scroll_counter: usize,
    viewport_offset: usize,
}

impl MenuModel {
    pub(crate) fn with_position(position: usize) -> Self {
        Self {
            requested: (position > 0).then_some(position),
            ..Self::default()
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn scroll_counter(&self) -> usize {
        self.scroll_counter
    }

    pub(crate) fn viewport_offset(&self) -> usize {
        self.viewport_offset
    }

    pub(crate) fn item(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    pub(crate) fn running_animations(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.icon().is_running())
            .count()
    }

    /// Append an item, keeping the selection on an existing item.
    ///
    /// A start position past the end selects the last item until enough
    /// items exist, then the requested one.
    pub(crate) fn push(&mut self, item: MenuItem, style: MenuStyle) {
        self.items.push(item);
        let last = self.items.len() - 1;
        let target = match self.requested {
            Some(requested) if requested <= last => {
                self.requested = None;
                requested
            }
            Some(_) => last,
            None => return,
        };
        if target != self.position {
            self.move_selection(target, style);
        }
    }

    /// Stop and drop every item, returning to position zero.
    pub(crate) fn reset(&mut self) {
        for item in &mut self.items {
            item.icon_mut().stop();
        }
        self.items.clear();
        self.position = 0;
        self.requested = None;
        self.viewport_offset = 0;
        self.scroll_counter = 0;
    }

    /// Select `index` if it names an item. Returns whether it did.
    pub(crate) fn select(&mut self, index: usize, style: MenuStyle) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.requested = None;
        self.move_selection(index, style);
        true
    }

    /// Jump to `target`, seating the window around it and handing the
    /// running animation over.
    fn move_selection(&mut self, target: usize, style: MenuStyle) {
        let was_running = self
            .selected_icon_mut()
            .is_some_and(|icon| icon.is_running());
        if let Some(icon) = self.selected_icon_mut() {
            icon.stop();
        }
        self.position = target;
        self.viewport_offset = navigation::seat_window(style, target, self.items.len());
        self.scroll_counter = 0;
        if was_running && let Some(icon) = self.selected_icon_mut() {
            icon.start();
        }
    }

    fn selected_icon_mut(&mut self) -> Option<&mut IconAnimation> {
        self.items
            .get_mut(self.position)
            .map(MenuItem::icon_mut)
    }

    /// Becoming visible: animate the selection and restart its scroll.
    pub(crate) fn enter(&mut self) {
        if let Some(icon) = self.selected_icon_mut() {
            icon.start();
        }
        self.scroll_counter = 0;
    }

    /// Leaving visibility: freeze the selection's animation.
    pub(crate) fn exit(&mut self) {
        if let Some(icon) = self.selected_icon_mut() {
            icon.stop();
        }
    }

    /// One scroll-timer period elapsed.
    pub(crate) fn tick(&mut self, dt: Duration) {
        self.scroll_counter = self.scroll_counter.wrapping_add(1);
        for item in &mut self.items {
            item.icon_mut().tick(dt);
        }
    }

    /// Apply a direction key. Returns whether the selection logic ran.
    pub(crate) fn navigate(&mut self, style: MenuStyle, direction: Direction) -> bool {
        let cursor = Cursor::new(self.position, self.viewport_offset);
        let Some(next) = navigation::navigate(style, direction, cursor, self.items.len()) else {
            return false;
        };
        if let Some(icon) = self.selected_icon_mut() {
            icon.stop();
        }
        self.requested = None;
        self.scroll_counter = 0;
        self.position = next.position;
        self.viewport_offset = next.viewport_offset;
        if let Some(icon) = self.selected_icon_mut() {
            icon.start();
        }
        tracing::trace!(
            ?style,
            ?direction,
            position = self.position,
            viewport_offset = self.viewport_offset,
            "menu selection moved"
        );
        true
    }

    /// The selected item's callback and external index, if any.
    pub(crate) fn activation(&self) -> Option<(MenuCallback, u32)> {
        let item = self.items.get(self.position)?;
        let callback = item.callback()?;
        Some((callback.clone(), item.external_index()))
    }

    pub(crate) fn snapshot(&self) -> MenuSnapshot {
        MenuSnapshot {
            items: self
                .items
                .iter()
                .map(|item| ItemSnapshot {
                    label: item.shared_label(),
                    icon: item.icon().clone(),
                })
                .collect(),
            position: self.position,
            scroll_counter: self.scroll_counter,
            viewport_offset: self.viewport_offset,
        }
    }
}

/// Drawable copy of one item.
#[derive(Debug, Clone)]
pub struct ItemSnapshot {
    /// Full label.
    pub label: Label,
    /// Animation state at snapshot time.
    pub icon: IconAnimation,
}

/// Drawable copy of the whole menu, taken under the model lock.
#[derive(Debug, Clone, Default)]
pub struct MenuSnapshot {
    /// Items in insertion order.
    pub items: Vec<ItemSnapshot>,
    /// Selected index.
    pub position: usize,
    /// Ticks since the selection last changed.
    pub scroll_counter: usize,
    /// First visible item for windowed layouts.
    pub viewport_offset: usize,
}

impl MenuSnapshot {
    /// Horizontal scroll offset for the label of item `index`.
    ///
    /// Only the selected item scrolls, and it holds still for the first
    /// tick after the selection changes.
    #[must_use]
    pub fn scroll_for(&self, index: usize) -> usize {
        if index == self.position {
            self.scroll_counter.saturating_sub(1)
        } else {
            0
        }
    }
}
