#![forbid(unsafe_code)]

//! Selection movement per layout style.
//!
//! Every function here is pure: it maps a [`Cursor`] and the item count to
//! the next cursor. The widget applies the side effects (stopping and
//! starting icon animations, resetting the scroll counter) around the
//! transition.
//!
//! # Windowing
//!
//! Linear styles keep an eight-row window: stepping onto the row just
//! above the window scrolls it up by one, stepping onto its last row
//! scrolls it down by one, and wrapping jumps the window to the matching
//! end. The grid style recomputes its offset from the position after every
//! move instead.

use lcdmenu_core::{InputKey, MenuStyle};

/// Rows visible in the windowed styles.
pub const WINDOW_ROWS: usize = 8;

/// A direction key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up key.
    Up,
    /// Down key.
    Down,
    /// Left key.
    Left,
    /// Right key.
    Right,
}

impl Direction {
    /// The direction for a key, if it is one.
    #[must_use]
    pub const fn from_key(key: InputKey) -> Option<Self> {
        match key {
            InputKey::Up => Some(Self::Up),
            InputKey::Down => Some(Self::Down),
            InputKey::Left => Some(Self::Left),
            InputKey::Right => Some(Self::Right),
            _ => None,
        }
    }
}

/// Selection plus window start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor {
    /// Selected index.
    pub position: usize,
    /// First visible index.
    pub viewport_offset: usize,
}

impl Cursor {
    /// Create a cursor.
    #[must_use]
    pub const fn new(position: usize, viewport_offset: usize) -> Self {
        Self {
            position,
            viewport_offset,
        }
    }
}

/// Apply `direction` under `style`.
///
/// Returns `None` when the style ignores the direction or the menu is
/// empty; the caller must then leave all state untouched. A position past
/// the end is clamped to the last item before moving.
#[must_use]
pub fn navigate(
    style: MenuStyle,
    direction: Direction,
    cursor: Cursor,
    count: usize,
) -> Option<Cursor> {
    if count == 0 {
        return None;
    }
    let cursor = Cursor {
        position: cursor.position.min(count - 1),
        ..cursor
    };
    let next = match (style, direction) {
        (MenuStyle::List, Direction::Up) => step_back(cursor, count),
        (MenuStyle::List, Direction::Down) => step_forward(cursor, count),
        (MenuStyle::List, _) => return None,

        (MenuStyle::Wii, Direction::Up | Direction::Down) => {
            grid_window(grid_toggle(cursor.position, count), count)
        }
        (MenuStyle::Wii, Direction::Left) => grid_window(grid_left(cursor.position, count), count),
        (MenuStyle::Wii, Direction::Right) => {
            grid_window(grid_right(cursor.position, count), count)
        }

        (MenuStyle::Dsi | MenuStyle::Vertical, Direction::Left) => step_back(cursor, count),
        (MenuStyle::Dsi | MenuStyle::Vertical, Direction::Right) => step_forward(cursor, count),
        (MenuStyle::Dsi | MenuStyle::Vertical, _) => return None,
    };
    Some(next)
}

/// Linear move to the previous item, wrapping to the last.
fn step_back(cursor: Cursor, count: usize) -> Cursor {
    let Cursor {
        position,
        mut viewport_offset,
    } = cursor;
    if position == 0 {
        return Cursor::new(count - 1, count.saturating_sub(WINDOW_ROWS));
    }
    let position = position - 1;
    if viewport_offset != 0 && viewport_offset == position {
        viewport_offset -= 1;
    }
    Cursor::new(position, viewport_offset)
}

/// Linear move to the next item, wrapping to the first.
fn step_forward(cursor: Cursor, count: usize) -> Cursor {
    let Cursor {
        position,
        mut viewport_offset,
    } = cursor;
    if position + 1 >= count {
        return Cursor::new(0, 0);
    }
    let position = position + 1;
    if viewport_offset < count.saturating_sub(WINDOW_ROWS)
        && viewport_offset + (WINDOW_ROWS - 1) == position
    {
        viewport_offset += 1;
    }
    Cursor::new(position, viewport_offset)
}

/// Whether `position` is the bottom of its pair or the unpaired last item.
fn grid_pairs_backward(position: usize, count: usize) -> bool {
    position % 2 == 1 || (position == count - 1 && count % 2 == 1)
}

/// Up/Down in the grid: swap within the column pair.
fn grid_toggle(position: usize, count: usize) -> usize {
    if grid_pairs_backward(position, count) {
        // A lone item has nowhere to go.
        position.checked_sub(1).unwrap_or(position)
    } else {
        position + 1
    }
}

/// Left in the grid: previous column, wrapping to the last one.
fn grid_left(position: usize, count: usize) -> usize {
    if position >= 2 {
        position - 2
    } else if count % 2 == 1 {
        count - 1
    } else {
        count - 2 + position % 2
    }
}

/// Right in the grid: next column, wrapping to the first one.
fn grid_right(position: usize, count: usize) -> usize {
    if count % 2 == 1 {
        if position == count - 1 {
            0
        } else if position + 2 == count {
            count - 1
        } else {
            position + 2
        }
    } else {
        let next = position + 2;
        if next >= count { next % 2 } else { next }
    }
}

/// Grid window start for `position`.
fn grid_window(position: usize, count: usize) -> Cursor {
    Cursor::new(position, seat_window(MenuStyle::Wii, position, count))
}

/// Window start that shows `position` when the selection jumps there
/// directly instead of stepping.
///
/// Linear styles leave one row of headroom on each side, so the next step
/// in either direction still scrolls the window rather than leaving it.
#[must_use]
pub fn seat_window(style: MenuStyle, position: usize, count: usize) -> usize {
    let last_start = count.saturating_sub(WINDOW_ROWS);
    match style {
        MenuStyle::Wii => position.saturating_sub(4).min(last_start),
        MenuStyle::List | MenuStyle::Dsi | MenuStyle::Vertical => position
            .saturating_sub(WINDOW_ROWS - 2)
            .min(last_start),
    }
}

/// First item drawn by the grid layout for `position`.
///
/// The window shows three column pairs and only scrolls once the menu has
/// more than six items and the selection reaches the third column.
#[must_use]
pub fn grid_render_start(position: usize, count: usize) -> usize {
    if count <= 6 || position < 4 {
        return 0;
    }
    let column_start = position - position % 2;
    if position + 2 >= count + count % 2 {
        column_start - 4
    } else {
        column_start - 2
    }
}
