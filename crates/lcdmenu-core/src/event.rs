#![forbid(unsafe_code)]

//! Canonical input event types.
//!
//! The device input service reports five physical keys plus Back, and
//! classifies every key interaction into a kind: raw `Press`/`Release`
//! edges, a `Short` or `Long` press once the key is released (or held long
//! enough), and `Repeat` events emitted while a key stays held.
//!
//! # Design Notes
//!
//! - Widgets generally act on `Short` and `Repeat` only; raw edges are
//!   left to parents that need them.
//! - `InputKey::Other` absorbs anything a host can deliver that the device
//!   has no key for, so hosts never have to drop events themselves.

#[cfg(feature = "crossterm")]
use crossterm::event as cte;

/// A physical key on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    /// Up direction.
    Up,
    /// Down direction.
    Down,
    /// Left direction.
    Left,
    /// Right direction.
    Right,
    /// Center select button.
    Ok,
    /// Back button.
    Back,
    /// Any key the device does not define.
    Other,
}

impl InputKey {
    /// Whether this key is one of the four directions.
    #[must_use]
    pub const fn is_direction(self) -> bool {
        matches!(self, Self::Up | Self::Down | Self::Left | Self::Right)
    }
}

/// Classification of a key interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputKind {
    /// Key went down.
    Press,
    /// Key went up.
    Release,
    /// Key was pressed and released before the long-press threshold.
    #[default]
    Short,
    /// Key was held past the long-press threshold.
    Long,
    /// Key is still held; emitted periodically after `Long`.
    Repeat,
}

/// A single input event delivered to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputEvent {
    /// Which key.
    pub key: InputKey,
    /// What happened to it.
    pub kind: InputKind,
}

impl InputEvent {
    /// Create an event of the given kind.
    #[must_use]
    pub const fn new(key: InputKey, kind: InputKind) -> Self {
        Self { key, kind }
    }

    /// Create a `Short` press event.
    #[must_use]
    pub const fn short(key: InputKey) -> Self {
        Self::new(key, InputKind::Short)
    }

    /// Create a `Repeat` event.
    #[must_use]
    pub const fn repeat(key: InputKey) -> Self {
        Self::new(key, InputKind::Repeat)
    }

    /// Convert a crossterm event into a device [`InputEvent`].
    ///
    /// Returns `None` for anything that is not a key event. Terminals
    /// report key-down as `Press`, which is treated as a completed `Short`
    /// press; auto-repeat maps to `Repeat`.
    #[must_use]
    #[cfg(feature = "crossterm")]
    pub fn from_crossterm(event: &cte::Event) -> Option<Self> {
        match event {
            cte::Event::Key(key) => Some(Self::new(map_key_code(key.code), map_key_kind(key.kind))),
            _ => None,
        }
    }
}

#[cfg(feature = "crossterm")]
fn map_key_kind(kind: cte::KeyEventKind) -> InputKind {
    match kind {
        cte::KeyEventKind::Press => InputKind::Short,
        cte::KeyEventKind::Repeat => InputKind::Repeat,
        cte::KeyEventKind::Release => InputKind::Release,
    }
}

#[cfg(feature = "crossterm")]
fn map_key_code(code: cte::KeyCode) -> InputKey {
    match code {
        cte::KeyCode::Up => InputKey::Up,
        cte::KeyCode::Down => InputKey::Down,
        cte::KeyCode::Left => InputKey::Left,
        cte::KeyCode::Right => InputKey::Right,
        cte::KeyCode::Enter | cte::KeyCode::Char(' ') => InputKey::Ok,
        cte::KeyCode::Esc | cte::KeyCode::Backspace => InputKey::Back,
        _ => InputKey::Other,
    }
}
