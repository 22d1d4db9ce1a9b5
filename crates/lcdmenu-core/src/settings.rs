#![forbid(unsafe_code)]

//! Menu layout-style setting.
//!
//! The active [`MenuStyle`] is a process-wide user preference that can
//! change at any time. Widgets never cache it: they read it through a
//! [`StyleSource`] on every draw and every navigation move, so hosts can
//! swap styles without notifying anyone.
//!
//! # Environment Variables
//!
//! | Variable        | Effect                                       |
//! |-----------------|----------------------------------------------|
//! | `LCDMENU_STYLE` | Initial style: `list`, `wii`, `dsi`, `vertical` |

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

/// Environment variable consulted by [`MenuStyle::from_env`].
pub const STYLE_ENV_VAR: &str = "LCDMENU_STYLE";

/// One of the four interchangeable menu layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuStyle {
    /// Single column, three rows, selection in the middle.
    #[default]
    List,
    /// Two-row grid of column pairs.
    Wii,
    /// Five-slot circular carousel.
    Dsi,
    /// Rotated display, eight-row column.
    Vertical,
}

impl MenuStyle {
    /// All styles in settings order.
    pub const ALL: [Self; 4] = [Self::List, Self::Wii, Self::Dsi, Self::Vertical];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Wii => "wii",
            Self::Dsi => "dsi",
            Self::Vertical => "vertical",
        }
    }

    /// Read the style from [`STYLE_ENV_VAR`].
    ///
    /// Returns `None` when the variable is unset or unparseable; an
    /// unparseable value is logged and otherwise ignored.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let raw = std::env::var(STYLE_ENV_VAR).ok()?;
        match raw.parse() {
            Ok(style) => Some(style),
            Err(err) => {
                tracing::warn!(value = %raw, error = %err, "ignoring invalid LCDMENU_STYLE");
                None
            }
        }
    }

    /// The next style in settings order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::List => Self::Wii,
            Self::Wii => Self::Dsi,
            Self::Dsi => Self::Vertical,
            Self::Vertical => Self::List,
        }
    }

    const fn to_raw(self) -> u8 {
        match self {
            Self::List => 0,
            Self::Wii => 1,
            Self::Dsi => 2,
            Self::Vertical => 3,
        }
    }

    const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Self::Wii,
            2 => Self::Dsi,
            3 => Self::Vertical,
            _ => Self::List,
        }
    }
}

impl fmt::Display for MenuStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known [`MenuStyle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMenuStyleError {
    input: String,
}

impl ParseMenuStyleError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseMenuStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown menu style {:?} (expected list, wii, dsi or vertical)",
            self.input
        )
    }
}

impl std::error::Error for ParseMenuStyleError {}

impl FromStr for MenuStyle {
    type Err = ParseMenuStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(Self::List),
            "wii" | "grid" | "grid-pair" => Ok(Self::Wii),
            "dsi" | "carousel" => Ok(Self::Dsi),
            "vertical" | "column" => Ok(Self::Vertical),
            _ => Err(ParseMenuStyleError {
                input: s.to_string(),
            }),
        }
    }
}

/// Narrow read-only accessor for the current layout style.
pub trait StyleSource: Send + Sync {
    /// The style in effect right now.
    fn menu_style(&self) -> MenuStyle;
}

/// A fixed style, mostly useful in tests.
impl StyleSource for MenuStyle {
    fn menu_style(&self) -> MenuStyle {
        *self
    }
}

/// A shared, runtime-changeable style setting.
///
/// Clones share the same value; writes are visible to every reader on
/// their next read.
#[derive(Debug, Clone, Default)]
pub struct SharedStyle {
    raw: Arc<AtomicU8>,
}

impl SharedStyle {
    /// Create a setting holding `style`.
    #[must_use]
    pub fn new(style: MenuStyle) -> Self {
        Self {
            raw: Arc::new(AtomicU8::new(style.to_raw())),
        }
    }

    /// Create a setting from [`STYLE_ENV_VAR`], falling back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(MenuStyle::from_env().unwrap_or_default())
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> MenuStyle {
        MenuStyle::from_raw(self.raw.load(Ordering::Acquire))
    }

    /// Replace the value.
    pub fn set(&self, style: MenuStyle) {
        tracing::debug!(style = %style, "menu style changed");
        self.raw.store(style.to_raw(), Ordering::Release);
    }
}

impl StyleSource for SharedStyle {
    fn menu_style(&self) -> MenuStyle {
        self.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonical_names() {
        for style in MenuStyle::ALL {
            assert_eq!(style.name().parse::<MenuStyle>(), Ok(style));
        }
    }

    #[test]
    fn parse_aliases_and_case() {
        assert_eq!("Grid".parse::<MenuStyle>(), Ok(MenuStyle::Wii));
        assert_eq!(" carousel ".parse::<MenuStyle>(), Ok(MenuStyle::Dsi));
        assert_eq!("COLUMN".parse::<MenuStyle>(), Ok(MenuStyle::Vertical));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "tiles".parse::<MenuStyle>().unwrap_err();
        assert_eq!(err.input(), "tiles");
        assert!(err.to_string().contains("tiles"));
    }

    #[test]
    fn display_round_trips_name() {
        assert_eq!(MenuStyle::Vertical.to_string(), "vertical");
    }

    #[test]
    fn next_cycles_through_all() {
        let mut style = MenuStyle::List;
        for expected in [
            MenuStyle::Wii,
            MenuStyle::Dsi,
            MenuStyle::Vertical,
            MenuStyle::List,
        ] {
            style = style.next();
            assert_eq!(style, expected);
        }
    }

    #[test]
    fn shared_style_clones_observe_writes() {
        let setting = SharedStyle::new(MenuStyle::List);
        let reader = setting.clone();
        setting.set(MenuStyle::Dsi);
        assert_eq!(reader.menu_style(), MenuStyle::Dsi);
    }

    #[test]
    fn fixed_style_source() {
        assert_eq!(MenuStyle::Wii.menu_style(), MenuStyle::Wii);
    }

    #[test]
    fn raw_encoding_is_lossless() {
        for style in MenuStyle::ALL {
            assert_eq!(MenuStyle::from_raw(style.to_raw()), style);
        }
    }
}
