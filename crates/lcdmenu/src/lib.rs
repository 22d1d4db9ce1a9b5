#![forbid(unsafe_code)]

//! lcdmenu public facade crate.
//!
//! Re-exports the types a host needs to build, drive and draw a menu, plus
//! a prelude for day-to-day use.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use lcdmenu_core::{
    Icon, IconAnimation, InputEvent, InputKey, InputKind, MenuStyle, PLUGINS_14,
    ParseMenuStyleError, SharedStyle, StyleSource,
};

// --- Render re-exports -----------------------------------------------------

pub use lcdmenu_render::{
    Align, Canvas, Color, DISPLAY_HEIGHT, DISPLAY_WIDTH, DrawCommand, Font, Orientation,
    RecordingCanvas,
};
#[cfg(feature = "embedded-graphics")]
pub use lcdmenu_render::{Framebuffer, FramebufferCanvas};

// --- Widget re-exports -----------------------------------------------------

pub use lcdmenu_widgets::menu::{Label, Menu, MenuCallback, MenuItem, MenuSnapshot, MenuView};
pub use lcdmenu_widgets::{PeriodicTimer, View};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for lcdmenu hosts.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while talking to the display or terminal.
    Io(std::io::Error),
    /// Unrecognized layout style name.
    Style(ParseMenuStyleError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Style(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Style(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ParseMenuStyleError> for Error {
    fn from(err: ParseMenuStyleError) -> Self {
        Self::Style(err)
    }
}

/// Standard result type for lcdmenu hosts.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Canvas, Error, InputEvent, InputKey, InputKind, Menu, MenuStyle, MenuView, Result,
        SharedStyle, View,
    };
}

pub use lcdmenu_core as core;
pub use lcdmenu_render as render;
pub use lcdmenu_widgets as widgets;
