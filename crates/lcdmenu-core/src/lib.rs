#![forbid(unsafe_code)]

//! Core: input events, icon assets and animations, and the layout-style setting.

pub mod animation;
pub mod assets;
pub mod event;
pub mod settings;

pub use animation::IconAnimation;
pub use assets::{Icon, PLUGINS_14};
pub use event::{InputEvent, InputKey, InputKind};
pub use settings::{MenuStyle, ParseMenuStyleError, SharedStyle, StyleSource};
