#![forbid(unsafe_code)]

//! Widgets for 128x64 monochrome menus.
//!
//! The centerpiece is [`menu::Menu`], a selectable icon list with four
//! interchangeable layouts. [`View`] is the contract a host dispatcher
//! drives it through, and [`timer::PeriodicTimer`] is the background
//! ticker that animates it while visible.

pub mod menu;
pub mod timer;
pub mod view;

pub use menu::{Menu, MenuCallback, MenuSnapshot, MenuView};
pub use timer::PeriodicTimer;
pub use view::View;
