#![forbid(unsafe_code)]

//! Monochrome canvas abstraction and drawing elements for 128x64 displays.
//!
//! - [`canvas`]: the [`Canvas`] trait and its color, font, alignment and
//!   orientation vocabulary.
//! - [`elements`]: frames, rounded boxes, scrollbars and scrolling text
//!   built on top of any canvas.
//! - [`recording`]: a canvas that logs calls, for tests and benchmarks.
//! - `framebuffer` (feature `embedded-graphics`): a real 1-bit raster.

pub mod canvas;
pub mod elements;
#[cfg(feature = "embedded-graphics")]
pub mod framebuffer;
pub mod recording;

pub use canvas::{Align, Canvas, Color, DISPLAY_HEIGHT, DISPLAY_WIDTH, Font, Orientation};
#[cfg(feature = "embedded-graphics")]
pub use framebuffer::{Framebuffer, FramebufferCanvas};
pub use recording::{DrawCommand, RecordingCanvas};
