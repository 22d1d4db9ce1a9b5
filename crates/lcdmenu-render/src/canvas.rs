#![forbid(unsafe_code)]

//! The canvas contract.
//!
//! A [`Canvas`] is a small monochrome drawing surface with a current color,
//! font, and orientation. Coordinates are signed so callers can position
//! shapes partially off-screen; implementations clip.
//!
//! Text is positioned by its baseline for [`Canvas::draw_str`] and by the
//! requested anchors for [`Canvas::draw_str_aligned`].

use lcdmenu_core::IconAnimation;

/// Physical display width in pixels.
pub const DISPLAY_WIDTH: u32 = 128;
/// Physical display height in pixels.
pub const DISPLAY_HEIGHT: u32 = 64;

/// Ink color for subsequent drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Pixels on.
    #[default]
    Black,
    /// Pixels off.
    White,
    /// Pixels inverted.
    Xor,
}

/// Text font for subsequent string drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Font {
    /// Bold headline font.
    Primary,
    /// Regular body font.
    #[default]
    Secondary,
    /// Tiny caption font.
    BatteryPercent,
}

/// Text anchor along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Align {
    /// Anchor at the left edge.
    Left,
    /// Anchor at the right edge.
    Right,
    /// Anchor at the top edge.
    Top,
    /// Anchor at the bottom edge.
    Bottom,
    /// Anchor at the middle.
    Center,
}

/// Mapping of canvas coordinates onto the physical display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Native landscape, 128x64.
    #[default]
    Horizontal,
    /// Rotated a quarter turn, 64x128.
    Vertical,
}

impl Orientation {
    /// Logical `(width, height)` in this orientation.
    #[must_use]
    pub const fn size(self) -> (u32, u32) {
        match self {
            Self::Horizontal => (DISPLAY_WIDTH, DISPLAY_HEIGHT),
            Self::Vertical => (DISPLAY_HEIGHT, DISPLAY_WIDTH),
        }
    }
}

/// A monochrome drawing surface.
pub trait Canvas {
    /// Logical width in the current orientation.
    fn width(&self) -> u32;

    /// Logical height in the current orientation.
    fn height(&self) -> u32;

    /// Turn every pixel off and reset color to [`Color::Black`].
    fn clear(&mut self);

    /// Set the ink color.
    fn set_color(&mut self, color: Color);

    /// Set the text font.
    fn set_font(&mut self, font: Font);

    /// Set the orientation. Takes effect for subsequent drawing only.
    fn set_orientation(&mut self, orientation: Orientation);

    /// Draw a single pixel.
    fn draw_dot(&mut self, x: i32, y: i32);

    /// Draw a one-pixel line between two inclusive endpoints.
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);

    /// Fill a rectangle.
    fn draw_box(&mut self, x: i32, y: i32, width: u32, height: u32);

    /// Outline a rectangle.
    fn draw_frame(&mut self, x: i32, y: i32, width: u32, height: u32);

    /// Fill a rectangle with rounded corners.
    fn draw_rbox(&mut self, x: i32, y: i32, width: u32, height: u32, radius: u32);

    /// Outline a rectangle with rounded corners.
    fn draw_rframe(&mut self, x: i32, y: i32, width: u32, height: u32, radius: u32);

    /// Draw text with its baseline at `y`.
    fn draw_str(&mut self, x: i32, y: i32, text: &str);

    /// Draw text anchored at `(x, y)`.
    fn draw_str_aligned(&mut self, x: i32, y: i32, horizontal: Align, vertical: Align, text: &str);

    /// Draw an XBM bitmap (LSB-first rows) in the current color.
    fn draw_bitmap(&mut self, x: i32, y: i32, width: u8, height: u8, data: &[u8]);

    /// Advance width of one character in the current font.
    fn glyph_width(&self, ch: char) -> u32;

    /// Width of `text` in the current font.
    fn string_width(&self, text: &str) -> u32 {
        text.chars().map(|ch| self.glyph_width(ch)).sum()
    }

    /// Draw the current frame of an icon animation.
    fn draw_icon_animation(&mut self, x: i32, y: i32, animation: &IconAnimation) {
        self.draw_bitmap(
            x,
            y,
            animation.width(),
            animation.height(),
            animation.frame(),
        );
    }
}
