#![forbid(unsafe_code)]

//! 1-bit framebuffer canvas backed by `embedded-graphics`.
//!
//! [`FramebufferCanvas`] rasterizes [`Canvas`] calls into a 128x64
//! [`Framebuffer`]. Shapes and text go through `embedded-graphics`
//! primitives and mono fonts; a private [`DrawTarget`] adapter applies the
//! current [`Color`] mode and maps logical coordinates through the current
//! [`Orientation`] before touching the buffer.
//!
//! # Fonts
//!
//! | Font             | Face        |
//! |------------------|-------------|
//! | `Primary`        | `FONT_6X10` |
//! | `Secondary`      | `FONT_5X8`  |
//! | `BatteryPercent` | `FONT_4X6`  |

use std::convert::Infallible;

use embedded_graphics::mono_font::ascii::{FONT_4X6, FONT_5X8, FONT_6X10};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use crate::canvas::{Align, Canvas, Color, DISPLAY_HEIGHT, DISPLAY_WIDTH, Font, Orientation};

const BYTES_PER_ROW: usize = (DISPLAY_WIDTH as usize).div_ceil(8);

/// Physical 128x64 monochrome pixel store, row-major, LSB-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    bits: Vec<u8>,
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a framebuffer with every pixel off.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bits: vec![0; BYTES_PER_ROW * DISPLAY_HEIGHT as usize],
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        DISPLAY_WIDTH
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        DISPLAY_HEIGHT
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.bits.fill(0);
    }

    /// Whether physical pixel `(x, y)` is on. Out of range reads as off.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        self.index(x, y)
            .is_some_and(|(byte, mask)| self.bits[byte] & mask != 0)
    }

    /// Set physical pixel `(x, y)`. Out of range is ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, on: bool) {
        if let Some((byte, mask)) = self.index(x, y) {
            if on {
                self.bits[byte] |= mask;
            } else {
                self.bits[byte] &= !mask;
            }
        }
    }

    /// Invert physical pixel `(x, y)`. Out of range is ignored.
    pub fn toggle_pixel(&mut self, x: u32, y: u32) {
        if let Some((byte, mask)) = self.index(x, y) {
            self.bits[byte] ^= mask;
        }
    }

    /// Number of pixels currently on.
    #[must_use]
    pub fn count_on(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    fn index(&self, x: u32, y: u32) -> Option<(usize, u8)> {
        if x >= DISPLAY_WIDTH || y >= DISPLAY_HEIGHT {
            return None;
        }
        let byte = y as usize * BYTES_PER_ROW + x as usize / 8;
        Some((byte, 1 << (x % 8)))
    }
}

/// [`Canvas`] implementation that rasterizes into a [`Framebuffer`].
#[derive(Debug, Clone, Default)]
pub struct FramebufferCanvas {
    fb: Framebuffer,
    color: Color,
    font: Font,
    orientation: Orientation,
}

impl FramebufferCanvas {
    /// Create a cleared, horizontal canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The pixels drawn so far.
    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// Consume the canvas, keeping its pixels.
    #[must_use]
    pub fn into_framebuffer(self) -> Framebuffer {
        self.fb
    }

    fn painter(&mut self) -> Painter<'_> {
        Painter {
            fb: &mut self.fb,
            color: self.color,
            orientation: self.orientation,
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, alignment: Alignment, baseline: Baseline, text: &str) {
        let style = MonoTextStyle::new(mono_font(self.font), BinaryColor::On);
        let text_style = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(baseline)
            .build();
        let mut painter = self.painter();
        let _ = Text::with_text_style(text, Point::new(x, y), style, text_style).draw(&mut painter);
    }
}

fn mono_font(font: Font) -> &'static MonoFont<'static> {
    match font {
        Font::Primary => &FONT_6X10,
        Font::Secondary => &FONT_5X8,
        Font::BatteryPercent => &FONT_4X6,
    }
}

fn size(width: u32, height: u32) -> Size {
    Size::new(width, height)
}

impl Canvas for FramebufferCanvas {
    fn width(&self) -> u32 {
        self.orientation.size().0
    }

    fn height(&self) -> u32 {
        self.orientation.size().1
    }

    fn clear(&mut self) {
        self.fb.clear();
        self.color = Color::Black;
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    fn draw_dot(&mut self, x: i32, y: i32) {
        self.painter().plot(x, y);
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let mut painter = self.painter();
        let _ = Line::new(Point::new(x1, y1), Point::new(x2, y2))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut painter);
    }

    fn draw_box(&mut self, x: i32, y: i32, width: u32, height: u32) {
        let mut painter = self.painter();
        let _ = Rectangle::new(Point::new(x, y), size(width, height))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut painter);
    }

    fn draw_frame(&mut self, x: i32, y: i32, width: u32, height: u32) {
        let mut painter = self.painter();
        let _ = Rectangle::new(Point::new(x, y), size(width, height))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut painter);
    }

    fn draw_rbox(&mut self, x: i32, y: i32, width: u32, height: u32, radius: u32) {
        let mut painter = self.painter();
        let _ = RoundedRectangle::with_equal_corners(
            Rectangle::new(Point::new(x, y), size(width, height)),
            size(radius, radius),
        )
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(&mut painter);
    }

    fn draw_rframe(&mut self, x: i32, y: i32, width: u32, height: u32, radius: u32) {
        let mut painter = self.painter();
        let _ = RoundedRectangle::with_equal_corners(
            Rectangle::new(Point::new(x, y), size(width, height)),
            size(radius, radius),
        )
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(&mut painter);
    }

    fn draw_str(&mut self, x: i32, y: i32, text: &str) {
        self.draw_text(x, y, Alignment::Left, Baseline::Alphabetic, text);
    }

    fn draw_str_aligned(&mut self, x: i32, y: i32, horizontal: Align, vertical: Align, text: &str) {
        let alignment = match horizontal {
            Align::Center => Alignment::Center,
            Align::Right => Alignment::Right,
            _ => Alignment::Left,
        };
        let baseline = match vertical {
            Align::Center => Baseline::Middle,
            Align::Bottom => Baseline::Bottom,
            _ => Baseline::Top,
        };
        self.draw_text(x, y, alignment, baseline, text);
    }

    fn draw_bitmap(&mut self, x: i32, y: i32, width: u8, height: u8, data: &[u8]) {
        let row_bytes = usize::from(width).div_ceil(8);
        let mut painter = self.painter();
        for row in 0..height {
            for col in 0..width {
                let index = usize::from(row) * row_bytes + usize::from(col / 8);
                let on = data
                    .get(index)
                    .is_some_and(|byte| byte & (1 << (col % 8)) != 0);
                if on {
                    painter.plot(x + i32::from(col), y + i32::from(row));
                }
            }
        }
    }

    fn glyph_width(&self, _ch: char) -> u32 {
        let font = mono_font(self.font);
        font.character_size.width + font.character_spacing
    }
}

/// Borrowed drawing adapter: color mode plus orientation mapping.
struct Painter<'a> {
    fb: &'a mut Framebuffer,
    color: Color,
    orientation: Orientation,
}

impl Painter<'_> {
    fn plot(&mut self, x: i32, y: i32) {
        let (width, height) = self.orientation.size();
        if x < 0 || y < 0 || x as u32 >= width || y as u32 >= height {
            return;
        }
        let (px, py) = match self.orientation {
            Orientation::Horizontal => (x as u32, y as u32),
            // Quarter turn: logical x runs bottom-to-top on the panel.
            Orientation::Vertical => (y as u32, DISPLAY_HEIGHT - 1 - x as u32),
        };
        match self.color {
            Color::Black => self.fb.set_pixel(px, py, true),
            Color::White => self.fb.set_pixel(px, py, false),
            Color::Xor => self.fb.toggle_pixel(px, py),
        }
    }
}

impl OriginDimensions for Painter<'_> {
    fn size(&self) -> Size {
        let (width, height) = self.orientation.size();
        Size::new(width, height)
    }
}

impl DrawTarget for Painter<'_> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, on) in pixels {
            if on.is_on() {
                self.plot(point.x, point.y);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements;
    use lcdmenu_core::{IconAnimation, PLUGINS_14};

    #[test]
    fn dot_respects_color_modes() {
        let mut canvas = FramebufferCanvas::new();
        canvas.draw_dot(3, 4);
        assert!(canvas.framebuffer().pixel(3, 4));
        canvas.set_color(Color::Xor);
        canvas.draw_dot(3, 4);
        assert!(!canvas.framebuffer().pixel(3, 4));
        canvas.draw_dot(3, 4);
        canvas.set_color(Color::White);
        canvas.draw_dot(3, 4);
        assert!(!canvas.framebuffer().pixel(3, 4));
    }

    #[test]
    fn out_of_range_is_clipped() {
        let mut canvas = FramebufferCanvas::new();
        canvas.draw_dot(-1, 0);
        canvas.draw_dot(128, 0);
        canvas.draw_dot(0, 64);
        assert_eq!(canvas.framebuffer().count_on(), 0);
    }

    #[test]
    fn box_fills_area() {
        let mut canvas = FramebufferCanvas::new();
        canvas.draw_box(10, 10, 4, 3);
        assert_eq!(canvas.framebuffer().count_on(), 12);
        assert!(canvas.framebuffer().pixel(13, 12));
        assert!(!canvas.framebuffer().pixel(14, 12));
    }

    #[test]
    fn white_box_clears() {
        let mut canvas = FramebufferCanvas::new();
        canvas.draw_box(0, 0, 8, 8);
        canvas.set_color(Color::White);
        canvas.draw_box(2, 2, 4, 4);
        assert_eq!(canvas.framebuffer().count_on(), 64 - 16);
    }

    #[test]
    fn vertical_orientation_rotates() {
        let mut canvas = FramebufferCanvas::new();
        canvas.set_orientation(Orientation::Vertical);
        assert_eq!((canvas.width(), canvas.height()), (64, 128));
        canvas.draw_dot(0, 0);
        canvas.draw_dot(63, 127);
        assert!(canvas.framebuffer().pixel(0, 63));
        assert!(canvas.framebuffer().pixel(127, 0));
        assert_eq!(canvas.framebuffer().count_on(), 2);
    }

    #[test]
    fn text_lights_pixels_and_measures_by_font() {
        let mut canvas = FramebufferCanvas::new();
        canvas.set_font(Font::Primary);
        assert_eq!(canvas.string_width("ab"), 12);
        canvas.set_font(Font::Secondary);
        assert_eq!(canvas.string_width("ab"), 10);
        canvas.set_font(Font::BatteryPercent);
        assert_eq!(canvas.string_width("ab"), 8);
        canvas.draw_str(2, 32, "Empty");
        assert!(canvas.framebuffer().count_on() > 0);
    }

    #[test]
    fn icon_bitmap_matches_asset() {
        let mut canvas = FramebufferCanvas::new();
        let anim = IconAnimation::new(&PLUGINS_14);
        canvas.draw_icon_animation(20, 10, &anim);
        for y in 0..14u8 {
            for x in 0..14u8 {
                assert_eq!(
                    canvas
                        .framebuffer()
                        .pixel(20 + u32::from(x), 10 + u32::from(y)),
                    anim.pixel(x, y),
                    "pixel ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn clear_wipes_pixels() {
        let mut canvas = FramebufferCanvas::new();
        elements::scrollbar(&mut canvas, 1, 4);
        assert!(canvas.framebuffer().count_on() > 0);
        canvas.clear();
        assert_eq!(canvas.framebuffer().count_on(), 0);
    }
}
