#![forbid(unsafe_code)]

//! A canvas that records draw calls instead of rasterizing them.
//!
//! [`RecordingCanvas`] uses fixed per-font advances (primary 6 px,
//! secondary 5 px, battery 4 px), so text measurement is predictable and
//! tests can assert exact positions. Color, font and orientation are state,
//! not commands: each recorded command carries the color (and, for text,
//! the font) that was current when it was issued.

use lcdmenu_core::IconAnimation;

use crate::canvas::{Align, Canvas, Color, Font, Orientation};

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// Canvas cleared.
    Clear,
    /// Orientation switched.
    Orientation(Orientation),
    /// Single pixel.
    Dot { x: i32, y: i32, color: Color },
    /// Line between inclusive endpoints.
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    },
    /// Filled rectangle.
    Box {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Color,
    },
    /// Rectangle outline.
    Frame {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Color,
    },
    /// Filled rounded rectangle.
    RoundedBox {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        radius: u32,
        color: Color,
    },
    /// Rounded rectangle outline.
    RoundedFrame {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        radius: u32,
        color: Color,
    },
    /// Text; `align` is `None` for baseline-positioned text.
    Text {
        x: i32,
        y: i32,
        text: String,
        font: Font,
        color: Color,
        align: Option<(Align, Align)>,
    },
    /// Raw bitmap.
    Bitmap {
        x: i32,
        y: i32,
        width: u8,
        height: u8,
        color: Color,
    },
    /// One frame of an icon animation.
    Icon {
        x: i32,
        y: i32,
        width: u8,
        height: u8,
        frame: usize,
        color: Color,
    },
}

/// Test and benchmark canvas that logs every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    color: Color,
    font: Font,
    orientation: Orientation,
}

impl RecordingCanvas {
    /// Create an empty, horizontal canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command recorded so far, in call order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the log empty. State is kept.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Current ink color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Current font.
    #[must_use]
    pub const fn font(&self) -> Font {
        self.font
    }

    /// Current orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Recorded strings, in call order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Recorded icon origins and frame indices, in call order.
    pub fn icons(&self) -> impl Iterator<Item = (i32, i32, usize)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Icon { x, y, frame, .. } => Some((*x, *y, *frame)),
            _ => None,
        })
    }

    /// Advance width of every glyph in `font`.
    #[must_use]
    pub const fn advance(font: Font) -> u32 {
        match font {
            Font::Primary => 6,
            Font::Secondary => 5,
            Font::BatteryPercent => 4,
        }
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> u32 {
        self.orientation.size().0
    }

    fn height(&self) -> u32 {
        self.orientation.size().1
    }

    fn clear(&mut self) {
        self.color = Color::Black;
        self.push(DrawCommand::Clear);
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.push(DrawCommand::Orientation(orientation));
    }

    fn draw_dot(&mut self, x: i32, y: i32) {
        let color = self.color;
        self.push(DrawCommand::Dot { x, y, color });
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let color = self.color;
        self.push(DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            color,
        });
    }

    fn draw_box(&mut self, x: i32, y: i32, width: u32, height: u32) {
        let color = self.color;
        self.push(DrawCommand::Box {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn draw_frame(&mut self, x: i32, y: i32, width: u32, height: u32) {
        let color = self.color;
        self.push(DrawCommand::Frame {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn draw_rbox(&mut self, x: i32, y: i32, width: u32, height: u32, radius: u32) {
        let color = self.color;
        self.push(DrawCommand::RoundedBox {
            x,
            y,
            width,
            height,
            radius,
            color,
        });
    }

    fn draw_rframe(&mut self, x: i32, y: i32, width: u32, height: u32, radius: u32) {
        let color = self.color;
        self.push(DrawCommand::RoundedFrame {
            x,
            y,
            width,
            height,
            radius,
            color,
        });
    }

    fn draw_str(&mut self, x: i32, y: i32, text: &str) {
        let (font, color) = (self.font, self.color);
        self.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            font,
            color,
            align: None,
        });
    }

    fn draw_str_aligned(&mut self, x: i32, y: i32, horizontal: Align, vertical: Align, text: &str) {
        let (font, color) = (self.font, self.color);
        self.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            font,
            color,
            align: Some((horizontal, vertical)),
        });
    }

    fn draw_bitmap(&mut self, x: i32, y: i32, width: u8, height: u8, _data: &[u8]) {
        let color = self.color;
        self.push(DrawCommand::Bitmap {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn glyph_width(&self, _ch: char) -> u32 {
        Self::advance(self.font)
    }

    fn draw_icon_animation(&mut self, x: i32, y: i32, animation: &IconAnimation) {
        let color = self.color;
        self.push(DrawCommand::Icon {
            x,
            y,
            width: animation.width(),
            height: animation.height(),
            frame: animation.frame_index(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lcdmenu_core::PLUGINS_14;

    #[test]
    fn state_is_captured_per_command() {
        let mut canvas = RecordingCanvas::new();
        canvas.set_font(Font::Primary);
        canvas.set_color(Color::White);
        canvas.draw_str(1, 2, "hi");
        assert_eq!(
            canvas.commands(),
            &[DrawCommand::Text {
                x: 1,
                y: 2,
                text: "hi".into(),
                font: Font::Primary,
                color: Color::White,
                align: None,
            }]
        );
    }

    #[test]
    fn string_width_uses_font_advance() {
        let mut canvas = RecordingCanvas::new();
        assert_eq!(canvas.string_width("abc"), 15);
        canvas.set_font(Font::Primary);
        assert_eq!(canvas.string_width("abc"), 18);
        canvas.set_font(Font::BatteryPercent);
        assert_eq!(canvas.string_width("abc"), 12);
    }

    #[test]
    fn orientation_swaps_dimensions() {
        let mut canvas = RecordingCanvas::new();
        assert_eq!((canvas.width(), canvas.height()), (128, 64));
        canvas.set_orientation(Orientation::Vertical);
        assert_eq!((canvas.width(), canvas.height()), (64, 128));
    }

    #[test]
    fn icons_record_current_frame() {
        let mut canvas = RecordingCanvas::new();
        let mut anim = IconAnimation::new(&PLUGINS_14);
        anim.start();
        anim.tick(std::time::Duration::from_millis(340));
        canvas.draw_icon_animation(5, 6, &anim);
        assert_eq!(canvas.icons().collect::<Vec<_>>(), [(5, 6, 1)]);
    }

    #[test]
    fn clear_resets_color_and_take_empties_log() {
        let mut canvas = RecordingCanvas::new();
        canvas.set_color(Color::Xor);
        canvas.clear();
        assert_eq!(canvas.color(), Color::Black);
        assert_eq!(canvas.take_commands(), vec![DrawCommand::Clear]);
        assert!(canvas.commands().is_empty());
    }
}
