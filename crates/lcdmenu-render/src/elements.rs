#![forbid(unsafe_code)]

//! Composite drawing elements built from [`Canvas`] primitives.
//!
//! Every element is a free function generic over the canvas so the same
//! drawing code runs on the real framebuffer and on the recording canvas
//! used by tests. Elements that temporarily switch to [`Color::White`]
//! always restore [`Color::Black`] before returning.

use unicode_segmentation::UnicodeSegmentation;

use crate::canvas::{Align, Canvas, Color};

/// Marker appended to truncated labels when ellipsis is requested.
pub const ELLIPSIS: &str = "...";

/// Padding, in graphemes, inserted between the end of a scrolling label and
/// its wrap back to the start.
const SCROLL_GAP: usize = 3;

/// Outline with a one-pixel drop shadow on the right and bottom edges.
pub fn frame<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: i32, width: u32, height: u32) {
    let w = width as i32;
    let h = height as i32;
    canvas.draw_line(x + 2, y, x + w - 2, y);
    canvas.draw_line(x + 1, y + h - 1, x + w, y + h - 1);
    canvas.draw_line(x + 2, y + h, x + w - 1, y + h);

    canvas.draw_line(x, y + 2, x, y + h - 2);
    canvas.draw_line(x + w - 1, y + 1, x + w - 1, y + h - 2);
    canvas.draw_line(x + w, y + 2, x + w, y + h - 2);

    canvas.draw_dot(x + 1, y + 1);
}

/// Filled box with one-pixel rounded corners.
pub fn slightly_rounded_box<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
) {
    canvas.draw_rbox(x, y, width, height, 1);
}

/// Outline with one-pixel rounded corners.
pub fn slightly_rounded_frame<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
) {
    canvas.draw_rframe(x, y, width, height, 1);
}

/// Two-pixel-thick rounded outline over a cleared interior.
pub fn bold_rounded_frame<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
) {
    let w = width as i32;
    let h = height as i32;

    canvas.set_color(Color::White);
    canvas.draw_box(x + 2, y + 2, width.saturating_sub(3), height.saturating_sub(3));
    canvas.set_color(Color::Black);

    canvas.draw_line(x + 3, y, x + w - 3, y);
    canvas.draw_line(x + 2, y + 1, x + w - 2, y + 1);

    canvas.draw_line(x, y + 3, x, y + h - 3);
    canvas.draw_line(x + 1, y + 2, x + 1, y + h - 2);

    canvas.draw_line(x + w, y + 3, x + w, y + h - 3);
    canvas.draw_line(x + w - 1, y + 2, x + w - 1, y + h - 2);

    canvas.draw_line(x + 3, y + h, x + w - 3, y + h);
    canvas.draw_line(x + 2, y + h - 1, x + w - 2, y + h - 1);

    // Inner corner pixels.
    canvas.draw_dot(x + 2, y + 2);
    canvas.draw_dot(x + w - 2, y + 2);
    canvas.draw_dot(x + 2, y + h - 2);
    canvas.draw_dot(x + w - 2, y + h - 2);
}

/// Vertical scrollbar with its right edge at `x`, spanning `height` pixels
/// down from `y`.
///
/// The track is cleared, then dotted every other pixel; when `total` is
/// non-zero a solid thumb marks `pos`.
pub fn scrollbar_pos<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    height: u32,
    pos: usize,
    total: usize,
) {
    canvas.set_color(Color::White);
    canvas.draw_box(x - 3, y, 3, height);

    canvas.set_color(Color::Black);
    for dy in (0..height).step_by(2) {
        canvas.draw_dot(x - 2, y + dy as i32);
    }

    if let Some((offset, size)) = thumb(height, pos, total) {
        canvas.draw_box(x - 3, y + offset, 3, size);
    }
}

/// Vertical scrollbar along the right edge of the canvas.
pub fn scrollbar<C: Canvas + ?Sized>(canvas: &mut C, pos: usize, total: usize) {
    let x = canvas.width() as i32;
    let height = canvas.height();
    scrollbar_pos(canvas, x, 0, height, pos, total);
}

/// Horizontal scrollbar with its bottom edge at `y`, spanning `width`
/// pixels right from `x`.
pub fn scrollbar_horizontal<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    width: u32,
    pos: usize,
    total: usize,
) {
    canvas.set_color(Color::White);
    canvas.draw_box(x, y - 3, width, 3);

    canvas.set_color(Color::Black);
    for dx in (0..width).step_by(2) {
        canvas.draw_dot(x + dx as i32, y - 2);
    }

    if let Some((offset, size)) = thumb(width, pos, total) {
        canvas.draw_box(x + offset, y - 3, size, 3);
    }
}

/// Thumb `(offset, length)` along a track of `track` pixels.
fn thumb(track: u32, pos: usize, total: usize) -> Option<(i32, u32)> {
    if total == 0 {
        return None;
    }
    let track = track as u64;
    let total = total as u64;
    let offset = track * pos as u64 / total;
    let size = (track / total).max(1);
    Some((offset as i32, size as u32))
}

/// Draw a single text line that scrolls horizontally when it overflows.
///
/// When the text fits in `width` it is drawn as is: at baseline `(x, y)`,
/// or centered on `x` and bottom-anchored at `y` when `centered` is set.
/// Otherwise a centered line is re-anchored to its left edge, the first
/// `scroll % (overflow + 3)` graphemes are skipped, and graphemes are
/// dropped from the right until the rest fits. With `ellipsis` the visible
/// window is narrowed to make room for a trailing `...`.
#[allow(clippy::too_many_arguments)]
pub fn scrollable_text_line<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    width: u32,
    text: &str,
    scroll: usize,
    ellipsis: bool,
    centered: bool,
) {
    let mut x = x;
    let mut centered = centered;
    let mut line = text.to_string();

    if canvas.string_width(text) > width {
        if centered {
            centered = false;
            x -= (width / 2) as i32;
        }
        let limit = if ellipsis {
            width.saturating_sub(canvas.string_width(ELLIPSIS))
        } else {
            width
        };

        let graphemes: Vec<&str> = text.graphemes(true).collect();
        let fit = fitting_tail(canvas, &graphemes, limit);
        let overflow = graphemes.len() - fit;
        let skip = if overflow > 0 {
            scroll % (overflow + SCROLL_GAP)
        } else {
            0
        };

        let mut visible: Vec<&str> = graphemes.into_iter().skip(skip).collect();
        while !visible.is_empty() && canvas.string_width(&visible.concat()) > limit {
            visible.pop();
        }
        line = visible.concat();
        if ellipsis {
            line.push_str(ELLIPSIS);
        }
    }

    if centered {
        canvas.draw_str_aligned(x, y, Align::Center, Align::Bottom, &line);
    } else {
        canvas.draw_str(x, y, &line);
    }
}

/// Number of trailing graphemes whose combined width stays within `limit`.
fn fitting_tail<C: Canvas + ?Sized>(canvas: &C, graphemes: &[&str], limit: u32) -> usize {
    let mut used = 0u32;
    let mut fit = 0;
    for grapheme in graphemes.iter().rev() {
        used += canvas.string_width(grapheme);
        if used > limit {
            break;
        }
        fit += 1;
    }
    fit
}
