#![forbid(unsafe_code)]

//! Half-block rendering of the 128x64 framebuffer.
//!
//! Each terminal cell shows two vertically stacked pixels, so the display
//! fits in 128 columns by 32 rows.

use lcdmenu::Framebuffer;

/// Render `fb` as rows of half-block characters, one string per cell row.
#[must_use]
pub fn half_block_rows(fb: &Framebuffer) -> Vec<String> {
    (0..fb.height())
        .step_by(2)
        .map(|y| {
            (0..fb.width())
                .map(|x| cell(fb.pixel(x, y), fb.pixel(x, y + 1)))
                .collect()
        })
        .collect()
}

fn cell(top: bool, bottom: bool) -> char {
    match (top, bottom) {
        (true, true) => '█',
        (true, false) => '▀',
        (false, true) => '▄',
        (false, false) => ' ',
    }
}
