#![forbid(unsafe_code)]

//! Static icon assets.
//!
//! Icons are stored as XBM bitmaps: rows top to bottom, each row packed
//! into `ceil(width / 8)` bytes with the leftmost pixel in the least
//! significant bit. An icon with more than one frame is an animation played
//! at `frame_rate` frames per second.

use std::time::Duration;

/// A static, possibly animated, monochrome bitmap.
#[derive(Debug, PartialEq, Eq)]
pub struct Icon {
    /// Width in pixels.
    pub width: u8,
    /// Height in pixels.
    pub height: u8,
    /// Playback rate in frames per second. Zero means "never advance".
    pub frame_rate: u8,
    /// XBM data, one slice per frame.
    pub frames: &'static [&'static [u8]],
}

impl Icon {
    /// Number of frames; never less than one for a well-formed icon.
    #[inline]
    #[must_use]
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Bytes per bitmap row.
    #[inline]
    #[must_use]
    pub const fn row_bytes(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Time each frame stays on screen, or `None` for still icons.
    #[must_use]
    pub fn frame_period(&self) -> Option<Duration> {
        if self.frame_rate == 0 || self.frame_count() < 2 {
            return None;
        }
        Some(Duration::from_secs(1) / u32::from(self.frame_rate))
    }

    /// Whether pixel `(x, y)` of `frame` is set.
    ///
    /// Out-of-range coordinates and frames read as unset.
    #[must_use]
    pub fn pixel(&self, frame: usize, x: u8, y: u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let Some(data) = self.frames.get(frame) else {
            return false;
        };
        let index = usize::from(y) * self.row_bytes() + usize::from(x / 8);
        data.get(index)
            .is_some_and(|byte| byte & (1 << (x % 8)) != 0)
    }
}

/// Fallback menu icon: a puzzle piece that wobbles in a small square.
pub static PLUGINS_14: Icon = Icon {
    width: 14,
    height: 14,
    frame_rate: 3,
    frames: &[
        &[
            0x00, 0x00, 0x38, 0x00, 0x44, 0x00, 0xc4, 0x07, 0x06, 0x04, 0x01, 0x04, 0x01, 0x0c,
            0x06, 0x10, 0x04, 0x10, 0x04, 0x0c, 0x04, 0x04, 0xfc, 0x07, 0x00, 0x00, 0x00, 0x00,
        ],
        &[
            0x00, 0x00, 0x00, 0x00, 0x38, 0x00, 0x44, 0x00, 0xc4, 0x07, 0x06, 0x04, 0x01, 0x04,
            0x01, 0x0c, 0x06, 0x10, 0x04, 0x10, 0x04, 0x0c, 0x04, 0x04, 0xfc, 0x07, 0x00, 0x00,
        ],
        &[
            0x00, 0x00, 0x00, 0x00, 0x70, 0x00, 0x88, 0x00, 0x88, 0x0f, 0x0c, 0x08, 0x02, 0x08,
            0x02, 0x18, 0x0c, 0x20, 0x08, 0x20, 0x08, 0x18, 0x08, 0x08, 0xf8, 0x0f, 0x00, 0x00,
        ],
        &[
            0x00, 0x00, 0x70, 0x00, 0x88, 0x00, 0x88, 0x0f, 0x0c, 0x08, 0x02, 0x08, 0x02, 0x18,
            0x0c, 0x20, 0x08, 0x20, 0x08, 0x18, 0x08, 0x08, 0xf8, 0x0f, 0x00, 0x00, 0x00, 0x00,
        ],
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    static STILL: Icon = Icon {
        width: 3,
        height: 2,
        frame_rate: 10,
        frames: &[&[0b101, 0b010]],
    };

    #[test]
    fn plugins_frames_match_geometry() {
        let expected = PLUGINS_14.row_bytes() * usize::from(PLUGINS_14.height);
        assert_eq!(PLUGINS_14.row_bytes(), 2);
        for frame in PLUGINS_14.frames {
            assert_eq!(frame.len(), expected);
        }
    }

    #[test]
    fn still_icon_has_no_period() {
        assert_eq!(STILL.frame_period(), None);
        assert_eq!(
            PLUGINS_14.frame_period(),
            Some(Duration::from_secs(1) / 3)
        );
    }

    #[test]
    fn pixel_reads_lsb_first() {
        assert!(STILL.pixel(0, 0, 0));
        assert!(!STILL.pixel(0, 1, 0));
        assert!(STILL.pixel(0, 2, 0));
        assert!(STILL.pixel(0, 1, 1));
    }

    #[test]
    fn pixel_out_of_range_is_unset() {
        assert!(!STILL.pixel(0, 3, 0));
        assert!(!STILL.pixel(0, 0, 2));
        assert!(!STILL.pixel(1, 0, 0));
    }
}
