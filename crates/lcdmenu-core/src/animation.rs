#![forbid(unsafe_code)]

//! Icon animation playback.
//!
//! An [`IconAnimation`] is the stateful, startable/stoppable player for one
//! [`Icon`]. It is clock-agnostic: whoever owns it decides how often to
//! call [`IconAnimation::tick`] and with what elapsed time, which keeps
//! playback deterministic under test.
//!
//! Stopping freezes the current frame rather than rewinding, so a stopped
//! icon keeps showing wherever it paused.

use std::time::Duration;

use crate::assets::Icon;

/// Player state for one animated icon.
#[derive(Debug, Clone)]
pub struct IconAnimation {
    icon: &'static Icon,
    frame: usize,
    /// Time accumulated toward the next frame change.
    pending: Duration,
    running: bool,
}

impl IconAnimation {
    /// Create a stopped animation showing the first frame.
    #[must_use]
    pub const fn new(icon: &'static Icon) -> Self {
        Self {
            icon,
            frame: 0,
            pending: Duration::ZERO,
            running: false,
        }
    }

    /// The icon being played.
    #[inline]
    #[must_use]
    pub const fn icon(&self) -> &'static Icon {
        self.icon
    }

    /// Width of the underlying icon.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.icon.width
    }

    /// Height of the underlying icon.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u8 {
        self.icon.height
    }

    /// Begin advancing frames on subsequent ticks. Idempotent.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop advancing frames, keeping the current one. Idempotent.
    pub fn stop(&mut self) {
        self.running = false;
        self.pending = Duration::ZERO;
    }

    /// Whether the animation is currently playing.
    #[inline]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Index of the frame currently shown.
    #[inline]
    #[must_use]
    pub const fn frame_index(&self) -> usize {
        self.frame
    }

    /// Bitmap of the frame currently shown.
    #[must_use]
    pub fn frame(&self) -> &'static [u8] {
        self.icon.frames.get(self.frame).copied().unwrap_or(&[])
    }

    /// Whether pixel `(x, y)` of the current frame is set.
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: u8, y: u8) -> bool {
        self.icon.pixel(self.frame, x, y)
    }

    /// Advance playback by `dt`.
    ///
    /// Does nothing while stopped or for still icons. Large steps may skip
    /// several frames; the remainder carries over to the next tick.
    pub fn tick(&mut self, dt: Duration) {
        if !self.running {
            return;
        }
        let Some(period) = self.icon.frame_period() else {
            return;
        };
        self.pending = self.pending.saturating_add(dt);
        let steps = self.pending.as_nanos() / period.as_nanos();
        if steps == 0 {
            return;
        }
        let count = self.icon.frame_count();
        // `steps % count` keeps the arithmetic in usize even for huge dt.
        let advance = (steps % count as u128) as usize;
        self.frame = (self.frame + advance) % count;
        let consumed = period.as_nanos() * steps;
        self.pending = Duration::from_nanos((self.pending.as_nanos() - consumed) as u64);
    }
}
