//! UI definitions module

use chrono::NaiveDateTime;
use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb565, primitives::Rectangle};

use crate::system::time::ClockStyle;

pub mod minute_ring;
pub mod polar_watchface;

pub use minute_ring::{MinuteRing, MinuteWedge, RingPalette};
pub use polar_watchface::PolarWatchface;

/// Color space of the target display
pub type ColorMode = Rgb565;

pub trait WatchFace {
    /// Create new watchface filling `bounds`
    fn new(bounds: Rectangle) -> Self;

    /// Update watchface with state
    fn handle_tick(&mut self, state: WatchFaceState);

    /// Paint the face onto the display
    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>;
}

/// State for the watch face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchFaceState {
    pub time: NaiveDateTime,
    pub style: ClockStyle,
}
