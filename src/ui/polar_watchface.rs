//! Polar clock watchface
//!
//! Minute-sweep annulus with digital time and date text layered over the
//! face center.

use chrono::Timelike;
use embedded_graphics::{
    mono_font::{iso_8859_1::FONT_10X20, MonoTextStyle},
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Alignment, Text},
};
use profont::PROFONT_24_POINT;

use super::{
    minute_ring::{MinuteRing, RingPalette},
    ColorMode, WatchFace, WatchFaceState,
};
use crate::system::time::{self, DATE_TEXT_LEN, TIME_TEXT_LEN};

const WINDOW_BACKGROUND: ColorMode = ColorMode::BLACK;
const TEXT_TONE: ColorMode = ColorMode::WHITE;

// Text baseline offsets from the face center, sized for a 144x168 face
// with the time line above the date line
const TIME_BASELINE_OFFSET: i32 = 12;
const DATE_BASELINE_OFFSET: i32 = 36;

/// Centered single-line label backed by a fixed buffer reused every tick.
pub struct Label<const N: usize> {
    str_buf: [u8; N],
    len: usize,
    position: Point,
    style: MonoTextStyle<'static, ColorMode>,
}

impl<const N: usize> Label<N> {
    fn new(position: Point, style: MonoTextStyle<'static, ColorMode>, initial: &str) -> Self {
        let mut label = Self {
            str_buf: [0; N],
            len: 0,
            position,
            style,
        };
        label.set_text(initial);
        label
    }

    fn set_text(&mut self, text: &str) {
        let len = text.len().min(N);
        self.str_buf[..len].copy_from_slice(&text.as_bytes()[..len]);
        self.len = len;
    }

    pub fn text(&self) -> &str {
        core::str::from_utf8(&self.str_buf[..self.len]).unwrap_or("")
    }

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>,
    {
        Text::with_alignment(self.text(), self.position, self.style, Alignment::Center)
            .draw(target)?;
        Ok(())
    }
}

struct TextLayers {
    time: Label<TIME_TEXT_LEN>,
    date: Label<DATE_TEXT_LEN>,
}

impl TextLayers {
    fn new(center: Point) -> Self {
        Self {
            time: Label::new(
                center + Point::new(0, TIME_BASELINE_OFFSET),
                MonoTextStyle::new(&PROFONT_24_POINT, TEXT_TONE),
                "00:00",
            ),
            date: Label::new(
                center + Point::new(0, DATE_BASELINE_OFFSET),
                MonoTextStyle::new(&FONT_10X20, TEXT_TONE),
                "00 Xxx",
            ),
        }
    }
}

/// Basic polar clock watchface
pub struct PolarWatchface {
    bounds: Rectangle,
    ring: MinuteRing<ColorMode>,
    layers: Option<TextLayers>,
    minute: u8,
}

impl PolarWatchface {
    /// Recreate the time and date labels.
    ///
    /// Any labels from an earlier call are released first, so repeated
    /// setup never duplicates display elements.
    pub fn setup_text_layers(&mut self) {
        if self.layers.take().is_some() {
            #[cfg(feature = "defmt")]
            defmt::debug!("releasing stale text layers");
        }
        self.layers = Some(TextLayers::new(self.bounds.center()));
    }

    /// Current time string
    pub fn time_text(&self) -> &str {
        self.layers.as_ref().map_or("", |l| l.time.text())
    }

    /// Current date string
    pub fn date_text(&self) -> &str {
        self.layers.as_ref().map_or("", |l| l.date.text())
    }
}

impl WatchFace for PolarWatchface {
    fn new(bounds: Rectangle) -> Self {
        let mut face = Self {
            bounds,
            ring: MinuteRing::new(bounds, RingPalette::default()),
            layers: None,
            minute: 0,
        };
        face.setup_text_layers();
        face
    }

    fn handle_tick(&mut self, state: WatchFaceState) {
        self.minute = state.time.minute() as u8;

        if let Some(layers) = self.layers.as_mut() {
            let mut buf = [0u8; TIME_TEXT_LEN];
            let text = time::format_time(&mut buf, state.time.time(), state.style);
            layers.time.set_text(text);

            let mut buf = [0u8; DATE_TEXT_LEN];
            let text = time::format_date(&mut buf, state.time.date());
            layers.date.set_text(text);
        }
    }

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>,
    {
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(WINDOW_BACKGROUND))
            .draw(target)?;

        self.ring.draw(self.minute, target)?;

        if let Some(layers) = &self.layers {
            layers.time.draw(target)?;
            layers.date.draw(target)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::time::ClockStyle;
    use crate::testutil::Canvas;
    use chrono::{NaiveDate, NaiveDateTime};

    const BOUNDS: Rectangle = Rectangle::new(Point::zero(), Size::new(144, 168));

    fn state(style: ClockStyle) -> WatchFaceState {
        WatchFaceState {
            time: datetime(2024, 3, 4, 13, 5),
            style,
        }
    }

    fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn tick_updates_both_text_layers() {
        let mut face = PolarWatchface::new(BOUNDS);
        face.handle_tick(state(ClockStyle::H24));
        assert_eq!(face.time_text(), "13:05");
        assert_eq!(face.date_text(), "Mar 04");

        face.handle_tick(state(ClockStyle::H12));
        assert_eq!(face.time_text(), "1:05");
    }

    #[test]
    fn setup_resets_text_to_placeholders() {
        let mut face = PolarWatchface::new(BOUNDS);
        face.handle_tick(state(ClockStyle::H24));
        face.setup_text_layers();
        assert_eq!(face.time_text(), "00:00");
        assert_eq!(face.date_text(), "00 Xxx");
    }

    #[test]
    fn repeated_setup_leaves_no_ghost_layers() {
        let mut once = PolarWatchface::new(BOUNDS);
        let mut twice = PolarWatchface::new(BOUNDS);
        twice.setup_text_layers();
        twice.setup_text_layers();

        once.handle_tick(state(ClockStyle::H24));
        twice.handle_tick(state(ClockStyle::H24));

        let mut first = Canvas::new(BOUNDS.size);
        let mut second = Canvas::new(BOUNDS.size);
        once.draw(&mut first).unwrap();
        twice.draw(&mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn draw_paints_window_ring_and_text() {
        let mut face = PolarWatchface::new(BOUNDS);
        face.handle_tick(state(ClockStyle::H24));

        let mut canvas = Canvas::new(BOUNDS.size);
        face.draw(&mut canvas).unwrap();

        let center = BOUNDS.center();
        // window background outside the face disk
        assert_eq!(canvas.get(Point::new(1, 1)), Some(ColorMode::BLACK));
        // at minute 5 the sweep runs 30..355 degrees: 3 o'clock is painted,
        // the elapsed arc near 15 degrees keeps the face tone
        assert_eq!(canvas.get(center + Point::new(62, 0)), Some(ColorMode::BLACK));
        assert_eq!(canvas.get(center + Point::new(16, -60)), Some(ColorMode::WHITE));
        // elapsed arc plus the text glyphs
        assert!(canvas.count(ColorMode::WHITE) > 100);
    }
}
