//! Application state and event dispatch
//!
//! The host event loop owns one [`App`] and feeds it events serially; each
//! handler runs to completion before the next event arrives, so nothing
//! here needs synchronization.

use chrono::NaiveDateTime;
#[cfg(feature = "defmt")]
use chrono::Timelike;
use embedded_graphics::{draw_target::DrawTarget, primitives::Rectangle};

use crate::{
    system::time::ClockStyle,
    ui::{ColorMode, PolarWatchface, WatchFace, WatchFaceState},
};

/// Events delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Minute tick carrying the current wall-clock time
    Tick(NaiveDateTime),
    /// The host asked for a repaint, e.g. after the face became visible
    RedrawRequest,
}

/// Application state, created at startup and dropped at shutdown.
pub struct App {
    face: PolarWatchface,
    style: ClockStyle,
    dirty: bool,
}

impl App {
    /// Startup handler: build the face inside `bounds` with the
    /// host-reported hour style.
    pub fn new(bounds: Rectangle, style: ClockStyle) -> Self {
        Self {
            face: PolarWatchface::new(bounds),
            style,
            dirty: true,
        }
    }

    pub fn face(&self) -> &PolarWatchface {
        &self.face
    }

    /// True if a tick arrived since the last repaint.
    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Dispatch one host event, painting onto `target` when a repaint is due.
    pub fn handle_event<D>(&mut self, event: Event, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>,
    {
        match event {
            Event::Tick(time) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("minute tick: {=u32}", time.minute());

                self.face.handle_tick(WatchFaceState {
                    time,
                    style: self.style,
                });
                self.dirty = true;
                self.redraw(target)
            }
            Event::RedrawRequest => self.redraw(target),
        }
    }

    fn redraw<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>,
    {
        self.face.draw(target)?;
        self.dirty = false;
        Ok(())
    }
}
