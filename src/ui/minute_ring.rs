//! Minute-sweep ring indicator
//!
//! An annulus around the face center whose filled arc is the time left in
//! the current hour: one 6-degree wedge per minute, swept clockwise from
//! the current-minute position toward 12 o'clock.

use embedded_graphics::{
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle, Triangle},
};
use libm::{cosf, roundf, sinf};

use super::ColorMode;

/// Outer radius of the face disk
pub const FACE_RADIUS: u32 = 65;
/// Inner radius carved back out in the background tone
pub const INNER_RADIUS: u32 = 60;

/// Radial reach of a wedge: face radius plus a margin so wedges always
/// cover the annulus edge-to-edge
const WEDGE_REACH: i32 = 70;
/// Half-width of a wedge at full reach, ~ WEDGE_REACH * tan(6 deg)
const WEDGE_HALF_WIDTH: i32 = 7;

const DEGREES_PER_MINUTE: u16 = 6;
/// Upper bound of the sweep. 355 rather than 360: the last wedge sits at
/// 354 degrees and the sweep never wraps onto 12 o'clock.
const SWEEP_END: u16 = 355;

/// Wedge angles painted for `minute`: m*6, m*6+6, ... strictly below 355.
pub fn sweep_angles(minute: u8) -> impl Iterator<Item = u16> {
    (minute as u16 * DEGREES_PER_MINUTE..SWEEP_END).step_by(DEGREES_PER_MINUTE as usize)
}

/// One-minute wedge template, anchored at the face center.
///
/// The rest pose points at 12 o'clock. [`MinuteWedge::rotate_to`] is a pure
/// transform of the template, so repeated rotations cannot accumulate
/// drift; the result depends only on the angle requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteWedge {
    anchor: Point,
    points: [Point; 3],
}

impl MinuteWedge {
    pub fn new(anchor: Point) -> Self {
        Self {
            anchor,
            points: [
                Point::zero(),
                Point::new(-WEDGE_HALF_WIDTH, -WEDGE_REACH),
                Point::new(WEDGE_HALF_WIDTH, -WEDGE_REACH),
            ],
        }
    }

    /// The wedge rotated clockwise to `degrees` past 12 o'clock.
    pub fn rotate_to(&self, degrees: u16) -> Triangle {
        let rad = (degrees as f32).to_radians();
        let (sin, cos) = (sinf(rad), cosf(rad));

        let mut vertices = [Point::zero(); 3];
        for (vertex, p) in vertices.iter_mut().zip(self.points) {
            // Screen coordinates grow downward, so this turns clockwise
            let x = p.x as f32 * cos - p.y as f32 * sin;
            let y = p.x as f32 * sin + p.y as f32 * cos;
            *vertex = self.anchor + Point::new(roundf(x) as i32, roundf(y) as i32);
        }
        Triangle::new(vertices[0], vertices[1], vertices[2])
    }
}

/// Fill tones of the ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingPalette<C> {
    /// Empty tone of the face disk
    pub face: C,
    /// Tone of the painted wedges; the inner disk is carved in this tone
    /// as well, blending it into the window behind the ring
    pub sweep: C,
}

impl Default for RingPalette<ColorMode> {
    fn default() -> Self {
        Self {
            face: ColorMode::WHITE,
            sweep: ColorMode::BLACK,
        }
    }
}

/// Annular minute indicator.
pub struct MinuteRing<C = ColorMode> {
    center: Point,
    wedge: MinuteWedge,
    palette: RingPalette<C>,
}

impl<C> MinuteRing<C>
where
    C: PixelColor,
{
    /// Anchor the ring and its wedge template at the center of `bounds`.
    pub fn new(bounds: Rectangle, palette: RingPalette<C>) -> Self {
        let center = bounds.center();
        Self {
            center,
            wedge: MinuteWedge::new(center),
            palette,
        }
    }

    /// Paint the indicator for `minute` of the hour.
    ///
    /// Order matters: face disk, wedges, inner disk. The inner disk
    /// overwrites everything within radius 60, so only the annulus keeps
    /// the wedges.
    pub fn draw<D>(&self, minute: u8, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        self.fill_disk(FACE_RADIUS, self.palette.face, target)?;

        let style = PrimitiveStyle::with_fill(self.palette.sweep);
        for angle in sweep_angles(minute) {
            self.wedge.rotate_to(angle).into_styled(style).draw(target)?;
        }

        self.fill_disk(INNER_RADIUS, self.palette.sweep, target)
    }

    fn fill_disk<D>(&self, radius: u32, tone: C, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = C>,
    {
        Circle::with_center(self.center, radius * 2 + 1)
            .into_styled(PrimitiveStyle::with_fill(tone))
            .draw(target)
    }
}
