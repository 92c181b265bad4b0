//! Test-only draw target recording painted pixels.

use core::convert::Infallible;

use embedded_graphics::{prelude::*, Pixel};

use crate::ui::ColorMode;

/// In-memory canvas; `None` marks pixels never painted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    size: Size,
    pixels: Vec<Option<ColorMode>>,
}

impl Canvas {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![None; (size.width * size.height) as usize],
        }
    }

    pub fn get(&self, point: Point) -> Option<ColorMode> {
        self.index(point).and_then(|i| self.pixels[i])
    }

    /// Number of pixels currently painted in `tone`.
    pub fn count(&self, tone: ColorMode) -> usize {
        self.pixels.iter().filter(|p| **p == Some(tone)).count()
    }

    fn index(&self, point: Point) -> Option<usize> {
        (point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.size.width
            && (point.y as u32) < self.size.height)
            .then(|| (point.y as u32 * self.size.width + point.x as u32) as usize)
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Canvas {
    type Color = ColorMode;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<ColorMode>>,
    {
        // Out-of-bounds pixels are clipped, like a real display
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.pixels[i] = Some(color);
            }
        }
        Ok(())
    }
}
