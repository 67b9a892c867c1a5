use rayon::prelude::*;

use crate::foundation::core::{Point, Rect, Rgba8Premul};
use crate::foundation::error::{TryonError, TryonResult};
use crate::foundation::math::lerp_u8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Position along the gradient in `[0, 1]`.
    pub offset: f32,
    pub color: Rgba8Premul,
}

/// Concentric radial gradient (inner radius 0). Colors are interpolated premultiplied and
/// pad with the end stops outside `[0, radius]`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Point,
    pub radius: f64,
    stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(center: Point, radius: f64, mut stops: Vec<ColorStop>) -> TryonResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(TryonError::validation("gradient radius must be > 0"));
        }
        if stops.is_empty() {
            return Err(TryonError::validation("gradient needs at least one stop"));
        }
        if stops
            .iter()
            .any(|s| !s.offset.is_finite() || !(0.0..=1.0).contains(&s.offset))
        {
            return Err(TryonError::validation("gradient stop offsets must be in [0, 1]"));
        }
        stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        Ok(Self {
            center,
            radius,
            stops,
        })
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn color_at(&self, p: Point) -> [u8; 4] {
        let t = (p.distance(self.center) / self.radius) as f32;
        self.color_at_offset(t)
    }

    fn color_at_offset(&self, t: f32) -> [u8; 4] {
        let first = self.stops[0];
        if t <= first.offset {
            return first.color.to_array();
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                let local = if span <= 0.0 { 1.0 } else { (t - a.offset) / span };
                let (ca, cb) = (a.color.to_array(), b.color.to_array());
                return [
                    lerp_u8(ca[0], cb[0], local),
                    lerp_u8(ca[1], cb[1], local),
                    lerp_u8(ca[2], cb[2], local),
                    lerp_u8(ca[3], cb[3], local),
                ];
            }
        }
        self.stops[self.stops.len() - 1].color.to_array()
    }

    /// Rasterize the gradient into a fresh premultiplied RGBA8 buffer.
    pub fn rasterize(&self, width: u32, height: u32) -> Vec<u8> {
        let row_len = (width as usize) * 4;
        let mut out = vec![0u8; row_len * height as usize];
        if row_len == 0 {
            return out;
        }
        out.par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| {
                for x in 0..width as usize {
                    let p = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                    row[x * 4..x * 4 + 4].copy_from_slice(&self.color_at(p));
                }
            });
        out
    }
}

/// Soft highlight centered on the product rectangle, fading to a faint vignette at a
/// distance of one rectangle width.
pub fn product_lighting(rect: Rect) -> TryonResult<RadialGradient> {
    RadialGradient::new(
        rect.center(),
        rect.width(),
        vec![
            ColorStop {
                offset: 0.0,
                color: Rgba8Premul::from_rgba_f32(255, 255, 255, 0.1),
            },
            ColorStop {
                offset: 0.5,
                color: Rgba8Premul::from_rgba_f32(255, 255, 255, 0.05),
            },
            ColorStop {
                offset: 1.0,
                color: Rgba8Premul::from_rgba_f32(0, 0, 0, 0.1),
            },
        ],
    )
}

#[cfg(test)]
#[path = "../../tests/unit/effects/lighting.rs"]
mod tests;
