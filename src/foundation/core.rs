use crate::foundation::error::{TryonError, TryonResult};

pub use kurbo::{Point, Rect, Vec2};

/// Pixel dimensions of a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// Side length of the canonical placement space.
    pub const CANONICAL_SIDE: u32 = 1024;

    pub fn new(width: u32, height: u32) -> TryonResult<Self> {
        if width == 0 || height == 0 {
            return Err(TryonError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    pub fn canonical() -> Self {
        Self {
            width: Self::CANONICAL_SIDE,
            height: Self::CANONICAL_SIDE,
        }
    }

    /// Byte length of an RGBA8 buffer covering this canvas.
    pub fn rgba8_len(self) -> TryonResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| TryonError::render("surface buffer size overflow"))
    }

    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Straight color with a fractional alpha, as in CSS `rgba(r,g,b,alpha)`.
    pub fn from_rgba_f32(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::from_straight_rgba(r, g, b, a)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Pixel-combination rule applied when drawing onto a surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Standard "source over destination" (premultiplied alpha).
    #[default]
    Normal,
    /// Separable multiply: darkens the backdrop proportionally to the source.
    Multiply,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
