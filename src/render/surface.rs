use std::ops::{Deref, DerefMut};

use crate::{
    assets::decode::DecodedImage,
    effects::{
        blend::{blend, blend_in_place},
        blur::{blur_rgba8_premul, radius_for_sigma, sigma_for_shadow_blur},
        lighting::RadialGradient,
    },
    foundation::core::{BlendMode, Canvas, Rect, Rgba8Premul, Vec2},
    foundation::error::{TryonError, TryonResult},
    foundation::math::{mul_div255_u8, opacity_u16},
};

/// Drop shadow cast by image draws.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shadow {
    pub color: Rgba8Premul,
    /// Canvas-style blur amount (twice the gaussian sigma).
    pub blur: f32,
    pub offset: Vec2,
}

impl Shadow {
    pub fn none() -> Self {
        Self {
            color: Rgba8Premul::transparent(),
            blur: 0.0,
            offset: Vec2::ZERO,
        }
    }

    /// A shadow is drawn only when it is colored and either blurred or offset.
    pub fn is_visible(&self) -> bool {
        self.color.a > 0 && (self.blur > 0.0 || self.offset != Vec2::ZERO)
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

/// Mutable drawing parameters applied to subsequent draws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawState {
    pub global_alpha: f32,
    pub blend: BlendMode,
    pub shadow: Shadow,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            global_alpha: 1.0,
            blend: BlendMode::Normal,
            shadow: Shadow::none(),
        }
    }
}

/// Exclusively owned premultiplied RGBA8 drawing target.
pub struct Surface {
    canvas: Canvas,
    data: Vec<u8>,
    state: DrawState,
    saved: Vec<DrawState>,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("canvas", &self.canvas)
            .field("state", &self.state)
            .field("saved_depth", &self.saved.len())
            .finish()
    }
}

impl Surface {
    /// Allocate a fully transparent surface.
    pub fn new(canvas: Canvas) -> TryonResult<Self> {
        let canvas = Canvas::new(canvas.width, canvas.height)?;
        let len = canvas.rgba8_len()?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|e| TryonError::render(format!("allocate {len} byte surface: {e}")))?;
        data.resize(len, 0);
        Ok(Self {
            canvas,
            data,
            state: DrawState::default(),
            saved: Vec::new(),
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    /// Premultiplied RGBA8 pixels, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        let idx = self.index(x, y);
        let px = &self.data[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn state(&self) -> &DrawState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DrawState {
        &mut self.state
    }

    /// Push the current draw state; it is restored when the returned guard drops,
    /// including during unwinding.
    pub fn save(&mut self) -> DrawStateGuard<'_> {
        self.saved.push(self.state);
        DrawStateGuard { surface: self }
    }

    /// Draw `img` stretched into `dst` using the current draw state.
    pub fn draw_image(&mut self, img: &DecodedImage, dst: Rect) -> TryonResult<()> {
        validate_rect(dst)?;
        if dst.width() <= 0.0 || dst.height() <= 0.0 {
            return Ok(());
        }

        let state = self.state;
        if state.shadow.is_visible() {
            self.draw_shadow(img, dst, &state)?;
        }

        let Some((x0, y0, x1, y1)) = self.pixel_bounds(dst) else {
            return Ok(());
        };
        for y in y0..y1 {
            for x in x0..x1 {
                let Some(src) = sample_into(img, dst, x as f64 + 0.5, y as f64 + 0.5) else {
                    continue;
                };
                let idx = self.index(x, y);
                let d = &mut self.data[idx..idx + 4];
                let out = blend(state.blend, [d[0], d[1], d[2], d[3]], src, state.global_alpha);
                d.copy_from_slice(&out);
            }
        }
        Ok(())
    }

    /// Paint `gradient` over the whole surface with the current blend mode and opacity.
    /// Shadows do not apply to fills.
    pub fn fill_gradient(&mut self, gradient: &RadialGradient) -> TryonResult<()> {
        let layer = gradient.rasterize(self.canvas.width, self.canvas.height);
        blend_in_place(
            self.state.blend,
            &mut self.data,
            &layer,
            self.state.global_alpha,
        )
    }

    /// Opaque RGB8 pixels; translucent pixels are flattened against black.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() / 4 * 3);
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&px[..3]);
        }
        out
    }

    fn draw_shadow(&mut self, img: &DecodedImage, dst: Rect, state: &DrawState) -> TryonResult<()> {
        let shadow = state.shadow;
        let sigma = sigma_for_shadow_blur(shadow.blur);
        let radius = radius_for_sigma(sigma);
        let cast = (dst + shadow.offset).inflate(f64::from(radius), f64::from(radius));
        let Some((x0, y0, x1, y1)) = self.pixel_bounds(cast) else {
            return Ok(());
        };

        let (lw, lh) = (x1 - x0, y1 - y0);
        // Taps beyond the layer only re-read clamped edge pixels.
        let radius = radius.min(lw.max(lh));
        let mut layer = vec![0u8; (lw as usize) * (lh as usize) * 4];
        let color = shadow.color.to_array();
        let alpha = opacity_u16(state.global_alpha);
        for ly in 0..lh {
            for lx in 0..lw {
                let px = f64::from(x0 + lx) + 0.5 - shadow.offset.x;
                let py = f64::from(y0 + ly) + 0.5 - shadow.offset.y;
                let Some(src) = sample_into(img, dst, px, py) else {
                    continue;
                };
                let coverage = u16::from(mul_div255_u8(u16::from(src[3]), alpha));
                let idx = ((ly as usize) * (lw as usize) + lx as usize) * 4;
                for c in 0..4 {
                    layer[idx + c] = mul_div255_u8(u16::from(color[c]), coverage);
                }
            }
        }

        let blurred = blur_rgba8_premul(&layer, lw, lh, radius, sigma)?;
        for ly in 0..lh {
            for lx in 0..lw {
                let li = ((ly as usize) * (lw as usize) + lx as usize) * 4;
                let s = [blurred[li], blurred[li + 1], blurred[li + 2], blurred[li + 3]];
                if s[3] == 0 {
                    continue;
                }
                let idx = self.index(x0 + lx, y0 + ly);
                let d = &mut self.data[idx..idx + 4];
                let out = blend(state.blend, [d[0], d[1], d[2], d[3]], s, 1.0);
                d.copy_from_slice(&out);
            }
        }
        Ok(())
    }

    /// Integer pixel range `[x0, x1) x [y0, y1)` touched by `r`, clipped to the surface.
    fn pixel_bounds(&self, r: Rect) -> Option<(u32, u32, u32, u32)> {
        let clipped = r.intersect(self.canvas.bounds());
        if clipped.width() <= 0.0 || clipped.height() <= 0.0 {
            return None;
        }
        let x0 = clipped.x0.floor().max(0.0) as u32;
        let y0 = clipped.y0.floor().max(0.0) as u32;
        let x1 = (clipped.x1.ceil() as u32).min(self.canvas.width);
        let y1 = (clipped.y1.ceil() as u32).min(self.canvas.height);
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.canvas.width as usize) + (x as usize)) * 4
    }
}

/// RAII scope over a [`Surface`] draw state. Dereferences to the surface; dropping it
/// restores the state captured by [`Surface::save`].
pub struct DrawStateGuard<'a> {
    surface: &'a mut Surface,
}

impl Deref for DrawStateGuard<'_> {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        &*self.surface
    }
}

impl DerefMut for DrawStateGuard<'_> {
    fn deref_mut(&mut self) -> &mut Surface {
        &mut *self.surface
    }
}

impl Drop for DrawStateGuard<'_> {
    fn drop(&mut self) {
        if let Some(prev) = self.surface.saved.pop() {
            self.surface.state = prev;
        }
    }
}

fn validate_rect(r: Rect) -> TryonResult<()> {
    if [r.x0, r.y0, r.x1, r.y1].iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(TryonError::validation("draw rectangle must be finite"))
    }
}

/// Sample `img` stretched over `dst` at surface point `(px, py)`; `None` outside `dst`.
fn sample_into(img: &DecodedImage, dst: Rect, px: f64, py: f64) -> Option<[u8; 4]> {
    if px < dst.x0 || px >= dst.x1 || py < dst.y0 || py >= dst.y1 {
        return None;
    }
    let u = (px - dst.x0) / dst.width() * f64::from(img.width);
    let v = (py - dst.y0) / dst.height() * f64::from(img.height);
    Some(img.sample_bilinear(u, v))
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
