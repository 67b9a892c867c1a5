//! Layered product-on-model compositing.
//!
//! Pipeline for one request:
//!
//! 1. allocate a square surface (1024x1024 by default)
//! 2. decode product and model concurrently, failing the request if either fails
//! 3. draw the model stretched over the whole surface
//! 4. resolve the placement profile from the instruction text
//! 5. inside a saved draw-state scope: shadowed, multiply-blended product draw at 0.9 opacity
//! 6. radial lighting pass centered on the product rectangle
//! 7. JPEG encode at quality 95

use crate::{
    assets::decode::{DecodedImage, decode_pair},
    effects::lighting::product_lighting,
    encode::jpeg::{DEFAULT_JPEG_QUALITY, EncodedImage, encode_jpeg},
    foundation::core::{BlendMode, Canvas, Rgba8Premul},
    foundation::error::{TryonError, TryonResult},
    placement::profile::{GeometryProfile, profile_for},
    prompt::classify::classify,
    render::surface::{Shadow, Surface},
};

/// Upper bound for [`CompositeOpts::shadow_blur`], in 1024 px canvas units.
pub const MAX_SHADOW_BLUR: f32 = Canvas::CANONICAL_SIDE as f32;

/// Tunables for the compositing pipeline. `Default` yields the fixed production values.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CompositeOpts {
    /// Output side length in pixels. Placement profiles scale from 1024 to this size.
    pub canvas_side: u32,
    pub jpeg_quality: u8,
    pub product_opacity: f32,
    pub product_blend: BlendMode,
    pub shadow_color: Rgba8Premul,
    /// Canvas-style shadow blur at 1024 px; scaled with the canvas.
    pub shadow_blur: f32,
    pub lighting: bool,
}

impl Default for CompositeOpts {
    fn default() -> Self {
        Self {
            canvas_side: Canvas::CANONICAL_SIDE,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            product_opacity: 0.9,
            product_blend: BlendMode::Multiply,
            shadow_color: Rgba8Premul::from_rgba_f32(0, 0, 0, 0.4),
            shadow_blur: 20.0,
            lighting: true,
        }
    }
}

impl CompositeOpts {
    pub fn validate(&self) -> TryonResult<()> {
        if self.canvas_side == 0 {
            return Err(TryonError::validation("canvas_side must be > 0"));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(TryonError::validation("jpeg_quality must be in 1..=100"));
        }
        if !self.product_opacity.is_finite() || !(0.0..=1.0).contains(&self.product_opacity) {
            return Err(TryonError::validation("product_opacity must be in [0, 1]"));
        }
        if !self.shadow_blur.is_finite() || self.shadow_blur < 0.0 {
            return Err(TryonError::validation("shadow_blur must be >= 0"));
        }
        if self.shadow_blur > MAX_SHADOW_BLUR {
            return Err(TryonError::validation(format!(
                "shadow_blur must be <= {MAX_SHADOW_BLUR}"
            )));
        }
        Ok(())
    }

    fn scale(&self) -> f64 {
        f64::from(self.canvas_side) / f64::from(Canvas::CANONICAL_SIDE)
    }
}

/// One compositing request: two encoded image sources and a placement instruction.
#[derive(Clone, Copy, Debug)]
pub struct CompositeRequest<'a> {
    pub product_image: &'a [u8],
    pub model_image: &'a [u8],
    pub instruction: &'a str,
}

/// Composite with the fixed production settings.
pub fn composite(
    product_image: &[u8],
    model_image: &[u8],
    instruction: &str,
) -> TryonResult<EncodedImage> {
    composite_with_opts(
        &CompositeRequest {
            product_image,
            model_image,
            instruction,
        },
        &CompositeOpts::default(),
    )
}

#[tracing::instrument(skip_all, fields(instruction = %req.instruction, side = opts.canvas_side))]
pub fn composite_with_opts(
    req: &CompositeRequest<'_>,
    opts: &CompositeOpts,
) -> TryonResult<EncodedImage> {
    opts.validate()?;

    let mut surface = Surface::new(Canvas::new(opts.canvas_side, opts.canvas_side)?)?;
    let (product, model) = decode_pair(req.product_image, req.model_image)?;
    render_layers(&mut surface, &product, &model, req.instruction, opts)?;

    let encoded = encode_jpeg(&surface, opts.jpeg_quality)?;
    tracing::info!(
        bytes = encoded.len(),
        width = encoded.width,
        height = encoded.height,
        "composite encoded"
    );
    Ok(encoded)
}

/// Render the composite for already decoded images and return the raw surface.
pub fn compose_surface(
    product: &DecodedImage,
    model: &DecodedImage,
    instruction: &str,
    opts: &CompositeOpts,
) -> TryonResult<Surface> {
    opts.validate()?;
    let mut surface = Surface::new(Canvas::new(opts.canvas_side, opts.canvas_side)?)?;
    render_layers(&mut surface, product, model, instruction, opts)?;
    Ok(surface)
}

fn render_layers(
    surface: &mut Surface,
    product: &DecodedImage,
    model: &DecodedImage,
    instruction: &str,
    opts: &CompositeOpts,
) -> TryonResult<()> {
    let background = surface.canvas().bounds();
    surface.draw_image(model, background)?;

    let region = classify(instruction);
    let profile = profile_for(region).scaled_to(opts.canvas_side);
    tracing::debug!(
        region = region.map(|r| r.as_str()).unwrap_or("default"),
        ?profile,
        "resolved placement"
    );

    draw_product(surface, product, &profile, opts)?;

    if opts.lighting {
        let gradient = product_lighting(profile.rect())?;
        surface.fill_gradient(&gradient)?;
    }
    Ok(())
}

fn draw_product(
    surface: &mut Surface,
    product: &DecodedImage,
    profile: &GeometryProfile,
    opts: &CompositeOpts,
) -> TryonResult<()> {
    let mut scoped = surface.save();
    let state = scoped.state_mut();
    state.shadow = Shadow {
        color: opts.shadow_color,
        blur: opts.shadow_blur * opts.scale() as f32,
        offset: profile.shadow_offset(),
    };
    state.blend = opts.product_blend;
    state.global_alpha = opts.product_opacity;
    scoped.draw_image(product, profile.rect())
}

#[cfg(test)]
#[path = "../tests/unit/compositor.rs"]
mod tests;
