use std::sync::Arc;

use crate::foundation::error::{TryonError, TryonResult};

#[derive(Clone, Debug)]
/// Decoded raster image in premultiplied RGBA8 form.
pub struct DecodedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl DecodedImage {
    /// Wrap an already premultiplied RGBA8 buffer.
    pub fn from_premul(width: u32, height: u32, rgba8_premul: Vec<u8>) -> TryonResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| TryonError::validation("image buffer size overflow"))?;
        if width == 0 || height == 0 || rgba8_premul.len() != expected {
            return Err(TryonError::validation(
                "image buffer must be non-empty and match width*height*4",
            ));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8_premul),
        })
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = &self.rgba8_premul[idx..idx + 4];
        [px[0], px[1], px[2], px[3]]
    }

    /// Bilinear sample at source pixel coordinates (pixel centers at `i + 0.5`), clamped to
    /// the image edge.
    pub fn sample_bilinear(&self, u: f64, v: f64) -> [u8; 4] {
        let max_x = f64::from(self.width - 1);
        let max_y = f64::from(self.height - 1);
        let fx = (u - 0.5).clamp(0.0, max_x);
        let fy = (v - 0.5).clamp(0.0, max_y);

        let x0 = fx.floor() as u32;
        let y0 = fy.floor() as u32;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);
        let tx = fx - f64::from(x0);
        let ty = fy - f64::from(y0);

        let p00 = self.pixel(x0, y0);
        let p10 = self.pixel(x1, y0);
        let p01 = self.pixel(x0, y1);
        let p11 = self.pixel(x1, y1);

        let mut out = [0u8; 4];
        for c in 0..4 {
            let top = f64::from(p00[c]) * (1.0 - tx) + f64::from(p10[c]) * tx;
            let bottom = f64::from(p01[c]) * (1.0 - tx) + f64::from(p11[c]) * tx;
            out[c] = (top * (1.0 - ty) + bottom * ty).round().clamp(0.0, 255.0) as u8;
        }
        out
    }
}

/// Decode encoded image bytes (JPEG/PNG/WebP) and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> TryonResult<DecodedImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| TryonError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(TryonError::decode("decoded image has zero area"));
    }

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(DecodedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Decode the product and model sources concurrently and join on both.
///
/// Returns `(product, model)`. When both fail the model error is reported.
#[tracing::instrument(skip_all, fields(product_len = product.len(), model_len = model.len()))]
pub fn decode_pair(product: &[u8], model: &[u8]) -> TryonResult<(DecodedImage, DecodedImage)> {
    let (product_res, model_res) = rayon::join(|| decode_image(product), || decode_image(model));

    let model = model_res.map_err(|e| tag_input("model", e))?;
    let product = product_res.map_err(|e| tag_input("product", e))?;

    tracing::debug!(
        product_w = product.width,
        product_h = product.height,
        model_w = model.width,
        model_h = model.height,
        "decoded inputs"
    );
    Ok((product, model))
}

fn tag_input(input: &str, err: TryonError) -> TryonError {
    match err {
        TryonError::Decode(msg) => TryonError::decode(format!("{input} image: {msg}")),
        other => other,
    }
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
