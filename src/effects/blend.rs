use crate::foundation::core::BlendMode;
use crate::foundation::error::{TryonError, TryonResult};
use crate::foundation::math::{mul_div255_u8, opacity_u16};

pub type PremulRgba8 = [u8; 4];

/// Source-over with an extra opacity applied to `src`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let op = opacity_u16(opacity);
    if op == 0 || src[3] == 0 {
        return dst;
    }

    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Separable multiply blend composited source-over, premultiplied:
/// `co = cs*cb + cs*(1 - ab) + cb*(1 - as)`, `ao = as + ab*(1 - as)`.
pub fn multiply(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let op = opacity_u16(opacity);
    if op == 0 || src[3] == 0 {
        return dst;
    }

    let s = [
        mul_div255_u8(u16::from(src[0]), op),
        mul_div255_u8(u16::from(src[1]), op),
        mul_div255_u8(u16::from(src[2]), op),
        mul_div255_u8(u16::from(src[3]), op),
    ];
    if s[3] == 0 {
        return dst;
    }

    let inv_sa = 255u16 - u16::from(s[3]);
    let inv_da = 255u16 - u16::from(dst[3]);

    let mut out = [0u8; 4];
    out[3] = s[3].saturating_add(mul_div255_u8(u16::from(dst[3]), inv_sa));
    for i in 0..3 {
        let both = u16::from(mul_div255_u8(u16::from(s[i]), u16::from(dst[i])));
        let src_only = u16::from(mul_div255_u8(u16::from(s[i]), inv_da));
        let dst_only = u16::from(mul_div255_u8(u16::from(dst[i]), inv_sa));
        out[i] = (both + src_only + dst_only).min(255) as u8;
    }
    out
}

pub fn blend(mode: BlendMode, dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    match mode {
        BlendMode::Normal => over(dst, src, opacity),
        BlendMode::Multiply => multiply(dst, src, opacity),
    }
}

pub fn blend_in_place(
    mode: BlendMode,
    dst: &mut [u8],
    src: &[u8],
    opacity: f32,
) -> TryonResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(TryonError::validation(
            "blend_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = blend(mode, [d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blend.rs"]
mod tests;
