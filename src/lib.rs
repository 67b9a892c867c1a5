//! tryon composites a product photo onto a model photo for e-commerce listings.
//!
//! Placement is a deterministic heuristic: the free-text instruction is matched against
//! fixed keyword tables to pick a body region, each region maps to a fixed rectangle in a
//! 1024x1024 canvas, and a layered CPU raster pipeline draws the result.
//!
//! # Pipeline overview
//!
//! 1. **Classify**: `instruction -> Option<Region>` (first keyword hit in priority order)
//! 2. **Resolve**: `Option<Region> -> GeometryProfile` (default profile when nothing matched)
//! 3. **Decode**: product and model bytes decoded concurrently into premultiplied RGBA8
//! 4. **Render**: background, shadowed multiply overlay, radial lighting on a [`Surface`]
//! 5. **Encode**: JPEG at quality 95 as an [`EncodedImage`]
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: classification and placement are pure functions of the text.
//! - **Request-scoped**: every call owns its surface and buffers; nothing is shared or cached.
//! - **Premultiplied RGBA8** end-to-end until the final JPEG flatten.
#![forbid(unsafe_code)]

mod assets;
mod compositor;
mod effects;
mod encode;
mod foundation;
mod placement;
mod prompt;
mod render;

pub use assets::decode::{DecodedImage, decode_image, decode_pair};
pub use compositor::{
    CompositeOpts, CompositeRequest, MAX_SHADOW_BLUR, compose_surface, composite,
    composite_with_opts,
};
pub use effects::blend::{blend, multiply, over};
pub use effects::lighting::{ColorStop, RadialGradient, product_lighting};
pub use encode::jpeg::{DEFAULT_JPEG_QUALITY, EncodedImage, download_filename, encode_jpeg};
pub use foundation::core::{BlendMode, Canvas, Point, Rect, Rgba8Premul, Vec2};
pub use foundation::error::{TryonError, TryonResult};
pub use placement::profile::{GeometryProfile, profile_for, resolve_profile};
pub use prompt::classify::{classify, classify_style};
pub use prompt::enhance::enhance_prompt;
pub use prompt::keywords::{Region, Style, region_keywords, style_keywords};
pub use render::surface::{DrawState, DrawStateGuard, Shadow, Surface};
