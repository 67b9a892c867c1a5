use super::*;
use crate::render::surface::DrawState;

const SIDE: u32 = 128;

fn solid(width: u32, height: u32, px: [u8; 4]) -> DecodedImage {
    DecodedImage::from_premul(width, height, px.repeat((width * height) as usize)).unwrap()
}

fn small_opts() -> CompositeOpts {
    CompositeOpts {
        canvas_side: SIDE,
        ..CompositeOpts::default()
    }
}

#[test]
fn default_opts_match_production_constants() {
    let o = CompositeOpts::default();
    assert_eq!(o.canvas_side, 1024);
    assert_eq!(o.jpeg_quality, 95);
    assert_eq!(o.product_opacity, 0.9);
    assert_eq!(o.product_blend, BlendMode::Multiply);
    assert_eq!(o.shadow_color.to_array(), [0, 0, 0, 102]);
    assert_eq!(o.shadow_blur, 20.0);
    assert!(o.lighting);
    o.validate().unwrap();
}

#[test]
fn opts_validation_rejects_bad_values() {
    let bad = [
        CompositeOpts {
            canvas_side: 0,
            ..CompositeOpts::default()
        },
        CompositeOpts {
            jpeg_quality: 0,
            ..CompositeOpts::default()
        },
        CompositeOpts {
            product_opacity: 1.5,
            ..CompositeOpts::default()
        },
        CompositeOpts {
            shadow_blur: f32::NAN,
            ..CompositeOpts::default()
        },
    ];
    for opts in bad {
        assert!(matches!(opts.validate(), Err(TryonError::Validation(_))));
    }
}

#[test]
fn oversized_shadow_blur_is_rejected() {
    let opts = CompositeOpts {
        canvas_side: 16,
        shadow_blur: 3.0e9,
        ..CompositeOpts::default()
    };
    assert!(matches!(opts.validate(), Err(TryonError::Validation(_))));

    let at_limit = CompositeOpts {
        canvas_side: 16,
        shadow_blur: MAX_SHADOW_BLUR,
        ..CompositeOpts::default()
    };
    at_limit.validate().unwrap();
}

#[test]
fn largest_shadow_blur_renders_on_small_canvas() {
    let model = solid(2, 2, [255, 255, 255, 255]);
    let product = solid(2, 2, [64, 64, 64, 255]);
    let opts = CompositeOpts {
        canvas_side: 64,
        shadow_blur: MAX_SHADOW_BLUR,
        ..CompositeOpts::default()
    };
    let s = compose_surface(&product, &model, "ayak", &opts).unwrap();
    assert_eq!((s.width(), s.height()), (64, 64));
}

#[test]
fn opts_deserialize_partial_json_with_defaults() {
    let opts: CompositeOpts = serde_json::from_str(r#"{ "canvas_side": 256 }"#).unwrap();
    assert_eq!(opts.canvas_side, 256);
    assert_eq!(opts.jpeg_quality, 95);
}

#[test]
fn surface_is_square_for_non_square_inputs() {
    let model = solid(7, 3, [255, 255, 255, 255]);
    let product = solid(1, 9, [128, 128, 128, 255]);
    let s = compose_surface(&product, &model, "lorem ipsum", &small_opts()).unwrap();
    assert_eq!((s.width(), s.height()), (SIDE, SIDE));
    assert!(s.data().chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn foot_instruction_darkens_foot_zone_only() {
    let model = solid(8, 4, [255, 255, 255, 255]);
    let product = solid(2, 2, [128, 128, 128, 255]);
    let opts = CompositeOpts {
        lighting: false,
        ..small_opts()
    };
    let s = compose_surface(&product, &model, "ayakkabıyı ayağa yerleştir", &opts).unwrap();

    // Foot rect at 128 px: (25, 87.5) .. (100, 118.75).
    let inside = s.pixel(62, 103).unwrap();
    assert!(inside[0] < 200, "{inside:?}");
    assert_eq!(s.pixel(62, 20), Some([255, 255, 255, 255]));
    assert_eq!(s.pixel(5, 5), Some([255, 255, 255, 255]));
}

#[test]
fn unmatched_instruction_uses_centered_default() {
    let model = solid(4, 4, [255, 255, 255, 255]);
    let product = solid(2, 2, [128, 128, 128, 255]);
    let opts = CompositeOpts {
        lighting: false,
        ..small_opts()
    };
    let s = compose_surface(&product, &model, "lorem ipsum", &opts).unwrap();

    // Default rect at 128 px: (37.5, 37.5) .. (87.5, 87.5).
    assert!(s.pixel(64, 64).unwrap()[0] < 200);
    assert_eq!(s.pixel(60, 110), Some([255, 255, 255, 255]));
}

#[test]
fn lighting_pass_vignettes_far_pixels() {
    let model = solid(4, 4, [255, 255, 255, 255]);
    let product = solid(2, 2, [128, 128, 128, 255]);
    let s = compose_surface(&product, &model, "ayakkabı", &small_opts()).unwrap();
    // Beyond one rect width from the foot center the last stop (black, 0.1) applies.
    assert_eq!(s.pixel(5, 5), Some([229, 229, 229, 255]));
}

#[test]
fn draw_state_does_not_leak_past_product_draw() {
    let model = solid(4, 4, [255, 255, 255, 255]);
    let product = solid(2, 2, [0, 0, 0, 255]);
    let s = compose_surface(&product, &model, "kolye", &small_opts()).unwrap();
    assert_eq!(*s.state(), DrawState::default());
}
