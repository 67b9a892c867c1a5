use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0.0), dst);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src, 1.0), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn multiply_with_white_keeps_backdrop() {
    let dst = [120, 60, 30, 255];
    assert_eq!(multiply(dst, [255, 255, 255, 255], 1.0), dst);
}

#[test]
fn multiply_with_black_is_black() {
    let dst = [120, 60, 30, 255];
    assert_eq!(multiply(dst, [0, 0, 0, 255], 1.0), [0, 0, 0, 255]);
}

#[test]
fn multiply_over_transparent_backdrop_is_source() {
    let src = [100, 110, 120, 200];
    assert_eq!(multiply([0, 0, 0, 0], src, 1.0), src);
}

#[test]
fn multiply_darkens_opaque_backdrop() {
    let dst = [200, 200, 200, 255];
    let out = multiply(dst, [128, 128, 128, 255], 0.9);
    assert!(out[0] < dst[0]);
    assert_eq!(out[3], 255);
}

#[test]
fn multiply_opacity_0_is_noop() {
    let dst = [9, 8, 7, 255];
    assert_eq!(multiply(dst, [0, 0, 0, 255], 0.0), dst);
}

#[test]
fn blend_dispatches_on_mode() {
    let dst = [200, 200, 200, 255];
    let src = [100, 100, 100, 255];
    assert_eq!(blend(BlendMode::Normal, dst, src, 1.0), src);
    assert_eq!(
        blend(BlendMode::Multiply, dst, src, 1.0),
        multiply(dst, src, 1.0)
    );
}

#[test]
fn blend_in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(blend_in_place(BlendMode::Normal, &mut dst, &[0u8; 4], 1.0).is_err());
}
