use super::*;

fn solid_frame(w: u32, h: u32, rgba: [u8; 4]) -> FrameRGBA {
    let mut data = Vec::with_capacity((w * h * 4) as usize);
    for _ in 0..(w * h) {
        data.extend_from_slice(&rgba);
    }
    FrameRGBA {
        width: w,
        height: h,
        data,
        premultiplied: true,
    }
}

#[test]
fn motion_starts_at_identity_zoom() {
    for style in [
        MotionStyle::PunchZoom,
        MotionStyle::Shake,
        MotionStyle::ZoomShake,
        MotionStyle::Steady,
    ] {
        assert_eq!(style.sample(0.0, 4.0).scale, 1.0);
    }
}

#[test]
fn motion_zoom_rate_depends_on_style() {
    let dur = 4.0;
    let punch = MotionStyle::PunchZoom.sample(dur, dur);
    let shake = MotionStyle::Shake.sample(dur, dur);
    let steady = MotionStyle::Steady.sample(dur, dur);
    assert!((punch.scale - 1.06).abs() < 1e-9);
    assert!((shake.scale - 1.03).abs() < 1e-9);
    assert!((steady.scale - 1.04).abs() < 1e-9);
}

#[test]
fn shake_jitter_only_in_first_window() {
    let early = MotionStyle::ZoomShake.sample(0.1, 4.0);
    assert!(early.roll_x != 0 || early.roll_y != 0);

    let late = MotionStyle::ZoomShake.sample(1.0, 4.0);
    assert_eq!((late.roll_x, late.roll_y), (0, 0));

    let steady = MotionStyle::Steady.sample(0.1, 4.0);
    assert_eq!((steady.roll_x, steady.roll_y), (0, 0));
}

#[test]
fn samplers_are_pure_at_arbitrary_times() {
    // Non-monotonic sampling must not drift.
    let a = MotionStyle::Shake.sample(0.3, 2.0);
    let _ = MotionStyle::Shake.sample(1.7, 2.0);
    let b = MotionStyle::Shake.sample(0.3, 2.0);
    assert_eq!(a, b);

    let x = TextAnimation::SlideUp.sample(0.1);
    let _ = TextAnimation::SlideUp.sample(0.9);
    let y = TextAnimation::SlideUp.sample(0.1);
    assert_eq!(x, y);
}

#[test]
fn pop_in_scales_to_full_size_after_quarter_second() {
    let start = TextAnimation::PopIn.sample(0.0);
    assert!((start.scale - 0.92).abs() < 1e-9);

    let settled = TextAnimation::PopIn.sample(0.25);
    assert!((settled.scale - 1.0).abs() < 1e-9);
    let later = TextAnimation::CtaBounce.sample(3.0);
    assert!((later.scale - 1.0).abs() < 1e-9);
}

#[test]
fn slide_up_offset_decays_to_zero() {
    assert_eq!(TextAnimation::SlideUp.sample(0.0).offset_y, 40);
    assert_eq!(TextAnimation::SlideUp.sample(0.35).offset_y, 0);
    assert_eq!(TextAnimation::SlideUp.sample(2.0).offset_y, 0);
}

#[test]
fn swipe_and_type_jitter_settle() {
    assert_eq!(TextAnimation::SwipeCut.sample(0.3).offset_x, 0);
    assert_eq!(TextAnimation::SplitWipe.sample(0.3).offset_x, 0);
    assert_eq!(TextAnimation::TypeOn.sample(0.7).offset_x, 0);
    assert_eq!(TextAnimation::ZoomIn.sample(0.1), AnimSample::identity());
}

#[test]
fn zoom_frame_preserves_dimensions() {
    let frame = solid_frame(64, 96, [120, 40, 200, 255]);
    for scale in [0.92, 1.0, 1.04, 1.5] {
        let out = zoom_frame(&frame, scale).unwrap();
        assert_eq!((out.width, out.height), (64, 96));
        assert_eq!(out.data.len(), frame.data.len());
    }
}

#[test]
fn zoom_frame_rejects_nonpositive_scale() {
    let frame = solid_frame(8, 8, [1, 2, 3, 255]);
    assert!(zoom_frame(&frame, 0.0).is_err());
    assert!(zoom_frame(&frame, f64::NAN).is_err());
}

#[test]
fn roll_frame_wraps_pixels_around() {
    // 2x2 frame with distinct pixels.
    let mut frame = solid_frame(2, 2, [0, 0, 0, 255]);
    frame.data[0] = 9; // top-left red channel marker

    let rolled = roll_frame(&frame, 1, 0);
    // Top-left moved right by one; wraps back with another shift.
    assert_eq!(rolled.data[4], 9);
    let back = roll_frame(&rolled, 1, 0);
    assert_eq!(back.data[0], 9);
}

#[test]
fn offset_frame_fills_vacated_area_with_black() {
    let frame = solid_frame(4, 4, [200, 200, 200, 255]);
    let out = offset_frame(&frame, 0, 2);
    // First row is now black fill.
    assert_eq!(&out.data[0..4], &[0, 0, 0, 255]);
    // Shifted content survives below.
    let row2 = 2 * 4 * 4;
    assert_eq!(&out.data[row2..row2 + 4], &[200, 200, 200, 255]);
}
