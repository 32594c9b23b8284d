use super::*;

#[test]
fn fps_rejects_zero() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn fps_frame_math() {
    let fps = Fps::AD_OUTPUT;
    assert_eq!(fps.as_f64(), 30.0);
    assert_eq!(fps.secs_to_frames_round(2.0), 60);
    assert_eq!(fps.secs_to_frames_round(0.0), 1);
}

#[test]
fn timespan_nominal() {
    assert_eq!(TimeSpan::new(2.5, 6.0).nominal_secs(), 3.5);
    assert!(TimeSpan::new(4.0, 4.0).nominal_secs() <= 0.0);
}

#[test]
fn default_canvas_is_vertical_ad() {
    let c = Canvas::default();
    assert_eq!((c.width, c.height), (1080, 1920));
}
