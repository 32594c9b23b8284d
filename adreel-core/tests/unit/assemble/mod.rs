use super::*;

#[test]
fn long_voice_over_is_trimmed_to_the_authored_span() {
    let (duration, trim) = resolve_clip_duration(4.0, Some(6.0));
    assert_eq!(duration, 4.0);
    assert!(trim);
}

#[test]
fn short_voice_over_shortens_the_clip() {
    // Deliberate tradeoff: the clip runs shorter than the authored span, no
    // silence padding.
    let (duration, trim) = resolve_clip_duration(4.0, Some(2.0));
    assert_eq!(duration, 2.0);
    assert!(!trim);
}

#[test]
fn missing_audio_duration_falls_back_to_nominal() {
    let (duration, trim) = resolve_clip_duration(3.5, None);
    assert_eq!(duration, 3.5);
    assert!(!trim);
}

#[test]
fn exact_fit_keeps_audio_duration() {
    let (duration, trim) = resolve_clip_duration(4.0, Some(4.0));
    assert_eq!(duration, 4.0);
    assert!(!trim);
}
