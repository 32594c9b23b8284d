use super::*;
use crate::audio::media::AudioPcm;
use crate::foundation::core::Fps;

fn pcm(frames: usize, value: f32) -> AudioPcm {
    AudioPcm {
        sample_rate: 4,
        channels: 2,
        interleaved_f32: vec![value; frames * 2],
    }
}

#[test]
fn frame_to_sample_uses_rational_fps() {
    let fps = Fps::new(30_000, 1001).unwrap();
    let samples = frame_to_sample(300, fps, 48_000);
    assert!(samples > 470_000 && samples < 490_000);
}

#[test]
fn segments_are_placed_back_to_back() {
    let segments = vec![
        VoiceSegment {
            timeline_start_sample: 0,
            timeline_end_sample: 4,
            pcm: pcm(4, 0.25),
        },
        VoiceSegment {
            timeline_start_sample: 4,
            timeline_end_sample: 8,
            pcm: pcm(4, 0.5),
        },
    ];
    let out = mix_segments(8, &segments);
    assert_eq!(out.len(), 16);
    assert_eq!(out[0], 0.25);
    assert_eq!(out[7], 0.25);
    assert_eq!(out[8], 0.5);
    assert_eq!(out[15], 0.5);
}

#[test]
fn overlong_source_is_trimmed_to_its_window() {
    let segments = vec![VoiceSegment {
        timeline_start_sample: 0,
        timeline_end_sample: 2,
        pcm: pcm(100, 1.0),
    }];
    let out = mix_segments(4, &segments);
    assert_eq!(&out[0..4], &[1.0, 1.0, 1.0, 1.0]);
    // Nothing leaks past the window.
    assert_eq!(&out[4..8], &[0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn short_source_leaves_silence_in_its_window() {
    let segments = vec![VoiceSegment {
        timeline_start_sample: 0,
        timeline_end_sample: 8,
        pcm: pcm(2, 0.75),
    }];
    let out = mix_segments(8, &segments);
    assert_eq!(out[3], 0.75);
    assert_eq!(out[4], 0.0);
}

#[test]
fn mono_sources_are_duplicated_to_both_channels() {
    let segments = vec![VoiceSegment {
        timeline_start_sample: 0,
        timeline_end_sample: 2,
        pcm: AudioPcm {
            sample_rate: 4,
            channels: 1,
            interleaved_f32: vec![0.5, -0.5],
        },
    }];
    let out = mix_segments(2, &segments);
    assert_eq!(out, vec![0.5, 0.5, -0.5, -0.5]);
}

#[test]
fn mix_clamps_out_of_range_sums() {
    let segments = vec![
        VoiceSegment {
            timeline_start_sample: 0,
            timeline_end_sample: 2,
            pcm: pcm(2, 0.8),
        },
        VoiceSegment {
            timeline_start_sample: 0,
            timeline_end_sample: 2,
            pcm: pcm(2, 0.8),
        },
    ];
    let out = mix_segments(2, &segments);
    assert!(out.iter().all(|s| *s <= 1.0));
}
