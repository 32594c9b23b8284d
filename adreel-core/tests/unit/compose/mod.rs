use super::*;
use crate::assemble::SceneClip;
use crate::audio::media::is_ffmpeg_on_path;
use crate::audio::mix::frame_to_sample;
use crate::encode::sink::InMemorySink;
use crate::motion::{MotionStyle, TextAnimation};

fn solid_clip(index: usize, duration_secs: f64, dir: &std::path::Path) -> SceneClip {
    let (w, h) = (8u32, 8u32);
    let mut data = Vec::new();
    for _ in 0..(w * h) {
        data.extend_from_slice(&[40, 80, 120, 255]);
    }

    // A short real WAV so the compositor's ffmpeg decode has input.
    let audio_path = dir.join(format!("vo_{index:02}.wav"));
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16_000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&audio_path, spec).unwrap();
    for i in 0..3200 {
        let t = i as f32 / 16_000.0;
        writer
            .write_sample(((t * 440.0 * std::f32::consts::TAU).sin() * 8000.0) as i16)
            .unwrap();
    }
    writer.finalize().unwrap();

    SceneClip {
        index,
        frame: FrameRGBA {
            width: w,
            height: h,
            data,
            premultiplied: true,
        },
        frame_path: dir.join(format!("frame_{index:02}.png")),
        audio_path,
        duration_secs,
        trim_audio: false,
        motion: MotionStyle::Steady,
        animation: TextAnimation::PopIn,
    }
}

#[test]
fn compose_rejects_empty_clip_list() {
    let scratch = tempfile::tempdir().unwrap();
    let mut sink = InMemorySink::new();
    assert!(compose(&[], scratch.path(), &mut sink, ComposeOpts::default()).is_err());
}

#[test]
fn compose_pushes_ordered_frames_for_all_clips() {
    if !is_ffmpeg_on_path() {
        eprintln!("skipping: ffmpeg not on PATH");
        return;
    }
    let scratch = tempfile::tempdir().unwrap();
    let clips = vec![
        solid_clip(0, 1.0, scratch.path()),
        solid_clip(1, 0.5, scratch.path()),
    ];

    let opts = ComposeOpts {
        canvas: Canvas {
            width: 8,
            height: 8,
        },
        fps: Fps::new(4, 1).unwrap(),
        chunk_size: 3,
    };
    let mut sink = InMemorySink::new();
    let stats = compose(&clips, scratch.path(), &mut sink, opts).unwrap();

    // round(1.0*4) + round(0.5*4) frames, in strictly increasing order.
    assert_eq!(stats.frames, 6);
    assert_eq!(sink.frames().len(), 6);
    for (i, (idx, frame)) in sink.frames().iter().enumerate() {
        assert_eq!(idx.0, i as u64);
        assert_eq!((frame.width, frame.height), (8, 8));
    }
    assert!((stats.duration_secs - 1.5).abs() < 1e-9);

    // The voice-over mix was written and sized to the whole timeline.
    let cfg = sink.config().unwrap();
    let audio = cfg.audio.unwrap();
    let bytes = std::fs::metadata(&audio.path).unwrap().len();
    let expected_samples = frame_to_sample(6, opts.fps, audio.sample_rate);
    assert_eq!(bytes, expected_samples * 2 * 4);
}
