//! Video compositor: ordered scene clips → one continuous encoded timeline.

use std::path::Path;

use rayon::prelude::*;

use crate::assemble::SceneClip;
use crate::audio::media::{MIX_SAMPLE_RATE, decode_audio_f32_stereo};
use crate::audio::mix::{VoiceSegment, frame_to_sample, mix_segments, write_mix_to_f32le_file};
use crate::encode::sink::{AudioInputConfig, FrameIndex, FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{AdreelError, AdreelResult};
use crate::motion::apply_samples;
use crate::render::frame::FrameRGBA;

/// Compositor configuration.
#[derive(Clone, Copy, Debug)]
pub struct ComposeOpts {
    /// Output canvas; clips of other dimensions are centered onto it.
    pub canvas: Canvas,
    /// Output frame rate.
    pub fps: Fps,
    /// Frames rendered per parallel chunk before being pushed in order.
    pub chunk_size: usize,
}

impl Default for ComposeOpts {
    fn default() -> Self {
        Self {
            canvas: Canvas::VERTICAL_AD,
            fps: Fps::AD_OUTPUT,
            chunk_size: 16,
        }
    }
}

/// Summary of one compose run.
#[derive(Clone, Copy, Debug)]
pub struct ComposeStats {
    /// Total frames pushed to the sink.
    pub frames: u64,
    /// Total runtime in seconds (sum of resolved clip durations).
    pub duration_secs: f64,
    /// Number of clips concatenated.
    pub scenes: usize,
}

/// Concatenate clips in storyboard order into `sink`.
///
/// Per-clip frames are rendered in fixed-size parallel chunks and pushed in
/// strictly increasing order, so the output is identical to a sequential
/// render. The voice-over of every clip is decoded, trimmed to the clip's
/// resolved duration, laid back-to-back, mixed and fed to the sink as one
/// raw PCM file written under `scratch`.
pub fn compose(
    clips: &[SceneClip],
    scratch: &Path,
    sink: &mut dyn FrameSink,
    opts: ComposeOpts,
) -> AdreelResult<ComposeStats> {
    if clips.is_empty() {
        return Err(AdreelError::validation("no clips to compose"));
    }
    let chunk_size = opts.chunk_size.max(1);
    let (w, h) = (opts.canvas.width, opts.canvas.height);

    // Frame counts and audio placement per clip, in timeline order.
    let clip_frames: Vec<u64> = clips
        .iter()
        .map(|c| opts.fps.secs_to_frames_round(c.duration_secs))
        .collect();
    let total_frames: u64 = clip_frames.iter().sum();

    let mut segments = Vec::with_capacity(clips.len());
    let mut start_frame = 0u64;
    for (clip, &frames) in clips.iter().zip(&clip_frames) {
        let pcm = decode_audio_f32_stereo(&clip.audio_path, MIX_SAMPLE_RATE)
            .map_err(|e| AdreelError::voice(format!("scene {}: {e}", clip.index)))?;
        segments.push(VoiceSegment {
            timeline_start_sample: frame_to_sample(start_frame, opts.fps, MIX_SAMPLE_RATE),
            timeline_end_sample: frame_to_sample(start_frame + frames, opts.fps, MIX_SAMPLE_RATE),
            pcm,
        });
        start_frame += frames;
    }

    let total_samples = frame_to_sample(total_frames, opts.fps, MIX_SAMPLE_RATE);
    let mix = mix_segments(total_samples, &segments);
    let mix_path = scratch.join("voiceover_mix.f32le");
    write_mix_to_f32le_file(&mix, &mix_path)?;

    sink.begin(SinkConfig {
        width: w,
        height: h,
        fps: opts.fps,
        audio: Some(AudioInputConfig {
            path: mix_path,
            sample_rate: MIX_SAMPLE_RATE,
            channels: 2,
        }),
    })?;

    let frame_secs = opts.fps.frame_duration_secs();
    let mut global = 0u64;
    for (clip, &frames) in clips.iter().zip(&clip_frames) {
        tracing::debug!(scene = clip.index, frames, "compositing clip");
        let mut local = 0u64;
        while local < frames {
            let end = (local + chunk_size as u64).min(frames);
            let rendered: Vec<AdreelResult<FrameRGBA>> = (local..end)
                .into_par_iter()
                .map(|i| {
                    let t = i as f64 * frame_secs;
                    let motion = clip.motion.sample(t, clip.duration_secs);
                    let anim = clip.animation.sample(t);
                    let frame = apply_samples(&clip.frame, motion, anim)?;
                    Ok(fit_to_canvas(&frame, w, h))
                })
                .collect();
            for frame in rendered {
                sink.push_frame(FrameIndex(global), &frame?)?;
                global += 1;
            }
            local = end;
        }
    }

    sink.end()?;

    Ok(ComposeStats {
        frames: global,
        duration_secs: clips.iter().map(|c| c.duration_secs).sum(),
        scenes: clips.len(),
    })
}

/// Center a frame onto a `w`×`h` black canvas, cropping any overflow.
///
/// All ad clips are already canvas-sized; this keeps the concatenating join
/// correct for mixed dimensions instead of assuming implicit cropping.
fn fit_to_canvas(frame: &FrameRGBA, w: u32, h: u32) -> FrameRGBA {
    if frame.width == w && frame.height == h {
        return frame.clone();
    }

    let mut data = Vec::with_capacity((w as usize) * (h as usize) * 4);
    for _ in 0..(w as usize) * (h as usize) {
        data.extend_from_slice(&[0, 0, 0, 255]);
    }
    let off_x = (i64::from(w) - i64::from(frame.width)) / 2;
    let off_y = (i64::from(h) - i64::from(frame.height)) / 2;
    let dst_row = (w as usize) * 4;
    let src_row = (frame.width as usize) * 4;
    for sy in 0..frame.height as i64 {
        let dy = sy + off_y;
        if dy < 0 || dy >= i64::from(h) {
            continue;
        }
        for sx in 0..frame.width as i64 {
            let dx = sx + off_x;
            if dx < 0 || dx >= i64::from(w) {
                continue;
            }
            let d = (dy as usize) * dst_row + (dx as usize) * 4;
            let s = (sy as usize) * src_row + (sx as usize) * 4;
            data[d..d + 4].copy_from_slice(&frame.data[s..s + 4]);
        }
    }
    FrameRGBA {
        width: w,
        height: h,
        data,
        premultiplied: frame.premultiplied,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/mod.rs"]
mod tests;
