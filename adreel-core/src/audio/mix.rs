//! Timeline voice-over mixing onto the continuous audio track.

use std::path::Path;

use crate::audio::media::AudioPcm;
use crate::foundation::core::Fps;
use crate::foundation::error::{AdreelError, AdreelResult};

/// One voice-over placed on the output timeline in sample space.
///
/// Segments produced by the compositor are back-to-back and never overlap;
/// the mixer still sums defensively so overlapping inputs clamp instead of
/// wrapping.
#[derive(Clone, Debug)]
pub struct VoiceSegment {
    /// First output sample frame covered by this segment.
    pub timeline_start_sample: u64,
    /// One past the last output sample frame. Trimming a too-long voice-over
    /// to its clip duration happens here: source frames beyond this window
    /// are never read.
    pub timeline_end_sample: u64,
    /// Decoded stereo PCM at the mix sample rate.
    pub pcm: AudioPcm,
}

/// Mix all segments into one interleaved stereo buffer of `total_samples`
/// frames.
pub fn mix_segments(total_samples: u64, segments: &[VoiceSegment]) -> Vec<f32> {
    let mut out = vec![0.0f32; (total_samples as usize) * 2];

    for seg in segments {
        let window = seg
            .timeline_end_sample
            .saturating_sub(seg.timeline_start_sample);
        let available = seg.pcm.frames() as u64;
        let copy = window.min(available);

        for i in 0..copy {
            let dst_frame = seg.timeline_start_sample + i;
            if dst_frame >= total_samples {
                break;
            }
            let dst = (dst_frame as usize) * 2;
            let src = (i as usize) * usize::from(seg.pcm.channels);
            let (l, r) = if seg.pcm.channels == 1 {
                let v = seg.pcm.interleaved_f32[src];
                (v, v)
            } else {
                (
                    seg.pcm.interleaved_f32[src],
                    seg.pcm.interleaved_f32[src + 1],
                )
            };
            out[dst] += l;
            out[dst + 1] += r;
        }
    }

    for s in &mut out {
        *s = s.clamp(-1.0, 1.0);
    }
    out
}

/// Write interleaved `f32` PCM samples to a raw little-endian `.f32le` file.
pub fn write_mix_to_f32le_file(samples_interleaved: &[f32], out_path: &Path) -> AdreelResult<()> {
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            AdreelError::encode(format!(
                "failed to create audio mix output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }

    let mut bytes = Vec::<u8>::with_capacity(samples_interleaved.len() * 4);
    for &sample in samples_interleaved {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    std::fs::write(out_path, bytes).map_err(|e| {
        AdreelError::encode(format!(
            "failed to write mixed audio file '{}': {e}",
            out_path.display()
        ))
    })
}

/// Convert a frame delta to the nearest sample index at `sample_rate`.
pub fn frame_to_sample(frame_delta: u64, fps: Fps, sample_rate: u32) -> u64 {
    let num = u128::from(frame_delta) * u128::from(sample_rate) * u128::from(fps.den);
    let den = u128::from(fps.num);
    ((num + (den / 2)) / den) as u64
}

#[cfg(test)]
#[path = "../../tests/unit/audio/mix.rs"]
mod tests;
