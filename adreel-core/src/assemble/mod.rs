//! Scene assembly: one storyboard scene → one timed audiovisual clip.

use std::path::{Path, PathBuf};

use crate::audio::media::probe_audio_duration;
use crate::foundation::error::{AdreelError, AdreelResult};
use crate::motion::{MotionStyle, TextAnimation};
use crate::render::frame::{FrameRGBA, FrameRenderer};
use crate::script::storyboard::Scene;
use crate::voice::VoiceSynthesizer;

/// Defensive floor applied to non-positive authored scene spans.
const MIN_NOMINAL_SECS: f64 = 1.0;

/// One assembled clip: a still, its voice-over asset and the resolved
/// duration. Owned by the compositor afterwards and discarded once merged
/// into the final timeline.
#[derive(Clone, Debug)]
pub struct SceneClip {
    /// Scene position in the storyboard (also used for scratch file names).
    pub index: usize,
    /// Rendered still frame.
    pub frame: FrameRGBA,
    /// Persisted still frame path in scratch storage.
    pub frame_path: PathBuf,
    /// Synthesized voice-over path in scratch storage.
    pub audio_path: PathBuf,
    /// Resolved clip duration in seconds (see [`resolve_clip_duration`]).
    pub duration_secs: f64,
    /// Whether the voice-over must be trimmed to `duration_secs`.
    pub trim_audio: bool,
    /// Camera/motion treatment carried from the scene.
    pub motion: MotionStyle,
    /// Text animation carried from the scene.
    pub animation: TextAnimation,
}

/// Reconcile an authored scene span against the synthesized voice-over.
///
/// A clip is never longer than its voice-over and never shorter than needed
/// to play it in full, but it may run shorter than the authored span when
/// the voice-over finishes early. No silence padding. Returns the resolved
/// duration and whether the audio needs trimming.
pub fn resolve_clip_duration(nominal_secs: f64, audio_secs: Option<f64>) -> (f64, bool) {
    match audio_secs {
        Some(audio) if audio > nominal_secs => (nominal_secs, true),
        Some(audio) => (audio, false),
        None => (nominal_secs, false),
    }
}

/// Assemble one scene into a [`SceneClip`].
///
/// Renders and persists the still, synthesizes the voice-over, probes its
/// duration and applies the reconciliation rule. Voice synthesis failure is
/// fatal and carries the scene index.
pub fn assemble_scene(
    scene: &Scene,
    index: usize,
    scratch: &Path,
    renderer: &mut FrameRenderer,
    voice: &dyn VoiceSynthesizer,
    voice_id: &str,
    footer: &str,
) -> AdreelResult<SceneClip> {
    let mut nominal = scene.span.nominal_secs();
    if nominal <= 0.0 {
        nominal = MIN_NOMINAL_SECS;
    }

    let badge = scene.badge();
    let frame = renderer.render(&scene.on_screen, footer, badge.as_deref())?;

    let frame_path = scratch.join(format!("frame_{index:02}.png"));
    image::save_buffer_with_format(
        &frame_path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| {
        AdreelError::render(format!(
            "failed to persist still for scene {index} at '{}': {e}",
            frame_path.display()
        ))
    })?;

    // The synthesizer rejects empty input; a single space keeps the call
    // valid and yields silent/near-zero audio.
    let vo_text = scene.voice_over.trim();
    let vo_text = if vo_text.is_empty() { " " } else { vo_text };
    let audio_path = scratch.join(format!("vo_{index:02}.mp3"));
    voice
        .synthesize(vo_text, &audio_path, voice_id)
        .map_err(|e| AdreelError::voice(format!("scene {index}: {e}")))?;

    let audio_secs = probe_audio_duration(&audio_path)
        .map_err(|e| AdreelError::voice(format!("scene {index}: {e}")))?;
    let (duration_secs, trim_audio) = resolve_clip_duration(nominal, audio_secs);

    tracing::debug!(
        scene = index,
        nominal,
        audio = ?audio_secs,
        resolved = duration_secs,
        trim = trim_audio,
        "assembled scene clip"
    );

    Ok(SceneClip {
        index,
        frame,
        frame_path,
        audio_path,
        duration_secs,
        trim_audio,
        motion: scene.motion,
        animation: scene.animation,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/mod.rs"]
mod tests;
