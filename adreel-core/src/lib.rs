//! Adreel turns a short structured brief into a vertical short-form ad video.
//!
//! The pipeline is synchronous and deterministic end to end except for the
//! two external tools it shells out to (the text-to-speech command and
//! `ffmpeg`):
//!
//! 1. **Script**: a [`Brief`] is expanded into a [`Storyboard`]: three
//!    hooks, one chosen deterministically, and exactly five timed scenes
//!    from one of two duration templates.
//! 2. **Render**: each scene becomes a 1080×1920 still (gradient, wrapped
//!    title, footer, optional badge chip).
//! 3. **Assemble**: the scene's voice-over is synthesized and its duration
//!    reconciled against the authored span.
//! 4. **Compose**: clips are animated per frame (zoom/jitter/text motion),
//!    concatenated with their voice-overs and encoded to MP4 at 30 fps.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Scene assembly and voice-over reconciliation.
pub mod assemble;
/// Audio decoding, probing and timeline mixing.
pub mod audio;
/// Clip concatenation and frame scheduling.
pub mod compose;
/// Encoding sinks (ffmpeg MP4, in-memory).
pub mod encode;
/// Motion styles, text animations and frame-space operators.
pub mod motion;
/// Per-request orchestration.
pub mod pipeline;
/// Still-frame rendering.
pub mod render;
/// Brief, localization and storyboard generation.
pub mod script;
/// Voice-over synthesis adapter.
pub mod voice;

pub use crate::foundation::core::{Canvas, Fps, Rgba8, TimeSpan};
pub use crate::foundation::error::{AdreelError, AdreelResult};

pub use crate::assemble::{SceneClip, assemble_scene, resolve_clip_duration};
pub use crate::compose::{ComposeOpts, ComposeStats, compose};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
pub use crate::encode::sink::{AudioInputConfig, FrameIndex, FrameSink, InMemorySink, SinkConfig};
pub use crate::motion::{MotionStyle, TextAnimation};
pub use crate::pipeline::{PipelineOpts, RenderReceipt, new_job_id, render_ad};
pub use crate::render::frame::{FrameRGBA, FrameRenderer};
pub use crate::script::brief::Brief;
pub use crate::script::locale::Language;
pub use crate::script::storyboard::{Hook, HookId, Scene, Storyboard, generate};
pub use crate::voice::{DEFAULT_VOICE, EdgeTtsCommand, VoiceSynthesizer};
