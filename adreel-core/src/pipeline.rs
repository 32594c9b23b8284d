//! Per-request orchestration: brief → storyboard → clips → encoded MP4.

use std::path::{Path, PathBuf};

use crate::assemble::{SceneClip, assemble_scene};
use crate::compose::{ComposeOpts, ComposeStats, compose};
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{AdreelError, AdreelResult};
use crate::render::frame::FrameRenderer;
use crate::script::brief::Brief;
use crate::script::storyboard::generate;
use crate::voice::{DEFAULT_VOICE, VoiceSynthesizer};

/// Footer line rendered near the bottom of every frame.
pub const DEFAULT_FOOTER: &str = "Swipe up / Learn more";

/// Pipeline configuration, constructed at the edge (CLI/HTTP layer) and
/// passed down explicitly.
#[derive(Clone, Debug)]
pub struct PipelineOpts {
    /// Output canvas dimensions.
    pub canvas: Canvas,
    /// Output frame rate.
    pub fps: Fps,
    /// Footer text rendered on every frame.
    pub footer: String,
    /// Voice identifier handed to the synthesizer.
    pub voice: String,
    /// Frames rendered per parallel chunk in the compositor.
    pub chunk_size: usize,
    /// Directory for per-job scratch directories; system temp when `None`.
    pub scratch_root: Option<PathBuf>,
}

impl Default for PipelineOpts {
    fn default() -> Self {
        Self {
            canvas: Canvas::VERTICAL_AD,
            fps: Fps::AD_OUTPUT,
            footer: DEFAULT_FOOTER.to_string(),
            voice: DEFAULT_VOICE.to_string(),
            chunk_size: 16,
            scratch_root: None,
        }
    }
}

/// Summary of one finished render, surfaced to the request layer.
#[derive(Clone, Debug, serde::Serialize)]
pub struct RenderReceipt {
    /// Job identifier.
    pub job_id: String,
    /// Path of the encoded video.
    pub video_path: PathBuf,
    /// Total runtime in seconds (sum of resolved clip durations).
    pub duration_secs: f64,
    /// Number of scenes rendered.
    pub scenes: usize,
}

/// Generate a collision-resistant short job identifier.
pub fn new_job_id() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    id[..8].to_string()
}

/// Run the full pipeline for one brief, writing the video to `out_path`.
///
/// The storyboard is derived synchronously; each scene is assembled in
/// order (voice synthesis is the only suspension point); clips are then
/// concatenated and encoded. The encode goes to a temporary sibling path
/// and is renamed into place on success, so no complete-looking partial
/// output is ever observable. Scratch files live in a per-job temporary
/// directory that is removed on every exit path.
#[tracing::instrument(skip(brief, voice, opts), fields(brand = %brief.brand, product = %brief.product))]
pub fn render_ad(
    brief: &Brief,
    voice: &dyn VoiceSynthesizer,
    out_path: &Path,
    opts: &PipelineOpts,
) -> AdreelResult<ComposeStats> {
    let storyboard = generate(brief)?;
    tracing::info!(
        scenes = storyboard.scenes.len(),
        chosen_hook = ?storyboard.chosen_hook,
        "storyboard generated"
    );

    let scratch = match &opts.scratch_root {
        Some(root) => {
            std::fs::create_dir_all(root).map_err(|e| {
                AdreelError::validation(format!(
                    "failed to create scratch root '{}': {e}",
                    root.display()
                ))
            })?;
            tempfile::Builder::new().prefix("adreel_").tempdir_in(root)
        }
        None => tempfile::Builder::new().prefix("adreel_").tempdir(),
    }
    .map_err(|e| AdreelError::validation(format!("failed to create scratch directory: {e}")))?;

    let mut renderer = FrameRenderer::new(opts.canvas)?;
    let mut clips: Vec<SceneClip> = Vec::with_capacity(storyboard.scenes.len());
    for (index, scene) in storyboard.scenes.iter().enumerate() {
        clips.push(assemble_scene(
            scene,
            index,
            scratch.path(),
            &mut renderer,
            voice,
            &opts.voice,
            &opts.footer,
        )?);
    }

    let part_path = out_path.with_extension("mp4.part");
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&part_path));
    let stats = compose(
        &clips,
        scratch.path(),
        &mut sink,
        ComposeOpts {
            canvas: opts.canvas,
            fps: opts.fps,
            chunk_size: opts.chunk_size,
        },
    )?;

    std::fs::rename(&part_path, out_path).map_err(|e| {
        AdreelError::encode(format!(
            "failed to move '{}' into place at '{}': {e}",
            part_path.display(),
            out_path.display()
        ))
    })?;

    tracing::info!(
        frames = stats.frames,
        duration_secs = stats.duration_secs,
        out = %out_path.display(),
        "ad video encoded"
    );
    Ok(stats)
}
