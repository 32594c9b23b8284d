//! Voice-over synthesis adapter.
//!
//! The speech engine is an opaque external command: given text and a voice
//! identifier it writes an audio file whose duration the caller probes with
//! `ffprobe`. Any synthesis failure is fatal to the containing request.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::foundation::error::{AdreelError, AdreelResult};

/// Default neural voice used when the brief does not override it.
pub const DEFAULT_VOICE: &str = "hi-IN-MadhurNeural";

/// Contract for the external text-to-speech engine.
///
/// Implementations must tolerate being invoked once per scene and must leave
/// a probeable audio file at `dest` on success.
pub trait VoiceSynthesizer {
    /// Synthesize `text` with `voice` into an audio file at `dest`.
    fn synthesize(&self, text: &str, dest: &Path, voice: &str) -> AdreelResult<()>;
}

/// `edge-tts`-compatible command-line synthesizer.
///
/// Spawns `<program> --text <text> --voice <voice> --write-media <dest>` and
/// treats a non-zero exit or a missing output file as failure.
#[derive(Clone, Debug)]
pub struct EdgeTtsCommand {
    /// Program name or path, `edge-tts` by default.
    pub program: String,
}

impl Default for EdgeTtsCommand {
    fn default() -> Self {
        Self {
            program: "edge-tts".to_string(),
        }
    }
}

impl VoiceSynthesizer for EdgeTtsCommand {
    fn synthesize(&self, text: &str, dest: &Path, voice: &str) -> AdreelResult<()> {
        let out = Command::new(&self.program)
            .arg("--text")
            .arg(text)
            .arg("--voice")
            .arg(voice)
            .arg("--write-media")
            .arg(dest)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                AdreelError::voice(format!(
                    "failed to spawn '{}' (is it installed and on PATH?): {e}",
                    self.program
                ))
            })?;

        if !out.status.success() {
            return Err(AdreelError::voice(format!(
                "'{}' exited with status {}: {}",
                self.program,
                out.status,
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }
        if !dest.exists() {
            return Err(AdreelError::voice(format!(
                "'{}' reported success but wrote no file at '{}'",
                self.program,
                dest.display()
            )));
        }
        Ok(())
    }
}
