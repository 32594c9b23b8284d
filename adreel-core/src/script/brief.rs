//! Typed ad brief input and its validation.

use crate::foundation::error::{AdreelError, AdreelResult};

/// Inclusive bounds for the requested ad duration in seconds.
pub const DURATION_BOUNDS: (u32, u32) = (5, 60);

/// Structured input describing the ad to generate.
///
/// Default substitution happens here, at construction/deserialization time;
/// downstream consumers never re-apply defaults. A brief is immutable once
/// submitted to the pipeline.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Brief {
    /// Brand name shown on the opening frame.
    pub brand: String,
    /// Product name interpolated into hooks and scene copy.
    pub product: String,
    /// Ordered benefits; up to three are used, missing slots are backfilled.
    pub benefits: Vec<String>,
    /// Target audience. Descriptive only, never rendered.
    pub audience: String,
    /// Optional offer line prefixed to the call-to-action.
    pub offer: Option<String>,
    /// Call-to-action text.
    pub cta: String,
    /// Free-text tone, lightly pattern-matched for hook selection.
    pub tone: String,
    /// Free-text language label, resolved via [`Language::detect`].
    ///
    /// [`Language::detect`]: crate::script::locale::Language::detect
    pub language: String,
    /// Requested ad length in seconds, valid within [`DURATION_BOUNDS`].
    pub duration_sec: u32,
}

impl Default for Brief {
    fn default() -> Self {
        Self {
            brand: "Brand".to_string(),
            product: "Product".to_string(),
            benefits: Vec::new(),
            audience: "India, 18-35".to_string(),
            offer: None,
            cta: "Order Now".to_string(),
            tone: "Relatable, punchy".to_string(),
            language: "Hinglish".to_string(),
            duration_sec: 15,
        }
    }
}

impl Brief {
    /// Check the duration bounds that the outer request layer enforces.
    ///
    /// The core pipeline does not call this; it treats the brief as already
    /// validated and only coerces the defensive cases documented on the
    /// storyboard generator.
    pub fn validate(&self) -> AdreelResult<()> {
        let (lo, hi) = DURATION_BOUNDS;
        if self.duration_sec < lo || self.duration_sec > hi {
            return Err(AdreelError::validation(format!(
                "duration_sec must be within {lo}..={hi}, got {}",
                self.duration_sec
            )));
        }
        Ok(())
    }
}
