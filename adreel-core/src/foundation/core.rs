use crate::foundation::error::{AdreelError, AdreelResult};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// The vertical short-form ad canvas used throughout the pipeline.
    pub const VERTICAL_AD: Canvas = Canvas {
        width: 1080,
        height: 1920,
    };
}

impl Default for Canvas {
    fn default() -> Self {
        Self::VERTICAL_AD
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> AdreelResult<Self> {
        if num == 0 || den == 0 {
            return Err(AdreelError::validation("Fps num and den must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// The fixed output frame rate of the ad pipeline.
    pub const AD_OUTPUT: Fps = Fps { num: 30, den: 1 };

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Number of output frames covering `secs` seconds, rounded, at least one.
    pub fn secs_to_frames_round(self, secs: f64) -> u64 {
        ((secs * self.as_f64()).round() as u64).max(1)
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self::AD_OUTPUT
    }
}

/// Half-open scene interval `[start, end)` in storyboard seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeSpan {
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds, expected to be greater than `start`.
    pub end: f64,
}

impl TimeSpan {
    /// Create a span; the storyboard templates only produce `end > start`.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Authored length of the span in seconds. May be non-positive for
    /// malformed input; callers coerce (see the scene assembler).
    pub fn nominal_secs(self) -> f64 {
        self.end - self.start
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque color from RGB components.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
