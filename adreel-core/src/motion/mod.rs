//! Scene motion and text animation.
//!
//! Both samplers are pure functions of clip-local elapsed time, so they can
//! be evaluated at arbitrary, non-monotonic sample times without drift. The
//! frame-space operators keep the output size invariant at the canvas
//! dimensions regardless of the sampled scale.

use crate::foundation::error::{AdreelError, AdreelResult};
use crate::render::frame::FrameRGBA;
use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Camera/motion treatment of a scene, fixed at storyboard-generation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionStyle {
    /// Fast continuous zoom-in.
    PunchZoom,
    /// Slow zoom with a decaying handheld jitter.
    Shake,
    /// Fast zoom plus the handheld jitter (used by the long-form closer).
    ZoomShake,
    /// Gentle default zoom.
    Steady,
}

/// Text/frame-position animation of a scene, fixed at storyboard-generation
/// time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnimation {
    /// Fast scale-in from 0.92 over the first 0.25 s.
    PopIn,
    /// Vertical offset decaying from 40 px over 0.35 s.
    SlideUp,
    /// Small horizontal sine jitter for the first 0.6 s.
    TypeOn,
    /// Horizontal sine jitter for the first 0.25 s, then settled.
    SwipeCut,
    /// Same treatment as [`TextAnimation::SwipeCut`].
    SplitWipe,
    /// Same scale-in as [`TextAnimation::PopIn`].
    CtaBounce,
    /// Same treatment as [`TextAnimation::TypeOn`].
    Glitch,
    /// Hook-catalog tag with no frame-space effect.
    ZoomIn,
}

/// Sampled scene-motion state at one clip-local timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    /// Zoom factor, `>= 1.0`.
    pub scale: f64,
    /// Wraparound horizontal shift in pixels.
    pub roll_x: i32,
    /// Wraparound vertical shift in pixels.
    pub roll_y: i32,
}

/// Sampled text-animation state at one clip-local timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimSample {
    /// Additional scale factor, `<= 1.0`.
    pub scale: f64,
    /// Horizontal position offset in pixels.
    pub offset_x: i32,
    /// Vertical position offset in pixels.
    pub offset_y: i32,
}

impl MotionSample {
    /// The identity sample (no zoom, no jitter).
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            roll_x: 0,
            roll_y: 0,
        }
    }
}

impl AnimSample {
    /// The identity sample (no scale, no offset).
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0,
            offset_y: 0,
        }
    }
}

/// Jitter window of the shake treatments in seconds.
const SHAKE_WINDOW_SECS: f64 = 0.6;

impl MotionStyle {
    /// Sample the continuous zoom/jitter state at clip-local time `t`.
    ///
    /// The zoom grows linearly from 1.0 over the clip's resolved duration;
    /// the growth rate depends on the style. Shake styles add a wraparound
    /// pixel jitter for the first 0.6 s only.
    pub fn sample(self, t: f64, clip_duration_secs: f64) -> MotionSample {
        let dur = clip_duration_secs.max(0.001);
        let rate = match self {
            Self::PunchZoom | Self::ZoomShake => 0.06,
            Self::Shake => 0.03,
            Self::Steady => 0.04,
        };
        let scale = 1.0 + rate * (t / dur);

        let (roll_x, roll_y) = match self {
            Self::Shake | Self::ZoomShake if t < SHAKE_WINDOW_SECS => (
                (4.0 * (45.0 * t).sin()) as i32,
                (4.0 * (38.0 * t).cos()) as i32,
            ),
            _ => (0, 0),
        };

        MotionSample {
            scale,
            roll_x,
            roll_y,
        }
    }
}

impl TextAnimation {
    /// Sample the scale/offset state at clip-local time `t`.
    pub fn sample(self, t: f64) -> AnimSample {
        match self {
            Self::PopIn | Self::CtaBounce => AnimSample {
                scale: 0.92 + 0.08 * (t / 0.25).min(1.0),
                ..AnimSample::identity()
            },
            Self::SlideUp => AnimSample {
                offset_y: (40.0 * (1.0 - (t / 0.35).min(1.0))) as i32,
                ..AnimSample::identity()
            },
            Self::SwipeCut | Self::SplitWipe => AnimSample {
                offset_x: if t < 0.25 {
                    (6.0 * (35.0 * t).sin()) as i32
                } else {
                    0
                },
                ..AnimSample::identity()
            },
            Self::TypeOn | Self::Glitch => AnimSample {
                offset_x: if t < SHAKE_WINDOW_SECS {
                    (3.0 * (50.0 * t).sin()) as i32
                } else {
                    0
                },
                ..AnimSample::identity()
            },
            Self::ZoomIn => AnimSample::identity(),
        }
    }
}

fn frame_to_rgba_image(frame: &FrameRGBA) -> AdreelResult<RgbaImage> {
    RgbaImage::from_raw(frame.width, frame.height, frame.data.clone())
        .ok_or_else(|| AdreelError::render("frame byte length does not match its dimensions"))
}

fn rgba_image_to_frame(img: RgbaImage, premultiplied: bool) -> FrameRGBA {
    FrameRGBA {
        width: img.width(),
        height: img.height(),
        data: img.into_raw(),
        premultiplied,
    }
}

/// Scale a frame and restore the original dimensions.
///
/// Upscales are center-cropped back to the source size; downscales are
/// centered on a black canvas. Resampling uses Lanczos3 in both directions.
pub fn zoom_frame(frame: &FrameRGBA, scale: f64) -> AdreelResult<FrameRGBA> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(AdreelError::render(format!(
            "zoom scale must be finite and > 0, got {scale}"
        )));
    }
    if (scale - 1.0).abs() < 1e-9 {
        return Ok(frame.clone());
    }

    let (w, h) = (frame.width, frame.height);
    let img = frame_to_rgba_image(frame)?;

    if scale > 1.0 {
        let new_w = ((f64::from(w) * scale) as u32).max(w);
        let new_h = ((f64::from(h) * scale) as u32).max(h);
        let scaled = imageops::resize(&img, new_w, new_h, FilterType::Lanczos3);
        let left = (new_w - w) / 2;
        let top = (new_h - h) / 2;
        let cropped = imageops::crop_imm(&scaled, left, top, w, h).to_image();
        Ok(rgba_image_to_frame(cropped, frame.premultiplied))
    } else {
        let new_w = ((f64::from(w) * scale).round() as u32).clamp(1, w);
        let new_h = ((f64::from(h) * scale).round() as u32).clamp(1, h);
        let scaled = imageops::resize(&img, new_w, new_h, FilterType::Lanczos3);
        let mut canvas = RgbaImage::from_pixel(w, h, image::Rgba([0, 0, 0, 255]));
        let left = i64::from((w - new_w) / 2);
        let top = i64::from((h - new_h) / 2);
        imageops::replace(&mut canvas, &scaled, left, top);
        Ok(rgba_image_to_frame(canvas, frame.premultiplied))
    }
}

/// Shift a frame with wraparound, moving content down by `dy` rows and right
/// by `dx` columns.
pub fn roll_frame(frame: &FrameRGBA, dx: i32, dy: i32) -> FrameRGBA {
    let (w, h) = (frame.width as i64, frame.height as i64);
    if w == 0 || h == 0 || (dx == 0 && dy == 0) {
        return frame.clone();
    }

    let row_bytes = (w as usize) * 4;
    let mut out = vec![0u8; frame.data.len()];
    for y in 0..h {
        let src_y = (y - i64::from(dy)).rem_euclid(h) as usize;
        for x in 0..w {
            let src_x = (x - i64::from(dx)).rem_euclid(w) as usize;
            let dst = (y as usize) * row_bytes + (x as usize) * 4;
            let src = src_y * row_bytes + src_x * 4;
            out[dst..dst + 4].copy_from_slice(&frame.data[src..src + 4]);
        }
    }
    FrameRGBA {
        width: frame.width,
        height: frame.height,
        data: out,
        premultiplied: frame.premultiplied,
    }
}

/// Shift a frame by `(dx, dy)` filling the vacated area with opaque black.
pub fn offset_frame(frame: &FrameRGBA, dx: i32, dy: i32) -> FrameRGBA {
    if dx == 0 && dy == 0 {
        return frame.clone();
    }

    let (w, h) = (frame.width as i64, frame.height as i64);
    let row_bytes = (w as usize) * 4;
    let mut out = Vec::with_capacity(frame.data.len());
    for _ in 0..(w * h) {
        out.extend_from_slice(&[0, 0, 0, 255]);
    }
    for y in 0..h {
        let src_y = y - i64::from(dy);
        if src_y < 0 || src_y >= h {
            continue;
        }
        for x in 0..w {
            let src_x = x - i64::from(dx);
            if src_x < 0 || src_x >= w {
                continue;
            }
            let dst = (y as usize) * row_bytes + (x as usize) * 4;
            let src = (src_y as usize) * row_bytes + (src_x as usize) * 4;
            out[dst..dst + 4].copy_from_slice(&frame.data[src..src + 4]);
        }
    }
    FrameRGBA {
        width: frame.width,
        height: frame.height,
        data: out,
        premultiplied: frame.premultiplied,
    }
}

/// Apply one scene-motion sample and one text-animation sample to a still.
///
/// Order matches the authored pipeline: scene zoom, then jitter, then the
/// animation's own scale, then its position offset.
pub fn apply_samples(
    still: &FrameRGBA,
    motion: MotionSample,
    anim: AnimSample,
) -> AdreelResult<FrameRGBA> {
    let mut out = zoom_frame(still, motion.scale)?;
    if motion.roll_x != 0 || motion.roll_y != 0 {
        out = roll_frame(&out, motion.roll_x, motion.roll_y);
    }
    if (anim.scale - 1.0).abs() > 1e-9 {
        out = zoom_frame(&out, anim.scale)?;
    }
    if anim.offset_x != 0 || anim.offset_y != 0 {
        out = offset_frame(&out, anim.offset_x, anim.offset_y);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/motion/mod.rs"]
mod tests;
