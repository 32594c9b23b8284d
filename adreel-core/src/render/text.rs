//! Text layout and font resolution for rendered frames.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::foundation::error::{AdreelError, AdreelResult};

/// RGBA8 brush color used by Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// Ordered candidate font files, tried first. Bold sans faces preferred.
const FONT_CANDIDATES: [&str; 6] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
];

/// Directories scanned for any usable face when no candidate exists.
const FONT_SCAN_ROOTS: [&str; 2] = ["/usr/share/fonts", "/usr/local/share/fonts"];

/// Resolve the frame font: the first candidate path that exists, else the
/// first `.ttf`/`.otf` found under the system font roots (deterministic
/// scan order).
///
/// Layout metrics always come from the bytes returned here, so wrapping
/// width stays consistent with the rendered font whatever was selected.
pub fn resolve_font_bytes() -> AdreelResult<Arc<Vec<u8>>> {
    for candidate in FONT_CANDIDATES {
        let p = Path::new(candidate);
        if p.exists()
            && let Ok(bytes) = std::fs::read(p)
        {
            return Ok(Arc::new(bytes));
        }
    }

    for root in FONT_SCAN_ROOTS {
        if let Some(path) = first_font_under(Path::new(root))
            && let Ok(bytes) = std::fs::read(&path)
        {
            return Ok(Arc::new(bytes));
        }
    }

    Err(AdreelError::render(
        "no usable system font found (checked known paths and system font directories)",
    ))
}

fn first_font_under(root: &Path) -> Option<PathBuf> {
    walkdir::WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .find(|entry| {
            entry.file_type().is_file()
                && matches!(
                    entry
                        .path()
                        .extension()
                        .and_then(|ext| ext.to_str())
                        .map(str::to_ascii_lowercase)
                        .as_deref(),
                    Some("ttf" | "otf")
                )
        })
        .map(|entry| entry.into_path())
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Shape and lay out plain text using provided font bytes and styling.
    pub fn layout_plain(
        &mut self,
        text: &str,
        font_bytes: &[u8],
        size_px: f32,
        brush: TextBrushRgba8,
        max_width_px: Option<f32>,
    ) -> AdreelResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(AdreelError::render("text size_px must be finite and > 0"));
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            AdreelError::render("no font families registered from font bytes")
        })?;
        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| AdreelError::render("registered font family has no name"))?
            .to_string();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        if let Some(w) = max_width_px {
            layout.break_all_lines(Some(w));
            layout.align(
                Some(w),
                parley::Alignment::Start,
                parley::AlignmentOptions::default(),
            );
        } else {
            layout.break_all_lines(None);
        }

        Ok(layout)
    }

    /// Rendered width in pixels of `text` as a single unwrapped line.
    pub fn measure_width(
        &mut self,
        text: &str,
        font_bytes: &[u8],
        size_px: f32,
    ) -> AdreelResult<f32> {
        let layout =
            self.layout_plain(text, font_bytes, size_px, TextBrushRgba8::default(), None)?;
        Ok(layout.width())
    }
}

/// Greedy word-wrap against a maximum rendered pixel width.
///
/// Each candidate line is measured with the active font; a word that does
/// not fit starts a new line, and a single over-wide word still becomes its
/// own line.
pub fn wrap_text(
    engine: &mut TextLayoutEngine,
    text: &str,
    font_bytes: &[u8],
    size_px: f32,
    max_width_px: f32,
) -> AdreelResult<Vec<String>> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if engine.measure_width(&candidate, font_bytes, size_px)? <= max_width_px {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    Ok(lines)
}
