//! Still-frame rasterization of storyboard scenes to RGBA8 pixels.

use std::sync::Arc;

use kurbo::Shape;

use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{AdreelError, AdreelResult};
use crate::render::text::{TextBrushRgba8, TextLayoutEngine, resolve_font_bytes, wrap_text};

/// A rendered frame as RGBA8 pixels.
///
/// Frames produced by this module are premultiplied alpha (and fully opaque
/// in practice); the flag makes this explicit at API boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

/// Title font size in pixels.
const TITLE_SIZE_PX: f32 = 74.0;
/// Footer font size in pixels.
const FOOTER_SIZE_PX: f32 = 44.0;
/// Badge font size in pixels.
const BADGE_SIZE_PX: f32 = 48.0;
/// Title wrap cap; excess lines are silently dropped.
const TITLE_MAX_LINES: usize = 4;
/// Footer wrap cap.
const FOOTER_MAX_LINES: usize = 2;
/// Horizontal margin subtracted from the canvas width for wrapping.
const WRAP_MARGIN_PX: u32 = 140;
/// Gap between title lines in pixels.
const TITLE_LINE_GAP: f64 = 18.0;
/// Vertical step between footer lines in pixels.
const FOOTER_LINE_STEP: f64 = 54.0;

const GRADIENT_TOP: Rgba8 = Rgba8::opaque(20, 20, 60);
const GRADIENT_BOTTOM: Rgba8 = Rgba8::opaque(70, 40, 150);

const WHITE: vello_cpu::peniko::Color = vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255);
const BLACK: vello_cpu::peniko::Color = vello_cpu::peniko::Color::from_rgba8(0, 0, 0, 255);

/// Deterministic still-frame renderer for storyboard scenes.
///
/// Resolves the system font once at construction; every frame rendered with
/// the same inputs afterwards is byte-identical.
pub struct FrameRenderer {
    canvas: Canvas,
    engine: TextLayoutEngine,
    font_bytes: Arc<Vec<u8>>,
    font_data: vello_cpu::peniko::FontData,
    ctx: Option<vello_cpu::RenderContext>,
    gradient: Option<vello_cpu::Image>,
}

impl FrameRenderer {
    /// Create a renderer for `canvas`, resolving the system font.
    pub fn new(canvas: Canvas) -> AdreelResult<Self> {
        let font_bytes = resolve_font_bytes()?;
        Ok(Self::with_font_bytes(canvas, font_bytes))
    }

    /// Create a renderer with explicit font bytes (used by tests).
    pub fn with_font_bytes(canvas: Canvas, font_bytes: Arc<Vec<u8>>) -> Self {
        let font_data = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font_bytes.to_vec()),
            0,
        );
        Self {
            canvas,
            engine: TextLayoutEngine::new(),
            font_bytes,
            font_data,
            ctx: None,
            gradient: None,
        }
    }

    /// Render one still: centered wrapped title, footer line, optional badge
    /// chip, over the fixed vertical gradient.
    pub fn render(
        &mut self,
        fragments: &[String],
        footer: &str,
        badge: Option<&str>,
    ) -> AdreelResult<FrameRGBA> {
        let (w, h) = (self.canvas.width, self.canvas.height);
        let w16: u16 = w
            .try_into()
            .map_err(|_| AdreelError::render("canvas width exceeds u16"))?;
        let h16: u16 = h
            .try_into()
            .map_err(|_| AdreelError::render("canvas height exceeds u16"))?;

        let title = join_fragments(fragments);
        let max_width = (w - WRAP_MARGIN_PX) as f32;

        let mut title_lines = wrap_text(
            &mut self.engine,
            &title,
            &self.font_bytes,
            TITLE_SIZE_PX,
            max_width,
        )?;
        title_lines.truncate(TITLE_MAX_LINES);

        let mut footer_lines = wrap_text(
            &mut self.engine,
            footer,
            &self.font_bytes,
            FOOTER_SIZE_PX,
            max_width,
        )?;
        footer_lines.truncate(FOOTER_MAX_LINES);

        let gradient = match self.gradient.clone() {
            Some(img) => img,
            None => {
                let img = gradient_image(GRADIENT_TOP, GRADIENT_BOTTOM, w, h)?;
                self.gradient = Some(img.clone());
                img
            }
        };

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == w16 && ctx.height() == h16 => ctx,
            _ => vello_cpu::RenderContext::new(w16, h16),
        };
        ctx.reset();
        ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        // Background.
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(gradient);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(w),
            f64::from(h),
        ));

        // Title block, vertically centered at the frame midpoint.
        let layouts = self.line_layouts(&title_lines, TITLE_SIZE_PX)?;
        let total_h: f64 = layouts.iter().map(|l| f64::from(l.height())).sum::<f64>()
            + TITLE_LINE_GAP * layouts.len().saturating_sub(1) as f64;
        let mut y = f64::from(h) / 2.0 - total_h / 2.0;
        for layout in &layouts {
            let x = (f64::from(w) - f64::from(layout.width())) / 2.0;
            draw_layout(&mut ctx, &self.font_data, layout, x + 3.0, y + 3.0, BLACK);
            draw_layout(&mut ctx, &self.font_data, layout, x, y, WHITE);
            y += f64::from(layout.height()) + TITLE_LINE_GAP;
        }

        // Footer near the bottom.
        let footer_layouts = self.line_layouts(&footer_lines, FOOTER_SIZE_PX)?;
        let footer_y = f64::from(h) - 220.0;
        for (i, layout) in footer_layouts.iter().enumerate() {
            let x = (f64::from(w) - f64::from(layout.width())) / 2.0;
            let y = footer_y + i as f64 * FOOTER_LINE_STEP;
            draw_layout(&mut ctx, &self.font_data, layout, x + 2.0, y + 2.0, BLACK);
            draw_layout(&mut ctx, &self.font_data, layout, x, y, WHITE);
        }

        // Badge chip near the top-left.
        if let Some(badge) = badge {
            let text = badge.trim();
            if !text.is_empty() {
                let layout = self.engine.layout_plain(
                    text,
                    &self.font_bytes,
                    BADGE_SIZE_PX,
                    TextBrushRgba8::default(),
                    None,
                )?;
                let (pad_x, pad_y) = (30.0, 18.0);
                let (x0, y0) = (60.0, 90.0);
                let bw = f64::from(layout.width()) + pad_x * 2.0;
                let bh = f64::from(layout.height()) + pad_y * 2.0;

                let rr = kurbo::RoundedRect::new(x0, y0, x0 + bw, y0 + bh, 24.0);
                let mut chip = vello_cpu::kurbo::BezPath::new();
                for el in rr.path_elements(0.1) {
                    chip.push(el);
                }
                ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                ctx.set_paint(WHITE);
                ctx.fill_path(&chip);

                draw_layout(
                    &mut ctx,
                    &self.font_data,
                    &layout,
                    x0 + pad_x,
                    y0 + pad_y,
                    BLACK,
                );
            }
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w16, h16);
        ctx.render_to_pixmap(&mut pixmap);
        let data = pixmap.data_as_u8_slice().to_vec();
        self.ctx = Some(ctx);

        Ok(FrameRGBA {
            width: w,
            height: h,
            data,
            premultiplied: true,
        })
    }

    fn line_layouts(
        &mut self,
        lines: &[String],
        size_px: f32,
    ) -> AdreelResult<Vec<parley::Layout<TextBrushRgba8>>> {
        lines
            .iter()
            .map(|line| {
                self.engine.layout_plain(
                    line,
                    &self.font_bytes,
                    size_px,
                    TextBrushRgba8::default(),
                    None,
                )
            })
            .collect()
    }
}

/// Join non-empty trimmed fragments with single spaces. Falls back to a
/// single space so downstream layout always has content.
pub fn join_fragments(fragments: &[String]) -> String {
    let joined = fragments
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() {
        " ".to_string()
    } else {
        joined
    }
}

fn draw_layout(
    ctx: &mut vello_cpu::RenderContext,
    font: &vello_cpu::peniko::FontData,
    layout: &parley::Layout<TextBrushRgba8>,
    x: f64,
    y: f64,
    color: vello_cpu::peniko::Color,
) {
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((x, y)));
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            ctx.set_paint(color);
            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}

fn gradient_image(top: Rgba8, bottom: Rgba8, w: u32, h: u32) -> AdreelResult<vello_cpu::Image> {
    let mut bytes = vec![0u8; (w as usize).saturating_mul(h as usize).saturating_mul(4)];
    let h1 = (h.max(1) - 1) as f32;
    for y in 0..h {
        let t = if h1 <= 0.0 { 0.0 } else { (y as f32) / h1 };
        let lerp = |a: u8, b: u8| -> u8 {
            let af = a as f32;
            let bf = b as f32;
            (af + (bf - af) * t).round().clamp(0.0, 255.0) as u8
        };
        let c = [
            lerp(top.r, bottom.r),
            lerp(top.g, bottom.g),
            lerp(top.b, bottom.b),
            255,
        ];
        for x in 0..w {
            let idx = ((y as usize) * (w as usize) + (x as usize)) * 4;
            bytes[idx..idx + 4].copy_from_slice(&c);
        }
    }
    rgba_premul_to_image(&bytes, w, h)
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> AdreelResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| AdreelError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| AdreelError::render("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(AdreelError::render("pixmap byte len mismatch"));
    }
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels, w, h, true,
    ))
}

fn rgba_premul_to_image(
    bytes_premul: &[u8],
    width: u32,
    height: u32,
) -> AdreelResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(bytes_premul, width, height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
