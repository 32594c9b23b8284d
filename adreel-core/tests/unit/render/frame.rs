use super::*;
use crate::foundation::core::Canvas;
use crate::render::text::{TextLayoutEngine, resolve_font_bytes, wrap_text};

// Font-dependent tests skip on machines with no system fonts at all, the
// same way the encode paths skip without ffmpeg.
fn test_font() -> Option<std::sync::Arc<Vec<u8>>> {
    match resolve_font_bytes() {
        Ok(bytes) => Some(bytes),
        Err(_) => {
            eprintln!("skipping: no system font available");
            None
        }
    }
}

const SMALL: Canvas = Canvas {
    width: 360,
    height: 640,
};

#[test]
fn join_fragments_drops_empties_and_never_returns_empty() {
    let joined = join_fragments(&[
        "GlowCare".to_string(),
        "  ".to_string(),
        String::new(),
        "Serum".to_string(),
    ]);
    assert_eq!(joined, "GlowCare Serum");
    assert_eq!(join_fragments(&[]), " ");
    assert_eq!(join_fragments(&[String::new()]), " ");
}

#[test]
fn short_text_stays_on_one_line() {
    let Some(font) = test_font() else { return };
    let mut engine = TextLayoutEngine::new();
    let lines = wrap_text(&mut engine, "Hi", &font, 74.0, 940.0).unwrap();
    assert_eq!(lines, vec!["Hi".to_string()]);
}

#[test]
fn long_text_wraps_greedily_within_the_pixel_width() {
    let Some(font) = test_font() else { return };
    let mut engine = TextLayoutEngine::new();
    let text = "Stop scrolling watch what this serum can really do for you";
    let lines = wrap_text(&mut engine, text, &font, 74.0, 500.0).unwrap();
    assert!(lines.len() > 1);
    for line in &lines {
        assert!(engine.measure_width(line, &font, 74.0).unwrap() <= 500.0 + f32::EPSILON);
    }
    // No words lost or reordered.
    assert_eq!(lines.join(" "), text);
}

#[test]
fn render_is_deterministic_for_identical_input() {
    let Some(font) = test_font() else { return };
    let fragments = vec!["GlowCare".to_string(), "Serum".to_string()];

    let mut a = FrameRenderer::with_font_bytes(SMALL, font.clone());
    let mut b = FrameRenderer::with_font_bytes(SMALL, font);
    let first = a.render(&fragments, "Swipe up / Learn more", Some("SALE")).unwrap();
    let again = a.render(&fragments, "Swipe up / Learn more", Some("SALE")).unwrap();
    let other = b.render(&fragments, "Swipe up / Learn more", Some("SALE")).unwrap();

    assert_eq!((first.width, first.height), (SMALL.width, SMALL.height));
    assert_eq!(first.data, again.data);
    assert_eq!(first.data, other.data);
}

#[test]
fn badge_changes_the_raster() {
    let Some(font) = test_font() else { return };
    let mut renderer = FrameRenderer::with_font_bytes(SMALL, font);
    let fragments = vec!["GlowCare".to_string()];
    let with_badge = renderer.render(&fragments, "footer", Some("SALE")).unwrap();
    let without = renderer.render(&fragments, "footer", None).unwrap();
    assert_ne!(with_badge.data, without.data);
}

#[test]
fn empty_text_still_renders_a_gradient_frame() {
    let Some(font) = test_font() else { return };
    let mut renderer = FrameRenderer::with_font_bytes(SMALL, font);
    let frame = renderer.render(&[], "", None).unwrap();
    assert_eq!(frame.data.len(), (SMALL.width * SMALL.height * 4) as usize);
    // Top row must match the gradient's top color (opaque).
    assert_eq!(frame.data[3], 255);
}
