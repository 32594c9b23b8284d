use super::*;
use crate::script::brief::Brief;

fn brief(duration_sec: u32) -> Brief {
    Brief {
        duration_sec,
        ..Brief::default()
    }
}

fn assert_contiguous(board: &Storyboard, expected_end: f64) {
    assert_eq!(board.scenes.len(), 5);
    assert_eq!(board.scenes[0].span.start, 0.0);
    for pair in board.scenes.windows(2) {
        assert_eq!(pair[0].span.end, pair[1].span.start);
        assert!(pair[0].span.start < pair[0].span.end);
    }
    let last = board.scenes.last().unwrap();
    assert!(last.span.start < last.span.end);
    assert_eq!(last.span.end, expected_end);
}

#[test]
fn short_template_has_five_contiguous_scenes_ending_at_15() {
    for duration in [5, 10, 15] {
        let board = generate(&brief(duration)).unwrap();
        assert_contiguous(&board, 15.0);
    }
}

#[test]
fn long_template_has_five_contiguous_scenes_ending_at_30() {
    for duration in [16, 30, 60] {
        let board = generate(&brief(duration)).unwrap();
        assert_contiguous(&board, 30.0);
    }
}

#[test]
fn benefit_backfill_uses_generic_defaults_per_missing_slot() {
    let board = generate(&Brief {
        benefits: vec!["Brighter skin".to_string()],
        language: "English".to_string(),
        ..brief(15)
    })
    .unwrap();

    assert_eq!(board.scenes[1].voice_over, "In 1 second: Brighter skin.");
    assert_eq!(board.scenes[2].voice_over, "Plus, Lightweight & easy.");
    assert_eq!(board.scenes[3].voice_over, "Best part? Worth every rupee.");
}

#[test]
fn hook_selection_follows_duration_and_tone() {
    assert_eq!(generate(&brief(15)).unwrap().chosen_hook, HookId::A);

    let funny = generate(&Brief {
        tone: "Funny, irreverent".to_string(),
        ..brief(30)
    })
    .unwrap();
    assert_eq!(funny.chosen_hook, HookId::B);

    let genz = generate(&Brief {
        tone: "very GenZ".to_string(),
        ..brief(30)
    })
    .unwrap();
    assert_eq!(genz.chosen_hook, HookId::B);

    let serious = generate(&Brief {
        tone: "Premium, calm".to_string(),
        ..brief(30)
    })
    .unwrap();
    assert_eq!(serious.chosen_hook, HookId::C);
}

#[test]
fn chosen_hook_line_opens_the_storyboard() {
    let board = generate(&Brief {
        product: "Vitamin C Face Serum".to_string(),
        language: "English".to_string(),
        ..brief(15)
    })
    .unwrap();

    assert_eq!(
        board.scenes[0].voice_over,
        "Stop scrolling—watch what Vitamin C Face Serum can really do 😳"
    );
    // The two unchosen hooks stay available in the output metadata.
    assert_eq!(board.hooks.len(), 3);
    assert_eq!(board.hooks[1].id, HookId::B);
    assert_eq!(board.hooks[2].id, HookId::C);
}

#[test]
fn badge_extraction_first_promo_token_wins() {
    let mut scene = generate(&brief(15)).unwrap().scenes[0].clone();

    scene.overlay = vec!["🛒".to_string(), "SALE".to_string()];
    assert_eq!(scene.badge().as_deref(), Some("SALE"));

    scene.overlay = vec!["🛒".to_string(), "👇".to_string()];
    assert_eq!(scene.badge(), None);

    scene.overlay = vec!["new".to_string(), "LIMITED".to_string()];
    assert_eq!(scene.badge().as_deref(), Some("NEW"));
}

#[test]
fn cta_line_includes_offer_when_present() {
    let board = generate(&Brief {
        offer: Some("Flat 40% off".to_string()),
        language: "English".to_string(),
        ..brief(15)
    })
    .unwrap();
    assert_eq!(
        board.scenes[4].voice_over,
        "Flat 40% off — Order Now! Try it now 🔥"
    );

    let no_offer = generate(&Brief {
        language: "English".to_string(),
        ..brief(15)
    })
    .unwrap();
    assert_eq!(no_offer.scenes[4].voice_over, "Order Now! Try it now 🔥");
}

#[test]
fn hindi_brief_localizes_scene_copy() {
    let board = generate(&Brief {
        benefits: vec!["Brighter skin".to_string()],
        language: "Hindi".to_string(),
        ..brief(15)
    })
    .unwrap();
    assert_eq!(
        board.scenes[1].voice_over,
        "1 सेकंड में समझो: Brighter skin."
    );
    assert_eq!(board.scenes[1].on_screen[0], "नतीजा:");
}

#[test]
fn generation_is_deterministic() {
    let input = Brief {
        brand: "GlowCare".to_string(),
        product: "Vitamin C Face Serum".to_string(),
        benefits: vec!["Brighter skin".to_string()],
        ..brief(15)
    };
    let a = generate(&input).unwrap();
    let b = generate(&input).unwrap();
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn typed_motion_and_animation_follow_the_templates() {
    let short = generate(&brief(15)).unwrap();
    assert_eq!(short.scenes[0].motion, MotionStyle::PunchZoom);
    assert_eq!(short.scenes[1].animation, TextAnimation::SlideUp);
    assert_eq!(short.scenes[4].animation, TextAnimation::CtaBounce);

    let long = generate(&brief(30)).unwrap();
    assert_eq!(long.scenes[4].motion, MotionStyle::ZoomShake);
    assert_eq!(long.scenes[3].animation, TextAnimation::SplitWipe);
}
