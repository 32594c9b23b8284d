//! Deterministic brief → storyboard derivation.
//!
//! The generator is a pure function: identical briefs always yield identical
//! storyboards. All branching is brief-driven (duration threshold, tone and
//! language matching); there is no randomness and no I/O.

use crate::foundation::core::TimeSpan;
use crate::foundation::error::{AdreelError, AdreelResult};
use crate::motion::{MotionStyle, TextAnimation};
use crate::script::brief::Brief;
use crate::script::locale::Language;

/// Duration threshold (seconds) separating the two timing templates.
pub const SHORT_TEMPLATE_MAX_SECS: u32 = 15;

/// Generic benefits backfilled into empty slots, in slot order.
pub const DEFAULT_BENEFITS: [&str; 3] = [
    "Visible results",
    "Lightweight & easy",
    "Worth every rupee",
];

/// Overlay tokens promoted to a rendered badge chip, matched
/// case-insensitively. First match wins; at most one badge per scene.
pub const PROMO_BADGES: [&str; 4] = ["SALE", "NEW", "LIMITED TIME", "LIMITED"];

/// Identifier of one of the three generated hooks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum HookId {
    /// The scroll-stopper hook.
    #[serde(rename = "hook_a")]
    A,
    /// The problem/solution hook.
    #[serde(rename = "hook_b")]
    B,
    /// The brand-drop hook.
    #[serde(rename = "hook_c")]
    C,
}

/// On-screen text treatment suggested for a hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    /// Large bold type.
    BigBold,
    /// Glitchy type.
    Glitch,
    /// Neon type.
    Neon,
}

/// Sound-effect cue attached to a hook or scene. Carried through for a
/// later mixing stage; the renderer does not consume it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCue {
    /// Whoosh transition.
    Whoosh,
    /// UI click.
    Click,
    /// Bass hit.
    Boom,
    /// Soft pop.
    SoftPop,
    /// Light tap.
    Tap,
    /// Swipe swish.
    Swipe,
}

/// Candidate opening line and visual treatment for the ad's first seconds.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Hook {
    /// Hook identifier.
    pub id: HookId,
    /// Localized opening line.
    pub line: String,
    /// Human-readable visual description.
    pub visual: String,
    /// Stock-footage search query.
    pub visual_query: String,
    /// Suggested on-screen text style.
    pub text_style: TextStyle,
    /// Suggested text animation.
    pub animation: TextAnimation,
    /// Suggested sound effect.
    pub sfx: SoundCue,
}

/// One timed storyboard beat.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Position on the storyboard timeline.
    pub span: TimeSpan,
    /// Voice-over script for this beat.
    pub voice_over: String,
    /// Ordered on-screen text fragments, joined and wrapped at render time.
    pub on_screen: Vec<String>,
    /// Storyboard shot description. Documentation only.
    pub shot: String,
    /// Camera movement idea. Documentation only; the typed treatment lives
    /// in [`Scene::motion`].
    pub camera: String,
    /// Stock-footage search query, passed through for future use.
    pub visual_query: String,
    /// Camera/motion treatment consumed by the compositor.
    pub motion: MotionStyle,
    /// Text animation consumed by the compositor.
    pub animation: TextAnimation,
    /// Sound-effect cue. Unused by rendering.
    pub sfx: SoundCue,
    /// Optional stickers/icons/buttons overlaid on the frame.
    pub overlay: Vec<String>,
}

impl Scene {
    /// Derive the badge chip for this scene: the first overlay token that
    /// matches [`PROMO_BADGES`] case-insensitively, uppercased.
    pub fn badge(&self) -> Option<String> {
        self.overlay.iter().find_map(|item| {
            let upper = item.to_uppercase();
            PROMO_BADGES.contains(&upper.as_str()).then_some(upper)
        })
    }
}

/// The full derived ad: hooks, chosen hook and the timed scene sequence.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Storyboard {
    /// Requested duration in seconds.
    pub duration_sec: u32,
    /// The three generated hooks, retained for later manual selection.
    pub hooks: [Hook; 3],
    /// Which hook opens the ad.
    pub chosen_hook: HookId,
    /// Ordered, contiguous scene sequence.
    pub scenes: Vec<Scene>,
}

#[allow(clippy::too_many_arguments)]
fn scene(
    span: TimeSpan,
    voice_over: String,
    on_screen: Vec<String>,
    shot: &str,
    camera: &str,
    visual_query: String,
    motion: MotionStyle,
    animation: TextAnimation,
    sfx: SoundCue,
    overlay: &[&str],
) -> Scene {
    Scene {
        span,
        voice_over,
        on_screen,
        shot: shot.to_string(),
        camera: camera.to_string(),
        visual_query,
        motion,
        animation,
        sfx,
        overlay: overlay.iter().map(|s| s.to_string()).collect(),
    }
}

fn build_hooks(lang: Language, brand: &str, product: &str) -> [Hook; 3] {
    [
        Hook {
            id: HookId::A,
            line: lang.pick(
                &format!("Stop scrolling! {product} ka glow/upgrade hack dekh lo 😳"),
                &format!("रुको! {product} का असली असर अभी देखो 😳"),
                &format!("Stop scrolling—watch what {product} can really do 😳"),
            ),
            visual: "Fast cut + bold text pop".to_string(),
            visual_query: format!("{product} closeup aesthetic vertical"),
            text_style: TextStyle::BigBold,
            animation: TextAnimation::PopIn,
            sfx: SoundCue::Whoosh,
        },
        Hook {
            id: HookId::B,
            line: lang.pick(
                &format!("Har roz same problem? Bas {product}… aur game over."),
                &format!("हर दिन वही परेशानी? बस {product}… और खत्म!"),
                &format!("Same problem every day? Just {product}—game over."),
            ),
            visual: "Problem-to-solution transition".to_string(),
            visual_query: format!("person frustrated then happy using {product} vertical"),
            text_style: TextStyle::Glitch,
            animation: TextAnimation::SwipeCut,
            sfx: SoundCue::Click,
        },
        Hook {
            id: HookId::C,
            line: lang.pick(
                &format!("{brand} ne drop kiya hai something CRAZY… miss mat karna 👀"),
                &format!("{brand} ने कुछ CRAZY लॉन्च किया है… मिस मत करना 👀"),
                &format!("{brand} just dropped something CRAZY… don’t miss this 👀"),
            ),
            visual: "Reveal + zoom-in product hero".to_string(),
            visual_query: format!("{product} product reveal studio lighting vertical"),
            text_style: TextStyle::Neon,
            animation: TextAnimation::ZoomIn,
            sfx: SoundCue::Boom,
        },
    ]
}

fn choose_hook(duration_sec: u32, tone: &str) -> HookId {
    if duration_sec <= SHORT_TEMPLATE_MAX_SECS {
        return HookId::A;
    }
    let tone = tone.to_lowercase();
    if tone.contains("funny") || tone.contains("genz") {
        HookId::B
    } else {
        HookId::C
    }
}

/// Derive a storyboard from a brief.
///
/// Pure: identical input always yields an identical storyboard. The only
/// error is the defensive zero-scene case, unreachable with the fixed
/// templates.
pub fn generate(brief: &Brief) -> AdreelResult<Storyboard> {
    let lang = Language::detect(&brief.language);
    let brand = brief.brand.as_str();
    let product = brief.product.as_str();
    let cta = brief.cta.as_str();

    let benefit = |slot: usize| -> String {
        brief
            .benefits
            .get(slot)
            .cloned()
            .unwrap_or_else(|| DEFAULT_BENEFITS[slot].to_string())
    };
    let (b1, b2, b3) = (benefit(0), benefit(1), benefit(2));

    let hooks = build_hooks(lang, brand, product);
    let chosen_hook = choose_hook(brief.duration_sec, &brief.tone);
    let chosen = &hooks[match chosen_hook {
        HookId::A => 0,
        HookId::B => 1,
        HookId::C => 2,
    }];

    let offer_prefix = brief
        .offer
        .as_deref()
        .map(|offer| format!("{offer} — "))
        .unwrap_or_default();
    let cta_line = lang.pick(
        &format!("{offer_prefix}{cta}! Abhi try karo 🔥"),
        &format!("{offer_prefix}{cta}! अभी ट्राय करो 🔥"),
        &format!("{offer_prefix}{cta}! Try it now 🔥"),
    );

    let scenes = if brief.duration_sec <= SHORT_TEMPLATE_MAX_SECS {
        vec![
            scene(
                TimeSpan::new(0.0, 2.5),
                chosen.line.clone(),
                vec![
                    brand.to_string(),
                    product.to_string(),
                    lang.pick("STOP SCROLLING", "रुको!", "STOP SCROLLING"),
                ],
                "Quick montage: problem face → product flash → reaction",
                "Handheld + quick zoom cuts",
                chosen.visual_query.clone(),
                MotionStyle::PunchZoom,
                TextAnimation::PopIn,
                chosen.sfx,
                &["🔥", "👀"],
            ),
            scene(
                TimeSpan::new(2.5, 6.0),
                lang.pick(
                    &format!("1 second mein samjho: {b1}."),
                    &format!("1 सेकंड में समझो: {b1}."),
                    &format!("In 1 second: {b1}."),
                ),
                vec![lang.pick("RESULT:", "नतीजा:", "RESULT:"), b1.clone()],
                "Close-up of applying product / texture shot",
                "Macro close-up + slow push-in",
                format!("{product} texture closeup vertical"),
                MotionStyle::Steady,
                TextAnimation::SlideUp,
                SoundCue::SoftPop,
                &["✅"],
            ),
            scene(
                TimeSpan::new(6.0, 9.5),
                lang.pick(
                    &format!("Plus, {b2}."),
                    &format!("और साथ में, {b2}."),
                    &format!("Plus, {b2}."),
                ),
                vec![
                    b2.clone(),
                    lang.pick("NO HEAVY FEEL", "भारी नहीं", "NO HEAVY FEEL"),
                ],
                "Mirror shot / smooth application / glow angle",
                "Smooth pan left-to-right",
                "skincare mirror glow vertical".to_string(),
                MotionStyle::Steady,
                TextAnimation::TypeOn,
                SoundCue::Tap,
                &["✨"],
            ),
            scene(
                TimeSpan::new(9.5, 13.0),
                lang.pick(
                    &format!("Best part? {b3}."),
                    &format!("सबसे बढ़िया? {b3}."),
                    &format!("Best part? {b3}."),
                ),
                vec![b3.clone(), lang.pick("TRUSTED", "भरोसेमंद", "TRUSTED")],
                "Social proof / reviews style moment",
                "Swipe between review cards",
                "happy customer review phone screen vertical".to_string(),
                MotionStyle::Steady,
                TextAnimation::SwipeCut,
                SoundCue::Swipe,
                &["⭐ 4.8", "💬"],
            ),
            scene(
                TimeSpan::new(13.0, 15.0),
                cta_line,
                vec![
                    lang.pick("LIMITED TIME", "सीमित समय", "LIMITED TIME"),
                    cta.to_string(),
                ],
                "Product hero shot + CTA button",
                "Zoom-in + light flare",
                format!("{product} product hero shot vertical"),
                MotionStyle::PunchZoom,
                TextAnimation::CtaBounce,
                SoundCue::Boom,
                &["🛒", "👇"],
            ),
        ]
    } else {
        vec![
            scene(
                TimeSpan::new(0.0, 4.0),
                chosen.line.clone(),
                vec![brand.to_string(), product.to_string()],
                "Story hook: problem moment → product appears",
                "Fast cuts + punch zoom",
                chosen.visual_query.clone(),
                MotionStyle::PunchZoom,
                TextAnimation::PopIn,
                chosen.sfx,
                &["👀"],
            ),
            scene(
                TimeSpan::new(4.0, 10.0),
                lang.pick(
                    &format!("First: {b1}. Real talk."),
                    &format!("पहला: {b1}. सच में."),
                    &format!("First: {b1}. Real talk."),
                ),
                vec![
                    lang.pick("BENEFIT #1", "फायदा #1", "BENEFIT #1"),
                    b1.clone(),
                ],
                "Close-up + application + result angle",
                "Slow push-in + cut on beat",
                format!("{product} skincare application vertical"),
                MotionStyle::Steady,
                TextAnimation::SlideUp,
                SoundCue::SoftPop,
                &["✅"],
            ),
            scene(
                TimeSpan::new(10.0, 18.0),
                lang.pick(
                    &format!("Second: {b2}. Daily use friendly."),
                    &format!("दूसरा: {b2}. रोज़ के लिए सही."),
                    &format!("Second: {b2}. Daily-friendly."),
                ),
                vec![
                    lang.pick("BENEFIT #2", "फायदा #2", "BENEFIT #2"),
                    b2.clone(),
                ],
                "Lifestyle b-roll: morning routine",
                "Pan + match cut",
                "morning skincare routine aesthetic vertical".to_string(),
                MotionStyle::Steady,
                TextAnimation::TypeOn,
                SoundCue::Tap,
                &["✨"],
            ),
            scene(
                TimeSpan::new(18.0, 24.0),
                lang.pick(
                    &format!("Third: {b3}. Value for money."),
                    &format!("तीसरा: {b3}. पैसे वसूल."),
                    &format!("Third: {b3}. Value for money."),
                ),
                vec![
                    lang.pick("BENEFIT #3", "फायदा #3", "BENEFIT #3"),
                    b3.clone(),
                ],
                "Before/after style split-screen idea",
                "Split-screen wipe",
                "before after skincare glow vertical".to_string(),
                MotionStyle::Steady,
                TextAnimation::SplitWipe,
                SoundCue::Swipe,
                &["⭐", "💬"],
            ),
            scene(
                TimeSpan::new(24.0, 30.0),
                cta_line,
                vec![
                    lang.pick("SALE", "ऑफर", "SALE"),
                    brief.offer.clone().unwrap_or_default(),
                    cta.to_string(),
                ],
                "Product hero + offer card + CTA",
                "Zoom + shake on beat",
                format!("{product} sale promo vertical"),
                MotionStyle::ZoomShake,
                TextAnimation::CtaBounce,
                SoundCue::Boom,
                &["🛒", "👇"],
            ),
        ]
    };

    if scenes.is_empty() {
        return Err(AdreelError::storyboard("no scenes generated"));
    }

    Ok(Storyboard {
        duration_sec: brief.duration_sec,
        hooks,
        chosen_hook,
        scenes,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/script/storyboard.rs"]
mod tests;
