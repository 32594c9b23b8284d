use super::*;

#[test]
fn hindi_label_selects_hindi() {
    assert_eq!(Language::detect("Hindi"), Language::Hindi);
    assert_eq!(Language::detect("pure hindi please"), Language::Hindi);
    assert_eq!(
        Language::detect("HINDI").pick("mix", "हिंदी", "english"),
        "हिंदी"
    );
}

#[test]
fn hinglish_label_is_not_hindi() {
    // "hinglish" contains neither "hindi" nor "english" as a substring.
    assert_eq!(Language::detect("Hinglish"), Language::Hinglish);
    assert_eq!(Language::detect("hindi-hinglish mix"), Language::Hinglish);
}

#[test]
fn english_label_selects_english() {
    assert_eq!(Language::detect("English"), Language::English);
    assert_eq!(Language::detect("indian english"), Language::English);
}

#[test]
fn unrecognized_label_falls_back_to_default() {
    assert_eq!(Language::detect(""), Language::Hinglish);
    assert_eq!(Language::detect("tamil"), Language::Hinglish);
    assert_eq!(
        Language::detect("??").pick("default", "b", "c"),
        "default"
    );
}
