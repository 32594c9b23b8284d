//! Copy-language resolution from a brief's free-text language label.

/// Copy language resolved from a brief's free-text language label.
///
/// The colloquial Hindi/English mix is the default register for this ad
/// format; the two pure variants are opt-in via the label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// Colloquial Hindi/English mix (default).
    Hinglish,
    /// Pure Hindi.
    Hindi,
    /// Pure English.
    English,
}

impl Language {
    /// Detect the language from a free-text label.
    ///
    /// Case-insensitive substring match: a label containing `"hindi"` but not
    /// `"hinglish"` selects Hindi; a label containing `"english"` selects
    /// English; anything else falls back to Hinglish. There is no error path.
    pub fn detect(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("hindi") && !label.contains("hinglish") {
            return Self::Hindi;
        }
        if label.contains("english") {
            return Self::English;
        }
        Self::Hinglish
    }

    /// Select one of the three authored variants for this language.
    pub fn pick(self, hinglish: &str, hindi: &str, english: &str) -> String {
        match self {
            Self::Hinglish => hinglish.to_string(),
            Self::Hindi => hindi.to_string(),
            Self::English => english.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/locale.rs"]
mod tests;
