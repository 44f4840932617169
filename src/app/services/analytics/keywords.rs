//! Case-insensitive keyword matching

/// Lowercased keyword list matched by substring
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        Self {
            keywords: keywords
                .iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// True if any keyword occurs in `text`, ignoring case
    pub fn matches(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.matches_lowered(&lowered)
    }

    /// Same as [`KeywordSet::matches`] for text that is already lowercase
    pub fn matches_lowered(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
