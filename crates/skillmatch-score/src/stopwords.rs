//! English stop words for skill normalization.
//!
//! The base list is the Stopwords ISO English list from the `stop-words`
//! crate. A handful of tokens in that list are also skill names and are
//! never treated as stop words.

use std::collections::HashSet;
use std::sync::LazyLock;

use stop_words::LANGUAGE;

/// Tokens that are skill names in their own right (`Go`, `R`, `C`, `IT`,
/// `AI`, `.NET`) and survive stop-word removal.
pub const SKILL_TOKENS: &[&str] = &["ai", "c", "go", "it", "net", "r"];

static ENGLISH: LazyLock<Stopwords> = LazyLock::new(Stopwords::new);

/// A set of lowercase stop words.
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwords {
    /// The English list minus [`SKILL_TOKENS`].
    ///
    /// Entries with characters outside `a`..`z` (such as `"a's"`) are
    /// skipped since normalized tokens never contain them.
    pub fn new() -> Self {
        let words = stop_words::get(LANGUAGE::English)
            .iter()
            .map(|w| w.to_ascii_lowercase())
            .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase()))
            .filter(|w| !SKILL_TOKENS.contains(&w.as_str()))
            .collect();
        Self { words }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(term)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The shared English stop-word set, built on first use.
pub fn english() -> &'static Stopwords {
    &ENGLISH
}
