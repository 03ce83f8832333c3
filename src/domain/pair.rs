//! Sentence pair domain model.
//!
//! A sentence pair is one source-language sentence and its target-language
//! counterpart. Pairs are the unit of navigation and the owner of an alignment
//! set: every [`AlignmentLink`](crate::domain::link::AlignmentLink) belongs to
//! exactly one pair, and editing a pair's text invalidates that set because
//! token positions are defined by split order.

use serde::{Deserialize, Serialize};

/// A bilingual sentence pair loaded for annotation.
///
/// Immutable once loaded except via an explicit edit operation, which replaces
/// both sentence strings and discards every alignment link belonging to the
/// pair.
///
/// # Fields
///
/// - `id`: persistent identifier assigned by the backend
/// - `source_language` / `target_language`: language codes (e.g. `"en"`, `"fr"`)
/// - `source_sentence` / `target_sentence`: the sentence text, tokenized on
///   demand by [`tokenize`](crate::domain::token::tokenize)
/// - `created_at`: Unix timestamp when the pair was first stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentencePair {
    pub id: i64,
    pub source_language: String,
    pub target_language: String,
    pub source_sentence: String,
    pub target_sentence: String,
    pub created_at: i64,
}

impl SentencePair {
    /// Creates a new sentence pair stamped with the current time.
    ///
    /// Used by gateway backends when seeding pairs; the engine itself only
    /// receives pairs that already carry backend-assigned ids.
    #[must_use]
    pub fn new(
        id: i64,
        source_language: String,
        target_language: String,
        source_sentence: String,
        target_sentence: String,
    ) -> Self {
        Self {
            id,
            source_language,
            target_language,
            source_sentence,
            target_sentence,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Summary of a sentence pair as returned by the list operation.
///
/// Carries the same fields as [`SentencePair`]; the distinct type marks the
/// boundary between the navigable pair list and the single currently-loaded
/// pair, which is the only one whose alignment set is held locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairSummary {
    pub id: i64,
    pub source_language: String,
    pub target_language: String,
    pub source_sentence: String,
    pub target_sentence: String,
}

impl PairSummary {
    /// Returns the label used by pair selectors: languages plus a sentence preview.
    ///
    /// Mirrors the listing format of the annotation UI: `"en → fr: The quick brown
    /// fox jumps over…"`, truncating the source sentence to thirty characters.
    #[must_use]
    pub fn selector_label(&self) -> String {
        let preview: String = self.source_sentence.chars().take(30).collect();
        let ellipsis = if self.source_sentence.chars().count() > 30 {
            "…"
        } else {
            ""
        };
        format!(
            "{} → {}: {}{}",
            self.source_language, self.target_language, preview, ellipsis
        )
    }
}

impl From<&SentencePair> for PairSummary {
    fn from(pair: &SentencePair) -> Self {
        Self {
            id: pair.id,
            source_language: pair.source_language.clone(),
            target_language: pair.target_language.clone(),
            source_sentence: pair.source_sentence.clone(),
            target_sentence: pair.target_sentence.clone(),
        }
    }
}
