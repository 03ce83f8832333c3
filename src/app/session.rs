//! Sentence pair session lifecycle.
//!
//! [`SentencePairSession`] owns "which pair is loaded": the ordered pair list,
//! the currently loaded pair, and the edit-mode flag that freezes navigation
//! and alignment mutation while sentences are being rewritten.
//!
//! Navigation is clamped — first/previous/next/last never wrap, and stepping
//! past a boundary is a no-op. Because pair fetches resolve asynchronously,
//! the session records the *requested* pair id at navigation time and uses it
//! to discard stale responses that arrive after a newer navigation.

use crate::domain::error::{LexalignError, Result};
use crate::domain::pair::{PairSummary, SentencePair};

/// Lifecycle owner for the loaded sentence pair.
#[derive(Debug, Clone, Default)]
pub struct SentencePairSession {
    /// All known pairs in the order returned by the list operation.
    pairs: Vec<PairSummary>,

    /// The fully loaded current pair, `None` until the first fetch resolves.
    current: Option<SentencePair>,

    /// Id of the pair the session considers current.
    ///
    /// Set eagerly when navigation is requested, before the fetch resolves;
    /// any pair-scoped response whose id differs from this is stale.
    current_pair_id: Option<i64>,

    /// While set, navigation and alignment mutation are disabled.
    editing: bool,
}

impl SentencePairSession {
    /// Creates an empty session with no pairs known.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the navigable pair list.
    pub fn set_pairs(&mut self, pairs: Vec<PairSummary>) {
        tracing::debug!(pair_count = pairs.len(), "pair list updated");
        self.pairs = pairs;
    }

    /// Returns the navigable pair list in order.
    #[must_use]
    pub fn pairs(&self) -> &[PairSummary] {
        &self.pairs
    }

    /// Returns the loaded pair, if any.
    #[must_use]
    pub fn current(&self) -> Option<&SentencePair> {
        self.current.as_ref()
    }

    /// Returns the id of the pair the session considers current.
    #[must_use]
    pub const fn current_pair_id(&self) -> Option<i64> {
        self.current_pair_id
    }

    /// Returns true while a sentence edit is in progress.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    /// Returns the position of the current pair within the pair list.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        let id = self.current_pair_id?;
        self.pairs.iter().position(|pair| pair.id == id)
    }

    /// Returns the id of the first pair, unless it is already current.
    #[must_use]
    pub fn first_target(&self) -> Option<i64> {
        let first = self.pairs.first()?.id;
        (self.current_pair_id != Some(first)).then_some(first)
    }

    /// Returns the id of the last pair, unless it is already current.
    #[must_use]
    pub fn last_target(&self) -> Option<i64> {
        let last = self.pairs.last()?.id;
        (self.current_pair_id != Some(last)).then_some(last)
    }

    /// Returns the id of the next pair, clamped at the end of the list.
    #[must_use]
    pub fn next_target(&self) -> Option<i64> {
        let index = self.current_index()?;
        self.pairs.get(index + 1).map(|pair| pair.id)
    }

    /// Returns the id of the previous pair, clamped at the start of the list.
    #[must_use]
    pub fn previous_target(&self) -> Option<i64> {
        let index = self.current_index()?;
        Some(self.pairs.get(index.checked_sub(1)?)?.id)
    }

    /// Returns `id` if it names a known pair other than the current one.
    #[must_use]
    pub fn target_by_id(&self, id: i64) -> Option<i64> {
        let known = self.pairs.iter().any(|pair| pair.id == id);
        (known && self.current_pair_id != Some(id)).then_some(id)
    }

    /// Marks a pair as the navigation destination before its fetch resolves.
    ///
    /// From this moment, responses scoped to any other pair are stale.
    pub fn begin_navigation(&mut self, pair_id: i64) {
        tracing::debug!(pair_id, "navigating to pair");
        self.current_pair_id = Some(pair_id);
    }

    /// Applies a fetched pair if it is still the navigation destination.
    ///
    /// Returns `false` — and leaves the session untouched — when the response
    /// is stale, i.e. a newer navigation superseded the fetch while it was in
    /// flight.
    pub fn apply_fetched(&mut self, pair: SentencePair) -> bool {
        if self.current_pair_id != Some(pair.id) {
            tracing::debug!(
                response_pair = pair.id,
                current = ?self.current_pair_id,
                "discarding stale pair fetch"
            );
            return false;
        }
        self.current = Some(pair);
        true
    }

    /// Enters edit mode. No-op unless a pair is loaded.
    pub fn begin_edit(&mut self) -> bool {
        if self.current.is_none() || self.editing {
            return false;
        }
        self.editing = true;
        true
    }

    /// Leaves edit mode without applying changes.
    pub fn cancel_edit(&mut self) {
        self.editing = false;
    }

    /// Validates edited sentence text.
    ///
    /// # Errors
    ///
    /// Returns [`LexalignError::EmptySentence`] if either string is blank
    /// after trimming.
    pub fn validate_edit(source_sentence: &str, target_sentence: &str) -> Result<()> {
        if source_sentence.trim().is_empty() || target_sentence.trim().is_empty() {
            return Err(LexalignError::EmptySentence);
        }
        Ok(())
    }

    /// Replaces the current pair's sentences and leaves edit mode.
    ///
    /// Caller is responsible for having discarded the alignment set; token
    /// positions no longer describe the new tokenization.
    pub fn apply_edit(&mut self, source_sentence: String, target_sentence: String) {
        if let Some(pair) = self.current.as_mut() {
            pair.source_sentence = source_sentence;
            pair.target_sentence = target_sentence;
        }
        self.editing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: i64) -> PairSummary {
        PairSummary {
            id,
            source_language: "en".into(),
            target_language: "fr".into(),
            source_sentence: format!("sentence {id}"),
            target_sentence: format!("phrase {id}"),
        }
    }

    fn session_at(pair_ids: &[i64], current: i64) -> SentencePairSession {
        let mut session = SentencePairSession::new();
        session.set_pairs(pair_ids.iter().copied().map(summary).collect());
        session.begin_navigation(current);
        let pair = SentencePair::new(
            current,
            "en".into(),
            "fr".into(),
            format!("sentence {current}"),
            format!("phrase {current}"),
        );
        assert!(session.apply_fetched(pair));
        session
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let session = session_at(&[1, 2, 3], 3);
        assert_eq!(session.next_target(), None, "no wraparound past the end");
        assert_eq!(session.previous_target(), Some(2));

        let session = session_at(&[1, 2, 3], 1);
        assert_eq!(session.previous_target(), None);
        assert_eq!(session.next_target(), Some(2));
        assert_eq!(session.first_target(), None, "already at first");
        assert_eq!(session.last_target(), Some(3));
    }

    #[test]
    fn target_by_id_rejects_unknown_and_current() {
        let session = session_at(&[1, 2], 1);
        assert_eq!(session.target_by_id(2), Some(2));
        assert_eq!(session.target_by_id(1), None);
        assert_eq!(session.target_by_id(99), None);
    }

    #[test]
    fn stale_fetch_is_discarded() {
        let mut session = session_at(&[1, 2], 1);
        session.begin_navigation(2);

        // A slow response for pair 1 arrives after navigating to pair 2.
        let stale = SentencePair::new(1, "en".into(), "fr".into(), "old".into(), "vieux".into());
        assert!(!session.apply_fetched(stale));
        assert_eq!(session.current().map(|p| p.id), Some(1));
        assert_eq!(session.current_pair_id(), Some(2));
    }

    #[test]
    fn validate_edit_rejects_blank_after_trim() {
        assert!(matches!(
            SentencePairSession::validate_edit("   ", "ok"),
            Err(LexalignError::EmptySentence)
        ));
        assert!(matches!(
            SentencePairSession::validate_edit("ok", "\t\n"),
            Err(LexalignError::EmptySentence)
        ));
        assert!(SentencePairSession::validate_edit("a", "b").is_ok());
    }

    #[test]
    fn apply_edit_replaces_text_and_leaves_edit_mode() {
        let mut session = session_at(&[1], 1);
        assert!(session.begin_edit());
        assert!(!session.begin_edit(), "re-entry is a no-op");

        session.apply_edit("new source".into(), "new target".into());
        assert!(!session.is_editing());
        let pair = session.current().expect("current");
        assert_eq!(pair.source_sentence, "new source");
        assert_eq!(pair.target_sentence, "new target");
    }

    #[test]
    fn begin_edit_requires_a_loaded_pair() {
        let mut session = SentencePairSession::new();
        assert!(!session.begin_edit());
    }
}
