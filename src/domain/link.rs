//! Alignment link domain model.
//!
//! An alignment link connects one or more token positions of the source
//! sentence to one or more token positions of the target sentence within a
//! single sentence pair. Links created by gestures are single-position pairs;
//! multi-position (phrase) links are first-class in the data model and arrive
//! from the backend.

use serde::{Deserialize, Serialize};

/// Which sentence of a pair a token position refers to.
///
/// Replaces stringly-typed `"source"` / `"target"` discriminants: drag
/// payloads, store queries, and selection state all carry a `Side`, and a drop
/// is only accepted when the dragged side differs from the drop side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Source,
    Target,
}

impl Side {
    /// Returns the opposite side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Source => Self::Target,
            Self::Target => Self::Source,
        }
    }
}

/// A word-to-word (or phrase-to-phrase) correspondence within a sentence pair.
///
/// # Invariants
///
/// - `source_positions` and `target_positions` are each non-empty, strictly
///   increasing, and reference token positions of the owning pair.
/// - `id` is `None` while the link is pending (optimistically inserted but not
///   yet confirmed by the backend); until confirmation the link is identified
///   by its [`LinkKey`].
/// - No two links of the same pair share a key; the store enforces this, and
///   it is what makes the create-or-remove toggle well defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentLink {
    pub id: Option<i64>,
    pub sentence_pair_id: i64,
    pub source_positions: Vec<usize>,
    pub target_positions: Vec<usize>,
    pub created_at: i64,
}

impl AlignmentLink {
    /// Creates a pending link, normalizing both position lists.
    ///
    /// Positions are sorted ascending and deduplicated so the strictly-
    /// increasing invariant holds by construction regardless of gesture or
    /// selection order. The link carries no id until the backend confirms it.
    #[must_use]
    pub fn new(
        sentence_pair_id: i64,
        mut source_positions: Vec<usize>,
        mut target_positions: Vec<usize>,
    ) -> Self {
        source_positions.sort_unstable();
        source_positions.dedup();
        target_positions.sort_unstable();
        target_positions.dedup();
        Self {
            id: None,
            sentence_pair_id,
            source_positions,
            target_positions,
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Convenience constructor for the single-position links produced by gestures.
    #[must_use]
    pub fn single(sentence_pair_id: i64, source_position: usize, target_position: usize) -> Self {
        Self::new(
            sentence_pair_id,
            vec![source_position],
            vec![target_position],
        )
    }

    /// Returns the reconciliation key identifying this link until it has an id.
    #[must_use]
    pub fn key(&self) -> LinkKey {
        LinkKey {
            sentence_pair_id: self.sentence_pair_id,
            source_positions: self.source_positions.clone(),
            target_positions: self.target_positions.clone(),
        }
    }

    /// Returns true while the backend has not yet assigned an id.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.id.is_none()
    }

    /// Returns the positions on the given side.
    #[must_use]
    pub fn positions(&self, side: Side) -> &[usize] {
        match side {
            Side::Source => &self.source_positions,
            Side::Target => &self.target_positions,
        }
    }

    /// Returns true if this is exactly the singleton link `{[source], [target]}`.
    ///
    /// This is the toggle probe: a gesture on a token pair removes the link
    /// only when the link is precisely that pair, never when the positions are
    /// merely contained in a wider phrase link.
    #[must_use]
    pub fn is_single(&self, source_position: usize, target_position: usize) -> bool {
        self.source_positions == [source_position] && self.target_positions == [target_position]
    }
}

/// Identity of a link independent of backend id assignment.
///
/// Reconciliation of gateway responses matches on this tuple rather than on
/// array position, which keeps the optimistic store correct when responses
/// arrive out of order relative to newer local mutations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkKey {
    pub sentence_pair_id: i64,
    pub source_positions: Vec<usize>,
    pub target_positions: Vec<usize>,
}

impl std::fmt::Display for LinkKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "pair {} {:?}→{:?}",
            self.sentence_pair_id, self.source_positions, self.target_positions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sorts_and_dedups_positions() {
        let link = AlignmentLink::new(1, vec![3, 1, 3, 2], vec![5, 5, 0]);
        assert_eq!(link.source_positions, vec![1, 2, 3]);
        assert_eq!(link.target_positions, vec![0, 5]);
        assert!(link.is_pending());
    }

    #[test]
    fn keys_match_regardless_of_input_order() {
        let a = AlignmentLink::new(7, vec![2, 0], vec![1]);
        let b = AlignmentLink::new(7, vec![0, 2], vec![1]);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn single_probe_rejects_phrase_links() {
        let phrase = AlignmentLink::new(1, vec![0, 1], vec![0]);
        assert!(!phrase.is_single(0, 0));

        let single = AlignmentLink::single(1, 0, 0);
        assert!(single.is_single(0, 0));
        assert!(!single.is_single(0, 1));
    }
}
