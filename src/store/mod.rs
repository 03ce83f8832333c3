//! Authoritative in-memory alignment set for the loaded sentence pair.
//!
//! [`AlignmentStore`] owns the collection of [`AlignmentLink`] values for
//! whichever pair is currently loaded. It enforces the structural invariants —
//! key uniqueness, id identity, insertion order — and nothing else: the store
//! never talks to the persistence gateway, which keeps its invariants
//! independently testable.
//!
//! # Lifecycle
//!
//! The set is replaced wholesale by [`load`](AlignmentStore::load) on pair
//! navigation and after a global reset, emptied by
//! [`clear`](AlignmentStore::clear) on sentence edit or bulk deletion, and
//! otherwise mutated one link at a time by the event handler: an optimistic
//! [`add`](AlignmentStore::add) with a pending id that is later resolved by
//! [`confirm`](AlignmentStore::confirm), or rolled back by
//! [`remove_by_key`](AlignmentStore::remove_by_key) if the create fails.

use crate::domain::error::{LexalignError, Result};
use crate::domain::link::{AlignmentLink, LinkKey, Side};

/// The alignment set of the currently loaded sentence pair.
///
/// Links are kept in insertion order, which makes per-token highlight colors
/// deterministic across recomputations of the view model.
#[derive(Debug, Clone, Default)]
pub struct AlignmentStore {
    /// Pair whose links are held, `None` before the first load.
    pair_id: Option<i64>,

    /// Links in insertion order. Pending links (no id yet) are identified by
    /// their [`LinkKey`] until confirmed.
    links: Vec<AlignmentLink>,
}

impl AlignmentStore {
    /// Creates an empty store with no pair loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the alignment set wholesale.
    ///
    /// Used on pair navigation and after a reset; any previous set, including
    /// pending links, is discarded.
    pub fn load(&mut self, pair_id: i64, links: Vec<AlignmentLink>) {
        tracing::debug!(pair_id, link_count = links.len(), "alignment set loaded");
        self.pair_id = Some(pair_id);
        self.links = links;
    }

    /// Returns the id of the pair whose links are held, if any.
    #[must_use]
    pub const fn pair_id(&self) -> Option<i64> {
        self.pair_id
    }

    /// Appends a link to the set.
    ///
    /// # Errors
    ///
    /// Returns [`LexalignError::DuplicateLink`] if a link with the identical
    /// `(source_positions, target_positions)` tuple is already present. The
    /// toggle logic removes instead of re-adding, so hitting this is a caller
    /// bug — guarded, not silently ignored.
    pub fn add(&mut self, link: AlignmentLink) -> Result<()> {
        let key = link.key();
        if self.links.iter().any(|existing| existing.key() == key) {
            return Err(LexalignError::DuplicateLink(key.to_string()));
        }
        tracing::debug!(key = %key, pending = link.is_pending(), "link added");
        self.links.push(link);
        Ok(())
    }

    /// Removes the link with the given confirmed id.
    ///
    /// # Errors
    ///
    /// Returns [`LexalignError::NotFound`] if no link carries that id.
    pub fn remove(&mut self, id: i64) -> Result<AlignmentLink> {
        let index = self
            .links
            .iter()
            .position(|link| link.id == Some(id))
            .ok_or(LexalignError::NotFound(id))?;
        let removed = self.links.remove(index);
        tracing::debug!(id, key = %removed.key(), "link removed");
        Ok(removed)
    }

    /// Removes the link matching the given key, confirmed or pending.
    ///
    /// This is the rollback path for optimistic inserts whose create call
    /// failed; unlike [`remove`](Self::remove) an absent key is not an error,
    /// since a stale failure may race a newer local mutation.
    pub fn remove_by_key(&mut self, key: &LinkKey) -> Option<AlignmentLink> {
        let index = self.links.iter().position(|link| &link.key() == key)?;
        let removed = self.links.remove(index);
        tracing::debug!(key = %key, "link removed by key");
        Some(removed)
    }

    /// Resolves a pending link to its backend-assigned id.
    ///
    /// Returns `false` when no pending link matches the key, which happens
    /// when the link was toggled off again while the create was in flight;
    /// the caller then owes the backend a compensating delete.
    pub fn confirm(&mut self, key: &LinkKey, id: i64) -> bool {
        match self
            .links
            .iter_mut()
            .find(|link| link.is_pending() && &link.key() == key)
        {
            Some(link) => {
                link.id = Some(id);
                tracing::debug!(key = %key, id, "pending link confirmed");
                true
            }
            None => {
                tracing::debug!(key = %key, id, "no pending link to confirm");
                false
            }
        }
    }

    /// Returns, in insertion order, every link whose positions on `side`
    /// contain `position`.
    ///
    /// Drives per-token highlighting. An out-of-range position simply yields
    /// an empty result, not an error.
    #[must_use]
    pub fn links_touching(&self, side: Side, position: usize) -> Vec<&AlignmentLink> {
        self.links
            .iter()
            .filter(|link| link.positions(side).contains(&position))
            .collect()
    }

    /// Returns the link that is exactly the singleton `{[source], [target]}`, if any.
    ///
    /// This is the toggle probe for gestures; phrase links containing the
    /// positions do not match.
    #[must_use]
    pub fn find_single(
        &self,
        source_position: usize,
        target_position: usize,
    ) -> Option<&AlignmentLink> {
        self.links
            .iter()
            .find(|link| link.is_single(source_position, target_position))
    }

    /// Empties the set. Local only; remote deletion is the caller's business.
    pub fn clear(&mut self) {
        tracing::debug!(discarded = self.links.len(), "alignment set cleared");
        self.links.clear();
    }

    /// Returns the links in insertion order.
    #[must_use]
    pub fn links(&self) -> &[AlignmentLink] {
        &self.links
    }

    /// Returns the number of links in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns true if the set holds no links.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
