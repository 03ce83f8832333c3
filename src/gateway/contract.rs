//! Persistence gateway abstraction.
//!
//! This module defines the [`PersistenceGateway`] trait that abstracts over
//! remote alignment stores. The engine core depends only on this contract —
//! never on transport mechanics — which allows swapping an HTTP client, a
//! local file, or a test double without touching the interaction logic.
//!
//! # Design Philosophy
//!
//! The trait is minimal and use-case shaped, not a generic ORM: each method
//! maps to one operation the event handler can request. Signatures are
//! synchronous on purpose; the asynchrony the engine requires lives in the
//! message loop (see [`crate::gateway::messages`]), where the core emits a
//! [`GatewayRequest`](crate::gateway::GatewayRequest) and consumes the
//! matching response as a later event, in whatever order responses arrive.

use crate::domain::error::Result;
use crate::domain::link::AlignmentLink;
use crate::domain::pair::{PairSummary, SentencePair};

/// A sentence pair together with its persisted alignment links.
///
/// The shape returned by [`PersistenceGateway::fetch_pair`]; links carry
/// backend-assigned ids and arrive in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairWithLinks {
    pub pair: SentencePair,
    pub links: Vec<AlignmentLink>,
}

/// Abstraction over persistent alignment stores.
///
/// # Implementations
///
/// - [`JsonGateway`](crate::gateway::JsonGateway): JSON file with atomic
///   writes, used for offline annotation and as the test backend.
pub trait PersistenceGateway: Send {
    /// Lists all sentence pairs in stable id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn list_pairs(&self) -> Result<Vec<PairSummary>>;

    /// Fetches one sentence pair and its alignment links.
    ///
    /// # Errors
    ///
    /// Returns an error if the pair does not exist or the read fails.
    fn fetch_pair(&self, pair_id: i64) -> Result<PairWithLinks>;

    /// Persists a pending link and returns it with a backend-assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the referenced pair does not exist or the write
    /// fails.
    fn create_link(&mut self, link: &AlignmentLink) -> Result<AlignmentLink>;

    /// Deletes a link by its confirmed id.
    ///
    /// # Errors
    ///
    /// Returns [`LexalignError::NotFound`](crate::domain::LexalignError::NotFound)
    /// if the id is unknown, or another error if the write fails.
    fn delete_link(&mut self, id: i64) -> Result<()>;

    /// Replaces both sentence strings of a pair and returns the updated pair.
    ///
    /// Implementations also discard every alignment link of the pair: token
    /// positions are not guaranteed valid against the new tokenization.
    ///
    /// # Errors
    ///
    /// Returns an error if the pair does not exist or the write fails.
    fn update_pair(
        &mut self,
        pair_id: i64,
        source_sentence: &str,
        target_sentence: &str,
    ) -> Result<SentencePair>;

    /// Deletes every alignment link across all sentence pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn reset_all_links(&mut self) -> Result<()>;
}
