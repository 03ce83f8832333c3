//! Request and response messages for the persistence gateway.
//!
//! The event handler never calls [`PersistenceGateway`](super::PersistenceGateway)
//! directly. It emits [`GatewayRequest`] values as actions; the hosting runtime
//! executes them — possibly over a network, possibly much later — and feeds each
//! [`GatewayResponse`] back in as an event. That indirection is what makes every
//! persistence call fire-and-reconcile: local state has already changed by the
//! time the request leaves the handler, and the response only resolves pending
//! ids or triggers compensation.

use crate::domain::link::AlignmentLink;
use crate::domain::pair::{PairSummary, SentencePair};
use serde::{Deserialize, Serialize};

/// A persistence operation requested by the event handler.
///
/// Requests are self-contained and serializable so a runtime may queue them,
/// ship them across a thread or process boundary, and execute them in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GatewayRequest {
    /// List all sentence pairs for navigation.
    ListPairs,

    /// Fetch one sentence pair with its alignment links.
    FetchPair {
        /// Id of the pair to load.
        pair_id: i64,
    },

    /// Persist an optimistically inserted link.
    ///
    /// The link is pending (`id: None`); the response carries the confirmed
    /// id, matched back to the local entry by its key.
    CreateLink {
        /// The pending link exactly as inserted locally.
        link: AlignmentLink,
    },

    /// Delete a link by confirmed id.
    DeleteLink {
        /// Backend-assigned id of the link.
        id: i64,
    },

    /// Replace both sentence strings of a pair.
    UpdateSentencePair {
        /// Id of the pair being edited.
        pair_id: i64,
        /// New source sentence text.
        source_sentence: String,
        /// New target sentence text.
        target_sentence: String,
    },

    /// Delete every alignment link across all pairs.
    ResetAllLinks,
}

/// The resolution of a previously issued [`GatewayRequest`].
///
/// Success variants carry the data needed for reconciliation; the single
/// failure variant echoes the originating request, so the handler can match a
/// failed create back to its pending link key, a failed delete to its id, and
/// any stale response to a pair that is no longer current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GatewayResponse {
    /// Sentence pairs were listed.
    PairsListed {
        /// All pairs in stable id order.
        pairs: Vec<PairSummary>,
    },

    /// A sentence pair and its links were fetched.
    PairFetched {
        /// The fetched pair.
        pair: SentencePair,
        /// Its persisted links, in creation order.
        links: Vec<AlignmentLink>,
    },

    /// A link was persisted and assigned an id.
    LinkCreated {
        /// The confirmed link, id populated.
        link: AlignmentLink,
    },

    /// A link was deleted remotely.
    LinkDeleted {
        /// Id of the deleted link.
        id: i64,
    },

    /// A pair's sentences were replaced; its remote links are gone.
    PairUpdated {
        /// The updated pair.
        pair: SentencePair,
    },

    /// Every alignment link was deleted across all pairs.
    AllLinksReset,

    /// The operation failed in transit or at the backend.
    Failed {
        /// The request that failed, echoed verbatim.
        request: GatewayRequest,
        /// Human-readable failure description.
        message: String,
    },
}
