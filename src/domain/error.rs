//! Error types for the alignment engine.
//!
//! This module defines the centralized error type [`LexalignError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! # Propagation policy
//!
//! Store-level invariant violations ([`DuplicateLink`](LexalignError::DuplicateLink),
//! [`NotFound`](LexalignError::NotFound)) are programming-contract errors and are
//! surfaced to the caller rather than swallowed. Transport and gateway failures are
//! never fatal: the event handler converts them into reconciliation (rollback of an
//! optimistic insert) or a non-fatal sync warning, and control always returns to the
//! interactive loop.

use thiserror::Error;

/// The main error type for alignment engine operations.
///
/// This enum consolidates all error conditions that can occur while mutating the
/// alignment set, validating sentence edits, or talking to a persistence backend.
#[derive(Debug, Error)]
pub enum LexalignError {
    /// An identical alignment link already exists in the store.
    ///
    /// Two links are identical when their `(source_positions, target_positions)`
    /// tuples match within the same sentence pair. The toggle logic removes an
    /// existing link instead of re-adding it, so this variant indicates a caller
    /// bug rather than a user mistake.
    #[error("duplicate alignment link: {0}")]
    DuplicateLink(String),

    /// No alignment link with the given id exists in the store.
    ///
    /// Raised when a delete targets an id that was never added or was already
    /// removed.
    #[error("alignment link not found: {0}")]
    NotFound(i64),

    /// A sentence edit was saved with blank text.
    ///
    /// Both sentences of a pair must be non-empty after trimming. The save is
    /// blocked and edit mode stays active so the user can correct the input.
    #[error("sentence must not be empty")]
    EmptySentence,

    /// A persistence gateway call failed in transit.
    ///
    /// The string contains a description of the failure. Create failures roll
    /// back the optimistic local insert; delete failures leave the local removal
    /// in place and surface a sync warning.
    #[error("transport error: {0}")]
    Transport(String),

    /// The persistence backend itself rejected or could not complete an operation.
    ///
    /// Occurs when reading from or writing to the backing store fails, e.g. a
    /// corrupt JSON file or an unknown sentence pair id.
    #[error("gateway error: {0}")]
    Gateway(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations in the file-backed
    /// gateway. Automatically converts from `std::io::Error`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for alignment engine operations.
///
/// This is a type alias for `std::result::Result<T, LexalignError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, LexalignError>;
