//! Domain layer for the alignment engine.
//!
//! This module contains the core domain types and business rules, independent
//! of the persistence gateway or any presentation concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`pair`]: Sentence pair model and list summaries
//! - [`link`]: Alignment links, sides, and reconciliation keys
//! - [`token`]: Sentence tokenization

pub mod error;
pub mod link;
pub mod pair;
pub mod token;

pub use error::{LexalignError, Result};
pub use link::{AlignmentLink, LinkKey, Side};
pub use pair::{PairSummary, SentencePair};
pub use token::{tokenize, Token};
