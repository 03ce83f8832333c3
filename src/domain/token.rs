//! Sentence tokenization.
//!
//! Tokens are purely derived values: a sentence split on single spaces, each
//! word carrying its zero-based position in split order. Tokens have no
//! identity of their own and must be recomputed whenever the owning sentence
//! changes, since positions are defined entirely by split order.

use serde::{Deserialize, Serialize};

/// A word of a sentence together with its zero-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub position: usize,
}

/// Splits a sentence into tokens on single spaces.
///
/// Any string is valid input; there are no error cases. The empty string
/// yields an empty sequence. On well-formed single-spaced input, rejoining the
/// token texts with single spaces reproduces the original sentence.
#[must_use]
pub fn tokenize(sentence: &str) -> Vec<Token> {
    if sentence.is_empty() {
        return vec![];
    }
    sentence
        .split(' ')
        .enumerate()
        .map(|(position, text)| Token {
            text: text.to_string(),
            position,
        })
        .collect()
}
