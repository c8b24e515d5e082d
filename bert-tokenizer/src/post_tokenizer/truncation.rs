use displaydoc::Display;
use thiserror::Error;

use crate::post_tokenizer::{encoding::Encoding, ADDED_TOKENS, ADDED_TOKENS_PAIR};

/// A truncation strategy.
#[derive(Debug)]
pub struct Truncation(Truncations);

/// The potential errors of the truncation strategy.
#[derive(Debug, Display, Error, PartialEq)]
pub enum TruncationError {
    /// The truncation length must be at least the number of special tokens of a single sequence
    FixedLength,
}

/// The available truncation strategies.
#[derive(Debug)]
enum Truncations {
    /// No truncation.
    None,
    /// Truncation to a fixed length.
    Fixed { len: usize },
}

impl Default for Truncation {
    fn default() -> Self {
        Self::none()
    }
}

impl Truncation {
    /// Creates an inert truncation strategy.
    pub fn none() -> Self {
        Self(Truncations::None)
    }

    /// Creates a fixed-length truncation strategy.
    ///
    /// The length includes the special tokens added by the post-tokenizer.
    pub fn fixed(len: usize) -> Self {
        Self(Truncations::Fixed { len })
    }

    /// Validates this strategy.
    pub(crate) fn validate(self) -> Result<Self, TruncationError> {
        match self.0 {
            Truncations::Fixed { len } if len < ADDED_TOKENS => {
                Err(TruncationError::FixedLength)
            }
            _ => Ok(self),
        }
    }

    /// Truncates the encoding of a single sequence to leave room for its special tokens.
    ///
    /// # Panics
    /// May panic/underflow if the truncation strategy has not been validated.
    pub(crate) fn truncate<N>(&self, encoding: Encoding<N>) -> Encoding<N> {
        match self.0 {
            Truncations::None => encoding,
            Truncations::Fixed { len } => encoding.truncate(len - ADDED_TOKENS),
        }
    }

    /// Truncates the encodings of a pair of sequences to leave room for their special tokens.
    ///
    /// Tokens are removed one by one from the tail of the currently longer sequence, from the
    /// second one if both are equally long.
    pub(crate) fn truncate_pair<N>(
        &self,
        first: Encoding<N>,
        second: Encoding<N>,
    ) -> (Encoding<N>, Encoding<N>) {
        match self.0 {
            Truncations::None => (first, second),
            Truncations::Fixed { len } => {
                let len = len.saturating_sub(ADDED_TOKENS_PAIR);
                let (mut first_len, mut second_len) = (first.len(), second.len());
                while first_len + second_len > len {
                    if first_len > second_len {
                        first_len -= 1;
                    } else {
                        second_len -= 1;
                    }
                }
                (first.truncate(first_len), second.truncate(second_len))
            }
        }
    }

    /// Truncates the post-tokenized encoding if it still exceeds the fixed length.
    ///
    /// This only happens for pairs of sequences if the length can't hold all their special tokens.
    pub(crate) fn clip<N>(&self, encoding: Encoding<N>) -> Encoding<N> {
        match self.0 {
            Truncations::None => encoding,
            Truncations::Fixed { len } => encoding.truncate(len),
        }
    }
}
