use displaydoc::Display;
use num_traits::Num;
use thiserror::Error;

use crate::{post_tokenizer::encoding::Encoding, vocab::Vocab, SmallString};

/// A padding strategy.
#[derive(Debug)]
pub struct Padding<N>(Paddings<N>);

/// The potential errors of the padding strategy.
#[derive(Debug, Display, Error, PartialEq)]
pub enum PaddingError {
    /// Missing the padding token in the vocabulary
    PadToken,
}

/// The available padding strategies.
#[derive(Debug)]
enum Paddings<N> {
    /// No padding.
    None,
    /// Padding to a fixed length.
    Fixed {
        len: usize,
        pad_id: N,
        pad_token: SmallString,
    },
}

impl<N> Default for Padding<N> {
    fn default() -> Self {
        Self::none()
    }
}

impl<N> Padding<N> {
    /// Creates an inert padding strategy.
    pub fn none() -> Self {
        Self(Paddings::None)
    }

    /// Creates a fixed-length padding strategy.
    ///
    /// The id of the padding token is looked up in the vocabulary when the tokenizer is built.
    pub fn fixed(len: usize, pad: impl AsRef<str>) -> Self
    where
        N: Num,
    {
        Self(Paddings::Fixed {
            len,
            pad_id: N::zero(),
            pad_token: pad.as_ref().into(),
        })
    }

    /// Validates this strategy.
    pub(crate) fn validate(mut self, vocab: &Vocab<N>) -> Result<Self, PaddingError>
    where
        N: Copy,
    {
        if let Paddings::Fixed {
            ref mut pad_id,
            ref pad_token,
            ..
        } = self.0
        {
            *pad_id = vocab
                .id(pad_token.as_str())
                .ok_or(PaddingError::PadToken)?;
        }
        Ok(self)
    }

    /// Pads the encoding.
    pub(crate) fn pad(&self, encoding: Encoding<N>) -> Encoding<N>
    where
        N: Num + Copy,
    {
        match self.0 {
            Paddings::None => encoding,
            Paddings::Fixed {
                len,
                pad_id,
                ref pad_token,
            } => encoding.pad(len, pad_id, N::zero(), pad_token),
        }
    }
}
