use std::sync::Arc;

use num_traits::Num;

use crate::{
    model::Model,
    normalizer::Normalizer,
    post_tokenizer::{
        encoding::Encoding,
        padding::Padding,
        truncation::Truncation,
        PostTokenizer,
    },
    pre_tokenizer::PreTokenizer,
    vocab::Vocab,
};

/// A Bert tokenizer.
///
/// Can be created via the [`Builder`] and consists of a Bert normalizer, a Bert pre-tokenizer, a
/// Bert word piece model and a Bert post-tokenizer including truncation and padding strategies.
///
/// Encoding is infallible, any input degrades to unknown tokens instead.
///
/// [`Builder`]: crate::Builder
#[derive(Debug)]
pub struct Tokenizer<N> {
    pub(crate) normalizer: Normalizer,
    pub(crate) pre_tokenizer: PreTokenizer,
    pub(crate) model: Model<N>,
    pub(crate) post_tokenizer: PostTokenizer<N>,
    pub(crate) truncation: Truncation,
    pub(crate) padding: Padding<N>,
}

impl<N> Tokenizer<N>
where
    N: Num + Copy,
{
    /// Splits the sequence into word pieces without special tokens.
    fn split(&self, sequence: impl AsRef<str>) -> Encoding<N> {
        let sequence = self.normalizer.normalize(sequence);
        self.pre_tokenizer
            .pre_tokenize(sequence.as_str())
            .into_iter()
            .flat_map(|word| self.model.tokenize(word))
            .collect()
    }

    /// Tokenizes the sequence into word pieces.
    ///
    /// Neither truncates nor adds special tokens or padding.
    pub fn tokenize(&self, sequence: impl AsRef<str>) -> Vec<String> {
        self.split(sequence).tokens
    }

    /// Encodes the sequence.
    pub fn encode(&self, sequence: impl AsRef<str>) -> Encoding<N> {
        let encoding = self.split(sequence);
        let encoding = self.truncation.truncate(encoding);
        let encoding = self.post_tokenizer.post_tokenize(encoding);
        self.padding.pad(encoding)
    }

    /// Encodes the pair of sequences.
    pub fn encode_pair(&self, first: impl AsRef<str>, second: impl AsRef<str>) -> Encoding<N> {
        let (first, second) = self
            .truncation
            .truncate_pair(self.split(first), self.split(second));
        let encoding = self.post_tokenizer.post_tokenize_pair(first, second);
        let encoding = self.truncation.clip(encoding);
        self.padding.pad(encoding)
    }

    /// Encodes the sequences.
    pub fn encode_batch(&self, sequences: &[impl AsRef<str>]) -> Vec<Encoding<N>> {
        sequences
            .iter()
            .map(|sequence| self.encode(sequence))
            .collect()
    }

    /// Decodes the encoding with optional cleanup.
    pub fn decode(&self, encoding: &Encoding<N>, cleanup: bool) -> String {
        encoding.decode(
            self.model.unk_token.as_str(),
            self.model.prefix.as_str(),
            cleanup,
        )
    }
}

impl<N> Tokenizer<N> {
    /// Gets the vocabulary.
    pub fn vocab(&self) -> &Arc<Vocab<N>> {
        &self.model.vocab
    }
}
