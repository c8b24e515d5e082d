pub mod encoding;
pub mod padding;
pub mod truncation;

use std::iter::once;

use displaydoc::Display;
use num_traits::Num;
use thiserror::Error;

use crate::{post_tokenizer::encoding::Encoding, vocab::Vocab, SmallString};

/// The number of special tokens added to a single sequence.
pub(crate) const ADDED_TOKENS: usize = 2;

/// The number of special tokens added to a pair of sequences.
pub(crate) const ADDED_TOKENS_PAIR: usize = 3;

/// A Bert post-tokenizer.
///
/// Wraps a single sequence as `[CLS] a [SEP]` and a pair of sequences as `[CLS] a [SEP] b [SEP]`.
#[derive(Debug)]
pub(crate) struct PostTokenizer<N> {
    cls_id: N,
    cls_token: SmallString,
    sep_id: N,
    sep_token: SmallString,
}

/// The potential errors of the post-tokenizer.
#[derive(Debug, Display, Error, PartialEq)]
pub enum PostTokenizerError {
    /// Missing the class token in the vocabulary
    ClsToken,
    /// Missing the separation token in the vocabulary
    SepToken,
}

impl<N> PostTokenizer<N>
where
    N: Num + Copy,
{
    /// Creates a validated post-tokenizer.
    pub(crate) fn new(
        cls_token: SmallString,
        sep_token: SmallString,
        vocab: &Vocab<N>,
    ) -> Result<Self, PostTokenizerError> {
        let cls_id = vocab
            .id(cls_token.as_str())
            .ok_or(PostTokenizerError::ClsToken)?;
        let sep_id = vocab
            .id(sep_token.as_str())
            .ok_or(PostTokenizerError::SepToken)?;

        Ok(Self {
            cls_id,
            cls_token,
            sep_id,
            sep_token,
        })
    }

    /// Post-tokenizes a single sequence.
    pub(crate) fn post_tokenize(&self, encoding: Encoding<N>) -> Encoding<N> {
        let ids = once(self.cls_id)
            .chain(encoding.ids)
            .chain(once(self.sep_id))
            .collect();
        let type_ids = once(N::zero())
            .chain(encoding.type_ids)
            .chain(once(N::zero()))
            .collect();
        let tokens = once(self.cls_token.to_string())
            .chain(encoding.tokens)
            .chain(once(self.sep_token.to_string()))
            .collect();
        let special_tokens_mask = once(N::one())
            .chain(encoding.special_tokens_mask)
            .chain(once(N::one()))
            .collect();
        let attention_mask = once(N::one())
            .chain(encoding.attention_mask)
            .chain(once(N::one()))
            .collect();

        Encoding {
            ids,
            type_ids,
            tokens,
            special_tokens_mask,
            attention_mask,
        }
    }

    /// Post-tokenizes a pair of sequences.
    ///
    /// The second sequence and its separation token get the type id `1`.
    pub(crate) fn post_tokenize_pair(
        &self,
        first: Encoding<N>,
        second: Encoding<N>,
    ) -> Encoding<N> {
        let len = second.len() + 1;
        let second = Encoding {
            ids: second.ids.into_iter().chain(once(self.sep_id)).collect(),
            type_ids: vec![N::one(); len],
            tokens: second
                .tokens
                .into_iter()
                .chain(once(self.sep_token.to_string()))
                .collect(),
            special_tokens_mask: second
                .special_tokens_mask
                .into_iter()
                .chain(once(N::one()))
                .collect(),
            attention_mask: second
                .attention_mask
                .into_iter()
                .chain(once(N::one()))
                .collect(),
        };

        self.post_tokenize(first).merge_with(second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Token;

    fn encoding(tokens: &[(&str, u32)]) -> Encoding<u32> {
        tokens
            .iter()
            .map(|&(value, id)| Token {
                value: value.into(),
                id,
            })
            .collect()
    }

    fn post_tokenizer() -> PostTokenizer<u32> {
        let vocab = Vocab::new(vec!["[PAD]", "[UNK]", "[CLS]", "[SEP]"]).unwrap();
        PostTokenizer::new("[CLS]".into(), "[SEP]".into(), &vocab).unwrap()
    }

    #[test]
    fn test_post_tokenize() {
        let encoding = post_tokenizer().post_tokenize(encoding(&[("a", 7), ("b", 8)]));
        assert_eq!(encoding.ids(), [2, 7, 8, 3]);
        assert_eq!(encoding.tokens(), ["[CLS]", "a", "b", "[SEP]"]);
        assert_eq!(encoding.type_ids(), [0, 0, 0, 0]);
        assert_eq!(encoding.special_tokens_mask(), [1, 0, 0, 1]);
        assert_eq!(encoding.attention_mask(), [1, 1, 1, 1]);
    }

    #[test]
    fn test_post_tokenize_empty() {
        let encoding = post_tokenizer().post_tokenize(encoding(&[]));
        assert_eq!(encoding.ids(), [2, 3]);
        assert_eq!(encoding.attention_mask(), [1, 1]);
    }

    #[test]
    fn test_post_tokenize_pair() {
        let encoding = post_tokenizer()
            .post_tokenize_pair(encoding(&[("a", 7), ("b", 8)]), encoding(&[("c", 9)]));
        assert_eq!(encoding.ids(), [2, 7, 8, 3, 9, 3]);
        assert_eq!(encoding.tokens(), ["[CLS]", "a", "b", "[SEP]", "c", "[SEP]"]);
        assert_eq!(encoding.type_ids(), [0, 0, 0, 0, 1, 1]);
        assert_eq!(encoding.special_tokens_mask(), [1, 0, 0, 1, 0, 1]);
        assert_eq!(encoding.attention_mask(), [1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_missing_tokens() {
        let vocab = Vocab::<u32>::new(vec!["[UNK]", "[SEP]"]).unwrap();
        assert_eq!(
            PostTokenizer::new("[CLS]".into(), "[SEP]".into(), &vocab).unwrap_err(),
            PostTokenizerError::ClsToken,
        );
        let vocab = Vocab::<u32>::new(vec!["[UNK]", "[CLS]"]).unwrap();
        assert_eq!(
            PostTokenizer::new("[CLS]".into(), "[SEP]".into(), &vocab).unwrap_err(),
            PostTokenizerError::SepToken,
        );
    }
}
