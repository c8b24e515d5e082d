use std::iter::{repeat, FromIterator};

use num_traits::Num;

use crate::model::Token;

/// An encoded sequence.
#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Encoding<N> {
    /// The IDs of the tokens.
    pub(crate) ids: Vec<N>,
    /// The type of the IDs.
    pub(crate) type_ids: Vec<N>,
    /// The tokenized sequence.
    pub(crate) tokens: Vec<String>,
    /// The mask identifying special tokens.
    pub(crate) special_tokens_mask: Vec<N>,
    /// The mask identifying padding tokens.
    pub(crate) attention_mask: Vec<N>,
}

#[doc(hidden)]
impl<N> FromIterator<Token<N>> for Encoding<N>
where
    N: Num + Copy,
{
    fn from_iter<I: IntoIterator<Item = Token<N>>>(iter: I) -> Self {
        let (tokens, ids): (Vec<_>, Vec<_>) = iter
            .into_iter()
            .map(|token| (token.value, token.id))
            .unzip();
        let len = ids.len();

        Self {
            ids,
            type_ids: vec![N::zero(); len],
            tokens,
            special_tokens_mask: vec![N::zero(); len],
            attention_mask: vec![N::one(); len],
        }
    }
}

impl<N> Encoding<N> {
    /// Gets the total length.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Checks whether this is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Gets the ids.
    pub fn ids(&self) -> &[N] {
        self.ids.as_slice()
    }

    /// Gets the type ids.
    pub fn type_ids(&self) -> &[N] {
        self.type_ids.as_slice()
    }

    /// Gets the tokens.
    pub fn tokens(&self) -> &[String] {
        self.tokens.as_slice()
    }

    /// Gets the special tokens mask.
    pub fn special_tokens_mask(&self) -> &[N] {
        self.special_tokens_mask.as_slice()
    }

    /// Gets the attention mask.
    pub fn attention_mask(&self) -> &[N] {
        self.attention_mask.as_slice()
    }

    /// Splits into the ids, the attention mask and the type ids.
    pub fn into_parts(self) -> (Vec<N>, Vec<N>, Vec<N>) {
        (self.ids, self.attention_mask, self.type_ids)
    }

    /// Appends the other encoding.
    pub(crate) fn merge_with(mut self, other: Encoding<N>) -> Self {
        self.ids.extend(other.ids);
        self.type_ids.extend(other.type_ids);
        self.tokens.extend(other.tokens);
        self.special_tokens_mask.extend(other.special_tokens_mask);
        self.attention_mask.extend(other.attention_mask);

        self
    }

    /// Truncates to a maximum length by dropping the tail.
    pub(crate) fn truncate(mut self, len: usize) -> Self {
        self.ids.truncate(len);
        self.type_ids.truncate(len);
        self.tokens.truncate(len);
        self.special_tokens_mask.truncate(len);
        self.attention_mask.truncate(len);

        self
    }

    /// Pads to a minimum length.
    pub(crate) fn pad(mut self, len: usize, pad_id: N, pad_type_id: N, pad_token: &str) -> Self
    where
        N: Num + Copy,
    {
        if self.len() >= len {
            return self;
        }
        let pad_len = len - self.len();

        self.ids.extend(repeat(pad_id).take(pad_len));
        self.type_ids.extend(repeat(pad_type_id).take(pad_len));
        self.tokens.extend(repeat(pad_token.to_string()).take(pad_len));
        self.special_tokens_mask.extend(repeat(N::one()).take(pad_len));
        self.attention_mask.extend(repeat(N::zero()).take(pad_len));

        self
    }

    /// Decodes with optional cleanup.
    ///
    /// Special tokens are always skipped, unknown tokens only on cleanup.
    pub(crate) fn decode(&self, unk: &str, prefix: &str, cleanup: bool) -> String
    where
        N: Num,
    {
        let tokens = self
            .tokens
            .iter()
            .zip(self.special_tokens_mask.iter())
            .filter_map(|(token, special)| {
                if special.is_zero() && (!cleanup || token != unk) {
                    Some(token.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();
        let mut string = tokens.join(" ").replace(format!(" {}", prefix).as_str(), "");
        if cleanup {
            string = string
                .replace(" .", ".")
                .replace(" ?", "?")
                .replace(" !", "!")
                .replace(" ,", ",")
                .replace(" ' ", "'")
                .replace(" n't", "n't")
                .replace(" 'm", "'m")
                .replace(" do not", " don't")
                .replace(" 's", "'s")
                .replace(" 've", "'ve")
                .replace(" 're", "'re");
        }

        string
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoding() -> Encoding<u32> {
        vec![
            Token {
                value: "hello".into(),
                id: 5,
            },
            Token {
                value: "world".into(),
                id: 6,
            },
            Token {
                value: "!".into(),
                id: 7,
            },
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_from_tokens() {
        let expected = Encoding {
            ids: vec![5, 6, 7],
            type_ids: vec![0, 0, 0],
            tokens: vec!["hello".into(), "world".into(), "!".into()],
            special_tokens_mask: vec![0, 0, 0],
            attention_mask: vec![1, 1, 1],
        };
        assert_eq!(encoding(), expected);
    }

    #[test]
    fn test_merge() {
        let merged = encoding().truncate(1).merge_with(encoding().pad(4, 0, 0, "[PAD]"));
        let expected = Encoding {
            ids: vec![5, 5, 6, 7, 0],
            type_ids: vec![0, 0, 0, 0, 0],
            tokens: vec![
                "hello".into(),
                "hello".into(),
                "world".into(),
                "!".into(),
                "[PAD]".into(),
            ],
            special_tokens_mask: vec![0, 0, 0, 0, 1],
            attention_mask: vec![1, 1, 1, 1, 0],
        };
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(encoding().truncate(5).len(), 3);
        assert_eq!(encoding().truncate(3).len(), 3);
        assert_eq!(encoding().truncate(2).tokens(), ["hello", "world"]);
        assert!(encoding().truncate(0).is_empty());
    }

    #[test]
    fn test_pad() {
        let padded = encoding().pad(5, 0, 0, "[PAD]");
        let expected = Encoding {
            ids: vec![5, 6, 7, 0, 0],
            type_ids: vec![0, 0, 0, 0, 0],
            tokens: vec![
                "hello".into(),
                "world".into(),
                "!".into(),
                "[PAD]".into(),
                "[PAD]".into(),
            ],
            special_tokens_mask: vec![0, 0, 0, 1, 1],
            attention_mask: vec![1, 1, 1, 0, 0],
        };
        assert_eq!(padded, expected);
        assert_eq!(encoding().pad(2, 0, 0, "[PAD]"), encoding());
    }

    #[test]
    fn test_decode() {
        let encoding = Encoding::<u32> {
            ids: vec![2, 9, 10, 1, 11, 3, 0],
            type_ids: vec![0; 7],
            tokens: vec![
                "[CLS]".into(),
                "play".into(),
                "##ing".into(),
                "[UNK]".into(),
                "!".into(),
                "[SEP]".into(),
                "[PAD]".into(),
            ],
            special_tokens_mask: vec![1, 0, 0, 0, 0, 1, 1],
            attention_mask: vec![1, 1, 1, 1, 1, 1, 0],
        };
        assert_eq!(encoding.decode("[UNK]", "##", false), "playing [UNK] !");
        assert_eq!(encoding.decode("[UNK]", "##", true), "playing!");
    }
}
