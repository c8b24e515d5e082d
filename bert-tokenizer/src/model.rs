use std::sync::Arc;

use displaydoc::Display;
use thiserror::Error;

use crate::{vocab::Vocab, SmallString};

/// A token with its id.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<N> {
    pub(crate) value: String,
    pub(crate) id: N,
}

/// A Bert word piece model.
#[derive(Debug)]
pub(crate) struct Model<N> {
    pub(crate) vocab: Arc<Vocab<N>>,
    pub(crate) unk_id: N,
    pub(crate) unk_token: SmallString,
    pub(crate) prefix: SmallString,
    pub(crate) max_chars: usize,
}

/// The potential errors of the word piece model.
#[derive(Debug, Display, Error, PartialEq)]
pub enum ModelError {
    /// Missing the unknown token in the vocabulary
    UnkToken,
}

impl<N> Model<N>
where
    N: Copy,
{
    /// Creates a validated word piece model.
    pub(crate) fn new(
        vocab: Arc<Vocab<N>>,
        unk_token: SmallString,
        prefix: SmallString,
        max_chars: usize,
    ) -> Result<Self, ModelError> {
        let unk_id = vocab.id(unk_token.as_str()).ok_or(ModelError::UnkToken)?;

        Ok(Self {
            vocab,
            unk_id,
            unk_token,
            prefix,
            max_chars,
        })
    }

    fn unk(&self) -> Token<N> {
        Token {
            value: self.unk_token.to_string(),
            id: self.unk_id,
        }
    }

    /// Splits the word greedily into the longest known word pieces.
    ///
    /// Returns `None` if some part of the word is not covered by the vocabulary.
    fn split(&self, word: &str) -> Option<Vec<Token<N>>> {
        let piece = self.vocab.longest_prefix(word)?;
        let mut tokens = vec![Token {
            value: piece.to_string(),
            id: self.vocab.id(piece)?,
        }];

        let mut rest = &word[piece.len()..];
        while !rest.is_empty() {
            let candidate = format!("{}{}", self.prefix, rest);
            // a continuing piece must cover at least one char of the word itself
            let piece = self
                .vocab
                .longest_prefix(candidate.as_str())
                .filter(|piece| piece.len() > self.prefix.len())?;
            tokens.push(Token {
                value: piece.to_string(),
                id: self.vocab.id(piece)?,
            });
            rest = &rest[piece.len() - self.prefix.len()..];
        }

        Some(tokens)
    }

    /// Tokenizes the word.
    ///
    /// A word is either fully split into known word pieces or replaced by a single unknown token.
    pub(crate) fn tokenize(&self, word: &str) -> Vec<Token<N>> {
        if let Some(id) = self.vocab.id(word) {
            return vec![Token {
                value: word.to_string(),
                id,
            }];
        }
        if word.chars().count() > self.max_chars {
            return vec![self.unk()];
        }

        self.split(word).unwrap_or_else(|| vec![self.unk()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(tokens: &[&str]) -> Model<u32> {
        let vocab = Vocab::new(tokens.iter().copied()).unwrap();
        Model::new(Arc::new(vocab), "[UNK]".into(), "##".into(), 100).unwrap()
    }

    fn values(tokens: Vec<Token<u32>>) -> Vec<String> {
        tokens.into_iter().map(|token| token.value).collect()
    }

    #[test]
    fn test_whole_word() {
        let model = model(&["[UNK]", "play", "##ing"]);
        assert_eq!(
            model.tokenize("play"),
            [Token {
                value: "play".into(),
                id: 1
            }],
        );
    }

    #[test]
    fn test_word_pieces() {
        let model = model(&["[UNK]", "play", "##ing"]);
        assert_eq!(
            model.tokenize("playing"),
            [
                Token {
                    value: "play".into(),
                    id: 1
                },
                Token {
                    value: "##ing".into(),
                    id: 2
                },
            ],
        );
    }

    #[test]
    fn test_longest_match_first() {
        let model = model(&["[UNK]", "un", "unwant", "##want", "##ed", "##wanted"]);
        assert_eq!(values(model.tokenize("unwanted")), ["unwant", "##ed"]);
        assert_eq!(values(model.tokenize("unwantwanted")), ["unwant", "##wanted"]);
    }

    #[test]
    fn test_unknown() {
        let model = model(&["[UNK]", "play", "##ing"]);
        assert_eq!(
            model.tokenize("xyz"),
            [Token {
                value: "[UNK]".into(),
                id: 0
            }],
        );
        // partial pieces are discarded
        assert_eq!(values(model.tokenize("playful")), ["[UNK]"]);
        assert_eq!(values(model.tokenize("ingplay")), ["[UNK]"]);
    }

    #[test]
    fn test_bare_prefix() {
        let model = model(&["[UNK]", "a", "##", "#"]);
        assert_eq!(values(model.tokenize("ab")), ["[UNK]"]);
    }

    #[test]
    fn test_max_chars() {
        let vocab = Vocab::new(vec!["[UNK]", "a", "##a"]).unwrap();
        let model = Model::<u32>::new(Arc::new(vocab), "[UNK]".into(), "##".into(), 3).unwrap();
        assert_eq!(values(model.tokenize("aaa")), ["a", "##a", "##a"]);
        assert_eq!(values(model.tokenize("aaaa")), ["[UNK]"]);
    }

    #[test]
    fn test_multibyte() {
        let model = model(&["[UNK]", "ü", "##ber", "##b"]);
        assert_eq!(values(model.tokenize("über")), ["ü", "##ber"]);
        assert_eq!(values(model.tokenize("übx")), ["[UNK]"]);
    }

    #[test]
    fn test_whole_words_only() {
        let model = model(&["[UNK]", "hello", "world"]);
        assert_eq!(values(model.tokenize("hello")), ["hello"]);
        assert_eq!(values(model.tokenize("helloworld")), ["[UNK]"]);
    }

    #[test]
    fn test_invalid() {
        let vocab = Arc::new(Vocab::<u32>::new(vec!["a", "##b"]).unwrap());
        assert_eq!(
            Model::new(vocab, "[UNK]".into(), "##".into(), 100).unwrap_err(),
            ModelError::UnkToken,
        );
    }
}
