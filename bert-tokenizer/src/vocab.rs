use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader, Error as IoError},
    path::Path,
};

use displaydoc::Display;
use log::{debug, warn};
use num_traits::{FromPrimitive, ToPrimitive};
use thiserror::Error;

/// A word piece vocabulary.
///
/// Maps tokens to ids and ids back to tokens. The ids are assigned in insertion order starting at
/// zero, which for a vocabulary file means that the token on line `i` gets the id `i`. A duplicate
/// token takes over the newer id and leaves its former id vacant, so the mapping stays one-to-one.
///
/// The vocabulary is read-only once built. It can be shared between several tokenizers via an
/// [`Arc`](std::sync::Arc).
#[derive(Clone, Debug)]
pub struct Vocab<N> {
    ids: HashMap<String, N>,
    tokens: Vec<Option<String>>,
}

/// The potential errors of the vocabulary.
#[derive(Debug, Display, Error)]
pub enum VocabError {
    /// Failed to read the vocabulary: {0}
    Io(#[from] IoError),
    /// The number of tokens exceeds the numerical range of the ids
    Overflow,
}

impl<N> Default for Vocab<N> {
    fn default() -> Self {
        Self {
            ids: HashMap::new(),
            tokens: Vec::new(),
        }
    }
}

impl<N> Vocab<N>
where
    N: FromPrimitive + ToPrimitive + Copy,
{
    /// Creates a vocabulary from an ordered list of tokens.
    pub fn new(tokens: impl IntoIterator<Item = impl Into<String>>) -> Result<Self, VocabError> {
        tokens
            .into_iter()
            .try_fold(Self::default(), |mut vocab, token| {
                vocab.add(token)?;
                Ok(vocab)
            })
    }

    /// Creates a vocabulary from newline separated tokens.
    ///
    /// Leading and trailing whitespace of each line is trimmed.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, VocabError> {
        let vocab = reader
            .lines()
            .try_fold(Self::default(), |mut vocab, line| {
                vocab.add(line?.trim())?;
                Ok::<_, VocabError>(vocab)
            })?;
        debug!("Loaded vocabulary with {} tokens.", vocab.len());

        Ok(vocab)
    }

    /// Creates a vocabulary from a file of newline separated tokens.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, VocabError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Appends the token with the next available id.
    ///
    /// Not meant to be used once the vocabulary is shared.
    pub fn add(&mut self, token: impl Into<String>) -> Result<N, VocabError> {
        let token = token.into();
        let idx = self.tokens.len();
        let id = N::from_usize(idx).ok_or(VocabError::Overflow)?;

        if let Some(vacant) = self
            .ids
            .insert(token.clone(), id)
            .and_then(|vacant| vacant.to_usize())
        {
            warn!(
                "Duplicate token {:?} in the vocabulary moves from id {} to id {}.",
                token, vacant, idx,
            );
            self.tokens[vacant] = None;
        }
        self.tokens.push(Some(token));

        Ok(id)
    }
}

impl<N> Vocab<N> {
    /// Gets the number of distinct tokens.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Checks whether there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Checks whether the token exists.
    pub fn contains(&self, token: &str) -> bool {
        self.ids.contains_key(token)
    }

    /// Iterates over the tokens in arbitrary order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.ids.keys().map(String::as_str)
    }

    /// Gets the id of the token, if it exists.
    pub fn id(&self, token: &str) -> Option<N>
    where
        N: Copy,
    {
        self.ids.get(token).copied()
    }

    /// Gets the token of the id, if it exists.
    pub fn token(&self, id: N) -> Option<&str>
    where
        N: ToPrimitive,
    {
        id.to_usize()
            .and_then(|idx| self.tokens.get(idx))
            .and_then(|token| token.as_deref())
    }

    /// Gets the longest prefix of the text which exists as a token.
    ///
    /// The prefixes are probed from the longest to the shortest on char boundaries.
    pub fn longest_prefix<'t>(&self, text: &'t str) -> Option<&'t str> {
        text.char_indices()
            .rev()
            .map(|(idx, c)| &text[..idx + c.len_utf8()])
            .find(|prefix| self.ids.contains_key(*prefix))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn vocab(tokens: &[&str]) -> Vocab<i32> {
        Vocab::new(tokens.iter().copied()).unwrap()
    }

    #[test]
    fn test_ids_by_insertion_order() {
        let vocab = vocab(&["[PAD]", "[UNK]", "play", "##ing"]);
        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.id("[PAD]"), Some(0));
        assert_eq!(vocab.id("play"), Some(2));
        assert_eq!(vocab.id("##ing"), Some(3));
        assert_eq!(vocab.token(1), Some("[UNK]"));
    }

    #[test]
    fn test_bijection() {
        let tokens = ["[PAD]", "a", "ab", "abc", "##c", "über"];
        let vocab = vocab(&tokens);
        for id in 0..vocab.len() as i32 {
            assert_eq!(vocab.id(vocab.token(id).unwrap()), Some(id));
        }
        for token in tokens.iter() {
            assert_eq!(vocab.token(vocab.id(token).unwrap()), Some(*token));
        }
    }

    #[test]
    fn test_missing() {
        let vocab = vocab(&["a"]);
        assert_eq!(vocab.id("b"), None);
        assert_eq!(vocab.token(1), None);
        assert_eq!(vocab.token(-1), None);
        assert!(!vocab.contains("b"));
    }

    #[test]
    fn test_longest_prefix() {
        let vocab = vocab(&["a", "ab", "abc"]);
        assert_eq!(vocab.longest_prefix("abcd"), Some("abc"));
        assert_eq!(vocab.longest_prefix("abd"), Some("ab"));
        assert_eq!(vocab.longest_prefix("a"), Some("a"));
        assert_eq!(vocab.longest_prefix("xyz"), None);
        assert_eq!(vocab.longest_prefix(""), None);
    }

    #[test]
    fn test_longest_prefix_multibyte() {
        let vocab = vocab(&["ü", "übe"]);
        assert_eq!(vocab.longest_prefix("über"), Some("übe"));
        assert_eq!(vocab.longest_prefix("üx"), Some("ü"));
        assert_eq!(vocab.longest_prefix("ö"), None);
    }

    #[test]
    fn test_duplicates() {
        let vocab = vocab(&["a", "b", "a"]);
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.id("a"), Some(2));
        assert_eq!(vocab.token(0), None);
        assert_eq!(vocab.token(1), Some("b"));
        assert_eq!(vocab.token(2), Some("a"));
    }

    #[test]
    fn test_add() {
        let mut vocab = vocab(&["a", "b"]);
        assert_eq!(vocab.add("c").unwrap(), 2);
        assert_eq!(vocab.id("c"), Some(2));
        assert_eq!(vocab.token(2), Some("c"));
    }

    #[test]
    fn test_overflow() {
        let mut vocab = Vocab::<u8>::new((0..=u8::MAX).map(|i| i.to_string())).unwrap();
        assert_eq!(vocab.len(), 256);
        assert!(matches!(vocab.add("overflow"), Err(VocabError::Overflow)));
    }

    #[test]
    fn test_from_reader() {
        let vocab = Vocab::<u32>::from_reader(Cursor::new("[PAD]\n  [UNK] \nhello\r\n##s\n")).unwrap();
        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.id("[UNK]"), Some(1));
        assert_eq!(vocab.id("hello"), Some(2));
        assert_eq!(vocab.id("##s"), Some(3));
    }

    #[test]
    fn test_from_file() {
        let vocab = Vocab::<u32>::from_file(test_utils::vocab().unwrap()).unwrap();
        assert_eq!(vocab.id("[PAD]"), Some(0));
        assert_eq!(vocab.id("[UNK]"), Some(1));
        assert_eq!(vocab.id("[CLS]"), Some(2));
        assert_eq!(vocab.id("[SEP]"), Some(3));
    }

    #[test]
    fn test_from_missing_file() {
        assert!(matches!(
            Vocab::<u32>::from_file("missing/vocab.txt"),
            Err(VocabError::Io(_)),
        ));
    }
}
