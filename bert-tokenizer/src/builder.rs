use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    sync::Arc,
};

use displaydoc::Display;
use log::debug;
use num_traits::{FromPrimitive, Num, ToPrimitive};
use thiserror::Error;

use crate::{
    model::{Model, ModelError},
    normalizer::Normalizer,
    post_tokenizer::{
        padding::{Padding, PaddingError},
        truncation::{Truncation, TruncationError},
        PostTokenizer,
        PostTokenizerError,
    },
    pre_tokenizer::PreTokenizer,
    tokenizer::Tokenizer,
    vocab::{Vocab, VocabError},
    SmallString,
};

/// A builder to create a [`Tokenizer`].
pub struct Builder<N> {
    vocab: Arc<Vocab<N>>,
    normalizer: Normalizer,
    unk: SmallString,
    prefix: SmallString,
    max_chars: usize,
    cls: SmallString,
    sep: SmallString,
    truncation: Truncation,
    padding: Padding<N>,
}

/// The potential errors of the [`Builder`].
#[derive(Debug, Display, Error)]
pub enum BuilderError {
    /// Failed to load the vocabulary: {0}
    Vocab(#[from] VocabError),
    /// The vocabulary doesn't contain any tokens
    EmptyVocab,
    /// Failed to build the model: {0}
    Model(#[from] ModelError),
    /// Failed to build the post-tokenizer: {0}
    PostTokenizer(#[from] PostTokenizerError),
    /// Failed to build the truncation strategy: {0}
    Truncation(#[from] TruncationError),
    /// Failed to build the padding strategy: {0}
    Padding(#[from] PaddingError),
}

impl<N> Builder<N>
where
    N: FromPrimitive + ToPrimitive + Copy,
{
    /// Creates a [`Tokenizer`] builder from a vocabulary file.
    ///
    /// The default settings are the same as for [`new()`].
    ///
    /// [`new()`]: Self::new
    pub fn from_file(vocab: impl AsRef<Path>) -> Result<Self, BuilderError> {
        Self::from_reader(BufReader::new(File::open(vocab).map_err(VocabError::from)?))
    }

    /// Creates a [`Tokenizer`] builder from an in-memory vocabulary.
    ///
    /// The default settings are the same as for [`new()`].
    ///
    /// [`new()`]: Self::new
    pub fn from_reader(vocab: impl BufRead) -> Result<Self, BuilderError> {
        Vocab::from_reader(vocab).map(Self::new).map_err(Into::into)
    }
}

impl<N> Builder<N> {
    /// Creates a [`Tokenizer`] builder from a vocabulary.
    ///
    /// The vocabulary can be shared with other tokenizers. The default settings are:
    /// - A normalizer which cleans the text and lowercases.
    /// - A word piece model with `"[UNK]"` unknown token, `"##"` continuing subword prefix and
    /// `100` maximum characters per word.
    /// - A post-tokenizer with `"[CLS]"` class token and `"[SEP]"` separation token.
    /// - No truncation and no padding.
    pub fn new(vocab: impl Into<Arc<Vocab<N>>>) -> Self {
        Self {
            vocab: vocab.into(),
            normalizer: Normalizer::default(),
            unk: "[UNK]".into(),
            prefix: "##".into(),
            max_chars: 100,
            cls: "[CLS]".into(),
            sep: "[SEP]".into(),
            truncation: Truncation::none(),
            padding: Padding::none(),
        }
    }

    /// Configures the normalizer.
    pub fn with_normalizer(mut self, clean_text: bool, lowercase: bool) -> Self {
        self.normalizer = Normalizer::new(clean_text, lowercase);
        self
    }

    /// Configures the word piece model.
    pub fn with_model(
        mut self,
        unk: impl AsRef<str>,
        prefix: impl AsRef<str>,
        max_chars: usize,
    ) -> Self {
        self.unk = unk.as_ref().into();
        self.prefix = prefix.as_ref().into();
        self.max_chars = max_chars;
        self
    }

    /// Configures the post-tokenizer.
    pub fn with_post_tokenizer(mut self, cls: impl AsRef<str>, sep: impl AsRef<str>) -> Self {
        self.cls = cls.as_ref().into();
        self.sep = sep.as_ref().into();
        self
    }

    /// Configures the truncation strategy.
    pub fn with_truncation(mut self, truncation: Truncation) -> Self {
        self.truncation = truncation;
        self
    }

    /// Configures the padding strategy.
    pub fn with_padding(mut self, padding: Padding<N>) -> Self {
        self.padding = padding;
        self
    }

    /// Builds the tokenizer.
    ///
    /// # Errors
    /// Fails on an empty vocabulary, on special tokens which are missing in the vocabulary or on an
    /// invalid truncation strategy.
    pub fn build(self) -> Result<Tokenizer<N>, BuilderError>
    where
        N: Num + Copy,
    {
        if self.vocab.is_empty() {
            return Err(BuilderError::EmptyVocab);
        }
        let post_tokenizer = PostTokenizer::new(self.cls, self.sep, &self.vocab)?;
        let truncation = self.truncation.validate()?;
        let padding = self.padding.validate(&self.vocab)?;
        let model = Model::new(self.vocab, self.unk, self.prefix, self.max_chars)?;
        debug!(
            "Built tokenizer for {} tokens with {:?}.",
            model.vocab.len(),
            truncation,
        );

        Ok(Tokenizer {
            normalizer: self.normalizer,
            pre_tokenizer: PreTokenizer,
            model,
            post_tokenizer,
            truncation,
            padding,
        })
    }
}
