use std::{io::BufRead, sync::Arc};

use bert_tokenizer::{Builder, BuilderError, Padding, Tokenizer, Truncation, Vocab};
use displaydoc::Display;
use log::debug;
use thiserror::Error;

#[cfg(feature = "multithreaded")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::{config::Config, feature::Feature, features::Features};

/// The potential errors of the feature encoder.
#[derive(Debug, Display, Error)]
pub enum EncoderError {
    /// Failed to build the tokenizer: {0}
    Tokenizer(#[from] BuilderError),
}

/// A pre-configured Bert tokenizer which encodes texts into fixed-length features.
#[derive(Debug)]
pub struct FeatureEncoder {
    tokenizer: Tokenizer<i64>,
    token_size: usize,
}

impl FeatureEncoder {
    /// Creates a feature encoder from the vocabulary file of the configuration.
    pub fn from_config(config: &Config) -> Result<Self, EncoderError> {
        Self::build(Builder::from_file(config.vocab())?, config)
    }

    /// Creates a feature encoder from a vocabulary of newline separated tokens.
    ///
    /// The vocabulary path of the configuration is ignored.
    pub fn from_reader(vocab: impl BufRead, config: &Config) -> Result<Self, EncoderError> {
        Self::build(Builder::from_reader(vocab)?, config)
    }

    /// Creates a feature encoder from a shared vocabulary.
    ///
    /// The vocabulary path of the configuration is ignored.
    pub fn with_vocab(
        vocab: impl Into<Arc<Vocab<i64>>>,
        config: &Config,
    ) -> Result<Self, EncoderError> {
        Self::build(Builder::new(vocab), config)
    }

    fn build(builder: Builder<i64>, config: &Config) -> Result<Self, EncoderError> {
        let token_size = config.token_size();
        let tokenizer = builder
            .with_normalizer(true, config.lowercase())
            .with_model("[UNK]", "##", 100)
            .with_post_tokenizer("[CLS]", "[SEP]")
            .with_truncation(Truncation::fixed(token_size))
            .with_padding(Padding::fixed(token_size, "[PAD]"))
            .build()?;
        debug!(
            "Built feature encoder with token size {} and lowercase {}.",
            token_size,
            config.lowercase(),
        );

        Ok(Self {
            tokenizer,
            token_size,
        })
    }

    /// Gets the number of tokens per feature.
    pub fn token_size(&self) -> usize {
        self.token_size
    }

    /// Gets the vocabulary.
    pub fn vocab(&self) -> &Arc<Vocab<i64>> {
        self.tokenizer.vocab()
    }

    /// Gets the underlying tokenizer.
    pub fn tokenizer(&self) -> &Tokenizer<i64> {
        &self.tokenizer
    }

    /// Tokenizes the text into word pieces without special tokens.
    pub fn tokenize(&self, text: impl AsRef<str>) -> Vec<String> {
        self.tokenizer.tokenize(text)
    }

    /// Encodes the text into a feature.
    pub fn encode_one(&self, text: impl AsRef<str>) -> Feature {
        self.tokenizer.encode(text).into()
    }

    /// Encodes the pair of texts into a feature.
    pub fn encode_pair(&self, first: impl AsRef<str>, second: impl AsRef<str>) -> Feature {
        self.tokenizer.encode_pair(first, second).into()
    }

    /// Encodes the texts into features in input order.
    pub fn encode<S>(&self, texts: &[S]) -> Vec<Feature>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(not(feature = "multithreaded"))]
        let features = texts.iter().map(|text| self.encode_one(text)).collect();
        #[cfg(feature = "multithreaded")]
        let features = texts.par_iter().map(|text| self.encode_one(text)).collect();

        features
    }

    /// Encodes the pairs of texts into features in input order.
    pub fn encode_pairs<S, T>(&self, pairs: &[(S, T)]) -> Vec<Feature>
    where
        S: AsRef<str> + Sync,
        T: AsRef<str> + Sync,
    {
        #[cfg(not(feature = "multithreaded"))]
        let features = pairs
            .iter()
            .map(|(first, second)| self.encode_pair(first, second))
            .collect();
        #[cfg(feature = "multithreaded")]
        let features = pairs
            .par_iter()
            .map(|(first, second)| self.encode_pair(first, second))
            .collect();

        features
    }

    /// Encodes the texts into batched features.
    pub fn features<S>(&self, texts: &[S]) -> Features
    where
        S: AsRef<str> + Sync,
    {
        Features::new(&self.encode(texts), self.token_size)
    }

    /// Encodes the pairs of texts into batched features.
    pub fn pair_features<S, T>(&self, pairs: &[(S, T)]) -> Features
    where
        S: AsRef<str> + Sync,
        T: AsRef<str> + Sync,
    {
        Features::new(&self.encode_pairs(pairs), self.token_size)
    }
}
