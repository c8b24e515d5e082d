use std::{
    fs::File,
    io::{BufReader, Error as IoError, Read},
    path::{Path, PathBuf},
};

use displaydoc::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The potential errors of the configuration.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    /// The token size must be at least two to allow for special tokens
    TokenSize,
    /// Failed to read the configuration: {0}
    Io(#[from] IoError),
    /// Failed to parse the configuration: {0}
    Json(#[from] serde_json::Error),
}

/// The configuration of a feature encoder.
///
/// Missing fields of a deserialized configuration take their defaults.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    pub(crate) vocab: PathBuf,
    pub(crate) token_size: usize,
    pub(crate) lowercase: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vocab: PathBuf::from(Self::DEFAULT_VOCAB),
            token_size: Self::DEFAULT_TOKEN_SIZE,
            lowercase: true,
        }
    }
}

impl Config {
    /// The default path of the vocabulary file.
    pub const DEFAULT_VOCAB: &'static str = "vocab.txt";

    /// The default number of tokens per feature.
    pub const DEFAULT_TOKEN_SIZE: usize = 128;

    /// The minimum number of tokens per feature, which covers the class and separation tokens.
    pub const MIN_TOKEN_SIZE: usize = 2;

    /// Reads a validated configuration from json.
    pub fn from_reader(reader: impl Read) -> Result<Self, ConfigError> {
        let config = serde_json::from_reader::<_, Self>(reader)?;
        config.validate()
    }

    /// Reads a validated configuration from a json file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Sets the path of the vocabulary file.
    ///
    /// Defaults to [`Config::DEFAULT_VOCAB`].
    pub fn with_vocab(mut self, vocab: impl Into<PathBuf>) -> Self {
        self.vocab = vocab.into();
        self
    }

    /// Sets the number of tokens per feature, which includes the special tokens.
    ///
    /// Defaults to [`Config::DEFAULT_TOKEN_SIZE`].
    ///
    /// # Errors
    /// Fails if `size` is less than two.
    pub fn with_token_size(mut self, size: usize) -> Result<Self, ConfigError> {
        self.token_size = size;
        self.validate()
    }

    /// Whether the tokenizer lowercases.
    ///
    /// Defaults to `true`.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.token_size >= Self::MIN_TOKEN_SIZE {
            Ok(self)
        } else {
            Err(ConfigError::TokenSize)
        }
    }

    /// Gets the path of the vocabulary file.
    pub fn vocab(&self) -> &Path {
        self.vocab.as_path()
    }

    /// Gets the number of tokens per feature.
    pub fn token_size(&self) -> usize {
        self.token_size
    }

    /// Checks whether the tokenizer lowercases.
    pub fn lowercase(&self) -> bool {
        self.lowercase
    }
}
