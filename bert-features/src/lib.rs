#![cfg_attr(doc, forbid(broken_intra_doc_links, private_intra_doc_links))]
//! The Bert feature encoder prepares model inputs from texts.
//!
//! Texts are anything string-like and can also be single words or snippets. Each text is
//! tokenized into word pieces, wrapped in class and separation tokens, truncated and padded to a
//! fixed number of tokens. The resulting features are the token ids, the attention mask and the
//! type ids, which can be stacked into batched arrays in the layout of the model inputs.
//!
//! ```no_run
//! use bert_features::{Config, FeatureEncoder};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default()
//!         .with_vocab("vocab.txt")
//!         .with_token_size(64)?
//!         .with_lowercase(true);
//!     let encoder = FeatureEncoder::from_config(&config)?;
//!
//!     let features = encoder.encode(&["This is a sequence.", "And another one!"]);
//!     assert_eq!(features[0].len(), 64);
//!
//!     let features = encoder.features(&["This is a sequence.", "And another one!"]);
//!     assert_eq!(features.input_ids.shape(), [2, 64]);
//!
//!     Ok(())
//! }
//! ```

mod config;
mod encoder;
mod feature;
mod features;
mod pipeline;
mod runner;

pub use crate::{
    config::{Config, ConfigError},
    encoder::{EncoderError, FeatureEncoder},
    feature::Feature,
    features::{Features, InputIds, InputMask, InputTypeIds},
    pipeline::{Pipeline, PipelineError},
    runner::{Runner, RunnerError},
};
pub use bert_tokenizer::{Vocab, VocabError};
pub use ndarray;
