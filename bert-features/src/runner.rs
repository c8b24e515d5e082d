use std::error::Error as StdError;

use displaydoc::Display;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use crate::{features::Features, ndarray::ArrayD};

/// The potential errors of a model runner.
#[derive(Debug, Display, Error)]
pub enum RunnerError {
    /// The features don't fit the model inputs: expected token size {expected}, got {actual}
    TokenSize { expected: usize, actual: usize },
    /// Failed to run the model: {0}
    Model(#[source] Box<dyn StdError + Send + Sync>),
}

/// A model which predicts from batched features.
///
/// The features are passed as named arrays in the model input layout, see [`Features::named()`].
#[cfg_attr(test, automock)]
pub trait Runner {
    /// Runs the model on the batched features.
    fn run(&self, features: &Features) -> Result<ArrayD<f32>, RunnerError>;
}
