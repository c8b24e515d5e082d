use displaydoc::Display;
use log::debug;
use thiserror::Error;

use crate::{
    encoder::FeatureEncoder,
    features::Features,
    ndarray::ArrayD,
    runner::{Runner, RunnerError},
};

/// The potential errors of the pipeline.
#[derive(Debug, Display, Error)]
pub enum PipelineError {
    /// The model runner failed: {0}
    Runner(#[from] RunnerError),
}

/// A pipeline which encodes texts into features and runs a model on them.
pub struct Pipeline<R> {
    encoder: FeatureEncoder,
    runner: R,
}

impl<R> Pipeline<R>
where
    R: Runner,
{
    /// Creates a pipeline from a feature encoder and a model runner.
    pub fn new(encoder: FeatureEncoder, runner: R) -> Self {
        Self { encoder, runner }
    }

    /// Gets the feature encoder.
    pub fn encoder(&self) -> &FeatureEncoder {
        &self.encoder
    }

    /// Encodes the texts into batched features.
    pub fn features<S>(&self, texts: &[S]) -> Features
    where
        S: AsRef<str> + Sync,
    {
        self.encoder.features(texts)
    }

    /// Runs the model on the batched features of the texts.
    pub fn predict<S>(&self, texts: &[S]) -> Result<ArrayD<f32>, PipelineError>
    where
        S: AsRef<str> + Sync,
    {
        self.run(self.features(texts))
    }

    /// Runs the model on the batched features of the pairs of texts.
    pub fn predict_pairs<S, T>(&self, pairs: &[(S, T)]) -> Result<ArrayD<f32>, PipelineError>
    where
        S: AsRef<str> + Sync,
        T: AsRef<str> + Sync,
    {
        self.run(self.encoder.pair_features(pairs))
    }

    fn run(&self, features: Features) -> Result<ArrayD<f32>, PipelineError> {
        debug!(
            "Running the model on {} features of {} tokens.",
            features.batch_size(),
            features.token_size(),
        );
        self.runner.run(&features).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::function;

    use super::*;
    use crate::{
        config::Config,
        ndarray::{arr2, Array2, Axis},
        runner::MockRunner,
    };

    fn encoder() -> FeatureEncoder {
        let config = Config::default()
            .with_vocab(test_utils::vocab().unwrap())
            .with_token_size(6)
            .unwrap();
        FeatureEncoder::from_config(&config).unwrap()
    }

    #[test]
    fn test_features() {
        let pipeline = Pipeline::new(encoder(), MockRunner::new());
        let features = pipeline.features(&["hello world", ""]);
        assert_eq!(
            features.input_ids.view(),
            arr2(&[[2, 29, 30, 3, 0, 0], [2, 3, 0, 0, 0, 0]]),
        );
    }

    #[test]
    fn test_predict() {
        let mut runner = MockRunner::new();
        runner
            .expect_run()
            .with(function(|features: &Features| {
                let named = features.named();
                named[Features::INPUT_IDS] == arr2(&[[2, 29, 30, 3, 0, 0], [2, 31, 32, 3, 0, 0]])
                    && named[Features::INPUT_MASK]
                        == arr2(&[[1, 1, 1, 1, 0, 0], [1, 1, 1, 1, 0, 0]])
                    && named[Features::INPUT_TYPE_IDS] == Array2::<i64>::zeros((2, 6))
            }))
            .times(1)
            .returning(|features| {
                Ok(features
                    .input_mask
                    .mapv(|mask| mask as f32)
                    .sum_axis(Axis(1))
                    .into_dyn())
            });
        let pipeline = Pipeline::new(encoder(), runner);

        let prediction = pipeline.predict(&["hello world", "playing"]).unwrap();
        assert_eq!(prediction.shape(), [2]);
        assert_eq!(prediction.as_slice().unwrap(), [4., 4.]);
    }

    #[test]
    fn test_predict_pairs() {
        let mut runner = MockRunner::new();
        runner
            .expect_run()
            .with(function(|features: &Features| {
                features.input_type_ids.view() == arr2(&[[0, 0, 0, 1, 1, 0]])
            }))
            .times(1)
            .returning(|_| Ok(ArrayD::zeros(vec![1, 2])));
        let pipeline = Pipeline::new(encoder(), runner);

        let prediction = pipeline.predict_pairs(&[("hello", "world")]).unwrap();
        assert_eq!(prediction.shape(), [1, 2]);
    }

    #[test]
    fn test_predict_failure() {
        let mut runner = MockRunner::new();
        runner.expect_run().times(1).returning(|features| {
            Err(RunnerError::TokenSize {
                expected: 128,
                actual: features.token_size(),
            })
        });
        let pipeline = Pipeline::new(encoder(), runner);

        let error = pipeline.predict(&["hello"]).unwrap_err();
        assert!(matches!(
            error,
            PipelineError::Runner(RunnerError::TokenSize {
                expected: 128,
                actual: 6,
            }),
        ));
        assert_eq!(
            error.to_string(),
            "The model runner failed: The features don't fit the model inputs: expected token size 128, got 6",
        );
    }
}
