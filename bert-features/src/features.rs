use std::collections::HashMap;

use derive_more::{Deref, From};

use crate::{
    feature::Feature,
    ndarray::{Array2, ArrayView2},
};

/// The token ids of the batched features.
#[derive(Clone, Debug, Deref, From, PartialEq)]
pub struct InputIds(pub Array2<i64>);

/// The attention masks of the batched features.
#[derive(Clone, Debug, Deref, From, PartialEq)]
pub struct InputMask(pub Array2<i64>);

/// The type ids of the batched features.
#[derive(Clone, Debug, Deref, From, PartialEq)]
pub struct InputTypeIds(pub Array2<i64>);

/// The features of a batch of texts, stacked into arrays of shape `(batch_size, token_size)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Features {
    pub input_ids: InputIds,
    pub input_mask: InputMask,
    pub input_type_ids: InputTypeIds,
}

impl Features {
    /// The model input name of the token ids.
    pub const INPUT_IDS: &'static str = "input_ids";

    /// The model input name of the attention masks.
    pub const INPUT_MASK: &'static str = "input_mask";

    /// The model input name of the type ids.
    pub const INPUT_TYPE_IDS: &'static str = "input_type_ids";

    /// Stacks the features.
    ///
    /// Every feature is expected to have `token_size` tokens, shorter ones are filled up with `0`.
    pub fn new(features: &[Feature], token_size: usize) -> Self {
        let shape = (features.len(), token_size);
        let stack = |part: fn(&Feature) -> &[i64]| {
            Array2::from_shape_fn(shape, |(i, j)| {
                features
                    .get(i)
                    .and_then(|feature| part(feature).get(j))
                    .copied()
                    .unwrap_or(0)
            })
        };

        Self {
            input_ids: stack(Feature::ids).into(),
            input_mask: stack(Feature::mask).into(),
            input_type_ids: stack(Feature::type_ids).into(),
        }
    }

    /// Gets the number of stacked features.
    pub fn batch_size(&self) -> usize {
        self.input_ids.nrows()
    }

    /// Gets the number of tokens per feature.
    pub fn token_size(&self) -> usize {
        self.input_ids.ncols()
    }

    /// Gets views of the arrays keyed by their model input names.
    pub fn named(&self) -> HashMap<&'static str, ArrayView2<'_, i64>> {
        vec![
            (Self::INPUT_IDS, self.input_ids.view()),
            (Self::INPUT_MASK, self.input_mask.view()),
            (Self::INPUT_TYPE_IDS, self.input_type_ids.view()),
        ]
        .into_iter()
        .collect()
    }

    /// Converts into the arrays keyed by their model input names.
    pub fn into_named(self) -> HashMap<&'static str, Array2<i64>> {
        vec![
            (Self::INPUT_IDS, self.input_ids.0),
            (Self::INPUT_MASK, self.input_mask.0),
            (Self::INPUT_TYPE_IDS, self.input_type_ids.0),
        ]
        .into_iter()
        .collect()
    }
}
