use bert_tokenizer::Encoding;

/// A fixed-length model input for a single text or a pair of texts.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    ids: Vec<i64>,
    mask: Vec<i64>,
    type_ids: Vec<i64>,
}

impl From<Encoding<i64>> for Feature {
    fn from(encoding: Encoding<i64>) -> Self {
        let (ids, mask, type_ids) = encoding.into_parts();
        Self {
            ids,
            mask,
            type_ids,
        }
    }
}

impl Feature {
    /// Gets the number of tokens.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Checks whether there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Gets the token ids.
    pub fn ids(&self) -> &[i64] {
        self.ids.as_slice()
    }

    /// Gets the attention mask, which is `1` for real tokens and `0` for padding.
    pub fn mask(&self) -> &[i64] {
        self.mask.as_slice()
    }

    /// Gets the segment type ids.
    pub fn type_ids(&self) -> &[i64] {
        self.type_ids.as_slice()
    }
}
