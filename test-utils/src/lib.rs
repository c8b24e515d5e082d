//! The single source of truth for all test data paths.

mod asset;

use std::{
    fs::File,
    io::{BufReader, Result},
    path::PathBuf,
};

use crate::asset::resolve_asset;

/// Resolves the path to the test vocabulary.
///
/// The vocabulary is a small word piece vocabulary with the special tokens `[PAD]`, `[UNK]`,
/// `[CLS]` and `[SEP]` on the ids `0` to `3`.
pub fn vocab() -> Result<PathBuf> {
    resolve_asset("bertVocab")
}

/// Opens the test vocabulary for buffered reading.
pub fn vocab_reader() -> Result<BufReader<File>> {
    File::open(vocab()?).map(BufReader::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocab() {
        assert!(vocab().is_ok());
        assert!(vocab_reader().is_ok());
    }
}
