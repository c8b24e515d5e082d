use std::path::PathBuf;

use anyhow::{Context, Error};
use bert_tokenizer::Builder;
use serde::Serialize;
use structopt::StructOpt;

use crate::exit_code::NO_ERROR;

/// Tokenize texts into word pieces.
#[derive(StructOpt, Debug)]
pub struct TokenizeCmd {
    /// The vocabulary file.
    #[structopt(long)]
    pub vocab: PathBuf,

    /// Keep the case of the texts instead of lowercasing them.
    #[structopt(long)]
    pub cased: bool,

    /// Pretty-print the json output.
    #[structopt(long)]
    pub pretty: bool,

    /// The texts to tokenize.
    pub texts: Vec<String>,
}

#[derive(Debug, PartialEq, Serialize)]
struct Tokenized {
    text: String,
    tokens: Vec<String>,
}

impl TokenizeCmd {
    pub fn run(self) -> Result<i32, Error> {
        let pretty = self.pretty;
        let tokenized = self.tokenize()?;

        let serialized = if pretty {
            serde_json::to_string_pretty(&tokenized)?
        } else {
            serde_json::to_string(&tokenized)?
        };
        println!("{}", serialized);

        Ok(NO_ERROR)
    }

    fn tokenize(self) -> Result<Vec<Tokenized>, Error> {
        let tokenizer = Builder::<i64>::from_file(&self.vocab)
            .with_context(|| format!("Loading the vocabulary {} failed.", self.vocab.display()))?
            .with_normalizer(true, !self.cased)
            .build()
            .context("Building the tokenizer failed.")?;

        Ok(self
            .texts
            .into_iter()
            .map(|text| {
                let tokens = tokenizer.tokenize(&text);
                Tokenized { text, tokens }
            })
            .collect())
    }
}
