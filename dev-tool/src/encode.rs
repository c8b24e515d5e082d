use std::{collections::BTreeMap, path::PathBuf};

use anyhow::{Context, Error};
use bert_features::{Config, FeatureEncoder, Features};
use log::warn;
use structopt::StructOpt;

use crate::exit_code::{NON_FATAL_ERROR, NO_ERROR};

/// Encode texts into the named feature arrays of the model inputs.
#[derive(StructOpt, Debug)]
pub struct EncodeCmd {
    /// The json configuration file, missing fields take their defaults.
    #[structopt(long)]
    pub config: Option<PathBuf>,

    /// The vocabulary file, overrides the configuration.
    #[structopt(long)]
    pub vocab: Option<PathBuf>,

    /// The number of tokens per feature, overrides the configuration.
    #[structopt(long)]
    pub token_size: Option<usize>,

    /// Keep the case of the texts instead of lowercasing them.
    #[structopt(long)]
    pub cased: bool,

    /// Encode the texts two at a time as pairs.
    #[structopt(long)]
    pub pair: bool,

    /// Pretty-print the json output.
    #[structopt(long)]
    pub pretty: bool,

    /// The texts to encode.
    pub texts: Vec<String>,
}

type Named = BTreeMap<&'static str, Vec<Vec<i64>>>;

impl EncodeCmd {
    pub fn run(self) -> Result<i32, Error> {
        let pretty = self.pretty;
        let (named, exit_code) = self.encode()?;

        let serialized = if pretty {
            serde_json::to_string_pretty(&named)?
        } else {
            serde_json::to_string(&named)?
        };
        println!("{}", serialized);

        Ok(exit_code)
    }

    fn config(&self) -> Result<Config, Error> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("Loading the configuration {} failed.", path.display()))?,
            None => Config::default(),
        };
        if let Some(vocab) = &self.vocab {
            config = config.with_vocab(vocab.clone());
        }
        if let Some(token_size) = self.token_size {
            config = config
                .with_token_size(token_size)
                .context("Invalid token size.")?;
        }
        if self.cased {
            config = config.with_lowercase(false);
        }

        Ok(config)
    }

    fn encode(self) -> Result<(Named, i32), Error> {
        let config = self.config()?;
        let encoder = FeatureEncoder::from_config(&config)
            .context("Building the feature encoder failed.")?;

        if !self.pair {
            return Ok((named(&encoder.features(&self.texts)), NO_ERROR));
        }

        let mut texts = self.texts.into_iter();
        let mut pairs = Vec::new();
        while let Some(first) = texts.next() {
            match texts.next() {
                Some(second) => pairs.push((first, second)),
                None => {
                    warn!("Skipped the unpaired text {:?}.", first);
                    return Ok((named(&encoder.pair_features(&pairs)), NON_FATAL_ERROR));
                }
            }
        }

        Ok((named(&encoder.pair_features(&pairs)), NO_ERROR))
    }
}

fn named(features: &Features) -> Named {
    features
        .named()
        .into_iter()
        .map(|(name, array)| {
            let rows: Vec<Vec<i64>> = array.outer_iter().map(|row| row.to_vec()).collect();
            (name, rows)
        })
        .collect()
}
