use std::process::exit;

use anyhow::Error;
use structopt::StructOpt;

use crate::exit_code::FATAL_ERROR;

mod encode;
mod exit_code;
mod tokenize;

/// Tooling for the developers of the Bert feature encoder.
#[derive(StructOpt, Debug)]
enum CommandArgs {
    Tokenize(tokenize::TokenizeCmd),
    Encode(encode::EncodeCmd),
}

impl CommandArgs {
    fn run(self) -> Result<i32, Error> {
        match self {
            CommandArgs::Tokenize(cmd) => cmd.run(),
            CommandArgs::Encode(cmd) => cmd.run(),
        }
    }
}

fn main() {
    env_logger::init();

    let exit_code = match CommandArgs::from_args().run() {
        Ok(exit_code) => exit_code,
        Err(error) => {
            eprintln!("{:?}", error);
            FATAL_ERROR
        }
    };

    exit(exit_code);
}
