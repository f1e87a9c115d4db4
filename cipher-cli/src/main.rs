//! CLI front end for the classical shift and keyword cipher engine.

use clap::{Args, Parser, Subcommand, ValueEnum};
use cipher_core::{Cipher, Direction, apply};
use log::{error, info};
use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text with the selected cipher
    Encode(TransformArgs),
    /// Decode text with the selected cipher
    Decode(TransformArgs),
}

#[derive(Args)]
struct TransformArgs {
    /// The cipher to apply
    #[arg(short, long, value_enum)]
    cipher: CipherArg,

    /// The key: an integer for shift, letters for keyword
    #[arg(short, long)]
    key: String,

    /// Read the input text from this file instead of stdin
    #[arg(short, long)]
    input: Option<String>,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum CipherArg {
    /// Fixed-offset substitution keyed by an integer shift
    Shift,
    /// Repeating-keyword substitution keyed by letters
    Keyword,
}

impl From<CipherArg> for Cipher {
    fn from(arg: CipherArg) -> Self {
        match arg {
            CipherArg::Shift => Self::Shift,
            CipherArg::Keyword => Self::Keyword,
        }
    }
}

fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn write_output(path: Option<&str>, text: &str) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, text),
        None => io::stdout().write_all(text.as_bytes()),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let (direction, args) = match &cli.command {
        Commands::Encode(args) => (Direction::Encode, args),
        Commands::Decode(args) => (Direction::Decode, args),
    };

    let text = match read_input(args.input.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read input: {e}");
            return ExitCode::FAILURE;
        }
    };

    // The engine never trims; surrounding whitespace in the key is the
    // front end's job to strip.
    match apply(&text, Cipher::from(args.cipher), direction, args.key.trim()) {
        Ok(result) => {
            if let Err(e) = write_output(args.output.as_deref(), &result) {
                error!("Failed to write output: {e}");
                return ExitCode::FAILURE;
            }
            info!("Done: {} ({direction})", Cipher::from(args.cipher));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
