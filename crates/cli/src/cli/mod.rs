use std::io::{Read, Write};

use base64::{Engine, engine::general_purpose::STANDARD};
use clap::{Parser, Subcommand};

use crate::config::logging::LoggingConfig;

mod decode;
mod encode;
mod inspect;
mod new;

#[derive(Debug, Parser)]
#[command(name = "localaccount", about = "Local account record CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    pub(crate) logging: LoggingConfig,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create a validated, timestamped record
    New(new::NewArgs),

    /// Encode a JSON record read from stdin
    Encode(encode::EncodeArgs),

    /// Decode base64 wire bytes to JSON
    Decode(decode::DecodeArgs),

    /// List the field keys present in base64 wire bytes
    Inspect(inspect::InspectArgs),
}

impl Cli {
    pub(crate) fn run(self, input: &mut impl Read, output: &mut impl Write) -> Result<(), String> {
        match self.command {
            Commands::New(args) => new::run(args, output),
            Commands::Encode(args) => encode::run(args, input, output),
            Commands::Decode(args) => decode::run(args, input, output),
            Commands::Inspect(args) => inspect::run(args, input, output),
        }
    }
}

/// Output format for a single record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum RecordFormat {
    /// Standard base64 of the wire bytes.
    Base64,

    /// Pretty-printed JSON.
    Json,
}

/// Wire bytes given as an argument, or read from `input` when omitted.
fn read_wire_bytes(arg: Option<String>, input: &mut impl Read) -> Result<Vec<u8>, String> {
    let text = match arg {
        Some(text) => text,
        None => read_to_string(input)?,
    };

    STANDARD
        .decode(text.trim())
        .map_err(|error| format!("invalid base64 input: {error}"))
}

fn read_to_string(input: &mut impl Read) -> Result<String, String> {
    let mut text = String::new();

    input
        .read_to_string(&mut text)
        .map_err(|error| format!("failed to read input: {error}"))?;

    Ok(text)
}

fn write_base64(bytes: &[u8], output: &mut impl Write) -> Result<(), String> {
    writeln!(output, "{}", STANDARD.encode(bytes))
        .map_err(|error| format!("failed to write output: {error}"))
}

fn write_json<T: serde::Serialize>(value: &T, output: &mut impl Write) -> Result<(), String> {
    serde_json::to_writer_pretty(&mut *output, value)
        .map_err(|error| format!("failed to write output: {error}"))?;

    writeln!(output).map_err(|error| format!("failed to write output: {error}"))
}
