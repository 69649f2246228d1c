use std::io::{Read, Write};

use clap::Args;
use localaccount::{codec, records::LocalAccountRecord, validation::validate};
use tracing::debug;

use super::{read_to_string, write_base64};

#[derive(Debug, Args)]
pub(crate) struct EncodeArgs {
    /// Reject records whose username or SSH key is invalid
    #[arg(long)]
    validate: bool,
}

pub(crate) fn run(
    args: EncodeArgs,
    input: &mut impl Read,
    output: &mut impl Write,
) -> Result<(), String> {
    let text = read_to_string(input)?;

    let record: LocalAccountRecord =
        serde_json::from_str(&text).map_err(|error| format!("invalid JSON record: {error}"))?;

    if args.validate {
        validate(&record).map_err(|error| format!("invalid local account: {error}"))?;
    }

    let bytes = codec::encode(&record);

    debug!(len = bytes.len(), "encoded record from stdin");

    write_base64(&bytes, output)
}
