use std::io::{Read, Write};

use clap::Args;
use localaccount::codec;

use super::read_wire_bytes;

#[derive(Debug, Args)]
pub(crate) struct InspectArgs {
    /// Base64 wire bytes; read from stdin when omitted
    bytes: Option<String>,
}

pub(crate) fn run(
    args: InspectArgs,
    input: &mut impl Read,
    output: &mut impl Write,
) -> Result<(), String> {
    let bytes = read_wire_bytes(args.bytes, input)?;

    let keys = codec::inspect(&bytes).map_err(|error| format!("failed to inspect record: {error}"))?;

    for key in keys {
        let field = key.field.map_or("unknown", |field| field.name());

        writeln!(output, "{}\t{}\t{field}", key.tag, key.wire_type.as_str())
            .map_err(|error| format!("failed to write output: {error}"))?;
    }

    Ok(())
}
