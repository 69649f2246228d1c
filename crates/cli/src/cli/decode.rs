use std::io::{Read, Write};

use clap::Args;
use localaccount::codec;

use super::{read_wire_bytes, write_json};

#[derive(Debug, Args)]
pub(crate) struct DecodeArgs {
    /// Base64 wire bytes; read from stdin when omitted
    bytes: Option<String>,
}

pub(crate) fn run(
    args: DecodeArgs,
    input: &mut impl Read,
    output: &mut impl Write,
) -> Result<(), String> {
    let bytes = read_wire_bytes(args.bytes, input)?;

    let record = codec::decode(&bytes).map_err(|error| format!("failed to decode record: {error}"))?;

    write_json(&record, output)
}

#[cfg(test)]
mod tests {
    use localaccount::records::LocalAccountRecord;
    use testresult::TestResult;

    use crate::cli::tests::run_cli;

    #[test]
    fn decode_prints_all_fields() -> TestResult {
        let output = run_cli(&["localaccount", "decode", "EgNib2I="], "")?;

        let record: LocalAccountRecord = serde_json::from_str(&output)?;

        assert_eq!(
            record,
            LocalAccountRecord {
                username: "bob".to_string(),
                ..LocalAccountRecord::default()
            }
        );
        assert!(output.contains(r#""tenant_id": """#), "defaults are printed");

        Ok(())
    }

    #[test]
    fn decode_reads_stdin_when_no_argument() -> TestResult {
        let output = run_cli(&["localaccount", "decode"], "EgNib2I=\n")?;

        assert!(output.contains(r#""username": "bob""#), "got {output}");

        Ok(())
    }

    #[test]
    fn decode_reports_malformed_input() {
        // Tag 2 claiming ten bytes with three present.
        let result = run_cli(&["localaccount", "decode", "Egpib2I="], "");

        assert_eq!(
            result,
            Err("failed to decode record: malformed input".to_string())
        );
    }
}
