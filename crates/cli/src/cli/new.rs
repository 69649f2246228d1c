use std::io::Write;

use clap::Args;
use jiff::Timestamp;
use localaccount::{codec, data::NewLocalAccount};
use tracing::info;

use super::{RecordFormat, write_base64, write_json};

#[derive(Debug, Args)]
pub(crate) struct NewArgs {
    /// Login name to provision
    #[arg(long)]
    username: String,

    /// SSH public key line, e.g. "ssh-ed25519 AAAA... admin@host"
    #[arg(long)]
    ssh_key: String,

    /// Owning tenant identifier
    #[arg(long, env = "LOCALACCOUNT_TENANT_ID", default_value = "")]
    tenant_id: String,

    /// Optional resource identifier; generated when omitted
    #[arg(long)]
    resource_id: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = RecordFormat::Base64)]
    format: RecordFormat,
}

pub(crate) fn run(args: NewArgs, output: &mut impl Write) -> Result<(), String> {
    let record = NewLocalAccount {
        username: args.username,
        ssh_key: args.ssh_key,
        tenant_id: args.tenant_id,
        resource_id: args.resource_id,
    }
    .into_record(Timestamp::now())
    .map_err(|error| format!("invalid local account: {error}"))?;

    info!(resource_id = %record.resource_id, "created local account record");

    match args.format {
        RecordFormat::Base64 => write_base64(&codec::encode(&record), output),
        RecordFormat::Json => write_json(&record, output),
    }
}
