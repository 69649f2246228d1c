//! New Local Account Data

use jiff::Timestamp;
use uuid::Uuid;

use crate::{errors::ValidationError, records::LocalAccountRecord, validation::validate};

/// Prefix of generated resource identifiers.
pub const RESOURCE_ID_PREFIX: &str = "localaccount";

const RESOURCE_ID_HEX_CHARS: usize = 8;

/// New Local Account Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLocalAccount {
    /// Login name to provision.
    pub username: String,

    /// SSH public key to install.
    pub ssh_key: String,

    /// Owning tenant.
    pub tenant_id: String,

    /// Resource identifier; generated when `None`.
    pub resource_id: Option<String>,
}

impl NewLocalAccount {
    /// Validate and build the record, stamping both timestamps with `now`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the username or SSH key is invalid.
    pub fn into_record(self, now: Timestamp) -> Result<LocalAccountRecord, ValidationError> {
        let stamp = now.to_string();

        let record = LocalAccountRecord {
            resource_id: self.resource_id.unwrap_or_else(generate_resource_id),
            username: self.username,
            ssh_key: self.ssh_key,
            tenant_id: self.tenant_id,
            created_at: stamp.clone(),
            updated_at: stamp,
        };

        validate(&record)?;

        Ok(record)
    }
}

/// Generate a resource identifier such as `localaccount-1a2b3c4d`.
///
/// The hex digits come from the random tail of a v7 UUID.
#[must_use]
pub fn generate_resource_id() -> String {
    let simple = Uuid::now_v7().simple().to_string();
    let suffix: String = simple
        .chars()
        .skip(simple.len() - RESOURCE_ID_HEX_CHARS)
        .collect();

    format!("{RESOURCE_ID_PREFIX}-{suffix}")
}
