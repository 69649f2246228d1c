//! Local Account Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Local Account Record
///
/// Field tags must stay in step with [`Field::tag`](crate::tags::Field::tag).
#[derive(Clone, PartialEq, Eq, Hash, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalAccountRecord {
    /// Resource identifier.
    #[prost(string, tag = "1")]
    pub resource_id: String,

    /// Username provided by the administrator.
    #[prost(string, tag = "2")]
    pub username: String,

    /// SSH public key installed for the account.
    #[prost(string, tag = "3")]
    pub ssh_key: String,

    /// Owning tenant identifier.
    #[prost(string, tag = "100")]
    pub tenant_id: String,

    /// Creation timestamp.
    #[prost(string, tag = "200")]
    pub created_at: String,

    /// Last update timestamp.
    #[prost(string, tag = "201")]
    pub updated_at: String,
}

impl LocalAccountRecord {
    /// Set `updated_at` to `now`, leaving every other field untouched.
    pub fn touch(&mut self, now: Timestamp) {
        self.updated_at = now.to_string();
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn default_record_is_all_empty() {
        let record = LocalAccountRecord::default();

        assert!(record.resource_id.is_empty());
        assert!(record.username.is_empty());
        assert!(record.ssh_key.is_empty());
        assert!(record.tenant_id.is_empty());
        assert!(record.created_at.is_empty());
        assert!(record.updated_at.is_empty());
    }

    #[test]
    fn touch_only_changes_updated_at() -> TestResult {
        let mut record = LocalAccountRecord {
            username: "alice".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
            ..LocalAccountRecord::default()
        };

        record.touch("2024-01-02T00:00:00Z".parse()?);

        assert_eq!(record.username, "alice");
        assert_eq!(record.created_at, "2024-01-01T00:00:00Z");
        assert_eq!(record.updated_at, "2024-01-02T00:00:00Z");

        Ok(())
    }

    #[test]
    fn json_fills_missing_fields_with_empty_strings() -> TestResult {
        let record: LocalAccountRecord = serde_json::from_str(r#"{"username":"bob"}"#)?;

        assert_eq!(
            record,
            LocalAccountRecord {
                username: "bob".to_string(),
                ..LocalAccountRecord::default()
            }
        );

        Ok(())
    }
}
