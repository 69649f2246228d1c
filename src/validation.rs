//! Local account validation.
//!
//! Applied by producers before a record is created. The codec itself never
//! validates: any well-formed bytes decode.

use crate::{errors::ValidationError, records::LocalAccountRecord};

/// Longest accepted username.
pub const MAX_USERNAME_LEN: usize = 32;

/// Accepted SSH public key algorithms.
pub const SSH_KEY_ALGORITHMS: [&str; 7] = [
    "ssh-ed25519",
    "ssh-rsa",
    "ecdsa-sha2-nistp256",
    "ecdsa-sha2-nistp384",
    "ecdsa-sha2-nistp521",
    "sk-ssh-ed25519@openssh.com",
    "sk-ecdsa-sha2-nistp256@openssh.com",
];

/// Check the caller-provided fields of a record.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found, username before SSH key.
pub fn validate(record: &LocalAccountRecord) -> Result<(), ValidationError> {
    validate_username(&record.username)?;
    validate_ssh_key(&record.ssh_key)
}

/// Check a login name.
///
/// # Errors
///
/// Returns [`ValidationError::MissingUsername`] if empty, or
/// [`ValidationError::InvalidUsername`] if it is not a portable login name.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let mut chars = username.chars();

    let Some(first) = chars.next() else {
        return Err(ValidationError::MissingUsername);
    };

    if username.len() > MAX_USERNAME_LEN {
        return Err(ValidationError::InvalidUsername);
    }

    if !(first.is_ascii_lowercase() || first == '_') {
        return Err(ValidationError::InvalidUsername);
    }

    if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-') {
        return Err(ValidationError::InvalidUsername);
    }

    Ok(())
}

/// Check an OpenSSH public key line: `<algorithm> <base64> [comment]`.
///
/// # Errors
///
/// Returns [`ValidationError::MissingSshKey`] if blank, or
/// [`ValidationError::InvalidSshKey`] for an unknown algorithm or a
/// missing/non-base64 key body.
pub fn validate_ssh_key(ssh_key: &str) -> Result<(), ValidationError> {
    let mut parts = ssh_key.split_whitespace();

    let Some(algorithm) = parts.next() else {
        return Err(ValidationError::MissingSshKey);
    };

    if !SSH_KEY_ALGORITHMS.contains(&algorithm) {
        return Err(ValidationError::InvalidSshKey);
    }

    let body = parts.next().ok_or(ValidationError::InvalidSshKey)?;

    if !body.bytes().all(is_base64_byte) {
        return Err(ValidationError::InvalidSshKey);
    }

    Ok(())
}

const fn is_base64_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'/' | b'=')
}

#[cfg(test)]
mod tests {
    use super::*;

    const SSH_KEY: &str = "ssh-ed25519 AAAAB3NzaC1yc2EAAAABIwAAAQEArandomkey1";

    #[test]
    fn accepts_typical_account() {
        let record = LocalAccountRecord {
            username: "user1".to_string(),
            ssh_key: SSH_KEY.to_string(),
            ..LocalAccountRecord::default()
        };

        assert_eq!(validate(&record), Ok(()));
    }

    #[test]
    fn rejects_empty_username() {
        let record = LocalAccountRecord {
            ssh_key: SSH_KEY.to_string(),
            ..LocalAccountRecord::default()
        };

        assert_eq!(validate(&record), Err(ValidationError::MissingUsername));
    }

    #[test]
    fn username_is_checked_before_ssh_key() {
        assert_eq!(
            validate(&LocalAccountRecord::default()),
            Err(ValidationError::MissingUsername)
        );
    }

    #[test]
    fn rejects_bad_usernames() {
        for username in ["Alice", "1user", "user name", "user@host", "-user"] {
            assert_eq!(
                validate_username(username),
                Err(ValidationError::InvalidUsername),
                "{username:?} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_usernames_with_digits_dashes_and_underscores() {
        for username in ["bob", "_svc", "edge-admin", "user_2"] {
            assert_eq!(validate_username(username), Ok(()), "{username:?} should pass");
        }
    }

    #[test]
    fn rejects_overlong_username() {
        assert_eq!(
            validate_username(&"a".repeat(MAX_USERNAME_LEN + 1)),
            Err(ValidationError::InvalidUsername)
        );
        assert_eq!(validate_username(&"a".repeat(MAX_USERNAME_LEN)), Ok(()));
    }

    #[test]
    fn rejects_blank_ssh_key() {
        assert_eq!(validate_ssh_key("   "), Err(ValidationError::MissingSshKey));
    }

    #[test]
    fn rejects_unknown_algorithm() {
        assert_eq!(
            validate_ssh_key("ssh-dss AAAAB3NzaC1kc3M="),
            Err(ValidationError::InvalidSshKey)
        );
    }

    #[test]
    fn rejects_missing_or_garbled_body() {
        assert_eq!(validate_ssh_key("ssh-rsa"), Err(ValidationError::InvalidSshKey));
        assert_eq!(
            validate_ssh_key("ssh-rsa not*base64"),
            Err(ValidationError::InvalidSshKey)
        );
    }

    #[test]
    fn accepts_key_with_comment() {
        assert_eq!(
            validate_ssh_key("ssh-rsa AAAAB3NzaC1yc2E= admin@edge-node"),
            Ok(())
        );
    }
}
