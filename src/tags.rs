//! Field Tags
//!
//! The wire tag table for [`LocalAccountRecord`](crate::records::LocalAccountRecord).
//!
//! Tag numbers are part of the binary contract with existing producers and
//! consumers. A tag, once assigned, is never reused for another field.
//! New fields go into the group matching their meaning, leaving the gaps
//! between groups free for future fields of the same kind.

use std::fmt;

/// Tag group a field number belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagGroup {
    /// Identity and content of the account itself (1-99).
    Intrinsic,

    /// Ownership of the resource (100-199).
    Tenancy,

    /// Audit timestamps (200-299).
    Audit,

    /// Outside every reserved range.
    Unassigned,
}

impl TagGroup {
    /// Classify a tag number.
    #[must_use]
    pub const fn of(tag: u32) -> Self {
        match tag {
            1..=99 => Self::Intrinsic,
            100..=199 => Self::Tenancy,
            200..=299 => Self::Audit,
            _ => Self::Unassigned,
        }
    }
}

/// A field of the local account record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Resource identifier.
    ResourceId,

    /// Login name.
    Username,

    /// SSH public key.
    SshKey,

    /// Owning tenant.
    TenantId,

    /// Creation timestamp.
    CreatedAt,

    /// Last update timestamp.
    UpdatedAt,
}

impl Field {
    /// Every field, in ascending tag order.
    pub const ALL: [Self; 6] = [
        Self::ResourceId,
        Self::Username,
        Self::SshKey,
        Self::TenantId,
        Self::CreatedAt,
        Self::UpdatedAt,
    ];

    /// Wire tag of this field.
    #[must_use]
    pub const fn tag(self) -> u32 {
        match self {
            Self::ResourceId => 1,
            Self::Username => 2,
            Self::SshKey => 3,
            Self::TenantId => 100,
            Self::CreatedAt => 200,
            Self::UpdatedAt => 201,
        }
    }

    /// Field name as used in the JSON form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ResourceId => "resource_id",
            Self::Username => "username",
            Self::SshKey => "ssh_key",
            Self::TenantId => "tenant_id",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }

    /// Group the field's tag falls in.
    #[must_use]
    pub const fn group(self) -> TagGroup {
        TagGroup::of(self.tag())
    }

    /// Look up the field assigned to `tag`.
    #[must_use]
    pub fn from_tag(tag: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.tag() == tag)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
