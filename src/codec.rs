//! Record Codec
//!
//! Protocol-buffer encoding of [`LocalAccountRecord`] using the tag table in
//! [`crate::tags`]. Decoding skips tags it does not know, so bytes written by
//! newer producers still decode.

use prost::{
    Message,
    bytes::Buf,
    encoding::{DecodeContext, decode_key, skip_field},
};
use tracing::{debug, warn};

use crate::{errors::CodecError, records::LocalAccountRecord, tags::Field};

/// Conversion between records and their wire bytes.
pub trait RecordCodec {
    /// Record type handled by this codec.
    type Record;

    /// Encode a record.
    fn encode(&self, record: &Self::Record) -> Vec<u8>;

    /// Decode a record.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::MalformedInput`] if `bytes` is not a well-formed record.
    fn decode(&self, bytes: &[u8]) -> Result<Self::Record, CodecError>;
}

/// Codec for [`LocalAccountRecord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountRecordCodec;

impl RecordCodec for AccountRecordCodec {
    type Record = LocalAccountRecord;

    fn encode(&self, record: &LocalAccountRecord) -> Vec<u8> {
        encode(record)
    }

    fn decode(&self, bytes: &[u8]) -> Result<LocalAccountRecord, CodecError> {
        decode(bytes)
    }
}

/// Encode a record. Empty fields are omitted from the output.
#[must_use]
pub fn encode(record: &LocalAccountRecord) -> Vec<u8> {
    let bytes = record.encode_to_vec();

    debug!(len = bytes.len(), "encoded local account record");

    bytes
}

/// Decode a record, defaulting absent fields to the empty string.
///
/// # Errors
///
/// Returns [`CodecError::MalformedInput`] on truncated fields, bad varints,
/// wire types that do not match a declared tag, or non UTF-8 text.
pub fn decode(bytes: &[u8]) -> Result<LocalAccountRecord, CodecError> {
    let record = LocalAccountRecord::decode(bytes).inspect_err(|error| {
        warn!(len = bytes.len(), %error, "rejected malformed local account record");
    })?;

    debug!(len = bytes.len(), "decoded local account record");

    Ok(record)
}

/// Encode records as a stream of length-prefixed frames.
#[must_use]
pub fn encode_stream<'a, I>(records: I) -> Vec<u8>
where
    I: IntoIterator<Item = &'a LocalAccountRecord>,
{
    let mut bytes = Vec::new();
    let mut count = 0_usize;

    for record in records {
        bytes.extend(record.encode_length_delimited_to_vec());
        count += 1;
    }

    debug!(count, len = bytes.len(), "encoded local account stream");

    bytes
}

/// Decode a stream produced by [`encode_stream`].
///
/// # Errors
///
/// Returns [`CodecError::MalformedInput`] if any frame is truncated or malformed.
pub fn decode_stream(bytes: &[u8]) -> Result<Vec<LocalAccountRecord>, CodecError> {
    let mut buf = bytes;
    let mut records = Vec::new();

    while buf.has_remaining() {
        let record = LocalAccountRecord::decode_length_delimited(&mut buf).inspect_err(|error| {
            warn!(frame = records.len(), %error, "rejected malformed local account stream");
        })?;

        records.push(record);
    }

    debug!(count = records.len(), "decoded local account stream");

    Ok(records)
}

/// Protocol-buffer wire type of a field key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    /// Variable-length integer.
    Varint,

    /// Fixed eight bytes.
    SixtyFourBit,

    /// Length prefix followed by that many bytes.
    LengthDelimited,

    /// Deprecated group start.
    StartGroup,

    /// Deprecated group end.
    EndGroup,

    /// Fixed four bytes.
    ThirtyTwoBit,
}

impl WireType {
    /// Short lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Varint => "varint",
            Self::SixtyFourBit => "i64",
            Self::LengthDelimited => "len",
            Self::StartGroup => "sgroup",
            Self::EndGroup => "egroup",
            Self::ThirtyTwoBit => "i32",
        }
    }
}

impl From<prost::encoding::WireType> for WireType {
    fn from(value: prost::encoding::WireType) -> Self {
        use prost::encoding::WireType as Raw;

        match value {
            Raw::Varint => Self::Varint,
            Raw::SixtyFourBit => Self::SixtyFourBit,
            Raw::LengthDelimited => Self::LengthDelimited,
            Raw::StartGroup => Self::StartGroup,
            Raw::EndGroup => Self::EndGroup,
            Raw::ThirtyTwoBit => Self::ThirtyTwoBit,
        }
    }
}

/// A field key found in encoded bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldKey {
    /// Tag number.
    pub tag: u32,

    /// Wire type the value was written with.
    pub wire_type: WireType,

    /// Record field assigned to the tag, if any.
    pub field: Option<Field>,
}

/// List the keys present in `bytes`, in the order they appear.
///
/// Values are skipped rather than decoded, so this also reports tags the
/// record does not define.
///
/// # Errors
///
/// Returns [`CodecError::MalformedInput`] if the key/value stream is malformed.
pub fn inspect(bytes: &[u8]) -> Result<Vec<FieldKey>, CodecError> {
    let mut buf = bytes;
    let mut keys = Vec::new();

    while buf.has_remaining() {
        let (tag, wire_type) = decode_key(&mut buf)?;

        skip_field(wire_type, tag, &mut buf, DecodeContext::default())?;

        keys.push(FieldKey {
            tag,
            wire_type: wire_type.into(),
            field: Field::from_tag(tag),
        });
    }

    Ok(keys)
}
