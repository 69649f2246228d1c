//! Local account prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    codec::{
        AccountRecordCodec, FieldKey, RecordCodec, WireType, decode, decode_stream, encode,
        encode_stream, inspect,
    },
    data::{NewLocalAccount, generate_resource_id},
    errors::{CodecError, ValidationError},
    records::LocalAccountRecord,
    tags::{Field, TagGroup},
    validation::validate,
};
