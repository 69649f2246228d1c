//! Local Account
//!
//! Local account resource records and their protocol-buffer wire codec.

pub mod codec;
pub mod data;
pub mod errors;
pub mod prelude;
pub mod records;
pub mod tags;
pub mod validation;
