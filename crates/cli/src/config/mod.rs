//! CLI configuration

pub(crate) mod logging;
