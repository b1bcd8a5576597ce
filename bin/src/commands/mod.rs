//! CLI command implementations.

pub(crate) mod crypto;
pub(crate) mod host;
pub(crate) mod markets;
pub(crate) mod power;
pub(crate) mod properties;
