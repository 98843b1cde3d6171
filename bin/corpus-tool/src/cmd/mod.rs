//! Subcommand implementations.

pub(crate) mod generate;
pub(crate) mod list;
pub(crate) mod verify;
