//! Shared infrastructure for the corpus tooling.

pub mod logging;
