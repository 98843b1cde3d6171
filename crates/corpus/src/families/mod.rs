//! Seed families, one module per [`Category`](crate::seed::Category).
//!
//! Each family is a parameter table plus a `populate` function that walks the
//! table, names each row and encodes it into the catalog.

pub mod alternating;
pub mod boundary;
pub mod constant;
pub mod malformed;
pub mod random;
pub mod special;
