//! Domain primitives shared by the database and API crates.
//!
//! Nothing in this crate performs I/O.

pub mod enrollment;
pub mod error;
pub mod status;
pub mod types;
pub mod validation;
