//! Shared response bodies for write endpoints.
//!
//! Read endpoints return their payload directly; writes that do not echo a
//! resource answer with one of these acknowledgements.

use serde::Serialize;

/// Plain `{ "message": ... }` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Acknowledgement that also carries the rows the request changed.
#[derive(Debug, Serialize)]
pub struct MessageWithData<T: Serialize> {
    pub message: String,
    pub data: T,
}
