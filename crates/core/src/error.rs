use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A retired endpoint was called. The message tells the caller where to go instead.
    #[error("Unsupported route: {0}")]
    UnsupportedRoute(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
