/// Errors that can occur while building a schema.
///
/// Rejection of a value is not an error here; schemas report rejections as
/// [`crate::FailureDetail`] data.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The schema document could not be compiled.
    #[error("failed to compile schema: {0}")]
    CompileFailed(String),

    /// The schema document is not valid JSON.
    #[error("schema is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
