//! Schema capability layer for call-boundary validation.
//!
//! A [`Schema`] attempts to validate one value and returns either the
//! accepted (possibly normalized) value or a structured [`FailureDetail`].
//! The bundled [`JsonSchema`] collaborator compiles JSON Schema documents;
//! [`FnSchema`] adapts a plain function. Callers that need another schema
//! language implement [`Schema`] directly.

pub mod config;
pub mod detail;
pub mod error;
pub mod json;
pub mod schema;

pub use config::CompileConfig;
pub use detail::{FailureDetail, Violation};
pub use error::{Result, SchemaError};
pub use json::JsonSchema;
pub use schema::{FnSchema, Schema};
