//! Schema-gated call interception.
//!
//! callgate attaches schemas to the parameters and return value of an
//! operation and guarantees every invocation is validated before the body
//! runs and before the result reaches the caller. Schemas live in a side
//! registry keyed by operation identity; gates wrap the operation and
//! consult the registry on each call.
//!
//! # Crate Structure
//!
//! - [`schema`] — The schema capability: validate one value, returning the
//!   accepted value or a structured failure
//! - [`registry`] — Operation identity and the per-operation schema tables
//! - [`intercept`] — The gates that wrap an operation and validate each call

/// Re-export schema types.
pub mod schema {
    pub use callgate_schema::*;
}

/// Re-export registry types.
pub mod registry {
    pub use callgate_registry::*;
}

/// Re-export interception types.
pub mod intercept {
    pub use callgate_intercept::*;
}
