//! Call gates that validate every invocation against registered schemas.
//!
//! An operation wrapped by [`intercept`] has its positional arguments
//! checked before the body runs and its result checked before the caller
//! sees it. The gates hold only the operation identity and a shared registry
//! handle; all schema associations live in the registry.

pub mod error;
pub mod gate;
pub mod op;

pub use error::{InterceptError, Result};
pub use gate::{intercept, ParamGate, RegistryHandle, ReturnGate};
pub use op::Operation;
