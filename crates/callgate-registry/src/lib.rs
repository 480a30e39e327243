//! Operation identity and per-operation schema tables.
//!
//! The registry is the side table that associates schemas with the
//! parameters and return value of an operation. It is populated once during
//! a definition phase, keyed by [`OpId`] (identity, never name), and read
//! for the lifetime of the process.

pub mod op;
pub mod registry;

pub use op::OpId;
pub use registry::SchemaRegistry;
