use serde_json::Value;

use crate::error::Result;

/// A callable operation over positional JSON arguments.
///
/// Gates implement this too, so a wrapped operation composes exactly like
/// the operation it wraps.
pub trait Operation: Send + Sync {
    /// Invoke the operation.
    fn call(&self, args: &[Value]) -> Result<Value>;
}

impl<F> Operation for F
where
    F: Fn(&[Value]) -> Result<Value> + Send + Sync,
{
    fn call(&self, args: &[Value]) -> Result<Value> {
        self(args)
    }
}
