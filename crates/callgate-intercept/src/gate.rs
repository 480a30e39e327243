use std::sync::Arc;

use callgate_registry::{OpId, SchemaRegistry};
use serde_json::Value;
use tracing::debug;

use crate::error::{InterceptError, Result};
use crate::op::Operation;

/// Shared handle to a populated registry.
pub type RegistryHandle = Arc<SchemaRegistry>;

/// Validates positional arguments before the inner operation runs.
///
/// Checks run in ascending index order and fail fast: the first rejection
/// aborts the call and the inner operation is never invoked. Positions past
/// the end of the argument list reach their schema as absent values; the
/// gate itself never short-circuits on missing arguments.
pub struct ParamGate {
    registry: RegistryHandle,
    op: OpId,
    inner: Box<dyn Operation>,
}

impl ParamGate {
    /// Wrap `inner` with parameter validation for `op`.
    pub fn new(registry: RegistryHandle, op: OpId, inner: Box<dyn Operation>) -> Self {
        Self {
            registry,
            op,
            inner,
        }
    }
}

impl Operation for ParamGate {
    fn call(&self, args: &[Value]) -> Result<Value> {
        for (index, schema) in self.registry.param_schemas(&self.op) {
            if let Err(detail) = schema.validate(args.get(index)) {
                debug!(op = %self.op, index, "parameter rejected");
                return Err(InterceptError::ParameterInvalid {
                    op: self.op.clone(),
                    index,
                    detail,
                });
            }
        }
        // Accepted values from parameter schemas are discarded: the inner
        // operation always receives the caller's original arguments.
        self.inner.call(args)
    }
}

/// Validates the result after the inner operation runs.
///
/// On acceptance the caller receives the schema's accepted value, which may
/// be a normalized copy of the raw result.
pub struct ReturnGate {
    registry: RegistryHandle,
    op: OpId,
    inner: Box<dyn Operation>,
}

impl ReturnGate {
    /// Wrap `inner` with return validation for `op`.
    pub fn new(registry: RegistryHandle, op: OpId, inner: Box<dyn Operation>) -> Self {
        Self {
            registry,
            op,
            inner,
        }
    }
}

impl Operation for ReturnGate {
    fn call(&self, args: &[Value]) -> Result<Value> {
        let result = self.inner.call(args)?;
        match self.registry.return_schema(&self.op) {
            Some(schema) => match schema.validate(Some(&result)) {
                Ok(accepted) => Ok(accepted),
                Err(detail) => {
                    debug!(op = %self.op, "return value rejected");
                    Err(InterceptError::ReturnInvalid {
                        op: self.op.clone(),
                        detail,
                    })
                }
            },
            None => Ok(result),
        }
    }
}

struct Body<F>(F);

impl<F> Operation for Body<F>
where
    F: Fn(&[Value]) -> Value + Send + Sync,
{
    fn call(&self, args: &[Value]) -> Result<Value> {
        Ok((self.0)(args))
    }
}

/// Wrap `op_fn` with both gates for `op`.
///
/// The parameter gate sits innermost so it gates the real input; the return
/// gate sits outermost so it sees the real computed output. The two gates
/// are otherwise independent and this order is the fixed convention applied
/// here; callers wanting a single side construct [`ParamGate`] or
/// [`ReturnGate`] directly.
pub fn intercept<F>(registry: RegistryHandle, op: OpId, op_fn: F) -> ReturnGate
where
    F: Fn(&[Value]) -> Value + Send + Sync + 'static,
{
    let params = ParamGate::new(Arc::clone(&registry), op.clone(), Box::new(Body(op_fn)));
    ReturnGate::new(registry, op, Box::new(params))
}
