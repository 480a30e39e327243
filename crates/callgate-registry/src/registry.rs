use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use callgate_schema::Schema;

use crate::op::OpId;

/// Per-operation schema attachments, keyed by operation identity.
///
/// Populated during a single-threaded definition phase, read-only
/// afterwards; entries are never removed. Share post-definition as
/// `Arc<SchemaRegistry>` — the immutable registry is safe for concurrent
/// readers.
pub struct SchemaRegistry {
    ops: HashMap<OpId, OpSchemas>,
}

#[derive(Default)]
struct OpSchemas {
    params: BTreeMap<usize, Arc<dyn Schema>>,
    ret: Option<Arc<dyn Schema>>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            ops: HashMap::new(),
        }
    }

    /// Attach `schema` to parameter `index` of `op`.
    ///
    /// Re-registering an index replaces the earlier schema; the table never
    /// accumulates duplicates for one position.
    pub fn register_param(&mut self, op: &OpId, index: usize, schema: Arc<dyn Schema>) {
        self.ops
            .entry(op.clone())
            .or_default()
            .params
            .insert(index, schema);
    }

    /// Attach `schema` to the return value of `op`, replacing any prior one.
    pub fn register_return(&mut self, op: &OpId, schema: Arc<dyn Schema>) {
        self.ops.entry(op.clone()).or_default().ret = Some(schema);
    }

    /// Parameter schemas for `op`, ascending by index.
    ///
    /// Indices may be sparse; positions without a schema are simply absent.
    /// Empty for operations that never registered a parameter.
    pub fn param_schemas(&self, op: &OpId) -> Vec<(usize, Arc<dyn Schema>)> {
        match self.ops.get(op) {
            Some(entry) => entry
                .params
                .iter()
                .map(|(index, schema)| (*index, Arc::clone(schema)))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Return schema for `op`, if one was registered.
    pub fn return_schema(&self, op: &OpId) -> Option<Arc<dyn Schema>> {
        self.ops.get(op).and_then(|entry| entry.ret.clone())
    }

    /// Whether `op` has any parameter or return schema.
    pub fn has_schemas(&self, op: &OpId) -> bool {
        self.ops
            .get(op)
            .is_some_and(|entry| !entry.params.is_empty() || entry.ret.is_some())
    }

    /// Operations with registry entries, in declaration order.
    pub fn ops(&self) -> Vec<OpId> {
        let mut ops: Vec<OpId> = self.ops.keys().cloned().collect();
        ops.sort_unstable_by_key(OpId::seq);
        ops
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use callgate_schema::{FailureDetail, FnSchema};
    use serde_json::{json, Value};

    use super::*;

    fn tagged(tag: i64) -> Arc<dyn Schema> {
        Arc::new(FnSchema::new(move |_: Option<&Value>| Ok(json!(tag))))
    }

    fn rejecting(reason: &'static str) -> Arc<dyn Schema> {
        Arc::new(FnSchema::new(move |_: Option<&Value>| {
            Err(FailureDetail::new(reason))
        }))
    }

    #[test]
    fn unknown_op_is_empty_not_an_error() {
        let registry = SchemaRegistry::new();
        let op = OpId::new("never.registered");

        assert!(registry.param_schemas(&op).is_empty());
        assert!(registry.return_schema(&op).is_none());
        assert!(!registry.has_schemas(&op));
    }

    #[test]
    fn param_schemas_are_ordered_and_sparse() {
        let mut registry = SchemaRegistry::new();
        let op = OpId::new("sparse");

        registry.register_param(&op, 3, tagged(3));
        registry.register_param(&op, 0, tagged(0));
        registry.register_param(&op, 7, tagged(7));

        let indices: Vec<usize> = registry
            .param_schemas(&op)
            .iter()
            .map(|(index, _)| *index)
            .collect();
        assert_eq!(indices, vec![0, 3, 7]);
    }

    #[test]
    fn re_registration_replaces_not_accumulates() {
        let mut registry = SchemaRegistry::new();
        let op = OpId::new("rebind");

        registry.register_param(&op, 0, tagged(1));
        registry.register_param(&op, 0, rejecting("second wins"));

        let params = registry.param_schemas(&op);
        assert_eq!(params.len(), 1);
        assert_eq!(
            params[0].1.validate(None).unwrap_err(),
            FailureDetail::new("second wins")
        );
    }

    #[test]
    fn return_slot_overwrites() {
        let mut registry = SchemaRegistry::new();
        let op = OpId::new("rebind.return");

        registry.register_return(&op, tagged(1));
        registry.register_return(&op, tagged(2));

        let ret = registry.return_schema(&op).unwrap();
        assert_eq!(ret.validate(None).unwrap(), json!(2));
    }

    #[test]
    fn identity_keys_never_collide_by_name() {
        let mut registry = SchemaRegistry::new();
        let first = OpId::new("dup.name");
        let second = OpId::new("dup.name");

        registry.register_param(&first, 0, tagged(1));

        assert!(registry.has_schemas(&first));
        assert!(!registry.has_schemas(&second));
        assert!(registry.param_schemas(&second).is_empty());
    }

    #[test]
    fn ops_lists_in_declaration_order() {
        let mut registry = SchemaRegistry::new();
        let first = OpId::new("first");
        let second = OpId::new("second");

        registry.register_return(&second, tagged(2));
        registry.register_param(&first, 0, tagged(1));

        assert_eq!(registry.ops(), vec![first, second]);
    }
}
