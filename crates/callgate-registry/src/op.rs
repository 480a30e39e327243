use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_OP_SEQ: AtomicU64 = AtomicU64::new(1);

/// Stable identity for one declared operation.
///
/// Identity is allocation-based: an `OpId` is equal only to its own clones.
/// The name is a diagnostic label; two independently declared operations may
/// share a name without ever colliding in the registry.
#[derive(Debug, Clone)]
pub struct OpId {
    seq: u64,
    name: Arc<str>,
}

impl OpId {
    /// Allocate a fresh identity with a diagnostic name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            seq: NEXT_OP_SEQ.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
        }
    }

    /// The diagnostic name this identity was declared with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Allocation sequence number; unique per identity.
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

impl PartialEq for OpId {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for OpId {}

impl Hash for OpId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.seq.hash(state);
    }
}

impl fmt::Display for OpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
