/// Controls how the bundled JSON Schema collaborator compiles documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileConfig {
    /// When true, object schemas reject properties they do not declare.
    pub strict_mode: bool,
    /// Maximum violations reported in a single failure.
    pub max_reported_violations: usize,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            strict_mode: false,
            max_reported_violations: 4,
        }
    }
}
