use jsonschema::Validator;
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::CompileConfig;
use crate::detail::FailureDetail;
use crate::error::{Result, SchemaError};
use crate::schema::Schema;

/// A [`Schema`] backed by a compiled JSON Schema document.
///
/// Accepted values are returned unchanged; this collaborator validates but
/// does not normalize.
pub struct JsonSchema {
    compiled: Validator,
    config: CompileConfig,
}

impl JsonSchema {
    /// Compile a schema from a JSON string with default config.
    pub fn compile(schema_json: &str) -> Result<Self> {
        Self::compile_with_config(schema_json, CompileConfig::default())
    }

    /// Compile a schema from a JSON string.
    pub fn compile_with_config(schema_json: &str, config: CompileConfig) -> Result<Self> {
        let schema: Value = serde_json::from_str(schema_json)?;
        Self::from_value(&schema, config)
    }

    /// Compile a schema from a JSON value.
    pub fn from_value(schema: &Value, config: CompileConfig) -> Result<Self> {
        let mut document = schema.clone();
        if config.strict_mode {
            seal_objects(&mut document);
        }

        let compiled = jsonschema::validator_for(&document)
            .map_err(|err| SchemaError::CompileFailed(err.to_string()))?;

        debug!(strict = config.strict_mode, "compiled schema");
        Ok(Self { compiled, config })
    }

    /// The config this schema was compiled with.
    pub fn config(&self) -> CompileConfig {
        self.config
    }
}

impl Schema for JsonSchema {
    fn validate(&self, value: Option<&Value>) -> std::result::Result<Value, FailureDetail> {
        // JSON Schema has no undefined; absent values validate as null.
        let absent = Value::Null;
        let value = value.unwrap_or(&absent);

        let mut errors = self.compiled.iter_errors(value);
        if let Some(first) = errors.next() {
            let mut detail = FailureDetail::new(first.to_string())
                .with_violation(first.instance_path().to_string(), first.to_string());
            let tail = self.config.max_reported_violations.saturating_sub(1);
            for err in errors.take(tail) {
                detail = detail.with_violation(err.instance_path().to_string(), err.to_string());
            }
            return Err(detail);
        }

        Ok(value.clone())
    }
}

// Keys whose value is a single subschema.
const SINGLE_SCHEMA_KEYS: &[&str] = &[
    "additionalProperties",
    "unevaluatedProperties",
    "propertyNames",
    "items",
    "additionalItems",
    "unevaluatedItems",
    "contains",
    "not",
    "if",
    "then",
    "else",
];

// Keys whose value maps names to subschemas.
const SCHEMA_MAP_KEYS: &[&str] = &[
    "properties",
    "patternProperties",
    "dependentSchemas",
    "$defs",
    "definitions",
];

// Keys whose value is an array of subschemas.
const SCHEMA_LIST_KEYS: &[&str] = &["prefixItems", "allOf", "anyOf", "oneOf"];

// Keywords that mark a schema as describing an object even without "type".
const OBJECT_KEYWORDS: &[&str] = &[
    "properties",
    "patternProperties",
    "propertyNames",
    "required",
    "dependentRequired",
    "dependentSchemas",
];

/// Inject `additionalProperties: false` into every object schema that does
/// not already set it, recursing through nested subschemas.
fn seal_objects(schema: &mut Value) {
    match schema {
        Value::Object(map) => {
            if describes_object(map) && !map.contains_key("additionalProperties") {
                map.insert("additionalProperties".to_string(), Value::Bool(false));
            }
            for key in SCHEMA_MAP_KEYS {
                if let Some(Value::Object(children)) = map.get_mut(*key) {
                    for child in children.values_mut() {
                        seal_objects(child);
                    }
                }
            }
            for key in SINGLE_SCHEMA_KEYS {
                if let Some(child) = map.get_mut(*key) {
                    seal_objects(child);
                }
            }
            for key in SCHEMA_LIST_KEYS {
                if let Some(Value::Array(children)) = map.get_mut(*key) {
                    for child in children {
                        seal_objects(child);
                    }
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                seal_objects(item);
            }
        }
        _ => {}
    }
}

fn describes_object(map: &Map<String, Value>) -> bool {
    match map.get("type") {
        Some(Value::String(kind)) => kind == "object",
        Some(Value::Array(kinds)) => kinds
            .iter()
            .any(|kind| matches!(kind, Value::String(kind) if kind == "object")),
        _ => OBJECT_KEYWORDS.iter().any(|keyword| map.contains_key(*keyword)),
    }
}
