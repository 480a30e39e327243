//! Person-intake demo — a strict schema gates one operation end to end.
//!
//! Run with:
//!   cargo run -p callgate --example profile-intake

use std::sync::Arc;

use callgate::intercept::{intercept, Operation};
use callgate::registry::{OpId, SchemaRegistry};
use callgate::schema::{CompileConfig, JsonSchema, Schema};
use serde_json::json;

const PERSON_SCHEMA: &str = r#"{
    "type": "object",
    "properties": {
        "firstName": { "type": "string", "minLength": 1, "maxLength": 10 },
        "lastName": { "type": "string", "minLength": 1, "maxLength": 16 }
    },
    "required": ["firstName", "lastName"]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CompileConfig {
        strict_mode: true,
        ..CompileConfig::default()
    };
    let person: Arc<dyn Schema> = Arc::new(JsonSchema::compile_with_config(PERSON_SCHEMA, config)?);

    // Definition phase: one registry, fully populated before any call.
    let describe = OpId::new("profile.describe");
    let mut registry = SchemaRegistry::new();
    registry.register_param(&describe, 0, Arc::clone(&person));
    registry.register_return(&describe, person);
    let registry = Arc::new(registry);

    let describe_call = intercept(registry, describe, |args| {
        let profile = args.first().cloned().unwrap_or(serde_json::Value::Null);
        eprintln!(
            "intake: {} {}",
            profile["firstName"].as_str().unwrap_or_default(),
            profile["lastName"].as_str().unwrap_or_default()
        );
        profile
    });

    let accepted = describe_call.call(&[json!({ "firstName": "john", "lastName": "deep" })])?;
    eprintln!("accepted: {accepted}");

    match describe_call.call(&[json!({ "firstName": "", "lastName": "deep" })]) {
        Ok(value) => eprintln!("unexpectedly accepted: {value}"),
        Err(err) => eprintln!("rejected: {err}"),
    }

    match describe_call.call(&[json!({ "firstName": "john", "lastName": "deep", "extra": 1 })]) {
        Ok(value) => eprintln!("unexpectedly accepted: {value}"),
        Err(err) => eprintln!("rejected: {err}"),
    }

    Ok(())
}
