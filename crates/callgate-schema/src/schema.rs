use serde_json::Value;

use crate::detail::FailureDetail;

/// A validation capability: check one value, return the accepted value or a
/// structured failure.
///
/// `validate` receives `None` when the value was absent at the boundary;
/// schemas decide whether absence is acceptable. On success the schema
/// returns the accepted value, which may be a normalized copy rather than a
/// bit-identical echo of the input.
pub trait Schema: Send + Sync {
    /// Validate `value`, returning the accepted (possibly normalized) value.
    fn validate(&self, value: Option<&Value>) -> Result<Value, FailureDetail>;
}

/// Adapter that turns a plain function into a [`Schema`].
///
/// The simplest collaborator, and the vehicle for schemas that normalize.
pub struct FnSchema<F> {
    check: F,
}

impl<F> FnSchema<F>
where
    F: Fn(Option<&Value>) -> Result<Value, FailureDetail> + Send + Sync,
{
    /// Wrap a validation function.
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

impl<F> Schema for FnSchema<F>
where
    F: Fn(Option<&Value>) -> Result<Value, FailureDetail> + Send + Sync,
{
    fn validate(&self, value: Option<&Value>) -> Result<Value, FailureDetail> {
        (self.check)(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn fn_schema_accepts_and_rejects() {
        let positive = FnSchema::new(|value: Option<&Value>| match value {
            Some(v) if v.as_i64().is_some_and(|n| n > 0) => Ok(v.clone()),
            Some(_) => Err(FailureDetail::new("not a positive integer")),
            None => Err(FailureDetail::new("absent")),
        });

        assert_eq!(positive.validate(Some(&json!(3))).unwrap(), json!(3));
        assert!(positive.validate(Some(&json!(-1))).is_err());
        assert_eq!(
            positive.validate(None).unwrap_err(),
            FailureDetail::new("absent")
        );
    }

    #[test]
    fn fn_schema_may_normalize() {
        let trimmed = FnSchema::new(|value: Option<&Value>| match value.and_then(Value::as_str) {
            Some(s) => Ok(json!(s.trim())),
            None => Err(FailureDetail::new("not a string")),
        });

        assert_eq!(
            trimmed.validate(Some(&json!("  padded  "))).unwrap(),
            json!("padded")
        );
    }
}
