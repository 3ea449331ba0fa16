//! Construction from untyped input.
//!
//! Typed callers cannot hand [`TransformPath`] anything but text. Paths
//! rebuilt from JSON can, so tokens are checked here: every token must be a
//! JSON string. Numbers, booleans, null, arrays and objects are rejected.

use serde_json::Value;
use tracing::debug;

use crate::error::{TransformPathError, TransformPathResult};
use crate::path::TransformPath;

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn text_token(index: usize, value: &Value) -> TransformPathResult<&str> {
    value.as_str().ok_or_else(|| {
        let err = TransformPathError::validation(
            index,
            format!("expected a string, got {}", kind(value)),
        );
        debug!(error = %err, "rejected transform step");
        err
    })
}

impl TransformPath {
    /// Build a path from an untyped source id and extra steps.
    ///
    /// All or nothing: if any token is not a string, no path is returned.
    ///
    /// ```
    /// use serde_json::json;
    /// use transform_path::TransformPath;
    ///
    /// let path = TransformPath::from_values(&json!("Image.423"), &[json!("crop")]).unwrap();
    /// assert_eq!(path.step_count(), 2);
    ///
    /// assert!(TransformPath::from_values(&json!(42), &[]).is_err());
    /// assert!(TransformPath::from_values(&json!("id"), &[json!(null)]).is_err());
    /// ```
    pub fn from_values(source_id: &Value, extra_steps: &[Value]) -> TransformPathResult<Self> {
        let source_id = text_token(0, source_id)?;
        let steps = extra_steps
            .iter()
            .enumerate()
            .map(|(i, v)| text_token(i + 1, v))
            .collect::<TransformPathResult<Vec<_>>>()?;
        Ok(Self::new(source_id, steps))
    }

    /// Build a path from a JSON array of strings, source id first.
    pub fn from_json(value: &Value) -> TransformPathResult<Self> {
        match value.as_array().map(Vec::as_slice) {
            Some([source_id, rest @ ..]) => Self::from_values(source_id, rest),
            Some([]) => Err(TransformPathError::validation(
                0,
                "a transform path needs a source id",
            )),
            None => Err(TransformPathError::validation(
                0,
                format!("expected an array of strings, got {}", kind(value)),
            )),
        }
    }

    /// Append an untyped step. On error the path is left unchanged.
    pub fn add_value(&mut self, step: &Value) -> TransformPathResult<()> {
        let step = text_token(self.step_count(), step)?;
        self.add(step);
        Ok(())
    }
}

impl TryFrom<&Value> for TransformPath {
    type Error = TransformPathError;

    fn try_from(value: &Value) -> TransformPathResult<Self> {
        Self::from_json(value)
    }
}
