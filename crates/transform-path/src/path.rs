//! The ordered step sequence and its digest.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::KeyConfig;
use crate::digest::{md5_hex, TruncateLength, STEP_SEPARATOR};
use crate::error::{TransformPathError, TransformPathResult};

/// A source identifier followed by the transforms applied to it, in order.
///
/// The sequence is append-only and never empty: `steps[0]` is always the
/// source id.
///
/// Steps are joined with `\n` before hashing, so `["a\nb", "c"]` and
/// `["a", "b\nc"]` produce the same digest. Steps are expected to be short
/// tags without embedded newlines; the join is kept as-is so existing keys
/// stay valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct TransformPath {
    steps: Vec<String>,
}

impl TransformPath {
    /// Create a path from a source id and any number of initial steps.
    ///
    /// ```
    /// use transform_path::TransformPath;
    ///
    /// let path = TransformPath::new("Image.423", ["constrain(800x600)"]);
    /// assert_eq!(path.source_id(), "Image.423");
    /// assert_eq!(path.digest(), "293f35408a796dab5a3fc387b9797455");
    /// ```
    pub fn new<I, S>(source_id: impl Into<String>, extra_steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut steps = vec![source_id.into()];
        steps.extend(extra_steps.into_iter().map(Into::into));
        debug!(steps = steps.len(), "created transform path");
        Self { steps }
    }

    /// Create a path holding only the source id.
    pub fn from_source(source_id: impl Into<String>) -> Self {
        Self::new(source_id, std::iter::empty::<String>())
    }

    /// Append one transform step.
    pub fn add(&mut self, step: impl Into<String>) -> &mut Self {
        self.steps.push(step.into());
        debug!(steps = self.steps.len(), "appended transform step");
        self
    }

    /// Builder form of [`add`](Self::add).
    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.add(step);
        self
    }

    pub fn source_id(&self) -> &str {
        &self.steps[0]
    }

    /// All steps, source id first.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Number of steps including the source id. Always at least 1.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// The exact text that is hashed: all steps joined by `\n`.
    pub fn serialized(&self) -> String {
        self.steps.join(STEP_SEPARATOR)
    }

    /// Full 32-character lowercase hex digest of the path.
    pub fn digest(&self) -> String {
        let hex = md5_hex(self.serialized());
        debug!(steps = self.steps.len(), len = hex.len(), "computed path digest");
        hex
    }

    /// The first `len` characters of [`digest`](Self::digest).
    ///
    /// Fails with a range error unless `len` is in `[1, 32]`.
    pub fn digest_prefix(&self, len: usize) -> TransformPathResult<String> {
        let len = TruncateLength::new(len).inspect_err(|e| {
            debug!(error = %e, "rejected digest truncation");
        })?;
        Ok(self.digest_with(Some(len)))
    }

    /// Digest truncated to an already validated length, or full length for `None`.
    pub fn digest_with(&self, truncate: Option<TruncateLength>) -> String {
        let hex = self.digest();
        match truncate {
            Some(len) => len.apply(&hex).to_string(),
            None => hex,
        }
    }

    /// Cache key under the given configuration.
    pub fn key(&self, config: &KeyConfig) -> String {
        self.digest_with(config.truncate)
    }
}

impl TryFrom<Vec<String>> for TransformPath {
    type Error = TransformPathError;

    fn try_from(steps: Vec<String>) -> TransformPathResult<Self> {
        if steps.is_empty() {
            return Err(TransformPathError::validation(
                0,
                "a transform path needs a source id",
            ));
        }
        Ok(Self { steps })
    }
}

impl From<TransformPath> for Vec<String> {
    fn from(path: TransformPath) -> Self {
        path.steps
    }
}

impl std::fmt::Display for TransformPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.steps.join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VECTOR: &str = "293f35408a796dab5a3fc387b9797455";

    #[test]
    fn add_then_digest_matches_vector() {
        let mut path = TransformPath::from_source("Image.423");
        path.add("constrain(800x600)");
        assert_eq!(path.digest(), VECTOR);
        assert_eq!(path.digest_prefix(15).unwrap(), &VECTOR[..15]);
    }

    #[test]
    fn source_only_digest() {
        let path = TransformPath::from_source("Image.423");
        assert_eq!(path.step_count(), 1);
        assert_eq!(path.digest(), "837e2ef9d580181a677c70ccea50c7ef");
    }

    #[test]
    fn add_preserves_order_and_source() {
        let mut path = TransformPath::new("src", ["one"]);
        path.add("two").add("three");
        assert_eq!(path.steps(), &["src", "one", "two", "three"]);
        assert_eq!(path.source_id(), "src");
    }

    #[test]
    fn with_step_matches_add() {
        let built = TransformPath::from_source("a").with_step("b").with_step("c");
        let mut added = TransformPath::from_source("a");
        added.add("b").add("c");
        assert_eq!(built, added);
        assert_eq!(built.digest(), "c32b2057b9bd62caa835386346177935");
    }

    #[test]
    fn serialized_uses_newline() {
        let path = TransformPath::new("a", ["b", "c"]);
        assert_eq!(path.serialized(), "a\nb\nc");
    }

    #[test]
    fn empty_source_id_is_allowed() {
        let path = TransformPath::from_source("");
        assert_eq!(path.source_id(), "");
        assert_eq!(path.digest(), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn digest_prefix_rejects_out_of_range() {
        let path = TransformPath::from_source("x");
        assert!(path.digest_prefix(0).unwrap_err().is_range());
        assert!(path.digest_prefix(33).unwrap_err().is_range());
        assert_eq!(path.digest_prefix(32).unwrap(), path.digest());
    }

    #[test]
    fn digest_does_not_mutate() {
        let path = TransformPath::new("x", ["y"]);
        let before = path.clone();
        let _ = path.digest();
        let _ = path.digest_prefix(4);
        assert_eq!(path, before);
    }

    #[test]
    fn serde_round_trip_as_array() {
        let path = TransformPath::new("Image.423", ["constrain(800x600)"]);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"["Image.423","constrain(800x600)"]"#);
        let back: TransformPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back.digest(), VECTOR);
    }

    #[test]
    fn serde_rejects_empty_array() {
        assert!(serde_json::from_str::<TransformPath>("[]").is_err());
        assert!(serde_json::from_str::<TransformPath>("[1]").is_err());
    }

    #[test]
    fn display_is_not_the_serialization() {
        let path = TransformPath::new("img", ["crop", "scale"]);
        assert_eq!(path.to_string(), "img -> crop -> scale");
    }
}
