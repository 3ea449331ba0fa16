//! Digest primitives: the step separator, MD5 hex rendering and the
//! validated truncation length.
//!
//! Changing any of these invalidates every key derived so far.

use serde::{Deserialize, Serialize};

use crate::error::{TransformPathError, TransformPathResult};

/// Separator placed between steps before hashing.
pub const STEP_SEPARATOR: &str = "\n";

/// Length of a full hex digest (128-bit MD5).
pub const DIGEST_HEX_LEN: usize = 32;

/// Lowercase hex MD5 of `data`. Always [`DIGEST_HEX_LEN`] chars of `[0-9a-f]`.
pub(crate) fn md5_hex(data: impl AsRef<[u8]>) -> String {
    format!("{:x}", md5::compute(data))
}

/// Number of leading hex characters to keep from a digest, in `[1, 32]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TruncateLength(usize);

impl TruncateLength {
    /// Full-length digest.
    pub const FULL: Self = Self(DIGEST_HEX_LEN);

    /// Validate a truncation length.
    ///
    /// ```
    /// use transform_path::TruncateLength;
    ///
    /// assert_eq!(TruncateLength::new(15).unwrap().get(), 15);
    /// assert!(TruncateLength::new(0).is_err());
    /// assert!(TruncateLength::new(33).is_err());
    /// ```
    pub fn new(len: usize) -> TransformPathResult<Self> {
        if (1..=DIGEST_HEX_LEN).contains(&len) {
            Ok(Self(len))
        } else {
            Err(TransformPathError::range(len))
        }
    }

    /// Validate a truncation length taken from an untyped JSON value.
    ///
    /// Floats, strings, and other non-integers are rejected as range errors.
    pub fn from_json(value: &serde_json::Value) -> TransformPathResult<Self> {
        match value.as_i64() {
            Some(n) => Self::try_from(n),
            None => Err(TransformPathError::range(value)),
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Prefix of `hex` of this length. `hex` must be a full digest.
    pub(crate) fn apply(self, hex: &str) -> &str {
        &hex[..self.0]
    }
}

impl Default for TruncateLength {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<i64> for TruncateLength {
    type Error = TransformPathError;

    fn try_from(value: i64) -> TransformPathResult<Self> {
        let len = usize::try_from(value).map_err(|_| TransformPathError::range(value))?;
        Self::new(len)
    }
}

impl TryFrom<usize> for TruncateLength {
    type Error = TransformPathError;

    fn try_from(value: usize) -> TransformPathResult<Self> {
        Self::new(value)
    }
}

impl From<TruncateLength> for i64 {
    fn from(len: TruncateLength) -> Self {
        len.0 as i64
    }
}

impl std::fmt::Display for TruncateLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
