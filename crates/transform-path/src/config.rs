//! Key configuration.
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `TRANSFORM_PATH_TRUNCATE` | Key length in hex chars, 1-32 (default: 32) |

use std::env::VarError;

use serde::{Deserialize, Serialize};

use crate::digest::TruncateLength;
use crate::error::{TransformPathError, TransformPathResult};

pub const TRUNCATE_ENV: &str = "TRANSFORM_PATH_TRUNCATE";

/// How cache keys are rendered from a path digest.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyConfig {
    /// Keep only this many leading hex characters. `None` keeps all 32.
    pub truncate: Option<TruncateLength>,
}

impl KeyConfig {
    /// Parse from YAML, e.g. `truncate: 12`.
    pub fn from_yaml_str(yaml: &str) -> TransformPathResult<Self> {
        serde_yaml::from_str(yaml).map_err(|e| TransformPathError::config(e.to_string()))
    }

    /// Load from the process environment.
    ///
    /// A value that is set but not valid UTF-8 is an error, not "unset".
    pub fn from_env() -> TransformPathResult<Self> {
        let raw = match std::env::var(TRUNCATE_ENV) {
            Ok(raw) => Some(raw),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                return Err(TransformPathError::config(format!(
                    "{TRUNCATE_ENV}: not valid UTF-8"
                )))
            }
        };
        Self::from_raw(raw)
    }

    /// Load from any key lookup (environment-shaped).
    pub fn from_lookup<F>(lookup: F) -> TransformPathResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_raw(lookup(TRUNCATE_ENV))
    }

    fn from_raw(raw: Option<String>) -> TransformPathResult<Self> {
        let truncate = match raw {
            Some(raw) if !raw.trim().is_empty() => {
                let n: i64 = raw.trim().parse().map_err(|_| {
                    TransformPathError::config(format!(
                        "{TRUNCATE_ENV}: {}",
                        TransformPathError::range(raw.trim())
                    ))
                })?;
                let len = TruncateLength::try_from(n)
                    .map_err(|e| TransformPathError::config(format!("{TRUNCATE_ENV}: {e}")))?;
                Some(len)
            }
            _ => None,
        };
        Ok(Self { truncate })
    }

    /// Set the truncation length.
    pub fn with_truncate(mut self, len: TruncateLength) -> Self {
        self.truncate = Some(len);
        self
    }
}
