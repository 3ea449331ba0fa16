//! Deterministic cache keys for chains of sequential data transforms.
//!
//! A [`TransformPath`] records a source identifier followed by a description
//! of every transform applied to it, in order. Its digest is a 32-character
//! lowercase hex string that changes whenever the source id or any step
//! changes, and is safe to embed in file names and URLs.
//!
//! # Quick Start
//!
//! ```
//! use transform_path::TransformPath;
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut path = TransformPath::from_source("Image.423");
//! path.add("constrain(800x600)");
//!
//! let key = path.digest();
//! assert_eq!(key, "293f35408a796dab5a3fc387b9797455");
//!
//! // Shorter keys are prefixes of the full digest.
//! assert_eq!(path.digest_prefix(15)?, &key[..15]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Choosing a source id
//!
//! The key only sees tokens, never data. Use an id that is stable for the
//! life of the cache, or pin the content with
//! [`TransformPath::from_content`].
//!
//! # Serialization
//!
//! Steps are joined with `\n` and hashed with MD5. A step containing `\n`
//! can therefore collide with a differently split sequence; steps should be
//! short tags. The format is fixed: any change would orphan existing keys.
//!
//! # Concurrency
//!
//! Paths are plain values. Share them read-only behind `Arc`; appending
//! requires `&mut`, so shared mutation needs a `Mutex` or similar.

pub mod config;
pub mod digest;
pub mod error;
pub mod path;
pub mod source;
mod value;

pub use config::{KeyConfig, TRUNCATE_ENV};
pub use digest::{TruncateLength, DIGEST_HEX_LEN, STEP_SEPARATOR};
pub use error::{TransformPathError, TransformPathResult};
pub use path::TransformPath;
pub use source::content_id;
