//! Content identity for source data.
//!
//! A path only changes when its tokens change. When the source bytes behind a
//! stable id can change, embed their content id so the key follows the data.

use sha2::{Digest, Sha256};

use crate::path::TransformPath;

/// Content id of `bytes` in the form `sha256:<64 lowercase hex>`.
pub fn content_id(bytes: impl AsRef<[u8]>) -> String {
    let mut h = Sha256::new();
    h.update(bytes.as_ref());
    format!("sha256:{}", hex::encode(h.finalize()))
}

impl TransformPath {
    /// Path for `source_id` whose first step pins the source content.
    ///
    /// ```
    /// use transform_path::TransformPath;
    ///
    /// let path = TransformPath::from_content("Image.423", b"raw pixels");
    /// assert!(path.steps()[1].starts_with("sha256:"));
    /// ```
    pub fn from_content(source_id: impl Into<String>, bytes: impl AsRef<[u8]>) -> Self {
        Self::from_source(source_id).with_step(content_id(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_id_known_vector() {
        assert_eq!(
            content_id("hello"),
            "sha256:2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn content_change_changes_key() {
        let a = TransformPath::from_content("Image.423", b"v1").with_step("crop");
        let b = TransformPath::from_content("Image.423", b"v2").with_step("crop");
        assert_eq!(a.source_id(), b.source_id());
        assert_ne!(a.digest(), b.digest());
    }
}
