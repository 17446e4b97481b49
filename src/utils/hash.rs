//! Hashing utilities

use sha2::{Digest, Sha256};

/// Derive the Anchor discriminator for an instruction name.
///
/// Computes `sha256("global:<name>")` and takes the first 8 bytes. Loaded
/// schemas carry their discriminators verbatim and the loader never calls
/// this; it exists for consumers that want to cross-check a schema against
/// the upstream Anchor hashing scheme.
pub fn anchor_discriminator(name: &str) -> [u8; 8] {
    let namespace = format!(
        "{}:{}",
        crate::constants::discriminators::ANCHOR_DISCRIMINATOR_NAMESPACE,
        name
    );
    let mut hasher = Sha256::new();
    hasher.update(namespace.as_bytes());
    let hash = hasher.finalize();

    let mut result = [0u8; 8];
    result.copy_from_slice(&hash[..8]);
    result
}
