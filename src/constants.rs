//! Constants used throughout the code generator

/// Discriminator constants
pub mod discriminators {
    /// Namespace Anchor prepends to the instruction name before hashing.
    pub const ANCHOR_DISCRIMINATOR_NAMESPACE: &str = "global";

    /// Wire length of an instruction discriminator in bytes.
    pub const DISCRIMINATOR_LENGTH: usize = 8;
}
