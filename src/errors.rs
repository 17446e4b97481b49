//! Error handling for the IDL code generator.
//!
//! Every loader failure carries the path of the offending field
//! (`instructions[3].accounts[1].pda.seeds[0]`) so a bad schema can be fixed
//! without guessing. Generation itself has no error type: a schema that came
//! out of the loader always emits, and nothing is ever emitted partially.

use thiserror::Error;

/// Main error type for the code generator.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Errors related to file I/O, such as file not found or permission denied.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structural errors from the JSON layer: missing required keys, wrong
    /// value types, trailing garbage.
    #[error("schema error at {path}: {message}")]
    Parse {
        /// JSON path of the offending value
        path: String,
        /// Underlying deserializer message
        message: String,
    },

    /// A named entity (instruction, account, argument, error, type) with an
    /// empty name.
    #[error("schema error at {path}: name must not be empty")]
    MissingName {
        /// Path of the empty name
        path: String,
    },

    /// An instruction discriminator that is not exactly 8 bytes.
    #[error("schema error at {path}: discriminator must be 8 bytes, got {len}")]
    MalformedDiscriminator {
        /// Path of the discriminator
        path: String,
        /// Number of bytes actually present
        len: usize,
    },

    /// A type expression that matches none of the recognized shapes.
    #[error("schema error at {path}: unrecognized type shape")]
    UnknownTypeShape {
        /// Path of the type expression
        path: String,
    },

    /// A PDA seed whose `kind` tag is not one of the recognized kinds.
    #[error("schema error at {path}: unknown seed kind `{kind}`")]
    UnknownSeedKind {
        /// Path of the seed
        path: String,
        /// The unrecognized tag
        kind: String,
    },

    /// A PDA rule with an empty seed list.
    #[error("schema error at {path}: pda must declare at least one seed")]
    EmptySeeds {
        /// Path of the seed list
        path: String,
    },
}

/// Result type alias for the code generator.
pub type CodegenResult<T> = Result<T, CodegenError>;
