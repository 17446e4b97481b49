//! A library for generating Rust source declarations from Solana program IDL files
//!
//! This crate parses an Anchor-style IDL JSON document into a typed schema
//! and renders it back out as Rust literal declarations, preserving the
//! 8-byte instruction discriminators and PDA seed encodings byte-exactly so
//! that generated clients stay wire-compatible with the on-chain program.

pub mod constants;
pub mod errors;
pub mod generator;
pub mod loader;
pub mod models;
pub mod utils;

pub use errors::{CodegenError, CodegenResult};
pub use models::idl::{ErrorDef, Idl, Metadata, TypeDef};
pub use models::instruction::{Account, Arg, Instruction, Pda, Seed};
pub use models::types::{Field, IdlType};

/// Main entry point: parse a raw IDL document and render it as Rust source.
///
/// `module_name` is the path the generated file imports the model types
/// from; `binding_name` names the emitted static. On failure nothing is
/// emitted; the error carries the path of the offending schema field.
pub fn generate(raw: &[u8], module_name: &str, binding_name: &str) -> CodegenResult<String> {
    let idl = loader::load_idl(raw)?;
    Ok(generator::generate_rust(&idl, module_name, binding_name))
}

/// Version of the code generator
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
