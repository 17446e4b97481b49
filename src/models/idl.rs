//! IDL model
//!
//! The root aggregate for a loaded schema. An [`Idl`] is built once by the
//! loader, walked once by the generator, and never mutated in between.

use crate::models::instruction::{Account, Instruction};
use crate::models::types::IdlType;

/// Interface Definition Language (IDL) for a Solana program
///
/// All four lists keep their declared order; the generator relies on that to
/// produce byte-identical output across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Idl {
    /// Program address (base58)
    pub address: String,
    /// Program metadata
    pub metadata: Metadata,
    /// Program instructions
    pub instructions: Vec<Instruction>,
    /// Program account layouts
    pub accounts: Vec<Account>,
    /// Program errors
    pub errors: Vec<ErrorDef>,
    /// Custom types referenced from arguments and accounts
    pub types: Vec<TypeDef>,
}

/// Program metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Program name
    pub name: String,
    /// Program version
    pub version: String,
    /// IDL spec version
    pub spec: String,
    /// Program description
    pub description: String,
}

/// Error definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDef {
    /// Error code
    pub code: u32,
    /// Error name
    pub name: String,
    /// Error message
    pub msg: String,
}

/// Custom type definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    /// Type name, referenced elsewhere via `IdlType::Defined`
    pub name: String,
    /// Type shape
    pub ty: IdlType,
}

impl Idl {
    /// Returns the discriminator for the instruction name.
    ///
    /// Linear scan in declared order; with duplicate names the first match
    /// wins. Returns all-zero bytes when no instruction matches — callers
    /// that must distinguish "not found" from a legitimately zero
    /// discriminator should use [`Idl::instruction`] instead.
    pub fn get_discriminator(&self, name: &str) -> [u8; 8] {
        for instr in &self.instructions {
            if instr.name == name {
                return instr.discriminator;
            }
        }
        [0u8; 8]
    }

    /// Looks up an instruction by name, first match in declared order.
    pub fn instruction(&self, name: &str) -> Option<&Instruction> {
        self.instructions.iter().find(|i| i.name == name)
    }
}
