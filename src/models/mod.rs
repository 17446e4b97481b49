//! Data models for Solana program IDL

pub mod idl;
pub mod instruction;
pub mod types;


pub use self::idl::{ErrorDef, Idl, Metadata, TypeDef};
pub use self::instruction::{Account, Arg, Instruction, Pda, Seed};
pub use self::types::{Field, IdlType};
