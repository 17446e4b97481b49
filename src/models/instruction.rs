//! Instruction metadata for Solana programs

use crate::models::types::IdlType;

/// Represents a program instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Instruction name, unique within the schema
    pub name: String,
    /// Anchor discriminator (8 bytes), prefixed to the wire payload.
    ///
    /// Supplied by the schema and preserved verbatim; never derived from the
    /// name here.
    pub discriminator: [u8; 8],
    /// Required accounts, in wire order
    pub accounts: Vec<Account>,
    /// Instruction arguments, in wire order
    pub args: Vec<Arg>,
}

/// Represents an instruction argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg {
    /// Argument name
    pub name: String,
    /// Argument type
    pub ty: IdlType,
}

/// Represents an account slot used by an instruction.
///
/// The same shape describes entries in the schema's top-level `accounts`
/// list, where it is a storage layout rather than an instruction parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Account name, unique within the instruction
    pub name: String,
    /// Is this account writable? Defaults to `false` when omitted.
    pub writable: bool,
    /// Is this account a signer? Defaults to `false` when omitted.
    pub signer: bool,
    /// Well-known fixed address, if any
    pub address: Option<String>,
    /// Derivation rule, when the account is a PDA
    pub pda: Option<Pda>,
}

/// Represents a program-derived address derivation rule.
///
/// Seeds are concatenated in declared order before hashing; reordering them
/// changes the derived address, so the order is never normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pda {
    /// Ordered seed inputs, at least one
    pub seeds: Vec<Seed>,
}

/// One seed input to PDA derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    /// Constant bytes
    Const {
        /// Raw seed bytes
        value: Vec<u8>,
    },
    /// The address of another account in the same instruction
    Account {
        /// Name of the referenced account
        path: String,
    },
    /// The value of one of the instruction's arguments
    Arg {
        /// Name of the referenced argument
        path: String,
    },
    /// A literal UTF-8 string
    Str {
        /// Seed string
        value: String,
    },
}
