//! Rust source generation
//!
//! Lowers a loaded [`Idl`] into a single literal initializer the target
//! crate can compile. Output is deterministic: every list is walked in
//! declared order and nothing is ever sorted or hashed, so the same schema
//! always renders to byte-identical text.

use crate::models::idl::{Idl, TypeDef};
use crate::models::instruction::{Account, Seed};
use crate::models::types::IdlType;

/// Render the schema as Rust source.
///
/// `module_name` is the path the generated file imports the model types
/// from; `binding_name` names the emitted static. Cannot fail on a schema
/// produced by the loader; a hand-built schema violating the model
/// invariants renders without re-validation.
pub fn generate(idl: &Idl, module_name: &str, binding_name: &str) -> String {
    let mut out = String::new();

    // header
    out.push_str("// Code generated by solana-idl-codegen. DO NOT EDIT.\n\n");
    out.push_str("use once_cell::sync::Lazy;\n\n");
    out.push_str(&format!(
        "use {module_name}::{{Account, Arg, ErrorDef, Field, Idl, IdlType, Instruction, Metadata, Pda, Seed, TypeDef}};\n\n"
    ));

    out.push_str(&format!(
        "pub static {binding_name}: Lazy<Idl> = Lazy::new(|| Idl {{\n"
    ));
    out.push_str(&format!("    address: {}.to_string(),\n", quote(&idl.address)));

    out.push_str("    metadata: Metadata {\n");
    out.push_str(&format!("        name: {}.to_string(),\n", quote(&idl.metadata.name)));
    out.push_str(&format!("        version: {}.to_string(),\n", quote(&idl.metadata.version)));
    out.push_str(&format!("        spec: {}.to_string(),\n", quote(&idl.metadata.spec)));
    out.push_str(&format!("        description: {}.to_string(),\n", quote(&idl.metadata.description)));
    out.push_str("    },\n");

    // instructions
    if idl.instructions.is_empty() {
        out.push_str("    instructions: vec![],\n");
    } else {
        out.push_str("    instructions: vec![\n");
        for instr in &idl.instructions {
            out.push_str("        Instruction {\n");
            out.push_str(&format!("            name: {}.to_string(),\n", quote(&instr.name)));
            out.push_str(&format!(
                "            discriminator: {},\n",
                byte_literal(&instr.discriminator)
            ));
            if instr.accounts.is_empty() {
                out.push_str("            accounts: vec![],\n");
            } else {
                out.push_str("            accounts: vec![\n");
                for acc in &instr.accounts {
                    push_account(&mut out, acc, 16);
                }
                out.push_str("            ],\n");
            }
            if instr.args.is_empty() {
                out.push_str("            args: vec![],\n");
            } else {
                out.push_str("            args: vec![\n");
                for arg in &instr.args {
                    out.push_str(&format!(
                        "                Arg {{ name: {}.to_string(), ty: {} }},\n",
                        quote(&arg.name),
                        type_literal(&arg.ty)
                    ));
                }
                out.push_str("            ],\n");
            }
            out.push_str("        },\n");
        }
        out.push_str("    ],\n");
    }

    // account layouts
    if idl.accounts.is_empty() {
        out.push_str("    accounts: vec![],\n");
    } else {
        out.push_str("    accounts: vec![\n");
        for acc in &idl.accounts {
            push_account(&mut out, acc, 8);
        }
        out.push_str("    ],\n");
    }

    // errors
    if idl.errors.is_empty() {
        out.push_str("    errors: vec![],\n");
    } else {
        out.push_str("    errors: vec![\n");
        for err in &idl.errors {
            out.push_str(&format!(
                "        ErrorDef {{ code: {}, name: {}.to_string(), msg: {}.to_string() }},\n",
                err.code,
                quote(&err.name),
                quote(&err.msg)
            ));
        }
        out.push_str("    ],\n");
    }

    // custom types
    if idl.types.is_empty() {
        out.push_str("    types: vec![],\n");
    } else {
        out.push_str("    types: vec![\n");
        for ty in &idl.types {
            push_type_def(&mut out, ty);
        }
        out.push_str("    ],\n");
    }

    out.push_str("});\n");

    if !idl.instructions.is_empty() {
        out.push('\n');
        out.push_str("/// Instruction names as lookup keys for wire-level callers.\n");
        for instr in &idl.instructions {
            out.push_str(&format!(
                "pub const INSTRUCTION_{}: &str = {};\n",
                const_name(&instr.name),
                quote(&instr.name)
            ));
        }
    }

    out
}

/// Render one account literal at the given indentation of its opening brace.
fn push_account(out: &mut String, acc: &Account, indent: usize) {
    let pad = " ".repeat(indent);
    let field = " ".repeat(indent + 4);

    out.push_str(&format!("{pad}Account {{\n"));
    out.push_str(&format!("{field}name: {}.to_string(),\n", quote(&acc.name)));
    out.push_str(&format!("{field}writable: {},\n", acc.writable));
    out.push_str(&format!("{field}signer: {},\n", acc.signer));
    match &acc.address {
        Some(address) => out.push_str(&format!(
            "{field}address: Some({}.to_string()),\n",
            quote(address)
        )),
        None => out.push_str(&format!("{field}address: None,\n")),
    }
    match &acc.pda {
        Some(pda) => {
            out.push_str(&format!("{field}pda: Some(Pda {{\n"));
            out.push_str(&format!("{field}    seeds: vec![\n"));
            for seed in &pda.seeds {
                out.push_str(&format!("{field}        {},\n", seed_literal(seed)));
            }
            out.push_str(&format!("{field}    ],\n"));
            out.push_str(&format!("{field}}}),\n"));
        }
        None => out.push_str(&format!("{field}pda: None,\n")),
    }
    out.push_str(&format!("{pad}}},\n"));
}

fn push_type_def(out: &mut String, def: &TypeDef) {
    out.push_str("        TypeDef {\n");
    out.push_str(&format!("            name: {}.to_string(),\n", quote(&def.name)));
    match &def.ty {
        IdlType::Struct(fields) if !fields.is_empty() => {
            out.push_str("            ty: IdlType::Struct(vec![\n");
            for field in fields {
                out.push_str(&format!(
                    "                Field {{ name: {}.to_string(), ty: {} }},\n",
                    quote(&field.name),
                    type_literal(&field.ty)
                ));
            }
            out.push_str("            ]),\n");
        }
        other => out.push_str(&format!("            ty: {},\n", type_literal(other))),
    }
    out.push_str("        },\n");
}

/// Render a type expression as a nested constructor call, single line.
///
/// `Defined` stays a name reference; the referenced definition is never
/// inlined here.
fn type_literal(ty: &IdlType) -> String {
    match ty {
        IdlType::Primitive(name) => format!("IdlType::Primitive({}.to_string())", quote(name)),
        IdlType::Array(elem, len) => {
            format!("IdlType::Array(Box::new({}), {len})", type_literal(elem))
        }
        IdlType::Vec(elem) => format!("IdlType::Vec(Box::new({}))", type_literal(elem)),
        IdlType::Option(elem) => format!("IdlType::Option(Box::new({}))", type_literal(elem)),
        IdlType::Defined(name) => format!("IdlType::Defined({}.to_string())", quote(name)),
        IdlType::Struct(fields) => {
            let rendered: Vec<String> = fields
                .iter()
                .map(|f| {
                    format!(
                        "Field {{ name: {}.to_string(), ty: {} }}",
                        quote(&f.name),
                        type_literal(&f.ty)
                    )
                })
                .collect();
            format!("IdlType::Struct(vec![{}])", rendered.join(", "))
        }
        IdlType::Enum(variants) => {
            let rendered: Vec<String> = variants
                .iter()
                .map(|v| format!("{}.to_string()", quote(v)))
                .collect();
            format!("IdlType::Enum(vec![{}])", rendered.join(", "))
        }
    }
}

fn seed_literal(seed: &Seed) -> String {
    match seed {
        Seed::Const { value } => {
            let bytes: Vec<String> = value.iter().map(u8::to_string).collect();
            format!("Seed::Const {{ value: vec![{}] }}", bytes.join(", "))
        }
        Seed::Account { path } => format!("Seed::Account {{ path: {}.to_string() }}", quote(path)),
        Seed::Arg { path } => format!("Seed::Arg {{ path: {}.to_string() }}", quote(path)),
        Seed::Str { value } => format!("Seed::Str {{ value: {}.to_string() }}", quote(value)),
    }
}

fn byte_literal(bytes: &[u8; 8]) -> String {
    let rendered: Vec<String> = bytes.iter().map(u8::to_string).collect();
    format!("[{}]", rendered.join(", "))
}

/// Escape a string as a Rust literal, quotes included.
fn quote(s: &str) -> String {
    format!("{s:?}")
}

/// SCREAMING_SNAKE form of an instruction name for the constant block.
fn const_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}
