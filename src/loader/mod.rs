//! Schema loading and validation
//!
//! Turns a raw IDL JSON document into a fully-populated [`Idl`]. The JSON
//! layer is a thin serde mirror of the on-disk shape; the conversion pass
//! then builds the closed model, tracking the path of every field so that a
//! malformed schema fails with a pointer to the offending value instead of a
//! bare deserializer message.
//!
//! Loading is single-pass and touches no shared state, so independent
//! schemas can be loaded concurrently from the same process.

use log::warn;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::constants::discriminators::DISCRIMINATOR_LENGTH;
use crate::errors::{CodegenError, CodegenResult};
use crate::models::idl::{ErrorDef, Idl, Metadata, TypeDef};
use crate::models::instruction::{Account, Arg, Instruction, Pda, Seed};
use crate::models::types::{Field, IdlType};

/// Parse and validate a raw IDL document.
pub fn load_idl(raw: &[u8]) -> CodegenResult<Idl> {
    let raw_idl: RawIdl = from_slice_with_path(raw)?;
    convert_idl(raw_idl)
}

/// Deserialize with JSON-path context in error messages.
fn from_slice_with_path<T: DeserializeOwned>(bytes: &[u8]) -> CodegenResult<T> {
    let de = &mut serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(de).map_err(|err| CodegenError::Parse {
        path: err.path().to_string(),
        message: err.into_inner().to_string(),
    })
}

// Raw mirror of the on-disk shape. Argument and field types stay as open
// `Value`s here; `parse_type` closes them.

#[derive(Debug, Deserialize)]
struct RawIdl {
    address: String,
    metadata: RawMetadata,
    #[serde(default)]
    instructions: Vec<RawInstruction>,
    #[serde(default)]
    accounts: Vec<RawAccount>,
    #[serde(default)]
    errors: Vec<RawError>,
    #[serde(default)]
    types: Vec<RawTypeDef>,
}

#[derive(Debug, Deserialize)]
struct RawMetadata {
    name: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    spec: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct RawInstruction {
    name: String,
    discriminator: Vec<u8>,
    #[serde(default)]
    accounts: Vec<RawAccount>,
    #[serde(default)]
    args: Vec<RawArg>,
}

#[derive(Debug, Deserialize)]
struct RawAccount {
    name: String,
    #[serde(default)]
    writable: bool,
    #[serde(default)]
    signer: bool,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    pda: Option<RawPda>,
}

#[derive(Debug, Deserialize)]
struct RawPda {
    #[serde(default)]
    seeds: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct RawArg {
    name: String,
    #[serde(rename = "type")]
    ty: Value,
}

#[derive(Debug, Deserialize)]
struct RawError {
    code: u32,
    name: String,
    #[serde(default)]
    msg: String,
}

#[derive(Debug, Deserialize)]
struct RawTypeDef {
    name: String,
    #[serde(rename = "type")]
    ty: Value,
}

fn convert_idl(raw: RawIdl) -> CodegenResult<Idl> {
    if !is_base58_pubkey(&raw.address) {
        warn!(
            "program address `{}` does not decode to a 32-byte base58 value",
            raw.address
        );
    }
    require_name(&raw.metadata.name, "metadata.name")?;

    let mut instructions = Vec::with_capacity(raw.instructions.len());
    for (i, instr) in raw.instructions.into_iter().enumerate() {
        instructions.push(convert_instruction(instr, &format!("instructions[{i}]"))?);
    }

    let mut accounts = Vec::with_capacity(raw.accounts.len());
    for (i, acc) in raw.accounts.into_iter().enumerate() {
        accounts.push(convert_account(acc, &format!("accounts[{i}]"))?);
    }

    let mut errors = Vec::with_capacity(raw.errors.len());
    for (i, err) in raw.errors.into_iter().enumerate() {
        require_name(&err.name, &format!("errors[{i}].name"))?;
        errors.push(ErrorDef {
            code: err.code,
            name: err.name,
            msg: err.msg,
        });
    }

    let mut types = Vec::with_capacity(raw.types.len());
    for (i, ty) in raw.types.into_iter().enumerate() {
        let path = format!("types[{i}]");
        require_name(&ty.name, &format!("{path}.name"))?;
        types.push(TypeDef {
            name: ty.name,
            ty: parse_type(&ty.ty, &format!("{path}.type"))?,
        });
    }

    let idl = Idl {
        address: raw.address,
        metadata: Metadata {
            name: raw.metadata.name,
            version: raw.metadata.version,
            spec: raw.metadata.spec,
            description: raw.metadata.description,
        },
        instructions,
        accounts,
        errors,
        types,
    };
    warn_on_duplicates(&idl);
    Ok(idl)
}

fn convert_instruction(raw: RawInstruction, path: &str) -> CodegenResult<Instruction> {
    require_name(&raw.name, &format!("{path}.name"))?;

    if raw.discriminator.len() != DISCRIMINATOR_LENGTH {
        return Err(CodegenError::MalformedDiscriminator {
            path: format!("{path}.discriminator"),
            len: raw.discriminator.len(),
        });
    }
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&raw.discriminator);

    let mut accounts = Vec::with_capacity(raw.accounts.len());
    for (i, acc) in raw.accounts.into_iter().enumerate() {
        accounts.push(convert_account(acc, &format!("{path}.accounts[{i}]"))?);
    }

    let mut args = Vec::with_capacity(raw.args.len());
    for (i, arg) in raw.args.into_iter().enumerate() {
        let arg_path = format!("{path}.args[{i}]");
        require_name(&arg.name, &format!("{arg_path}.name"))?;
        args.push(Arg {
            name: arg.name,
            ty: parse_type(&arg.ty, &format!("{arg_path}.type"))?,
        });
    }

    Ok(Instruction {
        name: raw.name,
        discriminator,
        accounts,
        args,
    })
}

fn convert_account(raw: RawAccount, path: &str) -> CodegenResult<Account> {
    require_name(&raw.name, &format!("{path}.name"))?;

    let pda = match raw.pda {
        Some(raw_pda) => {
            let seeds_path = format!("{path}.pda.seeds");
            if raw_pda.seeds.is_empty() {
                return Err(CodegenError::EmptySeeds { path: seeds_path });
            }
            let mut seeds = Vec::with_capacity(raw_pda.seeds.len());
            for (i, seed) in raw_pda.seeds.iter().enumerate() {
                seeds.push(parse_seed(seed, &format!("{seeds_path}[{i}]"))?);
            }
            Some(Pda { seeds })
        }
        None => None,
    };

    Ok(Account {
        name: raw.name,
        writable: raw.writable,
        signer: raw.signer,
        address: raw.address,
        pda,
    })
}

/// Parse one PDA seed, dispatching on its `kind` tag.
fn parse_seed(value: &Value, path: &str) -> CodegenResult<Seed> {
    let obj = value.as_object().ok_or_else(|| CodegenError::Parse {
        path: path.to_string(),
        message: "seed must be an object".to_string(),
    })?;
    let kind = obj
        .get("kind")
        .and_then(Value::as_str)
        .ok_or_else(|| CodegenError::Parse {
            path: format!("{path}.kind"),
            message: "missing string field `kind`".to_string(),
        })?;

    match kind {
        "const" => Ok(Seed::Const {
            value: byte_array(obj, "value", path)?,
        }),
        "account" => Ok(Seed::Account {
            path: string_field(obj, "path", path)?,
        }),
        "arg" => Ok(Seed::Arg {
            path: string_field(obj, "path", path)?,
        }),
        "str" => Ok(Seed::Str {
            value: string_field(obj, "value", path)?,
        }),
        other => Err(CodegenError::UnknownSeedKind {
            path: path.to_string(),
            kind: other.to_string(),
        }),
    }
}

/// Parse a type expression from its open on-disk form.
///
/// The raw form carries no fixed tag grammar, so dispatch goes by the
/// discriminating key: a bare string is a primitive, objects are recognized
/// by `defined`, `vec`, `option`, `array`, or `kind`. Anything else fails
/// loudly rather than defaulting.
fn parse_type(value: &Value, path: &str) -> CodegenResult<IdlType> {
    let shape_err = |path: &str| CodegenError::UnknownTypeShape {
        path: path.to_string(),
    };

    match value {
        Value::String(name) => Ok(IdlType::Primitive(name.clone())),
        Value::Object(obj) => {
            if let Some(defined) = obj.get("defined") {
                // either "Foo" or {"name": "Foo"} depending on the spec version
                let name = match defined {
                    Value::String(s) => s.clone(),
                    Value::Object(inner) => inner
                        .get("name")
                        .and_then(Value::as_str)
                        .ok_or_else(|| shape_err(&format!("{path}.defined")))?
                        .to_string(),
                    _ => return Err(shape_err(&format!("{path}.defined"))),
                };
                Ok(IdlType::Defined(name))
            } else if let Some(inner) = obj.get("vec") {
                let elem = parse_type(inner, &format!("{path}.vec"))?;
                Ok(IdlType::Vec(Box::new(elem)))
            } else if let Some(inner) = obj.get("option") {
                let elem = parse_type(inner, &format!("{path}.option"))?;
                Ok(IdlType::Option(Box::new(elem)))
            } else if let Some(arr) = obj.get("array") {
                let pair = arr
                    .as_array()
                    .filter(|a| a.len() == 2)
                    .ok_or_else(|| shape_err(&format!("{path}.array")))?;
                let elem = parse_type(&pair[0], &format!("{path}.array[0]"))?;
                let len = pair[1]
                    .as_u64()
                    .ok_or_else(|| shape_err(&format!("{path}.array[1]")))?;
                Ok(IdlType::Array(Box::new(elem), len as usize))
            } else if let Some(kind) = obj.get("kind").and_then(Value::as_str) {
                match kind {
                    "struct" => Ok(IdlType::Struct(parse_struct_fields(obj, path)?)),
                    "enum" => Ok(IdlType::Enum(parse_enum_variants(obj, path)?)),
                    _ => Err(shape_err(path)),
                }
            } else {
                Err(shape_err(path))
            }
        }
        _ => Err(shape_err(path)),
    }
}

fn parse_struct_fields(obj: &Map<String, Value>, path: &str) -> CodegenResult<Vec<Field>> {
    let mut fields = Vec::new();
    if let Some(list) = obj.get("fields") {
        let list = list.as_array().ok_or_else(|| CodegenError::UnknownTypeShape {
            path: format!("{path}.fields"),
        })?;
        for (i, entry) in list.iter().enumerate() {
            let field_path = format!("{path}.fields[{i}]");
            let entry = entry
                .as_object()
                .ok_or_else(|| CodegenError::UnknownTypeShape {
                    path: field_path.clone(),
                })?;
            let name = string_field(entry, "name", &field_path)?;
            require_name(&name, &format!("{field_path}.name"))?;
            let ty_value = entry
                .get("type")
                .ok_or_else(|| CodegenError::UnknownTypeShape {
                    path: field_path.clone(),
                })?;
            fields.push(Field {
                name,
                ty: parse_type(ty_value, &format!("{field_path}.type"))?,
            });
        }
    }
    Ok(fields)
}

fn parse_enum_variants(obj: &Map<String, Value>, path: &str) -> CodegenResult<Vec<String>> {
    let mut variants = Vec::new();
    if let Some(list) = obj.get("variants") {
        let list = list.as_array().ok_or_else(|| CodegenError::UnknownTypeShape {
            path: format!("{path}.variants"),
        })?;
        for (i, entry) in list.iter().enumerate() {
            let variant_path = format!("{path}.variants[{i}]");
            let name = match entry {
                Value::String(s) => s.clone(),
                Value::Object(o) => o
                    .get("name")
                    .and_then(Value::as_str)
                    .ok_or_else(|| CodegenError::MissingName {
                        path: format!("{variant_path}.name"),
                    })?
                    .to_string(),
                _ => {
                    return Err(CodegenError::UnknownTypeShape { path: variant_path });
                }
            };
            variants.push(name);
        }
    }
    Ok(variants)
}

fn require_name(name: &str, path: &str) -> CodegenResult<()> {
    if name.is_empty() {
        return Err(CodegenError::MissingName {
            path: path.to_string(),
        });
    }
    Ok(())
}

fn string_field(obj: &Map<String, Value>, key: &str, path: &str) -> CodegenResult<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| CodegenError::Parse {
            path: format!("{path}.{key}"),
            message: format!("missing string field `{key}`"),
        })
}

fn byte_array(obj: &Map<String, Value>, key: &str, path: &str) -> CodegenResult<Vec<u8>> {
    let value = obj.get(key).ok_or_else(|| CodegenError::Parse {
        path: format!("{path}.{key}"),
        message: format!("missing byte array `{key}`"),
    })?;
    serde_json::from_value(value.clone()).map_err(|e| CodegenError::Parse {
        path: format!("{path}.{key}"),
        message: e.to_string(),
    })
}

fn is_base58_pubkey(address: &str) -> bool {
    bs58::decode(address)
        .into_vec()
        .map(|bytes| bytes.len() == 32)
        .unwrap_or(false)
}

/// Duplicate discriminators and error codes are a documented precondition,
/// not a load failure; surface them as diagnostics only.
fn warn_on_duplicates(idl: &Idl) {
    for (i, instr) in idl.instructions.iter().enumerate() {
        if idl.instructions[..i]
            .iter()
            .any(|prev| prev.discriminator == instr.discriminator)
        {
            warn!(
                "instruction `{}` reuses a discriminator declared earlier in the schema",
                instr.name
            );
        }
    }
    for (i, err) in idl.errors.iter().enumerate() {
        if idl.errors[..i].iter().any(|prev| prev.code == err.code) {
            warn!("error `{}` reuses code {}", err.name, err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "address": "94U5AHQMKkV5txNJ17QPXWoh474PheGou6cNP2FEuL1d",
        "metadata": {
            "name": "ping_program",
            "version": "0.1.0",
            "spec": "0.1.0",
            "description": "test program"
        },
        "instructions": [
            {
                "name": "ping",
                "discriminator": [1, 2, 3, 4, 5, 6, 7, 8],
                "accounts": [
                    {"name": "signer", "writable": true, "signer": true}
                ],
                "args": []
            }
        ]
    }"#;

    #[test]
    fn test_load_minimal_schema() {
        let idl = load_idl(MINIMAL.as_bytes()).unwrap();

        assert_eq!(idl.address, "94U5AHQMKkV5txNJ17QPXWoh474PheGou6cNP2FEuL1d");
        assert_eq!(idl.metadata.name, "ping_program");
        assert_eq!(idl.instructions.len(), 1);
        assert_eq!(idl.instructions[0].name, "ping");
        assert_eq!(
            idl.instructions[0].discriminator,
            [1, 2, 3, 4, 5, 6, 7, 8]
        );
        assert!(idl.accounts.is_empty());
        assert!(idl.errors.is_empty());
        assert!(idl.types.is_empty());
    }

    #[test]
    fn test_omitted_flags_default_to_false() {
        let src = r#"{
            "address": "94U5AHQMKkV5txNJ17QPXWoh474PheGou6cNP2FEuL1d",
            "metadata": {"name": "t"},
            "instructions": [
                {
                    "name": "ping",
                    "discriminator": [1, 2, 3, 4, 5, 6, 7, 8],
                    "accounts": [{"name": "plain"}]
                }
            ]
        }"#;
        let idl = load_idl(src.as_bytes()).unwrap();

        let account = &idl.instructions[0].accounts[0];
        assert!(!account.writable);
        assert!(!account.signer);
        assert!(account.address.is_none());
        assert!(account.pda.is_none());
    }

    #[test]
    fn test_short_discriminator_is_rejected() {
        let src = r#"{
            "address": "94U5AHQMKkV5txNJ17QPXWoh474PheGou6cNP2FEuL1d",
            "metadata": {"name": "t"},
            "instructions": [
                {"name": "ping", "discriminator": [1, 2, 3, 4, 5, 6, 7]}
            ]
        }"#;
        let err = load_idl(src.as_bytes()).unwrap_err();

        match err {
            CodegenError::MalformedDiscriminator { path, len } => {
                assert_eq!(path, "instructions[0].discriminator");
                assert_eq!(len, 7);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_long_discriminator_is_rejected() {
        let src = r#"{
            "address": "94U5AHQMKkV5txNJ17QPXWoh474PheGou6cNP2FEuL1d",
            "metadata": {"name": "t"},
            "instructions": [
                {"name": "ping", "discriminator": [1, 2, 3, 4, 5, 6, 7, 8, 9]}
            ]
        }"#;
        let err = load_idl(src.as_bytes()).unwrap_err();

        assert!(matches!(
            err,
            CodegenError::MalformedDiscriminator { len: 9, .. }
        ));
    }

    #[test]
    fn test_unknown_seed_kind_is_rejected() {
        let src = r#"{
            "address": "94U5AHQMKkV5txNJ17QPXWoh474PheGou6cNP2FEuL1d",
            "metadata": {"name": "t"},
            "instructions": [
                {
                    "name": "ping",
                    "discriminator": [1, 2, 3, 4, 5, 6, 7, 8],
                    "accounts": [
                        {
                            "name": "pda",
                            "pda": {"seeds": [{"kind": "mystery", "value": [1]}]}
                        }
                    ]
                }
            ]
        }"#;
        let err = load_idl(src.as_bytes()).unwrap_err();

        match err {
            CodegenError::UnknownSeedKind { path, kind } => {
                assert_eq!(kind, "mystery");
                assert_eq!(path, "instructions[0].accounts[0].pda.seeds[0]");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_seed_list_is_rejected() {
        let src = r#"{
            "address": "94U5AHQMKkV5txNJ17QPXWoh474PheGou6cNP2FEuL1d",
            "metadata": {"name": "t"},
            "instructions": [
                {
                    "name": "ping",
                    "discriminator": [1, 2, 3, 4, 5, 6, 7, 8],
                    "accounts": [{"name": "pda", "pda": {"seeds": []}}]
                }
            ]
        }"#;
        let err = load_idl(src.as_bytes()).unwrap_err();

        assert!(matches!(err, CodegenError::EmptySeeds { .. }));
    }

    #[test]
    fn test_unknown_type_shape_is_rejected() {
        let src = r#"{
            "address": "94U5AHQMKkV5txNJ17QPXWoh474PheGou6cNP2FEuL1d",
            "metadata": {"name": "t"},
            "instructions": [
                {
                    "name": "ping",
                    "discriminator": [1, 2, 3, 4, 5, 6, 7, 8],
                    "args": [{"name": "x", "type": {"tuple": ["u8"]}}]
                }
            ]
        }"#;
        let err = load_idl(src.as_bytes()).unwrap_err();

        match err {
            CodegenError::UnknownTypeShape { path } => {
                assert_eq!(path, "instructions[0].args[0].type");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let src = r#"{
            "address": "94U5AHQMKkV5txNJ17QPXWoh474PheGou6cNP2FEuL1d",
            "metadata": {"name": "t"},
            "instructions": [
                {"name": "", "discriminator": [1, 2, 3, 4, 5, 6, 7, 8]}
            ]
        }"#;
        let err = load_idl(src.as_bytes()).unwrap_err();

        match err {
            CodegenError::MissingName { path } => assert_eq!(path, "instructions[0].name"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_name_reports_json_path() {
        let src = r#"{
            "address": "94U5AHQMKkV5txNJ17QPXWoh474PheGou6cNP2FEuL1d",
            "metadata": {"name": "t"},
            "instructions": [
                {"discriminator": [1, 2, 3, 4, 5, 6, 7, 8]}
            ]
        }"#;
        let err = load_idl(src.as_bytes()).unwrap_err();

        match err {
            CodegenError::Parse { path, message } => {
                assert!(path.starts_with("instructions[0]"), "path was {path}");
                assert!(message.contains("name"), "message was {message}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_nested_type_expressions() {
        let src = r#"{
            "address": "94U5AHQMKkV5txNJ17QPXWoh474PheGou6cNP2FEuL1d",
            "metadata": {"name": "t"},
            "instructions": [
                {
                    "name": "configure",
                    "discriminator": [1, 2, 3, 4, 5, 6, 7, 8],
                    "args": [
                        {"name": "receiver", "type": {"array": ["u8", 20]}},
                        {"name": "memos", "type": {"vec": {"option": {"defined": {"name": "Memo"}}}}}
                    ]
                }
            ],
            "types": [
                {
                    "name": "Memo",
                    "type": {
                        "kind": "struct",
                        "fields": [
                            {"name": "payload", "type": "bytes"},
                            {"name": "tag", "type": {"array": ["u8", 4]}}
                        ]
                    }
                },
                {
                    "name": "Mode",
                    "type": {"kind": "enum", "variants": [{"name": "Open"}, {"name": "Paused"}]}
                }
            ]
        }"#;
        let idl = load_idl(src.as_bytes()).unwrap();

        let args = &idl.instructions[0].args;
        assert_eq!(
            args[0].ty,
            IdlType::Array(Box::new(IdlType::Primitive("u8".to_string())), 20)
        );
        assert_eq!(
            args[1].ty,
            IdlType::Vec(Box::new(IdlType::Option(Box::new(IdlType::Defined(
                "Memo".to_string()
            )))))
        );

        assert_eq!(idl.types.len(), 2);
        match &idl.types[0].ty {
            IdlType::Struct(fields) => {
                assert_eq!(fields.len(), 2);
                assert_eq!(fields[0].name, "payload");
                assert_eq!(fields[1].name, "tag");
            }
            other => panic!("expected struct, got {other:?}"),
        }
        assert_eq!(
            idl.types[1].ty,
            IdlType::Enum(vec!["Open".to_string(), "Paused".to_string()])
        );
    }

    #[test]
    fn test_seed_kinds_and_order() {
        let src = r#"{
            "address": "94U5AHQMKkV5txNJ17QPXWoh474PheGou6cNP2FEuL1d",
            "metadata": {"name": "t"},
            "instructions": [
                {
                    "name": "open",
                    "discriminator": [1, 2, 3, 4, 5, 6, 7, 8],
                    "accounts": [
                        {
                            "name": "vault",
                            "pda": {"seeds": [
                                {"kind": "const", "value": [118, 97, 117, 108, 116]},
                                {"kind": "account", "path": "owner"},
                                {"kind": "arg", "path": "nonce"},
                                {"kind": "str", "value": "meta"}
                            ]}
                        }
                    ]
                }
            ]
        }"#;
        let idl = load_idl(src.as_bytes()).unwrap();

        let pda = idl.instructions[0].accounts[0].pda.as_ref().unwrap();
        assert_eq!(
            pda.seeds,
            vec![
                Seed::Const {
                    value: vec![118, 97, 117, 108, 116]
                },
                Seed::Account {
                    path: "owner".to_string()
                },
                Seed::Arg {
                    path: "nonce".to_string()
                },
                Seed::Str {
                    value: "meta".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_duplicate_discriminators_are_accepted() {
        let src = r#"{
            "address": "94U5AHQMKkV5txNJ17QPXWoh474PheGou6cNP2FEuL1d",
            "metadata": {"name": "t"},
            "instructions": [
                {"name": "a", "discriminator": [1, 2, 3, 4, 5, 6, 7, 8]},
                {"name": "b", "discriminator": [1, 2, 3, 4, 5, 6, 7, 8]}
            ]
        }"#;
        let idl = load_idl(src.as_bytes()).unwrap();

        assert_eq!(idl.instructions.len(), 2);
        // first declared match wins
        assert_eq!(idl.get_discriminator("a"), idl.get_discriminator("b"));
    }

    #[test]
    fn test_concurrent_loads_are_independent() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| load_idl(MINIMAL.as_bytes()).unwrap()))
            .collect();
        let loaded: Vec<Idl> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        for idl in &loaded[1..] {
            assert_eq!(idl, &loaded[0]);
        }
    }
}
