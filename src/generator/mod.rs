//! Source generation for loaded IDL schemas

mod rust;

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::{error, info};

use crate::models::idl::Idl;

/// Render the schema as Rust source declarations.
pub fn generate_rust(idl: &Idl, module_name: &str, binding_name: &str) -> String {
    rust::generate(idl, module_name, binding_name)
}

/// Render the schema and write the result to a file.
pub fn write_source(idl: &Idl, module_name: &str, binding_name: &str, path: &Path) -> Result<()> {
    let absolute_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    info!("Writing generated source to: {}", absolute_path.display());

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        if !parent.exists() {
            info!("Creating directory: {}", parent.display());
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let source = generate_rust(idl, module_name, binding_name);
    info!("Rendered {} bytes of source", source.len());

    let mut file = File::create(&absolute_path).with_context(|| {
        format!("Failed to create file: {}", absolute_path.display())
    })?;

    if let Err(e) = file.write_all(source.as_bytes()) {
        error!(
            "Failed to write to file: {} - Error: {}",
            absolute_path.display(),
            e
        );
        return Err(e).with_context(|| {
            format!("Failed to write to file: {}", absolute_path.display())
        });
    }

    info!("Generated source saved to: {}", absolute_path.display());

    Ok(())
}
