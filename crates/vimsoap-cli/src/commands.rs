//! Handler functions for CLI commands.
//!
//! Handlers write to any [`Write`] so they can be exercised without a
//! terminal.

use crate::Format;
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::ops::ControlFlow;
use std::path::Path;
use vimsoap::{
    ContentType, DecoderConfig, Error, Node, ResponseDecoder, TypeRegistry, VimTypeRegistry,
};

// ============================================================================
// Configuration
// ============================================================================

/// Load the decoder configuration, falling back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<DecoderConfig> {
    match path {
        Some(path) => Ok(DecoderConfig::load(path)?),
        None => Ok(DecoderConfig::default()),
    }
}

/// Print the effective configuration as TOML.
pub fn show_config(out: &mut impl Write, config: &DecoderConfig) -> Result<()> {
    write!(out, "{}", config.to_toml_string()?)?;
    Ok(())
}

// ============================================================================
// decode
// ============================================================================

fn guess_format(file: &Path) -> Format {
    match file.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
        _ => Format::Xml,
    }
}

/// Decode a captured response and print the body or the fault chain.
///
/// A decoded fault is a successful outcome; only undecodable input is an
/// error.
pub fn decode(
    out: &mut impl Write,
    config: &DecoderConfig,
    file: &Path,
    format: Option<Format>,
    status: u16,
) -> Result<()> {
    let body = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let format = format.unwrap_or_else(|| guess_format(file));
    let content_type = match format {
        Format::Xml => ContentType::Xml,
        Format::Json => ContentType::Json,
    };

    tracing::info!(file = %file.display(), ?format, status, "decoding response");
    let decoder = ResponseDecoder::from_config(config.clone());

    match decoder.decode::<Node>(status, &content_type.to_string(), &body) {
        Ok(node) => {
            writeln!(out, "response: {}", node.qname())?;
            write_tree(out, &node, 1)?;
        }
        Err(err @ (Error::SoapFault(_) | Error::VimFault(_))) => write_fault(out, &err)?,
        Err(err) => {
            return Err(err).with_context(|| format!("failed to decode {}", file.display()));
        }
    }
    Ok(())
}

fn write_fault(out: &mut impl Write, err: &Error) -> Result<()> {
    writeln!(out, "fault: {err}")?;
    if err.fault().is_none() {
        writeln!(out, "  (no detail)")?;
        return Ok(());
    }

    let mut depth = 0;
    let failed = vimsoap::fault::walk(err, |fault, message, _| {
        let label = if depth == 0 { "detail" } else { "cause" };
        depth += 1;
        let line = if message.is_empty() {
            writeln!(out, "  {label}: {fault}")
        } else {
            writeln!(out, "  {label}: {fault} ({message})")
        };
        match line {
            Ok(()) => ControlFlow::Continue(()),
            Err(e) => ControlFlow::Break(e),
        }
    });
    match failed {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

fn write_tree(out: &mut impl Write, node: &Node, depth: usize) -> io::Result<()> {
    for child in &node.children {
        let indent = "  ".repeat(depth);
        write!(out, "{indent}{}", child.name)?;
        if let Some(type_name) = &child.type_name {
            write!(out, " <{type_name}>")?;
        }
        match child.text() {
            Some(text) => writeln!(out, " = {text}")?,
            None => writeln!(out)?,
        }
        write_tree(out, child, depth + 1)?;
    }
    Ok(())
}

// ============================================================================
// types
// ============================================================================

/// List registered type names, then configured aliases.
pub fn types(out: &mut impl Write, config: &DecoderConfig) -> Result<()> {
    let registry = VimTypeRegistry::from_config(config);
    for name in registry.type_names() {
        writeln!(out, "{name}")?;
    }
    for (alias, target) in registry.aliases() {
        let note = if registry.contains(alias) { "" } else { " (unresolved)" };
        writeln!(out, "{alias} -> {target}{note}")?;
    }
    Ok(())
}
