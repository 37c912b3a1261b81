//! YAML dump assembly and emission.
//!
//! The writer never re-sorts keys: struct fields serialize in declaration
//! order and the module/class maps are `IndexMap`s filled in sorted order.

use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::canonical::{canonicalize_module, sorted_by_name, ModuleDetail};
use crate::config::LINE_WIDTH;
use crate::errors::DumpResult;
use crate::models::Module;
use crate::report::fold::fold_long_lines;
use crate::report::summary::Summary;

/// The complete document: totals first, then every module by name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Dump {
    pub summary: Summary,
    pub modules: IndexMap<String, ModuleDetail>,
}

pub fn build_dump(modules: &[Module]) -> Dump {
    let summary = Summary::from_modules(modules);
    let modules = sorted_by_name(modules, |m| m.name.as_str())
        .into_iter()
        .map(|module| (module.name.clone(), canonicalize_module(module)))
        .collect();
    Dump { summary, modules }
}

/// Render `dump` as block-style YAML, folding long scalars at
/// [`LINE_WIDTH`] columns.
pub fn render_dump(dump: &Dump) -> DumpResult<String> {
    let text = serde_yaml::to_string(dump)?;
    Ok(fold_long_lines(&text, LINE_WIDTH))
}

/// Render `dump` and write it to `path`. Nothing is written if rendering fails.
pub fn write_dump(path: &Path, dump: &Dump) -> DumpResult<()> {
    let text = render_dump(dump)?;
    debug!(path = %path.display(), size_bytes = text.len(), "writing dump");
    std::fs::write(path, text)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
