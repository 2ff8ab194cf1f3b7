//! Output formatters for snapshots and patch plans

use anyhow::Result;
use colored::*;
use serde::Serialize;
use sheetpr::{PageLayoutMarginsOptions, PatchSet, SheetPropsOptions};
use std::path::Path;

/// Margins and properties of one sheet, as reported by the queries
#[derive(Debug, Serialize)]
pub struct SheetSnapshot {
    pub sheet: String,
    pub margins: PageLayoutMarginsOptions,
    pub props: SheetPropsOptions,
}

/// Print snapshots in human-readable format
pub fn print_human(file_path: &Path, snapshots: &[SheetSnapshot]) -> Result<()> {
    println!("{}", format!("Layout: {}", file_path.display()).bold());
    println!();

    for snapshot in snapshots {
        println!("{} {}", "Sheet:".bold(), snapshot.sheet.cyan().bold());
        print_group("Margins", &snapshot.margins)?;
        print_group("Properties", &snapshot.props)?;
        println!();
    }

    Ok(())
}

// Unset fields are skipped by the descriptors' serializers, so only values
// with a meaning are listed.
fn print_group<T: Serialize>(title: &str, descriptor: &T) -> Result<()> {
    println!("  {}", title.underline());
    if let serde_json::Value::Object(fields) = serde_json::to_value(descriptor)? {
        for (name, value) in fields {
            println!("    {:<36} {}", name, value.to_string().yellow());
        }
    }
    Ok(())
}

/// Print snapshots in JSON format
pub fn print_json(file_path: &Path, snapshots: &[SheetSnapshot]) -> Result<()> {
    let output = serde_json::json!({
        "file": file_path.display().to_string(),
        "sheets": snapshots,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// List the fields a patch set would write, per sheet
pub fn print_patch_plan(patches: &PatchSet) {
    for (sheet, patch) in &patches.sheets {
        println!("  {} {}", "Sheet:".bold(), sheet.cyan());
        if let Some(margins) = &patch.margins {
            println!("    margins: {}", margins.present_fields().join(", "));
        }
        if let Some(props) = &patch.props {
            let fields = props.present_fields();
            if fields.is_empty() {
                println!("    props: (no fields, sheetFormatPr allocated)");
            } else {
                println!("    props: {}", fields.join(", "));
            }
        }
    }
}
