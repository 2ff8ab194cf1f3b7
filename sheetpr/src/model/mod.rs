//! Workbook document model

use serde::{Deserialize, Serialize};
use std::any::type_name;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::trace;

use crate::error::{PropsError, Result};

pub mod worksheet;

pub use worksheet::{
    Color, OutlinePr, PageMargins, PageSetUpPr, PrintOptions, SheetFormatPr, SheetPr, Worksheet,
};

/// Return the record held in `slot`, allocating a default one first if the
/// slot is empty. Repeated calls hand back the same record untouched.
pub fn ensure<N: Default>(slot: &mut Option<N>) -> &mut N {
    if slot.is_none() {
        trace!(record = type_name::<N>(), "allocating layout record");
    }
    slot.get_or_insert_with(N::default)
}

/// Represents the layout side of a workbook: one entry per worksheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    #[serde(default)]
    pub sheets: Vec<Worksheet>,
}

impl Workbook {
    /// Create a workbook with one uncustomized worksheet per name
    pub fn new_with_sheets<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut workbook = Self::default();
        for name in names {
            workbook.add_sheet(name);
        }
        workbook
    }

    /// Add a worksheet, or return the existing one with the same name
    pub fn add_sheet(&mut self, name: impl Into<String>) -> &mut Worksheet {
        let name = name.into();
        let index = match self.sheets.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.sheets.push(Worksheet::new(name));
                self.sheets.len() - 1
            }
        };
        &mut self.sheets[index]
    }

    /// Get a sheet by name
    pub fn get_sheet(&self, name: &str) -> Option<&Worksheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Get all sheet names
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    pub(crate) fn worksheet(&self, name: &str) -> Result<&Worksheet> {
        self.get_sheet(name)
            .ok_or_else(|| PropsError::SheetNotFound(name.to_string()))
    }

    pub(crate) fn worksheet_mut(&mut self, name: &str) -> Result<&mut Worksheet> {
        self.sheets
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| PropsError::SheetNotFound(name.to_string()))
    }

    /// Load a layout document from JSON text. Sheet names must be unique.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let workbook: Self = serde_json::from_str(content)?;
        let mut seen = HashSet::new();
        for sheet in &workbook.sheets {
            if !seen.insert(sheet.name.as_str()) {
                return Err(PropsError::DuplicateSheet(sheet.name.clone()));
            }
        }
        Ok(workbook)
    }

    /// Load a layout document from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}
