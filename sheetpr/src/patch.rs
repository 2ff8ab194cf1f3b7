//! Patch files: per-sheet margins and property patches in TOML
//!
//! ```toml
//! [sheets.Sheet1.margins]
//! left = 1.0
//! horizontallyCentered = true
//!
//! [sheets.Sheet1.props]
//! tabColorRGB = "FF0000"
//! ```
//!
//! A missing `margins`/`props` table leaves that group alone; an empty one is
//! an empty patch.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{PropsError, Result};
use crate::model::{Workbook, Worksheet};
use crate::options::{PageLayoutMarginsOptions, SheetPropsOptions};

/// Patches keyed by sheet name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatchSet {
    #[serde(default)]
    pub sheets: BTreeMap<String, SheetPatch>,
}

/// Patches for a single sheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SheetPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margins: Option<PageLayoutMarginsOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<SheetPropsOptions>,
}

impl SheetPatch {
    /// Apply both groups to a worksheet; returns the number of fields written
    pub fn apply_to(&self, ws: &mut Worksheet) -> usize {
        let mut written = 0;
        if let Some(margins) = &self.margins {
            written += ws.apply_page_margins(margins);
        }
        if let Some(props) = &self.props {
            written += ws.apply_sheet_props(props);
        }
        written
    }
}

impl PatchSet {
    /// Load a patch set from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Check that every patched sheet exists in `workbook`
    pub fn validate(&self, workbook: &Workbook) -> Result<()> {
        for sheet_name in self.sheets.keys() {
            if workbook.get_sheet(sheet_name).is_none() {
                return Err(PropsError::SheetNotFound(sheet_name.clone()));
            }
        }
        Ok(())
    }
}

impl Workbook {
    /// Apply a patch set. Nothing is written unless every patched sheet
    /// exists. Sheets are patched in parallel since they share no records.
    pub fn apply_patch_set(&mut self, patches: &PatchSet) -> Result<usize> {
        patches.validate(self)?;

        let written: usize = self
            .sheets
            .par_iter_mut()
            .filter_map(|ws| patches.sheets.get(&ws.name).map(|patch| patch.apply_to(ws)))
            .sum();

        info!(sheets = patches.sheets.len(), written, "applied patch set");
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATCH: &str = r#"
        [sheets.Sheet1.margins]
        left = 1.0
        horizontallyCentered = true

        [sheets.Sheet1.props]
        tabColorRGB = "FF0000"

        [sheets.Data.props]
    "#;

    #[test]
    fn test_parse_patch_set() {
        let patches = PatchSet::from_toml_str(PATCH).unwrap();
        assert_eq!(patches.sheets.len(), 2);

        let sheet1 = &patches.sheets["Sheet1"];
        assert_eq!(sheet1.margins.as_ref().unwrap().left, Some(1.0));
        assert_eq!(
            sheet1.props.as_ref().unwrap().tab_color_rgb.as_deref(),
            Some("FF0000")
        );

        let data = &patches.sheets["Data"];
        assert!(data.margins.is_none());
        assert_eq!(data.props, Some(SheetPropsOptions::default()));
    }

    #[test]
    fn test_apply_patch_set() {
        let mut workbook = Workbook::new_with_sheets(["Sheet1", "Data", "Untouched"]);
        let patches = PatchSet::from_toml_str(PATCH).unwrap();

        assert_eq!(workbook.apply_patch_set(&patches).unwrap(), 3);

        let margins = workbook.get_page_margins("Sheet1").unwrap();
        assert_eq!(margins.left, Some(1.0));
        assert_eq!(margins.horizontally_centered, Some(true));

        // An empty props table still allocates sheetFormatPr.
        assert!(workbook.get_sheet("Data").unwrap().sheet_format_pr.is_some());
        assert_eq!(workbook.get_sheet("Untouched").unwrap(), &Worksheet::new("Untouched"));
    }

    #[test]
    fn test_unknown_sheet_writes_nothing() {
        let mut workbook = Workbook::new_with_sheets(["Sheet1"]);
        let before = workbook.clone();
        let patches = PatchSet::from_toml_str(PATCH).unwrap();

        let err = workbook.apply_patch_set(&patches).unwrap_err();
        assert!(matches!(err, PropsError::SheetNotFound(name) if name == "Data"));
        assert_eq!(workbook, before);
    }

    #[test]
    fn test_unknown_group_is_rejected() {
        let result = PatchSet::from_toml_str("[sheets.Sheet1.layout]\nleft = 1.0\n");
        assert!(matches!(result, Err(PropsError::Toml(_))));
    }
}
