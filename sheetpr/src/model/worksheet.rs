//! Worksheet layout records
//!
//! Every child record is optional on its parent: `None` means the sheet was
//! never customized for that record, not that it is invalid. Records are
//! allocated on first write through the `prepare_*` methods and are never
//! removed by this crate. A fresh `pageMargins` holds the default margins and
//! a fresh `sheetFormatPr` the default row height; every other record starts
//! zeroed.

use serde::{Deserialize, Serialize};

use super::ensure;
use crate::defaults::{
    DEFAULT_MARGIN_BOTTOM, DEFAULT_MARGIN_FOOTER, DEFAULT_MARGIN_HEADER, DEFAULT_MARGIN_LEFT,
    DEFAULT_MARGIN_RIGHT, DEFAULT_MARGIN_TOP, DEFAULT_ROW_HEIGHT,
};

/// Layout and metadata records of a single worksheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worksheet {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_pr: Option<SheetPr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_format_pr: Option<SheetFormatPr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_options: Option<PrintOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_margins: Option<PageMargins>,
}

/// `pageMargins`, distances in inches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMargins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub header: f64,
    pub footer: f64,
}

impl Default for PageMargins {
    fn default() -> Self {
        Self {
            left: DEFAULT_MARGIN_LEFT,
            right: DEFAULT_MARGIN_RIGHT,
            top: DEFAULT_MARGIN_TOP,
            bottom: DEFAULT_MARGIN_BOTTOM,
            header: DEFAULT_MARGIN_HEADER,
            footer: DEFAULT_MARGIN_FOOTER,
        }
    }
}

/// `printOptions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrintOptions {
    pub grid_lines: bool,
    pub grid_lines_set: bool,
    pub headings: bool,
    pub horizontal_centered: bool,
    pub vertical_centered: bool,
}

/// `sheetPr`, the shared ancestor of the outline, page setup and tab color records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SheetPr {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_format_conditions_calculation: Option<bool>,
    pub filter_mode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_pr: Option<OutlinePr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_set_up_pr: Option<PageSetUpPr>,
}

/// `outlinePr`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutlinePr {
    pub apply_styles: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_below: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_right: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_outline_symbols: Option<bool>,
}

/// `pageSetUpPr`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageSetUpPr {
    pub auto_page_breaks: bool,
    pub fit_to_page: bool,
}

/// `CT_Color`, used here for `tabColor`
///
/// All attributes are optional in the format; a tint of `0.0` is a real
/// value, distinct from no tint at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Color {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rgb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tint: Option<f64>,
}

/// `sheetFormatPr`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SheetFormatPr {
    pub base_col_width: u8,
    pub default_col_width: f64,
    pub default_row_height: f64,
    pub custom_height: bool,
    pub zero_height: bool,
    pub thick_top: bool,
    pub thick_bottom: bool,
    pub outline_level_row: u8,
    pub outline_level_col: u8,
}

impl Default for SheetFormatPr {
    fn default() -> Self {
        Self {
            base_col_width: 0,
            default_col_width: 0.0,
            default_row_height: DEFAULT_ROW_HEIGHT,
            custom_height: false,
            zero_height: false,
            thick_top: false,
            thick_bottom: false,
            outline_level_row: 0,
            outline_level_col: 0,
        }
    }
}

impl Worksheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn sheet_pr(&self) -> Option<&SheetPr> {
        self.sheet_pr.as_ref()
    }

    pub fn sheet_format_pr(&self) -> Option<&SheetFormatPr> {
        self.sheet_format_pr.as_ref()
    }

    pub fn print_options(&self) -> Option<&PrintOptions> {
        self.print_options.as_ref()
    }

    pub fn page_margins(&self) -> Option<&PageMargins> {
        self.page_margins.as_ref()
    }

    pub fn outline_pr(&self) -> Option<&OutlinePr> {
        self.sheet_pr.as_ref()?.outline_pr.as_ref()
    }

    pub fn page_set_up_pr(&self) -> Option<&PageSetUpPr> {
        self.sheet_pr.as_ref()?.page_set_up_pr.as_ref()
    }

    pub fn tab_color(&self) -> Option<&Color> {
        self.sheet_pr.as_ref()?.tab_color.as_ref()
    }

    pub fn prepare_page_margins(&mut self) -> &mut PageMargins {
        ensure(&mut self.page_margins)
    }

    pub fn prepare_print_options(&mut self) -> &mut PrintOptions {
        ensure(&mut self.print_options)
    }

    pub fn prepare_sheet_pr(&mut self) -> &mut SheetPr {
        ensure(&mut self.sheet_pr)
    }

    pub fn prepare_outline_pr(&mut self) -> &mut OutlinePr {
        ensure(&mut self.prepare_sheet_pr().outline_pr)
    }

    pub fn prepare_page_set_up_pr(&mut self) -> &mut PageSetUpPr {
        ensure(&mut self.prepare_sheet_pr().page_set_up_pr)
    }

    pub fn prepare_tab_color(&mut self) -> &mut Color {
        ensure(&mut self.prepare_sheet_pr().tab_color)
    }

    pub fn prepare_sheet_format_pr(&mut self) -> &mut SheetFormatPr {
        ensure(&mut self.sheet_format_pr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_prepare_allocates_ancestor_once() {
        let mut ws = Worksheet::new("Sheet1");
        ws.prepare_tab_color().rgb = Some("FF0000".to_string());
        ws.prepare_outline_pr().summary_right = Some(false);

        let sheet_pr = ws.sheet_pr().unwrap();
        assert_eq!(
            sheet_pr.tab_color.as_ref().unwrap().rgb.as_deref(),
            Some("FF0000")
        );
        assert_eq!(sheet_pr.outline_pr.as_ref().unwrap().summary_right, Some(false));
        assert!(sheet_pr.page_set_up_pr.is_none());
        assert!(ws.page_margins().is_none());
    }

    #[test]
    fn test_page_set_up_pr_starts_zeroed() {
        let mut ws = Worksheet::new("Sheet1");
        let pr = ws.prepare_page_set_up_pr();
        assert!(!pr.auto_page_breaks);
        assert!(!pr.fit_to_page);
    }

    #[test]
    fn test_prepare_keeps_existing_values() {
        let mut ws = Worksheet::new("Sheet1");
        ws.prepare_page_margins().left = 1.25;
        ws.prepare_page_margins();
        assert_eq!(ws.page_margins().unwrap().left, 1.25);
    }

    #[test]
    fn test_sheet_format_pr_starts_with_row_height_only() {
        let mut ws = Worksheet::new("Sheet1");
        let fmt = ws.prepare_sheet_format_pr();
        assert_eq!(fmt.default_row_height, DEFAULT_ROW_HEIGHT);
        assert_eq!(fmt.base_col_width, 0);
        assert_eq!(fmt.default_col_width, 0.0);

        fmt.default_row_height = 20.0;
        assert_eq!(ws.prepare_sheet_format_pr().default_row_height, 20.0);
    }
}
