//! Values reported for records a sheet does not carry yet

use crate::options::{PageLayoutMarginsOptions, SheetPropsOptions};

pub const DEFAULT_MARGIN_LEFT: f64 = 0.7;
pub const DEFAULT_MARGIN_RIGHT: f64 = 0.7;
pub const DEFAULT_MARGIN_TOP: f64 = 0.75;
pub const DEFAULT_MARGIN_BOTTOM: f64 = 0.75;
pub const DEFAULT_MARGIN_HEADER: f64 = 0.3;
pub const DEFAULT_MARGIN_FOOTER: f64 = 0.3;

/// Row height, in points, given to a freshly allocated `sheetFormatPr`
pub const DEFAULT_ROW_HEIGHT: f64 = 15.0;
pub const DEFAULT_BASE_COL_WIDTH: u8 = 8;

impl PageLayoutMarginsOptions {
    /// Snapshot baseline. Print centering has no default and stays unset.
    pub fn defaults() -> Self {
        Self {
            left: Some(DEFAULT_MARGIN_LEFT),
            right: Some(DEFAULT_MARGIN_RIGHT),
            top: Some(DEFAULT_MARGIN_TOP),
            bottom: Some(DEFAULT_MARGIN_BOTTOM),
            header: Some(DEFAULT_MARGIN_HEADER),
            footer: Some(DEFAULT_MARGIN_FOOTER),
            horizontally_centered: None,
            vertically_centered: None,
        }
    }
}

impl SheetPropsOptions {
    /// Snapshot baseline; fields not listed here have no default.
    pub fn defaults() -> Self {
        Self {
            enable_format_conditions_calculation: Some(true),
            published: Some(true),
            auto_page_breaks: Some(true),
            outline_summary_below: Some(true),
            base_col_width: Some(DEFAULT_BASE_COL_WIDTH),
            ..Default::default()
        }
    }
}
