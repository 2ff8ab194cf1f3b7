//! Worksheet properties: `sheetPr` and its children, plus `sheetFormatPr`

use tracing::debug;

use crate::error::Result;
use crate::fields::{FieldGroup, field_group};
use crate::model::{Color, OutlinePr, PageSetUpPr, SheetFormatPr, SheetPr, Workbook, Worksheet};
use crate::options::SheetPropsOptions;

type PropsGroup<N> = FieldGroup<SheetPropsOptions, N>;

pub(crate) static SHEET_PR_FIELDS: PropsGroup<SheetPr> = field_group! {
    SheetPropsOptions => SheetPr,
    record: "sheetPr",
    prefix: "",
    node: Worksheet::sheet_pr,
    ensure: Worksheet::prepare_sheet_pr,
    fields: [
        share code_name "codeName" => code_name "codeName",
        share enable_format_conditions_calculation "enableFormatConditionsCalculation"
            => enable_format_conditions_calculation "enableFormatConditionsCalculation",
        share published "published" => published "published",
    ],
};

pub(crate) static PAGE_SET_UP_PR_FIELDS: PropsGroup<PageSetUpPr> = field_group! {
    SheetPropsOptions => PageSetUpPr,
    record: "pageSetUpPr",
    prefix: "",
    node: Worksheet::page_set_up_pr,
    ensure: Worksheet::prepare_page_set_up_pr,
    fields: [
        copy auto_page_breaks "autoPageBreaks" => auto_page_breaks "autoPageBreaks",
        copy fit_to_page "fitToPage" => fit_to_page "fitToPage",
    ],
};

pub(crate) static OUTLINE_PR_FIELDS: PropsGroup<OutlinePr> = field_group! {
    SheetPropsOptions => OutlinePr,
    record: "outlinePr",
    prefix: "outline",
    node: Worksheet::outline_pr,
    ensure: Worksheet::prepare_outline_pr,
    fields: [
        share outline_summary_below "outlineSummaryBelow" => summary_below "summaryBelow",
        share outline_summary_right "outlineSummaryRight" => summary_right "summaryRight",
    ],
};

pub(crate) static TAB_COLOR_FIELDS: PropsGroup<Color> = field_group! {
    SheetPropsOptions => Color,
    record: "tabColor",
    prefix: "tabColor",
    node: Worksheet::tab_color,
    ensure: Worksheet::prepare_tab_color,
    fields: [
        share tab_color_indexed "tabColorIndexed" => indexed "indexed",
        share tab_color_rgb "tabColorRGB" => rgb "rgb",
        share tab_color_theme "tabColorTheme" => theme "theme",
        share tab_color_tint "tabColorTint" => tint "tint",
    ],
};

pub(crate) static SHEET_FORMAT_PR_FIELDS: PropsGroup<SheetFormatPr> = field_group! {
    SheetPropsOptions => SheetFormatPr,
    record: "sheetFormatPr",
    prefix: "",
    node: Worksheet::sheet_format_pr,
    ensure: Worksheet::prepare_sheet_format_pr,
    fields: [
        copy base_col_width "baseColWidth" => base_col_width "baseColWidth",
        copy default_col_width "defaultColWidth" => default_col_width "defaultColWidth",
        copy default_row_height "defaultRowHeight" => default_row_height "defaultRowHeight",
        copy custom_height "customHeight" => custom_height "customHeight",
        copy zero_height "zeroHeight" => zero_height "zeroHeight",
        copy thick_top "thickTop" => thick_top "thickTop",
        copy thick_bottom "thickBottom" => thick_bottom "thickBottom",
    ],
};

impl Worksheet {
    /// Write the present sheet property fields.
    ///
    /// `sheetPr` and its children are allocated only when a field targets
    /// them, but `sheetFormatPr` is always allocated, even when the patch
    /// carries no format field.
    pub fn apply_sheet_props(&mut self, opts: &SheetPropsOptions) -> usize {
        let mut written = SHEET_PR_FIELDS.apply(opts, self);
        written += PAGE_SET_UP_PR_FIELDS.apply(opts, self);
        written += OUTLINE_PR_FIELDS.apply(opts, self);
        written += TAB_COLOR_FIELDS.apply(opts, self);

        self.prepare_sheet_format_pr();
        written += SHEET_FORMAT_PR_FIELDS.apply(opts, self);

        debug!(sheet = %self.name, written, "applied sheet properties");
        written
    }

    /// Sheet properties snapshot: defaults overlaid with the stored records
    pub fn sheet_props_snapshot(&self) -> SheetPropsOptions {
        let mut opts = SheetPropsOptions::defaults();
        SHEET_PR_FIELDS.query(self, &mut opts);
        PAGE_SET_UP_PR_FIELDS.query(self, &mut opts);
        OUTLINE_PR_FIELDS.query(self, &mut opts);
        TAB_COLOR_FIELDS.query(self, &mut opts);
        SHEET_FORMAT_PR_FIELDS.query(self, &mut opts);
        opts
    }
}

impl SheetPropsOptions {
    /// Names of the fields this patch would write
    pub fn present_fields(&self) -> Vec<&'static str> {
        SHEET_PR_FIELDS
            .present_fields(self)
            .chain(PAGE_SET_UP_PR_FIELDS.present_fields(self))
            .chain(OUTLINE_PR_FIELDS.present_fields(self))
            .chain(TAB_COLOR_FIELDS.present_fields(self))
            .chain(SHEET_FORMAT_PR_FIELDS.present_fields(self))
            .collect()
    }
}

impl Workbook {
    /// Set worksheet properties. A `None` patch is a no-op.
    pub fn set_sheet_props(&mut self, sheet: &str, opts: Option<&SheetPropsOptions>) -> Result<()> {
        let ws = self.worksheet_mut(sheet)?;
        if let Some(opts) = opts {
            ws.apply_sheet_props(opts);
        }
        Ok(())
    }

    /// Get worksheet properties, with defaults for anything not stored
    pub fn get_sheet_props(&self, sheet: &str) -> Result<SheetPropsOptions> {
        Ok(self.worksheet(sheet)?.sheet_props_snapshot())
    }
}
