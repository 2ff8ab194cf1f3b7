//! Page margins and print centering

use tracing::debug;

use crate::error::Result;
use crate::fields::{FieldGroup, field_group};
use crate::model::{PageMargins, PrintOptions, Workbook, Worksheet};
use crate::options::PageLayoutMarginsOptions;

type MarginsGroup<N> = FieldGroup<PageLayoutMarginsOptions, N>;

pub(crate) static PAGE_MARGINS_FIELDS: MarginsGroup<PageMargins> = field_group! {
    PageLayoutMarginsOptions => PageMargins,
    record: "pageMargins",
    prefix: "",
    node: Worksheet::page_margins,
    ensure: Worksheet::prepare_page_margins,
    fields: [
        copy left "left" => left "left",
        copy right "right" => right "right",
        copy top "top" => top "top",
        copy bottom "bottom" => bottom "bottom",
        copy header "header" => header "header",
        copy footer "footer" => footer "footer",
    ],
};

// printOptions spells the flags `horizontalCentered`/`verticalCentered`, so
// this table is the one place where names are paired by hand.
pub(crate) static PRINT_OPTIONS_FIELDS: MarginsGroup<PrintOptions> = field_group! {
    PageLayoutMarginsOptions => PrintOptions,
    record: "printOptions",
    prefix: "",
    node: Worksheet::print_options,
    ensure: Worksheet::prepare_print_options,
    fields: [
        copy horizontally_centered "horizontallyCentered"
            => horizontal_centered "horizontalCentered",
        copy vertically_centered "verticallyCentered" => vertical_centered "verticalCentered",
    ],
};

impl Worksheet {
    /// Write the present margin and centering fields, allocating
    /// `pageMargins`/`printOptions` only when a field targets them.
    pub fn apply_page_margins(&mut self, opts: &PageLayoutMarginsOptions) -> usize {
        let written =
            PAGE_MARGINS_FIELDS.apply(opts, self) + PRINT_OPTIONS_FIELDS.apply(opts, self);
        debug!(sheet = %self.name, written, "applied page margins");
        written
    }

    /// Margins snapshot: format defaults overlaid with the stored records
    pub fn page_margins_snapshot(&self) -> PageLayoutMarginsOptions {
        let mut opts = PageLayoutMarginsOptions::defaults();
        PAGE_MARGINS_FIELDS.query(self, &mut opts);
        PRINT_OPTIONS_FIELDS.query(self, &mut opts);
        opts
    }
}

impl PageLayoutMarginsOptions {
    /// Names of the fields this patch would write
    pub fn present_fields(&self) -> Vec<&'static str> {
        PAGE_MARGINS_FIELDS
            .present_fields(self)
            .chain(PRINT_OPTIONS_FIELDS.present_fields(self))
            .collect()
    }
}

impl Workbook {
    /// Set worksheet page margins. A `None` patch is a no-op.
    pub fn set_page_margins(
        &mut self,
        sheet: &str,
        opts: Option<&PageLayoutMarginsOptions>,
    ) -> Result<()> {
        let ws = self.worksheet_mut(sheet)?;
        if let Some(opts) = opts {
            ws.apply_page_margins(opts);
        }
        Ok(())
    }

    /// Get worksheet page margins, with defaults for anything not stored
    pub fn get_page_margins(&self, sheet: &str) -> Result<PageLayoutMarginsOptions> {
        Ok(self.worksheet(sheet)?.page_margins_snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PropsError;

    #[test]
    fn test_margin_tables_follow_naming_rule() {
        assert!(PAGE_MARGINS_FIELDS.follows_naming_rule());
        assert!(!PRINT_OPTIONS_FIELDS.follows_naming_rule());
        assert_eq!(
            PRINT_OPTIONS_FIELDS.resolve("verticallyCentered"),
            Some("verticalCentered")
        );
    }

    #[test]
    fn test_centering_only_allocates_print_options() {
        let mut ws = Worksheet::new("Sheet1");
        let opts = PageLayoutMarginsOptions {
            vertically_centered: Some(true),
            ..Default::default()
        };
        assert_eq!(ws.apply_page_margins(&opts), 1);
        assert!(ws.page_margins.is_none());

        let print_options = ws.print_options().unwrap();
        assert!(print_options.vertical_centered);
        assert!(!print_options.horizontal_centered);

        let snapshot = ws.page_margins_snapshot();
        assert_eq!(snapshot.vertically_centered, Some(true));
        assert_eq!(snapshot.horizontally_centered, Some(false));
        assert_eq!(snapshot.left, Some(0.7));
    }

    #[test]
    fn test_written_margin_keeps_sibling_defaults() {
        let mut ws = Worksheet::new("Sheet1");
        ws.apply_page_margins(&PageLayoutMarginsOptions {
            top: Some(1.5),
            ..Default::default()
        });

        let snapshot = ws.page_margins_snapshot();
        assert_eq!(snapshot.top, Some(1.5));
        assert_eq!(snapshot.bottom, Some(0.75));
        assert_eq!(snapshot.horizontally_centered, None);
    }

    #[test]
    fn test_present_fields() {
        let opts = PageLayoutMarginsOptions {
            footer: Some(0.2),
            horizontally_centered: Some(true),
            ..Default::default()
        };
        assert_eq!(opts.present_fields(), vec!["footer", "horizontallyCentered"]);
    }

    #[test]
    fn test_missing_sheet_with_nil_patch() {
        let mut workbook = Workbook::new_with_sheets(["Sheet1"]);
        assert!(workbook.set_page_margins("Sheet1", None).is_ok());
        assert!(matches!(
            workbook.set_page_margins("Other", None),
            Err(PropsError::SheetNotFound(_))
        ));
        assert!(workbook.sheets[0].page_margins.is_none());
    }
}
