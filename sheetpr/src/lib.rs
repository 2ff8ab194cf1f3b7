//! sheetpr: sparse-patch accessors for worksheet layout records
//!
//! Callers hand over option descriptors whose fields are all optional. Only
//! the present fields are written into the worksheet model, allocating the
//! records they target on first use; queries return fully populated
//! descriptors where records the sheet does not carry are replaced by the
//! format defaults.
//!
//! ```
//! use sheetpr::{PageLayoutMarginsOptions, Workbook};
//!
//! let mut workbook = Workbook::new_with_sheets(["Sheet1"]);
//! let patch = PageLayoutMarginsOptions {
//!     left: Some(1.0),
//!     ..Default::default()
//! };
//! workbook.set_page_margins("Sheet1", Some(&patch)).unwrap();
//!
//! let margins = workbook.get_page_margins("Sheet1").unwrap();
//! assert_eq!(margins.left, Some(1.0));
//! assert_eq!(margins.right, Some(0.7));
//! ```

pub mod defaults;
pub mod error;
pub mod fields;
pub mod margins;
pub mod model;
pub mod options;
pub mod patch;
pub mod sheet_props;

pub use error::{PropsError, Result};
pub use model::{Workbook, Worksheet};
pub use options::{PageLayoutMarginsOptions, SheetPropsOptions};
pub use patch::{PatchSet, SheetPatch};
