//! Correspondence between option fields and model fields
//!
//! Each option descriptor is split into groups, one per target record. A
//! group is a static table of [`FieldBinding`]s built with `field_group!`;
//! a binding pairs an option field with the model field of the same name,
//! after the group prefix is stripped (`tabColorRGB` -> `rgb`,
//! `outlineSummaryBelow` -> `summaryBelow`).

use tracing::trace;

use crate::model::Worksheet;

/// How a value moves between the option and the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    /// Model field is a plain value: written by value, always reported when
    /// the record exists.
    Copy,
    /// Model field is optional too: presence carries over, and an unset model
    /// field leaves the snapshot default in place.
    Share,
}

/// One option field bound to one model field
pub struct FieldBinding<O: 'static, N: 'static> {
    /// Option field name, as spelled in patch files
    pub option: &'static str,
    /// Model field name, as spelled in the format
    pub model: &'static str,
    pub transfer: Transfer,
    pub is_set: fn(&O) -> bool,
    pub write: fn(&O, &mut N),
    pub read: fn(&N, &mut O),
}

/// All bindings targeting one record of a worksheet
pub struct FieldGroup<O: 'static, N: 'static> {
    /// Record name, as spelled in the format
    pub record: &'static str,
    /// Prefix carried by option names but not by model names
    pub prefix: &'static str,
    /// Locate the record, if the sheet has it
    pub node: fn(&Worksheet) -> Option<&N>,
    /// Locate the record, allocating it and its ancestors when missing
    pub ensure: fn(&mut Worksheet) -> &mut N,
    pub bindings: &'static [FieldBinding<O, N>],
}

impl<O: 'static, N: 'static> FieldGroup<O, N> {
    /// Write every present field of `opts`. The record is only allocated when
    /// at least one field targets it. Returns the number of fields written.
    pub fn apply(&self, opts: &O, ws: &mut Worksheet) -> usize {
        let mut written = 0;
        for binding in self.bindings {
            if (binding.is_set)(opts) {
                trace!(record = self.record, field = binding.model, "writing field");
                (binding.write)(opts, (self.ensure)(ws));
                written += 1;
            }
        }
        written
    }

    /// Overlay the record's values onto `opts`; a missing record leaves
    /// `opts` as it is.
    pub fn query(&self, ws: &Worksheet, opts: &mut O) {
        if let Some(node) = (self.node)(ws) {
            for binding in self.bindings {
                (binding.read)(node, opts);
            }
        }
    }

    /// Names of the option fields present in `opts`
    pub fn present_fields<'a>(&'a self, opts: &'a O) -> impl Iterator<Item = &'static str> + 'a {
        self.bindings
            .iter()
            .filter(move |b| (b.is_set)(opts))
            .map(|b| b.option)
    }

    /// Model field bound to an option field
    pub fn resolve(&self, option: &str) -> Option<&'static str> {
        self.bindings
            .iter()
            .find(|b| b.option == option)
            .map(|b| b.model)
    }

    /// Whether every binding in the table follows the naming rule
    pub fn follows_naming_rule(&self) -> bool {
        self.bindings
            .iter()
            .all(|b| corresponds(b.option, b.model, self.prefix))
    }
}

/// Strip the group prefix from an option field name
pub fn model_field_name<'a>(option: &'a str, prefix: &str) -> &'a str {
    option.strip_prefix(prefix).unwrap_or(option)
}

/// Whether `option` names `model` under the group `prefix`. The case of the
/// first letter changes once the prefix is gone, and acronyms such as `RGB`
/// are spelled in lower case by the format, so the comparison ignores case.
pub fn corresponds(option: &str, model: &str, prefix: &str) -> bool {
    model_field_name(option, prefix).eq_ignore_ascii_case(model)
}

/// Build a [`FieldBinding`] for `$opt` on `$O` and `$model` on `$N`.
macro_rules! field_binding {
    (copy, $O:ty, $N:ty, $opt:ident $oname:literal => $model:ident $mname:literal) => {
        $crate::fields::FieldBinding::<$O, $N> {
            option: $oname,
            model: $mname,
            transfer: $crate::fields::Transfer::Copy,
            is_set: |o: &$O| o.$opt.is_some(),
            write: |o: &$O, n: &mut $N| {
                if let Some(value) = &o.$opt {
                    n.$model = value.clone();
                }
            },
            read: |n: &$N, o: &mut $O| o.$opt = Some(n.$model.clone()),
        }
    };
    (share, $O:ty, $N:ty, $opt:ident $oname:literal => $model:ident $mname:literal) => {
        $crate::fields::FieldBinding::<$O, $N> {
            option: $oname,
            model: $mname,
            transfer: $crate::fields::Transfer::Share,
            is_set: |o: &$O| o.$opt.is_some(),
            write: |o: &$O, n: &mut $N| {
                if o.$opt.is_some() {
                    n.$model = o.$opt.clone();
                }
            },
            read: |n: &$N, o: &mut $O| {
                if n.$model.is_some() {
                    o.$opt = n.$model.clone();
                }
            },
        }
    };
}

/// Build a static [`FieldGroup`] table.
///
/// ```ignore
/// static MARGINS: FieldGroup<PageLayoutMarginsOptions, PageMargins> = field_group! {
///     PageLayoutMarginsOptions => PageMargins, record: "pageMargins", prefix: "",
///     node: Worksheet::page_margins, ensure: Worksheet::prepare_page_margins,
///     fields: [copy left "left" => left "left"],
/// };
/// ```
macro_rules! field_group {
    (
        $O:ty => $N:ty,
        record: $record:literal,
        prefix: $prefix:literal,
        node: $node:path,
        ensure: $ensure:path,
        fields: [
            $($mode:ident $opt:ident $oname:literal => $model:ident $mname:literal),* $(,)?
        ] $(,)?
    ) => {
        $crate::fields::FieldGroup::<$O, $N> {
            record: $record,
            prefix: $prefix,
            node: $node,
            ensure: $ensure,
            bindings: &[$(
                $crate::fields::field_binding!($mode, $O, $N, $opt $oname => $model $mname)
            ),*],
        }
    };
}

pub(crate) use field_binding;
pub(crate) use field_group;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Color;

    #[derive(Debug, Default, PartialEq)]
    struct ColorOptions {
        tab_color_rgb: Option<String>,
        tab_color_tint: Option<f64>,
    }

    static COLOR_FIELDS: FieldGroup<ColorOptions, Color> = field_group! {
        ColorOptions => Color,
        record: "tabColor",
        prefix: "tabColor",
        node: Worksheet::tab_color,
        ensure: Worksheet::prepare_tab_color,
        fields: [
            share tab_color_rgb "tabColorRGB" => rgb "rgb",
            share tab_color_tint "tabColorTint" => tint "tint",
        ],
    };

    #[test]
    fn test_model_field_name() {
        assert_eq!(model_field_name("tabColorRGB", "tabColor"), "RGB");
        assert_eq!(model_field_name("outlineSummaryBelow", "outline"), "SummaryBelow");
        assert_eq!(model_field_name("left", ""), "left");
        assert_eq!(model_field_name("codeName", "tabColor"), "codeName");
    }

    #[test]
    fn test_corresponds() {
        assert!(corresponds("tabColorRGB", "rgb", "tabColor"));
        assert!(corresponds("outlineSummaryRight", "summaryRight", "outline"));
        assert!(!corresponds("tabColorTint", "theme", "tabColor"));
        assert!(!corresponds("horizontallyCentered", "horizontalCentered", ""));
    }

    #[test]
    fn test_group_resolves_by_name() {
        assert!(COLOR_FIELDS.follows_naming_rule());
        assert_eq!(COLOR_FIELDS.resolve("tabColorRGB"), Some("rgb"));
        assert_eq!(COLOR_FIELDS.resolve("tabColorTheme"), None);
    }

    #[test]
    fn test_apply_without_fields_allocates_nothing() {
        let mut ws = Worksheet::new("Sheet1");
        let written = COLOR_FIELDS.apply(&ColorOptions::default(), &mut ws);
        assert_eq!(written, 0);
        assert!(ws.sheet_pr.is_none());
    }

    #[test]
    fn test_apply_then_query() {
        let mut ws = Worksheet::new("Sheet1");
        let opts = ColorOptions {
            tab_color_tint: Some(0.0),
            ..Default::default()
        };
        assert_eq!(COLOR_FIELDS.apply(&opts, &mut ws), 1);
        assert_eq!(
            COLOR_FIELDS.present_fields(&opts).collect::<Vec<_>>(),
            vec!["tabColorTint"]
        );

        let mut snapshot = ColorOptions::default();
        COLOR_FIELDS.query(&ws, &mut snapshot);
        assert_eq!(snapshot, opts);
    }
}
