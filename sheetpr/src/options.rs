//! Option descriptors
//!
//! Every field is optional: `None` leaves the model untouched on write and
//! means "no value" on read. Serialized names follow the format's attribute
//! spelling so patch files read like the XML they end up in.

use serde::{Deserialize, Serialize};

/// Worksheet page margins and print centering
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PageLayoutMarginsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontally_centered: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertically_centered: Option<bool>,
}

/// Worksheet properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SheetPropsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_format_conditions_calculation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_page_breaks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit_to_page: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_summary_below: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_summary_right: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_color_indexed: Option<i32>,
    #[serde(rename = "tabColorRGB", skip_serializing_if = "Option::is_none")]
    pub tab_color_rgb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_color_theme: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_color_tint: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_col_width: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_col_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_row_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_height: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero_height: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thick_top: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thick_bottom: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_spelling() {
        let opts: SheetPropsOptions = toml::from_str(
            r#"
            codeName = "Main"
            tabColorRGB = "FF0000"
            tabColorTint = 0.0
            baseColWidth = 10
            "#,
        )
        .unwrap();
        assert_eq!(opts.code_name.as_deref(), Some("Main"));
        assert_eq!(opts.tab_color_rgb.as_deref(), Some("FF0000"));
        assert_eq!(opts.tab_color_tint, Some(0.0));
        assert_eq!(opts.base_col_width, Some(10));
        assert_eq!(opts.tab_color_theme, None);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result: Result<PageLayoutMarginsOptions, _> = toml::from_str("lefft = 1.0");
        assert!(result.is_err());
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let opts = PageLayoutMarginsOptions {
            left: Some(1.0),
            horizontally_centered: Some(false),
            ..Default::default()
        };
        let json = serde_json::to_value(&opts).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "left": 1.0, "horizontallyCentered": false })
        );
    }
}
