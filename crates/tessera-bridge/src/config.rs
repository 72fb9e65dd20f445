//! Host-facing configuration.

use serde::{Deserialize, Serialize};

/// Settings supplied by the host plugin, camelCase on the wire.
///
/// Every field defaults, so a partial payload configures only what it names.
/// The completion flags feed the markup service's completion options; the
/// format block is owned here but consumed by the host's template formatting
/// integration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TesseraConfig {
    /// Suppress the markup service's automatic tag-close proposals.
    pub hide_auto_complete_proposals: bool,
    /// Offer HTML5 tags and attributes in markup completions.
    pub suggest_html5: bool,
    pub html_format: HtmlFormatConfig,
}

impl Default for TesseraConfig {
    fn default() -> Self {
        Self {
            hide_auto_complete_proposals: true,
            suggest_html5: true,
            html_format: HtmlFormatConfig::default(),
        }
    }
}

impl TesseraConfig {
    /// Replace this configuration with `value` when it parses; keep the
    /// current one when it does not.
    pub fn update(&mut self, value: &serde_json::Value) {
        match serde_json::from_value::<TesseraConfig>(value.clone()) {
            Ok(config) => *self = config,
            Err(err) => {
                tracing::warn!(
                    target: "tessera.config",
                    err = %err,
                    "ignoring malformed configuration payload"
                );
            }
        }
    }
}

/// Markup formatting options, mirroring the embedded service's format
/// configuration field for field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HtmlFormatConfig {
    pub content_unformatted: String,
    pub end_with_newline: bool,
    pub extra_liners: String,
    pub indent_handlebars: bool,
    pub indent_inner_html: bool,
    pub insert_spaces: bool,
    pub max_preserve_new_lines: Option<u32>,
    pub preserve_new_lines: bool,
    pub tab_size: u32,
    pub unformatted: String,
    pub wrap_attributes: String,
    pub wrap_attributes_indent_size: Option<u32>,
    pub wrap_line_length: u32,
}

impl Default for HtmlFormatConfig {
    fn default() -> Self {
        Self {
            content_unformatted: "pre,code,textarea".to_string(),
            end_with_newline: false,
            extra_liners: "head, body, /html".to_string(),
            indent_handlebars: false,
            indent_inner_html: false,
            insert_spaces: true,
            max_preserve_new_lines: None,
            preserve_new_lines: true,
            tab_size: 4,
            unformatted: "wbr".to_string(),
            wrap_attributes: "auto".to_string(),
            wrap_attributes_indent_size: None,
            wrap_line_length: 120,
        }
    }
}
