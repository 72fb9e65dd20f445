//! Result shapes of the host tooling protocol.
//!
//! These mirror the TypeScript-server response types the host renders
//! (completion info, completion entry details, quick info, outlining spans),
//! serialized with the host's camelCase wire names. They carry no behavior:
//! every value is derived from a generic language-service result by the
//! bridge, computed fresh per call and never cached.

#![forbid(unsafe_code)]

use std::fmt;

use serde::{Deserialize, Serialize};

/// Element kinds the host understands, with their wire spellings.
///
/// The bridge only ever produces the subset below; the host's full vocabulary
/// is wider but nothing here maps onto it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScriptElementKind {
    #[default]
    #[serde(rename = "")]
    Unknown,
    #[serde(rename = "method")]
    MemberFunction,
    #[serde(rename = "function")]
    Function,
    #[serde(rename = "constructor")]
    ConstructorImplementation,
    #[serde(rename = "var")]
    Variable,
    #[serde(rename = "class")]
    Class,
    #[serde(rename = "interface")]
    Interface,
    #[serde(rename = "module")]
    Module,
    #[serde(rename = "property")]
    MemberVariable,
    #[serde(rename = "const")]
    Const,
    #[serde(rename = "enum")]
    Enum,
    #[serde(rename = "keyword")]
    Keyword,
    #[serde(rename = "alias")]
    Alias,
    #[serde(rename = "string")]
    String,
}

impl ScriptElementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ScriptElementKind::Unknown => "",
            ScriptElementKind::MemberFunction => "method",
            ScriptElementKind::Function => "function",
            ScriptElementKind::ConstructorImplementation => "constructor",
            ScriptElementKind::Variable => "var",
            ScriptElementKind::Class => "class",
            ScriptElementKind::Interface => "interface",
            ScriptElementKind::Module => "module",
            ScriptElementKind::MemberVariable => "property",
            ScriptElementKind::Const => "const",
            ScriptElementKind::Enum => "enum",
            ScriptElementKind::Keyword => "keyword",
            ScriptElementKind::Alias => "alias",
            ScriptElementKind::String => "string",
        }
    }
}

impl fmt::Display for ScriptElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-modifier strings attached to completion details and quick info.
pub mod kind_modifiers {
    pub const NONE: &str = "";
    /// Marks a symbol as declared outside the current compilation unit.
    pub const AMBIENT: &str = "declare";
}

/// A `(start, length)` span of host-file offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub length: usize,
}

/// One fragment of rendered symbol text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolDisplayPart {
    pub text: String,
    pub kind: String,
}

impl SymbolDisplayPart {
    /// A plain-text part, as used for detail and documentation strings.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: "text".to_string(),
        }
    }

    /// A part of unclassified kind, as used for hover content.
    pub fn unknown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: "unknown".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionInfo {
    pub is_global_completion: bool,
    pub is_member_completion: bool,
    pub is_new_identifier_location: bool,
    pub entries: Vec<CompletionEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEntry {
    pub name: String,
    pub kind: ScriptElementKind,
    pub sort_text: String,
    /// Text inserted instead of `name` when the entry carries its own edit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_text: Option<String>,
    /// Host-file span replaced by `insert_text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement_span: Option<TextSpan>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsDocTagInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEntryDetails {
    pub name: String,
    pub kind: ScriptElementKind,
    pub kind_modifiers: String,
    pub display_parts: Vec<SymbolDisplayPart>,
    #[serde(default)]
    pub documentation: Vec<SymbolDisplayPart>,
    #[serde(default)]
    pub tags: Vec<JsDocTagInfo>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickInfo {
    pub kind: ScriptElementKind,
    pub kind_modifiers: String,
    pub text_span: TextSpan,
    pub display_parts: Vec<SymbolDisplayPart>,
    #[serde(default)]
    pub documentation: Vec<SymbolDisplayPart>,
    #[serde(default)]
    pub tags: Vec<JsDocTagInfo>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutliningSpanKind {
    Comment,
    Region,
    Code,
    Imports,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutliningSpan {
    /// The span collapsed by the host when the region is folded.
    pub text_span: TextSpan,
    /// The span the host highlights when hovering the fold control.
    pub hint_span: TextSpan,
    pub banner_text: String,
    pub auto_collapse: bool,
    pub kind: OutliningSpanKind,
}
