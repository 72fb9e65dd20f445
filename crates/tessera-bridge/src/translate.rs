//! Conversion of generic language-service results into host result shapes.
//!
//! Each function is total over well-formed input: absent kinds, detail, and
//! documentation produce empty or unknown-valued host fields, and reversed
//! span endpoints saturate to zero length. Coordinate mapping always goes
//! through the request's [`TemplateContext`].

use lsp_types::{
    CompletionItem, CompletionList, CompletionTextEdit, Documentation, FoldingRange, Hover,
    HoverContents, MarkedString, Position, Range,
};
use tessera_core::TemplateContext;
use tessera_proto::{
    kind_modifiers, CompletionEntry, CompletionEntryDetails, CompletionInfo, OutliningSpan,
    OutliningSpanKind, QuickInfo, ScriptElementKind, SymbolDisplayPart, TextSpan,
};

use crate::kinds;

/// Convert a hover result into host quick info.
///
/// Hover content splits into two streams: plain strings become documentation
/// parts, while language-tagged and markup values become header (display)
/// parts. Without an explicit hover range the span is a single character
/// anchored at the cursor.
pub fn quick_info(context: &dyn TemplateContext, position: Position, hover: &Hover) -> QuickInfo {
    let mut header = Vec::new();
    let mut docs = Vec::new();
    split_hover_contents(&hover.contents, &mut header, &mut docs);

    let start = context.to_offset(hover.range.map_or(position, |range| range.start));
    let length = match hover.range {
        Some(range) => context.to_offset(range.end).saturating_sub(start),
        None => 1,
    };

    QuickInfo {
        kind: ScriptElementKind::String,
        kind_modifiers: kind_modifiers::NONE.to_string(),
        text_span: TextSpan { start, length },
        display_parts: header,
        documentation: docs,
        tags: Vec::new(),
    }
}

fn split_hover_contents(
    contents: &HoverContents,
    header: &mut Vec<SymbolDisplayPart>,
    docs: &mut Vec<SymbolDisplayPart>,
) {
    match contents {
        HoverContents::Scalar(marked) => split_marked_string(marked, header, docs),
        HoverContents::Array(items) => {
            for item in items {
                split_marked_string(item, header, docs);
            }
        }
        HoverContents::Markup(markup) => {
            header.push(SymbolDisplayPart::unknown(markup.value.as_str()));
        }
    }
}

fn split_marked_string(
    marked: &MarkedString,
    header: &mut Vec<SymbolDisplayPart>,
    docs: &mut Vec<SymbolDisplayPart>,
) {
    match marked {
        MarkedString::String(text) => docs.push(SymbolDisplayPart::unknown(text.as_str())),
        MarkedString::LanguageString(ls) => {
            header.push(SymbolDisplayPart::unknown(ls.value.as_str()));
        }
    }
}

/// Convert a generic completion list into host completion info.
///
/// The three placement flags are always false: embedded completions never
/// count as global, member, or new-identifier completions to the host.
pub fn completion_info(context: &dyn TemplateContext, list: &CompletionList) -> CompletionInfo {
    CompletionInfo {
        is_global_completion: false,
        is_member_completion: false,
        is_new_identifier_location: false,
        entries: list
            .items
            .iter()
            .map(|item| completion_entry(context, item))
            .collect(),
    }
}

/// Convert one completion item into a host completion entry.
///
/// Sort text falls back to the label so entries order deterministically even
/// when the service sets none. An item-supplied text edit carries over as an
/// insert-text override plus the host-file span it replaces.
pub fn completion_entry(context: &dyn TemplateContext, item: &CompletionItem) -> CompletionEntry {
    let mut entry = CompletionEntry {
        name: item.label.clone(),
        kind: kinds::script_element_kind(item.kind),
        sort_text: item.sort_text.clone().unwrap_or_else(|| item.label.clone()),
        insert_text: None,
        replacement_span: None,
    };

    if let Some(edit) = &item.text_edit {
        let (new_text, range) = match edit {
            CompletionTextEdit::Edit(edit) => (&edit.new_text, edit.range),
            CompletionTextEdit::InsertAndReplace(edit) => (&edit.new_text, edit.replace),
        };
        entry.insert_text = Some(new_text.clone());
        entry.replacement_span = Some(text_span(context, range));
    }

    entry
}

/// Convert a resolved completion item into host entry details.
pub fn completion_entry_details(item: &CompletionItem) -> CompletionEntryDetails {
    CompletionEntryDetails {
        name: item.label.clone(),
        kind: kinds::script_element_kind(item.kind),
        kind_modifiers: kind_modifiers::AMBIENT.to_string(),
        display_parts: display_parts(item.detail.as_deref()),
        documentation: display_parts(documentation_value(item.documentation.as_ref())),
        tags: Vec::new(),
    }
}

/// Details synthesized when a requested entry is missing from the list.
///
/// The host must always receive some details object, so a lookup miss
/// degrades to an unknown kind with the requested name as its display text.
pub fn unresolved_entry_details(name: &str) -> CompletionEntryDetails {
    CompletionEntryDetails {
        name: name.to_string(),
        kind: ScriptElementKind::Unknown,
        kind_modifiers: kind_modifiers::NONE.to_string(),
        display_parts: display_parts(Some(name)),
        documentation: Vec::new(),
        tags: Vec::new(),
    }
}

/// Convert a folding range into a host outlining span.
///
/// Character fields default to 0 when the range carries none. One span
/// serves as both the collapse region and the hint region; every span is a
/// plain code region with no banner, never auto-collapsed.
pub fn outlining_span(context: &dyn TemplateContext, range: &FoldingRange) -> OutliningSpan {
    let start = context.to_offset(Position::new(
        range.start_line,
        range.start_character.unwrap_or(0),
    ));
    let end = context.to_offset(Position::new(range.end_line, range.end_character.unwrap_or(0)));
    let span = TextSpan {
        start,
        length: end.saturating_sub(start),
    };

    OutliningSpan {
        text_span: span,
        hint_span: span,
        banner_text: String::new(),
        auto_collapse: false,
        kind: OutliningSpanKind::Code,
    }
}

/// Convert an embedded-document range into a host `(start, length)` span.
pub fn text_span(context: &dyn TemplateContext, range: Range) -> TextSpan {
    let start = context.to_offset(range.start);
    let length = context.to_offset(range.end).saturating_sub(start);
    TextSpan { start, length }
}

fn documentation_value(documentation: Option<&Documentation>) -> Option<&str> {
    match documentation {
        Some(Documentation::String(text)) => Some(text),
        Some(Documentation::MarkupContent(markup)) => Some(&markup.value),
        None => None,
    }
}

/// Zero or one plain-text display part; absent and empty text produce none.
fn display_parts(text: Option<&str>) -> Vec<SymbolDisplayPart> {
    match text {
        None | Some("") => Vec::new(),
        Some(text) => vec![SymbolDisplayPart::text(text)],
    }
}
