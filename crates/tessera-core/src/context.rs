//! The seam between one embedded template and the host file that contains it.

use lsp_types::Position;

use crate::text::LineIndex;

/// One embedded template occurrence inside a host source file.
///
/// The host supplies an implementation per template instance; the bridge uses
/// it both to map embedded-document positions onto flat host-file offsets and
/// as the identity of the template for completion caching (`file_name` plus
/// the current `text` snapshot, so any edit invalidates cached results
/// structurally).
pub trait TemplateContext {
    /// Path of the host file containing the template.
    fn file_name(&self) -> &str;

    /// Current text of the embedded virtual document.
    fn text(&self) -> &str;

    /// Map a position in the embedded document onto a host-file offset.
    fn to_offset(&self, position: Position) -> usize;
}

/// A [`TemplateContext`] for a template whose text occupies one contiguous
/// span of the host file, starting at `host_offset`.
pub struct TemplateRegion {
    file_name: String,
    host_offset: usize,
    text: String,
    line_index: LineIndex,
}

impl TemplateRegion {
    pub fn new(file_name: impl Into<String>, host_offset: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        let line_index = LineIndex::new(&text);
        Self {
            file_name: file_name.into(),
            host_offset,
            text,
            line_index,
        }
    }
}

impl TemplateContext for TemplateRegion {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn to_offset(&self, position: Position) -> usize {
        self.host_offset + u32::from(self.line_index.offset_at(&self.text, position)) as usize
    }
}
