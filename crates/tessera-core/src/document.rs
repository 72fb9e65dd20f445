//! The virtual document handed to embedded language services.

use lsp_types::Position;

use crate::text::{LineIndex, TextSize};

/// One snapshot of embedded content, addressed with its own coordinate space.
///
/// A `TextDocument` is immutable; an edit to the surrounding host file
/// produces a new snapshot with a bumped version rather than mutating this
/// one. Conversions are total: out-of-range positions clamp the way editor
/// virtual documents clamp (see [`LineIndex::offset_at`]).
#[derive(Clone, Debug)]
pub struct TextDocument {
    uri: String,
    language_id: String,
    version: i32,
    text: String,
    line_index: LineIndex,
}

impl TextDocument {
    pub fn new(
        uri: impl Into<String>,
        language_id: impl Into<String>,
        version: i32,
        text: impl Into<String>,
    ) -> Self {
        let text = text.into();
        let line_index = LineIndex::new(&text);
        Self {
            uri: uri.into(),
            language_id: language_id.into(),
            version,
            text,
            line_index,
        }
    }

    #[inline]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    #[inline]
    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    #[inline]
    pub fn version(&self) -> i32 {
        self.version
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn line_count(&self) -> u32 {
        self.line_index.line_count()
    }

    /// Byte offset of `position` within this document's text (clamping).
    pub fn offset_at(&self, position: Position) -> usize {
        u32::from(self.line_index.offset_at(&self.text, position)) as usize
    }

    /// Position of the byte `offset` within this document's text (clamping).
    pub fn position_at(&self, offset: usize) -> Position {
        self.line_index
            .position(&self.text, TextSize::from(offset.min(u32::MAX as usize) as u32))
    }
}
