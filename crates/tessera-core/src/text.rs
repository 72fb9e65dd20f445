//! Line/offset conversion for one text snapshot.
//!
//! Embedded virtual documents address content with LSP-style `(line, UTF-16
//! code unit)` positions while the host works with flat byte offsets, so the
//! bridge converts at every boundary. [`LineIndex`] pre-computes line starts
//! and ends once per snapshot; both conversion directions are total and
//! clamp, matching the lenient `offsetAt` semantics editors implement for
//! virtual documents.

pub use text_size::TextSize;

use lsp_types::Position;

/// Pre-computed line start/end offsets for a particular text snapshot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
    line_ends: Vec<TextSize>,
    text_len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut line_starts = Vec::with_capacity(16);
        let mut line_ends = Vec::with_capacity(16);
        line_starts.push(TextSize::from(0));

        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => {
                    line_ends.push(TextSize::from(i as u32));
                    line_starts.push(TextSize::from((i + 1) as u32));
                    i += 1;
                }
                b'\r' => {
                    if i + 1 < bytes.len() && bytes[i + 1] == b'\n' {
                        line_ends.push(TextSize::from(i as u32));
                        line_starts.push(TextSize::from((i + 2) as u32));
                        i += 2;
                    } else {
                        line_ends.push(TextSize::from(i as u32));
                        line_starts.push(TextSize::from((i + 1) as u32));
                        i += 1;
                    }
                }
                _ => i += 1,
            }
        }

        line_ends.push(TextSize::from(text.len() as u32));

        Self {
            line_starts,
            line_ends,
            text_len: TextSize::from(text.len() as u32),
        }
    }

    #[inline]
    pub fn line_count(&self) -> u32 {
        self.line_starts.len() as u32
    }

    #[inline]
    pub fn line_start(&self, line: u32) -> Option<TextSize> {
        self.line_starts.get(line as usize).copied()
    }

    /// End of the line, excluding its terminator.
    #[inline]
    pub fn line_end(&self, line: u32) -> Option<TextSize> {
        self.line_ends.get(line as usize).copied()
    }

    fn line_index(&self, offset: TextSize) -> usize {
        // Clamp offsets that point past the end; callers may pass `text_len`
        // when referring to EOF.
        let offset = offset.min(self.text_len);
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert) => insert.saturating_sub(1),
        }
    }

    /// Convert a byte offset to an LSP position (UTF-16 code units).
    ///
    /// `text` must be the same snapshot used to construct this [`LineIndex`].
    /// Offsets past the end clamp to EOF, and an offset inside a multi-byte
    /// character snaps to the start of that character, mirroring how
    /// [`LineIndex::offset_at`] treats mid-surrogate positions.
    pub fn position(&self, text: &str, offset: TextSize) -> Position {
        debug_assert_eq!(TextSize::from(text.len() as u32), self.text_len);
        let offset = offset.min(self.text_len);
        let line = self.line_index(offset);
        let line_start = self.line_starts[line];
        let line_end = self.line_ends[line];
        let offset = offset.min(line_end);
        let line_start_usize = u32::from(line_start) as usize;
        let mut offset_usize = u32::from(offset) as usize;
        // Line starts are char boundaries, so the walk never crosses one.
        while !text.is_char_boundary(offset_usize) {
            offset_usize -= 1;
        }
        let utf16_col: u32 = text[line_start_usize..offset_usize]
            .chars()
            .map(|c| c.len_utf16() as u32)
            .sum();

        Position {
            line: line as u32,
            character: utf16_col,
        }
    }

    /// Convert an LSP position (UTF-16 code units) into a byte offset.
    ///
    /// Out-of-range input clamps instead of failing: a line past EOF maps to
    /// the end of the text, a character past the end of its line maps to the
    /// line end (excluding the terminator), and a character landing inside a
    /// surrogate pair maps to the start of that character.
    pub fn offset_at(&self, text: &str, position: Position) -> TextSize {
        debug_assert_eq!(TextSize::from(text.len() as u32), self.text_len);
        let (Some(line_start), Some(line_end)) =
            (self.line_start(position.line), self.line_end(position.line))
        else {
            return self.text_len;
        };

        let line_start_usize = u32::from(line_start) as usize;
        let line_end_usize = u32::from(line_end) as usize;
        let line_text = &text[line_start_usize..line_end_usize];

        let mut utf16 = 0u32;
        for (byte_idx, ch) in line_text.char_indices() {
            let ch_utf16 = ch.len_utf16() as u32;
            if utf16 + ch_utf16 > position.character {
                return line_start + TextSize::from(byte_idx as u32);
            }
            utf16 += ch_utf16;
        }

        line_end
    }
}
