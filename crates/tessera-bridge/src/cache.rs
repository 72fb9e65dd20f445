//! Single-slot cache for the most recent completion computation.

use lsp_types::{CompletionList, Position};
use tessera_core::TemplateContext;

use crate::TemplateLanguage;

/// A computed completion list tagged with the language that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct CachedCompletionList {
    pub language: TemplateLanguage,
    pub list: CompletionList,
}

/// Remembers the last completion list computed for one (template, position).
///
/// The host asks for completion entry details immediately after the
/// completion list, at the same cursor, so one slot captures nearly all of
/// the reuse. Identity is the host file name, the full template text
/// snapshot, and the position: any edit to the template changes the text and
/// invalidates the slot structurally, with no eviction timer.
#[derive(Debug, Default)]
pub struct CompletionsCache {
    cached: Option<CacheEntry>,
}

#[derive(Debug)]
struct CacheEntry {
    file_name: String,
    text: String,
    position: Position,
    completions: CachedCompletionList,
}

impl CompletionsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached list, if `context` and `position` exactly match the entry.
    pub fn get(
        &self,
        context: &dyn TemplateContext,
        position: Position,
    ) -> Option<&CachedCompletionList> {
        let entry = self.cached.as_ref()?;
        if entry.file_name == context.file_name()
            && entry.text == context.text()
            && entry.position == position
        {
            tracing::debug!(
                target: "tessera.cache",
                file = %entry.file_name,
                language = %entry.completions.language,
                "reusing cached completion list"
            );
            return Some(&entry.completions);
        }
        None
    }

    /// Replace the slot with the completions computed for `(context, position)`.
    pub fn store(
        &mut self,
        context: &dyn TemplateContext,
        position: Position,
        completions: CachedCompletionList,
    ) {
        self.cached = Some(CacheEntry {
            file_name: context.file_name().to_string(),
            text: context.text().to_string(),
            position,
            completions,
        });
    }
}
