//! Pluggable completion contributors.

use std::sync::Arc;

use lsp_types::{CompletionItem, CompletionList, Position};
use parking_lot::Mutex;
use tessera_core::TextDocument;

use crate::TemplateLanguage;

/// Request state handed to participant hooks by the embedded service.
pub struct ParticipantContext<'a> {
    pub document: &'a TextDocument,
    pub position: Position,
}

/// A contributor of extra completion items, invoked by the embedded service
/// while it computes its own completions.
///
/// Hooks default to no-ops so implementations opt into the production points
/// they care about. A markup service fires `on_content`; a style service
/// fires the property hooks.
pub trait CompletionParticipant: Send + Sync {
    fn on_content(&self, _cx: &ParticipantContext<'_>) {}
    fn on_property(&self, _cx: &ParticipantContext<'_>) {}
    fn on_property_value(&self, _cx: &ParticipantContext<'_>) {}
}

/// The abbreviation-expansion engine behind [`ExpansionParticipant`].
pub trait ExpansionProvider: Send + Sync {
    /// Expansion completions for the abbreviation ending at `position`.
    fn expansions(
        &self,
        document: &TextDocument,
        position: Position,
        language: TemplateLanguage,
    ) -> Vec<CompletionItem>;
}

/// Completion list shared between a mode and the participant filling it.
pub type SharedCompletionList = Arc<Mutex<CompletionList>>;

/// Bridges an [`ExpansionProvider`] into the participant seam.
///
/// Every hook queries the provider at the hook's document and position and
/// appends the results to the shared buffer. The buffer starts with
/// `is_incomplete: true`: the expansion engine may always have more to offer
/// as typing continues.
pub struct ExpansionParticipant {
    language: TemplateLanguage,
    provider: Arc<dyn ExpansionProvider>,
    results: SharedCompletionList,
}

impl ExpansionParticipant {
    pub fn new(
        language: TemplateLanguage,
        provider: Arc<dyn ExpansionProvider>,
        results: SharedCompletionList,
    ) -> Self {
        Self {
            language,
            provider,
            results,
        }
    }

    /// A fresh always-incomplete buffer for one completion computation.
    pub fn buffer() -> SharedCompletionList {
        Arc::new(Mutex::new(CompletionList {
            is_incomplete: true,
            items: Vec::new(),
        }))
    }

    fn collect(&self, cx: &ParticipantContext<'_>) {
        let items = self
            .provider
            .expansions(cx.document, cx.position, self.language);
        if items.is_empty() {
            return;
        }
        tracing::debug!(
            target: "tessera.participants",
            language = %self.language,
            count = items.len(),
            "expansion participant contributed completions"
        );
        self.results.lock().items.extend(items);
    }
}

impl CompletionParticipant for ExpansionParticipant {
    fn on_content(&self, cx: &ParticipantContext<'_>) {
        self.collect(cx);
    }

    fn on_property(&self, cx: &ParticipantContext<'_>) {
        self.collect(cx);
    }

    fn on_property_value(&self, cx: &ParticipantContext<'_>) {
        self.collect(cx);
    }
}

/// Merge participant contributions into the service's own completion list.
///
/// Any contribution forces `is_incomplete` on the merged list, even when the
/// service's own result was complete: the contributing engine treats its
/// results as provisional while typing continues.
pub fn merge_expansions(list: &mut CompletionList, expansions: &mut CompletionList) {
    if expansions.items.is_empty() {
        return;
    }
    list.is_incomplete = true;
    list.items.append(&mut expansions.items);
}
