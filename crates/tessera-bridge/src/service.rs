//! The embedded-language-service seam.

use std::sync::Arc;

use lsp_types::{CompletionList, FoldingRange, Hover, Position};
use tessera_core::TextDocument;

use crate::error::ServiceResult;
use crate::participants::CompletionParticipant;

/// Options for a markup completion request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompletionOptions {
    /// Suppress automatic tag-close proposals.
    pub hide_auto_complete_proposals: bool,
    /// Offer HTML5 tags and attributes.
    pub html5: bool,
}

/// One embedded language's tooling engine (a markup or style service).
///
/// Implementations own their parsed-model type; modes parse per request and
/// hand the model back into the query methods. Participants are replaced
/// before every completion computation, so a service instance must not be
/// shared between adapters running concurrently.
pub trait EmbeddedLanguageService {
    /// Parsed document model produced by [`EmbeddedLanguageService::parse`].
    type Model;

    fn parse(&self, document: &TextDocument) -> ServiceResult<Self::Model>;

    fn completions(
        &self,
        document: &TextDocument,
        position: Position,
        model: &Self::Model,
        options: Option<&CompletionOptions>,
    ) -> ServiceResult<CompletionList>;

    fn hover(
        &self,
        document: &TextDocument,
        position: Position,
        model: &Self::Model,
    ) -> ServiceResult<Option<Hover>>;

    fn folding_ranges(&self, document: &TextDocument) -> ServiceResult<Vec<FoldingRange>>;

    fn set_completion_participants(&mut self, participants: Vec<Arc<dyn CompletionParticipant>>);
}
