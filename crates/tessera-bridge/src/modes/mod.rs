//! The mode adapters the host calls, one per embedded language.

mod css;
mod html;

pub use css::CssMode;
pub use html::HtmlMode;

use std::sync::Arc;

use lsp_types::{CompletionList, Position};
use tessera_core::{TemplateContext, TextDocument};
use tessera_proto::{CompletionEntryDetails, CompletionInfo, OutliningSpan, QuickInfo};

use crate::cache::{CachedCompletionList, CompletionsCache};
use crate::config::TesseraConfig;
use crate::error::ServiceResult;
use crate::participants::{merge_expansions, ExpansionParticipant, ExpansionProvider};
use crate::service::{CompletionOptions, EmbeddedLanguageService};
use crate::{translate, TemplateLanguage};

/// The capability set the host invokes on every embedded-language mode.
///
/// `completions_at_position` and `completion_entry_details` take `&mut self`:
/// they reconfigure the service's completion participants and maintain the
/// mode's completion cache. The hover and outlining queries recompute from
/// scratch on every call.
pub trait TemplateLanguageMode {
    fn language(&self) -> TemplateLanguage;

    fn completions_at_position(
        &mut self,
        document: &TextDocument,
        context: &dyn TemplateContext,
        position: Position,
        config: &TesseraConfig,
    ) -> ServiceResult<CompletionInfo>;

    fn completion_entry_details(
        &mut self,
        document: &TextDocument,
        context: &dyn TemplateContext,
        position: Position,
        config: &TesseraConfig,
        name: &str,
    ) -> ServiceResult<CompletionEntryDetails>;

    fn quick_info_at_position(
        &self,
        document: &TextDocument,
        context: &dyn TemplateContext,
        position: Position,
    ) -> ServiceResult<Option<QuickInfo>>;

    fn outlining_spans(
        &self,
        document: &TextDocument,
        context: &dyn TemplateContext,
    ) -> ServiceResult<Vec<OutliningSpan>>;
}

/// State and logic shared by both mode variants: the owned embedded service,
/// the expansion provider, and the per-mode completion cache.
struct ModeCore<S> {
    language: TemplateLanguage,
    service: S,
    provider: Arc<dyn ExpansionProvider>,
    cache: CompletionsCache,
}

impl<S: EmbeddedLanguageService> ModeCore<S> {
    fn new(language: TemplateLanguage, service: S, provider: Arc<dyn ExpansionProvider>) -> Self {
        Self {
            language,
            service,
            provider,
            cache: CompletionsCache::new(),
        }
    }

    /// Cache-or-compute path behind both completion operations.
    fn cached_completions(
        &mut self,
        document: &TextDocument,
        context: &dyn TemplateContext,
        position: Position,
        options: Option<&CompletionOptions>,
    ) -> ServiceResult<&CachedCompletionList> {
        if self.cache.get(context, position).is_none() {
            let list = self.compute_completions(document, position, options)?;
            let language = self.language;
            self.cache
                .store(context, position, CachedCompletionList { language, list });
        }

        let Some(cached) = self.cache.get(context, position) else {
            unreachable!("completions cache was just populated");
        };
        Ok(cached)
    }

    /// Run one completion computation against the embedded service.
    ///
    /// The service's participants are replaced with a fresh expansion
    /// participant, the document is parsed, and the participant's
    /// contributions are merged into the service's own list via
    /// [`merge_expansions`].
    fn compute_completions(
        &mut self,
        document: &TextDocument,
        position: Position,
        options: Option<&CompletionOptions>,
    ) -> ServiceResult<CompletionList> {
        let expansions = ExpansionParticipant::buffer();
        let participant = ExpansionParticipant::new(
            self.language,
            Arc::clone(&self.provider),
            Arc::clone(&expansions),
        );
        self.service
            .set_completion_participants(vec![Arc::new(participant)]);

        let model = self.service.parse(document)?;
        let mut list = self
            .service
            .completions(document, position, &model, options)?;

        merge_expansions(&mut list, &mut expansions.lock());

        tracing::debug!(
            target: "tessera.modes",
            language = %self.language,
            items = list.items.len(),
            incomplete = list.is_incomplete,
            "computed completion list"
        );

        Ok(list)
    }

    fn completion_info(
        &mut self,
        document: &TextDocument,
        context: &dyn TemplateContext,
        position: Position,
        options: Option<&CompletionOptions>,
    ) -> ServiceResult<CompletionInfo> {
        let cached = self.cached_completions(document, context, position, options)?;
        Ok(translate::completion_info(context, &cached.list))
    }

    fn entry_details(
        &mut self,
        document: &TextDocument,
        context: &dyn TemplateContext,
        position: Position,
        options: Option<&CompletionOptions>,
        name: &str,
    ) -> ServiceResult<CompletionEntryDetails> {
        let cached = self.cached_completions(document, context, position, options)?;

        let details = match cached.list.items.iter().find(|item| item.label == name) {
            Some(item) => translate::completion_entry_details(item),
            None => translate::unresolved_entry_details(name),
        };
        Ok(details)
    }

    /// Hover is never cached: parse fresh and ask the service.
    fn quick_info(
        &self,
        document: &TextDocument,
        context: &dyn TemplateContext,
        position: Position,
    ) -> ServiceResult<Option<QuickInfo>> {
        let model = self.service.parse(document)?;
        let hover = self.service.hover(document, position, &model)?;
        Ok(hover.map(|hover| translate::quick_info(context, position, &hover)))
    }

    /// The whole-document outlining set; no position filtering.
    fn outlining_spans(
        &self,
        document: &TextDocument,
        context: &dyn TemplateContext,
    ) -> ServiceResult<Vec<OutliningSpan>> {
        let ranges = self.service.folding_ranges(document)?;
        Ok(ranges
            .iter()
            .map(|range| translate::outlining_span(context, range))
            .collect())
    }
}
