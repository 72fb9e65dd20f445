use std::sync::Arc;

use lsp_types::Position;
use tessera_core::{TemplateContext, TextDocument};
use tessera_proto::{CompletionEntryDetails, CompletionInfo, OutliningSpan, QuickInfo};

use crate::config::TesseraConfig;
use crate::error::ServiceResult;
use crate::participants::ExpansionProvider;
use crate::service::EmbeddedLanguageService;
use crate::TemplateLanguage;

use super::{ModeCore, TemplateLanguageMode};

/// Bridges a style (CSS) language service into the host protocol.
///
/// Unlike the markup variant, the style service's completion routine takes
/// no options; the host configuration only affects markup completions.
pub struct CssMode<S> {
    core: ModeCore<S>,
}

impl<S: EmbeddedLanguageService> CssMode<S> {
    pub fn new(service: S, provider: Arc<dyn ExpansionProvider>) -> Self {
        Self {
            core: ModeCore::new(TemplateLanguage::Css, service, provider),
        }
    }
}

impl<S: EmbeddedLanguageService> TemplateLanguageMode for CssMode<S> {
    fn language(&self) -> TemplateLanguage {
        TemplateLanguage::Css
    }

    fn completions_at_position(
        &mut self,
        document: &TextDocument,
        context: &dyn TemplateContext,
        position: Position,
        _config: &TesseraConfig,
    ) -> ServiceResult<CompletionInfo> {
        self.core.completion_info(document, context, position, None)
    }

    fn completion_entry_details(
        &mut self,
        document: &TextDocument,
        context: &dyn TemplateContext,
        position: Position,
        _config: &TesseraConfig,
        name: &str,
    ) -> ServiceResult<CompletionEntryDetails> {
        self.core.entry_details(document, context, position, None, name)
    }

    fn quick_info_at_position(
        &self,
        document: &TextDocument,
        context: &dyn TemplateContext,
        position: Position,
    ) -> ServiceResult<Option<QuickInfo>> {
        self.core.quick_info(document, context, position)
    }

    fn outlining_spans(
        &self,
        document: &TextDocument,
        context: &dyn TemplateContext,
    ) -> ServiceResult<Vec<OutliningSpan>> {
        self.core.outlining_spans(document, context)
    }
}
