use std::sync::Arc;

use lsp_types::Position;
use tessera_core::{TemplateContext, TextDocument};
use tessera_proto::{CompletionEntryDetails, CompletionInfo, OutliningSpan, QuickInfo};

use crate::config::TesseraConfig;
use crate::error::ServiceResult;
use crate::participants::ExpansionProvider;
use crate::service::{CompletionOptions, EmbeddedLanguageService};
use crate::TemplateLanguage;

use super::{ModeCore, TemplateLanguageMode};

/// Bridges a markup (HTML) language service into the host protocol.
pub struct HtmlMode<S> {
    core: ModeCore<S>,
}

impl<S: EmbeddedLanguageService> HtmlMode<S> {
    pub fn new(service: S, provider: Arc<dyn ExpansionProvider>) -> Self {
        Self {
            core: ModeCore::new(TemplateLanguage::Html, service, provider),
        }
    }

    /// Completion options derived from the host configuration. Only the
    /// markup service takes options.
    fn completion_options(config: &TesseraConfig) -> CompletionOptions {
        CompletionOptions {
            hide_auto_complete_proposals: config.hide_auto_complete_proposals,
            html5: config.suggest_html5,
        }
    }
}

impl<S: EmbeddedLanguageService> TemplateLanguageMode for HtmlMode<S> {
    fn language(&self) -> TemplateLanguage {
        TemplateLanguage::Html
    }

    fn completions_at_position(
        &mut self,
        document: &TextDocument,
        context: &dyn TemplateContext,
        position: Position,
        config: &TesseraConfig,
    ) -> ServiceResult<CompletionInfo> {
        let options = Self::completion_options(config);
        self.core
            .completion_info(document, context, position, Some(&options))
    }

    fn completion_entry_details(
        &mut self,
        document: &TextDocument,
        context: &dyn TemplateContext,
        position: Position,
        config: &TesseraConfig,
        name: &str,
    ) -> ServiceResult<CompletionEntryDetails> {
        let options = Self::completion_options(config);
        self.core
            .entry_details(document, context, position, Some(&options), name)
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
