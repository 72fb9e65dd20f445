use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use lsp_types::{CompletionItem, CompletionItemKind, CompletionList, FoldingRange, Hover, Position};
use parking_lot::Mutex;
use tessera_bridge::participants::{CompletionParticipant, ExpansionProvider, ParticipantContext};
use tessera_bridge::service::{CompletionOptions, EmbeddedLanguageService};
use tessera_bridge::{ServiceError, ServiceResult, TemplateLanguage};
use tessera_core::{TemplateRegion, TextDocument};

/// Host file containing every test template.
pub const HOST_FILE: &str = "component.ts";

/// Host-file offset at which every test template starts.
pub const HOST_OFFSET: usize = 100;

/// A template fixture: the virtual document plus its host-file context.
pub struct Template {
    pub document: TextDocument,
    pub region: TemplateRegion,
}

pub fn template(language: TemplateLanguage, text: &str) -> Template {
    Template {
        document: TextDocument::new(
            format!("untitled://embedded/template.{language}"),
            language.as_str(),
            1,
            text,
        ),
        region: TemplateRegion::new(HOST_FILE, HOST_OFFSET, text),
    }
}

pub fn item(label: &str, kind: CompletionItemKind) -> CompletionItem {
    CompletionItem {
        label: label.to_owned(),
        kind: Some(kind),
        ..CompletionItem::default()
    }
}

pub fn list(items: Vec<CompletionItem>) -> CompletionList {
    CompletionList {
        is_incomplete: false,
        items,
    }
}

/// Every call the adapters made into a [`ScriptedService`].
#[derive(Debug, Default)]
pub struct CallLog {
    pub parse: usize,
    pub completions: usize,
    pub hover: usize,
    pub folding_ranges: usize,
    pub participant_sets: usize,
    /// The `options` argument of each completion call, in order.
    pub completion_options: Vec<Option<CompletionOptions>>,
}

/// An embedded service that replays scripted results and records the calls
/// made against it. Completion calls fire the installed participants the way
/// a real service does while computing its own items.
pub struct ScriptedService {
    language: TemplateLanguage,
    completions: CompletionList,
    hover: Option<Hover>,
    folding: Vec<FoldingRange>,
    parse_error: Option<&'static str>,
    participants: Vec<Arc<dyn CompletionParticipant>>,
    log: Rc<RefCell<CallLog>>,
}

impl ScriptedService {
    pub fn new(language: TemplateLanguage) -> Self {
        Self {
            language,
            completions: CompletionList::default(),
            hover: None,
            folding: Vec::new(),
            parse_error: None,
            participants: Vec::new(),
            log: Rc::new(RefCell::new(CallLog::default())),
        }
    }

    pub fn with_completions(mut self, completions: CompletionList) -> Self {
        self.completions = completions;
        self
    }

    pub fn with_hover(mut self, hover: Hover) -> Self {
        self.hover = Some(hover);
        self
    }

    pub fn with_folding(mut self, folding: Vec<FoldingRange>) -> Self {
        self.folding = folding;
        self
    }

    pub fn failing_parse(mut self, message: &'static str) -> Self {
        self.parse_error = Some(message);
        self
    }

    /// Shared handle onto the call log; take it before the service moves
    /// into a mode.
    pub fn log(&self) -> Rc<RefCell<CallLog>> {
        Rc::clone(&self.log)
    }
}

pub struct ParsedTemplate;

impl EmbeddedLanguageService for ScriptedService {
    type Model = ParsedTemplate;

    fn parse(&self, _document: &TextDocument) -> ServiceResult<ParsedTemplate> {
        self.log.borrow_mut().parse += 1;
        match self.parse_error {
            Some(message) => Err(ServiceError::new(message)),
            None => Ok(ParsedTemplate),
        }
    }

    fn completions(
        &self,
        document: &TextDocument,
        position: Position,
        _model: &ParsedTemplate,
        options: Option<&CompletionOptions>,
    ) -> ServiceResult<CompletionList> {
        {
            let mut log = self.log.borrow_mut();
            log.completions += 1;
            log.completion_options.push(options.copied());
        }

        let cx = ParticipantContext { document, position };
        for participant in &self.participants {
            match self.language {
                TemplateLanguage::Html => participant.on_content(&cx),
                TemplateLanguage::Css => participant.on_property(&cx),
            }
        }

        Ok(self.completions.clone())
    }

    fn hover(
        &self,
        _document: &TextDocument,
        _position: Position,
        _model: &ParsedTemplate,
    ) -> ServiceResult<Option<Hover>> {
        self.log.borrow_mut().hover += 1;
        Ok(self.hover.clone())
    }

    fn folding_ranges(&self, _document: &TextDocument) -> ServiceResult<Vec<FoldingRange>> {
        self.log.borrow_mut().folding_ranges += 1;
        Ok(self.folding.clone())
    }

    fn set_completion_participants(&mut self, participants: Vec<Arc<dyn CompletionParticipant>>) {
        self.log.borrow_mut().participant_sets += 1;
        self.participants = participants;
    }
}

/// An expansion provider replaying a fixed item set and recording each query
/// it receives.
pub struct ScriptedExpansions {
    items: Vec<CompletionItem>,
    pub calls: Mutex<Vec<(TemplateLanguage, Position)>>,
}

impl ScriptedExpansions {
    pub fn new(items: Vec<CompletionItem>) -> Arc<Self> {
        Arc::new(Self {
            items,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn none() -> Arc<Self> {
        Self::new(Vec::new())
    }
}

impl ExpansionProvider for ScriptedExpansions {
    fn expansions(
        &self,
        _document: &TextDocument,
        position: Position,
        language: TemplateLanguage,
    ) -> Vec<CompletionItem> {
        self.calls.lock().push((language, position));
        self.items.clone()
    }
}
