//! Tessera surfaces embedded HTML and CSS template tooling through the
//! completion, hover, and outlining API of a TypeScript-server-shaped host.
//!
//! The host hands each request to a [`modes::TemplateLanguageMode`] together
//! with the template's virtual document and
//! [`TemplateContext`](tessera_core::TemplateContext). The mode obtains a
//! generic language-service result — consulting its single-slot completion
//! [`cache`] before recomputing — and [`translate`] converts that result into
//! the host's shapes, with [`kinds`] mapping item kinds and the context
//! mapping embedded positions onto host-file offsets.

use std::fmt;

pub mod cache;
pub mod config;
pub mod error;
pub mod kinds;
pub mod modes;
pub mod participants;
pub mod service;
pub mod translate;

pub use cache::{CachedCompletionList, CompletionsCache};
pub use config::{HtmlFormatConfig, TesseraConfig};
pub use error::{ServiceError, ServiceResult};
pub use modes::{CssMode, HtmlMode, TemplateLanguageMode};
pub use participants::{
    merge_expansions, CompletionParticipant, ExpansionParticipant, ExpansionProvider,
    ParticipantContext, SharedCompletionList,
};
pub use service::{CompletionOptions, EmbeddedLanguageService};

/// The embedded languages Tessera bridges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemplateLanguage {
    Html,
    Css,
}

impl TemplateLanguage {
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateLanguage::Html => "html",
            TemplateLanguage::Css => "css",
        }
    }
}

impl fmt::Display for TemplateLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
