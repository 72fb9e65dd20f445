//! Completion-item kind mapping between the two protocols.

use lsp_types::CompletionItemKind;
use tessera_proto::ScriptElementKind;

/// Map a generic completion-item kind onto the host's element kind.
///
/// Total and stateless: kinds with no meaningful host equivalent (snippets,
/// plain text, and anything outside the table) map to
/// [`ScriptElementKind::Unknown`], as does the absent-kind case.
pub fn script_element_kind(kind: Option<CompletionItemKind>) -> ScriptElementKind {
    let Some(kind) = kind else {
        return ScriptElementKind::Unknown;
    };

    match kind {
        CompletionItemKind::METHOD => ScriptElementKind::MemberFunction,
        CompletionItemKind::FUNCTION => ScriptElementKind::Function,
        CompletionItemKind::CONSTRUCTOR => ScriptElementKind::ConstructorImplementation,
        CompletionItemKind::FIELD | CompletionItemKind::VARIABLE => ScriptElementKind::Variable,
        CompletionItemKind::CLASS => ScriptElementKind::Class,
        CompletionItemKind::INTERFACE => ScriptElementKind::Interface,
        CompletionItemKind::MODULE | CompletionItemKind::FILE => ScriptElementKind::Module,
        CompletionItemKind::PROPERTY => ScriptElementKind::MemberVariable,
        CompletionItemKind::UNIT | CompletionItemKind::VALUE | CompletionItemKind::COLOR => {
            ScriptElementKind::Const
        }
        CompletionItemKind::ENUM => ScriptElementKind::Enum,
        CompletionItemKind::KEYWORD => ScriptElementKind::Keyword,
        CompletionItemKind::REFERENCE => ScriptElementKind::Alias,
        _ => ScriptElementKind::Unknown,
    }
}
