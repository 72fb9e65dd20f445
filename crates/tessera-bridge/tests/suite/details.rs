use lsp_types::{CompletionItemKind, Documentation, Position};
use pretty_assertions::assert_eq;
use tessera_bridge::modes::{CssMode, HtmlMode, TemplateLanguageMode};
use tessera_bridge::{TemplateLanguage, TesseraConfig};
use tessera_proto::{ScriptElementKind, SymbolDisplayPart};

use crate::support::{self, ScriptedExpansions, ScriptedService};

#[test]
fn details_resolve_from_the_list_computed_for_completions() {
    let mut anchor = support::item("a", CompletionItemKind::PROPERTY);
    anchor.detail = Some("anchor element".to_string());
    anchor.documentation = Some(Documentation::String("Defines a hyperlink.".to_string()));
    let service =
        ScriptedService::new(TemplateLanguage::Html).with_completions(support::list(vec![anchor]));
    let log = service.log();
    let mut mode = HtmlMode::new(service, ScriptedExpansions::none());

    let template = support::template(TemplateLanguage::Html, "<a>");
    let position = Position::new(0, 2);
    let config = TesseraConfig::default();

    mode.completions_at_position(&template.document, &template.region, position, &config)
        .expect("completions");
    let details = mode
        .completion_entry_details(&template.document, &template.region, position, &config, "a")
        .expect("details");

    assert_eq!(details.name, "a");
    assert_eq!(details.kind, ScriptElementKind::MemberVariable);
    assert_eq!(details.kind_modifiers, "declare");
    assert_eq!(details.display_parts, [SymbolDisplayPart::text("anchor element")]);
    assert_eq!(details.documentation, [SymbolDisplayPart::text("Defines a hyperlink.")]);
    assert!(details.tags.is_empty());

    let log = log.borrow();
    assert_eq!(log.completions, 1, "details must reuse the cached completion list");
    assert_eq!(log.parse, 1);
}

#[test]
fn expansion_contributions_resolve_without_a_prior_completion_query() {
    let mut expansion = support::item("ul>li", CompletionItemKind::SNIPPET);
    expansion.documentation = Some(Documentation::String("<ul><li></li></ul>".to_string()));
    let provider = ScriptedExpansions::new(vec![expansion]);
    let service = ScriptedService::new(TemplateLanguage::Html);
    let log = service.log();
    let mut mode = HtmlMode::new(service, provider);

    let template = support::template(TemplateLanguage::Html, "ul>li");
    let position = Position::new(0, 5);
    let config = TesseraConfig::default();

    let details = mode
        .completion_entry_details(&template.document, &template.region, position, &config, "ul>li")
        .expect("details");

    assert_eq!(details.kind, ScriptElementKind::Unknown);
    assert_eq!(details.documentation, [SymbolDisplayPart::text("<ul><li></li></ul>")]);
    assert_eq!(log.borrow().completions, 1, "the details query computes the list on demand");
}

#[test]
fn unknown_names_fall_back_to_a_synthesized_entry() {
    let items = vec![support::item("color", CompletionItemKind::PROPERTY)];
    let service =
        ScriptedService::new(TemplateLanguage::Css).with_completions(support::list(items));
    let mut mode = CssMode::new(service, ScriptedExpansions::none());

    let template = support::template(TemplateLanguage::Css, ".a { col }");
    let position = Position::new(0, 8);
    let config = TesseraConfig::default();

    let details = mode
        .completion_entry_details(&template.document, &template.region, position, &config, "colr")
        .expect("details fall back instead of failing");

    assert_eq!(details.name, "colr");
    assert_eq!(details.kind, ScriptElementKind::Unknown);
    assert_eq!(details.kind_modifiers, "");
    assert_eq!(details.display_parts, [SymbolDisplayPart::text("colr")]);
    assert!(details.documentation.is_empty());
}
