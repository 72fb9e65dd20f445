use lsp_types::{FoldingRange, FoldingRangeKind};
use pretty_assertions::assert_eq;
use tessera_bridge::modes::{CssMode, HtmlMode, TemplateLanguageMode};
use tessera_bridge::TemplateLanguage;
use tessera_proto::{OutliningSpanKind, TextSpan};

use crate::support::{self, ScriptedExpansions, ScriptedService, HOST_OFFSET};

#[test]
fn folding_ranges_become_code_outlining_spans() {
    let ranges = vec![
        FoldingRange {
            start_line: 0,
            start_character: Some(5),
            end_line: 2,
            end_character: Some(6),
            kind: Some(FoldingRangeKind::Region),
            collapsed_text: None,
        },
        FoldingRange {
            start_line: 1,
            start_character: None,
            end_line: 2,
            end_character: None,
            kind: None,
            collapsed_text: None,
        },
    ];
    let service = ScriptedService::new(TemplateLanguage::Html).with_folding(ranges);
    let log = service.log();
    let mode = HtmlMode::new(service, ScriptedExpansions::none());

    let template = support::template(TemplateLanguage::Html, "<div>\n  <p>\n</div>");
    let spans = mode
        .outlining_spans(&template.document, &template.region)
        .expect("outlining");

    assert_eq!(spans.len(), 2);
    assert_eq!(log.borrow().folding_ranges, 1);

    let first = &spans[0];
    assert_eq!(first.text_span, TextSpan { start: HOST_OFFSET + 5, length: 13 });
    assert_eq!(first.hint_span, first.text_span);
    assert_eq!(first.banner_text, "");
    assert!(!first.auto_collapse);
    assert_eq!(first.kind, OutliningSpanKind::Code);

    // Absent start/end characters default to column zero.
    let second = &spans[1];
    assert_eq!(second.text_span, TextSpan { start: HOST_OFFSET + 6, length: 6 });
    assert_eq!(second.hint_span, second.text_span);
    assert_eq!(second.kind, OutliningSpanKind::Code);
}

#[test]
fn outlining_preserves_the_service_order() {
    let ranges: Vec<FoldingRange> = (0..3)
        .map(|line| FoldingRange {
            start_line: line,
            start_character: None,
            end_line: line + 1,
            end_character: None,
            kind: None,
            collapsed_text: None,
        })
        .collect();
    let service = ScriptedService::new(TemplateLanguage::Css).with_folding(ranges);
    let mode = CssMode::new(service, ScriptedExpansions::none());

    let template = support::template(TemplateLanguage::Css, "a {\nb {\nc {\n}\n");
    let spans = mode
        .outlining_spans(&template.document, &template.region)
        .expect("outlining");

    let starts: Vec<_> = spans.iter().map(|span| span.text_span.start).collect();
    assert_eq!(starts, [HOST_OFFSET, HOST_OFFSET + 4, HOST_OFFSET + 8]);
}
