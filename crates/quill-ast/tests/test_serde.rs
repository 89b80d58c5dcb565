/*
 * test_serde.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Tests that documents survive a trip through JSON.
 */

use pretty_assertions::assert_eq;
use quill_ast::{
    Alignment, Block, DefinitionItem, Document, Inline, ListAttributes, ListNumberDelim,
    ListNumberStyle, MathType, Meta, QuoteType, Table, classes_attr,
};

fn sample_document() -> Document {
    Document::new(vec![
        Block::header(1, Inline::text("A title")),
        Block::para(vec![
            Inline::Emph(vec![Inline::str("hi")]),
            Inline::Space,
            Inline::link(vec![Inline::str("x")], "http://e.com", ""),
            Inline::Space,
            Inline::math(MathType::InlineMath, "x^2"),
            Inline::quoted(QuoteType::DoubleQuote, vec![Inline::str("q")]),
            Inline::Note(vec![Block::para(Inline::text("a note"))]),
        ]),
        Block::code_block(classes_attr(["python"]), "pass"),
        Block::ordered_list(
            ListAttributes::new(3, ListNumberStyle::LowerAlpha, ListNumberDelim::TwoParens),
            vec![vec![Block::plain(Inline::text("one"))]],
        ),
        Block::DefinitionList(vec![DefinitionItem {
            term: Inline::text("term"),
            definitions: vec![vec![Block::plain(Inline::text("def"))]],
        }]),
        Block::Table(Table {
            caption: vec![],
            alignments: vec![Alignment::Left, Alignment::Default],
            widths: vec![0.5, 0.5],
            headers: vec![vec![], vec![]],
            rows: vec![vec![
                vec![Block::plain(Inline::text("a"))],
                vec![Block::plain(Inline::text("b"))],
            ]],
        }),
        Block::HorizontalRule,
        Block::Null,
    ])
    .with_meta(Meta {
        title: Inline::text("Doc"),
        authors: vec![Inline::text("Ann"), Inline::text("Bob")],
        date: Inline::text("2025"),
    })
}

#[test]
fn test_document_json_roundtrip() {
    let doc = sample_document();
    let json = serde_json::to_string(&doc).expect("serialize");
    let back: Document = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(doc, back);
}

#[test]
fn test_default_list_attributes() {
    assert!(ListAttributes::default().is_default());
    assert!(!ListAttributes::new(2, ListNumberStyle::Default, ListNumberDelim::Default).is_default());
}

#[test]
fn test_table_helpers() {
    let table = Table {
        caption: vec![],
        alignments: vec![],
        widths: vec![0.0, 0.0],
        headers: vec![vec![], vec![]],
        rows: vec![vec![vec![], vec![], vec![]]],
    };
    assert!(table.has_unset_widths());
    assert!(table.has_empty_headers());
    assert_eq!(table.column_count(), 3);
}
