/*
 * blocks.rs
 * Copyright (c) 2025 Posit, PBC
 */

use quill_ast::{
    Block, Blocks, CodeBlock, DefinitionItem, Image, Inline, OrderedList, RawBlock, has_class,
};
use quill_layout::{Doc, vcat};

use super::RstWriterContext;
use super::inlines::render_inlines;
use super::table::render_table;
use crate::errors::WriterResult;
use crate::utils::markers::ordered_list_markers;

/// Heading underline characters by level.
const HEADING_CHARS: [char; 5] = ['=', '-', '~', '^', '\''];

/// Render blocks, each starting on a new line.
pub fn render_blocks<'a>(blocks: &'a [Block], ctx: &mut RstWriterContext<'a>) -> WriterResult<Doc> {
    let docs = blocks
        .iter()
        .map(|block| render_block(block, ctx))
        .collect::<WriterResult<Vec<_>>>()?;
    Ok(vcat(docs))
}

/// Render a single block element.
pub fn render_block<'a>(block: &'a Block, ctx: &mut RstWriterContext<'a>) -> WriterResult<Doc> {
    ctx.depth.enter()?;
    let result = write_block(block, ctx);
    ctx.depth.leave();
    result
}

fn write_block<'a>(block: &'a Block, ctx: &mut RstWriterContext<'a>) -> WriterResult<Doc> {
    let tab_stop = ctx.options.tab_stop;
    let doc = match block {
        Block::Null => Doc::empty(),

        Block::Plain(inlines) => render_inlines(inlines, ctx)?,

        Block::Paragraph(inlines) => {
            if let Some((image, title)) = figure_image(inlines) {
                write_figure(image, title, ctx)?
            } else if inlines.iter().any(|i| matches!(i, Inline::LineBreak)) {
                // A line block keeps the line breaks
                let lines = inlines
                    .split(|i| matches!(i, Inline::LineBreak))
                    .map(|line| Ok(Doc::text("| ") + render_inlines(line, ctx)?))
                    .collect::<WriterResult<Vec<_>>>()?;
                vcat(lines) + Doc::blankline()
            } else {
                render_inlines(inlines, ctx)? + Doc::blankline()
            }
        }

        Block::Header(header) => {
            let contents = render_inlines(&header.content, ctx)?.nowrap();
            let underline = HEADING_CHARS
                .get(header.level.saturating_sub(1))
                .copied()
                .unwrap_or(' ');
            let border = Doc::text(underline.to_string().repeat(contents.offset()));
            contents.above(border) + Doc::blankline()
        }

        Block::CodeBlock(code) => write_code_block(code, ctx),

        Block::BlockQuote(blocks) => {
            Doc::nest(tab_stop, render_blocks(blocks, ctx)?) + Doc::blankline()
        }

        Block::HorizontalRule => {
            Doc::blankline() + Doc::text("--------------") + Doc::blankline()
        }

        Block::RawBlock(raw) => write_raw_block(raw),

        Block::BulletList(items) => {
            let items = items
                .iter()
                .map(|item| {
                    let contents = render_blocks(item, ctx)?;
                    Ok(Doc::hang(3, Doc::text("-  "), contents + Doc::cr()))
                })
                .collect::<WriterResult<Vec<_>>>()?;
            list_doc(items)
        }

        Block::OrderedList(list) => write_ordered_list(list, ctx)?,

        Block::DefinitionList(items) => {
            let items = items
                .iter()
                .map(|item| write_definition_item(item, ctx))
                .collect::<WriterResult<Vec<_>>>()?;
            list_doc(items)
        }

        Block::Table(table) => render_table(table, ctx)?,
    };
    Ok(doc)
}

/// A paragraph holding only an image whose title starts with `fig:`.
fn figure_image(inlines: &[Inline]) -> Option<(&Image, &str)> {
    match inlines {
        [Inline::Image(image)] => image
            .target
            .1
            .strip_prefix("fig:")
            .map(|title| (image, title)),
        _ => None,
    }
}

fn write_figure<'a>(
    image: &'a Image,
    title: &str,
    ctx: &mut RstWriterContext<'a>,
) -> WriterResult<Doc> {
    let caption = render_inlines(&image.content, ctx)?;
    let alt = if title.is_empty() {
        caption.clone()
    } else {
        Doc::text(title)
    };
    let figure = Doc::text(format!("figure:: {}", image.target.0))
        .above(Doc::text(":align: center"))
        .above(Doc::text(":alt: ") + alt)
        .above_blank(caption);
    Ok(Doc::hang(3, Doc::text(".. "), figure) + Doc::blankline())
}

fn write_code_block(code: &CodeBlock, ctx: &RstWriterContext) -> Doc {
    let text = code.text.trim_end_matches('\n');
    let literate = ctx.options.literate_haskell
        && has_class(&code.attr, "haskell")
        && has_class(&code.attr, "literate");
    if literate {
        Doc::prefixed("> ", Doc::text(text)) + Doc::blankline()
    } else {
        Doc::text("::").above_blank(Doc::nest(ctx.options.tab_stop, Doc::text(text)))
            + Doc::blankline()
    }
}

fn write_raw_block(raw: &RawBlock) -> Doc {
    if raw.format == "rst" {
        return Doc::text(&raw.text) + Doc::blankline();
    }
    tracing::trace!(format = %raw.format, "Wrapping raw block in a raw directive");
    (Doc::blankline() + Doc::text(format!(".. raw:: {}", raw.format)))
        .above_blank(Doc::nest(3, Doc::text(&raw.text)))
        + Doc::blankline()
}

/// Lists always have a blank line before and after, so nested lists are
/// separated from the text of the enclosing item.
fn list_doc(items: Vec<Doc>) -> Doc {
    Doc::blankline() + vcat(items).chomp() + Doc::blankline()
}

fn write_ordered_list<'a>(
    list: &'a OrderedList,
    ctx: &mut RstWriterContext<'a>,
) -> WriterResult<Doc> {
    let count = list.content.len();
    let markers = if list.attr.is_default() {
        vec!["#.".to_string(); count]
    } else {
        ordered_list_markers(&list.attr, count)
    };
    let width = markers.iter().map(String::len).max().unwrap_or(0);

    let items = list
        .content
        .iter()
        .zip(markers)
        .map(|(item, marker)| {
            let marker = format!("{marker:<width$} ");
            let contents = render_blocks(item, ctx)?;
            Ok(Doc::hang(marker.len(), Doc::text(marker), contents + Doc::cr()))
        })
        .collect::<WriterResult<Vec<_>>>()?;
    Ok(list_doc(items))
}

fn write_definition_item<'a>(
    item: &'a DefinitionItem,
    ctx: &mut RstWriterContext<'a>,
) -> WriterResult<Doc> {
    let label = render_inlines(&item.term, ctx)?;
    let definitions = item
        .definitions
        .iter()
        .map(|definition: &'a Blocks| render_blocks(definition, ctx))
        .collect::<WriterResult<Vec<_>>>()?;
    Ok(label.above(Doc::nest(
        ctx.options.tab_stop,
        vcat(definitions) + Doc::cr(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::WriterOptions;
    use pretty_assertions::assert_eq;
    use quill_ast::{ListAttributes, ListNumberDelim, ListNumberStyle, classes_attr};

    fn render_with(blocks: &[Block], options: &WriterOptions) -> String {
        let mut ctx = RstWriterContext::new(options);
        render_blocks(blocks, &mut ctx).unwrap().render(None)
    }

    fn render(blocks: &[Block]) -> String {
        render_with(blocks, &WriterOptions::default())
    }

    fn para(s: &str) -> Block {
        Block::para(Inline::text(s))
    }

    fn plain(s: &str) -> Block {
        Block::plain(Inline::text(s))
    }

    #[test]
    fn test_paragraphs_separated_by_blank_line() {
        assert_eq!(render(&[para("one"), para("two")]), "one\n\ntwo");
    }

    #[test]
    fn test_headers() {
        assert_eq!(
            render(&[Block::header(1, Inline::text("Main title")), para("x")]),
            "Main title\n==========\n\nx"
        );
        assert_eq!(
            render(&[Block::header(3, Inline::text("Sub")), para("x")]),
            "Sub\n~~~\n\nx"
        );
        assert_eq!(
            render(&[Block::header(7, Inline::text("Deep")), para("x")]),
            "Deep\n    \n\nx"
        );
    }

    #[test]
    fn test_line_block() {
        let inlines = vec![
            Inline::str("one"),
            Inline::LineBreak,
            Inline::str("two"),
        ];
        assert_eq!(render(&[Block::para(inlines)]), "| one\n| two");
    }

    #[test]
    fn test_code_block() {
        let code = Block::code_block(classes_attr(["python"]), "x = 1\ny = 2\n");
        assert_eq!(render(&[code, para("after")]), "::\n\n    x = 1\n    y = 2\n\nafter");
    }

    #[test]
    fn test_literate_haskell_code_block() {
        let code = Block::code_block(classes_attr(["haskell", "literate"]), "main = pure ()");
        let options = WriterOptions {
            literate_haskell: true,
            ..WriterOptions::default()
        };
        assert_eq!(render_with(&[code.clone()], &options), "> main = pure ()");
        assert_eq!(render(&[code]), "::\n\n    main = pure ()");
    }

    #[test]
    fn test_block_quote() {
        assert_eq!(
            render(&[para("a"), Block::BlockQuote(vec![para("quoted")]), para("b")]),
            "a\n\n    quoted\n\nb"
        );
    }

    #[test]
    fn test_horizontal_rule() {
        assert_eq!(
            render(&[para("a"), Block::HorizontalRule, para("b")]),
            "a\n\n--------------\n\nb"
        );
    }

    #[test]
    fn test_raw_blocks() {
        assert_eq!(render(&[Block::raw("rst", ".. note:: hi")]), ".. note:: hi");
        assert_eq!(
            render(&[Block::raw("html", "<hr/>")]),
            ".. raw:: html\n\n   <hr/>"
        );
    }

    #[test]
    fn test_bullet_list_with_nested_list() {
        let nested = Block::BulletList(vec![vec![plain("inner")]]);
        let list = Block::BulletList(vec![vec![plain("a"), nested], vec![plain("b")]]);
        assert_eq!(
            render(&[para("before"), list, para("after")]),
            "before\n\n-  a\n\n   -  inner\n\n-  b\n\nafter"
        );
    }

    #[test]
    fn test_ordered_list_markers() {
        let items = (0..10).map(|i| vec![plain(&format!("i{i}"))]).collect();
        let attr = ListAttributes::new(1, ListNumberStyle::Decimal, ListNumberDelim::Period);
        let rendered = render(&[Block::ordered_list(attr, items)]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "1.  i0");
        assert_eq!(lines[9], "10. i9");

        let default = Block::ordered_list(
            ListAttributes::default(),
            vec![vec![plain("a")], vec![plain("b")]],
        );
        assert_eq!(render(&[default]), "#. a\n#. b");
    }

    #[test]
    fn test_definition_list() {
        let list = Block::DefinitionList(vec![DefinitionItem {
            term: Inline::text("term"),
            definitions: vec![vec![para("meaning")]],
        }]);
        assert_eq!(render(&[list, para("x")]), "term\n    meaning\n\nx");
    }

    #[test]
    fn test_figure() {
        let image = Inline::image(Inline::text("A cat"), "cat.png", "fig:");
        assert_eq!(
            render(&[Block::para(vec![image])]),
            ".. figure:: cat.png\n   :align: center\n   :alt: A cat\n\n   A cat"
        );
    }
}
