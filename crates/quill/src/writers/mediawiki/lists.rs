/*
 * lists.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! MediaWiki lists: compact `*`/`#`/`;` markup or HTML tags.

use quill_ast::{Block, Blocks, DefinitionItem, ListAttributes, ListNumberStyle};

use super::{MediaWikiWriterContext, render_blocks, render_inlines};
use crate::errors::WriterResult;

/// True if the list can be written with compact wiki markup, false if it
/// needs HTML tags.
///
/// Every item must be empty, a single plain/paragraph run, a single simple
/// nested list, or a plain/paragraph run followed by one simple nested
/// list. Ordered lists must also start at 1 with default or decimal
/// numbering.
///
/// At most `depth_budget` levels of nested lists are inspected; a list
/// nested any deeper makes the whole list not simple. Rendering the tag
/// form then stops at the writer's depth limit.
pub fn is_simple_list(block: &Block, depth_budget: usize) -> bool {
    let simple_item = |item: &Blocks| is_simple_list_item(item, depth_budget);
    match block {
        Block::BulletList(items) => items.iter().all(simple_item),
        Block::OrderedList(list) => {
            list.attr.start == 1
                && matches!(
                    list.attr.style,
                    ListNumberStyle::Default | ListNumberStyle::Decimal
                )
                && list.content.iter().all(simple_item)
        }
        Block::DefinitionList(items) => items
            .iter()
            .flat_map(|item| item.definitions.iter())
            .all(simple_item),
        _ => false,
    }
}

fn is_simple_list_item(item: &[Block], depth_budget: usize) -> bool {
    let simple_nested = |nested: &Block| {
        nested.is_list() && depth_budget > 0 && is_simple_list(nested, depth_budget - 1)
    };
    match item {
        [] => true,
        [single] => single.is_plain_or_para() || simple_nested(single),
        [first, nested] => first.is_plain_or_para() && simple_nested(nested),
        _ => false,
    }
}

/// Write a bullet, ordered or definition list.
///
/// The tag mode in force before the list is restored afterwards, so a
/// complex list only switches its own subtree to tags.
pub(super) fn write_list(block: &Block, ctx: &mut MediaWikiWriterContext) -> WriterResult<String> {
    let old_use_tags = ctx.use_tags;
    let top_level = ctx.list_level.is_empty();

    if old_use_tags || !is_simple_list(block, ctx.depth.remaining()) {
        if !old_use_tags {
            tracing::trace!("Writing list with HTML tags");
        }
        ctx.use_tags = true;
        let items = write_items(block, ctx);
        ctx.use_tags = old_use_tags;
        let (open, close) = list_tags(block);
        return Ok(format!("{open}\n{}\n{close}\n", items?));
    }

    ctx.list_level.push(list_glyph(block));
    let items = write_items(block, ctx);
    ctx.list_level.pop();
    let items = items?;
    Ok(if top_level { items + "\n" } else { items })
}

fn list_glyph(block: &Block) -> char {
    match block {
        Block::OrderedList(_) => '#',
        Block::DefinitionList(_) => ';',
        _ => '*',
    }
}

fn list_tags(block: &Block) -> (String, &'static str) {
    match block {
        Block::OrderedList(list) => (format!("<ol{}>", list_attributes(&list.attr)), "</ol>"),
        Block::DefinitionList(_) => ("<dl>".to_string(), "</dl>"),
        _ => ("<ul>".to_string(), "</ul>"),
    }
}

/// HTML attributes for an ordered list's start number and numbering style.
fn list_attributes(attr: &ListAttributes) -> String {
    let mut result = String::new();
    if attr.start != 1 {
        result.push_str(&format!(" start=\"{}\"", attr.start));
    }
    if attr.style != ListNumberStyle::Default {
        result.push_str(&format!(
            " style=\"list-style-type: {};\"",
            attr.style.css_name()
        ));
    }
    result
}

fn write_items(block: &Block, ctx: &mut MediaWikiWriterContext) -> WriterResult<String> {
    let items = match block {
        Block::BulletList(items) => write_list_items(items, ctx)?,
        Block::OrderedList(list) => write_list_items(&list.content, ctx)?,
        Block::DefinitionList(items) => items
            .iter()
            .map(|item| write_definition_item(item, ctx))
            .collect::<WriterResult<Vec<_>>>()?,
        _ => Vec::new(),
    };
    Ok(items.join("\n"))
}

fn write_list_items(
    items: &[Blocks],
    ctx: &mut MediaWikiWriterContext,
) -> WriterResult<Vec<String>> {
    items
        .iter()
        .map(|item| {
            let contents = render_blocks(item, ctx)?;
            Ok(if ctx.use_tags {
                format!("<li>{contents}</li>")
            } else {
                format!("{} {}", ctx.list_level, contents)
            })
        })
        .collect()
}

fn write_definition_item(
    item: &DefinitionItem,
    ctx: &mut MediaWikiWriterContext,
) -> WriterResult<String> {
    let label = render_inlines(&item.term, ctx)?;
    let definitions = item
        .definitions
        .iter()
        .map(|definition| render_blocks(definition, ctx))
        .collect::<WriterResult<Vec<_>>>()?;

    if ctx.use_tags {
        let definitions: Vec<String> = definitions
            .iter()
            .map(|d| format!("<dd>{d}</dd>"))
            .collect();
        return Ok(format!("<dt>{label}</dt>\n{}", definitions.join("\n")));
    }

    // Definitions use the term marker with its last glyph replaced by ':'
    let marker = &ctx.list_level;
    let parent = &marker[..marker.len().saturating_sub(1)];
    let definitions: Vec<String> = definitions
        .iter()
        .map(|d| format!("{parent}: {d}"))
        .collect();
    Ok(format!("{marker} {label}\n{}", definitions.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quill_ast::{Inline, ListNumberDelim, Table};

    const BUDGET: usize = 16;

    fn plain(s: &str) -> Block {
        Block::plain(Inline::text(s))
    }

    fn bullets(items: Vec<Vec<Block>>) -> Block {
        Block::BulletList(items)
    }

    #[test]
    fn test_simple_lists() {
        assert!(is_simple_list(&bullets(vec![vec![plain("a")], vec![]]), BUDGET));
        let with_sublist = bullets(vec![vec![plain("a"), bullets(vec![vec![plain("b")]])]]);
        assert!(is_simple_list(&with_sublist, BUDGET));
        let only_sublist = bullets(vec![vec![bullets(vec![vec![plain("b")]])]]);
        assert!(is_simple_list(&only_sublist, BUDGET));
    }

    fn nested_bullets(depth: usize) -> Block {
        (0..depth).fold(bullets(vec![vec![plain("x")]]), |inner, _| {
            bullets(vec![vec![inner]])
        })
    }

    #[test]
    fn test_nesting_beyond_budget_is_not_simple() {
        assert!(is_simple_list(&nested_bullets(3), 3));
        assert!(!is_simple_list(&nested_bullets(4), 3));
        assert!(!is_simple_list(&nested_bullets(1), 0));
    }

    #[test]
    fn test_complex_lists() {
        assert!(!is_simple_list(&bullets(vec![vec![plain("a"), plain("b")]]), BUDGET));
        assert!(!is_simple_list(&bullets(vec![vec![Block::HorizontalRule]]), BUDGET));
        let table = Block::Table(Table {
            caption: vec![],
            alignments: vec![],
            widths: vec![],
            headers: vec![],
            rows: vec![],
        });
        assert!(!is_simple_list(&bullets(vec![vec![table]]), BUDGET));
        let complex_sublist = bullets(vec![vec![
            plain("a"),
            bullets(vec![vec![plain("b"), plain("c")]]),
        ]]);
        assert!(!is_simple_list(&complex_sublist, BUDGET));
    }

    #[test]
    fn test_ordered_list_numbering_must_be_default() {
        let items = vec![vec![plain("a")]];
        let decimal = ListAttributes::new(1, ListNumberStyle::Decimal, ListNumberDelim::Period);
        assert!(is_simple_list(&Block::ordered_list(decimal, items.clone()), BUDGET));
        let start_two = ListAttributes::new(2, ListNumberStyle::Decimal, ListNumberDelim::Period);
        assert!(!is_simple_list(&Block::ordered_list(start_two, items.clone()), BUDGET));
        let roman = ListAttributes::new(1, ListNumberStyle::LowerRoman, ListNumberDelim::Period);
        assert!(!is_simple_list(&Block::ordered_list(roman, items), BUDGET));
    }

    #[test]
    fn test_definition_list_checks_every_definition() {
        let simple = Block::DefinitionList(vec![DefinitionItem {
            term: Inline::text("t"),
            definitions: vec![vec![plain("d1")], vec![plain("d2")]],
        }]);
        assert!(is_simple_list(&simple, BUDGET));
        let complex = Block::DefinitionList(vec![DefinitionItem {
            term: Inline::text("t"),
            definitions: vec![vec![plain("d1")], vec![plain("x"), plain("y")]],
        }]);
        assert!(!is_simple_list(&complex, BUDGET));
    }

    #[test]
    fn test_list_attributes() {
        let attr = ListAttributes::new(3, ListNumberStyle::LowerAlpha, ListNumberDelim::Period);
        assert_eq!(
            list_attributes(&attr),
            " start=\"3\" style=\"list-style-type: lower-alpha;\""
        );
        assert_eq!(list_attributes(&ListAttributes::default()), "");
    }
}
