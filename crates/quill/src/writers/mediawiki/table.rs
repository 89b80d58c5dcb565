/*
 * table.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! MediaWiki tables, written as HTML table tags.

use quill_ast::{Alignment, Table, TableCell};

use super::{MediaWikiWriterContext, render_blocks, render_inlines};
use crate::errors::WriterResult;

pub(super) fn write_table(table: &Table, ctx: &mut MediaWikiWriterContext) -> WriterResult<String> {
    let columns = table.column_count();
    let alignments: Vec<&'static str> = (0..columns)
        .map(|i| alignment_name(table.alignments.get(i).copied().unwrap_or_default()))
        .collect();

    let mut output = String::from("<table>\n");

    if !table.caption.is_empty() {
        let caption = render_inlines(&table.caption, ctx)?;
        output.push_str(&format!("<caption>{caption}</caption>\n"));
    }

    if !table.has_unset_widths() {
        for width in &table.widths {
            let percent = (100.0 * width).trunc() as i64;
            output.push_str(&format!("<col width=\"{percent}%\" />\n"));
        }
    }

    if !table.has_empty_headers() {
        let header = write_row(&table.headers, &alignments, 0, ctx)?;
        output.push_str(&format!("<thead>\n{header}\n</thead>\n"));
    }

    output.push_str("<tbody>\n");
    for (i, row) in table.rows.iter().enumerate() {
        output.push_str(&write_row(row, &alignments, i + 1, ctx)?);
        output.push('\n');
    }
    output.push_str("</tbody>\n</table>\n");
    Ok(output)
}

fn alignment_name(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left | Alignment::Default => "left",
        Alignment::Right => "right",
        Alignment::Center => "center",
    }
}

/// Row 0 is the header row; body rows alternate `odd` and `even`.
fn write_row(
    cells: &[TableCell],
    alignments: &[&str],
    row_number: usize,
    ctx: &mut MediaWikiWriterContext,
) -> WriterResult<String> {
    let (cell_tag, row_class) = match row_number {
        0 => ("th", "header"),
        n if n % 2 == 1 => ("td", "odd"),
        _ => ("td", "even"),
    };
    let mut output = format!("<tr class=\"{row_class}\">\n");
    for (cell, align) in cells.iter().zip(alignments) {
        let contents = render_blocks(cell, ctx)?;
        output.push_str(&format!(
            "<{cell_tag} align=\"{align}\">{contents}</{cell_tag}>\n"
        ));
    }
    output.push_str("</tr>");
    Ok(output)
}
