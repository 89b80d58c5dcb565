/*
 * table.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Grid tables.
//!
//! ```text
//! +--------+--------+
//! | Name   | Size   |
//! +========+========+
//! | a      | 1      |
//! +--------+--------+
//! ```

use quill_ast::{Table, TableCell};
use quill_layout::{Doc, hcat, vcat};

use super::RstWriterContext;
use super::blocks::render_blocks;
use super::inlines::render_inlines;
use crate::errors::WriterResult;

/// Column widths in characters from width fractions of a `columns` wide line.
///
/// Fractions that are all zero (or missing) split the line evenly. Widths
/// are rounded down, so fractions summing to at most one never exceed
/// `columns`; a tiny fraction may give a zero width.
pub fn column_widths_from_fractions(fractions: &[f64], ncols: usize, columns: usize) -> Vec<usize> {
    if ncols == 0 {
        return Vec::new();
    }
    if fractions.iter().all(|f| *f <= 0.0) {
        return vec![columns / ncols; ncols];
    }
    (0..ncols)
        .map(|i| {
            let fraction = fractions.get(i).copied().unwrap_or(0.0).clamp(0.0, 1.0);
            (columns as f64 * fraction).floor() as usize
        })
        .collect()
}

pub(super) fn render_table<'a>(
    table: &'a Table,
    ctx: &mut RstWriterContext<'a>,
) -> WriterResult<Doc> {
    let ncols = table.column_count();
    if ncols == 0 {
        return Ok(Doc::empty());
    }

    let headers = render_row(&table.headers, ncols, ctx)?;
    let rows = table
        .rows
        .iter()
        .map(|row| render_row(row, ncols, ctx))
        .collect::<WriterResult<Vec<_>>>()?;

    let is_simple = table.has_unset_widths()
        && table.rows.iter().flatten().all(|cell| cell.len() <= 1);
    let widths: Vec<usize> = if is_simple {
        (0..ncols)
            .map(|i| {
                let widest = std::iter::once(&headers)
                    .chain(rows.iter())
                    .map(|row| row[i].offset())
                    .max()
                    .unwrap_or(0);
                (widest + 2).max(1)
            })
            .collect()
    } else {
        // Cells hold at least one character, matching `Doc::lblock`
        column_widths_from_fractions(&table.widths, ncols, ctx.options.columns)
            .into_iter()
            .map(|width| width.max(1))
            .collect()
    };
    tracing::trace!(simple = is_simple, widths = ?widths, "Laying out grid table");

    let mut lines = vec![border(&widths, '-')];
    if !table.has_empty_headers() {
        lines.push(grid_row(headers, &widths));
        lines.push(border(&widths, '='));
    }
    for (i, row) in rows.into_iter().enumerate() {
        if i > 0 {
            lines.push(border(&widths, '-'));
        }
        lines.push(grid_row(row, &widths));
    }
    lines.push(border(&widths, '-'));

    let caption = if table.caption.is_empty() {
        Doc::empty()
    } else {
        Doc::blankline() + Doc::text("Table: ") + render_inlines(&table.caption, ctx)?
    };
    Ok(vcat(lines).above(caption) + Doc::blankline())
}

/// Render the cells of a row, padding short rows with empty cells.
fn render_row<'a>(
    cells: &'a [TableCell],
    ncols: usize,
    ctx: &mut RstWriterContext<'a>,
) -> WriterResult<Vec<Doc>> {
    let mut docs = cells
        .iter()
        .take(ncols)
        .map(|cell| render_blocks(cell, ctx))
        .collect::<WriterResult<Vec<_>>>()?;
    docs.resize(ncols, Doc::empty());
    Ok(docs)
}

/// Lay out cells side by side between `|` separators.
fn grid_row(cells: Vec<Doc>, widths: &[usize]) -> Doc {
    let blocks: Vec<Doc> = cells
        .into_iter()
        .zip(widths)
        .map(|(cell, width)| Doc::lblock(*width, cell))
        .collect();
    let height = blocks.iter().map(Doc::height).max().unwrap_or(0).max(1);
    let separator = |width: usize, s: &str| Doc::lblock(width, vcat(vec![Doc::text(s); height]));

    let mut row = vec![separator(2, "| ")];
    for (i, block) in blocks.into_iter().enumerate() {
        if i > 0 {
            row.push(separator(3, " | "));
        }
        row.push(block);
    }
    row.push(separator(2, " |"));
    hcat(row)
}

fn border(widths: &[usize], ch: char) -> Doc {
    let fill = ch.to_string();
    let cells: Vec<String> = widths.iter().map(|w| fill.repeat(*w)).collect();
    Doc::text(format!("+{ch}{}{ch}+", cells.join(&format!("{ch}+{ch}"))))
}
