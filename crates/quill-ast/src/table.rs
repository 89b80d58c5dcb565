/*
 * table.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::block::Blocks;
use crate::inline::Inlines;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
    Right,
    #[default]
    Default,
}

pub type TableCell = Blocks;

/// A simple table: one header row and any number of body rows.
///
/// `widths` holds one fraction of the line width per column; all zeros
/// means the widths were not specified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub caption: Inlines,
    pub alignments: Vec<Alignment>,
    pub widths: Vec<f64>,
    pub headers: Vec<TableCell>,
    pub rows: Vec<Vec<TableCell>>,
}

impl Table {
    /// True when no column carries a width hint.
    pub fn has_unset_widths(&self) -> bool {
        self.widths.iter().all(|w| *w == 0.0)
    }

    /// True when every header cell is empty.
    pub fn has_empty_headers(&self) -> bool {
        self.headers.iter().all(|cell| cell.is_empty())
    }

    /// Number of columns, taken from the widest of the column attributes,
    /// the header and the rows.
    pub fn column_count(&self) -> usize {
        let from_rows = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        self.alignments
            .len()
            .max(self.widths.len())
            .max(self.headers.len())
            .max(from_rows)
    }
}
