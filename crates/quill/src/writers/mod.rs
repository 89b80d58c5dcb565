/*
 * mod.rs
 * Copyright (c) 2025 Posit, PBC
 */

pub mod mediawiki;
pub mod rst;
mod standalone;

use crate::errors::{WriterError, WriterResult};

/// Recursion depth of a tree walk, bounded by `WriterOptions::max_depth`.
#[derive(Debug)]
pub(crate) struct DepthGuard {
    depth: usize,
    max_depth: usize,
}

impl DepthGuard {
    pub(crate) fn new(max_depth: usize) -> Self {
        DepthGuard {
            depth: 0,
            max_depth,
        }
    }

    /// Step one level down, failing when the limit is reached.
    pub(crate) fn enter(&mut self) -> WriterResult<()> {
        if self.depth >= self.max_depth {
            return Err(WriterError::NestingTooDeep {
                max_depth: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// Levels still available below the current one.
    pub(crate) fn remaining(&self) -> usize {
        self.max_depth.saturating_sub(self.depth)
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
