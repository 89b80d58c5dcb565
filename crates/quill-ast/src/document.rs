/*
 * document.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::block::Blocks;
use crate::inline::Inlines;
use serde::{Deserialize, Serialize};

/// Bibliographic metadata used when writing standalone output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Meta {
    pub title: Inlines,
    pub authors: Vec<Inlines>,
    pub date: Inlines,
}

/*
 * The root of a document tree: metadata plus the body blocks.
 */
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub meta: Meta,
    pub blocks: Blocks,
}

impl Document {
    pub fn new(blocks: Blocks) -> Self {
        Document {
            meta: Meta::default(),
            blocks,
        }
    }

    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }
}
