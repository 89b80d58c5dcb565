/*
 * block.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::attr::Attr;
use crate::inline::Inlines;
use crate::list::ListAttributes;
use crate::table::Table;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Plain(Inlines),
    Paragraph(Inlines),
    Header(Header),
    CodeBlock(CodeBlock),
    BlockQuote(Blocks),
    HorizontalRule,
    RawBlock(RawBlock),
    BulletList(Vec<Blocks>),
    OrderedList(OrderedList),
    DefinitionList(Vec<DefinitionItem>),
    Table(Table),
    Null,
}

pub type Blocks = Vec<Block>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub level: usize,
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub attr: Attr,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBlock {
    pub format: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedList {
    pub attr: ListAttributes,
    pub content: Vec<Blocks>,
}

/// A term with its definitions; each definition is a block sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionItem {
    pub term: Inlines,
    pub definitions: Vec<Blocks>,
}

impl Block {
    pub fn para(content: Inlines) -> Block {
        Block::Paragraph(content)
    }

    pub fn plain(content: Inlines) -> Block {
        Block::Plain(content)
    }

    pub fn header(level: usize, content: Inlines) -> Block {
        Block::Header(Header { level, content })
    }

    pub fn code_block(attr: Attr, text: impl Into<String>) -> Block {
        Block::CodeBlock(CodeBlock {
            attr,
            text: text.into(),
        })
    }

    pub fn raw(format: impl Into<String>, text: impl Into<String>) -> Block {
        Block::RawBlock(RawBlock {
            format: format.into(),
            text: text.into(),
        })
    }

    pub fn ordered_list(attr: ListAttributes, content: Vec<Blocks>) -> Block {
        Block::OrderedList(OrderedList { attr, content })
    }

    /// True for blocks that carry a single inline run.
    pub fn is_plain_or_para(&self) -> bool {
        matches!(self, Block::Plain(_) | Block::Paragraph(_))
    }

    /// True for the three list variants.
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            Block::BulletList(_) | Block::OrderedList(_) | Block::DefinitionList(_)
        )
    }
}
