/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document AST type definitions for quill.
 *
 * This crate provides pure data type definitions for the document tree
 * consumed by the quill writers. The tree is immutable input: writers
 * borrow it and never modify it.
 */

pub mod attr;
pub mod block;
pub mod document;
pub mod inline;
pub mod list;
pub mod table;

// Re-export commonly used types at the crate root
pub use attr::{Attr, classes_attr, empty_attr, has_class, is_empty_attr};
pub use block::{Block, Blocks, CodeBlock, DefinitionItem, Header, OrderedList, RawBlock};
pub use document::{Document, Meta};
pub use inline::{
    Image, Inline, Inlines, Link, Math, MathType, QuoteType, Quoted, RawInline, Target,
    normalize_spaces,
};
pub use list::{ListAttributes, ListNumberDelim, ListNumberStyle};
pub use table::{Alignment, Table, TableCell};
