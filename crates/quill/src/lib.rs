/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Writers that turn a `quill_ast::Document` into MediaWiki markup or
//! reStructuredText.
//!
//! Each writer walks the tree once with a mutable context that collects
//! footnotes, reference targets and flags along the way; the collected
//! sections are appended after the body. In standalone mode the result is
//! wrapped in a template (see `quill_template`).
//!
//! ```ignore
//! use quill::{WriterOptions, writers::rst};
//! use quill_ast::{Block, Document, Inline};
//!
//! let doc = Document::new(vec![Block::para(vec![Inline::Strong(vec![Inline::str("hi")])])]);
//! assert_eq!(rst::write(&doc, &WriterOptions::default())?, "**hi**\n");
//! ```

pub mod errors;
pub mod options;
pub mod utils;
pub mod writers;

pub use errors::{WriterError, WriterResult};
pub use options::WriterOptions;
