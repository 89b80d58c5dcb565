/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Standalone document templates.
//!
//! A writer renders the document body, then wraps it in a template whose
//! variables come from the document metadata and the writer options. The
//! language is a subset of Pandoc's:
//!
//! | Syntax | Meaning |
//! |--------|---------|
//! | `$name$`, `$author.name$` | interpolate a value or a field of one |
//! | `$if(x)$..$else$..$endif$` | branch on truthiness |
//! | `$for(xs)$..$sep$..$endfor$` | repeat per element, with a separator between |
//! | `$-- note` | comment running to the end of the line |
//! | `$$` | a literal `$` |
//!
//! Directives placed alone on a line take that line's newline with them.
//!
//! ```ignore
//! let template = quill_template::Template::compile("<title>$title$</title>")?;
//! let mut ctx = quill_template::TemplateContext::new();
//! ctx.insert("title", "Notes".into());
//! assert_eq!(template.render(&ctx)?, "<title>Notes</title>");
//! ```

pub mod ast;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod parser;

pub use ast::{Conditional, ForLoop, TemplateNode, VariableRef};
pub use context::{TemplateContext, TemplateValue};
pub use error::{TemplateError, TemplateResult};
pub use parser::Template;
