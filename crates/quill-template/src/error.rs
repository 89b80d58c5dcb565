/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for template parsing.

use thiserror::Error;

/// Errors that can occur while compiling a template.
#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    /// Malformed directive syntax.
    #[error("Parse error at byte {offset}: {message}")]
    Parse { message: String, offset: usize },

    /// A block directive without its closing directive.
    #[error("Unclosed ${directive}$ directive")]
    UnclosedDirective { directive: String },

    /// A closing or separating directive with no block to attach to.
    #[error("Unexpected ${directive}$ at byte {offset}")]
    UnexpectedDirective { directive: String, offset: usize },
}

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;
