/*
 * errors.rs
 * Copyright (c) 2025 Posit, PBC
 */

use quill_template::TemplateError;
use thiserror::Error;

/// Errors surfaced by the writers.
///
/// Rendering itself never fails on a well-formed tree; these cover
/// configuration problems and pathological input.
#[derive(Debug, Error, PartialEq)]
pub enum WriterError {
    /// Standalone output was requested without a template.
    #[error("standalone output requested but no template was provided")]
    MissingTemplate,

    /// The template failed to compile or render.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// The document nests deeper than the configured limit.
    #[error("document nesting exceeds the maximum depth of {max_depth}")]
    NestingTooDeep { max_depth: usize },
}

pub type WriterResult<T> = Result<T, WriterError>;
