/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Pretty-printing layout for text writers.
//!
//! This crate provides a `Doc` type modelled on the `Doc` type of Haskell's
//! `doclayout` library. Writers build documents out of literal text,
//! breakable spaces and line-break requests, then render them once at an
//! optional line width.
//!
//! - `Doc::text`: literal text (newlines become hard line breaks)
//! - `Doc::space`: a space that may break when wrapping
//! - `Doc::cr`: a newline unless already at the start of a line
//! - `Doc::blankline`: a blank line unless one was already emitted
//! - `nest`, `hang`, `prefixed`: indentation of every line of a sub-document
//! - `lblock`: a fixed-width block; adjacent blocks are laid out side by side
//! - `vcat`, `vsep`, `hcat`: concatenation helpers
//!
//! Blank lines and carriage returns at the very start or end of a
//! document never produce output, so writers can request separation
//! freely without tracking where they are.

pub mod doc;
mod render;

pub use doc::{Doc, hcat, real_length, vcat, vsep};
