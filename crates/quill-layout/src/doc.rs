/*
 * doc.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The `Doc` type and its combinators.
//!
//! A `Doc` is a flat sequence of atoms. Concatenation appends sequences;
//! structure that affects every line (indentation, fixed-width blocks) is
//! kept as nested atoms and resolved by the renderer.

use std::ops::Add;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::render::Renderer;

/// A structured document that renders to text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Doc {
    pub(crate) atoms: Vec<Atom>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Atom {
    /// Literal text without newlines, with its display width.
    Text(usize, String),
    /// Fixed-width block of lines.
    Block(usize, Vec<String>),
    /// Prefix every line of the inner document.
    Prefixed(String, Doc),
    /// A space that can break at line wrap boundaries.
    BreakingSpace,
    /// Newline unless at the start of a line.
    CarriageReturn,
    /// Unconditional newline.
    NewLine,
    /// Blank line unless one precedes.
    BlankLine,
}

/// Display width of a string in terminal columns.
pub fn real_length(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

impl Doc {
    /// The empty document.
    pub fn empty() -> Self {
        Doc::default()
    }

    fn atom(atom: Atom) -> Self {
        Doc { atoms: vec![atom] }
    }

    /// Literal text. Newlines in `s` become hard line breaks.
    pub fn text(s: impl AsRef<str>) -> Self {
        let s = s.as_ref();
        let mut atoms = Vec::new();
        for (i, line) in s.split('\n').enumerate() {
            if i > 0 {
                atoms.push(Atom::NewLine);
            }
            if !line.is_empty() {
                atoms.push(Atom::Text(real_length(line), line.to_string()));
            }
        }
        Doc { atoms }
    }

    /// A breakable space.
    pub fn space() -> Self {
        Doc::atom(Atom::BreakingSpace)
    }

    /// A newline, unless the output is already at the start of a line.
    pub fn cr() -> Self {
        Doc::atom(Atom::CarriageReturn)
    }

    /// A blank line, unless the output already ends with one.
    pub fn blankline() -> Self {
        Doc::atom(Atom::BlankLine)
    }

    /// Check if this document is empty.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Concatenate two documents horizontally.
    pub fn concat(mut self, other: Doc) -> Self {
        self.atoms.extend(other.atoms);
        self
    }

    /// Put `other` below `self`, starting it on a new line.
    pub fn above(self, other: Doc) -> Self {
        if self.is_empty() {
            other
        } else if other.is_empty() {
            self
        } else {
            self.concat(Doc::cr()).concat(other)
        }
    }

    /// Put `other` below `self` with a blank line in between.
    pub fn above_blank(self, other: Doc) -> Self {
        if self.is_empty() {
            other
        } else if other.is_empty() {
            self
        } else {
            self.concat(Doc::blankline()).concat(other)
        }
    }

    /// Prefix every line of `inner` with `prefix`.
    pub fn prefixed(prefix: impl Into<String>, inner: Doc) -> Self {
        if inner.is_empty() {
            Doc::empty()
        } else {
            Doc::atom(Atom::Prefixed(prefix.into(), inner))
        }
    }

    /// Indent every line of `inner` by `indent` columns.
    ///
    /// The first line is only indented when it starts at the beginning of a
    /// line; text already on the current line keeps its position.
    pub fn nest(indent: usize, inner: Doc) -> Self {
        Doc::prefixed(" ".repeat(indent), inner)
    }

    /// `start` followed by `inner` nested by `indent`: a hanging indent.
    pub fn hang(indent: usize, start: Doc, inner: Doc) -> Self {
        start.concat(Doc::nest(indent, inner))
    }

    /// Replace breaking spaces with literal spaces so the document never wraps.
    pub fn nowrap(self) -> Self {
        let atoms = self
            .atoms
            .into_iter()
            .map(|atom| match atom {
                Atom::BreakingSpace => Atom::Text(1, " ".to_string()),
                other => other,
            })
            .collect();
        Doc { atoms }
    }

    /// Remove trailing spaces and line breaks.
    pub fn chomp(mut self) -> Self {
        while let Some(last) = self.atoms.pop() {
            match last {
                Atom::BreakingSpace | Atom::CarriageReturn | Atom::NewLine | Atom::BlankLine => {}
                Atom::Prefixed(prefix, inner) => {
                    self.atoms.push(Atom::Prefixed(prefix, inner.chomp()));
                    break;
                }
                other => {
                    self.atoms.push(other);
                    break;
                }
            }
        }
        self
    }

    /// A left-aligned block of the given width.
    ///
    /// The document is rendered wrapped at `width`; lines that still do not
    /// fit are cut. Blocks placed next to each other are laid out side by
    /// side, the left ones padded to their width.
    pub fn lblock(width: usize, inner: Doc) -> Self {
        let width = width.max(1);
        let lines = chop(width, &inner.render(Some(width)));
        Doc::atom(Atom::Block(width, lines))
    }

    /// Width of the widest rendered line.
    pub fn offset(&self) -> usize {
        self.render(None)
            .lines()
            .map(real_length)
            .max()
            .unwrap_or(0)
    }

    /// Number of rendered lines.
    pub fn height(&self) -> usize {
        self.render(None).lines().count()
    }

    /// Render this document to a string.
    ///
    /// # Arguments
    /// * `line_width` - Optional maximum line width. Breaking spaces turn
    ///                  into newlines where text would exceed it. If None,
    ///                  no reflowing is performed.
    pub fn render(&self, line_width: Option<usize>) -> String {
        let mut renderer = Renderer::new(line_width);
        renderer.render_doc(self);
        renderer.finish()
    }
}

impl Add for Doc {
    type Output = Doc;

    fn add(self, other: Doc) -> Doc {
        self.concat(other)
    }
}

/// Concatenate documents horizontally.
pub fn hcat(docs: impl IntoIterator<Item = Doc>) -> Doc {
    docs.into_iter().fold(Doc::empty(), Doc::concat)
}

/// Stack documents vertically, each starting on a new line.
pub fn vcat(docs: impl IntoIterator<Item = Doc>) -> Doc {
    docs.into_iter().fold(Doc::empty(), Doc::above)
}

/// Stack documents vertically with blank lines in between.
pub fn vsep(docs: impl IntoIterator<Item = Doc>) -> Doc {
    docs.into_iter().fold(Doc::empty(), Doc::above_blank)
}

/// Split rendered text into lines no wider than `width`.
fn chop(width: usize, s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    let mut lines: Vec<&str> = s.split('\n').collect();
    if s.ends_with('\n') {
        lines.pop();
    }

    let mut result = Vec::with_capacity(lines.len());
    for line in lines {
        if real_length(line) <= width {
            result.push(line.to_string());
            continue;
        }
        let mut current = String::new();
        let mut current_width = 0;
        for ch in line.chars() {
            let w = ch.width().unwrap_or(0);
            if current_width + w > width && !current.is_empty() {
                result.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += w;
        }
        if !current.is_empty() {
            result.push(current);
        }
    }
    result
}
