/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Rendering of `Doc` values to strings.
//!
//! The renderer walks the atom sequence once, tracking the current column,
//! the active line prefix and how many newlines were just emitted. Blank
//! lines and carriage returns consult that count, which is what makes
//! repeated separation requests collapse.

use crate::doc::{Atom, Doc, real_length};

pub(crate) struct Renderer {
    output: String,
    prefix: String,
    line_width: Option<usize>,
    column: usize,
    /// Newlines emitted since the last text; starts at 2 so leading blank
    /// lines are suppressed.
    newlines: usize,
}

impl Renderer {
    pub(crate) fn new(line_width: Option<usize>) -> Self {
        Renderer {
            output: String::new(),
            prefix: String::new(),
            line_width,
            column: 0,
            newlines: 2,
        }
    }

    pub(crate) fn finish(self) -> String {
        self.output
    }

    pub(crate) fn render_doc(&mut self, doc: &Doc) {
        let atoms = normalize(&doc.atoms);
        self.render_atoms(&atoms);
    }

    fn render_atoms(&mut self, atoms: &[Atom]) {
        for (i, atom) in atoms.iter().enumerate() {
            let is_last = i + 1 == atoms.len();
            match atom {
                Atom::Text(width, s) => self.emit_text(*width, s),
                Atom::Prefixed(prefix, inner) => {
                    let old_prefix = self.prefix.clone();
                    self.prefix.push_str(prefix);
                    self.render_doc(inner);
                    self.prefix = old_prefix;
                }
                Atom::BlankLine => {
                    if self.newlines > 1 || is_last {
                        continue;
                    }
                    if self.column == 0 {
                        self.emit_newline();
                    } else {
                        self.emit_newline();
                        self.emit_newline();
                    }
                }
                Atom::CarriageReturn => {
                    if self.newlines > 0 || is_last {
                        continue;
                    }
                    self.emit_newline();
                }
                Atom::NewLine => self.emit_newline(),
                Atom::BreakingSpace => {
                    let upcoming: usize = atoms[i + 1..]
                        .iter()
                        .take_while(|a| matches!(a, Atom::Text(..) | Atom::Block(..)))
                        .map(|a| match a {
                            Atom::Text(width, _) | Atom::Block(width, _) => *width,
                            _ => 0,
                        })
                        .sum();
                    match self.line_width {
                        Some(limit) if self.column + 1 + upcoming > limit => self.emit_newline(),
                        _ => self.emit_text(1, " "),
                    }
                }
                Atom::Block(_, lines) => {
                    let old_prefix = self.prefix.clone();
                    let indent = self.column.saturating_sub(real_length(&old_prefix));
                    if indent > 0 {
                        self.prefix.push_str(&" ".repeat(indent));
                    }
                    for (n, line) in lines.iter().enumerate() {
                        if n > 0 {
                            self.emit_newline();
                        }
                        if !line.is_empty() {
                            self.emit_text(real_length(line), line);
                        }
                    }
                    self.prefix = old_prefix;
                }
            }
        }
    }

    fn emit_prefix(&mut self, trim: bool) {
        if self.column != 0 || self.prefix.is_empty() {
            return;
        }
        let prefix = if trim {
            self.prefix.trim_end()
        } else {
            self.prefix.as_str()
        };
        self.column += real_length(prefix);
        self.output.push_str(prefix);
    }

    fn emit_text(&mut self, width: usize, s: &str) {
        self.emit_prefix(false);
        self.output.push_str(s);
        self.column += width;
        self.newlines = 0;
    }

    fn emit_newline(&mut self) {
        self.emit_prefix(true);
        self.output.push('\n');
        self.column = 0;
        self.newlines += 1;
    }
}

/// Resolve atom interactions that depend on neighbours: a breaking space
/// before a line break disappears, and adjacent blocks merge side by side.
fn normalize(atoms: &[Atom]) -> Vec<Atom> {
    let mut result: Vec<Atom> = Vec::with_capacity(atoms.len());
    for atom in atoms {
        match atom {
            Atom::BreakingSpace => {
                if matches!(result.last(), Some(Atom::BreakingSpace)) {
                    continue;
                }
                result.push(Atom::BreakingSpace);
            }
            Atom::CarriageReturn | Atom::NewLine | Atom::BlankLine => {
                if matches!(result.last(), Some(Atom::BreakingSpace)) {
                    result.pop();
                }
                result.push(atom.clone());
            }
            Atom::Block(width, lines) => {
                let add_space = match result.as_slice() {
                    [.., Atom::Block(..)] => Some(false),
                    [.., Atom::Block(..), Atom::BreakingSpace] => Some(true),
                    _ => None,
                };
                let Some(add_space) = add_space else {
                    result.push(atom.clone());
                    continue;
                };
                if add_space {
                    result.pop();
                }
                match result.pop() {
                    Some(Atom::Block(w1, l1)) => {
                        result.push(merge_blocks(add_space, w1, l1, *width, lines));
                    }
                    other => {
                        result.extend(other);
                        result.push(atom.clone());
                    }
                }
            }
            other => result.push(other.clone()),
        }
    }
    result
}

fn merge_blocks(
    add_space: bool,
    left_width: usize,
    left: Vec<String>,
    right_width: usize,
    right: &[String],
) -> Atom {
    let height = left.len().max(right.len());
    let mut lines = Vec::with_capacity(height);
    for i in 0..height {
        let l = left.get(i).map(String::as_str).unwrap_or("");
        let r = right.get(i).map(String::as_str).unwrap_or("");
        let mut line = pad(left_width, l);
        if add_space && !r.is_empty() {
            line.push(' ');
        }
        line.push_str(r);
        lines.push(line);
    }
    let width = left_width + right_width + usize::from(add_space);
    Atom::Block(width, lines)
}

fn pad(width: usize, s: &str) -> String {
    let fill = width.saturating_sub(real_length(s));
    let mut padded = String::with_capacity(s.len() + fill);
    padded.push_str(s);
    padded.push_str(&" ".repeat(fill));
    padded
}

#[cfg(test)]
mod tests {
    use crate::doc::{Doc, vcat, vsep};

    #[test]
    fn test_leading_and_trailing_blank_lines_dropped() {
        let doc = Doc::blankline() + Doc::text("a") + Doc::blankline();
        assert_eq!(doc.render(None), "a");
    }

    #[test]
    fn test_blank_lines_collapse() {
        let doc = Doc::text("a")
            + Doc::blankline()
            + Doc::blankline()
            + Doc::cr()
            + Doc::text("b");
        assert_eq!(doc.render(None), "a\n\nb");
    }

    #[test]
    fn test_vcat_and_vsep() {
        assert_eq!(
            vcat(vec![Doc::text("a"), Doc::text("b")]).render(None),
            "a\nb"
        );
        assert_eq!(
            vsep(vec![Doc::text("a"), Doc::empty(), Doc::text("b")]).render(None),
            "a\n\nb"
        );
    }

    #[test]
    fn test_wrapping_at_breaking_spaces() {
        let doc = Doc::text("aaa") + Doc::space() + Doc::text("bbb") + Doc::space() + Doc::text("c");
        assert_eq!(doc.render(Some(7)), "aaa bbb\nc");
        assert_eq!(doc.render(None), "aaa bbb c");
    }

    #[test]
    fn test_space_before_newline_dropped() {
        let doc = Doc::text("a") + Doc::space() + Doc::cr() + Doc::text("b");
        assert_eq!(doc.render(None), "a\nb");
    }

    #[test]
    fn test_hang_indents_following_lines() {
        let doc = Doc::hang(3, Doc::text("-  "), Doc::text("one").above(Doc::text("two")));
        assert_eq!(doc.render(None), "-  one\n   two");
    }

    #[test]
    fn test_nest_from_line_start() {
        let doc = Doc::text("::").above_blank(Doc::nest(4, Doc::text("x\ny")));
        assert_eq!(doc.render(None), "::\n\n    x\n    y");
    }

    #[test]
    fn test_prefix_trimmed_on_blank_lines() {
        let doc = Doc::prefixed("> ", Doc::text("a").above_blank(Doc::text("b")));
        assert_eq!(doc.render(None), "> a\n>\n> b");
    }

    #[test]
    fn test_blocks_side_by_side() {
        let left = Doc::lblock(3, Doc::text("ab\ncd"));
        let right = Doc::lblock(2, Doc::text("x"));
        assert_eq!((left + right).render(None), "ab x\ncd ");
    }

    #[test]
    fn test_blocks_separated_by_space() {
        let left = Doc::lblock(2, Doc::text("a"));
        let right = Doc::lblock(2, Doc::text("b"));
        assert_eq!((left + Doc::space() + right).render(None), "a  b");
    }

    #[test]
    fn test_block_wraps_contents() {
        let inner = Doc::text("one") + Doc::space() + Doc::text("two");
        let block = Doc::lblock(4, inner);
        assert_eq!(block.render(None), "one\ntwo");
        assert_eq!(block.height(), 2);
    }

    #[test]
    fn test_block_after_text_keeps_column() {
        let doc = Doc::text("> ") + Doc::lblock(3, Doc::text("a\nb"));
        assert_eq!(doc.render(None), "> a\n  b");
    }
}
