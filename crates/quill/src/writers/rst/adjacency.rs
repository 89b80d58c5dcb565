/*
 * adjacency.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Escapes between inline markup and adjacent text.
//!
//! reStructuredText only recognizes inline markup (`*em*`, `` `link`_ ``,
//! `` ``code`` `` ...) when it is delimited by whitespace or certain
//! punctuation. Where a complex inline touches other text, an escaped
//! space (`\ `, which renders as nothing) is inserted between them.

use quill_ast::Inline;

/// An element of an inline sequence ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Piece<'a> {
    Node(&'a Inline),
    /// An escaped space; renders as `\ `.
    Escape,
}

/// Characters after which inline markup may start.
const OK_BEFORE: &str = "-:/'\"<([{\u{2013}\u{2014}";

/// Characters before which inline markup may end.
const OK_AFTER: &str = "-.,:;!?\\/'\")]}>\u{2013}\u{2014}";

/// Insert escapes where inline markup would otherwise run into its
/// neighbours. Running this again on its output changes nothing.
pub fn insert_escapes<'a>(pieces: &[Piece<'a>]) -> Vec<Piece<'a>> {
    let mut result = Vec::with_capacity(pieces.len());
    let mut i = 0;
    while i < pieces.len() {
        let current = pieces[i];
        result.push(current);

        // 'x'  with x complex: the closer would end the markup early
        if let (Some(next), Some(after)) = (pieces.get(i + 1), pieces.get(i + 2)) {
            if is_complex(next) && surrounds_complex(&current, after) {
                result.push(*next);
                result.push(Piece::Escape);
                i += 2;
                continue;
            }
        }

        if let Some(next) = pieces.get(i + 1) {
            if (is_complex(&current) && !ok_after_complex(next))
                || (is_complex(next) && !ok_before_complex(&current))
            {
                result.push(Piece::Escape);
            }
        }
        i += 1;
    }
    result
}

/// Inlines whose markup needs delimiting.
pub fn is_complex(piece: &Piece) -> bool {
    matches!(
        piece,
        Piece::Node(
            Inline::Emph(_)
                | Inline::Strong(_)
                | Inline::SmallCaps(_)
                | Inline::Strikeout(_)
                | Inline::Superscript(_)
                | Inline::Subscript(_)
                | Inline::Link(_)
                | Inline::Image(_)
                | Inline::Code(_)
                | Inline::Math(_)
        )
    )
}

fn surrounds_complex(before: &Piece, after: &Piece) -> bool {
    let (Piece::Node(Inline::Str(before)), Piece::Node(Inline::Str(after))) = (before, after)
    else {
        return false;
    };
    matches!(
        (before.chars().last(), after.chars().next()),
        (Some('\''), Some('\''))
            | (Some('"'), Some('"'))
            | (Some('<'), Some('>'))
            | (Some('['), Some(']'))
            | (Some('{'), Some('}'))
    )
}

fn ok_after_complex(piece: &Piece) -> bool {
    match piece {
        Piece::Escape | Piece::Node(Inline::Space | Inline::LineBreak) => true,
        Piece::Node(Inline::Str(s)) => s
            .chars()
            .next()
            .is_some_and(|c| c.is_whitespace() || OK_AFTER.contains(c)),
        Piece::Node(_) => false,
    }
}

fn ok_before_complex(piece: &Piece) -> bool {
    match piece {
        Piece::Escape | Piece::Node(Inline::Space | Inline::LineBreak) => true,
        Piece::Node(Inline::Str(s)) => s
            .chars()
            .last()
            .is_some_and(|c| c.is_whitespace() || OK_BEFORE.contains(c)),
        Piece::Node(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pieces(inlines: &[Inline]) -> Vec<Piece<'_>> {
        inlines.iter().map(Piece::Node).collect()
    }

    fn escape_positions(result: &[Piece]) -> Vec<usize> {
        result
            .iter()
            .enumerate()
            .filter(|(_, p)| matches!(p, Piece::Escape))
            .map(|(i, _)| i)
            .collect()
    }

    fn emph(s: &str) -> Inline {
        Inline::Emph(vec![Inline::str(s)])
    }

    #[test]
    fn test_no_escape_around_spaces_and_punctuation() {
        let inlines = vec![
            Inline::str("("),
            emph("a"),
            Inline::str("),"),
            Inline::Space,
            emph("b"),
            Inline::str("."),
        ];
        let result = insert_escapes(&pieces(&inlines));
        assert_eq!(result, pieces(&inlines));
    }

    #[test]
    fn test_escape_after_complex_before_letter() {
        let inlines = vec![emph("a"), Inline::str("b")];
        let result = insert_escapes(&pieces(&inlines));
        assert_eq!(escape_positions(&result), vec![1]);
    }

    #[test]
    fn test_escape_before_complex_after_letter() {
        let inlines = vec![Inline::str("a"), Inline::Code("x".into())];
        let result = insert_escapes(&pieces(&inlines));
        assert_eq!(escape_positions(&result), vec![1]);
    }

    #[test]
    fn test_escape_between_adjacent_complex_inlines() {
        let inlines = vec![emph("a"), Inline::Strong(vec![Inline::str("b")])];
        let result = insert_escapes(&pieces(&inlines));
        assert_eq!(escape_positions(&result), vec![1]);
    }

    #[test]
    fn test_escape_inside_matching_quotes() {
        let inlines = vec![Inline::str("'"), emph("a"), Inline::str("'")];
        let result = insert_escapes(&pieces(&inlines));
        assert_eq!(escape_positions(&result), vec![2]);
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let inlines = vec![
            Inline::str("x"),
            emph("a"),
            Inline::str("<"),
            emph("b"),
            Inline::str(">y"),
            Inline::Code("c".into()),
        ];
        let once = insert_escapes(&pieces(&inlines));
        let twice = insert_escapes(&once);
        assert_eq!(once, twice);
    }
}
