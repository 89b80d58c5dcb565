/*
 * inline.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::block::Blocks;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Inline {
    Str(String),
    Emph(Inlines),
    Strong(Inlines),
    Strikeout(Inlines),
    Superscript(Inlines),
    Subscript(Inlines),
    SmallCaps(Inlines),
    Quoted(Quoted),
    Cite(Inlines),
    Code(String),
    Space,
    LineBreak,
    Math(Math),
    RawInline(RawInline),
    Link(Link),
    Image(Image),
    /// Footnote body, placed at the point of reference.
    Note(Blocks),
}

pub type Inlines = Vec<Inline>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QuoteType {
    SingleQuote,
    DoubleQuote,
}

/// Link or image target: `(url, title)`.
pub type Target = (String, String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MathType {
    InlineMath,
    DisplayMath,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quoted {
    pub quote_type: QuoteType,
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Math {
    pub math_type: MathType,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInline {
    pub format: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub content: Inlines,
    pub target: Target,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub content: Inlines,
    pub target: Target,
}

impl Inline {
    pub fn str(text: impl Into<String>) -> Inline {
        Inline::Str(text.into())
    }

    /// Split text on ASCII spaces into `Str` and `Space` nodes.
    ///
    /// Runs of spaces collapse into a single `Space`, mirroring what a
    /// reader produces for ordinary prose.
    pub fn text(text: &str) -> Inlines {
        let mut result = Vec::new();
        for (i, word) in text.split(' ').filter(|w| !w.is_empty()).enumerate() {
            if i > 0 {
                result.push(Inline::Space);
            }
            result.push(Inline::Str(word.to_string()));
        }
        if text.starts_with(' ') && !result.is_empty() {
            result.insert(0, Inline::Space);
        }
        if text.ends_with(' ') && !result.is_empty() {
            result.push(Inline::Space);
        }
        result
    }

    pub fn link(content: Inlines, url: impl Into<String>, title: impl Into<String>) -> Inline {
        Inline::Link(Link {
            content,
            target: (url.into(), title.into()),
        })
    }

    pub fn image(content: Inlines, url: impl Into<String>, title: impl Into<String>) -> Inline {
        Inline::Image(Image {
            content,
            target: (url.into(), title.into()),
        })
    }

    pub fn math(math_type: MathType, text: impl Into<String>) -> Inline {
        Inline::Math(Math {
            math_type,
            text: text.into(),
        })
    }

    pub fn raw(format: impl Into<String>, text: impl Into<String>) -> Inline {
        Inline::RawInline(RawInline {
            format: format.into(),
            text: text.into(),
        })
    }

    pub fn quoted(quote_type: QuoteType, content: Inlines) -> Inline {
        Inline::Quoted(Quoted {
            quote_type,
            content,
        })
    }
}

/// Collapse runs of spaces and drop leading/trailing spaces.
pub fn normalize_spaces(inlines: &[Inline]) -> Vec<&Inline> {
    let mut result: Vec<&Inline> = Vec::with_capacity(inlines.len());
    for inline in inlines {
        if matches!(inline, Inline::Space)
            && matches!(result.last(), None | Some(Inline::Space))
        {
            continue;
        }
        result.push(inline);
    }
    if matches!(result.last(), Some(Inline::Space)) {
        result.pop();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_splits_words() {
        assert_eq!(
            Inline::text("hello big world"),
            vec![
                Inline::str("hello"),
                Inline::Space,
                Inline::str("big"),
                Inline::Space,
                Inline::str("world"),
            ]
        );
    }

    #[test]
    fn test_text_collapses_spaces() {
        assert_eq!(
            Inline::text("a   b"),
            vec![Inline::str("a"), Inline::Space, Inline::str("b")]
        );
        assert!(Inline::text("   ").is_empty());
    }

    #[test]
    fn test_normalize_spaces() {
        let inlines = vec![
            Inline::Space,
            Inline::str("a"),
            Inline::Space,
            Inline::Space,
            Inline::str("b"),
            Inline::Space,
        ];
        assert_eq!(
            normalize_spaces(&inlines),
            vec![&Inline::str("a"), &Inline::Space, &Inline::str("b")]
        );
    }
}
