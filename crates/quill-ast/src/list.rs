/*
 * list.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ListNumberStyle {
    #[default]
    Default,
    Example,
    Decimal,
    LowerRoman,
    UpperRoman,
    LowerAlpha,
    UpperAlpha,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ListNumberDelim {
    #[default]
    Default,
    Period,
    OneParen,
    TwoParens,
}

/// Start number, numbering style and delimiter of an ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAttributes {
    pub start: usize,
    pub style: ListNumberStyle,
    pub delim: ListNumberDelim,
}

impl Default for ListAttributes {
    fn default() -> Self {
        ListAttributes {
            start: 1,
            style: ListNumberStyle::Default,
            delim: ListNumberDelim::Default,
        }
    }
}

impl ListAttributes {
    pub fn new(start: usize, style: ListNumberStyle, delim: ListNumberDelim) -> Self {
        ListAttributes {
            start,
            style,
            delim,
        }
    }

    /// True for a list numbered `1.` onward in the default style and delimiter.
    pub fn is_default(&self) -> bool {
        self.start == 1
            && self.style == ListNumberStyle::Default
            && self.delim == ListNumberDelim::Default
    }
}

impl ListNumberStyle {
    /// CSS `list-style-type` spelling of the style.
    pub fn css_name(&self) -> &'static str {
        match self {
            ListNumberStyle::Default => "default",
            ListNumberStyle::Example => "example",
            ListNumberStyle::Decimal => "decimal",
            ListNumberStyle::LowerRoman => "lower-roman",
            ListNumberStyle::UpperRoman => "upper-roman",
            ListNumberStyle::LowerAlpha => "lower-alpha",
            ListNumberStyle::UpperAlpha => "upper-alpha",
        }
    }
}
