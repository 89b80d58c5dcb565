/*
 * markers.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Ordered list marker generation.

use quill_ast::{ListAttributes, ListNumberDelim, ListNumberStyle};

/// Markers for `count` items of an ordered list, e.g. `1.`, `(b)`, `iv)`.
///
/// Alphabetic styles cycle through `a`..`z`. Roman numerals outside
/// 1..3999 render as `?`.
pub fn ordered_list_markers(attr: &ListAttributes, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let n = attr.start + i;
            let number = match attr.style {
                ListNumberStyle::Default | ListNumberStyle::Example | ListNumberStyle::Decimal => {
                    n.to_string()
                }
                ListNumberStyle::LowerAlpha => alpha(attr.start, i, b'a'),
                ListNumberStyle::UpperAlpha => alpha(attr.start, i, b'A'),
                ListNumberStyle::LowerRoman => to_roman(n).to_lowercase(),
                ListNumberStyle::UpperRoman => to_roman(n),
            };
            match attr.delim {
                ListNumberDelim::Default | ListNumberDelim::Period => format!("{number}."),
                ListNumberDelim::OneParen => format!("{number})"),
                ListNumberDelim::TwoParens => format!("({number})"),
            }
        })
        .collect()
}

fn alpha(start: usize, index: usize, base: u8) -> String {
    let offset = (start.saturating_sub(1) + index) % 26;
    char::from(base + offset as u8).to_string()
}

/// Upper-case roman numeral for `n`.
pub fn to_roman(n: usize) -> String {
    const NUMERALS: &[(usize, &str)] = &[
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    if n == 0 || n >= 4000 {
        return "?".to_string();
    }
    let mut remaining = n;
    let mut result = String::new();
    for (value, numeral) in NUMERALS {
        while remaining >= *value {
            result.push_str(numeral);
            remaining -= value;
        }
    }
    result
}
