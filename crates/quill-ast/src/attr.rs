/*
 * attr.rs
 * Copyright (c) 2025 Posit, PBC
 */

use hashlink::LinkedHashMap;

/// Identifier, classes, and ordered key/value pairs.
pub type Attr = (String, Vec<String>, LinkedHashMap<String, String>);

pub fn empty_attr() -> Attr {
    Attr::default()
}

pub fn is_empty_attr((id, classes, pairs): &Attr) -> bool {
    id.is_empty() && classes.is_empty() && pairs.is_empty()
}

/// An attribute with no identifier or pairs, only `classes`.
pub fn classes_attr<I, S>(classes: I) -> Attr
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut attr = empty_attr();
    attr.1.extend(classes.into_iter().map(Into::into));
    attr
}

pub fn has_class(attr: &Attr, class: &str) -> bool {
    attr.1.iter().any(|c| c == class)
}
