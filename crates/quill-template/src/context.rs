/*
 * context.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Values handed to a template.
//!
//! Nothing here knows about the document AST: writers turn metadata into
//! text before it reaches the template.

use std::collections::HashMap;

/// A value a template can interpolate, test or iterate.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TemplateValue {
    String(String),
    Bool(bool),
    List(Vec<TemplateValue>),
    Map(HashMap<String, TemplateValue>),
    #[default]
    Null,
}

impl TemplateValue {
    /// Whether `$if(..)$` takes its first branch for this value.
    ///
    /// A string counts when it is non-empty, whatever its contents, so
    /// `"false"` is true. A list counts when some element does.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::String(text) => !text.is_empty(),
            Self::Map(fields) => !fields.is_empty(),
            Self::List(items) => items.iter().any(Self::is_truthy),
        }
    }

    /// Follow `fields` through nested maps. An empty path is the value itself.
    pub fn lookup(&self, fields: &[String]) -> Option<&TemplateValue> {
        fields.iter().try_fold(self, |value, field| match value {
            Self::Map(map) => map.get(field),
            _ => None,
        })
    }

    /// Append the text form of this value to `out`.
    ///
    /// Lists are concatenated, `true` and maps print as `true`, and false or
    /// null print nothing.
    pub fn write_to(&self, out: &mut String) {
        match self {
            Self::String(text) => out.push_str(text),
            Self::Bool(true) | Self::Map(_) => out.push_str("true"),
            Self::List(items) => items.iter().for_each(|item| item.write_to(out)),
            Self::Bool(false) | Self::Null => {}
        }
    }
}

impl From<&str> for TemplateValue {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for TemplateValue {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<bool> for TemplateValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<Vec<TemplateValue>> for TemplateValue {
    fn from(items: Vec<TemplateValue>) -> Self {
        Self::List(items)
    }
}

/// Top-level variables for one template render.
///
/// Loop variables never land here; the evaluator keeps them in its own
/// scope chain while it walks the loop body.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    globals: HashMap<String, TemplateValue>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name`, replacing any earlier value.
    pub fn insert(&mut self, name: impl Into<String>, value: TemplateValue) {
        self.globals.insert(name.into(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.globals.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&TemplateValue> {
        self.globals.get(name)
    }

    /// Resolve a dotted path such as `author.name`.
    pub fn lookup(&self, path: &[String]) -> Option<&TemplateValue> {
        let (name, fields) = path.split_first()?;
        self.get(name)?.lookup(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(dotted: &str) -> Vec<String> {
        dotted.split('.').map(String::from).collect()
    }

    #[test]
    fn test_truthiness() {
        assert!(!TemplateValue::Null.is_truthy());
        assert!(!TemplateValue::from(false).is_truthy());
        assert!(!TemplateValue::from("").is_truthy());
        assert!(TemplateValue::from("false").is_truthy());
        assert!(!TemplateValue::List(vec![TemplateValue::from("")]).is_truthy());
        assert!(TemplateValue::List(vec![TemplateValue::Null, TemplateValue::from("x")]).is_truthy());
    }

    #[test]
    fn test_lookup_through_maps() {
        let mut author = HashMap::new();
        author.insert("name".to_string(), TemplateValue::from("Ann"));
        let mut ctx = TemplateContext::new();
        ctx.insert("author", TemplateValue::Map(author));

        assert_eq!(ctx.lookup(&path("author.name")), Some(&TemplateValue::from("Ann")));
        assert_eq!(ctx.lookup(&path("author.email")), None);
        assert_eq!(ctx.lookup(&path("author.name.first")), None);
        assert_eq!(ctx.lookup(&[]), None);
    }

    #[test]
    fn test_write_to() {
        let mut out = String::new();
        TemplateValue::List(vec![
            TemplateValue::from("a"),
            TemplateValue::from(false),
            TemplateValue::from(true),
        ])
        .write_to(&mut out);
        assert_eq!(out, "atrue");
    }

    #[test]
    fn test_insert_replaces() {
        let mut ctx = TemplateContext::new();
        ctx.insert("lang", TemplateValue::from("en"));
        ctx.insert("lang", TemplateValue::from("fr"));
        assert!(ctx.contains("lang"));
        assert_eq!(ctx.get("lang"), Some(&TemplateValue::from("fr")));
    }
}
