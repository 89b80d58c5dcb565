/*
 * options.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Writer options for quill.
 *
 * Options are a typed struct so writers can read them directly, but they can
 * also be built from an untyped serde_json::Value (for example, options that
 * arrive from a JSON request) using the same kebab-case keys.
 */

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options shared by all writers.
///
/// Expected structure when read from JSON:
/// ```json
/// {
///   "columns": 72,
///   "wrap": true,
///   "tab-stop": 4,
///   "reference-links": false,
///   "standalone": true,
///   "template": "$body$",
///   "variables": { "lang": "en" },
///   ...
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WriterOptions {
    /// Line width used when wrapping.
    pub columns: usize,
    /// Wrap text at `columns`; when false lines are unbounded.
    pub wrap: bool,
    /// Indentation unit for nested blocks.
    pub tab_stop: usize,
    /// Emit reference-style links with a trailing link table.
    pub reference_links: bool,
    pub table_of_contents: bool,
    pub toc_depth: usize,
    /// Wrap the body in `template`.
    pub standalone: bool,
    /// Render `haskell literate` code blocks with bird tracks.
    pub literate_haskell: bool,
    pub template: Option<String>,
    /// Extra template variables, in order. Computed variables take precedence.
    pub variables: Vec<(String, String)>,
    /// Deepest block/inline nesting accepted before failing.
    pub max_depth: usize,
}

impl Default for WriterOptions {
    fn default() -> Self {
        WriterOptions {
            columns: 72,
            wrap: true,
            tab_stop: 4,
            reference_links: false,
            table_of_contents: false,
            toc_depth: 3,
            standalone: false,
            literate_haskell: false,
            template: None,
            variables: Vec::new(),
            max_depth: 256,
        }
    }
}

impl WriterOptions {
    /// Build options from an untyped options object.
    ///
    /// Missing or mistyped keys fall back to the defaults. `variables` may be
    /// an object or an array of `[name, value]` pairs.
    pub fn from_value(opts: &Value) -> Self {
        let defaults = WriterOptions::default();
        WriterOptions {
            columns: get_usize(opts, "columns", defaults.columns),
            wrap: get_bool(opts, "wrap", defaults.wrap),
            tab_stop: get_usize(opts, "tab-stop", defaults.tab_stop),
            reference_links: get_bool(opts, "reference-links", defaults.reference_links),
            table_of_contents: get_bool(opts, "table-of-contents", defaults.table_of_contents),
            toc_depth: get_usize(opts, "toc-depth", defaults.toc_depth),
            standalone: get_bool(opts, "standalone", defaults.standalone),
            literate_haskell: get_bool(opts, "literate-haskell", defaults.literate_haskell),
            template: opts
                .get("template")
                .and_then(Value::as_str)
                .map(str::to_string),
            variables: get_variables(opts),
            max_depth: get_usize(opts, "max-depth", defaults.max_depth),
        }
    }

    /// The width to render at, or `None` when wrapping is off.
    pub fn line_width(&self) -> Option<usize> {
        self.wrap.then_some(self.columns)
    }
}

// =============================================================================
// Helper functions for extracting fields from options
// =============================================================================

/// Extract an integer field with a default value.
pub fn get_i64(opts: &Value, key: &str, default: i64) -> i64 {
    opts.get(key).and_then(Value::as_i64).unwrap_or(default)
}

/// Extract a non-negative integer field with a default value.
pub fn get_usize(opts: &Value, key: &str, default: usize) -> usize {
    usize::try_from(get_i64(opts, key, default as i64)).unwrap_or(default)
}

/// Extract a boolean field with a default value.
pub fn get_bool(opts: &Value, key: &str, default: bool) -> bool {
    opts.get(key).and_then(Value::as_bool).unwrap_or(default)
}

fn get_variables(opts: &Value) -> Vec<(String, String)> {
    match opts.get("variables") {
        Some(Value::Object(map)) => map
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|v| (k.clone(), v.to_string())))
            .collect(),
        Some(Value::Array(pairs)) => pairs
            .iter()
            .filter_map(|pair| {
                let name = pair.get(0)?.as_str()?;
                let value = pair.get(1).and_then(Value::as_str).unwrap_or_default();
                Some((name.to_string(), value.to_string()))
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_from_empty_object() {
        assert_eq!(WriterOptions::from_value(&json!({})), WriterOptions::default());
    }

    #[test]
    fn test_from_value_reads_kebab_case_keys() {
        let opts = WriterOptions::from_value(&json!({
            "columns": 40,
            "wrap": false,
            "tab-stop": 2,
            "reference-links": true,
            "standalone": true,
            "template": "$body$",
            "variables": [["lang", "en"], ["dir", "ltr"]],
            "max-depth": 10
        }));
        assert_eq!(opts.columns, 40);
        assert_eq!(opts.line_width(), None);
        assert_eq!(opts.tab_stop, 2);
        assert!(opts.reference_links);
        assert_eq!(opts.template.as_deref(), Some("$body$"));
        assert_eq!(
            opts.variables,
            vec![
                ("lang".to_string(), "en".to_string()),
                ("dir".to_string(), "ltr".to_string())
            ]
        );
        assert_eq!(opts.max_depth, 10);
    }

    #[test]
    fn test_mistyped_values_fall_back() {
        let opts = WriterOptions::from_value(&json!({ "columns": -3, "wrap": "yes" }));
        assert_eq!(opts.columns, 72);
        assert!(opts.wrap);
    }

    #[test]
    fn test_serde_deserialize_with_defaults() {
        let opts: WriterOptions =
            serde_json::from_value(json!({ "toc-depth": 2, "literate-haskell": true })).unwrap();
        assert_eq!(opts.toc_depth, 2);
        assert!(opts.literate_haskell);
        assert_eq!(opts.columns, 72);
    }
}
