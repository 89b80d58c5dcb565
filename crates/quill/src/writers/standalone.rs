/*
 * standalone.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Wrapping a rendered body in a template for standalone output.

use indexmap::IndexMap;
use quill_template::{Template, TemplateContext, TemplateValue};

use crate::errors::{WriterError, WriterResult};
use crate::options::WriterOptions;

/// Render the configured template with `context`.
///
/// User variables from the options are added for names the writer did not
/// set. A name given more than once becomes a list.
pub(crate) fn render_standalone(
    options: &WriterOptions,
    mut context: TemplateContext,
) -> WriterResult<String> {
    let Some(source) = options.template.as_deref() else {
        return Err(WriterError::MissingTemplate);
    };

    let mut user: IndexMap<&str, Vec<TemplateValue>> = IndexMap::new();
    for (name, value) in &options.variables {
        user.entry(name.as_str())
            .or_default()
            .push(TemplateValue::from(value.as_str()));
    }
    for (name, mut values) in user {
        if context.contains(name) {
            tracing::debug!(variable = name, "Ignoring user variable shadowed by the writer");
            continue;
        }
        let value = if values.len() == 1 {
            values.remove(0)
        } else {
            TemplateValue::List(values)
        };
        context.insert(name, value);
    }

    tracing::debug!(bytes = source.len(), "Rendering standalone template");
    let template = Template::compile(source)?;
    Ok(template.render(&context)?)
}

/// Template values derived from document metadata.
pub(crate) struct MetaValues {
    pub(crate) title: String,
    pub(crate) date: String,
    pub(crate) authors: Vec<String>,
}

/// Build the template context every writer shares: body, metadata, and
/// the table-of-contents and math flags.
pub(crate) fn base_context(
    options: &WriterOptions,
    body: String,
    meta: MetaValues,
    has_math: bool,
) -> TemplateContext {
    let mut context = TemplateContext::new();
    context.insert("body", TemplateValue::from(body));
    if !meta.title.is_empty() {
        context.insert("title", TemplateValue::from(meta.title));
    }
    if !meta.date.is_empty() {
        context.insert("date", TemplateValue::from(meta.date));
    }
    if !meta.authors.is_empty() {
        let authors = meta.authors.into_iter().map(TemplateValue::from).collect();
        context.insert("author", TemplateValue::List(authors));
    }
    if options.table_of_contents {
        context.insert("toc", TemplateValue::Bool(true));
    }
    if has_math {
        context.insert("math", TemplateValue::Bool(true));
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(template: &str, variables: &[(&str, &str)]) -> WriterOptions {
        WriterOptions {
            standalone: true,
            template: Some(template.to_string()),
            variables: variables
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..WriterOptions::default()
        }
    }

    fn meta() -> MetaValues {
        MetaValues {
            title: String::new(),
            date: String::new(),
            authors: Vec::new(),
        }
    }

    #[test]
    fn test_missing_template() {
        let opts = WriterOptions::default();
        let ctx = TemplateContext::new();
        assert_eq!(
            render_standalone(&opts, ctx),
            Err(WriterError::MissingTemplate)
        );
    }

    #[test]
    fn test_computed_variables_win() {
        let opts = options("$body$|$lang$", &[("body", "user"), ("lang", "en")]);
        let ctx = base_context(&opts, "computed".to_string(), meta(), false);
        assert_eq!(render_standalone(&opts, ctx).unwrap(), "computed|en");
    }

    #[test]
    fn test_repeated_variable_becomes_list() {
        let opts = options("$for(css)$<$css$>$endfor$", &[("css", "a"), ("css", "b")]);
        let ctx = base_context(&opts, String::new(), meta(), false);
        assert_eq!(render_standalone(&opts, ctx).unwrap(), "<a><b>");
    }

    #[test]
    fn test_template_error_is_surfaced() {
        let opts = options("$if(x)$", &[]);
        let ctx = base_context(&opts, String::new(), meta(), false);
        assert!(matches!(
            render_standalone(&opts, ctx),
            Err(WriterError::Template(_))
        ));
    }
}
