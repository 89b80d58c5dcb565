/*
 * test_standalone.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Templates shaped like the ones writers use for standalone output.

use pretty_assertions::assert_eq;
use quill_template::{Template, TemplateContext, TemplateError, TemplateValue};

const RST_TEMPLATE: &str = "\
$if(title)$
$title$

$endif$
$for(author)$
:Author: $author$
$endfor$
$if(date)$
:Date: $date$
$endif$
$if(math)$

.. role:: math(raw)
   :format: html latex
$endif$
$if(toc)$

.. contents::
   :depth: $toc-depth$

$endif$
$body$
";

fn context(title: Option<&str>) -> TemplateContext {
    let mut ctx = TemplateContext::new();
    if let Some(title) = title {
        ctx.insert("title", TemplateValue::from(title));
    }
    ctx.insert(
        "author",
        TemplateValue::List(vec![TemplateValue::from("Ann"), TemplateValue::from("Bob")]),
    );
    ctx.insert("body", TemplateValue::from("Body text."));
    ctx
}

#[test]
fn renders_full_preamble() {
    let template = Template::compile(RST_TEMPLATE).unwrap();
    let mut ctx = context(Some("=====\nTitle\n====="));
    ctx.insert("date", TemplateValue::from("2025"));
    ctx.insert("toc", TemplateValue::Bool(true));
    ctx.insert("toc-depth", TemplateValue::from("3"));
    let expected = "\
=====
Title
=====

:Author: Ann
:Author: Bob
:Date: 2025

.. contents::
   :depth: 3

Body text.
";
    assert_eq!(template.render(&ctx).unwrap(), expected);
}

#[test]
fn omits_missing_sections() {
    let template = Template::compile(RST_TEMPLATE).unwrap();
    let mut ctx = context(None);
    ctx.insert("math", TemplateValue::Bool(true));
    let expected = "\
:Author: Ann
:Author: Bob

.. role:: math(raw)
   :format: html latex
Body text.
";
    assert_eq!(template.render(&ctx).unwrap(), expected);
}

#[test]
fn reports_unclosed_loop() {
    let err = Template::compile("$for(author)$\n$author$\n").unwrap_err();
    assert_eq!(
        err,
        TemplateError::UnclosedDirective {
            directive: "for".to_string()
        }
    );
    assert_eq!(err.to_string(), "Unclosed $for$ directive");
}
