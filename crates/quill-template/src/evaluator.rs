/*
 * evaluator.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Rendering a compiled template against a context.
//!
//! Variables that resolve to nothing print nothing. Loop bindings live in
//! a chain of stack frames, so iterating never copies the context.

use crate::ast::{ForLoop, TemplateNode, VariableRef};
use crate::context::{TemplateContext, TemplateValue};
use crate::error::TemplateResult;
use crate::parser::Template;

impl Template {
    /// Render the template, returning the produced text.
    pub fn render(&self, context: &TemplateContext) -> TemplateResult<String> {
        let mut output = String::new();
        evaluate(self.nodes(), context, &mut output)?;
        Ok(output)
    }
}

/// Render `nodes` against `context`, appending to `output`.
pub fn evaluate(
    nodes: &[TemplateNode],
    context: &TemplateContext,
    output: &mut String,
) -> TemplateResult<()> {
    Scope::Globals(context).render_all(nodes, output)
}

/// The names visible at one point of a render, innermost loop first.
enum Scope<'a> {
    Globals(&'a TemplateContext),
    Loop {
        name: &'a str,
        item: &'a TemplateValue,
        outer: &'a Scope<'a>,
    },
}

impl<'a> Scope<'a> {
    fn resolve(&self, var: &VariableRef) -> Option<&'a TemplateValue> {
        let mut scope = self;
        loop {
            match *scope {
                Scope::Globals(context) => return context.lookup(&var.path),
                Scope::Loop { name, item, outer } => {
                    let (head, fields) = var.path.split_first()?;
                    if head == name || head == "it" {
                        return item.lookup(fields);
                    }
                    scope = outer;
                }
            }
        }
    }

    fn render_all(&self, nodes: &[TemplateNode], output: &mut String) -> TemplateResult<()> {
        nodes.iter().try_for_each(|node| self.render(node, output))
    }

    fn render(&self, node: &TemplateNode, output: &mut String) -> TemplateResult<()> {
        match node {
            TemplateNode::Literal(text) => output.push_str(text),
            TemplateNode::Variable(var) => {
                if let Some(value) = self.resolve(var) {
                    value.write_to(output);
                }
            }
            TemplateNode::Conditional(cond) => {
                let branch = if self.resolve(&cond.condition).is_some_and(TemplateValue::is_truthy) {
                    Some(&cond.then_branch)
                } else {
                    cond.else_branch.as_ref()
                };
                if let Some(nodes) = branch {
                    self.render_all(nodes, output)?;
                }
            }
            TemplateNode::ForLoop(for_loop) => self.render_loop(for_loop, output)?,
        }
        Ok(())
    }

    /// A list iterates its elements; any other truthy value runs the body once.
    fn render_loop(&self, for_loop: &ForLoop, output: &mut String) -> TemplateResult<()> {
        let items: &[TemplateValue] = match self.resolve(&for_loop.var) {
            Some(TemplateValue::List(items)) => items,
            Some(value) if value.is_truthy() => std::slice::from_ref(value),
            _ => &[],
        };
        for (index, item) in items.iter().enumerate() {
            if let Some(separator) = &for_loop.separator {
                if index > 0 {
                    self.render_all(separator, output)?;
                }
            }
            let frame = Scope::Loop {
                name: for_loop.var.last(),
                item,
                outer: self,
            };
            frame.render_all(&for_loop.body, output)?;
        }
        Ok(())
    }
}
