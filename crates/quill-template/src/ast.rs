/*
 * ast.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Compiled template structure.

/// One piece of a compiled template.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateNode {
    Literal(String),
    Variable(VariableRef),
    Conditional(Conditional),
    ForLoop(ForLoop),
}

/// A variable name split at its dots, so `author.name` has two parts.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableRef {
    pub path: Vec<String>,
}

impl VariableRef {
    pub fn parse(dotted: &str) -> Self {
        let path = dotted.split('.').map(String::from).collect();
        VariableRef { path }
    }

    /// Name a `$for$` body uses for the current element.
    pub fn last(&self) -> &str {
        match self.path.as_slice() {
            [.., name] => name,
            [] => "",
        }
    }
}

/// `$if(condition)$ then $else$ otherwise $endif$`; the else part is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    pub condition: VariableRef,
    pub then_branch: Vec<TemplateNode>,
    pub else_branch: Option<Vec<TemplateNode>>,
}

/// `$for(var)$ body $sep$ separator $endfor$`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    pub var: VariableRef,
    pub body: Vec<TemplateNode>,
    pub separator: Option<Vec<TemplateNode>>,
}
