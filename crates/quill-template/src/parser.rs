/*
 * parser.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Template parser.
//!
//! Parsing happens in two steps: a scanner splits the source into literal
//! runs and `$...$` directives, then a recursive builder nests the
//! directives into the template AST.

use crate::ast::{Conditional, ForLoop, TemplateNode, VariableRef};
use crate::error::{TemplateError, TemplateResult};

/// A compiled template ready for evaluation.
#[derive(Debug, Clone)]
pub struct Template {
    /// The parsed template AST.
    pub(crate) nodes: Vec<TemplateNode>,
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Text(String),
    Variable(String),
    If(String),
    Else,
    EndIf,
    For(String),
    Sep,
    EndFor,
}

impl Token {
    fn is_control(&self) -> bool {
        !matches!(self, Token::Text(_) | Token::Variable(_))
    }

    fn directive_name(&self) -> &'static str {
        match self {
            Token::Text(_) | Token::Variable(_) => "",
            Token::If(_) => "if",
            Token::Else => "else",
            Token::EndIf => "endif",
            Token::For(_) => "for",
            Token::Sep => "sep",
            Token::EndFor => "endfor",
        }
    }
}

impl Template {
    /// Compile a template from source text.
    pub fn compile(source: &str) -> TemplateResult<Self> {
        let tokens = scan(source)?;
        let mut builder = Builder {
            tokens: tokens.into_iter().peekable(),
        };
        let (nodes, end) = builder.build_until(&[])?;
        if let Some((token, offset)) = end {
            return Err(TemplateError::UnexpectedDirective {
                directive: token.directive_name().to_string(),
                offset,
            });
        }
        Ok(Template { nodes })
    }

    /// The parsed nodes of this template.
    pub fn nodes(&self) -> &[TemplateNode] {
        &self.nodes
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
}

fn parse_name(name: &str, offset: usize) -> TemplateResult<String> {
    if name.is_empty() || !name.chars().all(is_name_char) {
        return Err(TemplateError::Parse {
            message: format!("invalid variable name '{name}'"),
            offset,
        });
    }
    Ok(name.to_string())
}

fn parse_directive(body: &str, offset: usize) -> TemplateResult<Token> {
    let call = |keyword: &str| -> Option<&str> {
        body.strip_prefix(keyword)?
            .strip_prefix('(')?
            .strip_suffix(')')
    };
    let token = match body {
        "else" => Token::Else,
        "endif" => Token::EndIf,
        "sep" => Token::Sep,
        "endfor" => Token::EndFor,
        _ => {
            if let Some(name) = call("if") {
                Token::If(parse_name(name, offset)?)
            } else if let Some(name) = call("for") {
                Token::For(parse_name(name, offset)?)
            } else {
                Token::Variable(parse_name(body, offset)?)
            }
        }
    };
    Ok(token)
}

/// True when only spaces or tabs separate `pos` from the previous newline.
fn starts_line(source: &str, pos: usize) -> bool {
    source[..pos]
        .chars()
        .rev()
        .take_while(|c| *c != '\n')
        .all(|c| c == ' ' || c == '\t')
}

fn scan(source: &str) -> TemplateResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut pos = 0;

    while let Some(rel) = source[pos..].find('$') {
        let start = pos + rel;
        text.push_str(&source[pos..start]);
        let rest = &source[start + 1..];

        if rest.starts_with('$') {
            text.push('$');
            pos = start + 2;
            continue;
        }
        if rest.starts_with("--") {
            pos = match rest.find('\n') {
                Some(nl) => start + 1 + nl + 1,
                None => source.len(),
            };
            continue;
        }

        let Some(close) = rest.find('$') else {
            return Err(TemplateError::Parse {
                message: "unterminated directive".to_string(),
                offset: start,
            });
        };
        let token = parse_directive(&rest[..close], start)?;
        let mut end = start + 1 + close + 1;

        if token.is_control() && starts_line(source, start) {
            let after = &source[end..];
            let newline = if after.starts_with("\r\n") {
                Some(2)
            } else if after.starts_with('\n') {
                Some(1)
            } else if after.is_empty() {
                Some(0)
            } else {
                None
            };
            if let Some(skip) = newline {
                let trimmed = text.trim_end_matches([' ', '\t']).len();
                text.truncate(trimmed);
                end += skip;
            }
        }

        if !text.is_empty() {
            tokens.push((Token::Text(std::mem::take(&mut text)), pos));
        }
        tokens.push((token, start));
        pos = end;
    }

    text.push_str(&source[pos..]);
    if !text.is_empty() {
        tokens.push((Token::Text(text), pos));
    }
    Ok(tokens)
}

struct Builder<I: Iterator<Item = (Token, usize)>> {
    tokens: std::iter::Peekable<I>,
}

impl<I: Iterator<Item = (Token, usize)>> Builder<I> {
    /// Collect nodes until one of the `stops` directives (or the end of
    /// input) is reached. The stop token, if any, is returned with the nodes.
    fn build_until(
        &mut self,
        stops: &[&str],
    ) -> TemplateResult<(Vec<TemplateNode>, Option<(Token, usize)>)> {
        let mut nodes = Vec::new();
        while let Some((token, offset)) = self.tokens.next() {
            match token {
                Token::Text(text) => nodes.push(TemplateNode::Literal(text)),
                Token::Variable(name) => {
                    nodes.push(TemplateNode::Variable(VariableRef::parse(&name)))
                }
                Token::If(name) => nodes.push(self.build_conditional(&name)?),
                Token::For(name) => nodes.push(self.build_for_loop(&name)?),
                other => {
                    if stops.contains(&other.directive_name()) {
                        return Ok((nodes, Some((other, offset))));
                    }
                    return Err(TemplateError::UnexpectedDirective {
                        directive: other.directive_name().to_string(),
                        offset,
                    });
                }
            }
        }
        Ok((nodes, None))
    }

    fn build_conditional(&mut self, name: &str) -> TemplateResult<TemplateNode> {
        let unclosed = || TemplateError::UnclosedDirective {
            directive: "if".to_string(),
        };
        let (then_branch, end) = self.build_until(&["else", "endif"])?;
        let else_branch = match end {
            Some((Token::Else, _)) => {
                let (nodes, end) = self.build_until(&["endif"])?;
                if end.is_none() {
                    return Err(unclosed());
                }
                Some(nodes)
            }
            Some(_) => None,
            None => return Err(unclosed()),
        };
        Ok(TemplateNode::Conditional(Conditional {
            condition: VariableRef::parse(name),
            then_branch,
            else_branch,
        }))
    }

    fn build_for_loop(&mut self, name: &str) -> TemplateResult<TemplateNode> {
        let unclosed = || TemplateError::UnclosedDirective {
            directive: "for".to_string(),
        };
        let (body, end) = self.build_until(&["sep", "endfor"])?;
        let separator = match end {
            Some((Token::Sep, _)) => {
                let (nodes, end) = self.build_until(&["endfor"])?;
                if end.is_none() {
                    return Err(unclosed());
                }
                Some(nodes)
            }
            Some(_) => None,
            None => return Err(unclosed()),
        };
        Ok(TemplateNode::ForLoop(ForLoop {
            var: VariableRef::parse(name),
            body,
            separator,
        }))
    }
}
