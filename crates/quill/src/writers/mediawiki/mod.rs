/*
 * mod.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! MediaWiki writer.
//!
//! Output is built as plain strings: MediaWiki markup is line based and
//! never reflowed, so no layout engine is involved. Blocks are joined by
//! single newlines.
//!
//! # Design decisions
//!
//! - Headings render as `=head<level> <content>`.
//! - Lists use compact `*`/`#`/`;` markup when the whole list is simple
//!   (see [`lists::is_simple_list`]); otherwise the list and everything
//!   under it use HTML tags.
//! - Footnotes become `<ref>` tags and a `<references />` marker is added
//!   after the body when any were written.
//! - Raw content is kept only for the `mediawiki` and `html` formats.

mod lists;
mod table;

pub use lists::is_simple_list;

use quill_ast::{Block, Document, Image, Inline, Inlines, Link, QuoteType, Quoted};

use crate::errors::WriterResult;
use crate::options::WriterOptions;
use crate::utils::escape::escape_xml;
use crate::utils::uri::{escape_uri, is_uri};
use crate::writers::DepthGuard;
use crate::writers::standalone::{MetaValues, base_context, render_standalone};

/// Languages with syntax highlighting support in `<source>` tags.
const HIGHLIGHT_LANGUAGES: &[&str] = &[
    "actionscript", "ada", "apache", "applescript", "asm", "asp", "autoit", "bash",
    "blitzbasic", "bnf", "c", "c_mac", "caddcl", "cadlisp", "cfdg", "cfm", "cpp", "cpp-qt",
    "csharp", "css", "d", "delphi", "diff", "div", "dos", "eiffel", "fortran", "freebasic",
    "gml", "groovy", "html4strict", "idl", "ini", "inno", "io", "java", "java5", "javascript",
    "latex", "lisp", "lua", "matlab", "mirc", "mpasm", "mysql", "nsis", "objc", "ocaml",
    "ocaml-brief", "oobas", "oracle8", "pascal", "perl", "php", "php-brief", "plsql", "python",
    "qbasic", "rails", "reg", "robots", "ruby", "sas", "scheme", "sdlbasic", "smalltalk",
    "smarty", "sql", "tcl", "thinbasic", "tsql", "vb", "vbnet", "vhdl", "visualfoxpro",
    "winbatch", "xml", "xpp", "z80",
];

/// Mutable state for one MediaWiki conversion.
pub struct MediaWikiWriterContext {
    /// A `<ref>` was written; the body needs a references marker.
    notes_seen: bool,
    /// Compact list markers of the enclosing lists, outermost first.
    list_level: String,
    /// Lists are being written with HTML tags.
    use_tags: bool,
    has_math: bool,
    depth: DepthGuard,
}

impl MediaWikiWriterContext {
    pub fn new(options: &WriterOptions) -> Self {
        MediaWikiWriterContext {
            notes_seen: false,
            list_level: String::new(),
            use_tags: false,
            has_math: false,
            depth: DepthGuard::new(options.max_depth),
        }
    }

    pub fn notes_seen(&self) -> bool {
        self.notes_seen
    }

    pub fn has_math(&self) -> bool {
        self.has_math
    }
}

/// Write a document as MediaWiki markup.
pub fn write(doc: &Document, options: &WriterOptions) -> WriterResult<String> {
    let mut ctx = MediaWikiWriterContext::new(options);
    let body = render_blocks(&doc.blocks, &mut ctx)?;
    let main = if ctx.notes_seen {
        body + "\n<references />"
    } else {
        body
    };

    if !options.standalone {
        return Ok(main);
    }

    let meta = MetaValues {
        title: render_inlines(&doc.meta.title, &mut ctx)?,
        date: render_inlines(&doc.meta.date, &mut ctx)?,
        authors: doc
            .meta
            .authors
            .iter()
            .map(|author| render_inlines(author, &mut ctx))
            .collect::<WriterResult<_>>()?,
    };
    let context = base_context(options, main, meta, ctx.has_math);
    render_standalone(options, context)
}

// ============================================================================
// Block writing
// ============================================================================

/// Write blocks, one per line. Blocks that render to nothing are skipped.
pub fn render_blocks(blocks: &[Block], ctx: &mut MediaWikiWriterContext) -> WriterResult<String> {
    let mut parts = Vec::with_capacity(blocks.len());
    for block in blocks {
        let rendered = render_block(block, ctx)?;
        if !rendered.is_empty() {
            parts.push(rendered);
        }
    }
    Ok(parts.join("\n"))
}

/// Write a single block element.
pub fn render_block(block: &Block, ctx: &mut MediaWikiWriterContext) -> WriterResult<String> {
    ctx.depth.enter()?;
    let result = write_block(block, ctx);
    ctx.depth.leave();
    result
}

fn write_block(block: &Block, ctx: &mut MediaWikiWriterContext) -> WriterResult<String> {
    let output = match block {
        Block::Null => String::new(),

        Block::Plain(inlines) => render_inlines(inlines, ctx)?,

        Block::Paragraph(inlines) => match figure_image(inlines) {
            Some((image, caption_title)) => write_figure(image, caption_title, ctx)?,
            None => {
                let contents = render_inlines(inlines, ctx)?;
                if ctx.use_tags {
                    format!("<p>{contents}</p>")
                } else if ctx.list_level.is_empty() {
                    contents + "\n"
                } else {
                    contents
                }
            }
        },

        Block::Header(header) => {
            let contents = render_inlines(&header.content, ctx)?;
            format!("=head{} {}\n", header.level, contents)
        }

        Block::CodeBlock(code) => {
            let classes = &code.attr.1;
            match classes
                .iter()
                .find(|class| HIGHLIGHT_LANGUAGES.contains(&class.as_str()))
            {
                // <source> content is taken literally by MediaWiki
                Some(lang) => format!("<source lang=\"{}\">{}</source>", lang, code.text),
                None if classes.is_empty() => format!("<pre>{}</pre>", escape_xml(&code.text)),
                None => format!(
                    "<pre class=\"{}\">{}</pre>",
                    classes.join(" "),
                    escape_xml(&code.text)
                ),
            }
        }

        Block::BlockQuote(blocks) => {
            format!("<blockquote>{}</blockquote>", render_blocks(blocks, ctx)?)
        }

        Block::HorizontalRule => "\n-----\n".to_string(),

        Block::RawBlock(raw) => {
            if raw.format == "mediawiki" || raw.format == "html" {
                raw.text.clone()
            } else {
                tracing::debug!(format = %raw.format, "Dropping raw block");
                String::new()
            }
        }

        Block::BulletList(_) | Block::OrderedList(_) | Block::DefinitionList(_) => {
            lists::write_list(block, ctx)?
        }

        Block::Table(table) => table::write_table(table, ctx)?,
    };
    Ok(output)
}

/// A paragraph holding only an image whose title starts with `fig:`.
fn figure_image(inlines: &Inlines) -> Option<(&Image, &str)> {
    match inlines.as_slice() {
        [Inline::Image(image)] => image
            .target
            .1
            .strip_prefix("fig:")
            .map(|title| (image, title)),
        _ => None,
    }
}

fn write_figure(
    image: &Image,
    title: &str,
    ctx: &mut MediaWikiWriterContext,
) -> WriterResult<String> {
    let caption = render_inlines(&image.content, ctx)?;
    let options = if image.content.is_empty() {
        String::new()
    } else {
        let alt = if title.is_empty() { caption.as_str() } else { title };
        format!("|alt={alt}|caption {caption}")
    };
    Ok(format!("[[Image:{}|frame|none{}]]\n", image.target.0, options))
}

// ============================================================================
// Inline writing
// ============================================================================

/// Write inlines, concatenated.
pub fn render_inlines(inlines: &[Inline], ctx: &mut MediaWikiWriterContext) -> WriterResult<String> {
    let mut output = String::new();
    for inline in inlines {
        output.push_str(&render_inline(inline, ctx)?);
    }
    Ok(output)
}

/// Write a single inline element.
pub fn render_inline(inline: &Inline, ctx: &mut MediaWikiWriterContext) -> WriterResult<String> {
    ctx.depth.enter()?;
    let result = write_inline(inline, ctx);
    ctx.depth.leave();
    result
}

fn write_inline(inline: &Inline, ctx: &mut MediaWikiWriterContext) -> WriterResult<String> {
    let wrap = |open: &str, contents: String, close: &str| format!("{open}{contents}{close}");
    let output = match inline {
        Inline::Str(s) => escape_xml(s),
        Inline::Space => " ".to_string(),
        Inline::LineBreak => "<br />".to_string(),

        Inline::Emph(content) => wrap("''", render_inlines(content, ctx)?, "''"),
        Inline::Strong(content) => wrap("'''", render_inlines(content, ctx)?, "'''"),
        Inline::Strikeout(content) => wrap("<s>", render_inlines(content, ctx)?, "</s>"),
        Inline::Superscript(content) => wrap("<sup>", render_inlines(content, ctx)?, "</sup>"),
        Inline::Subscript(content) => wrap("<sub>", render_inlines(content, ctx)?, "</sub>"),
        Inline::SmallCaps(content) | Inline::Cite(content) => render_inlines(content, ctx)?,

        Inline::Quoted(Quoted {
            quote_type,
            content,
        }) => {
            let (open, close) = match quote_type {
                QuoteType::SingleQuote => ("\u{2018}", "\u{2019}"),
                QuoteType::DoubleQuote => ("\u{201C}", "\u{201D}"),
            };
            wrap(open, render_inlines(content, ctx)?, close)
        }

        Inline::Code(text) => format!("<tt>{}</tt>", escape_xml(text)),

        // TeX is passed through unescaped
        Inline::Math(math) => {
            ctx.has_math = true;
            format!("<math>{}</math>", math.text)
        }

        Inline::RawInline(raw) => {
            if raw.format == "mediawiki" || raw.format == "html" {
                raw.text.clone()
            } else {
                String::new()
            }
        }

        Inline::Link(link) => write_link(link, ctx)?,

        Inline::Image(Image { content, target }) => {
            let (source, title) = target;
            let text = if !title.is_empty() {
                format!("|{title}")
            } else if !content.is_empty() {
                format!("|{}", render_inlines(content, ctx)?)
            } else {
                String::new()
            };
            format!("[[Image:{source}{text}]]")
        }

        Inline::Note(blocks) => {
            let contents = render_blocks(blocks, ctx)?;
            ctx.notes_seen = true;
            format!("<ref>{contents}</ref>")
        }
    };
    Ok(output)
}

fn write_link(link: &Link, ctx: &mut MediaWikiWriterContext) -> WriterResult<String> {
    let url = &link.target.0;
    // Autolink: the text is the URL itself
    if let [Inline::Str(s)] = link.content.as_slice() {
        if escape_uri(s) == *url {
            return Ok(url.clone());
        }
    }
    let label = render_inlines(&link.content, ctx)?;
    if is_uri(url) {
        Ok(format!("[{url} {label}]"))
    } else {
        // A leading slash marks a link to a help page
        let page = url.strip_prefix('/').unwrap_or(url);
        Ok(format!("[[{page}|{label}]]"))
    }
}
