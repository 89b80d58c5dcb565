/*
 * inlines.rs
 * Copyright (c) 2025 Posit, PBC
 */

use quill_ast::{Image, Inline, Link, MathType, QuoteType, Target, normalize_spaces};
use quill_layout::{Doc, hcat};

use super::adjacency::{Piece, insert_escapes};
use super::{ImageRef, RstWriterContext};
use crate::errors::WriterResult;
use crate::utils::escape::escape_rst;
use crate::utils::uri::{escape_uri, unescape_uri};

/// Render a run of inlines. Spaces are normalized and escapes inserted
/// where markup would touch its neighbours.
pub fn render_inlines<'a>(inlines: &'a [Inline], ctx: &mut RstWriterContext<'a>) -> WriterResult<Doc> {
    let pieces: Vec<Piece<'a>> = normalize_spaces(inlines)
        .into_iter()
        .map(Piece::Node)
        .collect();
    let docs = insert_escapes(&pieces)
        .into_iter()
        .map(|piece| match piece {
            Piece::Node(inline) => render_inline(inline, ctx),
            Piece::Escape => Ok(Doc::text("\\ ")),
        })
        .collect::<WriterResult<Vec<_>>>()?;
    Ok(hcat(docs))
}

fn render_inline<'a>(inline: &'a Inline, ctx: &mut RstWriterContext<'a>) -> WriterResult<Doc> {
    ctx.depth.enter()?;
    let result = write_inline(inline, ctx);
    ctx.depth.leave();
    result
}

fn write_inline<'a>(inline: &'a Inline, ctx: &mut RstWriterContext<'a>) -> WriterResult<Doc> {
    let doc = match inline {
        Inline::Str(s) => Doc::text(escape_rst(s)),
        Inline::Emph(content) => wrap("*", render_inlines(content, ctx)?, "*"),
        Inline::Strong(content) => wrap("**", render_inlines(content, ctx)?, "**"),
        Inline::Strikeout(content) => wrap("[STRIKEOUT:", render_inlines(content, ctx)?, "]"),
        Inline::Superscript(content) => wrap(":sup:`", render_inlines(content, ctx)?, "`"),
        Inline::Subscript(content) => wrap(":sub:`", render_inlines(content, ctx)?, "`"),
        Inline::SmallCaps(content) | Inline::Cite(content) => render_inlines(content, ctx)?,
        Inline::Quoted(quoted) => {
            let (open, close) = match quoted.quote_type {
                QuoteType::SingleQuote => ("\u{2018}", "\u{2019}"),
                QuoteType::DoubleQuote => ("\u{201C}", "\u{201D}"),
            };
            wrap(open, render_inlines(&quoted.content, ctx)?, close)
        }
        Inline::Code(code) => Doc::text(format!("``{code}``")),
        Inline::Space => Doc::space(),
        Inline::LineBreak => Doc::cr(),
        Inline::Math(math) => {
            ctx.has_math = true;
            match math.math_type {
                MathType::InlineMath => Doc::text(format!(":math:`${}$`", math.text)),
                MathType::DisplayMath => Doc::text(format!(":math:`$${}$$`", math.text)),
            }
        }
        Inline::RawInline(raw) => {
            if raw.format == "rst" {
                Doc::text(&raw.text)
            } else {
                tracing::debug!(format = %raw.format, "Dropping raw inline");
                Doc::empty()
            }
        }
        Inline::Link(link) => write_link(link, ctx)?,
        Inline::Image(Image { content, target }) => {
            let label = register_image(content, target, None, ctx)?;
            Doc::text(format!("|{label}|"))
        }
        Inline::Note(blocks) => {
            ctx.notes.push(blocks);
            Doc::text(format!(" [{}]_", ctx.notes.len()))
        }
    };
    Ok(doc)
}

fn wrap(open: &str, contents: Doc, close: &str) -> Doc {
    Doc::text(open) + contents + Doc::text(close)
}

fn write_link<'a>(link: &'a Link, ctx: &mut RstWriterContext<'a>) -> WriterResult<Doc> {
    let (url, title) = &link.target;

    match link.content.as_slice() {
        [Inline::Str(s)] if is_autolink(s, url) => {
            let address = url.strip_prefix("mailto:").unwrap_or(url);
            return Ok(Doc::text(unescape_uri(address)));
        }
        [Inline::Image(image)] => {
            let label = register_image(&image.content, &image.target, Some(url.clone()), ctx)?;
            return Ok(Doc::text(format!("|{label}|")));
        }
        _ => {}
    }

    let label = render_inlines(&link.content, ctx)?;
    if !ctx.options.reference_links {
        return Ok(inline_link(label, url));
    }

    let key = label.render(None);
    match ctx.links.get(&key) {
        Some((known_url, known_title)) if known_url == url && known_title == title => {}
        Some(_) => {
            tracing::debug!(label = %key, url = %url, "Link label already bound, using inline link");
            return Ok(inline_link(label, url));
        }
        None => {
            ctx.links.insert(key, (url.clone(), title.clone()));
        }
    }
    Ok(Doc::text("`") + label + Doc::text("`_"))
}

/// Text that is the target itself, possibly behind `mailto:`.
fn is_autolink(text: &str, url: &str) -> bool {
    if url.starts_with("mailto:") {
        escape_uri(&format!("mailto:{text}")) == url
    } else {
        escape_uri(text) == url
    }
}

fn inline_link(label: Doc, url: &str) -> Doc {
    Doc::text("`") + label + Doc::text(format!(" <{url}>`__"))
}

/// Register an image substitution and return its label.
///
/// The label is the rendered alt text. An image reusing a label bound to a
/// different image, or one without alt text, gets a numbered `imageN` label.
fn register_image<'a>(
    alt: &'a [Inline],
    target: &Target,
    link: Option<String>,
    ctx: &mut RstWriterContext<'a>,
) -> WriterResult<String> {
    let image = ImageRef {
        url: target.0.clone(),
        title: target.1.clone(),
        link,
    };
    let label = render_inlines(alt, ctx)?.render(None);

    match ctx.images.get(&label) {
        Some(known) if *known == image => return Ok(label),
        None if !label.is_empty() => {
            ctx.images.insert(label.clone(), image);
            return Ok(label);
        }
        _ => {}
    }

    let mut n = ctx.images.len();
    let mut label = format!("image{n}");
    while ctx.images.contains_key(&label) {
        n += 1;
        label = format!("image{n}");
    }
    tracing::trace!(label = %label, "Using numbered image label");
    ctx.images.insert(label.clone(), image);
    Ok(label)
}
