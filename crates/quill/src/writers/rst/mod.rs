/*
 * mod.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! reStructuredText writer.
//!
//! Blocks and inlines are rendered to [`Doc`] values and laid out once at
//! the end, at the configured wrap width. Footnotes, link targets and image
//! substitutions are collected while walking the body and written after it
//! in encounter order:
//!
//! ```text
//! body
//!
//! .. [1] footnote
//!
//! .. _label: http://example.com
//!
//! .. |image0| image:: picture.png
//! ```

pub mod adjacency;
mod blocks;
mod inlines;
mod table;

pub use blocks::{render_block, render_blocks};
pub use inlines::render_inlines;
pub use table::column_widths_from_fractions;

use indexmap::IndexMap;
use quill_ast::{Blocks, Document, Inline, Target};
use quill_layout::{Doc, vcat, vsep};

use crate::errors::WriterResult;
use crate::options::WriterOptions;
use crate::writers::DepthGuard;
use crate::writers::standalone::{MetaValues, base_context, render_standalone};

/// An image registered for a substitution definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRef {
    pub url: String,
    pub title: String,
    /// Target of a link wrapping the image.
    pub link: Option<String>,
}

/// Mutable state for one reStructuredText conversion.
pub struct RstWriterContext<'a> {
    options: &'a WriterOptions,
    /// Footnote bodies; the footnote number is the position plus one.
    notes: Vec<&'a Blocks>,
    /// Reference link targets keyed by rendered label.
    links: IndexMap<String, Target>,
    /// Image substitutions keyed by label.
    images: IndexMap<String, ImageRef>,
    has_math: bool,
    depth: DepthGuard,
}

impl<'a> RstWriterContext<'a> {
    pub fn new(options: &'a WriterOptions) -> Self {
        RstWriterContext {
            options,
            notes: Vec::new(),
            links: IndexMap::new(),
            images: IndexMap::new(),
            has_math: false,
            depth: DepthGuard::new(options.max_depth),
        }
    }

    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    pub fn links(&self) -> &IndexMap<String, Target> {
        &self.links
    }

    pub fn images(&self) -> &IndexMap<String, ImageRef> {
        &self.images
    }

    pub fn has_math(&self) -> bool {
        self.has_math
    }
}

/// Write a document as reStructuredText.
pub fn write(doc: &Document, options: &WriterOptions) -> WriterResult<String> {
    let mut ctx = RstWriterContext::new(options);
    let width = options.line_width();

    // Metadata comes first so its notes, links and images are numbered
    // and listed along with the body's
    let meta = if options.standalone {
        let title = render_title(&doc.meta.title, &mut ctx)?;
        let date = render_inlines(&doc.meta.date, &mut ctx)?.render(width);
        let authors = doc
            .meta
            .authors
            .iter()
            .map(|author| Ok(render_inlines(author, &mut ctx)?.render(width)))
            .collect::<WriterResult<Vec<_>>>()?;
        Some(MetaValues {
            title: title.render(None),
            date,
            authors,
        })
    } else {
        None
    };

    let body = render_blocks(&doc.blocks, &mut ctx)?;
    // Notes may contain links and images, so they are rendered first
    let notes = render_notes(&mut ctx)?;
    let refs = render_link_references(&ctx);
    let pictures = render_image_references(&ctx);

    let mut main = vsep([body, notes, refs, pictures]).render(width);
    if !main.is_empty() {
        main.push('\n');
    }

    let Some(meta) = meta else {
        return Ok(main);
    };
    let mut context = base_context(options, main, meta, ctx.has_math);
    context.insert("toc-depth", options.toc_depth.to_string().into());
    render_standalone(options, context)
}

/// The document title between `=` rules as wide as the title.
fn render_title<'a>(
    title: &'a [Inline],
    ctx: &mut RstWriterContext<'a>,
) -> WriterResult<Doc> {
    if title.is_empty() {
        return Ok(Doc::empty());
    }
    let contents = render_inlines(title, ctx)?.nowrap();
    let border = Doc::text("=".repeat(contents.offset()));
    Ok(border.clone().above(contents).above(border))
}

/// Footnotes as `.. [N]` entries. Notes found inside notes are appended
/// while rendering and numbered after the others.
fn render_notes(ctx: &mut RstWriterContext) -> WriterResult<Doc> {
    let mut entries = Vec::new();
    let mut index = 0;
    while let Some(note) = ctx.notes.get(index).copied() {
        let contents = render_blocks(note, ctx)?;
        let marker = Doc::text(format!(".. [{}]", index + 1));
        entries.push(marker.above(Doc::nest(3, contents)));
        index += 1;
    }
    Ok(vsep(entries))
}

fn render_link_references(ctx: &RstWriterContext) -> Doc {
    vcat(ctx.links.iter().map(|(label, (url, _))| {
        let label = if label.contains(':') {
            format!("`{label}`")
        } else {
            label.clone()
        };
        Doc::text(format!(".. _{label}: {url}"))
    }))
}

fn render_image_references(ctx: &RstWriterContext) -> Doc {
    vcat(ctx.images.iter().map(|(label, image)| {
        let definition = Doc::text(format!(".. |{}| image:: {}", label, image.url));
        match &image.link {
            Some(target) => definition.above(Doc::text(format!("   :target: {target}"))),
            None => definition,
        }
    }))
}
