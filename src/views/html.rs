use std::fmt::Write;

use super::{Template, View, ViewContext, ViewRenderer};
use crate::common::sanitize::escape;
use crate::modules::genre::model::GENRE_LIST_URL;

/// Renders catalog pages as complete HTML documents.
///
/// Genre names are emitted as stored: they were escaped when the form was
/// accepted. Everything else is escaped here.
#[derive(Debug, Default, Clone)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ViewRenderer for HtmlRenderer {
    fn render(&self, view: &View) -> anyhow::Result<String> {
        let ctx = &view.context;
        let mut body = String::new();
        match view.template {
            Template::GenreList => genre_list(&mut body, ctx)?,
            Template::GenreDetail => genre_detail(&mut body, ctx)?,
            Template::GenreForm => genre_form(&mut body, ctx)?,
            Template::GenreDelete => genre_delete(&mut body, ctx)?,
        }
        layout(&ctx.title, &body)
    }
}

fn layout(title: &str, body: &str) -> anyhow::Result<String> {
    let mut out = String::with_capacity(body.len() + 512);
    write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n</head>\n<body>\n\
         <nav><ul>\n<li><a href=\"{list}\">All genres</a></li>\n\
         <li><a href=\"/catalog/genre/create\">Create new genre</a></li>\n</ul></nav>\n\
         <main>\n{body}</main>\n</body>\n</html>\n",
        title = escape(title),
        list = GENRE_LIST_URL,
        body = body,
    )?;
    Ok(out)
}

fn genre_list(out: &mut String, ctx: &ViewContext) -> anyhow::Result<()> {
    writeln!(out, "<h1>{}</h1>", escape(&ctx.title))?;
    writeln!(out, "<ul>")?;
    match ctx.genre_list.as_deref() {
        Some(genres) if !genres.is_empty() => {
            for genre in genres {
                writeln!(out, "<li><a href=\"{}\">{}</a></li>", genre.url(), genre.name)?;
            }
        }
        _ => writeln!(out, "<li>There are no genres.</li>")?,
    }
    writeln!(out, "</ul>")?;
    Ok(())
}

fn genre_detail(out: &mut String, ctx: &ViewContext) -> anyhow::Result<()> {
    let name = ctx.genre.as_ref().map(|g| g.name.as_str()).unwrap_or_default();
    writeln!(out, "<h1>Genre: {}</h1>", name)?;
    writeln!(out, "<div>\n<h4>Books</h4>")?;
    book_list(out, ctx, "This genre has no books.")?;
    writeln!(out, "</div>")?;
    if let Some(url) = ctx.genre.as_ref().and_then(|g| g.url.as_deref()) {
        writeln!(
            out,
            "<hr>\n<p><a href=\"{url}/delete\">Delete genre</a></p>\n<p><a href=\"{url}/update\">Update genre</a></p>"
        )?;
    }
    Ok(())
}

fn genre_form(out: &mut String, ctx: &ViewContext) -> anyhow::Result<()> {
    let name = ctx.genre.as_ref().map(|g| g.name.as_str()).unwrap_or_default();
    writeln!(out, "<h1>{}</h1>", escape(&ctx.title))?;
    writeln!(
        out,
        "<form method=\"POST\" action=\"\">\n<div>\n<label for=\"name\">Genre:</label>\n\
         <input id=\"name\" type=\"text\" placeholder=\"Fantasy, Poetry etc.\" name=\"name\" required value=\"{}\">\n\
         </div>\n<button type=\"submit\">Submit</button>\n</form>",
        name
    )?;
    if !ctx.errors.is_empty() {
        writeln!(out, "<ul class=\"errors\">")?;
        for error in &ctx.errors {
            writeln!(out, "<li>{}</li>", escape(&error.message))?;
        }
        writeln!(out, "</ul>")?;
    }
    Ok(())
}

fn genre_delete(out: &mut String, ctx: &ViewContext) -> anyhow::Result<()> {
    let genre = ctx.genre.as_ref();
    writeln!(out, "<h1>{}: {}</h1>", escape(&ctx.title), genre.map(|g| g.name.as_str()).unwrap_or_default())?;

    let has_books = ctx.genre_books.as_ref().is_some_and(|b| !b.is_empty());
    if has_books {
        writeln!(out, "<p><strong>Delete the following books before attempting to delete this genre.</strong></p>")?;
        writeln!(out, "<div>\n<h4>Books</h4>")?;
        book_list(out, ctx, "")?;
        writeln!(out, "</div>")?;
    } else if let Some(id) = genre.and_then(|g| g.id) {
        writeln!(
            out,
            "<p>Do you really want to delete this Genre?</p>\n<form method=\"POST\" action=\"\">\n\
             <input id=\"genreid\" type=\"hidden\" name=\"genreid\" required value=\"{}\">\n\
             <button type=\"submit\">Delete</button>\n</form>",
            id
        )?;
    }
    Ok(())
}

fn book_list(out: &mut String, ctx: &ViewContext, empty: &str) -> anyhow::Result<()> {
    match ctx.genre_books.as_deref() {
        Some(books) if !books.is_empty() => {
            writeln!(out, "<dl>")?;
            for book in books {
                writeln!(
                    out,
                    "<dt>{}</dt>\n<dd>{}</dd>",
                    escape(&book.title),
                    escape(&book.summary)
                )?;
            }
            writeln!(out, "</dl>")?;
        }
        _ if !empty.is_empty() => writeln!(out, "<p>{}</p>", empty)?,
        _ => {}
    }
    Ok(())
}
