//! Markdown to HTML rendering for news content.
//!
//! Rendering is a pure function of the source text, so saving the same source twice always
//! produces the same HTML. `RenderMode::Safe` is used for entry bodies, which must not carry
//! author-supplied markup or script links into the page.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};
use url::Url;

/// Placeholder written in place of raw HTML in safe mode.
pub const HTML_REMOVED: &str = "[HTML_REMOVED]";

/// URL schemes kept on links and images in safe mode. Relative URLs are always kept.
const SAFE_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps", "mailto", "news"];

/// How raw HTML embedded in the markdown source is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Raw HTML is passed through unchanged.
    Standard,
    /// Each run of raw HTML is replaced with `[HTML_REMOVED]`, and link or image
    /// destinations with a scheme outside [`SAFE_SCHEMES`] are emptied.
    Safe,
}

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options
}

/// Renders markdown `source` to HTML.
pub fn render(source: &str, mode: RenderMode) -> String {
    let parser = Parser::new_ext(source, options());
    let mut html_output = String::with_capacity(source.len() * 3 / 2);

    match mode {
        RenderMode::Standard => html::push_html(&mut html_output, parser),
        RenderMode::Safe => html::push_html(&mut html_output, sanitize(parser).into_iter()),
    }

    html_output
}

/// Replaces raw HTML events with the removal placeholder and empties unsafe URLs.
///
/// Consecutive HTML events collapse into one placeholder. HTML blocks at the top level are
/// wrapped in a paragraph so the placeholder still renders as a block.
fn sanitize<'a>(parser: Parser<'a, '_>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut depth = 0usize;
    let mut in_html = false;

    for event in parser {
        match event {
            Event::Html(_) => {
                if in_html {
                    continue;
                }
                in_html = true;
                if depth == 0 {
                    events.push(Event::Start(Tag::Paragraph));
                    events.push(Event::Text(HTML_REMOVED.into()));
                    events.push(Event::End(Tag::Paragraph));
                } else {
                    events.push(Event::Text(HTML_REMOVED.into()));
                }
            }
            other => {
                in_html = false;
                let event = match other {
                    Event::Start(tag) => {
                        depth += 1;
                        Event::Start(sanitize_tag(tag))
                    }
                    Event::End(tag) => {
                        depth = depth.saturating_sub(1);
                        Event::End(sanitize_tag(tag))
                    }
                    other => other,
                };
                events.push(event);
            }
        }
    }

    events
}

fn sanitize_tag(tag: Tag<'_>) -> Tag<'_> {
    match tag {
        Tag::Link(kind, dest, title) => Tag::Link(kind, safe_destination(dest), title),
        Tag::Image(kind, dest, title) => Tag::Image(kind, safe_destination(dest), title),
        other => other,
    }
}

fn safe_destination(dest: CowStr<'_>) -> CowStr<'_> {
    let allowed = match Url::parse(&dest) {
        Ok(url) => SAFE_SCHEMES.contains(&url.scheme()),
        Err(url::ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    };

    if allowed {
        dest
    } else {
        CowStr::Borrowed("")
    }
}
