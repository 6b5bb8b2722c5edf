//! Markup removal.
//!
//! HTML is rendered as plain text with no decoration:
//! - images are replaced by their `alt` text,
//! - links keep their text, targets are dropped,
//! - emphasis markers and table borders are dropped,
//! - lines are not wrapped.
use std::io::Cursor;

use html2text::render::TrivialDecorator;
use log::warn;

/// Minimum width given to the renderer.
const MIN_RENDER_WIDTH: usize = 80;

/// Convert `html` to plain text, paragraphs separated by `\n`.
///
/// Falls back to `html` itself if rendering fails.
pub fn to_text(html: &str) -> String {
    // no rendered line can be longer than the input itself, so nothing gets wrapped
    let width = html.len().max(MIN_RENDER_WIDTH);
    let rendered = html2text::config::with_decorator(TrivialDecorator::new())
        .raw_mode(true)
        .no_table_borders()
        .string_from_read(Cursor::new(html.as_bytes()), width);

    match rendered {
        Ok(text) => text,
        Err(e) => {
            warn!("could not render html: {e:?}");
            html.to_string()
        }
    }
}
