use super::cursor::Cursor;
use super::kinds::{Emphasis, Identifier};
use super::types::Span;

/// Parses one payload string into an ordered sequence of [`Span`]s.
///
/// # Precedence
/// Emphasized runs are matched first and are never re-scanned for
/// identifiers; identifier detection applies only to the plain text between
/// them. An unmatched opening marker stays literal text.
///
/// # Guarantee
/// Concatenating the rendered text of all produced spans, in order, equals
/// the payload with only the matched emphasis markers removed. Nothing is
/// dropped or duplicated.
pub fn parse_inline(payload: &str) -> Vec<Span> {
    let mut cur = Cursor::new(payload);
    let mut out = vec![];
    let mut text_start = cur.pos();

    while !cur.eof() {
        let plain_end = cur.pos();
        if let Some(inner) = try_parse_emphasis(&mut cur) {
            flush_plain(&mut out, &payload[text_start..plain_end]);
            out.push(Span::Emphasis(inner));
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_plain(&mut out, &payload[text_start..]);
    out
}

/// Attempts to parse an emphasized run starting at the current position.
///
/// Returns `None` if not at a marker or if the run isn't closed; on failure
/// the cursor position is restored so the marker reads as plain text.
fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<String> {
    if !cur.starts_with(Emphasis::MARKER) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(Emphasis::MARKER.len());
    let inner_start = cur.pos();

    while !cur.eof() && !cur.starts_with(Emphasis::MARKER) {
        cur.bump();
    }

    if !cur.starts_with(Emphasis::MARKER) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }

    let inner = cur.s[inner_start..cur.pos()].to_string();
    cur.bump_n(Emphasis::MARKER.len());
    Some(inner)
}

/// Emits a plain segment as `Text` spans split around `Identifier` matches.
fn flush_plain(out: &mut Vec<Span>, segment: &str) {
    if segment.is_empty() {
        return;
    }

    let mut last = 0;
    for m in Identifier::pattern().find_iter(segment) {
        if m.start() > last {
            out.push(Span::Text(segment[last..m.start()].to_string()));
        }
        out.push(Span::Identifier(m.as_str().to_string()));
        last = m.end();
    }
    if last < segment.len() {
        out.push(Span::Text(segment[last..].to_string()));
    }
}
