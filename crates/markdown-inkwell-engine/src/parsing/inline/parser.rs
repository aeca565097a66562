use super::{
    cursor::Cursor,
    kinds::{Bold, CodeSpan, Italic, Link},
    types::Span,
};

/// Tokenizes one line into a sequence of [`Span`]s.
///
/// Never fails: anything that does not form a complete construct is emitted
/// as [`Span::Plain`]. Adjacent plain text is merged into a single span, and
/// the concatenated [`Span::raw`] texts equal `line`.
///
/// # Star runs
/// A bold opener must be followed by a non-`*` character, so in `***x***`
/// the first star is plain, `**x**` is bold and the last star is plain. A
/// `**` position never opens an italic.
pub fn tokenize(line: &str) -> Vec<Span> {
    let mut cur = Cursor::new(line);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Plain span
    fn flush_text(out: &mut Vec<Span>, line: &str, start: usize, end: usize) {
        if end > start {
            out.push(Span::Plain(line[start..end].to_string()));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        let parsed = try_parse_bold(&mut cur)
            .or_else(|| try_parse_italic(&mut cur))
            .or_else(|| try_parse_link(&mut cur))
            .or_else(|| try_parse_code_span(&mut cur));

        if let Some(span) = parsed {
            flush_text(&mut out, line, text_start, start);
            out.push(span);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, line, text_start, cur.pos());
    out
}

/// Attempts to parse `**text**` at the current position.
///
/// The content runs up to the next `**` and must be non-empty.
fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<Span> {
    if !cur.starts_with(Bold::DELIM) {
        return None;
    }
    let open = Bold::DELIM.len();
    if cur.peek_at(open) == Some(Italic::DELIM) {
        return None;
    }

    let close = cur.find_from(open, Bold::DELIM)?;
    if close == open {
        return None;
    }
    let text = cur.slice_ahead(open, close).to_string();
    cur.bump_n(close + Bold::DELIM.len());
    Some(Span::Bold(text))
}

/// Attempts to parse `*text*` at the current position.
///
/// Never matches where a `**` starts, so a failed bold opener is not
/// re-read as an empty italic.
fn try_parse_italic(cur: &mut Cursor<'_>) -> Option<Span> {
    if cur.peek() != Some(Italic::DELIM) || cur.starts_with(Bold::DELIM) {
        return None;
    }

    let close = cur.find_from(1, &[Italic::DELIM])?;
    if close == 1 {
        return None;
    }
    let text = cur.slice_ahead(1, close).to_string();
    cur.bump_n(close + 1);
    Some(Span::Italic(text))
}

/// Attempts to parse `[text](url)` at the current position.
///
/// Both parts must be non-empty and `(` must directly follow `]`.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<Span> {
    if cur.peek() != Some(Link::TEXT_OPEN) {
        return None;
    }

    let text_end = cur.find_from(1, &[Link::TEXT_CLOSE])?;
    if text_end == 1 {
        return None;
    }
    let url_open = text_end + 1;
    if cur.peek_at(url_open) != Some(Link::URL_OPEN) {
        return None;
    }
    let url_end = cur.find_from(url_open + 1, &[Link::URL_CLOSE])?;
    if url_end == url_open + 1 {
        return None;
    }

    let text = cur.slice_ahead(1, text_end).to_string();
    let url = cur.slice_ahead(url_open + 1, url_end).to_string();
    cur.bump_n(url_end + 1);
    Some(Span::Link { text, url })
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick, if the span isn't closed, or if it
/// is empty.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<Span> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let close = cur.find_from(1, &[CodeSpan::TICK])?;
    if close == 1 {
        return None;
    }
    let code = cur.slice_ahead(1, close).to_string();
    cur.bump_n(close + 1);
    Some(Span::Code(code))
}
