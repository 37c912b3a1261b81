//! Line folding for rendered YAML.
//!
//! The emitter writes every scalar on a single line. This pass refolds plain
//! and single-quoted scalars that run past the line width: it breaks at single
//! spaces and indents continuation lines under their key, which a YAML reader
//! folds back into the same one-line value. Double-quoted scalars, flow
//! collections and block scalars are left as emitted.

/// Characters that must not open a continuation line of a plain scalar.
const INDICATORS: &[u8] = b"#-?:,[]{}&*!|>'\"%@`";

/// The part of a line in front of its scalar value, and the value itself.
#[derive(Debug, PartialEq, Eq)]
struct Entry<'a> {
    head: &'a str,
    value: &'a str,
    /// Column of the key, or of the last `- ` when the value is a bare
    /// sequence item. Continuation lines are indented past it.
    base: usize,
}

#[derive(Debug, PartialEq, Eq)]
enum Style {
    Plain,
    SingleQuoted,
    Block,
    Verbatim,
}

fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Byte length of the quoted scalar at the start of `text`, quotes included.
fn quoted_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let quote = *bytes.first()?;
    let mut i = 1;
    while i < bytes.len() {
        match (quote, bytes[i]) {
            (b'\'', b'\'') if bytes.get(i + 1) == Some(&b'\'') => i += 2,
            (b'"', b'\\') => i += 2,
            (q, b) if q == b => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}

/// Byte offset of the `:` that ends a mapping key at the start of `rest`.
fn key_end(rest: &str) -> Option<usize> {
    let end = match rest.as_bytes().first()? {
        b'\'' | b'"' => quoted_len(rest)?,
        _ => {
            return rest
                .find(": ")
                .or_else(|| rest.ends_with(':').then(|| rest.len() - 1))
        }
    };
    let after = &rest[end..];
    (after == ":" || after.starts_with(": ")).then_some(end)
}

fn parse_entry(line: &str) -> Option<Entry<'_>> {
    let mut pos = leading_spaces(line);
    let mut base = pos;
    let mut in_sequence = false;
    while line[pos..].starts_with("- ") {
        base = pos;
        pos += 2;
        in_sequence = true;
    }
    let rest = &line[pos..];
    match key_end(rest) {
        Some(end) => {
            let value_at = (pos + end + 2).min(line.len());
            Some(Entry {
                head: &line[..value_at],
                value: &line[value_at..],
                base: pos,
            })
        }
        None if in_sequence => Some(Entry {
            head: &line[..pos],
            value: rest,
            base,
        }),
        None => None,
    }
}

fn style(value: &str) -> Style {
    match value.as_bytes().first() {
        None => Style::Verbatim,
        Some(b'|' | b'>') => Style::Block,
        Some(b'\'') if quoted_len(value) == Some(value.len()) => Style::SingleQuoted,
        Some(b'\'' | b'"' | b'[' | b'{' | b'&' | b'*' | b'!') => Style::Verbatim,
        Some(_) => Style::Plain,
    }
}

/// Split `value` at the spaces where a line break may go: single spaces with
/// text on both sides, never next to the quotes of a quoted scalar and never
/// in front of an indicator character in a plain scalar.
fn segments(value: &str, plain: bool) -> Vec<&str> {
    let bytes = value.as_bytes();
    let (lo, hi) = if plain {
        (1, bytes.len().saturating_sub(1))
    } else {
        (2, bytes.len().saturating_sub(2))
    };
    let mut pieces = Vec::new();
    let mut start = 0;
    for i in lo..hi {
        let breakable = bytes[i] == b' '
            && bytes[i - 1] != b' '
            && bytes[i + 1] != b' '
            && !(plain && INDICATORS.contains(&bytes[i + 1]));
        if breakable {
            pieces.push(&value[start..i]);
            start = i + 1;
        }
    }
    pieces.push(&value[start..]);
    pieces
}

fn fold_entry(entry: &Entry<'_>, plain: bool, width: usize, out: &mut String) {
    let pieces = segments(entry.value, plain);
    let indent = " ".repeat(entry.base + 2);

    let mut line = format!("{}{}", entry.head, pieces[0]);
    let mut line_width = line.chars().count();
    for piece in &pieces[1..] {
        let piece_width = piece.chars().count();
        if line_width + 1 + piece_width <= width {
            line.push(' ');
            line.push_str(piece);
            line_width += 1 + piece_width;
        } else {
            out.push_str(&line);
            out.push('\n');
            line = format!("{indent}{piece}");
            line_width = indent.len() + piece_width;
        }
    }
    out.push_str(&line);
}

/// Refold every scalar line of `text` longer than `width` columns.
pub fn fold_long_lines(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    // Set while inside a block scalar: the column its content is nested under.
    let mut block_base: Option<usize> = None;

    for raw in text.split_inclusive('\n') {
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let newline = &raw[line.len()..];

        if let Some(base) = block_base {
            if line.trim().is_empty() || leading_spaces(line) > base {
                out.push_str(raw);
                continue;
            }
            block_base = None;
        }

        let Some(entry) = parse_entry(line) else {
            out.push_str(raw);
            continue;
        };
        match style(entry.value) {
            Style::Block => {
                block_base = Some(entry.base);
                out.push_str(raw);
            }
            plain_or_quoted @ (Style::Plain | Style::SingleQuoted)
                if line.chars().count() > width =>
            {
                fold_entry(&entry, plain_or_quoted == Style::Plain, width, &mut out);
                out.push_str(newline);
            }
            _ => out.push_str(raw),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
