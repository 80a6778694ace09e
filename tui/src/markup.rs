//! Markup Flattening
//!
//! Page fragments are raw HTML snippets written for a browser. The
//! terminal surface flattens them to plain text: tags become line breaks
//! where they denote structure, list items get a bullet, entities are
//! decoded, and everything else passes through as text. This is not a
//! parser — malformed markup degrades to its literal characters.

/// Longest entity name worth scanning for before giving up.
const MAX_ENTITY_LEN: usize = 10;

/// Flatten an HTML fragment to terminal text.
pub fn flatten(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut i = 0;

    while i < html.len() {
        let c = match html[i..].chars().next() {
            Some(c) => c,
            None => break,
        };
        match c {
            '<' => match html[i + 1..].find('>') {
                Some(end) => {
                    let tag = html[i + 1..i + 1 + end].trim();
                    apply_tag(tag, &mut out);
                    i += 1 + end + 1;
                    // Drop everything inside <script>/<style> blocks.
                    if let Some(close) = raw_text_close(tag) {
                        let after = &html[i..];
                        i += after
                            .to_ascii_lowercase()
                            .find(close)
                            .map(|p| p + close.len())
                            .unwrap_or(after.len());
                    }
                }
                None => {
                    out.push('<');
                    i += 1;
                }
            },
            '&' => {
                let rest = &html[i + 1..];
                let decoded = rest
                    .find(';')
                    .filter(|&p| p <= MAX_ENTITY_LEN)
                    .and_then(|end| decode_entity(&rest[..end]).map(|d| (d, end)));
                match decoded {
                    Some((d, end)) => {
                        out.push(d);
                        i += 1 + end + 1;
                    }
                    None => {
                        out.push('&');
                        i += 1;
                    }
                }
            }
            '\n' | '\r' | '\t' => {
                // Source whitespace is layout noise; structure comes from tags.
                if !out.ends_with([' ', '\n']) && !out.is_empty() {
                    out.push(' ');
                }
                i += 1;
            }
            _ => {
                out.push(c);
                i += c.len_utf8();
            }
        }
    }

    tidy(&out)
}

/// Emit the structural effect of a tag.
fn apply_tag(tag: &str, out: &mut String) {
    let name = tag
        .trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    let closing = tag.starts_with('/');

    match name.as_str() {
        "br" => out.push('\n'),
        "li" if !closing => {
            out.push('\n');
            out.push_str("- ");
        }
        "p" | "div" | "section" | "article" | "blockquote" | "ul" | "ol" | "tr" | "table"
        | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            if closing {
                out.push('\n');
                out.push('\n');
            } else if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
        }
        _ => {}
    }
}

/// For raw-text elements, the closing tag whose content must be skipped.
fn raw_text_close(tag: &str) -> Option<&'static str> {
    let name = tag.split_whitespace().next().unwrap_or("");
    match name.to_ascii_lowercase().as_str() {
        "script" => Some("</script>"),
        "style" => Some("</style>"),
        _ => None,
    }
}

/// Decode a named or numeric entity (without the `&`/`;` delimiters).
fn decode_entity(entity: &str) -> Option<char> {
    match entity.to_ascii_lowercase().as_str() {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" | "ldquo" | "rdquo" | "laquo" | "raquo" => Some('"'),
        "apos" | "lsquo" | "rsquo" => Some('\''),
        "nbsp" => Some(' '),
        "ndash" => Some('-'),
        "mdash" => Some('-'),
        "hellip" => Some('.'),
        "bull" | "middot" => Some('-'),
        _ => decode_numeric_entity(entity),
    }
}

fn decode_numeric_entity(entity: &str) -> Option<char> {
    let digits = entity.strip_prefix('#')?;
    let (digits, radix) = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => (hex, 16),
        None => (digits, 10),
    };
    let value = u32::from_str_radix(digits, radix).ok()?;
    char::from_u32(value)
}

/// Trim trailing space per line and collapse runs of blank lines.
fn tidy(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0usize;
    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }
    out.trim().to_string()
}
