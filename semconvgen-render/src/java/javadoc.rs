//! Markdown inline markup to Javadoc.
//!
//! Only code spans and inline links are converted; everything else,
//! including markup that is already Javadoc or HTML, passes through.

/// Convert `` `code` `` to `{@code code}` and `[text](url)` to
/// `<a href="url">text</a>`.
pub fn markdown_to_javadoc(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut rest = text;

    while let Some(pos) = rest.find(['`', '[']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with('`') {
            match tail[1..].find('`') {
                Some(end) if end > 0 => {
                    out.push_str("{@code ");
                    out.push_str(&tail[1..1 + end]);
                    out.push('}');
                    rest = &tail[end + 2..];
                }
                _ => {
                    out.push('`');
                    rest = &tail[1..];
                }
            }
        } else {
            match parse_link(tail) {
                Some(link) => {
                    out.push_str("<a href=\"");
                    out.push_str(link.url);
                    out.push_str("\">");
                    out.push_str(link.label);
                    out.push_str("</a>");
                    rest = &tail[link.consumed..];
                }
                None => {
                    out.push('[');
                    rest = &tail[1..];
                }
            }
        }
    }

    out.push_str(rest);
    out
}

/// Keep a description from closing the surrounding comment early.
pub fn escape_comment_end(text: &str) -> String {
    text.replace("*/", "*&#47;")
}

struct Link<'a> {
    label: &'a str,
    url: &'a str,
    consumed: usize,
}

/// Parse `[label](url)` at the start of `tail`. Parentheses inside the URL
/// must balance, so `...#getName()` survives.
fn parse_link(tail: &str) -> Option<Link<'_>> {
    let close = tail.find(']')?;
    let label = &tail[1..close];
    if label.contains('[') {
        return None;
    }
    let after = &tail[close + 1..];
    if !after.starts_with('(') {
        return None;
    }

    let mut depth = 0usize;
    for (i, c) in after.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(Link {
                        label,
                        url: &after[1..i],
                        consumed: close + 1 + i + 1,
                    });
                }
            }
            c if c.is_whitespace() => return None,
            _ => {}
        }
    }
    None
}
