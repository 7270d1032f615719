//! Output sanitization for user-supplied text.
//!
//! The filter works on an allow-list. A tag whose name is on the list is
//! re-emitted with only its permitted attributes, and URL-bearing attributes
//! keep their value only when it uses a safe scheme. Any other tag is written
//! back as text with its angle brackets escaped, so `<script>` renders as
//! `&lt;script&gt;` and never executes. Text between tags is left alone apart
//! from stray `<` and `>`.

/// Neutralize active markup in `input` while keeping plain text intact.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('<') {
        escape_text(&rest[..start], &mut out);
        let candidate = &rest[start..];

        match tag_end(candidate) {
            Some(end) => {
                filter_tag(&candidate[..=end], &mut out);
                rest = &candidate[end + 1..];
            }
            None => {
                out.push_str("&lt;");
                rest = &candidate[1..];
            }
        }
    }

    escape_text(rest, &mut out);
    out
}

/// Attributes permitted on each allowed tag. `None` means the tag is escaped.
fn allowed_attributes(tag: &str) -> Option<&'static [&'static str]> {
    let attributes: &'static [&'static str] = match tag {
        "a" => &["href", "title", "target"],
        "img" => &["src", "alt", "title", "width", "height"],
        "abbr" => &["title"],
        "blockquote" | "q" => &["cite"],
        "del" | "ins" => &["datetime"],
        "b" | "br" | "code" | "div" | "em" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "hr"
        | "i" | "li" | "ol" | "p" | "pre" | "s" | "small" | "span" | "strong" | "sub" | "sup"
        | "u" | "ul" => &[],
        _ => return None,
    };
    Some(attributes)
}

/// Schemes accepted in `href` and `src` values.
const SAFE_URL_PREFIXES: &[&str] = &["http://", "https://", "mailto:", "tel:", "#", "/", "./", "../"];

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attribute(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

/// Find the `>` closing the tag that opens `candidate`.
///
/// Quoted attribute values may contain `>`. Returns `None` when another `<`
/// or the end of input is reached first.
fn tag_end(candidate: &str) -> Option<usize> {
    let bytes = candidate.as_bytes();
    let mut quote: Option<u8> = None;
    let mut after_equals = false;

    for (i, &b) in bytes.iter().enumerate().skip(1) {
        if let Some(q) = quote {
            if b == q {
                quote = None;
            }
            continue;
        }

        match b {
            b'"' | b'\'' if after_equals => quote = Some(b),
            b'>' => return Some(i),
            b'<' => return None,
            _ => {}
        }

        if !b.is_ascii_whitespace() {
            after_equals = b == b'=';
        }
    }

    None
}

fn filter_tag(tag: &str, out: &mut String) {
    let inner = &tag[1..tag.len() - 1];
    let (closing, body) = match inner.strip_prefix('/') {
        Some(body) => (true, body),
        None => (false, inner),
    };

    let name_end = body
        .find(|c: char| c.is_ascii_whitespace() || c == '/')
        .unwrap_or(body.len());
    let name = body[..name_end].to_ascii_lowercase();

    let Some(allowed) = allowed_attributes(&name) else {
        escape_text(tag, out);
        return;
    };

    if closing {
        out.push_str("</");
        out.push_str(&name);
        out.push('>');
        return;
    }

    out.push('<');
    out.push_str(&name);

    for (attribute, value) in parse_attributes(&body[name_end..]) {
        let attribute = attribute.to_ascii_lowercase();
        if !allowed.contains(&attribute.as_str()) {
            continue;
        }

        match value {
            None => {
                out.push(' ');
                out.push_str(&attribute);
            }
            Some(value) => {
                if !is_safe_value(&attribute, value) {
                    continue;
                }
                out.push(' ');
                out.push_str(&attribute);
                out.push_str("=\"");
                escape_attribute(value.trim(), out);
                out.push('"');
            }
        }
    }

    if body.trim_end().ends_with('/') {
        out.push_str(" /");
    }
    out.push('>');
}

fn is_safe_value(attribute: &str, value: &str) -> bool {
    let normalized: String = value
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    if normalized.contains("javascript:") || normalized.contains("vbscript:") {
        return false;
    }

    match attribute {
        "href" | "src" | "cite" => SAFE_URL_PREFIXES
            .iter()
            .any(|prefix| normalized.starts_with(prefix)),
        _ => true,
    }
}

/// Split the attribute section of a tag into `(name, value)` pairs.
fn parse_attributes(section: &str) -> Vec<(&str, Option<&str>)> {
    let bytes = section.as_bytes();
    let len = bytes.len();
    let mut attributes = Vec::new();
    let mut i = 0;

    while i < len {
        while i < len && (bytes[i].is_ascii_whitespace() || bytes[i] == b'/') {
            i += 1;
        }
        if i >= len {
            break;
        }

        let name_start = i;
        while i < len && !bytes[i].is_ascii_whitespace() && bytes[i] != b'=' && bytes[i] != b'/' {
            i += 1;
        }
        let name = &section[name_start..i];

        let mut j = i;
        while j < len && bytes[j].is_ascii_whitespace() {
            j += 1;
        }

        if j < len && bytes[j] == b'=' {
            j += 1;
            while j < len && bytes[j].is_ascii_whitespace() {
                j += 1;
            }

            if j < len && (bytes[j] == b'"' || bytes[j] == b'\'') {
                let quote = bytes[j];
                let start = j + 1;
                let end = bytes[start..]
                    .iter()
                    .position(|&b| b == quote)
                    .map_or(len, |p| start + p);
                attributes.push((name, Some(&section[start..end])));
                i = (end + 1).min(len);
            } else {
                let start = j;
                while j < len && !bytes[j].is_ascii_whitespace() {
                    j += 1;
                }
                attributes.push((name, Some(&section[start..j])));
                i = j;
            }
        } else {
            attributes.push((name, None));
        }
    }

    attributes
}
