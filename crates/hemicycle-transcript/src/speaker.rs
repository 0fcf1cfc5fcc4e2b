//! Speaker attribution for transcript paragraphs

use hemicycle_core::Paragraph;
use regex::Regex;
use std::sync::OnceLock;

static HONORIFIC_RE: OnceLock<Regex> = OnceLock::new();

/// `M.`, `Mme` or `Mlle`, then a name running up to the first `. `
fn honorific_re() -> &'static Regex {
    HONORIFIC_RE.get_or_init(|| Regex::new(r"^(?:M\.|Mme|Mlle)\s+[^.]*?\.\s").unwrap())
}

/// Attribute one paragraph.
///
/// In order: the structured `nom`, a name from `known` that prefixes the text
/// and ends at a separator (longest wins), an honorific prefix. Whatever prefix names the speaker is
/// removed from the text along with the punctuation after it.
pub fn attribute(structured: Option<&str>, text: &str, known: &[String]) -> Paragraph {
    let text = text.trim();

    if let Some(name) = structured.map(str::trim).filter(|n| !n.is_empty()) {
        let body = text.strip_prefix(name).map(strip_separator).unwrap_or(text);
        return Paragraph::new(name, body);
    }

    if let Some(name) = known
        .iter()
        .filter(|k| !k.is_empty() && ends_name(text, k))
        .max_by_key(|k| k.len())
    {
        return Paragraph::new(name.as_str(), strip_separator(&text[name.len()..]));
    }

    if let Some(m) = honorific_re().find(text) {
        let name = m.as_str().trim_end().trim_end_matches('.');
        return Paragraph::new(name, text[m.end()..].trim());
    }

    Paragraph::new("", text)
}

/// `name` prefixes `text` and is not the start of a longer name
fn ends_name(text: &str, name: &str) -> bool {
    match text.strip_prefix(name) {
        Some(rest) => rest.is_empty() || rest.starts_with(['.', ',', ':']),
        None => false,
    }
}

fn strip_separator(rest: &str) -> &str {
    rest.trim_start_matches(|c: char| c.is_whitespace() || matches!(c, '.' | ',' | ':' | ';' | '-' | '–'))
        .trim_end()
}
