use std::sync::LazyLock;

use regex::Regex;

/// First-line attribution tag, e.g. `# Source: NHK Easy`.
static SOURCE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:#\s*)?source\s*:\s*(.+)$").expect("source header pattern is valid")
});

/// `\r\n`, `\n` or a lone `\r`.
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\n|\r").expect("line break pattern is valid"));

/// Split a raw corpus file into `(source, body)`.
///
/// Only the first line is inspected for a `source:` header. When present it is
/// removed from the body; an empty declared source falls back to `fallback`.
/// Without a header the whole trimmed text is the body.
pub fn resolve_source_and_text(raw: &str, fallback: &str) -> (String, String) {
    if raw.is_empty() {
        return (fallback.to_string(), String::new());
    }

    let mut lines = LINE_BREAK.split(raw);
    let Some(first) = lines.next() else {
        return (fallback.to_string(), String::new());
    };

    match SOURCE_HEADER.captures(first) {
        Some(caps) => {
            let declared = caps.get(1).map_or("", |m| m.as_str()).trim();
            let source = if declared.is_empty() {
                fallback
            } else {
                declared
            };
            let body = lines.collect::<Vec<_>>().join("\n");
            (source.to_string(), body.trim().to_string())
        }
        None => (fallback.to_string(), raw.trim().to_string()),
    }
}
