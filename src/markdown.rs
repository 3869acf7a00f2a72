//! Restricted markdown formatting for model-generated facts
//!
//! Facts coming back from the analysis service may contain lightweight
//! markup. Only paragraphs and `**bold**` emphasis are honored; links,
//! images, headings and everything else pass through as literal text.
//! This guards against unexpected markup in model output.

/// One inline segment of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Plain text, rendered verbatim
    Text(String),
    /// Bold-emphasized text
    Strong(String),
}

/// A paragraph is an ordered list of inline spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph(pub Vec<Span>);

/// Parse a fact into paragraphs and inline spans.
///
/// Paragraphs are separated by blank lines. Within a paragraph, text
/// between a `**` pair becomes a `Strong` span. An unterminated `**` is
/// kept as literal text, as is an empty `****`.
pub fn parse(text: &str) -> Vec<Paragraph> {
    text.split("\n\n")
        .map(|block| block.trim())
        .filter(|block| !block.is_empty())
        .map(|block| Paragraph(parse_spans(block)))
        .collect()
}

fn parse_spans(block: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut text = String::new();
    let mut rest = block;

    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        match after_open.find("**") {
            Some(close) if close > 0 => {
                text.push_str(&rest[..open]);
                if !text.is_empty() {
                    spans.push(Span::Text(std::mem::take(&mut text)));
                }
                spans.push(Span::Strong(after_open[..close].to_string()));
                rest = &after_open[close + 2..];
            }
            _ => {
                // Unterminated or empty marker stays literal
                text.push_str(&rest[..open + 2]);
                rest = after_open;
            }
        }
    }

    text.push_str(rest);
    if !text.is_empty() {
        spans.push(Span::Text(text));
    }

    spans
}

/// Render a fact to a single plain-text string, bold markers stripped.
///
/// Paragraph breaks collapse to a single newline so a fact stays compact
/// inside its card.
pub fn render_plain(text: &str) -> String {
    render_with(text, |span| match span {
        Span::Text(t) => t.clone(),
        Span::Strong(t) => t.clone(),
    })
}

/// Render a fact with ANSI bold highlighting for `Strong` spans.
pub fn render_ansi(text: &str, bold_on: &str, bold_off: &str) -> String {
    render_with(text, |span| match span {
        Span::Text(t) => t.clone(),
        Span::Strong(t) => format!("{bold_on}{t}{bold_off}"),
    })
}

fn render_with(text: &str, mut render_span: impl FnMut(&Span) -> String) -> String {
    let paragraphs: Vec<String> = parse(text)
        .iter()
        .map(|Paragraph(spans)| spans.iter().map(&mut render_span).collect::<String>())
        .collect();

    paragraphs.join("\n")
}
