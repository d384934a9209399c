//! Markdown and HTML rendering for health check reports.
//!
//! Status messages may embed the inline markup tags `<strong>` and `<em>`;
//! conversion to Markdown emphasis is literal substring replacement, not
//! an HTML parser, so each tag is replaced independently with no pairing
//! validation and no other tags are recognized or stripped.

use pulldown_cmark::{html, Options, Parser};

use crate::status::Severity;

/// Markdown dialect of a rendered report.
///
/// One flavor selects both the bullet glyph and the emphasis syntax that
/// embedded message markup is converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkdownFlavor {
    /// Standard Markdown: `"- "` bullets, `**strong**`, `*emphasis*`.
    #[default]
    Standard,
    /// Chat-oriented Markdown (Slack and friends): `"• "` bullets,
    /// `*strong*`, `_emphasis_`.
    Chat,
}

impl MarkdownFlavor {
    /// The bullet glyph for list items, including the trailing space.
    pub fn bullet(self) -> &'static str {
        match self {
            MarkdownFlavor::Standard => "- ",
            MarkdownFlavor::Chat => "• ",
        }
    }
}

/// Converts the inline markup tags embedded in a status message to the
/// flavor's emphasis syntax.
pub fn convert_inline_markup(message: &str, flavor: MarkdownFlavor) -> String {
    match flavor {
        MarkdownFlavor::Standard => message
            .replace("<strong>", "**")
            .replace("</strong>", "**")
            .replace("<em>", "*")
            .replace("</em>", "*"),
        MarkdownFlavor::Chat => message
            .replace("<strong>", "*")
            .replace("</strong>", "*")
            .replace("<em>", "_")
            .replace("</em>", "_"),
    }
}

/// Converts Markdown to HTML using pulldown-cmark.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, opts);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Bootstrap alert palette, keyed by severity.
const SEVERITY_COLORS: [(Severity, &str); 3] = [
    (Severity::Success, "5cb85c"),
    (Severity::Warning, "f0ad4e"),
    (Severity::Error, "d9534f"),
];

/// Color-codes the severity word of every result line in converted HTML.
///
/// Matches the literal text `Result: '<Severity>'` as it comes out of the
/// Markdown converter; an occurrence the converter has altered (escaped
/// quotes, split text nodes) is left unhighlighted.
pub fn highlight_severities(html: &str) -> String {
    let mut html = html.to_owned();
    for (severity, color) in SEVERITY_COLORS {
        html = html.replace(
            &format!("Result: '{severity}'"),
            &format!("Result: <span style=\"color: #{color}\">{severity}</span>"),
        );
    }
    html
}
