// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Markdown to HTML conversion for descriptions.
//!
//! Converters are trusted collaborators: their output is inserted into the
//! rendered page verbatim. [`InlineMarkdown`] covers the subset used in
//! manifest descriptions (paragraphs, inline code, links, bold, italic) and
//! escapes everything else.
use std::sync::LazyLock;

use regex::{Captures, Regex};

static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid code span pattern"));
static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").expect("valid link pattern")
});
static STRONG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid strong pattern"));
static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\s][^*]*)\*").expect("valid emphasis pattern"));
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n").expect("valid paragraph pattern"));

/// Converts markdown text to an HTML fragment.
pub trait MarkdownRenderer {
    /// Returns HTML for `markdown`. Empty input yields an empty string.
    fn to_html(&self, markdown: &str) -> String;
}

/// Default converter for description text.
///
/// # Example
///
/// ```
/// use wcdox::{InlineMarkdown, MarkdownRenderer};
///
/// let html = InlineMarkdown.to_html("Use `open` to **expand**.");
/// assert_eq!(html, "<p>Use <code>open</code> to <strong>expand</strong>.</p>");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineMarkdown;

impl MarkdownRenderer for InlineMarkdown {
    fn to_html(&self, markdown: &str) -> String {
        let normalized = markdown.replace("\r\n", "\n");

        PARAGRAPH_BREAK
            .split(normalized.trim())
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
            .map(|paragraph| format!("<p>{}</p>", render_inline(paragraph)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn render_inline(text: &str) -> String {
    let mut html = String::with_capacity(text.len());
    let mut last = 0;

    for span in CODE_SPAN.captures_iter(text) {
        let (Some(whole), Some(code)) = (span.get(0), span.get(1)) else {
            continue;
        };
        html.push_str(&render_text(&text[last..whole.start()]));
        html.push_str("<code>");
        html.push_str(&escape_html(code.as_str()));
        html.push_str("</code>");
        last = whole.end();
    }

    html.push_str(&render_text(&text[last..]));
    html
}

fn render_text(text: &str) -> String {
    let escaped = escape_html(text);
    let linked = LINK.replace_all(&escaped, |caps: &Captures| {
        format!("<a href=\"{}\">{}</a>", &caps[2], &caps[1])
    });
    let strong = STRONG.replace_all(&linked, "<strong>$1</strong>");
    EMPHASIS.replace_all(&strong, "<em>$1</em>").into_owned()
}

/// Escapes text for inclusion in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(InlineMarkdown.to_html(""), "");
        assert_eq!(InlineMarkdown.to_html("  \n\n  "), "");
    }

    #[test]
    fn blank_lines_split_paragraphs() {
        let html = InlineMarkdown.to_html("First line.\n\nSecond line.");
        assert_eq!(html, "<p>First line.</p>\n<p>Second line.</p>");
    }

    #[test]
    fn links_are_converted() {
        let html = InlineMarkdown.to_html(
            "The following [CSS shadow parts](https://developer.mozilla.org/en-US/docs/Web/CSS/CSS_shadow_parts) are available:"
        );
        assert_eq!(
            html,
            "<p>The following <a href=\"https://developer.mozilla.org/en-US/docs/Web/CSS/CSS_shadow_parts\">CSS shadow parts</a> are available:</p>"
        );
    }

    #[test]
    fn code_spans_are_not_formatted() {
        let html = InlineMarkdown.to_html("`**raw** <b>` and *soft*");
        assert_eq!(
            html,
            "<p><code>**raw** &lt;b&gt;</code> and <em>soft</em></p>"
        );
    }

    #[test]
    fn raw_html_is_escaped() {
        let html = InlineMarkdown.to_html("<script>alert('x')</script>");
        assert_eq!(
            html,
            "<p>&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;</p>"
        );
    }

    #[test]
    fn escape_html_handles_special_characters() {
        assert_eq!(escape_html("a & \"b\""), "a &amp; &quot;b&quot;");
    }
}
