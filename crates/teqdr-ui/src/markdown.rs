//! Markdown rendering for interpretation bodies.

use pulldown_cmark::{Event, Options, Parser, html};

/// Render markdown to HTML.
///
/// Raw HTML in the source is escaped and shown as text, never passed
/// through to the webview.
pub fn render_markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// A body ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedBody {
    /// Rich text as HTML.
    Html(String),
    /// Plain text, shown preformatted.
    Plain(String),
}

/// Renders an interpretation, falling back to plain text when rendering
/// produces nothing for a non-blank body.
pub fn render_interpretation(text: &str) -> RenderedBody {
    let html = render_markdown_to_html(text);
    if html.trim().is_empty() && !text.trim().is_empty() {
        tracing::warn!("Markdown rendering produced no output, showing plain text");
        return RenderedBody::Plain(text.to_string());
    }
    RenderedBody::Html(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_bold_and_lists() {
        let html = render_markdown_to_html("## Atrial Fibrillation\n\n**Rate** 110\n\n- one\n- two\n");
        assert!(html.contains("<h2>Atrial Fibrillation</h2>"));
        assert!(html.contains("<strong>Rate</strong>"));
        assert!(html.contains("<ul>"));
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(!html.contains("**"));
    }

    #[test]
    fn test_plain_paragraph() {
        assert_eq!(render_markdown_to_html("Normal ECG."), "<p>Normal ECG.</p>\n");
    }

    #[test]
    fn test_render_interpretation_html() {
        assert_eq!(
            render_interpretation("# LBBB"),
            RenderedBody::Html("<h1>LBBB</h1>\n".to_string())
        );
    }

    #[test]
    fn test_render_interpretation_empty() {
        assert_eq!(render_interpretation(""), RenderedBody::Html(String::new()));
    }

    #[test]
    fn test_render_interpretation_falls_back_to_plain() {
        let text = "[ref]: https://example.org";
        assert_eq!(render_interpretation(text), RenderedBody::Plain(text.to_string()));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let block = render_markdown_to_html("<img src=x onerror=alert(1)>");
        assert!(!block.contains("<img"));
        assert!(block.contains("&lt;img"));

        let inline = render_markdown_to_html("Rate <b>72</b>");
        assert!(!inline.contains("<b>"));
        assert!(inline.contains("&lt;b&gt;72&lt;/b&gt;"));
    }
}
