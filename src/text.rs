//! HTML to text conversion for filing documents.
//!
//! Filing primary documents are (inline XBRL) HTML. [`TextConverter`] is the seam
//! used by `FilingOperations::fetch_filing_text_with`; [`HtmlTextConverter`] is the
//! default, producing lightly formatted markdown-style text: `#` headings, `- `
//! list items and ` | `-separated table cells.

use scraper::node::Node;
use scraper::{ElementRef, Html};

/// Converts an HTML document into readable text.
pub trait TextConverter: Send + Sync {
    fn convert(&self, html: &str) -> String;
}

impl<F> TextConverter for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn convert(&self, html: &str) -> String {
        self(html)
    }
}

/// Default converter built on `scraper`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTextConverter;

impl TextConverter for HtmlTextConverter {
    fn convert(&self, html: &str) -> String {
        let document = Html::parse_document(html);
        let mut writer = TextWriter::default();
        writer.walk(document.root_element());
        writer.finish()
    }
}

const SKIPPED: &[&str] = &[
    "head", "script", "style", "noscript", "template", "title", "ix:header",
];

const BLOCKS: &[&str] = &[
    "address", "article", "aside", "blockquote", "center", "dd", "div", "dl", "dt",
    "figcaption", "figure", "footer", "form", "header", "hr", "main", "nav", "ol", "p", "pre",
    "section", "table", "tbody", "thead", "tfoot", "ul",
];

#[derive(Default)]
struct TextWriter {
    out: String,
    pending_space: bool,
    cell_index: usize,
}

impl TextWriter {
    fn walk(&mut self, element: ElementRef<'_>) {
        let name = element.value().name();
        if SKIPPED.contains(&name) || is_hidden(element) {
            return;
        }

        match name {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = name[1..].parse::<usize>().unwrap_or(1);
                self.paragraph_break();
                self.out.push_str(&"#".repeat(level));
                self.out.push(' ');
                self.pending_space = false;
                self.walk_children(element);
                self.paragraph_break();
            }
            "br" => {
                self.out.push('\n');
                self.pending_space = false;
            }
            "li" => {
                self.line_break();
                self.out.push_str("- ");
                self.pending_space = false;
                self.walk_children(element);
                self.line_break();
            }
            "tr" => {
                self.line_break();
                self.cell_index = 0;
                self.walk_children(element);
                self.line_break();
            }
            "td" | "th" => {
                if self.cell_index > 0 {
                    self.out.push_str(" | ");
                    self.pending_space = false;
                }
                self.cell_index += 1;
                self.walk_children(element);
            }
            "p" | "table" | "blockquote" | "pre" => {
                self.paragraph_break();
                self.walk_children(element);
                self.paragraph_break();
            }
            _ if BLOCKS.contains(&name) => {
                self.line_break();
                self.walk_children(element);
                self.line_break();
            }
            _ => self.walk_children(element),
        }
    }

    fn walk_children(&mut self, element: ElementRef<'_>) {
        for child in element.children() {
            match child.value() {
                Node::Text(text) => self.text(text),
                Node::Element(_) => {
                    if let Some(child) = ElementRef::wrap(child) {
                        self.walk(child);
                    }
                }
                _ => {}
            }
        }
    }

    fn text(&mut self, text: &str) {
        let mut words = text.split_whitespace().peekable();
        if words.peek().is_none() {
            if !text.is_empty() {
                self.pending_space = true;
            }
            return;
        }
        if text.starts_with(char::is_whitespace) {
            self.pending_space = true;
        }
        for (i, word) in words.enumerate() {
            if (i > 0 || self.pending_space) && !self.at_line_start() && !self.out.ends_with(' ') {
                self.out.push(' ');
            }
            self.out.push_str(word);
        }
        self.pending_space = text.ends_with(char::is_whitespace);
    }

    fn at_line_start(&self) -> bool {
        self.out.is_empty() || self.out.ends_with('\n')
    }

    fn line_break(&mut self) {
        if !self.at_line_start() {
            self.out.push('\n');
        }
        self.pending_space = false;
    }

    fn paragraph_break(&mut self) {
        self.line_break();
        if !self.out.is_empty() && !self.out.ends_with("\n\n") {
            self.out.push('\n');
        }
    }

    fn finish(self) -> String {
        let mut result = String::with_capacity(self.out.len());
        let mut newlines = 0;
        for line in self.out.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                newlines += 1;
                continue;
            }
            if !result.is_empty() {
                result.push_str(if newlines > 0 { "\n\n" } else { "\n" });
            }
            newlines = 0;
            result.push_str(line);
        }
        result
    }
}

/// Inline XBRL documents hide their metadata blocks with `display:none`.
fn is_hidden(element: ElementRef<'_>) -> bool {
    element
        .value()
        .attr("style")
        .map(|style| style.replace(' ', "").to_lowercase().contains("display:none"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(html: &str) -> String {
        HtmlTextConverter.convert(html)
    }

    #[test]
    fn test_headings_and_paragraphs() {
        let html = "<html><head><title>ignored</title></head><body>\
                    <h2>Item 7. Management's Discussion</h2>\
                    <p>Net sales   increased\n by <b>2%</b>.</p><p>Second.</p></body></html>";
        assert_eq!(
            convert(html),
            "## Item 7. Management's Discussion\n\nNet sales increased by 2%.\n\nSecond."
        );
    }

    #[test]
    fn test_inline_elements_keep_word_boundaries() {
        assert_eq!(convert("<p>Apple<span>Inc</span> and <i>more</i></p>"), "AppleInc and more");
    }

    #[test]
    fn test_skips_scripts_and_hidden_blocks() {
        let html = "<body><script>var x = 1;</script>\
                    <div style=\"display: none\"><ix:header>dei data</ix:header></div>\
                    <div>Visible</div></body>";
        assert_eq!(convert(html), "Visible");
    }

    #[test]
    fn test_tables_and_lists() {
        let html = "<body><table><tr><th>Year</th><th>Revenue</th></tr>\
                    <tr><td>2024</td><td>391,035</td></tr></table>\
                    <ul><li>One</li><li>Two</li></ul></body>";
        assert_eq!(
            convert(html),
            "Year | Revenue\n2024 | 391,035\n\n- One\n- Two"
        );
    }

    #[test]
    fn test_closure_converter() {
        let upper = |html: &str| html.to_uppercase();
        assert_eq!(TextConverter::convert(&upper, "<p>x</p>"), "<P>X</P>");
    }
}
