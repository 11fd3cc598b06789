//! Markdown for comment bodies
//!
//! Bodies are parsed as CommonMark with `pulldown-cmark` and flattened into
//! styled runs for an egui `LayoutJob`: paragraphs, headings, lists, block
//! quotes, code, emphasis, strikethrough and links. Raw HTML is never
//! interpreted; it is shown as the literal text the author typed.

use eframe::egui::{self, text::LayoutJob, FontId, Stroke, TextFormat, TextStyle};
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Formatting of one run of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanStyle {
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
    pub strikethrough: bool,
    pub link: bool,
    /// Heading level, `0` for body text
    pub heading: u8,
}

/// A run of text with uniform formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

/// Split `source` into styled spans
pub fn parse(source: &str) -> Vec<Span> {
    let mut renderer = Renderer::default();
    for event in Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH) {
        renderer.event(event);
    }
    renderer.finish()
}

#[derive(Default)]
struct Renderer {
    spans: Vec<Span>,
    bold: u32,
    italic: u32,
    strikethrough: u32,
    heading: u8,
    code_block: bool,
    quote_depth: usize,
    /// Next number per open list, `None` for bullet lists
    lists: Vec<Option<u64>>,
    /// Destination and visible text of the open link
    link: Option<(String, String)>,
    /// A list or quote marker was just written; the next block joins its line
    after_marker: bool,
}

impl Renderer {
    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                let style = self.style();
                self.text(&text, style);
            }
            Event::Code(code) => {
                let style = SpanStyle { code: true, ..self.style() };
                self.text(&code, style);
            }
            // shown verbatim, never rendered
            Event::Html(html) | Event::InlineHtml(html) => {
                let style = self.style();
                self.text(&html, style);
            }
            Event::SoftBreak => {
                let style = self.style();
                self.text(" ", style);
            }
            Event::HardBreak => self.newline(),
            Event::Rule => {
                self.block_break();
                self.push("---", SpanStyle::default());
            }
            Event::TaskListMarker(done) => {
                self.push(if done { "[x] " } else { "[ ] " }, SpanStyle::default());
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph | Tag::HtmlBlock => self.block_break(),
            Tag::Heading { level, .. } => {
                self.block_break();
                self.heading = level as u8;
            }
            Tag::CodeBlock(_) => {
                self.block_break();
                self.code_block = true;
            }
            Tag::BlockQuote(_) => {
                self.block_break();
                self.quote_depth += 1;
                self.push("> ", SpanStyle::default());
                self.after_marker = true;
            }
            Tag::List(first) => self.lists.push(first),
            Tag::Item => self.item_marker(),
            Tag::Emphasis => self.italic += 1,
            Tag::Strong => self.bold += 1,
            Tag::Strikethrough => self.strikethrough += 1,
            Tag::Link { dest_url, .. } => self.link = Some((dest_url.to_string(), String::new())),
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => self.heading = 0,
            TagEnd::CodeBlock => self.code_block = false,
            TagEnd::BlockQuote(_) => self.quote_depth = self.quote_depth.saturating_sub(1),
            TagEnd::List(_) => {
                self.lists.pop();
            }
            TagEnd::Emphasis => self.italic = self.italic.saturating_sub(1),
            TagEnd::Strong => self.bold = self.bold.saturating_sub(1),
            TagEnd::Strikethrough => self.strikethrough = self.strikethrough.saturating_sub(1),
            TagEnd::Link => {
                if let Some((dest, text)) = self.link.take() {
                    if !dest.is_empty() && dest != text {
                        self.push(&format!(" ({dest})"), SpanStyle::default());
                    }
                }
            }
            _ => {}
        }
    }

    fn style(&self) -> SpanStyle {
        SpanStyle {
            bold: self.bold > 0,
            italic: self.italic > 0,
            code: self.code_block,
            strikethrough: self.strikethrough > 0,
            link: self.link.is_some(),
            heading: self.heading,
        }
    }

    fn text(&mut self, text: &str, style: SpanStyle) {
        if let Some((_, visible)) = &mut self.link {
            visible.push_str(text);
        }
        if self.code_block || self.quote_depth == 0 || !text.contains('\n') {
            self.push(text, style);
            return;
        }
        // keep the quote prefix on every line of a quoted block
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.push(first, style);
        }
        for line in lines {
            self.newline();
            self.push(line, style);
        }
    }

    fn item_marker(&mut self) {
        self.block_break();
        let depth = self.lists.len().saturating_sub(1);
        let marker = match self.lists.last_mut() {
            Some(Some(number)) => {
                let marker = format!("{number}. ");
                *number += 1;
                marker
            }
            _ => "• ".to_string(),
        };
        self.push(&format!("{}{marker}", "  ".repeat(depth)), SpanStyle::default());
        self.after_marker = true;
    }

    /// Start a new line unless this is the first block
    fn block_break(&mut self) {
        if self.after_marker {
            self.after_marker = false;
            return;
        }
        if !self.spans.is_empty() {
            self.newline();
        }
    }

    fn newline(&mut self) {
        self.push("\n", SpanStyle::default());
        if self.quote_depth > 0 {
            self.push(&"> ".repeat(self.quote_depth), SpanStyle::default());
        }
    }

    fn push(&mut self, text: &str, style: SpanStyle) {
        if text.is_empty() {
            return;
        }
        self.after_marker = false;
        match self.spans.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => self.spans.push(Span {
                text: text.to_string(),
                style,
            }),
        }
    }

    fn finish(mut self) -> Vec<Span> {
        while let Some(last) = self.spans.last_mut() {
            let trimmed = last.text.trim_end_matches('\n').len();
            last.text.truncate(trimmed);
            if !last.text.is_empty() {
                break;
            }
            self.spans.pop();
        }
        self.spans
    }
}

/// Lay out `source` with the current visuals of `ui`
pub fn layout_job(ui: &egui::Ui, source: &str) -> LayoutJob {
    let body_font = TextStyle::Body.resolve(ui.style());
    let code_font = TextStyle::Monospace.resolve(ui.style());
    let visuals = ui.visuals();

    let mut job = LayoutJob::default();
    for span in parse(source) {
        let style = span.style;
        let font_id = if style.code {
            code_font.clone()
        } else if style.heading > 0 {
            FontId::new(body_font.size * heading_scale(style.heading), body_font.family.clone())
        } else {
            body_font.clone()
        };
        let color = if style.link {
            visuals.hyperlink_color
        } else if style.bold || style.heading > 0 {
            visuals.strong_text_color()
        } else {
            visuals.text_color()
        };

        let format = TextFormat {
            font_id,
            color,
            background: if style.code {
                visuals.code_bg_color
            } else {
                egui::Color32::TRANSPARENT
            },
            italics: style.italic,
            underline: if style.link {
                Stroke::new(1.0, color)
            } else {
                Stroke::NONE
            },
            strikethrough: if style.strikethrough {
                Stroke::new(1.0, color)
            } else {
                Stroke::NONE
            },
            ..Default::default()
        };
        job.append(&span.text, 0.0, format);
    }
    job
}

fn heading_scale(level: u8) -> f32 {
    match level {
        1 => 1.6,
        2 => 1.4,
        3 => 1.2,
        _ => 1.1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain(text: &str) -> Span {
        styled(text, SpanStyle::default())
    }

    fn styled(text: &str, style: SpanStyle) -> Span {
        Span {
            text: text.to_string(),
            style,
        }
    }

    const BOLD: SpanStyle = SpanStyle {
        bold: true,
        italic: false,
        code: false,
        strikethrough: false,
        link: false,
        heading: 0,
    };

    #[test]
    fn test_plain_text() {
        assert_eq!(parse("hello"), vec![plain("hello")]);
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_bold_italic_code() {
        assert_eq!(
            parse("a **b** *c* `d`"),
            vec![
                plain("a "),
                styled("b", BOLD),
                plain(" "),
                styled("c", SpanStyle { italic: true, ..Default::default() }),
                plain(" "),
                styled("d", SpanStyle { code: true, ..Default::default() }),
            ]
        );
    }

    #[test]
    fn test_nested_italic_in_bold() {
        assert_eq!(
            parse("**x *y* z**"),
            vec![
                styled("x ", BOLD),
                styled("y", SpanStyle { italic: true, ..BOLD }),
                styled(" z", BOLD),
            ]
        );
    }

    #[test]
    fn test_unmatched_markers_are_literal() {
        assert_eq!(parse("2 * 3 = 6"), vec![plain("2 * 3 = 6")]);
        assert_eq!(parse("**open"), vec![plain("**open")]);
    }

    #[test]
    fn test_heading_then_paragraph() {
        assert_eq!(
            parse("# Title\n\nbody"),
            vec![
                styled("Title", SpanStyle { heading: 1, ..Default::default() }),
                plain("\nbody"),
            ]
        );
    }

    #[test]
    fn test_lists() {
        assert_eq!(parse("- one\n- two"), vec![plain("• one\n• two")]);
        assert_eq!(parse("1. a\n2. b"), vec![plain("1. a\n2. b")]);
        assert_eq!(parse("3. c\n4. d"), vec![plain("3. c\n4. d")]);
    }

    #[test]
    fn test_link_shows_text_and_destination() {
        assert_eq!(
            parse("see [docs](https://example.com)"),
            vec![
                plain("see "),
                styled("docs", SpanStyle { link: true, ..Default::default() }),
                plain(" (https://example.com)"),
            ]
        );
    }

    #[test]
    fn test_block_quote_is_prefixed() {
        assert_eq!(parse("before\n\n> quoted"), vec![plain("before\n> quoted")]);
    }

    #[test]
    fn test_fenced_code_is_literal() {
        assert_eq!(
            parse("```\n**not bold**\n```"),
            vec![styled("**not bold**", SpanStyle { code: true, ..Default::default() })]
        );
    }

    #[test]
    fn test_html_is_not_interpreted() {
        let block = "<script>alert(1)</script>";
        assert_eq!(parse(block), vec![plain(block)]);
        assert_eq!(parse("hi <b>there</b>"), vec![plain("hi <b>there</b>")]);
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(
            parse("héllo *wörld*"),
            vec![plain("héllo "), styled("wörld", SpanStyle { italic: true, ..Default::default() })]
        );
    }
}
