//! Minimal SVG document writer on top of quick-xml.
//!
//! Attribute values and text content are escaped by quick-xml.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use heatmap_common::{HeatmapError, HeatmapResult};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Element attributes as `(name, value)` pairs.
pub type Attrs<'a> = [(&'a str, String)];

/// Streams SVG elements into an in-memory buffer.
pub struct SvgWriter {
    writer: Writer<Vec<u8>>,
    depth: usize,
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgWriter {
    pub fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', 2),
            depth: 0,
        }
    }

    /// Open an element; must be matched by [`SvgWriter::end`].
    pub fn start(&mut self, tag: &str, attrs: &Attrs<'_>) -> HeatmapResult<()> {
        self.emit(Event::Start(element(tag, attrs)))?;
        self.depth += 1;
        Ok(())
    }

    pub fn end(&mut self, tag: &str) -> HeatmapResult<()> {
        self.emit(Event::End(BytesEnd::new(tag)))?;
        self.depth = self.depth.saturating_sub(1);
        Ok(())
    }

    /// Write a self-closing element.
    pub fn empty(&mut self, tag: &str, attrs: &Attrs<'_>) -> HeatmapResult<()> {
        self.emit(Event::Empty(element(tag, attrs)))
    }

    /// Write an element containing only text.
    pub fn text(&mut self, tag: &str, attrs: &Attrs<'_>, content: &str) -> HeatmapResult<()> {
        self.emit(Event::Start(element(tag, attrs)))?;
        self.emit(Event::Text(BytesText::new(content)))?;
        self.emit(Event::End(BytesEnd::new(tag)))
    }

    /// Consume the writer, returning the document text.
    pub fn finish(self) -> HeatmapResult<String> {
        if self.depth != 0 {
            return Err(HeatmapError::Render(format!(
                "{} unclosed element(s) in SVG document",
                self.depth
            )));
        }
        String::from_utf8(self.writer.into_inner())
            .map_err(|e| HeatmapError::Render(e.to_string()))
    }

    fn emit(&mut self, event: Event<'_>) -> HeatmapResult<()> {
        self.writer
            .write_event(event)
            .map_err(|e| HeatmapError::Render(e.to_string()))
    }
}

fn element<'a>(tag: &'a str, attrs: &'a Attrs<'a>) -> BytesStart<'a> {
    BytesStart::new(tag).with_attributes(attrs.iter().map(|(k, v)| (*k, v.as_str())))
}

/// Format a coordinate with at most three decimals and no trailing zeros.
pub fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{:.3}", rounded);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    text.to_string()
}

/// `translate(x,y)` transform attribute value.
pub fn translate(x: f64, y: f64) -> String {
    format!("translate({},{})", fmt_num(x), fmt_num(y))
}
