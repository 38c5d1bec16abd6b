//! SVG serialization (layout → SVG string)

use crate::error::FormatError;
use crate::format::RenderOptions;
use crate::layout::metrics::line_height;
use crate::layout::{layout_diagram, NoteLayout, Rect, RowLayout, SignalLayout};
use crate::theme::Theme;
use seqd_parser::{ArrowHead, Diagram, LineStyle};

/// Render a diagram into a standalone SVG document.
pub fn serialize_to_svg(diagram: &Diagram, options: &RenderOptions) -> Result<String, FormatError> {
    let layout = layout_diagram(diagram, &options.theme, &options.layout);
    let mut writer = SvgWriter {
        out: String::new(),
        theme: &options.theme,
    };
    writer.document(&layout);
    Ok(writer.out)
}

/// Baseline offset from the top of a line slot, as a fraction of the font
/// size.
const BASELINE_RATIO: f64 = 0.8;

struct SvgWriter<'a> {
    out: String,
    theme: &'a Theme,
}

impl SvgWriter<'_> {
    fn document(&mut self, layout: &crate::layout::DiagramLayout) {
        self.out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
             viewBox=\"0 0 {} {}\" font-family=\"{}\">\n",
            layout.width,
            layout.height,
            layout.width,
            layout.height,
            escape_xml(&self.theme.font_family),
        ));
        self.defs();
        self.out.push_str(&format!(
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
            layout.width,
            layout.height,
            escape_xml(&self.theme.background),
        ));

        if let Some(title) = &layout.title {
            self.text_line(
                &title.text,
                title.center_x,
                title.top + self.theme.title_font_size * BASELINE_RATIO,
                self.theme.title_font_size,
                "middle",
            );
        }

        for actor in &layout.actors {
            self.out.push_str(&format!(
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\" \
                 stroke-dasharray=\"4,4\"/>\n",
                actor.lifeline_x,
                actor.lifeline_top,
                actor.lifeline_x,
                actor.lifeline_bottom,
                escape_xml(&self.theme.stroke),
                self.theme.stroke_width,
            ));
            self.actor_box(&actor.top_box, &actor.label);
            self.actor_box(&actor.bottom_box, &actor.label);
        }

        for row in &layout.rows {
            match row {
                RowLayout::Signal(signal) => self.signal(signal),
                RowLayout::Note(note) => self.note(note),
            }
        }

        self.out.push_str("</svg>\n");
    }

    /// Arrowhead markers, sized in user space so stroke width does not
    /// scale them.
    fn defs(&mut self) {
        let stroke = escape_xml(&self.theme.stroke);
        self.out.push_str(&format!(
            "<defs>\n\
             <marker id=\"head-filled\" markerWidth=\"10\" markerHeight=\"8\" refX=\"10\" \
             refY=\"4\" orient=\"auto\" markerUnits=\"userSpaceOnUse\">\
             <path d=\"M 0 0 L 10 4 L 0 8 z\" fill=\"{stroke}\"/></marker>\n\
             <marker id=\"head-open\" markerWidth=\"10\" markerHeight=\"8\" refX=\"10\" \
             refY=\"4\" orient=\"auto\" markerUnits=\"userSpaceOnUse\">\
             <path d=\"M 0 0 L 10 4 L 0 8\" fill=\"none\" stroke=\"{stroke}\" \
             stroke-width=\"1.5\"/></marker>\n\
             </defs>\n"
        ));
    }

    fn actor_box(&mut self, rect: &Rect, label: &str) {
        let fill = &self.theme.actor_fill;
        self.rect(rect, fill);
        self.text_line(
            label,
            rect.center_x(),
            rect.center_y() + self.theme.font_size * 0.35,
            self.theme.font_size,
            "middle",
        );
    }

    fn signal(&mut self, signal: &SignalLayout) {
        let marker = match signal.head {
            ArrowHead::Filled => "head-filled",
            ArrowHead::Open => "head-open",
        };
        let dash = match signal.line {
            LineStyle::Solid => String::new(),
            LineStyle::Dashed => " stroke-dasharray=\"6,2\"".to_string(),
        };
        let stroke = escape_xml(&self.theme.stroke);

        match &signal.self_loop {
            Some(self_loop) => {
                self.out.push_str(&format!(
                    "<polyline points=\"{},{} {},{} {},{} {},{}\" fill=\"none\" stroke=\"{}\" \
                     stroke-width=\"{}\"{} marker-end=\"url(#{})\"/>\n",
                    signal.from_x,
                    self_loop.y_top,
                    self_loop.right_x,
                    self_loop.y_top,
                    self_loop.right_x,
                    self_loop.y_bottom,
                    signal.from_x,
                    self_loop.y_bottom,
                    stroke,
                    self.theme.stroke_width,
                    dash,
                    marker,
                ));
                self.text_block(&signal.text_lines, signal.text_x, signal.text_y, "start");
            }
            None => {
                self.out.push_str(&format!(
                    "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" \
                     stroke-width=\"{}\"{} marker-end=\"url(#{})\"/>\n",
                    signal.from_x,
                    signal.y,
                    signal.to_x,
                    signal.y,
                    stroke,
                    self.theme.stroke_width,
                    dash,
                    marker,
                ));
                let center_x = (signal.from_x + signal.to_x) / 2.0;
                self.text_block(&signal.text_lines, center_x, signal.text_y, "middle");
            }
        }
    }

    fn note(&mut self, note: &NoteLayout) {
        let fill = &self.theme.note_fill;
        self.rect(&note.rect, fill);
        let text_top = note.rect.y
            + (note.rect.height - note.text_lines.len() as f64 * line_height(self.theme.font_size))
                / 2.0;
        self.text_block(&note.text_lines, note.rect.center_x(), text_top, "middle");
    }

    fn rect(&mut self, rect: &Rect, fill: &str) {
        self.out.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"{}\" \
             stroke-width=\"{}\"/>\n",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            escape_xml(fill),
            escape_xml(&self.theme.stroke),
            self.theme.stroke_width,
        ));
    }

    /// A vertical stack of text lines; `x` is interpreted per `anchor`.
    fn text_block(&mut self, lines: &[String], x: f64, top: f64, anchor: &str) {
        let slot = line_height(self.theme.font_size);
        for (i, line) in lines.iter().enumerate() {
            self.text_line(
                line,
                x,
                top + i as f64 * slot + self.theme.font_size * BASELINE_RATIO,
                self.theme.font_size,
                anchor,
            );
        }
    }

    fn text_line(&mut self, text: &str, x: f64, baseline: f64, font_size: f64, anchor: &str) {
        self.out.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"{}\" fill=\"{}\">{}</text>\n",
            x,
            baseline,
            font_size,
            anchor,
            escape_xml(&self.theme.text_color),
            escape_xml(text),
        ));
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
