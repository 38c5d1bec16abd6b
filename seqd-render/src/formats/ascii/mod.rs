//! ASCII format implementation
//!
//! Terminal preview of a diagram on a character grid. The pixel layout
//! pass does not apply here; columns and rows are resolved in character
//! cells with the same constraint scheme (pairwise minimum distances
//! between lifelines, solved left to right).
//!
//! ```text
//!  +-------+    +-----+
//!  | Alice |    | Bob |
//!  +-------+    +-----+
//!      |    hi     |
//!      |---------->|
//!      |           |
//!  +-------+    +-----+
//!  | Alice |    | Bob |
//!  +-------+    +-----+
//! ```
//!
//! Dashed lines drop every other dash, open heads double the head
//! character, so all four arrow spellings stay distinguishable.

mod canvas;

use crate::error::FormatError;
use crate::format::{Format, RenderOptions};
use canvas::Canvas;
use seqd_parser::{ArrowHead, Diagram, LineStyle, Note, NotePlacement, Signal, Statement};
use std::collections::HashMap;

/// Character-grid output for terminals.
pub struct AsciiFormat;

impl Format for AsciiFormat {
    fn name(&self) -> &str {
        "ascii"
    }

    fn description(&self) -> &str {
        "Character-grid preview for terminals"
    }

    fn extension(&self) -> &str {
        "txt"
    }

    fn render(&self, diagram: &Diagram, _options: &RenderOptions) -> Result<String, FormatError> {
        Ok(AsciiLayouter::new(diagram).run())
    }
}

/// Gap kept clear on each side of a lifeline.
const LIFELINE_GAP: usize = 2;
/// Minimum gap between adjacent actor boxes.
const BOX_GAP: usize = 3;
/// Horizontal extent of a self-signal loop, lifeline to return bar.
const LOOP_WIDTH: usize = 4;

struct AsciiLayouter<'a> {
    diagram: &'a Diagram,
    box_widths: Vec<usize>,
    cols: Vec<usize>,
    right_extent: usize,
    canvas: Canvas,
}

impl<'a> AsciiLayouter<'a> {
    fn new(diagram: &'a Diagram) -> Self {
        let box_widths = diagram
            .actors
            .iter()
            .map(|actor| actor.label.chars().count() + 4)
            .collect();
        AsciiLayouter {
            diagram,
            box_widths,
            cols: Vec::new(),
            right_extent: 0,
            canvas: Canvas::new(),
        }
    }

    fn run(mut self) -> String {
        self.solve_columns();

        let mut y = 0;
        if let Some(title) = self.diagram.title.as_deref() {
            let width = self.total_width().max(title.chars().count());
            let x = (width - title.chars().count()) / 2;
            self.canvas.put_str(x, y, title);
            y += 2;
        }

        if self.diagram.actors.is_empty() {
            return self.canvas.to_string();
        }

        self.actor_boxes(y);
        let lifeline_start = y + 3;

        // An empty body still gets one lifeline row between the actor rows.
        let body_height = self
            .diagram
            .statements
            .iter()
            .map(Self::statement_height)
            .sum::<usize>()
            .max(1);
        let body_end = lifeline_start + body_height;
        for &col in &self.cols {
            self.canvas.vline(col, lifeline_start, body_end - 1, '|');
        }

        let mut row = lifeline_start;
        for statement in &self.diagram.statements {
            match statement {
                Statement::Signal(signal) => self.draw_signal(signal, row),
                Statement::Note(note) => self.draw_note(note, row),
            }
            row += Self::statement_height(statement);
        }

        self.actor_boxes(body_end);
        self.canvas.to_string()
    }

    /// Rows a statement occupies, separator row included.
    fn statement_height(statement: &Statement) -> usize {
        match statement {
            Statement::Signal(signal) => {
                let lines = signal.message.lines().len();
                if signal.is_self() {
                    lines.max(1) + 3
                } else {
                    lines + 2
                }
            }
            Statement::Note(note) => note.message.lines().len() + 3,
        }
    }

    fn solve_columns(&mut self) {
        let actor_count = self.diagram.actors.len();
        let mut distances: HashMap<(usize, usize), usize> = HashMap::new();
        let mut ensure = |map: &mut HashMap<(usize, usize), usize>, a: usize, b: usize, d: usize| {
            if a != b {
                let key = (a.min(b), a.max(b));
                let entry = map.entry(key).or_insert(0);
                *entry = (*entry).max(d);
            }
        };

        for i in 1..actor_count {
            let d = self.box_widths[i - 1].div_ceil(2) + self.box_widths[i].div_ceil(2) + BOX_GAP;
            ensure(&mut distances, i - 1, i, d);
        }

        let mut left = self.box_widths.first().map_or(0, |w| w.div_ceil(2));
        let mut right = self.box_widths.last().map_or(0, |w| w.div_ceil(2));

        for statement in &self.diagram.statements {
            match statement {
                Statement::Signal(signal) => {
                    let width = text_width(&signal.message.lines());
                    let from = signal.from.index();
                    let to = signal.to.index();
                    if signal.is_self() {
                        let needed = LOOP_WIDTH + width + 3;
                        if from + 1 < actor_count {
                            ensure(&mut distances, from, from + 1, needed);
                        } else {
                            right = right.max(needed);
                        }
                    } else {
                        ensure(&mut distances, from, to, width + 2 * LIFELINE_GAP);
                    }
                }
                Statement::Note(note) => {
                    let box_width = text_width(&note.message.lines()) + 4;
                    match note.placement.normalized() {
                        NotePlacement::LeftOf(actor) => {
                            let i = actor.index();
                            if i > 0 {
                                ensure(&mut distances, i - 1, i, box_width + 2 * LIFELINE_GAP);
                            } else {
                                left = left.max(box_width + LIFELINE_GAP);
                            }
                        }
                        NotePlacement::RightOf(actor) => {
                            let i = actor.index();
                            if i + 1 < actor_count {
                                ensure(&mut distances, i, i + 1, box_width + 2 * LIFELINE_GAP);
                            } else {
                                right = right.max(box_width + LIFELINE_GAP);
                            }
                        }
                        NotePlacement::Over(actor, None) => {
                            let i = actor.index();
                            let half = box_width.div_ceil(2);
                            if i > 0 {
                                ensure(&mut distances, i - 1, i, half + LIFELINE_GAP);
                            } else {
                                left = left.max(half);
                            }
                            if i + 1 < actor_count {
                                ensure(&mut distances, i, i + 1, half + LIFELINE_GAP);
                            } else {
                                right = right.max(half);
                            }
                        }
                        NotePlacement::Over(a, Some(b)) => {
                            let i = a.index();
                            let j = b.index();
                            ensure(
                                &mut distances,
                                i,
                                j,
                                box_width.saturating_sub(2 * LIFELINE_GAP),
                            );
                            if i == 0 {
                                left = left.max(LIFELINE_GAP);
                            }
                            if j + 1 == actor_count {
                                right = right.max(LIFELINE_GAP);
                            }
                        }
                    }
                }
            }
        }

        let mut cols = vec![0usize; actor_count];
        for i in 1..actor_count {
            let mut x = cols[i - 1];
            for j in 0..i {
                let key = (j, i);
                if let Some(&d) = distances.get(&key) {
                    x = x.max(cols[j] + d);
                }
            }
            cols[i] = x;
        }
        for col in &mut cols {
            *col += left;
        }
        self.cols = cols;
        self.right_extent = right;
    }

    fn total_width(&self) -> usize {
        match self.cols.last() {
            Some(&last) => last + self.right_extent + 1,
            None => 0,
        }
    }

    fn actor_boxes(&mut self, y: usize) {
        for (i, actor) in self.diagram.actors.iter().enumerate() {
            let width = self.box_widths[i];
            let x = self.cols[i] - width / 2;
            self.canvas.draw_box(x, y, width, 3);
            let label_x = x + (width - actor.label.chars().count()) / 2;
            self.canvas.put_str(label_x, y + 1, &actor.label);
        }
    }

    fn draw_signal(&mut self, signal: &Signal, y: usize) {
        let lines = signal.message.lines();
        if signal.is_self() {
            self.draw_self_signal(signal, &lines, y);
            return;
        }

        let from = self.cols[signal.from.index()];
        let to = self.cols[signal.to.index()];
        let mid = (from + to) / 2;
        for (i, line) in lines.iter().enumerate() {
            let x = mid.saturating_sub(line.chars().count() / 2);
            self.canvas.put_str(x, y + i, line);
        }

        let arrow_y = y + lines.len();
        let left = from.min(to) + 1;
        let right = from.max(to) - 1;
        match signal.line {
            LineStyle::Solid => self.canvas.hline(left, right, arrow_y, '-'),
            LineStyle::Dashed => {
                for x in (left..=right).step_by(2) {
                    self.canvas.put(x, arrow_y, '-');
                }
            }
        }
        if to > from {
            self.canvas.put(right, arrow_y, '>');
            if signal.head == ArrowHead::Open {
                self.canvas.put(right - 1, arrow_y, '>');
            }
        } else {
            self.canvas.put(left, arrow_y, '<');
            if signal.head == ArrowHead::Open {
                self.canvas.put(left + 1, arrow_y, '<');
            }
        }
    }

    fn draw_self_signal(&mut self, signal: &Signal, lines: &[String], y: usize) {
        let col = self.cols[signal.from.index()];
        let bar = col + LOOP_WIDTH;
        let text_rows = lines.len().max(1);
        let bottom = y + text_rows + 1;

        self.canvas.hline(col + 1, bar - 1, y, '-');
        self.canvas.put(bar, y, '+');
        self.canvas.vline(bar, y + 1, bottom - 1, '|');
        self.canvas.hline(col + 2, bar - 1, bottom, '-');
        self.canvas.put(bar, bottom, '+');
        self.canvas.put(col + 1, bottom, '<');
        if signal.head == ArrowHead::Open {
            self.canvas.put(col + 2, bottom, '<');
        }
        for (i, line) in lines.iter().enumerate() {
            self.canvas.put_str(bar + 2, y + 1 + i, line);
        }
    }

    fn draw_note(&mut self, note: &Note, y: usize) {
        let lines = note.message.lines();
        let min_width = text_width(&lines) + 4;
        let (x, width) = match note.placement.normalized() {
            NotePlacement::LeftOf(actor) => {
                let col = self.cols[actor.index()];
                (col - LIFELINE_GAP - (min_width - 1), min_width)
            }
            NotePlacement::RightOf(actor) => {
                let col = self.cols[actor.index()];
                (col + LIFELINE_GAP, min_width)
            }
            NotePlacement::Over(actor, None) => {
                let col = self.cols[actor.index()];
                (col - min_width / 2, min_width)
            }
            NotePlacement::Over(a, Some(b)) => {
                let start = self.cols[a.index()] - LIFELINE_GAP;
                let end = self.cols[b.index()] + LIFELINE_GAP;
                (start, min_width.max(end - start + 1))
            }
        };

        self.canvas.draw_box(x, y, width, lines.len() + 2);
        for (i, line) in lines.iter().enumerate() {
            let line_x = x + (width - line.chars().count()) / 2;
            self.canvas.put_str(line_x, y + 1 + i, line);
        }
    }
}

fn text_width(lines: &[String]) -> usize {
    lines.iter().map(|l| l.chars().count()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqd_parser::parse_diagram;

    fn render(source: &str) -> String {
        let diagram = parse_diagram(source).unwrap();
        AsciiFormat
            .render(&diagram, &RenderOptions::default())
            .unwrap()
    }

    #[test]
    fn test_ascii_format_name() {
        assert_eq!(AsciiFormat.name(), "ascii");
        assert_eq!(AsciiFormat.extension(), "txt");
    }

    #[test]
    fn test_simple_signal_grid() {
        let expected = " +-------+    +-----+
 | Alice |    | Bob |
 +-------+    +-----+
     |    hi     |
     |---------->|
     |           |
 +-------+    +-----+
 | Alice |    | Bob |
 +-------+    +-----+
";
        assert_eq!(render("Alice->Bob: hi"), expected);
    }

    #[test]
    fn test_reply_points_left() {
        let output = render("Alice->Bob: hi\nBob-->Alice: ok");
        assert!(output.contains("|---------->|"));
        assert!(output.contains("|< - - - - -|"));
    }

    #[test]
    fn test_open_head_doubles_character() {
        let output = render("Alice->>Bob: hi");
        assert!(output.contains(">>|"));
    }

    #[test]
    fn test_title_on_first_line() {
        let output = render("title: Greeting\nAlice->Bob: hi");
        let first = output.lines().next().unwrap();
        assert_eq!(first.trim(), "Greeting");
    }

    #[test]
    fn test_self_signal_loops_back() {
        let output = render("Alice->Alice: think");
        assert!(output.contains("+"));
        assert!(output.contains("| think"));
        assert!(output.contains("|<-"));
    }

    #[test]
    fn test_note_box_drawn() {
        let output = render("Alice->Bob: hi\nnote over Alice,Bob: spanning note");
        assert!(output.contains("| spanning note"));
        assert!(output.contains("+----"));
    }

    #[test]
    fn test_empty_diagram_renders_empty() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_multiline_message_keeps_lines() {
        let output = render("Alice->Bob: first\\nsecond");
        assert!(output.contains("first"));
        assert!(output.contains("second"));
    }
}
