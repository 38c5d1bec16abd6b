//! Geometric layout pass
//!
//! Turns a [`Diagram`] into pixel-space geometry that pixel formats (svg)
//! draw directly. Layout runs in two passes:
//!
//! 1. Horizontal: every statement contributes minimum-distance constraints
//!    between pairs of lifelines (a signal's text must fit between its
//!    endpoints, a note over two actors must fit between them, and so on).
//!    Lifeline x positions are then solved left to right, taking the
//!    maximum over all constraints against earlier actors.
//! 2. Vertical: statements are stacked top to bottom in source order, each
//!    one claiming a row of height derived from its text.
//!
//! The pass is deterministic: the same diagram, theme and config always
//! produce the same geometry, and no coordinate is ever negative.

pub mod metrics;

use crate::theme::Theme;
use metrics::{line_height, measure, TextMetrics};
use seqd_parser::{ActorId, ArrowHead, Diagram, LineStyle, Note, NotePlacement, Signal, Statement};
use std::collections::HashMap;

/// Spacing knobs for the layout pass. All values are pixels.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Blank border around the whole diagram
    pub diagram_margin: f64,
    /// Minimum gap between adjacent actor boxes
    pub actor_margin: f64,
    /// Padding inside an actor box around its label
    pub actor_padding: f64,
    /// Vertical gap between consecutive rows
    pub signal_margin: f64,
    /// Padding around signal text
    pub signal_padding: f64,
    /// Horizontal gap between a note and the lifelines around it
    pub note_margin: f64,
    /// Padding inside a note box around its text
    pub note_padding: f64,
    /// How far a note over two actors extends past each lifeline
    pub note_overlap: f64,
    /// Horizontal extent of a self-signal loopback
    pub self_signal_width: f64,
    /// Padding around the diagram title
    pub title_padding: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            diagram_margin: 10.0,
            actor_margin: 10.0,
            actor_padding: 10.0,
            signal_margin: 5.0,
            signal_padding: 5.0,
            note_margin: 10.0,
            note_padding: 5.0,
            note_overlap: 15.0,
            self_signal_width: 20.0,
            title_padding: 5.0,
        }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// The diagram title, centered over the whole drawing.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TitleLayout {
    pub text: String,
    /// Horizontal center of the title text
    pub center_x: f64,
    /// Top of the title text
    pub top: f64,
}

/// Geometry for one actor: a labelled box at the top, its mirror at the
/// bottom, and the lifeline connecting them.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ActorLayout {
    pub id: ActorId,
    pub label: String,
    pub top_box: Rect,
    pub bottom_box: Rect,
    pub lifeline_x: f64,
    pub lifeline_top: f64,
    pub lifeline_bottom: f64,
}

/// The loopback geometry of a self-signal.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct SelfLoop {
    /// Rightmost x of the loop
    pub right_x: f64,
    /// y of the outgoing segment
    pub y_top: f64,
    /// y of the returning segment, where the arrowhead sits
    pub y_bottom: f64,
}

/// Geometry for one signal row.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SignalLayout {
    pub from_x: f64,
    pub to_x: f64,
    /// y of the arrow line (the returning segment for self-signals)
    pub y: f64,
    pub line: LineStyle,
    pub head: ArrowHead,
    pub text_lines: Vec<String>,
    /// Top-left of the text block
    pub text_x: f64,
    pub text_y: f64,
    pub self_loop: Option<SelfLoop>,
}

/// Geometry for one note row.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NoteLayout {
    pub rect: Rect,
    pub text_lines: Vec<String>,
}

/// One laid-out statement, in source order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum RowLayout {
    Signal(SignalLayout),
    Note(NoteLayout),
}

/// The complete laid-out diagram.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DiagramLayout {
    pub width: f64,
    pub height: f64,
    pub title: Option<TitleLayout>,
    pub actors: Vec<ActorLayout>,
    pub rows: Vec<RowLayout>,
}

/// Minimum-distance constraints between lifelines, keyed by actor index
/// pair with the smaller index first. Recording a distance keeps the
/// maximum seen for that pair.
#[derive(Debug, Default)]
struct Distances {
    map: HashMap<(usize, usize), f64>,
}

impl Distances {
    fn ensure(&mut self, a: usize, b: usize, distance: f64) {
        if a == b {
            return;
        }
        let key = (a.min(b), a.max(b));
        let entry = self.map.entry(key).or_insert(0.0);
        if distance > *entry {
            *entry = distance;
        }
    }

    fn get(&self, a: usize, b: usize) -> f64 {
        let key = (a.min(b), a.max(b));
        self.map.get(&key).copied().unwrap_or(0.0)
    }
}

/// Lay out `diagram` with the given theme and spacing.
pub fn layout_diagram(diagram: &Diagram, theme: &Theme, config: &LayoutConfig) -> DiagramLayout {
    Layouter {
        diagram,
        theme,
        config,
    }
    .run()
}

struct Layouter<'a> {
    diagram: &'a Diagram,
    theme: &'a Theme,
    config: &'a LayoutConfig,
}

impl Layouter<'_> {
    fn run(self) -> DiagramLayout {
        let config = self.config;
        let actor_count = self.diagram.actors.len();

        // Actor boxes share one height so the top row lines up.
        let label_metrics: Vec<TextMetrics> = self
            .diagram
            .actors
            .iter()
            .map(|actor| measure(std::slice::from_ref(&actor.label), self.theme.font_size))
            .collect();
        let box_widths: Vec<f64> = label_metrics
            .iter()
            .map(|m| m.width + 2.0 * config.actor_padding)
            .collect();
        let box_height = label_metrics
            .iter()
            .map(|m| m.height + 2.0 * config.actor_padding)
            .fold(0.0_f64, f64::max);

        // Horizontal pass: gather constraints, then solve left to right.
        let mut distances = Distances::default();
        for i in 1..actor_count {
            distances.ensure(
                i - 1,
                i,
                box_widths[i - 1] / 2.0 + box_widths[i] / 2.0 + config.actor_margin,
            );
        }

        // Extra space needed left of the first lifeline and right of the
        // last, beyond the half actor boxes.
        let mut left_extent = box_widths.first().copied().unwrap_or(0.0) / 2.0;
        let mut right_extent = box_widths.last().copied().unwrap_or(0.0) / 2.0;

        for statement in &self.diagram.statements {
            match statement {
                Statement::Signal(signal) => self.constrain_signal(
                    signal,
                    actor_count,
                    &mut distances,
                    &mut right_extent,
                ),
                Statement::Note(note) => self.constrain_note(
                    note,
                    actor_count,
                    &mut distances,
                    &mut left_extent,
                    &mut right_extent,
                ),
            }
        }

        let mut lifeline_x = vec![0.0; actor_count];
        for i in 1..actor_count {
            let mut x = lifeline_x[i - 1];
            for j in 0..i {
                let required = lifeline_x[j] + distances.get(j, i);
                if required > x {
                    x = required;
                }
            }
            lifeline_x[i] = x;
        }

        let title_metrics = self
            .diagram
            .title
            .as_deref()
            .map(|t| measure(std::slice::from_ref(&t.to_string()), self.theme.title_font_size));

        let x_offset = config.diagram_margin + left_extent;
        for x in &mut lifeline_x {
            *x += x_offset;
        }

        let body_width =
            lifeline_x.last().copied().unwrap_or(x_offset) + right_extent + config.diagram_margin;
        let title_width = title_metrics
            .map(|m| m.width + 2.0 * (config.title_padding + config.diagram_margin))
            .unwrap_or(0.0);
        let width = body_width.max(title_width).max(2.0 * config.diagram_margin);

        // Vertical pass.
        let mut y = config.diagram_margin;
        let title = self.diagram.title.as_deref().map(|text| {
            let metrics = title_metrics.unwrap_or(TextMetrics::ZERO);
            let layout = TitleLayout {
                text: text.to_string(),
                center_x: width / 2.0,
                top: y + config.title_padding,
            };
            y += metrics.height + 2.0 * config.title_padding;
            layout
        });

        let top_box_y = y;
        y += box_height;
        let lifeline_top = y;

        let mut rows = Vec::with_capacity(self.diagram.statements.len());
        for statement in &self.diagram.statements {
            let row = match statement {
                Statement::Signal(signal) => {
                    RowLayout::Signal(self.place_signal(signal, &lifeline_x, &mut y))
                }
                Statement::Note(note) => RowLayout::Note(self.place_note(note, &lifeline_x, &mut y)),
            };
            rows.push(row);
        }

        // An empty body still separates the two actor rows visibly.
        if self.diagram.statements.is_empty() && actor_count > 0 {
            y += 2.0 * config.signal_margin + line_height(self.theme.font_size);
        }

        let lifeline_bottom = y;
        let height = lifeline_bottom
            + if actor_count > 0 { box_height } else { 0.0 }
            + config.diagram_margin;

        let actors = self
            .diagram
            .actors
            .iter()
            .enumerate()
            .map(|(i, actor)| {
                let top_box = Rect {
                    x: lifeline_x[i] - box_widths[i] / 2.0,
                    y: top_box_y,
                    width: box_widths[i],
                    height: box_height,
                };
                ActorLayout {
                    id: actor.id,
                    label: actor.label.clone(),
                    top_box,
                    bottom_box: Rect {
                        y: lifeline_bottom,
                        ..top_box
                    },
                    lifeline_x: lifeline_x[i],
                    lifeline_top,
                    lifeline_bottom,
                }
            })
            .collect();

        DiagramLayout {
            width,
            height,
            title,
            actors,
            rows,
        }
    }

    fn constrain_signal(
        &self,
        signal: &Signal,
        actor_count: usize,
        distances: &mut Distances,
        right_extent: &mut f64,
    ) {
        let config = self.config;
        let text = measure(&signal.message.lines(), self.theme.font_size);
        let from = signal.from.index();
        let to = signal.to.index();
        if signal.is_self() {
            // The loop and its text sit to the right of the lifeline.
            let needed =
                config.self_signal_width + config.signal_padding + text.width + config.signal_margin;
            if from + 1 < actor_count {
                distances.ensure(from, from + 1, needed);
            } else if needed > *right_extent {
                *right_extent = needed;
            }
        } else {
            distances.ensure(from, to, text.width + 2.0 * config.signal_padding);
        }
    }

    fn constrain_note(
        &self,
        note: &Note,
        actor_count: usize,
        distances: &mut Distances,
        left_extent: &mut f64,
        right_extent: &mut f64,
    ) {
        let config = self.config;
        let text = measure(&note.message.lines(), self.theme.font_size);
        let width = text.width + 2.0 * config.note_padding;
        match note.placement.normalized() {
            NotePlacement::LeftOf(actor) => {
                let i = actor.index();
                let needed = width + 2.0 * config.note_margin;
                if i > 0 {
                    distances.ensure(i - 1, i, needed);
                } else if width + config.note_margin > *left_extent {
                    *left_extent = width + config.note_margin;
                }
            }
            NotePlacement::RightOf(actor) => {
                let i = actor.index();
                let needed = width + 2.0 * config.note_margin;
                if i + 1 < actor_count {
                    distances.ensure(i, i + 1, needed);
                } else if width + config.note_margin > *right_extent {
                    *right_extent = width + config.note_margin;
                }
            }
            NotePlacement::Over(actor, None) => {
                let i = actor.index();
                let half = width / 2.0;
                if i > 0 {
                    distances.ensure(i - 1, i, half + config.note_margin);
                } else if half > *left_extent {
                    *left_extent = half;
                }
                if i + 1 < actor_count {
                    distances.ensure(i, i + 1, half + config.note_margin);
                } else if half > *right_extent {
                    *right_extent = half;
                }
            }
            NotePlacement::Over(a, Some(b)) => {
                // The note extends note_overlap past each lifeline; only
                // the remainder constrains the pair.
                let i = a.index();
                let j = b.index();
                distances.ensure(i, j, width - 2.0 * config.note_overlap);
                if i == 0 && config.note_overlap > *left_extent {
                    *left_extent = config.note_overlap;
                }
                if j + 1 == actor_count && config.note_overlap > *right_extent {
                    *right_extent = config.note_overlap;
                }
            }
        }
    }

    fn place_signal(&self, signal: &Signal, lifeline_x: &[f64], y: &mut f64) -> SignalLayout {
        let config = self.config;
        let lines = signal.message.lines();
        let text = measure(&lines, self.theme.font_size);
        let from_x = lifeline_x[signal.from.index()];
        let to_x = lifeline_x[signal.to.index()];

        if signal.is_self() {
            let y_top = *y + config.signal_margin;
            let y_bottom = y_top + text.height.max(line_height(self.theme.font_size));
            let right_x = from_x + config.self_signal_width;
            let layout = SignalLayout {
                from_x,
                to_x,
                y: y_bottom,
                line: signal.line,
                head: signal.head,
                text_lines: lines,
                text_x: right_x + config.signal_padding,
                text_y: (y_top + y_bottom) / 2.0 - text.height / 2.0,
                self_loop: Some(SelfLoop {
                    right_x,
                    y_top,
                    y_bottom,
                }),
            };
            *y = y_bottom + config.signal_margin;
            layout
        } else {
            let text_y = *y + config.signal_margin;
            let arrow_y = text_y + text.height + config.signal_padding;
            let layout = SignalLayout {
                from_x,
                to_x,
                y: arrow_y,
                line: signal.line,
                head: signal.head,
                text_lines: lines,
                text_x: (from_x + to_x) / 2.0 - text.width / 2.0,
                text_y,
                self_loop: None,
            };
            *y = arrow_y + config.signal_margin;
            layout
        }
    }

    fn place_note(&self, note: &Note, lifeline_x: &[f64], y: &mut f64) -> NoteLayout {
        let config = self.config;
        let lines = note.message.lines();
        let text = measure(&lines, self.theme.font_size);
        let min_width = text.width + 2.0 * config.note_padding;
        let height = text.height + 2.0 * config.note_padding;

        let (x, width) = match note.placement.normalized() {
            NotePlacement::LeftOf(actor) => {
                let ax = lifeline_x[actor.index()];
                (ax - config.note_margin - min_width, min_width)
            }
            NotePlacement::RightOf(actor) => {
                let ax = lifeline_x[actor.index()];
                (ax + config.note_margin, min_width)
            }
            NotePlacement::Over(actor, None) => {
                let ax = lifeline_x[actor.index()];
                (ax - min_width / 2.0, min_width)
            }
            NotePlacement::Over(a, Some(b)) => {
                let ax = lifeline_x[a.index()];
                let bx = lifeline_x[b.index()];
                let width = min_width.max(bx - ax + 2.0 * config.note_overlap);
                ((ax + bx) / 2.0 - width / 2.0, width)
            }
        };

        let rect = Rect {
            x,
            y: *y + config.signal_margin,
            width,
            height,
        };
        *y = rect.bottom() + config.signal_margin;
        NoteLayout {
            rect,
            text_lines: lines,
        }
    }
}
