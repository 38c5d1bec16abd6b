//! Character-grid drawing surface
//!
//! A grow-on-write grid of characters. Drawing past the current extent
//! enlarges the grid; rendering trims trailing blanks per row so output
//! stays terminal-friendly.

use std::fmt;

#[derive(Debug, Default)]
pub struct Canvas {
    rows: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new() -> Self {
        Canvas::default()
    }

    pub fn put(&mut self, x: usize, y: usize, ch: char) {
        if y >= self.rows.len() {
            self.rows.resize(y + 1, Vec::new());
        }
        let row = &mut self.rows[y];
        if x >= row.len() {
            row.resize(x + 1, ' ');
        }
        row[x] = ch;
    }

    pub fn put_str(&mut self, x: usize, y: usize, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i, y, ch);
        }
    }

    pub fn hline(&mut self, x1: usize, x2: usize, y: usize, ch: char) {
        for x in x1.min(x2)..=x1.max(x2) {
            self.put(x, y, ch);
        }
    }

    pub fn vline(&mut self, x: usize, y1: usize, y2: usize, ch: char) {
        for y in y1.min(y2)..=y1.max(y2) {
            self.put(x, y, ch);
        }
    }

    /// A `+--+` box with `|` sides. `width` and `height` include the
    /// borders and must each be at least 2. The interior is cleared so
    /// the box covers whatever was drawn beneath it.
    pub fn draw_box(&mut self, x: usize, y: usize, width: usize, height: usize) {
        let right = x + width - 1;
        let bottom = y + height - 1;
        for yy in y + 1..bottom {
            for xx in x + 1..right {
                self.put(xx, yy, ' ');
            }
        }
        if width > 2 {
            self.hline(x + 1, right - 1, y, '-');
            self.hline(x + 1, right - 1, bottom, '-');
        }
        if height > 2 {
            self.vline(x, y + 1, bottom - 1, '|');
            self.vline(right, y + 1, bottom - 1, '|');
        }
        self.put(x, y, '+');
        self.put(right, y, '+');
        self.put(x, bottom, '+');
        self.put(right, bottom, '+');
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
