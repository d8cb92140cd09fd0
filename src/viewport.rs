//! Scrollable viewport over long-form text.
//!
//! The viewport owns a piece of source text, wraps it to its width, and
//! exposes a fixed-size window onto the wrapped lines. Scrolling moves the
//! window; the scroll offset is always clamped to
//! `[0, lines − height]`, so every operation is a safe no-op at the
//! boundaries. Width changes re-wrap the source; height changes only move
//! the window.
//!
//! ```rust
//! use termsite::viewport::Model;
//!
//! let mut vp = Model::new(40, 5);
//! vp.set_content("a long document...\nwith many lines\n");
//! vp.scroll_down(2);
//! let window = vp.render(); // exactly 5 lines, each at most 40 columns
//! # let _ = window;
//! ```

use textwrap::Options;
use unicode_width::UnicodeWidthChar;

/// A bounded, scrollable window over wrapped text content.
#[derive(Debug, Clone)]
pub struct Model {
    width: usize,
    height: usize,
    y_offset: usize,
    /// Raw source text, kept for re-wrapping on width changes.
    source: String,
    /// Source wrapped to the current width.
    lines: Vec<String>,
}

impl Model {
    /// Creates a viewport with the given dimensions.
    ///
    /// Zero dimensions are floored to 1 rather than rejected; there is no
    /// invalid size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            y_offset: 0,
            source: String::new(),
            lines: Vec::new(),
        }
    }

    /// Current content width in display columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Current visible height in lines.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Current scroll offset from the top of the wrapped content.
    pub fn y_offset(&self) -> usize {
        self.y_offset
    }

    /// Total number of wrapped content lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the window is at the very top of the content.
    pub fn at_top(&self) -> bool {
        self.y_offset == 0
    }

    /// Whether the window shows the end of the content.
    pub fn at_bottom(&self) -> bool {
        self.y_offset >= self.max_y_offset()
    }

    /// Sets the source text, wrapping it to the current width.
    ///
    /// Line endings are normalized and the scroll offset is re-clamped in
    /// case the new content is shorter than the old.
    pub fn set_content(&mut self, content: &str) {
        self.source = content.replace("\r\n", "\n");
        self.rewrap();
        self.y_offset = self.y_offset.min(self.max_y_offset());
    }

    /// Resizes the viewport.
    ///
    /// Both dimensions are floored to 1. A width change re-wraps the source
    /// text; a height change only resizes the visible window. The offset is
    /// re-clamped but otherwise preserved.
    pub fn set_size(&mut self, width: usize, height: usize) {
        let width = width.max(1);
        let height = height.max(1);
        if width != self.width {
            self.width = width;
            self.rewrap();
        }
        self.height = height;
        self.y_offset = self.y_offset.min(self.max_y_offset());
    }

    /// Scrolls up by `n` lines, stopping at the top.
    pub fn scroll_up(&mut self, n: usize) {
        self.y_offset = self.y_offset.saturating_sub(n);
    }

    /// Scrolls down by `n` lines, stopping at the last page.
    pub fn scroll_down(&mut self, n: usize) {
        self.y_offset = (self.y_offset + n).min(self.max_y_offset());
    }

    /// Scrolls up by half the visible height (at least one line).
    pub fn half_page_up(&mut self) {
        self.scroll_up(self.half_page());
    }

    /// Scrolls down by half the visible height (at least one line).
    pub fn half_page_down(&mut self) {
        self.scroll_down(self.half_page());
    }

    /// Renders the visible window.
    ///
    /// Returns exactly `height` lines joined with `\n`, padded with blank
    /// lines when the content runs out, each truncated to `width` display
    /// columns.
    pub fn render(&self) -> String {
        let mut out = Vec::with_capacity(self.height);
        for row in 0..self.height {
            match self.lines.get(self.y_offset + row) {
                Some(line) => out.push(truncate_to_width(line, self.width)),
                None => out.push(String::new()),
            }
        }
        out.join("\n")
    }

    fn half_page(&self) -> usize {
        (self.height / 2).max(1)
    }

    fn max_y_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.height)
    }

    fn rewrap(&mut self) {
        let options = Options::new(self.width).break_words(true);
        self.lines = self
            .source
            .lines()
            .flat_map(|line| {
                if line.trim().is_empty() {
                    vec![String::new()]
                } else {
                    textwrap::wrap(line, &options)
                        .into_iter()
                        .map(|cow| cow.into_owned())
                        .collect()
                }
            })
            .collect();
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

/// Cuts a line to at most `width` display columns, Unicode aware.
fn truncate_to_width(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out
}
