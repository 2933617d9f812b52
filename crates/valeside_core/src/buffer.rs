//! In-memory text buffer addressed by character offsets.
//!
//! Offsets ("points") count Unicode scalar values, which is also the unit
//! Vale uses for its column spans. Rows and columns are 0-based.

use crate::region::Region;

/// Pre-computed metadata for a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineInfo {
    /// Character offset of line start (inclusive).
    start: usize,
    /// Character offset of end of line content, excluding the newline.
    end: usize,
    /// Byte offset of line start.
    byte_start: usize,
    /// Whether this line contains only whitespace (or a form feed).
    is_blank: bool,
}

/// A text buffer with line bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    lines: Vec<LineInfo>,
    size: usize,
}

impl TextBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let (lines, size) = Self::compute_lines(&text);
        Self { text, lines, size }
    }

    fn compute_lines(text: &str) -> (Vec<LineInfo>, usize) {
        let mut lines = Vec::new();
        let mut start = 0usize;
        let mut byte_start = 0usize;
        let mut chars = 0usize;

        for line in text.split('\n') {
            let len = line.chars().count();
            lines.push(LineInfo {
                start,
                end: start + len,
                byte_start,
                is_blank: line.trim().is_empty(),
            });
            chars = start + len;
            start += len + 1;
            byte_start += line.len() + 1;
        }

        (lines, chars)
    }

    /// The full text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of characters in the buffer.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of rows; an empty buffer and a trailing newline both count a row.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the text of `region`, clamped to the buffer.
    pub fn substr(&self, region: Region) -> String {
        let start = self.byte_offset(region.begin());
        let end = self.byte_offset(region.end());
        self.text[start..end].to_string()
    }

    /// Converts a point to its `(row, column)`.
    pub fn rowcol(&self, point: usize) -> (usize, usize) {
        let point = point.min(self.size);
        let row = self.row_of(point);
        (row, point - self.lines[row].start)
    }

    /// Converts `(row, column)` to a point. Out-of-range rows and columns
    /// are clamped to the end of the buffer.
    pub fn text_point(&self, row: usize, col: usize) -> usize {
        match self.lines.get(row) {
            Some(line) => (line.start + col).min(self.size),
            None => self.size,
        }
    }

    /// The region of row `row` without its newline.
    pub fn line_region(&self, row: usize) -> Option<Region> {
        self.lines.get(row).map(|l| Region::new(l.start, l.end))
    }

    /// The text of row `row` without its newline.
    pub fn line_text(&self, row: usize) -> Option<&str> {
        let line = self.lines.get(row)?;
        let end = self.lines.get(row + 1).map_or(self.text.len(), |next| next.byte_start - 1);
        Some(&self.text[line.byte_start..end])
    }

    /// The line containing `point`, including its trailing newline.
    pub fn full_line(&self, point: usize) -> Region {
        let (row, _) = self.rowcol(point);
        let line = self.lines[row];
        Region::new(line.start, (line.end + 1).min(self.size))
    }

    /// Expands `point` to the paragraph around it.
    ///
    /// A paragraph is the run of non-blank lines containing `point`. When
    /// `point` sits on a blank line the result is the empty region at `point`.
    pub fn expand_to_paragraph(&self, point: usize) -> Region {
        let (row, _) = self.rowcol(point);
        if self.lines[row].is_blank {
            return Region::point(point.min(self.size));
        }

        let mut first = row;
        while first > 0 && !self.lines[first - 1].is_blank {
            first -= 1;
        }

        let mut last = row;
        while last + 1 < self.lines.len() && !self.lines[last + 1].is_blank {
            last += 1;
        }

        let end = (self.lines[last].end + 1).min(self.size);
        Region::new(self.lines[first].start, end)
    }

    /// Replaces `region` with `text` and returns the point after the inserted text.
    pub fn replace(&mut self, region: Region, text: &str) -> usize {
        let start = self.byte_offset(region.begin());
        let end = self.byte_offset(region.end());
        self.text.replace_range(start..end, text);
        let (lines, size) = Self::compute_lines(&self.text);
        self.lines = lines;
        self.size = size;
        region.begin() + text.chars().count()
    }

    fn row_of(&self, point: usize) -> usize {
        self.lines
            .partition_point(|line| line.start <= point)
            .saturating_sub(1)
    }

    fn byte_offset(&self, point: usize) -> usize {
        let point = point.min(self.size);
        let row = self.row_of(point);
        let line = self.lines[row];
        let col = point - line.start;
        self.text[line.byte_start..]
            .char_indices()
            .nth(col)
            .map_or(self.text.len(), |(i, _)| line.byte_start + i)
    }
}
