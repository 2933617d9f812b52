//! The editor view seen by a lint cycle.

use std::path::{Path, PathBuf};

use crate::buffer::TextBuffer;
use crate::region::{Region, ViewId};

/// Read access to an open editor view.
///
/// Points are character offsets; rows and columns are 0-based.
pub trait View {
    fn id(&self) -> ViewId;

    /// Path of the file backing the view, if any.
    fn file_name(&self) -> Option<&Path>;

    /// Scratch views are never linted.
    fn is_scratch(&self) -> bool;

    /// Syntax (or language) name of the view.
    fn syntax(&self) -> &str;

    fn size(&self) -> usize;

    fn substr(&self, region: Region) -> String;

    fn rowcol(&self, point: usize) -> (usize, usize);

    fn text_point(&self, row: usize, col: usize) -> usize;

    /// Position of the primary caret.
    fn primary_caret(&self) -> usize;

    /// Paragraph enclosing `point`.
    fn expand_to_paragraph(&self, point: usize) -> Region;
}

/// A [`View`] over an owned [`TextBuffer`].
#[derive(Debug, Clone)]
pub struct BufferView {
    id: ViewId,
    path: Option<PathBuf>,
    syntax: String,
    scratch: bool,
    caret: usize,
    buffer: TextBuffer,
}

impl BufferView {
    pub fn new(id: ViewId, text: impl Into<String>) -> Self {
        Self {
            id,
            path: None,
            syntax: String::new(),
            scratch: false,
            caret: 0,
            buffer: TextBuffer::new(text),
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_syntax(mut self, syntax: impl Into<String>) -> Self {
        self.syntax = syntax.into();
        self
    }

    pub fn with_scratch(mut self, scratch: bool) -> Self {
        self.scratch = scratch;
        self
    }

    pub fn with_caret(mut self, caret: usize) -> Self {
        self.set_caret(caret);
        self
    }

    pub fn set_caret(&mut self, caret: usize) {
        self.caret = caret.min(self.buffer.size());
    }

    pub fn set_syntax(&mut self, syntax: impl Into<String>) {
        self.syntax = syntax.into();
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Replaces the whole text, keeping the caret in bounds.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = TextBuffer::new(text);
        self.caret = self.caret.min(self.buffer.size());
    }

    /// Applies an edit and moves the caret after the inserted text.
    pub fn apply_edit(&mut self, region: Region, text: &str) {
        self.caret = self.buffer.replace(region, text);
    }
}

impl View for BufferView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn file_name(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn is_scratch(&self) -> bool {
        self.scratch
    }

    fn syntax(&self) -> &str {
        &self.syntax
    }

    fn size(&self) -> usize {
        self.buffer.size()
    }

    fn substr(&self, region: Region) -> String {
        self.buffer.substr(region)
    }

    fn rowcol(&self, point: usize) -> (usize, usize) {
        self.buffer.rowcol(point)
    }

    fn text_point(&self, row: usize, col: usize) -> usize {
        self.buffer.text_point(row, col)
    }

    fn primary_caret(&self) -> usize {
        self.caret
    }

    fn expand_to_paragraph(&self, point: usize) -> Region {
        self.buffer.expand_to_paragraph(point)
    }
}
