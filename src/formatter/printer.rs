//! Output sink and indent tracking
//!
//! The printer appends text and tracks the depth of the current line.
//! Indentation is written lazily on the first write after a newline, so a
//! line never ends in whitespace.

use crate::error::{Error, Result};

/// Default indentation size (2 spaces)
pub const INDENT_SIZE: usize = 2;

/// Nesting depth plus the text of one indent unit
#[derive(Debug, Clone)]
pub struct Indent {
    depth: usize,
    unit: String,
}

impl Indent {
    pub fn new(width: usize) -> Self {
        Self {
            depth: 0,
            unit: " ".repeat(width),
        }
    }

    pub fn enter(&mut self) {
        self.depth += 1;
    }

    pub fn leave(&mut self) {
        debug_assert!(self.depth > 0, "indent depth went negative");
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Indent string for `depth` levels
    pub fn indent_text(&self, depth: usize) -> String {
        self.unit.repeat(depth)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::new(INDENT_SIZE)
    }
}

/// Pretty printer state
pub struct Printer {
    output: String,
    indent: Indent,
    pending_indent: bool,
    line_depth: usize,
}

impl Printer {
    pub fn new(indent_width: usize) -> Self {
        Self {
            output: String::new(),
            indent: Indent::new(indent_width),
            pending_indent: false,
            line_depth: 0,
        }
    }

    /// Write text to output
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.pending_indent {
            let indent = self.indent.indent_text(self.indent.depth());
            self.output.push_str(&indent);
            self.pending_indent = false;
            self.line_depth = self.indent.depth();
        }
        self.output.push_str(text);
    }

    /// Start a new line at the current depth
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.pending_indent = true;
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent.enter();
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        self.indent.leave();
    }

    pub fn depth(&self) -> usize {
        self.indent.depth()
    }

    /// Depth the current output line was indented at
    pub fn line_depth(&self) -> usize {
        self.line_depth
    }

    /// Get the output string; fails if an indent was never closed
    pub fn finish(self) -> Result<String> {
        if self.indent.depth() != 0 {
            return Err(Error::FormatError {
                message: format!(
                    "indent depth is {} at end of statement",
                    self.indent.depth()
                ),
            });
        }
        Ok(self.output)
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(INDENT_SIZE)
    }
}
