//! Error types for sparkfmt

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Result type alias for sparkfmt operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for sparkfmt
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// The input is not a valid statement of the supported grammar.
    #[error("{message}")]
    #[diagnostic(code(sparkfmt::parse_error))]
    ParseError {
        message: String,
        /// Trimmed statement text, attached by the facade.
        #[source_code]
        src: String,
        #[label("here")]
        span: Option<SourceSpan>,
        /// 1-based line of the span start, 0 when no source is attached.
        line: usize,
        /// 1-based column of the span start, 0 when no source is attached.
        column: usize,
    },

    /// Valid Spark SQL that this crate has no syntax tree or rendering rule for.
    #[error("Unsupported construct: {construct}")]
    #[diagnostic(code(sparkfmt::unsupported))]
    Unsupported { construct: String },

    /// The renderer broke one of its own invariants.
    #[error("Format error: {message}")]
    #[diagnostic(code(sparkfmt::format_error))]
    FormatError { message: String },
}

impl Error {
    /// Build a parse error over a byte range `(offset, len)` without source text.
    pub fn parse(message: impl Into<String>, span: Option<(usize, usize)>) -> Self {
        Error::ParseError {
            message: message.into(),
            src: String::new(),
            span: span.map(SourceSpan::from),
            line: 0,
            column: 0,
        }
    }

    /// Attach the statement text to a parse error and resolve its line and column.
    pub fn with_source(self, sql: &str) -> Self {
        match self {
            Error::ParseError { message, span, .. } => {
                let (line, column) = match span {
                    Some(span) => offset_to_line_col(sql, span.offset()),
                    None => (0, 0),
                };
                Error::ParseError {
                    message,
                    src: sql.to_string(),
                    span,
                    line,
                    column,
                }
            }
            other => other,
        }
    }

    /// Byte range `(offset, len)` of a parse error, if known.
    pub fn span(&self) -> Option<(usize, usize)> {
        match self {
            Error::ParseError { span: Some(span), .. } => Some((span.offset(), span.len())),
            _ => None,
        }
    }
}

/// Calculate line and column number from byte offset
pub fn offset_to_line_col(input: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;
    for (i, c) in input.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}

/// Get the line content at a given line number (1-indexed)
pub fn get_line_content(input: &str, line_num: usize) -> Option<&str> {
    input.lines().nth(line_num.saturating_sub(1))
}

/// Format a parse error with a caret under the offending position
pub fn format_parse_error(input: &str, offset: usize, message: &str) -> String {
    let (line, col) = offset_to_line_col(input, offset);
    let line_content = get_line_content(input, line).unwrap_or("");

    let pointer = " ".repeat(col.saturating_sub(1)) + "^";

    format!(
        "Parse error at line {}, column {}:\n  |\n{:>3} | {}\n  | {}\n  = {}",
        line, col, line, line_content, pointer, message
    )
}
