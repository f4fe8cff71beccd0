//! sparkfmt - An opinionated pretty-printer for Spark SQL
//!
//! One statement goes in, canonical text comes out: keywords upper-cased,
//! clauses broken onto indented lines, identifiers and literals untouched.
//!
//! ```
//! let formatted = sparkfmt::format("select distinct name from users").unwrap();
//! assert_eq!(formatted, "SELECT DISTINCT name\nFROM\n  users");
//! ```

pub mod ast;
pub mod config;
pub mod error;
pub mod formatter;
pub mod parser;

pub use config::{ClauseLayout, FormatConfig};
pub use error::{Error, Result};
pub use formatter::{format_sql, format_sql_with};

/// Format SQL string and return the formatted result
pub fn format(input: &str) -> Result<String> {
    format_sql(input)
}

/// Check if SQL string is already formatted. Surrounding whitespace is ignored.
pub fn check(input: &str) -> Result<bool> {
    let formatted = format_sql(input)?;
    Ok(formatted == input.trim())
}
