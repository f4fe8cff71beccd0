//! Format configuration.

/// Placement of a clause's first item relative to its keyword.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClauseLayout {
    /// Clause keyword alone on its line, items indented below (`FROM\n  users`).
    #[default]
    Stacked,
    /// A single item stays on the keyword line (`FROM users`); lists still break.
    Compact,
}

/// Configuration for a formatting call.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Where FROM, GROUP BY and the sort clauses put their first item
    pub layout: ClauseLayout,
    /// Spaces per indent level
    pub indent_width: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::stacked()
    }
}

impl FormatConfig {
    /// Stacked clauses, two-space indent.
    pub fn stacked() -> Self {
        Self {
            layout: ClauseLayout::Stacked,
            indent_width: 2,
        }
    }

    /// Compact clauses, two-space indent.
    pub fn compact() -> Self {
        Self {
            layout: ClauseLayout::Compact,
            indent_width: 2,
        }
    }

    pub fn with_layout(mut self, layout: ClauseLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    pub(crate) fn is_compact(&self) -> bool {
        self.layout == ClauseLayout::Compact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_stacked_two_spaces() {
        let config = FormatConfig::default();
        assert_eq!(config.layout, ClauseLayout::Stacked);
        assert_eq!(config.indent_width, 2);
    }

    #[test]
    fn builders_override_fields() {
        let config = FormatConfig::stacked()
            .with_layout(ClauseLayout::Compact)
            .with_indent_width(4);
        assert!(config.is_compact());
        assert_eq!(config.indent_width, 4);
    }
}
