//! Formatting configuration for resource declaration files

/// Formatting configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Number of spaces between fields
    pub field_separator: usize,
    /// Pad keywords so the first field of every statement starts in the same column
    pub align_keywords: bool,
    /// Insert a blank line where the resource category changes (graphics, audio, ...)
    pub blank_line_between_groups: bool,
    /// End non-empty output with a newline
    pub trailing_newline: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            field_separator: 1,
            align_keywords: false,
            blank_line_between_groups: true,
            trailing_newline: true,
        }
    }
}

impl FormatConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of spaces between fields (minimum 1)
    pub fn with_field_separator(mut self, width: usize) -> Self {
        self.field_separator = width.max(1);
        self
    }

    /// Enable or disable keyword column alignment
    pub fn with_keyword_alignment(mut self, align: bool) -> Self {
        self.align_keywords = align;
        self
    }

    /// Enable or disable blank lines between resource categories
    pub fn with_group_separation(mut self, separate: bool) -> Self {
        self.blank_line_between_groups = separate;
        self
    }

    /// Enable or disable the final newline
    pub fn with_trailing_newline(mut self, newline: bool) -> Self {
        self.trailing_newline = newline;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormatConfig::default();
        assert_eq!(config.field_separator, 1);
        assert!(!config.align_keywords);
        assert!(config.blank_line_between_groups);
        assert!(config.trailing_newline);
        assert_eq!(FormatConfig::new(), config);
    }

    #[test]
    fn test_field_separator_has_minimum() {
        let config = FormatConfig::new().with_field_separator(0);
        assert_eq!(config.field_separator, 1);
        let config = FormatConfig::new().with_field_separator(4);
        assert_eq!(config.field_separator, 4);
    }

    #[test]
    fn test_builder_chain() {
        let config = FormatConfig::new()
            .with_keyword_alignment(true)
            .with_group_separation(false)
            .with_trailing_newline(false);
        assert!(config.align_keywords);
        assert!(!config.blank_line_between_groups);
        assert!(!config.trailing_newline);
        // Other fields unchanged
        assert_eq!(config.field_separator, 1);
    }
}
