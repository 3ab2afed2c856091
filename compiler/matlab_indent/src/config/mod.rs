//! Indentation configuration.

use thiserror::Error;

/// Columns per indentation level unless the host says otherwise.
pub const DEFAULT_INDENT_UNIT: u32 = 4;

/// Configuration for the indent engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentConfig {
    /// Columns per nesting level. Always positive once validated.
    indent_unit: u32,
}

impl Default for IndentConfig {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT_UNIT,
        }
    }
}

impl IndentConfig {
    /// Create a config with the given indent unit.
    pub fn new(indent_unit: u32) -> Result<Self, ConfigError> {
        Self::default().with_indent_unit(indent_unit)
    }

    /// Replace the indent unit, rejecting zero.
    pub fn with_indent_unit(self, indent_unit: u32) -> Result<Self, ConfigError> {
        if indent_unit == 0 {
            return Err(ConfigError::ZeroIndentUnit);
        }
        Ok(Self { indent_unit })
    }

    #[inline]
    pub fn indent_unit(&self) -> u32 {
        self.indent_unit
    }
}

/// Invalid indent configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("indent unit must be at least one column")]
    ZeroIndentUnit,
}
