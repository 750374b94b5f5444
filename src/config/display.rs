use crate::domain::display::{
    DisplayError, DisplayFormatter, DEFAULT_SIGNIFICANT_DIGITS, MAX_SIGNIFICANT_DIGITS,
    MIN_SIGNIFICANT_DIGITS,
};
use thiserror::Error;

/// Errors raised while applying display configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DisplayConfigError {
    #[error("precision {requested} outside supported range {min}..={max}",
        min = MIN_SIGNIFICANT_DIGITS, max = MAX_SIGNIFICANT_DIGITS)]
    PrecisionOutOfRange { requested: u32 },
    #[error("formatter creation failed: {source}")]
    FormatterCreationFailed { source: DisplayError },
}

/// User-facing configuration for result rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub significant_digits: u32,
}

impl DisplayConfig {
    pub const MIN_SIGNIFICANT_DIGITS: u32 = MIN_SIGNIFICANT_DIGITS;
    pub const MAX_SIGNIFICANT_DIGITS: u32 = MAX_SIGNIFICANT_DIGITS;
    pub const DEFAULT_SIGNIFICANT_DIGITS: u32 = DEFAULT_SIGNIFICANT_DIGITS;

    /// Creates a configuration, rejecting out-of-range precision
    pub fn new(significant_digits: u32) -> Result<Self, DisplayConfigError> {
        if !(Self::MIN_SIGNIFICANT_DIGITS..=Self::MAX_SIGNIFICANT_DIGITS)
            .contains(&significant_digits)
        {
            return Err(DisplayConfigError::PrecisionOutOfRange {
                requested: significant_digits,
            });
        }
        Ok(Self { significant_digits })
    }

    /// Clamps a precision value into the supported range
    pub fn sanitize_significant_digits(value: u32) -> u32 {
        value.clamp(Self::MIN_SIGNIFICANT_DIGITS, Self::MAX_SIGNIFICANT_DIGITS)
    }

    /// Builds the formatter described by this configuration
    pub fn build_formatter(&self) -> Result<DisplayFormatter, DisplayConfigError> {
        let digits = Self::sanitize_significant_digits(self.significant_digits);
        DisplayFormatter::new(digits)
            .map_err(|source| DisplayConfigError::FormatterCreationFailed { source })
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            significant_digits: Self::DEFAULT_SIGNIFICANT_DIGITS,
        }
    }
}
