//! Centralized configuration values shared across the j2eo pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Integer literal text substituted for literal forms the projector does not
/// model (hexadecimal, octal and binary integers, characters, text blocks).
///
/// # Examples
/// ```
/// use config::constants::SENTINEL_INTEGER_LITERAL;
/// assert!(SENTINEL_INTEGER_LITERAL.parse::<i64>().is_ok());
/// ```
pub const SENTINEL_INTEGER_LITERAL: &str = "123456";

/// Number of spaces emitted per indentation level when rendering EO trees.
///
/// # Examples
/// ```
/// use config::constants::INDENT_WIDTH;
/// assert_eq!(" ".repeat(INDENT_WIDTH), "  ");
/// ```
pub const INDENT_WIDTH: usize = 2;

/// Remaining stack below which the projector switches to a freshly allocated
/// segment via the `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
/// assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
/// ```
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

/// Bytes of stack space reserved when growing recursion limits using the
/// `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::STACKER_STACK_SIZE_BYTES;
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

/// What the projector does with a literal form outside the supported set.
///
/// # Examples
/// ```
/// use config::constants::LiteralFallback;
/// assert_eq!(LiteralFallback::default(), LiteralFallback::Sentinel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiteralFallback {
    /// Substitute [`SENTINEL_INTEGER_LITERAL`] and report a warning diagnostic.
    #[default]
    Sentinel,
    /// Abort the compilation unit with an invalid-literal error.
    Reject,
}

/// Immutable snapshot of the settings one projection run uses.
///
/// # Examples
/// ```
/// use config::constants::ProjectionConfig;
/// let config = ProjectionConfig::default();
/// assert!(config.red_zone < config.stack_size);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionConfig {
    /// Stack headroom that triggers growth before recursing into a child.
    pub red_zone: usize,
    /// Size of each stack segment allocated on growth.
    pub stack_size: usize,
    /// Policy for unsupported literal forms.
    pub literal_fallback: LiteralFallback,
}

impl ProjectionConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// stack limits.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{LiteralFallback, ProjectionConfig};
    /// let cfg = ProjectionConfig::new(32 * 1024, 1024 * 1024, LiteralFallback::Reject)
    ///     .expect("valid config");
    /// assert_eq!(cfg.literal_fallback, LiteralFallback::Reject);
    /// ```
    pub fn new(
        red_zone: usize,
        stack_size: usize,
        literal_fallback: LiteralFallback,
    ) -> Result<Self, ConfigError> {
        if red_zone == 0 {
            return Err(ConfigError::InvalidRedZone(red_zone));
        }
        if stack_size <= red_zone {
            return Err(ConfigError::StackTooSmall {
                red_zone,
                stack_size,
            });
        }
        Ok(Self {
            red_zone,
            stack_size,
            literal_fallback,
        })
    }

    /// Returns a copy with a different literal fallback policy.
    pub fn with_literal_fallback(self, literal_fallback: LiteralFallback) -> Self {
        Self {
            literal_fallback,
            ..self
        }
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            red_zone: STACKER_RED_ZONE_BYTES,
            stack_size: STACKER_STACK_SIZE_BYTES,
            literal_fallback: LiteralFallback::default(),
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the red zone is zero.
    InvalidRedZone(usize),
    /// Raised when a grown stack segment would not even cover the red zone.
    StackTooSmall { red_zone: usize, stack_size: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRedZone(value) => {
                write!(f, "red_zone must be positive: {value}")
            }
            ConfigError::StackTooSmall {
                red_zone,
                stack_size,
            } => {
                write!(
                    f,
                    "stack_size ({stack_size}) must exceed red_zone ({red_zone})"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
