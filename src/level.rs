use std::fmt;
use std::str::FromStr;

/// Severity of a single log line.
///
/// Levels are ordered by increasing urgency, so range comparisons such
/// as `level >= Level::Warn` behave the way call sites expect. A level
/// is chosen at the call site and never stored by the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
  /// Development-time diagnostics.
  Debug,
  /// Routine operational messages.
  Info,
  /// Unexpected but survivable situations.
  Warn,
  /// Failures the surrounding code could not recover from.
  Error,
  /// Failures the process is unlikely to survive.
  Fatal,
}

impl Level {
  /// Every level, ordered from least to most urgent.
  pub const ALL: [Self; 5] =
    [Self::Debug, Self::Info, Self::Warn, Self::Error, Self::Fatal];

  /// Returns the canonical uppercase label rendered in the level field.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Debug => "DEBUG",
      Self::Info => "INFO",
      Self::Warn => "WARN",
      Self::Error => "ERROR",
      Self::Fatal => "FATAL",
    }
  }

  pub(crate) const fn index(self) -> usize {
    self as usize
  }
}

impl fmt::Display for Level {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Error returned when parsing a [`Level`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
  input: String,
}

impl ParseLevelError {
  /// Creates a new parse error capturing the offending input.
  pub fn new(input: impl Into<String>) -> Self {
    Self {
      input: input.into(),
    }
  }

  /// Returns the original input that failed to parse.
  pub fn input(&self) -> &str {
    &self.input
  }
}

impl fmt::Display for ParseLevelError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unknown severity level `{}`", self.input)
  }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
  type Err = ParseLevelError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_ascii_lowercase();
    match normalized.as_str() {
      "debug" => Ok(Self::Debug),
      "info" => Ok(Self::Info),
      "warn" | "warning" => Ok(Self::Warn),
      "error" => Ok(Self::Error),
      "fatal" | "critical" => Ok(Self::Fatal),
      _ => Err(ParseLevelError::new(s)),
    }
  }
}
