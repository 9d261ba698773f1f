use std::fmt;
use std::io::{self, IsTerminal};
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

/// Governs whether emitted lines carry ANSI escape sequences.
///
/// The mode is a process-wide runtime setting consulted on every emit;
/// the default assumes an ANSI-capable console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorMode {
  /// Emit escape sequences unconditionally.
  Always,
  /// Never emit escape sequences.
  Never,
  /// Emit escape sequences only when stdout is a terminal.
  Probe,
}

impl ColorMode {
  /// Returns the canonical lowercase name of the mode.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Always => "always",
      Self::Never => "never",
      Self::Probe => "probe",
    }
  }

  /// Resolves the mode to a concrete decision for the current process.
  #[must_use]
  pub fn enabled(self) -> bool {
    match self {
      Self::Always => true,
      Self::Never => false,
      Self::Probe => io::stdout().is_terminal(),
    }
  }

  const fn from_u8(value: u8) -> Self {
    match value {
      1 => Self::Never,
      2 => Self::Probe,
      _ => Self::Always,
    }
  }
}

impl Default for ColorMode {
  fn default() -> Self {
    Self::Always
  }
}

impl fmt::Display for ColorMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Error returned when parsing a [`ColorMode`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorModeError {
  input: String,
}

impl ParseColorModeError {
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

impl fmt::Display for ParseColorModeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unsupported color mode `{}`", self.input)
  }
}

impl std::error::Error for ParseColorModeError {}

impl FromStr for ColorMode {
  type Err = ParseColorModeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_ascii_lowercase();
    match normalized.as_str() {
      "always" | "always-color" | "color" => Ok(Self::Always),
      "never" | "never-color" | "plain" => Ok(Self::Never),
      "probe" | "probe-terminal" | "auto" => Ok(Self::Probe),
      _ => Err(ParseColorModeError::new(s)),
    }
  }
}

static COLOR_MODE: AtomicU8 = AtomicU8::new(ColorMode::Always as u8);

/// Installs the process-wide color mode consulted on every emit.
pub fn set_color_mode(mode: ColorMode) {
  COLOR_MODE.store(mode as u8, Ordering::Relaxed);
}

/// Returns the current process-wide color mode.
#[must_use]
pub fn color_mode() -> ColorMode {
  ColorMode::from_u8(COLOR_MODE.load(Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_mode_assumes_an_ansi_console() {
    assert_eq!(ColorMode::default(), ColorMode::Always);
    assert!(ColorMode::Always.enabled());
    assert!(!ColorMode::Never.enabled());
  }

  #[test]
  fn parse_accepts_canonical_names_and_aliases() {
    assert_eq!("always".parse::<ColorMode>(), Ok(ColorMode::Always));
    assert_eq!("never-color".parse::<ColorMode>(), Ok(ColorMode::Never));
    assert_eq!("PLAIN".parse::<ColorMode>(), Ok(ColorMode::Never));
    assert_eq!("probe-terminal".parse::<ColorMode>(), Ok(ColorMode::Probe));
    assert_eq!(" auto \n".parse::<ColorMode>(), Ok(ColorMode::Probe));
  }

  #[test]
  fn parse_rejects_unknown_values() {
    let err = "rainbow".parse::<ColorMode>().unwrap_err();
    assert_eq!(err.input(), "rainbow");
    assert_eq!(err.to_string(), "unsupported color mode `rainbow`");
  }

  #[test]
  fn installed_mode_round_trips() {
    set_color_mode(ColorMode::Never);
    assert_eq!(color_mode(), ColorMode::Never);
    set_color_mode(ColorMode::Always);
    assert_eq!(color_mode(), ColorMode::Always);
  }

  #[cfg(feature = "serde")]
  #[test]
  fn serde_round_trips_the_mode() {
    let encoded = serde_json::to_string(&ColorMode::Probe).unwrap();
    assert_eq!(encoded, "\"Probe\"");
    let decoded: ColorMode = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, ColorMode::Probe);
  }
}
