use std::fmt;

use crate::level::Level;

/// ANSI SGR codes accepted by the composer and available to callers
/// building their own styled output.
///
/// `Display` renders the complete escape sequence, so codes can be
/// interpolated straight into a formatted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SgrCode {
  // General attributes.
  AttrReset = 0,
  AttrBold = 1,
  AttrUnderline = 4,
  AttrBlink = 5,
  AttrReverse = 7,
  AttrNoUnderline = 24,
  AttrNoBlink = 25,
  AttrNoReverse = 27,
  // Foreground colors.
  FgBlack = 30,
  FgRed = 31,
  FgGreen = 32,
  FgYellow = 33,
  FgBlue = 34,
  FgMagenta = 35,
  FgCyan = 36,
  FgWhite = 37,
  FgDefault = 39,
  // Background colors.
  BgBlack = 40,
  BgRed = 41,
  BgGreen = 42,
  BgYellow = 43,
  BgBlue = 44,
  BgMagenta = 45,
  BgCyan = 46,
  BgWhite = 47,
  BgDefault = 49,
  // Decorations. Code 54 cancels framed and encircled alike.
  DecFramed = 51,
  DecEncircled = 52,
  DecOverlined = 53,
  DecNoFramedEncircled = 54,
  DecNoOverlined = 55,
}

impl SgrCode {
  /// Numeric value carried inside the escape sequence.
  #[must_use]
  pub const fn code(self) -> u8 {
    self as u8
  }
}

impl fmt::Display for SgrCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "\x1b[{}m", self.code())
  }
}

/// Color and attribute applied to every line of one severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
  /// Foreground color wrapping the line body.
  pub color: SgrCode,
  /// Text attribute emitted before the color.
  pub attribute: SgrCode,
}

/// One row per level, indexed by the level discriminant.
const STYLES: [Style; Level::ALL.len()] = [
  Style {
    color: SgrCode::FgGreen,
    attribute: SgrCode::AttrReset,
  },
  Style {
    color: SgrCode::FgDefault,
    attribute: SgrCode::AttrReset,
  },
  Style {
    color: SgrCode::FgYellow,
    attribute: SgrCode::AttrReset,
  },
  Style {
    color: SgrCode::FgRed,
    attribute: SgrCode::AttrReset,
  },
  Style {
    color: SgrCode::FgRed,
    attribute: SgrCode::AttrBold,
  },
];

impl Level {
  /// Returns the display style for this level.
  #[must_use]
  pub const fn style(self) -> Style {
    STYLES[self.index()]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn table_matches_the_documented_palette() {
    assert_eq!(
      Level::Debug.style(),
      Style {
        color: SgrCode::FgGreen,
        attribute: SgrCode::AttrReset
      }
    );
    assert_eq!(Level::Info.style().color, SgrCode::FgDefault);
    assert_eq!(Level::Warn.style().color, SgrCode::FgYellow);
    assert_eq!(Level::Error.style().color, SgrCode::FgRed);
    assert_eq!(Level::Fatal.style().color, SgrCode::FgRed);
    assert_eq!(Level::Fatal.style().attribute, SgrCode::AttrBold);
  }

  #[test]
  fn only_fatal_carries_a_non_reset_attribute() {
    for level in Level::ALL {
      let expected = if level == Level::Fatal {
        SgrCode::AttrBold
      } else {
        SgrCode::AttrReset
      };
      assert_eq!(level.style().attribute, expected);
    }
  }

  #[test]
  fn display_renders_the_escape_sequence() {
    assert_eq!(SgrCode::FgGreen.to_string(), "\x1b[32m");
    assert_eq!(SgrCode::AttrReset.to_string(), "\x1b[0m");
    assert_eq!(SgrCode::DecNoOverlined.code(), 55);
  }
}
