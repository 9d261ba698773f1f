use std::fmt::{self, Write as _};
use std::io::{self, Write};

use crate::config;
use crate::header::{self, Location, Verbosity};
use crate::level::Level;
use crate::radix;
use crate::style::SgrCode;
use crate::timestamp::Timestamp;

/// Width of the level field.
const LEVEL_WIDTH: usize = 5;
/// Width of the whole-seconds field.
const SECONDS_WIDTH: usize = 11;
/// Width of the nanosecond field.
const NANOS_WIDTH: usize = 9;

/// Renders one complete output record.
///
/// With color, the record is framed by the level's attribute and color
/// escapes and closed with a reset; without, the same line is produced
/// with every escape omitted. The trailing newline is part of the
/// record, so one record is always one write.
#[must_use]
pub fn compose(
  level: Level,
  header: &str,
  stamp: Timestamp,
  body: &str,
  color: bool,
) -> String {
  let style = level.style();

  let mut line = String::new();
  if color {
    let _ = write!(line, "{}{}", style.attribute, style.color);
  }
  let _ = write!(
    line,
    "[{:>LEVEL_WIDTH$} ] [{:>SECONDS_WIDTH$}:{:>NANOS_WIDTH$}] {} {}",
    level.as_str(),
    stamp.seconds(),
    stamp.subsec_nanos(),
    header,
    body,
  );
  if color {
    let _ = write!(line, "{}", SgrCode::AttrReset);
  }
  line.push('\n');

  line
}

/// Samples the clock, composes the record, and writes it to stdout.
///
/// Logging calls are void: a failed console write is discarded.
fn emit(level: Level, verbosity: Verbosity, location: Location, body: &str) {
  let header = header::render(location, verbosity);
  let stamp = Timestamp::now();
  let color = config::color_mode().enabled();
  let line = compose(level, &header, stamp, body, color);

  let mut stdout = io::stdout().lock();
  let _ = stdout.write_all(line.as_bytes());
}

/// Formatted entry point used by the dispatch macros.
///
/// Level and verbosity are explicit parameters; the message arrives as
/// a pre-bound [`fmt::Arguments`], so formatting stays type-checked at
/// the call site.
pub fn log(
  level: Level,
  verbosity: Verbosity,
  location: Location,
  message: fmt::Arguments<'_>,
) {
  emit(level, verbosity, location, &message.to_string());
}

/// Chainable builder for the stream call form.
///
/// Pushed values are concatenated in order with no separators. A
/// stream gated off via [`when`](Self::when) ignores every later push
/// and emits nothing.
#[derive(Debug)]
pub struct LogStream {
  level: Level,
  verbosity: Verbosity,
  location: Location,
  enabled: bool,
  body: String,
}

impl LogStream {
  /// Starts an empty stream line for the given call site.
  #[must_use]
  pub fn new(level: Level, verbosity: Verbosity, location: Location) -> Self {
    Self {
      level,
      verbosity,
      location,
      enabled: true,
      body: String::new(),
    }
  }

  /// Gates the whole line on `condition`.
  #[must_use]
  pub fn when(mut self, condition: bool) -> Self {
    self.enabled = self.enabled && condition;
    self
  }

  /// Appends one value to the line body.
  #[must_use]
  pub fn push(mut self, value: impl fmt::Display) -> Self {
    if self.enabled {
      let _ = write!(self.body, "{value}");
    }
    self
  }

  /// Appends an integer rendered in the given base; a base outside
  /// `2..=36` contributes nothing.
  #[must_use]
  pub fn push_radix(mut self, value: i64, base: u32) -> Self {
    if self.enabled {
      self.body.push_str(&radix::encode(value, base));
    }
    self
  }

  /// Writes the composed line to stdout. A gated-off stream is a
  /// complete no-op: no clock sample, no write.
  pub fn emit(self) {
    if self.enabled {
      emit(self.level, self.verbosity, self.location, &self.body);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const LOCATION: Location = Location {
    path: "robot/src/sonar/ping.rs",
    function: "sonar::emit",
    line: 27,
  };

  #[test]
  fn colored_record_is_framed_by_escapes() {
    let stamp = Timestamp::from_parts(1_700_000_000, 42);
    let line = compose(Level::Debug, "<A>", stamp, "hello", true);
    assert_eq!(
      line,
      "\x1b[0m\x1b[32m[DEBUG ] [ 1700000000:       42] <A> hello\x1b[0m\n"
    );
  }

  #[test]
  fn fatal_records_lead_with_the_bold_attribute() {
    let stamp = Timestamp::from_parts(7, 0);
    let line = compose(Level::Fatal, "<A>", stamp, "x", true);
    assert!(line.starts_with("\x1b[1m\x1b[31m"));
    assert!(line.ends_with("\x1b[0m\n"));
  }

  #[test]
  fn plain_record_has_no_escapes_and_keeps_field_widths() {
    let stamp = Timestamp::from_parts(1_700_000_000, 42);
    let line = compose(Level::Info, "<H>", stamp, "x", false);
    assert_eq!(line, "[ INFO ] [ 1700000000:       42] <H> x\n");
    assert!(!line.contains('\x1b'));
  }

  #[test]
  fn wide_values_extend_their_fields() {
    let stamp = Timestamp::from_parts(123_456_789_012, 987_654_321);
    let line = compose(Level::Warn, "<H>", stamp, "x", false);
    assert_eq!(line, "[ WARN ] [123456789012:987654321] <H> x\n");
  }

  #[test]
  fn stream_concatenates_pushed_values_in_order() {
    let stream = LogStream::new(Level::Info, Verbosity::Normal, LOCATION)
      .push("depth=")
      .push(114)
      .push('m');
    assert_eq!(stream.body, "depth=114m");
  }

  #[test]
  fn stream_radix_push_uses_the_requested_base() {
    let stream = LogStream::new(Level::Info, Verbosity::Normal, LOCATION)
      .push("mask=")
      .push_radix(255, 16)
      .push_radix(255, 99);
    assert_eq!(stream.body, "mask=ff");
  }

  #[test]
  fn gated_off_stream_accumulates_nothing() {
    let stream = LogStream::new(Level::Info, Verbosity::Normal, LOCATION)
      .when(false)
      .push("expensive")
      .push_radix(255, 16);
    assert!(!stream.enabled);
    assert!(stream.body.is_empty());
  }

  #[test]
  fn gate_is_sticky_across_chained_when_calls() {
    let stream = LogStream::new(Level::Info, Verbosity::Normal, LOCATION)
      .when(false)
      .when(true)
      .push("late");
    assert!(stream.body.is_empty());
  }
}
