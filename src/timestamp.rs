use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock instant split into whole seconds and the nanosecond
/// remainder, exactly as rendered in a line's time field.
///
/// Each emitted line samples the clock fresh; nothing is cached and no
/// monotonic relationship between consecutive samples is promised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
  secs: u64,
  nanos: u32,
}

impl Timestamp {
  /// Samples the OS clock once and splits the single reading.
  ///
  /// A clock set before the Unix epoch maps to the zero timestamp; the
  /// line is still emitted.
  #[must_use]
  pub fn now() -> Self {
    let elapsed = SystemTime::now()
      .duration_since(UNIX_EPOCH)
      .unwrap_or_default();

    Self {
      secs: elapsed.as_secs(),
      nanos: elapsed.subsec_nanos(),
    }
  }

  /// Whole seconds since the Unix epoch.
  #[must_use]
  pub const fn seconds(self) -> u64 {
    self.secs
  }

  /// Nanosecond remainder, always within `0..1_000_000_000`.
  #[must_use]
  pub const fn subsec_nanos(self) -> u32 {
    self.nanos
  }

  #[cfg(test)]
  pub(crate) const fn from_parts(secs: u64, nanos: u32) -> Self {
    Self { secs, nanos }
  }
}
