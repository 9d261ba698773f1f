//! Adapter exposing this crate as a backend for the `log` facade.
//!
//! Facade records carry a file, a line, and a module path, but no
//! function name; the module path stands in for it when a caller asks
//! for fine headers, so the bridge sticks to normal headers.

use log::{Log, Metadata, Record};

use crate::header::{Location, Verbosity};
use crate::level::Level;

/// Routes `log` facade records through the leveled composer.
pub struct Bridge;

static BRIDGE: Bridge = Bridge;

impl Bridge {
  /// Maps a facade level onto the crate's severity scale.
  const fn severity(level: log::Level) -> Level {
    match level {
      log::Level::Error => Level::Error,
      log::Level::Warn => Level::Warn,
      log::Level::Info => Level::Info,
      log::Level::Debug | log::Level::Trace => Level::Debug,
    }
  }
}

impl Log for Bridge {
  fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
    true
  }

  fn log(&self, record: &Record<'_>) {
    let location = Location {
      path: record.file_static().unwrap_or("unknown"),
      function: record.module_path_static().unwrap_or("unknown"),
      line: record.line().unwrap_or(0),
    };

    crate::compose::log(
      Self::severity(record.level()),
      Verbosity::Normal,
      location,
      format_args!("{}", record.args()),
    );
  }

  fn flush(&self) {}
}

/// Installs the bridge as the process-wide facade backend.
///
/// `max_level` seeds the facade's global filter; records above it are
/// discarded by the facade before they reach the bridge.
pub fn install(max_level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
  log::set_logger(&BRIDGE).map(|()| log::set_max_level(max_level))
}
