//! Leveled, color-coded console logging with compact source-location
//! headers.
//!
//! Every line carries an epoch timestamp pair, a bracketed tag
//! summarizing the trailing segments of the source path, and, in fine
//! mode, the function name and line number of the call. Call sites use
//! the `log_*!` macro family or the [`LogStream`] builder; both route
//! through one composer that writes each record to stdout in a single
//! call.

pub mod config;
pub mod header;
pub mod level;
pub mod radix;
pub mod style;
pub mod timestamp;

mod compose;
mod macros;

#[cfg(feature = "log-bridge")]
pub mod bridge;

pub use compose::{LogStream, log};
pub use config::{ColorMode, ParseColorModeError, color_mode, set_color_mode};
pub use header::{DEFAULT_DEPTH, Location, Verbosity};
pub use level::{Level, ParseLevelError};
pub use style::{SgrCode, Style};
pub use timestamp::Timestamp;
