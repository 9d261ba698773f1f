//! Walks the call surface once per form.
//!
//! Run with `cargo run --example leveled`; pipe through `cat -v` to
//! inspect the escape sequences, or add `--plain` to disable them.

use finelog::{ColorMode, Level, LogStream, Verbosity, set_color_mode};

fn main() {
  let plain = std::env::args().any(|arg| arg == "--plain");
  set_color_mode(if plain {
    ColorMode::Never
  } else {
    ColorMode::Probe
  });

  finelog::log_debug!("scanning {} targets", 3);
  finelog::log_info!("probe online");
  finelog::log_warn!("voltage sag on bus {}", 2);
  finelog::log_error!("lost packet {}", 17);
  finelog::log_fatal!("losing the tether");

  finelog::log_info_fine!("fine headers carry the call site");
  finelog::log_warn_stream!("retries=", 3, " window=", 10, "s");
  finelog::log_debug_if!(std::env::args().len() > 1, "extra arguments supplied");

  LogStream::new(Level::Info, Verbosity::Normal, finelog::call_site!())
    .push("raw mask=")
    .push_radix(255, 16)
    .emit();
}
