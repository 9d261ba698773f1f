//! Call-site dispatch macros.
//!
//! Every named form expands through the generic [`log!`](crate::log!)
//! or [`log_stream!`](crate::log_stream!) pair, which capture the call
//! site and route into the composer. Each expansion is a block
//! expression, so the forms are safe in single-statement positions.
//! Conditional forms test their guard before touching the message
//! operands; a false guard costs one branch and nothing else.

/// Fully qualified name of the enclosing function.
///
/// Probes the type name of a locally defined marker function and trims
/// the `::marker` suffix from the result.
#[macro_export]
macro_rules! function_path {
  () => {{
    fn marker() {}
    fn type_name_of<T>(_: T) -> &'static str {
      ::std::any::type_name::<T>()
    }
    let probed = type_name_of(marker);
    probed.strip_suffix("::marker").unwrap_or(probed)
  }};
}

/// Captures the current call site as a [`Location`](crate::Location).
#[macro_export]
macro_rules! call_site {
  () => {
    $crate::Location {
      path: ::std::file!(),
      function: $crate::function_path!(),
      line: ::std::line!(),
    }
  };
}

/// Generic formatted entry point; level and verbosity are explicit.
#[macro_export]
macro_rules! log {
  ($level:expr, $verbosity:expr, $($arg:tt)+) => {{
    $crate::log(
      $level,
      $verbosity,
      $crate::call_site!(),
      ::std::format_args!($($arg)+),
    );
  }};
}

/// Generic stream entry point; values are concatenated in push order.
#[macro_export]
macro_rules! log_stream {
  ($level:expr, $verbosity:expr, $($value:expr),+ $(,)?) => {{
    let mut stream =
      $crate::LogStream::new($level, $verbosity, $crate::call_site!());
    $(stream = stream.push(&$value);)+
    stream.emit();
  }};
}

// Unconditional formatted forms.

/// Formatted `DEBUG` line.
#[macro_export]
macro_rules! log_debug {
  ($($arg:tt)+) => {
    $crate::log!($crate::Level::Debug, $crate::Verbosity::Normal, $($arg)+)
  };
}

/// Formatted `INFO` line.
#[macro_export]
macro_rules! log_info {
  ($($arg:tt)+) => {
    $crate::log!($crate::Level::Info, $crate::Verbosity::Normal, $($arg)+)
  };
}

/// Formatted `WARN` line.
#[macro_export]
macro_rules! log_warn {
  ($($arg:tt)+) => {
    $crate::log!($crate::Level::Warn, $crate::Verbosity::Normal, $($arg)+)
  };
}

/// Formatted `ERROR` line.
#[macro_export]
macro_rules! log_error {
  ($($arg:tt)+) => {
    $crate::log!($crate::Level::Error, $crate::Verbosity::Normal, $($arg)+)
  };
}

/// Formatted `FATAL` line.
#[macro_export]
macro_rules! log_fatal {
  ($($arg:tt)+) => {
    $crate::log!($crate::Level::Fatal, $crate::Verbosity::Normal, $($arg)+)
  };
}

// Unconditional stream forms.

/// Stream-style `DEBUG` line.
#[macro_export]
macro_rules! log_debug_stream {
  ($($value:expr),+ $(,)?) => {
    $crate::log_stream!($crate::Level::Debug, $crate::Verbosity::Normal, $($value),+)
  };
}

/// Stream-style `INFO` line.
#[macro_export]
macro_rules! log_info_stream {
  ($($value:expr),+ $(,)?) => {
    $crate::log_stream!($crate::Level::Info, $crate::Verbosity::Normal, $($value),+)
  };
}

/// Stream-style `WARN` line.
#[macro_export]
macro_rules! log_warn_stream {
  ($($value:expr),+ $(,)?) => {
    $crate::log_stream!($crate::Level::Warn, $crate::Verbosity::Normal, $($value),+)
  };
}

/// Stream-style `ERROR` line.
#[macro_export]
macro_rules! log_error_stream {
  ($($value:expr),+ $(,)?) => {
    $crate::log_stream!($crate::Level::Error, $crate::Verbosity::Normal, $($value),+)
  };
}

/// Stream-style `FATAL` line.
#[macro_export]
macro_rules! log_fatal_stream {
  ($($value:expr),+ $(,)?) => {
    $crate::log_stream!($crate::Level::Fatal, $crate::Verbosity::Normal, $($value),+)
  };
}

// Fine formatted forms: the header gains function name and line.

/// Formatted `DEBUG` line with a fine header.
#[macro_export]
macro_rules! log_debug_fine {
  ($($arg:tt)+) => {
    $crate::log!($crate::Level::Debug, $crate::Verbosity::Fine, $($arg)+)
  };
}

/// Formatted `INFO` line with a fine header.
#[macro_export]
macro_rules! log_info_fine {
  ($($arg:tt)+) => {
    $crate::log!($crate::Level::Info, $crate::Verbosity::Fine, $($arg)+)
  };
}

/// Formatted `WARN` line with a fine header.
#[macro_export]
macro_rules! log_warn_fine {
  ($($arg:tt)+) => {
    $crate::log!($crate::Level::Warn, $crate::Verbosity::Fine, $($arg)+)
  };
}

/// Formatted `ERROR` line with a fine header.
#[macro_export]
macro_rules! log_error_fine {
  ($($arg:tt)+) => {
    $crate::log!($crate::Level::Error, $crate::Verbosity::Fine, $($arg)+)
  };
}

/// Formatted `FATAL` line with a fine header.
#[macro_export]
macro_rules! log_fatal_fine {
  ($($arg:tt)+) => {
    $crate::log!($crate::Level::Fatal, $crate::Verbosity::Fine, $($arg)+)
  };
}

// Fine stream forms.

/// Stream-style `DEBUG` line with a fine header.
#[macro_export]
macro_rules! log_debug_stream_fine {
  ($($value:expr),+ $(,)?) => {
    $crate::log_stream!($crate::Level::Debug, $crate::Verbosity::Fine, $($value),+)
  };
}

/// Stream-style `INFO` line with a fine header.
#[macro_export]
macro_rules! log_info_stream_fine {
  ($($value:expr),+ $(,)?) => {
    $crate::log_stream!($crate::Level::Info, $crate::Verbosity::Fine, $($value),+)
  };
}

/// Stream-style `WARN` line with a fine header.
#[macro_export]
macro_rules! log_warn_stream_fine {
  ($($value:expr),+ $(,)?) => {
    $crate::log_stream!($crate::Level::Warn, $crate::Verbosity::Fine, $($value),+)
  };
}

/// Stream-style `ERROR` line with a fine header.
#[macro_export]
macro_rules! log_error_stream_fine {
  ($($value:expr),+ $(,)?) => {
    $crate::log_stream!($crate::Level::Error, $crate::Verbosity::Fine, $($value),+)
  };
}

/// Stream-style `FATAL` line with a fine header.
#[macro_export]
macro_rules! log_fatal_stream_fine {
  ($($value:expr),+ $(,)?) => {
    $crate::log_stream!($crate::Level::Fatal, $crate::Verbosity::Fine, $($value),+)
  };
}

// Guarded formatted forms. The guard is evaluated once; when it is
// false the message operands are never evaluated.

/// Formatted `DEBUG` line, emitted only when the guard holds.
#[macro_export]
macro_rules! log_debug_if {
  ($condition:expr, $($arg:tt)+) => {{
    if $condition {
      $crate::log_debug!($($arg)+);
    }
  }};
}

/// Formatted `INFO` line, emitted only when the guard holds.
#[macro_export]
macro_rules! log_info_if {
  ($condition:expr, $($arg:tt)+) => {{
    if $condition {
      $crate::log_info!($($arg)+);
    }
  }};
}

/// Formatted `WARN` line, emitted only when the guard holds.
#[macro_export]
macro_rules! log_warn_if {
  ($condition:expr, $($arg:tt)+) => {{
    if $condition {
      $crate::log_warn!($($arg)+);
    }
  }};
}

/// Formatted `ERROR` line, emitted only when the guard holds.
#[macro_export]
macro_rules! log_error_if {
  ($condition:expr, $($arg:tt)+) => {{
    if $condition {
      $crate::log_error!($($arg)+);
    }
  }};
}

/// Formatted `FATAL` line, emitted only when the guard holds.
#[macro_export]
macro_rules! log_fatal_if {
  ($condition:expr, $($arg:tt)+) => {{
    if $condition {
      $crate::log_fatal!($($arg)+);
    }
  }};
}

// Guarded stream forms.

/// Stream-style `DEBUG` line, emitted only when the guard holds.
#[macro_export]
macro_rules! log_debug_stream_if {
  ($condition:expr, $($value:expr),+ $(,)?) => {{
    if $condition {
      $crate::log_debug_stream!($($value),+);
    }
  }};
}

/// Stream-style `INFO` line, emitted only when the guard holds.
#[macro_export]
macro_rules! log_info_stream_if {
  ($condition:expr, $($value:expr),+ $(,)?) => {{
    if $condition {
      $crate::log_info_stream!($($value),+);
    }
  }};
}

/// Stream-style `WARN` line, emitted only when the guard holds.
#[macro_export]
macro_rules! log_warn_stream_if {
  ($condition:expr, $($value:expr),+ $(,)?) => {{
    if $condition {
      $crate::log_warn_stream!($($value),+);
    }
  }};
}

/// Stream-style `ERROR` line, emitted only when the guard holds.
#[macro_export]
macro_rules! log_error_stream_if {
  ($condition:expr, $($value:expr),+ $(,)?) => {{
    if $condition {
      $crate::log_error_stream!($($value),+);
    }
  }};
}

/// Stream-style `FATAL` line, emitted only when the guard holds.
#[macro_export]
macro_rules! log_fatal_stream_if {
  ($condition:expr, $($value:expr),+ $(,)?) => {{
    if $condition {
      $crate::log_fatal_stream!($($value),+);
    }
  }};
}

// Guarded fine formatted forms.

/// Formatted fine-header `DEBUG` line, emitted only when the guard holds.
#[macro_export]
macro_rules! log_debug_fine_if {
  ($condition:expr, $($arg:tt)+) => {{
    if $condition {
      $crate::log_debug_fine!($($arg)+);
    }
  }};
}

/// Formatted fine-header `INFO` line, emitted only when the guard holds.
#[macro_export]
macro_rules! log_info_fine_if {
  ($condition:expr, $($arg:tt)+) => {{
    if $condition {
      $crate::log_info_fine!($($arg)+);
    }
  }};
}

/// Formatted fine-header `WARN` line, emitted only when the guard holds.
#[macro_export]
macro_rules! log_warn_fine_if {
  ($condition:expr, $($arg:tt)+) => {{
    if $condition {
      $crate::log_warn_fine!($($arg)+);
    }
  }};
}

/// Formatted fine-header `ERROR` line, emitted only when the guard holds.
#[macro_export]
macro_rules! log_error_fine_if {
  ($condition:expr, $($arg:tt)+) => {{
    if $condition {
      $crate::log_error_fine!($($arg)+);
    }
  }};
}

/// Formatted fine-header `FATAL` line, emitted only when the guard holds.
#[macro_export]
macro_rules! log_fatal_fine_if {
  ($condition:expr, $($arg:tt)+) => {{
    if $condition {
      $crate::log_fatal_fine!($($arg)+);
    }
  }};
}

// Guarded fine stream forms.

/// Stream-style fine-header `DEBUG` line, emitted only when the guard holds.
#[macro_export]
macro_rules! log_debug_stream_fine_if {
  ($condition:expr, $($value:expr),+ $(,)?) => {{
    if $condition {
      $crate::log_debug_stream_fine!($($value),+);
    }
  }};
}

/// Stream-style fine-header `INFO` line, emitted only when the guard holds.
#[macro_export]
macro_rules! log_info_stream_fine_if {
  ($condition:expr, $($value:expr),+ $(,)?) => {{
    if $condition {
      $crate::log_info_stream_fine!($($value),+);
    }
  }};
}

/// Stream-style fine-header `WARN` line, emitted only when the guard holds.
#[macro_export]
macro_rules! log_warn_stream_fine_if {
  ($condition:expr, $($value:expr),+ $(,)?) => {{
    if $condition {
      $crate::log_warn_stream_fine!($($value),+);
    }
  }};
}

/// Stream-style fine-header `ERROR` line, emitted only when the guard holds.
#[macro_export]
macro_rules! log_error_stream_fine_if {
  ($condition:expr, $($value:expr),+ $(,)?) => {{
    if $condition {
      $crate::log_error_stream_fine!($($value),+);
    }
  }};
}

/// Stream-style fine-header `FATAL` line, emitted only when the guard holds.
#[macro_export]
macro_rules! log_fatal_stream_fine_if {
  ($condition:expr, $($value:expr),+ $(,)?) => {{
    if $condition {
      $crate::log_fatal_stream_fine!($($value),+);
    }
  }};
}
