/// Number of trailing path segments summarized by default.
pub const DEFAULT_DEPTH: usize = 4;

/// Directory names elided from headers entirely.
const ELIDED_DIRS: [&str; 2] = ["src", "include"];

/// Project namespace prefix stripped, together with its separator
/// character, from the front of a segment name.
const NAMESPACE_PREFIX: &str = "auv";

/// Bracket pairs assigned to kept segments, outermost first. A fourth
/// or later kept segment cycles back through the same three styles.
const BRACKETS: [(char, char); 3] = [('<', '>'), ('(', ')'), ('[', ']')];

/// Whether a line's header carries function and line detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verbosity {
  /// Bracketed path tag only.
  Normal,
  /// Bracketed path tag plus function name and line number.
  Fine,
}

impl Verbosity {
  /// Returns `true` for the fine mode.
  #[must_use]
  pub const fn is_fine(self) -> bool {
    matches!(self, Self::Fine)
  }
}

impl Default for Verbosity {
  fn default() -> Self {
    Self::Normal
  }
}

/// Call-site coordinates captured by the dispatch macros.
#[derive(Debug, Clone, Copy)]
pub struct Location {
  /// Source path as reported by the build, `/`-separated.
  pub path: &'static str,
  /// Fully qualified name of the enclosing function.
  pub function: &'static str,
  /// 1-based line number of the call.
  pub line: u32,
}

/// Renders the compact uppercase tag summarizing the trailing
/// `depth` segments of `path`.
///
/// Segments named `src` or `include` are dropped, and a segment
/// starting with the project namespace prefix loses that prefix plus
/// its separator character. A path with fewer than `depth` segments is
/// summarized whole; a depth of zero yields an empty tag.
///
/// # Examples
///
/// ```
/// use finelog::header::normal_header;
///
/// let tag = normal_header("project/src/module/auv_nav/probe.rs", 4);
/// assert_eq!(tag, "<MODULE>(NAV)[PROBE.RS]");
/// ```
#[must_use]
pub fn normal_header(path: &str, depth: usize) -> String {
  let segments: Vec<&str> = path.split('/').collect();
  let window = depth.min(segments.len());

  let mut tag = String::new();
  let mut kept = 0usize;
  for &segment in &segments[segments.len() - window..] {
    if ELIDED_DIRS.contains(&segment) {
      continue;
    }

    let name = if segment.starts_with(NAMESPACE_PREFIX) {
      segment.get(NAMESPACE_PREFIX.len() + 1..).unwrap_or_default()
    } else {
      segment
    };

    let (open, close) = BRACKETS[kept % BRACKETS.len()];
    tag.push(open);
    tag.push_str(name);
    tag.push(close);
    kept += 1;
  }

  tag.to_uppercase()
}

/// Renders the fine-mode header: the normal tag at the default depth,
/// extended with function name and line number.
#[must_use]
pub fn fine_header(path: &str, function: &str, line: u32) -> String {
  format!(
    "{} {{Function: {function}() Line: {line}}}",
    normal_header(path, DEFAULT_DEPTH)
  )
}

/// Renders the header for one call site in the requested mode.
#[must_use]
pub fn render(location: Location, verbosity: Verbosity) -> String {
  if verbosity.is_fine() {
    fine_header(location.path, location.function, location.line)
  } else {
    normal_header(location.path, DEFAULT_DEPTH)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn elides_reserved_directory_names() {
    assert_eq!(
      normal_header("robot/include/sonar/ping.rs", 4),
      "<ROBOT>(SONAR)[PING.RS]"
    );
    assert_eq!(
      normal_header("robot/src/sonar/ping.rs", 4),
      "<ROBOT>(SONAR)[PING.RS]"
    );
  }

  #[test]
  fn strips_the_namespace_prefix_with_its_separator() {
    assert_eq!(
      normal_header("project/src/module/auv_nav/probe.rs", 4),
      "<MODULE>(NAV)[PROBE.RS]"
    );
  }

  #[test]
  fn leaves_non_prefix_matches_intact() {
    assert_eq!(
      normal_header("depot/xauv_nav/probe.rs", 3),
      "<DEPOT>(XAUV_NAV)[PROBE.RS]"
    );
  }

  #[test]
  fn bare_prefix_segment_maps_to_empty_brackets() {
    assert_eq!(normal_header("depot/auv/probe.rs", 3), "<DEPOT>()[PROBE.RS]");
  }

  #[test]
  fn brackets_nest_outermost_to_innermost() {
    assert_eq!(normal_header("one/two/three", 3), "<ONE>(TWO)[THREE]");
  }

  #[test]
  fn fourth_kept_segment_reuses_the_outermost_style() {
    assert_eq!(
      normal_header("one/two/three/four", 4),
      "<ONE>(TWO)[THREE]<FOUR>"
    );
  }

  #[test]
  fn shallow_paths_are_summarized_whole() {
    assert_eq!(normal_header("lib.rs", 4), "<LIB.RS>");
    assert_eq!(normal_header("src/lib.rs", 4), "<LIB.RS>");
  }

  #[test]
  fn zero_depth_yields_an_empty_tag() {
    assert_eq!(normal_header("one/two/three", 0), "");
  }

  #[test]
  fn absolute_paths_keep_their_leading_empty_segment_out_of_range() {
    // Splitting an absolute path produces a leading empty segment; it
    // only shows up when the window is deep enough to reach it.
    assert_eq!(normal_header("/mission/run.rs", 2), "<MISSION>(RUN.RS)");
    assert_eq!(normal_header("/mission/run.rs", 3), "<>(MISSION)[RUN.RS]");
  }

  #[test]
  fn fine_header_appends_function_and_line() {
    let header = fine_header("robot/src/sonar/ping.rs", "sonar::emit", 27);
    assert_eq!(
      header,
      "<ROBOT>(SONAR)[PING.RS] {Function: sonar::emit() Line: 27}"
    );
  }

  #[test]
  fn normal_mode_never_carries_fine_detail() {
    let location = Location {
      path: "robot/src/sonar/ping.rs",
      function: "sonar::emit",
      line: 27,
    };

    let normal = render(location, Verbosity::Normal);
    assert!(!normal.contains("Function:"));
    assert!(!normal.contains("Line:"));

    let fine = render(location, Verbosity::Fine);
    assert!(fine.contains("Function:"));
    assert!(fine.contains("Line:"));
  }
}
