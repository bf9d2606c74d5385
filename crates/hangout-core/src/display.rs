use std::borrow::Cow;

pub const SELECT_DAY_PROMPT: &str =
  "Select a day to see or build your plan.";
pub const EMPTY_PLAN_MESSAGE: &str =
  "No activities yet...";
pub const ELLIPSIS: &str = "...";

/// Shortens `link` for display. Only the
/// label is shortened; callers keep the
/// full link as the navigation target.
pub fn display_link(
  link: &str,
  limit: usize
) -> Cow<'_, str> {
  match link.char_indices().nth(limit) {
    | None => Cow::Borrowed(link),
    | Some((cut, _)) => {
      Cow::Owned(format!(
        "{}{ELLIPSIS}",
        &link[..cut]
      ))
    }
  }
}

/// Label and navigation target for a
/// rendered link. The target is always
/// the untouched link.
pub fn link_parts(
  link: &str,
  limit: usize
) -> (Cow<'_, str>, &str) {
  (display_link(link, limit), link)
}

pub fn day_heading(day: u8) -> String {
  format!("Day {day}")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn short_links_are_left_alone() {
    let link = "https://example.com";
    assert!(matches!(
      display_link(link, 30),
      Cow::Borrowed(_)
    ));
    assert_eq!(
      display_link(link, 30),
      link
    );
  }

  #[test]
  fn link_at_exact_limit_is_not_truncated()
   {
    let link = "a".repeat(30);
    assert_eq!(
      display_link(&link, 30),
      link.as_str()
    );
  }

  #[test]
  fn long_links_get_an_ellipsis() {
    let link = "https://example.com/a/very/long/path/to/somewhere";
    let shown = display_link(link, 30);

    assert_eq!(
      shown,
      "https://example.com/a/very/lon..."
    );
    assert_eq!(
      shown.chars().count(),
      33
    );
  }

  #[test]
  fn long_link_targets_the_full_url() {
    let link = "https://example.com/a/very/long/path/to/somewhere";
    let (label, href) =
      link_parts(link, 30);

    assert!(label.ends_with(ELLIPSIS));
    assert_ne!(label, link);
    assert_eq!(href, link);
  }

  #[test]
  fn truncation_respects_char_boundaries()
   {
    let link = "https://例え.jp/".to_string()
      + &"é".repeat(40);
    let shown = display_link(&link, 30);
    assert!(shown.ends_with(ELLIPSIS));
    assert_eq!(
      shown.chars().count(),
      33
    );
  }
}
