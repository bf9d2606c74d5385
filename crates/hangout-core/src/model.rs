use std::fmt;

use serde::Serialize;

/// Identifier handed out by the
/// planner's [`IdGenerator`].
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
#[serde(transparent)]
pub struct ActivityId(pub u64);

impl fmt::Display for ActivityId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Day-of-month number as shown in the
/// day picker (1-based).
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
#[serde(transparent)]
pub struct Day(pub u8);

impl Day {
  pub fn number(self) -> u8 {
    self.0
  }

  /// Days `1..=count` in display order.
  pub fn range(
    count: u8
  ) -> impl Iterator<Item = Day> {
    (1..=count).map(Day)
  }
}

impl fmt::Display for Day {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  PartialEq,
  Eq,
)]
pub struct Activity {
  pub id:       ActivityId,
  pub title:    String,
  pub category: String,
  pub link:     String,
  pub image:    String
}

/// Raw form input for a new activity.
/// Nothing is normalized until the
/// planner accepts it.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct ActivityDraft {
  pub title:    String,
  pub category: String,
  pub link:     String
}

impl ActivityDraft {
  pub fn new(
    title: impl Into<String>,
    category: impl Into<String>,
    link: impl Into<String>
  ) -> Self {
    Self {
      title:    title.into(),
      category: category.into(),
      link:     link.into()
    }
  }

  pub fn normalized_title(
    &self
  ) -> Option<String> {
    let title = self.title.trim();
    if title.is_empty() {
      None
    } else {
      Some(title.to_string())
    }
  }

  pub fn normalized_category(
    &self
  ) -> String {
    normalize_category(&self.category)
  }

  pub fn normalized_link(
    &self
  ) -> String {
    self.link.trim().to_string()
  }
}

pub fn normalize_category(
  raw: &str
) -> String {
  raw.trim().to_lowercase()
}

/// Monotonic id source. Ids are never
/// reused, even after activities leave
/// a day's plan.
#[derive(
  Debug,
  Clone,
  Default,
  Serialize,
  PartialEq,
  Eq,
)]
pub struct IdGenerator {
  next: u64
}

impl IdGenerator {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn next_id(
    &mut self
  ) -> ActivityId {
    self.next += 1;
    ActivityId(self.next)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn draft_normalization_trims_and_lowercases()
   {
    let draft = ActivityDraft::new(
      "  Picnic  ",
      "  PaRk ",
      " https://example.com/p  "
    );

    assert_eq!(
      draft.normalized_title(),
      Some("Picnic".to_string())
    );
    assert_eq!(
      draft.normalized_category(),
      "park"
    );
    assert_eq!(
      draft.normalized_link(),
      "https://example.com/p"
    );
  }

  #[test]
  fn whitespace_title_normalizes_to_none()
   {
    let draft =
      ActivityDraft::new("   \t", "food", "");
    assert_eq!(
      draft.normalized_title(),
      None
    );
  }

  #[test]
  fn id_generator_is_monotonic() {
    let mut ids = IdGenerator::new();
    let a = ids.next_id();
    let b = ids.next_id();
    let c = ids.next_id();

    assert!(a < b && b < c);
    assert_eq!(c, ActivityId(3));
  }

  #[test]
  fn day_range_is_one_based_and_inclusive()
   {
    let days =
      Day::range(30).collect::<Vec<_>>();
    assert_eq!(days.len(), 30);
    assert_eq!(days[0], Day(1));
    assert_eq!(days[29], Day(30));
  }
}
