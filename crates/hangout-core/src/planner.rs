use std::collections::BTreeMap;

use anyhow::Context;
use serde::Serialize;
use tracing::{
  debug,
  info,
  warn
};

use crate::catalog::ImageCatalog;
use crate::config::PlannerConfig;
use crate::display::{
  EMPTY_PLAN_MESSAGE,
  SELECT_DAY_PROMPT
};
use crate::model::{
  Activity,
  ActivityDraft,
  ActivityId,
  Day,
  IdGenerator
};

/// What the daily plan panel should
/// show for the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanView<'a> {
  NoDaySelected,
  Empty(Day),
  Entries(Day, &'a [Activity])
}

impl PlanView<'_> {
  pub fn message(
    &self
  ) -> Option<&'static str> {
    match self {
      | PlanView::NoDaySelected => {
        Some(SELECT_DAY_PROMPT)
      }
      | PlanView::Empty(_) => {
        Some(EMPTY_PLAN_MESSAGE)
      }
      | PlanView::Entries(..) => None
    }
  }
}

/// All planner state: the focused day,
/// the activity pool and the per-day
/// plans.
#[derive(
  Debug,
  Clone,
  Serialize,
  PartialEq,
  Eq,
)]
pub struct PlannerState {
  day_count:    u8,
  selected_day: Option<Day>,
  pool:         Vec<Activity>,
  plan:         BTreeMap<Day, Vec<Activity>>,
  ids:          IdGenerator,
  #[serde(skip)]
  catalog:      ImageCatalog
}

impl Default for PlannerState {
  fn default() -> Self {
    Self::new(&PlannerConfig::default())
  }
}

impl PlannerState {
  pub fn new(
    config: &PlannerConfig
  ) -> Self {
    Self {
      day_count:    config.day_count(),
      selected_day: None,
      pool:         Vec::new(),
      plan:         BTreeMap::new(),
      ids:          IdGenerator::new(),
      catalog:      config.image_catalog()
    }
  }

  pub fn days(
    &self
  ) -> impl Iterator<Item = Day> {
    Day::range(self.day_count)
  }

  pub fn selected_day(
    &self
  ) -> Option<Day> {
    self.selected_day
  }

  pub fn pool(&self) -> &[Activity] {
    &self.pool
  }

  pub fn catalog(&self) -> &ImageCatalog {
    &self.catalog
  }

  pub fn activity(
    &self,
    id: ActivityId
  ) -> Option<&Activity> {
    self
      .pool
      .iter()
      .find(|activity| activity.id == id)
  }

  #[tracing::instrument(skip(self))]
  pub fn select_day(&mut self, day: Day) {
    if day.number() == 0
      || day.number() > self.day_count
    {
      warn!(
        day = day.number(),
        day_count = self.day_count,
        "selected day outside picker \
         range"
      );
    }
    self.selected_day = Some(day);
    debug!(day = day.number(), "selected day");
  }

  /// Adds a pool activity built from the
  /// draft. A blank title is ignored and
  /// yields `None`.
  #[tracing::instrument(skip_all)]
  pub fn add_activity(
    &mut self,
    draft: &ActivityDraft
  ) -> Option<ActivityId> {
    let Some(title) =
      draft.normalized_title()
    else {
      debug!(
        "ignored activity with blank \
         title"
      );
      return None;
    };

    let category =
      draft.normalized_category();
    let image = self
      .catalog
      .resolve(&category)
      .to_string();
    let id = self.ids.next_id();

    info!(
      id = %id,
      category = %category,
      "added activity to pool"
    );
    self.pool.push(Activity {
      id,
      title,
      category,
      link: draft.normalized_link(),
      image
    });
    Some(id)
  }

  pub fn can_add_to_day(&self) -> bool {
    self.selected_day.is_some()
  }

  /// Appends a pool activity to the
  /// selected day. Returns the day it
  /// landed on, or `None` when no day is
  /// selected or the id is unknown.
  #[tracing::instrument(skip(self))]
  pub fn add_to_day(
    &mut self,
    id: ActivityId
  ) -> Option<Day> {
    let Some(day) = self.selected_day
    else {
      debug!(
        "no day selected; add to day \
         ignored"
      );
      return None;
    };
    let Some(activity) =
      self.activity(id).cloned()
    else {
      warn!(id = %id, "activity not in pool");
      return None;
    };

    let entries =
      self.plan.entry(day).or_default();
    entries.push(activity);
    debug!(
      day = day.number(),
      planned = entries.len(),
      "planned activity"
    );
    Some(day)
  }

  /// Removes every entry matching `id`
  /// from the day's plan and returns how
  /// many were removed. The pool is left
  /// untouched.
  #[tracing::instrument(skip(self))]
  pub fn remove_activity(
    &mut self,
    day: Day,
    id: ActivityId
  ) -> usize {
    let Some(entries) =
      self.plan.get_mut(&day)
    else {
      return 0;
    };
    let before = entries.len();
    entries
      .retain(|activity| activity.id != id);
    let removed = before - entries.len();
    debug!(
      day = day.number(),
      removed,
      "removed activity from plan"
    );
    removed
  }

  pub fn plan_for(
    &self,
    day: Day
  ) -> &[Activity] {
    self
      .plan
      .get(&day)
      .map(Vec::as_slice)
      .unwrap_or(&[])
  }

  pub fn planned_count(
    &self,
    day: Day
  ) -> usize {
    self.plan_for(day).len()
  }

  pub fn plan_view(&self) -> PlanView<'_> {
    let Some(day) = self.selected_day
    else {
      return PlanView::NoDaySelected;
    };
    match self.plan_for(day) {
      | [] => PlanView::Empty(day),
      | entries => {
        PlanView::Entries(day, entries)
      }
    }
  }

  pub fn snapshot_json(
    &self
  ) -> anyhow::Result<String> {
    serde_json::to_string(self).context(
      "failed to serialize planner \
       snapshot"
    )
  }
}
