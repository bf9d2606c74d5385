use hangout_core::catalog::{
  DEFAULT_IMAGE,
  FOOD_IMAGE
};
use hangout_core::display::link_parts;
use hangout_core::{
  ActivityDraft,
  Day,
  PlanView,
  PlannerConfig,
  PlannerState
};

#[test]
fn plan_a_day_then_clear_it() {
  let cfg = PlannerConfig::from_toml_str(
    include_str!(
      "../../hangout-ui/assets/planner.toml"
    )
  )
  .expect("bundled config parses");
  let mut state = PlannerState::new(&cfg);
  assert_eq!(state.days().count(), 30);

  let tacos = state
    .add_activity(&ActivityDraft::new(
      "Tacos",
      "food",
      "https://example.com/restaurants/tacos-al-pastor"
    ))
    .expect("tacos added");
  let climb = state
    .add_activity(&ActivityDraft::new(
      "Climbing gym",
      "hiking",
      ""
    ))
    .expect("climb added");
  assert!(
    state
      .add_activity(&ActivityDraft::new(
        "   ", "food", ""
      ))
      .is_none()
  );
  assert_eq!(state.pool().len(), 2);

  // nothing selected yet
  assert_eq!(state.add_to_day(tacos), None);
  assert_eq!(
    state.plan_view(),
    PlanView::NoDaySelected
  );

  state.select_day(Day(5));
  state.add_to_day(tacos);
  state.add_to_day(tacos);
  state.add_to_day(climb);

  let PlanView::Entries(day, entries) =
    state.plan_view()
  else {
    panic!("day 5 should have entries");
  };
  assert_eq!(day, Day(5));
  assert_eq!(entries.len(), 3);
  assert_eq!(entries[0].image, FOOD_IMAGE);
  assert_eq!(
    entries[2].image,
    DEFAULT_IMAGE
  );

  let link = &entries[0].link;
  let (shown, href) = link_parts(
    link,
    cfg.link_display_limit
  );
  assert!(shown.ends_with("..."));
  assert_ne!(shown, link.as_str());
  assert!(link.starts_with(
    shown.trim_end_matches("...")
  ));
  assert_eq!(
    href,
    "https://example.com/restaurants/tacos-al-pastor"
  );

  assert_eq!(
    state.remove_activity(Day(5), tacos),
    2
  );
  assert_eq!(
    state.remove_activity(Day(5), climb),
    1
  );
  assert_eq!(
    state.plan_view(),
    PlanView::Empty(Day(5))
  );
  assert_eq!(state.pool().len(), 2);

  // other days were never touched
  state.select_day(Day(6));
  assert_eq!(
    state.plan_view().message(),
    Some("No activities yet...")
  );
}

#[test]
fn snapshot_serializes_plan_by_day() {
  let mut state = PlannerState::default();
  let id = state
    .add_activity(&ActivityDraft::new(
      "Museum", "Art", ""
    ))
    .expect("added");
  state.select_day(Day(12));
  state.add_to_day(id);

  let json = state
    .snapshot_json()
    .expect("snapshot serializes");
  let value: serde_json::Value =
    serde_json::from_str(&json)
      .expect("valid json");

  assert_eq!(value["selected_day"], 12);
  assert_eq!(
    value["plan"]["12"][0]["title"],
    "Museum"
  );
  assert_eq!(
    value["pool"][0]["category"],
    "art"
  );
  assert_eq!(value["pool"][0]["id"], 1);
}
