use gloo::console;
use hangout_core::{
  ActivityDraft,
  ActivityId,
  Day,
  PlanView,
  PlannerConfig,
  PlannerState
};
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_effect_with,
  use_state
};

use crate::components::{
  ActivityForm,
  ActivityPool,
  DailyPlan,
  DayPicker
};

const PLANNER_CONFIG_TOML: &str =
  include_str!("../assets/planner.toml");

#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_state(load_planner_config);
  let planner = {
    let config_snapshot =
      (*config).clone();
    use_state(move || {
      PlannerState::new(&config_snapshot)
    })
  };
  let draft_title =
    use_state(String::new);
  let draft_category =
    use_state(String::new);
  let draft_link =
    use_state(String::new);

  {
    use_effect_with((), move |_| {
      log_ui_event(
        "app.mounted",
        "planner mounted and hooks \
         initialized"
      );
      || ()
    });
  }

  {
    let planner = planner.clone();
    use_effect_with(
      (*planner).clone(),
      move |state| {
        match state.snapshot_json() {
          | Ok(json) => {
            log_ui_event(
              "planner.changed",
              &json
            );
          }
          | Err(error) => {
            tracing::error!(%error, "failed to snapshot planner state");
          }
        }
        || ()
      }
    );
  }

  let on_select_day = {
    let planner = planner.clone();
    Callback::from(move |day: Day| {
      let mut next = (*planner).clone();
      next.select_day(day);
      planner.set(next);
    })
  };

  let on_title = {
    let draft_title =
      draft_title.clone();
    Callback::from(
      move |value: String| {
        draft_title.set(value)
      }
    )
  };

  let on_category = {
    let draft_category =
      draft_category.clone();
    Callback::from(
      move |value: String| {
        draft_category.set(value)
      }
    )
  };

  let on_link = {
    let draft_link = draft_link.clone();
    Callback::from(
      move |value: String| {
        draft_link.set(value)
      }
    )
  };

  let on_submit_activity = {
    let planner = planner.clone();
    let draft_title =
      draft_title.clone();
    let draft_category =
      draft_category.clone();
    let draft_link = draft_link.clone();
    Callback::from(move |_: ()| {
      let draft = ActivityDraft::new(
        (*draft_title).clone(),
        (*draft_category).clone(),
        (*draft_link).clone()
      );

      let mut next = (*planner).clone();
      let Some(id) =
        next.add_activity(&draft)
      else {
        tracing::debug!(
          "ignored activity with empty \
           title"
        );
        return;
      };

      planner.set(next);
      draft_title.set(String::new());
      draft_category.set(String::new());
      draft_link.set(String::new());
      log_ui_event(
        "activity.added",
        &format!("id={id}")
      );
    })
  };

  let on_add_to_day = {
    let planner = planner.clone();
    Callback::from(
      move |id: ActivityId| {
        let mut next =
          (*planner).clone();
        if let Some(day) =
          next.add_to_day(id)
        {
          planner.set(next);
          log_ui_event(
            "plan.added",
            &format!("id={id} day={day}")
          );
        }
      }
    )
  };

  let on_remove = {
    let planner = planner.clone();
    Callback::from(
      move |(day, id): (
        Day,
        ActivityId
      )| {
        let mut next =
          (*planner).clone();
        let removed =
          next.remove_activity(day, id);
        if removed > 0 {
          planner.set(next);
          log_ui_event(
            "plan.removed",
            &format!(
              "id={id} day={day} \
               removed={removed}"
            )
          );
        }
      }
    )
  };

  let days = planner
    .days()
    .map(|day| {
      (day, planner.planned_count(day))
    })
    .collect::<Vec<_>>();
  let categories = planner
    .catalog()
    .categories()
    .map(str::to_string)
    .collect::<Vec<_>>();
  let draft = ActivityDraft::new(
    (*draft_title).clone(),
    (*draft_category).clone(),
    (*draft_link).clone()
  );
  let view = planner.plan_view();
  let message = view.message();
  let entries = match view {
    | PlanView::Entries(_, entries) => {
      entries.to_vec()
    }
    | _ => Vec::new()
  };

  html! {
      <div class="planner">
          <header class="planner-header">
              <h1>{ "we should hangout" }</h1>
              <p>{ "let’s make it happen." }</p>
          </header>
          <div class="planner-panels">
              <DayPicker
                  days={days}
                  selected={planner.selected_day()}
                  on_select={on_select_day}
              />
              <div class="panel pool">
                  <div class="header">{ "Activity ideas" }</div>
                  <ActivityForm
                      draft={draft}
                      categories={categories}
                      on_title={on_title}
                      on_category={on_category}
                      on_link={on_link}
                      on_submit={on_submit_activity}
                  />
                  <ActivityPool
                      activities={planner.pool().to_vec()}
                      selected_day={planner.selected_day()}
                      link_limit={config.link_display_limit}
                      on_add={on_add_to_day}
                  />
              </div>
              <DailyPlan
                  selected_day={planner.selected_day()}
                  entries={entries}
                  message={message}
                  link_limit={config.link_display_limit}
                  on_remove={on_remove}
              />
          </div>
      </div>
  }
}

fn load_planner_config() -> PlannerConfig {
  match PlannerConfig::from_toml_str(
    PLANNER_CONFIG_TOML
  ) {
    | Ok(config) => config,
    | Err(error) => {
      tracing::error!(error = %format!("{error:#}"), "failed parsing planner config; using defaults");
      PlannerConfig::default()
    }
  }
}

/// Mirrors planner events into the
/// browser console next to tracing.
fn log_ui_event(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    target: "hangout_ui::events",
    %event,
    %detail,
    "planner event"
  );
  console::debug!(format!(
    "planner {event} {detail}"
  ));
}
