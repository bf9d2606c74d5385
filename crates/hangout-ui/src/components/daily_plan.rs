use hangout_core::display::day_heading;
use hangout_core::{
  Activity,
  ActivityId,
  Day
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::PlanEntry;

#[derive(Properties, PartialEq)]
pub struct DailyPlanProps {
  pub selected_day: Option<Day>,
  pub entries:      Vec<Activity>,
  /// Set when there is nothing to list.
  pub message:      Option<&'static str>,
  pub link_limit:   usize,
  pub on_remove:
    Callback<(Day, ActivityId)>
}

#[function_component(DailyPlan)]
pub fn daily_plan(
  props: &DailyPlanProps
) -> Html {
  let heading = props
    .selected_day
    .map(|day| day_heading(day.number()))
    .unwrap_or_else(|| {
      "Your plan".to_string()
    });

  let body = match (
    props.selected_day,
    props.message
  ) {
    | (_, Some(message)) => html! {
        <div class="plan-message">{ message }</div>
    },
    | (Some(day), None) => html! {
        <ul class="plan-list">
            {
                for props.entries.iter().cloned().enumerate().map(|(slot, activity)| html! {
                    <PlanEntry
                        key={format!("{}-{slot}", activity.id)}
                        day={day}
                        activity={activity.clone()}
                        link_limit={props.link_limit}
                        on_remove={props.on_remove.clone()}
                    />
                })
            }
        </ul>
    },
    | (None, None) => html! {}
  };

  html! {
      <div class="panel daily-plan">
          <div class="header">{ heading }</div>
          { body }
      </div>
  }
}
