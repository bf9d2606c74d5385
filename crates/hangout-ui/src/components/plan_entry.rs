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

use super::ActivityLink;

#[derive(Properties, PartialEq)]
pub struct PlanEntryProps {
  pub day:        Day,
  pub activity:   Activity,
  pub link_limit: usize,
  pub on_remove:  Callback<(Day, ActivityId)>
}

#[function_component(PlanEntry)]
pub fn plan_entry(
  props: &PlanEntryProps
) -> Html {
  let day = props.day;
  let id = props.activity.id;
  let on_remove =
    props.on_remove.clone();

  html! {
      <li class="plan-entry">
          <img
              class="plan-thumb"
              src={props.activity.image.clone()}
              alt={props.activity.title.clone()}
          />
          <div class="plan-body">
              <div class="activity-title">{ &props.activity.title }</div>
              <ActivityLink link={props.activity.link.clone()} limit={props.link_limit} />
          </div>
          <button
              type="button"
              class="btn danger"
              title="Remove from this day"
              onclick={move |_| on_remove.emit((day, id))}
          >
              { "✕" }
          </button>
      </li>
  }
}
