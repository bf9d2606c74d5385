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
pub struct ActivityCardProps {
  pub activity:     Activity,
  pub selected_day: Option<Day>,
  pub link_limit:   usize,
  pub on_add:       Callback<ActivityId>
}

#[function_component(ActivityCard)]
pub fn activity_card(
  props: &ActivityCardProps
) -> Html {
  let id = props.activity.id;
  let on_add = props.on_add.clone();
  let add_label =
    match props.selected_day {
      | Some(day) => {
        format!("Add to day {day}")
      }
      | None => "Pick a day first".to_string()
    };
  let category =
    if props.activity.category.is_empty() {
      "uncategorized".to_string()
    } else {
      props.activity.category.clone()
    };

  html! {
      <div class="activity-card">
          <img
              class="activity-image"
              src={props.activity.image.clone()}
              alt={props.activity.title.clone()}
          />
          <div class="activity-body">
              <div class="activity-title">{ &props.activity.title }</div>
              <span class="badge">{ category }</span>
              <ActivityLink link={props.activity.link.clone()} limit={props.link_limit} />
          </div>
          <button
              type="button"
              class="btn ok"
              disabled={props.selected_day.is_none()}
              onclick={move |_| on_add.emit(id)}
          >
              { add_label }
          </button>
      </div>
  }
}
