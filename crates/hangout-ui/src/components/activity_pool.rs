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

use super::ActivityCard;

#[derive(Properties, PartialEq)]
pub struct ActivityPoolProps {
  pub activities:   Vec<Activity>,
  pub selected_day: Option<Day>,
  pub link_limit:   usize,
  pub on_add:       Callback<ActivityId>
}

#[function_component(ActivityPool)]
pub fn activity_pool(
  props: &ActivityPoolProps
) -> Html {
  if props.activities.is_empty() {
    return html! {
        <div class="pool-empty">{ "No ideas yet. Add one above." }</div>
    };
  }

  html! {
      <div class="activity-pool">
          {
              for props.activities.iter().cloned().map(|activity| html! {
                  <ActivityCard
                      key={activity.id.0}
                      activity={activity.clone()}
                      selected_day={props.selected_day}
                      link_limit={props.link_limit}
                      on_add={props.on_add.clone()}
                  />
              })
          }
      </div>
  }
}
