use hangout_core::Day;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::DayCell;

#[derive(Properties, PartialEq)]
pub struct DayPickerProps {
  /// Every selectable day with its
  /// planned activity count.
  pub days:      Vec<(Day, usize)>,
  pub selected:  Option<Day>,
  pub on_select: Callback<Day>
}

#[function_component(DayPicker)]
pub fn day_picker(
  props: &DayPickerProps
) -> Html {
  html! {
      <div class="panel day-picker">
          <div class="header">{ "Pick a day" }</div>
          <div class="day-grid">
              {
                  for props.days.iter().map(|(day, planned)| html! {
                      <DayCell
                          day={*day}
                          selected={props.selected == Some(*day)}
                          planned={*planned}
                          on_select={props.on_select.clone()}
                      />
                  })
              }
          </div>
      </div>
  }
}
