use hangout_core::Day;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct DayCellProps {
  pub day:       Day,
  pub selected:  bool,
  pub planned:   usize,
  pub on_select: Callback<Day>
}

#[function_component(DayCell)]
pub fn day_cell(
  props: &DayCellProps
) -> Html {
  let day = props.day;
  let on_select =
    props.on_select.clone();

  html! {
      <button
          type="button"
          class={classes!(
              "day-cell",
              props.selected.then_some("selected"),
              (props.planned > 0).then_some("has-plan")
          )}
          onclick={move |_| on_select.emit(day)}
      >
          <span class="day-number">{ day.to_string() }</span>
          {
              if props.planned > 0 {
                  html! { <span class="badge day-count">{ props.planned.to_string() }</span> }
              } else {
                  html! {}
              }
          }
      </button>
  }
}
