use hangout_core::ActivityDraft;
use web_sys::{
  HtmlInputElement,
  InputEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ActivityFormProps {
  pub draft:       ActivityDraft,
  pub categories:  Vec<String>,
  pub on_title:    Callback<String>,
  pub on_category: Callback<String>,
  pub on_link:     Callback<String>,
  pub on_submit:   Callback<()>
}

fn input_value(
  callback: Callback<String>
) -> Callback<InputEvent> {
  Callback::from(
    move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      callback.emit(input.value());
    }
  )
}

#[function_component(ActivityForm)]
pub fn activity_form(
  props: &ActivityFormProps
) -> Html {
  let onsubmit = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |e: SubmitEvent| {
        e.prevent_default();
        on_submit.emit(());
      }
    )
  };

  html! {
      <form class="activity-form" novalidate={true} onsubmit={onsubmit}>
          <input
              class="input"
              type="text"
              placeholder="What should we do?"
              value={props.draft.title.clone()}
              oninput={input_value(props.on_title.clone())}
          />
          <input
              class="input"
              type="text"
              list="activity-categories"
              placeholder="Category (food, park, art...)"
              value={props.draft.category.clone()}
              oninput={input_value(props.on_category.clone())}
          />
          <datalist id="activity-categories">
              {
                  for props.categories.iter().map(|category| html! {
                      <option value={category.clone()} />
                  })
              }
          </datalist>
          <input
              class="input"
              type="text"
              inputmode="url"
              placeholder="Link (optional)"
              value={props.draft.link.clone()}
              oninput={input_value(props.on_link.clone())}
          />
          <button type="submit" class="btn">{ "Add activity" }</button>
      </form>
  }
}

#[cfg(test)]
mod tests {
  use yew::LocalServerRenderer;

  use super::*;

  fn form_props(
    link: &str
  ) -> ActivityFormProps {
    ActivityFormProps {
      draft:       ActivityDraft::new(
        "Gallery", "art", link
      ),
      categories:  vec![
        "art".to_string(),
        "food".to_string(),
      ],
      on_title:    Callback::noop(),
      on_category: Callback::noop(),
      on_link:     Callback::noop(),
      on_submit:   Callback::noop()
    }
  }

  #[tokio::test]
  async fn link_field_is_free_text_and_form_skips_browser_checks()
   {
    let html =
      LocalServerRenderer::<ActivityForm>::with_props(
        form_props("example.com")
      )
      .render()
      .await;

    assert!(html.contains("novalidate"));
    assert!(!html.contains("type=\"url\""));
    assert!(html.contains("example.com"));
  }
}
