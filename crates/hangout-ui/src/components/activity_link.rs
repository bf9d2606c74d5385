use hangout_core::display::link_parts;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ActivityLinkProps {
  pub link:  String,
  pub limit: usize
}

#[function_component(ActivityLink)]
pub fn activity_link(
  props: &ActivityLinkProps
) -> Html {
  if props.link.is_empty() {
    return html! {};
  }

  let (label, href) =
    link_parts(&props.link, props.limit);
  let label = label.into_owned();
  let href = href.to_string();

  html! {
      <a
          class="activity-link"
          href={href.clone()}
          title={href}
          target="_blank"
          rel="noopener noreferrer"
      >
          { label }
      </a>
  }
}
