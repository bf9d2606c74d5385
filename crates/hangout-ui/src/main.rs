mod app;
mod components;

use web_sys::Element;

const MOUNT_ID: &str = "app";

fn mount_point() -> Option<Element> {
  web_sys::window()?
    .document()?
    .get_element_by_id(MOUNT_ID)
}

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  let Some(root) = mount_point() else {
    tracing::error!(
      mount = MOUNT_ID,
      "planner mount element not found"
    );
    return;
  };

  tracing::info!(
    mount = MOUNT_ID,
    "mounting day planner"
  );
  yew::Renderer::<app::App>::with_root(
    root
  )
  .render();
}
