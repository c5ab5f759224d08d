mod app_state;
mod components;
mod cropper;
mod effects;
mod event_handlers;

use leptos::{component, view, IntoView};

use crate::app_state::CropState;
use crate::components::CropModal;
use crate::effects::use_file_input_changes;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    // appended after the admin page's own markup
    leptos::mount_to_body(|| view! { <App/> })
}

#[component]
fn App() -> impl IntoView {
    let state = CropState::new();
    use_file_input_changes(state);

    view! { <CropModal state=state/> }
}
