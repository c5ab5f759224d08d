use log::error;
use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{window, Event};

use crate::app_state::CropState;
use crate::event_handlers::handle_file_change;

/// Listens for `change` on the whole document so file inputs added later,
/// like new admin inline rows, are handled without binding them one by one.
pub fn use_file_input_changes(state: CropState) {
    let Some(document) = window().and_then(|window| window.document()) else {
        error!("no document to watch for file inputs");
        return;
    };

    let on_change: Closure<dyn FnMut(Event)> = Closure::new(move |event: Event| {
        if let Err(error) = handle_file_change(state, event) {
            error!("could not start crop session: {}", error);
        }
    });

    match document
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
    {
        Ok(_) => on_change.forget(),
        Err(_) => error!("error setting up listener for file input changes"),
    }
}
