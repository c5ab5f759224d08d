use std::cell::Cell;

use log::{debug, error};
use shared::config::{LANDING_FLAG_KEY, NAVBAR_ID};
use shared::{NavbarToggle, NavbarVisibility};
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{window, AddEventListenerOptions, Event, HtmlElement};

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    if let Err(error) = install_navbar_toggle() {
        error!("could not set up landing navbar: {:?}", error);
    }
}

/// Slides `#site-navbar` in once the page is scrolled past the threshold.
/// Only pages whose body carries `data-landing-nav="1"` are touched.
fn install_navbar_toggle() -> Result<(), JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let Some(navbar) = document
        .get_element_by_id(NAVBAR_ID)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };
    let flag = document
        .body()
        .and_then(|body| body.dataset().get(LANDING_FLAG_KEY));
    let toggle = NavbarToggle::from_flag(flag.as_deref());
    if !toggle.is_landing() {
        return Ok(());
    }

    let last = Cell::new(None::<NavbarVisibility>);
    let apply = move |offset: f64| {
        let Some(visibility) = toggle.on_scroll(offset) else {
            return;
        };
        if let Err(error) = navbar
            .style()
            .set_property("transform", visibility.transform())
        {
            error!("could not move navbar: {:?}", error);
        }
        if last.replace(Some(visibility)) != Some(visibility) {
            debug!("navbar {} at scroll offset {}", visibility, offset);
        }
    };

    apply(window.scroll_y()?);

    let scroll_window = window.clone();
    let on_scroll: Closure<dyn FnMut(Event)> =
        Closure::new(move |_event: Event| match scroll_window.scroll_y() {
            Ok(offset) => apply(offset),
            Err(error) => error!("could not read scroll offset: {:?}", error),
        });

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        on_scroll.as_ref().unchecked_ref(),
        &options,
    )?;
    on_scroll.forget();

    Ok(())
}
