use leptos::{component, ev::MouseEvent, view, IntoView, SignalGet};
use log::error;
use shared::config::{
    CANCEL_BUTTON_ID, CANCEL_LABEL, MODAL_ID, MODAL_IMAGE_ID, MODAL_TITLE_ID, SAVE_BUTTON_ID,
    SAVE_LABEL,
};

use crate::app_state::CropState;
use crate::event_handlers::{handle_cancel, handle_save};

#[component]
pub fn CropModal(state: CropState) -> impl IntoView {
    let title = state.title();
    let image_ref = state.image_ref();
    let cancel = move |_: MouseEvent| handle_cancel(state);
    let save = move |_: MouseEvent| {
        if let Err(error) = handle_save(state) {
            error!("could not save crop: {}", error);
        }
    };

    view! {
        <div
            id=MODAL_ID
            style="position:fixed; z-index:10001; left:0; top:0; width:100%; height:100%; background:rgba(0,0,0,0.8);"
            style:display=move || {
                if state.is_open() { "block" } else { "none" }
            }
        >
            <div style="background:#fff; margin:2% auto; padding:20px; width:80%; max-width:800px; border-radius:5px; position:relative; box-shadow: 0 4px 15px rgba(0,0,0,0.5);">
                <h3 id=MODAL_TITLE_ID style="margin-top:0;">
                    {move || title.get()}
                </h3>
                <div style="max-height:500px; overflow:hidden; background:#eee;">
                    <img
                        id=MODAL_IMAGE_ID
                        _ref=image_ref
                        src=""
                        style="max-width:100%; display:block;"
                    />
                </div>
                <div style="margin-top:20px; text-align:right;">
                    <button
                        type="button"
                        id=CANCEL_BUTTON_ID
                        class="button"
                        style="background:#ccc; color:#333; margin-right:10px; border:none; padding:10px 20px; cursor:pointer;"
                        on:click=cancel
                    >
                        {CANCEL_LABEL}
                    </button>
                    <button
                        type="button"
                        id=SAVE_BUTTON_ID
                        class="button"
                        style="background:#417690; color:#fff; border:none; padding:10px 20px; cursor:pointer;"
                        on:click=save
                    >
                        {SAVE_LABEL}
                    </button>
                </div>
            </div>
        </div>
    }
}
