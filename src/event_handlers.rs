use log::{error, info};
use shared::dom::{
    changed_file_input, cropped_blob, read_crop_config, show_cropped_preview, FileInput,
};
use shared::{CropError, CropSession, CropperOptions, SourceFile};
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{Event, FileReader, ProgressEvent};

use crate::app_state::{ActiveSession, CropState};
use crate::cropper::JsCropper;

/// Change handler for every file input on the page. Starts a crop session
/// when an image was picked and reads it in the background; the dialog opens
/// once the read finishes.
pub fn handle_file_change(state: CropState, event: Event) -> Result<(), CropError> {
    let Some((input, file)) = changed_file_input(&event) else {
        return Ok(());
    };

    let source = SourceFile::new(file.name(), file.type_());
    let config = read_crop_config(&input);
    let Some(session) = CropSession::start(FileInput(input), config, source) else {
        return Ok(());
    };
    info!("reading {} for cropping", session.source().name);

    let reader = FileReader::new()?;
    let loaded_reader = reader.clone();
    let on_load = Closure::once_into_js(move |_event: ProgressEvent| {
        let data_url = match loaded_reader.result() {
            Ok(result) => result.as_string(),
            Err(error) => {
                error!("could not read selected image: {:?}", error);
                return;
            }
        };
        let Some(data_url) = data_url else {
            error!("file reader returned no data url");
            return;
        };
        if let Err(error) = open_dialog(state, session, &data_url) {
            error!("could not open crop dialog: {}", error);
        }
    });
    reader.set_onload(Some(on_load.unchecked_ref()));
    reader.read_as_data_url(&file)?;
    Ok(())
}

fn open_dialog(state: CropState, session: ActiveSession, data_url: &str) -> Result<(), CropError> {
    let options = CropperOptions::from(session.config());
    let image = state.image()?;

    state.show(session.config().title());
    image.set_src(data_url);
    state.begin(session);

    let overlay = JsCropper::new(&image, &options)?;
    state.attach_overlay(overlay)
}

pub fn handle_cancel(state: CropState) {
    state.close();
    if let Some(session) = state.take_session() {
        session.cancel();
    }
}

/// Renders the crop and encodes it in the original media type. The file is
/// swapped in when the browser hands the encoded blob back.
pub fn handle_save(state: CropState) -> Result<(), CropError> {
    let session = state.take_session().ok_or(CropError::NoActiveSession)?;
    let canvas = match session.render() {
        Ok(canvas) => canvas,
        Err(error) => {
            // keep the dialog usable, e.g. when the image is still loading
            state.begin(session);
            return Err(error);
        }
    };
    let media_type = session.source().media_type.clone();

    let on_blob = Closure::once_into_js(move |blob: JsValue| {
        if let Err(error) = finish_save(state, session, blob) {
            error!("could not save crop: {}", error);
        }
    });
    canvas.to_blob_with_type(on_blob.unchecked_ref(), &media_type)?;
    Ok(())
}

fn finish_save(state: CropState, session: ActiveSession, blob: JsValue) -> Result<(), CropError> {
    let blob = match cropped_blob(blob) {
        Ok(blob) => blob,
        Err(error) => {
            state.close();
            session.cancel();
            return Err(error);
        }
    };

    let saved = session.save(blob.clone(), js_sys::Date::now());
    state.close();
    let FileInput(input) = saved?;

    show_cropped_preview(&input, &blob)?;
    Ok(())
}
