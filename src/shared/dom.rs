//! Admin form markup touched by the crop dialog: the file input itself, the
//! row preview image and the "currently uploaded" text of the file widget.

use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Blob, DataTransfer, Element, Event, File, FilePropertyBag, HtmlInputElement, Node, Url,
};

use crate::config::{
    CROPPED_NOTICE, CROP_ASPECT_KEY, CROP_HEIGHT_KEY, CROP_TITLE_KEY, CROP_WIDTH_KEY,
    EXISTING_PREVIEW_SELECTOR, FILE_UPLOAD_SELECTOR, FORM_ROW_SELECTOR, TEMP_PREVIEW_CLASS,
    TEMP_PREVIEW_STYLE,
};
use crate::{CropConfig, CropError, CroppedFile, FileSelection};

/// A `<input type="file">` on the admin page.
#[derive(Clone)]
pub struct FileInput(pub HtmlInputElement);

impl FileSelection for FileInput {
    type Contents = Blob;

    fn clear(&self) {
        self.0.set_value("");
    }

    fn install(&self, file: CroppedFile<Blob>) -> Result<(), CropError> {
        let options = FilePropertyBag::new();
        options.set_type(&file.media_type);
        options.set_last_modified(file.last_modified);
        let parts = js_sys::Array::of1(&file.contents);
        let file = File::new_with_blob_sequence_and_options(&parts, &file.name, &options)?;

        // a DataTransfer is the only way to build a FileList from script
        let transfer = DataTransfer::new()?;
        transfer.items().add_with_file(&file)?;
        self.0.set_files(transfer.files().as_ref());
        Ok(())
    }
}

/// The file input behind a `change` event and its first selected file.
/// Anything else that changes on the page yields `None`.
pub fn changed_file_input(event: &Event) -> Option<(HtmlInputElement, File)> {
    let input = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())?;
    if input.type_() != "file" {
        return None;
    }
    let file = input.files().and_then(|files| files.get(0))?;
    Some((input, file))
}

pub fn read_crop_config(input: &HtmlInputElement) -> CropConfig {
    let data = input.dataset();
    let aspect = data.get(CROP_ASPECT_KEY);
    let width = data.get(CROP_WIDTH_KEY);
    let height = data.get(CROP_HEIGHT_KEY);
    let title = data.get(CROP_TITLE_KEY);
    let config = CropConfig::from_attributes(
        aspect.as_deref(),
        width.as_deref(),
        height.as_deref(),
        title.as_deref(),
    );
    debug!("crop config for {}: {:?}", input.name(), config);
    config
}

/// `canvas.toBlob` hands back `null` when the canvas could not be encoded.
pub fn cropped_blob(value: JsValue) -> Result<Blob, CropError> {
    value.dyn_into::<Blob>().map_err(|_| CropError::EmptyBlob)
}

/// Shows `blob` next to `input` and marks the upload text. Returns the
/// object url the preview points at.
// TODO: revoke the previous preview url once a row is re-cropped
pub fn show_cropped_preview(input: &HtmlInputElement, blob: &Blob) -> Result<String, CropError> {
    let preview_url = Url::create_object_url_with_blob(blob)?;
    update_preview(input, &preview_url)?;
    mark_upload_text(input)?;
    Ok(preview_url)
}

/// Points the row's preview image at `url`, adding a preview right after the
/// input when the row has none yet.
pub fn update_preview(input: &HtmlInputElement, url: &str) -> Result<(), CropError> {
    let row = input.closest(FORM_ROW_SELECTOR)?;

    if let Some(row) = &row {
        let existing = row.query_selector_all(EXISTING_PREVIEW_SELECTOR)?;
        if existing.length() > 0 {
            for index in 0..existing.length() {
                if let Some(image) = existing
                    .item(index)
                    .and_then(|node| node.dyn_into::<Element>().ok())
                {
                    image.set_attribute("src", url)?;
                }
            }
            return Ok(());
        }
    }

    let temp_selector = format!(".{}", TEMP_PREVIEW_CLASS);
    let preview = match &row {
        Some(row) => row.query_selector(&temp_selector)?,
        None => None,
    };
    let preview = match preview {
        Some(preview) => preview,
        None => {
            let document = input
                .owner_document()
                .ok_or(CropError::MissingElement("document"))?;
            let preview = document.create_element("img")?;
            preview.set_class_name(TEMP_PREVIEW_CLASS);
            preview.set_attribute("style", TEMP_PREVIEW_STYLE)?;
            input.after_with_node_1(&preview)?;
            preview
        }
    };
    preview.set_attribute("src", url)?;
    Ok(())
}

/// Replaces the "currently uploaded" text of the admin file widget.
pub fn mark_upload_text(input: &HtmlInputElement) -> Result<(), CropError> {
    let Some(parent) = input.parent_element() else {
        return Ok(());
    };
    let uploads = parent.query_selector_all(FILE_UPLOAD_SELECTOR)?;
    for index in 0..uploads.length() {
        let Some(upload) = uploads.item(index) else {
            continue;
        };
        let children = upload.child_nodes();
        for child_index in 0..children.length() {
            if let Some(child) = children.item(child_index) {
                if child.node_type() == Node::TEXT_NODE {
                    child.set_node_value(Some(CROPPED_NOTICE));
                    return Ok(());
                }
            }
        }
    }
    Ok(())
}
