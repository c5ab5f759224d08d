use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum CropError {
    #[error("browser call failed: {0}")]
    Js(String),

    #[error("missing element: {0}")]
    MissingElement(&'static str),

    #[error("no crop session is active")]
    NoActiveSession,

    #[error("crop overlay was already destroyed")]
    OverlayDestroyed,

    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("browser could not encode the cropped canvas")]
    EmptyBlob,

    #[error("source image has no pixels")]
    EmptyImage,

    #[error("could not decode source image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("could not encode cropped image: {0}")]
    Encode(#[source] image::ImageError),
}

impl From<JsValue> for CropError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|message| message.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        CropError::Js(message)
    }
}
