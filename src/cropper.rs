use shared::{CropError, CropOverlay, CroppedCanvasOptions, CropperOptions, ToJsObject};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlImageElement};

// cropper.js is loaded by the admin page as a classic script and exposes a
// global `Cropper` class
#[wasm_bindgen]
extern "C" {
    type Cropper;

    #[wasm_bindgen(constructor, catch)]
    fn new(image: &HtmlImageElement, options: &JsValue) -> Result<Cropper, JsValue>;

    #[wasm_bindgen(method, catch, js_name = getCroppedCanvas)]
    fn get_cropped_canvas(this: &Cropper, options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &Cropper);
}

pub struct JsCropper {
    inner: Cropper,
}

impl JsCropper {
    pub fn new(image: &HtmlImageElement, options: &CropperOptions) -> Result<Self, CropError> {
        let inner = Cropper::new(image, &options.to_js_object().into())?;
        Ok(Self { inner })
    }
}

impl CropOverlay for JsCropper {
    type Raster = HtmlCanvasElement;

    fn render(&self, width: u32, height: u32) -> Result<HtmlCanvasElement, CropError> {
        let options = CroppedCanvasOptions { width, height };
        let canvas = self
            .inner
            .get_cropped_canvas(&options.to_js_object().into())?;
        // cropper.js hands back null while the image is still loading
        canvas
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| CropError::MissingElement("cropped canvas"))
    }

    fn destroy(&mut self) {
        self.inner.destroy();
    }
}
