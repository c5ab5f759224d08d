use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;

use crate::config::{CROPPER_AUTO_CROP_AREA, CROPPER_VIEW_MODE};
use crate::CropConfig;

pub trait ToJsObject {
    fn to_js_object(&self) -> Object;
}

/// Construction options handed to the crop overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropperOptions {
    pub aspect_ratio: f64,
    pub view_mode: u8,
    pub auto_crop_area: f64,
}

impl CropperOptions {
    pub fn new(aspect_ratio: f64) -> Self {
        Self {
            aspect_ratio,
            view_mode: CROPPER_VIEW_MODE,
            auto_crop_area: CROPPER_AUTO_CROP_AREA,
        }
    }
}

impl From<&CropConfig> for CropperOptions {
    fn from(config: &CropConfig) -> Self {
        Self::new(config.aspect_ratio())
    }
}

impl ToJsObject for CropperOptions {
    fn to_js_object(&self) -> Object {
        let options = Object::new();
        set(&options, "aspectRatio", JsValue::from_f64(self.aspect_ratio));
        set(&options, "viewMode", JsValue::from_f64(self.view_mode as f64));
        set(&options, "autoCropArea", JsValue::from_f64(self.auto_crop_area));
        options
    }
}

/// Options for rendering the current crop selection to a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CroppedCanvasOptions {
    pub width: u32,
    pub height: u32,
}

impl From<&CropConfig> for CroppedCanvasOptions {
    fn from(config: &CropConfig) -> Self {
        Self {
            width: config.output_width(),
            height: config.output_height(),
        }
    }
}

impl ToJsObject for CroppedCanvasOptions {
    fn to_js_object(&self) -> Object {
        let options = Object::new();
        set(&options, "width", JsValue::from_f64(self.width as f64));
        set(&options, "height", JsValue::from_f64(self.height as f64));
        set(&options, "imageSmoothingEnabled", JsValue::TRUE);
        set(&options, "imageSmoothingQuality", JsValue::from_str("high"));
        options
    }
}

fn set(object: &Object, key: &str, value: JsValue) {
    // setting a data property on a fresh plain object cannot throw
    let _ = Reflect::set(object, &JsValue::from_str(key), &value);
}
