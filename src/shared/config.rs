//! Fixed values shared by the crop dialog and the landing navbar.

/// Output width used when a field carries no usable `data-crop-width`.
pub const DEFAULT_OUTPUT_WIDTH: u32 = 1200;
/// Aspect ratio used when `data-crop-aspect` is missing or unusable.
pub const DEFAULT_ASPECT_RATIO: f64 = 1.0;
/// Upper bound for a height derived from width and aspect ratio; larger
/// canvases fail to allocate in browsers.
pub const MAX_DERIVED_DIMENSION: u32 = 32_767;

pub const CROP_ASPECT_KEY: &str = "cropAspect";
pub const CROP_WIDTH_KEY: &str = "cropWidth";
pub const CROP_HEIGHT_KEY: &str = "cropHeight";
pub const CROP_TITLE_KEY: &str = "cropTitle";

// cropper.js `viewMode: 1` keeps the crop box inside the canvas
pub const CROPPER_VIEW_MODE: u8 = 1;
pub const CROPPER_AUTO_CROP_AREA: f64 = 1.0;

pub const MODAL_ID: &str = "cropper-modal";
pub const MODAL_TITLE_ID: &str = "cropper-modal-title";
pub const MODAL_IMAGE_ID: &str = "cropper-image";
pub const CANCEL_BUTTON_ID: &str = "cropper-cancel";
pub const SAVE_BUTTON_ID: &str = "cropper-save";

pub const CANCEL_LABEL: &str = "İptal";
pub const SAVE_LABEL: &str = "Kırp ve Kaydet";
pub const TITLE_PREFIX: &str = "Görseli Kırp";
pub const CROPPED_NOTICE: &str = " Kırpılmış görsel hazır. ";

pub const FORM_ROW_SELECTOR: &str = "tr, .form-row";
pub const EXISTING_PREVIEW_SELECTOR: &str = ".field-image_preview img, .readonly img";
pub const TEMP_PREVIEW_CLASS: &str = "temp-preview";
pub const TEMP_PREVIEW_STYLE: &str =
    "max-height: 100px; border-radius: 5px; margin-top: 10px; display: block;";
pub const FILE_UPLOAD_SELECTOR: &str = ".file-upload";

pub const NAVBAR_ID: &str = "site-navbar";
pub const LANDING_FLAG_KEY: &str = "landingNav";
pub const LANDING_FLAG_ON: &str = "1";
/// Vertical offset, in CSS pixels, past which the landing navbar slides in.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;
