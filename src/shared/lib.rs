pub mod config;
pub mod crop_config;
pub mod dom;
pub mod error;
pub mod js_object;
pub mod navbar;
pub mod raster;
pub mod session;

pub use crop_config::CropConfig;
pub use error::CropError;
pub use js_object::{CroppedCanvasOptions, CropperOptions, ToJsObject};
pub use navbar::{NavbarToggle, NavbarVisibility};
pub use session::{CropOverlay, CropSession, CroppedFile, FileSelection, SessionSlot, SourceFile};
