pub mod crop_modal;

pub use crop_modal::CropModal;
