//! Crop overlay implemented on decoded pixels instead of the page's cropper
//! library. The selection starts the way cropper.js places it with
//! `autoCropArea`: as large as the aspect ratio allows, centered.

use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use log::debug;

use crate::{CropError, CropOverlay, CropperOptions};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// Largest rectangle of `aspect_ratio` inside the image, scaled by
    /// `area` (0..=1) and centered.
    pub fn auto(image_width: u32, image_height: u32, aspect_ratio: f64, area: f64) -> Self {
        let image_w = image_width as f64;
        let image_h = image_height as f64;
        let (full_w, full_h) = if image_w / image_h > aspect_ratio {
            (image_h * aspect_ratio, image_h)
        } else {
            (image_w, image_w / aspect_ratio)
        };
        let area = area.clamp(0., 1.);
        let width = (full_w * area).round().clamp(1., image_w) as u32;
        let height = (full_h * area).round().clamp(1., image_h) as u32;

        Self {
            x: (image_width - width) / 2,
            y: (image_height - height) / 2,
            width,
            height,
        }
    }

    /// Moves and shrinks the rectangle until it lies inside the image.
    fn clamped(self, image_width: u32, image_height: u32) -> Self {
        let width = self.width.clamp(1, image_width);
        let height = self.height.clamp(1, image_height);
        Self {
            x: self.x.min(image_width - width),
            y: self.y.min(image_height - height),
            width,
            height,
        }
    }
}

pub struct RasterCropper {
    image: Option<DynamicImage>,
    format: ImageFormat,
    selection: CropRect,
}

impl RasterCropper {
    pub fn new(bytes: &[u8], media_type: &str, options: &CropperOptions) -> Result<Self, CropError> {
        let format = ImageFormat::from_mime_type(media_type)
            .filter(|format| format.reading_enabled() && format.writing_enabled())
            .ok_or_else(|| CropError::UnsupportedMediaType(media_type.to_string()))?;
        let image = image::load_from_memory_with_format(bytes, format).map_err(CropError::Decode)?;
        Self::from_decoded(image, format, options)
    }

    fn from_decoded(
        image: DynamicImage,
        format: ImageFormat,
        options: &CropperOptions,
    ) -> Result<Self, CropError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(CropError::EmptyImage);
        }
        let selection = CropRect::auto(width, height, options.aspect_ratio, options.auto_crop_area);
        debug!(
            "raster crop of {}x{} {:?}, selection {:?}",
            width, height, format, selection
        );

        Ok(Self {
            image: Some(image),
            format,
            selection,
        })
    }

    pub fn selection(&self) -> CropRect {
        self.selection
    }

    pub fn set_selection(&mut self, selection: CropRect) -> Result<(), CropError> {
        let image = self.image.as_ref().ok_or(CropError::OverlayDestroyed)?;
        let (width, height) = image.dimensions();
        self.selection = selection.clamped(width, height);
        Ok(())
    }
}

impl CropOverlay for RasterCropper {
    type Raster = Vec<u8>;

    fn render(&self, width: u32, height: u32) -> Result<Vec<u8>, CropError> {
        let image = self.image.as_ref().ok_or(CropError::OverlayDestroyed)?;
        let CropRect {
            x,
            y,
            width: crop_width,
            height: crop_height,
        } = self.selection;
        let cropped = image
            .crop_imm(x, y, crop_width, crop_height)
            .resize_exact(width, height, FilterType::Lanczos3);
        // jpeg has no alpha channel
        let cropped = match self.format {
            ImageFormat::Jpeg => DynamicImage::ImageRgb8(cropped.to_rgb8()),
            _ => cropped,
        };

        let mut encoded = Cursor::new(Vec::new());
        cropped
            .write_to(&mut encoded, self.format)
            .map_err(CropError::Encode)?;
        Ok(encoded.into_inner())
    }

    fn destroy(&mut self) {
        self.image = None;
    }
}
