// src/decode/mod.rs
use std::path::{Path, PathBuf};

use eframe::egui;
use thiserror::Error;

/// Errors produced while turning a user-selected file into displayable
/// pixels. Reported to the caller before any tracker state is touched.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a supported image: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// A decoded meal photo: RGBA pixels plus dimensions, ready to upload as an
/// egui texture.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    rgba: Vec<u8>,
}

impl DecodedImage {
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(
            [self.width as usize, self.height as usize],
            &self.rgba,
        )
    }
}

#[cfg(test)]
impl DecodedImage {
    /// Uniform gray image for view-model tests.
    pub fn solid(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rgba: vec![128; (width * height * 4) as usize],
        }
    }
}

/// Read and decode an image file selected by the user.
pub fn decode_image_file(path: &Path) -> Result<DecodedImage, DecodeError> {
    let bytes = std::fs::read(path).map_err(|source| DecodeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode_image_bytes(&bytes).map_err(|source| DecodeError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

fn decode_image_bytes(bytes: &[u8]) -> Result<DecodedImage, image::ImageError> {
    let decoded = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = decoded.dimensions();
    Ok(DecodedImage {
        width,
        height,
        rgba: decoded.into_raw(),
    })
}
