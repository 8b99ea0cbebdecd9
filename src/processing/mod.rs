//! Core resize-and-save pipeline

use std::fs;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::debug;

use crate::error::{IconMillError, Result};
use crate::request::ResizeRequest;

pub mod formats;
pub mod resize;

pub use formats::{detect_from_header, ImageContainer};
pub use resize::FilterType;

/// Target icon dimensions, written in this order
pub const ICON_SIZES: [(u32, u32); 3] = [(16, 16), (48, 48), (128, 128)];

/// File size above which the source is memory-mapped instead of read
const MMAP_THRESHOLD: u64 = 100 * 1024 * 1024; // 100MB

/// One written icon file
#[derive(Debug, Clone)]
pub struct SavedIcon {
    pub width: u32,
    pub height: u32,
    pub path: PathBuf,
}

/// Runs the full validate -> resize -> save pipeline for one request
pub struct IconResizer {
    filter: FilterType,
}

impl IconResizer {
    /// Create a resizer with the best available resampling filter
    ///
    /// Filter selection happens here, once per invocation, not per
    /// target size.
    pub fn new() -> Self {
        Self {
            filter: FilterType::best_available(),
        }
    }

    /// Create a resizer with a specific filter
    pub fn with_filter(filter: FilterType) -> Self {
        Self { filter }
    }

    /// Resize the source image to every entry in [`ICON_SIZES`] and
    /// save each as PNG
    ///
    /// `on_saved` is invoked for each size as soon as its file is on
    /// disk, before the next size is processed. Returns the full list
    /// of written icons on success.
    ///
    /// A missing input fails fast with [`IconMillError::InputNotFound`]
    /// before anything is written. A failure mid-loop leaves the
    /// already-written sizes on disk; partial output is an accepted
    /// outcome.
    pub fn resize_and_save<F>(&self, request: &ResizeRequest, mut on_saved: F) -> Result<Vec<SavedIcon>>
    where
        F: FnMut(&SavedIcon),
    {
        if !request.input_image_path.exists() {
            return Err(IconMillError::input_not_found(&request.input_image_path));
        }

        fs::create_dir_all(&request.output_folder)?;

        // The decoded image is owned by this scope and dropped on every
        // exit path.
        let img = load_image(&request.input_image_path)?;
        let filter: image::imageops::FilterType = self.filter.into();

        let mut saved = Vec::with_capacity(ICON_SIZES.len());
        for (width, height) in ICON_SIZES {
            debug!(
                "Resizing {}x{} -> {}x{} using {:?}",
                img.width(),
                img.height(),
                width,
                height,
                self.filter
            );

            // Each size resamples the original decoded image, never a
            // previously resized copy.
            let resized = img.resize_exact(width, height, filter);

            let path = request.output_path(width);
            resized.save_with_format(&path, image::ImageFormat::Png)?;

            let icon = SavedIcon {
                width,
                height,
                path,
            };
            on_saved(&icon);
            saved.push(icon);
        }

        Ok(saved)
    }
}

impl Default for IconResizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode the source image
///
/// Files above [`MMAP_THRESHOLD`] are memory-mapped rather than read
/// into a heap buffer.
fn load_image(path: &Path) -> Result<DynamicImage> {
    let metadata = fs::metadata(path)?;
    let file_size = metadata.len();

    debug!(
        "Loading image: {:?} ({:.2}MB)",
        path,
        file_size as f64 / 1024.0 / 1024.0
    );

    if file_size > MMAP_THRESHOLD {
        load_image_mmap(path)
    } else {
        let data = fs::read(path)?;
        decode(&data)
    }
}

/// Load via memory mapping (for large files)
fn load_image_mmap(path: &Path) -> Result<DynamicImage> {
    use memmap2::MmapOptions;
    use std::fs::File;

    debug!("Using memory mapping for large file: {:?}", path);

    let file = File::open(path)?;
    let mmap = unsafe { MmapOptions::new().map(&file)? };

    decode(&mmap)
}

fn decode(data: &[u8]) -> Result<DynamicImage> {
    if let Some(container) = detect_from_header(data) {
        debug!("Detected {} container", container);
    }

    Ok(image::load_from_memory(data)?)
}
