//! The single resize request consumed per invocation

use std::path::{Path, PathBuf};

use crate::error::{IconMillError, Result};

/// Parameters for one resize-and-save run
///
/// Holds the three user-supplied values. All fields are guaranteed
/// non-empty after construction; nothing else about their contents is
/// checked (a base filename containing separators is passed through
/// as-is).
#[derive(Debug, Clone)]
pub struct ResizeRequest {
    /// Path to the source image
    pub input_image_path: PathBuf,
    /// Directory the generated icons are written into
    pub output_folder: PathBuf,
    /// Filename stem, without extension
    pub base_filename: String,
}

impl ResizeRequest {
    /// Build a request, rejecting empty fields
    pub fn new<P, Q, S>(input_image_path: P, output_folder: Q, base_filename: S) -> Result<Self>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        S: Into<String>,
    {
        let input_image_path = input_image_path.as_ref().to_path_buf();
        let output_folder = output_folder.as_ref().to_path_buf();
        let base_filename = base_filename.into();

        if input_image_path.as_os_str().is_empty() {
            return Err(IconMillError::invalid_request(
                "Source image path must not be empty",
            ));
        }
        if output_folder.as_os_str().is_empty() {
            return Err(IconMillError::invalid_request(
                "Output folder path must not be empty",
            ));
        }
        if base_filename.is_empty() {
            return Err(IconMillError::invalid_request(
                "Base filename must not be empty",
            ));
        }

        Ok(Self {
            input_image_path,
            output_folder,
            base_filename,
        })
    }

    /// Output path for one target size
    ///
    /// The name is `{base_filename}{width}.png` - width only. Every
    /// current target is square, so the height is redundant; two
    /// non-square targets sharing a width would collide here.
    pub fn output_path(&self, width: u32) -> PathBuf {
        self.output_folder
            .join(format!("{}{}.png", self.base_filename, width))
    }
}
