//! IconMill - Fixed-Size PNG Icon Generator
//!
//! A small, synchronous library for turning one source image into the
//! standard browser-extension icon set: 16x16, 48x48 and 128x128 PNG
//! files written next to each other under a common base name.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use iconmill::{IconResizer, ResizeRequest};
//!
//! let request = ResizeRequest::new("icon.png", "out", "app_icon")?;
//! let resizer = IconResizer::new();
//!
//! for icon in resizer.resize_and_save(&request, |_| {})? {
//!     println!("wrote {} ({}x{})", icon.path.display(), icon.width, icon.height);
//! }
//! # Ok::<(), iconmill::IconMillError>(())
//! ```

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod interact;
pub mod processing;
pub mod request;

// Re-export commonly used types
pub use error::{IconMillError, Result};
pub use processing::{IconResizer, SavedIcon, ICON_SIZES};
pub use request::ResizeRequest;

use tracing::info;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the IconMill library with default settings
///
/// Installs a `tracing` subscriber driven by `RUST_LOG`. Safe to call
/// more than once; later calls are no-ops.
pub fn init() -> Result<()> {
    if tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .finish(),
    )
    .is_ok()
    {
        info!("IconMill v{} initialized", VERSION);
    }

    Ok(())
}
