//! Reference image loading for the 3-D fixture.
//!
//! The bitmap is looked up in the working directory first, then in the
//! copy bundled under the crate's `fixtures/` directory. A missing or
//! undecodable asset is fatal; the builder never synthesizes a substitute.

use std::path::{Path, PathBuf};

use log::info;

use crate::error::VaultError;

/// Directory holding the bundled asset copies.
const FIXTURE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures");

/// Decoded RGB image: row-major height x width x channel bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImageData {
    pub height: usize,
    pub width: usize,
    /// One single-letter label per channel, in storage order.
    pub channels: Vec<String>,
    pub pixels: Vec<u8>,
}

impl RgbImageData {
    pub fn shape(&self) -> Vec<usize> {
        vec![self.height, self.width, self.channels.len()]
    }
}

/// Load `name` from the working directory, falling back to the bundled
/// copy under `fixtures/`.
pub fn load_reference_image(name: &str) -> Result<RgbImageData, VaultError> {
    let local = PathBuf::from(name);
    let path = if local.exists() {
        local
    } else {
        Path::new(FIXTURE_DIR).join(name)
    };

    let decoded = image::open(&path).map_err(|err| VaultError::AssetUnreadable {
        path: path.clone(),
        reason: err.to_string(),
    })?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    info!("[Assets] Loaded {}x{} bitmap from {:?}", width, height, path);

    Ok(RgbImageData {
        height: height as usize,
        width: width as usize,
        channels: vec!["R".to_string(), "G".to_string(), "B".to_string()],
        pixels: rgb.into_raw(),
    })
}
