//! File based entry points, every one follows the same builder flow:
//! `prepare()`, a couple of `with_*` calls, then `execute()`.
//!
//! This is the only place where files are read or written, the codec itself
//! works on byte buffers.

pub mod hide;
pub mod preview;
pub mod synthesize;
pub mod unveil;
pub mod unveil_raw;

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;

use crate::error::StegoError;
use crate::media::PatternId;
use crate::result::Result;

pub(crate) fn read_media(path: &Path) -> Result<Vec<u8>> {
    debug!("reading {path:?}");
    fs::read(path).map_err(|source| StegoError::ReadError { source })
}

pub(crate) fn write_media(path: &Path, bytes: &[u8]) -> Result<()> {
    debug!("writing {} bytes to {path:?}", bytes.len());
    fs::write(path, bytes).map_err(|source| StegoError::WriteError { source })
}

/// `p{pattern}_{timestamp}.bmp`, the default name of a synthesized image
pub fn synthesized_file_name(pattern: PatternId) -> String {
    format!("p{pattern}_{}.bmp", short_timestamp())
}

/// `hidden_{pattern}_{timestamp}.bmp`, the default name of an image carrying a message
pub fn hidden_file_name(pattern: PatternId) -> String {
    format!("hidden_{pattern}_{}.bmp", short_timestamp())
}

/// last six digits of the current unix time in milliseconds
fn short_timestamp() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();

    format!("{:06}", millis % 1_000_000)
}
