use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stegobmp_core::media::codec_options::DEFAULT_MAX_PIXEL_BYTES;
use stegobmp_core::CodecOptions;

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Experimental: largest pixel buffer in bytes an input image may declare
    #[arg(long = "x-max-pixel-bytes", default_value_t = DEFAULT_MAX_PIXEL_BYTES)]
    pub max_pixel_bytes: usize,

    /// Experimental: only accept uncompressed 24-bit BMP headers
    #[arg(long = "x-strict-header")]
    pub strict_header: bool,

    /// JSON file that keeps the recent files, patterns and messages
    #[arg(long, value_name = "history file", global = true)]
    pub history: Option<PathBuf>,

    /// Name the history entries are recorded for
    #[arg(long, value_name = "user name", default_value = "default", global = true)]
    pub user: String,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions::default()
            .with_max_pixel_bytes(self.max_pixel_bytes)
            .with_strict_header(self.strict_header)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Synthesize(synthesize::SynthesizeArgs),
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    UnveilRaw(unveil_raw::UnveilRawArgs),
    Preview(preview::PreviewArgs),
    History(history::HistoryArgs),
}
