use std::path::PathBuf;

use clap::Args;
use stegobmp_core::CodecOptions;

use crate::CliResult;

/// Exports the pixels of a BMP image as PNG for viewing
#[derive(Args, Debug)]
pub struct PreviewArgs {
    #[arg(short = 'i', long = "in", value_name = "bmp file", required = true)]
    pub image: PathBuf,

    #[arg(short = 'o', long = "out", value_name = "png file", required = true)]
    pub write_to_file: PathBuf,
}

impl PreviewArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        stegobmp_core::commands::preview(&self.image, &self.write_to_file, options)
    }
}
