use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Unveils the hidden bytes without decoding them as text
#[derive(Args, Debug)]
pub struct UnveilRawArgs {
    /// Source image that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "bmp source file",
        required = true
    )]
    pub image: PathBuf,

    /// Raw data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl UnveilRawArgs {
    pub fn run(self) -> CliResult<()> {
        stegobmp_core::commands::unveil_raw(&self.image, &self.output_file)
    }
}
