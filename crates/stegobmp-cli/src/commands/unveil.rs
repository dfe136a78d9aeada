use std::path::PathBuf;

use clap::Args;
use stegobmp_core::history::Category;

use super::Session;
use crate::CliResult;

/// Unveils a text message from a BMP image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains a secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "bmp source file",
        required = true
    )]
    pub image: PathBuf,

    /// Also store the message in that file
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self, session: &mut Session) -> CliResult<()> {
        session.record_file(&self.image);
        let message =
            stegobmp_core::commands::unveil(&self.image, self.output_file.as_deref())?;
        session.record(Category::ExtractedMessages, &message);
        println!("{message}");

        Ok(())
    }
}
