use std::path::PathBuf;

use clap::Args;
use stegobmp_core::api::hidden_file_name;
use stegobmp_core::history::Category;
use stegobmp_core::{CodecOptions, GradientKey, PatternId, StegoError};

use super::synthesize::resolve_choice;
use super::Session;
use crate::CliResult;

/// Hides a text message in a BMP image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// BMP image, used readonly.
    #[arg(short = 'i', long = "in", value_name = "bmp file", required = true)]
    pub image: PathBuf,

    /// Final image will be stored as file, defaults to hidden_{pattern}_{timestamp}.bmp when a pattern is rendered
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub write_to_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,

    /// Render this pattern first and hide the message in the rendered image
    #[arg(short, long, value_name = "pattern id")]
    pub pattern: Option<PatternId>,

    /// Color scheme of the rendered pattern
    #[arg(short, long, value_name = "color scheme", requires = "pattern")]
    pub gradient: Option<GradientKey>,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions, session: &mut Session) -> CliResult<()> {
        let choice = self
            .pattern
            .map(|pattern| resolve_choice(Some(pattern), self.gradient, session));
        let output = self
            .write_to_file
            .or_else(|| choice.map(|c| hidden_file_name(c.pattern).into()))
            .ok_or(StegoError::TargetNotSet)?;

        session.record_file(&self.image);
        stegobmp_core::commands::hide(
            &self.image,
            &output,
            Some(self.message.clone()),
            choice,
            options,
        )?;
        if let Some(choice) = choice {
            session.record(Category::Patterns, &choice.to_string());
        }
        session.record(Category::HiddenMessages, &self.message);
        println!("Message hidden in {}", output.display());

        Ok(())
    }
}
