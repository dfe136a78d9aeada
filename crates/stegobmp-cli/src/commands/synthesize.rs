use std::path::PathBuf;

use clap::Args;
use stegobmp_core::api::synthesized_file_name;
use stegobmp_core::history::Category;
use stegobmp_core::{CodecOptions, GradientKey, PatternChoice, PatternId};

use super::Session;
use crate::CliResult;

/// Renders a generative pattern into a new BMP with the size of the source image
#[derive(Args, Debug)]
pub struct SynthesizeArgs {
    /// Source BMP image, only its header and size are used
    #[arg(short = 'i', long = "in", value_name = "bmp file", required = true)]
    pub image: PathBuf,

    /// Final image will be stored as file, defaults to p{pattern}_{timestamp}.bmp
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub write_to_file: Option<PathBuf>,

    /// Pattern: 1 diagonal stripes, 2 checkerboard, 3 radial waves.
    /// Defaults to the last pattern in the history
    #[arg(short, long, value_name = "pattern id")]
    pub pattern: Option<PatternId>,

    /// Color scheme: 1 red to blue, 2 green to magenta, 3 yellow to cyan, anything else black to white.
    /// Defaults to the last color scheme in the history
    #[arg(short, long, value_name = "color scheme")]
    pub gradient: Option<GradientKey>,
}

impl SynthesizeArgs {
    pub fn run(self, options: CodecOptions, session: &mut Session) -> CliResult<()> {
        let choice = resolve_choice(self.pattern, self.gradient, session);
        let output = self
            .write_to_file
            .unwrap_or_else(|| synthesized_file_name(choice.pattern).into());

        session.record_file(&self.image);
        let choice = stegobmp_core::commands::synthesize(&self.image, &output, choice, options)?;
        session.record(Category::Patterns, &choice.to_string());
        println!("{choice} written to {}", output.display());

        Ok(())
    }
}

/// explicit arguments first, then the last choice from the history, then the defaults
pub(crate) fn resolve_choice(
    pattern: Option<PatternId>,
    gradient: Option<GradientKey>,
    session: &Session,
) -> PatternChoice {
    let last = session.history().last_pattern();

    PatternChoice::new(
        pattern
            .or(last.map(|c| c.pattern))
            .unwrap_or(PatternId::DiagonalStripes),
        gradient.or(last.map(|c| c.gradient)).unwrap_or_default(),
    )
}
