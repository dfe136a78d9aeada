use std::path::Path;

use crate::media::{CodecOptions, PatternChoice};
use crate::Result;

pub fn synthesize(
    image: &Path,
    write_to_file: &Path,
    choice: PatternChoice,
    options: CodecOptions,
) -> Result<PatternChoice> {
    crate::api::synthesize::prepare()
        .with_options(options)
        .with_image(image)
        .with_output(write_to_file)
        .with_choice(choice)
        .execute()
}

pub fn hide(
    image: &Path,
    write_to_file: &Path,
    message: Option<String>,
    pattern: Option<PatternChoice>,
    options: CodecOptions,
) -> Result<()> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_image(image)
        .with_output(write_to_file)
        .use_message(message)
        .use_pattern(pattern)
        .execute()
}

pub fn unveil(secret_image: &Path, output_file: Option<&Path>) -> Result<String> {
    let api = crate::api::unveil::prepare().from_secret_file(secret_image);
    match output_file {
        Some(output_file) => api.into_output_file(output_file).execute(),
        None => api.execute(),
    }
}

/// unveil the raw payload bytes, no text decoding is happening.
pub fn unveil_raw(secret_image: &Path, destination_file: &Path) -> Result<()> {
    crate::api::unveil_raw::prepare()
        .from_secret_file(secret_image)
        .into_raw_file(destination_file)
        .execute()
}

pub fn preview(image: &Path, write_to_file: &Path, options: CodecOptions) -> Result<()> {
    crate::api::preview::prepare()
        .with_options(options)
        .with_image(image)
        .with_output(write_to_file)
        .execute()
}
