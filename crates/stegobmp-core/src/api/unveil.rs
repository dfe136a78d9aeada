use std::path::{Path, PathBuf};

use super::{read_media, write_media};
use crate::{LsbCodec, Result, StegoError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
}

impl UnveilApi {
    /// This is the secret image that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Also store the unveiled message in this file
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and return the message
    pub fn execute(self) -> Result<String> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegoError::CarrierNotSet);
        };

        let message = LsbCodec::extract(&read_media(&secret_media)?)?;
        if let Some(output_file) = self.output_file {
            write_media(&output_file, message.as_bytes())?;
        }

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use std::io::read_to_string;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let output_file = temp_dir.path().join("secret-message.txt");

        let message = crate::api::unveil::prepare()
            .from_secret_file("tests/images/with_text/hello_world.bmp")
            .into_output_file(&output_file)
            .execute()
            .expect("Failed to unveil message from image");
        assert_eq!(message, "Hello World!");

        let secret_message = read_to_string(
            std::fs::File::open(output_file).expect("Failed to open file"),
        )
        .expect("Failed to read file");
        assert_eq!(secret_message, "Hello World!");
    }

    #[test]
    fn should_fail_on_an_image_without_message() {
        assert!(matches!(
            prepare()
                .from_secret_file("tests/images/plain/carrier-image.bmp")
                .execute(),
            Err(StegoError::CorruptPayload(_))
        ));
    }
}
