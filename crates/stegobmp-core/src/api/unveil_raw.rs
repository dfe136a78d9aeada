use std::path::{Path, PathBuf};

use super::{read_media, write_media};
use crate::{LsbCodec, Result, StegoError};

pub fn prepare() -> UnveilRawApi {
    UnveilRawApi::default()
}

/// Unveils the hidden bytes without decoding them as text
#[derive(Default, Debug)]
pub struct UnveilRawApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
}

impl UnveilRawApi {
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    pub fn into_raw_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output_file) = self.output_file else {
            return Err(StegoError::TargetNotSet);
        };

        let payload = LsbCodec::extract_raw(&read_media(&secret_media)?)?;
        write_media(&output_file, &payload)
    }
}
