/// Default upper bound for the pixel buffer of a parsed image, 256 MiB.
pub const DEFAULT_MAX_PIXEL_BYTES: usize = 256 * 1024 * 1024;

/// Codec configuration for parsing and processing BMP carriers
#[derive(Debug, Clone)]
pub struct CodecOptions {
    /// Upper bound for `width * height * 3`.
    /// Any image that declares a bigger pixel buffer is rejected before a single byte is allocated,
    /// so a crafted header cannot make us reserve gigabytes of memory.
    pub max_pixel_bytes: usize,

    /// If true the parser also checks the bits per pixel and compression fields
    /// and rejects everything that is not an uncompressed 24-bit BMP.
    ///
    /// Off by default, only the magic signature and the dimensions are checked then.
    pub strict_header: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            max_pixel_bytes: DEFAULT_MAX_PIXEL_BYTES,
            strict_header: false,
        }
    }
}

impl CodecOptions {
    pub fn with_max_pixel_bytes(mut self, max_pixel_bytes: usize) -> Self {
        self.max_pixel_bytes = max_pixel_bytes;
        self
    }

    pub fn with_strict_header(mut self, strict_header: bool) -> Self {
        self.strict_header = strict_header;
        self
    }
}
