use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// a color in R,G,B order
pub type Rgb = [u8; 3];

pub const RED: Rgb = [255, 0, 0];
pub const GREEN: Rgb = [0, 255, 0];
pub const BLUE: Rgb = [0, 0, 255];
pub const YELLOW: Rgb = [255, 255, 0];
pub const CYAN: Rgb = [0, 255, 255];
pub const MAGENTA: Rgb = [255, 0, 255];
pub const BLACK: Rgb = [0, 0, 0];
pub const WHITE: Rgb = [255, 255, 255];

/// the two endpoints of a linear color interpolation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorGradient {
    pub start: Rgb,
    pub end: Rgb,
}

impl ColorGradient {
    pub const fn new(start: Rgb, end: Rgb) -> Self {
        Self { start, end }
    }

    /// the color at `factor` between start (`0.0`) and end (`1.0`)
    pub fn at(&self, factor: f64) -> Rgb {
        interpolate(self.start, self.end, factor)
    }
}

/// Key into the gradient registry.
///
/// Keys are looked up leniently: everything that is not a known key maps to
/// [`GradientKey::Default`], the same way the color scheme selector always did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GradientKey {
    RedToBlue,
    GreenToMagenta,
    YellowToCyan,
    #[default]
    Default,
}

impl GradientKey {
    pub const ALL: [GradientKey; 4] = [
        GradientKey::RedToBlue,
        GradientKey::GreenToMagenta,
        GradientKey::YellowToCyan,
        GradientKey::Default,
    ];

    pub fn lookup(key: &str) -> Self {
        match key.trim() {
            "1" => Self::RedToBlue,
            "2" => Self::GreenToMagenta,
            "3" => Self::YellowToCyan,
            _ => Self::Default,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::RedToBlue => "1",
            Self::GreenToMagenta => "2",
            Self::YellowToCyan => "3",
            Self::Default => "default",
        }
    }

    pub fn gradient(&self) -> ColorGradient {
        match self {
            Self::RedToBlue => ColorGradient::new(RED, BLUE),
            Self::GreenToMagenta => ColorGradient::new(GREEN, MAGENTA),
            Self::YellowToCyan => ColorGradient::new(YELLOW, CYAN),
            Self::Default => ColorGradient::new(BLACK, WHITE),
        }
    }
}

impl From<u32> for GradientKey {
    fn from(id: u32) -> Self {
        Self::lookup(&id.to_string())
    }
}

impl FromStr for GradientKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::lookup(s))
    }
}

impl fmt::Display for GradientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// the whole registry, in key order with the fallback last
pub fn gradients() -> [(GradientKey, ColorGradient); 4] {
    GradientKey::ALL.map(|key| (key, key.gradient()))
}

/// Linear interpolation per channel, `c1 + (c2 - c1) * factor`.
///
/// Halves are rounded up. A `factor` outside of `[0, 1]` is not an error,
/// but the channels are clamped to the byte range before they are returned.
pub fn interpolate(c1: Rgb, c2: Rgb, factor: f64) -> Rgb {
    let channel = |a: u8, b: u8| {
        let v = f64::from(a) + (f64::from(b) - f64::from(a)) * factor;
        (v + 0.5).floor().clamp(0.0, 255.0) as u8
    };

    [
        channel(c1[0], c2[0]),
        channel(c1[1], c2[1]),
        channel(c1[2], c2[2]),
    ]
}
