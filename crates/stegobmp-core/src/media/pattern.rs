//! Generative patterns, every one is a pure function of the pixel coordinate,
//! the canvas size and a gradient.

use std::fmt;
use std::str::FromStr;

use super::color::{ColorGradient, GradientKey, Rgb};
use crate::error::StegoError;
use crate::result::Result;

/// distance along the x+y diagonal after which the stripes repeat
const STRIPE_PERIOD: u64 = 60;
const STRIPE_HALF_WIDTH: u64 = STRIPE_PERIOD / 2;
const CHECKER_SQUARE_SIZE: u32 = 20;
const RADIAL_LOBES: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternId {
    /// triangular gradient bands along the x+y diagonal
    DiagonalStripes,
    /// hard edged squares alternating between both gradient endpoints
    Checkerboard,
    /// sinusoidal pinwheel around the image center
    RadialWaves,
}

impl PatternId {
    pub const ALL: [PatternId; 3] = [
        PatternId::DiagonalStripes,
        PatternId::Checkerboard,
        PatternId::RadialWaves,
    ];

    pub fn from_id(id: u32) -> Result<Self> {
        match id {
            1 => Ok(Self::DiagonalStripes),
            2 => Ok(Self::Checkerboard),
            3 => Ok(Self::RadialWaves),
            other => Err(StegoError::InvalidPattern(other.to_string())),
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            Self::DiagonalStripes => 1,
            Self::Checkerboard => 2,
            Self::RadialWaves => 3,
        }
    }
}

impl FromStr for PatternId {
    type Err = StegoError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u32>()
            .map_err(|_| StegoError::InvalidPattern(s.to_string()))
            .and_then(Self::from_id)
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Color of the pixel at `(x, y)` on a `width` x `height` canvas.
pub fn color_at(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    pattern: PatternId,
    gradient: &ColorGradient,
) -> Rgb {
    match pattern {
        PatternId::DiagonalStripes => {
            let d = (u64::from(x) + u64::from(y)) % STRIPE_PERIOD;
            let factor = if d < STRIPE_HALF_WIDTH {
                d as f64 / STRIPE_HALF_WIDTH as f64
            } else {
                (STRIPE_PERIOD - d) as f64 / STRIPE_HALF_WIDTH as f64
            };
            gradient.at(factor)
        }
        PatternId::Checkerboard => {
            let even_x = (x / CHECKER_SQUARE_SIZE) % 2 == 0;
            let even_y = (y / CHECKER_SQUARE_SIZE) % 2 == 0;
            if even_x == even_y {
                gradient.start
            } else {
                gradient.end
            }
        }
        PatternId::RadialWaves => {
            let dy = f64::from(y) - f64::from(height) / 2.0;
            let dx = f64::from(x) - f64::from(width) / 2.0;
            let angle = dy.atan2(dx);
            gradient.at(((angle * RADIAL_LOBES).sin() + 1.0) / 2.0)
        }
    }
}

/// Same as [`color_at`] but with the raw ids as they come from a user, an unknown pattern id is an error.
pub fn color_at_id(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    pattern_id: &str,
    gradient_key: &str,
) -> Result<Rgb> {
    let pattern: PatternId = pattern_id.parse()?;
    let gradient = GradientKey::lookup(gradient_key).gradient();

    Ok(color_at(x, y, width, height, pattern, &gradient))
}

/// A pattern together with its gradient, as remembered in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternChoice {
    pub pattern: PatternId,
    pub gradient: GradientKey,
}

const LABEL_PATTERN: &str = "Pattern ";
const LABEL_GRADIENT: &str = " with Color Scheme ";

impl PatternChoice {
    pub fn new(pattern: PatternId, gradient: GradientKey) -> Self {
        Self { pattern, gradient }
    }

    /// Parses a label like `Pattern 2 with Color Scheme 1`, yields `None` for anything else.
    pub fn from_label(label: &str) -> Option<Self> {
        let rest = label.trim().strip_prefix(LABEL_PATTERN)?;
        let (pattern, gradient) = rest.split_once(LABEL_GRADIENT)?;
        let pattern: PatternId = pattern.parse().ok()?;
        let numeric = !gradient.is_empty() && gradient.bytes().all(|b| b.is_ascii_digit());
        if !numeric && gradient != GradientKey::Default.key() {
            return None;
        }

        Some(Self::new(pattern, GradientKey::lookup(gradient)))
    }
}

impl fmt::Display for PatternChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{LABEL_PATTERN}{}{LABEL_GRADIENT}{}",
            self.pattern, self.gradient
        )
    }
}
