//! Edits as values: a closed set of operations with their parameters.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::types::Image;

/// Quarter-turn rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    /// Unrecognised angle; rotating by it is a no-op.
    #[default]
    None,
    /// 90 degrees clockwise.
    Cw90,
    /// 180 degrees.
    Rot180,
    /// 270 degrees clockwise (90 counter-clockwise).
    Ccw90,
}

impl Rotation {
    /// Map an angle in degrees. Anything but 90, 180 or 270 maps to
    /// `Rotation::None`.
    pub fn from_degrees(degrees: i32) -> Self {
        match degrees {
            90 => Rotation::Cw90,
            180 => Rotation::Rot180,
            270 => Rotation::Ccw90,
            other => {
                log::warn!("ignoring unsupported rotation angle {other}");
                Rotation::None
            }
        }
    }

    /// Clockwise angle in degrees, `None` for the no-op rotation.
    pub fn degrees(self) -> Option<u32> {
        match self {
            Rotation::None => None,
            Rotation::Cw90 => Some(90),
            Rotation::Rot180 => Some(180),
            Rotation::Ccw90 => Some(270),
        }
    }
}

/// Mirror axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlipMode {
    /// Unrecognised mode; flipping by it is a no-op.
    #[default]
    None,
    /// Mirror left/right.
    Horizontal,
    /// Mirror top/bottom.
    Vertical,
}

impl FromStr for FlipMode {
    type Err = Infallible;

    /// `"horizontal"` and `"vertical"` are recognised; anything else parses
    /// to `FlipMode::None`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "horizontal" => FlipMode::Horizontal,
            "vertical" => FlipMode::Vertical,
            other => {
                log::warn!("ignoring unsupported flip mode {other:?}");
                FlipMode::None
            }
        })
    }
}

impl fmt::Display for FlipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlipMode::None => write!(f, "none"),
            FlipMode::Horizontal => write!(f, "horizontal"),
            FlipMode::Vertical => write!(f, "vertical"),
        }
    }
}

/// A single image operation together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edit {
    Grayscale,
    Blur { intensity: f32 },
    EdgeDetect,
    Brightness { delta: f32 },
    Contrast { delta: f32 },
    Rotate(Rotation),
    Flip(FlipMode),
    Resize { scale_percent: f32 },
}

impl Edit {
    /// Compute the edited image. The input is left untouched.
    pub fn apply(&self, image: &Image) -> Image {
        match *self {
            Edit::Grayscale => super::to_grayscale(image),
            Edit::Blur { intensity } => super::blur(image, intensity),
            Edit::EdgeDetect => super::detect_edges(image),
            Edit::Brightness { delta } => super::adjust_brightness(image, delta),
            Edit::Contrast { delta } => super::adjust_contrast(image, delta),
            Edit::Rotate(rotation) => super::rotate(image, rotation),
            Edit::Flip(mode) => super::flip(image, mode),
            Edit::Resize { scale_percent } => super::resize(image, scale_percent),
        }
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Grayscale => write!(f, "Grayscale"),
            Edit::Blur { intensity } => write!(f, "Blur {intensity}"),
            Edit::EdgeDetect => write!(f, "Edge detection"),
            Edit::Brightness { delta } => write!(f, "Brightness {delta:+}"),
            Edit::Contrast { delta } => write!(f, "Contrast {delta:+}"),
            Edit::Rotate(rotation) => match rotation.degrees() {
                Some(deg) => write!(f, "Rotate {deg}°"),
                None => write!(f, "Rotate (none)"),
            },
            Edit::Flip(mode) => write!(f, "Flip {mode}"),
            Edit::Resize { scale_percent } => write!(f, "Resize {scale_percent}%"),
        }
    }
}

/// Errors from parsing the textual `name[=value]` form of an [`Edit`].
#[derive(Debug, Error, PartialEq)]
pub enum ParseEditError {
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Operation '{0}' requires a value")]
    MissingValue(&'static str),

    #[error("Operation '{0}' takes no value")]
    UnexpectedValue(&'static str),

    #[error("Invalid value for '{op}': {value}")]
    InvalidValue { op: &'static str, value: String },
}

impl FromStr for Edit {
    type Err = ParseEditError;

    /// Parse `grayscale`, `edges`, `blur=5`, `brightness=-20`,
    /// `contrast=30`, `rotate=90`, `flip=horizontal` or `resize=50`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = match s.split_once('=') {
            Some((name, value)) => (name.trim(), Some(value.trim())),
            None => (s.trim(), None),
        };

        match name.to_ascii_lowercase().as_str() {
            "grayscale" | "gray" => no_value("grayscale", value).map(|()| Edit::Grayscale),
            "edges" | "edge-detect" => no_value("edges", value).map(|()| Edit::EdgeDetect),
            "blur" => number("blur", value).map(|intensity| Edit::Blur { intensity }),
            "brightness" => number("brightness", value).map(|delta| Edit::Brightness { delta }),
            "contrast" => number("contrast", value).map(|delta| Edit::Contrast { delta }),
            "resize" | "scale" => {
                number("resize", value).map(|scale_percent| Edit::Resize { scale_percent })
            }
            "rotate" => {
                let raw = value.ok_or(ParseEditError::MissingValue("rotate"))?;
                let degrees = raw.parse::<i32>().map_err(|_| ParseEditError::InvalidValue {
                    op: "rotate",
                    value: raw.to_string(),
                })?;
                Ok(Edit::Rotate(Rotation::from_degrees(degrees)))
            }
            "flip" => {
                let raw = value.ok_or(ParseEditError::MissingValue("flip"))?;
                Ok(Edit::Flip(raw.parse().unwrap_or_default()))
            }
            _ => Err(ParseEditError::UnknownOperation(name.to_string())),
        }
    }
}

fn no_value(op: &'static str, value: Option<&str>) -> Result<(), ParseEditError> {
    match value {
        None => Ok(()),
        Some(_) => Err(ParseEditError::UnexpectedValue(op)),
    }
}

fn number(op: &'static str, value: Option<&str>) -> Result<f32, ParseEditError> {
    let raw = value.ok_or(ParseEditError::MissingValue(op))?;
    raw.parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseEditError::InvalidValue {
            op,
            value: raw.to_string(),
        })
}
