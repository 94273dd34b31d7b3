//! Processing option catalog
//!
//! Each variant owns a short key and renders its arguments joined with `:`.
//! Integers render as plain decimals, booleans as `true`/`false`, strings
//! verbatim and floats as the shortest round-trippable decimal unless a fixed
//! precision is prescribed (focus point offsets, background alpha).

use std::fmt;
use std::str::FromStr;

use super::gravity::{Gravity, GravityType};
use super::trim::Trim;
use crate::constants::{ARGUMENT_SEPARATOR, FIXED_FLOAT_PRECISION};
use crate::error::UrlError;

/// How the server resizes the source image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizingType {
    /// Keep aspect ratio and fit within the target size
    Fit,
    /// Keep aspect ratio, fill the target size and crop projecting parts
    Fill,
    /// Fill when source and target share orientation, fit otherwise
    Auto,
}

impl ResizingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fit => "fit",
            Self::Fill => "fill",
            Self::Auto => "auto",
        }
    }
}

impl FromStr for ResizingType {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fit" => Ok(ResizingType::Fit),
            "fill" => Ok(ResizingType::Fill),
            "auto" => Ok(ResizingType::Auto),
            _ => Err(UrlError::constraint(
                "rt",
                format!("unknown resizing type: {}", s),
            )),
        }
    }
}

/// Interpolation used by the server when resizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizingAlgorithm {
    Nearest,
    Linear,
    Cubic,
    Lanczos2,
    Lanczos3,
}

impl ResizingAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Linear => "linear",
            Self::Cubic => "cubic",
            Self::Lanczos2 => "lanczos2",
            Self::Lanczos3 => "lanczos3",
        }
    }
}

impl FromStr for ResizingAlgorithm {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nearest" => Ok(ResizingAlgorithm::Nearest),
            "linear" => Ok(ResizingAlgorithm::Linear),
            "cubic" => Ok(ResizingAlgorithm::Cubic),
            "lanczos2" => Ok(ResizingAlgorithm::Lanczos2),
            "lanczos3" => Ok(ResizingAlgorithm::Lanczos3),
            _ => Err(UrlError::constraint(
                "ra",
                format!("unknown resizing algorithm: {}", s),
            )),
        }
    }
}

/// Background fill color
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    /// Red, green and blue channel values
    Rgb { r: u8, g: u8, b: u8 },
    /// Hex-coded color, inserted verbatim
    Hex(String),
}

/// Padding in CSS order (top, right, bottom, left)
///
/// Holds between one and four values and renders exactly the values given,
/// so `Padding::all(10)` renders `pd:10`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Padding {
    values: Vec<u32>,
}

impl Padding {
    /// Same padding on every side
    pub fn all(padding: u32) -> Self {
        Self {
            values: vec![padding],
        }
    }

    pub fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            values: vec![top, right, bottom, left],
        }
    }

    /// Any CSS shorthand form; validated when rendered
    pub fn from_values(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
        }
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    fn arguments(&self) -> Result<Vec<String>, UrlError> {
        if self.values.is_empty() || self.values.len() > 4 {
            return Err(UrlError::constraint(
                "pd",
                format!("expected 1 to 4 values, got {}", self.values.len()),
            ));
        }
        if self.values.iter().all(|v| *v == 0) {
            return Err(UrlError::constraint(
                "pd",
                "at least one dimension must be non-zero",
            ));
        }
        Ok(self.values.iter().map(u32::to_string).collect())
    }
}

/// Argument of a raw option
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    /// Expands to the gravity's own argument tokens
    Gravity(Gravity),
}

impl From<i32> for Argument {
    fn from(value: i32) -> Self {
        Argument::Int(value.into())
    }
}

impl From<i64> for Argument {
    fn from(value: i64) -> Self {
        Argument::Int(value)
    }
}

impl From<u32> for Argument {
    fn from(value: u32) -> Self {
        Argument::Int(value.into())
    }
}

impl From<f64> for Argument {
    fn from(value: f64) -> Self {
        Argument::Float(value)
    }
}

impl From<bool> for Argument {
    fn from(value: bool) -> Self {
        Argument::Bool(value)
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Argument::Str(value.to_string())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Argument::Str(value)
    }
}

impl From<Gravity> for Argument {
    fn from(value: Gravity) -> Self {
        Argument::Gravity(value)
    }
}

/// Escape hatch for options this crate does not model
#[derive(Debug, Clone, PartialEq)]
pub struct RawOption {
    pub key: String,
    pub arguments: Vec<Argument>,
}

impl RawOption {
    fn arguments(&self) -> Result<Vec<String>, UrlError> {
        if self.key.is_empty() {
            return Err(UrlError::constraint("raw", "option key must not be empty"));
        }
        let mut rendered = Vec::with_capacity(self.arguments.len());
        for argument in &self.arguments {
            match argument {
                Argument::Int(v) => rendered.push(v.to_string()),
                Argument::Float(v) => rendered.push(v.to_string()),
                Argument::Bool(v) => rendered.push(v.to_string()),
                Argument::Str(v) => rendered.push(v.clone()),
                Argument::Gravity(g) => rendered.extend(g.arguments_for(&self.key)?),
            }
        }
        Ok(rendered)
    }
}

/// A single image processing directive
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingOption {
    /// `w`: target width, 0 derives it from height and aspect ratio
    Width(u32),
    /// `h`: target height, 0 derives it from width and aspect ratio
    Height(u32),
    /// `rt`
    ResizingType(ResizingType),
    /// `ra`
    ResizingAlgorithm(ResizingAlgorithm),
    /// `dpr`: device pixel ratio, must be greater than 0
    Dpr(u32),
    /// `el`
    Enlarge(bool),
    /// `ex`: extend smaller images, optionally anchored by a non-smart gravity
    Extend {
        extend: bool,
        gravity: Option<Gravity>,
    },
    /// `c`: crop area; values below 1 are relative, 0 means full size
    Crop {
        width: f64,
        height: f64,
        gravity: Option<Gravity>,
    },
    /// `pd`
    Padding(Padding),
    /// `g`
    Gravity(Gravity),
    /// `sh`: sharpen sigma, must be greater than 0
    Sharpen(f64),
    /// `bl`: gaussian blur sigma
    Blur(u32),
    /// `q`: 0-100, 0 keeps the server default
    Quality(u8),
    /// `mb`: degrade quality until the result fits (jpg, webp, heic, tiff)
    MaxBytes(u64),
    /// `bg`
    Background(Background),
    /// `bga`: 0.0-1.0
    BackgroundAlpha(f64),
    /// `pr`
    Presets(Vec<String>),
    /// `t`
    Trim(Trim),
    /// `rot`: multiple of 90 degrees
    Rotate(i32),
    /// `ar`
    AutoRotate(bool),
    /// `fn`: Content-Disposition filename
    Filename(String),
    /// Any key with caller-supplied arguments
    Raw(RawOption),
}

impl ProcessingOption {
    pub fn crop(width: f64, height: f64) -> Self {
        ProcessingOption::Crop {
            width,
            height,
            gravity: None,
        }
    }

    pub fn crop_with_gravity(width: f64, height: f64, gravity: impl Into<Gravity>) -> Self {
        ProcessingOption::Crop {
            width,
            height,
            gravity: Some(gravity.into()),
        }
    }

    pub fn extend(extend: bool) -> Self {
        ProcessingOption::Extend {
            extend,
            gravity: None,
        }
    }

    pub fn extend_with_gravity(extend: bool, gravity: impl Into<Gravity>) -> Self {
        ProcessingOption::Extend {
            extend,
            gravity: Some(gravity.into()),
        }
    }

    pub fn background_rgb(r: u8, g: u8, b: u8) -> Self {
        ProcessingOption::Background(Background::Rgb { r, g, b })
    }

    pub fn background_hex(color: impl Into<String>) -> Self {
        ProcessingOption::Background(Background::Hex(color.into()))
    }

    pub fn presets<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ProcessingOption::Presets(names.into_iter().map(Into::into).collect())
    }

    pub fn raw<I, A>(key: impl Into<String>, arguments: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        ProcessingOption::Raw(RawOption {
            key: key.into(),
            arguments: arguments.into_iter().map(Into::into).collect(),
        })
    }

    /// Short key identifying the option's slot in the URL
    pub fn key(&self) -> &str {
        match self {
            Self::Width(_) => "w",
            Self::Height(_) => "h",
            Self::ResizingType(_) => "rt",
            Self::ResizingAlgorithm(_) => "ra",
            Self::Dpr(_) => "dpr",
            Self::Enlarge(_) => "el",
            Self::Extend { .. } => "ex",
            Self::Crop { .. } => "c",
            Self::Padding(_) => "pd",
            Self::Gravity(_) => "g",
            Self::Sharpen(_) => "sh",
            Self::Blur(_) => "bl",
            Self::Quality(_) => "q",
            Self::MaxBytes(_) => "mb",
            Self::Background(_) => "bg",
            Self::BackgroundAlpha(_) => "bga",
            Self::Presets(_) => "pr",
            Self::Trim(_) => "t",
            Self::Rotate(_) => "rot",
            Self::AutoRotate(_) => "ar",
            Self::Filename(_) => "fn",
            Self::Raw(raw) => raw.key.as_str(),
        }
    }

    /// Rendered argument tokens, validating the option's constraints
    pub fn arguments(&self) -> Result<Vec<String>, UrlError> {
        let key = self.key();
        let args = match self {
            Self::Width(v) | Self::Height(v) | Self::Blur(v) => vec![v.to_string()],
            Self::ResizingType(rt) => vec![rt.as_str().to_string()],
            Self::ResizingAlgorithm(ra) => vec![ra.as_str().to_string()],
            Self::Dpr(dpr) => {
                if *dpr == 0 {
                    return Err(UrlError::constraint(key, "must be greater than 0"));
                }
                vec![dpr.to_string()]
            }
            Self::Enlarge(v) | Self::AutoRotate(v) => vec![v.to_string()],
            Self::Extend { extend, gravity } => {
                let mut args = vec![extend.to_string()];
                if let Some(gravity) = gravity {
                    if gravity.kind == GravityType::Smart {
                        return Err(UrlError::constraint(
                            key,
                            "smart gravity type is not applicable here",
                        ));
                    }
                    args.extend(gravity.embedded_arguments(key)?);
                }
                args
            }
            Self::Crop {
                width,
                height,
                gravity,
            } => {
                for size in [width, height] {
                    if !size.is_finite() || *size < 0.0 {
                        return Err(UrlError::constraint(
                            key,
                            format!("crop size must be a non-negative number, got {}", size),
                        ));
                    }
                }
                let mut args = vec![width.to_string(), height.to_string()];
                if let Some(gravity) = gravity {
                    args.extend(gravity.embedded_arguments(key)?);
                }
                args
            }
            Self::Padding(padding) => padding.arguments()?,
            Self::Gravity(gravity) => gravity.arguments_for(key)?,
            Self::Sharpen(sigma) => {
                if !sigma.is_finite() || *sigma <= 0.0 {
                    return Err(UrlError::constraint(key, "sigma must be greater than 0"));
                }
                vec![sigma.to_string()]
            }
            Self::Quality(quality) => {
                if *quality > 100 {
                    return Err(UrlError::constraint(
                        key,
                        format!("quality {} must be 0-100", quality),
                    ));
                }
                vec![quality.to_string()]
            }
            Self::MaxBytes(max_bytes) => {
                if *max_bytes == 0 {
                    return Err(UrlError::constraint(key, "must be greater than 0"));
                }
                vec![max_bytes.to_string()]
            }
            Self::Background(Background::Rgb { r, g, b }) => {
                vec![r.to_string(), g.to_string(), b.to_string()]
            }
            Self::Background(Background::Hex(color)) => vec![color.clone()],
            Self::BackgroundAlpha(alpha) => {
                if !(0.0..=1.0).contains(alpha) {
                    return Err(UrlError::constraint(
                        key,
                        format!("alpha {} must be within [0, 1]", alpha),
                    ));
                }
                vec![format!("{:.*}", FIXED_FLOAT_PRECISION, alpha)]
            }
            Self::Presets(names) => {
                if names.is_empty() || names.iter().any(String::is_empty) {
                    return Err(UrlError::constraint(
                        key,
                        "at least one non-empty preset name is required",
                    ));
                }
                names.clone()
            }
            Self::Trim(trim) => trim.arguments(),
            Self::Rotate(angle) => {
                if angle % 90 != 0 {
                    return Err(UrlError::constraint(
                        key,
                        format!("angle {} is not a multiple of 90", angle),
                    ));
                }
                vec![angle.to_string()]
            }
            Self::Filename(name) => vec![name.clone()],
            Self::Raw(raw) => raw.arguments()?,
        };
        Ok(args)
    }

    /// Argument string stored in the URL's option map
    pub fn render(&self) -> Result<String, UrlError> {
        Ok(self.arguments()?.join(ARGUMENT_SEPARATOR))
    }
}

impl fmt::Display for ResizingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ResizingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
