//! Gravity sub-model
//!
//! A gravity value is rendered on its own by the `g` option and embedded
//! inside `c` (crop) and `ex` (extend). Offset rules depend on the type:
//!
//! - `sm` (smart) takes no offsets
//! - `fp` (focus point) requires floating-point offsets in `[0, 1]`, rendered
//!   with three decimals
//! - every other type takes either no offsets or integer offsets

use std::fmt;
use std::str::FromStr;

use crate::constants::FIXED_FLOAT_PRECISION;
use crate::error::UrlError;

/// Gravity/anchor point for cropping and extending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GravityType {
    /// Let the server pick its configured gravity (renders nothing)
    #[default]
    Default,
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    Center,
    /// Content-aware smart crop
    Smart,
    /// Explicit center point given by relative offsets
    FocusPoint,
}

impl GravityType {
    /// Wire token used in the URL path
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "",
            Self::North => "no",
            Self::South => "so",
            Self::East => "ea",
            Self::West => "we",
            Self::NorthEast => "noea",
            Self::NorthWest => "nowe",
            Self::SouthEast => "soea",
            Self::SouthWest => "sowe",
            Self::Center => "ce",
            Self::Smart => "sm",
            Self::FocusPoint => "fp",
        }
    }
}

impl fmt::Display for GravityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GravityType {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "default" => Ok(GravityType::Default),
            "no" | "north" => Ok(GravityType::North),
            "so" | "south" => Ok(GravityType::South),
            "ea" | "east" => Ok(GravityType::East),
            "we" | "west" => Ok(GravityType::West),
            "noea" | "northeast" | "north-east" => Ok(GravityType::NorthEast),
            "nowe" | "northwest" | "north-west" => Ok(GravityType::NorthWest),
            "soea" | "southeast" | "south-east" => Ok(GravityType::SouthEast),
            "sowe" | "southwest" | "south-west" => Ok(GravityType::SouthWest),
            "ce" | "center" => Ok(GravityType::Center),
            "sm" | "smart" => Ok(GravityType::Smart),
            "fp" | "focus-point" | "focuspoint" => Ok(GravityType::FocusPoint),
            _ => Err(UrlError::constraint(
                "g",
                format!("unknown gravity: {}", s),
            )),
        }
    }
}

/// Offsets attached to a gravity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GravityOffsets {
    /// Pixel offsets from the gravity edge
    Integer { x: i32, y: i32 },
    /// Relative coordinates, only valid for focus point gravity
    Float { x: f64, y: f64 },
}

/// A gravity type together with its optional offsets
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gravity {
    pub kind: GravityType,
    pub offsets: Option<GravityOffsets>,
}

impl Gravity {
    pub fn new(kind: GravityType) -> Self {
        Self {
            kind,
            offsets: None,
        }
    }

    /// Gravity with pixel offsets
    pub fn with_offsets(kind: GravityType, x: i32, y: i32) -> Self {
        Self {
            kind,
            offsets: Some(GravityOffsets::Integer { x, y }),
        }
    }

    /// Focus point gravity centered on the relative coordinates `(x, y)`
    pub fn focus_point(x: f64, y: f64) -> Self {
        Self {
            kind: GravityType::FocusPoint,
            offsets: Some(GravityOffsets::Float { x, y }),
        }
    }

    pub fn smart() -> Self {
        Self::new(GravityType::Smart)
    }

    pub fn is_default(&self) -> bool {
        self.kind == GravityType::Default
    }

    /// Argument tokens for the standalone `g` option
    pub fn arguments(&self) -> Result<Vec<String>, UrlError> {
        self.arguments_for("g")
    }

    /// Argument tokens, reporting violations against `option`
    pub(crate) fn arguments_for(&self, option: &str) -> Result<Vec<String>, UrlError> {
        let kind = self.kind;
        match (kind, self.offsets) {
            (GravityType::Default, _) => Err(UrlError::constraint(
                option,
                "specific gravity type is required",
            )),
            (GravityType::Smart, Some(_)) => Err(UrlError::constraint(
                option,
                "offsets are not applicable for smart gravity",
            )),
            (GravityType::FocusPoint, None) => Err(UrlError::constraint(
                option,
                "offsets are required for focus point gravity",
            )),
            (GravityType::FocusPoint, Some(GravityOffsets::Integer { .. })) => {
                Err(UrlError::constraint(
                    option,
                    "focus point gravity requires floating-point offsets",
                ))
            }
            (GravityType::FocusPoint, Some(GravityOffsets::Float { x, y })) => {
                if !is_unit(x) || !is_unit(y) {
                    return Err(UrlError::constraint(
                        option,
                        "float offsets must be within [0, 1]",
                    ));
                }
                Ok(vec![
                    kind.as_str().to_string(),
                    format!("{:.*}", FIXED_FLOAT_PRECISION, x),
                    format!("{:.*}", FIXED_FLOAT_PRECISION, y),
                ])
            }
            (_, Some(GravityOffsets::Float { .. })) => Err(UrlError::constraint(
                option,
                "integer offsets are required",
            )),
            (_, Some(GravityOffsets::Integer { x, y })) => Ok(vec![
                kind.as_str().to_string(),
                x.to_string(),
                y.to_string(),
            ]),
            (_, None) => Ok(vec![kind.as_str().to_string()]),
        }
    }

    /// Argument tokens for a gravity embedded in another option
    ///
    /// Default gravity renders nothing there, but still may not carry offsets.
    pub(crate) fn embedded_arguments(&self, option: &str) -> Result<Vec<String>, UrlError> {
        if self.is_default() {
            if self.offsets.is_some() {
                return Err(UrlError::constraint(
                    option,
                    "offsets are not applicable for default gravity",
                ));
            }
            return Ok(Vec::new());
        }
        self.arguments_for(option)
    }
}

impl From<GravityType> for Gravity {
    fn from(kind: GravityType) -> Self {
        Gravity::new(kind)
    }
}

fn is_unit(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}
