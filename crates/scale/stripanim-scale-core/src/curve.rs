//! Named easing and step curves over the 16-bit intensity domain.
//!
//! Curves are modelled against CSS timing functions:
//! https://www.w3.org/TR/css-easing-1/

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::table::curve_table;

/// Maps a 16-bit intensity to another 16-bit intensity.
pub trait Scaler {
    fn scale(&self, intensity: u16) -> u16;

    /// High byte of [`Scaler::scale`].
    #[inline]
    fn scale8(&self, intensity: u16) -> u8 {
        (self.scale(intensity) >> 8) as u8
    }
}

/// Visually pleasing intensity curves, selected by tag.
///
/// Unknown tags, and the empty tag, parse as [`Curve::EaseOut`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Curve {
    Ease,
    EaseIn,
    EaseInOut,
    #[default]
    EaseOut,
    /// Identity mapping.
    Direct,
    StepStart,
    StepMiddle,
    StepEnd,
}

impl Curve {
    pub const ALL: [Curve; 8] = [
        Curve::Ease,
        Curve::EaseIn,
        Curve::EaseInOut,
        Curve::EaseOut,
        Curve::Direct,
        Curve::StepStart,
        Curve::StepMiddle,
        Curve::StepEnd,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Curve::Ease => "ease",
            Curve::EaseIn => "ease-in",
            Curve::EaseInOut => "ease-in-out",
            Curve::EaseOut => "ease-out",
            Curve::Direct => "direct",
            Curve::StepStart => "steps(1,start)",
            Curve::StepMiddle => "steps(1,middle)",
            Curve::StepEnd => "steps(1,end)",
        }
    }

    /// Closed-form rule for curves without a lookup table; bezier curves go
    /// through [`crate::CurveTable`] instead.
    pub(crate) fn scale_closed_form(self, intensity: u16) -> u16 {
        match self {
            Curve::StepStart => {
                if intensity < 256 {
                    0
                } else {
                    65535
                }
            }
            Curve::StepMiddle => {
                if intensity < 32768 {
                    0
                } else {
                    65535
                }
            }
            Curve::StepEnd => {
                if intensity >= 65535 - 256 {
                    65535
                } else {
                    0
                }
            }
            _ => intensity,
        }
    }
}

impl Scaler for Curve {
    /// Scales through the process-wide table built on first use.
    #[inline]
    fn scale(&self, intensity: u16) -> u16 {
        curve_table().scale(*self, intensity)
    }
}

impl From<&str> for Curve {
    fn from(tag: &str) -> Self {
        match tag {
            "ease" => Curve::Ease,
            "ease-in" => Curve::EaseIn,
            "ease-in-out" => Curve::EaseInOut,
            "ease-out" | "" => Curve::EaseOut,
            "direct" => Curve::Direct,
            "steps(1,start)" => Curve::StepStart,
            "steps(1,middle)" => Curve::StepMiddle,
            "steps(1,end)" => Curve::StepEnd,
            other => {
                warn!("unknown curve {other:?}, using ease-out");
                Curve::EaseOut
            }
        }
    }
}

impl From<String> for Curve {
    fn from(tag: String) -> Self {
        Curve::from(tag.as_str())
    }
}

impl From<Curve> for &'static str {
    fn from(curve: Curve) -> Self {
        curve.as_str()
    }
}

impl FromStr for Curve {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Curve::from(s))
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symmetric bell built from two mirrored ease-in-out halves.
///
/// Not a gaussian, but close enough for pulses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bell;

impl Scaler for Bell {
    fn scale(&self, intensity: u16) -> u16 {
        match intensity {
            0 | 65535 => 0,
            32767 => 65535,
            v if v < 32767 => Curve::EaseInOut.scale(v.wrapping_mul(2)),
            v => Curve::EaseInOut.scale(65535 - v.wrapping_mul(2)),
        }
    }
}
