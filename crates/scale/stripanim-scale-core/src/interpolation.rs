//! Resampling of a frame into another of a different length.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::{Config, DEFAULT_LINEAR_BLEND};
use crate::frame::Mix;

/// Strategy used to stretch or shrink a frame, selected by tag.
///
/// Unknown tags parse as [`Interpolation::Nearest`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Interpolation {
    /// Nearest input sample; blocky.
    #[default]
    Nearest,
    /// Nearest input sample, but when upscaling only the output positions
    /// matching an input sample are written.
    NearestSkip,
    /// Nearest input sample blended halfway toward the next one.
    Linear,
}

impl Interpolation {
    pub const ALL: [Interpolation; 3] = [
        Interpolation::Nearest,
        Interpolation::NearestSkip,
        Interpolation::Linear,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Interpolation::Nearest => "nearest",
            Interpolation::NearestSkip => "nearestskip",
            Interpolation::Linear => "linear",
        }
    }

    /// Resamples `input` into `output` with the default blend weight.
    pub fn scale<S: Mix + Copy>(self, input: &[S], output: &mut [S]) {
        self.resample(input, output, DEFAULT_LINEAR_BLEND);
    }

    /// Resamples `input` into `output` using `config.linear_blend`.
    pub fn scale_with<S: Mix + Copy>(self, config: &Config, input: &[S], output: &mut [S]) {
        self.resample(input, output, config.linear_blend);
    }

    fn resample<S: Mix + Copy>(self, input: &[S], output: &mut [S], blend: u8) {
        let li = input.len();
        let lo = output.len();
        if li == 0 || lo == 0 {
            return;
        }
        match self {
            Interpolation::NearestSkip if li < lo => {
                // Positions between input samples keep their content.
                for (i, sample) in input.iter().enumerate() {
                    output[(i * lo + lo / 2) / li] = *sample;
                }
            }
            Interpolation::Nearest | Interpolation::NearestSkip => {
                for (i, out) in output.iter_mut().enumerate() {
                    *out = input[(i * li + li / 2) / lo];
                }
            }
            Interpolation::Linear => {
                for (i, out) in output.iter_mut().enumerate() {
                    let x = (i * li + li / 2) / lo;
                    let mut c = input[x];
                    if x + 1 < li {
                        c.mix(&input[x + 1], blend);
                    }
                    *out = c;
                }
            }
        }
    }
}

impl From<&str> for Interpolation {
    fn from(tag: &str) -> Self {
        match tag {
            "nearest" | "" => Interpolation::Nearest,
            "nearestskip" => Interpolation::NearestSkip,
            "linear" => Interpolation::Linear,
            other => {
                warn!("unknown interpolation {other:?}, using nearest");
                Interpolation::Nearest
            }
        }
    }
}

impl From<String> for Interpolation {
    fn from(tag: String) -> Self {
        Interpolation::from(tag.as_str())
    }
}

impl From<Interpolation> for &'static str {
    fn from(interpolation: Interpolation) -> Self {
        interpolation.as_str()
    }
}

impl FromStr for Interpolation {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Interpolation::from(s))
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
