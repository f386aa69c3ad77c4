//! Configuration for curve tables and frame resampling.

use serde::{Deserialize, Serialize};

/// Resolution used by the process-wide curve table.
pub const DEFAULT_LUT_STEPS: usize = 18;

/// Blend weight of [`crate::Interpolation::Linear`], about 50/50.
pub const DEFAULT_LINEAR_BLEND: u8 = 127;

/// Tunables for table construction and resampling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of samples per bezier lookup table. Values below 2 are
    /// treated as 2.
    pub lut_steps: usize,

    /// Weight toward the next input sample when blending linearly
    /// (0 keeps the base sample, 255 takes the next one).
    pub linear_blend: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lut_steps: DEFAULT_LUT_STEPS,
            linear_blend: DEFAULT_LINEAR_BLEND,
        }
    }
}
