//! Samples that make up a frame.
//!
//! A frame is any slice of samples; resampling reads one slice and writes
//! another without resizing either.

use serde::{Deserialize, Serialize};

/// Blends a sample toward another.
pub trait Mix {
    /// `gradient` 0 keeps `self`, 255 takes `other`.
    fn mix(&mut self, other: &Self, gradient: u8);
}

/// 8-bit RGB color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }
}

#[inline]
fn mix_channel(a: u8, b: u8, gradient: u8) -> u8 {
    let g = u32::from(gradient);
    ((u32::from(a) * (255 - g) + u32::from(b) * g) / 255) as u8
}

impl Mix for Color {
    #[inline]
    fn mix(&mut self, other: &Self, gradient: u8) {
        self.r = mix_channel(self.r, other.r, gradient);
        self.g = mix_channel(self.g, other.g, gradient);
        self.b = mix_channel(self.b, other.b, gradient);
    }
}
