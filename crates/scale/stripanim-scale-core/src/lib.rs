//! stripanim-scale-core: fixed-point intensity curves and frame resampling.
//!
//! Intensities are `u16` over `[0, 65535]`. Bezier curves are sampled once
//! into lookup tables and evaluated with integer arithmetic only.

pub mod config;
pub mod curve;
pub mod frame;
pub mod interpolation;
pub mod table;

pub use config::Config;
pub use curve::{Bell, Curve, Scaler};
pub use frame::{Color, Mix};
pub use interpolation::Interpolation;
pub use table::{curve_table, CurveTable, Lut};
