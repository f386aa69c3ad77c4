//! Precomputed cubic-bezier lookup tables over the 16-bit domain.

use once_cell::sync::Lazy;

use crate::config::Config;
use crate::curve::Curve;

/// Bisection rounds when inverting x(t); enough to exhaust `f64` precision.
const BISECTION_ROUNDS: usize = 64;

/// Control points `(x1, y1, x2, y2)` of the named bezier curves, as defined
/// for CSS timing functions.
const BEZIER_CURVES: [(Curve, [f64; 4]); 4] = [
    (Curve::Ease, [0.25, 0.1, 0.25, 1.0]),
    (Curve::EaseIn, [0.42, 0.0, 1.0, 1.0]),
    (Curve::EaseInOut, [0.42, 0.0, 0.58, 1.0]),
    (Curve::EaseOut, [0.0, 0.0, 0.58, 1.0]),
];

static CURVE_TABLE: Lazy<CurveTable> = Lazy::new(CurveTable::new);

/// Process-wide table built from [`Config::default`] on first use.
pub fn curve_table() -> &'static CurveTable {
    &CURVE_TABLE
}

/// One-dimensional cubic bezier with endpoints 0 and 1.
#[inline]
fn cubic_bezier(p1: f64, p2: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

/// Finds t such that x(t) == x. x(t) is monotonic for x1, x2 in [0, 1].
fn solve_t(x1: f64, x2: f64, x: f64) -> f64 {
    let mut lo = 0.0f64;
    let mut hi = 1.0f64;
    for _ in 0..BISECTION_ROUNDS {
        let mid = 0.5 * (lo + hi);
        if cubic_bezier(x1, x2, mid) < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

/// Lookup table sampling a curve at `steps` evenly spaced points of
/// `[0, 65535]`, evaluated with integer linear interpolation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lut {
    points: Vec<u16>,
}

impl Lut {
    /// Samples the bezier `(0,0) (x1,y1) (x2,y2) (1,1)`.
    pub fn bezier(x1: f64, y1: f64, x2: f64, y2: f64, steps: usize) -> Self {
        let steps = steps.max(2);
        let last = (steps - 1) as f64;
        let points = (0..steps)
            .map(|i| {
                let t = solve_t(x1, x2, i as f64 / last);
                let y = cubic_bezier(y1, y2, t) * 65535.0 + 0.5;
                y.floor().clamp(0.0, 65535.0) as u16
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[u16] {
        &self.points
    }

    /// Evaluates the table at `x`.
    pub fn eval(&self, x: u16) -> u16 {
        let segments = (self.points.len() - 1) as u64;
        let pos = u64::from(x) * segments;
        let idx = (pos / 65535) as usize;
        let frac = (pos % 65535) as i64;
        if idx >= self.points.len() - 1 {
            return self.points[self.points.len() - 1];
        }
        let a = i64::from(self.points[idx]);
        let b = i64::from(self.points[idx + 1]);
        (a + (b - a) * frac / 65535) as u16
    }
}

/// Lookup tables for every bezier-backed [`Curve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveTable {
    luts: [Lut; 4],
}

impl CurveTable {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let luts = BEZIER_CURVES.map(|(_, [x1, y1, x2, y2])| {
            Lut::bezier(x1, y1, x2, y2, config.lut_steps)
        });
        Self { luts }
    }

    /// Table backing `curve`, `None` for curves with a closed form.
    pub fn lut(&self, curve: Curve) -> Option<&Lut> {
        BEZIER_CURVES
            .iter()
            .position(|(c, _)| *c == curve)
            .map(|i| &self.luts[i])
    }

    /// Scales `intensity` through `curve` using this table.
    pub fn scale(&self, curve: Curve, intensity: u16) -> u16 {
        match self.lut(curve) {
            Some(lut) => lut.eval(intensity),
            None => curve.scale_closed_form(intensity),
        }
    }
}

impl Default for CurveTable {
    fn default() -> Self {
        Self::new()
    }
}
