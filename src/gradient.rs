//! Piecewise gradients through color stops, interpolated in CIE
//! L*a*b* (sRGB, D65 white point).

use palette::{FromColor, Mix, Srgb};
use palette::white_point::D65;
use rgb::RGB8;
use crate::ColorRange;

type Lab = palette::Lab<D65, f64>;

fn to_lab(c: RGB8) -> Lab {
    Lab::from_color(Srgb::new(c.r, c.g, c.b).into_format::<f64>())
}

fn from_lab(lab: Lab) -> RGB8 {
    let c: Srgb<u8> = Srgb::<f64>::from_color(lab).into_format();
    RGB8::new(c.red, c.green, c.blue)
}

/// Gradient through evenly spaced color stops.
#[derive(Clone, Debug)]
pub struct Gradient {
    stops: Vec<RGB8>, // Invariant: non-empty
    lab: Vec<Lab>,
}

impl Gradient {
    /// Returns `None` when `stops` is empty.
    pub fn new(stops: Vec<RGB8>) -> Option<Self> {
        if stops.is_empty() { return None }
        Some(Self::from_stops(stops))
    }

    /// `stops` must not be empty.
    pub(crate) fn from_stops(stops: Vec<RGB8>) -> Self {
        debug_assert!(!stops.is_empty());
        let lab = stops.iter().map(|&c| to_lab(c)).collect();
        Gradient { stops, lab }
    }

    pub fn stops(&self) -> &[RGB8] { &self.stops }
}

impl ColorRange for Gradient {
    /// `t == 0.` gives the first stop and `t == 1.` the last one.
    /// Values outside \[0, 1\] are clamped.
    fn rgb(&self, t: f64) -> RGB8 {
        let n = self.stops.len() - 1;
        if n == 0 { return self.stops[0] }
        let tn = t.clamp(0., 1.) * n as f64;
        let i = tn.trunc() as usize;
        let frac = tn.fract();
        if i >= n { self.stops[n] }
        else if frac == 0. { self.stops[i] }
        else { from_lab(self.lab[i].mix(self.lab[i + 1], frac)) }
    }
}
