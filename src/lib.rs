//! Brand styling for grammar-of-graphics charts.
//!
//! - [`palettes`]: the nine brand colors, by name or 1-based position.
//! - [`tint`](mod@tint): paler versions of colors.
//! - [`theme`]: the brand theme preset, [`build_theme`].
//! - [`scale`]: discrete ([`fill_scale`], [`colour_scale`]) and
//!   continuous ([`continuous_scale`]) color scales.
//! - [`ChartStyle`] layers a theme and scales the way the plotting
//!   library composes them.
//!
//! Nothing here renders anything: the values are configuration handed
//! over to the plotting library.
//!
//! ```
//! use chart_branding::{build_theme, fill_scale, continuous_scale,
//!                      Aesthetic, ChartStyle, ContinuousType,
//!                      ScaleOptions, DEFAULT_SEQUENCE};
//! let style = ChartStyle::new()
//!     + build_theme(14, "sans")
//!     + fill_scale(&DEFAULT_SEQUENCE, ScaleOptions::default())?
//!     + continuous_scale(Aesthetic::Colour, ContinuousType::Sequential,
//!                        "green", None, ScaleOptions::named("Share"))?;
//! assert_eq!(style.scales().len(), 2);
//! # Ok::<(), chart_branding::BrandError>(())
//! ```

use rgb::RGB8;

mod error;
pub mod palettes;
pub mod tint;
pub mod gradient;
pub mod theme;
pub mod scale;
mod chart;

pub use error::{BrandError, Result};
pub use palettes::{Category, Key, PaletteEntry};
pub use tint::{ColorInput, tint, tint_steps};
pub use gradient::Gradient;
pub use theme::{build_theme, ThemeConfig};
pub use scale::{colour_scale, continuous_scale, discrete_scale, fill_scale,
                Aesthetic, ContinuousScale, ContinuousType, DiscreteScale,
                ScaleOptions, ScaleSpec, DEFAULT_SEQUENCE};
pub use chart::{ChartStyle, Component};

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> RGB8;

    /// Same as [`ColorRange::rgb`] formatted as `#RRGGBB`.
    fn hex(&self, t: f64) -> String { tint::hex(self.rgb(t)) }

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (both included) together with their colors,
    /// `a` being mapped to the start of the range and `b` to its end.
    /// Useful to lay out legend keys.  It is not required that `a <= b`.
    fn range(&self, mut a: f64, mut b: f64, n: usize) -> Range<'_, Self>
    where Self: Sized {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        if n == 0 {
            Range { range: self, a, b, flast: 0., last: 0, i: 1, j: 0 }
        } else {
            Range { range: self, a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }
}

/// An iterator yielding `f64` in a given range together with colors.
///
/// Created by [`ColorRange::range`].
pub struct Range<'a, R> {
    range: &'a R,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R: ColorRange> Range<'_, R> {
    fn at(&self, k: usize) -> (f64, RGB8) {
        if k == 0 {
            (self.a, self.range.rgb(0.))
        } else if k == self.last {
            (self.b, self.range.rgb(1.))
        } else {
            let t = k as f64 / self.flast;
            let mut x = ((self.last - k) as f64 * self.a
                         + k as f64 * self.b) / self.flast;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, self.range.rgb(t))
        }
    }
}

impl<R: ColorRange> Iterator for Range<'_, R> {
    type Item = (f64, RGB8);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i > self.j { return None }
        let item = self.at(self.i);
        self.i += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.j + 1).saturating_sub(self.i);
        (len, Some(len))
    }
}

impl<R: ColorRange> ExactSizeIterator for Range<'_, R> {}

impl<R: ColorRange> DoubleEndedIterator for Range<'_, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i > self.j { return None }
        let item = self.at(self.j);
        if self.j == 0 { self.i = 1 } else { self.j -= 1 }
        Some(item)
    }
}
