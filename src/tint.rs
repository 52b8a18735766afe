//! Paler versions of colors.
//!
//! A tint with factor `f` moves every channel `c` linearly toward white:
//! `(255 - c) * (1 - f) + c`.  `f = 1` keeps the color, `f = 0` gives
//! white.

use rgb::RGB8;
use tracing::trace;
use crate::error::{BrandError, Result};
use crate::palettes::{self, PaletteEntry};

/// Anything that can be resolved to an RGB color.
///
/// Strings are first looked up as palette names (so `"red"` is the
/// brand red, not CSS red), then parsed as CSS colors (`#C8102E`,
/// `#c8102e`, `rgb(200, 16, 46)`, `crimson`, ...).  Alpha is ignored.
pub trait ColorInput {
    fn to_rgb8(&self) -> Result<RGB8>;
}

impl ColorInput for str {
    fn to_rgb8(&self) -> Result<RGB8> {
        if let Ok(e) = palettes::lookup(self) {
            return Ok(e.rgb8())
        }
        let c = csscolorparser::parse(self)
            .map_err(|e| BrandError::InvalidColor {
                input: self.to_string(), reason: e.to_string() })?;
        let [r, g, b, _] = c.to_rgba8();
        Ok(RGB8::new(r, g, b))
    }
}

impl ColorInput for String {
    fn to_rgb8(&self) -> Result<RGB8> { self.as_str().to_rgb8() }
}

impl ColorInput for RGB8 {
    #[inline]
    fn to_rgb8(&self) -> Result<RGB8> { Ok(*self) }
}

impl ColorInput for PaletteEntry {
    #[inline]
    fn to_rgb8(&self) -> Result<RGB8> { Ok(self.rgb8()) }
}

impl<T: ColorInput + ?Sized> ColorInput for &T {
    #[inline]
    fn to_rgb8(&self) -> Result<RGB8> { (**self).to_rgb8() }
}

/// Format a color as `#RRGGBB`.
pub fn hex(c: RGB8) -> String {
    format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b)
}

/// Normalized hex form of any color input.
pub fn normalize(color: &impl ColorInput) -> Result<String> {
    color.to_rgb8().map(hex)
}

fn check_factor(factor: f64) -> Result<f64> {
    if (0. ..= 1.).contains(&factor) { Ok(factor) }
    else { Err(BrandError::InvalidFactor(factor)) }
}

/// Tint of an already resolved color.  `factor` must be in \[0, 1\].
pub(crate) fn tint_rgb(c: RGB8, factor: f64) -> RGB8 {
    let ch = |x: u8| {
        let x = x as f64;
        ((255. - x) * (1. - factor) + x).round() as u8
    };
    RGB8::new(ch(c.r), ch(c.g), ch(c.b))
}

/// Tint a single color.
pub fn tint_color(color: &impl ColorInput, factor: f64) -> Result<String> {
    let factor = check_factor(factor)?;
    let c = color.to_rgb8()?;
    let t = tint_rgb(c, factor);
    trace!(from = %hex(c), factor, to = %hex(t), "tint");
    Ok(hex(t))
}

/// Tint every color of `colors` by the same `factor`.
///
/// # Example
///
/// ```
/// use chart_branding::tint::tint;
/// assert_eq!(tint(&["#C8102E", "navy"], 1.)?, ["#C8102E", "#002D4F"]);
/// assert_eq!(tint(&["#C8102E"], 0.)?, ["#FFFFFF"]);
/// assert_eq!(tint(&["#000000"], 0.5)?, ["#808080"]);
/// # Ok::<(), chart_branding::BrandError>(())
/// ```
pub fn tint<C: ColorInput>(colors: &[C], factor: f64) -> Result<Vec<String>> {
    let factor = check_factor(factor)?;
    let rgb = colors.iter().map(ColorInput::to_rgb8)
        .collect::<Result<Vec<_>>>()?;
    trace!(n = rgb.len(), factor, "tint");
    Ok(rgb.into_iter().map(|c| hex(tint_rgb(c, factor))).collect())
}

/// Tint one color by each of `factors`, in order.
///
/// ```
/// use chart_branding::tint::tint_steps;
/// let ramp = tint_steps(&"#000000", &[0., 0.5, 1.])?;
/// assert_eq!(ramp, ["#FFFFFF", "#808080", "#000000"]);
/// # Ok::<(), chart_branding::BrandError>(())
/// ```
pub fn tint_steps(color: &impl ColorInput, factors: &[f64])
                  -> Result<Vec<String>> {
    for &f in factors { check_factor(f)?; }
    let c = color.to_rgb8()?;
    trace!(color = %hex(c), n = factors.len(), "tint steps");
    Ok(factors.iter().map(|&f| hex(tint_rgb(c, f))).collect())
}
