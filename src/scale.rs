//! Color scales built from the brand palette.
//!
//! Discrete scales pick palette colors by position; continuous scales
//! are ramps of tints of one or two palette colors.  Both are plain
//! values the plotting library turns into its manual and gradient
//! scales.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use rgb::RGB8;
use tracing::debug;
use crate::error::{BrandError, Result};
use crate::gradient::Gradient;
use crate::palettes::{self, Key};
use crate::tint::{hex, tint_rgb, ColorInput};
use crate::ColorRange;

/// Palette positions (1-based) used by discrete scales unless told
/// otherwise: green, purple, brown, red, light grey, blue.
pub const DEFAULT_SEQUENCE: [usize; 6] = [4, 5, 9, 6, 7, 8];

/// Second color of diverging scales unless told otherwise.
pub const DEFAULT_SECOND: &str = "blue";

const SEQUENTIAL_STEPS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.];
const DIVERGING_FIRST: [f64; 5] = [1., 0.8, 0.6, 0.4, 0.2];
const DIVERGING_SECOND: [f64; 3] = [0.6, 0.8, 1.];

/// The aesthetic a scale maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Aesthetic {
    Fill,
    Colour,
}

impl fmt::Display for Aesthetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Aesthetic::Fill => "fill",
                                 Aesthetic::Colour => "colour" })
    }
}

/// Shape of a continuous scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ContinuousType {
    /// Light to dark tints of one color.
    Sequential,
    /// Dark to light tints of a first color, then light to dark tints
    /// of a second one.
    Diverging,
}

impl FromStr for ContinuousType {
    type Err = BrandError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sequential" => Ok(ContinuousType::Sequential),
            "diverging" => Ok(ContinuousType::Diverging),
            _ => Err(BrandError::InvalidType(s.to_string())),
        }
    }
}

impl fmt::Display for ContinuousType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { ContinuousType::Sequential => "sequential",
                                 ContinuousType::Diverging => "diverging" })
    }
}

/// Extra settings passed through, untouched, to the plotting library's
/// scale.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleOptions {
    /// Legend title.
    pub name: Option<String>,
    pub guide: Option<String>,
    /// Color for missing values.
    pub na_value: Option<String>,
    /// Anything else the plotting library understands.
    pub extra: BTreeMap<String, String>,
}

impl ScaleOptions {
    pub fn named(name: impl Into<String>) -> Self {
        ScaleOptions { name: Some(name.into()), ..Self::default() }
    }

    pub fn guide(mut self, guide: impl Into<String>) -> Self {
        self.guide = Some(guide.into());
        self
    }

    /// Color of missing values; resolved like any [`ColorInput`].
    pub fn na_value(mut self, colour: &impl ColorInput) -> Result<Self> {
        self.na_value = Some(colour.to_rgb8().map(hex)?);
        Ok(self)
    }

    pub fn set(mut self, key: impl Into<String>,
               value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// A manual discrete scale: the i-th level of the data gets the i-th
/// color.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DiscreteScale {
    pub aesthetic: Aesthetic,
    values: Vec<String>,
    pub options: ScaleOptions,
}

impl DiscreteScale {
    /// Colors, as `#RRGGBB`, in level order.
    pub fn values(&self) -> &[String] { &self.values }

    /// Color of the `level`-th level (0-based), `None` past the end.
    pub fn value(&self, level: usize) -> Option<&str> {
        self.values.get(level).map(String::as_str)
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

/// Build a discrete scale from 1-based palette positions.
///
/// ```
/// use chart_branding::{discrete_scale, Aesthetic, ScaleOptions};
/// let s = discrete_scale(Aesthetic::Fill, &[6, 8], ScaleOptions::default())?;
/// assert_eq!(s.values(), ["#C8102E", "#1F6FB2"]);
/// # Ok::<(), chart_branding::BrandError>(())
/// ```
pub fn discrete_scale(aesthetic: Aesthetic, sequence: &[usize],
                      options: ScaleOptions) -> Result<DiscreteScale> {
    let len = palettes::len();
    let values = sequence.iter()
        .map(|&index| {
            palettes::lookup(Key::Index(index))
                .map(|e| e.hex.clone())
                .map_err(|_| BrandError::InvalidIndex { index, len })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(%aesthetic, n = values.len(), "discrete scale");
    Ok(DiscreteScale { aesthetic, values, options })
}

/// Discrete fill scale; see [`discrete_scale`].
pub fn fill_scale(sequence: &[usize], options: ScaleOptions)
                  -> Result<DiscreteScale> {
    discrete_scale(Aesthetic::Fill, sequence, options)
}

/// Discrete colour scale; see [`discrete_scale`].
pub fn colour_scale(sequence: &[usize], options: ScaleOptions)
                    -> Result<DiscreteScale> {
    discrete_scale(Aesthetic::Colour, sequence, options)
}

/// A gradient scale through tints of palette colors.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ContinuousScale {
    pub aesthetic: Aesthetic,
    pub typ: ContinuousType,
    colours: Vec<String>,
    pub options: ScaleOptions,
    #[cfg_attr(feature = "serde", serde(skip))]
    gradient: Gradient,
}

impl PartialEq for ContinuousScale {
    fn eq(&self, other: &Self) -> bool {
        self.aesthetic == other.aesthetic && self.typ == other.typ
            && self.colours == other.colours && self.options == other.options
    }
}

impl ContinuousScale {
    /// Gradient stops, as `#RRGGBB`, from the low end of the data to
    /// the high end.
    pub fn colours(&self) -> &[String] { &self.colours }
}

impl ColorRange for ContinuousScale {
    /// Color of the rescaled data value `t` ∈ \[0, 1\].
    fn rgb(&self, t: f64) -> RGB8 { self.gradient.rgb(t) }
}

/// Build a continuous scale from palette color names.
///
/// A `Sequential` scale has 5 tints of `first_col` (factors 1/5 to 1,
/// light to dark).  A `Diverging` one has 5 tints of `first_col`
/// (factors 1 down to 1/5) followed by 3 tints of `second_col` (factors
/// 3/5 to 1), so it is light in the middle.  `second_col` defaults to
/// [`DEFAULT_SECOND`]; it is checked even for sequential scales.
///
/// ```
/// use chart_branding::{continuous_scale, Aesthetic, ContinuousType,
///                      ScaleOptions};
/// let s = continuous_scale(Aesthetic::Colour, "diverging".parse()?,
///                          "red", None, ScaleOptions::default())?;
/// assert_eq!(s.colours().len(), 8);
/// assert_eq!(s.colours()[0], "#C8102E");
/// assert_eq!(s.colours()[7], "#1F6FB2");
/// # Ok::<(), chart_branding::BrandError>(())
/// ```
pub fn continuous_scale(aesthetic: Aesthetic, typ: ContinuousType,
                        first_col: &str, second_col: Option<&str>,
                        options: ScaleOptions) -> Result<ContinuousScale> {
    let first = palettes::named(first_col)?.rgb8();
    let second = palettes::named(second_col.unwrap_or(DEFAULT_SECOND))?.rgb8();
    let stops: Vec<RGB8> = match typ {
        ContinuousType::Sequential => SEQUENTIAL_STEPS.iter()
            .map(|&f| tint_rgb(first, f)).collect(),
        ContinuousType::Diverging => DIVERGING_FIRST.iter()
            .map(|&f| tint_rgb(first, f))
            .chain(DIVERGING_SECOND.iter().map(|&f| tint_rgb(second, f)))
            .collect(),
    };
    let colours = stops.iter().map(|&c| hex(c)).collect();
    debug!(%aesthetic, %typ, first_col, n = stops.len(), "continuous scale");
    Ok(ContinuousScale { aesthetic, typ, colours, options,
                         gradient: Gradient::from_stops(stops) })
}

/// Any scale the brand provides.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum ScaleSpec {
    Discrete(DiscreteScale),
    Continuous(ContinuousScale),
}

impl ScaleSpec {
    pub fn aesthetic(&self) -> Aesthetic {
        match self {
            ScaleSpec::Discrete(s) => s.aesthetic,
            ScaleSpec::Continuous(s) => s.aesthetic,
        }
    }

    /// The colors handed to the plotting library, in order.
    pub fn colours(&self) -> &[String] {
        match self {
            ScaleSpec::Discrete(s) => s.values(),
            ScaleSpec::Continuous(s) => s.colours(),
        }
    }

    pub fn options(&self) -> &ScaleOptions {
        match self {
            ScaleSpec::Discrete(s) => &s.options,
            ScaleSpec::Continuous(s) => &s.options,
        }
    }
}

impl From<DiscreteScale> for ScaleSpec {
    fn from(s: DiscreteScale) -> Self { ScaleSpec::Discrete(s) }
}

impl From<ContinuousScale> for ScaleSpec {
    fn from(s: ContinuousScale) -> Self { ScaleSpec::Continuous(s) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hexes(names: &[&str]) -> Vec<String> {
        palettes::lookup_many(names.iter().copied()).unwrap()
            .into_iter().map(|e| e.hex.clone()).collect()
    }

    fn darkness(c: &str) -> u32 {
        let c = c.to_rgb8().unwrap();
        [c.r, c.g, c.b].iter().map(|&x| 255 - x as u32).sum()
    }

    #[test]
    fn default_sequence() {
        let s = fill_scale(&DEFAULT_SEQUENCE, ScaleOptions::default()).unwrap();
        assert_eq!(s.len(), 6);
        assert_eq!(s.values(), hexes(&["green", "purple", "brown", "red",
                                       "light-grey", "blue"]));
        assert_eq!(s.aesthetic, Aesthetic::Fill);
        assert_eq!(s.value(0), Some("#3E8E41"));
        assert_eq!(s.value(6), None);
        let c = colour_scale(&DEFAULT_SEQUENCE, ScaleOptions::default())
            .unwrap();
        assert_eq!(c.aesthetic, Aesthetic::Colour);
        assert_eq!(c.values(), s.values());
    }

    #[test]
    fn bad_indices() {
        let o = ScaleOptions::default();
        assert_eq!(fill_scale(&[4, 10], o.clone()),
                   Err(BrandError::InvalidIndex { index: 10, len: 9 }));
        assert_eq!(colour_scale(&[0], o.clone()),
                   Err(BrandError::InvalidIndex { index: 0, len: 9 }));
        assert!(fill_scale(&[], o).unwrap().is_empty());
    }

    #[test]
    fn options_pass_through() {
        let o = ScaleOptions::named("Region").guide("legend")
            .set("drop", "false")
            .na_value(&"light-grey").unwrap();
        let s = fill_scale(&[4], o.clone()).unwrap();
        assert_eq!(s.options, o);
        assert_eq!(o.na_value.as_deref(), Some("#BFBFBF"));
        assert_eq!(o.extra.get("drop").map(String::as_str), Some("false"));
        assert!(ScaleOptions::default().na_value(&"nope").is_err());
    }

    #[test]
    fn sequential() {
        let s = continuous_scale(Aesthetic::Colour, ContinuousType::Sequential,
                                 "red", None, ScaleOptions::default())
            .unwrap();
        let c = s.colours();
        assert_eq!(c.len(), 5);
        assert_eq!(c[4], "#C8102E");
        for (i, w) in c.windows(2).enumerate() {
            assert!(darkness(&w[0]) < darkness(&w[1]), "{i}: {w:?}");
        }
        let expected = crate::tint_steps(&"red", &[0.2, 0.4, 0.6, 0.8, 1.])
            .unwrap();
        assert_eq!(c, expected);
    }

    #[test]
    fn diverging() {
        let s = continuous_scale(Aesthetic::Fill, ContinuousType::Diverging,
                                 "red", Some("blue"), ScaleOptions::default())
            .unwrap();
        let c = s.colours();
        assert_eq!(c.len(), 8);
        assert_eq!(c[0], "#C8102E");
        assert_eq!(c[7], "#1F6FB2");
        // Light in the middle, dark at both ends.
        for mid in [&c[3], &c[4]] {
            assert!(darkness(mid) < darkness(&c[0]));
            assert!(darkness(mid) < darkness(&c[7]));
        }
        let lightest = c.iter().map(|c| darkness(c)).min().unwrap();
        assert_eq!(darkness(&c[4]), lightest);
        let mid = c[4].to_rgb8().unwrap();
        assert!([mid.r, mid.g, mid.b].iter().all(|&x| x >= 200), "{}", c[4]);
        assert_eq!(s.hex(0.), c[0]);
        assert_eq!(s.hex(1.), c[7]);
    }

    #[test]
    fn default_second_colour() {
        let o = ScaleOptions::default();
        let a = continuous_scale(Aesthetic::Fill, ContinuousType::Diverging,
                                 "green", None, o.clone()).unwrap();
        let b = continuous_scale(Aesthetic::Fill, ContinuousType::Diverging,
                                 "green", Some("blue"), o).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_continuous() {
        let o = ScaleOptions::default();
        assert_eq!("sequential2".parse::<ContinuousType>(),
                   Err(BrandError::InvalidType("sequential2".into())));
        assert_eq!(continuous_scale(Aesthetic::Fill,
                                    ContinuousType::Sequential,
                                    "crimson", None, o.clone()),
                   Err(BrandError::InvalidColorName("crimson".into())));
        assert_eq!(continuous_scale(Aesthetic::Fill, ContinuousType::Diverging,
                                    "red", Some("#1F6FB2"), o),
                   Err(BrandError::InvalidColorName("#1F6FB2".into())));
    }

    #[test]
    fn scale_spec() {
        let s: ScaleSpec = fill_scale(&[6, 8], ScaleOptions::named("x"))
            .unwrap().into();
        assert_eq!(s.aesthetic(), Aesthetic::Fill);
        assert_eq!(s.colours(), hexes(&["red", "blue"]));
        assert_eq!(s.options().name.as_deref(), Some("x"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json() {
        let s: ScaleSpec = continuous_scale(
            Aesthetic::Colour, ContinuousType::Sequential, "teal", None,
            ScaleOptions::named("Rate")).unwrap().into();
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["kind"], "continuous");
        assert_eq!(v["aesthetic"], "colour");
        assert_eq!(v["typ"], "sequential");
        assert_eq!(v["colours"].as_array().map(Vec::len), Some(5));
        assert_eq!(v["options"]["name"], "Rate");
        assert!(v.get("gradient").is_none());
    }
}
