use rgb::{RGB, RGB8};

/// A named color of the brand palette.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PaletteEntry {
    /// Lookup key, unique across the palette.
    pub name: &'static str,
    /// `#RRGGBB`, upper case.
    pub hex: String,
    /// The same color as `hex` with channels in \[0, 1\].
    pub rgb: RGB<f64>,
    pub category: Category,
    /// Guidance on where the color is meant to be used.
    pub usage: &'static str,
}

impl PaletteEntry {
    pub(crate) fn new(name: &'static str, [r, g, b]: [u8; 3],
                      category: Category, usage: &'static str) -> Self {
        let rgb8 = RGB8::new(r, g, b);
        PaletteEntry {
            name,
            hex: crate::tint::hex(rgb8),
            rgb: RGB { r: r as f64 / 255., g: g as f64 / 255.,
                       b: b as f64 / 255. },
            category,
            usage,
        }
    }

    /// The color with 8-bit channels.
    pub fn rgb8(&self) -> RGB8 {
        let c = |x: f64| (x * 255.).round() as u8;
        RGB8::new(c(self.rgb.r), c(self.rgb.g), c(self.rgb.b))
    }
}

/// Role of a color within the brand guidelines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// Identity colors: titles, headline figures, body text.
    Primary,
    /// Data colors, used to distinguish series in charts.
    Secondary,
}

/// A way to designate a palette entry: its name or its 1-based
/// position in the palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key<'a> {
    Name(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(name: &'a str) -> Self { Key::Name(name) }
}

impl<'a> From<&'a String> for Key<'a> {
    fn from(name: &'a String) -> Self { Key::Name(name) }
}

impl From<usize> for Key<'_> {
    fn from(i: usize) -> Self { Key::Index(i) }
}

impl std::fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Name(n) => f.write_str(n),
            Key::Index(i) => write!(f, "{i}"),
        }
    }
}
