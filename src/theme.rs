//! The brand theme preset.
//!
//! A [`ThemeConfig`] maps decoration elements of a chart to their style.
//! It is meant to be merged over the plotting library's base theme:
//! elements absent from the map keep the library defaults.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Font family used when none is given.
pub const DEFAULT_FAMILY: &str = "default-sans";
/// Base font size, in points, used when none is given.
pub const DEFAULT_SIZE: u32 = 12;

/// Same as the palette “charcoal”.
const TEXT_COLOUR: &str = "#333333";
const CAPTION_COLOUR: &str = "#BEBEBE";
/// Same as the palette “light-grey”.
const GRID_COLOUR: &str = "#BFBFBF";
const GRID_WIDTH: f64 = 0.5;

macro_rules! elements {
    ($($(#[$doc: meta])* $v: ident => $name: literal),* $(,)?) => {
        /// Decoration elements of a chart the theme has an opinion on.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde",
                   derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
        pub enum Element { $($(#[$doc])* $v),* }

        impl Element {
            pub const ALL: &'static [Element] = &[$(Element::$v),*];

            /// The element name as used by the plotting library.
            pub fn name(self) -> &'static str {
                match self { $(Element::$v => $name),* }
            }
        }

        impl FromStr for Element {
            type Err = UnknownElement;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Element::$v),)*
                    _ => Err(UnknownElement(s.to_string())),
                }
            }
        }
    }
}

elements! {
    Title => "title",
    Subtitle => "subtitle",
    Caption => "caption",
    AxisTitle => "axis-title",
    AxisText => "axis-text",
    LegendTitle => "legend-title",
    LegendText => "legend-text",
    /// Vertical gridlines.
    PanelGridMajorX => "panel-grid-major-x",
    /// Horizontal gridlines.
    PanelGridMajorY => "panel-grid-major-y",
    PanelGridMinorX => "panel-grid-minor-x",
    PanelGridMinorY => "panel-grid-minor-y",
    PlotBackground => "plot-background",
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown element name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme element “{0}”")]
pub struct UnknownElement(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FontWeight { Plain, Bold }

/// Horizontal justification of a text element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Justify { Left, Centre, Right }

impl Justify {
    /// As a fraction of the available width (0 = left, 1 = right).
    pub fn hjust(self) -> f64 {
        match self { Justify::Left => 0., Justify::Centre => 0.5,
                     Justify::Right => 1. }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LegendPosition { Top, Bottom, Left, Right, None }

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextStyle {
    /// Font size in points.
    pub size: u32,
    pub colour: String,
    pub weight: FontWeight,
    pub justify: Justify,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineStyle {
    pub colour: String,
    pub width: f64,
}

/// A rectangle; `None` colors are transparent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectStyle {
    pub fill: Option<String>,
    pub colour: Option<String>,
}

/// Style of one element.  `Blank` removes the element.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ElementStyle {
    Blank,
    Text(TextStyle),
    Line(LineStyle),
    Rect(RectStyle),
}

/// Theme settings to merge into the plotting library's theme.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThemeConfig {
    pub base_size: u32,
    pub base_family: String,
    pub legend_position: LegendPosition,
    elements: BTreeMap<Element, ElementStyle>,
}

impl Default for ThemeConfig {
    fn default() -> Self { build_theme(DEFAULT_SIZE, DEFAULT_FAMILY) }
}

impl ThemeConfig {
    /// Style of `element`, `None` if the theme leaves it to the
    /// plotting library.
    pub fn get(&self, element: Element) -> Option<&ElementStyle> {
        self.elements.get(&element)
    }

    /// Same as [`ThemeConfig::get`] with the element given by name.
    pub fn element(&self, name: &str) -> Option<&ElementStyle> {
        name.parse().ok().and_then(|e| self.get(e))
    }

    /// Whether `element` is removed from the chart.
    pub fn is_blank(&self, element: Element) -> bool {
        matches!(self.get(element), Some(ElementStyle::Blank))
    }

    /// Text style of `element`, if it is a text element.
    pub fn text(&self, element: Element) -> Option<&TextStyle> {
        match self.get(element) {
            Some(ElementStyle::Text(t)) => Some(t),
            _ => None,
        }
    }

    /// All styled elements, in [`Element`] order.
    pub fn elements(&self) -> impl Iterator<Item = (Element, &ElementStyle)> {
        self.elements.iter().map(|(&e, s)| (e, s))
    }

    /// Override the style of `element`.
    pub fn with(mut self, element: Element, style: ElementStyle) -> Self {
        self.elements.insert(element, style);
        self
    }

    /// Move the legend.
    pub fn legend(mut self, position: LegendPosition) -> Self {
        self.legend_position = position;
        self
    }
}

fn text(size: u32, justify: Justify) -> ElementStyle {
    ElementStyle::Text(TextStyle { size, colour: TEXT_COLOUR.to_string(),
                                   weight: FontWeight::Plain, justify })
}

/// Build the brand theme for a base font size (in points) and family.
///
/// ```
/// use chart_branding::build_theme;
/// use chart_branding::theme::{Element, LegendPosition};
/// let theme = build_theme(12, "sans");
/// assert_eq!(theme.legend_position, LegendPosition::Bottom);
/// assert_eq!(theme.text(Element::Title).unwrap().size, 14);
/// assert!(theme.is_blank(Element::PanelGridMajorX));
/// ```
pub fn build_theme(base_size: u32, base_family: &str) -> ThemeConfig {
    use Element::*;
    use Justify::*;
    let small = base_size.saturating_sub(2);
    let mut elements = BTreeMap::new();
    elements.insert(Title, text(base_size.saturating_add(2), Centre));
    elements.insert(Subtitle, text(small, Centre));
    elements.insert(Caption, ElementStyle::Text(TextStyle {
        size: base_size, colour: CAPTION_COLOUR.to_string(),
        weight: FontWeight::Plain, justify: Left }));
    elements.insert(AxisTitle, text(small, Centre));
    elements.insert(AxisText, text(small, Centre));
    elements.insert(LegendTitle, text(small, Left));
    elements.insert(LegendText, text(small, Left));
    elements.insert(PanelGridMajorX, ElementStyle::Blank);
    elements.insert(PanelGridMinorX, ElementStyle::Blank);
    elements.insert(PanelGridMinorY, ElementStyle::Blank);
    elements.insert(PanelGridMajorY, ElementStyle::Line(LineStyle {
        colour: GRID_COLOUR.to_string(), width: GRID_WIDTH }));
    elements.insert(PlotBackground, ElementStyle::Rect(RectStyle {
        fill: None, colour: None }));
    debug!(base_size, base_family, n = elements.len(), "brand theme");
    ThemeConfig {
        base_size,
        base_family: base_family.to_string(),
        legend_position: LegendPosition::Bottom,
        elements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palettes;

    #[test]
    fn sizes_follow_base() {
        let t = build_theme(12, "sans");
        let size = |e| t.text(e).unwrap().size;
        assert_eq!(size(Element::Title), 14);
        assert_eq!(size(Element::Subtitle), 10);
        assert_eq!(size(Element::AxisTitle), 10);
        assert_eq!(size(Element::LegendTitle), 10);
        assert_eq!(size(Element::Caption), 12);

        let t = build_theme(20, "Arial");
        assert_eq!(t.text(Element::Title).unwrap().size, 22);
        assert_eq!(t.base_family, "Arial");
        assert_eq!(build_theme(1, "sans").text(Element::Subtitle)
                   .unwrap().size, 0);
    }

    #[test]
    fn extreme_sizes_saturate() {
        let t = build_theme(u32::MAX, "sans");
        assert_eq!(t.text(Element::Title).unwrap().size, u32::MAX);
        assert_eq!(t.text(Element::Subtitle).unwrap().size, u32::MAX - 2);
        assert_eq!(build_theme(0, "sans").text(Element::AxisTitle)
                   .unwrap().size, 0);
    }

    #[test]
    fn fixed_decisions() {
        let t = ThemeConfig::default();
        assert_eq!(t, build_theme(12, "default-sans"));
        assert_eq!(t.base_family, DEFAULT_FAMILY);
        assert_eq!(t.legend_position, LegendPosition::Bottom);
        let title = t.text(Element::Title).unwrap();
        assert_eq!(title.weight, FontWeight::Plain);
        assert_eq!(title.justify, Justify::Centre);
        assert_eq!(t.text(Element::Subtitle).unwrap().justify, Justify::Centre);
        let caption = t.text(Element::Caption).unwrap();
        assert_eq!(caption.justify.hjust(), 0.);
        assert_eq!(caption.colour, "#BEBEBE");
        assert!(t.is_blank(Element::PanelGridMajorX));
        assert!(t.is_blank(Element::PanelGridMinorX));
        assert!(t.is_blank(Element::PanelGridMinorY));
        assert!(!t.is_blank(Element::PanelGridMajorY));
        assert_eq!(t.get(Element::PlotBackground),
                   Some(&ElementStyle::Rect(RectStyle { fill: None,
                                                        colour: None })));
    }

    #[test]
    fn colours_come_from_palette() {
        assert_eq!(TEXT_COLOUR, palettes::lookup("charcoal").unwrap().hex);
        assert_eq!(GRID_COLOUR, palettes::lookup("light-grey").unwrap().hex);
    }

    #[test]
    fn element_names() {
        for &e in Element::ALL {
            assert_eq!(e.name().parse::<Element>(), Ok(e));
        }
        assert!("panel-grid".parse::<Element>().is_err());
        let t = ThemeConfig::default();
        assert_eq!(t.element("title"), t.get(Element::Title));
        assert_eq!(t.element("nope"), None);
        assert_eq!(t.elements().count(), Element::ALL.len());
    }

    #[test]
    fn overrides() {
        let t = ThemeConfig::default()
            .with(Element::PanelGridMajorX, ElementStyle::Line(LineStyle {
                colour: GRID_COLOUR.into(), width: 1. }))
            .legend(LegendPosition::Right);
        assert!(!t.is_blank(Element::PanelGridMajorX));
        assert_eq!(t.legend_position, LegendPosition::Right);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_round_trip() {
        let t = build_theme(12, "sans");
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains(r#""panel-grid-major-x":"blank""#), "{json}");
        let back: ThemeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
