use std::ops::Add;
use tracing::warn;
use crate::scale::{Aesthetic, ContinuousScale, DiscreteScale, ScaleSpec};
use crate::theme::ThemeConfig;

/// Theme and scales accumulated for one chart, in the order the
/// plotting library applies them.
///
/// Components are layered with `+`.  A later scale for an aesthetic
/// replaces the earlier one; a later theme replaces the earlier theme.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartStyle {
    theme: Option<ThemeConfig>,
    scales: Vec<ScaleSpec>,
}

/// Something that can be layered onto a [`ChartStyle`].
pub trait Component {
    fn apply(self, style: &mut ChartStyle);
}

impl ChartStyle {
    pub fn new() -> Self { Self::default() }

    pub fn theme(&self) -> Option<&ThemeConfig> { self.theme.as_ref() }

    pub fn scales(&self) -> &[ScaleSpec] { &self.scales }

    /// The scale for `aesthetic`, if any.
    pub fn scale(&self, aesthetic: Aesthetic) -> Option<&ScaleSpec> {
        self.scales.iter().find(|s| s.aesthetic() == aesthetic)
    }

    pub fn push(&mut self, component: impl Component) {
        component.apply(self)
    }
}

impl<C: Component> Add<C> for ChartStyle {
    type Output = ChartStyle;

    fn add(mut self, component: C) -> ChartStyle {
        component.apply(&mut self);
        self
    }
}

impl Component for ThemeConfig {
    fn apply(self, style: &mut ChartStyle) {
        style.theme = Some(self);
    }
}

impl Component for ScaleSpec {
    fn apply(self, style: &mut ChartStyle) {
        let aesthetic = self.aesthetic();
        match style.scales.iter().position(|s| s.aesthetic() == aesthetic) {
            Some(i) => {
                warn!(%aesthetic, "replacing existing scale");
                style.scales[i] = self;
            }
            None => style.scales.push(self),
        }
    }
}

impl Component for DiscreteScale {
    fn apply(self, style: &mut ChartStyle) {
        ScaleSpec::from(self).apply(style)
    }
}

impl Component for ContinuousScale {
    fn apply(self, style: &mut ChartStyle) {
        ScaleSpec::from(self).apply(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_theme, colour_scale, continuous_scale, fill_scale,
                ContinuousType, ScaleOptions, DEFAULT_SEQUENCE};

    #[test]
    fn layering() {
        let o = ScaleOptions::default();
        let style = ChartStyle::new()
            + fill_scale(&DEFAULT_SEQUENCE, o.clone()).unwrap()
            + colour_scale(&[1, 2], o.clone()).unwrap()
            + build_theme(12, "sans");
        assert_eq!(style.scales().len(), 2);
        assert_eq!(style.scale(Aesthetic::Colour).unwrap().colours().len(), 2);
        assert_eq!(style.theme(), Some(&build_theme(12, "sans")));
    }

    #[test]
    fn later_scale_replaces() {
        let o = ScaleOptions::default();
        let mut style = ChartStyle::new()
            + fill_scale(&DEFAULT_SEQUENCE, o.clone()).unwrap()
            + build_theme(12, "sans")
            + build_theme(16, "serif");
        style.push(continuous_scale(Aesthetic::Fill, ContinuousType::Sequential,
                                    "purple", None, o).unwrap());
        assert_eq!(style.scales().len(), 1);
        assert!(matches!(style.scale(Aesthetic::Fill),
                         Some(ScaleSpec::Continuous(_))));
        assert_eq!(style.theme().map(|t| t.base_size), Some(16));
        assert!(style.scale(Aesthetic::Colour).is_none());
    }
}
