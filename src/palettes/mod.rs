//! The brand palette.
//!
//! Nine colors, addressed by name or by their 1-based position.  The
//! first three are identity colors, the remaining six are meant for
//! data.

use std::collections::HashMap;
use lazy_static::lazy_static;
use tracing::debug;
use crate::error::{BrandError, Result};

pub(crate) mod ty;
pub use ty::{Category, Key, PaletteEntry};
use ty::Category::*;

lazy_static! {
    pub(crate) static ref PALETTE: Vec<PaletteEntry> = vec![
        PaletteEntry::new("navy", [0x00, 0x2D, 0x4F], Primary,
                          "Titles, headline figures and key messages"),
        PaletteEntry::new("teal", [0x00, 0x79, 0x7A], Primary,
                          "Highlights and call-outs"),
        PaletteEntry::new("charcoal", [0x33, 0x33, 0x33], Primary,
                          "Body text, annotations and axis lines"),
        PaletteEntry::new("green", [0x3E, 0x8E, 0x41], Secondary,
                          "First data series"),
        PaletteEntry::new("purple", [0x6A, 0x4C, 0x93], Secondary,
                          "Second data series"),
        PaletteEntry::new("red", [0xC8, 0x10, 0x2E], Secondary,
                          "Fourth data series; negative values"),
        PaletteEntry::new("light-grey", [0xBF, 0xBF, 0xBF], Secondary,
                          "Fifth data series; context and comparators"),
        PaletteEntry::new("blue", [0x1F, 0x6F, 0xB2], Secondary,
                          "Sixth data series; positive values"),
        PaletteEntry::new("brown", [0x8C, 0x5A, 0x3C], Secondary,
                          "Third data series"),
    ];

    static ref BY_NAME: HashMap<&'static str, usize> = {
        debug!(len = PALETTE.len(), "indexing brand palette");
        PALETTE.iter().enumerate().map(|(i, e)| (e.name, i)).collect()
    };
}

/// Number of colors in the palette.
pub fn len() -> usize { PALETTE.len() }

/// Iterate over the palette in order.
pub fn entries() -> impl ExactSizeIterator<Item = &'static PaletteEntry> {
    PALETTE.iter()
}

/// Palette entries of the given category, in palette order.
pub fn by_category(category: Category)
                   -> impl Iterator<Item = &'static PaletteEntry> {
    PALETTE.iter().filter(move |e| e.category == category)
}

/// Return the entry designated by `key`.
///
/// # Example
///
/// ```
/// use chart_branding::palettes;
/// let red = palettes::lookup("red")?;
/// assert_eq!(red, palettes::lookup(6usize)?);
/// assert_eq!(red.hex, "#C8102E");
/// # Ok::<(), chart_branding::BrandError>(())
/// ```
pub fn lookup<'a>(key: impl Into<Key<'a>>) -> Result<&'static PaletteEntry> {
    let key = key.into();
    let i = match key {
        Key::Name(name) => BY_NAME.get(name).copied(),
        Key::Index(i) if (1 ..= PALETTE.len()).contains(&i) => Some(i - 1),
        Key::Index(_) => None,
    };
    i.map(|i| &PALETTE[i])
        .ok_or_else(|| BrandError::KeyNotFound(key.to_string()))
}

/// Look up several entries, preserving the order of `keys`.  Fails on
/// the first key that does not designate an entry.
pub fn lookup_many<'a, K>(keys: impl IntoIterator<Item = K>)
                          -> Result<Vec<&'static PaletteEntry>>
where K: Into<Key<'a>> {
    keys.into_iter().map(lookup).collect()
}

/// Entry with this name, reported as [`BrandError::InvalidColorName`]
/// when absent.
pub(crate) fn named(name: &str) -> Result<&'static PaletteEntry> {
    lookup(name).map_err(|_| BrandError::InvalidColorName(name.to_string()))
}
