//! Rijkshuisstijl brand palette: 18 color families with six intensities each.

use crate::foundation::error::{ChartError, ChartResult};

/// One rung of the intensity ladder.
///
/// Declaration order is the ladder order: [`Intensity::next`] steps from 100%
/// down to 15% and wraps back to 100%.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Intensity {
    P100,
    P75,
    P60,
    P45,
    P30,
    P15,
}

impl Intensity {
    /// The full ladder, strongest first.
    pub const LADDER: [Intensity; 6] = [
        Intensity::P100,
        Intensity::P75,
        Intensity::P60,
        Intensity::P45,
        Intensity::P30,
        Intensity::P15,
    ];

    pub fn percent(self) -> u8 {
        match self {
            Intensity::P100 => 100,
            Intensity::P75 => 75,
            Intensity::P60 => 60,
            Intensity::P45 => 45,
            Intensity::P30 => 30,
            Intensity::P15 => 15,
        }
    }

    /// Parse a percentage, failing with [`ChartError::UnknownIntensity`].
    pub fn from_percent(pct: i64) -> ChartResult<Self> {
        Self::LADDER
            .into_iter()
            .find(|i| i64::from(i.percent()) == pct)
            .ok_or(ChartError::UnknownIntensity(pct))
    }

    /// Next rung down the ladder, wrapping from 15% to 100%.
    pub fn next(self) -> Self {
        Self::LADDER[(self.index() + 1) % Self::LADDER.len()]
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// A named hue with its six shades, indexed in ladder order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorFamily {
    pub name: &'static str,
    pub shades: [&'static str; 6],
}

impl ColorFamily {
    pub fn shade(&self, intensity: Intensity) -> &'static str {
        self.shades[intensity.index()]
    }
}

const fn family(name: &'static str, shades: [&'static str; 6]) -> ColorFamily {
    ColorFamily { name, shades }
}

/// The government palette, shades listed 100, 75, 60, 45, 30, 15.
pub static GOVERNMENT_THEME: [ColorFamily; 18] = [
    family(
        "Lintblauw",
        ["#154273", "#4F7196", "#738EAB", "#95A9C0", "#B8C6D5", "#DCE3EA"],
    ),
    family(
        "Paars",
        ["#42145F", "#714F87", "#8D729F", "#A995B7", "#C6B8CE", "#E3DCE7"],
    ),
    family(
        "Violet",
        ["#A90061", "#BE4088", "#CB66A0", "#D88CB7", "#E5B2CF", "#F2D9E7"],
    ),
    family(
        "Robijnrood",
        ["#CA005D", "#D74085", "#DF669D", "#E78CB6", "#EFB2CE", "#F7D9E7"],
    ),
    family(
        "Roze",
        ["#FF4F8B", "#FF7FAE", "#FF9FC8", "#FFBFD9", "#FFDFEB", "#FFEFF5"],
    ),
    family(
        "Rood",
        ["#C70000", "#D94F4F", "#E26B6B", "#E88A8A", "#F1A8A8", "#F9C7C7"],
    ),
    family(
        "Oranje",
        ["#E17000", "#E89440", "#EDA966", "#F1BE8C", "#F6D4B2", "#FBEAD9"],
    ),
    family(
        "Donkergeel",
        ["#FFB612", "#FDC84D", "#FDD370", "#FDDE94", "#FEE9B7", "#FEF4DB"],
    ),
    family(
        "Geel",
        ["#F9E11E", "#FAE856", "#FBED78", "#FCF199", "#FDF6BB", "#FEFBDD"],
    ),
    family(
        "Donkerbruin",
        ["#673327", "#8D665D", "#A3847D", "#BAA39D", "#D1C1BD", "#E8E0DF"],
    ),
    family(
        "Bruin",
        ["#94710A", "#AF9447", "#BFA96C", "#CFBF90", "#DFD4B5", "#EFEADA"],
    ),
    family(
        "Donkergroen",
        ["#275937", "#5D8269", "#7D9B87", "#9DB4A4", "#BDCDC2", "#DEE6E1"],
    ),
    family(
        "Groen",
        ["#39870C", "#6AA549", "#88B76D", "#A5C991", "#C3DBB5", "#E1EDDA"],
    ),
    family(
        "Mosgroen",
        ["#777B00", "#999C40", "#ADAF66", "#C1C38C", "#D6D7B2", "#EBEBD9"],
    ),
    family(
        "Mintgroen",
        ["#76D2B6", "#98DDC8", "#ACE4D3", "#C1EBDE", "#D5F1E9", "#EAF8F4"],
    ),
    family(
        "Donkerblauw",
        ["#01689B", "#408EB4", "#66A4C3", "#8CBBD2", "#B2D1E1", "#D9E8F0"],
    ),
    family(
        "Hemelblauw",
        ["#007BC7", "#409CD5", "#66AFDD", "#8CC3E6", "#B2D7EE", "#D9EBF7"],
    ),
    family(
        "Lichtblauw",
        ["#8FCAE7", "#ABD7ED", "#BCDFF0", "#CCE7F4", "#DDEFF8", "#EEF7FC"],
    ),
];

/// Family order that reads well when colors mark quantities side by side.
pub static QUANTITATIVE_ORDER: [&str; 18] = [
    "Robijnrood",
    "Mintgroen",
    "Paars",
    "Geel",
    "Donkerblauw",
    "Oranje",
    "Mosgroen",
    "Lichtblauw",
    "Rood",
    "Donkergroen",
    "Roze",
    "Donkergeel",
    "Lintblauw",
    "Donkerbruin",
    "Hemelblauw",
    "Bruin",
    "Violet",
    "Groen",
];

/// Read-only view over a set of color families.
///
/// Lookups never mutate, so one registry can be shared freely across threads.
#[derive(Clone, Copy, Debug)]
pub struct PaletteRegistry {
    families: &'static [ColorFamily],
}

impl PaletteRegistry {
    pub const fn new(families: &'static [ColorFamily]) -> Self {
        Self { families }
    }

    /// The process-wide government palette.
    pub const fn government() -> Self {
        Self::new(&GOVERNMENT_THEME)
    }

    pub fn families(&self) -> &'static [ColorFamily] {
        self.families
    }

    pub fn family(&self, name: &str) -> ChartResult<&'static ColorFamily> {
        self.families
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| ChartError::UnknownFamily(name.to_string()))
    }

    pub fn lookup(&self, family: &str, intensity: Intensity) -> ChartResult<&'static str> {
        Ok(self.family(family)?.shade(intensity))
    }

    /// Lookup by raw percentage, as stored in palette documents.
    pub fn lookup_percent(&self, family: &str, pct: i64) -> ChartResult<&'static str> {
        let family = self.family(family)?;
        Ok(family.shade(Intensity::from_percent(pct)?))
    }

    /// All six shades of one family, 100% first.
    pub fn shades(&self, family: &str) -> ChartResult<Vec<String>> {
        Ok(self
            .family(family)?
            .shades
            .iter()
            .map(|s| s.to_string())
            .collect())
    }
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::government()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/palette.rs"]
mod tests;
