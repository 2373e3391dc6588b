use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no atom with name '{0}'")]
pub struct ParseElementError(String);

/// Static per-element attributes: short name, full name, and bond capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtomAttributes {
    pub symbol: &'static str,
    pub name: &'static str,
    pub max_bonds: u8,
}

const ATTRIBUTE_TABLE: [(Element, AtomAttributes); 3] = [
    (
        Element::H,
        AtomAttributes {
            symbol: "h",
            name: "hydrogen",
            max_bonds: 1,
        },
    ),
    (
        Element::O,
        AtomAttributes {
            symbol: "o",
            name: "oxygen",
            max_bonds: 2,
        },
    ),
    (
        Element::N,
        AtomAttributes {
            symbol: "n",
            name: "nitrogen",
            max_bonds: 4,
        },
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    H,
    O,
    N,
}

impl Element {
    pub const ALL: [Element; 3] = [Element::H, Element::O, Element::N];

    pub fn attributes(&self) -> &'static AtomAttributes {
        match self {
            Element::H => &ATTRIBUTE_TABLE[0].1,
            Element::O => &ATTRIBUTE_TABLE[1].1,
            Element::N => &ATTRIBUTE_TABLE[2].1,
        }
    }

    #[inline]
    pub fn symbol(&self) -> &'static str {
        self.attributes().symbol
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.attributes().name
    }

    #[inline]
    pub fn max_bonds(&self) -> u8 {
        self.attributes().max_bonds
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    /// Accepts either the short or the full element name, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        ATTRIBUTE_TABLE
            .iter()
            .find(|(_, attrs)| attrs.symbol == needle || attrs.name == needle)
            .map(|(element, _)| *element)
            .ok_or_else(|| ParseElementError(s.to_string()))
    }
}
