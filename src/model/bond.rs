use super::atom::AtomId;
use super::error::Error;

/// An immutable bond value between two unit-adjacent atoms.
///
/// Strengthening or weakening yields a new value; the graph stores a copy of
/// the same value in the facing slots of both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    first: AtomId,
    second: AtomId,
    strength: u8,
}

impl Bond {
    pub fn new(first: AtomId, second: AtomId) -> Self {
        Self {
            first,
            second,
            strength: 1,
        }
    }

    pub(crate) fn with_strength(first: AtomId, second: AtomId, strength: u8) -> Self {
        Self {
            first,
            second,
            strength,
        }
    }

    #[inline]
    pub fn strength(&self) -> u8 {
        self.strength
    }

    #[inline]
    pub fn endpoints(&self) -> (AtomId, AtomId) {
        (self.first, self.second)
    }

    #[inline]
    pub fn contains(&self, atom: AtomId) -> bool {
        self.first == atom || self.second == atom
    }

    /// Returns a bond one stronger, or `self` unchanged if that would exceed
    /// `max_strength`.
    pub fn strengthen(self, max_strength: u8) -> Bond {
        if self.strength < max_strength {
            Bond {
                strength: self.strength + 1,
                ..self
            }
        } else {
            self
        }
    }

    /// Returns a bond one weaker, or `None` once the strength would drop
    /// below one.
    pub fn weaken(self) -> Option<Bond> {
        (self.strength > 1).then(|| Bond {
            strength: self.strength - 1,
            ..self
        })
    }

    pub fn other(&self, atom: AtomId) -> Result<AtomId, Error> {
        if self.first == atom {
            Ok(self.second)
        } else if self.second == atom {
            Ok(self.first)
        } else {
            Err(Error::NotAnEndpoint { atom })
        }
    }
}
