use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WaldoType {
    Alpha,
    Beta,
}

impl WaldoType {
    pub const ALL: [WaldoType; 2] = [WaldoType::Alpha, WaldoType::Beta];

    pub fn other(&self) -> WaldoType {
        match self {
            WaldoType::Alpha => WaldoType::Beta,
            WaldoType::Beta => WaldoType::Alpha,
        }
    }
}

impl fmt::Display for WaldoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaldoType::Alpha => write!(f, "alpha"),
            WaldoType::Beta => write!(f, "beta"),
        }
    }
}

/// A pair of values, one per waldo type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByWaldo<T> {
    pub alpha: T,
    pub beta: T,
}

impl<T> ByWaldo<T> {
    pub fn new(alpha: T, beta: T) -> Self {
        Self { alpha, beta }
    }

    pub fn get(&self, kind: WaldoType) -> &T {
        match kind {
            WaldoType::Alpha => &self.alpha,
            WaldoType::Beta => &self.beta,
        }
    }

    pub fn get_mut(&mut self, kind: WaldoType) -> &mut T {
        match kind {
            WaldoType::Alpha => &mut self.alpha,
            WaldoType::Beta => &mut self.beta,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(WaldoType, T) -> U) -> ByWaldo<U> {
        ByWaldo {
            alpha: f(WaldoType::Alpha, self.alpha),
            beta: f(WaldoType::Beta, self.beta),
        }
    }

    pub fn try_map<U, E>(
        self,
        mut f: impl FnMut(WaldoType, T) -> Result<U, E>,
    ) -> Result<ByWaldo<U>, E> {
        Ok(ByWaldo {
            alpha: f(WaldoType::Alpha, self.alpha)?,
            beta: f(WaldoType::Beta, self.beta)?,
        })
    }
}

impl<T> Index<WaldoType> for ByWaldo<T> {
    type Output = T;

    fn index(&self, kind: WaldoType) -> &T {
        self.get(kind)
    }
}

impl<T> IndexMut<WaldoType> for ByWaldo<T> {
    fn index_mut(&mut self, kind: WaldoType) -> &mut T {
        self.get_mut(kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    InputAlpha,
    OutputAlpha,
    InputBeta,
    OutputBeta,
    Empty,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::InputAlpha => write!(f, "alpha input"),
            Zone::OutputAlpha => write!(f, "alpha output"),
            Zone::InputBeta => write!(f, "beta input"),
            Zone::OutputBeta => write!(f, "beta output"),
            Zone::Empty => write!(f, "none"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    InAlpha,
    OutAlpha,
    InBeta,
    OutBeta,
    Grab,
    Drop,
    GrabDrop,
    Sync,
    AddBond,
    RemoveBond,
    RotateClockwise,
    RotateCounterClockwise,
    Empty,
}

impl Instruction {
    pub const ALL: [Instruction; 13] = [
        Instruction::InAlpha,
        Instruction::OutAlpha,
        Instruction::InBeta,
        Instruction::OutBeta,
        Instruction::Grab,
        Instruction::Drop,
        Instruction::GrabDrop,
        Instruction::Sync,
        Instruction::AddBond,
        Instruction::RemoveBond,
        Instruction::RotateClockwise,
        Instruction::RotateCounterClockwise,
        Instruction::Empty,
    ];
}
