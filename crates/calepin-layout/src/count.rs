use calepin_catalog::BlockKind;
use serde::Serialize;
use std::ops::{Add, AddAssign};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BlockCount {
    #[serde(rename = "Standard")]
    pub standard: usize,
    #[serde(rename = "ThreeQuarter")]
    pub three_quarter: usize,
    #[serde(rename = "Half")]
    pub half: usize,
}

impl BlockCount {
    pub fn get(&self, kind: BlockKind) -> usize {
        match kind {
            BlockKind::Standard => self.standard,
            BlockKind::ThreeQuarter => self.three_quarter,
            BlockKind::Half => self.half,
        }
    }

    pub fn add_one(&mut self, kind: BlockKind) {
        match kind {
            BlockKind::Standard => self.standard += 1,
            BlockKind::ThreeQuarter => self.three_quarter += 1,
            BlockKind::Half => self.half += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.standard + self.three_quarter + self.half
    }

    pub fn iter(&self) -> impl Iterator<Item = (BlockKind, usize)> + '_ {
        BlockKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}

impl Add for BlockCount {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            standard: self.standard + other.standard,
            three_quarter: self.three_quarter + other.three_quarter,
            half: self.half + other.half,
        }
    }
}

impl AddAssign for BlockCount {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::iter::Sum for BlockCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
