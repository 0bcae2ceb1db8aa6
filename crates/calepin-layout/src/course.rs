use calepin_catalog::{BlockKind, BlockVariant, COURSE_HEIGHT, HALF, variants};
use serde::Serialize;

use crate::count::BlockCount;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Pattern {
    A,
    B,
}

impl Pattern {
    pub const fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Pattern::A } else { Pattern::B }
    }

    pub const fn raster_code(self, kind: BlockKind) -> u8 {
        let base = match self {
            Pattern::A => 1,
            Pattern::B => 4,
        };
        let offset = match kind {
            BlockKind::Standard => 0,
            BlockKind::ThreeQuarter => 1,
            BlockKind::Half => 2,
        };
        base + offset
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Course {
    index: usize,
    pattern: Pattern,
    blocks: Vec<BlockVariant>,
    gap: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedInCourse {
    pub offset: f64,
    pub block: BlockVariant,
}

impl Course {
    pub(crate) fn fill(index: usize, length: f64) -> Self {
        let pattern = Pattern::for_index(index);
        let mut remaining = length;
        let mut blocks = Vec::new();

        if pattern == Pattern::B && remaining >= HALF.length {
            blocks.push(HALF);
            remaining -= HALF.length;
        }

        while let Some(block) = variants()
            .into_iter()
            .find(|variant| variant.length <= remaining)
        {
            blocks.push(block);
            remaining -= block.length;
        }

        Self {
            index,
            pattern,
            blocks,
            gap: remaining.max(0.0),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn blocks(&self) -> &[BlockVariant] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn gap(&self) -> f64 {
        self.gap
    }

    pub fn laid_length(&self) -> f64 {
        self.blocks.iter().map(|block| block.length).sum()
    }

    pub fn elevation(&self) -> f64 {
        self.index as f64 * COURSE_HEIGHT
    }

    pub fn count(&self) -> BlockCount {
        let mut count = BlockCount::default();
        for block in &self.blocks {
            count.add_one(block.kind);
        }
        count
    }

    pub fn placements(&self) -> impl Iterator<Item = PlacedInCourse> + '_ {
        self.blocks.iter().scan(0.0, |offset, block| {
            let placed = PlacedInCourse {
                offset: *offset,
                block: *block,
            };
            *offset += block.length;
            Some(placed)
        })
    }
}
