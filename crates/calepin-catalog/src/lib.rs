use serde::Serialize;
use static_assertions::const_assert;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum BlockKind {
    Standard,
    ThreeQuarter,
    Half,
}

impl BlockKind {
    pub const ALL: [BlockKind; 3] = [BlockKind::Standard, BlockKind::ThreeQuarter, BlockKind::Half];

    pub const fn name(self) -> &'static str {
        match self {
            BlockKind::Standard => "Standard",
            BlockKind::ThreeQuarter => "ThreeQuarter",
            BlockKind::Half => "Half",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            BlockKind::Standard => "Standard",
            BlockKind::ThreeQuarter => "3/4",
            BlockKind::Half => "1/2",
        }
    }

    pub const fn variant(self) -> BlockVariant {
        match self {
            BlockKind::Standard => STANDARD,
            BlockKind::ThreeQuarter => THREE_QUARTER,
            BlockKind::Half => HALF,
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BlockVariant {
    pub kind: BlockKind,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl BlockVariant {
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }
}

impl std::fmt::Display for BlockVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} x {} x {} cm)",
            self.kind.label(),
            self.length,
            self.width,
            self.height
        )
    }
}

pub const BLOCK_WIDTH: f64 = 14.0;
pub const COURSE_HEIGHT: f64 = 9.5;

pub const STANDARD: BlockVariant = BlockVariant {
    kind: BlockKind::Standard,
    length: 29.5,
    width: BLOCK_WIDTH,
    height: COURSE_HEIGHT,
};

pub const THREE_QUARTER: BlockVariant = BlockVariant {
    kind: BlockKind::ThreeQuarter,
    length: 21.75,
    width: BLOCK_WIDTH,
    height: COURSE_HEIGHT,
};

pub const HALF: BlockVariant = BlockVariant {
    kind: BlockKind::Half,
    length: 14.0,
    width: BLOCK_WIDTH,
    height: COURSE_HEIGHT,
};

const_assert!(STANDARD.length > THREE_QUARTER.length);
const_assert!(THREE_QUARTER.length > HALF.length);
const_assert!(STANDARD.width == THREE_QUARTER.width && THREE_QUARTER.width == HALF.width);
const_assert!(STANDARD.height == THREE_QUARTER.height && THREE_QUARTER.height == HALF.height);

pub const fn variants() -> [BlockVariant; 3] {
    [STANDARD, THREE_QUARTER, HALF]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_follow_priority_order() {
        let kinds: Vec<BlockKind> = variants().iter().map(|v| v.kind).collect();
        assert_eq!(kinds, BlockKind::ALL.to_vec());
    }

    #[test]
    fn kind_lookup_round_trips() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.variant().kind, kind);
        }
    }

    #[test]
    fn fixed_dimensions() {
        assert_eq!(STANDARD.length, 29.5);
        assert_eq!(THREE_QUARTER.length, 21.75);
        assert_eq!(HALF.length, 14.0);
        for variant in variants() {
            assert_eq!(variant.width, 14.0);
            assert_eq!(variant.height, 9.5);
        }
    }

    #[test]
    fn display_uses_site_labels() {
        assert_eq!(THREE_QUARTER.to_string(), "3/4 (21.75 x 14 x 9.5 cm)");
        assert_eq!(BlockKind::Half.to_string(), "Half");
    }
}
