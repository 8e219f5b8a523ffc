/// Static glyph tables for background entities.
///
/// Every tree archetype has three height tiers (short / medium / tall).
/// Archetypes that only exist in two sizes reuse the tall block for the
/// medium tier. All blocks are anchored bottom-up: the last line sits on
/// the ground row.

use super::entity::{BushKind, HeightTier, Shape};

// ── Star glyphs ──

pub const STAR_GLYPHS: [char; 4] = ['*', '·', '✦', '◦'];

// ── Classic tree set: pine / oak / birch / maple ──

const PINE_SHORT: Shape = &[
    "   ^   ",
    "  ^^^  ",
    " ^^^^^ ",
    "^^^^^^^",
    "   |   ",
    "   |   ",
];

const PINE_MEDIUM: Shape = &[
    "    ^    ",
    "   ^^^   ",
    "  ^^^^^  ",
    " ^^^^^^^ ",
    "^^^^^^^^^",
    "    |    ",
    "    |    ",
];

const PINE_TALL: Shape = &[
    "     ^     ",
    "    ^^^    ",
    "   ^^^^^   ",
    "  ^^^^^^^  ",
    " ^^^^^^^^^ ",
    "^^^^^^^^^^^",
    "     |     ",
    "     |     ",
];

const OAK_SHORT: Shape = &[
    "  @@@  ",
    " @@@@@ ",
    "@@@@@@@",
    " @@@@@ ",
    "   |   ",
    "   |   ",
];

const OAK_MEDIUM: Shape = &[
    "   @@@   ",
    "  @@@@@  ",
    " @@@@@@@ ",
    "@@@@@@@@@",
    " @@@@@@@ ",
    "  @@@@@  ",
    "    |    ",
    "    |    ",
];

const OAK_TALL: Shape = &[
    "    @@@    ",
    "   @@@@@   ",
    "  @@@@@@@  ",
    " @@@@@@@@@ ",
    "@@@@@@@@@@@",
    " @@@@@@@@@ ",
    "  @@@@@@@  ",
    "     |     ",
    "     |     ",
];

const BIRCH_SHORT: Shape = &[
    "  ###  ",
    " ##### ",
    "#######",
    "   |   ",
    "   |   ",
    "   |   ",
];

const BIRCH_TALL: Shape = &[
    "   ###   ",
    "  #####  ",
    " ####### ",
    "#########",
    "    |    ",
    "    |    ",
    "    |    ",
];

const MAPLE_SHORT: Shape = &[
    "  &&&  ",
    " &&&&& ",
    "&&&&&&&",
    " &&&&& ",
    "  &&&  ",
    "   |   ",
    "   |   ",
];

const MAPLE_TALL: Shape = &[
    "   &&&   ",
    "  &&&&&  ",
    " &&&&&&& ",
    "&&&&&&&&&",
    " &&&&&&& ",
    "  &&&&&  ",
    "   &&&   ",
    "    |    ",
    "    |    ",
];

const CLASSIC: [[Shape; 3]; 4] = [
    [PINE_SHORT, PINE_MEDIUM, PINE_TALL],
    [OAK_SHORT, OAK_MEDIUM, OAK_TALL],
    [BIRCH_SHORT, BIRCH_TALL, BIRCH_TALL],
    [MAPLE_SHORT, MAPLE_TALL, MAPLE_TALL],
];

const CLASSIC_NAMES: [&str; 4] = ["pine", "oak", "birch", "maple"];

// ── Symbol tree set: spruce / elm / aspen / cypress / willow ──

const SPRUCE_SHORT: Shape = &[
    "   ♠   ",
    "  ♠♠♠  ",
    " ♠♠♠♠♠ ",
    "   |   ",
    "   |   ",
];

const SPRUCE_TALL: Shape = &[
    "    ♠    ",
    "   ♠♠♠   ",
    "  ♠♠♠♠♠  ",
    " ♠♠♠♠♠♠♠ ",
    "♠♠♠♠♠♠♠♠♠",
    "    |    ",
    "    |    ",
];

const ELM_SHORT: Shape = &[
    " ♣♣♣♣♣ ",
    "♣♣♣♣♣♣♣",
    " ♣♣♣♣♣ ",
    "   |   ",
    "   |   ",
];

const ELM_MEDIUM: Shape = &[
    "  ♣♣♣♣♣  ",
    " ♣♣♣♣♣♣♣ ",
    "♣♣♣♣♣♣♣♣♣",
    " ♣♣♣♣♣♣♣ ",
    "    |    ",
    "    |    ",
];

const ELM_TALL: Shape = &[
    "   ♣♣♣♣♣   ",
    "  ♣♣♣♣♣♣♣  ",
    " ♣♣♣♣♣♣♣♣♣ ",
    "♣♣♣♣♣♣♣♣♣♣♣",
    " ♣♣♣♣♣♣♣♣♣ ",
    "     |     ",
    "     |     ",
    "     |     ",
];

const ASPEN_SHORT: Shape = &[
    "  %%%  ",
    " %%%%% ",
    "  %%%  ",
    "   |   ",
    "   |   ",
    "   |   ",
];

const ASPEN_TALL: Shape = &[
    "   %%%   ",
    "  %%%%%  ",
    "  %%%%%  ",
    "   %%%   ",
    "    |    ",
    "    |    ",
    "    |    ",
    "    |    ",
];

const CYPRESS_SHORT: Shape = &[
    "  8  ",
    " 888 ",
    " 888 ",
    " 888 ",
    "  |  ",
];

const CYPRESS_MEDIUM: Shape = &[
    "   8   ",
    "  888  ",
    "  888  ",
    " 88888 ",
    " 88888 ",
    "   |   ",
];

const CYPRESS_TALL: Shape = &[
    "   8   ",
    "  888  ",
    "  888  ",
    " 88888 ",
    " 88888 ",
    " 88888 ",
    "   |   ",
    "   |   ",
];

const WILLOW_SHORT: Shape = &[
    "  ≈≈≈≈≈  ",
    " ≈≈≈≈≈≈≈ ",
    "≈≈ ≈|≈ ≈≈",
    "≈   |   ≈",
    "    |    ",
];

const WILLOW_TALL: Shape = &[
    "   ≈≈≈≈≈   ",
    " ≈≈≈≈≈≈≈≈≈ ",
    "≈≈≈≈≈≈≈≈≈≈≈",
    "≈≈≈ ≈|≈ ≈≈≈",
    "≈≈   |   ≈≈",
    "≈    |    ≈",
    "     |     ",
];

const SYMBOLS: [[Shape; 3]; 5] = [
    [SPRUCE_SHORT, SPRUCE_TALL, SPRUCE_TALL],
    [ELM_SHORT, ELM_MEDIUM, ELM_TALL],
    [ASPEN_SHORT, ASPEN_TALL, ASPEN_TALL],
    [CYPRESS_SHORT, CYPRESS_MEDIUM, CYPRESS_TALL],
    [WILLOW_SHORT, WILLOW_TALL, WILLOW_TALL],
];

const SYMBOL_NAMES: [&str; 5] = ["spruce", "elm", "aspen", "cypress", "willow"];

// ── Bushes ──

const BUSH_CLUSTERED: Shape = &[
    " *** ",
    "*****",
    " *** ",
];

const BUSH_WAVY: Shape = &[
    "  ~~~  ",
    " ~~~~~ ",
    "~~~~~~~",
    " ~~~~~ ",
];

const BUSH_ROUND: Shape = &[
    " ooo ",
    "ooooo",
];

/// Which archetype table the tree line draws from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TreeSet {
    /// pine / oak / birch / maple
    Classic,
    /// spruce / elm / aspen / cypress / willow
    Symbols,
}

impl TreeSet {
    pub fn archetype_count(self) -> usize {
        self.table().len()
    }

    pub fn shape(self, archetype: usize, tier: HeightTier) -> Shape {
        let table = self.table();
        table[archetype % table.len()][tier.index()]
    }

    pub fn archetype_name(self, archetype: usize) -> &'static str {
        let names: &[&str] = match self {
            TreeSet::Classic => &CLASSIC_NAMES,
            TreeSet::Symbols => &SYMBOL_NAMES,
        };
        names[archetype % names.len()]
    }

    /// Every non-blank glyph any tree of this set can paint.
    #[cfg(test)]
    pub fn glyphs(self) -> Vec<char> {
        let mut out: Vec<char> = self
            .table()
            .iter()
            .flat_map(|tiers| tiers.iter())
            .flat_map(|shape| shape.iter())
            .flat_map(|line| line.chars())
            .filter(|&c| c != ' ')
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    fn table(self) -> &'static [[Shape; 3]] {
        match self {
            TreeSet::Classic => &CLASSIC,
            TreeSet::Symbols => &SYMBOLS,
        }
    }
}

impl BushKind {
    pub fn shape(self) -> Shape {
        match self {
            BushKind::Clustered => BUSH_CLUSTERED,
            BushKind::Wavy => BUSH_WAVY,
            BushKind::Round => BUSH_ROUND,
        }
    }
}
