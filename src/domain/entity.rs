/// Background entities: Star, Tree, Bush.
///
/// All three are immutable descriptors produced by the generator. They keep
/// their generation-space coordinates forever; only the scroll offset applied
/// at render time changes where they appear on screen.

/// A fixed ASCII-art block. Blank characters are transparent.
pub type Shape = &'static [&'static str];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Star {
    pub x: i32,
    pub y: i32,
    pub glyph: char,
}

/// Height tier selected by the generator's height roll.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HeightTier {
    Short,
    Medium,
    Tall,
}

impl HeightTier {
    /// Map a height roll (5..=7) onto a tier. Anything at or below 5 is
    /// short, anything above 6 is tall.
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            0..=5 => HeightTier::Short,
            6 => HeightTier::Medium,
            _ => HeightTier::Tall,
        }
    }

    pub fn index(self) -> usize {
        match self {
            HeightTier::Short => 0,
            HeightTier::Medium => 1,
            HeightTier::Tall => 2,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BushKind {
    Clustered,
    Wavy,
    Round,
}

impl BushKind {
    pub fn from_index(i: usize) -> Self {
        match i % 3 {
            0 => BushKind::Clustered,
            1 => BushKind::Wavy,
            _ => BushKind::Round,
        }
    }
}

/// A shape anchored in generation space: `base_x` is the left column,
/// `ground_y` the row the last shape line sits on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Sprite {
    pub base_x: i32,
    pub ground_y: i32,
    pub shape: Shape,
}

impl Sprite {
    pub fn height(&self) -> i32 {
        self.shape.len() as i32
    }

    /// Row occupied by the first shape line.
    pub fn top_row(&self) -> i32 {
        self.ground_y - self.height() + 1
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tree {
    pub sprite: Sprite,
    pub archetype: usize,
    pub tier: HeightTier,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Bush {
    pub sprite: Sprite,
    pub kind: BushKind,
}
