/// Procedural generation of background entities.
///
/// Two kinds of randomness:
///   - **Per-entity**: `generate_tree` / `generate_bush` seed a fresh
///     generator from (seed, x), so the same arguments always produce the
///     same shape regardless of what was generated before.
///   - **Layout**: tree strides, bush positions and the starfield draw from
///     the `Generator`'s own seeded RNG. Reproducible for a given layout
///     seed, but order-sensitive.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{SceneConfig, Spacing};
use super::entity::{Bush, BushKind, HeightTier, Sprite, Star, Tree};
use super::shapes::{TreeSet, STAR_GLYPHS};

/// Range of the tree height roll; see `HeightTier::from_roll`.
const HEIGHT_ROLL: std::ops::RangeInclusive<u32> = 5..=7;

fn tree_seed(x: i32, seed: u32) -> u64 {
    (seed as u64).wrapping_mul(17).wrapping_add((x as i64 as u64).wrapping_mul(3))
}

fn bush_seed(x: i32, seed: u32) -> u64 {
    (seed as u64).wrapping_mul(23).wrapping_add((x as i64 as u64).wrapping_mul(7))
}

/// Pick an archetype and height tier for a tree at `x`.
pub fn generate_tree(x: i32, ground_y: i32, seed: u32, set: TreeSet) -> Tree {
    let mut rng = StdRng::seed_from_u64(tree_seed(x, seed));
    let archetype = rng.random_range(0..set.archetype_count());
    let tier = HeightTier::from_roll(rng.random_range(HEIGHT_ROLL));

    Tree {
        sprite: Sprite {
            base_x: x,
            ground_y,
            shape: set.shape(archetype, tier),
        },
        archetype,
        tier,
    }
}

pub fn generate_bush(x: i32, ground_y: i32, seed: u32) -> Bush {
    let mut rng = StdRng::seed_from_u64(bush_seed(x, seed));
    let kind = BushKind::from_index(rng.random_range(0..3));

    Bush {
        sprite: Sprite {
            base_x: x,
            ground_y,
            shape: kind.shape(),
        },
        kind,
    }
}

pub struct Generator {
    rng: StdRng,
    seed: u64,
}

impl Generator {
    pub fn new(seed: u64) -> Self {
        Generator {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Layout seed this generator was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Place `count` stars over a band twice the viewport wide, in the
    /// upper part of the viewport.
    pub fn generate_stars(&mut self, count: usize, width: usize, height: usize) -> Vec<Star> {
        let span_x = (width * 2) as i32;
        let span_y = (height as i32 - 12).max(1);

        (0..count)
            .map(|_| Star {
                x: self.rng.random_range(0..span_x) + 5,
                y: self.rng.random_range(0..span_y) + 2,
                glyph: STAR_GLYPHS[self.rng.random_range(0..STAR_GLYPHS.len())],
            })
            .collect()
    }

    /// The static tree line. Tree `i` uses `i` as its shape seed.
    pub fn tree_line(&mut self, cfg: &SceneConfig) -> Vec<Tree> {
        let ground = cfg.ground_row();
        let mut trees = Vec::with_capacity(cfg.trees.count);
        let mut x = 0;

        for i in 0..cfg.trees.count {
            trees.push(generate_tree(x, ground, i as u32, cfg.trees.set));
            let gap = match cfg.trees.spacing {
                Spacing::Fixed { stride } => stride,
                Spacing::Variable { min, max } => self.rng.random_range(min..=max),
            };
            x = x.saturating_add(gap);
        }
        trees
    }

    /// Sparse undergrowth: every slot rolls a position, then keeps the bush
    /// with `probability_pct` percent chance.
    pub fn undergrowth(&mut self, cfg: &SceneConfig) -> Vec<Bush> {
        let ug = &cfg.undergrowth;
        let ground = cfg.ground_row();
        let mut bushes = Vec::new();

        for i in 0..ug.slots {
            let x = self.rng.random_range(ug.min_x..ug.max_x);
            if self.rng.random_range(0..100) < ug.probability_pct {
                bushes.push(generate_bush(x, ground, i as u32));
            }
        }
        bushes
    }
}
