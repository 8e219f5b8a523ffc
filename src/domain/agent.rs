/// The running figure.
///
/// Horizontal position is fixed in viewport space; the scrolling background
/// provides the motion. Only the vertical position and state change.
///
/// State machine (cyclic):
///   Running ──tree in trigger window──▶ Jumping
///   Jumping ──reached ground──────────▶ Landing
///   Landing ──landing_ticks elapsed───▶ Running
///
/// There is no crouch pose: nothing ever asks for one, so the state is not
/// modelled.

use std::ops::Range;

use crate::config::AgentTuning;

/// Running animation: two glyph phases of this many ticks each.
const RUN_PHASE_TICKS: u32 = 8;
const RUN_GLYPHS: [char; 2] = ['λ', 'ʎ'];
const JUMP_GLYPH: char = 'ʌ';
const LAND_GLYPH: char = 'ω';

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AgentState {
    Running,
    Jumping,
    Landing,
}

/// What changed during an update, if anything.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AgentTransition {
    /// Took off because of the tree projected at this column.
    Jumped { tree_x: i32 },
    Landed,
    Recovered,
}

#[derive(Clone, Debug)]
pub struct Agent {
    pub x: i32,
    pub y: f32,
    pub velocity_y: f32,
    pub state: AgentState,
    pub anim_frame: u32,
    ground_y: f32,
}

impl Agent {
    pub fn new(x: i32, ground_y: i32) -> Self {
        Agent {
            x,
            y: ground_y as f32,
            velocity_y: 0.0,
            state: AgentState::Running,
            anim_frame: 0,
            ground_y: ground_y as f32,
        }
    }

    /// Integer row used for rendering (truncated).
    pub fn row(&self) -> i32 {
        self.y as i32
    }

    pub fn glyph(&self) -> char {
        match self.state {
            AgentState::Running => RUN_GLYPHS[((self.anim_frame / RUN_PHASE_TICKS) % 2) as usize],
            AgentState::Jumping => JUMP_GLYPH,
            AgentState::Landing => LAND_GLYPH,
        }
    }

    #[cfg(test)]
    pub fn glyphs() -> [char; 4] {
        [RUN_GLYPHS[0], RUN_GLYPHS[1], JUMP_GLYPH, LAND_GLYPH]
    }

    /// Is a tree at projected column `tree_x` close enough to jump?
    /// `interior` is the horizontal band trees are visible in.
    pub fn in_trigger_window(&self, tuning: &AgentTuning, tree_x: i32, interior: &Range<i32>) -> bool {
        tree_x > self.x + tuning.trigger_near
            && tree_x < self.x + tuning.trigger_far
            && interior.contains(&tree_x)
    }

    /// Advance one tick. `projected_trees` are the trees' on-screen columns
    /// for the current scroll offset.
    pub fn update<I>(&mut self, tuning: &AgentTuning, projected_trees: I, interior: &Range<i32>) -> Option<AgentTransition>
    where
        I: IntoIterator<Item = i32>,
    {
        match self.state {
            AgentState::Running => {
                let hit = projected_trees
                    .into_iter()
                    .find(|&tx| self.in_trigger_window(tuning, tx, interior));
                match hit {
                    Some(tree_x) => {
                        self.state = AgentState::Jumping;
                        self.velocity_y = tuning.jump_velocity;
                        self.anim_frame = 0;
                        Some(AgentTransition::Jumped { tree_x })
                    }
                    None => {
                        self.anim_frame = (self.anim_frame + 1) % (RUN_PHASE_TICKS * 2);
                        None
                    }
                }
            }
            AgentState::Jumping => {
                self.velocity_y += tuning.gravity;
                self.y += self.velocity_y;
                if self.y >= self.ground_y {
                    self.y = self.ground_y;
                    self.velocity_y = 0.0;
                    self.state = AgentState::Landing;
                    self.anim_frame = 0;
                    Some(AgentTransition::Landed)
                } else {
                    None
                }
            }
            AgentState::Landing => {
                self.anim_frame += 1;
                if self.anim_frame >= tuning.landing_ticks {
                    self.state = AgentState::Running;
                    self.anim_frame = 0;
                    Some(AgentTransition::Recovered)
                } else {
                    None
                }
            }
        }
    }
}
