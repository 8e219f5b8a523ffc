/// Scroll state: bounded counters driving the parallax layers.
///
/// Three counters, all wrapping modulo an explicit bound so a scene can run
/// indefinitely without overflow:
///   - `frame`      : tick phase; period is a common multiple of the star
///                     cadence and the regeneration interval, so phase checks
///                     behave exactly like an unbounded tick counter.
///   - `tree_offset`: +1 every tick, bound `4 * width`.
///   - `star_offset`: +1 every `cadence` ticks, bound `6 * width`.

use crate::config::SceneConfig;

/// A counter in `0..bound`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WrappingCounter {
    value: u32,
    bound: u32,
}

impl WrappingCounter {
    pub fn new(bound: u32) -> Self {
        WrappingCounter { value: 0, bound: bound.max(1) }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Increment by one. Returns true if the counter wrapped to 0.
    pub fn advance(&mut self) -> bool {
        self.value = (self.value + 1) % self.bound;
        self.value == 0
    }
}

/// What a single `ScrollState::advance` did.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ScrollStep {
    pub tree_wrapped: bool,
    pub star_wrapped: bool,
    pub regenerate_stars: bool,
}

#[derive(Clone, Debug)]
pub struct ScrollState {
    frame: WrappingCounter,
    tree_offset: WrappingCounter,
    star_offset: WrappingCounter,
    cadence: u32,
    regen_interval: u32,
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 { a } else { gcd(b, a % b) }
}

impl ScrollState {
    pub fn new(cfg: &SceneConfig) -> Self {
        let cadence = cfg.sky.cadence.max(1);
        let regen_interval = cfg.sky.regen_interval.max(1);
        let period = cadence / gcd(cadence, regen_interval) * regen_interval;

        ScrollState {
            frame: WrappingCounter::new(period),
            tree_offset: WrappingCounter::new(cfg.tree_offset_bound()),
            star_offset: WrappingCounter::new(cfg.star_offset_bound()),
            cadence,
            regen_interval,
        }
    }

    pub fn tree_offset(&self) -> i32 {
        self.tree_offset.value() as i32
    }

    pub fn star_offset(&self) -> i32 {
        self.star_offset.value() as i32
    }

    pub fn advance(&mut self) -> ScrollStep {
        let mut step = ScrollStep::default();
        self.frame.advance();
        let frame = self.frame.value();

        step.tree_wrapped = self.tree_offset.advance();

        if frame % self.cadence == 0 {
            step.star_wrapped = self.star_offset.advance();
        }

        step.regenerate_stars = frame % self.regen_interval == 0;
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;

    fn state() -> ScrollState {
        ScrollState::new(&SceneConfig::preset(Variant::Undergrowth))
    }

    #[test]
    fn counter_wraps_strictly_below_bound() {
        let mut c = WrappingCounter::new(3);
        assert!(!c.advance());
        assert!(!c.advance());
        assert!(c.advance());
        assert_eq!(c.value(), 0);
    }

    #[test]
    fn zero_bound_is_treated_as_one() {
        let mut c = WrappingCounter::new(0);
        assert!(c.advance());
        assert_eq!(c.value(), 0);
    }

    #[test]
    fn tree_offset_wraps_after_bound_plus_one_to_one() {
        let mut s = state();
        let bound = 80 * 4;
        for i in 1..=bound + 1 {
            s.advance();
            assert!(s.tree_offset() < bound as i32);
            if i < bound {
                assert_eq!(s.tree_offset(), i as i32);
            }
        }
        assert_eq!(s.tree_offset(), 1);
    }

    #[test]
    fn star_offset_moves_every_third_tick() {
        let mut s = state();
        s.advance();
        s.advance();
        assert_eq!(s.star_offset(), 0);
        s.advance();
        assert_eq!(s.star_offset(), 1);
        for _ in 0..3 * 10 {
            s.advance();
        }
        assert_eq!(s.star_offset(), 11);
    }

    #[test]
    fn star_offset_wraps_at_six_widths() {
        let mut s = state();
        let bound = 80 * 6;
        let mut wrapped_at = None;
        for tick in 1..=3 * (bound + 1) {
            let step = s.advance();
            assert!(s.star_offset() < bound as i32);
            if step.star_wrapped && wrapped_at.is_none() {
                wrapped_at = Some(tick);
            }
        }
        assert_eq!(wrapped_at, Some(3 * bound));
        assert_eq!(s.star_offset(), 1);
    }

    #[test]
    fn regeneration_every_300_ticks() {
        let mut s = state();
        let regen_ticks: Vec<u32> = (1..=1000)
            .filter(|_| s.advance().regenerate_stars)
            .collect();
        assert_eq!(regen_ticks, vec![300, 600, 900]);
    }

    #[test]
    fn phase_survives_frame_wrap() {
        let mut cfg = SceneConfig::preset(Variant::Minimal);
        cfg.sky.cadence = 4;
        cfg.sky.regen_interval = 6;
        let mut s = ScrollState::new(&cfg);
        let mut moved = vec![];
        let mut regen = vec![];
        for tick in 1..=30 {
            let before = s.star_offset();
            let step = s.advance();
            if s.star_offset() != before { moved.push(tick); }
            if step.regenerate_stars { regen.push(tick); }
        }
        assert_eq!(moved, vec![4, 8, 12, 16, 20, 24, 28]);
        assert_eq!(regen, vec![6, 12, 18, 24, 30]);
    }
}
