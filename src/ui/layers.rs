/// Layer renderers: stamp entities onto a FrameBuffer.
///
/// Paint order (owned by the scene, never by a layer):
///   clear → sky → trees → bushes → window frame → agent
///
/// Rules shared by every layer:
///   - Blank shape characters are transparent; anything else overwrites.
///   - Every write is clipped to the buffer first. Layers never read each
///     other's output, except the agent, which only paints blank cells.

use std::ops::Range;

use crate::domain::agent::Agent;
use crate::domain::entity::{Sprite, Star};
use super::frame::{FrameBuffer, BLANK};

/// Stars are only painted strictly right of this column...
const SKY_LEFT: i32 = 5;
/// ...strictly left of `width - SKY_RIGHT_MARGIN`...
const SKY_RIGHT_MARGIN: i32 = 10;
/// ...and above `height - SKY_BOTTOM_MARGIN`.
const SKY_BOTTOM_MARGIN: i32 = 8;

/// Rows from the bottom reserved for the window's lower edge and dashboard.
const RESERVED_ROWS: i32 = 4;

// ── Clip region for shapes ──

/// Shapes may paint columns `min_x..max_x` and rows `0..max_y`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Clip {
    pub min_x: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Clip {
    pub fn new(width: usize, height: usize, margin: i32) -> Self {
        Clip {
            min_x: margin,
            max_x: width as i32 - margin,
            max_y: height as i32 - RESERVED_ROWS,
        }
    }

    pub fn columns(&self) -> Range<i32> {
        self.min_x..self.max_x
    }

    #[inline]
    fn allows(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x < self.max_x && y >= 0 && y < self.max_y
    }
}

// ── Window frame geometry ──

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WindowFrame {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
    pub dashboard_row: i32,
}

impl WindowFrame {
    #[cfg(test)]
    pub const GLYPHS: [char; 8] = ['═', '║', '╔', '╗', '╚', '╝', '▓', '█'];

    pub fn for_viewport(width: usize, height: usize) -> Self {
        let (w, h) = (width as i32, height as i32);
        WindowFrame {
            top: 2,
            bottom: h - 4,
            left: 3,
            right: w - 4,
            dashboard_row: h - 3,
        }
    }

    /// Strictly inside the frame lines.
    pub fn inner_contains(&self, x: i32, y: i32) -> bool {
        x > self.left && x < self.right && y > self.top && y < self.bottom
    }
}

// ── Projection ──

/// Screen column of an entity at generation-space `base_x`.
#[inline]
pub fn project(base_x: i32, offset: i32) -> i32 {
    base_x - offset
}

/// Screen column of a star. The star band is `2 * width` wide and wraps.
#[inline]
pub fn project_star(star_x: i32, star_offset: i32, parallax_divisor: i32, width: usize) -> i32 {
    let band = (width * 2) as i32;
    (star_x - star_offset / parallax_divisor.max(1)).rem_euclid(band)
}

// ── Layers ──

pub fn render_sky(buf: &mut FrameBuffer, stars: &[Star], star_offset: i32, parallax_divisor: i32) {
    let w = buf.width() as i32;
    let h = buf.height() as i32;

    for star in stars {
        let sx = project_star(star.x, star_offset, parallax_divisor, buf.width());
        let visible = star.y >= 0
            && star.y < h - SKY_BOTTOM_MARGIN
            && sx > SKY_LEFT
            && sx < w - SKY_RIGHT_MARGIN;
        if visible {
            buf.set(sx as usize, star.y as usize, star.glyph);
        }
    }
}

/// Paint every sprite whose projected column is within `slack` of the
/// viewport. Returns how many sprites survived culling.
pub fn render_sprites<'a, I>(buf: &mut FrameBuffer, sprites: I, offset: i32, slack: i32, clip: &Clip) -> usize
where
    I: IntoIterator<Item = &'a Sprite>,
{
    let w = buf.width() as i32;
    let mut drawn = 0;
    for sprite in sprites {
        let sx = project(sprite.base_x, offset);
        if sx < -slack || sx >= w + slack {
            continue;
        }
        stamp(buf, sprite, sx, clip);
        drawn += 1;
    }
    drawn
}

/// Stamp one sprite with its left edge at screen column `sx`.
pub fn stamp(buf: &mut FrameBuffer, sprite: &Sprite, sx: i32, clip: &Clip) {
    let top = sprite.top_row();
    for (i, line) in sprite.shape.iter().enumerate() {
        let y = top + i as i32;
        if y < 0 || y >= clip.max_y {
            continue;
        }
        for (j, ch) in line.chars().enumerate() {
            let x = sx + j as i32;
            if ch != BLANK && clip.allows(x, y) && buf.contains(x, y) {
                buf.set(x as usize, y as usize, ch);
            }
        }
    }
}

pub fn render_window(buf: &mut FrameBuffer, frame: &WindowFrame) {
    let w = buf.width() as i32;
    let (top, bottom, left, right) = (frame.top, frame.bottom, frame.left, frame.right);

    let put = |buf: &mut FrameBuffer, x: i32, y: i32, ch: char| {
        if buf.contains(x, y) {
            buf.set(x as usize, y as usize, ch);
        }
    };

    for y in top..=bottom {
        if y == top || y == bottom {
            for x in left..=right {
                put(buf, x, y, '═');
            }
        } else {
            put(buf, left, y, '║');
            put(buf, right, y, '║');
        }
    }

    put(buf, left, top, '╔');
    put(buf, right, top, '╗');
    put(buf, left, bottom, '╚');
    put(buf, right, bottom, '╝');

    for x in 0..w {
        put(buf, x, frame.dashboard_row, '▓');
    }

    // Pillars either side of the glass
    for y in 0..frame.dashboard_row {
        for x in 0..left {
            put(buf, x, y, '█');
        }
        for x in right + 1..w {
            put(buf, x, y, '█');
        }
    }
}

/// Paint the agent if it is inside the glass and its cell is still blank.
/// Returns whether it was drawn.
pub fn render_agent(buf: &mut FrameBuffer, agent: &Agent, frame: &WindowFrame) -> bool {
    let (x, y) = (agent.x, agent.row());
    if !frame.inner_contains(x, y) || !buf.contains(x, y) {
        return false;
    }
    if !buf.is_blank(x as usize, y as usize) {
        return false;
    }
    buf.set(x as usize, y as usize, agent.glyph());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::Shape;

    const SIX: Shape = &[
        "  ^  ",
        " ^^^ ",
        "^^^^^",
        " ^ ^ ",
        "  |  ",
        "  |  ",
    ];

    fn buf() -> FrameBuffer {
        FrameBuffer::new(80, 24)
    }

    fn clip() -> Clip {
        Clip::new(80, 24, 5)
    }

    fn sprite(base_x: i32) -> Sprite {
        Sprite { base_x, ground_y: 18, shape: SIX }
    }

    fn written(fb: &FrameBuffer) -> usize {
        fb.cells().iter().filter(|&&c| c != BLANK).count()
    }

    // ── Projection ──

    #[test]
    fn star_projection_wraps_into_band() {
        assert_eq!(project_star(10, 0, 3, 80), 10);
        assert_eq!(project_star(10, 30, 3, 80), 0);
        assert_eq!(project_star(10, 33, 3, 80), 159);
        assert_eq!(project_star(5, 479, 3, 80), 5 - 159 + 160);
    }

    // ── Sprites ──

    #[test]
    fn sprite_rows_anchor_on_ground() {
        let mut fb = buf();
        stamp(&mut fb, &sprite(0), 20, &clip());
        // top line "  ^  " → row 13, column 22
        assert_eq!(fb.get(22, 13), '^');
        assert!(fb.is_blank(20, 13));
        assert_eq!(fb.get(22, 18), '|');
        assert!(fb.row(12).iter().all(|&c| c == BLANK));
        assert!(fb.row(19).iter().all(|&c| c == BLANK));
    }

    #[test]
    fn blanks_in_shape_are_transparent() {
        let mut fb = buf();
        fb.set(20, 16, '*');
        stamp(&mut fb, &sprite(0), 20, &clip());
        // "  ^ ^ " line 3 has a blank at column 0 → star survives
        assert_eq!(fb.get(20, 16), '*');
        assert_eq!(fb.get(21, 16), '^');
    }

    #[test]
    fn columns_outside_clip_are_never_written() {
        let mut fb = buf();
        stamp(&mut fb, &sprite(0), 2, &clip());
        for y in 0..24 {
            for x in 0..5 {
                assert!(fb.is_blank(x, y), "({x}, {y})");
            }
        }
        assert_eq!(fb.get(5, 15), '^');
        assert_eq!(fb.get(6, 15), '^');

        let mut fb = buf();
        stamp(&mut fb, &sprite(0), 73, &clip());
        for y in 0..24 {
            for x in 75..80 {
                assert!(fb.is_blank(x, y));
            }
        }
    }

    #[test]
    fn rows_in_reserved_band_are_clipped() {
        let low = Sprite { base_x: 0, ground_y: 22, shape: SIX };
        let mut fb = buf();
        stamp(&mut fb, &low, 30, &clip());
        for y in 20..24 {
            assert!(fb.row(y).iter().all(|&c| c == BLANK));
        }
        assert!(!fb.is_blank(32, 17));
    }

    #[test]
    fn sprite_above_screen_is_clipped() {
        let high = Sprite { base_x: 0, ground_y: 2, shape: SIX };
        let mut fb = buf();
        stamp(&mut fb, &high, 30, &clip());
        assert_eq!(fb.get(32, 2), '|');
        assert_eq!(fb.get(31, 0), '^');
        assert!(fb.is_blank(32, 0));
    }

    #[test]
    fn culled_sprites_write_nothing() {
        let mut fb = buf();
        let far = [sprite(-21), sprite(100), sprite(500)];
        assert_eq!(render_sprites(&mut fb, &far, 0, 20, &clip()), 0);
        assert_eq!(written(&fb), 0);
    }

    #[test]
    fn sprite_just_inside_margin_is_drawn() {
        let mut fb = buf();
        // sx = 1: only the last column of the widest line reaches column 5
        let near = [sprite(1)];
        assert_eq!(render_sprites(&mut fb, &near, 0, 20, &clip()), 1);
        assert!(written(&fb) > 0);

        // Right edge: sx = 73, columns 73 and 74 paint
        let mut fb = buf();
        assert_eq!(render_sprites(&mut fb, &[sprite(83)], 10, 20, &clip()), 1);
        assert!(written(&fb) > 0);
    }

    #[test]
    fn sprite_in_slack_is_kept_but_clipped() {
        let mut fb = buf();
        assert_eq!(render_sprites(&mut fb, &[sprite(-20)], 0, 20, &clip()), 1);
        assert_eq!(written(&fb), 0);
    }

    // ── Sky ──

    #[test]
    fn stars_respect_sky_bounds() {
        let stars = [
            Star { x: 10, y: 3, glyph: '*' },
            Star { x: 5, y: 3, glyph: '✦' },   // x not > 5
            Star { x: 70, y: 3, glyph: '◦' },  // x not < 70
            Star { x: 20, y: 16, glyph: '·' }, // y not < 16
        ];
        let mut fb = buf();
        render_sky(&mut fb, &stars, 0, 3);
        assert_eq!(written(&fb), 1);
        assert_eq!(fb.get(10, 3), '*');
    }

    #[test]
    fn stars_drift_with_offset() {
        let stars = [Star { x: 40, y: 4, glyph: '*' }];
        let mut fb = buf();
        render_sky(&mut fb, &stars, 30, 3);
        assert_eq!(fb.get(30, 4), '*');
    }

    // ── Window ──

    #[test]
    fn window_frame_geometry() {
        let mut fb = buf();
        let frame = WindowFrame::for_viewport(80, 24);
        render_window(&mut fb, &frame);
        assert_eq!(fb.get(3, 2), '╔');
        assert_eq!(fb.get(76, 2), '╗');
        assert_eq!(fb.get(3, 20), '╚');
        assert_eq!(fb.get(76, 20), '╝');
        assert_eq!(fb.get(40, 2), '═');
        assert_eq!(fb.get(40, 20), '═');
        assert_eq!(fb.get(3, 10), '║');
        assert_eq!(fb.get(76, 10), '║');
        assert!(fb.row(21).iter().all(|&c| c == '▓'));
        assert_eq!(fb.get(0, 0), '█');
        assert_eq!(fb.get(79, 20), '█');
        assert!(fb.is_blank(40, 10));
        assert!(fb.row(22).iter().all(|&c| c == BLANK));
        assert!(fb.row(23).iter().all(|&c| c == BLANK));
    }

    #[test]
    fn window_occludes_trees() {
        let mut fb = buf();
        let tall = Sprite { base_x: 0, ground_y: 5, shape: SIX };
        stamp(&mut fb, &tall, 38, &clip());
        assert_eq!(fb.get(40, 2), '^');
        render_window(&mut fb, &WindowFrame::for_viewport(80, 24));
        assert_eq!(fb.get(40, 2), '═');
    }

    // ── Agent ──

    #[test]
    fn agent_draws_on_blank_cell() {
        let mut fb = buf();
        let frame = WindowFrame::for_viewport(80, 24);
        let agent = Agent::new(14, 18);
        assert!(render_agent(&mut fb, &agent, &frame));
        assert_eq!(fb.get(14, 18), agent.glyph());
    }

    #[test]
    fn agent_hides_behind_trees() {
        let mut fb = buf();
        let frame = WindowFrame::for_viewport(80, 24);
        let agent = Agent::new(14, 18);
        stamp(&mut fb, &sprite(0), 12, &clip());
        assert_eq!(fb.get(14, 18), '|');
        assert!(!render_agent(&mut fb, &agent, &frame));
        assert_eq!(fb.get(14, 18), '|');
    }

    #[test]
    fn agent_outside_glass_is_not_drawn() {
        let mut fb = buf();
        let frame = WindowFrame::for_viewport(80, 24);
        let mut agent = Agent::new(14, 18);
        agent.y = 2.5; // on the top frame row
        assert!(!render_agent(&mut fb, &agent, &frame));
        agent.y = -3.0;
        assert!(!render_agent(&mut fb, &agent, &frame));
        assert_eq!(written(&fb), 0);
    }
}
