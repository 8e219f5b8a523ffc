/// FrameBuffer: a fixed-size grid of display characters, one per cell.
///
/// Writes must be in bounds. Every renderer clips before writing; an
/// out-of-bounds write is a renderer bug, caught by `debug_assert!` in tests.

pub const BLANK: char = ' ';

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl FrameBuffer {
    pub fn new(w: usize, h: usize) -> Self {
        FrameBuffer {
            width: w,
            height: h,
            cells: vec![BLANK; w * h],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    /// Is (x, y) a valid cell? Accepts signed screen coordinates.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, ch: char) {
        debug_assert!(
            x < self.width && y < self.height,
            "write at ({x}, {y}) outside {}x{} frame",
            self.width,
            self.height
        );
        self.cells[y * self.width + x] = ch;
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> char {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            BLANK
        }
    }

    pub fn is_blank(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == BLANK
    }

    /// Every cell, row-major.
    #[cfg(test)]
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    pub fn row(&self, y: usize) -> &[char] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Rows joined by '\n', no trailing newline.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.width * self.height * 4);
        for y in 0..self.height {
            out.extend(self.row(y).iter());
            if y + 1 < self.height {
                out.push('\n');
            }
        }
        out
    }
}
