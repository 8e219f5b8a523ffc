/// Presentation layer: the terminal sink for finished frames.
///
/// How it works:
///   1. The scene hands over one complete frame as text
///   2. Split it into rows and compare each with the previous frame's row
///   3. Only emit terminal commands for rows that changed
///   4. All commands are batched with `queue!`, flushed once at the end
///
/// Raw mode means '\n' does not return the carriage, so every row is
/// positioned explicitly with `MoveTo`.

use std::io::{self, BufWriter, Write};

use crossterm::{
    cursor::{self, MoveTo},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};

pub struct Renderer<W: Write> {
    writer: BufWriter<W>,
    /// Rows of the last presented frame.
    back: Vec<String>,
}

impl Renderer<io::Stdout> {
    pub fn stdout() -> Self {
        Renderer::new(io::stdout())
    }
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Renderer {
            writer: BufWriter::with_capacity(16384, out),
            back: Vec::new(),
        }
    }

    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.writer,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            Clear(ClearType::All)
        )?;
        self.back.clear();
        Ok(())
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(self.writer, cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }

    /// Write one frame. Rows identical to the previous frame are skipped.
    pub fn present(&mut self, frame: &str) -> io::Result<()> {
        let mut rows = 0;
        for (y, line) in frame.split('\n').enumerate() {
            rows = y + 1;
            if self.back.get(y).map(String::as_str) == Some(line) {
                continue;
            }
            queue!(self.writer, MoveTo(0, y as u16), Print(line))?;
            match self.back.get_mut(y) {
                Some(prev) => {
                    prev.clear();
                    prev.push_str(line);
                }
                None => self.back.push(line.to_string()),
            }
        }
        self.back.truncate(rows);
        self.writer.flush()
    }

    /// Force the next `present` to redraw every row.
    pub fn invalidate(&mut self) {
        self.back.clear();
    }
}

/// Terminal session guard: restores the terminal when dropped, so the
/// cursor comes back on every exit path, including panics.
pub struct TerminalSession<W: Write> {
    renderer: Renderer<W>,
    active: bool,
}

impl TerminalSession<io::Stdout> {
    pub fn start() -> io::Result<Self> {
        TerminalSession::start_with(Renderer::stdout())
    }
}

impl<W: Write> TerminalSession<W> {
    pub fn start_with(mut renderer: Renderer<W>) -> io::Result<Self> {
        if let Err(e) = renderer.init() {
            let _ = renderer.cleanup();
            return Err(e);
        }
        Ok(TerminalSession { renderer, active: true })
    }

    pub fn present(&mut self, frame: &str) -> io::Result<()> {
        self.renderer.present(frame)
    }

    /// The terminal was resized or otherwise disturbed: clear it and redraw
    /// everything on the next frame.
    pub fn invalidate(&mut self) -> io::Result<()> {
        self.renderer.invalidate();
        execute!(self.renderer.writer, Clear(ClearType::All))
    }

    /// Restore the terminal now and report any failure.
    pub fn finish(mut self) -> io::Result<()> {
        self.active = false;
        self.renderer.cleanup()
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.renderer.cleanup();
        }
    }
}
