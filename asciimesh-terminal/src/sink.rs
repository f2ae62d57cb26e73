/// Output sinks that receive one finished frame at a time
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, ClearType},
};
use std::io::{self, stdout, BufWriter, Stdout, Write};
use std::time::Duration;
use tracing::{debug, warn};

use asciimesh_core::Viewport;

use crate::framebuffer::FrameBuffer;

/// Something that happened on the output side between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkEvent {
    Resized(Viewport),
    Quit,
}

pub trait FrameSink {
    /// Write a completed frame
    fn present(&mut self, frame: &FrameBuffer) -> io::Result<()>;

    /// Called once per frame before rendering; must not block
    fn poll(&mut self) -> io::Result<Option<SinkEvent>> {
        Ok(None)
    }
}

/// Size of the host terminal, or the 80x30 default when it cannot be queried
pub fn terminal_viewport() -> Viewport {
    match terminal::size() {
        Ok((cols, rows)) if cols > 0 && rows > 0 => Viewport::new(cols as usize, rows as usize),
        Ok(_) => Viewport::DEFAULT,
        Err(e) => {
            warn!(error = %e, "terminal size unavailable, using default viewport");
            Viewport::DEFAULT
        }
    }
}

/// Full-screen terminal output. The terminal is restored on drop.
pub struct TerminalSink<W: Write = Stdout> {
    out: BufWriter<W>,
}

impl TerminalSink {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Self::take_over(stdout())
    }
}

impl<W: Write> TerminalSink<W> {
    /// Switch `out` to the alternate screen. The sink exists before any
    /// escape sequence is sent, so a failure here still runs `Drop`.
    fn take_over(out: W) -> io::Result<Self> {
        let mut sink = Self {
            out: BufWriter::new(out),
        };
        execute!(
            sink.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(sink)
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn present(&mut self, frame: &FrameBuffer) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(0, 0))?;

        let mut line = String::with_capacity(frame.width());
        for (y, row) in frame.rows().enumerate() {
            // Raw mode turns off newline translation, so start each later row explicitly
            if y > 0 {
                queue!(self.out, cursor::MoveToNextLine(1))?;
            }
            line.clear();
            line.extend(row.iter());
            queue!(self.out, Print(&line))?;
        }

        self.out.flush()
    }

    fn poll(&mut self) -> io::Result<Option<SinkEvent>> {
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) => {
                    if is_quit_key(&key) {
                        return Ok(Some(SinkEvent::Quit));
                    }
                }
                Event::Resize(cols, rows) => {
                    debug!(cols, rows, "terminal resized");
                    queue!(self.out, terminal::Clear(ClearType::All))?;
                    return Ok(Some(SinkEvent::Resized(Viewport::new(cols as usize, rows as usize))));
                }
                _ => {}
            }
        }
        Ok(None)
    }
}

impl<W: Write> Drop for TerminalSink<W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Plain-text output: each frame's rows followed by a blank separator line
pub struct TextSink<W: Write> {
    writer: W,
    frames: u64,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, frames: 0 }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FrameSink for TextSink<W> {
    fn present(&mut self, frame: &FrameBuffer) -> io::Result<()> {
        writeln!(self.writer, "{}\n", frame.to_text())?;
        self.frames += 1;
        self.writer.flush()
    }
}
