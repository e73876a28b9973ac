//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame is a full redraw: the cursor goes home and every cell is
//! written again. The screen is cleared on the first frame and whenever the
//! frame size changes, so stale cells never survive.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Where finished frames go.
pub trait Screen {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()>;
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last_size: Option<(u16, u16)>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Switch the terminal into game mode: raw input, alternate screen,
    /// hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call after a failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last_size: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let size = (fb.width(), fb.height());
        let clear = self.last_size != Some(size);

        self.buf.clear();
        encode_full_into(fb, clear, &mut self.buf)?;
        self.flush_buf()?;

        self.last_size = Some(size);
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Screen for TerminalRenderer<W> {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.draw(fb)
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to the
/// terminal. With `clear` the whole screen is erased first.
pub fn encode_full_into(fb: &FrameBuffer, clear: bool, out: &mut Vec<u8>) -> Result<()> {
    if clear {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::{Cell, CellStyle};

    fn small_frame() -> FrameBuffer {
        let mut fb = FrameBuffer::new(2, 2);
        let style = CellStyle::default();
        fb.set(0, 0, Cell { ch: 'A', style });
        fb.set(1, 0, Cell { ch: 'B', style });
        fb.set(0, 1, Cell { ch: 'C', style });
        fb.set(1, 1, Cell { ch: 'D', style });
        fb
    }

    #[test]
    fn full_encode_contains_every_cell_in_order() {
        let mut out = Vec::new();
        encode_full_into(&small_frame(), false, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let a = text.find('A').unwrap();
        let b = text.find('B').unwrap();
        let c = text.find('C').unwrap();
        let d = text.find('D').unwrap();
        assert!(a < b && b < c && c < d);
        assert!(text.contains("AB\r\nCD"));
    }

    #[test]
    fn first_frame_clears_then_later_frames_do_not() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        let fb = small_frame();
        renderer.draw(&fb).unwrap();
        let first_len = renderer.into_inner().len();

        let mut clear = Vec::new();
        clear.queue(terminal::Clear(terminal::ClearType::All)).unwrap();

        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        renderer.draw(&fb).unwrap();
        renderer.draw(&fb).unwrap();
        let both = renderer.into_inner();
        assert_eq!(both.len(), first_len * 2 - clear.len());
        assert!(both.starts_with(&clear));
    }

    #[test]
    fn style_conversion_keeps_channels() {
        let style = CellStyle::default();
        assert_eq!(
            rgb_to_color(style.fg),
            Color::Rgb {
                r: style.fg.r,
                g: style.fg.g,
                b: style.fg.b
            }
        );
    }
}
