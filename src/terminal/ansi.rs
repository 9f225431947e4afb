use std::io::{self, Write};

use crate::markup;
use crate::models::Palette;

use super::Terminal;

const FALLBACK_COLS: u16 = 80;

/// Stdout-backed display sink for interactive sessions.
///
/// Markup is rendered to ANSI escape sequences; theme palettes are applied
/// with OSC 10/11 (default foreground/background) so the whole surface
/// recolors, the closest terminal equivalent of restyling the page.
#[derive(Debug, Default)]
pub struct AnsiTerminal;

impl AnsiTerminal {
    pub fn new() -> Self {
        Self
    }

    fn write(&self, text: &str) {
        let mut stdout = io::stdout().lock();
        // A full stdout is not recoverable mid-session; drop the output.
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }
}

impl Terminal for AnsiTerminal {
    fn echo(&self, line: &str) {
        let mut rendered = markup::to_ansi(line);
        rendered.push('\n');
        self.write(&rendered);
    }

    fn print(&self, text: &str) {
        self.write(&markup::to_ansi(text));
    }

    fn cols(&self) -> u16 {
        crossterm::terminal::size()
            .map(|(cols, _rows)| cols)
            .unwrap_or(FALLBACK_COLS)
    }

    fn apply_palette(&self, palette: &Palette) {
        let fg = palette.foreground.to_hex();
        let bg = palette.background.to_hex();
        // OSC 10 = default foreground, OSC 11 = default background. The
        // scrollbar accent has no ANSI counterpart; it rides along for
        // sinks that can use it.
        self.write(&format!("\x1b]10;{}\x07\x1b]11;{}\x07", fg, bg));
    }

    fn clear(&self) {
        use crossterm::{
            cursor::MoveTo,
            terminal::{Clear, ClearType},
        };
        self.write(&format!("{}{}", Clear(ClearType::All), MoveTo(0, 0)));
    }
}
