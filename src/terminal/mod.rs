//! The display sink: where command output goes.
//!
//! The dispatcher only ever talks to the [`Terminal`] trait, which carries
//! the minimal surface the command set needs: print a line, print without a
//! trailing newline, report the display width, apply a theme palette, and
//! clear. [`AnsiTerminal`] renders to stdout for interactive use;
//! [`MemoryTerminal`] records everything for tests.

mod ansi;
mod memory;

pub use ansi::AnsiTerminal;
pub use memory::MemoryTerminal;

use crate::models::Palette;

/// Rendering surface for command output.
///
/// Implementations must be shareable across tasks: the joke reveal animation
/// writes from a spawned task while the dispatcher keeps its own handle.
pub trait Terminal: Send + Sync {
    /// Print a markup line followed by a newline. Any pending partial output
    /// from [`print`](Self::print) is completed first.
    fn echo(&self, line: &str);

    /// Print text without a trailing newline (used by the typing animation).
    fn print(&self, text: &str);

    /// Current display width in character columns.
    fn cols(&self) -> u16;

    /// Apply a theme palette to the surface. Idempotent.
    fn apply_palette(&self, palette: &Palette);

    /// Clear the surface.
    fn clear(&self);
}

/// Render a title as a monospace banner box sized to the display width.
///
/// ```text
/// ╔══════════════════════╗
/// ║  Terminal Portfolio  ║
/// ╚══════════════════════╝
/// ```
///
/// The caller decides how to color it (the greeting runs it through
/// [`crate::markup::rainbow`]). Titles wider than the display are truncated.
pub fn banner(title: &str, cols: u16) -> String {
    let max_inner = (cols as usize).saturating_sub(2).max(1);
    let title: String = title.chars().take(max_inner.saturating_sub(4)).collect();
    let inner = title.chars().count() + 4;

    let mut out = String::new();
    out.push('╔');
    out.push_str(&"═".repeat(inner));
    out.push_str("╗\n");
    out.push_str(&format!("║  {}  ║\n", title));
    out.push('╚');
    out.push_str(&"═".repeat(inner));
    out.push('╝');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_shape() {
        let b = banner("Hi", 80);
        let lines: Vec<&str> = b.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('╔') && lines[0].ends_with('╗'));
        assert_eq!(lines[1], "║  Hi  ║");
        assert!(lines[2].starts_with('╚') && lines[2].ends_with('╝'));
        // All rows are the same width.
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_banner_truncates_to_width() {
        let b = banner("Terminal Portfolio", 12);
        for line in b.lines() {
            assert!(line.chars().count() <= 12);
        }
    }
}
