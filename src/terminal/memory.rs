use std::sync::Mutex;

use crate::models::Palette;

use super::Terminal;

/// In-memory display sink for tests.
///
/// Lines keep their markup verbatim so assertions can match on raw text.
/// Partial [`print`](Terminal::print) output accumulates until the next
/// [`echo`](Terminal::echo) completes the line, mirroring how a real
/// terminal cursor behaves.
#[derive(Debug, Default)]
pub struct MemoryTerminal {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    lines: Vec<String>,
    partial: String,
    palettes: Vec<Palette>,
    clears: usize,
}

impl MemoryTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// All completed lines, in emission order.
    pub fn lines(&self) -> Vec<String> {
        self.inner.lock().expect("terminal lock poisoned").lines.clone()
    }

    /// Pending partial output that has not been completed by an `echo`.
    pub fn partial(&self) -> String {
        self.inner.lock().expect("terminal lock poisoned").partial.clone()
    }

    /// Palettes applied so far, in order.
    pub fn palettes(&self) -> Vec<Palette> {
        self.inner
            .lock()
            .expect("terminal lock poisoned")
            .palettes
            .clone()
    }

    pub fn clear_count(&self) -> usize {
        self.inner.lock().expect("terminal lock poisoned").clears
    }

    /// Whether any completed line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|l| l.contains(needle))
    }
}

impl Terminal for MemoryTerminal {
    fn echo(&self, line: &str) {
        let mut inner = self.inner.lock().expect("terminal lock poisoned");
        let mut full = std::mem::take(&mut inner.partial);
        full.push_str(line);
        inner.lines.push(full);
    }

    fn print(&self, text: &str) {
        let mut inner = self.inner.lock().expect("terminal lock poisoned");
        inner.partial.push_str(text);
    }

    fn cols(&self) -> u16 {
        80
    }

    fn apply_palette(&self, palette: &Palette) {
        let mut inner = self.inner.lock().expect("terminal lock poisoned");
        inner.palettes.push(*palette);
    }

    fn clear(&self) {
        let mut inner = self.inner.lock().expect("terminal lock poisoned");
        inner.lines.clear();
        inner.partial.clear();
        inner.clears += 1;
    }
}
