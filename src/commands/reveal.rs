use std::sync::Arc;
use std::time::Duration;

use crate::terminal::Terminal;

/// Reveal `text` one character at a time on the sink.
///
/// Line breaks in the text complete the current output line. The final
/// `echo("")` terminates the last line so the prompt lands cleanly. Callers
/// cancel an in-flight reveal by aborting the task that runs it; the sink is
/// left with whatever was revealed so far, which matches how an interrupted
/// typist would leave the screen.
pub async fn reveal(sink: Arc<dyn Terminal>, text: String, delay: Duration) {
    for c in text.chars() {
        if c == '\n' {
            sink.echo("");
        } else {
            sink.print(&c.to_string());
        }
        tokio::time::sleep(delay).await;
    }
    sink.echo("");
}
