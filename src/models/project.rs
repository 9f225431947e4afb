use serde::{Deserialize, Serialize};

/// A portfolio project shown by the `projects` command.
///
/// Projects are static data: they are defined once when the content store is
/// built and rendered into display lines with a progress bar. The `rate`
/// command matches against `name` (exact, case-insensitive).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub url: String,
    pub description: String,
    /// Completion percentage, 0-100.
    pub progress: u8,
}

impl Project {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
        progress: u8,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: description.into(),
            progress,
        }
    }
}
