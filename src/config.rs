//! Portfolio configuration: identity, external links, and tunables.
//!
//! Every URL the commands mention lives here instead of inside the
//! dispatcher, so the content is data, not logic. Configuration is read from
//! `<config dir>/termfolio/config.json`; a missing file means compiled
//! defaults, and an unreadable one degrades to defaults with a warning.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.json";

/// Everything the command set treats as opaque external data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Display name used in the about line.
    pub owner: String,
    /// The `about` command body.
    pub about: String,
    /// Contact email shown by `contact`.
    pub email: String,
    pub linkedin_url: String,
    pub github_url: String,
    /// Direct-download URL for the resume document. Never validated.
    pub resume_url: String,
    /// Suggested filename for the background resume download.
    pub resume_filename: String,
    /// Joke API endpoint; expected to return `[{"setup", "punchline", …}]`.
    pub joke_endpoint: String,
    /// Delay between revealed characters in the typing animation.
    pub typing_delay_ms: u64,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            owner: "Abhishek".to_string(),
            about: concat!(
                "Hi! I'm Abhishek, a full-stack developer specializing in ",
                "MERN/MEAN stack. Type 'projects' to see my work."
            )
            .to_string(),
            email: "abhishek@example.com".to_string(),
            linkedin_url: "https://linkedin.com/in/abhishek".to_string(),
            github_url: "https://github.com/abhitech2002".to_string(),
            resume_url:
                "https://drive.google.com/uc?export=download&id=1QmQWukV9njH-bRRQqOazg0Twd1pqgVjm"
                    .to_string(),
            resume_filename: "Abhishek_Resume.pdf".to_string(),
            joke_endpoint: "https://official-joke-api.appspot.com/jokes/programming/random"
                .to_string(),
            typing_delay_ms: 50,
        }
    }
}

impl PortfolioConfig {
    /// Load configuration from the user's config directory.
    /// Returns defaults if the file does not exist or fails to parse.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("failed to load config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn default_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "termfolio")
            .context("could not determine config directory")?;
        Ok(dirs.config_dir().join(CONFIG_FILE))
    }
}
