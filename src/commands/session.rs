use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::config::PortfolioConfig;
use crate::content::{ContentStore, HOME};
use crate::joke::JokeClient;
use crate::markup;
use crate::models::{FeedbackEntry, ThemeName};
use crate::terminal::{banner, Terminal};
use crate::theme::ThemeStore;

use super::{tokenize, Command};

/// Fallback shown for any joke fetch or parse failure.
pub const JOKE_FALLBACK: &str = "Oops! Couldn't fetch a joke at this time.";

const HELP_TEXT: &str = "\
Available commands:
- help: Show this help message
- echo <text>: Echo back the provided text
- dark_mode_toggle: Toggle between dark and light mode
- about: Show information about the developer
- projects: List available projects
- contact: Display contact information
- joke: Fetch and display a programming joke
- credits: Show the libraries used
- social: List social media profiles
- download_resume: Download the developer's resume as a PDF
- rate <project> <rating>: Rate a project out of 5 (e.g., rate \"Notes App\" 4)
- show_feedback: Show the feedback received for projects
- cd <directory>: Change the current directory
- ls: List available directories
- clear: Clear the screen
- exit: Leave the session";

/// What the caller should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// One interactive portfolio session.
///
/// Owns every piece of mutable state the commands touch: the current
/// directory, the feedback list, the active theme, and the handle of the
/// in-flight reveal task (at most one). Nothing here is global, so tests run
/// as many independent sessions as they like.
pub struct Session {
    sink: Arc<dyn Terminal>,
    store: ContentStore,
    config: PortfolioConfig,
    themes: ThemeStore,
    jokes: JokeClient,
    current_dir: String,
    current_theme: ThemeName,
    feedback: Vec<FeedbackEntry>,
    reveal_task: Option<JoinHandle<()>>,
}

impl Session {
    /// Build a session, restoring and applying the persisted theme.
    pub fn new(
        sink: Arc<dyn Terminal>,
        store: ContentStore,
        config: PortfolioConfig,
        themes: ThemeStore,
    ) -> Self {
        let current_theme = themes.load();
        sink.apply_palette(current_theme.palette());
        let jokes = JokeClient::new(config.joke_endpoint.clone());
        Self {
            sink,
            store,
            config,
            themes,
            jokes,
            current_dir: HOME.to_string(),
            current_theme,
            feedback: Vec::new(),
            reveal_task: None,
        }
    }

    pub fn current_dir(&self) -> &str {
        &self.current_dir
    }

    pub fn current_theme(&self) -> ThemeName {
        self.current_theme
    }

    pub fn feedback(&self) -> &[FeedbackEntry] {
        &self.feedback
    }

    /// Print the rainbow banner and welcome line.
    pub fn greet(&self) {
        let title = banner("Terminal Portfolio", self.sink.cols());
        for line in markup::rainbow(&title).lines() {
            self.sink.echo(line);
        }
        self.sink.echo(concat!(
            "<white>Welcome to my Terminal Portfolio! ",
            "Type \"help\" to see available commands.</white>"
        ));
        self.sink.echo("");
    }

    /// Dispatch one raw input line.
    pub async fn execute(&mut self, line: &str) -> Outcome {
        let Some((token, args)) = tokenize(line) else {
            return Outcome::Continue;
        };
        let Some(command) = Command::parse(token) else {
            self.sink.echo(&format!(
                "Command '{}' not found. Type 'help' for available commands.",
                token
            ));
            return Outcome::Continue;
        };

        match command {
            Command::Help => self.sink.echo(HELP_TEXT),
            Command::Echo => self.sink.echo(&args.join(" ")),
            Command::DarkModeToggle => self.dark_mode_toggle(),
            Command::About => self.sink.echo(&self.config.about),
            Command::Projects => self.projects(),
            Command::Contact => self.contact(),
            Command::Joke => self.joke(),
            Command::Credits => self.credits(),
            Command::Social => self.social(),
            Command::DownloadResume => self.download_resume(),
            Command::Rate => self.rate(&args),
            Command::ShowFeedback => self.show_feedback(),
            Command::Cd => self.cd(&args),
            Command::Ls => self.ls(),
            Command::Clear => self.sink.clear(),
            Command::Exit => return Outcome::Exit,
        }
        Outcome::Continue
    }

    fn dark_mode_toggle(&mut self) {
        let new_theme = self.current_theme.flip();
        self.sink.apply_palette(new_theme.palette());
        self.themes.save(new_theme);
        self.current_theme = new_theme;
        self.sink
            .echo(&format!("Switched to {} mode.", new_theme.as_str()));
    }

    fn projects(&self) {
        if let Some(lines) = self.store.lines("projects") {
            for line in lines {
                self.sink.echo(line);
            }
        }
    }

    fn contact(&self) {
        self.sink.echo(&format!(
            r#"Email: {} | LinkedIn: <a href="{}">{}</a>"#,
            self.config.email, self.config.linkedin_url, self.config.linkedin_url
        ));
    }

    /// Fetch and reveal a joke without blocking input processing.
    ///
    /// The fetch and the typing animation run in one spawned task; starting
    /// a new joke aborts the previous task, so two reveals never interleave
    /// on the sink.
    fn joke(&mut self) {
        if let Some(task) = self.reveal_task.take() {
            task.abort();
        }
        let sink = Arc::clone(&self.sink);
        let client = self.jokes.clone();
        let delay = Duration::from_millis(self.config.typing_delay_ms);
        self.reveal_task = Some(tokio::spawn(async move {
            match client.fetch().await {
                Ok(joke) => super::reveal(sink, joke, delay).await,
                Err(e) => {
                    tracing::debug!("joke fetch failed: {}", e);
                    sink.echo(JOKE_FALLBACK);
                }
            }
        }));
    }

    /// Await the in-flight reveal task, if any. The interactive loop calls
    /// this before exiting; tests use it to observe joke output.
    pub async fn wait_reveal(&mut self) {
        if let Some(task) = self.reveal_task.take() {
            // An aborted task is not an error here.
            let _ = task.await;
        }
    }

    fn credits(&self) {
        self.sink.echo(concat!(
            "Rust Crates Used:\n",
            r#"1. tokio - <a href="https://github.com/tokio-rs/tokio">https://github.com/tokio-rs/tokio</a>"#,
            "\n",
            r#"2. reqwest - <a href="https://github.com/seanmonstar/reqwest">https://github.com/seanmonstar/reqwest</a>"#,
            "\n",
            r#"3. crossterm - <a href="https://github.com/crossterm-rs/crossterm">https://github.com/crossterm-rs/crossterm</a>"#
        ));
    }

    fn social(&self) {
        self.sink.echo(&format!(
            "Social Media Profiles:\n* LinkedIn: <a href=\"{0}\">{0}</a>\n* GitHub: <a href=\"{1}\">{1}</a>",
            self.config.linkedin_url, self.config.github_url
        ));
    }

    /// Echo the resume link and start a best-effort background download.
    ///
    /// The remote URL is never validated; a failed download is logged and
    /// otherwise invisible, matching the no-existence-check contract.
    fn download_resume(&mut self) {
        let url = self.config.resume_url.clone();
        let filename = self.config.resume_filename.clone();
        self.sink.echo(&format!(
            r#"Resume Link: <a href="{0}">{0}</a>"#,
            url
        ));
        tokio::spawn(async move {
            match download_to_file(&url, &filename).await {
                Ok(()) => tracing::info!("resume saved to {}", filename),
                Err(e) => tracing::warn!("resume download failed: {}", e),
            }
        });
    }

    fn rate(&mut self, args: &[&str]) {
        if args.len() < 2 {
            self.sink
                .echo("Usage: rate <project> <rating> (e.g., rate \"Notes App\" 4)");
            return;
        }
        let Some((rating_token, name_tokens)) = args.split_last() else {
            return;
        };
        let name = name_tokens.join(" ");
        let name = name.trim_matches('"');

        let rating = match rating_token.parse::<u8>() {
            Ok(r) if (1..=5).contains(&r) => r,
            _ => {
                self.sink.echo("Rating must be a number from 1 to 5.");
                return;
            }
        };

        match self.store.find_project(name) {
            Some(project) => {
                let entry = FeedbackEntry::new(project.name.clone(), rating);
                self.sink.echo(&format!(
                    "Thank you! Your rating of {} for {} has been recorded.",
                    rating, entry.project
                ));
                self.feedback.push(entry);
            }
            None => {
                self.sink.echo(&format!("Project '{}' not found.", name));
            }
        }
    }

    fn show_feedback(&self) {
        if self.feedback.is_empty() {
            self.sink.echo("No feedback available yet.");
        } else {
            for entry in &self.feedback {
                self.sink.echo(&entry.display_line());
            }
        }
    }

    fn cd(&mut self, args: &[&str]) {
        let Some(&directory) = args.first() else {
            self.sink.echo("Usage: cd <directory>");
            return;
        };
        if self.store.has_directory(directory) {
            self.current_dir = directory.to_string();
            self.sink
                .echo(&format!("You are now in the {} directory.", directory));
            if let Some(lines) = self.store.lines(directory) {
                for line in lines {
                    self.sink.echo(line);
                }
            }
        } else if directory == ".." || directory == HOME {
            self.current_dir = HOME.to_string();
            self.sink.echo("You are now in the home directory.");
        } else {
            self.sink
                .echo(&format!("Directory '{}' not found.", directory));
        }
    }

    /// The root listing: content directories plus the built-in entries.
    fn ls(&self) {
        let mut entries: Vec<&str> = self.store.directory_names().collect();
        for builtin in ["clear", "cd", "ls"] {
            if !entries.contains(&builtin) {
                entries.push(builtin);
            }
        }
        for entry in entries {
            self.sink.echo(entry);
        }
    }
}

async fn download_to_file(url: &str, filename: &str) -> anyhow::Result<()> {
    let response = reqwest::get(url).await?.error_for_status()?;
    let bytes = response.bytes().await?;
    tokio::fs::write(filename, &bytes).await?;
    Ok(())
}
