use std::sync::Arc;

use speculate2::speculate;
use tempfile::TempDir;

use termfolio::commands::{Outcome, Session};
use termfolio::config::PortfolioConfig;
use termfolio::content::ContentStore;
use termfolio::models::{ThemeName, DARK_PALETTE, LIGHT_PALETTE};
use termfolio::terminal::{MemoryTerminal, Terminal};
use termfolio::theme::ThemeStore;

/// Endpoint that refuses immediately: no DNS lookup, no real network.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:1/jokes";

fn new_session(dir: &TempDir) -> (Arc<MemoryTerminal>, Session) {
    let sink = Arc::new(MemoryTerminal::new());
    let themes =
        ThemeStore::open(dir.path().join("theme.json")).expect("failed to open theme store");
    let config = PortfolioConfig {
        joke_endpoint: DEAD_ENDPOINT.to_string(),
        typing_delay_ms: 0,
        ..PortfolioConfig::default()
    };
    let session = Session::new(
        sink.clone() as Arc<dyn Terminal>,
        ContentStore::portfolio(),
        config,
        themes,
    );
    (sink, session)
}

speculate! {
    before {
        let dir = TempDir::new().expect("failed to create temp dir");
        let (sink, mut session) = new_session(&dir);
    }

    describe "navigation" {
        it "reaches every directory and prints its stored lines in order" {
            tokio_test::block_on(async {
                let store = ContentStore::portfolio();
                let keys: Vec<String> =
                    store.directory_names().map(str::to_string).collect();
                for key in keys {
                    let before = sink.lines().len();
                    session.execute(&format!("cd {}", key)).await;
                    assert_eq!(session.current_dir(), key);

                    let lines = sink.lines();
                    assert_eq!(
                        lines[before],
                        format!("You are now in the {} directory.", key)
                    );
                    let expected = store.lines(&key).expect("directory missing");
                    assert_eq!(&lines[before + 1..], expected);

                    session.execute("cd ..").await;
                    assert_eq!(session.current_dir(), "home");
                }
            });
        }

        it "rejects unknown directories without changing state" {
            tokio_test::block_on(async {
                session.execute("cd projects").await;
                session.execute("cd attic").await;
                assert_eq!(session.current_dir(), "projects");
                assert!(sink.contains("Directory 'attic' not found."));
            });
        }

        it "treats home as an always-valid target" {
            tokio_test::block_on(async {
                session.execute("cd skills").await;
                session.execute("cd home").await;
                assert_eq!(session.current_dir(), "home");
                assert!(sink.contains("You are now in the home directory."));
            });
        }

        it "asks for an argument when cd gets none" {
            tokio_test::block_on(async {
                session.execute("cd").await;
                assert_eq!(session.current_dir(), "home");
                assert!(sink.contains("Usage: cd <directory>"));
            });
        }

        it "lists every directory plus the built-ins without duplicates" {
            tokio_test::block_on(async {
                session.execute("ls").await;
                let lines = sink.lines();
                for entry in ["education", "projects", "skills", "clear", "cd", "ls"] {
                    assert_eq!(
                        lines.iter().filter(|l| l.as_str() == entry).count(),
                        1,
                        "expected exactly one '{}' entry",
                        entry
                    );
                }
            });
        }
    }

    describe "feedback" {
        it "records a rating for an existing project" {
            tokio_test::block_on(async {
                session.execute(r#"rate "Notes App" 4"#).await;
                session.execute("show_feedback").await;
                assert!(sink.contains("Thank you! Your rating of 4 for Notes App has been recorded."));
                assert!(sink.contains("Project: Notes App | Rating: 4/5"));
            });
        }

        it "matches project names exactly but case-insensitively" {
            tokio_test::block_on(async {
                session.execute(r#"rate "notes app" 5"#).await;
                assert_eq!(session.feedback().len(), 1);
                // The canonical name is stored, not the typed one.
                assert_eq!(session.feedback()[0].project, "Notes App");
            });
        }

        it "rejects unknown projects without recording anything" {
            tokio_test::block_on(async {
                session.execute(r#"rate "Nonexistent" 5"#).await;
                assert!(session.feedback().is_empty());
                assert!(sink.contains("Project 'Nonexistent' not found."));
            });
        }

        it "rejects a substring of a project name" {
            tokio_test::block_on(async {
                session.execute("rate Notes 4").await;
                assert!(session.feedback().is_empty());
                assert!(sink.contains("Project 'Notes' not found."));
            });
        }

        it "requires both arguments" {
            tokio_test::block_on(async {
                session.execute("rate").await;
                session.execute(r#"rate "Notes App""#).await;
                assert!(session.feedback().is_empty());
                assert!(sink.contains("Usage: rate <project> <rating>"));
            });
        }

        it "rejects ratings outside 1 to 5" {
            tokio_test::block_on(async {
                session.execute(r#"rate "Notes App" 9"#).await;
                session.execute(r#"rate "Notes App" four"#).await;
                assert!(session.feedback().is_empty());
                assert!(sink.contains("Rating must be a number from 1 to 5."));
            });
        }

        it "shows a placeholder when no feedback exists" {
            tokio_test::block_on(async {
                session.execute("show_feedback").await;
                assert!(sink.contains("No feedback available yet."));
            });
        }
    }

    describe "themes" {
        it "starts dark and toggles to light" {
            tokio_test::block_on(async {
                assert_eq!(session.current_theme(), ThemeName::Dark);
                session.execute("dark_mode_toggle").await;
                assert_eq!(session.current_theme(), ThemeName::Light);
                assert!(sink.contains("Switched to light mode."));
                assert_eq!(*sink.palettes().last().unwrap(), LIGHT_PALETTE);
            });
        }

        it "toggling twice restores palette and persisted value" {
            tokio_test::block_on(async {
                session.execute("dark_mode_toggle").await;
                session.execute("dark_mode_toggle").await;
                assert_eq!(session.current_theme(), ThemeName::Dark);
                assert_eq!(*sink.palettes().last().unwrap(), DARK_PALETTE);

                let themes = ThemeStore::open(dir.path().join("theme.json")).unwrap();
                assert_eq!(themes.load(), ThemeName::Dark);
            });
        }

        it "restores the persisted theme at startup" {
            tokio_test::block_on(async {
                session.execute("dark_mode_toggle").await;
            });
            drop(session);

            let (sink2, session2) = new_session(&dir);
            assert_eq!(session2.current_theme(), ThemeName::Light);
            assert_eq!(sink2.palettes(), vec![LIGHT_PALETTE]);
        }
    }

    describe "jokes" {
        it "shows exactly the fallback message when the fetch fails" {
            tokio_test::block_on(async {
                session.execute("joke").await;
                session.wait_reveal().await;
                assert_eq!(
                    sink.lines(),
                    vec!["Oops! Couldn't fetch a joke at this time."]
                );
            });
        }

        it "a second joke cancels the first reveal" {
            tokio_test::block_on(async {
                session.execute("joke").await;
                session.execute("joke").await;
                session.wait_reveal().await;
                // Only the second task's output may remain; with a dead
                // endpoint both would fail, but the first was aborted.
                assert_eq!(sink.lines().len(), 1);
            });
        }
    }

    describe "static output" {
        it "echoes arguments verbatim" {
            tokio_test::block_on(async {
                session.execute("echo  hello   world").await;
                assert_eq!(sink.lines(), vec!["hello world"]);
            });
        }

        it "lists every command in help" {
            tokio_test::block_on(async {
                session.execute("help").await;
                let help = sink.lines().join("\n");
                for cmd in [
                    "help", "echo", "dark_mode_toggle", "about", "projects",
                    "contact", "joke", "credits", "social", "download_resume",
                    "rate", "show_feedback", "cd", "ls", "clear",
                ] {
                    assert!(help.contains(cmd), "help is missing '{}'", cmd);
                }
            });
        }

        it "reports unknown commands" {
            tokio_test::block_on(async {
                session.execute("sudo make me a sandwich").await;
                assert!(sink.contains("Command 'sudo' not found."));
            });
        }

        it "prints project lines with progress bars" {
            tokio_test::block_on(async {
                session.execute("projects").await;
                assert!(sink.contains("Notes App"));
                assert!(sink.contains("[80%]"));
                assert!(sink.contains("Crypto Website"));
            });
        }

        it "prints contact and social links from config" {
            tokio_test::block_on(async {
                session.execute("contact").await;
                session.execute("social").await;
                assert!(sink.contains("abhishek@example.com"));
                assert!(sink.contains("https://github.com/abhitech2002"));
            });
        }

        it "echoes the resume link" {
            tokio_test::block_on(async {
                session.execute("download_resume").await;
                assert!(sink.contains("Resume Link:"));
            });
        }

        it "clears the screen" {
            tokio_test::block_on(async {
                session.execute("about").await;
                session.execute("clear").await;
                assert!(sink.lines().is_empty());
                assert_eq!(sink.clear_count(), 1);
            });
        }

        it "ignores blank input" {
            tokio_test::block_on(async {
                assert_eq!(session.execute("   ").await, Outcome::Continue);
                assert!(sink.lines().is_empty());
            });
        }

        it "exit ends the session" {
            tokio_test::block_on(async {
                assert_eq!(session.execute("exit").await, Outcome::Exit);
            });
        }

        it "greeting shows the banner and welcome line" {
            session.greet();
            assert!(sink.contains("<rgb:"));
            assert!(sink.contains("Welcome to my Terminal Portfolio!"));
        }
    }
}
