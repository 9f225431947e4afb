use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use termfolio::commands::{Outcome, Session};
use termfolio::config::PortfolioConfig;
use termfolio::content::ContentStore;
use termfolio::terminal::{AnsiTerminal, Terminal};
use termfolio::theme::ThemeStore;

#[derive(Parser)]
#[command(name = "termfolio")]
#[command(about = "Interactive terminal portfolio")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single portfolio command and exit
    Exec {
        /// The command line to run, e.g. `tfo exec rate "Notes App" 4`
        #[arg(trailing_var_arg = true, required = true)]
        line: Vec<String>,
    },
}

/// Initialize tracing to stderr: stdout belongs to the display sink.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "termfolio=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_session() -> anyhow::Result<Session> {
    let sink: Arc<dyn Terminal> = Arc::new(AnsiTerminal::new());
    let config = PortfolioConfig::load();
    let themes = ThemeStore::open_default()?;
    Ok(Session::new(sink, ContentStore::portfolio(), config, themes))
}

/// The interactive read-eval loop. Ends on `exit` or EOF.
async fn run_interactive(mut session: Session) -> anyhow::Result<()> {
    session.greet();

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        if session.execute(&line).await == Outcome::Exit {
            break;
        }
    }

    // Let an in-flight joke finish typing before the process goes away.
    session.wait_reveal().await;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Exec { line }) => {
            let mut session = build_session()?;
            session.execute(&line.join(" ")).await;
            session.wait_reveal().await;
        }
        None => {
            run_interactive(build_session()?).await?;
        }
    }

    Ok(())
}
