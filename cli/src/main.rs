use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use todo_core::{TodoClient, TodoId};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;
mod render;
mod shell;
mod transport;

use app::{Action, App};
use transport::UreqTransport;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Keep a to-do list in sync with a todo server", long_about = None)]
struct Cli {
    /// Base URL of the todo server
    #[arg(long, env = "TODO_API_URL", default_value = "http://127.0.0.1:3000")]
    api_url: String,

    /// Log requests to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the list
    List,
    /// Create a todo
    Add {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Mark a todo completed
    Done { id: TodoId },
    /// Mark a todo not completed
    Undo { id: TodoId },
    /// Delete a todo
    Rm { id: TodoId },
    /// Print the list as HTML
    Html,
    /// Interactive mode (default)
    Shell,
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut app = App::new(TodoClient::new(&cli.api_url), UreqTransport::new());
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let action = match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            shell::run(&mut app, io::stdin().lock(), &mut out, &mut err)
                .context("interactive session failed")?;
            return Ok(ExitCode::SUCCESS);
        }
        Commands::List => None,
        Commands::Add { title } => Some(Action::Add(title.join(" "))),
        Commands::Done { id } => Some(Action::Check { id, checked: true }),
        Commands::Undo { id } => Some(Action::Check { id, checked: false }),
        Commands::Rm { id } => Some(Action::Remove(id)),
        Commands::Html => Some(Action::Html),
    };

    // Every command starts from the server's current list, like a page load.
    let written = match action {
        None => app.run(Action::List, &mut out, &mut err),
        Some(action) => app
            .run(Action::List, &mut io::sink(), &mut err)
            .and_then(|()| app.run(action, &mut out, &mut err)),
    };
    written.context("failed to write output")?;

    Ok(if app.failures() == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "todo_core=debug,todo_cli=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
