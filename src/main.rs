//! pdf-slides-server - Entry point

use clap::{Parser, Subcommand};
use pdf_slides_server::handlers::event::{self, Event};
use pdf_slides_server::{run_server, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "pdf-slides-server",
    version,
    about = "Turn base64-encoded PDFs into JSON slide decks"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve,
    /// Read one event mapping from stdin and print the handler response
    Invoke,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdf_slides_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let config = Config::from_env();
            tracing::info!("Starting pdf-slides-server");
            run_server(config).await
        }
        Command::Invoke => invoke(),
    }
}

/// Local analog of a function runtime's invocation loop: one event in, one
/// response out. A handler error exits nonzero through the anyhow boundary,
/// which is this binary's version of an unhandled invocation fault.
fn invoke() -> anyhow::Result<()> {
    let event: Event = serde_json::from_reader(std::io::stdin().lock())?;
    let response = event::handle(&event)?;
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
