// Main entry point for the song query assistant

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use music_server::{build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "music-server")]
#[command(about = "Answer song questions in Hindi or English")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer one query and print the result
    Ask {
        query: String,

        /// Print the full response as JSON instead of the display text
        #[arg(long)]
        json: bool,
    },

    /// Run the HTTP server
    Serve {
        /// Overrides PORT
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,music_query=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        model = %config.assistant.model,
        policy = ?config.assistant.info_policy,
        "Configuration loaded"
    );

    let assistant = config
        .build_assistant()
        .context("Failed to build assistant")?;

    match cli.command {
        Commands::Ask { query, json } => {
            let response = assistant.handle_query(&query).await;
            if json {
                let rendered = serde_json::to_string_pretty(&response)
                    .context("Failed to serialize response")?;
                println!("{rendered}");
            } else {
                println!("{}", response.formatted_response);
            }
        }
        Commands::Serve { port } => {
            let app = build_app(Arc::new(assistant));

            let addr = format!("0.0.0.0:{}", port.unwrap_or(config.port));
            tracing::info!("Starting server on {}", addr);

            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .context("Failed to bind to address")?;

            axum::serve(listener, app)
                .await
                .context("Server error")?;
        }
    }

    Ok(())
}
