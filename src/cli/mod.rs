use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod chat;
pub mod init;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Initialize the conversation database
    Init {},
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,
    },
    /// Start a chat session in the console
    Chat {
        /// Agent tag selecting the persona (emailmaster, contentgenius,
        /// schedulemaster, devgenius)
        #[arg(long)]
        agent: Option<String>,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Command::Init {} => {
            init::run().await?;
        }
        Command::Serve { host, port } => {
            serve::run(host, port).await;
        }
        Command::Chat { agent } => {
            chat::run(agent).await?;
        }
    }

    Ok(())
}
