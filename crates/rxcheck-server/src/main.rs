use anyhow::Result;
use clap::{Parser, Subcommand};
use rxcheck_config::ConfigLoader;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path
    #[arg(short, long, default_value = "rxcheck.toml")]
    config: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Create the rules table and pair index
    InitDb,
    /// Load the built-in reference interaction rules
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = ConfigLoader::new(&args.config).load()?;

    rxcheck_server::init_logging(&config.logging)?;
    tracing::info!("Starting RXCHECK with config: {}", args.config);

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => rxcheck_server::serve(config).await?,
        Command::InitDb => {
            rxcheck_server::init_db(&config).await?;
            tracing::info!("Database initialized");
        }
        Command::Seed => {
            let count = rxcheck_server::seed(&config).await?;
            tracing::info!(count, "Database seeded");
        }
    }

    Ok(())
}
