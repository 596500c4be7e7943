use clap::Parser;

mod cli;
mod commands;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("tappr error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    match &cli.command {
        cli::Commands::Bank { action } => commands::bank::handle(action),
        cli::Commands::Health => commands::bank::health(),
        cli::Commands::Sessions { action } => {
            let service = open_service(cli.database.as_deref()).await?;
            commands::sessions::handle(action, &service).await
        }
        cli::Commands::Cards { action } => {
            let service = open_service(cli.database.as_deref()).await?;
            commands::cards::handle(action, &service).await
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TAPPR_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

async fn open_service(
    database_override: Option<&str>,
) -> anyhow::Result<tappr_db::service::TapprService> {
    let config = tappr_config::TapprConfig::load_with_dotenv()?;
    let db_path = database_override.unwrap_or(&config.database.path);

    tappr_db::service::TapprService::new_local(db_path, &config.general)
        .await
        .map_err(|error| anyhow::anyhow!("failed to open database at {db_path}: {error}"))
}
