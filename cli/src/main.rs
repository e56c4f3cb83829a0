//! CLI entrypoint for in.orbit
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use inorbit_application::{GoalStore, SubmitGoalUseCase, SubmitOutcome};
use inorbit_domain::GoalForm;
use inorbit_infrastructure::{
    ConfigLoader, FileConfig, HttpGoalApi, InMemoryQueryCache, PgGoalStore,
};
use inorbit_presentation::{
    ApiState, Cli, Command, ConsoleFormatter, ConsoleToaster, HttpServer, ServerConfig,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level, RUST_LOG wins when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;
    config.validate()?;

    match cli.command {
        Some(Command::Serve {
            host,
            port,
            no_migrate,
        }) => serve(&config, host, port, no_migrate).await,
        Some(Command::Migrate) => migrate(&config).await,
        Some(Command::Create {
            title,
            frequency,
            api_url,
        }) => create(&config, title, frequency, api_url).await,
        Some(Command::Frequencies) => {
            print!("{}", ConsoleFormatter::frequency_options(&GoalForm::new()));
            Ok(())
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

async fn connect_store(config: &FileConfig) -> Result<PgGoalStore> {
    let url = config.database_url()?;
    Ok(PgGoalStore::connect(url, &config.database).await?)
}

async fn serve(
    config: &FileConfig,
    host: Option<String>,
    port: Option<u16>,
    no_migrate: bool,
) -> Result<()> {
    // === Dependency Injection ===
    let store = connect_store(config).await?;
    if config.database.run_migrations && !no_migrate {
        store.migrate().await?;
    }
    let store: Arc<dyn GoalStore> = Arc::new(store);

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        cors: config.server.cors,
    }
    .with_overrides(host, port);

    let server = HttpServer::bind(&server_config, ApiState::new(store)).await?;
    println!("HTTP server running on http://{}", server.local_addr()?);

    server.serve(shutdown_signal()).await?;
    info!("HTTP server stopped");
    Ok(())
}

async fn migrate(config: &FileConfig) -> Result<()> {
    let store = connect_store(config).await?;
    store.migrate().await?;
    println!("Migrations applied");
    Ok(())
}

async fn create(
    config: &FileConfig,
    title: String,
    frequency: String,
    api_url: Option<String>,
) -> Result<()> {
    let mut client_config = config.client.clone();
    if let Some(url) = api_url {
        client_config.api_url = url;
    }

    // === Dependency Injection ===
    let api = Arc::new(HttpGoalApi::from_config(&client_config)?);
    let cache = Arc::new(InMemoryQueryCache::new());
    let use_case = SubmitGoalUseCase::new(api, cache.clone(), Arc::new(ConsoleToaster));

    let mut form = GoalForm::new();
    form.set_title(title);
    form.set_desired_weekly_frequency(frequency);

    match use_case.submit(&mut form).await {
        SubmitOutcome::Created(goal) => {
            println!("{}", ConsoleFormatter::goal(&goal));
            info!(
                "Stale queries: {}",
                cache
                    .stale_keys()
                    .iter()
                    .map(|k| k.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            Ok(())
        }
        SubmitOutcome::Invalid(_) => {
            eprintln!("{}", ConsoleFormatter::form_errors(&form));
            bail!("Goal was not submitted");
        }
        SubmitOutcome::Failed(e) => bail!(e),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
