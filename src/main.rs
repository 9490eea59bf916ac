use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use cookbook::{service, Cookbook, CookbookConfig, InMemoryRecipeStore};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "cookbook")]
#[command(author, version, about = "Recipe CRUD service guarded by basic auth", long_about = None)]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address, overrides the config file
    #[arg(short, long)]
    bind: Option<String>,

    /// Start with an empty store instead of the demo recipes
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = CookbookConfig::load(args.config.as_deref())?;

    let bind = args.bind.unwrap_or(config.server.bind);
    let store = if config.store.seed && !args.no_seed {
        InMemoryRecipeStore::seeded()
    } else {
        InMemoryRecipeStore::new()
    };
    info!(users = config.auth.users.len(), "starting cookbook");

    let cookbook = Arc::new(Cookbook::new(store, config.auth.users));
    service::serve(cookbook, &bind)
        .await
        .with_context(|| format!("Failed to serve on {bind}"))?;

    Ok(())
}
