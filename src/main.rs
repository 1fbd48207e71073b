//! # AdBoard Seeder Entry Point
//!
//! Admin command for populating and wiping demo data in local and staging
//! environments.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use migration::{Migrator, MigratorTrait};

use adboard_seeder::config::ConfigLoader;
use adboard_seeder::db;
use adboard_seeder::logging;
use adboard_seeder::seeds::{SeedGenerator, SeedPolicy};

#[derive(Parser)]
#[command(name = "adboard-seeder", about = "Demo-data seeder for the AdBoard admin backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Populate demo channels, payments and integrations
    Seed {
        /// Abort on the first failing step instead of logging and continuing
        #[arg(long)]
        strict: bool,
    },
    /// Delete all seeded rows, children before parents
    Clear,
    /// Clear everything, then seed from scratch
    Reset {
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::new().load().context("loading configuration")?;
    logging::init_subscriber(&config);

    log::info!("Loaded configuration for profile: {}", config.profile);
    if let Ok(redacted_json) = config.redacted_json() {
        log::debug!("Configuration: {}", redacted_json);
    }

    let db = db::init_pool(&config)
        .await
        .context("initializing database connection pool")?;
    Migrator::up(&db, None).await.context("applying migrations")?;

    let generator = SeedGenerator::with_database(Arc::new(db));

    match cli.command {
        Command::Seed { strict } => {
            generator.generate_seeds(policy(strict)).await?;
        }
        Command::Clear => {
            generator.clear_all_data().await?;
        }
        Command::Reset { strict } => {
            generator.clear_all_data().await?;
            generator.generate_seeds(policy(strict)).await?;
        }
    }

    Ok(())
}

fn policy(strict: bool) -> SeedPolicy {
    if strict {
        SeedPolicy::Strict
    } else {
        SeedPolicy::BestEffort
    }
}
