//! HTTP server command
//!
//! Opens the book store (PostgreSQL or in-memory) and runs the API server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use library_server::db::{create_pool_with_options, migrations, DEFAULT_MAX_CONNECTIONS};
use library_server::{run_server, BookStore, Environment, MemoryBookStore, PgBookStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "LIBRARY_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Deployment environment; sample books are seeded outside production
    #[arg(long, env = "LIBRARY_ENV", default_value_t = Environment::Development)]
    pub environment: Environment,

    /// Serve from process memory instead of PostgreSQL (ignores --database-url)
    #[arg(long)]
    pub in_memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let seed = args.environment.seeds_sample_data();
    tracing::info!(environment = %args.environment, seed, "Starting library server");

    let books: Arc<dyn BookStore> = if args.in_memory {
        tracing::warn!("Using in-memory store; data is lost on shutdown");
        if seed {
            Arc::new(MemoryBookStore::seeded())
        } else {
            Arc::new(MemoryBookStore::new())
        }
    } else {
        let database_url = args
            .database_url
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.library/.env")?;
        Arc::new(open_pg_store(&database_url, args.max_connections, seed).await?)
    };

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(books, config).await.context("Server error")?;

    Ok(())
}

async fn open_pg_store(database_url: &str, max_connections: u32, seed: bool) -> Result<PgBookStore> {
    let pool = create_pool_with_options(database_url, max_connections)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to create books table")?;

    if seed {
        migrations::seed(&pool)
            .await
            .context("Failed to seed sample books")?;
    }

    Ok(PgBookStore::new(pool))
}
