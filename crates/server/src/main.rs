//! Catalog Server
//!
//! Command-line front end for the product catalog: list and add products
//! against the remote store, host a catalog session as a JSON API, or run a
//! local stand-in for the remote store.

mod api;
mod cli;

use anyhow::Context;
use catalog_core::{Catalog, CatalogConfig, HttpProductStore, InMemoryProductStore, ProductStore, SortKey};
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, sync::Mutex};
use tracing_subscriber::EnvFilter;

pub type CatalogSession = Catalog<Arc<dyn ProductStore>>;

/// Catalog session shared by the JSON API
pub type SharedCatalog = Arc<Mutex<CatalogSession>>;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: SharedCatalog,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>, config: &CatalogConfig) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(Catalog::with_config(store, config))),
        }
    }
}

#[derive(Parser, Clone)]
#[command(author, version, about = "Catalog - browse and add products")]
struct Args {
    /// Base URL of the product store (overrides CATALOG_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Clone)]
enum CliCommand {
    /// Print the product list
    List {
        /// Filter by name (case-insensitive) or id
        #[arg(short, long, default_value = "")]
        search: String,
        /// Sort key: id, name or selling_price
        #[arg(long, default_value = "id")]
        sort: SortKey,
        /// Sort descending
        #[arg(long)]
        desc: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Create a product on the store
    Add(cli::AddArgs),
    /// Serve a catalog session as a JSON API
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
    /// Run an in-memory product store at /api/products
    Mock {
        /// Port to listen on
        #[arg(short, long, default_value = "3001")]
        port: u16,
        /// Start with a few sample products
        #[arg(long)]
        seed: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &Args) -> anyhow::Result<CatalogConfig> {
    let config = CatalogConfig::from_env().context("Invalid catalog configuration")?;
    Ok(match &args.api_url {
        Some(url) => config.with_base_url(url.clone()),
        None => config,
    })
}

async fn run_server(config: CatalogConfig, port: u16) -> anyhow::Result<()> {
    let store: Arc<dyn ProductStore> = Arc::new(HttpProductStore::new(&config)?);
    let app = api::catalog::catalog_app(AppState::new(store, &config));

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!(%addr, store = %config.products_url(), "Catalog server running");
    tracing::info!("Routes: /api/v1/catalog, /search, /sort, /reload, /draft, /draft/submit, /health");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn run_mock(port: u16, seed: bool) -> anyhow::Result<()> {
    let store = if seed {
        InMemoryProductStore::seeded(catalog_core::store::memory::sample_products())
    } else {
        InMemoryProductStore::new()
    };
    let app = api::mock_store::mock_routes(Arc::new(store));

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!(%addr, seed, "Mock product store running at /api/products");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();
    init_tracing();

    let args = Args::parse();
    let config = load_config(&args)?;

    match args.command {
        CliCommand::List {
            search,
            sort,
            desc,
            json,
        } => cli::list(&config, &search, sort, desc, json).await,
        CliCommand::Add(add) => cli::add(&config, add).await,
        CliCommand::Serve { port } => run_server(config, port).await,
        CliCommand::Mock { port, seed } => run_mock(port, seed).await,
    }
}
