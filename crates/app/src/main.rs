//! `aaea`: site backend server + seed tooling.

use anyhow::Context;
use axum::body::Body;
use clap::{Parser, Subcommand};
use sqlx::SqlitePool;
use std::{net::SocketAddr, path::PathBuf};
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
use tracing_subscriber::EnvFilter;

use app::{router, state::AppState};

#[derive(Parser)]
#[command(name = "aaea", version, about = "AAEA site backend (server + seed tooling)")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Run the HTTP server
    Serve {
        /// Bind address, e.g. 127.0.0.1:8080
        #[arg(long, default_value = "127.0.0.1:8080")]
        bind: String,

        #[arg(long, env = "AAEA_DATABASE_URL", default_value = "data/site.db")]
        database_url: String,

        /// Directory of session records (<sha256(token)>.toml)
        #[arg(long, env = "AAEA_AUTH_DIR", default_value = ".auth")]
        auth_dir: PathBuf,
    },

    /// Bring the database to the seeded baseline (migrate + seed), then exit
    Seed {
        #[arg(long, env = "AAEA_DATABASE_URL", default_value = "data/site.db")]
        database_url: String,
    },

    /// Destroy all sliders and rebuild the fixed template (deliberate resync)
    ResetSliders {
        #[arg(long, env = "AAEA_DATABASE_URL", default_value = "data/site.db")]
        database_url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Serve {
            bind,
            database_url,
            auth_dir,
        } => run_serve(bind, database_url, auth_dir).await,
        Cmd::Seed { database_url } => {
            if let Err(err) = run_seed(&database_url).await {
                tracing::error!(error = ?err, "seed failed");
                std::process::exit(1);
            }
            Ok(())
        }
        Cmd::ResetSliders { database_url } => {
            if let Err(err) = run_reset_sliders(&database_url).await {
                tracing::error!(error = ?err, "slider reset failed");
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

#[tracing::instrument(skip_all)]
async fn run_serve(bind: String, database_url: String, auth_dir: PathBuf) -> anyhow::Result<()> {
    let pool = infra::db::connect(&database_url).await?;
    let state = AppState::new(pool.clone(), auth_dir);

    let routes = router::build(state.clone());
    // Normalize paths BEFORE routing so "/admin/contact-info/" matches too.
    let routes = NormalizePathLayer::trim_trailing_slash().layer(routes);
    let svc = axum::ServiceExt::<axum::http::Request<Body>>::into_make_service(routes);

    let addr: SocketAddr = bind.parse().context("invalid --bind address")?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    // Finish startup in the background; the readiness gate serves the
    // maintenance fallback until this flips the flag.
    tokio::spawn(async move {
        match init_db(&pool).await {
            Ok(()) => {
                state.set_ready();
                tracing::info!("startup complete, serving");
            }
            Err(err) => tracing::error!(error = ?err, "startup initialization failed"),
        }
    });

    axum::serve(listener, svc).await?;
    Ok(())
}

async fn init_db(pool: &SqlitePool) -> anyhow::Result<()> {
    infra::db::migrate::run(pool).await?;
    infra::db::health::ready(pool).await
}

#[tracing::instrument(skip_all)]
async fn run_seed(database_url: &str) -> anyhow::Result<()> {
    let pool = infra::db::connect(database_url).await?;
    infra::db::migrate::run(&pool).await?;
    infra::db::seed::run(&pool).await
}

#[tracing::instrument(skip_all)]
async fn run_reset_sliders(database_url: &str) -> anyhow::Result<()> {
    let pool = infra::db::connect(database_url).await?;
    infra::db::migrate::run(&pool).await?;
    infra::db::seed::reset_sliders(&pool).await
}
