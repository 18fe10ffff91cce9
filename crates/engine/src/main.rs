//! CharForge - Main entry point.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charforge_engine::cli::{self, Command};
use charforge_engine::config::AppConfig;
use charforge_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary is usually run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging. Logs go to stderr; stdout carries the JSON result.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charforge_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    let config = AppConfig::from_env();
    let app = App::from_config(&config)
        .await
        .context("loading reference data")?;

    let result = cli::run(&app, command).await?;
    let failed = !result.is_success();
    println!(
        "{}",
        serde_json::to_string_pretty(&result).context("serializing result")?
    );

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
