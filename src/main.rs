use anyhow::{bail, Context as _, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;
use update_dependencies::Config;

//────────────────── main
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::global();

    let missing = config.missing_required();
    if !missing.is_empty() {
        bail!("missing required environment variables: {}", missing.join(", "));
    }

    let summary = config.summary().context("Failed to resolve configuration")?;
    info!(
        "Updating {}/{} ({}) as {}",
        summary.github_upstream_owner,
        summary.github_project,
        summary.github_upstream_branch,
        summary.user_name
    );

    let json = serde_json::to_string_pretty(&summary).context("Failed to serialize configuration")?;
    println!("{json}");
    Ok(())
}
