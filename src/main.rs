#![warn(clippy::all)]

use anyhow::Context;
use life_patterns::{generate, Catalog, Config};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Config::default();
    let catalog = Catalog::standard().context("invalid pattern catalog")?;
    generate(&config, &catalog).with_context(|| {
        format!(
            "generating assets from {} failed",
            config.patterns_dir.display()
        )
    })?;
    Ok(())
}
