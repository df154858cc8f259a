use std::path::Path;

use anyhow::Context;
use tally_config::TallyConfig;
use tally_pipeline::{CleanOptions, RenderOptions};

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_top_n;

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<TallyConfig> {
    load_dotenv()?;

    if let Some(path) = flags.config.as_deref() {
        anyhow::ensure!(
            path.is_file(),
            "config file '{}' does not exist",
            path.display()
        );
    }

    let config = TallyConfig::load_with_file(flags.config.as_deref())?;
    tracing::debug!(
        identity_column = %config.pipeline.identity_column_id,
        top_n = config.render.top_n,
        "loaded configuration"
    );
    Ok(config)
}

fn load_dotenv() -> anyhow::Result<()> {
    let env_path = Path::new(".env");
    if env_path.exists() {
        dotenvy::from_path(env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

#[must_use]
pub fn clean_options(config: &TallyConfig) -> CleanOptions {
    CleanOptions {
        identity_column_id: config.pipeline.identity_column_id.clone(),
        error_sentinel: config.pipeline.error_sentinel.clone(),
    }
}

#[must_use]
pub fn render_options(
    config: &TallyConfig,
    top_n: Option<usize>,
    flags: &GlobalFlags,
) -> RenderOptions {
    RenderOptions {
        top_n: effective_top_n(top_n, flags.limit, config.render.top_n),
        generic_columns: config.render.generic_columns,
    }
}
