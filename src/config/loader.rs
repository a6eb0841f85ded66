//! Config file loading

use super::MergeConfig;
use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};

/// Environment variables with this prefix override file settings,
/// e.g. `INI_MERGE_NO_OVERRIDE=true`.
pub const ENV_PREFIX: &str = "INI_MERGE_";

const CANDIDATES: &[&str] =
    &["ini-merge.toml", ".ini-merge.toml", "ini-merge.yaml", ".ini-merge.yaml", ".ini-merge.yml"];

pub fn load_config(base_dir: &Path, config_path: Option<&Path>) -> Result<MergeConfig> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(base_dir),
    };

    let defaults = Figment::from(Serialized::defaults(MergeConfig::default()));
    let figment = match discovered {
        None => defaults,
        Some(config_file) => match with_config_file(defaults.clone(), &config_file) {
            Ok(layered) => layered,
            Err(e) if !config_path_provided => {
                // Auto-discovered: warn and fall back to defaults
                tracing::warn!(
                    "Ignoring auto-discovered config {}: {:#}",
                    config_file.display(),
                    e
                );
                defaults
            }
            Err(e) => return Err(e),
        },
    };

    figment
        .merge(Env::prefixed(ENV_PREFIX))
        .extract::<MergeConfig>()
        .context("Invalid configuration in environment")
}

/// Layer `config_file` over `base` and validate the result eagerly so that
/// syntax and type errors are attributed to the file.
fn with_config_file(base: Figment, config_file: &Path) -> Result<Figment> {
    if !config_file.is_file() {
        anyhow::bail!("Config file not found: {}", config_file.display());
    }

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    let layered = match ext.as_str() {
        "toml" => base.merge(Toml::file(config_file)),
        "yaml" | "yml" => base.merge(Yaml::file(config_file)),
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    };

    layered
        .extract::<MergeConfig>()
        .with_context(|| format!("Invalid config file: {}", config_file.display()))?;
    tracing::debug!("Loaded config from {}", config_file.display());
    Ok(layered)
}

fn discover_config(base_dir: &Path) -> Option<PathBuf> {
    CANDIDATES.iter().map(|candidate| base_dir.join(candidate)).find(|path| path.exists())
}
