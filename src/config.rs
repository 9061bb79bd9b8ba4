use crate::error::{PalsyError, Result};
use crate::types::config::PalsyConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "palsy.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".palsy/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/palsy/config.toml";

/// Loads `palsy.toml` from `root`, layered over the user's global config and
/// under `.palsy/local.toml`. `None` when the project file is absent.
pub fn load_config(root: &Path) -> Result<Option<PalsyConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Config layers in merge order; later layers win key by key.
///
/// A clinic-wide global file can pin `static_rule = "legacy"` while old
/// dashboard exports are reconciled, a project `palsy.toml` sets the
/// report defaults, and `.palsy/local.toml` holds one operator's overrides.
fn layer_paths(root: &Path, global_path: Option<&Path>) -> Vec<PathBuf> {
    global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([root.join(DEFAULT_CONFIG_FILE), root.join(DEFAULT_LOCAL_FILE)])
        .collect()
}

/// The project file gates the stack: global and local layers alone never
/// produce a config.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<PalsyConfig>> {
    let project_path = root.join(DEFAULT_CONFIG_FILE);
    if !project_path.is_file() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    for layer in layer_paths(root, global_path) {
        if layer.is_file() {
            merge_toml(&mut merged, read_layer(&layer)?);
            tracing::debug!(layer = %layer.display(), "merged config layer");
        }
    }

    let cfg: PalsyConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| PalsyError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn read_layer(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| PalsyError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Tables merge recursively; any other value in `overlay` replaces the base.
fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
