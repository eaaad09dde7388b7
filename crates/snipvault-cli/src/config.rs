use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use snipvault_core::storage_keys;
use snipvault_storage::state::CollectionKeys;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnipvaultConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Directory holding the key-value store.
    pub data_dir: PathBuf,
    /// Key the snippet collection is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Older keys to migrate from. Added in v1.
    #[serde(default)]
    pub legacy_keys: Vec<String>,
}

fn default_storage_key() -> String {
    storage_keys::COLLECTION.to_string()
}

impl SnipvaultConfig {
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_dir: data_dir.into(),
            storage_key: default_storage_key(),
            legacy_keys: storage_keys::legacy_collections(),
        }
    }

    /// Defaults rooted in the platform data directory.
    pub fn defaults() -> eyre::Result<Self> {
        Ok(Self::with_data_dir(default_data_dir()?))
    }

    pub fn collection_keys(&self) -> CollectionKeys {
        CollectionKeys {
            current: self.storage_key.clone(),
            legacy: self.legacy_keys.clone(),
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("snipvault"))
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn default_data_dir() -> eyre::Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
    Ok(base.join("snipvault"))
}

/// Load the config at `path`, or platform defaults if there is no file yet.
pub fn load_config(path: &Path) -> eyre::Result<SnipvaultConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return SnipvaultConfig::defaults();
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = match json.get("config_version") {
        None | Some(serde_json::Value::Null) => 0,
        Some(v) => v
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| eyre::eyre!("config_version {v} is not a valid version number"))?,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: SnipvaultConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update snipvault."
        ));
    }

    // v0 → v1: add legacy_keys so pre-versioned stores still pick up old data
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("legacy_keys").or_insert_with(|| {
            serde_json::Value::Array(
                storage_keys::LEGACY_COLLECTIONS
                    .iter()
                    .map(|k| serde_json::Value::String(k.to_string()))
                    .collect(),
            )
        });
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added legacy_keys)");
    }

    Ok(json)
}

/// Write the config atomically, stamped with the current version.
pub fn save_config(path: &Path, config: &SnipvaultConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
