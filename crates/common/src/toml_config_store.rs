use std::fs;
use std::path::{Path, PathBuf};

use dcrdesk_schema::conf::config_store::ConfigStore;
use dcrdesk_schema::config_data::ConfigData;
use dcrdesk_schema::{DcResult, ErrorCode, ErrorInfoContext, OptionContext};
use log::{debug, info};

use crate::log::Loggable;

pub const APP_DIR_NAME: &str = "dcrdesk";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub fn default_config_path() -> DcResult<PathBuf> {
    let dir = dirs::config_dir().ok_code(ErrorCode::IoFailure, "No config directory for this platform")?;
    Ok(dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Config store persisted as a single TOML file, rewritten on every save.
#[derive(Clone, Debug)]
pub struct TomlConfigStore {
    path: PathBuf,
    config: ConfigData,
}

impl TomlConfigStore {
    pub fn load(path: impl AsRef<Path>) -> DcResult<Self> {
        let path = path.as_ref().to_path_buf();
        let config = if path.exists() {
            let contents = fs::read_to_string(&path)
                .error_msg(ErrorCode::IoFailure, format!("Reading config {}", path.display()))?;
            toml::from_str::<ConfigData>(&contents)
                .error_msg(ErrorCode::ParseFailure, format!("Parsing config {}", path.display()))?
        } else {
            info!("No config at {}, starting from defaults", path.display());
            ConfigData::default()
        };
        Ok(Self { path, config })
    }

    pub fn config(&self) -> &ConfigData {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn persist(&self) -> DcResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .error_msg(ErrorCode::IoFailure, format!("Creating config dir {}", parent.display()))?;
        }
        let contents = toml::to_string(&self.config).error_msg(ErrorCode::ParseFailure, "Serializing config")?;
        fs::write(&self.path, contents)
            .error_msg(ErrorCode::IoFailure, format!("Writing config {}", self.path.display()))?;
        debug!("Persisted config to {}", self.path.display());
        Ok(())
    }
}

impl ConfigStore for TomlConfigStore {
    fn read_string_config_value_for_key(&self, key: &str) -> String {
        self.config.user.get(key).cloned().unwrap_or_default()
    }

    fn save_user_config_value(&mut self, key: &str, value: &str) {
        self.config.user.insert(key.to_string(), value.to_string());
        let _ = self.persist().log_error();
    }
}
