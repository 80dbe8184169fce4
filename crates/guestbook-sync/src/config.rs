use std::path::{Path, PathBuf};
use std::time::Duration;

use guestbook_remote::{Encoding, HttpRemote};
use serde::{Deserialize, Serialize};

use crate::error::SyncError;
use crate::sync::SubmitPolicy;

/// Shape of the config file written by this build.
const CURRENT_VERSION: u32 = 1;

const APP_DIR: &str = "guestbook";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const CACHE_FILE_NAME: &str = "engagement_wishes.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestbookConfig {
    /// Missing on hand-written files.
    #[serde(default)]
    pub config_version: u32,
    /// Remote endpoint URL. Empty until configured.
    #[serde(default)]
    pub endpoint: String,
    /// Local cache file. `None` means `<cache dir>/guestbook/engagement_wishes.json`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cache_path: Option<PathBuf>,
    #[serde(default = "default_refresh_secs")]
    pub refresh_interval_secs: u64,
    #[serde(default = "default_rotation_secs")]
    pub rotation_interval_secs: u64,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_primary")]
    pub primary_encoding: Encoding,
    #[serde(default = "default_fallback")]
    pub fallback_encoding: Option<Encoding>,
}

fn default_refresh_secs() -> u64 {
    30
}

fn default_rotation_secs() -> u64 {
    5
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_primary() -> Encoding {
    Encoding::Json
}

fn default_fallback() -> Option<Encoding> {
    Some(Encoding::Form)
}

impl Default for GuestbookConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            endpoint: String::new(),
            cache_path: None,
            refresh_interval_secs: default_refresh_secs(),
            rotation_interval_secs: default_rotation_secs(),
            request_timeout_secs: default_timeout_secs(),
            primary_encoding: default_primary(),
            fallback_encoding: default_fallback(),
        }
    }
}

impl GuestbookConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn rotation_interval(&self) -> Duration {
        Duration::from_secs(self.rotation_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn submit_policy(&self) -> SubmitPolicy {
        SubmitPolicy {
            primary: self.primary_encoding,
            fallback: self.fallback_encoding,
        }
    }

    pub fn validate(&self) -> Result<(), SyncError> {
        if self.endpoint.trim().is_empty() {
            return Err(SyncError::Config("no endpoint configured".to_string()));
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(SyncError::Config(format!(
                "endpoint must be an http(s) URL, got {:?}",
                self.endpoint
            )));
        }
        for (field, value) in [
            ("refresh_interval_secs", self.refresh_interval_secs),
            ("rotation_interval_secs", self.rotation_interval_secs),
            ("request_timeout_secs", self.request_timeout_secs),
        ] {
            if value == 0 {
                return Err(SyncError::Config(format!("{field} must be greater than 0")));
            }
        }
        Ok(())
    }

    pub fn resolved_cache_path(&self) -> Result<PathBuf, SyncError> {
        match &self.cache_path {
            Some(path) => Ok(path.clone()),
            None => {
                let base = dirs::cache_dir()
                    .ok_or_else(|| SyncError::Config("no cache directory found".to_string()))?;
                Ok(base.join(APP_DIR).join(CACHE_FILE_NAME))
            }
        }
    }

    /// HTTP client for the configured endpoint.
    pub fn http_remote(&self) -> Result<HttpRemote, SyncError> {
        self.validate()?;
        Ok(HttpRemote::new(self.endpoint.clone(), self.request_timeout()))
    }
}

pub fn default_config_path() -> Result<PathBuf, SyncError> {
    let base = dirs::config_dir()
        .ok_or_else(|| SyncError::Config("no config directory found".to_string()))?;
    Ok(base.join(APP_DIR).join(CONFIG_FILE_NAME))
}

/// Read a config file. A file without `config_version` is taken to be
/// hand-written in the current shape; a newer version is refused.
pub fn load_config(path: &Path) -> Result<GuestbookConfig, SyncError> {
    let contents = std::fs::read(path).map_err(|e| {
        SyncError::Config(format!("failed to read config at {}: {e}", path.display()))
    })?;
    let mut config: GuestbookConfig = serde_json::from_slice(&contents)?;

    match config.config_version {
        0 => config.config_version = CURRENT_VERSION,
        CURRENT_VERSION => {}
        newer => {
            return Err(SyncError::Config(format!(
                "{} has config_version {newer}, this build reads up to {CURRENT_VERSION}",
                path.display()
            )));
        }
    }
    Ok(config)
}

/// Missing file means defaults; anything else unreadable is an error.
pub fn load_or_default(path: &Path) -> Result<GuestbookConfig, SyncError> {
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Ok(GuestbookConfig::default())
    }
}

/// Write the config owner-readable only, replacing any previous file in one
/// rename.
pub fn save_config(path: &Path, config: &GuestbookConfig) -> Result<(), SyncError> {
    let json = serde_json::to_vec_pretty(&GuestbookConfig {
        config_version: CURRENT_VERSION,
        ..config.clone()
    })?;

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let tmp_path = path.with_extension("json.tmp");
    {
        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        std::os::unix::fs::OpenOptionsExt::mode(&mut options, 0o600);
        let mut file = options.open(&tmp_path)?;
        std::io::Write::write_all(&mut file, &json)?;
        file.sync_all()?;
    }
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
