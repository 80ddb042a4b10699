use crate::error::{Result, SharpRenderError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub user_id: Option<String>,
    pub poll_interval_seconds: u64,
    pub poll_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            user_id: None,
            poll_interval_seconds: 2,
            poll_timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SharpRenderError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("sharprender").join("config.json"))
    }

    pub fn get_base_url(&self) -> String {
        // 環境変数を優先
        if let Ok(base) = std::env::var("SHARPRENDER_API_BASE") {
            return base;
        }

        self.base_url.clone()
    }

    pub fn get_user_id(&self) -> Result<String> {
        if let Ok(id) = std::env::var("SHARPRENDER_USER_ID") {
            return Ok(id);
        }

        self.user_id.clone().ok_or(SharpRenderError::MissingUserId)
    }

    pub fn set_user_id(&mut self, id: String) -> Result<()> {
        self.user_id = Some(id);
        self.save()
    }

    pub fn set_base_url(&mut self, base_url: String) -> Result<()> {
        self.base_url = base_url;
        self.save()
    }
}
