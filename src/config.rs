use crate::error::{Result, SookshmaError};
use serde::{Deserialize, Serialize};
use sookshma_common::Language;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 農家向け表示の既定言語
    pub language: Language,
    /// 乱数シード（未設定ならランダム）
    pub seed: Option<u64>,
    /// 擬似処理ディレイを入れるか
    pub simulate_delay: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::En,
            seed: None,
            simulate_delay: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %path.display(), "config loaded");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
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
            .ok_or_else(|| SookshmaError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("sookshma").join("config.json"))
    }
}
