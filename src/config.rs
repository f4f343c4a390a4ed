use crate::error::{Result, RouteProgressError};
use route_progress_common::ProgressConfig;
use std::path::{Path, PathBuf};

/// 設定ファイル（JSON）の読み書き
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    explicit: bool,
}

impl ConfigStore {
    /// `--config` が指定されていればそのパス、なければ既定の場所
    pub fn locate(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Ok(Self::at(path)),
            None => Ok(Self {
                path: Self::default_path()?,
                explicit: false,
            }),
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            explicit: true,
        }
    }

    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(RouteProgressError::HomeDirNotFound)?;
        Ok(home.join(".config").join("route-progress").join("config.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// 設定を読み込んで検証する
    ///
    /// 既定の場所にファイルがなければ既定値。明示したパスがなければエラー。
    pub fn load(&self) -> Result<ProgressConfig> {
        if !self.exists() {
            if self.explicit {
                return Err(RouteProgressError::ConfigNotFound(self.path.display().to_string()));
            }
            tracing::debug!(path = %self.path.display(), "config file not found, using defaults");
            return Ok(ProgressConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let config = ProgressConfig::from_json(&content)?;
        config.validate()?;
        tracing::debug!(path = %self.path.display(), "config loaded");
        Ok(config)
    }

    pub fn save(&self, config: &ProgressConfig) -> Result<()> {
        config.validate()?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
