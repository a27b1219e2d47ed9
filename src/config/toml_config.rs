use crate::core::seed::{default_seed_inputs, DEFAULT_MENU_TITLE};
use crate::core::ConfigProvider;
use crate::domain::model::RawEntryInput;
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_path, Validate, LOG_LEVELS,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    pub menu: MenuInfo,
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
    #[serde(default)]
    pub items: Vec<RawEntryInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuInfo {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            menu: MenuInfo {
                title: DEFAULT_MENU_TITLE.to_string(),
            },
            logging: None,
            items: default_seed_inputs(),
        }
    }
}

impl MenuConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        validate_path("config", &path.as_ref().to_string_lossy())?;
        let content = std::fs::read_to_string(&path).map_err(|e| MenuError::ConfigError {
            message: format!("{}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MenuError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MENU_TITLE})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MenuError::ConfigError {
            message: format!("env placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("menu.title", &self.menu.title)?;

        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl ConfigProvider for MenuConfig {
    fn menu_title(&self) -> &str {
        &self.menu.title
    }

    fn seed_items(&self) -> &[RawEntryInput] {
        &self.items
    }
}

impl Validate for MenuConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
