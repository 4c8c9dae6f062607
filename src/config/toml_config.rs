use crate::core::factory::model_types;
use crate::core::registry::KlaviyoTypeRegistry;
use crate::utils::error::{KlaviyoError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub registry: Option<RegistryConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// discriminator → 標準型別 key
    pub aliases: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub pretty: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(KlaviyoError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| KlaviyoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${KLAVIYO_LIST_TYPE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| KlaviyoError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證別名設定
    pub fn validate_config(&self) -> Result<()> {
        let known_types = model_types();

        for (raw, canonical) in self.aliases() {
            validate_non_empty_string("registry.aliases", &raw)?;
            validate_one_of(&format!("registry.aliases.{}", raw), &canonical, &known_types)?;
        }

        Ok(())
    }

    pub fn aliases(&self) -> HashMap<String, String> {
        self.registry
            .as_ref()
            .and_then(|registry| registry.aliases.clone())
            .unwrap_or_default()
    }

    /// 內建別名加上設定檔的別名
    pub fn type_registry(&self) -> KlaviyoTypeRegistry {
        KlaviyoTypeRegistry::with_aliases(self.aliases())
    }

    pub fn pretty_output(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|output| output.pretty)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
