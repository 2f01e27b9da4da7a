use crate::domain::model::FieldPair;
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::{validate_fields, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub reference: Option<ReferenceConfig>,
    pub fields: Option<FieldsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferenceConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldsConfig {
    pub positions: Vec<usize>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CheckError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CheckError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ANSWERS_DIR})；未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CheckError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn reference_path(&self) -> Option<&Path> {
        self.reference.as_ref().map(|r| r.path.as_path())
    }

    /// 取得欄位位置；長度不是 2 時回傳錯誤
    pub fn fields(&self) -> Result<Option<FieldPair>> {
        let Some(fields) = &self.fields else {
            return Ok(None);
        };

        match fields.positions.as_slice() {
            [first, second] => Ok(Some(FieldPair::new(*first, *second))),
            other => Err(CheckError::InvalidConfigValueError {
                field: "fields.positions".to_string(),
                value: format!("{:?}", other),
                reason: "Exactly two positions are required".to_string(),
            }),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.reference_path() {
            validate_path("reference.path", path)?;
        }
        if let Some(fields) = self.fields()? {
            validate_fields("fields.positions", fields)?;
        }
        Ok(())
    }
}
