//! 应用配置
//!
//! 支持 TOML 和 JSON 两种配置文件格式；文件不存在时使用默认值。

use std::path::Path;

use serde::{Deserialize, Serialize};
use zoo_common::{ConfigError, ConfigResult};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 应用名称
    pub name: String,
    /// 日志级别
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "zoo-app".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// 从配置文件加载应用配置
pub fn load_config<P: AsRef<Path>>(path: P) -> ConfigResult<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path)?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => parse_toml(&content),
        Some("json") => parse_json(&content),
        _ => Err(ConfigError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

fn parse_toml(content: &str) -> ConfigResult<AppConfig> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError {
        message: e.to_string(),
    })
}

fn parse_json(content: &str) -> ConfigResult<AppConfig> {
    serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.name, "zoo-app");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parse_toml_config() {
        let config = parse_toml("name = \"demo\"\nlog_level = \"debug\"\n").unwrap();
        assert_eq!(config.name, "demo");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_parse_json_config() {
        let config = parse_json(r#"{ "name": "demo" }"#).unwrap();
        assert_eq!(config.name, "demo");
        // 缺省字段回落到默认值
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parse_error_is_reported() {
        let result = parse_toml("name = ");
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let result = load_config("does/not/exist.toml");
        assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
    }
}
