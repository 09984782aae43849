//! 错误类型定义

use thiserror::Error;

/// 依赖注入错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("提供者未注册: {capability} (限定符: {qualifier})")]
    ProviderNotRegistered {
        capability: String,
        qualifier: String,
    },

    #[error("提供者重复注册: {capability} (限定符: {qualifier})")]
    DuplicateProvider {
        capability: String,
        qualifier: String,
    },

    #[error("类型转换失败: {type_name}")]
    TypeMismatch { type_name: String },

    #[error("依赖验证失败: {consumer} 依赖的 {dependency} 没有匹配的提供者")]
    MissingDependency { consumer: String, dependency: String },

    #[error("检测到循环依赖: {dependency_chain}")]
    CircularDependency { dependency_chain: String },
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置文件读取失败: {source}")]
    FileReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("配置解析失败: {message}")]
    ParseError { message: String },

    #[error("不支持的配置格式: {path}")]
    UnsupportedFormat { path: String },
}

/// 结果类型别名
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
