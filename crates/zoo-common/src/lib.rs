//! # Zoo Common
//!
//! 这个 crate 提供了 Zoo DI 示例工程的公共 traits 和工具。
//!
//! ## 核心组件
//!
//! - [`Qualifier`] - 限定符标签 trait
//! - [`DependencyError`] - 依赖注入错误类型
//! - [`TypeInfo`] / [`ProviderDescriptor`] - 提供者元数据
//!
//! ## 设计原则
//!
//! - 基于 Rust 类型系统的编译时安全
//! - 注册表一次装配、启动时验证、运行期只读
//! - 同步解析，无挂起点

pub mod errors;
pub mod metadata;
pub mod qualifier;

pub use errors::*;
pub use metadata::*;
pub use qualifier::*;
