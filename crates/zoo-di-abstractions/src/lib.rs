//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义提供者注册和依赖解析的核心接口。
//!
//! ## 核心接口
//!
//! - [`ProviderSource`] - 依赖解析接口
//! - [`RegistryBinder`] - 提供者绑定接口
//! - [`ProvisionModule`] - 提供者声明模块接口
//! - [`ProviderRegistration`] - 类型擦除的提供者注册信息

pub mod module;
pub mod provider;
pub mod registration;

pub use module::*;
pub use provider::*;
pub use registration::*;
