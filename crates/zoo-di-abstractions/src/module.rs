//! 提供者声明模块抽象接口

use zoo_common::DependencyError;

use crate::registration::RegistryBinder;

/// 提供者声明模块 trait
///
/// 一个模块是 (能力类型, 限定符) 到提供者工厂的一组静态声明，
/// 在注入器构建时被装配进注册表，之后不再变更。
pub trait ProvisionModule: Send + Sync {
    /// 模块名称
    fn name(&self) -> &'static str;

    /// 向注册表绑定本模块声明的全部提供者
    fn configure(&self, binder: &mut dyn RegistryBinder) -> Result<(), DependencyError>;
}
