//! 提供者注册信息
//!
//! 将类型化的工厂函数擦除为统一的注册条目，供注册表存储。

use std::any::Any;
use std::sync::Arc;

use zoo_common::{DependencyError, Lifetime, ProviderDescriptor, Qualifier};

use crate::provider::{ProviderSource, ProvisionKey};

/// 提供者工厂函数类型
///
/// 工厂接收注册表自身，以便解析它声明的依赖。
pub type ProviderFn = Arc<
    dyn Fn(&(dyn ProviderSource + 'static)) -> Result<Arc<dyn Any + Send + Sync>, DependencyError>
        + Send
        + Sync,
>;

/// 提供者注册信息
#[derive(Clone)]
pub struct ProviderRegistration {
    /// 提供键
    key: ProvisionKey,
    /// 提供者描述符
    descriptor: ProviderDescriptor,
    /// 声明的依赖键，启动时验证
    dependencies: Vec<ProvisionKey>,
    /// 提供者工厂
    factory: ProviderFn,
}

impl ProviderRegistration {
    /// 创建新的提供者注册信息
    ///
    /// `T` 是注册的能力类型，`Q` 是消歧用的限定符标签。
    pub fn new<T, Q, F>(lifetime: Lifetime, factory: F) -> Self
    where
        T: Send + Sync + 'static,
        Q: Qualifier,
        F: Fn(&(dyn ProviderSource + 'static)) -> Result<T, DependencyError> + Send + Sync + 'static,
    {
        let erased: ProviderFn = Arc::new(move |source| {
            let instance = factory(source)?;
            Ok(Arc::new(instance) as Arc<dyn Any + Send + Sync>)
        });

        Self {
            key: ProvisionKey::of::<T, Q>(),
            descriptor: ProviderDescriptor::new::<T>(Q::name(), lifetime),
            dependencies: Vec::new(),
            factory: erased,
        }
    }

    /// 声明一个依赖键
    ///
    /// 声明过的依赖参与注入器构建时的完整性验证。
    pub fn with_dependency<T, Q>(mut self) -> Self
    where
        T: Send + Sync + 'static,
        Q: Qualifier,
    {
        self.dependencies.push(ProvisionKey::of::<T, Q>());
        self
    }

    /// 提供键
    pub fn key(&self) -> &ProvisionKey {
        &self.key
    }

    /// 提供者描述符
    pub fn descriptor(&self) -> &ProviderDescriptor {
        &self.descriptor
    }

    /// 声明的依赖键
    pub fn dependencies(&self) -> &[ProvisionKey] {
        &self.dependencies
    }

    /// 生命周期
    pub fn lifetime(&self) -> Lifetime {
        self.descriptor.lifetime
    }

    /// 提供者工厂
    pub fn factory(&self) -> &ProviderFn {
        &self.factory
    }
}

impl std::fmt::Debug for ProviderRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistration")
            .field("key", &self.key)
            .field("descriptor", &self.descriptor)
            .field("dependencies", &self.dependencies)
            .field("factory", &"<function>")
            .finish()
    }
}

/// 提供者绑定 trait
///
/// 注册表实现此接口；模块在装配阶段通过它绑定提供者。
pub trait RegistryBinder {
    /// 绑定一个提供者注册信息
    fn bind(&mut self, registration: ProviderRegistration) -> Result<(), DependencyError>;
}
