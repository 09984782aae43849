//! 注入器根实现
//!
//! 使用建造者模式装配提供者模块，构建时完成依赖图验证，
//! 之后向消费者提供同步的依赖解析和填充。

use std::sync::Arc;

use tracing::{debug, info};
use zoo_common::{DependencyResult, ProviderDescriptor, Qualifier, Unqualified};
use zoo_di_abstractions::{ProviderSource, ProvisionKey, ProvisionModule};

use crate::registry::ProvisionRegistry;

/// 注入器根
///
/// 持有装配完成的注册表，能够填充任何声明了注入点的消费者。
pub struct Injector {
    registry: ProvisionRegistry,
}

impl Injector {
    /// 创建注入器构建器
    pub fn builder() -> InjectorBuilder {
        InjectorBuilder::new()
    }

    fn source(&self) -> &(dyn ProviderSource + 'static) {
        &self.registry
    }

    /// 解析无限定符的能力实例
    pub fn resolve<T>(&self) -> DependencyResult<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        self.source().provide_default::<T>()
    }

    /// 解析带限定符的能力实例
    pub fn resolve_qualified<T, Q>(&self) -> DependencyResult<Arc<T>>
    where
        T: Send + Sync + 'static,
        Q: Qualifier,
    {
        self.source().provide::<T, Q>()
    }

    /// 检查无限定符的能力是否已注册
    pub fn is_registered<T>(&self) -> bool
    where
        T: Send + Sync + 'static,
    {
        self.registry.contains(&ProvisionKey::of::<T, Unqualified>())
    }

    /// 检查带限定符的能力是否已注册
    pub fn is_registered_qualified<T, Q>(&self) -> bool
    where
        T: Send + Sync + 'static,
        Q: Qualifier,
    {
        self.registry.contains(&ProvisionKey::of::<T, Q>())
    }

    /// 填充一个消费者
    ///
    /// 消费者的全部注入点在其构造函数中解析完成，返回时
    /// 不存在未初始化的字段窗口。
    pub fn populate<C>(&self) -> DependencyResult<C>
    where
        C: InjectionTarget,
    {
        debug!("填充消费者: {}", std::any::type_name::<C>());
        C::inject(self)
    }

    /// 获取所有已注册的提供者描述符
    pub fn descriptors(&self) -> Vec<ProviderDescriptor> {
        self.registry.descriptors()
    }
}

/// 可注入消费者 trait
///
/// 消费者通过构造函数接收解析完成的依赖。
pub trait InjectionTarget: Sized {
    /// 使用注入器解析依赖并构建消费者实例
    fn inject(injector: &Injector) -> DependencyResult<Self>;
}

/// 注入器构建器
///
/// 除模块列表外没有任何可配置参数。
pub struct InjectorBuilder {
    modules: Vec<Box<dyn ProvisionModule>>,
}

impl InjectorBuilder {
    /// 创建新的注入器构建器
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// 添加提供者模块
    pub fn add_module<M>(mut self, module: M) -> Self
    where
        M: ProvisionModule + 'static,
    {
        self.modules.push(Box::new(module));
        self
    }

    /// 构建注入器
    ///
    /// 依次装配所有模块，然后验证依赖图；不可解析的依赖图
    /// 在这里失败，而不是在消费者启动时。
    pub fn build(self) -> DependencyResult<Injector> {
        let mut registry = ProvisionRegistry::new();

        for module in &self.modules {
            info!("装配模块: {}", module.name());
            module.configure(&mut registry)?;
        }

        registry.validate_dependencies()?;

        info!("注入器构建完成，注册了 {} 个提供者", registry.len());
        Ok(Injector { registry })
    }
}

impl Default for InjectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
