//! 提供者注册表实现
//!
//! 注册表在注入器构建阶段一次性装配，之后运行期只读。
//! 单例实例在首次解析时创建并缓存，瞬时实例每次解析新建。

use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, info};
use zoo_common::{DependencyError, Lifetime, ProviderDescriptor};
use zoo_di_abstractions::{
    ProviderRegistration, ProviderSource, ProvisionKey, RegistryBinder,
};

/// 提供者注册表
pub struct ProvisionRegistry {
    /// 提供者注册信息
    registrations: HashMap<ProvisionKey, ProviderRegistration>,
    /// 已创建的单例实例
    singletons: DashMap<ProvisionKey, Arc<dyn Any + Send + Sync>>,
}

impl ProvisionRegistry {
    /// 创建空的注册表
    pub fn new() -> Self {
        Self {
            registrations: HashMap::new(),
            singletons: DashMap::new(),
        }
    }

    /// 已注册的提供者数量
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// 注册表是否为空
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// 获取所有已注册的提供者描述符
    pub fn descriptors(&self) -> Vec<ProviderDescriptor> {
        self.registrations
            .values()
            .map(|reg| reg.descriptor().clone())
            .collect()
    }

    /// 验证依赖关系
    ///
    /// 检查每个声明的依赖都有匹配的提供者，并用深度优先搜索
    /// 检测声明边上的循环依赖。
    pub fn validate_dependencies(&self) -> Result<(), DependencyError> {
        for registration in self.registrations.values() {
            for dependency in registration.dependencies() {
                if !self.registrations.contains_key(dependency) {
                    return Err(DependencyError::MissingDependency {
                        consumer: registration.key().to_string(),
                        dependency: dependency.to_string(),
                    });
                }
            }
        }

        let mut visited = HashSet::new();
        let mut path = Vec::new();
        for key in self.registrations.keys() {
            if !visited.contains(key) {
                self.dfs_check(key, &mut path, &mut visited)?;
            }
        }

        Ok(())
    }

    fn dfs_check(
        &self,
        current: &ProvisionKey,
        path: &mut Vec<ProvisionKey>,
        visited: &mut HashSet<ProvisionKey>,
    ) -> Result<(), DependencyError> {
        if path.contains(current) {
            let chain = path
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" -> ");

            return Err(DependencyError::CircularDependency {
                dependency_chain: format!("{} -> {}", chain, current),
            });
        }

        if visited.contains(current) {
            return Ok(());
        }

        path.push(*current);

        if let Some(registration) = self.registrations.get(current) {
            for dependency in registration.dependencies() {
                self.dfs_check(dependency, path, visited)?;
            }
        }

        path.pop();
        visited.insert(*current);

        Ok(())
    }
}

impl Default for ProvisionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBinder for ProvisionRegistry {
    fn bind(&mut self, registration: ProviderRegistration) -> Result<(), DependencyError> {
        let key = *registration.key();

        if self.registrations.contains_key(&key) {
            return Err(DependencyError::DuplicateProvider {
                capability: key.capability_name().to_string(),
                qualifier: key.qualifier_name().to_string(),
            });
        }

        info!("注册提供者: {}", key);
        self.registrations.insert(key, registration);

        Ok(())
    }
}

impl ProviderSource for ProvisionRegistry {
    fn provide_raw(
        &self,
        key: &ProvisionKey,
    ) -> Result<Arc<dyn Any + Send + Sync>, DependencyError> {
        let registration = self.registrations.get(key).ok_or_else(|| {
            DependencyError::ProviderNotRegistered {
                capability: key.capability_name().to_string(),
                qualifier: key.qualifier_name().to_string(),
            }
        })?;

        match registration.lifetime() {
            Lifetime::Singleton => {
                if let Some(instance) = self.singletons.get(key) {
                    return Ok(Arc::clone(instance.value()));
                }

                debug!("创建单例实例: {}", key);
                let instance = (registration.factory().as_ref())(self)?;
                self.singletons.insert(*key, Arc::clone(&instance));
                Ok(instance)
            }
            Lifetime::Transient => {
                debug!("创建瞬时实例: {}", key);
                (registration.factory().as_ref())(self)
            }
        }
    }

    fn contains(&self, key: &ProvisionKey) -> bool {
        self.registrations.contains_key(key)
    }
}
