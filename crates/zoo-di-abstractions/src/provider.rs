//! 依赖解析抽象接口
//!
//! 提供按 (能力类型, 限定符) 键进行依赖解析的能力

use std::any::{Any, TypeId};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use zoo_common::{DependencyError, Qualifier, Unqualified};

/// 提供键
///
/// 由能力类型和限定符标签的 `TypeId` 组成；类型名称只用于
/// 日志和错误信息，不参与相等性比较。
#[derive(Debug, Clone, Copy)]
pub struct ProvisionKey {
    capability: TypeId,
    qualifier: TypeId,
    capability_name: &'static str,
    qualifier_name: &'static str,
}

impl ProvisionKey {
    /// 创建指定能力类型和限定符的键
    pub fn of<T, Q>() -> Self
    where
        T: Send + Sync + 'static,
        Q: Qualifier,
    {
        Self {
            capability: TypeId::of::<T>(),
            qualifier: TypeId::of::<Q>(),
            capability_name: std::any::type_name::<T>(),
            qualifier_name: Q::name(),
        }
    }

    /// 能力类型名称
    pub fn capability_name(&self) -> &'static str {
        self.capability_name
    }

    /// 限定符名称
    pub fn qualifier_name(&self) -> &'static str {
        self.qualifier_name
    }
}

impl PartialEq for ProvisionKey {
    fn eq(&self, other: &Self) -> bool {
        self.capability == other.capability && self.qualifier == other.qualifier
    }
}

impl Eq for ProvisionKey {}

impl Hash for ProvisionKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.capability.hash(state);
        self.qualifier.hash(state);
    }
}

impl std::fmt::Display for ProvisionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.capability_name, self.qualifier_name)
    }
}

/// 依赖解析 trait
///
/// 注册表实现此接口；提供者工厂通过它解析自己的依赖。
pub trait ProviderSource: Send + Sync {
    /// 按键解析类型擦除的实例
    fn provide_raw(
        &self,
        key: &ProvisionKey,
    ) -> Result<Arc<dyn Any + Send + Sync>, DependencyError>;

    /// 检查键是否已注册
    fn contains(&self, key: &ProvisionKey) -> bool;
}

impl dyn ProviderSource {
    /// 解析带限定符的能力实例
    pub fn provide<T, Q>(&self) -> Result<Arc<T>, DependencyError>
    where
        T: Send + Sync + 'static,
        Q: Qualifier,
    {
        let key = ProvisionKey::of::<T, Q>();
        let raw = self.provide_raw(&key)?;
        raw.downcast::<T>().map_err(|_| DependencyError::TypeMismatch {
            type_name: std::any::type_name::<T>().to_string(),
        })
    }

    /// 解析无限定符的能力实例
    pub fn provide_default<T>(&self) -> Result<Arc<T>, DependencyError>
    where
        T: Send + Sync + 'static,
    {
        self.provide::<T, Unqualified>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TagA;
    impl Qualifier for TagA {
        fn name() -> &'static str {
            "TagA"
        }
    }

    struct TagB;
    impl Qualifier for TagB {
        fn name() -> &'static str {
            "TagB"
        }
    }

    #[test]
    fn test_keys_compare_by_type_ids_only() {
        assert_eq!(ProvisionKey::of::<String, TagA>(), ProvisionKey::of::<String, TagA>());
        assert_ne!(ProvisionKey::of::<String, TagA>(), ProvisionKey::of::<String, TagB>());
        assert_ne!(ProvisionKey::of::<String, TagA>(), ProvisionKey::of::<u32, TagA>());
    }

    #[test]
    fn test_key_display_carries_both_names() {
        let key = ProvisionKey::of::<u32, TagA>();
        assert_eq!(key.to_string(), "u32 (TagA)");
    }
}
