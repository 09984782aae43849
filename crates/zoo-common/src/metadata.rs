//! 元数据定义
//!
//! 提供提供者和类型的元数据信息

use std::any::TypeId;

/// 类型信息
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 类型名称
    pub name: String,
    /// 类型ID
    pub id: TypeId,
    /// 模块路径
    pub module_path: String,
}

impl TypeInfo {
    /// 从类型获取类型信息
    pub fn of<T: 'static>() -> Self {
        Self {
            name: std::any::type_name::<T>()
                .split("::")
                .last()
                .unwrap_or("Unknown")
                .to_string(),
            id: TypeId::of::<T>(),
            module_path: std::any::type_name::<T>().to_string(),
        }
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &str {
        self.name.split("::").last().unwrap_or(&self.name)
    }
}

/// 提供者生命周期类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lifetime {
    /// 单例模式 - 整个应用生命周期内只创建一个实例
    Singleton,
    /// 瞬时模式 - 每次解析都创建新实例
    #[default]
    Transient,
}

/// 提供者描述符
#[derive(Debug, Clone)]
pub struct ProviderDescriptor {
    /// 能力类型信息
    pub type_info: TypeInfo,
    /// 限定符名称
    pub qualifier: String,
    /// 提供者生命周期
    pub lifetime: Lifetime,
}

impl ProviderDescriptor {
    /// 创建新的提供者描述符
    pub fn new<T: 'static>(qualifier: impl Into<String>, lifetime: Lifetime) -> Self {
        Self {
            type_info: TypeInfo::of::<T>(),
            qualifier: qualifier.into(),
            lifetime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_info_short_name() {
        let info = TypeInfo::of::<Vec<u8>>();
        assert_eq!(info.id, TypeId::of::<Vec<u8>>());
        assert!(info.module_path.contains("Vec"));
    }

    #[test]
    fn test_default_lifetime_is_transient() {
        assert_eq!(Lifetime::default(), Lifetime::Transient);
    }
}
