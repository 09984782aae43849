//! 行为能力及其策略实现

use std::fmt::Debug;
use std::sync::Arc;

/// 行为能力 trait
///
/// 唯一的操作是产生一段短的识别字符串；无状态、确定、不会失败。
pub trait Action: Send + Sync + Debug {
    /// 产生识别字符串
    fn identify(&self) -> &'static str;
}

/// 共享的行为实例句柄
///
/// 能力以该句柄类型注册进注册表。
pub type ActionHandle = Arc<dyn Action>;

/// 狗吠策略
#[derive(Debug, Default)]
pub struct Dog;

impl Action for Dog {
    fn identify(&self) -> &'static str {
        "dog call"
    }
}

/// 猫叫策略
#[derive(Debug, Default)]
pub struct Cat;

impl Action for Cat {
    fn identify(&self) -> &'static str {
        "cat call"
    }
}
