//! 领域限定符标签
//!
//! 两个策略实现满足同一个 [`crate::Action`] 能力，注入点用
//! 这些标签声明需要哪一个。

use zoo_common::Qualifier;

/// 狗吠行为的限定符标签
#[derive(Debug, Default)]
pub struct DogAction;

impl Qualifier for DogAction {
    fn name() -> &'static str {
        "DogAction"
    }
}

/// 猫叫行为的限定符标签
#[derive(Debug, Default)]
pub struct CatAction;

impl Qualifier for CatAction {
    fn name() -> &'static str {
        "CatAction"
    }
}
