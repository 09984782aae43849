//! 复合实体定义

use crate::action::ActionHandle;

/// 动物复合实体
///
/// 构造时绑定一个行为实例，之后不可变；`call` 原样转发
/// 所持行为的识别结果。
#[derive(Debug, Clone)]
pub struct Animal {
    action: ActionHandle,
}

impl Animal {
    /// 使用给定行为创建动物实例
    pub fn new(action: ActionHandle) -> Self {
        Self { action }
    }

    /// 发出叫声
    pub fn call(&self) -> &'static str {
        self.action.identify()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::action::{Cat, Dog};

    #[test]
    fn test_animal_forwards_to_held_action() {
        let cat_animal = Animal::new(Arc::new(Cat));
        assert_eq!(cat_animal.call(), "cat call");

        let dog_animal = Animal::new(Arc::new(Dog));
        assert_eq!(dog_animal.call(), "dog call");
    }
}
