//! # Zoo Domain
//!
//! 动物领域模型及其依赖注入装配。
//!
//! ## 核心组件
//!
//! - [`Action`] - 行为能力 trait，两个策略实现 [`Dog`] 和 [`Cat`]
//! - [`DogAction`] / [`CatAction`] - 消歧用的限定符标签
//! - [`Animal`] - 持有一个注入行为的复合实体
//! - [`AnimalModule`] - 限定符到策略实现的静态声明
//! - [`shared_injector`] - 进程级共享的注入器根

pub mod action;
pub mod animal;
pub mod module;
pub mod qualifiers;

pub use action::*;
pub use animal::*;
pub use module::*;
pub use qualifiers::*;
