//! # 依赖注入具体实现
//!
//! 提供具体的提供者注册表和注入器根实现。
//!
//! - [`ProvisionRegistry`] - (能力类型, 限定符) 到工厂的静态映射
//! - [`Injector`] / [`InjectorBuilder`] - 单例对象图的根
//! - [`InjectionTarget`] - 通过构造函数注入填充的消费者

pub mod injector;
pub mod registry;

pub use injector::*;
pub use registry::*;
