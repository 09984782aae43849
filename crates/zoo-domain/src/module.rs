//! 动物模块装配
//!
//! 显式声明运行期提供者映射：每个限定符标签映射到满足它的
//! 策略实现，注入器构建时统一验证。

use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::debug;
use zoo_common::{DependencyError, DependencyResult, Lifetime, Unqualified};
use zoo_di_abstractions::{ProviderRegistration, ProvisionModule, RegistryBinder};
use zoo_di_impl::Injector;

use crate::action::{ActionHandle, Cat, Dog};
use crate::animal::Animal;
use crate::qualifiers::{CatAction, DogAction};

/// 动物提供者模块
///
/// 声明的映射共三条，注册后不再变更：
///
/// - `(ActionHandle, DogAction)` -> [`Dog`] 单例
/// - `(ActionHandle, CatAction)` -> [`Cat`] 单例
/// - `(Animal, 无限定符)` -> 瞬时工厂，构造时解析 `CatAction` 句柄
#[derive(Debug, Default)]
pub struct AnimalModule;

impl ProvisionModule for AnimalModule {
    fn name(&self) -> &'static str {
        "AnimalModule"
    }

    fn configure(&self, binder: &mut dyn RegistryBinder) -> Result<(), DependencyError> {
        binder.bind(ProviderRegistration::new::<ActionHandle, DogAction, _>(
            Lifetime::Singleton,
            |_| Ok(Arc::new(Dog) as ActionHandle),
        ))?;

        binder.bind(ProviderRegistration::new::<ActionHandle, CatAction, _>(
            Lifetime::Singleton,
            |_| Ok(Arc::new(Cat) as ActionHandle),
        ))?;

        binder.bind(
            ProviderRegistration::new::<Animal, Unqualified, _>(Lifetime::Transient, |source| {
                let action = source.provide::<ActionHandle, CatAction>()?;
                Ok(Animal::new(ActionHandle::clone(&action)))
            })
            .with_dependency::<ActionHandle, CatAction>(),
        )?;

        debug!("动物模块装配完成");
        Ok(())
    }
}

static SHARED_INJECTOR: OnceCell<Arc<Injector>> = OnceCell::new();

/// 进程级共享注入器
///
/// 注册表只读，因此注入器只初始化一次、不销毁；所有屏幕共享
/// 同一个根，而不是每个屏幕重建。
pub fn shared_injector() -> DependencyResult<Arc<Injector>> {
    SHARED_INJECTOR
        .get_or_try_init(|| {
            let injector = Injector::builder().add_module(AnimalModule).build()?;
            Ok(Arc::new(injector))
        })
        .map(Arc::clone)
}
