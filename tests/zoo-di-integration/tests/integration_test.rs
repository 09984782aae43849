//! 动物模块装配的端到端集成测试

use std::sync::Arc;

use zoo_common::DependencyResult;
use zoo_di_impl::{InjectionTarget, Injector};
use zoo_domain::{
    shared_injector, Action, ActionHandle, Animal, AnimalModule, Cat, CatAction, Dog, DogAction,
};

fn build_injector() -> Injector {
    Injector::builder()
        .add_module(AnimalModule)
        .build()
        .expect("动物模块装配失败")
}

#[test]
fn test_animal_always_uses_cat_strategy() {
    let injector = build_injector();

    // 标准路径构造的动物永远是猫叫，而不是狗吠
    for _ in 0..5 {
        let animal = injector.resolve::<Animal>().unwrap();
        assert_eq!(animal.call(), Cat.identify());
        assert_ne!(animal.call(), Dog.identify());
    }
}

#[test]
fn test_registry_is_total_and_deterministic_over_qualifiers() {
    let injector = build_injector();

    let dog_first = injector.resolve_qualified::<ActionHandle, DogAction>().unwrap();
    let dog_second = injector.resolve_qualified::<ActionHandle, DogAction>().unwrap();
    let cat_first = injector.resolve_qualified::<ActionHandle, CatAction>().unwrap();
    let cat_second = injector.resolve_qualified::<ActionHandle, CatAction>().unwrap();

    assert_eq!(dog_first.identify(), dog_second.identify());
    assert_eq!(cat_first.identify(), cat_second.identify());

    // 策略是无状态单例，重复解析返回同一实例
    assert!(Arc::ptr_eq(&dog_first, &dog_second));
    assert!(Arc::ptr_eq(&cat_first, &cat_second));
}

#[test]
fn test_strategy_variants_are_distinguishable() {
    let injector = build_injector();

    let dog = injector.resolve_qualified::<ActionHandle, DogAction>().unwrap();
    let cat = injector.resolve_qualified::<ActionHandle, CatAction>().unwrap();

    assert_ne!(dog.identify(), cat.identify());
}

#[test]
fn test_independent_injection_points_yield_equal_output() {
    let injector = build_injector();

    let first = injector.resolve::<Animal>().unwrap();
    let second = injector.resolve::<Animal>().unwrap();

    // 每个注入点独立解析，实例不同一但输出相等
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.call(), second.call());
}

/// 模拟消费者：声明两个同类型的注入点
struct MockConsumer {
    zoon: Arc<Animal>,
    animal: Arc<Animal>,
}

impl InjectionTarget for MockConsumer {
    fn inject(injector: &Injector) -> DependencyResult<Self> {
        Ok(Self {
            zoon: injector.resolve::<Animal>()?,
            animal: injector.resolve::<Animal>()?,
        })
    }
}

#[test]
fn test_mock_consumer_population_end_to_end() {
    let injector = build_injector();

    let consumer = injector.populate::<MockConsumer>().unwrap();

    assert_eq!(consumer.zoon.call(), "cat call");
    assert_eq!(consumer.animal.call(), "cat call");
}

#[test]
fn test_shared_injector_is_reused_across_consumers() {
    let first = shared_injector().unwrap();
    let second = shared_injector().unwrap();

    assert!(Arc::ptr_eq(&first, &second));

    let consumer = first.populate::<MockConsumer>().unwrap();
    assert_eq!(consumer.animal.call(), "cat call");
}

#[test]
fn test_injector_reports_registered_providers() {
    let injector = build_injector();

    let descriptors = injector.descriptors();
    assert_eq!(descriptors.len(), 3);

    let qualifiers: Vec<&str> = descriptors.iter().map(|d| d.qualifier.as_str()).collect();
    assert!(qualifiers.contains(&"DogAction"));
    assert!(qualifiers.contains(&"CatAction"));
    assert!(qualifiers.contains(&"Unqualified"));
}
