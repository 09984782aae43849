//! 屏幕定义
//!
//! 两个消费者屏幕各声明两个同类型的注入点（`zoon` 和 `animal`），
//! 依赖在构造时解析完成，`on_start` 回调只做诊断日志。

use std::sync::Arc;

use tracing::info;
use zoo_common::DependencyResult;
use zoo_di_impl::{InjectionTarget, Injector};
use zoo_domain::Animal;

use crate::navigation::{Navigator, ScreenId};

/// 弹出一条简短的用户可见消息
pub fn toast(msg: &str) {
    info!(target: "toast", "{}", msg);
}

/// 屏幕生命周期 trait
pub trait Screen {
    /// 屏幕标识
    fn id(&self) -> ScreenId;

    /// 屏幕可见时的启动回调
    ///
    /// 调用时所有注入点都已填充完成。
    fn on_start(&mut self);
}

/// 主屏幕
///
/// 两个注入点独立解析，输出相同但不保证实例同一。
pub struct MainScreen {
    zoon: Arc<Animal>,
    animal: Arc<Animal>,
}

impl MainScreen {
    /// 注入点 `zoon`
    pub fn zoon(&self) -> &Animal {
        &self.zoon
    }

    /// 注入点 `animal`
    pub fn animal(&self) -> &Animal {
        &self.animal
    }

    /// 点击跳转按钮
    ///
    /// 向导航器投递一个到第二屏幕的请求，没有其他副作用。
    pub fn press_button(&self, navigator: &mut Navigator) {
        navigator.navigate_to(ScreenId::Second);
    }
}

impl InjectionTarget for MainScreen {
    fn inject(injector: &Injector) -> DependencyResult<Self> {
        Ok(Self {
            zoon: injector.resolve::<Animal>()?,
            animal: injector.resolve::<Animal>()?,
        })
    }
}

impl Screen for MainScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Main
    }

    fn on_start(&mut self) {
        info!("主屏幕启动");
        info!("animal = {:?}, 叫声: {}", self.animal, self.animal.call());
        info!("zoon = {:?}, 叫声: {}", self.zoon, self.zoon.call());
        toast("欢迎来到动物园");
    }
}

/// 第二屏幕
pub struct SecondScreen {
    zoon: Arc<Animal>,
    animal: Arc<Animal>,
}

impl SecondScreen {
    /// 注入点 `zoon`
    pub fn zoon(&self) -> &Animal {
        &self.zoon
    }

    /// 注入点 `animal`
    pub fn animal(&self) -> &Animal {
        &self.animal
    }
}

impl InjectionTarget for SecondScreen {
    fn inject(injector: &Injector) -> DependencyResult<Self> {
        Ok(Self {
            zoon: injector.resolve::<Animal>()?,
            animal: injector.resolve::<Animal>()?,
        })
    }
}

impl Screen for SecondScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Second
    }

    fn on_start(&mut self) {
        info!("第二屏幕启动");
        info!("animal = {:?}, 叫声: {}", self.animal, self.animal.call());
        info!("zoon = {:?}, 叫声: {}", self.zoon, self.zoon.call());
    }
}

#[cfg(test)]
mod tests {
    use zoo_domain::AnimalModule;

    use super::*;

    fn test_injector() -> Injector {
        Injector::builder().add_module(AnimalModule).build().unwrap()
    }

    #[test]
    fn test_main_screen_injection_points_are_populated() {
        let injector = test_injector();
        let screen = injector.populate::<MainScreen>().unwrap();

        // 两个注入点输出一致，但各自独立解析
        assert_eq!(screen.zoon().call(), "cat call");
        assert_eq!(screen.animal().call(), "cat call");
        assert!(!Arc::ptr_eq(&screen.zoon, &screen.animal));
    }

    #[test]
    fn test_second_screen_injection_points_are_populated() {
        let injector = test_injector();
        let screen = injector.populate::<SecondScreen>().unwrap();

        assert_eq!(screen.zoon().call(), "cat call");
        assert_eq!(screen.animal().call(), "cat call");
    }

    #[test]
    fn test_button_press_issues_single_navigation_request() {
        let injector = test_injector();
        let screen = injector.populate::<MainScreen>().unwrap();
        let mut navigator = Navigator::new();

        screen.press_button(&mut navigator);

        let requests = navigator.take_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].target, ScreenId::Second);
    }

    #[test]
    fn test_on_start_runs_after_population() {
        let injector = test_injector();
        let mut screen = injector.populate::<MainScreen>().unwrap();

        screen.on_start();
        assert_eq!(screen.id(), ScreenId::Main);
    }
}
