//! 屏幕导航
//!
//! 单线程同步模型：交互控件只把导航请求投递给导航器，
//! 应用驱动循环负责取出请求并启动目标屏幕。

use tracing::info;

/// 屏幕标识
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    /// 主屏幕
    Main,
    /// 第二屏幕
    Second,
}

/// 导航请求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationRequest {
    /// 目标屏幕
    pub target: ScreenId,
}

/// 导航器
///
/// 收集屏幕切换请求，没有其他副作用。
#[derive(Debug, Default)]
pub struct Navigator {
    pending: Vec<NavigationRequest>,
}

impl Navigator {
    /// 创建新的导航器
    pub fn new() -> Self {
        Self::default()
    }

    /// 投递一个到目标屏幕的导航请求
    pub fn navigate_to(&mut self, target: ScreenId) {
        info!("导航请求: {:?}", target);
        self.pending.push(NavigationRequest { target });
    }

    /// 取出所有待处理的导航请求
    pub fn take_requests(&mut self) -> Vec<NavigationRequest> {
        std::mem::take(&mut self.pending)
    }

    /// 待处理请求数量
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
