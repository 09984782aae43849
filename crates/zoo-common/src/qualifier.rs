//! 限定符标签定义
//!
//! 当同一个能力存在多个提供者时，用限定符标签在编译期区分注入点。
//! 标签是零大小类型，运行期没有除类型标识之外的任何表示。

/// 限定符标签 trait
///
/// 每个标签是一个零大小的标记类型，`name` 仅用于日志和错误信息。
pub trait Qualifier: Send + Sync + 'static {
    /// 标签名称
    fn name() -> &'static str;
}

/// 默认限定符
///
/// 不需要消歧的注入点统一使用该标签。
#[derive(Debug, Default)]
pub struct Unqualified;

impl Qualifier for Unqualified {
    fn name() -> &'static str {
        "Unqualified"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unqualified_name() {
        assert_eq!(Unqualified::name(), "Unqualified");
    }
}
