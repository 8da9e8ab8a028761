//! 自定义断言辅助模块
//!
//! 提供测试中的常用断言函数

use std::collections::BTreeMap;

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    result.expect("操作应该成功")
}

/// 断言结果失败并匹配错误消息
pub fn assert_err_with<T: std::fmt::Debug, E: std::fmt::Display>(
    result: Result<T, E>,
    expected_msg: &str,
) {
    let err = result.expect_err("操作应该失败");
    let err_str = err.to_string();
    assert!(
        err_str.contains(expected_msg),
        "错误消息应包含 '{}', 实际是 '{}'",
        expected_msg,
        err_str
    );
}

/// 断言两组路径作为多重集合相等，不关心顺序
pub fn assert_same_paths(actual: &[Vec<i64>], expected: &[Vec<i64>]) {
    assert_eq!(
        multiset(actual),
        multiset(expected),
        "路径集合不匹配: 实际 {:?}, 期望 {:?}",
        actual,
        expected
    );
}

/// 断言路径是简单路径（没有重复顶点）
pub fn assert_simple_path(path: &[i64]) {
    let mut seen = path.to_vec();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), path.len(), "路径包含重复顶点: {:?}", path);
}

/// 浮点数近似相等
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "数值不匹配: 期望 {}, 实际 {}",
        expected,
        actual
    );
}

fn multiset(paths: &[Vec<i64>]) -> BTreeMap<Vec<i64>, usize> {
    let mut counts = BTreeMap::new();
    for path in paths {
        *counts.entry(path.clone()).or_insert(0) += 1;
    }
    counts
}
