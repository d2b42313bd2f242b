use crate::Result;

/// Evaluation context supplied by the caller
/// 调用方提供的求值上下文
///
/// Failures are reported as [`crate::Error::Eval`].
/// 失败以 [`crate::Error::Eval`] 报告。
pub trait Ctx {
  type Node;
  type Expr;

  /// String value of a sort-key expression for `node`
  /// 排序键表达式在 `node` 上的字符串值
  fn key(&self, expr: &Self::Expr, node: &Self::Node) -> Result<String>;

  /// Value of a dynamic configuration attribute
  /// 动态配置属性的值
  fn attr(&self, expr: &Self::Expr) -> Result<String>;
}
