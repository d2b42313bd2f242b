use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
  #[error(transparent)]
  Cmp(#[from] xsort_cmp::Error),

  /// Expression evaluation failed in the caller's context
  /// 调用方上下文中的表达式求值失败
  #[error("evaluation failed: {0}")]
  Eval(String),

  #[error("composite key holds {got} value(s), expected {expect}")]
  KeyCount { expect: usize, got: usize },
}
