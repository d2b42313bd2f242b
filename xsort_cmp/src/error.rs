use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// Operand outside the comparator's domain
  /// 操作数不在比较器的值域内
  #[error("{cmp} comparer expects {expect}, got {got}")]
  Mismatch {
    cmp: &'static str,
    expect: &'static str,
    got: &'static str,
  },

  #[error("order must be ascending or descending, got {0:?}")]
  Order(String),

  #[error("data-type must be text, number, or a prefixed name, got {0:?}")]
  DataType(String),

  #[error("case-order must be lower-first or upper-first, got {0:?}")]
  CaseOrder(String),
}
