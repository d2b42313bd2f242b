use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  #[error(transparent)]
  Cmp(#[from] xsort_cmp::Error),

  /// Comparer can only change while the tree holds no entry
  /// 仅在树中无条目时可更换比较器
  #[error("comparer can not change on a non-empty tree")]
  NotEmpty,

  #[error("set is full ({0} slots)")]
  Full(usize),
}
